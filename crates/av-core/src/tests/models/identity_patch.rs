use crate::IdentityPatch;

#[test]
fn test_patch_default_is_empty() {
    let patch = IdentityPatch::default();
    assert!(patch.is_empty());
}

#[test]
fn test_patch_with_field_is_not_empty() {
    let patch = IdentityPatch {
        display_name: Some("New Name".to_string()),
        is_superuser: None,
    };
    assert!(!patch.is_empty());

    let patch = IdentityPatch {
        display_name: None,
        is_superuser: Some(true),
    };
    assert!(!patch.is_empty());
}
