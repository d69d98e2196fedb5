use crate::{Identity, IdentityDto};

#[test]
fn test_identity_new_local() {
    let identity = Identity::new_local(
        "a@x.com".to_string(),
        Some("Alice".to_string()),
        "$argon2id$stub".to_string(),
    );

    assert_eq!(identity.email, "a@x.com");
    assert_eq!(identity.display_name.as_deref(), Some("Alice"));
    assert!(identity.password_hash.is_some());
    assert!(identity.federated_id.is_none());
    assert!(!identity.is_superuser);
    assert!(!identity.is_federated());
}

#[test]
fn test_identity_new_federated() {
    let identity = Identity::new_federated(
        "fid-1".to_string(),
        "b@x.com".to_string(),
        None,
        "$argon2id$placeholder".to_string(),
    );

    assert_eq!(identity.federated_id.as_deref(), Some("fid-1"));
    assert!(identity.is_federated());
    assert!(!identity.is_superuser);
}

#[test]
fn test_identity_dto_never_exposes_password_hash() {
    let identity = Identity::new_local("a@x.com".to_string(), None, "$argon2id$stub".to_string());
    let dto = IdentityDto::from(identity.clone());

    let json = serde_json::to_string(&dto).unwrap();
    assert!(!json.contains("argon2"));
    assert_eq!(dto.id, identity.id.to_string());
    assert!(!dto.federated);
}
