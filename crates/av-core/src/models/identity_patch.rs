use serde::Deserialize;

/// Partial update for an identity. Every field is optional; absent fields
/// are left untouched by the store. The mapping from patch to UPDATE is
/// exhaustive over these fields, so adding one is a compile-visible change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityPatch {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
}

impl IdentityPatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.is_superuser.is_none()
    }
}
