/// Federated profile as reconciliation sees it: provider user id, email,
/// optional display name. Everything else the provider returns is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedProfile {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
}
