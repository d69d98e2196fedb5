//! Maps a federated profile onto a local identity, creating one if absent.

use crate::{FederatedProfile, FederationError, Result as FederationResult};

use av_core::{Identity, IdentityStore, StoreError};

use std::sync::Arc;

use log::{info, warn};

pub struct IdentityReconciler {
    store: Arc<dyn IdentityStore>,
}

impl IdentityReconciler {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Resolve a federated profile to a local identity.
    ///
    /// Matching rule, in order:
    /// 1. `federated_id` hit: return it unchanged. Federation is the
    ///    authoritative match once established; a changed display name on
    ///    the provider side does not rewrite the local record here.
    /// 2. `email` hit: the profile's email belongs to an account that is
    ///    not linked to this federated id. The provider's email claim is
    ///    unverified from our point of view, so silently attaching the
    ///    federated id would hand that account to whoever controls the
    ///    provider login. Refused with [`FederationError::EmailConflict`].
    /// 3. No hit: create a fresh identity with an unusable placeholder
    ///    password hash.
    ///
    /// Idempotent per federated id. A concurrent creation race is settled
    /// by the store's unique constraints: the loser re-fetches and returns
    /// the winner.
    pub async fn reconcile(&self, profile: &FederatedProfile) -> FederationResult<Identity> {
        if let Some(existing) = self.store.find_by_federated_id(&profile.id).await? {
            return Ok(existing);
        }

        if let Some(local) = self.store.find_by_email(&profile.email).await? {
            warn!(
                "Federated login for provider id {} matches existing identity {} by email; refusing silent link",
                profile.id, local.id
            );
            return Err(FederationError::email_conflict());
        }

        let placeholder = av_auth::generate_placeholder_hash()?;
        let identity = Identity::new_federated(
            profile.id.clone(),
            profile.email.clone(),
            profile.display_name.clone(),
            placeholder,
        );

        match self.store.insert(&identity).await {
            Ok(()) => {
                info!(
                    "Created identity {} for federated provider id {}",
                    identity.id, profile.id
                );
                Ok(identity)
            }
            Err(StoreError::Duplicate { field, .. }) => {
                // Lost a creation race; the winner's row is authoritative
                if let Some(winner) = self.store.find_by_federated_id(&profile.id).await? {
                    return Ok(winner);
                }
                // The duplicate was on email: same conflict as above
                if field == "email" {
                    return Err(FederationError::email_conflict());
                }
                Err(StoreError::backend(
                    "identity vanished after duplicate insert".to_string(),
                )
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
