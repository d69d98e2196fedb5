pub mod client;
pub mod error;
pub mod profile;
pub mod provider_config;
pub mod reconciler;

pub use client::{FederationClient, ProviderToken};
pub use error::{FederationError, Result};
pub use profile::FederatedProfile;
pub use provider_config::ProviderConfig;
pub use reconciler::IdentityReconciler;

#[cfg(test)]
mod tests;
