use av_core::Identity;

/// A local identity with a stub (but well-formed-enough) password hash
pub fn local_identity(email: &str) -> Identity {
    Identity::new_local(
        email.to_string(),
        Some("Test User".to_string()),
        "$argon2id$v=19$m=19456,t=2,p=1$c3R1YnNhbHQ$c3R1YmRpZ2VzdA".to_string(),
    )
}

/// A federated identity with a placeholder hash
pub fn federated_identity(federated_id: &str, email: &str) -> Identity {
    Identity::new_federated(
        federated_id.to_string(),
        email.to_string(),
        Some("Federated User".to_string()),
        "$argon2id$v=19$m=19456,t=2,p=1$cGxhY2Vob2xkZXI$cGxhY2Vob2xkZXI".to_string(),
    )
}
