pub mod identities;
pub mod identity_response;
pub mod register_request;
