pub mod auth;
pub mod login_request;
pub mod token_response;
