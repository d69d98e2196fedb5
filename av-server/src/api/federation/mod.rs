pub mod authorize_response;
pub mod callback_query;
pub mod federation;
