pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, refresh},
        login_request::LoginRequest,
        token_response::TokenResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_identity::CurrentIdentity, superuser::Superuser},
    federation::{
        authorize_response::AuthorizeResponse,
        callback_query::CallbackQuery,
        federation::{federated_callback, federated_login},
    },
    files::{
        audio_file_list_response::AudioFileListResponse,
        audio_file_response::AudioFileResponse,
        files::{list_files, upload_file},
    },
    identities::{
        identities::{delete_identity, me, register, update_me},
        identity_response::IdentityResponse,
        register_request::RegisterRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
