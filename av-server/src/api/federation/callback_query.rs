use serde::Deserialize;

/// Query string of the provider redirect back to us
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: String,
}
