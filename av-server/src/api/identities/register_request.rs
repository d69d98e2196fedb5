use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,

    #[serde(default)]
    pub display_name: Option<String>,
}
