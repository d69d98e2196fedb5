use serde::Serialize;

/// Acknowledgment body for DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}
