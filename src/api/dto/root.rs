//! DTO for the service root endpoint.

use serde::Serialize;

/// Service description plus the running version.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    pub info: String,
    pub version: String,
}
