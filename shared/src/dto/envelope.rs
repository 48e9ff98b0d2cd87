use serde::{Deserialize, Serialize};

/// Standard response wrapper: `{ success, data?, message? }`.
///
/// Failure bodies from the backend carry `success: false` and a `message`;
/// some older handlers use `error` instead, which is accepted as an alias.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, alias = "error", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Bare error body used when a handler bails out before building an envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}
