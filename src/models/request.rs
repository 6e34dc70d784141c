use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw navigation payload as it arrives on the wire. Coordinates are
/// loosely-typed integer arrays (`[x, y]`); the validator checks their
/// shape and lowers them into typed domain values.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HooverRequest {
    /// Room dimensions as `[width, height]`.
    pub room_size: Vec<i32>,
    /// Initial hoover position as `[x, y]`.
    pub coords: Vec<i32>,
    /// Dirt patch positions, each as `[x, y]`. Duplicates collapse.
    pub patches: Vec<Vec<i32>>,
    /// Movement instructions over the alphabet N, E, S, W.
    pub instructions: String,
}

/// Successful navigation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HooverResponse {
    /// Final hoover position as `[x, y]`.
    pub coords: Vec<i32>,
    /// Number of distinct dirt patches cleaned during the run.
    pub patches: usize,
}

/// Structured rejection payload returned for every validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short error category, e.g. "Invalid Room Size".
    pub error: String,
    pub message: String,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            timestamp: Utc::now(),
        }
    }
}
