use serde::{Deserialize, Serialize};
use crate::core::RescueContact;
use crate::models::domain::{MatchCandidate, Resort};

/// Resort with its distance from the requester
#[derive(Debug, Clone, Serialize)]
pub struct NearbyResort {
    #[serde(flatten)]
    pub resort: Resort,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// Response for the SOS endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RescueResponse {
    #[serde(rename = "emergencyNumber")]
    pub emergency_number: &'static str,
    pub contacts: Vec<RescueContact>,
}

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u32,
}

/// Response after a browsing session was opened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowsingStartedResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub total: usize,
}

/// Response with the next candidate, if any is left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextCandidateResponse {
    pub candidate: Option<MatchCandidate>,
    pub remaining: usize,
    pub exhausted: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
