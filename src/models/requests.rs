use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Coordinate, Exclusions, RideEvent, RiderProfile, SearchFilters};

/// Request for the resorts closest to a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyResortsRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request for the SOS contact list; location is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RescueRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl RescueRequest {
    /// Location, only when both halves were sent
    pub fn location(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }
}

/// Request to score a single candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub viewer: RiderProfile,
    pub candidate: RiderProfile,
    #[serde(rename = "viewerLocation", default)]
    pub viewer_location: Option<Coordinate>,
}

/// Request to rank candidates and open a browsing session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartBrowsingRequest {
    pub viewer: RiderProfile,
    #[serde(rename = "viewerLocation", default)]
    pub viewer_location: Option<Coordinate>,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub profiles: Vec<RiderProfile>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub events: Vec<RideEvent>,
    #[serde(rename = "likedUserIds", default)]
    pub liked_user_ids: Vec<i64>,
    #[serde(rename = "blockedUserIds", default)]
    pub blocked_user_ids: Vec<i64>,
    #[serde(default)]
    pub filters: SearchFilters,
}

impl StartBrowsingRequest {
    pub fn exclusions(&self) -> Exclusions {
        Exclusions {
            liked: self.liked_user_ids.iter().copied().collect(),
            blocked: self.blocked_user_ids.iter().copied().collect(),
        }
    }
}

/// Request for the next candidate in a browsing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextCandidateRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
}
