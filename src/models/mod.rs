// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, CandidateKind, Coordinate, Exclusions, Gender, Label, MatchCandidate, Resort,
    RideEvent, RideType, RiderProfile, ScoringWeights, SearchFilters, SkiQuery, SkiSize,
    SkiStyle, SkillLevel, SnowboardQuery, SnowboardSize, SnowboardStyle, TurnRadius, WaistWidth,
};
pub use requests::{NearbyResortsRequest, NextCandidateRequest, RescueRequest, ScoreRequest, StartBrowsingRequest};
pub use responses::{
    BrowsingStartedResponse, ErrorResponse, HealthResponse, NearbyResort, NextCandidateResponse,
    RescueResponse, ScoreResponse,
};
