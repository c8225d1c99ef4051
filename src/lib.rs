//! Slope Buddy - matching and resort service for a ski/snowboard buddy bot
//!
//! This library provides the rider matching, equipment sizing and resort
//! lookup logic behind the chat bot. The chat transport itself lives elsewhere.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    calculate_match_score, calculate_ski_size, calculate_snowboard_size, haversine_distance,
    sort_by_distance, BrowsingSession, Matcher, SearchContext,
};
pub use models::{Coordinate, MatchCandidate, Resort, RideEvent, RiderProfile, ScoringWeights};
pub use services::{ResortCatalog, SessionStore, WeatherClient};
