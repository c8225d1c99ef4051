// Core algorithm exports
pub mod distance;
pub mod equipment;
pub mod filters;
pub mod matcher;
pub mod rescue;
pub mod scoring;
pub mod session;

pub use distance::{haversine_distance, sort_by_distance, calculate_bounding_box, is_within_bounding_box, Located};
pub use equipment::{calculate_snowboard_size, calculate_ski_size};
pub use filters::{is_visible_profile, matches_search_filters, is_eligible_event};
pub use matcher::{Matcher, MatchResult, SearchContext};
pub use rescue::{rescue_contacts, RescueContact, RescueSettings, EMERGENCY_NUMBER};
pub use scoring::{calculate_match_score, calculate_weighted_score};
pub use session::{BrowsingSession, SessionState};
