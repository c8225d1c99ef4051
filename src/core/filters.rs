use crate::models::{Exclusions, RideEvent, RiderProfile, SearchFilters};

/// Check if a profile may be shown to the viewer at all
///
/// The viewer never sees themselves, riders they already liked, or riders
/// they blocked.
#[inline]
pub fn is_visible_profile(
    viewer_id: i64,
    profile: &RiderProfile,
    exclusions: &Exclusions,
) -> bool {
    profile.user_id != viewer_id
        && !exclusions.liked.contains(&profile.user_id)
        && !exclusions.blocked.contains(&profile.user_id)
}

/// Check if a profile passes the viewer's optional search filters
///
/// An unset filter lets everything through. A set filter rejects profiles
/// that leave the field empty.
#[inline]
pub fn matches_search_filters(profile: &RiderProfile, filters: &SearchFilters) -> bool {
    if let Some(ride_type) = filters.ride_type {
        if profile.ride_type != Some(ride_type) {
            return false;
        }
    }

    if let Some(level) = filters.skill_level {
        if profile.skill_level != Some(level) {
            return false;
        }
    }

    true
}

/// Check if an event should be offered to the viewer
#[inline]
pub fn is_eligible_event(viewer_id: i64, event: &RideEvent, exclusions: &Exclusions) -> bool {
    event.is_active
        && event.creator_id != viewer_id
        && !exclusions.blocked.contains(&event.creator_id)
}
