use crate::models::{Coordinate, RiderProfile, ScoringWeights};

/// Calculate how relevant `candidate` is for `viewer` with the default bonus table
///
/// Scoring table (points are additive across features, at most one bonus
/// per feature):
/// ```text
/// ride type     same                        +20
/// skill level   same / adjacent             +15 / +5
/// city          same (case-sensitive)       +20
/// age           |Δ| ≤ 5 / ≤ 10              +10 / +5
/// location      < 10 / < 50 / < 100 km      +20 / +10 / +5
/// bio           candidate has one           +5
/// photos        candidate has at least one  +10
/// ```
/// With the default table a perfect match lands on exactly 100. The sum is
/// never clamped, so a custom table may go above it.
pub fn calculate_match_score(
    viewer: &RiderProfile,
    candidate: &RiderProfile,
    viewer_location: Option<Coordinate>,
) -> u32 {
    calculate_weighted_score(viewer, candidate, viewer_location, &ScoringWeights::default())
}

/// Same as [`calculate_match_score`] with a custom bonus table
pub fn calculate_weighted_score(
    viewer: &RiderProfile,
    candidate: &RiderProfile,
    viewer_location: Option<Coordinate>,
    weights: &ScoringWeights,
) -> u32 {
    let mut score = 0;

    if let (Some(a), Some(b)) = (viewer.ride_type, candidate.ride_type) {
        if a == b {
            score += weights.same_ride_type;
        }
    }

    if let (Some(a), Some(b)) = (viewer.skill_level, candidate.skill_level) {
        score += match a.steps_to(b) {
            0 => weights.same_level,
            1 => weights.adjacent_level,
            _ => 0,
        };
    }

    if let (Some(a), Some(b)) = (viewer.city(), candidate.city()) {
        if a == b {
            score += weights.same_city;
        }
    }

    if let (Some(a), Some(b)) = (viewer.age(), candidate.age()) {
        score += age_bonus(a.abs_diff(b), weights);
    }

    if let (Some(origin), Some(location)) = (viewer_location, candidate.location) {
        score += location_bonus(origin.distance_to(&location), weights);
    }

    if candidate.has_about() {
        score += weights.has_about;
    }

    if candidate.has_photos() {
        score += weights.has_photos;
    }

    score
}

/// Bonus for an age gap in years
#[inline]
pub fn age_bonus(age_gap: u8, weights: &ScoringWeights) -> u32 {
    match age_gap {
        0..=5 => weights.close_age,
        6..=10 => weights.near_age,
        _ => 0,
    }
}

/// Bonus for a distance between riders
///
/// Bands are lower-inclusive: exactly 10 km already falls in the 10–50 band.
#[inline]
pub fn location_bonus(distance_km: f64, weights: &ScoringWeights) -> u32 {
    if distance_km < 10.0 {
        weights.within_10_km
    } else if distance_km < 50.0 {
        weights.within_50_km
    } else if distance_km < 100.0 {
        weights.within_100_km
    } else {
        0
    }
}
