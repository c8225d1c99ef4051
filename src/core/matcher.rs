use crate::models::{
    CandidateKind, Coordinate, Exclusions, MatchCandidate, RideEvent, RiderProfile,
    ScoringWeights, SearchFilters,
};
use crate::core::{
    filters::{is_eligible_event, is_visible_profile, matches_search_filters},
    scoring::calculate_weighted_score,
    session::BrowsingSession,
};

/// Profiles scored per search, taken in discovery order
pub const DEFAULT_MAX_PROFILES: usize = 100;

/// Fixed relevance of an event, mid-table for the profile scores
pub const DEFAULT_EVENT_SCORE: u32 = 50;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub candidates: Vec<MatchCandidate>,
    pub total_profiles: usize,
    pub total_events: usize,
}

/// Everything the viewer brings to one search
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub viewer: &'a RiderProfile,
    pub viewer_location: Option<Coordinate>,
    pub exclusions: &'a Exclusions,
    pub filters: &'a SearchFilters,
}

/// Candidate ranking orchestrator
///
/// # Pipeline Stages
/// 1. Drop self, liked and blocked riders
/// 2. Apply the ride type / skill level search filters
/// 3. Score the first `max_profiles` survivors
/// 4. Add eligible events at a fixed score
/// 5. Stable sort by score, highest first
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_profiles: usize,
    event_score: u32,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, max_profiles: usize, event_score: u32) -> Self {
        Self {
            weights,
            max_profiles,
            event_score,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MAX_PROFILES, DEFAULT_EVENT_SCORE)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate with this matcher's weights
    pub fn score(
        &self,
        viewer: &RiderProfile,
        candidate: &RiderProfile,
        viewer_location: Option<Coordinate>,
    ) -> u32 {
        calculate_weighted_score(viewer, candidate, viewer_location, &self.weights)
    }

    /// Rank profiles and events for the viewer
    ///
    /// Profiles come before events in discovery order, so among equal
    /// scores profiles are shown first and each group keeps its input order.
    pub fn rank(
        &self,
        context: SearchContext<'_>,
        profiles: &[RiderProfile],
        events: &[RideEvent],
    ) -> MatchResult {
        let viewer_id = context.viewer.user_id;

        let mut candidates: Vec<MatchCandidate> = profiles
            .iter()
            .filter(|profile| is_visible_profile(viewer_id, profile, context.exclusions))
            .filter(|profile| matches_search_filters(profile, context.filters))
            .take(self.max_profiles)
            .map(|profile| MatchCandidate {
                kind: CandidateKind::Profile {
                    user_id: profile.user_id,
                },
                score: calculate_weighted_score(
                    context.viewer,
                    profile,
                    context.viewer_location,
                    &self.weights,
                ),
            })
            .collect();

        candidates.extend(
            events
                .iter()
                .filter(|event| is_eligible_event(viewer_id, event, context.exclusions))
                .map(|event| MatchCandidate {
                    kind: CandidateKind::Event { event_id: event.id },
                    score: self.event_score,
                }),
        );

        // sort_by is stable: ties keep discovery order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Ranked {} candidates for user {} ({} profiles, {} events offered)",
            candidates.len(),
            viewer_id,
            profiles.len(),
            events.len()
        );

        MatchResult {
            candidates,
            total_profiles: profiles.len(),
            total_events: events.len(),
        }
    }

    /// Rank and open a browsing session over the result
    pub fn start_session(
        &self,
        context: SearchContext<'_>,
        profiles: &[RiderProfile],
        events: &[RideEvent],
    ) -> BrowsingSession {
        BrowsingSession::start(self.rank(context, profiles, events).candidates)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
