use crate::models::MatchCandidate;
use serde::Serialize;

/// Where a browsing session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SessionState {
    /// No candidate list has been built yet
    Idle,
    /// `cursor` points at the next candidate to show
    Browsing { cursor: usize },
    /// Every candidate has been shown
    Exhausted,
}

/// One pass over a ranked candidate list
///
/// `Idle → Browsing(0) → … → Exhausted`. The only way back to `Browsing`
/// is [`BrowsingSession::start`] with a freshly ranked list.
#[derive(Debug, Clone, Default)]
pub struct BrowsingSession {
    candidates: Vec<MatchCandidate>,
    cursor: usize,
    started: bool,
}

impl BrowsingSession {
    /// Begin browsing a new list, discarding whatever came before
    pub fn start(candidates: Vec<MatchCandidate>) -> Self {
        Self {
            candidates,
            cursor: 0,
            started: true,
        }
    }

    pub fn state(&self) -> SessionState {
        if !self.started {
            SessionState::Idle
        } else if self.cursor >= self.candidates.len() {
            SessionState::Exhausted
        } else {
            SessionState::Browsing { cursor: self.cursor }
        }
    }

    /// Hand out the candidate under the cursor and move past it
    ///
    /// Returns `None` once the list is used up (and on an idle session);
    /// calling it again is harmless.
    pub fn advance(&mut self) -> Option<MatchCandidate> {
        let candidate = self.candidates.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(candidate)
    }

    /// Candidate the next `advance` would return, without moving
    pub fn peek(&self) -> Option<&MatchCandidate> {
        self.candidates.get(self.cursor)
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.cursor)
    }

    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == SessionState::Exhausted
    }
}

impl Iterator for BrowsingSession {
    type Item = MatchCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
