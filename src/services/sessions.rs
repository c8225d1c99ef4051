use crate::config::SessionSettings;
use crate::core::BrowsingSession;
use crate::models::MatchCandidate;
use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use std::future;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur with browsing sessions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No browsing session for user {0}")]
    NotFound(i64),
}

#[derive(Debug, Clone)]
struct StoredSession {
    id: Uuid,
    session: BrowsingSession,
}

/// Outcome of moving a session forward by one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStep {
    pub candidate: Option<MatchCandidate>,
    pub remaining: usize,
    pub exhausted: bool,
}

/// Per-user browsing sessions kept in memory
///
/// Sessions expire after the configured idle time. Every write goes through
/// the cache's per-key compute, so operations on one user are serialized:
/// an advance never brings back a removed session or overwrites a newer one.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<i64, StoredSession>,
}

impl SessionStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(capacity)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(settings.capacity, settings.ttl_secs)
    }

    /// Store a session for `user_id`, replacing any previous one
    pub async fn start(&self, user_id: i64, session: BrowsingSession) -> Uuid {
        let id = Uuid::new_v4();
        tracing::debug!(
            "Starting browsing session {} for user {} ({} candidates)",
            id,
            user_id,
            session.total()
        );

        let stored = StoredSession { id, session };
        self.sessions
            .entry(user_id)
            .and_compute_with(|_| future::ready(Op::Put(stored)))
            .await;
        id
    }

    /// Hand out the next candidate for `user_id`
    pub async fn advance(&self, user_id: i64) -> Result<SessionStep, SessionError> {
        let mut step = None;

        self.sessions
            .entry(user_id)
            .and_compute_with(|entry| {
                let op = match entry {
                    Some(entry) => {
                        let mut stored = entry.into_value();
                        let candidate = stored.session.advance();
                        step = Some(SessionStep {
                            candidate,
                            remaining: stored.session.remaining(),
                            exhausted: stored.session.is_exhausted(),
                        });
                        Op::Put(stored)
                    }
                    None => Op::Nop,
                };
                future::ready(op)
            })
            .await;

        step.ok_or(SessionError::NotFound(user_id))
    }

    /// Id of the live session for `user_id`
    pub async fn session_id(&self, user_id: i64) -> Option<Uuid> {
        self.sessions.get(&user_id).await.map(|stored| stored.id)
    }

    /// End the session for `user_id`; returns whether one existed
    pub async fn remove(&self, user_id: i64) -> bool {
        let result = self
            .sessions
            .entry(user_id)
            .and_compute_with(|entry| {
                future::ready(if entry.is_some() { Op::Remove } else { Op::Nop })
            })
            .await;

        matches!(result, CompResult::Removed(_))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::from_settings(&SessionSettings::default())
    }
}
