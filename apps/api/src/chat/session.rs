//! Session Store — in-memory map from session id to conversation history.
//!
//! Sessions are pruned opportunistically (before each question), never by a
//! background timer. An expired or deleted id behaves exactly like an id that
//! was never seen.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::conversation::{ConversationTurn, SessionRecord};

/// Default idle time before a session becomes eligible for removal.
pub const DEFAULT_SESSION_TTL_SECS: u32 = 3600;

// ────────────────────────────────────────────────────────────────────────────
// Clock
// ────────────────────────────────────────────────────────────────────────────

/// Time source for the store. Swapped for a manual clock in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

/// Owns every `SessionRecord` in the process.
///
/// All operations take the single map lock for their whole critical section,
/// so concurrent requests on one session cannot lose a turn or a
/// `last_active` refresh.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            ttl,
        }
    }

    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(Arc::new(SystemClock), ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the live history for `session_id`, creating an empty session
    /// when the id is absent, unknown, or expired. Refreshes `last_active`.
    pub fn resolve_or_create(&self, session_id: Option<String>) -> (String, Vec<ConversationTurn>) {
        let now = self.clock.now();
        let mut sessions = self.lock();

        let id = match session_id {
            Some(id) => id,
            None => loop {
                let candidate = Uuid::new_v4().to_string();
                if !sessions.contains_key(&candidate) {
                    break candidate;
                }
            },
        };

        // A record that outlived the TTL but has not been swept yet is treated
        // as gone.
        let stale = sessions
            .get(&id)
            .is_some_and(|record| now - record.last_active > self.ttl);
        if stale {
            debug!("Session {id} expired before reuse; starting fresh");
            sessions.remove(&id);
        }

        let record = sessions.entry(id).or_insert_with_key(|id| {
            debug!("Creating session {id}");
            SessionRecord::new(id.clone(), now)
        });
        record.last_active = now;

        (record.id.clone(), record.turns.clone())
    }

    /// Appends one turn. Returns `false` (and does nothing) when the session
    /// disappeared between resolve and append.
    pub fn append(&self, session_id: &str, question: &str, answer: &str) -> bool {
        let now = self.clock.now();
        let mut sessions = self.lock();
        match sessions.get_mut(session_id) {
            Some(record) => {
                record.turns.push(ConversationTurn::new(question, answer));
                record.last_active = now;
                true
            }
            None => false,
        }
    }

    /// Removes every session idle for longer than `ttl` as of `now`.
    pub fn expire_idle(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, record| now - record.last_active <= ttl);
        let removed = before - sessions.len();
        if removed > 0 {
            info!("Expired {removed} idle session(s)");
        }
        removed
    }

    /// Sweeps idle sessions using the store's own clock and TTL.
    pub fn prune(&self) -> usize {
        self.expire_idle(self.clock.now(), self.ttl)
    }

    pub fn delete(&self, session_id: &str) -> bool {
        let existed = self.lock().remove(session_id).is_some();
        if existed {
            debug!("Deleted session {session_id}");
        }
        existed
    }

    /// Snapshot of a session's history, if it exists. Does not touch `last_active`.
    pub fn history(&self, session_id: &str) -> Option<Vec<ConversationTurn>> {
        self.lock().get(session_id).map(|record| record.turns.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionRecord>> {
        // The map holds no cross-entry invariants, so a poisoned lock is still usable.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
