//! Per-session UI context.
//!
//! Which page a user is on and which ticket they are reviewing is transient
//! presentation state. It lives here, keyed by the client's session id, and
//! never reaches the database.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use chamados_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// The view a session is currently on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Dashboard,
    NewProject,
    NewTicket,
    Tickets,
    Review,
}

/// Transient UI state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub active_page: Page,
    pub selected_ticket_id: Option<DbId>,
}

struct SessionEntry {
    context: SessionContext,
    last_seen: Instant,
}

/// In-memory session contexts.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Sessions idle for longer than the
/// configured timeout are dropped on the next write.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Current context for `session_id`, or the default for a new or expired
    /// session. Reading a live session counts as activity.
    pub async fn get(&self, session_id: &str) -> SessionContext {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session_id) {
            Some(entry) if entry.last_seen.elapsed() <= self.idle_timeout => {
                entry.last_seen = Instant::now();
                entry.context.clone()
            }
            _ => SessionContext::default(),
        }
    }

    /// Apply `change` to the session's context and return the result.
    pub async fn update<F>(&self, session_id: &str, change: F) -> SessionContext
    where
        F: FnOnce(&mut SessionContext),
    {
        let mut sessions = self.sessions.write().await;
        let idle_timeout = self.idle_timeout;
        sessions.retain(|_, entry| entry.last_seen.elapsed() <= idle_timeout);

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                context: SessionContext::default(),
                last_seen: Instant::now(),
            });
        change(&mut entry.context);
        entry.last_seen = Instant::now();
        entry.context.clone()
    }

    /// Forget the selected ticket, e.g. after it could not be found.
    pub async fn clear_selection(&self, session_id: &str) -> SessionContext {
        self.update(session_id, |ctx| {
            ctx.selected_ticket_id = None;
            if ctx.active_page == Page::Review {
                ctx.active_page = Page::Tickets;
            }
        })
        .await
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
