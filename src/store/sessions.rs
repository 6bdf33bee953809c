// src/store/sessions.rs

//! Opaque session tokens bound to usernames, with expiry.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
struct Session {
    username: String,
    expires_at: DateTime<Utc>,
}

/// In-memory token <-> username map.
///
/// Tokens are unguessable digests, not signed claims; the map is the
/// source of truth. Expired entries are evicted on lookup.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
    counter: AtomicU64,
}

impl SessionStore {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            sessions: RwLock::new(HashMap::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// Issue a fresh token for a logged-in user.
    pub fn create(&self, username: &str) -> String {
        let nonce = self.counter.fetch_add(1, Ordering::Relaxed);
        let mut hasher = Sha256::new();
        hasher.update(username.as_bytes());
        hasher.update(Utc::now().timestamp_nanos_opt().unwrap_or(0).to_le_bytes());
        hasher.update(nonce.to_le_bytes());
        let token = hex::encode(hasher.finalize());

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                expires_at: Utc::now() + self.ttl,
            },
        );
        token
    }

    /// Resolve a token to its username, evicting it if expired.
    pub fn resolve(&self, token: &str) -> Option<String> {
        {
            let sessions = self.sessions.read().expect("session lock poisoned");
            match sessions.get(token) {
                Some(session) if Utc::now() < session.expires_at => {
                    return Some(session.username.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired entry found under the read lock; drop it.
        self.revoke(token);
        None
    }

    /// Remove a token (logout or expiry).
    pub fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(token);
    }
}
