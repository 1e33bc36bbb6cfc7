//! Login session snapshot and its single-slot holder.
//!
//! The session is a UI convenience cache, not an authentication token: it
//! holds a copy of the logged-in user's public fields for the lifetime of
//! the process and is lost when the process ends. Nothing is persisted.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::user::User;

/// Snapshot of the logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Single-slot, in-memory session store.
///
/// At most one session exists at a time; setting a new one replaces any
/// prior snapshot. Explicit object with an explicit lifecycle (created at
/// login, destroyed at logout) instead of hidden global state.
#[derive(Debug, Default)]
pub struct SessionHolder {
    slot: Mutex<Option<Session>>,
}

impl SessionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing any existing session.
    pub fn set(&self, session: Session) {
        *self.slot.lock().expect("session lock poisoned") = Some(session);
    }

    /// The current snapshot, if anyone is logged in.
    pub fn get(&self) -> Option<Session> {
        self.slot.lock().expect("session lock poisoned").clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.slot.lock().expect("session lock poisoned").is_some()
    }

    /// Drop the snapshot.
    pub fn clear(&self) {
        *self.slot.lock().expect("session lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(email: &str) -> Session {
        Session {
            email: email.to_string(),
            name: "Ane".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn holder_starts_empty() {
        let holder = SessionHolder::new();
        assert!(!holder.is_logged_in());
        assert!(holder.get().is_none());
    }

    #[test]
    fn set_replaces_previous_session() {
        let holder = SessionHolder::new();
        holder.set(session("ane@gmail.com"));
        holder.set(session("iker@gmail.com"));

        let current = holder.get().unwrap();
        assert_eq!(current.email, "iker@gmail.com");
    }

    #[test]
    fn clear_logs_out() {
        let holder = SessionHolder::new();
        holder.set(session("ane@gmail.com"));
        holder.clear();
        assert!(!holder.is_logged_in());
    }

    #[test]
    fn snapshot_serializes_to_email_name_avatar() {
        let json = serde_json::to_value(session("ane@gmail.com")).unwrap();
        assert_eq!(json["email"], "ane@gmail.com");
        assert_eq!(json["name"], "Ane");
        // Bare snapshot: no password copy, absent avatar omitted
        assert!(json.get("password").is_none());
        assert!(json.get("avatar").is_none());
    }
}
