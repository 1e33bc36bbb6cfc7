//! Rental request entity and its state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{STATE_ACCEPTED, STATE_CANCELLED, STATE_PENDING, STATE_REJECTED};
use crate::errors::{AppError, AppResult};

use super::user::normalize_email;

/// Request lifecycle states.
///
/// `pending` is the only state with outgoing transitions; `accepted`,
/// `rejected` and `cancelled` are settled. A settled `rejected` or
/// `cancelled` record may additionally be soft-deleted by its requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl RequestState {
    /// Whether the lifecycle allows moving from this state to `next`.
    pub fn can_transition_to(&self, next: RequestState) -> bool {
        matches!(self, RequestState::Pending) && next != RequestState::Pending
    }

    /// A settled request no longer awaits the owner's answer.
    pub fn is_settled(&self) -> bool {
        !matches!(self, RequestState::Pending)
    }

    /// States whose records the requester may hide from their own listing.
    pub fn is_hideable(&self) -> bool {
        matches!(self, RequestState::Rejected | RequestState::Cancelled)
    }
}

impl From<&str> for RequestState {
    fn from(s: &str) -> Self {
        match s {
            STATE_ACCEPTED => RequestState::Accepted,
            STATE_REJECTED => RequestState::Rejected,
            STATE_CANCELLED => RequestState::Cancelled,
            _ => RequestState::Pending,
        }
    }
}

impl From<RequestState> for String {
    fn from(state: RequestState) -> Self {
        state.to_string()
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RequestState::Pending => STATE_PENDING,
            RequestState::Accepted => STATE_ACCEPTED,
            RequestState::Rejected => STATE_REJECTED,
            RequestState::Cancelled => STATE_CANCELLED,
        };
        write!(f, "{}", s)
    }
}

/// A prospective tenant's expression of interest in a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
    pub room_id: Uuid,
    pub requester_email: String,
    pub state: RequestState,
    pub created_at: DateTime<Utc>,
    /// Soft delete timestamp (None = visible to the requester)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Request {
    /// Create a new pending request with a generated id.
    pub fn new(room_id: Uuid, requester_email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id,
            requester_email: normalize_email(requester_email),
            state: RequestState::Pending,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Move the request to `next`, enforcing the lifecycle.
    pub fn transition(&mut self, next: RequestState) -> AppResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(AppError::conflict(format!(
                "request is {}, cannot become {}",
                self.state, next
            )));
        }
        self.state = next;
        Ok(())
    }

    /// Hide a settled (rejected or cancelled) request from the requester's
    /// listing. Pending and accepted requests cannot be hidden.
    pub fn soft_delete(&mut self) -> AppResult<()> {
        if !self.state.is_hideable() {
            return Err(AppError::conflict(format!(
                "a {} request cannot be hidden",
                self.state
            )));
        }
        self.deleted_at = Some(Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_transitions_to_every_settled_state() {
        for next in [
            RequestState::Accepted,
            RequestState::Rejected,
            RequestState::Cancelled,
        ] {
            let mut request = Request::new(Uuid::new_v4(), "tenant@example.com");
            assert!(request.transition(next).is_ok());
            assert_eq!(request.state, next);
        }
    }

    #[test]
    fn settled_states_admit_no_transition() {
        let mut request = Request::new(Uuid::new_v4(), "tenant@example.com");
        request.transition(RequestState::Accepted).unwrap();

        let err = request.transition(RequestState::Rejected).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(request.state, RequestState::Accepted);
    }

    #[test]
    fn only_rejected_or_cancelled_can_be_hidden() {
        let mut pending = Request::new(Uuid::new_v4(), "tenant@example.com");
        assert!(pending.soft_delete().is_err());

        let mut rejected = Request::new(Uuid::new_v4(), "tenant@example.com");
        rejected.transition(RequestState::Rejected).unwrap();
        assert!(rejected.soft_delete().is_ok());
        assert!(rejected.is_deleted());
    }

    #[test]
    fn state_round_trips_through_strings() {
        assert_eq!(RequestState::from("rejected"), RequestState::Rejected);
        assert_eq!(RequestState::Cancelled.to_string(), "cancelled");
    }
}
