//! Rental (occupancy contract) domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::normalize_email;

/// An approved occupancy of a room by a tenant.
///
/// Created only by accepting a request. At most one rental per room may be
/// active at any time; the store-level accept transaction guards this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub id: Uuid,
    pub room_id: Uuid,
    pub tenant_email: String,
    pub started_at: DateTime<Utc>,
    /// None while the rental is ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Create a new active rental starting now.
    pub fn new(room_id: Uuid, tenant_email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            room_id,
            tenant_email: normalize_email(tenant_email),
            started_at: now,
            ended_at: None,
            active: true,
            created_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A rental with no end date extends indefinitely.
    pub fn is_ongoing(&self) -> bool {
        self.ended_at.is_none()
    }

    /// End the rental at the given instant.
    pub fn finish(&mut self, ended_at: DateTime<Utc>) {
        self.active = false;
        self.ended_at = Some(ended_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rental_is_active_and_ongoing() {
        let rental = Rental::new(Uuid::new_v4(), "Tenant@Example.com");
        assert!(rental.is_active());
        assert!(rental.is_ongoing());
        assert_eq!(rental.tenant_email, "tenant@example.com");
    }

    #[test]
    fn finish_clears_active_and_sets_end() {
        let mut rental = Rental::new(Uuid::new_v4(), "tenant@example.com");
        let end = Utc::now();
        rental.finish(end);
        assert!(!rental.is_active());
        assert_eq!(rental.ended_at, Some(end));
    }
}
