//! Room domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::user::normalize_email;

/// Room domain entity
///
/// A soft-deleted room keeps its row so historical requests and rentals can
/// still resolve it; it only disappears from listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    /// Monthly price; always > 0
    pub price: f64,
    /// Opaque image reference; None = no photo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub owner_email: String,
    pub created_at: DateTime<Utc>,
    /// Soft delete timestamp (None = listed, Some = withdrawn)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Create a new room listing with a generated id.
    pub fn new(details: CreateRoom) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: details.address.trim().to_string(),
            city: details.city.trim().to_string(),
            lat: details.lat.unwrap_or(0.0),
            lon: details.lon.unwrap_or(0.0),
            price: details.price,
            image: details.image,
            owner_email: normalize_email(&details.owner_email),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Check if the room has been soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Soft delete the room
    pub fn soft_delete(&mut self) {
        self.deleted_at = Some(Utc::now());
    }
}

/// Room creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    /// Defaults to 0 when absent
    pub lat: Option<f64>,
    /// Defaults to 0 when absent
    pub lon: Option<f64>,
    /// Monthly price; must be greater than zero
    pub price: f64,
    pub image: Option<String>,
    #[validate(email(message = "owner email is required"))]
    pub owner_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> CreateRoom {
        CreateRoom {
            address: " C/ Florida 12 ".into(),
            city: "Vitoria-Gasteiz".into(),
            lat: None,
            lon: None,
            price: 380.0,
            image: None,
            owner_email: "Joseba@Gmail.com".into(),
        }
    }

    #[test]
    fn new_room_defaults_coordinates_and_normalizes() {
        let room = Room::new(details());
        assert_eq!(room.address, "C/ Florida 12");
        assert_eq!(room.lat, 0.0);
        assert_eq!(room.lon, 0.0);
        assert_eq!(room.owner_email, "joseba@gmail.com");
        assert!(!room.is_deleted());
    }

    #[test]
    fn soft_delete_sets_timestamp() {
        let mut room = Room::new(details());
        room.soft_delete();
        assert!(room.is_deleted());
    }
}
