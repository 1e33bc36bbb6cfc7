//! Room service - listing creation, lookups and the soft-delete cascade.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{normalize_email, CreateRoom, RequestState, Room};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Room service trait for dependency injection.
#[async_trait]
pub trait RoomService: Send + Sync {
    /// Create a listing. The owner must exist; the price must be positive.
    async fn create_room(&self, details: CreateRoom) -> AppResult<Room>;

    /// Non-deleted rooms listed by an owner
    async fn rooms_by_owner(&self, owner_email: &str) -> AppResult<Vec<Room>>;

    /// A room by id, soft-deleted included; callers decide how to filter
    async fn room_by_id(&self, id: Uuid) -> AppResult<Option<Room>>;

    /// Every room, soft-deleted included
    async fn list_rooms(&self) -> AppResult<Vec<Room>>;

    /// Withdraw a listing and settle everything attached to it, atomically:
    /// the room gains a deletion timestamp, every surviving request for it
    /// becomes cancelled, and an active rental (if any) ends now.
    /// Returns false when the room is absent.
    async fn soft_delete_room(&self, id: Uuid) -> AppResult<bool>;

    /// Bulk backfill of the image reference across all rooms
    async fn set_all_room_images(&self, image: &str) -> AppResult<u64>;
}

/// Concrete implementation of RoomService using Unit of Work.
pub struct RoomManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RoomManager<U> {
    /// Create new room service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RoomService for RoomManager<U> {
    async fn create_room(&self, details: CreateRoom) -> AppResult<Room> {
        details.validate()?;
        // NaN fails this comparison too
        if !(details.price > 0.0) {
            return Err(AppError::validation("price must be greater than zero"));
        }

        let owner_email = normalize_email(&details.owner_email);
        if self.uow.users().find_by_email(&owner_email).await?.is_none() {
            return Err(AppError::NotFound("owner"));
        }

        let room = Room::new(details);
        self.uow.rooms().insert(&room).await
    }

    async fn rooms_by_owner(&self, owner_email: &str) -> AppResult<Vec<Room>> {
        self.uow
            .rooms()
            .find_by_owner(&normalize_email(owner_email))
            .await
    }

    async fn room_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        self.uow.rooms().find_by_id(id).await
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        self.uow.rooms().find_all().await
    }

    async fn soft_delete_room(&self, id: Uuid) -> AppResult<bool> {
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let Some(mut room) = ctx.rooms().find_by_id(id).await? else {
                        return Ok(false);
                    };

                    room.soft_delete();
                    ctx.rooms().update(&room).await?;

                    // The cascade settles every surviving request for the
                    // room, whatever its current state.
                    for mut request in ctx.requests().find_by_room(id).await? {
                        request.state = RequestState::Cancelled;
                        ctx.requests().upsert(&request).await?;
                    }

                    if let Some(mut rental) = ctx.rentals().find_active_by_room(id).await? {
                        rental.finish(Utc::now());
                        ctx.rentals().update(&rental).await?;
                    }

                    tracing::info!(room_id = %id, "room withdrawn");
                    Ok(true)
                })
            })
            .await
    }

    async fn set_all_room_images(&self, image: &str) -> AppResult<u64> {
        self.uow.rooms().set_all_images(image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::{MockRoomRepository, MockUserRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn details() -> CreateRoom {
        CreateRoom {
            address: "C/ San Prudencio 1".into(),
            city: "Vitoria-Gasteiz".into(),
            lat: Some(42.846),
            lon: Some(-2.672),
            price: 350.0,
            image: None,
            owner_email: "joseba@gmail.com".into(),
        }
    }

    fn owner() -> User {
        User::new("Joseba".into(), "joseba@gmail.com", "1111".into(), None)
    }

    #[tokio::test]
    async fn create_room_rejects_blank_address() {
        let service = RoomManager::new(Arc::new(TestUnitOfWork::new()));
        let result = service
            .create_room(CreateRoom {
                address: "".into(),
                ..details()
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_room_rejects_non_positive_price() {
        let service = RoomManager::new(Arc::new(TestUnitOfWork::new()));
        for price in [0.0, -10.0, f64::NAN] {
            let result = service.create_room(CreateRoom { price, ..details() }).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn create_room_requires_existing_owner() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let service = RoomManager::new(Arc::new(TestUnitOfWork::new().with_users(users)));
        let result = service.create_room(details()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound("owner")));
    }

    #[tokio::test]
    async fn create_room_defaults_missing_coordinates_to_zero() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "joseba@gmail.com")
            .returning(|_| Ok(Some(owner())));

        let mut rooms = MockRoomRepository::new();
        rooms
            .expect_insert()
            .withf(|room| room.lat == 0.0 && room.lon == 0.0 && room.deleted_at.is_none())
            .returning(|room| Ok(room.clone()));

        let uow = TestUnitOfWork::new().with_users(users).with_rooms(rooms);
        let service = RoomManager::new(Arc::new(uow));

        let room = service
            .create_room(CreateRoom {
                lat: None,
                lon: None,
                ..details()
            })
            .await
            .unwrap();
        assert_eq!(room.owner_email, "joseba@gmail.com");
    }
}
