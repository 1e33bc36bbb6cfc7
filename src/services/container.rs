//! Service Container - Centralized service access.
//!
//! One place wires repositories, Unit of Work and services together;
//! thread-safe concurrent access via Arc.

use std::sync::Arc;

use super::{AuthService, RentalService, RequestService, RoomService, UserService};
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get room service
    fn rooms(&self) -> Arc<dyn RoomService>;

    /// Get request service
    fn requests(&self) -> Arc<dyn RequestService>;

    /// Get rental service
    fn rentals(&self) -> Arc<dyn RentalService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    room_service: Arc<dyn RoomService>,
    request_service: Arc<dyn RequestService>,
    rental_service: Arc<dyn RentalService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        room_service: Arc<dyn RoomService>,
        request_service: Arc<dyn RequestService>,
        rental_service: Arc<dyn RentalService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            room_service,
            request_service,
            rental_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::{Authenticator, RentalManager, RequestManager, RoomManager, UserManager};

        let uow = Arc::new(Persistence::new(db));
        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone())),
            user_service: Arc::new(UserManager::new(uow.clone())),
            room_service: Arc::new(RoomManager::new(uow.clone())),
            request_service: Arc::new(RequestManager::new(uow.clone())),
            rental_service: Arc::new(RentalManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomService> {
        self.room_service.clone()
    }

    fn requests(&self) -> Arc<dyn RequestService> {
        self.request_service.clone()
    }

    fn rentals(&self) -> Arc<dyn RentalService> {
        self.rental_service.clone()
    }
}
