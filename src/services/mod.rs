//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and use the Unit of Work for repository access
//! and transaction management.

mod auth_service;
pub mod container;
mod rental_service;
mod request_service;
mod room_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use rental_service::{RentalManager, RentalService};
pub use request_service::{RequestManager, RequestService};
pub use room_service::{RoomManager, RoomService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

/// Shared scaffolding for service-level unit tests: a Unit of Work over
/// mockall repositories. Transactions are not supported here; transactional
/// paths are covered by the integration tests against a real store.
#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::errors::{AppError, AppResult};
    use crate::infra::{
        MockRentalRepository, MockRequestRepository, MockRoomRepository, MockUserRepository,
        RentalRepository, RequestRepository, RoomRepository, TransactionContext, UnitOfWork,
        UserRepository,
    };

    pub struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        rooms: Arc<MockRoomRepository>,
        requests: Arc<MockRequestRepository>,
        rentals: Arc<MockRentalRepository>,
    }

    impl TestUnitOfWork {
        pub fn new() -> Self {
            Self {
                users: Arc::new(MockUserRepository::new()),
                rooms: Arc::new(MockRoomRepository::new()),
                requests: Arc::new(MockRequestRepository::new()),
                rentals: Arc::new(MockRentalRepository::new()),
            }
        }

        pub fn with_users(mut self, users: MockUserRepository) -> Self {
            self.users = Arc::new(users);
            self
        }

        pub fn with_rooms(mut self, rooms: MockRoomRepository) -> Self {
            self.rooms = Arc::new(rooms);
            self
        }

        pub fn with_requests(mut self, requests: MockRequestRepository) -> Self {
            self.requests = Arc::new(requests);
            self
        }

        pub fn with_rentals(mut self, rentals: MockRentalRepository) -> Self {
            self.rentals = Arc::new(rentals);
            self
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn rooms(&self) -> Arc<dyn RoomRepository> {
            self.rooms.clone()
        }

        fn requests(&self) -> Arc<dyn RequestRepository> {
            self.requests.clone()
        }

        fn rentals(&self) -> Arc<dyn RentalRepository> {
            self.rentals.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("transactions not supported in test mock"))
        }

        async fn transaction_serializable<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("transactions not supported in test mock"))
        }
    }
}
