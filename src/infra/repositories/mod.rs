//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! Each collection exposes a trait, a pooled store, and (through the Unit
//! of Work) a transaction-scoped twin sharing the same queries.

pub(crate) mod entities;
mod rental_repository;
mod request_repository;
mod room_repository;
mod user_repository;

pub use rental_repository::{RentalRepository, RentalStore};
pub use request_repository::{RequestRepository, RequestStore};
pub use room_repository::{RoomRepository, RoomStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use rental_repository::MockRentalRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use request_repository::MockRequestRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use room_repository::MockRoomRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

pub(crate) use rental_repository::queries as rental_queries;
pub(crate) use request_repository::queries as request_queries;
pub(crate) use room_repository::queries as room_queries;
pub(crate) use user_repository::queries as user_queries;
