//! Infrastructure layer - External systems integration
//!
//! This module handles all storage concerns:
//! - Database connection, schema and migrations
//! - Repositories over the four collections
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    RentalRepository, RentalStore, RequestRepository, RequestStore, RoomRepository, RoomStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxRentalRepository, TxRequestRepository, TxRoomRepository,
    TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockRentalRepository, MockRequestRepository, MockRoomRepository, MockUserRepository,
};
