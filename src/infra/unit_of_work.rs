//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and manages transaction lifecycle. The
//! store itself gives no cross-call isolation, so every multi-record
//! operation (accept-request, the soft-delete cascade, the duplicate-pending
//! guard) runs its whole read-check-write sequence through one transaction
//! obtained here: commit on success, rollback on error.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::{
    rental_queries, request_queries, room_queries, user_queries, RentalRepository, RentalStore,
    RequestRepository, RequestStore, RoomRepository, RoomStore, UserRepository, UserStore,
};
use crate::domain::{Rental, Request, Room, User};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. The generic transaction methods keep this trait out of
/// object-safe territory; consumers stay generic over it.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get room repository
    fn rooms(&self) -> Arc<dyn RoomRepository>;

    /// Get request repository
    fn requests(&self) -> Arc<dyn RequestRepository>;

    /// Get rental repository
    fn rentals(&self) -> Arc<dyn RentalRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;

    /// Execute a closure within a serializable transaction.
    ///
    /// Use this for check-then-act sequences whose correctness depends on
    /// full isolation, such as the accept-request guard.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part of the
/// same store transaction and observe each other's uncommitted writes.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    /// Get room repository for this transaction
    pub fn rooms(&self) -> TxRoomRepository<'_> {
        TxRoomRepository { txn: self.txn }
    }

    /// Get request repository for this transaction
    pub fn requests(&self) -> TxRequestRepository<'_> {
        TxRequestRepository { txn: self.txn }
    }

    /// Get rental repository for this transaction
    pub fn rentals(&self) -> TxRentalRepository<'_> {
        TxRentalRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    room_repo: Arc<RoomStore>,
    request_repo: Arc<RequestStore>,
    rental_repo: Arc<RentalStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let room_repo = Arc::new(RoomStore::new(db.clone()));
        let request_repo = Arc::new(RequestStore::new(db.clone()));
        let rental_repo = Arc::new(RentalStore::new(db.clone()));
        Self {
            db,
            user_repo,
            room_repo,
            request_repo,
            rental_repo,
        }
    }

    /// Internal transaction execution shared by both entry points.
    ///
    /// SQLite runs every transaction at serializable isolation, so both
    /// entry points share one implementation; the distinct methods keep
    /// call sites explicit about the guarantees they rely on.
    async fn execute_transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn rooms(&self) -> Arc<dyn RoomRepository> {
        self.room_repo.clone()
    }

    fn requests(&self) -> Arc<dyn RequestRepository> {
        self.request_repo.clone()
    }

    fn rentals(&self) -> Arc<dyn RentalRepository> {
        self.rental_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(f).await
    }
}

/// Transaction-scoped user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        user_queries::find_by_id(self.txn, id).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        user_queries::find_by_email(self.txn, email).await
    }

    pub async fn insert(&self, user: &User) -> AppResult<User> {
        user_queries::insert(self.txn, user).await
    }

    pub async fn update(&self, user: &User) -> AppResult<User> {
        user_queries::update(self.txn, user).await
    }
}

/// Transaction-scoped room repository.
pub struct TxRoomRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxRoomRepository<'_> {
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        room_queries::find_by_id(self.txn, id).await
    }

    pub async fn find_by_owner(&self, owner_email: &str) -> AppResult<Vec<Room>> {
        room_queries::find_by_owner(self.txn, owner_email).await
    }

    pub async fn insert(&self, room: &Room) -> AppResult<Room> {
        room_queries::insert(self.txn, room).await
    }

    pub async fn update(&self, room: &Room) -> AppResult<Room> {
        room_queries::update(self.txn, room).await
    }
}

/// Transaction-scoped request repository.
pub struct TxRequestRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxRequestRepository<'_> {
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Request>> {
        request_queries::find_by_id(self.txn, id).await
    }

    pub async fn find_by_room(&self, room_id: Uuid) -> AppResult<Vec<Request>> {
        request_queries::find_by_room(self.txn, room_id).await
    }

    pub async fn find_by_room_and_requester(
        &self,
        room_id: Uuid,
        requester_email: &str,
    ) -> AppResult<Vec<Request>> {
        request_queries::find_by_room_and_requester(self.txn, room_id, requester_email).await
    }

    pub async fn insert(&self, request: &Request) -> AppResult<Request> {
        request_queries::insert(self.txn, request).await
    }

    pub async fn upsert(&self, request: &Request) -> AppResult<Request> {
        request_queries::upsert(self.txn, request).await
    }
}

/// Transaction-scoped rental repository.
pub struct TxRentalRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxRentalRepository<'_> {
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>> {
        rental_queries::find_by_id(self.txn, id).await
    }

    pub async fn find_active_by_room(&self, room_id: Uuid) -> AppResult<Option<Rental>> {
        rental_queries::find_active_by_room(self.txn, room_id).await
    }

    pub async fn insert(&self, rental: &Rental) -> AppResult<Rental> {
        rental_queries::insert(self.txn, rental).await
    }

    pub async fn update(&self, rental: &Rental) -> AppResult<Rental> {
        rental_queries::update(self.txn, rental).await
    }
}
