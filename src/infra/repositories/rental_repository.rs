//! Rental data access.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::domain::Rental;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Rental repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Find a rental by primary key
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>>;

    /// Every rental of a room, in start order
    async fn find_by_room(&self, room_id: Uuid) -> AppResult<Vec<Rental>>;

    /// The single active rental of a room, if any. More than one is an
    /// invariant breach and surfaces as a consistency error.
    async fn find_active_by_room(&self, room_id: Uuid) -> AppResult<Option<Rental>>;

    /// Every rental held by the given tenant, in start order
    async fn find_by_tenant(&self, tenant_email: &str) -> AppResult<Vec<Rental>>;

    /// Every rental in the store
    async fn find_all(&self) -> AppResult<Vec<Rental>>;

    /// Insert a new rental
    async fn insert(&self, rental: &Rental) -> AppResult<Rental>;

    /// Full-record write by primary key
    async fn update(&self, rental: &Rental) -> AppResult<Rental>;
}

/// SeaORM-backed rental store over the pooled connection.
#[derive(Clone)]
pub struct RentalStore {
    db: DatabaseConnection,
}

impl RentalStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RentalRepository for RentalStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>> {
        queries::find_by_id(&self.db, id).await
    }

    async fn find_by_room(&self, room_id: Uuid) -> AppResult<Vec<Rental>> {
        queries::find_by_room(&self.db, room_id).await
    }

    async fn find_active_by_room(&self, room_id: Uuid) -> AppResult<Option<Rental>> {
        queries::find_active_by_room(&self.db, room_id).await
    }

    async fn find_by_tenant(&self, tenant_email: &str) -> AppResult<Vec<Rental>> {
        queries::find_by_tenant(&self.db, tenant_email).await
    }

    async fn find_all(&self) -> AppResult<Vec<Rental>> {
        queries::find_all(&self.db).await
    }

    async fn insert(&self, rental: &Rental) -> AppResult<Rental> {
        queries::insert(&self.db, rental).await
    }

    async fn update(&self, rental: &Rental) -> AppResult<Rental> {
        queries::update(&self.db, rental).await
    }
}

/// Connection-generic queries shared by the pooled store and the
/// transaction-scoped repository.
pub(crate) mod queries {
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};

    use super::super::entities::rental::{self, Entity as RentalEntity};
    use super::*;
    use crate::errors::AppError;

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<Rental>> {
        let model = RentalEntity::find_by_id(id).one(conn).await?;
        Ok(model.map(Rental::from))
    }

    pub async fn find_by_room<C: ConnectionTrait>(
        conn: &C,
        room_id: Uuid,
    ) -> AppResult<Vec<Rental>> {
        let models = RentalEntity::find()
            .filter(rental::Column::RoomId.eq(room_id))
            .order_by_asc(rental::Column::StartedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Rental::from).collect())
    }

    pub async fn find_active_by_room<C: ConnectionTrait>(
        conn: &C,
        room_id: Uuid,
    ) -> AppResult<Option<Rental>> {
        let active = RentalEntity::find()
            .filter(rental::Column::RoomId.eq(room_id))
            .filter(rental::Column::Active.eq(true))
            .all(conn)
            .await?;

        if active.len() > 1 {
            return Err(AppError::consistency(format!(
                "room {} has {} active rentals",
                room_id,
                active.len()
            )));
        }

        Ok(active.into_iter().next().map(Rental::from))
    }

    pub async fn find_by_tenant<C: ConnectionTrait>(
        conn: &C,
        tenant_email: &str,
    ) -> AppResult<Vec<Rental>> {
        let models = RentalEntity::find()
            .filter(rental::Column::TenantEmail.eq(tenant_email))
            .order_by_asc(rental::Column::StartedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Rental::from).collect())
    }

    pub async fn find_all<C: ConnectionTrait>(conn: &C) -> AppResult<Vec<Rental>> {
        let models = RentalEntity::find()
            .order_by_asc(rental::Column::StartedAt)
            .all(conn)
            .await?;
        Ok(models.into_iter().map(Rental::from).collect())
    }

    pub async fn insert<C: ConnectionTrait>(conn: &C, rental: &Rental) -> AppResult<Rental> {
        rental::ActiveModel::from(rental)
            .insert(conn)
            .await
            .map_err(|e| match e.sql_err() {
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::conflict("rental already exists")
                }
                _ => AppError::from(e),
            })?;
        Ok(rental.clone())
    }

    pub async fn update<C: ConnectionTrait>(conn: &C, rental: &Rental) -> AppResult<Rental> {
        rental::ActiveModel::from(rental)
            .update(conn)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => AppError::NotFound("rental"),
                _ => AppError::from(e),
            })?;
        Ok(rental.clone())
    }
}
