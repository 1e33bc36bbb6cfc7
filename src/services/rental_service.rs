//! Rental service - occupancy lookups and ending rentals.
//!
//! Rentals are only ever created by accepting a request; this service
//! covers the rest of their lifecycle.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{normalize_email, Rental};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Rental service trait for dependency injection.
#[async_trait]
pub trait RentalService: Send + Sync {
    /// The single active rental of a room, if any
    async fn active_rental_by_room(&self, room_id: Uuid) -> AppResult<Option<Rental>>;

    /// Every rental of a room, in start order; feeds the availability
    /// calculator
    async fn rentals_by_room(&self, room_id: Uuid) -> AppResult<Vec<Rental>>;

    /// Every rental held by a tenant (case-insensitive email)
    async fn rentals_by_tenant(&self, tenant_email: &str) -> AppResult<Vec<Rental>>;

    /// Every rental in the store
    async fn list_rentals(&self) -> AppResult<Vec<Rental>>;

    /// End a rental; `ended_at` defaults to now
    async fn finish_rental(
        &self,
        id: Uuid,
        ended_at: Option<DateTime<Utc>>,
    ) -> AppResult<Rental>;
}

/// Concrete implementation of RentalService using Unit of Work.
pub struct RentalManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RentalManager<U> {
    /// Create new rental service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RentalService for RentalManager<U> {
    async fn active_rental_by_room(&self, room_id: Uuid) -> AppResult<Option<Rental>> {
        self.uow.rentals().find_active_by_room(room_id).await
    }

    async fn rentals_by_room(&self, room_id: Uuid) -> AppResult<Vec<Rental>> {
        self.uow.rentals().find_by_room(room_id).await
    }

    async fn rentals_by_tenant(&self, tenant_email: &str) -> AppResult<Vec<Rental>> {
        self.uow
            .rentals()
            .find_by_tenant(&normalize_email(tenant_email))
            .await
    }

    async fn list_rentals(&self) -> AppResult<Vec<Rental>> {
        self.uow.rentals().find_all().await
    }

    async fn finish_rental(
        &self,
        id: Uuid,
        ended_at: Option<DateTime<Utc>>,
    ) -> AppResult<Rental> {
        let mut rental = self
            .uow
            .rentals()
            .find_by_id(id)
            .await?
            .ok_or_not_found("rental")?;

        rental.finish(ended_at.unwrap_or_else(Utc::now));
        self.uow.rentals().update(&rental).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockRentalRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn finish_rental_sets_end_and_clears_active() {
        let end = Utc::now();

        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_find_by_id()
            .returning(|_| Ok(Some(Rental::new(Uuid::new_v4(), "mikel@gmail.com"))));
        rentals
            .expect_update()
            .withf(move |rental| !rental.active && rental.ended_at == Some(end))
            .returning(|rental| Ok(rental.clone()));

        let service = RentalManager::new(Arc::new(
            TestUnitOfWork::new().with_rentals(rentals),
        ));
        let rental = service
            .finish_rental(Uuid::new_v4(), Some(end))
            .await
            .unwrap();
        assert!(!rental.is_active());
    }

    #[tokio::test]
    async fn finish_rental_misses_with_not_found() {
        let mut rentals = MockRentalRepository::new();
        rentals.expect_find_by_id().returning(|_| Ok(None));

        let service = RentalManager::new(Arc::new(
            TestUnitOfWork::new().with_rentals(rentals),
        ));
        let result = service.finish_rental(Uuid::new_v4(), None).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound("rental")));
    }
}
