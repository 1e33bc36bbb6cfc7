//! Request service - filing, answering and settling rental requests.
//!
//! The two check-then-act sequences (the duplicate-pending guard on filing
//! and the no-active-rental guard on acceptance) run inside store
//! transactions, so concurrent callers serialize instead of racing.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{normalize_email, Rental, Request, RequestState};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Request service trait for dependency injection.
#[async_trait]
pub trait RequestService: Send + Sync {
    /// File a pending request for a room.
    ///
    /// The room must exist and not be withdrawn; owners cannot request
    /// their own room; a requester holds at most one pending request per
    /// room at a time.
    async fn create_request(&self, room_id: Uuid, requester_email: &str) -> AppResult<Request>;

    /// Non-deleted requests for a room
    async fn requests_by_room(&self, room_id: Uuid) -> AppResult<Vec<Request>>;

    /// Non-deleted requests for a room filed by one requester
    async fn requests_by_room_and_user(
        &self,
        room_id: Uuid,
        requester_email: &str,
    ) -> AppResult<Vec<Request>>;

    /// Full-record upsert; no lifecycle checks. The typed transitions below
    /// are the guarded way to move a request along.
    async fn update_request(&self, request: Request) -> AppResult<Request>;

    /// Requester withdraws a pending request (pending -> cancelled)
    async fn cancel_request(&self, id: Uuid) -> AppResult<Request>;

    /// Owner declines a pending request (pending -> rejected)
    async fn reject_request(&self, id: Uuid) -> AppResult<Request>;

    /// Requester hides a settled (rejected or cancelled) request
    async fn soft_delete_request(&self, id: Uuid) -> AppResult<Request>;

    /// Owner accepts a pending request: creates the rental, marks the
    /// request accepted, and rejects every other pending request for the
    /// room - all in one serializable transaction. After it commits the
    /// room has exactly one active rental and no pending request.
    async fn accept_request(&self, id: Uuid) -> AppResult<Rental>;
}

/// Concrete implementation of RequestService using Unit of Work.
pub struct RequestManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RequestManager<U> {
    /// Create new request service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Load a request and apply a guarded lifecycle transition.
    async fn transition(&self, id: Uuid, next: RequestState) -> AppResult<Request> {
        let mut request = self
            .uow
            .requests()
            .find_by_id(id)
            .await?
            .ok_or_not_found("request")?;

        request.transition(next)?;
        self.uow.requests().upsert(&request).await
    }
}

#[async_trait]
impl<U: UnitOfWork> RequestService for RequestManager<U> {
    async fn create_request(&self, room_id: Uuid, requester_email: &str) -> AppResult<Request> {
        let requester = normalize_email(requester_email);

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let room = ctx
                        .rooms()
                        .find_by_id(room_id)
                        .await?
                        .filter(|r| !r.is_deleted())
                        .ok_or_not_found("room")?;

                    if room.owner_email == requester {
                        return Err(AppError::validation("cannot request your own room"));
                    }

                    let existing = ctx
                        .requests()
                        .find_by_room_and_requester(room_id, &requester)
                        .await?;
                    if existing.iter().any(Request::is_pending) {
                        return Err(AppError::conflict(
                            "a pending request for this room already exists",
                        ));
                    }

                    let request = Request::new(room_id, &requester);
                    ctx.requests().insert(&request).await
                })
            })
            .await
    }

    async fn requests_by_room(&self, room_id: Uuid) -> AppResult<Vec<Request>> {
        self.uow.requests().find_by_room(room_id).await
    }

    async fn requests_by_room_and_user(
        &self,
        room_id: Uuid,
        requester_email: &str,
    ) -> AppResult<Vec<Request>> {
        self.uow
            .requests()
            .find_by_room_and_requester(room_id, &normalize_email(requester_email))
            .await
    }

    async fn update_request(&self, request: Request) -> AppResult<Request> {
        self.uow.requests().upsert(&request).await
    }

    async fn cancel_request(&self, id: Uuid) -> AppResult<Request> {
        self.transition(id, RequestState::Cancelled).await
    }

    async fn reject_request(&self, id: Uuid) -> AppResult<Request> {
        self.transition(id, RequestState::Rejected).await
    }

    async fn soft_delete_request(&self, id: Uuid) -> AppResult<Request> {
        let mut request = self
            .uow
            .requests()
            .find_by_id(id)
            .await?
            .ok_or_not_found("request")?;

        request.soft_delete()?;
        self.uow.requests().upsert(&request).await
    }

    async fn accept_request(&self, id: Uuid) -> AppResult<Rental> {
        self.uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let mut request = ctx
                        .requests()
                        .find_by_id(id)
                        .await?
                        .ok_or_not_found("request")?;

                    if !request.is_pending() {
                        return Err(AppError::conflict("request is not pending"));
                    }

                    if ctx
                        .rentals()
                        .find_active_by_room(request.room_id)
                        .await?
                        .is_some()
                    {
                        return Err(AppError::conflict("room already has an active rental"));
                    }

                    let rental = Rental::new(request.room_id, &request.requester_email);
                    ctx.rentals().insert(&rental).await?;

                    request.transition(RequestState::Accepted)?;
                    ctx.requests().upsert(&request).await?;

                    for mut sibling in ctx.requests().find_by_room(request.room_id).await? {
                        if sibling.id != id && sibling.is_pending() {
                            sibling.transition(RequestState::Rejected)?;
                            ctx.requests().upsert(&sibling).await?;
                        }
                    }

                    tracing::info!(
                        request_id = %id,
                        room_id = %rental.room_id,
                        tenant = %rental.tenant_email,
                        "request accepted, rental started"
                    );
                    Ok(rental)
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockRequestRepository;
    use crate::services::test_support::TestUnitOfWork;

    fn pending_request() -> Request {
        Request::new(Uuid::new_v4(), "naroa@gmail.com")
    }

    #[tokio::test]
    async fn cancel_moves_pending_to_cancelled() {
        let mut requests = MockRequestRepository::new();
        requests
            .expect_find_by_id()
            .returning(|_| Ok(Some(pending_request())));
        requests
            .expect_upsert()
            .withf(|request| request.state == RequestState::Cancelled)
            .returning(|request| Ok(request.clone()));

        let service = RequestManager::new(Arc::new(
            TestUnitOfWork::new().with_requests(requests),
        ));
        let request = service.cancel_request(Uuid::new_v4()).await.unwrap();
        assert_eq!(request.state, RequestState::Cancelled);
    }

    #[tokio::test]
    async fn reject_refuses_settled_requests() {
        let mut requests = MockRequestRepository::new();
        requests.expect_find_by_id().returning(|_| {
            let mut request = pending_request();
            request.transition(RequestState::Accepted).unwrap();
            Ok(Some(request))
        });
        requests.expect_upsert().never();

        let service = RequestManager::new(Arc::new(
            TestUnitOfWork::new().with_requests(requests),
        ));
        let result = service.reject_request(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn transition_misses_with_not_found() {
        let mut requests = MockRequestRepository::new();
        requests.expect_find_by_id().returning(|_| Ok(None));

        let service = RequestManager::new(Arc::new(
            TestUnitOfWork::new().with_requests(requests),
        ));
        let result = service.cancel_request(Uuid::new_v4()).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound("request")));
    }

    #[tokio::test]
    async fn soft_delete_hides_rejected_requests_only() {
        let mut requests = MockRequestRepository::new();
        requests.expect_find_by_id().returning(|_| {
            let mut request = pending_request();
            request.transition(RequestState::Rejected).unwrap();
            Ok(Some(request))
        });
        requests
            .expect_upsert()
            .withf(|request| request.deleted_at.is_some())
            .returning(|request| Ok(request.clone()));

        let service = RequestManager::new(Arc::new(
            TestUnitOfWork::new().with_requests(requests),
        ));
        let request = service.soft_delete_request(Uuid::new_v4()).await.unwrap();
        assert!(request.is_deleted());
    }
}
