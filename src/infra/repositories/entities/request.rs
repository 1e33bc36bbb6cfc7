//! Rental-request table entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Request, RequestState};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub room_id: Uuid,
    pub requester_email: String,
    /// Lifecycle state stored as its lowercase string form
    pub state: String,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Request {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            room_id: model.room_id,
            requester_email: model.requester_email,
            state: RequestState::from(model.state.as_str()),
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<&Request> for ActiveModel {
    fn from(request: &Request) -> Self {
        Self {
            id: Set(request.id),
            room_id: Set(request.room_id),
            requester_email: Set(request.requester_email.clone()),
            state: Set(request.state.to_string()),
            created_at: Set(request.created_at),
            deleted_at: Set(request.deleted_at),
        }
    }
}
