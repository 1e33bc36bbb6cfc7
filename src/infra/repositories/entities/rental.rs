//! Rental table entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Rental;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rentals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub room_id: Uuid,
    pub tenant_email: String,
    pub started_at: DateTimeUtc,
    pub ended_at: Option<DateTimeUtc>,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Rental {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            room_id: model.room_id,
            tenant_email: model.tenant_email,
            started_at: model.started_at,
            ended_at: model.ended_at,
            active: model.active,
            created_at: model.created_at,
        }
    }
}

impl From<&Rental> for ActiveModel {
    fn from(rental: &Rental) -> Self {
        Self {
            id: Set(rental.id),
            room_id: Set(rental.room_id),
            tenant_email: Set(rental.tenant_email.clone()),
            started_at: Set(rental.started_at),
            ended_at: Set(rental.ended_at),
            active: Set(rental.active),
            created_at: Set(rental.created_at),
        }
    }
}
