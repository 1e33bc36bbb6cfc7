//! Room table entity.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Room;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub price: f64,
    pub image: Option<String>,
    pub owner_email: String,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Room {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            address: model.address,
            city: model.city,
            lat: model.lat,
            lon: model.lon,
            price: model.price,
            image: model.image,
            owner_email: model.owner_email,
            created_at: model.created_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<&Room> for ActiveModel {
    fn from(room: &Room) -> Self {
        Self {
            id: Set(room.id),
            address: Set(room.address.clone()),
            city: Set(room.city.clone()),
            lat: Set(room.lat),
            lon: Set(room.lon),
            price: Set(room.price),
            image: Set(room.image.clone()),
            owner_email: Set(room.owner_email.clone()),
            created_at: Set(room.created_at),
            deleted_at: Set(room.deleted_at),
        }
    }
}
