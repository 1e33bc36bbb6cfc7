//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models;
//! conversions to and from the domain types live next to each entity.

pub mod rental;
pub mod request;
pub mod room;
pub mod user;
