//! Seed command - Demo users and rooms for a fresh store.
//!
//! Idempotent: a store that already holds rooms is left untouched, so the
//! command can run on every start of a demo environment.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{AuthService, RoomService, ServiceContainer, Services};

struct SeedUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
}

struct SeedRoom {
    address: &'static str,
    city: &'static str,
    lat: f64,
    lon: f64,
    price: f64,
    owner_email: &'static str,
}

const USERS: &[SeedUser] = &[
    SeedUser { name: "Joseba", email: "joseba@gmail.com", password: "1111" },
    SeedUser { name: "Ane", email: "ane@gmail.com", password: "2222" },
    SeedUser { name: "Iker", email: "iker@gmail.com", password: "3333" },
    SeedUser { name: "Naroa", email: "naroa@gmail.com", password: "4444" },
    SeedUser { name: "Mikel", email: "mikel@gmail.com", password: "5555" },
    SeedUser { name: "Lucia", email: "lucia@example.com", password: "6666" },
    SeedUser { name: "Ander", email: "ander@example.com", password: "7777" },
];

const ROOMS: &[SeedRoom] = &[
    SeedRoom {
        address: "C/ San Prudencio 1",
        city: "Vitoria-Gasteiz",
        lat: 42.846,
        lon: -2.672,
        price: 350.0,
        owner_email: "joseba@gmail.com",
    },
    SeedRoom {
        address: "C/ Florida 12",
        city: "Vitoria-Gasteiz",
        lat: 42.847,
        lon: -2.671,
        price: 380.0,
        owner_email: "joseba@gmail.com",
    },
    SeedRoom {
        address: "C/ Licenciado Poza 5",
        city: "Bilbo",
        lat: 43.263,
        lon: -2.935,
        price: 420.0,
        owner_email: "iker@gmail.com",
    },
    SeedRoom {
        address: "C/ La Concha 3",
        city: "Donosti",
        lat: 43.321,
        lon: -1.986,
        price: 450.0,
        owner_email: "ane@gmail.com",
    },
    SeedRoom {
        address: "Avda. Gasteiz 50",
        city: "Vitoria-Gasteiz",
        lat: 42.8465,
        lon: -2.689,
        price: 390.0,
        owner_email: "lucia@example.com",
    },
    SeedRoom {
        address: "Gran Via 20",
        city: "Bilbo",
        lat: 43.262,
        lon: -2.9355,
        price: 410.0,
        owner_email: "ander@example.com",
    },
];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await;
    let services = Services::from_connection(db.get_connection());

    if !services.rooms().list_rooms().await?.is_empty() {
        tracing::info!("store already seeded, nothing to do");
        return Ok(());
    }

    for user in USERS {
        let result = services
            .auth()
            .register(crate::domain::RegisterUser {
                email: user.email.to_string(),
                password: user.password.to_string(),
                name: user.name.to_string(),
                avatar: None,
            })
            .await;

        match result {
            Ok(_) => tracing::info!(email = user.email, "seeded user"),
            // Re-running against a store that has users but no rooms
            Err(AppError::Conflict(_)) => {}
            Err(e) => return Err(e),
        }
    }

    for room in ROOMS {
        services
            .rooms()
            .create_room(crate::domain::CreateRoom {
                address: room.address.to_string(),
                city: room.city.to_string(),
                lat: Some(room.lat),
                lon: Some(room.lon),
                price: room.price,
                image: None,
                owner_email: room.owner_email.to_string(),
            })
            .await?;
        tracing::info!(address = room.address, city = room.city, "seeded room");
    }

    tracing::info!("demo data loaded");
    Ok(())
}
