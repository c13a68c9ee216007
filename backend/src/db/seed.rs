//! Demo data for local development

use super::{
    models::RoomRecord,
    rooms::{add_participant, count_rooms, create_room},
    DbPool,
};
use crate::{error::Result, lobby::DistributionType};

struct DemoRoom {
    name: &'static str,
    entry_fee: i64,
    distribution: DistributionType,
    allow_double_down: bool,
    players: &'static [(&'static str, i64)],
}

const DEMO_ROOMS: &[DemoRoom] = &[
    DemoRoom {
        name: "Weapon Skins Blitz",
        entry_fee: 100,
        distribution: DistributionType::Top3,
        allow_double_down: true,
        players: &[
            ("demo-player-1", 50),
            ("demo-player-2", 0),
            ("demo-player-3", 25),
            ("demo-player-4", 0),
            ("demo-player-5", 100),
        ],
    },
    DemoRoom {
        name: "Map Callouts Duel",
        entry_fee: 250,
        distribution: DistributionType::WinnerTakesAll,
        allow_double_down: false,
        players: &[("demo-player-1", 0), ("demo-player-2", 0)],
    },
    DemoRoom {
        name: "Pro Scene Trivia",
        entry_fee: 50,
        distribution: DistributionType::Proportional,
        allow_double_down: false,
        players: &[
            ("demo-player-3", 10),
            ("demo-player-4", 10),
            ("demo-player-5", 0),
        ],
    },
];

/// Insert the demo rooms if the database has no rooms yet.
/// Returns the number of rooms created.
pub async fn seed_demo_rooms(pool: &DbPool) -> Result<usize> {
    if count_rooms(pool).await? > 0 {
        tracing::info!("Rooms already present, skipping demo seed");
        return Ok(0);
    }

    for demo in DEMO_ROOMS {
        let room = RoomRecord::new(
            demo.name.to_string(),
            demo.entry_fee,
            demo.distribution,
            demo.allow_double_down,
        );
        create_room(pool, &room).await?;
        for (user_id, bet) in demo.players {
            add_participant(pool, &room.id, user_id, *bet).await?;
        }
    }

    tracing::info!("Seeded {} demo rooms", DEMO_ROOMS.len());
    Ok(DEMO_ROOMS.len())
}
