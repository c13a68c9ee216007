//! Room and participant persistence

use super::{
    models::{ParticipantRecord, RoomRecord},
    DbPool,
};
use crate::error::{AppError, Result};

pub async fn create_room(pool: &DbPool, room: &RoomRecord) -> Result<()> {
    sqlx::query(
        "INSERT INTO rooms (id, name, entry_fee, distribution_type, allow_double_down, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&room.id)
    .bind(&room.name)
    .bind(room.entry_fee)
    .bind(&room.distribution_type)
    .bind(room.allow_double_down)
    .bind(&room.created_at)
    .execute(pool)
    .await?;

    tracing::info!(
        "Created room {} ({}, entry fee {}, {})",
        room.id,
        room.name,
        room.entry_fee,
        room.distribution()
    );
    Ok(())
}

pub async fn get_room(pool: &DbPool, room_id: &str) -> Result<Option<RoomRecord>> {
    let room = sqlx::query_as::<_, RoomRecord>("SELECT * FROM rooms WHERE id = ?")
        .bind(room_id)
        .fetch_optional(pool)
        .await?;
    Ok(room)
}

/// Room that must exist
pub async fn load_room(pool: &DbPool, room_id: &str) -> Result<RoomRecord> {
    get_room(pool, room_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
}

pub async fn list_rooms(pool: &DbPool) -> Result<Vec<RoomRecord>> {
    let rooms = sqlx::query_as::<_, RoomRecord>("SELECT * FROM rooms ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(rooms)
}

/// Participants in join order
pub async fn list_participants(pool: &DbPool, room_id: &str) -> Result<Vec<ParticipantRecord>> {
    let participants = sqlx::query_as::<_, ParticipantRecord>(
        "SELECT room_id, user_id, bet_amount, joined_at FROM room_participants
         WHERE room_id = ? ORDER BY rowid",
    )
    .bind(room_id)
    .fetch_all(pool)
    .await?;
    Ok(participants)
}

pub async fn add_participant(
    pool: &DbPool,
    room_id: &str,
    user_id: &str,
    bet_amount: i64,
) -> Result<ParticipantRecord> {
    let participant =
        ParticipantRecord::new(room_id.to_string(), user_id.to_string(), bet_amount);

    sqlx::query(
        "INSERT INTO room_participants (room_id, user_id, bet_amount, joined_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&participant.room_id)
    .bind(&participant.user_id)
    .bind(participant.bet_amount)
    .bind(&participant.joined_at)
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Validation("Already joined this room".to_string())
        }
        _ => AppError::Database(e),
    })?;

    tracing::debug!("User {} joined room {} with bet {}", user_id, room_id, bet_amount);
    Ok(participant)
}

pub async fn count_rooms(pool: &DbPool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
