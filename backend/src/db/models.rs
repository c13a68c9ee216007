use crate::lobby::{DistributionType, Participant, Room};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomRecord {
    pub id: String,
    pub name: String,
    pub entry_fee: i64,
    /// Raw identifier as stored; read through `distribution()`
    pub distribution_type: Option<String>,
    pub allow_double_down: bool,
    pub created_at: String,
}

impl RoomRecord {
    pub fn new(
        name: String,
        entry_fee: i64,
        distribution: DistributionType,
        allow_double_down: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            entry_fee,
            distribution_type: Some(distribution.as_id().to_string()),
            allow_double_down,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn distribution(&self) -> DistributionType {
        DistributionType::from_id(self.distribution_type.as_deref())
    }

    /// Betting view input for this room
    pub fn to_room(&self, participants: &[ParticipantRecord]) -> Room {
        Room {
            entry_fee: self.entry_fee,
            participants: participants
                .iter()
                .map(|p| Participant::new(p.user_id.clone(), p.bet_amount))
                .collect(),
            distribution_type: self.distribution(),
            allow_double_down: self.allow_double_down,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParticipantRecord {
    #[serde(skip_serializing)]
    pub room_id: String,
    pub user_id: String,
    pub bet_amount: i64,
    pub joined_at: String,
}

impl ParticipantRecord {
    pub fn new(room_id: String, user_id: String, bet_amount: i64) -> Self {
        Self {
            room_id,
            user_id,
            bet_amount,
            joined_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_unknown_distribution_falls_back() {
        let mut record = RoomRecord::new("Lobby".to_string(), 10, DistributionType::Top3, false);
        assert_eq!(record.distribution(), DistributionType::Top3);

        record.distribution_type = Some("random-mode".to_string());
        assert_eq!(record.distribution(), DistributionType::WinnerTakesAll);
        record.distribution_type = None;
        assert_eq!(record.distribution(), DistributionType::WinnerTakesAll);
    }

    #[test]
    fn test_to_room_keeps_join_order() {
        let record = RoomRecord::new("Lobby".to_string(), 20, DistributionType::Proportional, true);
        let participants = vec![
            ParticipantRecord::new(record.id.clone(), "b".to_string(), 5),
            ParticipantRecord::new(record.id.clone(), "a".to_string(), 0),
        ];
        let room = record.to_room(&participants);
        assert_eq!(room.participants[0].user_id, "b");
        assert_eq!(room.total_prize(), 40);
        assert!(room.allow_double_down);
    }
}
