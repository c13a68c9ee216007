//! Wager pool for a quiz room
//!
//! The pool is the uniform entry fee times the number of participants.
//! Individual bets are tracked per participant and only read for display.

use super::prizes::DistributionType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    #[serde(default)]
    pub bet_amount: i64,
}

impl Participant {
    pub fn new(user_id: impl Into<String>, bet_amount: i64) -> Self {
        Self {
            user_id: user_id.into(),
            bet_amount,
        }
    }
}

/// A quiz lobby as seen by the betting panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub entry_fee: i64,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub distribution_type: DistributionType,
    #[serde(default)]
    pub allow_double_down: bool,
}

impl Room {
    pub fn new(entry_fee: i64, distribution_type: DistributionType) -> Self {
        Self {
            entry_fee,
            participants: Vec::new(),
            distribution_type,
            allow_double_down: false,
        }
    }

    /// Entry fee times participant count
    pub fn total_prize(&self) -> i64 {
        let count = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.entry_fee.saturating_mul(count)
    }

    /// Bet placed by `user_id`, or 0 for spectators and anonymous viewers
    pub fn user_bet(&self, user_id: Option<&str>) -> i64 {
        let Some(user_id) = user_id else {
            return 0;
        };
        self.participants
            .iter()
            .find(|p| p.user_id == user_id)
            .map(|p| p.bet_amount)
            .unwrap_or(0)
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with(entry_fee: i64, players: usize) -> Room {
        let mut room = Room::new(entry_fee, DistributionType::Top3);
        for i in 0..players {
            room.participants
                .push(Participant::new(format!("p{}", i + 1), (i as i64 + 1) * 10));
        }
        room
    }

    #[test]
    fn test_total_prize() {
        assert_eq!(room_with(100, 5).total_prize(), 500);
        assert_eq!(room_with(50, 2).total_prize(), 100);
    }

    #[test]
    fn test_total_prize_empty_room() {
        assert_eq!(room_with(100, 0).total_prize(), 0);
    }

    #[test]
    fn test_total_prize_ignores_bets() {
        let mut room = room_with(10, 3);
        room.participants[0].bet_amount = 10_000;
        assert_eq!(room.total_prize(), 30);
    }

    #[test]
    fn test_total_prize_saturates() {
        assert_eq!(room_with(i64::MAX, 2).total_prize(), i64::MAX);
    }

    #[test]
    fn test_user_bet() {
        let room = room_with(100, 3);
        assert_eq!(room.user_bet(Some("p2")), 20);
        assert_eq!(room.user_bet(Some("spectator")), 0);
        assert_eq!(room.user_bet(None), 0);
    }

    #[test]
    fn test_is_participant() {
        let room = room_with(10, 2);
        assert!(room.is_participant("p1"));
        assert!(!room.is_participant("p3"));
        assert!(!room_with(10, 0).is_participant("p1"));
    }

    #[test]
    fn test_missing_fields_default() {
        let room: Room = serde_json::from_str(
            r#"{"entry_fee": 25, "participants": [{"user_id": "a"}], "distribution_type": "weird"}"#,
        )
        .unwrap();
        assert_eq!(room.participants[0].bet_amount, 0);
        assert_eq!(room.distribution_type, DistributionType::WinnerTakesAll);
        assert!(!room.allow_double_down);
        assert_eq!(room.total_prize(), 25);
    }
}
