use super::{
    prizes::{DistributionType, PrizeEntry, PrizeStructure},
    wager::Room,
};
use serde::Serialize;

/// Betting panel for a room, computed for one viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BettingInfo {
    pub total_prize: i64,
    pub user_bet: i64,
    pub distribution_type: DistributionType,
    pub allow_double_down: bool,
    pub prizes: Vec<PrizeEntry>,
    /// Remainder of the pool not covered by the floored payouts
    pub undistributed: i64,
}

impl BettingInfo {
    pub fn for_room(room: &Room, current_user: Option<&str>) -> Self {
        let total_prize = room.total_prize();
        let structure = PrizeStructure::for_distribution(room.distribution_type);

        Self {
            total_prize,
            user_bet: room.user_bet(current_user),
            distribution_type: room.distribution_type,
            allow_double_down: room.allow_double_down,
            prizes: structure.prize_table(total_prize),
            undistributed: structure.undistributed(total_prize),
        }
    }
}
