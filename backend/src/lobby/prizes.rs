//! Prize Structure and Distribution
//!
//! Maps a room's distribution type to per-rank payout percentages and
//! turns a prize pool into the ranked payout table shown in the lobby.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Payout policy for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistributionType {
    #[default]
    WinnerTakesAll,
    Top3,
    Proportional,
}

impl DistributionType {
    pub const ALL: [DistributionType; 3] = [
        DistributionType::WinnerTakesAll,
        DistributionType::Top3,
        DistributionType::Proportional,
    ];

    /// Parse a stored or requested identifier.
    /// Unknown and missing identifiers fall back to winner-takes-all.
    pub fn from_id(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            Some("winner-takes-all") => Self::WinnerTakesAll,
            Some("top3") => Self::Top3,
            Some("proportional") => Self::Proportional,
            _ => Self::default(),
        }
    }

    pub fn as_id(&self) -> &'static str {
        match self {
            Self::WinnerTakesAll => "winner-takes-all",
            Self::Top3 => "top3",
            Self::Proportional => "proportional",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WinnerTakesAll => "Winner Takes All",
            Self::Top3 => "Top 3",
            Self::Proportional => "Proportional",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_id())
    }
}

impl Serialize for DistributionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_id())
    }
}

impl<'de> Deserialize<'de> for DistributionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id: Option<String> = Option::deserialize(deserializer)?;
        Ok(Self::from_id(id.as_deref()))
    }
}

/// Rank a payout applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizePosition {
    Rank(u32),
    /// Aggregate bucket for this rank and everything below it ("4+")
    AndBelow(u32),
}

impl fmt::Display for PrizePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrizePosition::Rank(rank) => write!(f, "{}", rank),
            PrizePosition::AndBelow(rank) => write!(f, "{}+", rank),
        }
    }
}

// Plain ranks go out as numbers, the aggregate bucket as its label.
impl Serialize for PrizePosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrizePosition::Rank(rank) => serializer.serialize_u32(*rank),
            PrizePosition::AndBelow(_) => serializer.collect_str(self),
        }
    }
}

/// One row of a room's payout table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrizeEntry {
    pub position: PrizePosition,
    pub percentage: u32,
    pub amount: i64,
}

/// Prize distribution structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeStructure {
    /// Percentages for each position (index 0 = 1st place)
    pub payouts: Vec<u32>,
    /// Whether the last row aggregates every remaining rank
    pub open_ended: bool,
}

impl PrizeStructure {
    pub fn winner_takes_all() -> Self {
        Self {
            payouts: vec![100],
            open_ended: false,
        }
    }

    pub fn top3() -> Self {
        Self {
            payouts: vec![60, 30, 10],
            open_ended: false,
        }
    }

    pub fn proportional() -> Self {
        Self {
            payouts: vec![50, 25, 15, 10],
            open_ended: true,
        }
    }

    pub fn for_distribution(distribution: DistributionType) -> Self {
        match distribution {
            DistributionType::WinnerTakesAll => Self::winner_takes_all(),
            DistributionType::Top3 => Self::top3(),
            DistributionType::Proportional => Self::proportional(),
        }
    }

    /// Amount for a percentage of the pool, floored (also for negative pools)
    fn share(total_prize_pool: i64, percentage: u32) -> i64 {
        let amount = (i128::from(total_prize_pool) * i128::from(percentage)).div_euclid(100);
        amount as i64
    }

    /// Calculate prize for a specific position (1-based)
    pub fn prize_for_position(&self, position: u32, total_prize_pool: i64) -> i64 {
        let idx = position.saturating_sub(1) as usize;
        match self.payouts.get(idx) {
            Some(pct) if position > 0 => Self::share(total_prize_pool, *pct),
            _ => 0,
        }
    }

    /// Full ranked payout table for a pool
    pub fn prize_table(&self, total_prize_pool: i64) -> Vec<PrizeEntry> {
        let last = self.payouts.len();
        self.payouts
            .iter()
            .enumerate()
            .map(|(idx, pct)| {
                let rank = idx as u32 + 1;
                let position = if self.open_ended && idx + 1 == last {
                    PrizePosition::AndBelow(rank)
                } else {
                    PrizePosition::Rank(rank)
                };
                PrizeEntry {
                    position,
                    percentage: *pct,
                    amount: Self::share(total_prize_pool, *pct),
                }
            })
            .collect()
    }

    /// Part of the pool left over after flooring every rank
    pub fn undistributed(&self, total_prize_pool: i64) -> i64 {
        let paid: i64 = self
            .payouts
            .iter()
            .map(|pct| Self::share(total_prize_pool, *pct))
            .sum();
        total_prize_pool - paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(entries: &[PrizeEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.amount).collect()
    }

    fn percentages(entries: &[PrizeEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.percentage).collect()
    }

    #[test]
    fn test_winner_takes_all_pays_whole_pool() {
        for pool in [0, 1, 7, 999, 123_457] {
            let table = PrizeStructure::winner_takes_all().prize_table(pool);
            assert_eq!(table.len(), 1);
            assert_eq!(table[0].position, PrizePosition::Rank(1));
            assert_eq!(table[0].amount, pool);
        }
    }

    #[test]
    fn test_top3_payout() {
        let table = PrizeStructure::top3().prize_table(500);
        assert_eq!(percentages(&table), vec![60, 30, 10]);
        assert_eq!(amounts(&table), vec![300, 150, 50]);
    }

    #[test]
    fn test_top3_floors_each_rank() {
        let pool = 1001;
        let table = PrizeStructure::top3().prize_table(pool);
        assert_eq!(amounts(&table), vec![600, 300, 100]);
        assert_eq!(PrizeStructure::top3().undistributed(pool), 1);
    }

    #[test]
    fn test_proportional_payout() {
        let table = PrizeStructure::proportional().prize_table(100);
        assert_eq!(percentages(&table), vec![50, 25, 15, 10]);
        assert_eq!(amounts(&table), vec![50, 25, 15, 10]);
        assert_eq!(table[3].position, PrizePosition::AndBelow(4));
        assert_eq!(table[3].position.to_string(), "4+");
        assert_eq!(table[2].position.to_string(), "3");
    }

    #[test]
    fn test_proportional_remainder_on_odd_pool() {
        let structure = PrizeStructure::proportional();
        let table = structure.prize_table(33);
        assert_eq!(amounts(&table), vec![16, 8, 4, 3]);
        assert_eq!(structure.undistributed(33), 2);
    }

    #[test]
    fn test_percentages_sum_to_100() {
        for distribution in DistributionType::ALL {
            let structure = PrizeStructure::for_distribution(distribution);
            assert_eq!(structure.payouts.iter().sum::<u32>(), 100, "{}", distribution);
        }
    }

    #[test]
    fn test_unknown_distribution_falls_back() {
        assert_eq!(
            DistributionType::from_id(Some("random-mode")),
            DistributionType::WinnerTakesAll
        );
        assert_eq!(DistributionType::from_id(None), DistributionType::WinnerTakesAll);
        assert_eq!(DistributionType::from_id(Some("")), DistributionType::WinnerTakesAll);
        assert_eq!(DistributionType::from_id(Some("top3")), DistributionType::Top3);
    }

    #[test]
    fn test_distribution_id_roundtrip() {
        for distribution in DistributionType::ALL {
            assert_eq!(DistributionType::from_id(Some(distribution.as_id())), distribution);
        }
    }

    #[test]
    fn test_distribution_deserialize_fallback() {
        let parsed: DistributionType = serde_json::from_str("\"random-mode\"").unwrap();
        assert_eq!(parsed, DistributionType::WinnerTakesAll);
        let parsed: DistributionType = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, DistributionType::WinnerTakesAll);
        let parsed: DistributionType = serde_json::from_str("\"proportional\"").unwrap();
        assert_eq!(parsed, DistributionType::Proportional);
    }

    #[test]
    fn test_position_serialization() {
        let table = PrizeStructure::proportional().prize_table(100);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["position"], 1);
        assert_eq!(json[3]["position"], "4+");
        assert_eq!(json[3]["amount"], 10);
    }

    #[test]
    fn test_prize_for_position() {
        let structure = PrizeStructure::top3();
        assert_eq!(structure.prize_for_position(1, 9000), 5400);
        assert_eq!(structure.prize_for_position(3, 9000), 900);
        assert_eq!(structure.prize_for_position(4, 9000), 0);
        assert_eq!(structure.prize_for_position(0, 9000), 0);
    }

    #[test]
    fn test_negative_pool_floors_down() {
        let structure = PrizeStructure::top3();
        assert_eq!(structure.prize_for_position(1, -7), -5);
        assert_eq!(structure.prize_for_position(2, -7), -3);
        assert_eq!(structure.prize_for_position(3, -7), -1);
        assert_eq!(structure.undistributed(-7), 2);
    }

    #[test]
    fn test_large_pool_does_not_overflow() {
        let table = PrizeStructure::top3().prize_table(i64::MAX);
        assert_eq!(table[0].amount, (i128::from(i64::MAX) * 60 / 100) as i64);
        assert!(amounts(&table).iter().all(|a| *a > 0));
    }
}
