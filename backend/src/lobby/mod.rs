pub mod betting;
pub mod prizes;
pub mod wager;

pub use betting::BettingInfo;
pub use prizes::{DistributionType, PrizeEntry, PrizePosition, PrizeStructure};
pub use wager::{Participant, Room};
