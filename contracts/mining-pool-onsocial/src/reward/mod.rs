mod claim;
mod ledger;
mod pots;
mod views;

pub use ledger::{RewardLedger, apportion, payable_share};
pub use pots::{RewardPotOracle, RoundPot, RoundPots};
