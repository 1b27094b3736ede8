mod builder;
mod types;

mod contract;
mod miner;
mod pool;
mod reward;
mod round;

pub use contract::*;
pub use miner::*;
pub use pool::*;
pub use reward::*;
pub use round::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const POOL: &str = "POOL_UPDATE";
pub(crate) const MINER: &str = "MINER_UPDATE";
pub(crate) const ROUND: &str = "ROUND_UPDATE";
pub(crate) const REWARD: &str = "REWARD_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
