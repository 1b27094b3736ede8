use std::collections::BTreeMap;

use near_sdk::json_types::U128;
use near_sdk::near;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct MinerParticipation {
    pub pool_id: u64,
    pub amount: U128,
    pub joined_round: u64,
    pub metadata: BTreeMap<String, String>,
    // Position in the pool miner list; kept in sync by swap-remove.
    #[serde(skip)]
    pub(crate) index: u32,
}

/// Pool occupied from `round` on; pool 0 means none.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolChange {
    pub round: u64,
    pub pool_id: u64,
}
