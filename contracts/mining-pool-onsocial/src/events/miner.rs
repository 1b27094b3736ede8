use near_sdk::AccountId;

use super::MINER;
use super::builder::EventBuilder;

pub fn emit_miner_joined(miner_id: &AccountId, pool_id: u64, amount: u128, round: u64, occupied: u128) {
    EventBuilder::new(MINER, "join_pool", miner_id)
        .field("pool_id", pool_id)
        .field("amount", amount)
        .field("round", round)
        .field("occupied", occupied)
        .emit();
}

pub fn emit_miner_exited(miner_id: &AccountId, pool_id: u64, amount: u128, round: u64, occupied: u128) {
    EventBuilder::new(MINER, "exit_pool", miner_id)
        .field("pool_id", pool_id)
        .field("amount", amount)
        .field("round", round)
        .field("occupied", occupied)
        .emit();
}
