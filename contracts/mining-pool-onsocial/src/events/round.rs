use near_sdk::AccountId;

use super::ROUND;
use super::builder::EventBuilder;

pub fn emit_snapshot_generated(
    contract_id: &AccountId,
    pool_id: u64,
    round: u64,
    miner_count: u32,
    total: u128,
) {
    EventBuilder::new(ROUND, "snapshot_generated", contract_id)
        .field("pool_id", pool_id)
        .field("round", round)
        .field("miner_count", miner_count)
        .field("total", total)
        .emit();
}

pub fn emit_verification_submitted(
    submitter: &AccountId,
    pool_id: u64,
    round: u64,
    miner_count: u32,
    score_sum: u128,
) {
    EventBuilder::new(ROUND, "submit_verification", submitter)
        .field("pool_id", pool_id)
        .field("round", round)
        .field("miner_count", miner_count)
        .field("score_sum", score_sum)
        .emit();
}

pub fn emit_distrust_voted(voter: &AccountId, pool_id: u64, round: u64, weight: u128, total: u128) {
    EventBuilder::new(ROUND, "vote_distrust", voter)
        .field("pool_id", pool_id)
        .field("round", round)
        .field("weight", weight)
        .field("total", total)
        .emit();
}
