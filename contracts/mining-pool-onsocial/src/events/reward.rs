use near_sdk::AccountId;

use super::REWARD;
use super::builder::EventBuilder;

pub fn emit_round_funded(source_id: &AccountId, round: u64, amount: u128, pot: u128) {
    EventBuilder::new(REWARD, "fund_round", source_id)
        .field("round", round)
        .field("amount", amount)
        .field("pot", pot)
        .emit();
}

pub fn emit_pool_pot_allocated(miner_id: &AccountId, pool_id: u64, round: u64, amount: u128) {
    EventBuilder::new(REWARD, "allocate_pool_pot", miner_id)
        .field("pool_id", pool_id)
        .field("round", round)
        .field("amount", amount)
        .emit();
}

pub fn emit_reward_claimed(
    miner_id: &AccountId,
    pool_id: u64,
    round: u64,
    amount: u128,
    penalty_bps: u32,
) {
    EventBuilder::new(REWARD, "claim_reward", miner_id)
        .field("pool_id", pool_id)
        .field("round", round)
        .field("amount", amount)
        .field("penalty_bps", penalty_bps)
        .emit();
}

pub fn emit_payout_failed(account_id: &AccountId, amount: u128, reason: &str) {
    EventBuilder::new(REWARD, "payout_failed", account_id)
        .field("amount", amount)
        .field("reason", reason)
        .emit();
}

pub fn emit_unpaid_withdrawn(account_id: &AccountId, amount: u128) {
    EventBuilder::new(REWARD, "withdraw_unpaid", account_id)
        .field("amount", amount)
        .emit();
}
