use near_sdk::AccountId;

use super::POOL;
use super::builder::EventBuilder;

pub fn emit_pool_created(
    owner_id: &AccountId,
    pool_id: u64,
    name: &str,
    collateral: u128,
    capacity: u128,
    min_amount: u128,
    metadata_keys: &[String],
) {
    EventBuilder::new(POOL, "create_pool", owner_id)
        .field("pool_id", pool_id)
        .field("name", name)
        .field("collateral", collateral)
        .field("capacity", capacity)
        .field("min_amount", min_amount)
        .field("metadata_keys", metadata_keys)
        .emit();
}

pub fn emit_pool_expanded(
    owner_id: &AccountId,
    pool_id: u64,
    extra: u128,
    collateral: u128,
    capacity: u128,
) {
    EventBuilder::new(POOL, "expand_pool", owner_id)
        .field("pool_id", pool_id)
        .field("extra", extra)
        .field("collateral", collateral)
        .field("capacity", capacity)
        .emit();
}

pub fn emit_pool_stopped(owner_id: &AccountId, pool_id: u64, collateral: u128, round: u64) {
    EventBuilder::new(POOL, "stop_pool", owner_id)
        .field("pool_id", pool_id)
        .field("collateral", collateral)
        .field("round", round)
        .emit();
}

pub fn emit_description_updated(owner_id: &AccountId, pool_id: u64, description: &str) {
    EventBuilder::new(POOL, "set_description", owner_id)
        .field("pool_id", pool_id)
        .field("description", description)
        .emit();
}

pub fn emit_verifier_updated(owner_id: &AccountId, pool_id: u64, verifier: Option<&AccountId>) {
    EventBuilder::new(POOL, "set_verifier", owner_id)
        .field("pool_id", pool_id)
        .field_opt("verifier", verifier)
        .emit();
}
