use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_oracle_changed(owner_id: &AccountId, old_oracle: &AccountId, new_oracle: &AccountId) {
    EventBuilder::new(CONTRACT, "oracle_changed", owner_id)
        .field("old_oracle", old_oracle)
        .field("new_oracle", new_oracle)
        .emit();
}

pub fn emit_reward_source_changed(owner_id: &AccountId, old_source: &AccountId, new_source: &AccountId) {
    EventBuilder::new(CONTRACT, "reward_source_changed", owner_id)
        .field("old_source", old_source)
        .field("new_source", new_source)
        .emit();
}

pub fn emit_config_updated(
    owner_id: &AccountId,
    stake_multiplier: u32,
    capacity_multiplier: u32,
    miner_cap_divisor: u32,
    min_gov_ratio_bps: u32,
) {
    EventBuilder::new(CONTRACT, "config_updated", owner_id)
        .field("stake_multiplier", stake_multiplier)
        .field("capacity_multiplier", capacity_multiplier)
        .field("miner_cap_divisor", miner_cap_divisor)
        .field("min_gov_ratio_bps", min_gov_ratio_bps)
        .emit();
}

pub fn emit_oracle_report(oracle_id: &AccountId, kind: &str, round: Option<u64>, entries: u32) {
    EventBuilder::new(CONTRACT, "oracle_report", oracle_id)
        .field("kind", kind)
        .field_opt("round", round)
        .field("entries", entries)
        .emit();
}
