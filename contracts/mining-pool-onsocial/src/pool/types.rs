use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct PoolInfo {
    pub owner_id: AccountId,
    pub verifier: Option<AccountId>,
    pub name: String,
    pub description: String,
    /// Keys every miner must supply in its join metadata.
    pub metadata_keys: Vec<String>,
    pub collateral: U128,
    pub capacity: U128,
    pub min_amount: U128,
    pub occupied: U128,
    pub stopped: bool,
    pub created_round: u64,
    pub stopped_round: Option<u64>,
}

impl PoolInfo {
    pub fn is_verifier(&self, account_id: &AccountId) -> bool {
        account_id == &self.owner_id || self.verifier.as_ref() == Some(account_id)
    }

    pub fn available(&self) -> u128 {
        self.capacity.0.saturating_sub(self.occupied.0)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct CreatePoolParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_amount: U128,
    #[serde(default)]
    pub metadata_keys: Vec<String>,
}

/// Collateral and capacity held by one owner across its non-stopped pools.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OwnerTotals {
    pub collateral: U128,
    pub capacity: U128,
}

#[near(serializers = [json])]
pub struct OwnerCapacityView {
    pub current_capacity: U128,
    pub current_stake: U128,
    pub max_capacity: U128,
    pub pool_ids: Vec<u64>,
}
