//! Admission limits derived from collateral, token supply and governance share.

use crate::*;
use primitive_types::U256;

#[near(serializers = [borsh])]
pub struct CapacityPolicy {
    pub config: EngineConfig,
}

impl CapacityPolicy {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn pool_capacity(&self, collateral: u128) -> Result<u128, MiningPoolError> {
        collateral
            .checked_mul(self.config.stake_multiplier as u128)
            .ok_or_else(MiningPoolError::overflow)
    }

    /// `floor(total_supply * owner_votes / total_votes) * capacity_multiplier`, saturating.
    pub fn owner_max_capacity<O>(&self, owner_id: &AccountId, oracle: &O) -> u128
    where
        O: GovernanceOracle + SupplyOracle,
    {
        let owner_votes = oracle.valid_votes_of(owner_id);
        let total_votes = oracle.total_votes();
        if owner_votes == 0 || total_votes == 0 {
            return 0;
        }
        let share = U256::from(oracle.total_supply()) * U256::from(owner_votes)
            / U256::from(total_votes);
        if share > U256::from(u128::MAX) {
            return u128::MAX;
        }
        share
            .as_u128()
            .saturating_mul(self.config.capacity_multiplier as u128)
    }

    pub fn miner_max_amount<O: SupplyOracle>(&self, oracle: &O) -> u128 {
        oracle.total_supply() / self.config.miner_cap_divisor as u128
    }

    /// `owner_votes / total_votes >= min_gov_ratio`, without division.
    pub fn meets_gov_ratio<O: GovernanceOracle>(&self, owner_id: &AccountId, oracle: &O) -> bool {
        let total_votes = oracle.total_votes();
        if total_votes == 0 {
            return false;
        }
        U256::from(oracle.valid_votes_of(owner_id)) * U256::from(BASIS_POINTS)
            >= U256::from(total_votes) * U256::from(self.config.min_gov_ratio_bps)
    }

    /// Both gates must pass before an owner may add `new_capacity` to its pools.
    pub fn authorize<O>(
        &self,
        owner_id: &AccountId,
        current: &OwnerTotals,
        new_capacity: u128,
        oracle: &O,
    ) -> Result<(), MiningPoolError>
    where
        O: GovernanceOracle + SupplyOracle,
    {
        if !self.meets_gov_ratio(owner_id, oracle) {
            return Err(MiningPoolError::Unauthorized(format!(
                "Governance share of {} is below the minimum of {} bps",
                owner_id, self.config.min_gov_ratio_bps
            )));
        }
        let max = self.owner_max_capacity(owner_id, oracle);
        let requested = current
            .capacity
            .0
            .checked_add(new_capacity)
            .ok_or_else(MiningPoolError::overflow)?;
        if requested > max {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Owner capacity {} would exceed budget {}",
                requested, max
            )));
        }
        Ok(())
    }
}
