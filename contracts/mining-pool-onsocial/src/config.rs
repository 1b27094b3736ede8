use crate::*;

/// Tunables of the capacity policy. The round schedule lives in [`RoundSchedule`]
/// and is fixed at init.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Pool capacity per unit of collateral.
    pub stake_multiplier: u32,
    /// Scales an owner's governance share of supply into a capacity budget.
    pub capacity_multiplier: u32,
    /// Per-miner cap is `total_supply / miner_cap_divisor`.
    pub miner_cap_divisor: u32,
    /// Minimum share of total governance votes an owner must hold to open or expand pools.
    pub min_gov_ratio_bps: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stake_multiplier: DEFAULT_STAKE_MULTIPLIER,
            capacity_multiplier: DEFAULT_CAPACITY_MULTIPLIER,
            miner_cap_divisor: DEFAULT_MINER_CAP_DIVISOR,
            min_gov_ratio_bps: DEFAULT_MIN_GOV_RATIO_BPS,
        }
    }
}

/// `stake_multiplier` is fixed at init so every pool keeps `capacity == collateral * multiplier`.
#[near(serializers = [json])]
#[serde(deny_unknown_fields)]
#[derive(Clone, Default)]
pub struct EngineConfigUpdate {
    pub capacity_multiplier: Option<u32>,
    pub miner_cap_divisor: Option<u32>,
    pub min_gov_ratio_bps: Option<u16>,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), MiningPoolError> {
        if self.stake_multiplier == 0 {
            return Err(MiningPoolError::zero_amount("stake_multiplier"));
        }
        if self.capacity_multiplier == 0 {
            return Err(MiningPoolError::zero_amount("capacity_multiplier"));
        }
        if self.miner_cap_divisor == 0 {
            return Err(MiningPoolError::zero_amount("miner_cap_divisor"));
        }
        if self.min_gov_ratio_bps as u128 > BASIS_POINTS {
            return Err(MiningPoolError::InvalidInput(format!(
                "min_gov_ratio_bps must be <= {BASIS_POINTS}"
            )));
        }
        Ok(())
    }

    pub fn validate_patch(&self, patch: &EngineConfigUpdate) -> Result<(), MiningPoolError> {
        let mut next = self.clone();
        next.apply_patch(patch);
        next.validate()
    }

    pub fn apply_patch(&mut self, patch: &EngineConfigUpdate) {
        if let Some(v) = patch.capacity_multiplier {
            self.capacity_multiplier = v;
        }
        if let Some(v) = patch.miner_cap_divisor {
            self.miner_cap_divisor = v;
        }
        if let Some(v) = patch.min_gov_ratio_bps {
            self.min_gov_ratio_bps = v;
        }
    }
}
