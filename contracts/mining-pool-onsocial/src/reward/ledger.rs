use crate::*;
use primitive_types::U256;

/// Pool pots, claim records and payouts owed after a failed transfer.
#[near(serializers = [borsh])]
pub struct RewardLedger {
    pool_pots: LookupMap<(u64, u64), u128>,
    claims: LookupMap<(u64, AccountId), u128>,
    unpaid: LookupMap<AccountId, u128>,
}

impl RewardLedger {
    pub fn new() -> Self {
        Self {
            pool_pots: LookupMap::new(StorageKey::PoolPots),
            claims: LookupMap::new(StorageKey::Claims),
            unpaid: LookupMap::new(StorageKey::Unpaid),
        }
    }

    pub fn pool_pot(&self, pool_id: u64, round: u64) -> Option<u128> {
        self.pool_pots.get(&(pool_id, round)).copied()
    }

    pub(crate) fn set_pool_pot(&mut self, pool_id: u64, round: u64, amount: u128) {
        self.pool_pots.insert((pool_id, round), amount);
    }

    pub fn claimed(&self, round: u64, miner_id: &AccountId) -> Option<u128> {
        self.claims.get(&(round, miner_id.clone())).copied()
    }

    pub(crate) fn record_claim(&mut self, round: u64, miner_id: &AccountId, amount: u128) {
        self.claims.insert((round, miner_id.clone()), amount);
    }

    pub fn unpaid_of(&self, account_id: &AccountId) -> u128 {
        self.unpaid.get(account_id).copied().unwrap_or(0)
    }

    pub(crate) fn credit_unpaid(&mut self, account_id: &AccountId, amount: u128) {
        let owed = self.unpaid_of(account_id).saturating_add(amount);
        self.unpaid.insert(account_id.clone(), owed);
    }

    pub(crate) fn take_unpaid(&mut self, account_id: &AccountId) -> u128 {
        self.unpaid.remove(account_id).unwrap_or(0)
    }
}

/// Share of `round_pot` proportional to the pool's snapshot total within the round.
pub fn apportion(round_pot: u128, pool_total: u128, round_total: u128) -> u128 {
    if round_total == 0 || pool_total == 0 {
        return 0;
    }
    (U256::from(round_pot) * U256::from(pool_total) / U256::from(round_total)).as_u128()
}

/// Raw share `pool_pot * score / score_sum`, then `* (10000 - penalty_bps) / 10000`.
pub fn payable_share(pool_pot: u128, score: u128, score_sum: u128, penalty_bps: u32) -> u128 {
    if score_sum == 0 || score == 0 {
        return 0;
    }
    let raw = U256::from(pool_pot) * U256::from(score.min(score_sum)) / U256::from(score_sum);
    let keep_bps = BASIS_POINTS.saturating_sub(penalty_bps as u128);
    (raw * U256::from(keep_bps) / U256::from(BASIS_POINTS)).as_u128()
}
