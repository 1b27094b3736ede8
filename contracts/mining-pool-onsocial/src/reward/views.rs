use crate::*;

#[near]
impl Contract {
    pub fn get_round_pot(&self, round: u64) -> Option<RoundPot> {
        self.pots.get(round).cloned()
    }

    pub fn get_pool_pot(&self, pool_id: u64, round: u64) -> Option<U128> {
        self.rewards.pool_pot(pool_id, round).map(U128)
    }

    /// What a claim for `round` would pay now, or `None` if the claim would fail.
    pub fn get_claimable(&self, miner_id: AccountId, round: u64) -> Option<U128> {
        self.quote_reward(&miner_id, round).ok().map(|q| U128(q.amount))
    }

    pub fn get_claimed(&self, miner_id: AccountId, round: u64) -> Option<U128> {
        self.rewards.claimed(round, &miner_id).map(U128)
    }

    pub fn get_unpaid(&self, account_id: AccountId) -> U128 {
        U128(self.rewards.unpaid_of(&account_id))
    }
}
