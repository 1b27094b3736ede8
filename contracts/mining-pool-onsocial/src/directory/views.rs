use crate::*;

#[near]
impl Contract {
    pub fn get_miner(&self, miner_id: AccountId) -> Option<MinerParticipation> {
        self.directory.participation(&miner_id).cloned()
    }

    /// Pool the miner occupied at the start of `round`; 0 if none.
    pub fn get_pool_for_miner_at_round(&self, miner_id: AccountId, round: u64) -> u64 {
        self.directory.pool_at_round(&miner_id, round)
    }

    pub fn get_pool_history(&self, miner_id: AccountId) -> Vec<PoolChange> {
        self.directory.history_of(&miner_id)
    }
}
