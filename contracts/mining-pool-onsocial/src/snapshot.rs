//! Write-once capture of pool membership per (pool, round).

use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct PoolSnapshot {
    pub miners: Vec<AccountId>,
    pub amounts: Vec<U128>,
    pub total: U128,
    pub generated_at: u64,
    pub generated: bool,
}

impl PoolSnapshot {
    pub fn contains(&self, miner_id: &AccountId) -> bool {
        self.miners.contains(miner_id)
    }

    pub fn amount_of(&self, miner_id: &AccountId) -> Option<u128> {
        self.miners
            .iter()
            .position(|m| m == miner_id)
            .and_then(|i| self.amounts.get(i))
            .map(|a| a.0)
    }
}

#[near(serializers = [borsh])]
pub struct SnapshotStore {
    snapshots: LookupMap<(u64, u64), PoolSnapshot>,
    // Sum of snapshot totals across all pools of a round; the cross-pool reward weight.
    round_totals: LookupMap<u64, u128>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: LookupMap::new(StorageKey::Snapshots),
            round_totals: LookupMap::new(StorageKey::RoundTotals),
        }
    }

    pub fn get(&self, pool_id: u64, round: u64) -> Option<&PoolSnapshot> {
        self.snapshots.get(&(pool_id, round))
    }

    pub fn round_total(&self, round: u64) -> u128 {
        self.round_totals.get(&round).copied().unwrap_or(0)
    }

    /// Freezes the pool's current membership under `round`. Returns whether a snapshot was written.
    pub fn trigger_if_needed(
        &mut self,
        directory: &MinerDirectory,
        pool_id: u64,
        round: u64,
    ) -> bool {
        if round == 0 || self.snapshots.contains_key(&(pool_id, round)) {
            return false;
        }

        let (miners, amounts): (Vec<AccountId>, Vec<U128>) = directory
            .members(pool_id)
            .into_iter()
            .map(|(miner_id, amount)| (miner_id, U128(amount)))
            .unzip();
        let total: u128 = amounts.iter().map(|a| a.0).sum();
        let miner_count = miners.len() as u32;

        self.snapshots.insert(
            (pool_id, round),
            PoolSnapshot {
                miners,
                amounts,
                total: U128(total),
                generated_at: env::block_timestamp(),
                generated: true,
            },
        );
        let round_total = self.round_total(round).saturating_add(total);
        self.round_totals.insert(round, round_total);

        events::emit_snapshot_generated(
            &env::current_account_id(),
            pool_id,
            round,
            miner_count,
            total,
        );
        true
    }
}

impl ParticipationHook for SnapshotStore {
    fn before_change(&mut self, directory: &MinerDirectory, pool_id: u64, round: u64) {
        self.trigger_if_needed(directory, pool_id, round);
    }
}

#[near]
impl Contract {
    pub fn get_snapshot(&self, pool_id: u64, round: u64) -> Option<PoolSnapshot> {
        self.snapshots.get(pool_id, round).cloned()
    }

    pub fn is_in_snapshot(&self, pool_id: u64, round: u64, miner_id: AccountId) -> bool {
        self.snapshots
            .get(pool_id, round)
            .is_some_and(|s| s.contains(&miner_id))
    }

    pub fn get_round_total(&self, round: u64) -> U128 {
        U128(self.snapshots.round_total(round))
    }
}
