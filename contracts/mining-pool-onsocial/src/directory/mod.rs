mod membership;
mod types;
mod views;

pub use types::{MinerParticipation, PoolChange};

use std::collections::BTreeMap;

use crate::guards::hash_account_id;
use crate::*;

/// Runs before the directory mutates a pool's membership.
pub trait ParticipationHook {
    fn before_change(&mut self, directory: &MinerDirectory, pool_id: u64, round: u64);
}

/// Who occupies which pool, plus per-miner pool assignment history by round.
#[near(serializers = [borsh])]
pub struct MinerDirectory {
    participations: LookupMap<AccountId, MinerParticipation>,
    pool_miners: LookupMap<u64, Vector<AccountId>>,
    history: LookupMap<AccountId, Vector<PoolChange>>,
}

impl MinerDirectory {
    pub fn new() -> Self {
        Self {
            participations: LookupMap::new(StorageKey::Participations),
            pool_miners: LookupMap::new(StorageKey::PoolMiners),
            history: LookupMap::new(StorageKey::History),
        }
    }

    pub fn participation(&self, miner_id: &AccountId) -> Option<&MinerParticipation> {
        self.participations.get(miner_id)
    }

    /// Current members of a pool with their amounts, in list order.
    pub fn members(&self, pool_id: u64) -> Vec<(AccountId, u128)> {
        let Some(miners) = self.pool_miners.get(&pool_id) else {
            return Vec::new();
        };
        miners
            .iter()
            .map(|miner_id| {
                let amount = self
                    .participations
                    .get(miner_id)
                    .map(|p| p.amount.0)
                    .unwrap_or(0);
                (miner_id.clone(), amount)
            })
            .collect()
    }

    pub fn member_count(&self, pool_id: u64) -> u32 {
        self.pool_miners.get(&pool_id).map(|m| m.len()).unwrap_or(0)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn admit<H: ParticipationHook>(
        &mut self,
        hook: &mut H,
        pool_id: u64,
        pool: &mut PoolInfo,
        miner_id: &AccountId,
        amount: u128,
        metadata: BTreeMap<String, String>,
        round: u64,
        miner_cap: u128,
    ) -> Result<(), MiningPoolError> {
        if pool.stopped {
            return Err(MiningPoolError::pool_stopped(pool_id));
        }
        if let Some(existing) = self.participations.get(miner_id) {
            return Err(MiningPoolError::InvalidState(format!(
                "Already joined pool {}",
                existing.pool_id
            )));
        }
        if amount == 0 {
            return Err(MiningPoolError::zero_amount("Amount"));
        }
        if amount < pool.min_amount.0 {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Amount {} is below the pool minimum {}",
                amount, pool.min_amount.0
            )));
        }
        if amount > miner_cap {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Amount {} exceeds the per-miner cap {}",
                amount, miner_cap
            )));
        }
        if amount > pool.available() {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Pool {} has {} capacity left",
                pool_id,
                pool.available()
            )));
        }
        validate_metadata(&pool.metadata_keys, &metadata)?;

        hook.before_change(self, pool_id, round);

        if !self.pool_miners.contains_key(&pool_id) {
            self.pool_miners.insert(
                pool_id,
                Vector::new(StorageKey::PoolMinersInner { pool_id }),
            );
        }
        let miners = self
            .pool_miners
            .get_mut(&pool_id)
            .ok_or_else(|| MiningPoolError::InternalError("Pool miner list missing".into()))?;
        let index = miners.len();
        miners.push(miner_id.clone());

        self.participations.insert(
            miner_id.clone(),
            MinerParticipation {
                pool_id,
                amount: U128(amount),
                joined_round: round,
                metadata,
                index,
            },
        );
        self.record_change(miner_id, round, pool_id);
        pool.occupied.0 += amount;
        Ok(())
    }

    /// Removes the miner from `pool_id` and returns its full amount.
    pub(crate) fn release<H: ParticipationHook>(
        &mut self,
        hook: &mut H,
        pool_id: u64,
        pool: &mut PoolInfo,
        miner_id: &AccountId,
        round: u64,
    ) -> Result<u128, MiningPoolError> {
        let participation = match self.participations.get(miner_id) {
            Some(p) if p.pool_id == pool_id => p.clone(),
            _ => {
                return Err(MiningPoolError::InvalidState(format!(
                    "Not a member of pool {}",
                    pool_id
                )));
            }
        };

        hook.before_change(self, pool_id, round);

        let miners = self
            .pool_miners
            .get_mut(&pool_id)
            .ok_or_else(|| MiningPoolError::InternalError("Pool miner list missing".into()))?;
        miners.swap_remove(participation.index);
        let moved = miners.get(participation.index).cloned();
        if let Some(moved_id) = moved {
            if let Some(p) = self.participations.get_mut(&moved_id) {
                p.index = participation.index;
            }
        }

        self.participations.remove(miner_id);
        self.record_change(miner_id, round, NO_POOL);
        pool.occupied.0 = pool.occupied.0.saturating_sub(participation.amount.0);
        Ok(participation.amount.0)
    }

    /// Appends a change point; a second change in the same round overwrites the first.
    fn record_change(&mut self, miner_id: &AccountId, round: u64, pool_id: u64) {
        if !self.history.contains_key(miner_id) {
            self.history.insert(
                miner_id.clone(),
                Vector::new(StorageKey::HistoryInner {
                    account_id_hash: hash_account_id(miner_id),
                }),
            );
        }
        let Some(changes) = self.history.get_mut(miner_id) else {
            return;
        };
        let change = PoolChange { round, pool_id };
        let len = changes.len();
        match len.checked_sub(1).and_then(|last| changes.get_mut(last)) {
            Some(last) if last.round == round => *last = change,
            _ => changes.push(change),
        }
    }

    /// Pool the miner occupied at the start of `round`.
    ///
    /// A change recorded in `round` itself is ignored: rewards for a round follow the pool
    /// held when it began, so the lookup steps back to the previous change point.
    pub fn pool_at_round(&self, miner_id: &AccountId, round: u64) -> u64 {
        if round == 0 {
            return NO_POOL;
        }
        let Some(changes) = self.history.get(miner_id) else {
            return NO_POOL;
        };

        // Lower bound: number of change points with `round <= target`.
        let (mut lo, mut hi) = (0u32, changes.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match changes.get(mid) {
                Some(change) if change.round <= round => lo = mid + 1,
                _ => hi = mid,
            }
        }
        let Some(found) = lo.checked_sub(1).and_then(|i| changes.get(i).map(|c| (i, *c))) else {
            return NO_POOL;
        };
        let (index, change) = found;
        if change.round < round {
            return change.pool_id;
        }
        index
            .checked_sub(1)
            .and_then(|prev| changes.get(prev))
            .map(|c| c.pool_id)
            .unwrap_or(NO_POOL)
    }

    pub fn history_of(&self, miner_id: &AccountId) -> Vec<PoolChange> {
        self.history
            .get(miner_id)
            .map(|changes| changes.iter().copied().collect())
            .unwrap_or_default()
    }
}

fn validate_metadata(
    required_keys: &[String],
    metadata: &BTreeMap<String, String>,
) -> Result<(), MiningPoolError> {
    if metadata.len() > MAX_METADATA_KEYS {
        return Err(MiningPoolError::InvalidInput(format!(
            "At most {MAX_METADATA_KEYS} metadata entries"
        )));
    }
    if let Some(missing) = required_keys.iter().find(|k| !metadata.contains_key(*k)) {
        return Err(MiningPoolError::InvalidInput(format!(
            "Missing required metadata key: {missing}"
        )));
    }
    if metadata
        .iter()
        .any(|(k, v)| k.len() > MAX_METADATA_KEY_LEN || v.len() > MAX_METADATA_VALUE_LEN)
    {
        return Err(MiningPoolError::InvalidInput(
            "Metadata entry exceeds size limits".into(),
        ));
    }
    Ok(())
}
