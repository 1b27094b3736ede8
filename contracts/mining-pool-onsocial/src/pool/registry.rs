use crate::guards::hash_account_id;
use crate::*;

use super::types::{CreatePoolParams, OwnerTotals, PoolInfo};

/// Pool identity, collateral and lifecycle.
#[near(serializers = [borsh])]
pub struct PoolRegistry {
    pools: LookupMap<u64, PoolInfo>,
    owner_pools: LookupMap<AccountId, IterableSet<u64>>,
    owner_totals: LookupMap<AccountId, OwnerTotals>,
    next_pool_id: u64,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self {
            pools: LookupMap::new(StorageKey::Pools),
            owner_pools: LookupMap::new(StorageKey::OwnerPools),
            owner_totals: LookupMap::new(StorageKey::OwnerTotals),
            next_pool_id: FIRST_POOL_ID,
        }
    }

    pub fn get(&self, pool_id: u64) -> Option<&PoolInfo> {
        self.pools.get(&pool_id)
    }

    pub fn require(&self, pool_id: u64) -> Result<&PoolInfo, MiningPoolError> {
        self.pools
            .get(&pool_id)
            .ok_or_else(|| MiningPoolError::pool_not_found(pool_id))
    }

    pub fn require_active(&self, pool_id: u64) -> Result<&PoolInfo, MiningPoolError> {
        let pool = self.require(pool_id)?;
        if pool.stopped {
            return Err(MiningPoolError::pool_stopped(pool_id));
        }
        Ok(pool)
    }

    pub fn require_owned(
        &self,
        pool_id: u64,
        actor_id: &AccountId,
    ) -> Result<&PoolInfo, MiningPoolError> {
        let pool = self.require(pool_id)?;
        if &pool.owner_id != actor_id {
            return Err(MiningPoolError::only_owner("pool owner"));
        }
        Ok(pool)
    }

    pub fn owner_totals(&self, owner_id: &AccountId) -> OwnerTotals {
        self.owner_totals.get(owner_id).cloned().unwrap_or_default()
    }

    pub fn pools_of(&self, owner_id: &AccountId) -> Vec<u64> {
        self.owner_pools
            .get(owner_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn validate_params(params: &CreatePoolParams) -> Result<(), MiningPoolError> {
        if params.name.trim().is_empty() {
            return Err(MiningPoolError::InvalidInput("Pool name cannot be empty".into()));
        }
        if params.name.len() > MAX_POOL_NAME_LEN {
            return Err(MiningPoolError::InvalidInput(format!(
                "Pool name exceeds {MAX_POOL_NAME_LEN} bytes"
            )));
        }
        validate_description(&params.description)?;
        if params.metadata_keys.len() > MAX_METADATA_KEYS {
            return Err(MiningPoolError::InvalidInput(format!(
                "At most {MAX_METADATA_KEYS} metadata keys"
            )));
        }
        for (i, key) in params.metadata_keys.iter().enumerate() {
            if key.is_empty() || key.len() > MAX_METADATA_KEY_LEN {
                return Err(MiningPoolError::InvalidInput(format!(
                    "Metadata key must be 1..={MAX_METADATA_KEY_LEN} bytes"
                )));
            }
            if params.metadata_keys[..i].contains(key) {
                return Err(MiningPoolError::InvalidInput(format!(
                    "Duplicate metadata key: {key}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn insert(
        &mut self,
        owner_id: &AccountId,
        params: CreatePoolParams,
        collateral: u128,
        capacity: u128,
        round: u64,
    ) -> Result<u64, MiningPoolError> {
        let pool_id = self.next_pool_id;
        self.next_pool_id = pool_id.checked_add(1).ok_or_else(MiningPoolError::overflow)?;

        let CreatePoolParams {
            name,
            description,
            min_amount,
            metadata_keys,
        } = params;

        self.pools.insert(
            pool_id,
            PoolInfo {
                owner_id: owner_id.clone(),
                verifier: None,
                name,
                description,
                metadata_keys,
                collateral: U128(collateral),
                capacity: U128(capacity),
                min_amount,
                occupied: U128(0),
                stopped: false,
                created_round: round,
                stopped_round: None,
            },
        );

        if !self.owner_pools.contains_key(owner_id) {
            self.owner_pools.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::OwnerPoolsInner {
                    account_id_hash: hash_account_id(owner_id),
                }),
            );
        }
        if let Some(set) = self.owner_pools.get_mut(owner_id) {
            set.insert(pool_id);
        }

        let mut totals = self.owner_totals(owner_id);
        totals.collateral.0 = totals
            .collateral
            .0
            .checked_add(collateral)
            .ok_or_else(MiningPoolError::overflow)?;
        totals.capacity.0 = totals
            .capacity
            .0
            .checked_add(capacity)
            .ok_or_else(MiningPoolError::overflow)?;
        self.owner_totals.insert(owner_id.clone(), totals);
        Ok(pool_id)
    }

    /// Adds collateral and recomputes capacity from the new aggregate.
    pub(crate) fn expand(
        &mut self,
        pool_id: u64,
        extra: u128,
        stake_multiplier: u32,
    ) -> Result<PoolInfo, MiningPoolError> {
        let mut pool = self.require_active(pool_id)?.clone();
        let old_capacity = pool.capacity.0;
        pool.collateral.0 = pool
            .collateral
            .0
            .checked_add(extra)
            .ok_or_else(MiningPoolError::overflow)?;
        pool.capacity.0 = pool
            .collateral
            .0
            .checked_mul(stake_multiplier as u128)
            .ok_or_else(MiningPoolError::overflow)?;
        if pool.capacity.0 < pool.occupied.0 {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Capacity {} would fall below occupied {}",
                pool.capacity.0, pool.occupied.0
            )));
        }

        let owner_id = pool.owner_id.clone();
        let mut totals = self.owner_totals(&owner_id);
        totals.collateral.0 = totals
            .collateral
            .0
            .checked_add(extra)
            .ok_or_else(MiningPoolError::overflow)?;
        totals.capacity.0 = totals
            .capacity
            .0
            .saturating_sub(old_capacity)
            .checked_add(pool.capacity.0)
            .ok_or_else(MiningPoolError::overflow)?;
        self.owner_totals.insert(owner_id, totals);

        self.pools.insert(pool_id, pool.clone());
        Ok(pool)
    }

    /// Terminal: the record stays queryable, its collateral is released from the owner budget.
    pub(crate) fn stop(&mut self, pool_id: u64, round: u64) -> Result<PoolInfo, MiningPoolError> {
        let mut pool = self.require_active(pool_id)?.clone();
        if round <= pool.created_round {
            return Err(MiningPoolError::InvalidState(
                "Pool cannot be stopped in the round it was created".into(),
            ));
        }
        pool.stopped = true;
        pool.stopped_round = Some(round);

        let mut totals = self.owner_totals(&pool.owner_id);
        totals.collateral.0 = totals.collateral.0.saturating_sub(pool.collateral.0);
        totals.capacity.0 = totals.capacity.0.saturating_sub(pool.capacity.0);
        if totals == OwnerTotals::default() {
            self.owner_totals.remove(&pool.owner_id);
        } else {
            self.owner_totals.insert(pool.owner_id.clone(), totals);
        }

        self.pools.insert(pool_id, pool.clone());
        Ok(pool)
    }

    pub(crate) fn set_description(
        &mut self,
        pool_id: u64,
        description: String,
    ) -> Result<(), MiningPoolError> {
        validate_description(&description)?;
        let mut pool = self.require(pool_id)?.clone();
        pool.description = description;
        self.pools.insert(pool_id, pool);
        Ok(())
    }

    pub(crate) fn set_verifier(
        &mut self,
        pool_id: u64,
        verifier: Option<AccountId>,
    ) -> Result<(), MiningPoolError> {
        let mut pool = self.require(pool_id)?.clone();
        pool.verifier = verifier;
        self.pools.insert(pool_id, pool);
        Ok(())
    }

    /// Writes back a pool whose occupancy changed in the miner directory.
    pub(crate) fn replace(&mut self, pool_id: u64, pool: PoolInfo) {
        self.pools.insert(pool_id, pool);
    }
}

fn validate_description(description: &str) -> Result<(), MiningPoolError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(MiningPoolError::InvalidInput(format!(
            "Description exceeds {MAX_DESCRIPTION_LEN} bytes"
        )));
    }
    Ok(())
}
