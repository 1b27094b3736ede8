use crate::*;

use super::registry::PoolRegistry;
use super::types::CreatePoolParams;

impl Contract {
    /// `collateral` has already been received from the owner via `ft_transfer_call`.
    pub(crate) fn create_pool(
        &mut self,
        owner_id: &AccountId,
        params: CreatePoolParams,
        collateral: u128,
    ) -> Result<u64, MiningPoolError> {
        PoolRegistry::validate_params(&params)?;
        if collateral == 0 {
            return Err(MiningPoolError::zero_amount("Collateral"));
        }
        let capacity = self.capacity.pool_capacity(collateral)?;
        let totals = self.registry.owner_totals(owner_id);
        self.capacity
            .authorize(owner_id, &totals, capacity, &self.oracle)?;

        let round = self.schedule.current_round();
        let name = params.name.clone();
        let min_amount = params.min_amount.0;
        let metadata_keys = params.metadata_keys.clone();
        let pool_id = self
            .registry
            .insert(owner_id, params, collateral, capacity, round)?;

        events::emit_pool_created(
            owner_id,
            pool_id,
            &name,
            collateral,
            capacity,
            min_amount,
            &metadata_keys,
        );
        Ok(pool_id)
    }

    pub(crate) fn expand_pool(
        &mut self,
        actor_id: &AccountId,
        pool_id: u64,
        extra: u128,
    ) -> Result<(), MiningPoolError> {
        let pool = self.registry.require_owned(pool_id, actor_id)?;
        if pool.stopped {
            return Err(MiningPoolError::pool_stopped(pool_id));
        }
        if extra == 0 {
            return Err(MiningPoolError::zero_amount("Extra collateral"));
        }
        let new_collateral = pool
            .collateral
            .0
            .checked_add(extra)
            .ok_or_else(MiningPoolError::overflow)?;
        let added_capacity = self
            .capacity
            .pool_capacity(new_collateral)?
            .checked_sub(pool.capacity.0)
            .ok_or_else(|| {
                MiningPoolError::InvalidState("Expansion cannot shrink capacity".into())
            })?;
        let totals = self.registry.owner_totals(actor_id);
        self.capacity
            .authorize(actor_id, &totals, added_capacity, &self.oracle)?;

        let pool = self
            .registry
            .expand(pool_id, extra, self.capacity.config.stake_multiplier)?;
        events::emit_pool_expanded(actor_id, pool_id, extra, pool.collateral.0, pool.capacity.0);
        Ok(())
    }

    /// Returns the released collateral. Miners keep their participation and exit on their own.
    pub(crate) fn stop_pool(
        &mut self,
        actor_id: &AccountId,
        pool_id: u64,
    ) -> Result<u128, MiningPoolError> {
        self.registry.require_owned(pool_id, actor_id)?;
        let round = self.schedule.current_round();
        let pool = self.registry.stop(pool_id, round)?;
        let collateral = pool.collateral.0;

        let _ = self.transfer_out(actor_id, collateral, PayoutKind::Collateral);
        events::emit_pool_stopped(actor_id, pool_id, collateral, round);
        Ok(collateral)
    }

    pub(crate) fn set_pool_description(
        &mut self,
        actor_id: &AccountId,
        pool_id: u64,
        description: String,
    ) -> Result<(), MiningPoolError> {
        self.registry.require_owned(pool_id, actor_id)?;
        self.registry.set_description(pool_id, description.clone())?;
        events::emit_description_updated(actor_id, pool_id, &description);
        Ok(())
    }

    pub(crate) fn set_pool_verifier(
        &mut self,
        actor_id: &AccountId,
        pool_id: u64,
        verifier: Option<AccountId>,
    ) -> Result<(), MiningPoolError> {
        self.registry.require_owned(pool_id, actor_id)?;
        self.registry.set_verifier(pool_id, verifier.clone())?;
        events::emit_verifier_updated(actor_id, pool_id, verifier.as_ref());
        Ok(())
    }
}
