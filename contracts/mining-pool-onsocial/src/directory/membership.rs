use std::collections::BTreeMap;

use crate::*;

impl Contract {
    /// `amount` has already been received from the miner via `ft_transfer_call`.
    pub(crate) fn join_pool(
        &mut self,
        miner_id: &AccountId,
        pool_id: u64,
        amount: u128,
        metadata: BTreeMap<String, String>,
    ) -> Result<(), MiningPoolError> {
        let round = self.schedule.current_round();
        let mut pool = self.registry.require_active(pool_id)?.clone();
        let miner_cap = self.capacity.miner_max_amount(&self.oracle);

        self.directory.admit(
            &mut self.snapshots,
            pool_id,
            &mut pool,
            miner_id,
            amount,
            metadata,
            round,
            miner_cap,
        )?;
        let occupied = pool.occupied.0;
        self.registry.replace(pool_id, pool);

        events::emit_miner_joined(miner_id, pool_id, amount, round, occupied);
        Ok(())
    }

    /// Returns the miner's full amount immediately; there is no unlock delay.
    pub(crate) fn exit_pool(
        &mut self,
        miner_id: &AccountId,
        pool_id: u64,
    ) -> Result<u128, MiningPoolError> {
        let round = self.schedule.current_round();
        let mut pool = self.registry.require(pool_id)?.clone();

        let amount = self.directory.release(
            &mut self.snapshots,
            pool_id,
            &mut pool,
            miner_id,
            round,
        )?;
        let occupied = pool.occupied.0;
        self.registry.replace(pool_id, pool);

        let _ = self.transfer_out(miner_id, amount, PayoutKind::Stake);
        events::emit_miner_exited(miner_id, pool_id, amount, round, occupied);
        Ok(amount)
    }
}
