use crate::*;

use super::ledger::{apportion, payable_share};
use super::pots::RewardPotOracle;

pub(crate) struct RewardQuote {
    pub pool_id: u64,
    pub pool_pot: u128,
    /// The pool pot is computed now and must be stored on claim.
    pub allocates_pot: bool,
    pub penalty_bps: u32,
    pub amount: u128,
}

impl Contract {
    /// Everything a claim for `round` would pay, without touching state.
    pub(crate) fn quote_reward(
        &self,
        miner_id: &AccountId,
        round: u64,
    ) -> Result<RewardQuote, MiningPoolError> {
        let current_round = self.schedule.current_round();
        if round >= current_round {
            return Err(MiningPoolError::InvalidState(format!(
                "Round {} is not finalized",
                round
            )));
        }
        if self.rewards.claimed(round, miner_id).is_some() {
            return Err(MiningPoolError::InvalidState(format!(
                "Reward for round {} already claimed",
                round
            )));
        }

        let pool_id = self.directory.pool_at_round(miner_id, round);
        let no_score = || {
            MiningPoolError::NotFound(format!("No score recorded for {} in round {}", miner_id, round))
        };
        if pool_id == NO_POOL {
            return Err(no_score());
        }
        let score = self
            .verifications
            .score_of(pool_id, round, miner_id)
            .ok_or_else(no_score)?;
        let score_sum = self
            .verifications
            .score_total(pool_id, round)
            .ok_or_else(no_score)?;

        let (pool_pot, allocates_pot) = match self.rewards.pool_pot(pool_id, round) {
            Some(pot) => (pot, false),
            None => {
                let round_pot = self.pots.reward_for_round(round).ok_or_else(|| {
                    MiningPoolError::InvalidState(format!(
                        "Reward pot for round {} is not available yet",
                        round
                    ))
                })?;
                let pool_total = self
                    .snapshots
                    .get(pool_id, round)
                    .map(|s| s.total.0)
                    .unwrap_or(0);
                let round_total = self.snapshots.round_total(round);
                (apportion(round_pot, pool_total, round_total), true)
            }
        };

        let penalty_bps =
            self.ballots
                .penalty_bps(pool_id, round, self.oracle.total_verify_weight(round));
        let amount = payable_share(pool_pot, score, score_sum, penalty_bps);

        Ok(RewardQuote {
            pool_id,
            pool_pot,
            allocates_pot,
            penalty_bps,
            amount,
        })
    }

    pub(crate) fn claim_reward(
        &mut self,
        miner_id: &AccountId,
        round: u64,
    ) -> Result<u128, MiningPoolError> {
        let quote = self.quote_reward(miner_id, round)?;

        if quote.allocates_pot {
            self.pots.seal(round);
            self.rewards.set_pool_pot(quote.pool_id, round, quote.pool_pot);
            events::emit_pool_pot_allocated(miner_id, quote.pool_id, round, quote.pool_pot);
        }
        // Accounting invariant: the claim is recorded before the payout promise is scheduled.
        self.rewards.record_claim(round, miner_id, quote.amount);

        if quote.amount > 0 {
            let _ = self.transfer_out(miner_id, quote.amount, PayoutKind::Reward);
        }
        events::emit_reward_claimed(miner_id, quote.pool_id, round, quote.amount, quote.penalty_bps);
        Ok(quote.amount)
    }

    pub(crate) fn fund_round(
        &mut self,
        source_id: &AccountId,
        round: u64,
        amount: u128,
    ) -> Result<(), MiningPoolError> {
        if source_id != &self.reward_source_id {
            return Err(MiningPoolError::only_owner("reward source"));
        }
        let pot = self.pots.fund(round, amount)?;
        events::emit_round_funded(source_id, round, amount, pot);
        Ok(())
    }
}
