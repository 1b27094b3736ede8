//! Governance-weighted distrust votes against a pool's verification for a round.

use crate::*;
use primitive_types::U256;

#[near(serializers = [borsh])]
pub struct DistrustBallots {
    totals: LookupMap<(u64, u64), u128>,
    votes: LookupMap<(u64, u64, AccountId), u128>,
    /// Highest cumulative weight a voter has cast against any single pool in a round.
    peaks: LookupMap<(u64, AccountId), u128>,
}

#[near(serializers = [json])]
pub struct DistrustView {
    pub total_weight: U128,
    pub total_verify_weight: U128,
    pub penalty_bps: u32,
}

impl DistrustBallots {
    pub fn new() -> Self {
        Self {
            totals: LookupMap::new(StorageKey::Ballots),
            votes: LookupMap::new(StorageKey::BallotVotes),
            peaks: LookupMap::new(StorageKey::BallotPeaks),
        }
    }

    pub fn distrust_of(&self, pool_id: u64, round: u64) -> u128 {
        self.totals.get(&(pool_id, round)).copied().unwrap_or(0)
    }

    pub fn cast_by(&self, pool_id: u64, round: u64, voter: &AccountId) -> u128 {
        self.votes
            .get(&(pool_id, round, voter.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn peak_cast(&self, round: u64, voter: &AccountId) -> u128 {
        self.peaks
            .get(&(round, voter.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// A re-reported weight may not fall below what the voter already cast in that round.
    pub(crate) fn check_weights_cover_votes(
        &self,
        round: u64,
        entries: &[WeightEntry],
    ) -> Result<(), MiningPoolError> {
        for entry in entries {
            let cast = self.peak_cast(round, &entry.account_id);
            if entry.weight.0 < cast {
                return Err(MiningPoolError::InvalidInput(format!(
                    "Weight of {} is below the {} already cast in round {}",
                    entry.account_id, cast, round
                )));
            }
        }
        Ok(())
    }

    pub fn remaining(&self, pool_id: u64, round: u64, voter: &AccountId, eligible: u128) -> u128 {
        eligible.saturating_sub(self.cast_by(pool_id, round, voter))
    }

    /// Adds `weight` to the voter's running total; returns the pool's new distrust total.
    pub(crate) fn cast(
        &mut self,
        pool_id: u64,
        round: u64,
        voter: &AccountId,
        weight: u128,
        eligible: u128,
    ) -> Result<u128, MiningPoolError> {
        if weight == 0 {
            return Err(MiningPoolError::zero_amount("Vote weight"));
        }
        let cast = self
            .cast_by(pool_id, round, voter)
            .checked_add(weight)
            .ok_or_else(MiningPoolError::overflow)?;
        if cast > eligible {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Cumulative weight {} exceeds eligible weight {}",
                cast, eligible
            )));
        }
        let total = self
            .distrust_of(pool_id, round)
            .checked_add(weight)
            .ok_or_else(MiningPoolError::overflow)?;

        self.votes.insert((pool_id, round, voter.clone()), cast);
        self.totals.insert((pool_id, round), total);
        if cast > self.peak_cast(round, voter) {
            self.peaks.insert((round, voter.clone()), cast);
        }
        Ok(total)
    }

    /// `min(10000, distrust * 10000 / total_verify_weight)`; zero when nobody verified.
    pub fn penalty_bps(&self, pool_id: u64, round: u64, total_verify_weight: u128) -> u32 {
        if total_verify_weight == 0 {
            return 0;
        }
        let ratio = U256::from(self.distrust_of(pool_id, round)) * U256::from(BASIS_POINTS)
            / U256::from(total_verify_weight);
        if ratio >= U256::from(BASIS_POINTS) {
            BASIS_POINTS as u32
        } else {
            ratio.as_u32()
        }
    }
}

impl Contract {
    pub(crate) fn vote_distrust(
        &mut self,
        voter: &AccountId,
        pool_id: u64,
        weight: u128,
    ) -> Result<(), MiningPoolError> {
        self.registry.require(pool_id)?;
        if weight == 0 {
            return Err(MiningPoolError::zero_amount("Vote weight"));
        }
        let round = self.schedule.current_round();
        if !self.verifications.is_submitted(pool_id, round) {
            return Err(MiningPoolError::InvalidState(format!(
                "No verification for pool {} in round {}",
                pool_id, round
            )));
        }
        let eligible = self.oracle.verify_weight_of(voter, round);
        if eligible == 0 {
            return Err(MiningPoolError::Unauthorized(format!(
                "{} has no verification weight in round {}",
                voter, round
            )));
        }

        let total = self
            .ballots
            .cast(pool_id, round, voter, weight, eligible)?;
        events::emit_distrust_voted(voter, pool_id, round, weight, total);
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn get_distrust(&self, pool_id: u64, round: u64) -> DistrustView {
        let total_verify_weight = self.oracle.total_verify_weight(round);
        DistrustView {
            total_weight: U128(self.ballots.distrust_of(pool_id, round)),
            total_verify_weight: U128(total_verify_weight),
            penalty_bps: self.ballots.penalty_bps(pool_id, round, total_verify_weight),
        }
    }

    /// Weight `voter` may still cast against the pool in the current round.
    pub fn get_distrust_allowance(&self, pool_id: u64, voter: AccountId) -> U128 {
        let round = self.schedule.current_round();
        let eligible = self.oracle.verify_weight_of(&voter, round);
        U128(self.ballots.remaining(pool_id, round, &voter, eligible))
    }
}
