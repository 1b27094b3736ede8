use std::collections::HashSet;

use crate::*;

/// Per-miner scores a reward computation can draw from.
pub trait ScoreSource {
    fn score_of(&self, pool_id: u64, round: u64, miner_id: &AccountId) -> Option<u128>;
    fn score_total(&self, pool_id: u64, round: u64) -> Option<u128>;
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct VerificationResult {
    pub submitter: AccountId,
    pub miner_count: u32,
    pub score_sum: U128,
    pub submitted_at: u64,
    pub submitted: bool,
}

#[near(serializers = [borsh])]
pub struct VerificationLedger {
    results: LookupMap<(u64, u64), VerificationResult>,
    scores: LookupMap<(u64, u64, AccountId), u128>,
}

impl VerificationLedger {
    pub fn new() -> Self {
        Self {
            results: LookupMap::new(StorageKey::Verifications),
            scores: LookupMap::new(StorageKey::Scores),
        }
    }

    pub fn get(&self, pool_id: u64, round: u64) -> Option<&VerificationResult> {
        self.results.get(&(pool_id, round))
    }

    pub fn is_submitted(&self, pool_id: u64, round: u64) -> bool {
        self.results.contains_key(&(pool_id, round))
    }

    /// Scores must cover exactly the snapshot's miners and may not exceed its total.
    pub(crate) fn record(
        &mut self,
        snapshot: &PoolSnapshot,
        pool_id: u64,
        round: u64,
        submitter: &AccountId,
        miners: Vec<AccountId>,
        scores: Vec<U128>,
    ) -> Result<VerificationResult, MiningPoolError> {
        if self.is_submitted(pool_id, round) {
            return Err(MiningPoolError::InvalidState(format!(
                "Verification already submitted for pool {} round {}",
                pool_id, round
            )));
        }
        check_shape(&miners, &scores)?;
        if miners.len() != snapshot.miners.len() {
            return Err(MiningPoolError::ShapeMismatch(format!(
                "Expected {} miners, got {}",
                snapshot.miners.len(),
                miners.len()
            )));
        }
        let snapshot_set: HashSet<&AccountId> = snapshot.miners.iter().collect();
        let mut seen: HashSet<&AccountId> = HashSet::with_capacity(miners.len());
        for miner_id in &miners {
            if !snapshot_set.contains(miner_id) {
                return Err(MiningPoolError::ShapeMismatch(format!(
                    "{} is not in the snapshot",
                    miner_id
                )));
            }
            if !seen.insert(miner_id) {
                return Err(MiningPoolError::ShapeMismatch(format!(
                    "{} is listed twice",
                    miner_id
                )));
            }
        }

        let score_sum = scores
            .iter()
            .try_fold(0u128, |acc, s| acc.checked_add(s.0))
            .ok_or_else(MiningPoolError::overflow)?;
        if score_sum > snapshot.total.0 {
            return Err(MiningPoolError::LimitExceeded(format!(
                "Score sum {} exceeds snapshot total {}",
                score_sum, snapshot.total.0
            )));
        }

        let result = VerificationResult {
            submitter: submitter.clone(),
            miner_count: miners.len() as u32,
            score_sum: U128(score_sum),
            submitted_at: env::block_timestamp(),
            submitted: true,
        };
        for (miner_id, score) in miners.into_iter().zip(scores) {
            self.scores.insert((pool_id, round, miner_id), score.0);
        }
        self.results.insert((pool_id, round), result.clone());
        Ok(result)
    }
}

pub(crate) fn check_shape(miners: &[AccountId], scores: &[U128]) -> Result<(), MiningPoolError> {
    if miners.is_empty() {
        return Err(MiningPoolError::ShapeMismatch("No miners submitted".into()));
    }
    if miners.len() != scores.len() {
        return Err(MiningPoolError::ShapeMismatch(format!(
            "{} miners but {} scores",
            miners.len(),
            scores.len()
        )));
    }
    Ok(())
}

impl ScoreSource for VerificationLedger {
    fn score_of(&self, pool_id: u64, round: u64, miner_id: &AccountId) -> Option<u128> {
        self.scores.get(&(pool_id, round, miner_id.clone())).copied()
    }

    fn score_total(&self, pool_id: u64, round: u64) -> Option<u128> {
        self.get(pool_id, round).map(|r| r.score_sum.0)
    }
}

impl Contract {
    pub(crate) fn submit_verification(
        &mut self,
        actor_id: &AccountId,
        pool_id: u64,
        miners: Vec<AccountId>,
        scores: Vec<U128>,
    ) -> Result<(), MiningPoolError> {
        let pool = self.registry.require(pool_id)?;
        if !pool.is_verifier(actor_id) {
            return Err(MiningPoolError::only_owner("pool owner or verifier"));
        }
        let round = self.schedule.current_round();
        if round == 0 {
            return Err(MiningPoolError::InvalidState(
                "Verification is not open in round 0".into(),
            ));
        }
        if self.verifications.is_submitted(pool_id, round) {
            return Err(MiningPoolError::InvalidState(format!(
                "Verification already submitted for pool {} round {}",
                pool_id, round
            )));
        }
        check_shape(&miners, &scores)?;

        self.snapshots
            .trigger_if_needed(&self.directory, pool_id, round);
        let snapshot = self
            .snapshots
            .get(pool_id, round)
            .ok_or_else(|| MiningPoolError::NotFound("Snapshot not generated".into()))?;

        let result = self
            .verifications
            .record(snapshot, pool_id, round, actor_id, miners, scores)?;

        events::emit_verification_submitted(
            actor_id,
            pool_id,
            round,
            result.miner_count,
            result.score_sum.0,
        );
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn get_verification(&self, pool_id: u64, round: u64) -> Option<VerificationResult> {
        self.verifications.get(pool_id, round).cloned()
    }

    pub fn get_score(&self, pool_id: u64, round: u64, miner_id: AccountId) -> Option<U128> {
        self.verifications
            .score_of(pool_id, round, &miner_id)
            .map(U128)
    }
}
