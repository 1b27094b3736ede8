use crate::*;

/// Governance weight as seen by the host protocol.
pub trait GovernanceOracle {
    fn valid_votes_of(&self, account_id: &AccountId) -> u128;
    fn total_votes(&self) -> u128;
    /// Weight the account earned by completing a non-abstaining verification in `round`.
    fn verify_weight_of(&self, account_id: &AccountId, round: u64) -> u128;
    fn total_verify_weight(&self, round: u64) -> u128;
}

pub trait SupplyOracle {
    fn total_supply(&self) -> u128;
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct WeightEntry {
    pub account_id: AccountId,
    pub weight: U128,
}

/// Oracle values pushed by the configured oracle account.
#[near(serializers = [borsh])]
pub struct OracleFeed {
    governance_votes: LookupMap<AccountId, u128>,
    total_votes: u128,
    total_supply: u128,
    verify_weights: LookupMap<(u64, AccountId), u128>,
    verify_totals: LookupMap<u64, u128>,
}

impl OracleFeed {
    pub fn new() -> Self {
        Self {
            governance_votes: LookupMap::new(StorageKey::GovernanceVotes),
            total_votes: 0,
            total_supply: 0,
            verify_weights: LookupMap::new(StorageKey::VerifyWeights),
            verify_totals: LookupMap::new(StorageKey::VerifyTotals),
        }
    }

    pub(crate) fn set_governance(
        &mut self,
        entries: Vec<WeightEntry>,
        total_votes: u128,
    ) -> Result<(), MiningPoolError> {
        validate_entries(&entries, total_votes)?;
        for WeightEntry { account_id, weight } in entries {
            if weight.0 == 0 {
                self.governance_votes.remove(&account_id);
            } else {
                self.governance_votes.insert(account_id, weight.0);
            }
        }
        self.total_votes = total_votes;
        Ok(())
    }

    pub(crate) fn set_total_supply(&mut self, total_supply: u128) {
        self.total_supply = total_supply;
    }

    /// Weights of finalized rounds are frozen so penalties cannot move under pending claims.
    pub(crate) fn set_verify_weights(
        &mut self,
        round: u64,
        current_round: u64,
        entries: Vec<WeightEntry>,
        total: u128,
    ) -> Result<(), MiningPoolError> {
        if round < current_round {
            return Err(MiningPoolError::InvalidState(format!(
                "Round {} is finalized",
                round
            )));
        }
        validate_entries(&entries, total)?;
        for WeightEntry { account_id, weight } in entries {
            let key = (round, account_id);
            if weight.0 == 0 {
                self.verify_weights.remove(&key);
            } else {
                self.verify_weights.insert(key, weight.0);
            }
        }
        self.verify_totals.insert(round, total);
        Ok(())
    }
}

fn validate_entries(entries: &[WeightEntry], total: u128) -> Result<(), MiningPoolError> {
    if let Some(entry) = entries.iter().find(|e| e.weight.0 > total) {
        return Err(MiningPoolError::InvalidInput(format!(
            "Weight of {} exceeds reported total",
            entry.account_id
        )));
    }
    Ok(())
}

impl GovernanceOracle for OracleFeed {
    fn valid_votes_of(&self, account_id: &AccountId) -> u128 {
        self.governance_votes.get(account_id).copied().unwrap_or(0)
    }

    fn total_votes(&self) -> u128 {
        self.total_votes
    }

    fn verify_weight_of(&self, account_id: &AccountId, round: u64) -> u128 {
        self.verify_weights
            .get(&(round, account_id.clone()))
            .copied()
            .unwrap_or(0)
    }

    fn total_verify_weight(&self, round: u64) -> u128 {
        self.verify_totals.get(&round).copied().unwrap_or(0)
    }
}

impl SupplyOracle for OracleFeed {
    fn total_supply(&self) -> u128 {
        self.total_supply
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn report_governance(
        &mut self,
        entries: Vec<WeightEntry>,
        total_votes: U128,
    ) -> Result<(), MiningPoolError> {
        let oracle_id = env::predecessor_account_id();
        self.check_oracle(&oracle_id)?;
        let count = entries.len() as u32;
        self.oracle.set_governance(entries, total_votes.0)?;
        events::emit_oracle_report(&oracle_id, "governance", None, count);
        Ok(())
    }

    #[handle_result]
    pub fn report_total_supply(&mut self, total_supply: U128) -> Result<(), MiningPoolError> {
        let oracle_id = env::predecessor_account_id();
        self.check_oracle(&oracle_id)?;
        self.oracle.set_total_supply(total_supply.0);
        events::emit_oracle_report(&oracle_id, "total_supply", None, 1);
        Ok(())
    }

    #[handle_result]
    pub fn report_verify_weights(
        &mut self,
        round: u64,
        entries: Vec<WeightEntry>,
        total: U128,
    ) -> Result<(), MiningPoolError> {
        let oracle_id = env::predecessor_account_id();
        self.check_oracle(&oracle_id)?;
        let count = entries.len() as u32;
        let current_round = self.schedule.current_round();
        self.ballots.check_weights_cover_votes(round, &entries)?;
        self.oracle
            .set_verify_weights(round, current_round, entries, total.0)?;
        events::emit_oracle_report(&oracle_id, "verify_weights", Some(round), count);
        Ok(())
    }
}
