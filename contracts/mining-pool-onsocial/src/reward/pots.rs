use crate::*;

/// Total reward earned by this engine's action for a round. Reads are idempotent.
pub trait RewardPotOracle {
    fn reward_for_round(&self, round: u64) -> Option<u128>;
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default)]
pub struct RoundPot {
    pub amount: U128,
    /// Set by the first pool allocation; the pot cannot grow afterwards.
    pub sealed: bool,
}

/// Round pots funded by the reward source through `ft_transfer_call`.
#[near(serializers = [borsh])]
pub struct RoundPots {
    pots: LookupMap<u64, RoundPot>,
}

impl RoundPots {
    pub fn new() -> Self {
        Self {
            pots: LookupMap::new(StorageKey::RoundPots),
        }
    }

    pub fn get(&self, round: u64) -> Option<&RoundPot> {
        self.pots.get(&round)
    }

    pub(crate) fn fund(&mut self, round: u64, amount: u128) -> Result<u128, MiningPoolError> {
        if amount == 0 {
            return Err(MiningPoolError::zero_amount("Reward amount"));
        }
        let mut pot = self.pots.get(&round).cloned().unwrap_or_default();
        if pot.sealed {
            return Err(MiningPoolError::InvalidState(format!(
                "Reward pot for round {} is already being distributed",
                round
            )));
        }
        pot.amount.0 = pot
            .amount
            .0
            .checked_add(amount)
            .ok_or_else(MiningPoolError::overflow)?;
        let total = pot.amount.0;
        self.pots.insert(round, pot);
        Ok(total)
    }

    pub(crate) fn seal(&mut self, round: u64) {
        if let Some(pot) = self.pots.get_mut(&round) {
            pot.sealed = true;
        }
    }
}

impl RewardPotOracle for RoundPots {
    fn reward_for_round(&self, round: u64) -> Option<u128> {
        self.pots.get(&round).map(|p| p.amount.0)
    }
}
