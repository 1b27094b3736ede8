use crate::*;

/// Source of the current round. Rounds never decrease.
pub trait RoundClock {
    fn current_round(&self) -> u64;
}

/// Fixed-length rounds counted from the block time the contract was initialized at.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct RoundSchedule {
    pub genesis_ns: u64,
    pub round_duration_ns: u64,
}

impl RoundSchedule {
    pub fn new(genesis_ns: u64, round_duration_ns: u64) -> Result<Self, MiningPoolError> {
        if round_duration_ns == 0 {
            return Err(MiningPoolError::zero_amount("round_duration_ns"));
        }
        Ok(Self {
            genesis_ns,
            round_duration_ns,
        })
    }

    pub fn round_at(&self, timestamp_ns: u64) -> u64 {
        timestamp_ns.saturating_sub(self.genesis_ns) / self.round_duration_ns
    }
}

impl RoundClock for RoundSchedule {
    fn current_round(&self) -> u64 {
        self.round_at(env::block_timestamp())
    }
}
