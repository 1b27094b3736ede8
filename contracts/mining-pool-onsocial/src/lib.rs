use near_sdk::json_types::U128;
use near_sdk::store::{IterableSet, LookupMap, Vector};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod storage;

mod events;
mod external;
mod protocol;

mod config;
mod oracle;
mod round;

mod capacity;
mod directory;
mod pool;

mod ballot;
mod reward;
mod snapshot;
mod verification;

mod admin;
mod dispatch;
mod execute;
mod ft_receiver;
mod payout;
mod upgrade;


pub use ballot::{DistrustBallots, DistrustView};
pub use capacity::CapacityPolicy;
pub use config::{EngineConfig, EngineConfigUpdate};
pub use constants::*;
pub use directory::{MinerDirectory, MinerParticipation, ParticipationHook, PoolChange};
pub use errors::MiningPoolError;
pub use ft_receiver::TransferMsg;
pub use oracle::{GovernanceOracle, OracleFeed, SupplyOracle, WeightEntry};
pub use payout::PayoutKind;
pub use pool::{CreatePoolParams, OwnerCapacityView, OwnerTotals, PoolInfo, PoolRegistry};
pub use protocol::{Action, Request};
pub use reward::{RewardLedger, RewardPotOracle, RoundPot, RoundPots, apportion, payable_share};
pub use round::{RoundClock, RoundSchedule};
pub use snapshot::{PoolSnapshot, SnapshotStore};
pub use storage::StorageKey;
pub use verification::{ScoreSource, VerificationLedger, VerificationResult};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    // Cross-contract boundary: the only NEP-141 token accepted for collateral, stake and rewards.
    pub token_id: AccountId,
    pub oracle_id: AccountId,
    pub reward_source_id: AccountId,

    pub schedule: RoundSchedule,
    pub capacity: CapacityPolicy,

    pub registry: PoolRegistry,
    pub directory: MinerDirectory,
    pub snapshots: SnapshotStore,
    pub verifications: VerificationLedger,
    pub ballots: DistrustBallots,
    pub pots: RoundPots,
    pub rewards: RewardLedger,
    pub oracle: OracleFeed,
}
