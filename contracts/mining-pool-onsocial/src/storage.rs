use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Pools,
    OwnerPools,
    OwnerPoolsInner { account_id_hash: Vec<u8> },
    OwnerTotals,
    Participations,
    PoolMiners,
    PoolMinersInner { pool_id: u64 },
    History,
    HistoryInner { account_id_hash: Vec<u8> },
    Snapshots,
    RoundTotals,
    Verifications,
    Scores,
    Ballots,
    BallotVotes,
    RoundPots,
    PoolPots,
    Claims,
    Unpaid,
    GovernanceVotes,
    VerifyWeights,
    VerifyTotals,
    BallotPeaks,
}
