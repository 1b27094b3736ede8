use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

/// Commands that move no value into the contract. Value-in commands travel as
/// `ft_transfer_call` messages instead, see [`crate::TransferMsg`].
#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum Action {
    StopPool {
        pool_id: u64,
    },
    SetDescription {
        pool_id: u64,
        description: String,
    },
    SetVerifier {
        pool_id: u64,
        verifier: Option<AccountId>,
    },
    ExitPool {
        pool_id: u64,
    },
    SubmitVerification {
        pool_id: u64,
        miners: Vec<AccountId>,
        scores: Vec<U128>,
    },
    VoteDistrust {
        pool_id: u64,
        weight: U128,
    },
    ClaimReward {
        round: u64,
    },
    WithdrawUnpaid,
}

impl Action {
    /// Actions that release tokens require a 1 yoctoNEAR confirmation deposit.
    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            Self::StopPool { .. }
                | Self::ExitPool { .. }
                | Self::ClaimReward { .. }
                | Self::WithdrawUnpaid
        )
    }
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct Request {
    pub action: Action,
}
