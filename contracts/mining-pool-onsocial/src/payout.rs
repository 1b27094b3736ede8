use crate::external::ext_ft;
use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutKind {
    Collateral,
    Stake,
    Reward,
    Unpaid,
}

impl PayoutKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Collateral => "collateral",
            Self::Stake => "stake",
            Self::Reward => "reward",
            Self::Unpaid => "unpaid",
        }
    }
}

impl Contract {
    /// Engine state must already reflect the payout; the callback only handles failure.
    pub(crate) fn transfer_out(&self, receiver_id: &AccountId, amount: u128, kind: PayoutKind) -> Promise {
        ext_ft::ext(self.token_id.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_FT_TRANSFER_TGAS))
            .ft_transfer(receiver_id.clone(), U128(amount), None)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PAYOUT_CALLBACK_TGAS))
                    .on_payout_resolved(receiver_id.clone(), U128(amount), kind),
            )
    }

    /// Failed transfers become an unpaid balance the receiver can withdraw later.
    pub(crate) fn resolve_payout(
        &mut self,
        account_id: &AccountId,
        amount: u128,
        kind: PayoutKind,
        succeeded: bool,
    ) -> bool {
        if !succeeded {
            self.rewards.credit_unpaid(account_id, amount);
            events::emit_payout_failed(account_id, amount, kind.as_str());
        }
        succeeded
    }

    pub(crate) fn withdraw_unpaid(&mut self, account_id: &AccountId) -> Result<u128, MiningPoolError> {
        let amount = self.rewards.take_unpaid(account_id);
        if amount == 0 {
            return Err(MiningPoolError::InvalidState("Nothing to withdraw".into()));
        }
        let _ = self.transfer_out(account_id, amount, PayoutKind::Unpaid);
        events::emit_unpaid_withdrawn(account_id, amount);
        Ok(amount)
    }
}

#[near]
impl Contract {
    #[private]
    pub fn on_payout_resolved(&mut self, account_id: AccountId, amount: U128, kind: PayoutKind) -> bool {
        let succeeded =
            env::promise_results_count() == 1 && env::promise_result_checked(0, 64).is_ok();
        self.resolve_payout(&account_id, amount.0, kind, succeeded)
    }
}
