use crate::*;
use near_sdk::serde_json::{Value, json};

impl Contract {
    pub(super) fn dispatch_rewards(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MiningPoolError> {
        match action {
            Action::ClaimReward { round } => {
                let amount = self.claim_reward(actor_id, round)?;
                Ok(json!({ "amount": U128(amount) }))
            }
            Action::WithdrawUnpaid => {
                let amount = self.withdraw_unpaid(actor_id)?;
                Ok(json!({ "amount": U128(amount) }))
            }
            _ => unreachable!("dispatch_rewards called with non-reward action"),
        }
    }
}
