mod miners;
mod pools;
mod rewards;
mod rounds;

use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MiningPoolError> {
        match &action {
            Action::StopPool { .. }
            | Action::SetDescription { .. }
            | Action::SetVerifier { .. } => self.dispatch_pools(action, actor_id),

            Action::ExitPool { .. } => self.dispatch_miners(action, actor_id),

            Action::SubmitVerification { .. } | Action::VoteDistrust { .. } => {
                self.dispatch_rounds(action, actor_id)
            }

            Action::ClaimReward { .. } | Action::WithdrawUnpaid => {
                self.dispatch_rewards(action, actor_id)
            }
        }
    }
}
