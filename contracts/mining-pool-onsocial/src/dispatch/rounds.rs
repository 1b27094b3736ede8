use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_rounds(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MiningPoolError> {
        match action {
            Action::SubmitVerification {
                pool_id,
                miners,
                scores,
            } => {
                self.submit_verification(actor_id, pool_id, miners, scores)?;
                Ok(Value::Null)
            }
            Action::VoteDistrust { pool_id, weight } => {
                self.vote_distrust(actor_id, pool_id, weight.0)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_rounds called with non-round action"),
        }
    }
}
