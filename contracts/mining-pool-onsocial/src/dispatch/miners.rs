use crate::*;
use near_sdk::serde_json::{Value, json};

impl Contract {
    pub(super) fn dispatch_miners(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MiningPoolError> {
        match action {
            Action::ExitPool { pool_id } => {
                let amount = self.exit_pool(actor_id, pool_id)?;
                Ok(json!({ "amount": U128(amount) }))
            }
            _ => unreachable!("dispatch_miners called with non-miner action"),
        }
    }
}
