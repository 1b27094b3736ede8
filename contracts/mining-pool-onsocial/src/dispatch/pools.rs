use crate::*;
use near_sdk::serde_json::{Value, json};

impl Contract {
    pub(super) fn dispatch_pools(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MiningPoolError> {
        match action {
            Action::StopPool { pool_id } => {
                let collateral = self.stop_pool(actor_id, pool_id)?;
                Ok(json!({ "collateral": U128(collateral) }))
            }
            Action::SetDescription {
                pool_id,
                description,
            } => {
                self.set_pool_description(actor_id, pool_id, description)?;
                Ok(Value::Null)
            }
            Action::SetVerifier { pool_id, verifier } => {
                self.set_pool_verifier(actor_id, pool_id, verifier)?;
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_pools called with non-pool action"),
        }
    }
}
