use crate::*;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, request: Request) -> Result<Value, MiningPoolError> {
        let Request { action } = request;
        let actor_id = env::predecessor_account_id();

        if action.requires_confirmation() {
            crate::guards::check_one_yocto()?;
        }

        self.dispatch_action(action, &actor_id)
    }
}
