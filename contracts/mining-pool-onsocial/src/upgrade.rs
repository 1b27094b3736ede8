use crate::constants::GAS_MIGRATE_TGAS;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, MiningPoolError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .ok_or_else(|| MiningPoolError::InvalidInput("Missing contract code".into()))?;
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut contract: Self = env::state_read()
            .unwrap_or_else(|| env::panic_str("Contract state is missing"));
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
