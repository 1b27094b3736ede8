use crate::*;

#[near]
impl Contract {
    #[init]
    #[handle_result]
    pub fn new(
        owner_id: AccountId,
        token_id: AccountId,
        oracle_id: AccountId,
        reward_source_id: AccountId,
        config: Option<EngineConfig>,
        round_duration_ns: Option<u64>,
    ) -> Result<Self, MiningPoolError> {
        let config = config.unwrap_or_default();
        config.validate()?;
        let schedule = RoundSchedule::new(
            env::block_timestamp(),
            round_duration_ns.unwrap_or(DEFAULT_ROUND_DURATION_NS),
        )?;
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            token_id,
            oracle_id,
            reward_source_id,
            schedule,
            capacity: CapacityPolicy::new(config),
            registry: PoolRegistry::new(),
            directory: MinerDirectory::new(),
            snapshots: SnapshotStore::new(),
            verifications: VerificationLedger::new(),
            ballots: DistrustBallots::new(),
            pots: RoundPots::new(),
            rewards: RewardLedger::new(),
            oracle: OracleFeed::new(),
        })
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MiningPoolError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MiningPoolError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_oracle(&mut self, oracle_id: AccountId) -> Result<(), MiningPoolError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_oracle = std::mem::replace(&mut self.oracle_id, oracle_id);
        events::emit_oracle_changed(&self.owner_id, &old_oracle, &self.oracle_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_reward_source(&mut self, reward_source_id: AccountId) -> Result<(), MiningPoolError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_source = std::mem::replace(&mut self.reward_source_id, reward_source_id);
        events::emit_reward_source_changed(&self.owner_id, &old_source, &self.reward_source_id);
        Ok(())
    }

    /// Budget and per-miner limits apply to admissions made after the update.
    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: EngineConfigUpdate) -> Result<(), MiningPoolError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.capacity.config.validate_patch(&update)?;
        self.capacity.config.apply_patch(&update);

        let config = &self.capacity.config;
        events::emit_config_updated(
            &self.owner_id,
            config.stake_multiplier,
            config.capacity_multiplier,
            config.miner_cap_divisor,
            config.min_gov_ratio_bps as u32,
        );
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_token(&self) -> &AccountId {
        &self.token_id
    }

    pub fn get_oracle(&self) -> &AccountId {
        &self.oracle_id
    }

    pub fn get_reward_source(&self) -> &AccountId {
        &self.reward_source_id
    }

    pub fn get_config(&self) -> &EngineConfig {
        &self.capacity.config
    }

    pub fn get_round_schedule(&self) -> &RoundSchedule {
        &self.schedule
    }

    pub fn get_current_round(&self) -> u64 {
        self.schedule.current_round()
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
