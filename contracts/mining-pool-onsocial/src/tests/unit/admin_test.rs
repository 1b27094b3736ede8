use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// ─── init ────────────────────────────────────────────────────────────────────

#[test]
fn new_uses_defaults() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_token(), &token());
    assert_eq!(contract.get_oracle(), &oracle());
    assert_eq!(contract.get_reward_source(), &reward_source());
    assert_eq!(contract.get_config(), &EngineConfig::default());
    assert_eq!(contract.get_current_round(), 0);
    assert_eq!(contract.get_round_schedule().genesis_ns, GENESIS_NS);
    assert_eq!(
        contract.get_round_schedule().round_duration_ns,
        DEFAULT_ROUND_DURATION_NS
    );
}

#[test]
fn new_rejects_invalid_config() {
    testing_env!(context(owner()).build());
    let result = Contract::new(
        owner(),
        token(),
        oracle(),
        reward_source(),
        Some(EngineConfig {
            stake_multiplier: 0,
            ..EngineConfig::default()
        }),
        None,
    );
    assert!(matches!(result, Err(MiningPoolError::InvalidInput(_))));

    let result = Contract::new(owner(), token(), oracle(), reward_source(), None, Some(0));
    assert!(matches!(result, Err(MiningPoolError::InvalidInput(_))));
}

#[test]
fn rounds_follow_block_time() {
    let contract = new_contract();
    testing_env!(context_at(owner(), 3).build());
    assert_eq!(contract.get_current_round(), 3);

    let mut builder = context_at(owner(), 3);
    builder.block_timestamp(GENESIS_NS + 4 * DEFAULT_ROUND_DURATION_NS - 1);
    testing_env!(builder.build());
    assert_eq!(contract.get_current_round(), 3);
}

// ─── config ──────────────────────────────────────────────────────────────────

#[test]
fn update_config_keeps_capacity_proportional_to_collateral() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 500, 0).unwrap();

    testing_env!(context_with_deposit(owner(), 0, 1).build());
    contract
        .update_config(EngineConfigUpdate {
            capacity_multiplier: Some(2),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(contract.get_config().capacity_multiplier, 2);
    assert_eq!(contract.get_config().stake_multiplier, DEFAULT_STAKE_MULTIPLIER);

    testing_env!(context(token()).build());
    contract.expand_pool(&pool_owner(), pool_id, 10).unwrap();
    let pool = contract.get_pool(pool_id).unwrap();
    assert_eq!(pool.collateral.0, 110);
    assert_eq!(pool.capacity.0, 110 * DEFAULT_STAKE_MULTIPLIER as u128);
    assert!(pool.occupied.0 <= pool.capacity.0);
}

#[test]
fn update_config_cannot_change_stake_multiplier() {
    let parsed = near_sdk::serde_json::from_str::<EngineConfigUpdate>(r#"{"stake_multiplier":1}"#);
    assert!(parsed.is_err());

    let parsed =
        near_sdk::serde_json::from_str::<EngineConfigUpdate>(r#"{"miner_cap_divisor":4}"#).unwrap();
    assert_eq!(parsed.miner_cap_divisor, Some(4));
}

#[test]
fn update_config_invalid_patch_rejected() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 0, 1).build());
    let err = contract
        .update_config(EngineConfigUpdate {
            miner_cap_divisor: Some(0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
    assert_eq!(contract.get_config(), &EngineConfig::default());
}

#[test]
fn update_config_guards() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(miner_a(), 0, 1).build());
    let err = contract.update_config(EngineConfigUpdate::default()).unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));

    testing_env!(context(owner()).build());
    let err = contract.update_config(EngineConfigUpdate::default()).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

// ─── roles ───────────────────────────────────────────────────────────────────

#[test]
fn transfer_ownership() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 0, 1).build());
    contract.transfer_ownership(voter()).unwrap();
    assert_eq!(contract.get_owner(), &voter());

    // The old owner lost its rights.
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
}

#[test]
fn transfer_ownership_to_self_rejected() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 0, 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn set_oracle_moves_reporting_rights() {
    let mut contract = new_contract();
    let new_oracle: AccountId = "oracle2.near".parse().unwrap();
    testing_env!(context_with_deposit(owner(), 0, 1).build());
    contract.set_oracle(new_oracle.clone()).unwrap();

    testing_env!(context(oracle()).build());
    let err = contract.report_total_supply(U128(5)).unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));

    testing_env!(context(new_oracle).build());
    contract.report_total_supply(U128(5)).unwrap();
}

#[test]
fn set_reward_source_moves_funding_rights() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 0, 1).build());
    contract.set_reward_source(voter()).unwrap();
    assert_eq!(contract.get_reward_source(), &voter());

    testing_env!(context(token()).build());
    contract.fund_round(&voter(), 1, 10).unwrap();
    let err = contract.fund_round(&reward_source(), 1, 10).unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
}

// ─── oracle ──────────────────────────────────────────────────────────────────

#[test]
fn report_governance_validates_entries() {
    let mut contract = new_contract();
    testing_env!(context(oracle()).build());
    let err = contract
        .report_governance(
            vec![WeightEntry {
                account_id: voter(),
                weight: U128(2_000),
            }],
            U128(1_000),
        )
        .unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn report_governance_zero_weight_removes_entry() {
    let mut contract = new_contract();
    testing_env!(context(oracle()).build());
    contract
        .report_governance(
            vec![WeightEntry {
                account_id: pool_owner(),
                weight: U128(0),
            }],
            U128(TOTAL_VOTES),
        )
        .unwrap();
    assert_eq!(contract.get_owner_capacity(pool_owner()).max_capacity.0, 0);
}

#[test]
fn report_from_stranger_rejected() {
    let mut contract = new_contract();
    testing_env!(context(miner_a()).build());
    let err = contract
        .report_governance(vec![], U128(1))
        .unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
}

// ─── upgrade ─────────────────────────────────────────────────────────────────

#[test]
fn update_contract_owner_only() {
    let contract = new_contract();
    testing_env!(context_with_deposit(miner_a(), 0, 1).build());
    assert!(matches!(
        contract.update_contract(),
        Err(MiningPoolError::Unauthorized(_))
    ));

    testing_env!(context(owner()).build());
    assert!(matches!(
        contract.update_contract(),
        Err(MiningPoolError::InvalidInput(_))
    ));
}
