use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Helpers ---

fn create(contract: &mut Contract, params: CreatePoolParams, collateral: u128) -> Result<u64, MiningPoolError> {
    testing_env!(context(token()).build());
    contract.create_pool(&pool_owner(), params, collateral)
}

// ─── create ──────────────────────────────────────────────────────────────────

#[test]
fn create_pool_sets_capacity_from_collateral() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    assert_eq!(pool_id, FIRST_POOL_ID);
    let pool = contract.get_pool(pool_id).unwrap();
    assert_eq!(pool.owner_id, pool_owner());
    assert_eq!(pool.collateral.0, 100);
    assert_eq!(pool.capacity.0, 500);
    assert_eq!(pool.occupied.0, 0);
    assert!(!pool.stopped);
    assert_eq!(pool.created_round, 0);

    let view = contract.get_owner_capacity(pool_owner());
    assert_eq!(view.current_capacity.0, 500);
    assert_eq!(view.current_stake.0, 100);
    assert_eq!(view.max_capacity.0, 500_000);
    assert_eq!(view.pool_ids, vec![pool_id]);
}

#[test]
fn create_pool_ids_are_sequential() {
    let mut contract = new_contract();
    let first = open_pool(&mut contract, 100, 0);
    let second = open_pool(&mut contract, 100, 0);
    assert_eq!(second, first + 1);
    assert_eq!(contract.get_pools_by_owner(pool_owner()).len(), 2);
}

#[test]
fn create_pool_empty_name_fails() {
    let mut contract = new_contract();
    let err = create(&mut contract, pool_params("  "), 100).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn create_pool_long_name_fails() {
    let mut contract = new_contract();
    let name = "x".repeat(MAX_POOL_NAME_LEN + 1);
    let err = create(&mut contract, pool_params(&name), 100).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn create_pool_duplicate_metadata_key_fails() {
    let mut contract = new_contract();
    let params = CreatePoolParams {
        metadata_keys: vec!["gpu".into(), "gpu".into()],
        ..pool_params("alpha")
    };
    let err = create(&mut contract, params, 100).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn create_pool_zero_collateral_fails() {
    let mut contract = new_contract();
    let err = create(&mut contract, pool_params("alpha"), 0).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn create_pool_without_governance_share_fails() {
    let mut contract = new_contract();
    testing_env!(context(token()).build());
    let err = contract
        .create_pool(&miner_a(), pool_params("alpha"), 100)
        .unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
    assert!(contract.get_pool(FIRST_POOL_ID).is_none());
}

#[test]
fn create_pool_over_owner_budget_fails() {
    let mut contract = new_contract();
    // 100_001 * 5 > 500_000
    let err = create(&mut contract, pool_params("alpha"), 100_001).unwrap_err();
    assert!(matches!(err, MiningPoolError::LimitExceeded(_)));

    // Exactly at budget is accepted.
    create(&mut contract, pool_params("alpha"), 100_000).unwrap();
    let err = create(&mut contract, pool_params("beta"), 1).unwrap_err();
    assert!(matches!(err, MiningPoolError::LimitExceeded(_)));
}

// ─── expand ──────────────────────────────────────────────────────────────────

#[test]
fn expand_pool_recomputes_capacity() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    testing_env!(context(token()).build());
    contract.expand_pool(&pool_owner(), pool_id, 50).unwrap();

    let pool = contract.get_pool(pool_id).unwrap();
    assert_eq!(pool.collateral.0, 150);
    assert_eq!(pool.capacity.0, 750);
    let view = contract.get_owner_capacity(pool_owner());
    assert_eq!(view.current_capacity.0, 750);
    assert_eq!(view.current_stake.0, 150);
}

#[test]
fn expand_never_leaves_capacity_below_occupied() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 500, 0).unwrap();

    testing_env!(context(token()).build());
    let err = contract.registry.expand(pool_id, 10, 1).unwrap_err();
    assert!(matches!(err, MiningPoolError::LimitExceeded(_)));

    let pool = contract.get_pool(pool_id).unwrap();
    assert_eq!(pool.collateral.0, 100);
    assert_eq!(pool.capacity.0, 500);
    assert_eq!(contract.get_owner_capacity(pool_owner()).current_capacity.0, 500);
}

#[test]
fn expand_pool_non_owner_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    testing_env!(context(token()).build());
    let err = contract.expand_pool(&miner_a(), pool_id, 50).unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
}

#[test]
fn expand_pool_over_budget_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100_000, 0);

    testing_env!(context(token()).build());
    let err = contract.expand_pool(&pool_owner(), pool_id, 1).unwrap_err();
    assert!(matches!(err, MiningPoolError::LimitExceeded(_)));
    assert_eq!(contract.get_pool(pool_id).unwrap().collateral.0, 100_000);
}

#[test]
fn expand_pool_zero_extra_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    testing_env!(context(token()).build());
    let err = contract.expand_pool(&pool_owner(), pool_id, 0).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn expand_stopped_pool_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    exec(&mut contract, pool_owner(), 1, Action::StopPool { pool_id }).unwrap();

    testing_env!(context_at(token(), 1).build());
    let err = contract.expand_pool(&pool_owner(), pool_id, 10).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidState(_)));
}

// ─── stop ────────────────────────────────────────────────────────────────────

#[test]
fn stop_pool_in_creation_round_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    let err = exec(&mut contract, pool_owner(), 0, Action::StopPool { pool_id }).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidState(_)));
    assert!(!contract.get_pool(pool_id).unwrap().stopped);
}

#[test]
fn stop_pool_returns_collateral_and_releases_budget() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100_000, 0);

    let result = exec(&mut contract, pool_owner(), 1, Action::StopPool { pool_id }).unwrap();
    assert_eq!(result["collateral"], "100000");

    let pool = contract.get_pool(pool_id).unwrap();
    assert!(pool.stopped);
    assert_eq!(pool.stopped_round, Some(1));

    let view = contract.get_owner_capacity(pool_owner());
    assert_eq!(view.current_capacity.0, 0);
    assert_eq!(view.current_stake.0, 0);
    // The record stays listed for the owner.
    assert_eq!(view.pool_ids, vec![pool_id]);

    // Released budget can be reused.
    open_pool(&mut contract, 100_000, 1);
}

#[test]
fn stop_pool_twice_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    exec(&mut contract, pool_owner(), 1, Action::StopPool { pool_id }).unwrap();

    let err = exec(&mut contract, pool_owner(), 2, Action::StopPool { pool_id }).unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidState(_)));
}

#[test]
fn stop_pool_non_owner_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    let err = exec(&mut contract, miner_a(), 1, Action::StopPool { pool_id }).unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
}

#[test]
fn stop_pool_without_confirmation_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    testing_env!(context_at(pool_owner(), 1).build());
    let err = contract
        .execute(Request {
            action: Action::StopPool { pool_id },
        })
        .unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

// ─── description / verifier ──────────────────────────────────────────────────

#[test]
fn set_description_owner_only() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    exec(
        &mut contract,
        pool_owner(),
        0,
        Action::SetDescription {
            pool_id,
            description: "gpu farm".into(),
        },
    )
    .unwrap();
    assert_eq!(contract.get_pool(pool_id).unwrap().description, "gpu farm");

    let err = exec(
        &mut contract,
        miner_a(),
        0,
        Action::SetDescription {
            pool_id,
            description: "hijack".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, MiningPoolError::Unauthorized(_)));
}

#[test]
fn set_description_too_long_fails() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    let err = exec(
        &mut contract,
        pool_owner(),
        0,
        Action::SetDescription {
            pool_id,
            description: "d".repeat(MAX_DESCRIPTION_LEN + 1),
        },
    )
    .unwrap_err();
    assert!(matches!(err, MiningPoolError::InvalidInput(_)));
}

#[test]
fn set_and_clear_verifier() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);

    exec(
        &mut contract,
        pool_owner(),
        0,
        Action::SetVerifier {
            pool_id,
            verifier: Some(voter()),
        },
    )
    .unwrap();
    let pool = contract.get_pool(pool_id).unwrap();
    assert_eq!(pool.verifier, Some(voter()));
    assert!(pool.is_verifier(&voter()));
    assert!(pool.is_verifier(&pool_owner()));

    exec(
        &mut contract,
        pool_owner(),
        0,
        Action::SetVerifier {
            pool_id,
            verifier: None,
        },
    )
    .unwrap();
    assert!(!contract.get_pool(pool_id).unwrap().is_verifier(&voter()));
}

#[test]
fn unknown_pool_is_not_found() {
    let mut contract = new_contract();
    let err = exec(&mut contract, pool_owner(), 1, Action::StopPool { pool_id: 42 }).unwrap_err();
    assert!(matches!(err, MiningPoolError::NotFound(_)));
}
