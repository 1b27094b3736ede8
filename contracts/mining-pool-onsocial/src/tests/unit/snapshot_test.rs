use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn no_snapshot_in_round_zero() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 100, 0).unwrap();
    join(&mut contract, miner_b(), pool_id, 50, 0).unwrap();

    assert!(contract.get_snapshot(pool_id, 0).is_none());
    assert_eq!(contract.get_round_total(0).0, 0);
}

#[test]
fn first_change_of_a_round_freezes_carried_membership() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 100, 0).unwrap();

    // Round advances; the next join captures the state carried in from round 0.
    join(&mut contract, miner_b(), pool_id, 50, 1).unwrap();

    let snapshot = contract.get_snapshot(pool_id, 1).unwrap();
    assert!(snapshot.generated);
    assert_eq!(snapshot.miners, vec![miner_a()]);
    assert_eq!(snapshot.amounts, vec![U128(100)]);
    assert_eq!(snapshot.total.0, 100);
    assert_eq!(snapshot.amount_of(&miner_a()), Some(100));
    assert_eq!(snapshot.amount_of(&miner_b()), None);
    assert!(contract.is_in_snapshot(pool_id, 1, miner_a()));
    assert!(!contract.is_in_snapshot(pool_id, 1, miner_b()));
    assert_eq!(contract.get_round_total(1).0, 100);
}

#[test]
fn trigger_is_idempotent_within_a_round() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 100, 0).unwrap();

    join(&mut contract, miner_b(), pool_id, 50, 1).unwrap();
    join(&mut contract, miner_c(), pool_id, 25, 1).unwrap();
    exec(&mut contract, miner_a(), 1, Action::ExitPool { pool_id }).unwrap();

    let snapshot = contract.get_snapshot(pool_id, 1).unwrap();
    assert_eq!(snapshot.miners, vec![miner_a()]);
    assert_eq!(snapshot.total.0, 100);
    assert_eq!(contract.get_round_total(1).0, 100);

    testing_env!(context_at(owner(), 1).build());
    assert!(!contract
        .snapshots
        .trigger_if_needed(&contract.directory, pool_id, 1));
}

#[test]
fn exit_triggers_snapshot_before_removal() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 100, 0).unwrap();

    exec(&mut contract, miner_a(), 2, Action::ExitPool { pool_id }).unwrap();

    let snapshot = contract.get_snapshot(pool_id, 2).unwrap();
    assert_eq!(snapshot.miners, vec![miner_a()]);
    assert!(contract.get_snapshot(pool_id, 1).is_none());
}

#[test]
fn round_total_sums_every_pool() {
    let mut contract = new_contract();
    let first = open_pool(&mut contract, 100, 0);
    let second = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), first, 100, 0).unwrap();
    join(&mut contract, miner_b(), second, 300, 0).unwrap();

    testing_env!(context_at(owner(), 1).build());
    assert!(contract
        .snapshots
        .trigger_if_needed(&contract.directory, first, 1));
    assert!(contract
        .snapshots
        .trigger_if_needed(&contract.directory, second, 1));

    assert_eq!(contract.get_round_total(1).0, 400);
}

#[test]
fn empty_pool_snapshot_has_zero_total() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 100, 1).unwrap();

    let snapshot = contract.get_snapshot(pool_id, 1).unwrap();
    assert!(snapshot.miners.is_empty());
    assert_eq!(snapshot.total.0, 0);
}

#[test]
fn snapshot_emits_event() {
    let mut contract = new_contract();
    let pool_id = open_pool(&mut contract, 100, 0);
    join(&mut contract, miner_a(), pool_id, 100, 0).unwrap();
    join(&mut contract, miner_b(), pool_id, 50, 1).unwrap();

    let logs = near_sdk::test_utils::get_logs();
    assert!(logs.iter().any(|l| l.contains("\"snapshot_generated\"")));
}
