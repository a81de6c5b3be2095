extern crate std;

use soroban_sdk::{symbol_short, testutils::Address as _, Address, BytesN};

use crate::{
    test::{setup_two_pools, TestLedger},
    upgrade::STORAGE_VERSION,
    ContractError,
};

/// Overwrites the recorded schema version, as storage written by a later
/// build would look to this one.
fn force_stored_version(ledger: &TestLedger, version: u32) {
    ledger.env.as_contract(&ledger.client.address, || {
        ledger
            .env
            .storage()
            .instance()
            .set(&symbol_short!("STOR_VER"), &version);
    });
}

fn dummy_hash(ledger: &TestLedger) -> BytesN<32> {
    BytesN::from_array(&ledger.env, &[7u8; 32])
}

#[test]
fn test_initialize_records_storage_version() {
    let ledger = setup_two_pools();
    assert_eq!(ledger.client.storage_version(), STORAGE_VERSION);
}

#[test]
fn test_upgrade_with_wrong_expected_version_fails() {
    let ledger = setup_two_pools();

    let result =
        ledger
            .client
            .try_upgrade(&ledger.owner, &dummy_hash(&ledger), &(STORAGE_VERSION + 1));
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::IncompatibleStorage),
        _ => unreachable!("Expected IncompatibleStorage error"),
    }
}

#[test]
fn test_upgrade_by_non_owner_fails() {
    let ledger = setup_two_pools();
    let intruder = Address::generate(&ledger.env);

    let result = ledger
        .client
        .try_upgrade(&intruder, &dummy_hash(&ledger), &STORAGE_VERSION);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_incompatible_storage_blocks_mutations() {
    let ledger = setup_two_pools();
    let user = ledger.funded_user(1_000);
    ledger.client.stake_native(&user, &0, &1_000);

    force_stored_version(&ledger, STORAGE_VERSION + 1);

    match ledger.client.try_stake_native(&user, &0, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::IncompatibleStorage),
        _ => unreachable!("Expected IncompatibleStorage error"),
    }
    match ledger.client.try_claim_reward(&user, &0) {
        Err(Ok(e)) => assert_eq!(e, ContractError::IncompatibleStorage),
        _ => unreachable!("Expected IncompatibleStorage error"),
    }
    match ledger.client.try_set_reward_per_block(&ledger.owner, &1) {
        Err(Ok(e)) => assert_eq!(e, ContractError::IncompatibleStorage),
        _ => unreachable!("Expected IncompatibleStorage error"),
    }

    // Reads keep working so the state can be inspected.
    assert_eq!(ledger.client.get_position(&0, &user).staked, 1_000);
}

#[test]
fn test_migrate_without_path_fails() {
    let ledger = setup_two_pools();
    force_stored_version(&ledger, STORAGE_VERSION + 1);

    match ledger.client.try_migrate(&ledger.owner) {
        Err(Ok(e)) => assert_eq!(e, ContractError::IncompatibleStorage),
        _ => unreachable!("Expected IncompatibleStorage error"),
    }
}

#[test]
fn test_migrate_at_current_version_preserves_state() {
    let ledger = setup_two_pools();
    let user = ledger.funded_user(1_000);
    ledger.client.stake_native(&user, &0, &1_000);
    ledger.client.unstake(&user, &0, &400);

    ledger.set_block(50);
    let pool_before = ledger.client.get_pool(&0);
    let position_before = ledger.client.get_position(&0, &user);
    let pending_before = ledger.client.pending_reward(&0, &user);

    assert_eq!(ledger.client.migrate(&ledger.owner), STORAGE_VERSION);

    assert_eq!(ledger.client.storage_version(), STORAGE_VERSION);
    assert_eq!(ledger.client.get_pool(&0), pool_before);
    assert_eq!(ledger.client.get_position(&0, &user), position_before);
    assert_eq!(ledger.client.pending_reward(&0, &user), pending_before);
    assert_eq!(ledger.client.get_owner(), ledger.owner);
    assert_eq!(ledger.client.pool_length(), 2);
}

#[test]
fn test_migrate_by_non_owner_fails() {
    let ledger = setup_two_pools();
    let intruder = Address::generate(&ledger.env);

    match ledger.client.try_migrate(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}
