extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::{
    test::{setup_two_pools, setup_with, TestLedger, LOCK_BLOCKS, REWARD_FUNDING},
    ContractError, LedgerPolicy,
};

fn paused_ledger_with_stakes() -> (TestLedger, Address) {
    let ledger = setup_two_pools();
    let user = ledger.funded_user(2_000);
    ledger.client.stake_native(&user, &0, &1_000);
    ledger.client.stake_token(&user, &1, &1_000);
    ledger.client.pause_stake(&ledger.owner);
    (ledger, user)
}

// ── Stake pause ───────────────────────────────────────────────────────────────

#[test]
fn test_pause_stake_blocks_deposits() {
    let (ledger, user) = paused_ledger_with_stakes();
    assert!(ledger.client.is_stake_paused());
    assert!(!ledger.client.is_claim_paused());

    match ledger.client.try_stake_native(&user, &0, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }
    match ledger.client.try_stake_token(&user, &1, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }
}

#[test]
fn test_pause_stake_applies_to_owner() {
    let (ledger, _) = paused_ledger_with_stakes();

    match ledger.client.try_stake_native(&ledger.owner, &0, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }
    match ledger.client.try_stake_token(&ledger.owner, &1, &100) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }
    match ledger.client.try_withdraw(&ledger.owner, &0) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }
}

#[test]
fn test_pause_stake_blocks_withdraw() {
    let ledger = setup_two_pools();
    let user = ledger.funded_user(1_000);
    ledger.client.stake_native(&user, &0, &1_000);
    ledger.client.unstake(&user, &0, &1_000);

    ledger.set_block(LOCK_BLOCKS);
    ledger.client.pause_stake(&ledger.owner);

    match ledger.client.try_withdraw(&user, &0) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }

    // The unlocked request survives the pause.
    ledger.client.unpause_stake(&ledger.owner);
    assert_eq!(ledger.client.withdraw(&user, &0), 1_000);
}

#[test]
fn test_claim_allowed_while_stake_paused() {
    let (ledger, user) = paused_ledger_with_stakes();

    ledger.set_block(100);
    assert_eq!(ledger.client.claim_reward(&user, &0), 600);
    assert_eq!(ledger.client.claim_reward(&user, &1), 400);
}

#[test]
fn test_unstake_allowed_while_paused_by_default() {
    let (ledger, user) = paused_ledger_with_stakes();

    let unlock_block = ledger.client.unstake(&user, &0, &500);
    assert_eq!(unlock_block, LOCK_BLOCKS);
    assert_eq!(ledger.client.get_position(&0, &user).staked, 500);
}

#[test]
fn test_unstake_blocked_when_policy_gates_it() {
    let policy = LedgerPolicy {
        pause_gates_unstake: true,
        auto_claim: true,
    };
    let ledger = setup_with(policy, REWARD_FUNDING);
    ledger.add_native_pool(1);
    let user = ledger.funded_user(1_000);
    ledger.client.stake_native(&user, &0, &1_000);
    ledger.client.pause_stake(&ledger.owner);

    match ledger.client.try_unstake(&user, &0, &500) {
        Err(Ok(e)) => assert_eq!(e, ContractError::StakePaused),
        _ => unreachable!("Expected StakePaused error"),
    }
}

#[test]
fn test_unpause_stake_restores_deposits() {
    let (ledger, user) = paused_ledger_with_stakes();

    ledger.client.unpause_stake(&ledger.owner);
    assert!(!ledger.client.is_stake_paused());
    assert_eq!(ledger.client.stake_native(&user, &0, &500), 1_500);
}

#[test]
fn test_pause_is_idempotent() {
    let ledger = setup_two_pools();

    ledger.client.pause_stake(&ledger.owner);
    ledger.client.pause_stake(&ledger.owner);
    assert!(ledger.client.is_stake_paused());

    ledger.client.unpause_stake(&ledger.owner);
    ledger.client.unpause_stake(&ledger.owner);
    assert!(!ledger.client.is_stake_paused());
}

#[test]
fn test_pause_by_non_owner_fails() {
    let ledger = setup_two_pools();
    let intruder = Address::generate(&ledger.env);

    match ledger.client.try_pause_stake(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    match ledger.client.try_pause_claim(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(!ledger.client.is_stake_paused());
}

#[test]
fn test_admin_calls_allowed_while_paused() {
    let (ledger, _) = paused_ledger_with_stakes();

    ledger.client.set_reward_per_block(&ledger.owner, &20);
    ledger.client.set_pool_weight(&ledger.owner, &1, &10);
    let id = ledger.client.add_pool(
        &ledger.owner,
        &crate::PoolAsset::Native,
        &5,
        &1,
        &LOCK_BLOCKS,
    );
    assert_eq!(id, 2);
}

// ── Claim pause ───────────────────────────────────────────────────────────────

#[test]
fn test_pause_claim_blocks_only_claims() {
    let ledger = setup_two_pools();
    let user = ledger.funded_user(2_000);
    ledger.client.stake_native(&user, &0, &1_000);
    ledger.client.pause_claim(&ledger.owner);

    ledger.set_block(100);
    match ledger.client.try_claim_reward(&user, &0) {
        Err(Ok(e)) => assert_eq!(e, ContractError::ClaimPaused),
        _ => unreachable!("Expected ClaimPaused error"),
    }

    // Deposits keep working; the settled reward is held back, not paid.
    ledger.client.stake_native(&user, &0, &1_000);
    assert_eq!(ledger.client.balance_of(&user), 0);
    assert_eq!(ledger.client.get_position(&0, &user).unclaimed, 600);

    ledger.client.unpause_claim(&ledger.owner);
    assert_eq!(ledger.client.claim_reward(&user, &0), 600);
    assert_eq!(ledger.client.claim_reward(&user, &0), 0);
}
