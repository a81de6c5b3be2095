use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{events, ContractError};

// ── Types ─────────────────────────────────────────────────────

/// Operations that can be halted independently.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PauseScope {
    /// Deposits and withdrawals of principal (and unstake requests when
    /// the ledger policy says so).
    Stake = 1,
    /// Reward claims.
    Claim = 2,
}

// ── Storage Keys ─────────────────────────────────────────────

fn pause_key(scope: PauseScope) -> Symbol {
    match scope {
        PauseScope::Stake => symbol_short!("P_STAKE"),
        PauseScope::Claim => symbol_short!("P_CLAIM"),
    }
}

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env, scope: PauseScope) -> bool {
    env.storage()
        .instance()
        .get(&pause_key(scope))
        .unwrap_or(false)
}

/// Fails if `scope` is currently halted.
pub fn require_not_paused(env: &Env, scope: PauseScope) -> Result<(), ContractError> {
    if !is_paused(env, scope) {
        return Ok(());
    }
    match scope {
        PauseScope::Stake => Err(ContractError::StakePaused),
        PauseScope::Claim => Err(ContractError::ClaimPaused),
    }
}

/// Engages the breaker for `scope`. The caller must already be verified as owner.
pub fn pause(env: &Env, caller: &Address, scope: PauseScope) {
    env.storage().instance().set(&pause_key(scope), &true);
    events::publish_paused(env, caller.clone(), scope);
}

/// Releases the breaker for `scope`. The caller must already be verified as owner.
pub fn resume(env: &Env, caller: &Address, scope: PauseScope) {
    env.storage().instance().set(&pause_key(scope), &false);
    events::publish_resumed(env, caller.clone(), scope);
}
