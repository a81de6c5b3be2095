#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::{config::LedgerPolicy, pause::PauseScope, pool::PoolAsset};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub reward_token: Address,
    pub native_asset: Address,
    pub reward_per_block: i128,
    pub storage_version: u32,
    pub block: u32,
}

/// Fired when a pool is registered. The only place its id is reported.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolAddedEvent {
    pub pool_id: u32,
    pub asset: PoolAsset,
    pub weight: u32,
    pub min_deposit: i128,
    pub unstake_lock_blocks: u32,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolWeightSetEvent {
    pub pool_id: u32,
    pub old_weight: u32,
    pub new_weight: u32,
    pub total_weight: u64,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolUpdatedEvent {
    pub pool_id: u32,
    pub min_deposit: i128,
    pub unstake_lock_blocks: u32,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPerBlockSetEvent {
    pub new_rate: i128,
    pub block: u32,
}

/// Fired when principal is deposited into a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub pool_id: u32,
    pub user: Address,
    pub amount: i128,
    pub new_total_staked: i128,
    pub block: u32,
}

/// Fired when principal is queued behind the pool's unstake lock.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequestedEvent {
    pub pool_id: u32,
    pub user: Address,
    pub amount: i128,
    pub unlock_block: u32,
    pub block: u32,
}

/// Fired when unlocked principal leaves the ledger.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub pool_id: u32,
    pub user: Address,
    pub amount: i128,
    pub block: u32,
}

/// Fired whenever reward is paid out, by a claim or a principal change.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub pool_id: u32,
    pub user: Address,
    pub amount: i128,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub scope: PauseScope,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicySetEvent {
    pub policy: LedgerPolicy,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub block: u32,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradedEvent {
    pub new_wasm_hash: BytesN<32>,
    pub storage_version: u32,
    pub block: u32,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    reward_token: Address,
    native_asset: Address,
    reward_per_block: i128,
    storage_version: u32,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            reward_token,
            native_asset,
            reward_per_block,
            storage_version,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_added(
    env: &Env,
    pool_id: u32,
    asset: PoolAsset,
    weight: u32,
    min_deposit: i128,
    unstake_lock_blocks: u32,
) {
    env.events().publish(
        (symbol_short!("POOL_ADD"), pool_id),
        PoolAddedEvent {
            pool_id,
            asset,
            weight,
            min_deposit,
            unstake_lock_blocks,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_weight_set(
    env: &Env,
    pool_id: u32,
    old_weight: u32,
    new_weight: u32,
    total_weight: u64,
) {
    env.events().publish(
        (symbol_short!("POOL_WGT"), pool_id),
        PoolWeightSetEvent {
            pool_id,
            old_weight,
            new_weight,
            total_weight,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_pool_updated(env: &Env, pool_id: u32, min_deposit: i128, unstake_lock_blocks: u32) {
    env.events().publish(
        (symbol_short!("POOL_UPD"), pool_id),
        PoolUpdatedEvent {
            pool_id,
            min_deposit,
            unstake_lock_blocks,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_per_block_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardPerBlockSetEvent {
            new_rate,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    pool_id: u32,
    user: Address,
    amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), pool_id, user.clone()),
        StakedEvent {
            pool_id,
            user,
            amount,
            new_total_staked,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_unstake_requested(
    env: &Env,
    pool_id: u32,
    user: Address,
    amount: i128,
    unlock_block: u32,
) {
    env.events().publish(
        (symbol_short!("UNSTK_REQ"), pool_id, user.clone()),
        UnstakeRequestedEvent {
            pool_id,
            user,
            amount,
            unlock_block,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, pool_id: u32, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), pool_id, user.clone()),
        WithdrawnEvent {
            pool_id,
            user,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, pool_id: u32, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), pool_id, user.clone()),
        RewardPaidEvent {
            pool_id,
            user,
            amount,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_paused(env: &Env, caller: Address, scope: PauseScope) {
    env.events().publish(
        (symbol_short!("PAUSED"), scope),
        PauseChangedEvent {
            caller,
            scope,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_resumed(env: &Env, caller: Address, scope: PauseScope) {
    env.events().publish(
        (symbol_short!("RESUMED"), scope),
        PauseChangedEvent {
            caller,
            scope,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_policy_set(env: &Env, policy: LedgerPolicy) {
    env.events().publish(
        (symbol_short!("POLICY"),),
        PolicySetEvent {
            policy,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_owner_transfer_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerTransferProposedEvent {
            current_owner,
            proposed_owner,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_owner_transfer_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferAcceptedEvent {
            old_owner,
            new_owner,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            block: env.ledger().sequence(),
        },
    );
}

pub fn publish_upgraded(env: &Env, new_wasm_hash: BytesN<32>, storage_version: u32) {
    env.events().publish(
        (symbol_short!("UPGRADED"),),
        UpgradedEvent {
            new_wasm_hash,
            storage_version,
            block: env.ledger().sequence(),
        },
    );
}
