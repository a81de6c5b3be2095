use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{storage, ContractError};

// ── Storage keys ─────────────────────────────────────────────────────────────

const POOL: Symbol = symbol_short!("POOL");
const TOKEN_POOL: Symbol = symbol_short!("TOK_POOL");
const POOL_COUNT: Symbol = symbol_short!("POOL_CNT");
const TOTAL_WEIGHT: Symbol = symbol_short!("TOT_WGT");

// ── Types ────────────────────────────────────────────────────────────────────

/// The asset a pool accepts as principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolAsset {
    /// The network's native value asset.
    Native,
    /// A SEP-41 fungible token at the given contract address.
    Token(Address),
}

/// One staking stream: a depositable asset plus its reward bookkeeping.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub id: u32,
    pub asset: PoolAsset,
    /// Share of the global emission: `reward_per_block * weight / total_weight`.
    pub weight: u32,
    pub min_deposit: i128,
    pub unstake_lock_blocks: u32,
    pub total_staked: i128,
    /// Reward earned per staked unit since creation, scaled by `rewards::SCALE`.
    pub acc_reward_per_share: i128,
    pub last_accrual_block: u32,
}

fn pool_key(id: u32) -> (Symbol, u32) {
    (POOL, id)
}

fn token_pool_key(token: &Address) -> (Symbol, Address) {
    (TOKEN_POOL, token.clone())
}

// ── Registry ─────────────────────────────────────────────────────────────────

pub fn pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_COUNT).unwrap_or(0)
}

pub fn total_weight(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL_WEIGHT).unwrap_or(0)
}

pub fn exists(env: &Env, id: u32) -> bool {
    id < pool_count(env)
}

/// Returns the pool id registered for `token`, if any.
pub fn token_pool_id(env: &Env, token: &Address) -> Option<u32> {
    env.storage().persistent().get(&token_pool_key(token))
}

pub fn load(env: &Env, id: u32) -> Result<Pool, ContractError> {
    let key = pool_key(id);
    let pool: Pool = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::PoolNotFound)?;
    storage::bump_persistent(env, &key);
    Ok(pool)
}

pub fn store(env: &Env, pool: &Pool) {
    let key = pool_key(pool.id);
    env.storage().persistent().set(&key, pool);
    storage::bump_persistent(env, &key);
}

/// Registers a new pool under the next sequential id.
///
/// Callers must bring every existing pool current first: the weight sum
/// changes here and accrual reads it lazily.
pub fn create(
    env: &Env,
    asset: PoolAsset,
    weight: u32,
    min_deposit: i128,
    unstake_lock_blocks: u32,
) -> Result<Pool, ContractError> {
    if let PoolAsset::Token(token) = &asset {
        if token_pool_id(env, token).is_some() {
            return Err(ContractError::DuplicatePool);
        }
    }

    let id = pool_count(env);
    let next_count = id.checked_add(1).ok_or(ContractError::MathOverflow)?;
    let new_total_weight = total_weight(env)
        .checked_add(u64::from(weight))
        .ok_or(ContractError::MathOverflow)?;

    let pool = Pool {
        id,
        asset,
        weight,
        min_deposit,
        unstake_lock_blocks,
        total_staked: 0,
        acc_reward_per_share: 0,
        last_accrual_block: env.ledger().sequence(),
    };
    store(env, &pool);

    if let PoolAsset::Token(token) = &pool.asset {
        let key = token_pool_key(token);
        env.storage().persistent().set(&key, &id);
        storage::bump_persistent(env, &key);
    }
    env.storage().instance().set(&POOL_COUNT, &next_count);
    env.storage().instance().set(&TOTAL_WEIGHT, &new_total_weight);

    Ok(pool)
}

/// Replaces `pool.weight` and keeps the registry's weight sum in step.
pub fn reweight(env: &Env, pool: &mut Pool, new_weight: u32) -> Result<(), ContractError> {
    let new_total_weight = total_weight(env)
        .checked_sub(u64::from(pool.weight))
        .and_then(|w| w.checked_add(u64::from(new_weight)))
        .ok_or(ContractError::MathOverflow)?;

    pool.weight = new_weight;
    store(env, pool);
    env.storage().instance().set(&TOTAL_WEIGHT, &new_total_weight);
    Ok(())
}
