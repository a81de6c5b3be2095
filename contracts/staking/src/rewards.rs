//! Reward-per-share accounting.
//!
//! Each pool carries an accumulator of reward earned per staked unit. A
//! position's entitlement is `staked * acc / SCALE - reward_debt`, so no
//! operation ever has to iterate over other depositors.
//!
//! Both scaled products go through 256-bit intermediates: a dust stake alone
//! in a pool drives `acc` high enough that `staked * acc` no longer fits in
//! `i128` for ordinary deposits, even though the quotient does.

use soroban_sdk::{Env, I256};

use crate::{pool::Pool, ContractError};

/// Fixed-point scale of `Pool::acc_reward_per_share`.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// `a * b / divisor` without intermediate overflow. Fails only if the
/// quotient itself leaves `i128`.
fn mul_div(env: &Env, a: i128, b: i128, divisor: i128) -> Result<i128, ContractError> {
    if divisor == 0 {
        return Err(ContractError::MathOverflow);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, divisor))
        .to_i128()
        .ok_or(ContractError::MathOverflow)
}

/// Reward emitted to one pool over `elapsed` blocks.
pub fn pool_reward(
    reward_per_block: i128,
    elapsed: u32,
    weight: u32,
    total_weight: u64,
) -> Result<i128, ContractError> {
    if elapsed == 0 || weight == 0 || total_weight == 0 || reward_per_block <= 0 {
        return Ok(0);
    }
    reward_per_block
        .checked_mul(i128::from(elapsed))
        .and_then(|r| r.checked_mul(i128::from(weight)))
        .and_then(|r| r.checked_div(i128::from(total_weight)))
        .ok_or(ContractError::MathOverflow)
}

/// Folds `reward` into the accumulator, spread over `total_staked` units.
pub fn next_acc_reward_per_share(
    env: &Env,
    acc_reward_per_share: i128,
    reward: i128,
    total_staked: i128,
) -> Result<i128, ContractError> {
    if reward <= 0 || total_staked <= 0 {
        return Ok(acc_reward_per_share);
    }
    let increment = mul_div(env, reward, SCALE, total_staked)?;
    acc_reward_per_share
        .checked_add(increment)
        .ok_or(ContractError::MathOverflow)
}

/// `staked * acc_reward_per_share / SCALE`: the reward-debt checkpoint value.
pub fn accumulated(
    env: &Env,
    staked: i128,
    acc_reward_per_share: i128,
) -> Result<i128, ContractError> {
    if staked == 0 || acc_reward_per_share == 0 {
        return Ok(0);
    }
    mul_div(env, staked, acc_reward_per_share, SCALE)
}

/// Reward earned since the last checkpoint. Never negative.
pub fn pending(
    env: &Env,
    staked: i128,
    acc_reward_per_share: i128,
    reward_debt: i128,
) -> Result<i128, ContractError> {
    let total = accumulated(env, staked, acc_reward_per_share)?;
    Ok(total.saturating_sub(reward_debt).max(0))
}

/// Brings `pool` current to `block`.
///
/// Idempotent. An empty pool only moves its checkpoint forward: reward for
/// blocks with nothing staked is never minted.
pub fn accrue(
    env: &Env,
    pool: &mut Pool,
    block: u32,
    reward_per_block: i128,
    total_weight: u64,
) -> Result<(), ContractError> {
    if block <= pool.last_accrual_block {
        return Ok(());
    }
    if pool.total_staked > 0 {
        let elapsed = block - pool.last_accrual_block;
        let reward = pool_reward(reward_per_block, elapsed, pool.weight, total_weight)?;
        pool.acc_reward_per_share =
            next_acc_reward_per_share(env, pool.acc_reward_per_share, reward, pool.total_staked)?;
    }
    pool.last_accrual_block = block;
    Ok(())
}
