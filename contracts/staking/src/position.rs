use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::{pool::Pool, rewards, storage, timelock::UnstakeRequest, ContractError};

const POSITION: Symbol = symbol_short!("POSITION");

/// A depositor's state inside one pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserPosition {
    /// Principal currently earning reward.
    pub staked: i128,
    /// `staked * acc_reward_per_share / SCALE` at the last checkpoint.
    pub reward_debt: i128,
    /// Settled reward owed to the user but not yet paid.
    pub unclaimed: i128,
    /// Unstake requests in submission order.
    pub requests: Vec<UnstakeRequest>,
}

/// Principal lifecycle of a position, independent of its reward.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PositionStatus {
    Unstaked = 0,
    Staked = 1,
    PartiallyUnstaking = 2,
}

impl UserPosition {
    pub fn empty(env: &Env) -> Self {
        Self {
            staked: 0,
            reward_debt: 0,
            unclaimed: 0,
            requests: Vec::new(env),
        }
    }

    pub fn status(&self) -> PositionStatus {
        if !self.requests.is_empty() {
            PositionStatus::PartiallyUnstaking
        } else if self.staked > 0 {
            PositionStatus::Staked
        } else {
            PositionStatus::Unstaked
        }
    }
}

fn position_key(pool_id: u32, user: &Address) -> (Symbol, u32, Address) {
    (POSITION, pool_id, user.clone())
}

/// Loads a position, or an empty one if the user never deposited.
pub fn load(env: &Env, pool_id: u32, user: &Address) -> UserPosition {
    let key = position_key(pool_id, user);
    match env.storage().persistent().get(&key) {
        Some(position) => {
            storage::bump_persistent(env, &key);
            position
        }
        None => UserPosition::empty(env),
    }
}

pub fn store(env: &Env, pool_id: u32, user: &Address, position: &UserPosition) {
    let key = position_key(pool_id, user);
    env.storage().persistent().set(&key, position);
    storage::bump_persistent(env, &key);
}

/// Reward earned by `position` since its last checkpoint.
///
/// `pool` must already be accrued to the current block. The position is not
/// modified; callers clear it through [`checkpoint`] once they have decided
/// what to do with the amount.
pub fn settle(env: &Env, pool: &Pool, position: &UserPosition) -> Result<i128, ContractError> {
    rewards::pending(
        env,
        position.staked,
        pool.acc_reward_per_share,
        position.reward_debt,
    )
}

/// Resets the reward debt to the current product. Must follow every change
/// to `staked` and every payout.
pub fn checkpoint(
    env: &Env,
    pool: &Pool,
    position: &mut UserPosition,
) -> Result<(), ContractError> {
    position.reward_debt =
        rewards::accumulated(env, position.staked, pool.acc_reward_per_share)?;
    Ok(())
}
