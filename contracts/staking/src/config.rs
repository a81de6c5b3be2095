use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::ContractError;

const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const NATIVE_ASSET: Symbol = symbol_short!("NATIVE");
const REWARD_PER_BLOCK: Symbol = symbol_short!("RWD_RATE");
const POLICY: Symbol = symbol_short!("POLICY");

/// Runtime policy knobs the owner may change after deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerPolicy {
    /// When set, `pause_stake` also blocks new `unstake` requests.
    pub pause_gates_unstake: bool,
    /// When set, pending reward is paid out on every stake/unstake.
    /// Otherwise it is carried in `UserPosition::unclaimed` until the next claim.
    pub auto_claim: bool,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            pause_gates_unstake: false,
            auto_claim: true,
        }
    }
}

pub fn init(
    env: &Env,
    reward_token: &Address,
    native_asset: &Address,
    reward_per_block: i128,
    policy: &LedgerPolicy,
) {
    let storage = env.storage().instance();
    storage.set(&REWARD_TOKEN, reward_token);
    storage.set(&NATIVE_ASSET, native_asset);
    storage.set(&REWARD_PER_BLOCK, &reward_per_block);
    storage.set(&POLICY, policy);
}

pub fn reward_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&REWARD_TOKEN)
        .ok_or(ContractError::NotInitialized)
}

pub fn native_asset(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&NATIVE_ASSET)
        .ok_or(ContractError::NotInitialized)
}

pub fn reward_per_block(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_PER_BLOCK).unwrap_or(0)
}

pub fn set_reward_per_block(env: &Env, rate: i128) {
    env.storage().instance().set(&REWARD_PER_BLOCK, &rate);
}

pub fn policy(env: &Env) -> LedgerPolicy {
    env.storage().instance().get(&POLICY).unwrap_or_default()
}

pub fn set_policy(env: &Env, policy: &LedgerPolicy) {
    env.storage().instance().set(&POLICY, policy);
}
