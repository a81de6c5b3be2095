#![no_std]

pub mod config;
pub mod events;
pub mod pause;
pub mod pool;
pub mod position;
pub mod rewards;
pub mod storage;
pub mod timelock;
pub mod upgrade;

use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, BytesN, Env, Symbol,
};

pub use config::LedgerPolicy;
pub use pause::PauseScope;
pub use pool::{Pool, PoolAsset};
pub use position::{PositionStatus, UserPosition};
pub use timelock::UnstakeRequest;

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");
const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    // lifecycle
    NotInitialized = 1,
    AlreadyInitialized = 2,
    IncompatibleStorage = 3,
    // authorization
    Unauthorized = 10,
    // state
    StakePaused = 20,
    ClaimPaused = 21,
    PoolNotFound = 22,
    AssetMismatch = 23,
    DuplicatePool = 24,
    TokensIdentical = 25,
    // validation
    InvalidInput = 30,
    BelowMinDeposit = 31,
    InsufficientStake = 32,
    TooManyPendingWithdrawals = 33,
    NoPendingTransfer = 34,
    // external calls
    InsufficientAllowance = 40,
    InsufficientRewardBalance = 41,
    // arithmetic
    MathOverflow = 50,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct PoolStakingContract;

#[contractimpl]
impl PoolStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `reward_token`     – SEP-41 token paid out as reward; the ledger pays
    ///                        claims from its own balance of it.
    /// * `native_asset`     – contract address of the network's native asset.
    /// * `reward_per_block` – reward emitted per ledger across all pools.
    /// * `policy`           – pause scope and claim-on-change behaviour.
    pub fn initialize(
        env: Env,
        owner: Address,
        reward_token: Address,
        native_asset: Address,
        reward_per_block: i128,
        policy: LedgerPolicy,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_per_block < 0 {
            return Err(ContractError::InvalidInput);
        }
        if reward_token == native_asset {
            return Err(ContractError::TokensIdentical);
        }

        env.storage().instance().set(&OWNER, &owner);
        env.storage().instance().set(&INITIALIZED, &true);
        config::init(&env, &reward_token, &native_asset, reward_per_block, &policy);
        upgrade::write_current_version(&env);
        storage::bump_instance(&env);

        events::publish_initialized(
            &env,
            owner,
            reward_token,
            native_asset,
            reward_per_block,
            upgrade::STORAGE_VERSION,
        );

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Register a new pool and return its id.
    ///
    /// Every existing pool is accrued first, since the weight sum changes.
    pub fn add_pool(
        env: Env,
        caller: Address,
        asset: PoolAsset,
        weight: u32,
        min_deposit: i128,
        unstake_lock_blocks: u32,
    ) -> Result<u32, ContractError> {
        Self::require_ready(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if min_deposit < 0 {
            return Err(ContractError::InvalidInput);
        }
        if let PoolAsset::Token(token) = &asset {
            if *token == config::reward_token(&env)? {
                return Err(ContractError::TokensIdentical);
            }
            // The native asset is only stakeable through a `Native` pool.
            if *token == config::native_asset(&env)? {
                return Err(ContractError::AssetMismatch);
            }
        }

        Self::accrue_all(&env)?;
        let pool = pool::create(&env, asset, weight, min_deposit, unstake_lock_blocks)?;

        events::publish_pool_added(
            &env,
            pool.id,
            pool.asset.clone(),
            weight,
            min_deposit,
            unstake_lock_blocks,
        );

        Ok(pool.id)
    }

    pub fn is_pool_exist(env: Env, pool_id: u32) -> bool {
        pool::exists(&env, pool_id)
    }

    /// Change a pool's share of the emission.
    ///
    /// All pools are brought current at the old weighting before the change.
    pub fn set_pool_weight(
        env: Env,
        caller: Address,
        pool_id: u32,
        new_weight: u32,
    ) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if !pool::exists(&env, pool_id) {
            return Err(ContractError::PoolNotFound);
        }
        Self::accrue_all(&env)?;

        let mut pool = pool::load(&env, pool_id)?;
        let old_weight = pool.weight;
        pool::reweight(&env, &mut pool, new_weight)?;

        events::publish_pool_weight_set(
            &env,
            pool_id,
            old_weight,
            new_weight,
            pool::total_weight(&env),
        );

        Ok(())
    }

    /// Update a pool's deposit minimum and unstake lock.
    ///
    /// The lock applies to future unstake requests only.
    pub fn update_pool(
        env: Env,
        caller: Address,
        pool_id: u32,
        min_deposit: i128,
        unstake_lock_blocks: u32,
    ) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if min_deposit < 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut pool = pool::load(&env, pool_id)?;
        Self::accrue_pool(&env, &mut pool)?;
        pool.min_deposit = min_deposit;
        pool.unstake_lock_blocks = unstake_lock_blocks;
        pool::store(&env, &pool);

        events::publish_pool_updated(&env, pool_id, min_deposit, unstake_lock_blocks);

        Ok(())
    }

    /// Update the global emission rate.
    ///
    /// Every pool is flushed at the old rate before the rate changes, so
    /// reward already earned is never repriced.
    pub fn set_reward_per_block(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        Self::accrue_all(&env)?;
        config::set_reward_per_block(&env, new_rate);

        events::publish_reward_per_block_set(&env, new_rate);

        Ok(())
    }

    // ── Accrual ─────────────────────────────────────────────────────────────

    /// Bring one pool's accumulator current. Callable by anyone, any number
    /// of times.
    pub fn accrue(env: Env, pool_id: u32) -> Result<Pool, ContractError> {
        Self::require_ready(&env)?;
        let mut pool = pool::load(&env, pool_id)?;
        Self::accrue_pool(&env, &mut pool)?;
        pool::store(&env, &pool);
        Ok(pool)
    }

    /// Bring every pool's accumulator current.
    pub fn mass_update_pools(env: Env) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        Self::accrue_all(&env)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the native asset into a native pool.
    ///
    /// Returns the user's new staked balance in the pool.
    pub fn stake_native(
        env: Env,
        user: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<i128, ContractError> {
        Self::deposit(&env, &user, pool_id, amount, true)
    }

    /// Deposit `amount` of a pool's token. The ledger must have been approved
    /// to spend at least `amount` on the user's behalf.
    ///
    /// Returns the user's new staked balance in the pool.
    pub fn stake_token(
        env: Env,
        user: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<i128, ContractError> {
        Self::deposit(&env, &user, pool_id, amount, false)
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Queue `amount` of principal behind the pool's unstake lock.
    ///
    /// The staked balance drops immediately, so the queued amount stops
    /// earning now; the asset only moves on `withdraw`. Returns the unlock
    /// block of the new request.
    pub fn unstake(
        env: Env,
        user: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<u32, ContractError> {
        Self::require_ready(&env)?;
        user.require_auth();

        let policy = config::policy(&env);
        if policy.pause_gates_unstake {
            pause::require_not_paused(&env, PauseScope::Stake)?;
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let mut pool = pool::load(&env, pool_id)?;
        let mut position = position::load(&env, pool_id, &user);
        if amount > position.staked {
            return Err(ContractError::InsufficientStake);
        }

        Self::accrue_pool(&env, &mut pool)?;
        let pending = position::settle(&env, &pool, &position)?;
        let payout = Self::roll_or_pay(&env, &policy, &mut position, pending)?;

        position.staked = position
            .staked
            .checked_sub(amount)
            .ok_or(ContractError::MathOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::MathOverflow)?;
        position::checkpoint(&env, &pool, &mut position)?;

        let unlock_block = env
            .ledger()
            .sequence()
            .checked_add(pool.unstake_lock_blocks)
            .ok_or(ContractError::MathOverflow)?;
        timelock::enqueue(&mut position.requests, amount, unlock_block)?;

        pool::store(&env, &pool);
        position::store(&env, pool_id, &user, &position);

        Self::pay_reward(&env, pool_id, &user, payout)?;
        events::publish_unstake_requested(&env, pool_id, user, amount, unlock_block);

        Ok(unlock_block)
    }

    /// Move every unlocked unstake request's principal back to the user.
    ///
    /// Returns the amount transferred; `0` when nothing has unlocked yet.
    pub fn withdraw(env: Env, user: Address, pool_id: u32) -> Result<i128, ContractError> {
        Self::require_ready(&env)?;
        user.require_auth();
        pause::require_not_paused(&env, PauseScope::Stake)?;

        let mut pool = pool::load(&env, pool_id)?;
        Self::accrue_pool(&env, &mut pool)?;
        pool::store(&env, &pool);

        let mut position = position::load(&env, pool_id, &user);
        let (released, remaining) =
            timelock::release_unlocked(&env, &position.requests, env.ledger().sequence())?;
        if released == 0 {
            return Ok(0);
        }

        position.requests = remaining;
        position::store(&env, pool_id, &user, &position);

        let asset = Self::asset_address(&env, &pool.asset)?;
        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &user,
            &released,
        );

        events::publish_withdrawn(&env, pool_id, user, released);

        Ok(released)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything the user has earned in `pool_id`.
    ///
    /// Returns the amount paid; a second claim in the same block pays `0`.
    pub fn claim_reward(env: Env, user: Address, pool_id: u32) -> Result<i128, ContractError> {
        Self::require_ready(&env)?;
        user.require_auth();
        pause::require_not_paused(&env, PauseScope::Claim)?;

        let mut pool = pool::load(&env, pool_id)?;
        Self::accrue_pool(&env, &mut pool)?;
        pool::store(&env, &pool);

        let mut position = position::load(&env, pool_id, &user);
        let owed = position::settle(&env, &pool, &position)?
            .checked_add(position.unclaimed)
            .ok_or(ContractError::MathOverflow)?;
        if owed <= 0 {
            return Ok(0);
        }
        if Self::reward_balance(&env)? < owed {
            return Err(ContractError::InsufficientRewardBalance);
        }

        position.unclaimed = 0;
        position::checkpoint(&env, &pool, &mut position)?;
        position::store(&env, pool_id, &user, &position);

        Self::pay_reward(&env, pool_id, &user, owed)?;

        Ok(owed)
    }

    /// Reward-token balance held by `user`.
    pub fn balance_of(env: Env, user: Address) -> Result<i128, ContractError> {
        let reward_token = config::reward_token(&env)?;
        Ok(token::Client::new(&env, &reward_token).balance(&user))
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_pool(env: Env, pool_id: u32) -> Result<Pool, ContractError> {
        pool::load(&env, pool_id)
    }

    pub fn pool_length(env: Env) -> u32 {
        pool::pool_count(&env)
    }

    pub fn total_weight(env: Env) -> u64 {
        pool::total_weight(&env)
    }

    pub fn get_reward_per_block(env: Env) -> i128 {
        config::reward_per_block(&env)
    }

    pub fn get_position(env: Env, pool_id: u32, user: Address) -> Result<UserPosition, ContractError> {
        if !pool::exists(&env, pool_id) {
            return Err(ContractError::PoolNotFound);
        }
        Ok(position::load(&env, pool_id, &user))
    }

    /// Reward claimable right now, without mutating state.
    pub fn pending_reward(env: Env, pool_id: u32, user: Address) -> Result<i128, ContractError> {
        let mut pool = pool::load(&env, pool_id)?;
        Self::accrue_pool(&env, &mut pool)?;
        let position = position::load(&env, pool_id, &user);
        position::settle(&env, &pool, &position)?
            .checked_add(position.unclaimed)
            .ok_or(ContractError::MathOverflow)
    }

    /// `(requested, unlocked)`: principal queued by unstake requests, and the
    /// part a `withdraw` would release at the current block.
    pub fn withdraw_amount(
        env: Env,
        pool_id: u32,
        user: Address,
    ) -> Result<(i128, i128), ContractError> {
        if !pool::exists(&env, pool_id) {
            return Err(ContractError::PoolNotFound);
        }
        let position = position::load(&env, pool_id, &user);
        timelock::totals(&position.requests, env.ledger().sequence())
    }

    pub fn position_status(
        env: Env,
        pool_id: u32,
        user: Address,
    ) -> Result<PositionStatus, ContractError> {
        if !pool::exists(&env, pool_id) {
            return Err(ContractError::PoolNotFound);
        }
        Ok(position::load(&env, pool_id, &user).status())
    }

    pub fn is_stake_paused(env: Env) -> bool {
        pause::is_paused(&env, PauseScope::Stake)
    }

    pub fn is_claim_paused(env: Env) -> bool {
        pause::is_paused(&env, PauseScope::Claim)
    }

    pub fn get_policy(env: Env) -> LedgerPolicy {
        config::policy(&env)
    }

    pub fn storage_version(env: Env) -> u32 {
        upgrade::stored_version(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Lifecycle controls ──────────────────────────────────────────────────

    /// Halt deposits and withdrawals (and unstake requests, if the policy
    /// says so). Claims are unaffected.
    pub fn pause_stake(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_paused(&env, &caller, PauseScope::Stake, true)
    }

    pub fn unpause_stake(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_paused(&env, &caller, PauseScope::Stake, false)
    }

    pub fn pause_claim(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_paused(&env, &caller, PauseScope::Claim, true)
    }

    pub fn unpause_claim(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_paused(&env, &caller, PauseScope::Claim, false)
    }

    pub fn set_policy(env: Env, caller: Address, policy: LedgerPolicy) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        config::set_policy(&env, &policy);

        events::publish_policy_set(&env, policy);

        Ok(())
    }

    // ── Ownership transfer (two-step) ───────────────────────────────────────

    /// Propose a new owner. The proposed address must call `accept_owner`.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        env.storage().instance().set(&PENDING_OWNER, &new_owner);

        events::publish_owner_transfer_proposed(&env, current_owner, new_owner);

        Ok(())
    }

    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        new_owner.require_auth();

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_OWNER)
            .ok_or(ContractError::NoPendingTransfer)?;
        if new_owner != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;

        env.storage().instance().set(&OWNER, &new_owner);
        env.storage().instance().remove(&PENDING_OWNER);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        let pending: Address = env
            .storage()
            .instance()
            .get(&PENDING_OWNER)
            .ok_or(ContractError::NoPendingTransfer)?;

        env.storage().instance().remove(&PENDING_OWNER);

        events::publish_owner_transfer_cancelled(&env, current_owner, pending);

        Ok(())
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&PENDING_OWNER)
    }

    // ── Upgrade ─────────────────────────────────────────────────────────────

    /// Replace the ledger's logic in place. Address and storage are kept.
    ///
    /// `expected_storage_version` must equal the schema currently stored.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
        expected_storage_version: u32,
    ) -> Result<(), ContractError> {
        Self::require_ready(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        upgrade::install(&env, new_wasm_hash, expected_storage_version)
    }

    /// Bring stored data forward to the schema this logic understands.
    pub fn migrate(env: Env, caller: Address) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let from = upgrade::migrate(&env)?;
        upgrade::write_current_version(&env);
        storage::bump_instance(&env);
        Ok(from)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard for every state-changing call: initialized, and the stored schema
    /// matches this logic. Keeps the instance entry alive.
    fn require_ready(env: &Env) -> Result<(), ContractError> {
        Self::require_initialized(env)?;
        upgrade::require_compatible(env)?;
        storage::bump_instance(env);
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn set_paused(
        env: &Env,
        caller: &Address,
        scope: PauseScope,
        paused: bool,
    ) -> Result<(), ContractError> {
        Self::require_ready(env)?;
        caller.require_auth();
        Self::require_owner(env, caller)?;

        if paused {
            pause::pause(env, caller, scope);
        } else {
            pause::resume(env, caller, scope);
        }
        Ok(())
    }

    fn accrue_pool(env: &Env, pool: &mut Pool) -> Result<(), ContractError> {
        rewards::accrue(
            env,
            pool,
            env.ledger().sequence(),
            config::reward_per_block(env),
            pool::total_weight(env),
        )
    }

    fn accrue_all(env: &Env) -> Result<(), ContractError> {
        let count = pool::pool_count(env);
        for pool_id in 0..count {
            let mut pool = pool::load(env, pool_id)?;
            Self::accrue_pool(env, &mut pool)?;
            pool::store(env, &pool);
        }
        log!(env, "accrued {} pools at block {}", count, env.ledger().sequence());
        Ok(())
    }

    fn asset_address(env: &Env, asset: &PoolAsset) -> Result<Address, ContractError> {
        match asset {
            PoolAsset::Native => config::native_asset(env),
            PoolAsset::Token(token) => Ok(token.clone()),
        }
    }

    fn reward_balance(env: &Env) -> Result<i128, ContractError> {
        let reward_token = config::reward_token(env)?;
        Ok(token::Client::new(env, &reward_token).balance(&env.current_contract_address()))
    }

    /// Decides what happens to reward settled by a principal change.
    ///
    /// Returns the amount to pay now. Anything not paid stays owed in
    /// `position.unclaimed`, including when claims are paused or the ledger
    /// cannot cover it.
    fn roll_or_pay(
        env: &Env,
        policy: &LedgerPolicy,
        position: &mut UserPosition,
        pending: i128,
    ) -> Result<i128, ContractError> {
        let owed = position
            .unclaimed
            .checked_add(pending)
            .ok_or(ContractError::MathOverflow)?;
        if owed <= 0 {
            return Ok(0);
        }
        if policy.auto_claim
            && !pause::is_paused(env, PauseScope::Claim)
            && Self::reward_balance(env)? >= owed
        {
            position.unclaimed = 0;
            return Ok(owed);
        }
        position.unclaimed = owed;
        Ok(0)
    }

    fn pay_reward(
        env: &Env,
        pool_id: u32,
        user: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        if amount <= 0 {
            return Ok(());
        }
        let reward_token = config::reward_token(env)?;
        token::Client::new(env, &reward_token).transfer(
            &env.current_contract_address(),
            user,
            &amount,
        );
        events::publish_reward_paid(env, pool_id, user.clone(), amount);
        Ok(())
    }

    /// Shared body of `stake_native` and `stake_token`.
    fn deposit(
        env: &Env,
        user: &Address,
        pool_id: u32,
        amount: i128,
        native: bool,
    ) -> Result<i128, ContractError> {
        Self::require_ready(env)?;
        user.require_auth();
        pause::require_not_paused(env, PauseScope::Stake)?;

        let mut pool = pool::load(env, pool_id)?;
        match (&pool.asset, native) {
            (PoolAsset::Native, true) | (PoolAsset::Token(_), false) => {}
            _ => return Err(ContractError::AssetMismatch),
        }
        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        if amount < pool.min_deposit {
            return Err(ContractError::BelowMinDeposit);
        }

        let ledger = env.current_contract_address();
        let asset = token::Client::new(env, &Self::asset_address(env, &pool.asset)?);
        if !native && asset.allowance(user, &ledger) < amount {
            return Err(ContractError::InsufficientAllowance);
        }

        // 1. Flush the pool, then settle what the existing stake earned.
        Self::accrue_pool(env, &mut pool)?;
        let mut position = position::load(env, pool_id, user);
        let pending = position::settle(env, &pool, &position)?;
        let payout = Self::roll_or_pay(env, &config::policy(env), &mut position, pending)?;

        // 2. Grow the stake and checkpoint against the current accumulator.
        position.staked = position
            .staked
            .checked_add(amount)
            .ok_or(ContractError::MathOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::MathOverflow)?;
        position::checkpoint(env, &pool, &mut position)?;

        pool::store(env, &pool);
        position::store(env, pool_id, user, &position);

        // 3. Asset movements last.
        if native {
            asset.transfer(user, &ledger, &amount);
        } else {
            asset.transfer_from(&ledger, user, &ledger, &amount);
        }
        Self::pay_reward(env, pool_id, user, payout)?;

        events::publish_staked(env, pool_id, user.clone(), amount, pool.total_staked);

        Ok(position.staked)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_pause;

#[cfg(test)]
mod test_upgrade;
