//! Storage-schema contract for in-place logic upgrades.
//!
//! The wasm behind the ledger's address can be swapped with
//! `update_current_contract_wasm`, which keeps every storage entry. Each build
//! of the logic declares the schema version it understands; it refuses to run
//! against storage written under any other version until `migrate` has
//! brought the data forward.

use soroban_sdk::{log, symbol_short, BytesN, Env, Symbol};

use crate::{events, ContractError};

/// Storage schema understood by this build.
pub const STORAGE_VERSION: u32 = 1;

const STORAGE_VER: Symbol = symbol_short!("STOR_VER");

/// Version recorded in storage, `0` if none was ever written.
pub fn stored_version(env: &Env) -> u32 {
    env.storage().instance().get(&STORAGE_VER).unwrap_or(0)
}

pub fn write_current_version(env: &Env) {
    env.storage().instance().set(&STORAGE_VER, &STORAGE_VERSION);
}

pub fn require_compatible(env: &Env) -> Result<(), ContractError> {
    if stored_version(env) != STORAGE_VERSION {
        return Err(ContractError::IncompatibleStorage);
    }
    Ok(())
}

/// Swaps the running wasm for `new_wasm_hash`.
///
/// `expected_storage_version` is the schema the new logic was built against;
/// the swap is refused unless it matches what is stored now.
pub fn install(
    env: &Env,
    new_wasm_hash: BytesN<32>,
    expected_storage_version: u32,
) -> Result<(), ContractError> {
    let stored = stored_version(env);
    if expected_storage_version != stored {
        log!(
            env,
            "upgrade refused: stored schema {}, new logic expects {}",
            stored,
            expected_storage_version
        );
        return Err(ContractError::IncompatibleStorage);
    }

    env.deployer()
        .update_current_contract_wasm(new_wasm_hash.clone());
    events::publish_upgraded(env, new_wasm_hash, stored);
    Ok(())
}

/// Brings stored data forward to [`STORAGE_VERSION`]. Returns the version the
/// data was found at.
pub fn migrate(env: &Env) -> Result<u32, ContractError> {
    let from = stored_version(env);
    if from == STORAGE_VERSION {
        return Ok(from);
    }
    // Version 1 is the first schema; anything else has no path forward
    // from this build.
    log!(
        env,
        "no migration path from schema {} to {}",
        from,
        STORAGE_VERSION
    );
    Err(ContractError::IncompatibleStorage)
}
