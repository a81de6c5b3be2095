use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at ~5s per ledger.
const DAY_IN_LEDGERS: u32 = 17_280;

const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const TTL_EXTEND_TO: u32 = 60 * DAY_IN_LEDGERS;

/// Extends the TTL of the instance storage, which carries the ledger's
/// global configuration and counters.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a persistent entry (pool or position).
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
