use soroban_sdk::{contracttype, Env, Vec};

use crate::ContractError;

/// Upper bound on queued unstake requests per (pool, user).
pub const MAX_PENDING_WITHDRAWALS: u32 = 64;

/// Principal moved out of `staked` and waiting for its unlock block.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakeRequest {
    pub amount: i128,
    pub unlock_block: u32,
}

/// Appends a request to the back of the queue.
pub fn enqueue(
    requests: &mut Vec<UnstakeRequest>,
    amount: i128,
    unlock_block: u32,
) -> Result<(), ContractError> {
    if requests.len() >= MAX_PENDING_WITHDRAWALS {
        return Err(ContractError::TooManyPendingWithdrawals);
    }
    requests.push_back(UnstakeRequest {
        amount,
        unlock_block,
    });
    Ok(())
}

/// Removes every request unlocked at `block`.
///
/// Returns the released total and the still-locked requests, in their
/// original order.
pub fn release_unlocked(
    env: &Env,
    requests: &Vec<UnstakeRequest>,
    block: u32,
) -> Result<(i128, Vec<UnstakeRequest>), ContractError> {
    let mut released: i128 = 0;
    let mut remaining = Vec::new(env);
    for request in requests.iter() {
        if request.unlock_block <= block {
            released = released
                .checked_add(request.amount)
                .ok_or(ContractError::MathOverflow)?;
        } else {
            remaining.push_back(request);
        }
    }
    Ok((released, remaining))
}

/// `(requested, unlocked)`: everything queued, and the part withdrawable at `block`.
pub fn totals(requests: &Vec<UnstakeRequest>, block: u32) -> Result<(i128, i128), ContractError> {
    let mut requested: i128 = 0;
    let mut unlocked: i128 = 0;
    for request in requests.iter() {
        requested = requested
            .checked_add(request.amount)
            .ok_or(ContractError::MathOverflow)?;
        if request.unlock_block <= block {
            unlocked = unlocked
                .checked_add(request.amount)
                .ok_or(ContractError::MathOverflow)?;
        }
    }
    Ok((requested, unlocked))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(env: &Env, entries: &[(i128, u32)]) -> Vec<UnstakeRequest> {
        let mut requests = Vec::new(env);
        for (amount, unlock_block) in entries {
            enqueue(&mut requests, *amount, *unlock_block).unwrap();
        }
        requests
    }

    #[test]
    fn release_takes_only_unlocked_entries() {
        let env = Env::default();
        let requests = queue(&env, &[(100, 10), (200, 20), (300, 15)]);

        let (released, remaining) = release_unlocked(&env, &requests, 15).unwrap();
        assert_eq!(released, 400);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.get(0).unwrap().amount, 200);
    }

    #[test]
    fn release_before_unlock_is_empty() {
        let env = Env::default();
        let requests = queue(&env, &[(100, 10)]);

        let (released, remaining) = release_unlocked(&env, &requests, 9).unwrap();
        assert_eq!(released, 0);
        assert_eq!(remaining, requests);
    }

    #[test]
    fn totals_split_requested_and_unlocked() {
        let env = Env::default();
        let requests = queue(&env, &[(100, 10), (50, 30)]);
        assert_eq!(totals(&requests, 10).unwrap(), (150, 100));
        assert_eq!(totals(&requests, 30).unwrap(), (150, 150));
    }

    #[test]
    fn queue_is_bounded() {
        let env = Env::default();
        let mut requests = Vec::new(&env);
        for i in 0..MAX_PENDING_WITHDRAWALS {
            enqueue(&mut requests, 1, i).unwrap();
        }
        assert_eq!(
            enqueue(&mut requests, 1, 0),
            Err(ContractError::TooManyPendingWithdrawals)
        );
    }
}
