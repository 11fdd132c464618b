//! Proposal ledger: append-only transactions with per-signer confirmations.

use soroban_sdk::{log, Address, Bytes, Env};

use crate::actuator;
use crate::errors::WalletError;
use crate::events;
use crate::registry;
use crate::types::{DataKey, Transaction, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD};

pub fn transaction_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0)
}

pub fn load(env: &Env, tx_index: u32) -> Result<Transaction, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(tx_index))
        .ok_or(WalletError::UnknownTransaction)
}

fn store(env: &Env, tx_index: u32, tx: &Transaction) {
    let key = DataKey::Transaction(tx_index);
    let storage = env.storage().persistent();
    storage.set(&key, tx);
    storage.extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn is_confirmed(env: &Env, tx_index: u32, signer: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Confirmed(tx_index, signer.clone()))
}

pub fn submit(
    env: &Env,
    caller: Address,
    target: Address,
    amount: i128,
    payload: Bytes,
) -> Result<u32, WalletError> {
    registry::require_signer(env, &caller)?;

    if amount < 0 {
        return Err(WalletError::InvalidAmount);
    }

    let tx_index = transaction_count(env);
    let tx = Transaction {
        proposer: caller,
        target,
        amount,
        payload,
        confirmations: 0,
        executed: false,
    };
    store(env, tx_index, &tx);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(tx_index + 1));

    events::Submitted {
        tx_index,
        target: tx.target.clone(),
        amount: tx.amount,
        payload: tx.payload.clone(),
    }
    .publish(env);
    log!(env, "transaction submitted", tx_index, tx.amount);
    Ok(tx_index)
}

pub fn confirm(env: &Env, caller: &Address, tx_index: u32) -> Result<(), WalletError> {
    registry::require_signer(env, caller)?;

    let mut tx = load(env, tx_index)?;
    if tx.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    if is_confirmed(env, tx_index, caller) {
        return Err(WalletError::AlreadyConfirmed);
    }

    let key = DataKey::Confirmed(tx_index, caller.clone());
    let storage = env.storage().persistent();
    storage.set(&key, &true);
    storage.extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);

    tx.confirmations += 1;
    store(env, tx_index, &tx);

    events::Confirmed {
        tx_index,
        signer: caller.clone(),
    }
    .publish(env);
    Ok(())
}

pub fn revoke(env: &Env, caller: &Address, tx_index: u32) -> Result<(), WalletError> {
    registry::require_signer(env, caller)?;

    let mut tx = load(env, tx_index)?;
    if tx.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    if !is_confirmed(env, tx_index, caller) {
        return Err(WalletError::NotConfirmed);
    }

    env.storage()
        .persistent()
        .remove(&DataKey::Confirmed(tx_index, caller.clone()));

    tx.confirmations -= 1;
    store(env, tx_index, &tx);

    events::Revoked {
        tx_index,
        signer: caller.clone(),
    }
    .publish(env);
    Ok(())
}

/// Runs an approved transaction exactly once.
///
/// `executed` is written before the actuator runs, so any attempt to execute
/// the same index from inside the actuation sees a terminal transaction. If
/// the actuator fails the flag is put back and the transaction stays pending.
pub fn execute(env: &Env, caller: &Address, tx_index: u32) -> Result<(), WalletError> {
    registry::require_signer(env, caller)?;

    let mut tx = load(env, tx_index)?;
    if tx.confirmations < registry::threshold(env)? {
        return Err(WalletError::InsufficientConfirmations);
    }
    if tx.executed {
        return Err(WalletError::AlreadyExecuted);
    }

    tx.executed = true;
    store(env, tx_index, &tx);

    if let Err(err) = actuator::invoke(env, tx_index, &tx) {
        tx.executed = false;
        store(env, tx_index, &tx);
        return Err(err);
    }

    events::Executed { tx_index }.publish(env);
    log!(env, "transaction executed", tx_index);
    Ok(())
}
