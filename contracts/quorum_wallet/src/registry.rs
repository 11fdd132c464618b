//! Signer registry: committee membership and the quorum threshold.
//!
//! Membership changes are gated on a single signer, not on quorum. Any one
//! signer can grow or shrink the committee, bounded only by `MIN_SIGNERS`.

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::events;
use crate::types::{DataKey, MIN_SIGNERS, MIN_THRESHOLD};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !is_initialized(env) {
        return Err(WalletError::NotInitialized);
    }
    Ok(())
}

/// Validates and stores the initial committee.
///
/// The wallet's own address stands in for the null identifier and is
/// rejected like a duplicate.
pub fn initialize(env: &Env, signers: &Vec<Address>, threshold: u32) -> Result<(), WalletError> {
    let count = signers.len();
    if count < MIN_SIGNERS {
        return Err(WalletError::InvalidConfiguration);
    }
    if threshold < MIN_THRESHOLD || threshold > count {
        return Err(WalletError::InvalidConfiguration);
    }

    let sentinel = env.current_contract_address();
    for i in 0..count {
        let signer = signers.get_unchecked(i);
        if signer == sentinel {
            return Err(WalletError::DuplicateSigner);
        }
        for j in (i + 1)..count {
            if signer == signers.get_unchecked(j) {
                return Err(WalletError::DuplicateSigner);
            }
        }
    }

    let storage = env.storage().instance();
    for signer in signers.iter() {
        storage.set(&DataKey::Signer(signer), &true);
    }
    storage.set(&DataKey::Signers, signers);
    storage.set(&DataKey::Threshold, &threshold);
    Ok(())
}

pub fn signers(env: &Env) -> Result<Vec<Address>, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .ok_or(WalletError::NotInitialized)
}

pub fn is_signer(env: &Env, who: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Signer(who.clone()))
}

pub fn threshold(env: &Env) -> Result<u32, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .ok_or(WalletError::NotInitialized)
}

/// Gate for every mutating operation. Membership is checked before the host
/// is asked to authenticate, so strangers get `Unauthorized`.
pub fn require_signer(env: &Env, caller: &Address) -> Result<(), WalletError> {
    if !is_signer(env, caller) {
        return Err(WalletError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn add_signer(env: &Env, caller: &Address, new_signer: &Address) -> Result<(), WalletError> {
    require_signer(env, caller)?;

    if *new_signer == env.current_contract_address() {
        return Err(WalletError::InvalidSigner);
    }
    if is_signer(env, new_signer) {
        return Err(WalletError::DuplicateSigner);
    }

    let mut members = signers(env)?;
    members.push_back(new_signer.clone());

    let storage = env.storage().instance();
    storage.set(&DataKey::Signer(new_signer.clone()), &true);
    storage.set(&DataKey::Signers, &members);

    events::SignerAdded {
        caller: caller.clone(),
        signer: new_signer.clone(),
    }
    .publish(env);
    log!(env, "signer added", new_signer.clone(), members.len());
    Ok(())
}

/// Swap-removes `target`: the last signer takes its slot, so order is not
/// preserved. Neither the threshold nor `target`'s existing confirmations are
/// touched.
pub fn remove_signer(env: &Env, caller: &Address, target: &Address) -> Result<(), WalletError> {
    require_signer(env, caller)?;

    if !is_signer(env, target) {
        return Err(WalletError::UnknownSigner);
    }

    let mut members = signers(env)?;
    if members.len() <= MIN_SIGNERS {
        return Err(WalletError::BelowMinimum);
    }

    let mut slot = None;
    for i in 0..members.len() {
        if members.get_unchecked(i) == *target {
            slot = Some(i);
            break;
        }
    }
    let slot = slot.ok_or(WalletError::UnknownSigner)?;

    let last = members.pop_back_unchecked();
    if slot < members.len() {
        members.set(slot, last);
    }

    let storage = env.storage().instance();
    storage.remove(&DataKey::Signer(target.clone()));
    storage.set(&DataKey::Signers, &members);

    events::SignerRemoved {
        caller: caller.clone(),
        signer: target.clone(),
    }
    .publish(env);
    log!(env, "signer removed", target.clone(), members.len());
    Ok(())
}
