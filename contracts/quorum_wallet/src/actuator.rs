//! Carries out an approved transaction: moves native asset to the target
//! and hands the payload to it.

use soroban_sdk::{contractclient, log, token, Address, Bytes, Env};

use crate::errors::WalletError;
use crate::types::{DataKey, Transaction};

/// Interface a target contract implements to receive payloads.
#[contractclient(name = "ReceiverClient")]
pub trait MultisigReceiver {
    fn on_execute(env: Env, wallet: Address, tx_index: u32, amount: i128, payload: Bytes);
}

pub fn native_asset(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeAsset)
        .ok_or(WalletError::NotInitialized)
}

pub fn balance(env: &Env) -> Result<i128, WalletError> {
    let asset = native_asset(env)?;
    Ok(token::Client::new(env, &asset).balance(&env.current_contract_address()))
}

/// Zero amounts skip the transfer and empty payloads skip delivery, so a
/// plain payment to an account works without a receiver contract.
pub fn invoke(env: &Env, tx_index: u32, tx: &Transaction) -> Result<(), WalletError> {
    let wallet = env.current_contract_address();

    if tx.amount > 0 {
        let asset = native_asset(env)?;
        let token_client = token::Client::new(env, &asset);
        if !matches!(
            token_client.try_transfer(&wallet, &tx.target, &tx.amount),
            Ok(Ok(()))
        ) {
            log!(env, "native transfer failed", tx_index);
            return Err(WalletError::ExecutionFailed);
        }
    }

    if !tx.payload.is_empty() {
        let receiver = ReceiverClient::new(env, &tx.target);
        if !matches!(
            receiver.try_on_execute(&wallet, &tx_index, &tx.amount, &tx.payload),
            Ok(Ok(()))
        ) {
            log!(env, "payload delivery failed", tx_index);
            return Err(WalletError::ExecutionFailed);
        }
    }

    Ok(())
}
