use soroban_sdk::{contract, contractimpl, log, token, Address, Bytes, Env, Vec};

use crate::actuator;
use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::registry;
use crate::types::{DataKey, Transaction, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

/// M-of-N wallet over the native asset.
///
/// Trust assumption: `add_signer` and `remove_signer` need only one signer,
/// not quorum. Confirmations cast by a signer who is later removed keep
/// counting, and the threshold is never lowered when the committee shrinks.
#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    pub fn initialize(
        env: Env,
        signers: Vec<Address>,
        threshold: u32,
        native_asset: Address,
    ) -> Result<(), WalletError> {
        if registry::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        registry::initialize(&env, &signers, threshold)?;

        let storage = env.storage().instance();
        storage.set(&DataKey::NativeAsset, &native_asset);
        storage.set(&DataKey::TransactionCount, &0u32);
        storage.set(&DataKey::Initialized, &true);
        Self::extend_instance(&env);

        log!(&env, "wallet initialized", signers.len(), threshold);
        Ok(())
    }

    pub fn add_signer(env: Env, caller: Address, signer: Address) -> Result<(), WalletError> {
        registry::require_initialized(&env)?;
        Self::extend_instance(&env);
        registry::add_signer(&env, &caller, &signer)
    }

    pub fn remove_signer(env: Env, caller: Address, signer: Address) -> Result<(), WalletError> {
        registry::require_initialized(&env)?;
        Self::extend_instance(&env);
        registry::remove_signer(&env, &caller, &signer)
    }

    /// Returns the zero-based index of the new transaction.
    pub fn submit(
        env: Env,
        caller: Address,
        target: Address,
        amount: i128,
        payload: Bytes,
    ) -> Result<u32, WalletError> {
        registry::require_initialized(&env)?;
        Self::extend_instance(&env);
        ledger::submit(&env, caller, target, amount, payload)
    }

    pub fn confirm(env: Env, caller: Address, tx_index: u32) -> Result<(), WalletError> {
        registry::require_initialized(&env)?;
        Self::extend_instance(&env);
        ledger::confirm(&env, &caller, tx_index)
    }

    pub fn revoke(env: Env, caller: Address, tx_index: u32) -> Result<(), WalletError> {
        registry::require_initialized(&env)?;
        Self::extend_instance(&env);
        ledger::revoke(&env, &caller, tx_index)
    }

    pub fn execute(env: Env, caller: Address, tx_index: u32) -> Result<(), WalletError> {
        registry::require_initialized(&env)?;
        Self::extend_instance(&env);
        ledger::execute(&env, &caller, tx_index)
    }

    /// Funds the wallet. Anyone may deposit.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, WalletError> {
        registry::require_initialized(&env)?;
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }
        from.require_auth();

        let wallet = env.current_contract_address();
        let token_client = token::Client::new(&env, &actuator::native_asset(&env)?);
        token_client.transfer(&from, &wallet, &amount);
        let balance = token_client.balance(&wallet);

        events::Deposited {
            from,
            amount,
            balance,
        }
        .publish(&env);
        Ok(balance)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, WalletError> {
        registry::require_initialized(&env)?;
        registry::signers(&env)
    }

    pub fn is_signer(env: Env, signer: Address) -> Result<bool, WalletError> {
        registry::require_initialized(&env)?;
        Ok(registry::is_signer(&env, &signer))
    }

    pub fn signer_count(env: Env) -> Result<u32, WalletError> {
        registry::require_initialized(&env)?;
        Ok(registry::signers(&env)?.len())
    }

    pub fn threshold(env: Env) -> Result<u32, WalletError> {
        registry::require_initialized(&env)?;
        registry::threshold(&env)
    }

    pub fn transaction_count(env: Env) -> Result<u32, WalletError> {
        registry::require_initialized(&env)?;
        Ok(ledger::transaction_count(&env))
    }

    pub fn get_transaction(env: Env, tx_index: u32) -> Result<Transaction, WalletError> {
        registry::require_initialized(&env)?;
        ledger::load(&env, tx_index)
    }

    pub fn is_confirmed(env: Env, tx_index: u32, signer: Address) -> Result<bool, WalletError> {
        registry::require_initialized(&env)?;
        ledger::load(&env, tx_index)?;
        Ok(ledger::is_confirmed(&env, tx_index, &signer))
    }

    pub fn native_asset(env: Env) -> Result<Address, WalletError> {
        registry::require_initialized(&env)?;
        actuator::native_asset(&env)
    }

    pub fn balance(env: Env) -> Result<i128, WalletError> {
        registry::require_initialized(&env)?;
        actuator::balance(&env)
    }

    fn extend_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
