use soroban_sdk::{contracttype, Address, Bytes};

/// Smallest committee the wallet accepts.
pub const MIN_SIGNERS: u32 = 3;
pub const MIN_THRESHOLD: u32 = 2;

// Ledger counts (~5s per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const RECORD_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance storage
    Initialized,
    NativeAsset,
    Signers,
    Signer(Address),
    Threshold,
    TransactionCount,
    // persistent storage
    Transaction(u32),
    Confirmed(u32, Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub proposer: Address,
    pub target: Address,
    pub amount: i128,
    pub payload: Bytes,
    pub confirmations: u32,
    pub executed: bool,
}
