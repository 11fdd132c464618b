#![no_std]

mod actuator;
mod errors;
mod events;
mod ledger;
mod multisig;
mod registry;
mod types;

pub use actuator::{MultisigReceiver, ReceiverClient};
pub use errors::WalletError;
pub use multisig::{QuorumWallet, QuorumWalletClient};
pub use types::{Transaction, MIN_SIGNERS, MIN_THRESHOLD};
