//! Notifications for off-chain observers. The wallet never reads these back.

use soroban_sdk::{contractevent, Address, Bytes};

#[contractevent(topics = ["submit"], data_format = "vec")]
pub struct Submitted {
    #[topic]
    pub tx_index: u32,
    pub target: Address,
    pub amount: i128,
    pub payload: Bytes,
}

#[contractevent(topics = ["confirm"], data_format = "single-value")]
pub struct Confirmed {
    #[topic]
    pub tx_index: u32,
    pub signer: Address,
}

#[contractevent(topics = ["revoke"], data_format = "single-value")]
pub struct Revoked {
    #[topic]
    pub tx_index: u32,
    pub signer: Address,
}

/// Published only after the actuator succeeded.
#[contractevent(topics = ["execute"], data_format = "single-value")]
pub struct Executed {
    #[topic]
    pub tx_index: u32,
}

#[contractevent(topics = ["add_sign"], data_format = "single-value")]
pub struct SignerAdded {
    #[topic]
    pub caller: Address,
    pub signer: Address,
}

#[contractevent(topics = ["rm_sign"], data_format = "single-value")]
pub struct SignerRemoved {
    #[topic]
    pub caller: Address,
    pub signer: Address,
}

#[contractevent(topics = ["deposit"], data_format = "vec")]
pub struct Deposited {
    #[topic]
    pub from: Address,
    pub amount: i128,
    pub balance: i128,
}
