use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Signer count or threshold out of bounds at construction.
    InvalidConfiguration = 3,
    /// Caller is not a current signer.
    Unauthorized = 4,
    InvalidSigner = 5,
    DuplicateSigner = 6,
    UnknownSigner = 7,
    /// Removal would leave fewer than `MIN_SIGNERS`.
    BelowMinimum = 8,
    UnknownTransaction = 9,
    AlreadyConfirmed = 10,
    NotConfirmed = 11,
    AlreadyExecuted = 12,
    InsufficientConfirmations = 13,
    /// The transfer or the payload delivery failed.
    ExecutionFailed = 14,
    InvalidAmount = 15,
}
