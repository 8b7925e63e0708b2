pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid address {0}")]
    InvalidAddress(#[from] InvalidAddressError),

    #[error("Build transaction error {0}")]
    BuildTransaction(#[from] BuildTransactionError),

    #[error("Submit transaction error {0}")]
    SubmitTransaction(#[from] SubmitTransactionError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAddressError {
    #[error("Failed to decode bech32 address `{bad_value}`: {underlying}")]
    Bech32Decode {
        bad_value: String,
        underlying: String,
    },

    #[error("Unsupported address prefix `{prefix}`")]
    UnsupportedPrefix { prefix: String },

    #[error("Address payload is empty")]
    EmptyPayload,

    #[error("Address prefix `{prefix}` does not match header network id {network_id}")]
    NetworkMismatch { prefix: String, network_id: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildTransactionError {
    #[error("Transaction has no outputs")]
    NoOutputs,

    #[error("Output {index} carries no value")]
    ZeroValueOutput { index: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitTransactionError {
    #[error("Failed to serialize transaction: {underlying}")]
    Serialize { underlying: String },

    #[error("Transaction rejected: {underlying}")]
    Rejected { underlying: String },
}
