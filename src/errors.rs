use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// `Config` and `Wallet` only ever surface before the cycle loop starts and
/// abort the process; everything else is caught at the cycle boundary and
/// retried after a fixed backoff.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid private key: {0}")]
    Wallet(String),

    #[error("RPC client error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Instruction build error: {0}")]
    Instruction(#[from] solana_sdk::program_error::ProgramError),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}
