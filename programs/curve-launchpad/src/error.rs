use num_derive::FromPrimitive;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, FromPrimitive, PartialEq, Eq)]
pub enum LaunchpadError {
    #[error("Global config already initialized")]
    AlreadyInitialized = 0,

    #[error("Global config not initialized")]
    NotInitialized = 1,

    #[error("Unauthorized")]
    Unauthorized = 2,

    #[error("Bonding curve already exists for mint")]
    CurveExists = 3,

    #[error("Invalid mint")]
    InvalidMint = 4,

    #[error("Bonding curve complete")]
    CurveComplete = 5,

    #[error("Trade amount is zero")]
    ZeroAmount = 6,

    #[error("Insufficient curve liquidity")]
    InsufficientLiquidity = 7,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow = 8,

    #[error("Insufficient user funds")]
    InsufficientFunds = 9,

    #[error("Invalid global settings")]
    InvalidSettings = 10,
}

impl LaunchpadError {
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

pub type LaunchpadResult<T> = Result<T, LaunchpadError>;
