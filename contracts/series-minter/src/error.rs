use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AdminError),

    #[error("PhaseClosed")]
    PhaseClosed {},

    #[error("InvalidProof")]
    InvalidProof {},

    #[error("CapExceeded")]
    CapExceeded {},

    #[error("SupplyExceeded")]
    SupplyExceeded {},

    #[error("PerTxExceeded")]
    PerTxExceeded {},

    #[error("Incorrect payment, got: {got}, expected {expected}")]
    PaymentMismatch { expected: Uint128, got: Uint128 },

    #[error("InvalidQuantity")]
    InvalidQuantity {},

    #[error("InvalidMerkleRoot: expected 32 bytes, got {0}")]
    InvalidMerkleRoot(usize),

    #[error("NoBalance")]
    NoBalance {},

    #[error("ConfigInvalid: fee split cannot be computed")]
    ConfigInvalid {},

    #[error("Overallocated: shares {owed} exceed balance {balance}")]
    Overallocated { owed: Uint128, balance: Uint128 },

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Reply error")]
    ReplyOnSuccess {},
}
