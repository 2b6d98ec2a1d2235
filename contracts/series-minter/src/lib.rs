pub mod admin;
pub mod contract;
mod error;
pub mod fees;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
