use cosmwasm_std::{Addr, StdResult, Storage};
use sg_series::Variant;

use crate::error::ContractError;
use crate::state::{SaleConfig, MINTED, TOTAL_MINTED};

pub fn total_minted(storage: &dyn Storage) -> StdResult<u32> {
    Ok(TOTAL_MINTED.may_load(storage)?.unwrap_or_default())
}

/// Public mints are not tracked per address.
pub fn address_minted(storage: &dyn Storage, minter: &Addr, variant: Variant) -> StdResult<u32> {
    if !variant.is_proof_gated() {
        return Ok(0);
    }
    Ok(MINTED
        .may_load(storage, (minter, variant.as_str()))?
        .unwrap_or_default())
}

/// Claims `quantity` tokens for `minter` under `variant`. Both the per-address
/// cap and the supply ceiling are checked before either counter is written.
/// Returns the new total supply.
pub fn reserve(
    storage: &mut dyn Storage,
    config: &SaleConfig,
    minter: &Addr,
    variant: Variant,
    quantity: u32,
) -> Result<u32, ContractError> {
    let total = total_minted(storage)?
        .checked_add(quantity)
        .filter(|total| *total <= config.max_supply)
        .ok_or(ContractError::CapExceeded {})?;

    if let Some(limit) = config.per_address_limit(variant) {
        let minted = address_minted(storage, minter, variant)?
            .checked_add(quantity)
            .filter(|minted| *minted <= limit)
            .ok_or(ContractError::CapExceeded {})?;
        MINTED.save(storage, (minter, variant.as_str()), &minted)?;
    }
    TOTAL_MINTED.save(storage, &total)?;

    Ok(total)
}
