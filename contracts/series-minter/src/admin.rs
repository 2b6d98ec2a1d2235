use cosmwasm_std::{DepsMut, Event, HexBinary, MessageInfo, StdResult, Storage, Uint128};
use cw_utils::nonpayable;
use sg721_series::helpers::SeriesCollectionContract;
use sg_series::merkle::HASH_LENGTH;
use sg_series::Variant;
use sg_std::Response;

use crate::error::ContractError;
use crate::state::{FeeSplit, SaleConfig, ADMIN, FEE_SPLIT, MERKLE_ROOTS, SALE_CONFIG, SERIES_COLLECTION};

fn assert_admin(deps: &DepsMut, info: &MessageInfo) -> Result<(), ContractError> {
    nonpayable(info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;
    Ok(())
}

fn update_sale_config(
    deps: DepsMut,
    info: MessageInfo,
    update: impl FnOnce(&mut SaleConfig),
) -> Result<SaleConfig, ContractError> {
    assert_admin(&deps, &info)?;
    let config = SALE_CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        update(&mut config);
        Ok(config)
    })?;
    Ok(config)
}

fn update_fee_split(
    deps: DepsMut,
    info: MessageInfo,
    update: impl FnOnce(&mut FeeSplit),
) -> Result<FeeSplit, ContractError> {
    assert_admin(&deps, &info)?;
    let fee_split = FEE_SPLIT.update(deps.storage, |mut fee_split| -> StdResult<_> {
        update(&mut fee_split);
        Ok(fee_split)
    })?;
    Ok(fee_split)
}

pub fn execute_set_unit_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    update_sale_config(deps, info, |config| config.unit_price = price)?;

    let event = Event::new("update_unit_price").add_attribute("unit_price", price);
    Ok(Response::new().add_event(event))
}

/// Lowering the ceiling below the current supply is allowed, it only stops
/// further mints.
pub fn execute_set_max_supply(
    deps: DepsMut,
    info: MessageInfo,
    max_supply: u32,
) -> Result<Response, ContractError> {
    update_sale_config(deps, info, |config| config.max_supply = max_supply)?;

    let event = Event::new("update_max_supply").add_attribute("max_supply", max_supply.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_whitelist_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    update_sale_config(deps, info, |config| {
        config.whitelist_per_address_limit = limit
    })?;

    let event = Event::new("update_whitelist_limit").add_attribute("limit", limit.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_airdrop_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    update_sale_config(deps, info, |config| config.airdrop_per_address_limit = limit)?;

    let event = Event::new("update_airdrop_limit").add_attribute("limit", limit.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_per_tx_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    update_sale_config(deps, info, |config| config.public_per_tx_limit = limit)?;

    let event = Event::new("update_per_tx_limit").add_attribute("limit", limit.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_phase(
    deps: DepsMut,
    info: MessageInfo,
    variant: Variant,
    open: bool,
) -> Result<Response, ContractError> {
    update_sale_config(deps, info, |config| config.set_open(variant, open))?;

    let event = Event::new("update_phase")
        .add_attribute("variant", variant.as_str())
        .add_attribute("open", open.to_string());
    Ok(Response::new().add_event(event))
}

pub fn save_merkle_root(
    storage: &mut dyn Storage,
    variant: Variant,
    root: &HexBinary,
) -> Result<(), ContractError> {
    if root.len() != HASH_LENGTH {
        return Err(ContractError::InvalidMerkleRoot(root.len()));
    }
    MERKLE_ROOTS.save(storage, variant.as_str(), root)?;
    Ok(())
}

/// Replacing a root takes effect immediately. Proofs against the old root
/// stop verifying, counters are kept.
pub fn execute_set_merkle_root(
    deps: DepsMut,
    info: MessageInfo,
    variant: Variant,
    root: HexBinary,
) -> Result<Response, ContractError> {
    assert_admin(&deps, &info)?;
    save_merkle_root(deps.storage, variant, &root)?;

    let event = Event::new("update_merkle_root")
        .add_attribute("variant", variant.as_str())
        .add_attribute("root", root.to_hex());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_beneficiaries(
    deps: DepsMut,
    info: MessageInfo,
    first: String,
    second: String,
) -> Result<Response, ContractError> {
    let first = deps.api.addr_validate(&first)?;
    let second = deps.api.addr_validate(&second)?;
    let fee_split = update_fee_split(deps, info, |fee_split| {
        fee_split.first = first;
        fee_split.second = second;
    })?;

    let event = Event::new("update_beneficiaries")
        .add_attribute("first", fee_split.first)
        .add_attribute("second", fee_split.second);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_fee_weights(
    deps: DepsMut,
    info: MessageInfo,
    first_weight: u64,
    second_weight: u64,
) -> Result<Response, ContractError> {
    let fee_split = update_fee_split(deps, info, |fee_split| {
        fee_split.first_weight = first_weight;
        fee_split.second_weight = second_weight;
    })?;

    let event = Event::new("update_fee_weights")
        .add_attribute("first_weight", first_weight.to_string())
        .add_attribute("second_weight", second_weight.to_string())
        .add_attribute("overallocated", fee_split.is_overallocated().to_string());
    Ok(Response::new().add_event(event))
}

/// A zero denominator is stored as given; withdrawals fail until it is fixed.
pub fn execute_set_fee_denominator(
    deps: DepsMut,
    info: MessageInfo,
    denominator: u64,
) -> Result<Response, ContractError> {
    let fee_split = update_fee_split(deps, info, |fee_split| {
        fee_split.denominator = denominator
    })?;

    let event = Event::new("update_fee_denominator")
        .add_attribute("denominator", denominator.to_string())
        .add_attribute("overallocated", fee_split.is_overallocated().to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: Option<String>,
) -> Result<Response, ContractError> {
    assert_admin(&deps, &info)?;
    let collection = SeriesCollectionContract(SERIES_COLLECTION.load(deps.storage)?);

    let event = Event::new("update_base_uri")
        .add_attribute("base_uri", base_uri.clone().unwrap_or_default());
    Ok(Response::new()
        .add_message(collection.set_base_uri(base_uri)?)
        .add_event(event))
}

pub fn execute_set_approval_registry(
    deps: DepsMut,
    info: MessageInfo,
    registry: Option<String>,
) -> Result<Response, ContractError> {
    assert_admin(&deps, &info)?;
    let registry = registry
        .map(|r| deps.api.addr_validate(&r))
        .transpose()?;
    let collection = SeriesCollectionContract(SERIES_COLLECTION.load(deps.storage)?);

    let event = Event::new("update_approval_registry").add_attribute(
        "registry",
        registry.as_ref().map(|r| r.to_string()).unwrap_or_default(),
    );
    Ok(Response::new()
        .add_message(collection.set_approval_registry(registry.as_ref())?)
        .add_event(event))
}

/// Freezes issuance and every token movement in the collection.
pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    assert_admin(&deps, &info)?;
    let collection = SeriesCollectionContract(SERIES_COLLECTION.load(deps.storage)?);

    let event = Event::new(if paused { "pause" } else { "unpause" })
        .add_attribute("collection", collection.addr());
    Ok(Response::new()
        .add_message(collection.set_paused(paused)?)
        .add_event(event))
}
