#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, DepsMut, Empty, Env, HexBinary, MessageInfo, Reply, StdError, Storage,
    SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::{maybe_addr, may_pay, nonpayable, parse_reply_instantiate_data};
use semver::Version;
use sg721_series::helpers::SeriesCollectionContract;
use sg721_series::msg::InstantiateMsg as Sg721SeriesInstantiateMsg;
use sg_series::merkle::verify_proof;
use sg_series::Variant;
use sg_std::{Response, NATIVE_DENOM};

use crate::admin::{
    execute_set_airdrop_limit, execute_set_approval_registry, execute_set_base_uri,
    execute_set_beneficiaries, execute_set_fee_denominator, execute_set_fee_weights,
    execute_set_max_supply, execute_set_merkle_root, execute_set_paused, execute_set_per_tx_limit,
    execute_set_phase, execute_set_unit_price, execute_set_whitelist_limit, save_merkle_root,
};
use crate::error::ContractError;
use crate::fees::execute_withdraw;
use crate::ledger::{reserve, total_minted};
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::state::{
    FeeSplit, SaleConfig, ADMIN, FEE_SPLIT, MERKLE_ROOTS, SALE_CONFIG, SERIES_COLLECTION,
    TOTAL_MINTED,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:series-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let api = deps.api;
    let admin = maybe_addr(api, msg.admin)?.unwrap_or_else(|| info.sender.clone());
    ADMIN.set(deps.branch(), Some(admin.clone()))?;

    SALE_CONFIG.save(deps.storage, &msg.sale)?;
    TOTAL_MINTED.save(deps.storage, &0)?;

    if let Some(root) = msg.whitelist_root {
        save_merkle_root(deps.storage, Variant::Whitelist, &root)?;
    }
    if let Some(root) = msg.airdrop_root {
        save_merkle_root(deps.storage, Variant::Airdrop, &root)?;
    }

    let fee_split = FeeSplit {
        first: api.addr_validate(&msg.fee_split.first)?,
        second: api.addr_validate(&msg.fee_split.second)?,
        first_weight: msg.fee_split.first_weight,
        second_weight: msg.fee_split.second_weight,
        denominator: msg.fee_split.denominator,
    };
    FEE_SPLIT.save(deps.storage, &fee_split)?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Sg721SeriesInstantiateMsg {
            name: msg.collection_name,
            symbol: msg.collection_symbol,
            minter: env.contract.address.to_string(),
            base_uri: msg.base_uri,
        })?,
        funds: vec![],
        admin: Some(admin.to_string()),
        label: "Series Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("max_supply", msg.sale.max_supply.to_string())
        .add_attribute("overallocated", fee_split.is_overallocated().to_string())
        .add_submessage(submsg))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INIT_COLLECTION_REPLY_ID {
        return Err(ContractError::InvalidReplyID {});
    }

    let reply = parse_reply_instantiate_data(msg);
    match reply {
        Ok(res) => {
            let collection = deps.api.addr_validate(&res.contract_address)?;
            SERIES_COLLECTION.save(deps.storage, &collection)?;

            Ok(Response::default()
                .add_attribute("action", "init_collection_reply")
                .add_attribute("collection", collection))
        }
        Err(_) => Err(ContractError::ReplyOnSuccess {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::WhitelistMint { quantity, proof } => {
            execute_whitelist_mint(deps, info, quantity, proof)
        }
        ExecuteMsg::AirdropMint { quantity, proof } => {
            execute_airdrop_mint(deps, info, quantity, proof)
        }
        ExecuteMsg::PublicMint { quantity } => execute_public_mint(deps, info, quantity),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::UpdateAdmin { admin } => {
            Ok(ADMIN.execute_update_admin(deps, info, maybe_addr(api, admin)?)?)
        }
        ExecuteMsg::SetUnitPrice { price } => execute_set_unit_price(deps, info, price),
        ExecuteMsg::SetMaxSupply { max_supply } => execute_set_max_supply(deps, info, max_supply),
        ExecuteMsg::SetWhitelistLimit { limit } => execute_set_whitelist_limit(deps, info, limit),
        ExecuteMsg::SetAirdropLimit { limit } => execute_set_airdrop_limit(deps, info, limit),
        ExecuteMsg::SetPerTxLimit { limit } => execute_set_per_tx_limit(deps, info, limit),
        ExecuteMsg::SetWhitelistRoot { root } => {
            execute_set_merkle_root(deps, info, Variant::Whitelist, root)
        }
        ExecuteMsg::SetAirdropRoot { root } => {
            execute_set_merkle_root(deps, info, Variant::Airdrop, root)
        }
        ExecuteMsg::SetPhase { variant, open } => execute_set_phase(deps, info, variant, open),
        ExecuteMsg::SetBeneficiaries { first, second } => {
            execute_set_beneficiaries(deps, info, first, second)
        }
        ExecuteMsg::SetFeeWeights {
            first_weight,
            second_weight,
        } => execute_set_fee_weights(deps, info, first_weight, second_weight),
        ExecuteMsg::SetFeeDenominator { denominator } => {
            execute_set_fee_denominator(deps, info, denominator)
        }
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::SetApprovalRegistry { registry } => {
            execute_set_approval_registry(deps, info, registry)
        }
        ExecuteMsg::Pause {} => execute_set_paused(deps, info, true),
        ExecuteMsg::Unpause {} => execute_set_paused(deps, info, false),
    }
}

/// Paid mint gated by a whitelist proof. Checks run in order: phase,
/// payment, proof, then the per-address cap and supply ceiling.
pub fn execute_whitelist_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    let config = SALE_CONFIG.load(deps.storage)?;
    ensure_open(&config, Variant::Whitelist)?;
    ensure_quantity(quantity)?;
    check_payment(&info, &config, quantity)?;
    verify_membership(deps.storage, Variant::Whitelist, &info.sender, &proof)?;

    let total = reserve(deps.storage, &config, &info.sender, Variant::Whitelist, quantity)?;

    mint_response(deps.storage, Variant::Whitelist, &info.sender, quantity, total)
}

/// Free mint gated by an airdrop proof. The supply ceiling is checked
/// before the proof.
pub fn execute_airdrop_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    let config = SALE_CONFIG.load(deps.storage)?;
    ensure_open(&config, Variant::Airdrop)?;
    ensure_quantity(quantity)?;
    nonpayable(&info)?;
    ensure_supply(deps.storage, &config, quantity)?;
    verify_membership(deps.storage, Variant::Airdrop, &info.sender, &proof)?;

    let total = reserve(deps.storage, &config, &info.sender, Variant::Airdrop, quantity)?;

    mint_response(deps.storage, Variant::Airdrop, &info.sender, quantity, total)
}

pub fn execute_public_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    let config = SALE_CONFIG.load(deps.storage)?;
    ensure_open(&config, Variant::Public)?;
    ensure_quantity(quantity)?;
    ensure_supply(deps.storage, &config, quantity)?;
    if quantity > config.public_per_tx_limit {
        return Err(ContractError::PerTxExceeded {});
    }
    check_payment(&info, &config, quantity)?;

    let total = reserve(deps.storage, &config, &info.sender, Variant::Public, quantity)?;

    mint_response(deps.storage, Variant::Public, &info.sender, quantity, total)
}

fn ensure_open(config: &SaleConfig, variant: Variant) -> Result<(), ContractError> {
    if !config.is_open(variant) {
        return Err(ContractError::PhaseClosed {});
    }
    Ok(())
}

fn ensure_quantity(quantity: u32) -> Result<(), ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }
    Ok(())
}

fn ensure_supply(
    storage: &dyn Storage,
    config: &SaleConfig,
    quantity: u32,
) -> Result<(), ContractError> {
    total_minted(storage)?
        .checked_add(quantity)
        .filter(|total| *total <= config.max_supply)
        .ok_or(ContractError::SupplyExceeded {})?;
    Ok(())
}

/// Exactly `quantity * unit_price` of the native denom, nothing else.
fn check_payment(
    info: &MessageInfo,
    config: &SaleConfig,
    quantity: u32,
) -> Result<(), ContractError> {
    let expected = config.unit_price.checked_mul(Uint128::from(quantity))?;
    let got = may_pay(info, NATIVE_DENOM).map_err(|_| ContractError::PaymentMismatch {
        expected,
        got: Uint128::zero(),
    })?;
    if got != expected {
        return Err(ContractError::PaymentMismatch { expected, got });
    }
    Ok(())
}

fn verify_membership(
    storage: &dyn Storage,
    variant: Variant,
    sender: &Addr,
    proof: &[HexBinary],
) -> Result<(), ContractError> {
    let root = MERKLE_ROOTS
        .may_load(storage, variant.as_str())?
        .ok_or(ContractError::InvalidProof {})?;
    if !verify_proof(sender.as_str(), &root, proof) {
        return Err(ContractError::InvalidProof {});
    }
    Ok(())
}

fn mint_response(
    storage: &dyn Storage,
    variant: Variant,
    minter: &Addr,
    quantity: u32,
    total: u32,
) -> Result<Response, ContractError> {
    let collection = SeriesCollectionContract(SERIES_COLLECTION.load(storage)?);

    Ok(Response::new()
        .add_message(collection.issue(minter, quantity)?)
        .add_attribute("action", format!("{}_mint", variant))
        .add_attribute("variant", variant.as_str())
        .add_attribute("minter", minter)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("total_minted", total.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(StdError::generic_err("Cannot upgrade to a previous contract version").into());
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    // set new contract version
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new())
}
