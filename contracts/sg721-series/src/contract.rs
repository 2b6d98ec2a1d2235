use cosmwasm_std::{Addr, Binary, Deps, DepsMut, Env, MessageInfo, StdResult, Storage};
use cw721::{Cw721ReceiveMsg, NftInfoResponse};
use cw721_base::state::{Approval, TokenInfo};
use cw721_base::{ExecuteMsg as Cw721ExecuteMsg, Extension};
use cw_utils::{nonpayable, Expiration};
use sg_series::{ProxyRegistryQueryMsg, ProxyResponse};
use sg_std::{CosmosMsg, Response};

use crate::error::ContractError;
use crate::state::{APPROVAL_REGISTRY, BASE_URI, NEXT_TOKEN_ID, PAUSED};
use crate::Sg721SeriesContract;

pub fn assert_not_paused(storage: &dyn Storage) -> Result<(), ContractError> {
    if PAUSED.load(storage)? {
        return Err(ContractError::TransfersPaused {});
    }
    Ok(())
}

fn only_minter(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let minter = Sg721SeriesContract::default().minter.load(deps.storage)?;
    if minter != info.sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn base_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw721ExecuteMsg<Extension, cosmwasm_std::Empty>,
) -> Result<Response, ContractError> {
    Ok(Sg721SeriesContract::default().execute(deps, env, info, msg)?)
}

/// Issues `quantity` tokens to `recipient` with consecutive ids. Either every
/// token is written or the call fails as a whole.
pub fn execute_issue(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    quantity: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_minter(deps.as_ref(), &info)?;
    assert_not_paused(deps.storage)?;
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let owner = deps.api.addr_validate(&recipient)?;

    let first_token_id = NEXT_TOKEN_ID.load(deps.storage)?;
    let last_token_id = first_token_id + u64::from(quantity) - 1;

    for id in first_token_id..=last_token_id {
        let token_id = id.to_string();
        let token = TokenInfo {
            owner: owner.clone(),
            approvals: vec![],
            token_uri: None,
            extension: None,
        };
        let contract = Sg721SeriesContract::default();
        contract
            .tokens
            .update(deps.storage, &token_id, |old| match old {
                Some(_) => Err(ContractError::Base(cw721_base::ContractError::Claimed {})),
                None => Ok(token),
            })?;
        contract.increment_tokens(deps.storage)?;
    }
    NEXT_TOKEN_ID.save(deps.storage, &(last_token_id + 1))?;

    Ok(Response::new()
        .add_attribute("action", "issue")
        .add_attribute("owner", owner)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("first_token_id", first_token_id.to_string())
        .add_attribute("last_token_id", last_token_id.to_string()))
}

pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_minter(deps.as_ref(), &info)?;

    PAUSED.save(deps.storage, &paused)?;

    Ok(Response::new()
        .add_attribute("action", "set_paused")
        .add_attribute("paused", paused.to_string()))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_minter(deps.as_ref(), &info)?;

    BASE_URI.save(deps.storage, &base_uri)?;

    Ok(Response::new()
        .add_attribute("action", "set_base_uri")
        .add_attribute("base_uri", base_uri.unwrap_or_default()))
}

pub fn execute_set_approval_registry(
    deps: DepsMut,
    info: MessageInfo,
    registry: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    only_minter(deps.as_ref(), &info)?;

    let registry = registry
        .map(|r| deps.api.addr_validate(&r))
        .transpose()?;
    APPROVAL_REGISTRY.save(deps.storage, &registry)?;

    Ok(Response::new()
        .add_attribute("action", "set_approval_registry")
        .add_attribute(
            "registry",
            registry.map(|r| r.to_string()).unwrap_or_default(),
        ))
}

pub fn execute_transfer_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: String,
) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;

    if !is_proxy_for_token(deps.as_ref(), &info.sender, &token_id)? {
        return base_execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::TransferNft {
                recipient,
                token_id,
            },
        );
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    move_token(deps.storage, &token_id, &recipient)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("token_id", token_id))
}

pub fn execute_send_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    token_id: String,
    msg: Binary,
) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;

    if !is_proxy_for_token(deps.as_ref(), &info.sender, &token_id)? {
        return base_execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            },
        );
    }

    let recipient = deps.api.addr_validate(&contract)?;
    move_token(deps.storage, &token_id, &recipient)?;

    let receive_msg: CosmosMsg = Cw721ReceiveMsg {
        sender: info.sender.to_string(),
        token_id: token_id.clone(),
        msg,
    }
    .into_cosmos_msg(contract.clone())?;

    Ok(Response::new()
        .add_message(receive_msg)
        .add_attribute("action", "send_nft")
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", contract)
        .add_attribute("token_id", token_id))
}

pub fn execute_approve(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    token_id: String,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    if !is_proxy_for_token(deps.as_ref(), &info.sender, &token_id)? {
        return base_execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            },
        );
    }

    let spender = deps.api.addr_validate(&spender)?;
    update_approvals(
        deps.storage,
        &env,
        &token_id,
        &spender,
        Some(expires.unwrap_or_default()),
    )?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("sender", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("token_id", token_id))
}

pub fn execute_revoke(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    token_id: String,
) -> Result<Response, ContractError> {
    if !is_proxy_for_token(deps.as_ref(), &info.sender, &token_id)? {
        return base_execute(
            deps,
            env,
            info,
            Cw721ExecuteMsg::Revoke { spender, token_id },
        );
    }

    let spender = deps.api.addr_validate(&spender)?;
    update_approvals(deps.storage, &env, &token_id, &spender, None)?;

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("sender", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("token_id", token_id))
}

pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: String,
) -> Result<Response, ContractError> {
    assert_not_paused(deps.storage)?;

    if !is_proxy_for_token(deps.as_ref(), &info.sender, &token_id)? {
        return base_execute(deps, env, info, Cw721ExecuteMsg::Burn { token_id });
    }

    let contract = Sg721SeriesContract::default();
    contract.tokens.remove(deps.storage, &token_id)?;
    contract.decrement_tokens(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("sender", info.sender)
        .add_attribute("token_id", token_id))
}

/// Drops any approval `spender` holds on the token, then adds a fresh one
/// when `expires` is set.
fn update_approvals(
    storage: &mut dyn Storage,
    env: &Env,
    token_id: &str,
    spender: &Addr,
    expires: Option<Expiration>,
) -> Result<(), ContractError> {
    let contract = Sg721SeriesContract::default();
    let mut token = contract.tokens.load(storage, token_id)?;
    token.approvals.retain(|apr| apr.spender != *spender);

    if let Some(expires) = expires {
        if expires.is_expired(&env.block) {
            return Err(ContractError::Base(cw721_base::ContractError::Expired {}));
        }
        token.approvals.push(Approval {
            spender: spender.clone(),
            expires,
        });
    }

    contract.tokens.save(storage, token_id, &token)?;
    Ok(())
}

fn move_token(storage: &mut dyn Storage, token_id: &str, recipient: &Addr) -> StdResult<()> {
    let contract = Sg721SeriesContract::default();
    let mut token = contract.tokens.load(storage, token_id)?;
    token.owner = recipient.clone();
    token.approvals.clear();
    contract.tokens.save(storage, token_id, &token)
}

/// Proxy registered for `owner` in the approval registry, if one is set.
/// A registry that cannot answer grants nothing, plain cw721 approvals
/// keep working.
pub fn registry_proxy(deps: Deps, owner: &Addr) -> StdResult<Option<Addr>> {
    let Some(registry) = APPROVAL_REGISTRY.load(deps.storage)? else {
        return Ok(None);
    };
    let proxy = deps
        .querier
        .query_wasm_smart::<ProxyResponse>(
            registry,
            &ProxyRegistryQueryMsg::Proxy {
                owner: owner.to_string(),
            },
        )
        .ok()
        .and_then(|res| res.proxy);
    Ok(proxy)
}

fn is_proxy_for_token(deps: Deps, sender: &Addr, token_id: &str) -> StdResult<bool> {
    let token = Sg721SeriesContract::default()
        .tokens
        .load(deps.storage, token_id)?;
    if token.owner == *sender {
        return Ok(false);
    }
    Ok(registry_proxy(deps, &token.owner)?.as_ref() == Some(sender))
}

pub fn query_is_approved_for_all(
    deps: Deps,
    env: Env,
    owner: String,
    operator: String,
) -> StdResult<bool> {
    let owner = deps.api.addr_validate(&owner)?;
    let operator = deps.api.addr_validate(&operator)?;

    if registry_proxy(deps, &owner)? == Some(operator.clone()) {
        return Ok(true);
    }

    let approved = Sg721SeriesContract::default()
        .operators
        .may_load(deps.storage, (&owner, &operator))?
        .map_or(false, |expires| !expires.is_expired(&env.block));
    Ok(approved)
}

pub fn query_nft_info(deps: Deps, token_id: String) -> StdResult<NftInfoResponse<Extension>> {
    let token = Sg721SeriesContract::default()
        .tokens
        .load(deps.storage, &token_id)?;
    let token_uri = BASE_URI
        .load(deps.storage)?
        .map(|base| format!("{}{}", base, token_id));

    Ok(NftInfoResponse {
        token_uri,
        extension: token.extension,
    })
}
