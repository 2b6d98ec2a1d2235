pub use crate::error::ContractError;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::Empty;
use cw721_base::Extension;
use semver::Version;
use sg_std::StargazeMsgWrapper;

pub mod contract;
mod error;
pub mod helpers;
pub mod msg;
pub mod state;


// version info for migration info
const CONTRACT_NAME: &str = "crates.io:sg721-series";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub type Sg721SeriesContract<'a> =
    cw721_base::Cw721Contract<'a, Extension, StargazeMsgWrapper, Empty, Empty>;
pub type ExecuteMsg = crate::msg::ExecuteMsg;
pub type QueryMsg = crate::msg::QueryMsg;

pub mod entry {
    use crate::{
        msg::InstantiateMsg,
        state::{APPROVAL_REGISTRY, BASE_URI, NEXT_TOKEN_ID, PAUSED},
    };

    use super::*;

    use contract::{
        base_execute, execute_approve, execute_burn, execute_issue, execute_revoke,
        execute_send_nft, execute_set_approval_registry, execute_set_base_uri, execute_set_paused,
        execute_transfer_nft, query_is_approved_for_all, query_nft_info,
    };
    use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, StdError, StdResult};
    use cw2::set_contract_version;
    use cw721_base::{ExecuteMsg as Cw721ExecuteMsg, InstantiateMsg as Cw721InstantiateMsg};
    use sg_std::Response;

    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn instantiate(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, ContractError> {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

        PAUSED.save(deps.storage, &false)?;
        BASE_URI.save(deps.storage, &msg.base_uri)?;
        APPROVAL_REGISTRY.save(deps.storage, &None)?;
        NEXT_TOKEN_ID.save(deps.storage, &1)?;

        let res = Sg721SeriesContract::default().instantiate(
            deps,
            env.clone(),
            info,
            Cw721InstantiateMsg {
                name: msg.name,
                symbol: msg.symbol,
                minter: msg.minter,
            },
        )?;

        Ok(res
            .add_attribute("action", "instantiate")
            .add_attribute("sg721_series_addr", env.contract.address.to_string()))
    }

    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        match msg {
            ExecuteMsg::Issue {
                recipient,
                quantity,
            } => execute_issue(deps, info, recipient, quantity),
            ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
            ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
            ExecuteMsg::SetApprovalRegistry { registry } => {
                execute_set_approval_registry(deps, info, registry)
            }
            ExecuteMsg::TransferNft {
                recipient,
                token_id,
            } => execute_transfer_nft(deps, env, info, recipient, token_id),
            ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            } => execute_send_nft(deps, env, info, contract, token_id, msg),
            ExecuteMsg::Burn { token_id } => execute_burn(deps, env, info, token_id),
            ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            } => execute_approve(deps, env, info, spender, token_id, expires),
            ExecuteMsg::Revoke { spender, token_id } => {
                execute_revoke(deps, env, info, spender, token_id)
            }
            ExecuteMsg::ApproveAll { operator, expires } => base_execute(
                deps,
                env,
                info,
                Cw721ExecuteMsg::ApproveAll { operator, expires },
            ),
            ExecuteMsg::RevokeAll { operator } => {
                base_execute(deps, env, info, Cw721ExecuteMsg::RevokeAll { operator })
            }
        }
    }

    #[cfg_attr(not(feature = "library"), entry_point)]
    pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
        use cw721_base::QueryMsg as Cw721QueryMsg;

        let base = Sg721SeriesContract::default();
        match msg {
            QueryMsg::Paused {} => to_binary(&PAUSED.load(deps.storage)?),
            QueryMsg::BaseUri {} => to_binary(&BASE_URI.load(deps.storage)?),
            QueryMsg::ApprovalRegistry {} => to_binary(&APPROVAL_REGISTRY.load(deps.storage)?),
            QueryMsg::IsApprovedForAll { owner, operator } => {
                to_binary(&query_is_approved_for_all(deps, env, owner, operator)?)
            }
            QueryMsg::NftInfo { token_id } => to_binary(&query_nft_info(deps, token_id)?),
            QueryMsg::OwnerOf {
                token_id,
                include_expired,
            } => base.query(
                deps,
                env,
                Cw721QueryMsg::OwnerOf {
                    token_id,
                    include_expired,
                },
            ),
            QueryMsg::NumTokens {} => base.query(deps, env, Cw721QueryMsg::NumTokens {}),
            QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            } => base.query(
                deps,
                env,
                Cw721QueryMsg::Tokens {
                    owner,
                    start_after,
                    limit,
                },
            ),
            QueryMsg::AllTokens { start_after, limit } => base.query(
                deps,
                env,
                Cw721QueryMsg::AllTokens { start_after, limit },
            ),
            QueryMsg::ContractInfo {} => base.query(deps, env, Cw721QueryMsg::ContractInfo {}),
            QueryMsg::Minter {} => base.query(deps, env, Cw721QueryMsg::Minter {}),
        }
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
            return Err(
                StdError::generic_err("Cannot upgrade to a previous contract version").into(),
            );
        }
        // if same version return
        if version == new_version {
            return Ok(Response::new());
        }

        // set new contract version
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
        Ok(Response::new())
    }
}
