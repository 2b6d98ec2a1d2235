#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, Env, StdResult};
use sg721_series::helpers::SeriesCollectionContract;
use sg_series::Variant;

use crate::{
    ledger::{address_minted, total_minted},
    msg::{CollectionResponse, QueryMsg, RootsResponse},
    state::{ADMIN, FEE_SPLIT, MERKLE_ROOTS, SALE_CONFIG, SERIES_COLLECTION},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Admin {} => to_binary(&ADMIN.query_admin(deps)?),
        QueryMsg::Collection {} => to_binary(&query_collection(deps)?),
        QueryMsg::Config {} => to_binary(&SALE_CONFIG.load(deps.storage)?),
        QueryMsg::Roots {} => to_binary(&query_roots(deps)?),
        QueryMsg::FeeSplit {} => to_binary(&FEE_SPLIT.load(deps.storage)?),
        QueryMsg::TotalMinted {} => to_binary(&total_minted(deps.storage)?),
        QueryMsg::AddressMinted { address, variant } => {
            to_binary(&query_address_minted(deps, address, variant)?)
        }
        QueryMsg::Paused {} => to_binary(&query_paused(deps)?),
    }
}

fn query_collection(deps: Deps) -> StdResult<CollectionResponse> {
    let collection = SERIES_COLLECTION.load(deps.storage)?;
    Ok(CollectionResponse {
        collection: collection.to_string(),
    })
}

fn query_roots(deps: Deps) -> StdResult<RootsResponse> {
    Ok(RootsResponse {
        whitelist: MERKLE_ROOTS.may_load(deps.storage, Variant::Whitelist.as_str())?,
        airdrop: MERKLE_ROOTS.may_load(deps.storage, Variant::Airdrop.as_str())?,
    })
}

fn query_address_minted(deps: Deps, address: String, variant: Variant) -> StdResult<u32> {
    let address = deps.api.addr_validate(&address)?;
    address_minted(deps.storage, &address, variant)
}

// the flag lives in the collection
fn query_paused(deps: Deps) -> StdResult<bool> {
    SeriesCollectionContract(SERIES_COLLECTION.load(deps.storage)?).paused(&deps.querier)
}
