use crate::msg::{ExecuteMsg, QueryMsg};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, QuerierWrapper, QueryRequest, StdResult, WasmMsg, WasmQuery};
use sg_std::CosmosMsg;

/// SeriesCollectionContract is a wrapper around Addr that provides a lot of helpers
#[cw_serde]
pub struct SeriesCollectionContract(pub Addr);

impl SeriesCollectionContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T) -> StdResult<CosmosMsg> {
        let msg = to_binary(&msg.into())?;
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg,
            funds: vec![],
        }
        .into())
    }

    pub fn issue(&self, recipient: &Addr, quantity: u32) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Issue {
            recipient: recipient.to_string(),
            quantity,
        })
    }

    pub fn set_paused(&self, paused: bool) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::SetPaused { paused })
    }

    pub fn set_base_uri(&self, base_uri: Option<String>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::SetBaseUri { base_uri })
    }

    pub fn set_approval_registry(&self, registry: Option<&Addr>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::SetApprovalRegistry {
            registry: registry.map(|r| r.to_string()),
        })
    }

    pub fn paused(&self, querier: &QuerierWrapper) -> StdResult<bool> {
        querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: self.addr().into(),
            msg: to_binary(&QueryMsg::Paused {})?,
        }))
    }
}
