use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};
use cw721::{
    ContractInfoResponse, Expiration, NftInfoResponse, NumTokensResponse, OwnerOfResponse,
    TokensResponse,
};
use cw721_base::{msg::MinterResponse, Extension};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Only this address may issue tokens and change collection settings
    pub minter: String,
    pub base_uri: Option<String>,
}

// Issuance and settings are minter-only. The rest mirrors cw721 with
// transfers gated by the pause flag.
#[cw_serde]
pub enum ExecuteMsg {
    /// Issue `quantity` tokens with sequential ids to `recipient`
    Issue { recipient: String, quantity: u32 },
    /// Block or allow issuance and transfers
    SetPaused { paused: bool },
    SetBaseUri { base_uri: Option<String> },
    SetApprovalRegistry { registry: Option<String> },
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft { recipient: String, token_id: String },
    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted Approval
    Revoke { spender: String, token_id: String },
    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },
    /// Remove previously granted ApproveAll permission
    RevokeAll { operator: String },
    /// Burn an NFT the sender has access to
    Burn { token_id: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(bool)]
    Paused {},
    #[returns(Option<String>)]
    BaseUri {},
    #[returns(Option<Addr>)]
    ApprovalRegistry {},
    /// True for regular operators and for the owner's registry proxy
    #[returns(bool)]
    IsApprovedForAll { owner: String, operator: String },
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
    #[returns(NftInfoResponse<Extension>)]
    NftInfo { token_id: String },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(ContractInfoResponse)]
    ContractInfo {},
    #[returns(MinterResponse)]
    Minter {},
}
