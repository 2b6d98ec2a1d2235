use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{HexBinary, Uint128};
use sg_series::Variant;

use crate::state::{FeeSplit, SaleConfig};

#[cw_serde]
pub struct FeeSplitMsg {
    pub first: String,
    pub second: String,
    pub first_weight: u64,
    pub second_weight: u64,
    pub denominator: u64,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiator
    pub admin: Option<String>,
    pub collection_code_id: u64,
    pub collection_name: String,
    pub collection_symbol: String,
    pub base_uri: Option<String>,
    pub sale: SaleConfig,
    pub whitelist_root: Option<HexBinary>,
    pub airdrop_root: Option<HexBinary>,
    pub fee_split: FeeSplitMsg,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Paid mint for addresses proven to be on the whitelist
    WhitelistMint {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    /// Free mint for addresses proven to be on the airdrop list
    AirdropMint {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    /// Paid mint open to anyone, capped per transaction
    PublicMint { quantity: u32 },
    /// Split the contract balance between the two beneficiaries
    Withdraw {},
    /// Change the admin. Set to None to freeze all settings.
    UpdateAdmin { admin: Option<String> },
    SetUnitPrice { price: Uint128 },
    SetMaxSupply { max_supply: u32 },
    SetWhitelistLimit { limit: u32 },
    SetAirdropLimit { limit: u32 },
    SetPerTxLimit { limit: u32 },
    SetWhitelistRoot { root: HexBinary },
    SetAirdropRoot { root: HexBinary },
    SetPhase { variant: Variant, open: bool },
    SetBeneficiaries { first: String, second: String },
    SetFeeWeights { first_weight: u64, second_weight: u64 },
    SetFeeDenominator { denominator: u64 },
    SetBaseUri { base_uri: Option<String> },
    SetApprovalRegistry { registry: Option<String> },
    Pause {},
    Unpause {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(cw_controllers::AdminResponse)]
    Admin {},
    #[returns(CollectionResponse)]
    Collection {},
    #[returns(SaleConfig)]
    Config {},
    #[returns(RootsResponse)]
    Roots {},
    #[returns(FeeSplit)]
    FeeSplit {},
    #[returns(u32)]
    TotalMinted {},
    /// Always 0 for the public variant
    #[returns(u32)]
    AddressMinted { address: String, variant: Variant },
    #[returns(bool)]
    Paused {},
}

#[cw_serde]
pub struct CollectionResponse {
    pub collection: String,
}

#[cw_serde]
pub struct RootsResponse {
    pub whitelist: Option<HexBinary>,
    pub airdrop: Option<HexBinary>,
}
