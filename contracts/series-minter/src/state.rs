use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use sg_series::Variant;

/// Sale parameters, read once at the start of every mint
#[cw_serde]
pub struct SaleConfig {
    /// Price of one token in the native denom
    pub unit_price: Uint128,
    /// Ceiling on the number of tokens ever minted
    pub max_supply: u32,
    pub whitelist_per_address_limit: u32,
    pub airdrop_per_address_limit: u32,
    pub public_per_tx_limit: u32,
    pub whitelist_open: bool,
    pub airdrop_open: bool,
    pub public_open: bool,
}

impl SaleConfig {
    /// Phases are independent of each other, any combination may be open.
    pub fn is_open(&self, variant: Variant) -> bool {
        match variant {
            Variant::Whitelist => self.whitelist_open,
            Variant::Airdrop => self.airdrop_open,
            Variant::Public => self.public_open,
        }
    }

    pub fn set_open(&mut self, variant: Variant, open: bool) {
        match variant {
            Variant::Whitelist => self.whitelist_open = open,
            Variant::Airdrop => self.airdrop_open = open,
            Variant::Public => self.public_open = open,
        }
    }

    /// Public mints are capped per transaction instead of per address.
    pub fn per_address_limit(&self, variant: Variant) -> Option<u32> {
        match variant {
            Variant::Whitelist => Some(self.whitelist_per_address_limit),
            Variant::Airdrop => Some(self.airdrop_per_address_limit),
            Variant::Public => None,
        }
    }
}

#[cw_serde]
pub struct FeeSplit {
    pub first: Addr,
    pub second: Addr,
    pub first_weight: u64,
    pub second_weight: u64,
    pub denominator: u64,
}

impl FeeSplit {
    pub fn is_overallocated(&self) -> bool {
        u128::from(self.first_weight) + u128::from(self.second_weight)
            > u128::from(self.denominator)
    }
}

pub const SALE_CONFIG: Item<SaleConfig> = Item::new("sale-config");

pub const FEE_SPLIT: Item<FeeSplit> = Item::new("fee-split");

pub const SERIES_COLLECTION: Item<Addr> = Item::new("series-collection");

pub const ADMIN: Admin = Admin::new("admin");

/// Variant name -> allowlist merkle root
pub const MERKLE_ROOTS: Map<&str, HexBinary> = Map::new("merkle-roots");

pub const TOTAL_MINTED: Item<u32> = Item::new("total-minted");

/// (minter, variant name) -> tokens minted under that variant
pub const MINTED: Map<(&Addr, &str), u32> = Map::new("minted");
