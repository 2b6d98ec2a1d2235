use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

pub mod merkle;

/// Sale modes of a series. Whitelist and airdrop are gated by a membership
/// proof, public is open to anyone and capped per transaction.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Variant {
    Whitelist,
    Airdrop,
    Public,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Whitelist => "whitelist",
            Variant::Airdrop => "airdrop",
            Variant::Public => "public",
        }
    }

    pub fn is_proof_gated(&self) -> bool {
        matches!(self, Variant::Whitelist | Variant::Airdrop)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query interface of an external delegated-approval registry.
/// A registry maps an owner to the proxy account a trading platform
/// operates on their behalf.
#[cw_serde]
pub enum ProxyRegistryQueryMsg {
    Proxy { owner: String },
}

#[cw_serde]
pub struct ProxyResponse {
    pub proxy: Option<Addr>,
}
