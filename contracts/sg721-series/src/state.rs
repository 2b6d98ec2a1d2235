use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Blocks issuance, transfers and burns while set
pub const PAUSED: Item<bool> = Item::new("paused");

/// Token URIs are rendered as `base_uri + token_id`
pub const BASE_URI: Item<Option<String>> = Item::new("base-uri");

/// Delegated-approval registry consulted for operator approvals
pub const APPROVAL_REGISTRY: Item<Option<Addr>> = Item::new("approval-registry");

/// Id handed to the next issued token. Ids start at 1 and are never reused.
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next-token-id");
