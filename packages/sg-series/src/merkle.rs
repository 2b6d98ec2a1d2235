//! Allowlist membership proofs.
//!
//! Leaves are `keccak256(address)` and inner nodes hash the sorted pair of
//! their children, so a proof is just the ordered list of siblings from the
//! leaf up to the root.

use cosmwasm_std::HexBinary;
use sha3::{Digest, Keccak256};

pub const HASH_LENGTH: usize = 32;

pub type Hash = [u8; HASH_LENGTH];

fn keccak(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; HASH_LENGTH];
    out.copy_from_slice(&hasher.finalize());
    out
}

pub fn leaf_hash(address: &str) -> Hash {
    keccak(&[address.as_bytes()])
}

pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    if a <= b {
        keccak(&[a.as_slice(), b.as_slice()])
    } else {
        keccak(&[b.as_slice(), a.as_slice()])
    }
}

/// Returns true when `proof` links `address` to `root`.
/// Malformed roots or siblings verify as false, same as non-members.
pub fn verify_proof(address: &str, root: &[u8], proof: &[HexBinary]) -> bool {
    let mut computed = leaf_hash(address);
    for sibling in proof {
        let sibling: Hash = match sibling.as_slice().try_into() {
            Ok(hash) => hash,
            Err(_) => return false,
        };
        computed = hash_pair(&computed, &sibling);
    }
    root == computed.as_slice()
}

/// Builds roots and proofs off-chain with the same hashing rules as
/// [`verify_proof`]. An odd node at the end of a layer is carried up as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let leaves: Vec<Hash> = addresses
            .into_iter()
            .map(|a| leaf_hash(a.as_ref()))
            .collect();

        let mut layers = vec![leaves];
        while layers.last().map_or(false, |l| l.len() > 1) {
            let next: Vec<Hash> = layers[layers.len() - 1]
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => hash_pair(&pair[0], right),
                    None => pair[0],
                })
                .collect();
            layers.push(next);
        }

        Self { layers }
    }

    /// Root of the tree, all zeroes for an empty allowlist.
    pub fn root(&self) -> Hash {
        self.layers
            .last()
            .and_then(|top| top.first().copied())
            .unwrap_or([0u8; HASH_LENGTH])
    }

    pub fn root_hex(&self) -> HexBinary {
        HexBinary::from(self.root().to_vec())
    }

    pub fn proof(&self, address: &str) -> Option<Vec<HexBinary>> {
        let leaf = leaf_hash(address);
        let mut index = self.layers.first()?.iter().position(|l| *l == leaf)?;

        let mut proof = vec![];
        for layer in &self.layers[..self.layers.len() - 1] {
            if let Some(sibling) = layer.get(index ^ 1) {
                proof.push(HexBinary::from(sibling.to_vec()));
            }
            index /= 2;
        }
        Some(proof)
    }
}
