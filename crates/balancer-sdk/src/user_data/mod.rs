//! Encoders for the `userData` payload of Vault joins and exits.
//!
//! The receiving pool decodes the payload as a tuple whose first field is the
//! action kind, so every encoder produces `abi.encode(kind, ...args)`. No range
//! checks happen here.

pub mod base;
pub mod managed;
pub mod stable;
pub mod weighted;

use alloy::{
    primitives::{Bytes, U256},
    sol_types::SolValue,
};

/// `(uint256 kind, uint256[] amounts)`
fn encode_amounts(kind: u8, amounts: &[U256]) -> Bytes {
    (U256::from(kind), amounts.to_vec())
        .abi_encode_params()
        .into()
}

/// `(uint256 kind, uint256[] amounts, uint256 bound)`
fn encode_amounts_with_bound(kind: u8, amounts: &[U256], bound: U256) -> Bytes {
    (U256::from(kind), amounts.to_vec(), bound)
        .abi_encode_params()
        .into()
}

/// `(uint256 kind, uint256 amount, uint256 tokenIndex)`
fn encode_amount_with_index(kind: u8, amount: U256, token_index: usize) -> Bytes {
    (U256::from(kind), amount, U256::from(token_index))
        .abi_encode_params()
        .into()
}

/// `(uint256 kind, uint256 value)`
fn encode_value(kind: u8, value: U256) -> Bytes {
    (U256::from(kind), value).abi_encode_params().into()
}

/// Concatenates 32-byte big-endian words, for spelling out expected payloads.
#[cfg(test)]
fn words(values: &[u64]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|value| U256::from(*value).to_be_bytes::<32>())
        .collect()
}
