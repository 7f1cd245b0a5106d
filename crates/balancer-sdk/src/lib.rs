//! Client-side encoding and authorization helpers for the Balancer V2 Vault
//! and its pools.
//!
//! Nothing in this crate submits transactions. It builds the `userData`
//! payloads, sorted asset lists and signed authorizations that a caller later
//! sends through its own transport.

pub mod assets;
pub mod config;
pub mod errors;
pub mod gauge;
pub mod pool_id;
pub mod signatures;
pub mod user_data;
pub mod vault;
pub mod weights;

pub use {
    assets::AssetHelpers,
    config::Config,
    gauge::GaugeType,
    pool_id::{PoolSpecialization, SplitPoolId, split_pool_id},
    signatures::{Account, RelayerAction, SignedAuthorization},
    weights::{is_normalized_weights, to_normalized_weights},
};
