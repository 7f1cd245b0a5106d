//! Decoding of Balancer V2 pool IDs.
//!
//! A pool ID is a `bytes32` minted by the Vault when a pool registers. Its
//! layout is:
//! - bytes `[0, 20)`: the pool contract address
//! - bytes `[20, 22)`: the pool specialization
//! - bytes `[22, 32)`: the registration nonce
//!
//! IDs are only ever decoded here, never constructed.

use {
    alloy::primitives::Address,
    std::{fmt, str::FromStr},
};

/// Length of a pool ID in its `0x`-prefixed textual form.
pub const POOL_ID_LENGTH: usize = 66;

/// End of the address part in the textual form, prefix included.
const ADDRESS_END: usize = 42;

/// The specialization fits in a single hex digit, so only the last character
/// of its two bytes is read.
const SPECIALIZATION_OFFSET: usize = 45;

/// Token accounting strategy declared by a pool at registration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[repr(u8)]
pub enum PoolSpecialization {
    GeneralPool = 0,
    MinimalSwapInfoPool = 1,
    TwoTokenPool = 2,
}

impl TryFrom<u8> for PoolSpecialization {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::GeneralPool),
            1 => Ok(Self::MinimalSwapInfoPool),
            2 => Ok(Self::TwoTokenPool),
            _ => Err(Error::InvalidSpecialization),
        }
    }
}

/// The components of a pool ID.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SplitPoolId {
    pub address: Address,
    pub specialization: PoolSpecialization,
    pub nonce: u128,
}

impl FromStr for SplitPoolId {
    type Err = Error;

    fn from_str(pool_id: &str) -> Result<Self, Self::Err> {
        split_pool_id(pool_id)
    }
}

impl fmt::Display for SplitPoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#x}{:04x}{:020x}",
            self.address, self.specialization as u8, self.nonce
        )
    }
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum Error {
    #[error("invalid poolId length")]
    MalformedIdentifier,
    #[error("invalid pool specialization")]
    InvalidSpecialization,
}

/// Ensures the textual pool ID has the expected length. Requiring ASCII keeps
/// the fixed character offsets below valid byte offsets.
fn check_length(pool_id: &str) -> Result<(), Error> {
    if pool_id.len() != POOL_ID_LENGTH || !pool_id.is_ascii() {
        return Err(Error::MalformedIdentifier);
    }
    Ok(())
}

/// Splits a pool ID into its address, specialization and nonce.
pub fn split_pool_id(pool_id: &str) -> Result<SplitPoolId, Error> {
    Ok(SplitPoolId {
        address: pool_address(pool_id)?,
        specialization: pool_specialization(pool_id)?,
        nonce: pool_nonce(pool_id)?,
    })
}

/// Extracts the pool contract address from a pool ID.
pub fn pool_address(pool_id: &str) -> Result<Address, Error> {
    check_length(pool_id)?;
    pool_id[..ADDRESS_END]
        .parse()
        .map_err(|_| Error::MalformedIdentifier)
}

/// Extracts the pool specialization from a pool ID.
pub fn pool_specialization(pool_id: &str) -> Result<PoolSpecialization, Error> {
    check_length(pool_id)?;
    let code = pool_id[SPECIALIZATION_OFFSET..=SPECIALIZATION_OFFSET]
        .parse::<u8>()
        .map_err(|_| Error::InvalidSpecialization)?;
    PoolSpecialization::try_from(code)
}

/// Extracts the registration nonce from a pool ID.
pub fn pool_nonce(pool_id: &str) -> Result<u128, Error> {
    check_length(pool_id)?;
    let nonce = &pool_id[SPECIALIZATION_OFFSET + 1..];
    // `from_str_radix` would also accept a leading sign.
    if !nonce.bytes().all(|digit| digit.is_ascii_hexdigit()) {
        return Err(Error::MalformedIdentifier);
    }
    u128::from_str_radix(nonce, 16).map_err(|_| Error::MalformedIdentifier)
}
