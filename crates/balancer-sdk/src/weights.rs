//! Normalization of weighted pool token weights.

use alloy::primitives::U256;

/// Mirrors `MAX_WEIGHTED_TOKENS` of the weighted pool contracts.
pub const MAX_WEIGHTED_TOKENS: usize = 100;

/// One unit in the 18 decimal fixed point representation used by the pools.
pub const ONE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum Error {
    #[error("weights sum to zero")]
    DivisionByZero,
    #[error("weight arithmetic overflows 256 bits")]
    Overflow,
}

fn sum(weights: &[U256]) -> Option<U256> {
    weights
        .iter()
        .try_fold(U256::ZERO, |total, weight| total.checked_add(*weight))
}

/// Scales `weights` so that they sum to exactly [`ONE`].
///
/// Every weight but the last is scaled down with truncating division and the
/// last one absorbs the rounding error, so the order of `weights` decides
/// which token ends up with the residue.
///
/// The weights must not sum to zero, which also rules out empty input.
pub fn to_normalized_weights(weights: &[U256]) -> Result<Vec<U256>, Error> {
    // A full pool is always split evenly, whatever the input.
    if weights.len() == MAX_WEIGHTED_TOKENS {
        return Ok(vec![
            ONE / U256::from(MAX_WEIGHTED_TOKENS);
            MAX_WEIGHTED_TOKENS
        ]);
    }

    let total = sum(weights).ok_or(Error::Overflow)?;
    if total == ONE {
        return Ok(weights.to_vec());
    }
    if total.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let mut normalized = Vec::with_capacity(weights.len());
    let mut normalized_sum = U256::ZERO;
    for weight in &weights[..weights.len() - 1] {
        let scaled = weight.checked_mul(ONE).ok_or(Error::Overflow)? / total;
        normalized_sum += scaled;
        normalized.push(scaled);
    }
    // Truncated shares of a strict subset of the weights add up to at most
    // `ONE`, so this can't underflow.
    normalized.push(ONE - normalized_sum);

    Ok(normalized)
}

/// Returns `true` if `weights` sum to exactly [`ONE`].
pub fn is_normalized_weights(weights: &[U256]) -> bool {
    sum(weights) == Some(ONE)
}
