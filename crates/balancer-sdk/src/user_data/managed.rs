//! Managed pool payloads. Managed pools are weighted pools, so the
//! [`weighted`](super::weighted) encoders apply to them too.

pub use super::weighted::*;
use {
    super::encode_value,
    alloy::primitives::{Bytes, U256},
};

/// Removes the token at `token_index` from the pool. Only the pool owner can
/// perform this exit.
pub fn exit_for_remove_token(token_index: usize) -> Bytes {
    encode_value(ExitKind::RemoveToken as u8, U256::from(token_index))
}

#[cfg(test)]
mod tests {
    use {super::*, crate::user_data::words};

    #[test]
    fn remove_token() {
        assert_eq!(exit_for_remove_token(4).to_vec(), words(&[3, 4]));
    }
}
