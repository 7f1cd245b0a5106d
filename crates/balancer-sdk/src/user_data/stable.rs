//! Stable pool payloads.
//!
//! Joins mirror the weighted pool, but the exit kinds are numbered
//! differently.

pub use super::base::recovery_mode_exit;
use {
    super::{encode_amount_with_index, encode_amounts, encode_amounts_with_bound, encode_value},
    alloy::primitives::{Bytes, U256},
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[repr(u8)]
pub enum JoinKind {
    Init = 0,
    ExactTokensInForBptOut = 1,
    TokenInForExactBptOut = 2,
    AllTokensInForExactBptOut = 3,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[repr(u8)]
pub enum ExitKind {
    ExactBptInForOneTokenOut = 0,
    BptInForExactTokensOut = 1,
    ExactBptInForAllTokensOut = 2,
}

pub fn join_init(amounts_in: &[U256]) -> Bytes {
    encode_amounts(JoinKind::Init as u8, amounts_in)
}

pub fn join_exact_tokens_in_for_bpt_out(amounts_in: &[U256], minimum_bpt_out: U256) -> Bytes {
    encode_amounts_with_bound(
        JoinKind::ExactTokensInForBptOut as u8,
        amounts_in,
        minimum_bpt_out,
    )
}

pub fn join_token_in_for_exact_bpt_out(bpt_amount_out: U256, enter_token_index: usize) -> Bytes {
    encode_amount_with_index(
        JoinKind::TokenInForExactBptOut as u8,
        bpt_amount_out,
        enter_token_index,
    )
}

pub fn join_all_tokens_in_for_exact_bpt_out(bpt_amount_out: U256) -> Bytes {
    encode_value(JoinKind::AllTokensInForExactBptOut as u8, bpt_amount_out)
}

pub fn exit_exact_bpt_in_for_one_token_out(bpt_amount_in: U256, exit_token_index: usize) -> Bytes {
    encode_amount_with_index(
        ExitKind::ExactBptInForOneTokenOut as u8,
        bpt_amount_in,
        exit_token_index,
    )
}

pub fn exit_bpt_in_for_exact_tokens_out(amounts_out: &[U256], max_bpt_amount_in: U256) -> Bytes {
    encode_amounts_with_bound(
        ExitKind::BptInForExactTokensOut as u8,
        amounts_out,
        max_bpt_amount_in,
    )
}

pub fn exit_exact_bpt_in_for_all_tokens_out(bpt_amount_in: U256) -> Bytes {
    encode_value(ExitKind::ExactBptInForAllTokensOut as u8, bpt_amount_in)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::user_data::words};

    #[test]
    fn joins() {
        assert_eq!(
            join_init(&[U256::from(1), U256::from(2), U256::from(3)]).to_vec(),
            words(&[0, 0x40, 3, 1, 2, 3])
        );
        assert_eq!(
            join_exact_tokens_in_for_bpt_out(&[U256::from(4)], U256::ZERO).to_vec(),
            words(&[1, 0x60, 0, 1, 4])
        );
        assert_eq!(
            join_token_in_for_exact_bpt_out(U256::from(100), 0).to_vec(),
            words(&[2, 100, 0])
        );
        assert_eq!(
            join_all_tokens_in_for_exact_bpt_out(U256::from(100)).to_vec(),
            words(&[3, 100])
        );
    }

    #[test]
    fn exits_use_stable_numbering() {
        assert_eq!(
            exit_exact_bpt_in_for_one_token_out(U256::from(100), 1).to_vec(),
            words(&[0, 100, 1])
        );
        assert_eq!(
            exit_bpt_in_for_exact_tokens_out(&[U256::from(5), U256::from(6)], U256::from(50))
                .to_vec(),
            words(&[1, 0x60, 50, 2, 5, 6])
        );
        assert_eq!(
            exit_exact_bpt_in_for_all_tokens_out(U256::from(100)).to_vec(),
            words(&[2, 100])
        );
    }

    #[test]
    fn large_amounts_are_not_truncated() {
        let encoded = join_all_tokens_in_for_exact_bpt_out(U256::MAX);
        assert_eq!(&encoded[32..], &[0xff; 32]);
    }
}
