//! Weighted pool payloads.

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
    /// Managed pools only. The token to add travels in the Vault call itself,
    /// so there is no payload encoder for it.
    AddToken = 4,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
#[repr(u8)]
pub enum ExitKind {
    ExactBptInForOneTokenOut = 0,
    ExactBptInForTokensOut = 1,
    BptInForExactTokensOut = 2,
    /// Managed pools only, see [`super::managed::exit_for_remove_token`].
    RemoveToken = 3,
}

/// Provides the initial balances of the pool.
pub fn join_init(amounts_in: &[U256]) -> Bytes {
    encode_amounts(JoinKind::Init as u8, amounts_in)
}

/// Joins with exact amounts of each token, receiving at least
/// `minimum_bpt_out`.
pub fn join_exact_tokens_in_for_bpt_out(amounts_in: &[U256], minimum_bpt_out: U256) -> Bytes {
    encode_amounts_with_bound(
        JoinKind::ExactTokensInForBptOut as u8,
        amounts_in,
        minimum_bpt_out,
    )
}

/// Joins with a single token, `enter_token_index` into the pool's sorted
/// tokens, for exactly `bpt_amount_out`.
pub fn join_token_in_for_exact_bpt_out(bpt_amount_out: U256, enter_token_index: usize) -> Bytes {
    encode_amount_with_index(
        JoinKind::TokenInForExactBptOut as u8,
        bpt_amount_out,
        enter_token_index,
    )
}

/// Joins proportionally for exactly `bpt_amount_out`.
pub fn join_all_tokens_in_for_exact_bpt_out(bpt_amount_out: U256) -> Bytes {
    encode_value(JoinKind::AllTokensInForExactBptOut as u8, bpt_amount_out)
}

/// Burns `bpt_amount_in` for a single token, `exit_token_index` into the
/// pool's sorted tokens.
pub fn exit_exact_bpt_in_for_one_token_out(bpt_amount_in: U256, exit_token_index: usize) -> Bytes {
    encode_amount_with_index(
        ExitKind::ExactBptInForOneTokenOut as u8,
        bpt_amount_in,
        exit_token_index,
    )
}

/// Burns `bpt_amount_in` for a proportional share of every token.
pub fn exit_exact_bpt_in_for_tokens_out(bpt_amount_in: U256) -> Bytes {
    encode_value(ExitKind::ExactBptInForTokensOut as u8, bpt_amount_in)
}

/// Withdraws exact token amounts, burning at most `max_bpt_amount_in`.
pub fn exit_bpt_in_for_exact_tokens_out(amounts_out: &[U256], max_bpt_amount_in: U256) -> Bytes {
    encode_amounts_with_bound(
        ExitKind::BptInForExactTokensOut as u8,
        amounts_out,
        max_bpt_amount_in,
    )
}
