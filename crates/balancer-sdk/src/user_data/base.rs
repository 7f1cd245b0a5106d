//! Payloads understood by every pool type.

use {
    super::encode_value,
    alloy::primitives::{Bytes, U256},
};

/// Exit kind that every pool reserves for recovery mode exits. Pools compare
/// against this exact value, whatever their own exit kinds are.
pub const RECOVERY_MODE_EXIT_KIND: u8 = 255;

/// Proportional exit burning `bpt_amount_in`, available while the pool is in
/// recovery mode.
pub fn recovery_mode_exit(bpt_amount_in: U256) -> Bytes {
    encode_value(RECOVERY_MODE_EXIT_KIND, bpt_amount_in)
}
