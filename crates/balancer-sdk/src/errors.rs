//! Registry of the `BAL#` error codes raised by the Vault and its pools.
//!
//! The contracts revert with a short code instead of a full reason string to
//! save bytecode. This module maps between the two representations.

use std::{collections::HashMap, sync::LazyLock};

/// Marker that prefixes every encoded error code.
pub const ERROR_CODE_MARKER: &str = "BAL#";

#[rustfmt::skip]
static ERROR_CODES: &[(&str, &str)] = &[
    // Math
    ("000", "ADD_OVERFLOW"),
    ("001", "SUB_OVERFLOW"),
    ("002", "SUB_UNDERFLOW"),
    ("003", "MUL_OVERFLOW"),
    ("004", "ZERO_DIVISION"),
    ("005", "DIV_INTERNAL"),
    ("006", "X_OUT_OF_BOUNDS"),
    ("007", "Y_OUT_OF_BOUNDS"),
    ("008", "PRODUCT_OUT_OF_BOUNDS"),
    ("009", "INVALID_EXPONENT"),
    // Input
    ("100", "OUT_OF_BOUNDS"),
    ("101", "UNSORTED_ARRAY"),
    ("102", "UNSORTED_TOKENS"),
    ("103", "INPUT_LENGTH_MISMATCH"),
    ("104", "ZERO_TOKEN"),
    ("105", "INSUFFICIENT_DATA"),
    // Shared pools
    ("200", "MIN_TOKENS"),
    ("201", "MAX_TOKENS"),
    ("202", "MAX_SWAP_FEE_PERCENTAGE"),
    ("203", "MIN_SWAP_FEE_PERCENTAGE"),
    ("204", "MINIMUM_BPT"),
    ("205", "CALLER_NOT_VAULT"),
    ("206", "UNINITIALIZED"),
    ("207", "BPT_IN_MAX_AMOUNT"),
    ("208", "BPT_OUT_MIN_AMOUNT"),
    ("209", "EXPIRED_PERMIT"),
    ("210", "NOT_TWO_TOKENS"),
    ("211", "DISABLED"),
    // Pools
    ("300", "MIN_AMP"),
    ("301", "MAX_AMP"),
    ("302", "MIN_WEIGHT"),
    ("303", "MAX_STABLE_TOKENS"),
    ("304", "MAX_IN_RATIO"),
    ("305", "MAX_OUT_RATIO"),
    ("306", "MIN_BPT_IN_FOR_TOKEN_OUT"),
    ("307", "MAX_OUT_BPT_FOR_TOKEN_IN"),
    ("308", "NORMALIZED_WEIGHT_INVARIANT"),
    ("309", "INVALID_TOKEN"),
    ("310", "UNHANDLED_JOIN_KIND"),
    ("311", "ZERO_INVARIANT"),
    ("312", "ORACLE_INVALID_SECONDS_QUERY"),
    ("313", "ORACLE_NOT_INITIALIZED"),
    ("314", "ORACLE_QUERY_TOO_OLD"),
    ("315", "ORACLE_INVALID_INDEX"),
    ("316", "ORACLE_BAD_SECS"),
    ("317", "AMP_END_TIME_TOO_CLOSE"),
    ("318", "AMP_ONGOING_UPDATE"),
    ("319", "AMP_RATE_TOO_HIGH"),
    ("320", "AMP_NO_ONGOING_UPDATE"),
    ("321", "STABLE_INVARIANT_DIDNT_CONVERGE"),
    ("322", "STABLE_GET_BALANCE_DIDNT_CONVERGE"),
    ("323", "RELAYER_NOT_CONTRACT"),
    ("324", "BASE_POOL_RELAYER_NOT_CALLED"),
    ("325", "REBALANCING_RELAYER_REENTERED"),
    ("326", "GRADUAL_UPDATE_TIME_TRAVEL"),
    ("327", "SWAPS_DISABLED"),
    ("328", "CALLER_IS_NOT_LBP_OWNER"),
    ("329", "PRICE_RATE_OVERFLOW"),
    ("330", "INVALID_JOIN_EXIT_KIND_WHILE_SWAPS_DISABLED"),
    ("331", "WEIGHT_CHANGE_TOO_FAST"),
    ("332", "LOWER_GREATER_THAN_UPPER_TARGET"),
    ("333", "UPPER_TARGET_TOO_HIGH"),
    ("334", "UNHANDLED_BY_LINEAR_POOL"),
    ("335", "OUT_OF_TARGET_RANGE"),
    ("336", "UNHANDLED_EXIT_KIND"),
    ("337", "UNAUTHORIZED_EXIT"),
    ("338", "MAX_MANAGEMENT_SWAP_FEE_PERCENTAGE"),
    ("339", "UNHANDLED_BY_MANAGED_POOL"),
    ("340", "UNHANDLED_BY_PHANTOM_POOL"),
    ("341", "TOKEN_DOES_NOT_HAVE_RATE_PROVIDER"),
    ("342", "INVALID_INITIALIZATION"),
    ("343", "OUT_OF_NEW_TARGET_RANGE"),
    ("344", "FEATURE_DISABLED"),
    ("345", "UNINITIALIZED_POOL_CONTROLLER"),
    ("346", "SET_SWAP_FEE_DURING_FEE_CHANGE"),
    ("347", "SET_SWAP_FEE_PENDING_FEE_CHANGE"),
    ("348", "CHANGE_TOKENS_DURING_WEIGHT_CHANGE"),
    ("349", "CHANGE_TOKENS_PENDING_WEIGHT_CHANGE"),
    ("350", "MAX_WEIGHT"),
    ("351", "UNAUTHORIZED_JOIN"),
    ("352", "MAX_MANAGEMENT_AUM_FEE_PERCENTAGE"),
    ("353", "FRACTIONAL_TARGET"),
    ("354", "ADD_OR_REMOVE_BPT"),
    ("355", "INVALID_CIRCUIT_BREAKER_BOUNDS"),
    ("356", "CIRCUIT_BREAKER_TRIPPED"),
    ("357", "MALICIOUS_QUERY_REVERT"),
    ("358", "JOINS_EXITS_DISABLED"),
    // Lib
    ("400", "REENTRANCY"),
    ("401", "SENDER_NOT_ALLOWED"),
    ("402", "PAUSED"),
    ("403", "PAUSE_WINDOW_EXPIRED"),
    ("404", "MAX_PAUSE_WINDOW_DURATION"),
    ("405", "MAX_BUFFER_PERIOD_DURATION"),
    ("406", "INSUFFICIENT_BALANCE"),
    ("407", "INSUFFICIENT_ALLOWANCE"),
    ("408", "ERC20_TRANSFER_FROM_ZERO_ADDRESS"),
    ("409", "ERC20_TRANSFER_TO_ZERO_ADDRESS"),
    ("410", "ERC20_MINT_TO_ZERO_ADDRESS"),
    ("411", "ERC20_BURN_FROM_ZERO_ADDRESS"),
    ("412", "ERC20_APPROVE_FROM_ZERO_ADDRESS"),
    ("413", "ERC20_APPROVE_TO_ZERO_ADDRESS"),
    ("414", "ERC20_TRANSFER_EXCEEDS_ALLOWANCE"),
    ("415", "ERC20_DECREASED_ALLOWANCE_BELOW_ZERO"),
    ("416", "ERC20_TRANSFER_EXCEEDS_BALANCE"),
    ("417", "ERC20_BURN_EXCEEDS_ALLOWANCE"),
    ("418", "SAFE_ERC20_CALL_FAILED"),
    ("419", "ADDRESS_INSUFFICIENT_BALANCE"),
    ("420", "ADDRESS_CANNOT_SEND_VALUE"),
    ("421", "SAFE_CAST_VALUE_CANT_FIT_INT256"),
    ("422", "GRANT_SENDER_NOT_ADMIN"),
    ("423", "REVOKE_SENDER_NOT_ADMIN"),
    ("424", "RENOUNCE_SENDER_NOT_ALLOWED"),
    ("425", "BUFFER_PERIOD_EXPIRED"),
    ("426", "CALLER_IS_NOT_OWNER"),
    ("427", "NEW_OWNER_IS_ZERO"),
    ("428", "CODE_DEPLOYMENT_FAILED"),
    ("429", "CALL_TO_NON_CONTRACT"),
    ("430", "LOW_LEVEL_CALL_FAILED"),
    ("431", "NOT_PAUSED"),
    ("432", "ADDRESS_ALREADY_ALLOWLISTED"),
    ("433", "ADDRESS_NOT_ALLOWLISTED"),
    ("434", "ERC20_BURN_EXCEEDS_BALANCE"),
    ("435", "INVALID_OPERATION"),
    ("436", "CODEC_OVERFLOW"),
    ("437", "IN_RECOVERY_MODE"),
    ("438", "NOT_IN_RECOVERY_MODE"),
    ("439", "INDUCED_FAILURE"),
    ("440", "EXPIRED_SIGNATURE"),
    ("441", "MALFORMED_SIGNATURE"),
    ("442", "SAFE_CAST_VALUE_CANT_FIT_UINT64"),
    ("443", "UNHANDLED_FEE_TYPE"),
    ("444", "BURN_FROM_ZERO"),
    // Vault
    ("500", "INVALID_POOL_ID"),
    ("501", "CALLER_NOT_POOL"),
    ("502", "SENDER_NOT_ASSET_MANAGER"),
    ("503", "USER_DOESNT_ALLOW_RELAYER"),
    ("504", "INVALID_SIGNATURE"),
    ("505", "EXIT_BELOW_MIN"),
    ("506", "JOIN_ABOVE_MAX"),
    ("507", "SWAP_LIMIT"),
    ("508", "SWAP_DEADLINE"),
    ("509", "CANNOT_SWAP_SAME_TOKEN"),
    ("510", "UNKNOWN_AMOUNT_IN_FIRST_SWAP"),
    ("511", "MALCONSTRUCTED_MULTIHOP_SWAP"),
    ("512", "INTERNAL_BALANCE_OVERFLOW"),
    ("513", "INSUFFICIENT_INTERNAL_BALANCE"),
    ("514", "INVALID_ETH_INTERNAL_BALANCE"),
    ("515", "INVALID_POST_LOAN_BALANCE"),
    ("516", "INSUFFICIENT_ETH"),
    ("517", "UNALLOCATED_ETH"),
    ("518", "ETH_TRANSFER"),
    ("519", "CANNOT_USE_ETH_SENTINEL"),
    ("520", "TOKENS_MISMATCH"),
    ("521", "TOKEN_NOT_REGISTERED"),
    ("522", "TOKEN_ALREADY_REGISTERED"),
    ("523", "TOKENS_ALREADY_SET"),
    ("524", "TOKENS_LENGTH_MUST_BE_2"),
    ("525", "NONZERO_TOKEN_BALANCE"),
    ("526", "BALANCE_TOTAL_OVERFLOW"),
    ("527", "POOL_NO_TOKENS"),
    ("528", "INSUFFICIENT_FLASH_LOAN_BALANCE"),
    // Fees
    ("600", "SWAP_FEE_PERCENTAGE_TOO_HIGH"),
    ("601", "FLASH_LOAN_FEE_PERCENTAGE_TOO_HIGH"),
    ("602", "INSUFFICIENT_FLASH_LOAN_FEE_AMOUNT"),
    ("603", "AUM_FEE_PERCENTAGE_TOO_HIGH"),
    // Fee splitter
    ("700", "SPLITTER_FEE_PERCENTAGE_TOO_HIGH"),
    // Misc
    ("998", "UNIMPLEMENTED"),
    ("999", "SHOULD_NOT_HAPPEN"),
];

static REASONS_BY_CODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ERROR_CODES.iter().copied().collect());

/// Reverse lookup. Should a reason ever be listed under several codes, the
/// lowest code wins.
static CODES_BY_REASON: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut codes = HashMap::new();
    for &(code, reason) in ERROR_CODES {
        codes.entry(reason).or_insert(code);
    }
    codes
});

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum Error {
    #[error("error code not found: {0}")]
    UnknownErrorCode(String),
    #[error("error message not found: {0}")]
    UnknownReason(String),
}

/// Strips the first occurrence of the `BAL#` marker. Returns `None` when the
/// marker is absent.
fn strip_marker(error: &str) -> Option<String> {
    error
        .contains(ERROR_CODE_MARKER)
        .then(|| error.replacen(ERROR_CODE_MARKER, "", 1))
}

/// Returns `true` if `error` carries the `BAL#` marker followed by a known
/// code.
pub fn is_error_code(error: &str) -> bool {
    strip_marker(error).is_some_and(|code| REASONS_BY_CODE.contains_key(code.as_str()))
}

/// Decodes an error code of the form `BAL#000` into its reason.
pub fn parse_error_code(error: &str) -> Result<&'static str, Error> {
    strip_marker(error)
        .and_then(|code| REASONS_BY_CODE.get(code.as_str()).copied())
        .ok_or_else(|| Error::UnknownErrorCode(error.to_owned()))
}

/// Decodes an error code into its reason, handing back the input unchanged if
/// it is not a known error code. Meant for display only.
pub fn try_parse_error_code(error: &str) -> &str {
    match parse_error_code(error) {
        Ok(reason) => reason,
        Err(_) => error,
    }
}

/// Returns `true` if `reason` is one of the known error reasons.
pub fn is_balancer_error(reason: &str) -> bool {
    CODES_BY_REASON.contains_key(reason)
}

/// Encodes an error reason into its `BAL#000` code.
pub fn encode_error(reason: &str) -> Result<String, Error> {
    CODES_BY_REASON
        .get(reason)
        .map(|code| format!("{ERROR_CODE_MARKER}{code}"))
        .ok_or_else(|| Error::UnknownReason(reason.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!(parse_error_code("BAL#101").unwrap(), "UNSORTED_ARRAY");
        assert_eq!(parse_error_code("BAL#000").unwrap(), "ADD_OVERFLOW");
        assert_eq!(parse_error_code("BAL#999").unwrap(), "SHOULD_NOT_HAPPEN");
    }

    #[test]
    fn parse_rejects_missing_marker_and_unknown_codes() {
        assert_eq!(
            parse_error_code("101"),
            Err(Error::UnknownErrorCode("101".to_owned()))
        );
        assert_eq!(
            parse_error_code("BAL#998x"),
            Err(Error::UnknownErrorCode("BAL#998x".to_owned()))
        );
        assert!(parse_error_code("BAL#800").is_err());
    }

    #[test]
    fn detects_error_codes() {
        assert!(is_error_code("BAL#999"));
        assert!(is_error_code("BAL#503"));
        assert!(!is_error_code("BAL#ZZZ"));
        assert!(!is_error_code("no marker"));
        assert!(!is_error_code("BAL#"));
    }

    #[test]
    fn try_parse_falls_back_to_input() {
        assert_eq!(try_parse_error_code("BAL#504"), "INVALID_SIGNATURE");
        assert_eq!(try_parse_error_code("BAL#ZZZ"), "BAL#ZZZ");
        assert_eq!(
            try_parse_error_code("execution reverted"),
            "execution reverted"
        );
    }

    #[test]
    fn recognizes_reasons() {
        assert!(is_balancer_error("MIN_WEIGHT"));
        assert!(!is_balancer_error("min_weight"));
        assert!(!is_balancer_error("BAL#302"));
    }

    #[test]
    fn encodes_reasons() {
        assert_eq!(encode_error("UNSORTED_ARRAY").unwrap(), "BAL#101");
        assert_eq!(encode_error("ADD_OVERFLOW").unwrap(), "BAL#000");
        assert_eq!(
            encode_error("NOT_A_REASON"),
            Err(Error::UnknownReason("NOT_A_REASON".to_owned()))
        );
    }

    #[test]
    fn registry_round_trips() {
        for &(code, reason) in ERROR_CODES {
            let encoded = format!("BAL#{code}");
            assert_eq!(parse_error_code(&encode_error(reason).unwrap()).unwrap(), reason);
            assert_eq!(encode_error(parse_error_code(&encoded).unwrap()).unwrap(), encoded);
        }
    }
}
