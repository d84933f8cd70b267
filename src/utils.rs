// src/utils.rs
use ethers::types::U256;

/// Decimal digits of `value` in base units.
pub fn u256_to_raw(value: U256) -> String {
    value.to_string()
}

/// `value` scaled down by `10^decimals`, with trailing fraction zeros trimmed.
pub fn u256_to_human(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return u256_to_raw(value);
    }
    let width = decimals as usize;
    let digits = value.to_string();
    let (integer, fraction) = if digits.len() > width {
        let split = digits.len() - width;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        ("0".to_string(), format!("{digits:0>width$}"))
    };
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}
