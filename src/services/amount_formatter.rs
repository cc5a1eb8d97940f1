use num_bigint::BigUint;
use num_traits::{Num, Zero};

use crate::errors::CustomError;

/// Fraction digits kept in formatted balances.
const MAX_FRACTION_DIGITS: usize = 6;

/// Format a minor-unit amount with the given number of decimals.
///
/// The fractional part is zero-padded to `decimals` digits and then truncated
/// (never rounded) to at most six digits.
pub fn format_units(amount: &BigUint, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_str_radix(10);
    }

    let divisor = BigUint::from(10u32).pow(u32::from(decimals));
    let whole = amount / &divisor;
    let remainder = amount % &divisor;

    let mut fraction = format!(
        "{:0>width$}",
        remainder.to_str_radix(10),
        width = decimals as usize
    );
    fraction.truncate(MAX_FRACTION_DIGITS);

    format!("{}.{}", whole, fraction)
}

/// Format a base-10 amount string. Fails on anything but ASCII digits.
///
/// Upstream balances arrive as hex and go through [`parse_hex_quantity`], so
/// only tests feed decimal strings in.
#[cfg(test)]
pub fn format_amount(raw: &str, decimals: u8) -> Result<String, CustomError> {
    let amount = parse_decimal_amount(raw)?;
    Ok(format_units(&amount, decimals))
}

#[cfg(test)]
fn parse_decimal_amount(raw: &str) -> Result<BigUint, CustomError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CustomError::InvalidAmountError(raw.to_string()));
    }
    BigUint::from_str_radix(trimmed, 10)
        .map_err(|_| CustomError::InvalidAmountError(raw.to_string()))
}

/// Parse a JSON-RPC hex quantity such as `"0x1bc16d674ec80000"`.
///
/// A bare `"0x"` is treated as zero, which some providers return for empty
/// balances.
pub fn parse_hex_quantity(raw: &str) -> Result<BigUint, CustomError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| CustomError::InvalidAmountError(raw.to_string()))?;

    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::from_str_radix(digits, 16).map_err(|_| CustomError::InvalidAmountError(raw.to_string()))
}
