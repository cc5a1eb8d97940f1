use crate::errors::CustomError;

/// `0x` followed by exactly 40 hex digits. Checksum casing is not verified.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

pub fn validate_address(address: &str) -> Result<(), CustomError> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(CustomError::InvalidAddressError(address.to_string()))
    }
}

/// Comparison key for addresses: trimmed and lowercased.
pub fn address_key(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_case_addresses() {
        assert!(is_valid_address("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"));
        assert!(validate_address("0x0000000000000000000000000000000000000000").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "bad",
            "",
            "742d35Cc6634C0532925a3b844Bc454e4438f44e",
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44",
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e0",
            "0xZZ2d35Cc6634C0532925a3b844Bc454e4438f44e",
            "0X742d35Cc6634C0532925a3b844Bc454e4438f44e",
        ] {
            assert!(
                matches!(validate_address(bad), Err(CustomError::InvalidAddressError(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn key_ignores_case_and_whitespace() {
        assert_eq!(
            address_key(" 0xABCDEF0000000000000000000000000000000000 "),
            "0xabcdef0000000000000000000000000000000000"
        );
    }
}
