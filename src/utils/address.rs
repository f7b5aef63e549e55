/// Superficial shape check for an Ethereum address: `0x` prefix and 42
/// characters total. Hex content and checksum are NOT verified.
pub fn is_valid_address(address: &str) -> bool {
    address.starts_with("0x") && address.chars().count() == 42
}

/// Shorten an address for display: first 10 characters, `...`, last 8.
/// Anything short enough to not need eliding comes back unchanged.
pub fn mask_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 18 {
        return address.to_string();
    }

    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        assert!(is_valid_address(
            "0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1"
        ));
    }

    #[test]
    fn test_case_and_content_not_checked() {
        // Only prefix and length matter
        assert!(is_valid_address(&format!("0x{}", "A".repeat(40))));
        assert!(is_valid_address(&format!("0x{}", "f".repeat(40))));
        assert!(is_valid_address(&format!("0x{}", "aB".repeat(20))));
        assert!(is_valid_address(&format!("0x{}", "z".repeat(40))));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_address("0x123"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address(&"1".repeat(42)));
        // 43 chars
        assert!(!is_valid_address(&format!("0x{}", "a".repeat(41))));
    }

    #[test]
    fn test_mask_address() {
        assert_eq!(
            mask_address("0x742d35Cc6634C0532925a3b8D6B3980A11F1f6f1"),
            "0x742d35Cc...11F1f6f1"
        );
        assert_eq!(mask_address("0x123"), "0x123");
    }
}
