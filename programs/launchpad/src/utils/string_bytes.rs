use crate::constants::MAX_TICKER_LEN;

/// Zero-padded fixed-capacity encoding of a ticker. Callers validate length
/// first; anything past the capacity is dropped.
pub fn string_to_fixed_bytes(s: &str) -> [u8; MAX_TICKER_LEN] {
    let mut bytes = [0u8; MAX_TICKER_LEN];
    let string_bytes = s.as_bytes();
    let len = string_bytes.len().min(MAX_TICKER_LEN);
    bytes[..len].copy_from_slice(&string_bytes[..len]);

    bytes
}

pub fn fixed_bytes_to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let bytes = string_to_fixed_bytes("WEE");
        assert_eq!(&bytes[..4], b"WEE\0");
        assert_eq!(fixed_bytes_to_string(&bytes), "WEE");
    }

    #[test]
    fn test_full_capacity() {
        let bytes = string_to_fixed_bytes("ABCDEFGHIJ");
        assert_eq!(fixed_bytes_to_string(&bytes), "ABCDEFGHIJ");
    }
}
