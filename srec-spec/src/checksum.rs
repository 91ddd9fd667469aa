//! One's-complement record checksum

/// Sum `bytes` with 8-bit wraparound and invert the result.
///
/// An empty span yields `0xFF`.
#[inline]
pub fn checksum(bytes: &[u8]) -> u8 {
    !bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(checksum(&[]), 0xFF);
    }

    #[test]
    fn test_end_record_bytes() {
        // S9030000FC
        assert_eq!(checksum(&[0x03, 0x00, 0x00]), 0xFC);
    }

    #[test]
    fn test_wraparound() {
        // 0xFF + 0x02 = 0x101 -> 0x01
        assert_eq!(checksum(&[0xFF, 0x02]), 0xFE);
        assert_eq!(checksum(&[0x80, 0x80]), 0xFF);
    }

    #[test]
    fn test_zero_payload_data_record() {
        let mut bytes = vec![0x13, 0x00, 0x00];
        bytes.extend([0u8; 16]);
        assert_eq!(checksum(&bytes), 0xEC);
    }
}
