//! # Encoder Configuration
//!
//! Controls how many input bytes go into each data record and how long an
//! encoded line may get. A validated configuration guarantees that a full
//! chunk fits a 4-byte-address data record, so streaming never fails on
//! line length regardless of how far the address advances.

use crate::record::AddressWidth;
use crate::{DEFAULT_CHUNK_SIZE, MAX_LINE_LEN, MAX_RECORD_LEN, TAG_LEN};
use std::fmt;

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncoderConfig {
    /// Input bytes per data record
    pub chunk_size: usize,
    /// Line buffer size: encoded line, newline and terminator
    pub max_line_len: usize,
}

impl EncoderConfig {
    /// Default configuration: 16-byte chunks, 80-byte line buffer
    pub const DEFAULT: Self = Self {
        chunk_size: DEFAULT_CHUNK_SIZE,
        max_line_len: MAX_LINE_LEN,
    };

    /// Create a new configuration with validation
    pub const fn new(chunk_size: usize, max_line_len: usize) -> Result<Self, ConfigError> {
        let config = Self {
            chunk_size,
            max_line_len,
        };

        if max_line_len < Self::min_line_len() {
            return Err(ConfigError::LineBudgetTooSmall {
                max_line_len,
                min: Self::min_line_len(),
            });
        }
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        let max = config.max_payload_len(AddressWidth::Four);
        if chunk_size > max {
            return Err(ConfigError::ChunkTooLarge { chunk_size, max });
        }

        Ok(config)
    }

    /// Smallest buffer that holds a one-byte 4-byte-address data record
    pub const fn min_line_len() -> usize {
        Self::line_len(AddressWidth::Four, 1) + 1
    }

    /// Characters in an encoded line, including the newline
    #[inline]
    pub const fn line_len(width: AddressWidth, payload_len: usize) -> usize {
        // tag, length byte, address, payload, checksum byte, newline
        TAG_LEN + 2 + width.hex_digits() + payload_len * 2 + 2 + 1
    }

    /// Longest encoded line allowed, including the newline
    #[inline]
    pub const fn max_encoded_len(&self) -> usize {
        self.max_line_len.saturating_sub(1)
    }

    /// Largest payload that fits both the length field and the line budget
    pub const fn max_payload_len(&self, width: AddressWidth) -> usize {
        let by_field = MAX_RECORD_LEN - width.bytes() - 1;
        let overhead = Self::line_len(width, 0);
        let by_line = self.max_encoded_len().saturating_sub(overhead) / 2;
        if by_field < by_line {
            by_field
        } else {
            by_line
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(self.chunk_size, self.max_line_len).map(|_| ())
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for EncoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EncoderConfig {{ chunk: {} bytes, line buffer: {} bytes, payload limit: S1={} S2={} S3={} }}",
            self.chunk_size,
            self.max_line_len,
            self.max_payload_len(AddressWidth::Two),
            self.max_payload_len(AddressWidth::Three),
            self.max_payload_len(AddressWidth::Four),
        )
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroChunkSize,
    ChunkTooLarge { chunk_size: usize, max: usize },
    LineBudgetTooSmall { max_line_len: usize, min: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroChunkSize => write!(f, "Chunk size must be at least 1 byte"),
            ConfigError::ChunkTooLarge { chunk_size, max } => write!(
                f,
                "Chunk size {} exceeds {} bytes that fit a 4-byte-address record",
                chunk_size, max
            ),
            ConfigError::LineBudgetTooSmall { max_line_len, min } => write!(
                f,
                "Line buffer of {} bytes is below the minimum of {}",
                max_line_len, min
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.max_line_len, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_payload_limits() {
        let config = EncoderConfig::DEFAULT;
        // 79 usable chars: S1 overhead 11, S2 13, S3 15
        assert_eq!(config.max_payload_len(AddressWidth::Two), 34);
        assert_eq!(config.max_payload_len(AddressWidth::Three), 33);
        assert_eq!(config.max_payload_len(AddressWidth::Four), 32);
    }

    #[test]
    fn test_length_field_caps_large_budget() {
        let config = EncoderConfig::new(16, 4096).unwrap();
        assert_eq!(config.max_payload_len(AddressWidth::Two), 252);
        assert_eq!(config.max_payload_len(AddressWidth::Four), 250);
    }

    #[test]
    fn test_line_len() {
        assert_eq!(EncoderConfig::line_len(AddressWidth::Two, 0), 11);
        assert_eq!(EncoderConfig::line_len(AddressWidth::Two, 16), 43);
        assert_eq!(EncoderConfig::line_len(AddressWidth::Four, 32), 79);
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(EncoderConfig::new(0, 80), Err(ConfigError::ZeroChunkSize));
        assert_eq!(
            EncoderConfig::new(33, 80),
            Err(ConfigError::ChunkTooLarge { chunk_size: 33, max: 32 })
        );
        assert!(EncoderConfig::new(32, 80).is_ok());
        assert_eq!(
            EncoderConfig::new(1, 17),
            Err(ConfigError::LineBudgetTooSmall { max_line_len: 17, min: 18 })
        );
        assert!(EncoderConfig::new(1, 18).is_ok());
    }

    #[test]
    fn test_validate_catches_field_edits() {
        let mut config = EncoderConfig::DEFAULT;
        config.chunk_size = 200;
        assert!(matches!(config.validate(), Err(ConfigError::ChunkTooLarge { .. })));
    }

    #[test]
    fn test_display() {
        let text = EncoderConfig::DEFAULT.to_string();
        assert!(text.contains("chunk: 16 bytes"));
        assert!(text.contains("S3=32"));
    }
}
