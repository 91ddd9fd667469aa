//! # Motorola S-record Format
//!
//! Shared definitions for the S-record text format: record kinds, address
//! widths, the one's-complement checksum and encoder configuration.
//!
//! ## Line Format
//!
//! ```text
//! S<k><LL><AAAA...><DD...><CC>\n
//!
//! k     record type digit (0 header, 1/2/3 data, 9 end)
//! LL    byte count of address + data + checksum
//! AAAA  address, 2/3/4 bytes big-endian
//! DD    payload bytes
//! CC    one's complement of the sum of LL, AAAA and DD bytes
//! ```
//!
//! Every byte is rendered as two uppercase hex digits.

pub mod checksum;
pub mod config;
pub mod error;
pub mod record;

pub use checksum::checksum;
pub use config::{ConfigError, EncoderConfig};
pub use error::{Result, SrecError};
pub use record::{select, AddressWidth, Record, RecordKind};

/// Line buffer size in bytes: the encoded line, its newline and a terminator byte
pub const MAX_LINE_LEN: usize = 80;

/// Largest value of the one-byte record length field
pub const MAX_RECORD_LEN: usize = 255;

/// Default number of input bytes per data record
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Longest header text accepted from the input layer
pub const MAX_HEADER_LEN: usize = 31;

/// Characters used by the `S<k>` type tag
pub const TAG_LEN: usize = 2;
