//! # S-record Encoder
//!
//! Encode raw binary data into Motorola S-record text.
//!
//! ## Example
//!
//! ```rust
//! use srec_encoder::{encode_chunks, EncoderConfig};
//!
//! let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
//! let lines = encode_chunks(
//!     data.chunks(16),
//!     0x1000,
//!     Some("boot"),
//!     EncoderConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(lines.len(), 3);
//! assert!(lines[1].starts_with("S1071000DEADBEEF"));
//! assert!(lines[2].starts_with("S9"));
//! ```

pub mod encoder;
pub mod error;
pub mod stream;

pub use encoder::{encode, encode_record, encode_with_budget};
pub use error::{EncoderError, Result};
pub use srec_spec::{EncoderConfig, Record, RecordKind};
pub use stream::{
    encode_chunks, encode_stream, trim_header, StreamEncoder, StreamState, StreamSummary,
};
