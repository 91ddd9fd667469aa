//! Encoder errors

use crate::stream::StreamState;
use srec_spec::{RecordKind, SrecError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncoderError {
    #[error("Format error: {0}")]
    Spec(#[from] SrecError),

    #[error("{kind} record too long: length field {record_len} (max 255), line {line_len} chars (buffer {max_line_len})")]
    RecordTooLong {
        kind: RecordKind,
        record_len: usize,
        line_len: usize,
        max_line_len: usize,
    },

    #[error("Address overflow: {len} bytes at {address:#010x} run past 0xFFFFFFFF")]
    AddressOverflow { address: u64, len: usize },

    #[error("Cannot {operation} in stream state {state:?}")]
    InvalidState {
        state: StreamState,
        operation: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncoderError>;
