//! Single-record encoding
//!
//! ```text
//! S1 13 0000 00000000000000000000000000000000 EC
//! |  |  |    |                                |
//! |  |  |    payload                          checksum over length..payload
//! |  |  address (big-endian)
//! |  length = address + payload + 1
//! type tag (not checksummed)
//! ```

use crate::error::{EncoderError, Result};
use srec_spec::{
    checksum, EncoderConfig, Record, RecordKind, MAX_LINE_LEN, MAX_RECORD_LEN,
};

/// Encode one record into a newline-terminated line using the default line buffer
pub fn encode(kind: RecordKind, address: u32, payload: &[u8]) -> Result<String> {
    encode_with_budget(kind, address, payload, MAX_LINE_LEN)
}

/// Encode a record under the line budget of `config`
pub fn encode_record(record: &Record<'_>, config: &EncoderConfig) -> Result<String> {
    encode_with_budget(record.kind, record.address, record.payload, config.max_line_len)
}

/// Encode one record; `max_line_len` counts the line, its newline and a terminator byte
pub fn encode_with_budget(
    kind: RecordKind,
    address: u32,
    payload: &[u8],
    max_line_len: usize,
) -> Result<String> {
    let record = Record::new(kind, address, payload);
    record.check_address()?;

    let width = record.address_width();
    let record_len = record.record_len();
    let line_len = EncoderConfig::line_len(width, payload.len());
    if record_len > MAX_RECORD_LEN || line_len >= max_line_len {
        return Err(EncoderError::RecordTooLong {
            kind,
            record_len,
            line_len,
            max_line_len,
        });
    }

    // Counted bytes: length, address, payload
    let mut body = Vec::with_capacity(record_len);
    body.push(record_len as u8);
    body.extend(width.address_bytes(address));
    body.extend_from_slice(payload);

    let mut line = String::with_capacity(line_len);
    line.push_str(kind.tag());
    push_hex(&mut line, &body);
    push_hex(&mut line, &[checksum(&body)]);
    line.push('\n');

    debug_assert_eq!(line.len(), line_len);
    Ok(line)
}

fn push_hex(line: &mut String, bytes: &[u8]) {
    for byte in bytes {
        line.push_str(&format!("{:02X}", byte));
    }
}
