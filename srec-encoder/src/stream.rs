//! Stream encoding: header, data records, end record
//!
//! ```text
//! Start ──header()──> Streaming ──data()*──> Streaming ──finish()──> Ended
//!   └─────────────data() / finish() skip the header──────┘
//! ```
//!
//! The running address is owned by the encoder and advances by the length of
//! each data chunk. A chunk whose last byte would land past `0xFFFFFFFF` is an
//! error; the address never wraps.

use crate::encoder::encode_record;
use crate::error::{EncoderError, Result};
use srec_spec::{EncoderConfig, Record, SrecError};
use std::io::{ErrorKind, Read, Write};

/// Highest address a data byte may occupy
const ADDRESS_LIMIT: u64 = u32::MAX as u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    /// Nothing emitted yet; a header may still be written
    Start,
    /// Header handled, data records being emitted
    Streaming,
    /// End record emitted
    Ended,
}

/// Totals for one encoded stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub header: bool,
    pub data_records: usize,
    pub bytes_read: u64,
    /// Address following the last data byte
    pub end_address: u64,
    pub lines: usize,
}

/// Drop trailing newline and carriage-return characters; an empty result means no header
pub fn trim_header(text: &str) -> Option<&str> {
    let trimmed = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Sequences the records of one stream
#[derive(Debug, Clone)]
pub struct StreamEncoder {
    config: EncoderConfig,
    start_address: u32,
    next_address: u64,
    state: StreamState,
    summary: StreamSummary,
}

impl StreamEncoder {
    pub fn new(start_address: u32, config: EncoderConfig) -> Self {
        StreamEncoder {
            config,
            start_address,
            next_address: start_address as u64,
            state: StreamState::Start,
            summary: StreamSummary {
                end_address: start_address as u64,
                ..StreamSummary::default()
            },
        }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn start_address(&self) -> u32 {
        self.start_address
    }

    /// Address of the next data byte
    pub fn address(&self) -> u64 {
        self.next_address
    }

    pub fn records_emitted(&self) -> usize {
        self.summary.lines
    }

    pub fn summary(&self) -> StreamSummary {
        self.summary
    }

    /// Emit the header record, if `text` is non-empty after trimming
    pub fn header(&mut self, text: Option<&str>) -> Result<Option<String>> {
        self.expect(StreamState::Start, "write a header")?;

        let line = match text.and_then(trim_header) {
            Some(text) => {
                let line = encode_record(&Record::header(text.as_bytes()), &self.config)?;
                tracing::trace!(len = text.len(), "S0 header record");
                self.summary.header = true;
                self.summary.lines += 1;
                Some(line)
            }
            None => None,
        };

        self.state = StreamState::Streaming;
        Ok(line)
    }

    /// Emit one data record for `chunk` at the current address
    ///
    /// Empty chunks produce nothing.
    pub fn data(&mut self, chunk: &[u8]) -> Result<Option<String>> {
        if self.state == StreamState::Ended {
            return Err(self.invalid("write data"));
        }
        self.state = StreamState::Streaming;

        if chunk.is_empty() {
            return Ok(None);
        }

        let last = self.next_address + chunk.len() as u64 - 1;
        if last > ADDRESS_LIMIT {
            return Err(EncoderError::AddressOverflow {
                address: self.next_address,
                len: chunk.len(),
            });
        }

        // Bounded by ADDRESS_LIMIT above
        let address = self.next_address as u32;
        let record = Record::data(address, chunk);
        let line = encode_record(&record, &self.config)?;
        tracing::trace!(kind = %record.kind, address, len = chunk.len(), "data record");

        self.next_address = last + 1;
        self.summary.data_records += 1;
        self.summary.bytes_read += chunk.len() as u64;
        self.summary.end_address = self.next_address;
        self.summary.lines += 1;
        Ok(Some(line))
    }

    /// Emit the S9 end record carrying the start address
    pub fn finish(&mut self) -> Result<String> {
        if self.state == StreamState::Ended {
            return Err(self.invalid("finish"));
        }

        let line = encode_record(&Record::end(self.start_address), &self.config)?;
        self.summary.lines += 1;
        self.state = StreamState::Ended;

        tracing::debug!(
            start = self.start_address,
            end = self.next_address,
            records = self.summary.data_records,
            bytes = self.summary.bytes_read,
            "stream encoded"
        );
        Ok(line)
    }

    fn expect(&self, state: StreamState, operation: &'static str) -> Result<()> {
        if self.state == state {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> EncoderError {
        EncoderError::InvalidState {
            state: self.state,
            operation,
        }
    }
}

/// Encode everything `reader` yields into `writer`
///
/// Lines are written as they are produced. On error, lines already written
/// stay in `writer`.
pub fn encode_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    start_address: u32,
    header: Option<&str>,
    config: EncoderConfig,
) -> Result<StreamSummary> {
    config.validate().map_err(SrecError::from)?;
    tracing::debug!(start = start_address, %config, "encoding stream");

    let mut encoder = StreamEncoder::new(start_address, config);
    if let Some(line) = encoder.header(header)? {
        writer.write_all(line.as_bytes())?;
    }

    let mut buf = vec![0u8; config.chunk_size];
    loop {
        let n = read_chunk(&mut reader, &mut buf)?;
        if n == 0 {
            break;
        }
        if let Some(line) = encoder.data(&buf[..n])? {
            writer.write_all(line.as_bytes())?;
        }
    }

    let end = encoder.finish()?;
    writer.write_all(end.as_bytes())?;
    writer.flush()?;

    Ok(encoder.summary())
}

/// Encode in-memory chunks into lines
pub fn encode_chunks<'a, I>(
    chunks: I,
    start_address: u32,
    header: Option<&str>,
    config: EncoderConfig,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut encoder = StreamEncoder::new(start_address, config);
    let mut lines = Vec::new();

    lines.extend(encoder.header(header)?);
    for chunk in chunks {
        lines.extend(encoder.data(chunk)?);
    }
    lines.push(encoder.finish()?);

    Ok(lines)
}

/// Fill `buf` from `reader`, stopping early only at end of input
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
