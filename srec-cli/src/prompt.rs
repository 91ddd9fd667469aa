//! Interactive input for start address and header text

use anyhow::{bail, Context, Result};
use srec_encoder::trim_header;
use srec_spec::MAX_HEADER_LEN;
use std::io::{BufRead, Write};
use std::num::ParseIntError;

/// Parse a hex address, with or without a `0x` prefix
pub fn parse_address(text: &str) -> Result<u32, ParseIntError> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16)
}

pub fn prompt_address<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u32> {
    write!(output, "Start address (hex): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no start address given");
    }
    parse_address(&line).with_context(|| format!("invalid start address {:?}", line.trim()))
}

/// Ask for header text; a blank answer or end of input means no header
pub fn prompt_header<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>> {
    write!(output, "S0 record text (max {} characters): ", MAX_HEADER_LEN)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(trim_header(&line).map(str::to_owned))
}

pub fn check_header(text: &str) -> Result<()> {
    if text.len() > MAX_HEADER_LEN {
        bail!(
            "header text is {} bytes, at most {} allowed",
            text.len(),
            MAX_HEADER_LEN
        );
    }
    Ok(())
}
