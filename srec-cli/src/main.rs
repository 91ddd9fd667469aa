//! bin2srec - convert a raw binary into a Motorola S-record file
//!
//! # Usage
//!
//! ```bash
//! # Prompt for start address and header text, write output.srec
//! bin2srec firmware.bin
//!
//! # Fully non-interactive
//! bin2srec firmware.bin -o firmware.srec --address 0x8000 --header "boot v1"
//!
//! # No S0 record, 32 bytes per data record
//! bin2srec firmware.bin -a 0 --no-header --chunk-size 32
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to see encoder events.

mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use srec_encoder::{encode_stream, trim_header};
use srec_spec::{EncoderConfig, DEFAULT_CHUNK_SIZE, MAX_LINE_LEN};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

/// Convert a raw binary into a Motorola S-record file
#[derive(Parser, Debug)]
#[command(name = "bin2srec")]
#[command(about = "Convert a raw binary into a Motorola S-record file")]
#[command(version)]
struct Cli {
    /// Binary file to convert
    input: PathBuf,

    /// S-record file to write
    #[arg(short, long, default_value = "output.srec")]
    output: PathBuf,

    /// Start address in hex, e.g. 0x8000 (prompted when omitted)
    #[arg(short, long, value_parser = prompt::parse_address)]
    address: Option<u32>,

    /// S0 header text (prompted when omitted)
    #[arg(long, conflicts_with = "no_header")]
    header: Option<String>,

    /// Skip the S0 header record without prompting
    #[arg(long)]
    no_header: bool,

    /// Input bytes per data record
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = EncoderConfig::new(cli.chunk_size, MAX_LINE_LEN)
        .with_context(|| format!("invalid chunk size {}", cli.chunk_size))?;

    let input = File::open(&cli.input)
        .with_context(|| format!("failed to open binary file {}", cli.input.display()))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let address = match cli.address {
        Some(address) => address,
        None => prompt::prompt_address(&mut stdin.lock(), &mut stdout)?,
    };

    let header = if cli.no_header {
        None
    } else {
        match cli.header {
            Some(text) => trim_header(&text).map(str::to_owned),
            None => prompt::prompt_header(&mut stdin.lock(), &mut stdout)?,
        }
    };
    if let Some(text) = &header {
        prompt::check_header(text)?;
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create S-record file {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);

    let result = encode_stream(
        BufReader::new(input),
        &mut writer,
        address,
        header.as_deref(),
        config,
    );
    drop(writer);

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            if let Err(rm) = fs::remove_file(&cli.output) {
                tracing::warn!(
                    path = %cli.output.display(),
                    error = %rm,
                    "could not remove partial output"
                );
            }
            return Err(e).with_context(|| format!("failed to encode {}", cli.input.display()));
        }
    };

    tracing::info!(
        records = summary.data_records,
        bytes = summary.bytes_read,
        lines = summary.lines,
        "wrote {}",
        cli.output.display()
    );
    println!("S-record file created successfully: {}", cli.output.display());
    Ok(())
}
