//! # Error Types for the S-record format

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SrecError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid address width: {0} bytes (valid widths: 2, 3, 4)")]
    InvalidAddressWidth(u8),

    #[error("Address {address:#010x} does not fit in {width} bytes")]
    AddressOutOfRange { address: u32, width: u8 },
}

pub type Result<T> = std::result::Result<T, SrecError>;
