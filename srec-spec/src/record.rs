//! # Record Kinds and Address Widths
//!
//! | Address range            | Width | Data kind |
//! |--------------------------|-------|-----------|
//! | 0x0000 - 0xFFFF          | 2     | S1        |
//! | 0x10000 - 0xFFFFFF       | 3     | S2        |
//! | 0x1000000 - 0xFFFFFFFF   | 4     | S3        |
//!
//! Header records always use a 2-byte address. End records are always tagged
//! `S9` and take the minimal width of the address they carry.

use crate::error::{Result, SrecError};
use std::fmt;

/// Number of bytes used for a record's address field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressWidth {
    Two,
    Three,
    Four,
}

impl AddressWidth {
    /// Smallest width whose range covers `address`
    #[inline]
    pub const fn for_address(address: u32) -> Self {
        if address <= 0xFFFF {
            AddressWidth::Two
        } else if address <= 0xFF_FFFF {
            AddressWidth::Three
        } else {
            AddressWidth::Four
        }
    }

    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            AddressWidth::Two => 2,
            AddressWidth::Three => 3,
            AddressWidth::Four => 4,
        }
    }

    /// Hex digits used by the address field
    #[inline]
    pub const fn hex_digits(self) -> usize {
        self.bytes() * 2
    }

    /// Highest address representable at this width
    #[inline]
    pub const fn max_address(self) -> u32 {
        match self {
            AddressWidth::Two => 0xFFFF,
            AddressWidth::Three => 0xFF_FFFF,
            AddressWidth::Four => 0xFFFF_FFFF,
        }
    }

    #[inline]
    pub const fn fits(self, address: u32) -> bool {
        address <= self.max_address()
    }

    /// Big-endian address bytes, most significant first, truncated to this width
    pub fn address_bytes(self, address: u32) -> Vec<u8> {
        let be = address.to_be_bytes();
        be[be.len() - self.bytes()..].to_vec()
    }
}

impl TryFrom<u8> for AddressWidth {
    type Error = SrecError;

    fn try_from(bytes: u8) -> Result<Self> {
        match bytes {
            2 => Ok(AddressWidth::Two),
            3 => Ok(AddressWidth::Three),
            4 => Ok(AddressWidth::Four),
            other => Err(SrecError::InvalidAddressWidth(other)),
        }
    }
}

impl fmt::Display for AddressWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-byte", self.bytes())
    }
}

/// Semantic role of a record line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// S0: free-form header text
    Header,
    /// S1: data with a 16-bit address
    Data16,
    /// S2: data with a 24-bit address
    Data24,
    /// S3: data with a 32-bit address
    Data32,
    /// S9: end of block
    End,
}

impl RecordKind {
    /// Data kind for a given address width
    #[inline]
    pub(crate) const fn data(width: AddressWidth) -> Self {
        match width {
            AddressWidth::Two => RecordKind::Data16,
            AddressWidth::Three => RecordKind::Data24,
            AddressWidth::Four => RecordKind::Data32,
        }
    }

    /// Two-character type tag
    pub const fn tag(self) -> &'static str {
        match self {
            RecordKind::Header => "S0",
            RecordKind::Data16 => "S1",
            RecordKind::Data24 => "S2",
            RecordKind::Data32 => "S3",
            RecordKind::End => "S9",
        }
    }

    #[inline]
    pub const fn is_data(self) -> bool {
        matches!(self, RecordKind::Data16 | RecordKind::Data24 | RecordKind::Data32)
    }

    /// Address width used when this kind carries `address`
    pub const fn address_width(self, address: u32) -> AddressWidth {
        match self {
            RecordKind::Header | RecordKind::Data16 => AddressWidth::Two,
            RecordKind::Data24 => AddressWidth::Three,
            RecordKind::Data32 => AddressWidth::Four,
            RecordKind::End => AddressWidth::for_address(address),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Select the data record kind for `address`
#[inline]
pub const fn select(address: u32) -> RecordKind {
    RecordKind::data(AddressWidth::for_address(address))
}

/// A single record, built and encoded per emission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record<'a> {
    pub kind: RecordKind,
    pub address: u32,
    pub payload: &'a [u8],
}

impl<'a> Record<'a> {
    pub const fn new(kind: RecordKind, address: u32, payload: &'a [u8]) -> Self {
        Self {
            kind,
            address,
            payload,
        }
    }

    /// Header record at the conventional address 0x0000
    pub const fn header(text: &'a [u8]) -> Self {
        Self::new(RecordKind::Header, 0, text)
    }

    /// Data record whose kind is selected from `address`
    pub const fn data(address: u32, payload: &'a [u8]) -> Self {
        Self::new(select(address), address, payload)
    }

    /// End record with no payload
    pub const fn end(address: u32) -> Self {
        Self::new(RecordKind::End, address, &[])
    }

    #[inline]
    pub const fn address_width(&self) -> AddressWidth {
        self.kind.address_width(self.address)
    }

    /// Value of the length field: address + payload + checksum bytes
    #[inline]
    pub const fn record_len(&self) -> usize {
        self.address_width().bytes() + self.payload.len() + 1
    }

    /// Fail if the address does not fit the kind's address field
    pub fn check_address(&self) -> Result<()> {
        let width = self.address_width();
        if width.fits(self.address) {
            Ok(())
        } else {
            Err(SrecError::AddressOutOfRange {
                address: self.address,
                width: width.bytes() as u8,
            })
        }
    }
}
