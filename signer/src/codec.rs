//! Compact self-describing encoding of unsigned integers.
//!
//! Nonces are stored as CBOR unsigned integers through [`serde_cbor`]. A value is a single
//! descriptor byte followed by an optional big-endian payload. The upper three bits of the
//! descriptor hold the [`MajorType`], the lower five bits hold the additional info:
//!
//! | additional info | meaning                            |
//! |-----------------|------------------------------------|
//! | `0..=23`        | the value itself, no payload       |
//! | `24`            | 1 byte payload follows             |
//! | `25`            | 2 byte payload follows             |
//! | `26`            | 4 byte payload follows             |
//! | `27`            | 8 byte payload follows             |
//! | `28..=31`       | reserved, always rejected          |
//!
//! Decoding only accepts the shortest width for a value. Bytes after the first data item are
//! ignored.

use {crate::error::CorruptEntry, serde::Deserialize, std::fmt};

const MAJOR_TYPE_SHIFT: u8 = 5;
const ADDITIONAL_INFO_MASK: u8 = 0b0001_1111;
const MAX_INLINE_VALUE: u64 = 23;

/// The class of a data item as announced by its descriptor byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorType {
    UnsignedInt,
    NegativeInt,
    ByteString,
    TextString,
    Array,
    Map,
    Tag,
    Other,
}

impl MajorType {
    const fn from_descriptor(descriptor: u8) -> Self {
        match descriptor >> MAJOR_TYPE_SHIFT {
            0 => Self::UnsignedInt,
            1 => Self::NegativeInt,
            2 => Self::ByteString,
            3 => Self::TextString,
            4 => Self::Array,
            5 => Self::Map,
            6 => Self::Tag,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnsignedInt => "unsigned integer",
            Self::NegativeInt => "negative integer",
            Self::ByteString => "byte string",
            Self::TextString => "text string",
            Self::Array => "array",
            Self::Map => "map",
            Self::Tag => "tag",
            Self::Other => "simple value or float",
        };

        f.write_str(name)
    }
}

/// Encodes `value` as an unsigned integer using the shortest possible width.
pub fn encode_unsigned(value: u64) -> Result<Vec<u8>, serde_cbor::Error> {
    serde_cbor::to_vec(&value)
}

/// Decodes an unsigned integer previously written by [`encode_unsigned`].
///
/// Any other data item class is rejected rather than reinterpreted.
pub fn decode_unsigned(bytes: &[u8]) -> Result<u64, CorruptEntry> {
    let width = payload_width(bytes)?;

    // Not calling `Deserializer::end` leaves whatever follows the first item unread.
    let mut deserializer = serde_cbor::Deserializer::from_slice(bytes);
    let value = u64::deserialize(&mut deserializer).map_err(|e| {
        if e.is_eof() {
            CorruptEntry::Truncated {
                expected: width,
                actual: bytes.len() - 1,
            }
        } else {
            CorruptEntry::Malformed(e.to_string())
        }
    })?;

    if encoded_width(value) != width {
        return Err(CorruptEntry::NonCanonical);
    }

    Ok(value)
}

/// Validates the descriptor byte and returns the payload width it announces.
fn payload_width(bytes: &[u8]) -> Result<usize, CorruptEntry> {
    let &descriptor = bytes.first().ok_or(CorruptEntry::Empty)?;
    let major_type = MajorType::from_descriptor(descriptor);

    if major_type != MajorType::UnsignedInt {
        return Err(CorruptEntry::UnexpectedMajorType(major_type));
    }

    match descriptor & ADDITIONAL_INFO_MASK {
        0..=23 => Ok(0),
        24 => Ok(1),
        25 => Ok(2),
        26 => Ok(4),
        27 => Ok(8),
        info => Err(CorruptEntry::InvalidAdditionalInfo(info)),
    }
}

const fn encoded_width(value: u64) -> usize {
    match value {
        0..=MAX_INLINE_VALUE => 0,
        v if v <= u8::MAX as u64 => 1,
        v if v <= u16::MAX as u64 => 2,
        v if v <= u32::MAX as u64 => 4,
        _ => 8,
    }
}
