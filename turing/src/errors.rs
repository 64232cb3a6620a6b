//! Error types.

use core::fmt;

/// Errors reported by [`TuringCore`](crate::TuringCore) and
/// [`TuringTransform`](crate::TuringTransform).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Key is shorter than 4 bytes, longer than 32 bytes or not a whole
    /// number of words.
    InvalidKeyLength,
    /// IV is shorter than 4 bytes or not a whole number of words.
    InvalidIvLength,
    /// Key and IV together exceed 48 bytes.
    KeyIvTooLong,
    /// [`Padding::None`](crate::Padding::None) was requested.
    UnsupportedPadding,
    /// Offset or count falls outside the supplied buffer.
    OutOfRange,
    /// Byte count passed to a block transform is not a multiple of the block
    /// size.
    UnalignedLength,
    /// Final block is longer than one block.
    FinalBlockTooLong,
    /// Name does not match any cipher variant.
    UnknownVariant,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidKeyLength => "invalid key length",
            Error::InvalidIvLength => "invalid IV length",
            Error::KeyIvTooLong => "combined key and IV length too long",
            Error::UnsupportedPadding => "padding mode not supported",
            Error::OutOfRange => "offset or count out of range",
            Error::UnalignedLength => "length is not a multiple of the block size",
            Error::FinalBlockTooLong => "final block is longer than one block",
            Error::UnknownVariant => "unknown Turing variant",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
