//! Block-oriented transform with final-block padding.

use core::fmt;

use crate::{
    backends::Engine, check_key_iv, errors::Error, keystream::Keystream, Variant, BLOCK_SIZE,
};

/// How [`TuringTransform::transform_final_block`] fills the unused tail of
/// the last block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// No padding. Not accepted by [`TuringTransform::new`].
    None,
    /// Every padding byte holds the number of padding bytes.
    #[default]
    Pkcs7,
    /// Padding bytes are zero.
    Zeros,
    /// ANSI X9.23. Padding bytes are written as zero, including the last.
    AnsiX923,
    /// ISO 10126. The tail is left as the zeroed block it starts from.
    Iso10126,
}

impl Padding {
    /// Fill `block[len..]` according to this scheme. `block` starts zeroed.
    fn apply(self, block: &mut [u8; BLOCK_SIZE], len: usize) {
        match self {
            Padding::Pkcs7 => {
                let n = BLOCK_SIZE - len;
                block[len..].fill(n as u8);
            }
            Padding::Zeros | Padding::AnsiX923 => block[len..].fill(0),
            _ => {}
        }
    }
}

/// Encrypts or decrypts whole blocks, then one padded final block.
///
/// Encryption and decryption are the same operation. A transform cannot be
/// reset; build a new one for each key and IV.
#[derive(Clone)]
pub struct TuringTransform {
    keystream: Keystream,
    padding: Padding,
}

/// Check that `count` bytes starting at `offset` fit in a buffer of `len`.
fn range(offset: usize, count: usize, len: usize) -> Result<core::ops::Range<usize>, Error> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(Error::OutOfRange),
    }
}

impl TuringTransform {
    /// Set up the cipher for `key` and `iv`.
    ///
    /// # Errors
    /// Returns an error if the key or IV length is invalid or if `padding`
    /// is [`Padding::None`].
    pub fn new(
        key: &[u8],
        iv: &[u8],
        padding: Padding,
        variant: Variant,
    ) -> Result<Self, Error> {
        check_key_iv(key, iv)?;
        if padding == Padding::None {
            return Err(Error::UnsupportedPadding);
        }
        Ok(Self {
            keystream: Keystream::new(Engine::new(variant, key, iv)),
            padding,
        })
    }

    /// XOR `count` bytes of `input` starting at `input_offset` with the
    /// keystream and write them to `output` starting at `output_offset`.
    ///
    /// Returns the number of bytes written, always `count`.
    ///
    /// # Errors
    /// Fails without consuming keystream if `count` is not a multiple of
    /// [`BLOCK_SIZE`] or if either range does not fit its buffer.
    pub fn transform_block(
        &mut self,
        input: &[u8],
        input_offset: usize,
        count: usize,
        output: &mut [u8],
        output_offset: usize,
    ) -> Result<usize, Error> {
        if count % BLOCK_SIZE != 0 {
            return Err(Error::UnalignedLength);
        }
        let src = range(input_offset, count, input.len())?;
        let dst = range(output_offset, count, output.len())?;
        self.keystream.apply(&input[src], &mut output[dst]);
        Ok(count)
    }

    /// Pad the last `count` (at most [`BLOCK_SIZE`]) bytes of a message
    /// and transform them as one block.
    ///
    /// # Errors
    /// Fails without consuming keystream if `count` exceeds one block or if
    /// the range does not fit `input`.
    pub fn transform_final_block(
        &mut self,
        input: &[u8],
        input_offset: usize,
        count: usize,
    ) -> Result<[u8; BLOCK_SIZE], Error> {
        if count > BLOCK_SIZE {
            return Err(Error::FinalBlockTooLong);
        }
        let src = range(input_offset, count, input.len())?;
        let mut block = [0u8; BLOCK_SIZE];
        block[..count].copy_from_slice(&input[src]);
        self.padding.apply(&mut block, count);
        self.keystream.apply_in_place(&mut block);
        Ok(block)
    }

    /// Padding scheme chosen at construction.
    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Backend generating the keystream.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.keystream.variant()
    }

    /// Bytes per input block.
    #[must_use]
    pub const fn input_block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Bytes per output block.
    #[must_use]
    pub const fn output_block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// [`TuringTransform::transform_block`] accepts any number of whole
    /// blocks per call.
    #[must_use]
    pub const fn can_transform_multiple_blocks(&self) -> bool {
        true
    }

    /// The keystream position cannot be rewound.
    #[must_use]
    pub const fn can_reuse_transform(&self) -> bool {
        false
    }
}

impl fmt::Debug for TuringTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TuringTransform")
            .field("variant", &self.variant())
            .field("padding", &self.padding)
            .field("buffered", &self.keystream.buffered())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl cipher::zeroize::ZeroizeOnDrop for TuringTransform {}
