//! Implementation of the [Turing] stream cipher.
//!
//! Turing is a word-oriented stream cipher built around a 17-word LFSR over
//! GF(2^32), a nonlinear filter mixing five register words through keyed
//! 8x32 S-boxes, and a pair of pseudo-Hadamard transforms. It accepts keys
//! of 4 to 32 bytes and IVs of at least 4 bytes, both in whole 32-bit
//! words, and emits keystream in 20-byte blocks.
//!
//! Three interchangeable backends produce the same keystream:
//!
//! - [`Variant::Reference`] evaluates the keyed S-box from the key
//!   schedule on every call,
//! - [`Variant::Table`] precomputes the keyed S-box into four tables,
//! - [`Variant::Fast`] uses the same tables without ever shifting the
//!   register, emitting 17 blocks per batch.
//!
//! The keystream is reachable through two front ends. [`Turing`] implements
//! the traits of the re-exported [`cipher`] crate and accepts buffers of
//! any length. [`TuringTransform`] works on whole 20-byte blocks and pads a
//! final partial block according to a [`Padding`] scheme.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext integrity
//! is not verified, which can lead to serious vulnerabilities!
//!
//! USE AT YOUR OWN RISK!
//!
//! # Example
//! ```
//! use turing::{Turing, TuringCore, Variant};
//! // Import relevant traits
//! use turing::cipher::StreamCipher;
//!
//! let key = b"test key 128bits";
//! let iv = [0u8; 4];
//! let plaintext = *b"attack at dawn, retreat at dusk";
//!
//! let core = TuringCore::new(key, &iv, Variant::Fast).unwrap();
//! let mut cipher = Turing::from_core(core);
//!
//! let mut buffer = plaintext;
//!
//! // apply keystream (encrypt)
//! cipher.apply_keystream(&mut buffer);
//! assert_ne!(buffer, plaintext);
//!
//! // decrypt ciphertext by applying keystream again
//! let core = TuringCore::new(key, &iv, Variant::Reference).unwrap();
//! let mut cipher = Turing::from_core(core);
//! for chunk in buffer.chunks_mut(3) {
//!     cipher.apply_keystream(chunk);
//! }
//! assert_eq!(buffer, plaintext);
//! ```
//!
//! [Turing]: https://eprint.iacr.org/2002/185

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_root_url = "https://docs.rs/turing/0.1.0"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use cipher;

mod backends;
mod errors;
mod keystream;
mod sbox;
mod state;
mod tables;
mod transform;
mod word;
mod xor;

pub use crate::{
    backends::Variant,
    errors::Error,
    transform::{Padding, TuringTransform},
};

use core::fmt;

use cipher::{
    consts::{U1, U20},
    AlgorithmName, Block, BlockSizeUser, ParBlocksSizeUser, StreamBackend, StreamCipherCore,
    StreamCipherCoreWrapper, StreamClosure,
};

#[cfg(feature = "zeroize")]
use cipher::zeroize::ZeroizeOnDrop;

use crate::{backends::Engine, keystream::Keystream};

/// Bytes produced by one round.
pub const BLOCK_SIZE: usize = 20;
/// Bytes produced by one batch of 17 rounds in the fast backend.
pub const BATCH_SIZE: usize = 17 * BLOCK_SIZE;
/// Shortest accepted key, in bytes.
pub const KEY_SIZE_MIN: usize = 4;
/// Longest accepted key, in bytes.
pub const KEY_SIZE_MAX: usize = 32;
/// Shortest accepted IV, in bytes.
pub const IV_SIZE_MIN: usize = 4;
/// Longest accepted key and IV together, in bytes.
pub const KEY_IV_SIZE_MAX: usize = 48;

/// Validate key and IV lengths before any state is derived from them.
pub(crate) fn check_key_iv(key: &[u8], iv: &[u8]) -> Result<(), Error> {
    if !(KEY_SIZE_MIN..=KEY_SIZE_MAX).contains(&key.len()) || key.len() % 4 != 0 {
        return Err(Error::InvalidKeyLength);
    }
    if iv.len() < IV_SIZE_MIN || iv.len() % 4 != 0 {
        return Err(Error::InvalidIvLength);
    }
    if key.len() + iv.len() > KEY_IV_SIZE_MAX {
        return Err(Error::KeyIvTooLong);
    }
    Ok(())
}

/// Turing stream cipher usable through the [`cipher`] traits.
pub type Turing = StreamCipherCoreWrapper<TuringCore>;

/// Core state of the Turing stream cipher.
#[derive(Clone)]
pub struct TuringCore {
    keystream: Keystream,
}

impl TuringCore {
    /// Set up the cipher for `key` and `iv` using the given backend.
    ///
    /// # Errors
    /// Returns an error if the key or IV length is invalid.
    pub fn new(key: &[u8], iv: &[u8], variant: Variant) -> Result<Self, Error> {
        check_key_iv(key, iv)?;
        Ok(Self {
            keystream: Keystream::new(Engine::new(variant, key, iv)),
        })
    }

    /// Backend generating the keystream.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.keystream.variant()
    }
}

impl BlockSizeUser for TuringCore {
    type BlockSize = U20;
}

impl StreamCipherCore for TuringCore {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        // The register period is far beyond anything addressable, and no
        // seeking is offered.
        None
    }

    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut Backend(&mut self.keystream));
    }
}

impl AlgorithmName for TuringCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Turing")
    }
}

impl fmt::Debug for TuringCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TuringCore")
            .field("variant", &self.variant())
            .field("buffered", &self.keystream.buffered())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for TuringCore {}

struct Backend<'a>(&'a mut Keystream);

impl<'a> BlockSizeUser for Backend<'a> {
    type BlockSize = U20;
}

impl<'a> ParBlocksSizeUser for Backend<'a> {
    type ParBlocksSize = U1;
}

impl<'a> StreamBackend for Backend<'a> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        self.0.fill(block);
    }
}
