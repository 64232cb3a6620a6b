//! Key schedule and LFSR register shared by every backend.

use crate::{
    sbox::fixed_s,
    tables::MULTAB,
    word::load_be,
    KEY_SIZE_MAX,
};

#[cfg(feature = "zeroize")]
use cipher::zeroize::Zeroize;

/// Number of words in the LFSR.
pub(crate) const REGISTER_WORDS: usize = 17;

const MAX_KEY_WORDS: usize = KEY_SIZE_MAX / 4;

/// Pseudo-Hadamard transform: the last word absorbs the sum of all the
/// others, then is added back into each of them.
#[inline(always)]
pub(crate) fn pht(words: &mut [u32]) {
    if let Some((last, rest)) = words.split_last_mut() {
        let sum = rest.iter().fold(0u32, |acc, w| acc.wrapping_add(*w));
        *last = last.wrapping_add(sum);
        for w in rest.iter_mut() {
            *w = w.wrapping_add(*last);
        }
    }
}

/// Mixed key words produced by key setup.
#[derive(Clone)]
pub(crate) struct KeySchedule {
    words: [u32; MAX_KEY_WORDS],
    len: usize,
}

impl KeySchedule {
    /// `key` must already have a valid length.
    pub(crate) fn new(key: &[u8]) -> Self {
        let len = key.len() / 4;
        let mut words = [0u32; MAX_KEY_WORDS];
        load_be(key, &mut words[..len]);
        for w in words[..len].iter_mut() {
            *w = fixed_s(*w);
        }
        pht(&mut words[..len]);
        Self { words, len }
    }

    #[inline(always)]
    pub(crate) fn words(&self) -> &[u32] {
        &self.words[..self.len]
    }
}

#[cfg(feature = "zeroize")]
impl Drop for KeySchedule {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

/// The 17-word LFSR over GF(2^32).
#[derive(Clone)]
pub(crate) struct Register(pub(crate) [u32; REGISTER_WORDS]);

impl Register {
    /// Load the register from the IV and key schedule.
    ///
    /// `keyed_s` is the keyed transform with zero rotation; each backend
    /// supplies its own realization of it.
    pub(crate) fn load(key: &KeySchedule, iv: &[u8], keyed_s: impl Fn(u32) -> u32) -> Self {
        let mut r = [0u32; REGISTER_WORDS];
        let iv_words = iv.len() / 4;
        let key = key.words();

        load_be(iv, &mut r[..iv_words]);
        for w in r[..iv_words].iter_mut() {
            *w = fixed_s(*w);
        }
        let mut i = iv_words;
        r[i..i + key.len()].copy_from_slice(key);
        i += key.len();
        r[i] = 0x0102_0300 | ((key.len() as u32) << 4) | iv_words as u32;
        i += 1;
        for j in 0..REGISTER_WORDS - i {
            r[i + j] = keyed_s(r[j].wrapping_add(r[i + j - 1]));
        }
        pht(&mut r);
        Self(r)
    }

    #[inline(always)]
    fn feedback(r0: u32, r4: u32, r15: u32) -> u32 {
        r15 ^ r4 ^ (r0 << 8) ^ MULTAB[(r0 >> 24) as usize]
    }

    /// Clock the register once, shifting every word down one place.
    #[inline(always)]
    pub(crate) fn step(&mut self) {
        let r = &mut self.0;
        let new = Self::feedback(r[0], r[4], r[15]);
        r.copy_within(1.., 0);
        r[REGISTER_WORDS - 1] = new;
    }

    /// Clock the register in place when logical word 0 lives in physical
    /// slot `z % 17`. Afterwards logical word 0 lives in slot `z + 1`.
    #[inline(always)]
    pub(crate) fn step_at(&mut self, z: usize) {
        let r = &mut self.0;
        let slot = z % REGISTER_WORDS;
        r[slot] = Self::feedback(
            r[slot],
            r[(z + 4) % REGISTER_WORDS],
            r[(z + 15) % REGISTER_WORDS],
        );
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Register {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
