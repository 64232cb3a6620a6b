//! Buffered keystream shared by the cipher core and the block transform.

use crate::{backends::Engine, xor::xor_into, Variant, BATCH_SIZE};

#[cfg(feature = "zeroize")]
use cipher::zeroize::Zeroize;

/// Keystream engine plus the bytes of its last chunk not yet consumed.
///
/// Bytes always leave in generation order; a chunk is only generated once
/// every byte of the previous one has been handed out.
#[derive(Clone)]
pub(crate) struct Keystream {
    engine: Engine,
    buffer: [u8; BATCH_SIZE],
    pos: usize,
    len: usize,
}

impl Keystream {
    pub(crate) fn new(engine: Engine) -> Self {
        Self {
            engine,
            buffer: [0; BATCH_SIZE],
            pos: 0,
            len: 0,
        }
    }

    pub(crate) fn variant(&self) -> Variant {
        self.engine.variant()
    }

    /// Number of generated bytes still waiting to be used.
    pub(crate) fn buffered(&self) -> usize {
        self.len - self.pos
    }

    /// Up to `max` of the next keystream bytes. Returns an empty slice only
    /// when `max` is zero.
    fn next(&mut self, max: usize) -> &[u8] {
        if max != 0 && self.pos == self.len {
            self.len = self.engine.generate(&mut self.buffer);
            self.pos = 0;
        }
        let start = self.pos;
        let n = max.min(self.len - start);
        self.pos += n;
        &self.buffer[start..start + n]
    }

    /// XOR `input` with the keystream into `output` of the same length.
    pub(crate) fn apply(&mut self, input: &[u8], output: &mut [u8]) {
        let mut done = 0;
        while done < input.len() {
            let ks = self.next(input.len() - done);
            let n = ks.len();
            xor_into(&input[done..done + n], ks, &mut output[done..done + n]);
            done += n;
        }
    }

    /// XOR the keystream into `buf` in place.
    pub(crate) fn apply_in_place(&mut self, buf: &mut [u8]) {
        let mut done = 0;
        while done < buf.len() {
            let ks = self.next(buf.len() - done);
            for (b, k) in buf[done..].iter_mut().zip(ks) {
                *b ^= k;
            }
            done += ks.len();
        }
    }

    /// Copy the next `out.len()` keystream bytes into `out`.
    pub(crate) fn fill(&mut self, out: &mut [u8]) {
        let mut done = 0;
        while done < out.len() {
            let ks = self.next(out.len() - done);
            out[done..done + ks.len()].copy_from_slice(ks);
            done += ks.len();
        }
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Keystream {
    fn drop(&mut self) {
        self.buffer.zeroize();
        self.pos.zeroize();
        self.len.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BLOCK_SIZE;

    const KEY: [u8; 16] = [7; 16];
    const IV: [u8; 8] = [9; 8];

    fn stream(variant: Variant) -> Keystream {
        Keystream::new(Engine::new(variant, &KEY, &IV))
    }

    #[test]
    fn leftovers_are_consumed_first() {
        let mut whole = [0u8; 3 * BATCH_SIZE];
        stream(Variant::Fast).fill(&mut whole);

        let mut ks = stream(Variant::Fast);
        let mut pieces = [0u8; 3 * BATCH_SIZE];
        let mut pos = 0;
        for len in [1, 19, 20, 300, 0, 341, 339].iter().cycle() {
            let end = (pos + len).min(pieces.len());
            ks.fill(&mut pieces[pos..end]);
            pos = end;
            if pos == pieces.len() {
                break;
            }
        }
        assert_eq!(pieces[..], whole[..]);
    }

    #[test]
    fn buffered_tracks_chunk_boundaries() {
        let mut ks = stream(Variant::Table);
        assert_eq!(ks.buffered(), 0);
        ks.fill(&mut [0u8; 7]);
        assert_eq!(ks.buffered(), BLOCK_SIZE - 7);
        ks.fill(&mut [0u8; 13]);
        assert_eq!(ks.buffered(), 0);

        let mut ks = stream(Variant::Fast);
        ks.fill(&mut [0u8; 7]);
        assert_eq!(ks.buffered(), BATCH_SIZE - 7);
    }

    #[test]
    fn apply_variants_agree() {
        let data: [u8; 100] = core::array::from_fn(|i| i as u8);

        let mut out = [0u8; 100];
        stream(Variant::Reference).apply(&data, &mut out);

        let mut in_place = data;
        stream(Variant::Reference).apply_in_place(&mut in_place);
        assert_eq!(out, in_place);

        let mut raw = [0u8; 100];
        stream(Variant::Reference).fill(&mut raw);
        for i in 0..data.len() {
            assert_eq!(out[i], data[i] ^ raw[i]);
        }
    }
}
