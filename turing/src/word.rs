//! Big-endian word helpers.
//!
//! Turing numbers the bytes of a word from the most significant end, so
//! byte 0 of `0x12345678` is `0x12`.

/// Byte `pos` of `w`, counted from the most significant byte.
#[inline(always)]
pub(crate) const fn byte(w: u32, pos: usize) -> u8 {
    (w >> (24 - 8 * pos)) as u8
}

/// Mask which clears byte lane `pos` of a word.
#[inline(always)]
pub(crate) const fn lane_mask(pos: usize) -> u32 {
    !(0xff00_0000 >> (8 * pos))
}

/// Place `b` into byte lane `pos` of an otherwise empty word.
#[inline(always)]
pub(crate) const fn lane(b: u8, pos: usize) -> u32 {
    (b as u32) << (24 - 8 * pos)
}

/// Fill `words` from big-endian groups of four bytes.
#[inline]
pub(crate) fn load_be(bytes: &[u8], words: &mut [u32]) {
    debug_assert_eq!(bytes.len(), 4 * words.len());
    for (w, c) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_be_bytes([c[0], c[1], c[2], c[3]]);
    }
}

/// Serialize `words` big-endian into `out`.
#[inline]
pub(crate) fn store_be(words: &[u32], out: &mut [u8]) {
    debug_assert_eq!(out.len(), 4 * words.len());
    for (c, w) in out.chunks_exact_mut(4).zip(words) {
        c.copy_from_slice(&w.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_most_significant_first() {
        let w = 0xcafe_babe;
        assert_eq!(
            [byte(w, 0), byte(w, 1), byte(w, 2), byte(w, 3)],
            [0xca, 0xfe, 0xba, 0xbe]
        );
        assert_eq!(lane_mask(0), 0x00ff_ffff);
        assert_eq!(lane_mask(2), 0xffff_00ff);
        assert_eq!(lane(0xab, 1), 0x00ab_0000);
        assert_eq!(lane(0xab, 3), 0x0000_00ab);
    }

    #[test]
    fn rotation_moves_bytes_forward() {
        let w = 0x1234_5678u32;
        for r in 0..4 {
            for pos in 0..4 {
                assert_eq!(byte(w.rotate_left(8 * r as u32), pos), byte(w, (pos + r) % 4));
            }
        }
    }

    #[test]
    fn load_and_store() {
        let mut words = [0u32; 2];
        load_be(&[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0], &mut words);
        assert_eq!(words, [0x1234_5678, 0x9abc_def0]);

        let mut out = [0u8; 8];
        store_be(&words, &mut out);
        assert_eq!(out, [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0]);
    }
}
