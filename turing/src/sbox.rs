//! Fixed and keyed S-box word transforms.

use crate::{
    tables::{QBOX, SBOX},
    word::{byte, lane, lane_mask},
};

#[cfg(feature = "zeroize")]
use cipher::zeroize::Zeroize;

/// Unkeyed word transform applied to key and IV words during setup.
pub(crate) fn fixed_s(mut w: u32) -> u32 {
    for pos in 0..4 {
        let b = SBOX[byte(w, pos) as usize];
        let q = QBOX[b as usize].rotate_left(8 * pos as u32);
        w = ((w ^ q) & lane_mask(pos)) | lane(b, pos);
    }
    w
}

/// Keyed transform computed directly from the key schedule.
///
/// `w` is rotated left by `rotation` bits before being split into bytes.
pub(crate) fn keyed_s(key: &[u32], w: u32, rotation: u32) -> u32 {
    let mut b = w.rotate_left(rotation).to_be_bytes();
    let mut ws = [0u32; 4];
    for (i, &k) in key.iter().enumerate() {
        for pos in 0..4 {
            b[pos] = SBOX[(byte(k, pos) ^ b[pos]) as usize];
            ws[pos] ^= QBOX[b[pos] as usize].rotate_left(i as u32 + 8 * pos as u32);
        }
    }
    let mut out = 0;
    for pos in 0..4 {
        out ^= (ws[pos] & lane_mask(pos)) | lane(b[pos], pos);
    }
    out
}

/// Four 256-entry tables holding every value of the keyed transform, one
/// per byte position.
#[derive(Clone)]
pub(crate) struct KeyedTables([[u32; 256]; 4]);

impl KeyedTables {
    pub(crate) fn new(key: &[u32]) -> Self {
        let mut tables = [[0u32; 256]; 4];
        for (pos, table) in tables.iter_mut().enumerate() {
            for (x, entry) in table.iter_mut().enumerate() {
                let mut k = x as u8;
                let mut w = 0u32;
                for (i, &kw) in key.iter().enumerate() {
                    k = SBOX[(byte(kw, pos) ^ k) as usize];
                    w ^= QBOX[k as usize].rotate_left(i as u32 + 8 * pos as u32);
                }
                *entry = (w & lane_mask(pos)) | lane(k, pos);
            }
        }
        Self(tables)
    }

    /// Table form of [`keyed_s`].
    #[inline(always)]
    pub(crate) fn apply(&self, w: u32, rotation: u32) -> u32 {
        let b = w.rotate_left(rotation).to_be_bytes();
        self.0[0][b[0] as usize]
            ^ self.0[1][b[1] as usize]
            ^ self.0[2][b[2] as usize]
            ^ self.0[3][b[3] as usize]
    }

    /// [`KeyedTables::apply`] with a rotation of `8 * R` bits, folded into
    /// the choice of which byte feeds which table.
    #[inline(always)]
    pub(crate) fn lookup<const R: usize>(&self, w: u32) -> u32 {
        let b = w.to_be_bytes();
        self.0[0][b[R % 4] as usize]
            ^ self.0[1][b[(R + 1) % 4] as usize]
            ^ self.0[2][b[(R + 2) % 4] as usize]
            ^ self.0[3][b[(R + 3) % 4] as usize]
    }
}

#[cfg(feature = "zeroize")]
impl Drop for KeyedTables {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u32; 3] = [0x0102_0304, 0xdead_beef, 0x7f00_ff80];

    const SAMPLES: [u32; 6] = [
        0,
        0xffff_ffff,
        0x1234_5678,
        0x8000_0001,
        0xcafe_babe,
        0x0f1e_2d3c,
    ];

    #[test]
    fn fixed_s_is_injective_on_lanes() {
        // Varying a single input byte must change the output.
        for pos in 0..4 {
            let mut outs = [0u32; 256];
            for x in 0..=255u8 {
                outs[x as usize] = fixed_s(lane(x, pos) | (0x5a5a_5a5a & lane_mask(pos)));
            }
            for (i, a) in outs.iter().enumerate() {
                assert!(outs[i + 1..].iter().all(|b| a != b));
            }
        }
    }

    #[test]
    fn tables_match_direct_computation() {
        let tables = KeyedTables::new(&KEY);
        for &w in SAMPLES.iter() {
            for rotation in [0, 8, 16, 24] {
                assert_eq!(tables.apply(w, rotation), keyed_s(&KEY, w, rotation));
            }
            assert_eq!(tables.lookup::<0>(w), keyed_s(&KEY, w, 0));
            assert_eq!(tables.lookup::<1>(w), keyed_s(&KEY, w, 8));
            assert_eq!(tables.lookup::<2>(w), keyed_s(&KEY, w, 16));
            assert_eq!(tables.lookup::<3>(w), keyed_s(&KEY, w, 24));
        }
    }

    #[test]
    fn keyed_s_depends_on_key() {
        let other = [0x0102_0304, 0xdead_beef, 0x7f00_ff81];
        let differs = SAMPLES
            .iter()
            .any(|&w| keyed_s(&KEY, w, 0) != keyed_s(&other, w, 0));
        assert!(differs);
    }
}
