use super::Generator;
use crate::{
    sbox::KeyedTables,
    state::{pht, KeySchedule, Register, REGISTER_WORDS},
    word::store_be,
    BATCH_SIZE, BLOCK_SIZE,
};

/// Offset of logical register word 0 at the start of each round of a
/// batch. Every round clocks the register five times, so after 17 rounds
/// the register is back where it started.
const ROUND_OFFSETS: [usize; REGISTER_WORDS] = [
    0, 5, 10, 15, 3, 8, 13, 1, 6, 11, 16, 4, 9, 14, 2, 7, 12,
];

/// Physical slot of logical word `k` when logical word 0 is at `z`.
#[inline(always)]
const fn slot(z: usize, k: usize) -> usize {
    (z + k) % REGISTER_WORDS
}

/// Table-driven generator which never shifts the register, emitting a
/// whole batch of rounds per call.
#[derive(Clone)]
pub(crate) struct Fast {
    tables: KeyedTables,
    register: Register,
}

impl Fast {
    pub(crate) fn new(key: &[u8], iv: &[u8]) -> Self {
        let key = KeySchedule::new(key);
        let tables = KeyedTables::new(key.words());
        let register = Register::load(&key, iv, |w| tables.lookup::<0>(w));
        Self { tables, register }
    }

    #[inline(always)]
    fn round(&mut self, z: usize, out: &mut [u8]) {
        let t = &self.tables;
        let r = &mut self.register;

        r.step_at(z);
        let z = z + 1;
        let mut v = [
            r.0[slot(z, 16)],
            r.0[slot(z, 13)],
            r.0[slot(z, 6)],
            r.0[slot(z, 1)],
            r.0[slot(z, 0)],
        ];
        pht(&mut v);
        v[0] = t.lookup::<0>(v[0]);
        v[1] = t.lookup::<1>(v[1]);
        v[2] = t.lookup::<2>(v[2]);
        v[3] = t.lookup::<3>(v[3]);
        v[4] = t.lookup::<0>(v[4]);
        pht(&mut v);

        r.step_at(z);
        r.step_at(z + 1);
        r.step_at(z + 2);
        let z = z + 3;
        v[0] = v[0].wrapping_add(r.0[slot(z, 14)]);
        v[1] = v[1].wrapping_add(r.0[slot(z, 12)]);
        v[2] = v[2].wrapping_add(r.0[slot(z, 8)]);
        v[3] = v[3].wrapping_add(r.0[slot(z, 1)]);
        v[4] = v[4].wrapping_add(r.0[slot(z, 0)]);
        r.step_at(z);

        store_be(&v, out);
    }
}

impl Generator for Fast {
    const CHUNK_SIZE: usize = BATCH_SIZE;

    fn generate(&mut self, buf: &mut [u8]) {
        for (&z, out) in ROUND_OFFSETS.iter().zip(buf.chunks_exact_mut(BLOCK_SIZE)) {
            self.round(z, out);
        }
    }
}
