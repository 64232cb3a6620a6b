use super::{round, Generator};
use crate::{
    sbox::KeyedTables,
    state::{KeySchedule, Register},
    BLOCK_SIZE,
};

/// Keyed S-box served from tables built once at setup.
#[derive(Clone)]
pub(crate) struct Table {
    tables: KeyedTables,
    register: Register,
}

impl Table {
    pub(crate) fn new(key: &[u8], iv: &[u8]) -> Self {
        let key = KeySchedule::new(key);
        let tables = KeyedTables::new(key.words());
        let register = Register::load(&key, iv, |w| tables.apply(w, 0));
        Self { tables, register }
    }
}

impl Generator for Table {
    const CHUNK_SIZE: usize = BLOCK_SIZE;

    fn generate(&mut self, buf: &mut [u8]) {
        let tables = &self.tables;
        round(&mut self.register, |w, r| tables.apply(w, r), buf);
    }
}
