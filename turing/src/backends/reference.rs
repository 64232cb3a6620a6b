use super::{round, Generator};
use crate::{
    sbox::keyed_s,
    state::{KeySchedule, Register},
    BLOCK_SIZE,
};

/// Direct evaluation of the keyed S-box on every use.
#[derive(Clone)]
pub(crate) struct Reference {
    key: KeySchedule,
    register: Register,
}

impl Reference {
    pub(crate) fn new(key: &[u8], iv: &[u8]) -> Self {
        let key = KeySchedule::new(key);
        let register = Register::load(&key, iv, |w| keyed_s(key.words(), w, 0));
        Self { key, register }
    }
}

impl Generator for Reference {
    const CHUNK_SIZE: usize = BLOCK_SIZE;

    fn generate(&mut self, buf: &mut [u8]) {
        let key = self.key.words();
        round(&mut self.register, |w, r| keyed_s(key, w, r), buf);
    }
}
