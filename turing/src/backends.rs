use core::{fmt, str::FromStr};

use cfg_if::cfg_if;

use crate::{
    errors::Error,
    state::{pht, Register},
    word::store_be,
    BATCH_SIZE, BLOCK_SIZE,
};

mod fast;
mod reference;
mod table;

pub(crate) use self::{fast::Fast, reference::Reference, table::Table};

/// Register words feeding the nonlinear filter, as logical indices.
const TAPS: [usize; 5] = [16, 13, 6, 1, 0];
/// Rotation applied before each keyed S-box.
const ROTATIONS: [u32; 5] = [0, 8, 16, 24, 0];
/// Register words added after the three intermediate clocks.
const MIXES: [usize; 5] = [14, 12, 8, 1, 0];

/// Source of raw keystream.
pub(crate) trait Generator {
    /// Bytes written by each call to [`Generator::generate`].
    const CHUNK_SIZE: usize;

    /// Write the next `CHUNK_SIZE` keystream bytes into `buf`.
    fn generate(&mut self, buf: &mut [u8]);
}

/// One output round on a shifting register, producing five words.
#[inline(always)]
fn round(register: &mut Register, keyed_s: impl Fn(u32, u32) -> u32, out: &mut [u8]) {
    register.step();
    let mut v = TAPS.map(|i| register.0[i]);
    pht(&mut v);
    for (w, rotation) in v.iter_mut().zip(ROTATIONS) {
        *w = keyed_s(*w, rotation);
    }
    pht(&mut v);
    register.step();
    register.step();
    register.step();
    for (w, i) in v.iter_mut().zip(MIXES) {
        *w = w.wrapping_add(register.0[i]);
    }
    register.step();
    store_be(&v, out);
}

/// Interchangeable realizations of the cipher. All of them produce the
/// same keystream for the same key and IV.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Keyed S-box evaluated directly from the key schedule, one 20-byte
    /// block per round.
    Reference,
    /// Keyed S-box precomputed into lookup tables, one 20-byte block per
    /// round.
    Table,
    /// Table lookups on a register that is never shifted, producing 17
    /// rounds (340 bytes) at a time.
    Fast,
}

cfg_if! {
    if #[cfg(turing_backend = "reference")] {
        const DEFAULT_VARIANT: Variant = Variant::Reference;
    } else if #[cfg(turing_backend = "table")] {
        const DEFAULT_VARIANT: Variant = Variant::Table;
    } else {
        const DEFAULT_VARIANT: Variant = Variant::Fast;
    }
}

impl Default for Variant {
    fn default() -> Self {
        DEFAULT_VARIANT
    }
}

impl Variant {
    /// Every variant, slowest first.
    pub const ALL: [Variant; 3] = [Variant::Reference, Variant::Table, Variant::Fast];

    /// Name under which this variant is registered.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Reference => "ReferenceTuring",
            Variant::Table => "TableTuring",
            Variant::Fast => "FastTuring",
        }
    }

    /// Size of the chunks in which this variant produces keystream.
    #[must_use]
    pub const fn chunk_size(self) -> usize {
        match self {
            Variant::Reference => Reference::CHUNK_SIZE,
            Variant::Table => Table::CHUNK_SIZE,
            Variant::Fast => Fast::CHUNK_SIZE,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts the registered names; plain `"Turing"` selects the
    /// reference variant.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Turing" | "ReferenceTuring" => Ok(Variant::Reference),
            "TableTuring" => Ok(Variant::Table),
            "FastTuring" => Ok(Variant::Fast),
            _ => Err(Error::UnknownVariant),
        }
    }
}

/// Keystream engine of a particular variant.
#[derive(Clone)]
pub(crate) enum Engine {
    Reference(Reference),
    Table(Table),
    Fast(Fast),
}

impl Engine {
    /// `key` and `iv` must already have valid lengths.
    pub(crate) fn new(variant: Variant, key: &[u8], iv: &[u8]) -> Self {
        match variant {
            Variant::Reference => Engine::Reference(Reference::new(key, iv)),
            Variant::Table => Engine::Table(Table::new(key, iv)),
            Variant::Fast => Engine::Fast(Fast::new(key, iv)),
        }
    }

    pub(crate) fn variant(&self) -> Variant {
        match self {
            Engine::Reference(_) => Variant::Reference,
            Engine::Table(_) => Variant::Table,
            Engine::Fast(_) => Variant::Fast,
        }
    }

    /// Produce the next chunk into the front of `buf`, returning its length.
    pub(crate) fn generate(&mut self, buf: &mut [u8; BATCH_SIZE]) -> usize {
        fn fill<G: Generator>(g: &mut G, buf: &mut [u8]) -> usize {
            g.generate(&mut buf[..G::CHUNK_SIZE]);
            G::CHUNK_SIZE
        }

        match self {
            Engine::Reference(g) => fill(g, buf),
            Engine::Table(g) => fill(g, buf),
            Engine::Fast(g) => fill(g, buf),
        }
    }
}

const _: () = assert!(BATCH_SIZE % BLOCK_SIZE == 0);
