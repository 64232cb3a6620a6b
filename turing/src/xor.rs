//! Bulk XOR of a data buffer with keystream.

use core::mem::size_of;

const WORD: usize = size_of::<u64>();

#[inline(always)]
fn load(chunk: &[u8]) -> u64 {
    let mut w = [0u8; WORD];
    w.copy_from_slice(chunk);
    u64::from_ne_bytes(w)
}

/// `output[i] = input[i] ^ keystream[i]`, eight bytes at a time.
///
/// All three slices must have the same length.
pub(crate) fn xor_into(input: &[u8], keystream: &[u8], output: &mut [u8]) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(keystream.len(), output.len());

    let mut out = output.chunks_exact_mut(WORD);
    let mut inp = input.chunks_exact(WORD);
    let mut ks = keystream.chunks_exact(WORD);
    for ((o, i), k) in (&mut out).zip(&mut inp).zip(&mut ks) {
        o.copy_from_slice(&(load(i) ^ load(k)).to_ne_bytes());
    }

    let tail = out.into_remainder().iter_mut();
    for ((o, i), k) in tail.zip(inp.remainder()).zip(ks.remainder()) {
        *o = i ^ k;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_bytewise_xor() {
        let a: [u8; 64] = core::array::from_fn(|i| (i * 7 + 3) as u8);
        let b: [u8; 64] = core::array::from_fn(|i| (i * 13 + 101) as u8);
        for len in 0..=a.len() {
            let mut out = [0u8; 64];
            xor_into(&a[..len], &b[..len], &mut out[..len]);
            for i in 0..len {
                assert_eq!(out[i], a[i] ^ b[i]);
            }
            assert!(out[len..].iter().all(|&x| x == 0));
        }
    }

    #[test]
    fn unaligned_slices() {
        let a = [0xa5u8; 40];
        let b = [0x0fu8; 40];
        let mut out = [0u8; 40];
        xor_into(&a[1..30], &b[3..32], &mut out[5..34]);
        assert!(out[5..34].iter().all(|&x| x == 0xaa));
    }
}
