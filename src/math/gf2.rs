//! Affine maps over GF(2).
//!
//! A [`Gf2Map`] sends an `input_len`-bit vector `x` to an `output_len`-bit
//! vector whose bit `i` is `(row_i · x) ⊕ c_i`, with `·` the GF(2) inner
//! product. The public key carries such maps as its derived map `m` and its
//! complexity chain; tests also use them as deterministic stand-ins for the
//! trapdoor function.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::bitvec::BitVector;

/// Affine map over GF(2): one row per output bit plus a constant vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gf2Map {
    input_len: usize,
    output_len: usize,
    rows: Vec<BitVector>,
    constants: BitVector,
}

impl Gf2Map {
    /// Identity map truncated from `input_len` inputs down to `output_len`
    /// outputs: output bit `i` mirrors input bit `i`.
    ///
    /// Requires `output_len <= input_len`.
    pub fn truncated_identity(input_len: usize, output_len: usize) -> Self {
        debug_assert!(output_len <= input_len);
        let rows = (0..output_len)
            .map(|i| {
                let mut row = BitVector::zero(input_len);
                row.set(i, true);
                row
            })
            .collect();
        Self {
            input_len,
            output_len,
            rows,
            constants: BitVector::zero(output_len),
        }
    }

    /// Sample a uniformly random affine map.
    pub fn random<R: RngCore + ?Sized>(input_len: usize, output_len: usize, rng: &mut R) -> Self {
        let rows = (0..output_len)
            .map(|_| BitVector::from_words(random_words(input_len, rng), input_len))
            .collect();
        let constants = BitVector::from_words(random_words(output_len, rng), output_len);
        Self {
            input_len,
            output_len,
            rows,
            constants,
        }
    }

    /// Input width in bits.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Output width in bits.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Evaluate the map at `input`, which must be `input_len` bits wide.
    pub fn apply(&self, input: &BitVector) -> BitVector {
        debug_assert_eq!(input.len(), self.input_len);
        let mut out = BitVector::zero(self.output_len);
        for (i, row) in self.rows.iter().enumerate() {
            out.set(i, row.dot(input) ^ self.constants.get(i));
        }
        out
    }
}

fn random_words<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Vec<u64> {
    (0..(bits + 63) / 64).map(|_| rng.next_u64()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_truncated_identity_truncates() {
        let m = Gf2Map::truncated_identity(128, 64);
        assert_eq!(m.input_len(), 128);
        assert_eq!(m.output_len(), 64);

        let x = BitVector::from_words(vec![0xDEAD_BEEF, 0xFFFF_FFFF], 128);
        let y = m.apply(&x);
        assert_eq!(y.words(), &[0xDEAD_BEEF]);
    }

    #[test]
    fn test_identity_fixes_zero() {
        let id = Gf2Map::truncated_identity(128, 128);
        assert_eq!(id.apply(&BitVector::zero(128)), BitVector::zero(128));
    }

    #[test]
    fn test_distinct_seeds_give_distinct_maps() {
        let mut rng_a = ChaCha20Rng::seed_from_u64(1);
        let mut rng_b = ChaCha20Rng::seed_from_u64(2);
        let f = Gf2Map::random(128, 128, &mut rng_a);
        let g = Gf2Map::random(128, 128, &mut rng_b);
        assert_ne!(f, g);
    }

    #[test]
    fn test_random_map_is_seed_deterministic() {
        let mut rng_a = ChaCha20Rng::seed_from_u64(42);
        let mut rng_b = ChaCha20Rng::seed_from_u64(42);
        let f = Gf2Map::random(256, 128, &mut rng_a);
        let g = Gf2Map::random(256, 128, &mut rng_b);
        assert_eq!(f, g);

        let x = BitVector::from_words(vec![1, 2, 3, 4], 256);
        assert_eq!(f.apply(&x), g.apply(&x));
    }
}
