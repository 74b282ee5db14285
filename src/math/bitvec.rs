//! Fixed-length bit vectors backed by 64-bit words.
//!
//! Bit `i` lives in word `i / 64` at position `i % 64` (LSB-first within a
//! word). Bits past `len` in the last word are always zero, so the derived
//! `PartialEq` and `Hash` see exactly one representation per value.

use serde::{Deserialize, Serialize};

/// Fixed-length sequence of bits over 64-bit word storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
}

impl BitVector {
    /// All-zero vector of `len` bits.
    pub fn zero(len: usize) -> Self {
        Self {
            words: vec![0; word_count(len)],
            len,
        }
    }

    /// Build a vector of `len` bits from word storage.
    ///
    /// The word vector is resized to the exact storage `len` requires and any
    /// bits past `len` in the last word are cleared.
    pub fn from_words(mut words: Vec<u64>, len: usize) -> Self {
        words.resize(word_count(len), 0);
        let mut v = Self { words, len };
        v.mask_tail();
        v
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has zero bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing words, tail bits zeroed.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Consume the vector, yielding its word storage.
    pub fn into_words(self) -> Vec<u64> {
        self.words
    }

    /// Read bit `i`.
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        (self.words[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Write bit `i`.
    pub fn set(&mut self, i: usize, value: bool) {
        debug_assert!(i < self.len);
        let mask = 1u64 << (i % 64);
        if value {
            self.words[i / 64] |= mask;
        } else {
            self.words[i / 64] &= !mask;
        }
    }

    /// GF(2) inner product: parity of the bitwise AND of two equal-length
    /// vectors.
    pub fn dot(&self, other: &BitVector) -> bool {
        debug_assert_eq!(self.len, other.len);
        let folded = self
            .words
            .iter()
            .zip(&other.words)
            .fold(0u64, |acc, (a, b)| acc ^ (a & b));
        folded.count_ones() % 2 == 1
    }

    fn mask_tail(&mut self) {
        let tail_bits = self.len % 64;
        if tail_bits != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << tail_bits) - 1;
            }
        }
    }
}

fn word_count(len: usize) -> usize {
    (len + 63) / 64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_expected_storage() {
        let v = BitVector::zero(130);
        assert_eq!(v.len(), 130);
        assert_eq!(v.words(), &[0, 0, 0]);
        assert!(!v.is_empty());
        assert!(BitVector::zero(0).is_empty());
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut v = BitVector::zero(80);
        v.set(0, true);
        v.set(63, true);
        v.set(64, true);
        assert!(v.get(0));
        assert!(v.get(63));
        assert!(v.get(64));
        assert!(!v.get(1));

        v.set(63, false);
        assert!(!v.get(63));
        assert_eq!(v.words()[0], 1);
        assert_eq!(v.words()[1], 1);
    }

    #[test]
    fn test_from_words_masks_tail() {
        // 68 bits: the last word keeps only its low 4 bits.
        let v = BitVector::from_words(vec![u64::MAX, u64::MAX], 68);
        assert_eq!(v.words()[0], u64::MAX);
        assert_eq!(v.words()[1], 0xF);

        // Canonical form makes equality structural.
        let w = BitVector::from_words(vec![u64::MAX, 0xF], 68);
        assert_eq!(v, w);
    }

    #[test]
    fn test_from_words_resizes_storage() {
        let v = BitVector::from_words(vec![7], 128);
        assert_eq!(v.words(), &[7, 0]);
        let w = BitVector::from_words(vec![7, 9, 11], 64);
        assert_eq!(w.words(), &[7]);
    }

    #[test]
    fn test_dot_is_and_parity() {
        let a = BitVector::from_words(vec![0b1011], 64);
        let b = BitVector::from_words(vec![0b1110], 64);
        // AND = 0b1010, two bits set, even parity.
        assert!(!a.dot(&b));

        let c = BitVector::from_words(vec![0b0100], 64);
        assert!(b.dot(&c));

        // Parity folds across word boundaries.
        let d = BitVector::from_words(vec![1, 1], 128);
        let e = BitVector::from_words(vec![1, 0], 128);
        assert!(!d.dot(&d));
        assert!(d.dot(&e));
    }
}
