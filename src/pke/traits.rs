//! Capability traits at the pipeline's interface boundary.
//!
//! The trapdoor function's algebra and the private-key internals live
//! outside this crate; the pipeline sees only the narrow operations below.

use crate::math::{BitVector, Gf2Map};

/// Deterministic, pure map from a fixed-width bit vector to a fixed-width
/// bit vector. One `apply` call is one trapdoor evaluation.
pub trait TrapdoorFunction {
    /// Required input width in bits.
    fn input_len(&self) -> usize;

    /// Evaluate the function. `input` must be exactly [`input_len`] bits;
    /// callers validate before invoking.
    ///
    /// [`input_len`]: TrapdoorFunction::input_len
    fn apply(&self, input: &BitVector) -> BitVector;
}

impl TrapdoorFunction for Gf2Map {
    fn input_len(&self) -> usize {
        self.input_len()
    }

    fn apply(&self, input: &BitVector) -> BitVector {
        self.apply(input)
    }
}

/// Construction-time view of a private key: matrix dimensions plus the
/// embedding that lifts a plain map into trapdoor form.
pub trait PrivateKey {
    /// Trapdoor form produced by [`embed`](PrivateKey::embed).
    type Trapdoor: TrapdoorFunction;

    /// Output dimension (rows of the defining matrix).
    fn rows(&self) -> usize;

    /// Input dimension (columns of the defining matrix).
    fn cols(&self) -> usize;

    /// Lift `map` into trapdoor form.
    fn embed(&self, map: &Gf2Map) -> Self::Trapdoor;
}
