//! Mathematical primitives for the envelope encryption pipeline.
//!
//! - **Bit vectors** backed by 64-bit words, the trapdoor function's
//!   input/output representation
//! - **Affine maps over GF(2)**, used for the public key's derived map `m`,
//!   its complexity chain, and as a concrete trapdoor in tests

pub mod bitvec;
pub mod gf2;

pub use bitvec::BitVector;
pub use gf2::Gf2Map;
