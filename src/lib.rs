//! Envelope encryption over an opaque GF(2) trapdoor function.
//!
//! This crate implements the public-key side of an asymmetric scheme whose
//! security primitive is a vector-valued polynomial map over GF(2), treated
//! here as a black box behind the [`TrapdoorFunction`] trait. An arbitrary
//! plaintext byte sequence is padded, chunked into fixed-width blocks, and
//! pushed through one trapdoor evaluation per block; the result is bundled
//! with an encrypted, randomized length descriptor into a [`Ciphertext`]
//! envelope.
//!
//! Key components:
//! - `math`: word-backed bit vectors and affine GF(2) maps
//! - `padding`: the padding capability and a zero-padding implementation
//! - `pke`: the public key, the block pipeline, and envelope assembly
//!
//! The private-key side (key generation, decryption) is out of scope; it is
//! visible only through the construction-time [`PrivateKey`] capability.

pub mod math;
pub mod padding;
pub mod pke;

pub use math::{BitVector, Gf2Map};
pub use padding::{PaddingStrategy, ZeroPaddingStrategy};
pub use pke::{Ciphertext, PkeError, PrivateKey, PublicKey, Result, TrapdoorFunction};
