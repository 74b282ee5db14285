//! Public-key envelope encryption.
//!
//! The [`PublicKey`] owns the block pipeline: plaintext bytes are padded,
//! chunked into blocks, and run through one trapdoor evaluation each;
//! envelope assembly pairs the payload ciphertext with an encrypted,
//! randomized length descriptor.
//!
//! # Example
//!
//! ```ignore
//! use mq_pke::{PublicKey, ZeroPaddingStrategy};
//! use rand_chacha::ChaCha20Rng;
//! use rand::SeedableRng;
//!
//! let public_key = PublicKey::from_private_key(&private_key)?;
//! let mut rng = ChaCha20Rng::from_entropy();
//! let envelope = public_key.encrypt_into_envelope(b"attack at dawn", &mut rng)?;
//! ```

mod enc;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{PkeError, Result};
pub use traits::{PrivateKey, TrapdoorFunction};
pub use types::{Ciphertext, PublicKey, BITS_PER_BLOCK_LONG};
