//! Padding capability for block alignment.
//!
//! The block pipeline consumes plaintext in fixed-width blocks; a
//! [`PaddingStrategy`] stretches an arbitrary byte sequence to a
//! block-aligned length before chunking.

use serde::{Deserialize, Serialize};

/// Pads a byte sequence to a block-aligned length.
///
/// Contract: the output length is a non-negative multiple of the pipeline's
/// block byte-width, and never shorter than the input. The pipeline verifies
/// both and fails rather than producing a misaligned ciphertext.
pub trait PaddingStrategy {
    /// Pad `data` for block-wise encryption.
    fn pad(&self, data: &[u8]) -> Vec<u8>;
}

/// Pads with `0x00` bytes up to the next multiple of `block_bytes`.
///
/// An empty input pads to one full block, so every plaintext yields at least
/// one ciphertext block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZeroPaddingStrategy {
    block_bytes: usize,
}

impl ZeroPaddingStrategy {
    /// Strategy aligned to `block_bytes`-byte blocks. `block_bytes` must be
    /// positive.
    pub fn new(block_bytes: usize) -> Self {
        debug_assert!(block_bytes > 0);
        Self { block_bytes }
    }

    /// Alignment width in bytes.
    pub fn block_bytes(&self) -> usize {
        self.block_bytes
    }
}

impl PaddingStrategy for ZeroPaddingStrategy {
    fn pad(&self, data: &[u8]) -> Vec<u8> {
        let mut blocks = (data.len() + self.block_bytes - 1) / self.block_bytes;
        if blocks == 0 {
            blocks = 1;
        }
        let mut padded = data.to_vec();
        padded.resize(blocks * self.block_bytes, 0);
        padded
    }
}
