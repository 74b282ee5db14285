//! Block pipeline and envelope assembly.
//!
//! Bytes are packed into 64-bit words big-endian, matching the layout the
//! padding strategy produced. Every trapdoor evaluation in the crate routes
//! through [`PublicKey::encrypt_block`], so the byte pipeline and the length
//! path share identical block semantics.

use byteorder::{BigEndian, ByteOrder};
use rand::RngCore;
use tracing::{debug, trace};

use crate::math::BitVector;
use crate::padding::PaddingStrategy;

use super::error::{PkeError, Result};
use super::traits::TrapdoorFunction;
use super::types::{Ciphertext, PublicKey};

const WORD_BYTES: usize = 8;

impl<F, P> PublicKey<F, P>
where
    F: TrapdoorFunction,
    P: PaddingStrategy,
{
    /// Encrypt a plaintext byte sequence block-wise.
    ///
    /// Pads, chunks into [`block_bytes`]-byte blocks, and applies the
    /// trapdoor function once per block. The first half of each block's
    /// words carries payload; the upper half stays zero (reserved capacity,
    /// deliberately not randomized to keep the wire format stable).
    ///
    /// Deterministic: identical padded input always yields identical output.
    ///
    /// [`block_bytes`]: PublicKey::block_bytes
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.ensure_block_width()?;
        let padded = self.padding_strategy().pad(plaintext);
        if padded.len() < plaintext.len() {
            return Err(PkeError::InvalidArgument(format!(
                "padding strategy shrank the input from {} to {} bytes",
                plaintext.len(),
                padded.len()
            )));
        }

        let block_bytes = self.block_bytes();
        let trailing = padded.len() % block_bytes;
        if trailing != 0 {
            // Padding and block width disagree. A configuration defect, not
            // a data fault.
            return Err(PkeError::LengthMismatch {
                expected_bits: self.encrypter().input_len(),
                actual_bits: trailing * 8,
            });
        }

        let longs_per_block = self.longs_per_block();
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(block_bytes) {
            let mut block = vec![0u64; self.words_per_block()];
            for (i, word) in block.iter_mut().take(longs_per_block).enumerate() {
                *word = BigEndian::read_u64(&chunk[i * WORD_BYTES..(i + 1) * WORD_BYTES]);
            }
            // Upper half stays zero.

            let ciphertext_words = self.encrypt_block(&block)?;
            let start = out.len();
            out.resize(start + ciphertext_words.len() * WORD_BYTES, 0);
            BigEndian::write_u64_into(&ciphertext_words, &mut out[start..]);
        }
        trace!(
            plaintext_len = plaintext.len(),
            padded_len = padded.len(),
            blocks = padded.len() / block_bytes,
            "encrypted byte sequence"
        );
        Ok(out)
    }

    /// Encrypt one exact-width word block: the single point where "one
    /// trapdoor evaluation" is defined.
    ///
    /// `block` must hold [`words_per_block`] words, i.e. exactly the
    /// trapdoor's input width; anything else fails
    /// [`PkeError::LengthMismatch`].
    ///
    /// [`words_per_block`]: PublicKey::words_per_block
    pub fn encrypt_block(&self, block: &[u64]) -> Result<Vec<u64>> {
        let expected_bits = self.encrypter().input_len();
        let actual_bits = block.len() * 64;
        if actual_bits != expected_bits {
            return Err(PkeError::LengthMismatch {
                expected_bits,
                actual_bits,
            });
        }

        let input = BitVector::from_words(block.to_vec(), expected_bits);
        Ok(self.encrypter().apply(&input).into_words())
    }

    /// Encrypt `plaintext` into a ciphertext envelope.
    ///
    /// Alongside the payload ciphertext, a single-block length descriptor is
    /// encrypted: word 0 holds the plaintext byte length, every remaining
    /// word fresh filler drawn from `rng` on each call, so repeated
    /// encryptions of the same message never share a length ciphertext.
    ///
    /// Length hiding is partial: the descriptor is obfuscated, but the
    /// payload ciphertext's own size still scales with the plaintext.
    pub fn encrypt_into_envelope<R>(&self, plaintext: &[u8], rng: &mut R) -> Result<Ciphertext>
    where
        R: RngCore + ?Sized,
    {
        self.ensure_block_width()?;
        let mut descriptor = vec![0u64; self.words_per_block()];
        descriptor[0] = plaintext.len() as u64;
        for word in descriptor.iter_mut().skip(1) {
            *word = rng.next_u64();
        }

        let contents = self.encrypt(plaintext)?;
        let length_words = self.encrypt_block(&descriptor)?;
        let mut length = vec![0u8; length_words.len() * WORD_BYTES];
        BigEndian::write_u64_into(&length_words, &mut length);

        debug!(
            plaintext_len = plaintext.len(),
            contents_len = contents.len(),
            "assembled ciphertext envelope"
        );
        Ok(Ciphertext::new(contents, length))
    }

    // A zero-width block makes every subsequent width check vacuous. The
    // derivation constructors reject it, but `from_parts` accepts fields
    // verbatim, so the pipeline re-checks before any block arithmetic.
    fn ensure_block_width(&self) -> Result<()> {
        if self.longs_per_block() == 0 {
            return Err(PkeError::LengthMismatch {
                expected_bits: self.encrypter().input_len(),
                actual_bits: 0,
            });
        }
        Ok(())
    }
}
