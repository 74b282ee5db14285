//! Public key and ciphertext envelope types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::Gf2Map;
use crate::padding::{PaddingStrategy, ZeroPaddingStrategy};

use super::error::{PkeError, Result};
use super::traits::{PrivateKey, TrapdoorFunction};

/// Trapdoor input bits spanned by one payload long: 64 payload bits plus the
/// 64 reserved bits that shadow it in the block's upper half.
pub const BITS_PER_BLOCK_LONG: usize = 128;

/// Public key for envelope encryption.
///
/// Immutable once constructed; safe to share and invoke concurrently.
/// `F` is the trapdoor function evaluated per block, `P` the padding
/// strategy applied before chunking.
///
/// Serialized as a record with the wire field names `encrypter`, `m`,
/// `complexity-chain`, `padding-strategy`, `longs-per-block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey<F, P> {
    encrypter: F,
    m: Gf2Map,
    #[serde(rename = "complexity-chain")]
    complexity_chain: Vec<Gf2Map>,
    #[serde(rename = "padding-strategy")]
    padding_strategy: P,
    #[serde(rename = "longs-per-block")]
    longs_per_block: usize,
}

impl<F, P> PublicKey<F, P>
where
    F: TrapdoorFunction,
    P: PaddingStrategy,
{
    /// Reassemble a public key from serialized components, verbatim and
    /// without recomputation.
    pub fn from_parts(
        encrypter: F,
        m: Gf2Map,
        complexity_chain: Vec<Gf2Map>,
        padding_strategy: P,
        longs_per_block: usize,
    ) -> Self {
        Self {
            encrypter,
            m,
            complexity_chain,
            padding_strategy,
            longs_per_block,
        }
    }

    /// Derive a public key from a private key, with an explicit padding
    /// strategy.
    ///
    /// Builds the truncated-identity map `m`, lifts it into trapdoor form
    /// through the private key, and derives the block-size parameter from
    /// the trapdoor's input width. Fails with [`PkeError::Construction`] on
    /// degenerate dimensions.
    pub fn from_private_key_with_padding<K>(key: &K, padding_strategy: P) -> Result<Self>
    where
        K: PrivateKey<Trapdoor = F>,
    {
        let (encrypter, m, longs_per_block) = derive_parts(key)?;
        Ok(Self {
            encrypter,
            m,
            complexity_chain: Vec::new(),
            padding_strategy,
            longs_per_block,
        })
    }

    /// Trapdoor function used for all block evaluations.
    pub fn encrypter(&self) -> &F {
        &self.encrypter
    }

    /// Derived map `m` from key derivation. Carried for interchange and
    /// equality; not used after construction.
    pub fn m(&self) -> &Gf2Map {
        &self.m
    }

    /// Obfuscation layers from key derivation, possibly empty. Opaque to the
    /// encryption pipeline.
    pub fn complexity_chain(&self) -> &[Gf2Map] {
        &self.complexity_chain
    }

    /// Padding strategy applied before chunking.
    pub fn padding_strategy(&self) -> &P {
        &self.padding_strategy
    }

    /// Payload words per block; the trapdoor input spans
    /// `longs_per_block * 128` bits.
    pub fn longs_per_block(&self) -> usize {
        self.longs_per_block
    }

    /// Words per trapdoor input block: the payload half plus the reserved
    /// half.
    pub fn words_per_block(&self) -> usize {
        2 * self.longs_per_block
    }

    /// Plaintext bytes consumed per block.
    pub fn block_bytes(&self) -> usize {
        16 * self.longs_per_block
    }
}

impl<F> PublicKey<F, ZeroPaddingStrategy>
where
    F: TrapdoorFunction,
{
    /// Derive a public key from a private key with a default zero-padding
    /// strategy aligned to the derived block width.
    pub fn from_private_key<K>(key: &K) -> Result<Self>
    where
        K: PrivateKey<Trapdoor = F>,
    {
        let (encrypter, m, longs_per_block) = derive_parts(key)?;
        let padding_strategy = ZeroPaddingStrategy::new(16 * longs_per_block);
        Ok(Self {
            encrypter,
            m,
            complexity_chain: Vec::new(),
            padding_strategy,
            longs_per_block,
        })
    }
}

fn derive_parts<K>(key: &K) -> Result<(K::Trapdoor, Gf2Map, usize)>
where
    K: PrivateKey,
{
    let input_len = key.cols();
    let output_len = key.rows();
    if input_len == 0 || output_len == 0 {
        return Err(PkeError::Construction(format!(
            "degenerate key dimensions: {output_len} rows x {input_len} cols"
        )));
    }
    // The derived map truncates the identity, so the key matrix cannot have
    // more rows than columns.
    if output_len > input_len {
        return Err(PkeError::Construction(format!(
            "cannot truncate the identity from {input_len} inputs to {output_len} outputs"
        )));
    }

    let m = Gf2Map::truncated_identity(input_len, output_len);
    let encrypter = key.embed(&m);

    let trapdoor_bits = encrypter.input_len();
    let longs_per_block = trapdoor_bits / BITS_PER_BLOCK_LONG;
    if longs_per_block == 0 {
        return Err(PkeError::Construction(format!(
            "trapdoor input width {trapdoor_bits} bits is narrower than one block"
        )));
    }
    debug!(
        input_len,
        output_len, trapdoor_bits, longs_per_block, "derived public key from private key"
    );
    Ok((encrypter, m, longs_per_block))
}

// Field order fixed for hash stability across releases: complexity chain,
// encrypter, longs per block, m, padding strategy.
impl<F: Hash, P: Hash> Hash for PublicKey<F, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.complexity_chain.hash(state);
        self.encrypter.hash(state);
        self.longs_per_block.hash(state);
        self.m.hash(state);
        self.padding_strategy.hash(state);
    }
}

/// Result of one envelope encryption call: payload ciphertext plus the
/// encrypted, randomized length descriptor. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    contents: Vec<u8>,
    length: Vec<u8>,
}

impl Ciphertext {
    /// Bundle payload and length ciphertexts.
    pub fn new(contents: Vec<u8>, length: Vec<u8>) -> Self {
        Self { contents, length }
    }

    /// Payload ciphertext: one trapdoor output per plaintext block.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Length ciphertext: one trapdoor output over the length descriptor.
    pub fn length(&self) -> &[u8] {
        &self.length
    }
}
