//! DISCLAIMER: This library is a toy example of the MD5 (legacy) hash function in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes. Absolutely DO NOT use it
//! for real cryptographic or security-sensitive operations. It is broken and insecure.
//! If you need a secure hash, use a vetted, modern library (e.g. SHA-2 or SHA-3 from RustCrypto).
//!
//! Besides ordinary hashing, the engine can resume from an arbitrary chaining state and
//! bit count ([`Md5::from_state`]). That is exactly what a length-extension attack needs:
//! the digest of `secret || message` is enough to compute the digest of
//! `secret || message || glue || suffix` without knowing `secret`.
//!
//! ```
//! use md5lab::{md5_hex, Md5};
//!
//! assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let mut engine = Md5::new(b"ab");
//! engine.update(b"c");
//! assert_eq!(engine.hex_digest(), "900150983cd24fb0d6963f7d28e17f72");
//! ```
//!
//! An engine owns its state exclusively; `update` takes `&mut self`, so sharing one
//! across threads needs an external lock.

mod compress;
mod digest;
mod padding;
mod state;

use std::io;

use log::{debug, trace};

use crate::error::Result;

pub use digest::Md5Digest;
pub use padding::{glue_padding, padding_len};
pub use state::Md5State;

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The size of an MD5 input block in bytes (512 bits).
pub const MD5_BLOCK_SIZE: usize = 64;

/// The MD5 engine.
///
/// The digest is computed as soon as the engine is built and stored, so
/// [`Md5::digest`] never recomputes. [`Md5::update`] appends more input and
/// refreshes the stored digest.
#[derive(Debug, Clone)]
pub struct Md5 {
    /// Chaining state after every complete block fed so far.
    state: Md5State,
    /// Bytes of the current, incomplete block.
    buffer: [u8; MD5_BLOCK_SIZE],
    buffer_len: usize,
    /// Total message length in bits mod 2^64, including any resumption offset.
    bit_count: u64,
    digest: Md5Digest,
}

impl Md5 {
    /// Hashes `message` from the standard initial state.
    pub fn new(message: impl AsRef<[u8]>) -> Self {
        Self::from_state(Md5State::INITIAL, 0, message)
    }

    /// Hashes a message given as hex text.
    pub fn from_hex(message: &str) -> Result<Self> {
        Ok(Self::new(hex::decode(message)?))
    }

    /// Resumes hashing from `state`, as if `bit_offset` bits had already been folded in.
    ///
    /// `extra` starts on a fresh block; the offset only feeds the length field written
    /// during padding. With `state` and `bit_offset` taken from a finished digest of some
    /// message `m` (offset = bits of `m` plus its padding), the result equals
    /// `md5(m || glue_padding(m.len()) || extra)`.
    pub fn from_state(state: Md5State, bit_offset: u64, extra: impl AsRef<[u8]>) -> Self {
        let extra = extra.as_ref();
        if state != Md5State::INITIAL || bit_offset != 0 {
            debug!(
                "resuming md5 from state {:08x?} at bit offset {}",
                state.words(),
                bit_offset
            );
        }
        let mut engine = Self {
            state,
            buffer: [0u8; MD5_BLOCK_SIZE],
            buffer_len: 0,
            bit_count: bit_offset,
            digest: Md5Digest::from_state(&state),
        };
        engine.update(extra);
        engine
    }

    /// Returns a builder for configuring the initial state and bit offset.
    pub fn builder() -> Md5Builder {
        Md5Builder::new()
    }

    /// Appends `data` to the message and refreshes the digest.
    ///
    /// The length field always reflects every bit ever fed, plus the resumption offset.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let data = data.as_ref();
        self.absorb(data);
        self.digest = self.finish();
    }

    /// Appends hex-encoded data to the message.
    pub fn update_hex(&mut self, data: &str) -> Result<()> {
        let bytes = hex::decode(data)?;
        self.update(bytes);
        Ok(())
    }

    pub fn digest(&self) -> Md5Digest {
        self.digest
    }

    pub fn hex_digest(&self) -> String {
        self.digest.to_hex()
    }

    /// Total bits hashed mod 2^64, counting the resumption offset.
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }

    fn absorb(&mut self, mut data: &[u8]) {
        let fed = data.len();
        self.bit_count = self.bit_count.wrapping_add((fed as u64).wrapping_mul(8));

        // top up a partially filled block first
        if self.buffer_len > 0 {
            let take = (MD5_BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == MD5_BLOCK_SIZE {
                self.process_block_from_buffer();
            }
        }

        let mut blocks = data.chunks_exact(MD5_BLOCK_SIZE);
        for block in &mut blocks {
            compress::compress(&mut self.state, block);
        }
        let rest = blocks.remainder();
        self.buffer[self.buffer_len..self.buffer_len + rest.len()].copy_from_slice(rest);
        self.buffer_len += rest.len();
        trace!(
            "md5 absorbed {} bytes, {} buffered, bit count {}",
            fed,
            self.buffer_len,
            self.bit_count
        );
    }

    fn process_block_from_buffer(&mut self) {
        compress::compress(&mut self.state, &self.buffer);
        self.buffer_len = 0;
    }

    /// Pads a copy of the buffered tail and runs the final one or two blocks,
    /// leaving the running state untouched for later updates.
    fn finish(&self) -> Md5Digest {
        let mut state = self.state;
        let mut tail = [0u8; 2 * MD5_BLOCK_SIZE];
        tail[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        let end = self.buffer_len + padding_len(self.buffer_len as u64);
        padding::fill(&mut tail[self.buffer_len..end], self.bit_count);

        for block in tail[..end].chunks_exact(MD5_BLOCK_SIZE) {
            compress::compress(&mut state, block);
        }
        Md5Digest::from_state(&state)
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new(b"")
    }
}

impl io::Write for Md5 {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.update(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A builder for an [`Md5`] engine with a custom starting point.
#[derive(Debug, Clone, Default)]
pub struct Md5Builder {
    state: Md5State,
    bit_offset: u64,
}

impl Md5Builder {
    /// Creates a builder starting from the standard initial state and a zero offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chaining state to resume from.
    pub fn state(mut self, state: Md5State) -> Self {
        self.state = state;
        self
    }

    /// Sets the state from a previous digest, bytes read little-endian per word.
    pub fn resume_from(mut self, digest: &Md5Digest) -> Self {
        self.state = digest.state();
        self
    }

    /// Sets the number of bits already folded into the state.
    pub fn bit_offset(mut self, bits: u64) -> Self {
        self.bit_offset = bits;
        self
    }

    /// Builds the engine and hashes `message`.
    pub fn build(self, message: impl AsRef<[u8]>) -> Md5 {
        Md5::from_state(self.state, self.bit_offset, message)
    }

    /// Builds the engine and hashes hex-encoded `message`.
    pub fn build_hex(self, message: &str) -> Result<Md5> {
        let bytes = hex::decode(message)?;
        Ok(self.build(bytes))
    }
}

/// Convenience function to compute MD5 digest in a single shot.
/// *Do not use for real security.*
pub fn md5_digest(data: impl AsRef<[u8]>) -> [u8; MD5_OUTPUT_SIZE] {
    Md5::new(data).digest().into()
}

/// Single-shot MD5 as 32 lowercase hex characters.
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    Md5::new(data).hex_digest()
}
