//! The MD5 chaining state: the four 32-bit accumulator words (A, B, C, D).

use crate::error::{Error, Result};

/// Number of bytes in a serialized state (four little-endian words).
pub const STATE_BYTES: usize = 16;

/// The four 32-bit words MD5 carries from one block to the next.
///
/// A fresh computation starts from [`Md5State::INITIAL`]. For resumption the
/// caller supplies the state to continue from, typically parsed from a
/// previous digest with [`Md5State::from_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5State {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Md5State {
    /// The initial values for (A, B, C, D) from RFC 1321.
    pub const INITIAL: Md5State = Md5State {
        a: 0x67452301,
        b: 0xEFCDAB89,
        c: 0x98BADCFE,
        d: 0x10325476,
    };

    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Builds a state from a slice of words.
    ///
    /// Returns [`Error::InvalidState`] unless exactly four words are given.
    pub fn from_words(words: &[u32]) -> Result<Self> {
        match *words {
            [a, b, c, d] => Ok(Self { a, b, c, d }),
            _ => Err(Error::InvalidState(words.len() * 4)),
        }
    }

    /// Parses 16 bytes as four little-endian words, the same layout a digest
    /// is serialized in.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != STATE_BYTES {
            return Err(Error::InvalidState(bytes.len()));
        }
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(Self::from(words))
    }

    pub fn words(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Serializes the state little-endian per word.
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut output = [0u8; STATE_BYTES];
        output[0..4].copy_from_slice(&self.a.to_le_bytes());
        output[4..8].copy_from_slice(&self.b.to_le_bytes());
        output[8..12].copy_from_slice(&self.c.to_le_bytes());
        output[12..16].copy_from_slice(&self.d.to_le_bytes());
        output
    }

    /// Adds another state word-wise, modulo 2^32.
    pub(crate) fn add_assign_wrapping(&mut self, other: &Md5State) {
        self.a = self.a.wrapping_add(other.a);
        self.b = self.b.wrapping_add(other.b);
        self.c = self.c.wrapping_add(other.c);
        self.d = self.d.wrapping_add(other.d);
    }
}

impl Default for Md5State {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<[u32; 4]> for Md5State {
    fn from(words: [u32; 4]) -> Self {
        let [a, b, c, d] = words;
        Self { a, b, c, d }
    }
}
