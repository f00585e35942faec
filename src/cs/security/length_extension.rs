//! Length-extension forgery against `md5(secret || message)` style MACs.
//!
//! Given only the digest of some unknown message and that message's length, an
//! attacker can compute a valid digest for the message followed by its MD5 padding
//! and any suffix of their choosing. The secret itself is never needed.
//!
//! ```
//! use md5lab::{md5_hex, LengthExtension, Md5};
//!
//! let secret = b"k3y";
//! let original = [&secret[..], &b"user=bob"[..]].concat();
//! let mac = Md5::new(&original).digest();
//!
//! // attacker side: knows the mac and the total length, not the secret
//! let forgery = LengthExtension::new(mac, original.len() as u64).extend(b";admin=1");
//! assert_eq!(forgery.digest.to_hex(), md5_hex(forgery.forged_message(&original)));
//! ```

use log::debug;

use super::md5::{glue_padding, padding_len, Md5, Md5Digest};

/// A known digest together with the length of the message that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthExtension {
    digest: Md5Digest,
    original_len: u64,
}

/// The result of extending a digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
    /// Bytes to append to the original message: its glue padding, then the extension.
    pub suffix: Vec<u8>,
    /// Digest of `original || suffix`.
    pub digest: Md5Digest,
}

impl LengthExtension {
    /// `original_len` is in bytes and must include any secret prefix.
    pub fn new(digest: Md5Digest, original_len: u64) -> Self {
        Self {
            digest,
            original_len,
        }
    }

    /// Bits already folded into the digest: the original message plus its padding.
    pub fn bit_offset(&self) -> u64 {
        self.original_len
            .wrapping_add(padding_len(self.original_len) as u64)
            .wrapping_mul(8)
    }

    /// Forges the digest of `original || glue_padding || extra`.
    pub fn extend(&self, extra: &[u8]) -> Forgery {
        let bit_offset = self.bit_offset();
        debug!(
            "extending digest {} (original length {} bytes) by {} bytes",
            self.digest,
            self.original_len,
            extra.len()
        );
        let digest = Md5::from_state(self.digest.state(), bit_offset, extra).digest();

        let mut suffix = glue_padding(self.original_len);
        suffix.extend_from_slice(extra);
        Forgery { suffix, digest }
    }
}

impl Forgery {
    /// The full message the forged digest authenticates.
    pub fn forged_message(&self, original: &[u8]) -> Vec<u8> {
        let mut message = Vec::with_capacity(original.len() + self.suffix.len());
        message.extend_from_slice(original);
        message.extend_from_slice(&self.suffix);
        message
    }
}
