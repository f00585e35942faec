use core::fmt;
use core::ops;

use super::state::Md5State;
use super::MD5_OUTPUT_SIZE;
use crate::error::{Error, Result};

/// A finished MD5 digest: the final state words, little-endian per word.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5Digest([u8; MD5_OUTPUT_SIZE]);

impl Md5Digest {
    pub(crate) fn from_state(state: &Md5State) -> Self {
        Self(state.to_bytes())
    }

    /// Parses a 32-character hex digest.
    pub fn from_hex(digest: &str) -> Result<Self> {
        let bytes = hex::decode(digest)?;
        let bytes: [u8; MD5_OUTPUT_SIZE] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| Error::InvalidState(bytes.len()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; MD5_OUTPUT_SIZE] {
        &self.0
    }

    /// Lowercase hex, 32 characters, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Reads the digest back as the chaining state that produced it.
    ///
    /// This is the starting point of a length-extension forgery.
    pub fn state(&self) -> Md5State {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Md5State::from(words)
    }
}

impl From<[u8; MD5_OUTPUT_SIZE]> for Md5Digest {
    fn from(bytes: [u8; MD5_OUTPUT_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Md5Digest> for [u8; MD5_OUTPUT_SIZE] {
    fn from(digest: Md5Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ops::Deref for Md5Digest {
    type Target = [u8; MD5_OUTPUT_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Md5Digest")
            .field(&format_args!("{:x}", self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "900150983cd24fb0d6963f7d28e17f72";

    #[test]
    fn test_hex_forms() {
        let digest = Md5Digest::from_hex(ABC).unwrap();
        assert_eq!(digest.to_hex(), ABC);
        assert_eq!(format!("{}", digest), ABC);
        assert_eq!(format!("{:x}", digest), ABC);
        assert_eq!(format!("{:X}", digest), ABC.to_uppercase());
        assert_eq!(digest[0], 0x90);
    }

    #[test]
    fn test_state_parses_little_endian_words() {
        let digest = Md5Digest::from_hex(ABC).unwrap();
        let state = digest.state();
        assert_eq!(state.a, 0x98500190);
        assert_eq!(Md5Digest::from_state(&state), digest);
    }

    #[test]
    fn test_from_hex_errors() {
        assert!(matches!(
            Md5Digest::from_hex("not hex at all, not hex at all!!"),
            Err(Error::EncodingError(_))
        ));
        assert_eq!(
            Md5Digest::from_hex("900150983cd24fb0"),
            Err(Error::InvalidState(8))
        );
    }
}
