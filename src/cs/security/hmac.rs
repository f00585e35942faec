//! HMAC-MD5 (RFC 2104) on top of the MD5 engine.
//!
//! *Toy code, for demonstration only.* RFC 6151 advises against HMAC-MD5 in new protocols.

use super::md5::{md5_digest, Md5, Md5Digest, MD5_BLOCK_SIZE};

/// Inner padding byte.
const IPAD: u8 = 0x36;
/// Outer padding byte.
const OPAD: u8 = 0x5c;

/// Computes `md5((key ^ opad) || md5((key ^ ipad) || message))`.
///
/// Keys longer than one block are replaced by their digest; shorter keys are
/// zero-padded on the right to a full block.
pub fn hmac_md5(key: &[u8], message: &[u8]) -> Md5Digest {
    let mut key_block = [0u8; MD5_BLOCK_SIZE];
    if key.len() > MD5_BLOCK_SIZE {
        let hashed = md5_digest(key);
        key_block[..hashed.len()].copy_from_slice(&hashed);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let inner_key = key_block.map(|b| b ^ IPAD);
    let outer_key = key_block.map(|b| b ^ OPAD);

    let mut inner = Md5::new(inner_key);
    inner.update(message);

    let mut outer = Md5::new(outer_key);
    outer.update(inner.digest());
    outer.digest()
}

/// HMAC-MD5 as 32 lowercase hex characters.
pub fn hmac_md5_hex(key: &[u8], message: &[u8]) -> String {
    hmac_md5(key, message).to_hex()
}
