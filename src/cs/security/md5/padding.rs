//! MD5 message padding (RFC 1321, section 3.1 and 3.2).
//!
//! A single `1` bit (the byte 0x80), then zero bytes until the length is 56 mod 64,
//! then the total bit count as a 64-bit little-endian integer. Padding is never
//! empty: it adds between 9 and 72 bytes, i.e. one or two extra blocks' worth.

use super::MD5_BLOCK_SIZE;

/// Offset within a block at which the 64-bit length field starts.
const LENGTH_OFFSET: usize = 56;

/// Size of the trailing length field in bytes.
const LENGTH_FIELD_SIZE: usize = 8;

/// Returns how many padding bytes follow a message of `message_len` bytes.
pub fn padding_len(message_len: u64) -> usize {
    let rem = (message_len % MD5_BLOCK_SIZE as u64) as usize;
    if rem < LENGTH_OFFSET {
        MD5_BLOCK_SIZE - rem
    } else {
        2 * MD5_BLOCK_SIZE - rem
    }
}

/// Returns the exact bytes MD5 appends to a message of `message_len` bytes.
///
/// This is the "glue" a length-extension forgery has to reproduce between the
/// original message and the attacker's suffix. The length field is
/// `8 * message_len` modulo 2^64.
pub fn glue_padding(message_len: u64) -> Vec<u8> {
    let mut padding = vec![0u8; padding_len(message_len)];
    fill(&mut padding, message_len.wrapping_mul(8));
    padding
}

/// Writes the marker byte, the zero run and the length field into `dst`.
///
/// `dst` must be exactly the padding region (see [`padding_len`]). `total_bits`
/// is the grand total of message bits, including any resumption offset.
pub(crate) fn fill(dst: &mut [u8], total_bits: u64) {
    debug_assert!(dst.len() > LENGTH_FIELD_SIZE);
    let split = dst.len() - LENGTH_FIELD_SIZE;
    let (body, length) = dst.split_at_mut(split);
    body[0] = 0x80;
    body[1..].fill(0);
    length.copy_from_slice(&total_bits.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_len_bounds() {
        assert_eq!(padding_len(0), 64);
        assert_eq!(padding_len(55), 9);
        assert_eq!(padding_len(56), 72);
        assert_eq!(padding_len(63), 65);
        assert_eq!(padding_len(64), 64);
        assert_eq!(padding_len(119), 9);
        assert_eq!(padding_len(120), 72);
        for len in 0..300u64 {
            let pad = padding_len(len) as u64;
            assert!((9..=72).contains(&pad));
            assert_eq!((len + pad) % 64, 0);
        }
    }

    #[test]
    fn test_glue_padding_layout() {
        let padding = glue_padding(3);
        assert_eq!(padding.len(), 61);
        assert_eq!(padding[0], 0x80);
        assert!(padding[1..53].iter().all(|&b| b == 0));
        assert_eq!(&padding[53..], &24u64.to_le_bytes());
    }

    #[test]
    fn test_glue_padding_spills_into_second_block() {
        let padding = glue_padding(60);
        assert_eq!(padding.len(), 68);
        assert_eq!(padding[0], 0x80);
        assert_eq!(&padding[60..], &480u64.to_le_bytes());
    }

    #[test]
    fn test_length_field_wraps_modulo_2_64() {
        // 2^61 bytes is 2^64 bits, which wraps to zero.
        let padding = glue_padding(1u64 << 61);
        assert_eq!(&padding[padding.len() - 8..], &[0u8; 8]);

        let padding = glue_padding((1u64 << 61) + 1);
        assert_eq!(&padding[padding.len() - 8..], &8u64.to_le_bytes());
    }

    #[test]
    fn test_fill_overwrites_stale_bytes() {
        let mut region = [0xffu8; 16];
        fill(&mut region, 0x0102);
        assert_eq!(region[0], 0x80);
        assert_eq!(&region[1..8], &[0u8; 7]);
        assert_eq!(&region[8..], &[0x02u8, 0x01, 0, 0, 0, 0, 0, 0]);
    }
}
