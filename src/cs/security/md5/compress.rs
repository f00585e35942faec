//! Block parsing and the 64-step MD5 compression function.

use super::state::Md5State;
use super::MD5_BLOCK_SIZE;

/// The sine table constants (K) in MD5 (32 bits).
/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63
#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// The amount of left rotation performed in each MD5 step, grouped by round.
#[rustfmt::skip]
const S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5,  9, 14, 20,  5,  9, 14, 20,  5,  9, 14, 20,  5,  9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Splits a 64-byte block into sixteen little-endian 32-bit words.
pub(crate) fn parse_words(block: &[u8]) -> [u32; 16] {
    debug_assert_eq!(block.len(), MD5_BLOCK_SIZE);
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Folds one 64-byte block into `state`.
pub(crate) fn compress(state: &mut Md5State, block: &[u8]) {
    let w = parse_words(block);
    let Md5State {
        mut a,
        mut b,
        mut c,
        mut d,
    } = *state;

    for step in 0..64 {
        let (mix, index) = match step {
            0..=15 => (f(b, c, d), step),
            16..=31 => (g(b, c, d), (5 * step + 1) % 16),
            32..=47 => (h(b, c, d), (3 * step + 5) % 16),
            _ => (i(b, c, d), (7 * step) % 16),
        };

        let temp = a
            .wrapping_add(mix)
            .wrapping_add(K[step])
            .wrapping_add(w[index]);
        let temp = temp.rotate_left(S[step]).wrapping_add(b);

        a = d;
        d = c;
        c = b;
        b = temp;
    }

    state.add_assign_wrapping(&Md5State { a, b, c, d });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_table_matches_definition() {
        for (step, &k) in K.iter().enumerate() {
            let expected = ((step as f64 + 1.0).sin().abs() * 4294967296.0).floor() as u32;
            assert_eq!(k, expected, "K[{}]", step);
        }
    }

    #[test]
    fn test_shift_table_repeats_per_round() {
        for round in S.chunks_exact(16) {
            assert_eq!(&round[0..4], &round[4..8]);
            assert_eq!(&round[0..4], &round[12..16]);
        }
        assert_eq!(&S[48..52], &[6u32, 10, 15, 21]);
    }

    #[test]
    fn test_parse_words_little_endian() {
        let mut block = [0u8; 64];
        block[0..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        block[56] = 0x18;
        let words = parse_words(&block);
        assert_eq!(words[0], 0x8063_6261);
        assert_eq!(words[14], 0x18);
        assert_eq!(words[15], 0);
    }

    #[test]
    fn test_boolean_functions() {
        // With x all ones, F selects y; with x all zeros, F selects z.
        assert_eq!(f(u32::MAX, 0x1234, 0x5678), 0x1234);
        assert_eq!(f(0, 0x1234, 0x5678), 0x5678);
        // G selects x where z is set, y elsewhere.
        assert_eq!(g(0xAAAA_AAAA, 0x5555_5555, 0xFFFF_0000), 0xAAAA_5555);
        assert_eq!(h(0b1100, 0b1010, 0b0110), 0);
        assert_eq!(i(0, 0, u32::MAX), 0);
        assert_eq!(i(0, 0, 0), u32::MAX);
    }

    #[test]
    fn test_single_block_abc() {
        // "abc" padded by hand: one block, length field 24 bits.
        let mut block = [0u8; 64];
        block[0..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[56] = 24;
        let mut state = Md5State::INITIAL;
        compress(&mut state, &block);
        assert_eq!(
            hex::encode(state.to_bytes()),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }
}
