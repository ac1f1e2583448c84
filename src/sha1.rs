use crate::engine::{md_hasher, Compression};

const INITIALISATION_CONSTANTS: [u32; 5] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];
pub const SHA1_LEN: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Compression;

impl Compression for Sha1Compression {
    type Word = u32;
    type State = [u32; 5];

    const NAME: &'static str = "SHA-1";
    const INITIAL_STATE: [u32; 5] = INITIALISATION_CONSTANTS;

    fn compress(state: &mut [u32; 5], block: &[u32; 16]) {
        let mut w = [0u32; 80];
        w[..16].copy_from_slice(block);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;
        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i {
                0..=19 => (choose(b, c, d), 0x5A827999),
                20..=39 => (parity(b, c, d), 0x6ED9EBA1),
                40..=59 => (majority(b, c, d), 0x8F1BBCDC),
                _ => (parity(b, c, d), 0xCA62C1D6),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (h, v) in state.iter_mut().zip([a, b, c, d, e]) {
            *h = h.wrapping_add(v);
        }
    }
}

md_hasher!(
    /// SHA-1 (FIPS 180-4 §6.1).
    Sha1,
    Sha1Compression,
    SHA1_LEN
);

fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Hasher;

    use rstest::rstest;

    #[rstest]
    #[case("", "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
    #[case("abc", "a9993e364706816aba3e25717850c26c9cd0d89d")]
    #[case("We all live in a yellow submarine.", "ec4755c1d35930593852add3cf89e69eec5fac8d")]
    #[case(
        "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    )]
    #[case(
        "The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
    )]
    fn digest_returns_expected_hash(#[case] input: &str, #[case] expected: &str) {
        let mut hasher = Sha1::default();
        hasher.update(input.as_bytes());
        let digest = hasher.digest();

        assert_eq!(hex::encode(digest), expected);
    }

    #[test]
    fn compress_matches_fips_single_block_example() {
        // "abc" padded into one block.
        let mut block = [0u32; 16];
        block[0] = 0x61626380;
        block[15] = 0x18;
        let mut state = INITIALISATION_CONSTANTS;

        Sha1Compression::compress(&mut state, &block);

        assert_eq!(state, [0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]);
    }

    #[test]
    fn round_functions_select_expected_bits() {
        let (x, y, z) = (0xF0F0F0F0, 0xFF00FF00, 0x0F0F0F0F);

        assert_eq!(choose(x, y, z), 0xFF0FFF0F);
        assert_eq!(parity(x, y, z), 0x00FF00FF);
        assert_eq!(majority(x, y, z), 0xFF00FF00);
    }
}
