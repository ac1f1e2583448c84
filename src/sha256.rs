use crate::engine::{md_hasher, Compression};

const SHA256_INITIALISATION_CONSTANTS: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];
const SHA224_INITIALISATION_CONSTANTS: [u32; 8] = [
    0xC1059ED8, 0x367CD507, 0x3070DD17, 0xF70E5939, 0xFFC00B31, 0x68581511, 0x64F98FA7, 0xBEFA4FA4,
];
pub const SHA256_LEN: usize = 32;
pub const SHA224_LEN: usize = 28;

const K: [u32; 64] = [
    0x428A2F98, 0x71374491, 0xB5C0FBCF, 0xE9B5DBA5, 0x3956C25B, 0x59F111F1, 0x923F82A4,
    0xAB1C5ED5, 0xD807AA98, 0x12835B01, 0x243185BE, 0x550C7DC3, 0x72BE5D74, 0x80DEB1FE,
    0x9BDC06A7, 0xC19BF174, 0xE49B69C1, 0xEFBE4786, 0x0FC19DC6, 0x240CA1CC, 0x2DE92C6F,
    0x4A7484AA, 0x5CB0A9DC, 0x76F988DA, 0x983E5152, 0xA831C66D, 0xB00327C8, 0xBF597FC7,
    0xC6E00BF3, 0xD5A79147, 0x06CA6351, 0x14292967, 0x27B70A85, 0x2E1B2138, 0x4D2C6DFC,
    0x53380D13, 0x650A7354, 0x766A0ABB, 0x81C2C92E, 0x92722C85, 0xA2BFE8A1, 0xA81A664B,
    0xC24B8B70, 0xC76C51A3, 0xD192E819, 0xD6990624, 0xF40E3585, 0x106AA070, 0x19A4C116,
    0x1E376C08, 0x2748774C, 0x34B0BCB5, 0x391C0CB3, 0x4ED8AA4A, 0x5B9CCA4F, 0x682E6FF3,
    0x748F82EE, 0x78A5636F, 0x84C87814, 0x8CC70208, 0x90BEFFFA, 0xA4506CEB, 0xBEF9A3F7,
    0xC67178F2,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Compression;

impl Compression for Sha256Compression {
    type Word = u32;
    type State = [u32; 8];

    const NAME: &'static str = "SHA-256";
    const INITIAL_STATE: [u32; 8] = SHA256_INITIALISATION_CONSTANTS;

    fn compress(state: &mut [u32; 8], block: &[u32; 16]) {
        compress256(state, block);
    }
}

/// SHA-224 differs from SHA-256 only in its initial vector and the length of
/// the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha224Compression;

impl Compression for Sha224Compression {
    type Word = u32;
    type State = [u32; 8];

    const NAME: &'static str = "SHA-224";
    const INITIAL_STATE: [u32; 8] = SHA224_INITIALISATION_CONSTANTS;

    fn compress(state: &mut [u32; 8], block: &[u32; 16]) {
        compress256(state, block);
    }
}

md_hasher!(
    /// SHA-256 (FIPS 180-4 §6.2).
    Sha256,
    Sha256Compression,
    SHA256_LEN
);

md_hasher!(
    /// SHA-224 (FIPS 180-4 §6.3).
    Sha224,
    Sha224Compression,
    SHA224_LEN
);

fn compress256(state: &mut [u32; 8], block: &[u32; 16]) {
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(block);
    for i in 16..64 {
        w[i] = small_sigma1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..64 {
        let temp1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (word, val) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(val);
    }
}

fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Hasher;

    use rstest::rstest;

    #[rstest]
    #[case("", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")]
    #[case("abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")]
    #[case(
        "We all live in a yellow submarine.",
        "608244c6646412bf55d10e23b1034a8be068ed7848a49360ffea61daf913c832"
    )]
    #[case(
        &"012345".repeat(127),
        "65e55ab7479e1a8591d3b2489d7457e60630ac82572b79bce8f05b324bb4441c"
    )]
    fn digest_returns_expected_hash(#[case] input: &str, #[case] expected: &str) {
        let mut hasher = Sha256::default();
        hasher.update(input.as_bytes());
        let digest = hasher.digest();

        assert_eq!(hex::encode(digest), expected);
    }

    #[rstest]
    #[case("", "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")]
    #[case("abc", "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")]
    fn sha224_digest_returns_expected_hash(#[case] input: &str, #[case] expected: &str) {
        let digest = Sha224::digest_message(input.as_bytes());

        assert_eq!(hex::encode(digest), expected);
    }

    #[test]
    fn compress_matches_fips_single_block_example() {
        let mut block = [0u32; 16];
        block[0] = 0x61626380;
        block[15] = 0x18;
        let mut state = SHA256_INITIALISATION_CONSTANTS;

        compress256(&mut state, &block);

        assert_eq!(
            state,
            [
                0xBA7816BF, 0x8F01CFEA, 0x414140DE, 0x5DAE2223, 0xB00361A3, 0x96177A9C, 0xB410FF61,
                0xF20015AD
            ]
        );
    }
}
