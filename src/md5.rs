//! MD5 (RFC 1321). Kept for interoperability with legacy formats; it is not
//! collision resistant.
use crate::codec::Endian;
use crate::engine::{md_hasher, Compression};

const INITIALISATION_CONSTANTS: [u32; 4] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];
pub const MD5_LEN: usize = 16;

const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Compression;

impl Compression for Md5Compression {
    type Word = u32;
    type State = [u32; 4];

    const NAME: &'static str = "MD5";
    const INITIAL_STATE: [u32; 4] = INITIALISATION_CONSTANTS;
    const ENDIAN: Endian = Endian::Little;

    fn compress(state: &mut [u32; 4], x: &[u32; 16]) {
        let [mut a, mut b, mut c, mut d] = *state;

        for r in 0..64 {
            let round = r / 16;
            let (mixed, k) = match round {
                0 => (f(b, c, d), r),
                1 => (g(b, c, d), (5 * r + 1) % 16),
                2 => (h(b, c, d), (3 * r + 5) % 16),
                _ => (i(b, c, d), (7 * r) % 16),
            };

            let rotated = a
                .wrapping_add(mixed)
                .wrapping_add(K[r])
                .wrapping_add(x[k])
                .rotate_left(SHIFTS[round][r % 4]);
            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(rotated);
        }

        for (state, increment) in state.iter_mut().zip([a, b, c, d]) {
            *state = increment.wrapping_add(*state);
        }
    }
}

md_hasher!(Md5, Md5Compression, MD5_LEN);

fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}
