//! Secure hash functions (FIPS 180-4 SHA-1 and SHA-2, plus MD5) built on a
//! shared Merkle–Damgård streaming engine, with HMAC on top.
//!
//! ```
//! use mdhash::{Hasher, Sha256};
//!
//! let one_shot = Sha256::digest_message(b"abc");
//! let streamed = Sha256::empty().chain_update(b"a").chain_update(b"bc").digest();
//! assert_eq!(one_shot, streamed);
//! ```
mod algorithm;
mod batch;
pub mod codec;
pub mod engine;
mod hash;
mod hmac;
mod md5;
mod sha1;
mod sha256;
mod sha512;

pub use algorithm::{AlgorithmError, DynHasher, HashAlgorithm};
pub use batch::digest_many;
pub use hash::Hasher;
pub use hmac::{Hmac, HmacMd5, HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512};
pub use md5::{Md5, Md5Compression, MD5_LEN};
pub use sha1::{Sha1, Sha1Compression, SHA1_LEN};
pub use sha256::{Sha224, Sha224Compression, Sha256, Sha256Compression, SHA224_LEN, SHA256_LEN};
pub use sha512::{Sha384, Sha384Compression, Sha512, Sha512Compression, SHA384_LEN, SHA512_LEN};
