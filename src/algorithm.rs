//! Runtime selection of a digest algorithm by name.
use std::fmt;
use std::str::FromStr;

use crate::{Hasher, Md5, Sha1, Sha224, Sha256, Sha384, Sha512};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("unknown hash algorithm '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    pub fn digest_size(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            HashAlgorithm::Sha384 | HashAlgorithm::Sha512 => 128,
            _ => 64,
        }
    }

    pub fn hasher(self) -> DynHasher {
        match self {
            HashAlgorithm::Md5 => DynHasher::Md5(Md5::empty()),
            HashAlgorithm::Sha1 => DynHasher::Sha1(Sha1::empty()),
            HashAlgorithm::Sha224 => DynHasher::Sha224(Sha224::empty()),
            HashAlgorithm::Sha256 => DynHasher::Sha256(Sha256::empty()),
            HashAlgorithm::Sha384 => DynHasher::Sha384(Sha384::empty()),
            HashAlgorithm::Sha512 => DynHasher::Sha512(Sha512::empty()),
        }
    }

    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        let mut hasher = self.hasher();
        hasher.update(message);
        hasher.finalize()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = AlgorithmError;

    /// Accepts names case-insensitively, with or without the dash
    /// (`sha256`, `SHA-256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|&c| c != '-' && c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalised.as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(AlgorithmError::Unknown(s.to_string())),
        }
    }
}

/// A streaming hasher whose algorithm is chosen at runtime.
#[derive(Debug, Clone)]
pub enum DynHasher {
    Md5(Md5),
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl DynHasher {
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            DynHasher::Md5(_) => HashAlgorithm::Md5,
            DynHasher::Sha1(_) => HashAlgorithm::Sha1,
            DynHasher::Sha224(_) => HashAlgorithm::Sha224,
            DynHasher::Sha256(_) => HashAlgorithm::Sha256,
            DynHasher::Sha384(_) => HashAlgorithm::Sha384,
            DynHasher::Sha512(_) => HashAlgorithm::Sha512,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            DynHasher::Md5(h) => h.update(data),
            DynHasher::Sha1(h) => h.update(data),
            DynHasher::Sha224(h) => h.update(data),
            DynHasher::Sha256(h) => h.update(data),
            DynHasher::Sha384(h) => h.update(data),
            DynHasher::Sha512(h) => h.update(data),
        }
    }

    pub fn finalize(self) -> Vec<u8> {
        match self {
            DynHasher::Md5(h) => h.digest().to_vec(),
            DynHasher::Sha1(h) => h.digest().to_vec(),
            DynHasher::Sha224(h) => h.digest().to_vec(),
            DynHasher::Sha256(h) => h.digest().to_vec(),
            DynHasher::Sha384(h) => h.digest().to_vec(),
            DynHasher::Sha512(h) => h.digest().to_vec(),
        }
    }
}
