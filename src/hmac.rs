use crate::{Hasher, Md5, Sha1, Sha224, Sha256, Sha384, Sha512};

const O_PAD: u8 = 0x5c;
const I_PAD: u8 = 0x36;

pub type HmacMd5 = Hmac<Md5, 16>;
pub type HmacSha1 = Hmac<Sha1, 20>;
pub type HmacSha224 = Hmac<Sha224, 28>;
pub type HmacSha256 = Hmac<Sha256, 32>;
pub type HmacSha384 = Hmac<Sha384, 48>;
pub type HmacSha512 = Hmac<Sha512, 64>;

/// HMAC (RFC 2104) over any [`Hasher`].
#[derive(Debug, Clone)]
pub struct Hmac<H: Hasher<N>, const N: usize> {
    inner_hasher: H,
    outer_hasher: H,
}

impl<H: Hasher<N>, const N: usize> Hmac<H, N> {
    pub fn new(key: &[u8]) -> Self {
        let key_block = Self::to_block_sized_key(key);

        let inner_hasher = H::empty().chain_update(&xor_with(&key_block, I_PAD));
        let outer_hasher = H::empty().chain_update(&xor_with(&key_block, O_PAD));

        Self {
            inner_hasher,
            outer_hasher,
        }
    }

    pub fn digest_message(key: &[u8], message: &[u8]) -> [u8; N] {
        let mut hmac = Self::new(key);
        hmac.update(message);
        hmac.digest()
    }

    pub fn update(&mut self, message: &[u8]) {
        self.inner_hasher.update(message);
    }

    #[must_use]
    pub fn chain_update(mut self, message: &[u8]) -> Self {
        self.update(message);
        self
    }

    pub fn update_and_digest(mut self, message: &[u8]) -> [u8; N] {
        self.inner_hasher.update(message);
        self.digest()
    }

    pub fn digest(self) -> [u8; N] {
        self.outer_hasher
            .update_and_digest(&self.inner_hasher.digest())
    }

    /// Compare the MAC of everything fed so far against `tag`.
    pub fn verify(self, tag: &[u8]) -> bool {
        self.digest().as_slice() == tag
    }

    fn to_block_sized_key(var_len_key: &[u8]) -> Vec<u8> {
        let mut key = vec![0; H::BLOCK_SIZE];
        if var_len_key.len() > H::BLOCK_SIZE {
            key[..N].copy_from_slice(&H::digest_message(var_len_key));
        } else {
            key[..var_len_key.len()].copy_from_slice(var_len_key);
        }
        key
    }
}

fn xor_with(bytes: &[u8], pad: u8) -> Vec<u8> {
    bytes.iter().map(|b| b ^ pad).collect()
}
