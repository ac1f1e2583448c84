/// The streaming update/finalize contract shared by every digest in the crate.
///
/// `N` is the digest length in bytes.
pub trait Hasher<const N: usize>: Default + Clone {
    /// Number of input bytes folded into the state per compression call.
    const BLOCK_SIZE: usize;

    fn update(&mut self, data: &[u8]);

    fn digest(self) -> [u8; N];

    fn empty() -> Self {
        Self::default()
    }

    /// Value form of [`Hasher::update`].
    #[must_use]
    fn chain_update(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    fn digest_message(message: &[u8]) -> [u8; N] {
        Self::empty().update_and_digest(message)
    }

    fn update_and_digest(mut self, message: &[u8]) -> [u8; N] {
        self.update(message);
        self.digest()
    }
}
