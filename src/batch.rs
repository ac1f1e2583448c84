use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::Hasher;

/// Hash every message independently on the rayon pool. Output order matches
/// input order.
#[instrument(skip_all, fields(count = messages.len()))]
pub fn digest_many<H, const N: usize>(messages: &[&[u8]]) -> Vec<[u8; N]>
where
    H: Hasher<N> + Send,
{
    let total_bytes: usize = messages.iter().map(|m| m.len()).sum();
    debug!(total_bytes, "hashing batch");

    messages
        .par_iter()
        .map(|message| H::digest_message(message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Sha1, Sha256};

    #[test]
    fn digest_many_preserves_input_order() {
        let inputs: Vec<Vec<u8>> = (0..100u8).map(|i| vec![i; i as usize * 3]).collect();
        let messages: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();

        let digests = digest_many::<Sha256, 32>(&messages);

        assert_eq!(digests.len(), messages.len());
        for (message, digest) in messages.iter().zip(&digests) {
            assert_eq!(*digest, Sha256::digest_message(message));
        }
    }

    #[test]
    fn digest_many_of_nothing_is_empty() {
        assert!(digest_many::<Sha1, 20>(&[]).is_empty());
    }
}
