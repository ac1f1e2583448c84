//! Merkle–Damgård streaming driver shared by every digest in the crate.
//!
//! The driver owns the chaining value, a partial-block buffer and the running
//! message length. Algorithms plug in through [`Compression`], which supplies
//! the word type, initial vector, byte order and block compression function.
use tracing::trace;

use crate::codec::{self, Endian, Word};

pub trait Compression {
    type Word: Word;
    type State: Copy + AsRef<[Self::Word]> + Send + Sync + std::fmt::Debug;

    const NAME: &'static str;
    const INITIAL_STATE: Self::State;
    const BLOCK_SIZE: usize = 16 * <Self::Word as Word>::BYTES;
    /// Width of the trailing bit-length field.
    const LENGTH_FIELD_SIZE: usize = 2 * <Self::Word as Word>::BYTES;
    const ENDIAN: Endian = Endian::Big;

    fn compress(state: &mut Self::State, block: &[Self::Word; 16]);
}

#[derive(Debug, Clone)]
pub struct MdEngine<C: Compression> {
    state: C::State,
    /// Total bytes passed to `update`, modulo 2^64.
    message_len: u64,
    buffer: Vec<u8>,
}

impl<C: Compression> MdEngine<C> {
    pub fn new() -> Self {
        Self {
            state: C::INITIAL_STATE,
            message_len: 0,
            buffer: Vec::with_capacity(C::BLOCK_SIZE),
        }
    }

    pub fn update(&mut self, message: &[u8]) {
        self.message_len = self.message_len.wrapping_add(message.len() as u64);
        self.absorb(message);
    }

    /// Pad, fold the final block(s) and return the chaining value.
    pub fn finalize(mut self) -> C::State {
        let bit_len = u128::from(self.message_len) * 8;

        self.absorb(&[0x80]);
        let length_offset = C::BLOCK_SIZE - C::LENGTH_FIELD_SIZE;
        while self.buffer.len() != length_offset {
            self.absorb(&[0x00]);
        }

        // Both field widths are at most 16 bytes, so the low bytes of the
        // 128-bit count give `len * 8 mod 2^(8 * width)`.
        let field = match C::ENDIAN {
            Endian::Big => {
                let bytes = bit_len.to_be_bytes();
                bytes[bytes.len() - C::LENGTH_FIELD_SIZE..].to_vec()
            }
            Endian::Little => bit_len.to_le_bytes()[..C::LENGTH_FIELD_SIZE].to_vec(),
        };
        self.absorb(&field);
        debug_assert!(
            self.buffer.is_empty(),
            "{}: {} bytes left in buffer after padding",
            C::NAME,
            self.buffer.len()
        );

        trace!(
            algorithm = C::NAME,
            message_len = self.message_len,
            "finalized digest"
        );
        self.state
    }

    /// Finalize and serialise the chaining value into `out`, truncating to
    /// `out.len()`.
    pub fn finalize_into(self, out: &mut [u8]) {
        let state = self.finalize();
        codec::write_words(state.as_ref(), C::ENDIAN, out);
    }

    /// Append bytes to the buffer, compressing each time a block fills.
    /// Does not touch the length counter, so padding goes through here too.
    fn absorb(&mut self, mut data: &[u8]) {
        if !self.buffer.is_empty() {
            let needed = C::BLOCK_SIZE - self.buffer.len();
            let (head, rest) = data.split_at(needed.min(data.len()));
            self.buffer.extend_from_slice(head);
            data = rest;

            if self.buffer.len() < C::BLOCK_SIZE {
                return;
            }
            let block = codec::read_block(&self.buffer, C::ENDIAN);
            C::compress(&mut self.state, &block);
            self.buffer.clear();
        }

        let mut blocks = data.chunks_exact(C::BLOCK_SIZE);
        for chunk in &mut blocks {
            let block = codec::read_block(chunk, C::ENDIAN);
            C::compress(&mut self.state, &block);
        }
        self.buffer.extend_from_slice(blocks.remainder());
    }
}

impl<C: Compression> Default for MdEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare a public hasher type backed by [`MdEngine`].
macro_rules! md_hasher {
    ($(#[$meta:meta])* $name:ident, $compression:ty, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name($crate::engine::MdEngine<$compression>);

        impl $crate::Hasher<{ $len }> for $name {
            const BLOCK_SIZE: usize = <$compression as $crate::engine::Compression>::BLOCK_SIZE;

            fn update(&mut self, data: &[u8]) {
                self.0.update(data);
            }

            fn digest(self) -> [u8; $len] {
                let mut out = [0u8; $len];
                self.0.finalize_into(&mut out);
                out
            }
        }
    };
}

pub(crate) use md_hasher;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sha256::Sha256Compression;
    use crate::sha512::Sha512Compression;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn buffer_stays_below_block_size_after_every_update() {
        let mut rng = StdRng::from_seed([7; 32]);
        let mut engine = MdEngine::<Sha256Compression>::new();

        let mut total = 0u64;
        for _ in 0..200 {
            let len = rng.gen_range(0..150);
            let chunk: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            engine.update(&chunk);
            total += len as u64;

            assert!(engine.buffer.len() < 64);
            assert_eq!(engine.buffer.len() as u64, total % 64);
            assert_eq!(engine.message_len, total);
        }
    }

    #[test]
    fn empty_update_leaves_state_untouched() {
        let mut engine = MdEngine::<Sha256Compression>::new();
        engine.update(b"abc");
        let before = engine.clone();

        engine.update(&[]);

        assert_eq!(engine.state, before.state);
        assert_eq!(engine.buffer, before.buffer);
        assert_eq!(engine.message_len, before.message_len);
    }

    #[test]
    fn message_length_wraps_modulo_2_pow_64() {
        let mut engine = MdEngine::<Sha256Compression>::new();
        engine.message_len = u64::MAX;

        engine.update(&[0u8; 2]);

        assert_eq!(engine.message_len, 1);
    }

    #[test]
    fn length_field_carries_bits_above_32() {
        let message_len = (1u64 << 33) + 3;
        let mut engine = MdEngine::<Sha256Compression>::new();
        engine.update(b"abc");
        engine.message_len = message_len;

        let mut block = [0u8; 64];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[56..].copy_from_slice(&(message_len * 8).to_be_bytes());
        let mut expected = Sha256Compression::INITIAL_STATE;
        Sha256Compression::compress(&mut expected, &codec::read_block(&block, Endian::Big));

        assert_eq!(engine.finalize(), expected);
    }

    #[test]
    fn bit_length_wraps_in_64_bit_field() {
        // 2^61 bytes is 2^64 bits, which encodes as zero, same as the empty message.
        let mut engine = MdEngine::<Sha256Compression>::new();
        engine.message_len = 1 << 61;

        assert_eq!(
            engine.finalize(),
            MdEngine::<Sha256Compression>::new().finalize()
        );
    }

    #[test]
    fn bit_length_does_not_wrap_in_128_bit_field() {
        let mut engine = MdEngine::<Sha512Compression>::new();
        engine.message_len = 1 << 61;

        assert_ne!(
            engine.finalize(),
            MdEngine::<Sha512Compression>::new().finalize()
        );
    }

    #[test]
    fn padding_spills_into_second_block_past_length_offset() {
        for len in [55usize, 56, 57, 63, 64] {
            let mut engine = MdEngine::<Sha256Compression>::new();
            engine.update(&vec![0x5a; len]);
            let mut expected = Sha256Compression::INITIAL_STATE;

            let mut padded = vec![0x5a; len];
            padded.push(0x80);
            while padded.len() % 64 != 56 {
                padded.push(0);
            }
            padded.extend_from_slice(&(len as u64 * 8).to_be_bytes());
            for chunk in padded.chunks_exact(64) {
                Sha256Compression::compress(&mut expected, &codec::read_block(chunk, Endian::Big));
            }

            assert_eq!(padded.len(), if len < 56 { 64 } else { 128 });
            assert_eq!(engine.finalize(), expected, "message of {len} bytes");
        }
    }

    #[test]
    fn full_block_is_compressed_without_buffering() {
        let mut engine = MdEngine::<Sha512Compression>::new();

        engine.update(&[0xab; 128]);

        assert!(engine.buffer.is_empty());
        assert_ne!(engine.state, Sha512Compression::INITIAL_STATE);
    }
}
