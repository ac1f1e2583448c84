//! Conversion between byte sequences and fixed-width word sequences.
use std::fmt::Debug;
use std::ops::{BitOr, Shl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("cannot split {len} bytes into words of {width} bytes")]
    UnalignedLength { len: usize, width: usize },
}

pub trait Word:
    Copy + Default + Debug + Eq + Send + Sync + From<u8> + Shl<u32, Output = Self> + BitOr<Output = Self>
{
    const BYTES: usize;

    fn write_bytes(self, endian: Endian, out: &mut [u8]);

    /// Build a word from exactly `Self::BYTES` bytes.
    fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
        debug_assert_eq!(bytes.len(), Self::BYTES);
        let fold = |acc: Self, &b: &u8| (acc << 8) | Self::from(b);
        match endian {
            Endian::Big => bytes.iter().fold(Self::default(), fold),
            Endian::Little => bytes.iter().rev().fold(Self::default(), fold),
        }
    }
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BYTES: usize = std::mem::size_of::<$t>();

                fn write_bytes(self, endian: Endian, out: &mut [u8]) {
                    let bytes = match endian {
                        Endian::Big => self.to_be_bytes(),
                        Endian::Little => self.to_le_bytes(),
                    };
                    out.copy_from_slice(&bytes);
                }
            }
        )*
    };
}

impl_word!(u32, u64);

pub fn bytes_to_words<W: Word>(bytes: &[u8], endian: Endian) -> Result<Vec<W>, CodecError> {
    if bytes.len() % W::BYTES != 0 {
        return Err(CodecError::UnalignedLength {
            len: bytes.len(),
            width: W::BYTES,
        });
    }
    Ok(bytes
        .chunks_exact(W::BYTES)
        .map(|chunk| W::from_bytes(chunk, endian))
        .collect())
}

pub fn words_to_bytes<W: Word>(words: &[W], endian: Endian) -> Vec<u8> {
    let mut bytes = vec![0u8; words.len() * W::BYTES];
    write_words(words, endian, &mut bytes);
    bytes
}

/// Decode one block into its 16 message words.
pub(crate) fn read_block<W: Word>(block: &[u8], endian: Endian) -> [W; 16] {
    debug_assert_eq!(block.len(), 16 * W::BYTES);
    let mut words = [W::default(); 16];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *word = W::from_bytes(chunk, endian);
    }
    words
}

/// Serialise `words` into `out`. Stops at whichever runs out first, which is
/// how the truncated digests (SHA-224, SHA-384) are produced.
pub(crate) fn write_words<W: Word>(words: &[W], endian: Endian, out: &mut [u8]) {
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
        word.write_bytes(endian, chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Endian::Big, vec![0x01020304, 0xa0b0c0d0])]
    #[case(Endian::Little, vec![0x04030201, 0xd0c0b0a0])]
    fn bytes_to_words_respects_endianness(#[case] endian: Endian, #[case] expected: Vec<u32>) {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0xa0, 0xb0, 0xc0, 0xd0];

        let words = bytes_to_words::<u32>(&bytes, endian).unwrap();

        assert_eq!(words, expected);
    }

    #[test]
    fn bytes_to_words_reads_u64_big_endian() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];

        let words = bytes_to_words::<u64>(&bytes, Endian::Big).unwrap();

        assert_eq!(words, vec![0x0102030405060708]);
    }

    #[test]
    fn bytes_to_words_rejects_partial_word() {
        let err = bytes_to_words::<u32>(&[0u8; 7], Endian::Big).unwrap_err();

        assert_eq!(err, CodecError::UnalignedLength { len: 7, width: 4 });
    }

    #[test]
    fn words_to_bytes_inverts_bytes_to_words() {
        let bytes: Vec<u8> = (0..32).collect();

        for endian in [Endian::Big, Endian::Little] {
            let words = bytes_to_words::<u64>(&bytes, endian).unwrap();
            assert_eq!(words_to_bytes(&words, endian), bytes);
        }
    }

    #[test]
    fn write_words_truncates_to_output_length() {
        let mut out = [0u8; 8];

        write_words(&[0x11223344u32, 0x55667788, 0x99aabbcc], Endian::Big, &mut out);

        assert_eq!(out, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    }
}
