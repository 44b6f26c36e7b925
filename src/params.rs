//! The NORX parameter block.
//!
//! A [`Params<W>`] fixes everything about a NORX instance that isn't the key,
//! nonce, or message: the word width `W` (via the type parameter), the round
//! count `R`, the parallelism degree `D`, and the tag length `T` in bits.
//! Every other size in the scheme (`RATE`, `BYTES_TAG`, key/nonce byte
//! lengths, ...) is derived from those.
use std::fmt;

use crate::word::Word;

/// Domain-separation tags, XORed into `S[15]` before the permutation that
/// begins each phase. Single-bit flags so that identical bytes absorbed in
/// different phases diverge.
pub const HEADER_TAG: u8 = 1 << 0;
pub const PAYLOAD_TAG: u8 = 1 << 1;
pub const TRAILER_TAG: u8 = 1 << 2;
pub const FINAL_TAG: u8 = 1 << 3;

/// Branch/merge domain tags for the `D >= 2` parallel tree mode. Defined for
/// completeness with the NORX specification; the tree mode itself is out of
/// scope (see [`Params::new`]'s `degree` check), so these are never injected
/// by this crate.
#[allow(dead_code)]
pub const BRANCH_TAG: u8 = 1 << 4;
#[allow(dead_code)]
pub const MERGE_TAG: u8 = 1 << 5;

/// Number of rate words in the state. Fixed at 10 regardless of word width —
/// the state is always 16 words, the capacity is always 6 words.
pub const WORDS_RATE: usize = 10;

/// Number of words in the full permutation state.
pub const STATE_WORDS: usize = 16;

/// An immutable, validated NORX parameter block for word width `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params<W> {
    rounds: u32,
    degree: u32,
    tag_bits: u32,
    _word: std::marker::PhantomData<W>,
}

impl<W: Word> Params<W> {
    /// Construct a parameter block with `rounds` applications of `F` per
    /// permutation, parallelism `degree`, and a `tag_bits`-bit tag.
    ///
    /// `degree` must be `1`: this is a serial-mode (`D = 1`) implementation,
    /// the `D >= 2` branch/merge tree mode is out of scope. `tag_bits` must
    /// satisfy `0 <= tag_bits <= 10 * W::BITS`.
    pub fn new(rounds: u32, degree: u32, tag_bits: u32) -> Result<Self, ParamsError> {
        if rounds == 0 {
            return Err(ParamsError::RoundCountZero);
        }
        if degree != 1 {
            return Err(ParamsError::UnsupportedDegree(degree));
        }
        if tag_bits > 10 * W::BITS {
            return Err(ParamsError::TagLengthOutOfRange {
                tag_bits,
                max: 10 * W::BITS,
            });
        }
        Ok(Self {
            rounds,
            degree,
            tag_bits,
            _word: std::marker::PhantomData,
        })
    }

    /// Round count `R`.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Parallelism degree `D`. Always `1` for a successfully constructed
    /// `Params`.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Tag length `T` in bits.
    pub fn tag_bits(&self) -> u32 {
        self.tag_bits
    }

    /// Tag length in bytes, `T / 8`.
    pub fn tag_bytes(&self) -> usize {
        (self.tag_bits / 8) as usize
    }

    /// Key length in bytes, `K / 8 = 4 * BYTES_WORD`.
    pub fn key_bytes(&self) -> usize {
        4 * W::BYTES
    }

    /// Nonce length in bytes, `N / 8 = 2 * BYTES_WORD`.
    pub fn nonce_bytes(&self) -> usize {
        2 * W::BYTES
    }

    /// Rate in bytes, `BYTES_RATE = WORDS_RATE * BYTES_WORD`.
    pub fn rate_bytes(&self) -> usize {
        WORDS_RATE * W::BYTES
    }
}

impl Params<u64> {
    /// The NORX64-4-1 preset: `W = 64`, `R = 4`, `D = 1`, `T = 256`.
    pub fn norx64_4_1() -> Self {
        Self::new(4, 1, 256).expect("NORX64-4-1 parameters are always valid")
    }
}

impl Params<u32> {
    /// The NORX32-4-1 preset: `W = 32`, `R = 4`, `D = 1`, `T = 128`.
    pub fn norx32_4_1() -> Self {
        Self::new(4, 1, 128).expect("NORX32-4-1 parameters are always valid")
    }
}

/// A rejected NORX parameter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// `rounds` was zero; at least one application of `F` is required.
    RoundCountZero,
    /// `degree` was not `1`. Only the serial (`D = 1`) mode is implemented.
    UnsupportedDegree(u32),
    /// `tag_bits` exceeded `10 * W::BITS`.
    TagLengthOutOfRange { tag_bits: u32, max: u32 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::RoundCountZero => write!(f, "round count must be at least 1"),
            ParamsError::UnsupportedDegree(d) => {
                write!(f, "unsupported parallelism degree {d}, only D = 1 is implemented")
            }
            ParamsError::TagLengthOutOfRange { tag_bits, max } => {
                write!(f, "tag length {tag_bits} bits exceeds maximum of {max} bits")
            }
        }
    }
}

impl std::error::Error for ParamsError {}
