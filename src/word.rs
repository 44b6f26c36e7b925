//! Width-generic word primitives.
//!
//! NORX is parameterised over a word width `W` of 32 or 64 bits. Rather than
//! branch on `W` at every bit operation, [`Word`] gives each width its own
//! monomorphised implementation: `u32` and `u64` each carry their own rotation
//! tuple and initialisation constants, so a NORX instance is simply
//! `Params<u32>` or `Params<u64>` and the compiler produces a dedicated code
//! path for each.

use std::{fmt::Debug, ops::BitXor};

use zeroize::Zeroize;

/// A word of the permutation state.
///
/// Implemented only for `u32` and `u64`, the two widths NORX defines. `BITS`,
/// `ROT`, and `U` are taken directly from the NORX specification's parameter
/// tables; `rotr` and `h` are the two primitives every other operation in the
/// scheme (`G`, `F`, absorb, encrypt/decrypt, tag) is built from.
pub trait Word:
    Copy + Clone + Default + PartialEq + Eq + Debug + Zeroize + BitXor<Output = Self>
{
    /// Word width in bits (32 or 64).
    const BITS: u32;

    /// The four rotation amounts used by [`G`](crate::permutation::g), in
    /// order.
    const ROT: [u32; 4];

    /// The ten initialisation constants `U[0..9]`.
    const U: [Self; 10];

    /// The byte width of one word (`BITS / 8`).
    const BYTES: usize;

    /// Load a little-endian word from the first [`Self::BYTES`] bytes of
    /// `bytes`.
    fn from_le_bytes(bytes: &[u8]) -> Self;

    /// Store `self` as [`Self::BYTES`] little-endian bytes into `out`.
    fn write_le_bytes(self, out: &mut [u8]);

    /// `ROTR(a, r) = ((a >> r) | (a << (W - r)))`, with `0 < r < W`.
    fn rotr(self, r: u32) -> Self;

    /// `H(a, b) = (a XOR b) XOR ((a AND b) << 1)`.
    ///
    /// A bitwise approximation of addition-with-carry: the shifted `AND` term
    /// propagates the low bit of what a real carry chain would produce.
    /// `H(a, b) == H(b, a)`.
    fn h(self, other: Self) -> Self;
}

impl Word for u32 {
    const BITS: u32 = 32;
    const ROT: [u32; 4] = [8, 11, 16, 31];
    const BYTES: usize = 4;
    const U: [Self; 10] = [
        0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344, 0x254F537A, 0x38531D48, 0x839C6E83,
        0xF97A3AE5, 0x8C91D88C, 0x11EAFB59,
    ];

    fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[..4]);
        u32::from_le_bytes(buf)
    }

    fn write_le_bytes(self, out: &mut [u8]) {
        out[..4].copy_from_slice(&self.to_le_bytes());
    }

    fn rotr(self, r: u32) -> Self {
        self.rotate_right(r)
    }

    fn h(self, other: Self) -> Self {
        (self ^ other) ^ ((self & other) << 1)
    }
}

impl Word for u64 {
    const BITS: u32 = 64;
    const ROT: [u32; 4] = [8, 19, 40, 63];
    const BYTES: usize = 8;
    const U: [Self; 10] = [
        0x243F6A8885A308D3,
        0x13198A2E03707344,
        0xA4093822299F31D0,
        0x082EFA98EC4E6C89,
        0xAE8858DC339325A1,
        0x670A134EE52D7FA6,
        0xC4316D80CD967541,
        0xD21DFBF8B630B762,
        0x375A18D261E7F892,
        0x343D1F187D92285B,
    ];

    fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[..8]);
        u64::from_le_bytes(buf)
    }

    fn write_le_bytes(self, out: &mut [u8]) {
        out[..8].copy_from_slice(&self.to_le_bytes());
    }

    fn rotr(self, r: u32) -> Self {
        self.rotate_right(r)
    }

    fn h(self, other: Self) -> Self {
        (self ^ other) ^ ((self & other) << 1)
    }
}
