//! The 16-word sponge state and the per-block operations over it.
//!
//! The first [`WORDS_RATE`] words of the state are the *rate*: the portion
//! XORed with input and read back out as output. The remaining six words are
//! the *capacity*: they're only ever touched by the permutation, never
//! XORed directly with caller-controlled bytes, which is what keeps them
//! secret.
use docext::docext;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    params::{Params, FINAL_TAG, PAYLOAD_TAG, STATE_WORDS, WORDS_RATE},
    permutation::f_r,
    word::Word,
};

/// The NORX permutation state: 16 words, logically a 4x4 matrix in row-major
/// order, rate words first.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct State<W>(pub(crate) [W; STATE_WORDS]);

impl<W: Word> State<W> {
    /// A fresh, all-zero state.
    pub fn new() -> Self {
        Self([W::default(); STATE_WORDS])
    }

    /// `init(S, N, K)`: load the nonce and key into the state, XOR the
    /// parameter block into the last row, then apply `F^R` once.
    ///
    /// Layout (row-major):
    ///
    /// ```text
    /// U0  N0  N1  U1
    /// K0  K1  K2  K3
    /// U2  U3  U4  U5
    /// U6  U7  U8  U9
    /// ```
    ///
    /// followed by `S[12] ^= W::BITS`, `S[13] ^= R`, `S[14] ^= D`, `S[15] ^=
    /// T`.
    pub fn init(params: &Params<W>, nonce: &[u8], key: &[u8]) -> Self {
        debug_assert_eq!(nonce.len(), params.nonce_bytes());
        debug_assert_eq!(key.len(), params.key_bytes());

        let b = W::BYTES;
        let k: Vec<W> = (0..4).map(|i| W::from_le_bytes(&key[b * i..b * (i + 1)])).collect();
        let n: Vec<W> = (0..2).map(|i| W::from_le_bytes(&nonce[b * i..b * (i + 1)])).collect();
        let u = W::U;

        let mut s = [W::default(); STATE_WORDS];
        s[0] = u[0];
        s[1] = n[0];
        s[2] = n[1];
        s[3] = u[1];
        s[4] = k[0];
        s[5] = k[1];
        s[6] = k[2];
        s[7] = k[3];
        s[8] = u[2];
        s[9] = u[3];
        s[10] = u[4];
        s[11] = u[5];
        s[12] = u[6];
        s[13] = u[7];
        s[14] = u[8];
        s[15] = u[9];

        s[12] = s[12] ^ word_from_u32::<W>(W::BITS);
        s[13] = s[13] ^ word_from_u32::<W>(params.rounds());
        s[14] = s[14] ^ word_from_u32::<W>(params.degree());
        s[15] = s[15] ^ word_from_u32::<W>(params.tag_bits());

        let mut state = Self(s);
        f_r(&mut state.0, params.rounds());
        state
    }

    /// XOR a single-bit domain-separation tag into `S[15]`.
    fn inject_tag(&mut self, tag: u8) {
        self.0[15] = self.0[15] ^ word_from_u32::<W>(tag as u32);
    }

    /// `absorb_block(S, block, tag)`: inject `tag`, apply `F^R`, XOR the
    /// block's rate words into the state.
    pub fn absorb_block(&mut self, params: &Params<W>, block: &[u8], tag: u8) {
        debug_assert_eq!(block.len(), params.rate_bytes());
        self.inject_tag(tag);
        f_r(&mut self.0, params.rounds());
        let b = W::BYTES;
        for i in 0..WORDS_RATE {
            self.0[i] = self.0[i] ^ W::from_le_bytes(&block[b * i..b * (i + 1)]);
        }
    }

    /// `absorb_lastblock(S, x, tag)`: pad `x` to a full rate block, then
    /// absorb it.
    pub fn absorb_lastblock(&mut self, params: &Params<W>, x: &[u8], tag: u8) {
        let padded = pad(x, params.rate_bytes());
        self.absorb_block(params, &padded, tag);
    }

    /// `encrypt_block(S, block) -> ciphertext`: inject `PAYLOAD_TAG`, apply
    /// `F^R`, XOR the plaintext block into the rate words, and emit the
    /// resulting rate words as ciphertext.
    pub fn encrypt_block(&mut self, params: &Params<W>, block: &[u8]) -> Vec<u8> {
        debug_assert_eq!(block.len(), params.rate_bytes());
        self.inject_tag(PAYLOAD_TAG);
        f_r(&mut self.0, params.rounds());
        let b = W::BYTES;
        let mut out = vec![0u8; params.rate_bytes()];
        for i in 0..WORDS_RATE {
            self.0[i] = self.0[i] ^ W::from_le_bytes(&block[b * i..b * (i + 1)]);
            self.0[i].write_le_bytes(&mut out[b * i..b * (i + 1)]);
        }
        out
    }

    /// `encrypt_lastblock(S, remainder) -> ciphertext`: pad the remainder to
    /// a full rate block, encrypt it, and truncate the output back to
    /// `remainder.len()` bytes.
    pub fn encrypt_lastblock(&mut self, params: &Params<W>, remainder: &[u8]) -> Vec<u8> {
        let padded = pad(remainder, params.rate_bytes());
        let mut out = self.encrypt_block(params, &padded);
        out.truncate(remainder.len());
        out
    }

    /// `decrypt_block(S, block) -> plaintext`: inject `PAYLOAD_TAG`, apply
    /// `F^R`, recover the plaintext rate words by XORing the ciphertext
    /// against the pre-encryption state, then replace the rate words with
    /// the ciphertext so later blocks absorb the same stream the encryptor
    /// produced.
    pub fn decrypt_block(&mut self, params: &Params<W>, block: &[u8]) -> Vec<u8> {
        debug_assert_eq!(block.len(), params.rate_bytes());
        self.inject_tag(PAYLOAD_TAG);
        f_r(&mut self.0, params.rounds());
        let b = W::BYTES;
        let mut out = vec![0u8; params.rate_bytes()];
        for i in 0..WORDS_RATE {
            let c = W::from_le_bytes(&block[b * i..b * (i + 1)]);
            (self.0[i] ^ c).write_le_bytes(&mut out[b * i..b * (i + 1)]);
            self.0[i] = c;
        }
        out
    }

    /// `decrypt_lastblock(S, remainder) -> plaintext`: reconstruct what the
    /// encryptor's padded last block would have produced by serialising the
    /// current rate words, overwriting the first `remainder.len()` bytes
    /// with the ciphertext remainder, and reapplying the `10*1` pad bits to
    /// the tail — then decrypt as a normal block and truncate.
    pub fn decrypt_lastblock(&mut self, params: &Params<W>, remainder: &[u8]) -> Vec<u8> {
        self.inject_tag(PAYLOAD_TAG);
        f_r(&mut self.0, params.rounds());

        let rate_bytes = params.rate_bytes();
        let b = W::BYTES;
        let mut y = vec![0u8; rate_bytes];
        for i in 0..WORDS_RATE {
            self.0[i].write_le_bytes(&mut y[b * i..b * (i + 1)]);
        }
        y[..remainder.len()].copy_from_slice(remainder);
        y[remainder.len()] ^= 0x01;
        y[rate_bytes - 1] ^= 0x80;

        let mut out = vec![0u8; rate_bytes];
        for i in 0..WORDS_RATE {
            let c = W::from_le_bytes(&y[b * i..b * (i + 1)]);
            (self.0[i] ^ c).write_le_bytes(&mut out[b * i..b * (i + 1)]);
            self.0[i] = c;
        }
        out.truncate(remainder.len());
        out
    }

    /// `generate_tag(S) -> tag`: inject `FINAL_TAG`, apply `F^R` twice, and
    /// emit the first `tag_bytes()` bytes of the (now doubly-permuted) rate
    /// words.
    pub fn generate_tag(&mut self, params: &Params<W>) -> Vec<u8> {
        self.inject_tag(FINAL_TAG);
        f_r(&mut self.0, params.rounds());
        f_r(&mut self.0, params.rounds());
        let b = W::BYTES;
        let mut out = vec![0u8; params.rate_bytes()];
        for i in 0..WORDS_RATE {
            self.0[i].write_le_bytes(&mut out[b * i..b * (i + 1)]);
        }
        out.truncate(params.tag_bytes());
        out
    }
}

/// `pad(x)`: the `10*1` multi-rate pad. `x` must be shorter than
/// `rate_bytes`. Produces a `rate_bytes`-long buffer: `x` followed by a
/// `0x01` byte, zero or more `0x00` bytes, with the top bit of the final byte
/// set.
///
/// $$ \mathrm{pad}(x) = x \,\|\, \mathtt{0x01} \,\|\, 0^{*} \,\|\, (\mathtt{0x80}
/// \text{ ORed into the last byte}) $$
#[docext]
pub fn pad(x: &[u8], rate_bytes: usize) -> Vec<u8> {
    debug_assert!(x.len() < rate_bytes);
    let mut y = vec![0u8; rate_bytes];
    y[..x.len()].copy_from_slice(x);
    y[x.len()] = 0x01;
    y[rate_bytes - 1] |= 0x80;
    y
}

/// Constant-time tag comparison.
///
/// `acc` accumulates the bitwise OR of every byte-wise XOR between `t0` and
/// `t1`, so every byte of both tags is always touched regardless of where (or
/// whether) they differ; no branch depends on tag content. Returns `true` iff
/// the tags are equal. `t0` and `t1` must be the same length.
pub fn verify_tag(t0: &[u8], t1: &[u8]) -> bool {
    debug_assert_eq!(t0.len(), t1.len());
    let mut acc: u16 = 0;
    for i in 0..t0.len() {
        acc |= (t0[i] ^ t1[i]) as u16;
    }
    (((acc.wrapping_sub(1)) >> 8) & 1).wrapping_sub(1) == 0
}

/// Convert a small non-negative integer to a word, matching the reference's
/// plain Python-int XOR of `W`/`R`/`D`/`T` into the state — these are always
/// far smaller than any word width NORX defines.
fn word_from_u32<W: Word>(n: u32) -> W {
    let bytes = n.to_le_bytes();
    let mut buf = vec![0u8; W::BYTES];
    buf[..4.min(W::BYTES)].copy_from_slice(&bytes[..4.min(W::BYTES)]);
    W::from_le_bytes(&buf)
}
