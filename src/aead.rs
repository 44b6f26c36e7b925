//! The AEAD composer: `init -> header -> payload -> trailer -> tag`.
use std::fmt;

use zeroize::Zeroize;

use crate::{
    params::{Params, HEADER_TAG, TRAILER_TAG},
    sponge::{absorb_data, decrypt_data, encrypt_data},
    state::{verify_tag, State},
    word::Word,
};

/// A NORX instance bound to a fixed parameter block.
///
/// `Aead<W>` owns no key material itself — `key` and `nonce` are passed to
/// [`encrypt`](Aead::encrypt)/[`decrypt`](Aead::decrypt) per call, matching
/// the reference, which takes them as plain arguments rather than storing
/// them on the object.
#[derive(Debug, Clone, Copy)]
pub struct Aead<W> {
    params: Params<W>,
}

impl<W: Word> Aead<W> {
    pub fn new(params: Params<W>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params<W> {
        &self.params
    }

    /// `aead_encrypt(H, M, Tr, N, K) -> C`.
    ///
    /// Returns `ciphertext = encrypt(M) || tag`, `|ciphertext| = |M| +
    /// tag_bytes()`.
    pub fn encrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        header: &[u8],
        plaintext: &[u8],
        trailer: &[u8],
    ) -> Result<Vec<u8>, Error> {
        self.check_key_nonce(key, nonce)?;

        let mut state = State::init(&self.params, nonce, key);
        absorb_data(&mut state, &self.params, header, HEADER_TAG);
        let mut c = encrypt_data(&mut state, &self.params, plaintext);
        absorb_data(&mut state, &self.params, trailer, TRAILER_TAG);
        c.extend(state.generate_tag(&self.params));
        Ok(c)
    }

    /// `aead_decrypt(H, C, Tr, N, K) -> M` or [`Error::AuthenticationFailed`].
    ///
    /// The candidate plaintext is never returned to the caller unless the
    /// tag verifies; on any failure path it is zeroized before this function
    /// returns.
    pub fn decrypt(
        &self,
        key: &[u8],
        nonce: &[u8],
        header: &[u8],
        ciphertext: &[u8],
        trailer: &[u8],
    ) -> Result<Vec<u8>, Error> {
        self.check_key_nonce(key, nonce)?;

        let tag_bytes = self.params.tag_bytes();
        if ciphertext.len() < tag_bytes {
            return Err(Error::CiphertextTooShort);
        }
        let split = ciphertext.len() - tag_bytes;
        let (body, received_tag) = ciphertext.split_at(split);

        let mut state = State::init(&self.params, nonce, key);
        absorb_data(&mut state, &self.params, header, HEADER_TAG);
        let mut candidate = decrypt_data(&mut state, &self.params, body);
        absorb_data(&mut state, &self.params, trailer, TRAILER_TAG);
        let expected_tag = state.generate_tag(&self.params);

        if verify_tag(received_tag, &expected_tag) {
            Ok(candidate)
        } else {
            candidate.zeroize();
            Err(Error::AuthenticationFailed)
        }
    }

    fn check_key_nonce(&self, key: &[u8], nonce: &[u8]) -> Result<(), Error> {
        if key.len() != self.params.key_bytes() {
            return Err(Error::InvalidKeyLength {
                expected: self.params.key_bytes(),
                actual: key.len(),
            });
        }
        if nonce.len() != self.params.nonce_bytes() {
            return Err(Error::InvalidNonceLength {
                expected: self.params.nonce_bytes(),
                actual: nonce.len(),
            });
        }
        Ok(())
    }
}

/// A call-time failure of [`Aead::encrypt`]/[`Aead::decrypt`].
///
/// All errors are terminal: there are no retries and no partial results. On
/// [`Error::AuthenticationFailed`], no candidate plaintext is observable —
/// it was zeroized before the error was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidKeyLength { expected: usize, actual: usize },
    InvalidNonceLength { expected: usize, actual: usize },
    CiphertextTooShort,
    AuthenticationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength { expected, actual } => {
                write!(f, "invalid key length: expected {expected} bytes, got {actual}")
            }
            Error::InvalidNonceLength { expected, actual } => {
                write!(f, "invalid nonce length: expected {expected} bytes, got {actual}")
            }
            Error::CiphertextTooShort => write!(f, "ciphertext shorter than the tag"),
            Error::AuthenticationFailed => write!(f, "authentication failed"),
        }
    }
}

impl std::error::Error for Error {}
