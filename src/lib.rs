//! A reference implementation of NORX, a sponge-style authenticated
//! encryption with associated data (AEAD) scheme built over a 16-word
//! permutation.
//!
//! This crate covers the serial (`D = 1`) mode only: construction, the state
//! layout and permutation, the absorb/encrypt/decrypt sponge machinery, and
//! constant-time tag verification. It has no CLI, no test-vector harness, and
//! no parallel (`D >= 2`) tree mode.
//!
//! ```
//! use norx::{Aead, Params};
//!
//! let aead = Aead::new(Params::norx64_4_1());
//! let key = [0u8; 32];
//! let nonce = [0u8; 16];
//!
//! let ciphertext = aead
//!     .encrypt(&key, &nonce, b"header", b"hello, norx", b"trailer")
//!     .unwrap();
//! let plaintext = aead
//!     .decrypt(&key, &nonce, b"header", &ciphertext, b"trailer")
//!     .unwrap();
//! assert_eq!(plaintext, b"hello, norx");
//! ```

#[cfg(test)]
mod test;

mod aead;
mod params;
mod permutation;
mod sponge;
mod state;
mod word;

pub use {
    aead::{Aead, Error},
    params::{Params, ParamsError},
    word::Word,
};
