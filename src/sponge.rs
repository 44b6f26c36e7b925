//! Block-partitioning drivers over [`State`](crate::state::State).
//!
//! These three functions all share one control structure, taken directly
//! from the reference implementation: chop the input into `rate_bytes()`
//! chunks, process each full chunk, and then — as long as the input was
//! non-empty to begin with — *always* process one more padded chunk from
//! whatever remains, even if nothing remains (a non-empty input that happens
//! to be an exact multiple of the rate still gets a trailing all-padding
//! block). A completely empty input is the only case that's skipped outright:
//! no tag injection, no permutation call, no output bytes.
use crate::{params::Params, state::State, word::Word};

/// `absorb_data(S, x, tag)`.
pub fn absorb_data<W: Word>(state: &mut State<W>, params: &Params<W>, x: &[u8], tag: u8) {
    if x.is_empty() {
        return;
    }
    let n = params.rate_bytes();
    let mut chunks = x.chunks_exact(n);
    for block in &mut chunks {
        state.absorb_block(params, block, tag);
    }
    state.absorb_lastblock(params, chunks.remainder(), tag);
}

/// `encrypt_data(S, m) -> c`.
pub fn encrypt_data<W: Word>(state: &mut State<W>, params: &Params<W>, m: &[u8]) -> Vec<u8> {
    if m.is_empty() {
        return Vec::new();
    }
    let n = params.rate_bytes();
    let mut chunks = m.chunks_exact(n);
    let mut c = Vec::with_capacity(m.len() + n);
    for block in &mut chunks {
        c.extend(state.encrypt_block(params, block));
    }
    c.extend(state.encrypt_lastblock(params, chunks.remainder()));
    c
}

/// `decrypt_data(S, c) -> m`.
pub fn decrypt_data<W: Word>(state: &mut State<W>, params: &Params<W>, c: &[u8]) -> Vec<u8> {
    if c.is_empty() {
        return Vec::new();
    }
    let n = params.rate_bytes();
    let mut chunks = c.chunks_exact(n);
    let mut m = Vec::with_capacity(c.len());
    for block in &mut chunks {
        m.extend(state.decrypt_block(params, block));
    }
    m.extend(state.decrypt_lastblock(params, chunks.remainder()));
    m
}
