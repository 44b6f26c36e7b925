//! Bit-bounds and algebraic properties of the word primitives (spec property
//! 8: `ROTR`/`H` stay within the word's native range by construction, since
//! both operate on `u32`/`u64` directly with no separate mask).

use rand::Rng;

use crate::word::Word;

#[test]
fn rotr_is_involution_over_full_cycle() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a: u64 = rng.gen();
        for r in 1..64 {
            let rotated = a.rotr(r);
            let restored = rotated.rotr(64 - r);
            assert_eq!(a, restored, "rotr({a:#x}, {r}) did not round-trip");
        }
    }
}

#[test]
fn rotr_zero_distance_is_identity_for_full_width_rotation() {
    // rotr(a, r).rotr(64 - r) == a already covers every 0 < r < 64; rotr by a
    // full word width is the identity, which `u64::rotate_right` guarantees
    // without needing a width mask.
    let a: u64 = 0x0123_4567_89AB_CDEF;
    assert_eq!(a.rotr(64), a);
}

#[test]
fn h_is_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a: u64 = rng.gen();
        let b: u64 = rng.gen();
        assert_eq!(a.h(b), b.h(a));
    }
}

#[test]
fn h_32_is_commutative() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a: u32 = rng.gen();
        let b: u32 = rng.gen();
        assert_eq!(a.h(b), b.h(a));
    }
}

#[test]
fn word_round_trips_through_le_bytes() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let a: u64 = rng.gen();
        let mut buf = [0u8; 8];
        a.write_le_bytes(&mut buf);
        assert_eq!(u64::from_le_bytes(&buf), a);

        let a: u32 = rng.gen();
        let mut buf = [0u8; 4];
        a.write_le_bytes(&mut buf);
        assert_eq!(u32::from_le_bytes(&buf), a);
    }
}

#[test]
fn rotation_tuples_and_constants_match_the_reference() {
    assert_eq!(<u64 as Word>::ROT, [8, 19, 40, 63]);
    assert_eq!(<u32 as Word>::ROT, [8, 11, 16, 31]);
    assert_eq!(<u64 as Word>::U[0], 0x243F_6A88_85A3_08D3);
    assert_eq!(<u32 as Word>::U[0], 0x243F_6A88);
    assert_eq!(<u64 as Word>::U[9], 0x343D_1F18_7D92_285B);
    assert_eq!(<u32 as Word>::U[9], 0x11EA_FB59);
}
