//! Randomized end-to-end properties of the full AEAD: round-trip, bit-flip
//! authentication, nonce/associated-data binding, and length preservation.

use rand::Rng;

use crate::{params::Params, Aead, Error};

fn random_bytes(n: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen()).collect()
}

/// Property 1: round-trip.
#[test]
fn round_trip_random_inputs() {
    let aead = Aead::new(Params::norx64_4_1());
    for _ in 0..50 {
        let key = random_bytes(32);
        let nonce = random_bytes(16);
        let header = random_bytes(rand::thread_rng().gen_range(0..200));
        let plaintext = random_bytes(rand::thread_rng().gen_range(0..200));
        let trailer = random_bytes(rand::thread_rng().gen_range(0..200));

        let c = aead.encrypt(&key, &nonce, &header, &plaintext, &trailer).unwrap();
        let m = aead.decrypt(&key, &nonce, &header, &c, &trailer).unwrap();
        assert_eq!(m, plaintext);
    }
}

/// Property 2: flipping any single bit of the ciphertext causes decryption
/// to fail. Exhaustively checked bit-by-bit for one representative
/// ciphertext.
#[test]
fn every_single_bit_flip_in_ciphertext_breaks_authentication() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = random_bytes(32);
    let nonce = random_bytes(16);
    let header = random_bytes(13);
    let plaintext = random_bytes(37);
    let trailer = random_bytes(5);

    let c = aead.encrypt(&key, &nonce, &header, &plaintext, &trailer).unwrap();

    for byte in 0..c.len() {
        for bit in 0..8u8 {
            let mut tampered = c.clone();
            tampered[byte] ^= 1 << bit;
            let result = aead.decrypt(&key, &nonce, &header, &tampered, &trailer);
            assert_eq!(
                result,
                Err(Error::AuthenticationFailed),
                "flipping byte {byte} bit {bit} did not break authentication"
            );
        }
    }
}

/// Property 3: varying the nonce changes the tag (and here, since the
/// plaintext is non-empty, the whole ciphertext) with overwhelming
/// probability.
#[test]
fn nonce_change_changes_ciphertext() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = random_bytes(32);
    let header = random_bytes(10);
    let plaintext = random_bytes(20);
    let trailer = random_bytes(3);

    let nonce_a = [0u8; 16];
    let mut nonce_b = [0u8; 16];
    nonce_b[0] = 1;

    let c_a = aead.encrypt(&key, &nonce_a, &header, &plaintext, &trailer).unwrap();
    let c_b = aead.encrypt(&key, &nonce_b, &header, &plaintext, &trailer).unwrap();
    assert_ne!(c_a, c_b);
}

/// Property 4: modifying a byte of the header or trailer breaks
/// authentication even though the ciphertext body is untouched.
#[test]
fn associated_data_is_bound_to_the_tag() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = random_bytes(32);
    let nonce = random_bytes(16);
    let header = random_bytes(13);
    let plaintext = random_bytes(21);
    let trailer = random_bytes(9);

    let c = aead.encrypt(&key, &nonce, &header, &plaintext, &trailer).unwrap();

    let mut tampered_header = header.clone();
    tampered_header[0] ^= 1;
    assert_eq!(
        aead.decrypt(&key, &nonce, &tampered_header, &c, &trailer),
        Err(Error::AuthenticationFailed)
    );

    let mut tampered_trailer = trailer.clone();
    tampered_trailer[0] ^= 1;
    assert_eq!(
        aead.decrypt(&key, &nonce, &header, &c, &tampered_trailer),
        Err(Error::AuthenticationFailed)
    );
}

/// Property 5: every combination of empty header/payload/trailer produces a
/// valid, round-tripping ciphertext.
#[test]
fn every_combination_of_empty_fields_round_trips() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = random_bytes(32);
    let nonce = random_bytes(16);
    let non_empty = random_bytes(10);

    for header_empty in [true, false] {
        for plaintext_empty in [true, false] {
            for trailer_empty in [true, false] {
                let header: &[u8] = if header_empty { b"" } else { &non_empty };
                let plaintext: &[u8] = if plaintext_empty { b"" } else { &non_empty };
                let trailer: &[u8] = if trailer_empty { b"" } else { &non_empty };

                let c = aead.encrypt(&key, &nonce, header, plaintext, trailer).unwrap();
                assert_eq!(c.len(), plaintext.len() + aead.params().tag_bytes());
                let m = aead.decrypt(&key, &nonce, header, &c, trailer).unwrap();
                assert_eq!(m, plaintext);
            }
        }
    }
}

/// Property 6: length preservation.
#[test]
fn ciphertext_and_plaintext_lengths_are_exact() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = random_bytes(32);
    let nonce = random_bytes(16);

    for len in [0, 1, 79, 80, 81, 250] {
        let plaintext = random_bytes(len);
        let c = aead.encrypt(&key, &nonce, b"", &plaintext, b"").unwrap();
        assert_eq!(c.len(), len + aead.params().tag_bytes());
        let m = aead.decrypt(&key, &nonce, b"", &c, b"").unwrap();
        assert_eq!(m.len(), c.len() - aead.params().tag_bytes());
        assert_eq!(m, plaintext);
    }
}

#[test]
fn rejects_wrong_key_length() {
    let aead = Aead::new(Params::norx64_4_1());
    let nonce = [0u8; 16];
    let result = aead.encrypt(&[0u8; 31], &nonce, b"", b"", b"");
    assert_eq!(
        result,
        Err(Error::InvalidKeyLength {
            expected: 32,
            actual: 31
        })
    );
}

#[test]
fn rejects_wrong_nonce_length() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = [0u8; 32];
    let result = aead.encrypt(&key, &[0u8; 15], b"", b"", b"");
    assert_eq!(
        result,
        Err(Error::InvalidNonceLength {
            expected: 16,
            actual: 15
        })
    );
}

#[test]
fn rejects_ciphertext_shorter_than_tag() {
    let aead = Aead::new(Params::norx64_4_1());
    let key = [0u8; 32];
    let nonce = [0u8; 16];
    let result = aead.decrypt(&key, &nonce, b"", &[0u8; 10], b"");
    assert_eq!(result, Err(Error::CiphertextTooShort));
}
