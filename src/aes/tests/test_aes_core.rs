use super::super::{decrypt_block, encrypt_block, is_hardware_supported, schedule_encrypt_only, schedule_full, Key256};

fn require_hardware() {
    if !is_hardware_supported() {
        panic!("AES-NI not available on this CPU; tests require it");
    }
}

fn key_from_hex(hex_str: &str) -> Key256 {
    let bytes = hex::decode(hex_str).expect("valid hex");
    bytes.try_into().expect("32-byte key")
}

#[test]
fn all_zero_key_round_key_14_matches_fips197() {
    require_hardware();
    let key: Key256 = [0u8; 32];
    let schedule = schedule_full(&key);
    let round_key_14 = schedule.round_key_bytes(14);
    assert_eq!(
        round_key_14,
        [
            0x10, 0xf8, 0x0a, 0x17, 0x53, 0xbf, 0x72, 0x9c, 0x45, 0xc9, 0x79, 0xe7, 0xcb, 0x70,
            0x63, 0x85,
        ]
    );
}

#[test]
fn encrypt_matches_known_answer_test_vector() {
    require_hardware();
    let key = key_from_hex("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    let plaintext: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let expected_ciphertext: [u8; 16] = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    let schedule = schedule_full(&key);
    let ciphertext = encrypt_block(&schedule, &plaintext);
    assert_eq!(ciphertext, expected_ciphertext);

    let decrypted = decrypt_block(&schedule, &ciphertext);
    assert_eq!(decrypted, plaintext);
}

#[test]
fn decrypt_then_encrypt_round_trips_for_an_arbitrary_block() {
    require_hardware();
    let key: Key256 = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e,
        0x1f, 0x20,
    ];
    let ciphertext: [u8; 16] = [
        0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
        0x99,
    ];
    let schedule = schedule_full(&key);

    let plaintext = decrypt_block(&schedule, &ciphertext);
    let recovered_ciphertext = encrypt_block(&schedule, &plaintext);

    assert_eq!(recovered_ciphertext, ciphertext);
}

#[test]
fn encrypt_only_schedule_agrees_with_full_schedule_on_encryption_round_keys() {
    require_hardware();
    let key: Key256 = [0x5a; 32];
    let full = schedule_full(&key);
    let enc_only = schedule_encrypt_only(&key);

    for round in 0..=14 {
        assert_eq!(
            full.round_key_bytes(round),
            enc_only.round_key_bytes(round),
            "round key {round} disagrees between schedules"
        );
    }
}
