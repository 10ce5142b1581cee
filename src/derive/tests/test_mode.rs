use super::super::{derive_key, DerivationMode};

#[test]
fn ascii_hex_repeats_the_eight_character_hex_seed_four_times() {
    let key = derive_key(DerivationMode::AsciiHex, 0x14ef_a8ff);
    let seed = b"14efa8ff";
    for chunk in key.chunks_exact(8) {
        assert_eq!(chunk, seed);
    }
}

#[test]
fn ascii_hex_zero_pads_small_counters() {
    let key = derive_key(DerivationMode::AsciiHex, 0);
    assert_eq!(&key[0..8], b"00000000");
}

#[test]
fn raw_little_endian_is_eight_copies_of_the_byte_swapped_counter() {
    let key = derive_key(DerivationMode::RawLittleEndian, 0x0123_4567);
    // bswap32(0x01234567).to_le_bytes() reproduces the counter's big-endian
    // byte sequence.
    let expected_seed = [0x01, 0x23, 0x45, 0x67];
    for chunk in key.chunks_exact(4) {
        assert_eq!(chunk, expected_seed);
    }
}

#[test]
fn raw_little_endian_zero_counter_is_the_all_zero_key() {
    let key = derive_key(DerivationMode::RawLittleEndian, 0);
    assert_eq!(key, [0u8; 32]);
}

#[test]
fn factory_modes_are_deterministic_for_a_given_counter() {
    let a = derive_key(DerivationMode::Factory, 12345);
    let b = derive_key(DerivationMode::Factory, 12345);
    assert_eq!(a, b);
}

#[test]
fn factory_reversed_byte_swaps_each_lane_relative_to_factory() {
    let factory = derive_key(DerivationMode::Factory, 999);
    let reversed = derive_key(DerivationMode::FactoryReversed, 999);

    for (plain_chunk, rev_chunk) in factory.chunks_exact(4).zip(reversed.chunks_exact(4)) {
        let plain = u32::from_le_bytes(plain_chunk.try_into().unwrap());
        let rev = u32::from_le_bytes(rev_chunk.try_into().unwrap());
        assert_eq!(plain.swap_bytes(), rev);
    }
}

#[test]
fn default_mask_matches_historical_source_behavior() {
    assert!(DerivationMode::AsciiHex.default_mask_enabled());
    assert!(DerivationMode::RawLittleEndian.default_mask_enabled());
    assert!(!DerivationMode::Factory.default_mask_enabled());
    assert!(!DerivationMode::FactoryReversed.default_mask_enabled());
}
