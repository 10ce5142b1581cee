use super::super::lcg::Lcg;

#[test]
fn is_deterministic_for_a_given_seed() {
    let mut a = Lcg::seeded(42);
    let mut b = Lcg::seeded(42);
    for _ in 0..16 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

#[test]
fn outputs_never_set_the_top_bit() {
    let mut lcg = Lcg::seeded(0xdead_beef);
    for _ in 0..1000 {
        assert_eq!(lcg.next_u32() & 0x8000_0000, 0);
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Lcg::seeded(1);
    let mut b = Lcg::seeded(2);
    assert_ne!(a.next_u32(), b.next_u32());
}
