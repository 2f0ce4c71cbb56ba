//! Tests for sub-seed derivation
//!
//! CRITICAL: Derivation is a pure function of (master, context, identifier).

use genesis_seed_core::{mix, Seed128, SeedAuthority, FIXED_SALT};

#[test]
fn test_derive_64_deterministic() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(42);

    let first = authority.derive_seed_64("test", 1).unwrap();
    for _ in 0..100 {
        assert_eq!(authority.derive_seed_64("test", 1).unwrap(), first);
    }
}

#[test]
fn test_derive_64_identifier_sensitivity() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(42);

    let s1 = authority.derive_seed_64("test", 1).unwrap();
    let s2 = authority.derive_seed_64("test", 2).unwrap();
    assert_ne!(s1, s2);
}

#[test]
fn test_derive_64_context_sensitivity() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(42);

    let terrain = authority.derive_seed_64("terrain", 1).unwrap();
    let weather = authority.derive_seed_64("weather", 1).unwrap();
    assert_ne!(terrain, weather);
}

#[test]
fn test_derive_64_master_sensitivity() {
    let a = SeedAuthority::new();
    let b = SeedAuthority::new();
    a.set_seed_64(42);
    b.set_seed_64(43);

    assert_ne!(
        a.derive_seed_64("terrain", 1).unwrap(),
        b.derive_seed_64("terrain", 1).unwrap()
    );
}

#[test]
fn test_derive_64_formula() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(42);

    assert_eq!(
        authority.derive_seed_64("test", 1).unwrap(),
        mix("test", 42) ^ 1
    );
}

#[test]
fn test_derive_64_from_128_uses_low_half() {
    let authority = SeedAuthority::new();
    authority.set_seed_128(Seed128::new(100, 200));

    assert_eq!(
        authority.derive_seed_64("mod", 99).unwrap(),
        mix("mod", 200) ^ 99
    );
}

#[test]
fn test_derive_128_from_128_master() {
    let authority = SeedAuthority::new();
    authority.set_seed_128(Seed128::new(100, 200));

    let d1 = authority.derive_seed_128("mod", 99).unwrap();
    assert_ne!(d1.high, d1.low);
    assert_eq!(d1.high, mix("mod", 100) ^ 99);
    assert_eq!(d1.low, mix("mod", 200) ^ 99);

    let d2 = authority.derive_seed_128("mod", 100).unwrap();
    assert!(d1.high != d2.high || d1.low != d2.low);

    let d1_again = authority.derive_seed_128("mod", 99).unwrap();
    assert_eq!(d1, d1_again);
}

#[test]
fn test_derive_128_from_64_master_uses_salt() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(7);

    let derived = authority.derive_seed_128("biome", 3).unwrap();
    assert_eq!(derived.high, mix("biome", 7) ^ 3);
    assert_eq!(derived.low, mix("biome", 7 ^ FIXED_SALT) ^ 3);
    assert_ne!(derived.high, derived.low);
}

#[test]
fn test_derive_128_halves_differ_even_for_salt_master() {
    // Master equal to the salt maps the low half onto seed 0
    let authority = SeedAuthority::new();
    authority.set_seed_64(FIXED_SALT);

    let derived = authority.derive_seed_128("", 0).unwrap();
    assert_ne!(derived.high, derived.low);
}

#[test]
fn test_derive_empty_context() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(0);

    // Empty context hashes to the bare offset basis
    assert_eq!(
        authority.derive_seed_64("", 0).unwrap(),
        14695981039346656037
    );
}

#[test]
fn test_derivation_tracks_master_changes() {
    let authority = SeedAuthority::new();
    authority.set_seed_64(1);
    let before = authority.derive_seed_64("terrain", 0).unwrap();

    authority.set_seed_64(2);
    let after = authority.derive_seed_64("terrain", 0).unwrap();
    assert_ne!(before, after);

    authority.set_seed_64(1);
    assert_eq!(authority.derive_seed_64("terrain", 0).unwrap(), before);
}

#[test]
fn test_derivation_does_not_mutate_master() {
    let authority = SeedAuthority::new();
    authority.set_seed_128(Seed128::new(11, 22));

    authority.derive_seed_64("a", 1).unwrap();
    authority.derive_seed_128("b", 2).unwrap();

    assert_eq!(authority.get_seed_128(), Ok(Seed128::new(11, 22)));
}
