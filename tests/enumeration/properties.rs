//! Property-based tests using the `proptest` crate.

use proptest::prelude::*;

use crate::common::side_set;
use heronian::config::{EnumerationConfig, SearchStrategy};
use heronian::heron::{compute_area, gcd3, heronian_area, is_heronian, HeronianTriangle, Triple};
use heronian::{enumerate, enumerate_with, sort_triangles, HeronError};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Canonical sides `a <= b <= c` satisfying the strict triangle inequality.
fn arb_triangle() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..2000, 1u32..2000)
        .prop_map(|(x, y)| (x.min(y), x.max(y)))
        .prop_flat_map(|(a, b)| (Just(a), Just(b), b..a + b))
}

/// Canonical proper triangles anywhere in the `u32` range.
fn arb_wide_triangle() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=u32::MAX)
        .prop_flat_map(|a| (Just(a), a..=u32::MAX))
        .prop_flat_map(|(a, b)| {
            let c_max = (a as u64 + b as u64 - 1).min(u32::MAX as u64) as u32;
            (Just(a), Just(b), b..=c_max)
        })
}

/// Scale factor keeping `6k` within `u32`.
fn arb_scale() -> impl Strategy<Value = u32> {
    1u32..=u32::MAX / 6
}

fn arb_side() -> impl Strategy<Value = u32> {
    1u32..100_000
}

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn area_positive_for_proper_triangles((a, b, c) in arb_triangle()) {
        let area = compute_area(a, b, c).unwrap();
        prop_assert!(area > 0.0, "area of ({}, {}, {}) = {}", a, b, c, area);
    }

    #[test]
    fn degenerate_triangles_are_rejected(a in 1u32..5000, b in 1u32..5000) {
        let (a, b) = (a.min(b), a.max(b));
        let result = compute_area(a, b, a + b);
        prop_assert!(matches!(result, Err(HeronError::Domain { .. })), "expected Domain error, got {:?}", result);
    }

    #[test]
    fn exact_area_squares_back((a, b, c) in arb_triangle()) {
        if let Some(t) = HeronianTriangle::from_triple(Triple::new(a, b, c).unwrap()) {
            let p = (a + b + c) as u128;
            let r16 = p
                * (p - 2 * a as u128)
                * (p - 2 * b as u128)
                * (p - 2 * c as u128);
            prop_assert_eq!(16 * (t.area as u128) * (t.area as u128), r16);
        }
    }

    #[test]
    fn is_heronian_is_symmetric((a, b, c) in arb_triangle()) {
        let h = is_heronian(a, b, c);
        prop_assert_eq!(is_heronian(c, a, b), h);
        prop_assert_eq!(is_heronian(b, c, a), h);
        prop_assert_eq!(is_heronian(b, a, c), h);
    }
}

// ---------------------------------------------------------------------------
// Area across the full side range
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn wide_triangles_have_positive_area((a, b, c) in arb_wide_triangle()) {
        let area = compute_area(a, b, c);
        prop_assert!(matches!(&area, Ok(x) if *x > 0.0), "({}, {}, {}) -> {:?}", a, b, c, area);
    }

    #[test]
    fn wide_degenerate_triangles_are_rejected(a in 1u32..=u32::MAX / 2, b in 1u32..=u32::MAX / 2) {
        prop_assert!(matches!(compute_area(a, b, a + b), Err(HeronError::Domain { .. })), "expected Domain error");
        prop_assert!(!is_heronian(a, b, a + b));
    }

    #[test]
    fn scaled_right_triangle_is_heronian(k in arb_scale()) {
        let (a, b, c) = (3 * k, 4 * k, 5 * k);
        let expected = 6 * (k as u64) * (k as u64);
        prop_assert!(is_heronian(a, b, c));
        prop_assert_eq!(heronian_area(a, b, c), Some(expected));
        let area = compute_area(a, b, c).unwrap();
        prop_assert!(((area - expected as f64) / expected as f64).abs() < 1e-9);
    }

    #[test]
    fn scaled_isosceles_triangle_is_heronian(k in arb_scale()) {
        let (a, b, c) = (5 * k, 5 * k, 6 * k);
        let expected = 12 * (k as u64) * (k as u64);
        prop_assert!(is_heronian(a, b, c));
        prop_assert_eq!(heronian_area(c, a, b), Some(expected));
        let area = compute_area(a, b, c).unwrap();
        prop_assert!(((area - expected as f64) / expected as f64).abs() < 1e-9);
    }
}

#[test]
fn largest_equilateral_has_area_but_is_not_heronian() {
    let m = u32::MAX;
    let area = compute_area(m, m, m).unwrap();
    let expected = 3f64.sqrt() / 4.0 * (m as f64) * (m as f64);
    assert!(((area - expected) / expected).abs() < 1e-12);
    assert!(!is_heronian(m, m, m));
}

// ---------------------------------------------------------------------------
// gcd3
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn gcd3_is_permutation_invariant(x in arb_side(), y in arb_side(), z in arb_side()) {
        let g = gcd3(x, y, z);
        prop_assert_eq!(gcd3(x, z, y), g);
        prop_assert_eq!(gcd3(y, x, z), g);
        prop_assert_eq!(gcd3(y, z, x), g);
        prop_assert_eq!(gcd3(z, x, y), g);
        prop_assert_eq!(gcd3(z, y, x), g);
        prop_assert!(x % g == 0 && y % g == 0 && z % g == 0);
    }

    #[test]
    fn scaled_triangles_are_never_primitive((a, b, c) in arb_triangle(), k in 2u32..50) {
        let t = Triple::new(a * k, b * k, c * k).unwrap();
        prop_assert!(!t.is_primitive());
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_result_passes_all_filters(n in 1u32..90) {
        for t in enumerate(n).unwrap() {
            let [a, b, c] = t.sides.sides();
            prop_assert!(a <= b && b <= c);
            prop_assert!(a + b > c);
            prop_assert!(c <= n);
            prop_assert_eq!(gcd3(a, b, c), 1);
            prop_assert!(is_heronian(a, b, c));
        }
    }

    #[test]
    fn results_grow_monotonically(n in 1u32..90) {
        let smaller = side_set(&enumerate(n).unwrap());
        let larger = side_set(&enumerate(n + 1).unwrap());
        prop_assert!(smaller.is_subset(&larger));
    }

    #[test]
    fn enumeration_is_idempotent(n in 1u32..90) {
        prop_assert_eq!(enumerate(n).unwrap(), enumerate(n).unwrap());
    }

    #[test]
    fn sorted_results_are_non_decreasing(n in 5u32..120) {
        let mut found = enumerate(n).unwrap();
        sort_triangles(&mut found);
        for w in found.windows(2) {
            let ka = (w[0].area, w[0].perimeter(), w[0].sides.sides());
            let kb = (w[1].area, w[1].perimeter(), w[1].sides.sides());
            prop_assert!(ka < kb, "{:?} before {:?}", ka, kb);
        }
    }

    #[test]
    fn parallel_matches_sequential(n in 1u32..120) {
        let seq = EnumerationConfig { max_side: n, parallel: false, ..EnumerationConfig::default() };
        let par = EnumerationConfig { max_side: n, parallel: true, par_threshold: 1, ..EnumerationConfig::default() };
        prop_assert_eq!(enumerate_with(&seq).unwrap(), enumerate_with(&par).unwrap());
    }
}

#[test]
fn cartesian_reference_matches_canonical() {
    let canonical = enumerate(70).unwrap();
    let cfg = EnumerationConfig {
        max_side: 70,
        strategy: SearchStrategy::CartesianProduct,
        ..EnumerationConfig::default()
    };
    assert_eq!(enumerate_with(&cfg).unwrap(), canonical);
}
