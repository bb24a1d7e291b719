//! Heron's formula, in floating point for display and in exact integer
//! arithmetic for the integrality decision.
//!
//! With `p = a + b + c`, sixteen times the squared area is the integer
//! `p * (p - 2a) * (p - 2b) * (p - 2c)`. The area is an integer exactly when
//! that product is a perfect square whose root is divisible by four.
//!
//! For sides below roughly 2^31 the product fits in a `u128`; beyond that
//! it is carried as a `BigUint`. Any `u32` sides are handled exactly.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::arith::exact_sqrt;
use crate::error::{HeronError, Result};

/// Sixteen times the squared area of a proper triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Radicand {
    /// Fits in 128 bits (always the case for enumeration bounds).
    Small(u128),
    /// Needs more than 128 bits.
    Wide(BigUint),
}

impl Radicand {
    fn from_factors(factors: [u64; 4]) -> Self {
        factors
            .iter()
            .try_fold(1u128, |acc, &f| acc.checked_mul(f as u128))
            .map(Radicand::Small)
            .unwrap_or_else(|| Radicand::Wide(factors.iter().map(|&f| BigUint::from(f)).product()))
    }

    /// Nearest `f64`. Never overflows: the largest radicand for `u32`
    /// sides is about 3 * 2^128.
    pub fn to_f64(&self) -> f64 {
        match self {
            Radicand::Small(r) => *r as f64,
            Radicand::Wide(r) => r.to_f64().unwrap_or(f64::INFINITY),
        }
    }

    /// Integer area, if this radicand is `16 * A^2` for a positive integer
    /// `A`. The area of a `u32`-sided triangle always fits in a `u64`.
    pub fn exact_area(&self) -> Option<u64> {
        match self {
            Radicand::Small(r) => area_from_radicand(*r),
            Radicand::Wide(r) => {
                let root = r.sqrt();
                if &root * &root != *r {
                    return None;
                }
                let four = BigUint::from(4u32);
                if !(&root % &four).is_zero() {
                    return None;
                }
                (root / four).to_u64().filter(|&area| area > 0)
            }
        }
    }
}

/// The four positive factors `p, p - 2a, p - 2b, p - 2c` of `16 * A^2`.
///
/// Returns `Domain` when the sides do not form a proper triangle.
fn radicand_factors(a: u32, b: u32, c: u32) -> Result<[u64; 4]> {
    let (ai, bi, ci) = (a as i64, b as i64, c as i64);
    let p = ai + bi + ci;
    let x = p - 2 * ai;
    let y = p - 2 * bi;
    let z = p - 2 * ci;
    // With positive sides at most one of x, y, z can be non-positive.
    if x <= 0 || y <= 0 || z <= 0 {
        return Err(HeronError::Domain { a, b, c });
    }
    Ok([p as u64, x as u64, y as u64, z as u64])
}

/// Computes `16 * area^2` for sides in any order.
///
/// Returns `Domain` when the sides do not form a proper triangle (the
/// radicand is zero or negative).
pub fn radicand16(a: u32, b: u32, c: u32) -> Result<Radicand> {
    radicand_factors(a, b, c).map(Radicand::from_factors)
}

/// Area of the triangle with the given sides by Heron's formula.
///
/// The radicand is formed exactly; only the final square root is floating
/// point. Zero sides are rejected with `InvalidArgument`, degenerate or
/// impossible triangles with `Domain`.
pub fn compute_area(a: u32, b: u32, c: u32) -> Result<f64> {
    if a == 0 || b == 0 || c == 0 {
        return Err(HeronError::invalid(format!(
            "side lengths must be positive, got ({}, {}, {})",
            a, b, c
        )));
    }
    let r = radicand16(a, b, c)?;
    Ok(r.to_f64().sqrt() / 4.0)
}

/// Exact integer area, if the triangle is Heronian.
///
/// `None` for zero sides, degenerate triangles and non-integer areas.
pub fn heronian_area(a: u32, b: u32, c: u32) -> Option<u64> {
    if a == 0 || b == 0 || c == 0 {
        return None;
    }
    radicand16(a, b, c).ok()?.exact_area()
}

/// Integer area from a 128-bit `16 * area^2`, if there is one.
pub fn area_from_radicand(r16: u128) -> Option<u64> {
    let root = exact_sqrt(r16)?;
    if root % 4 != 0 {
        return None;
    }
    u64::try_from(root / 4).ok().filter(|&area| area > 0)
}

/// True iff the triangle has a strictly positive integer area.
#[inline]
pub fn is_heronian(a: u32, b: u32, c: u32) -> bool {
    heronian_area(a, b, c).is_some()
}
