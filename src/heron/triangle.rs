//! Triangle value types.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::arith::gcd3;
use crate::error::{HeronError, Result};

/// Three positive side lengths in canonical order (`a <= b <= c`).
///
/// The derived ordering is lexicographic over `(a, b, c)`. Serialized as a
/// three-element array; deserialization re-validates and re-sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[u32; 3]", try_from = "[u32; 3]")]
pub struct Triple {
    a: u32,
    b: u32,
    c: u32,
}

impl Triple {
    /// Builds a triple from sides in any order.
    ///
    /// Sides are sorted ascending; a zero side is rejected.
    pub fn new(x: u32, y: u32, z: u32) -> Result<Self> {
        if x == 0 || y == 0 || z == 0 {
            return Err(HeronError::invalid(format!(
                "side lengths must be positive, got ({}, {}, {})",
                x, y, z
            )));
        }
        let mut sides = [x, y, z];
        sides.sort_unstable();
        Ok(Self::from_sorted(sides[0], sides[1], sides[2]))
    }

    /// Builds a triple whose sides the caller already holds in canonical
    /// order with every side positive.
    #[inline]
    pub(crate) fn from_sorted(a: u32, b: u32, c: u32) -> Self {
        debug_assert!(0 < a && a <= b && b <= c, "({a}, {b}, {c}) not canonical");
        Self { a, b, c }
    }

    #[inline]
    pub fn a(&self) -> u32 {
        self.a
    }

    #[inline]
    pub fn b(&self) -> u32 {
        self.b
    }

    #[inline]
    pub fn c(&self) -> u32 {
        self.c
    }

    #[inline]
    pub fn sides(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    /// Sum of the three sides.
    #[inline]
    pub fn perimeter(&self) -> u64 {
        self.a as u64 + self.b as u64 + self.c as u64
    }

    /// Strict triangle inequality on the canonical form (`a + b > c`).
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.a as u64 + self.b as u64 > self.c as u64
    }

    /// True when the sides share no factor greater than one.
    #[inline]
    pub fn is_primitive(&self) -> bool {
        gcd3(self.a, self.b, self.c) == 1
    }
}

impl From<Triple> for [u32; 3] {
    fn from(t: Triple) -> Self {
        t.sides()
    }
}

impl TryFrom<[u32; 3]> for Triple {
    type Error = HeronError;

    fn try_from(sides: [u32; 3]) -> Result<Self> {
        Triple::new(sides[0], sides[1], sides[2])
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("({}, {}, {})", self.a, self.b, self.c))
    }
}

/// A triple together with its exact integer area.
///
/// Ordered by area, then perimeter, then sides lexicographically. This is
/// the report order and it is total. Deserialization recomputes the area
/// and rejects a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TriangleRepr")]
pub struct HeronianTriangle {
    pub sides: Triple,
    pub area: u64,
}

#[derive(Deserialize)]
struct TriangleRepr {
    sides: Triple,
    area: u64,
}

impl TryFrom<TriangleRepr> for HeronianTriangle {
    type Error = HeronError;

    fn try_from(repr: TriangleRepr) -> Result<Self> {
        HeronianTriangle::try_from_parts(repr.sides, repr.area)
    }
}

impl HeronianTriangle {
    /// Pairs `sides` with its area when the area is a positive integer.
    pub fn from_triple(sides: Triple) -> Option<Self> {
        super::area::heronian_area(sides.a, sides.b, sides.c).map(|area| Self { sides, area })
    }

    /// Accepts `area` only if it is the exact area of `sides`.
    pub fn try_from_parts(sides: Triple, area: u64) -> Result<Self> {
        match Self::from_triple(sides) {
            Some(t) if t.area == area => Ok(t),
            Some(t) => Err(HeronError::invalid(format!(
                "area of {} is {}, not {}",
                sides, t.area, area
            ))),
            None => Err(HeronError::invalid(format!(
                "{} does not have an integer area",
                sides
            ))),
        }
    }

    #[inline]
    pub fn perimeter(&self) -> u64 {
        self.sides.perimeter()
    }

    #[inline]
    fn sort_key(&self) -> (u64, u64, Triple) {
        (self.area, self.perimeter(), self.sides)
    }
}

impl Ord for HeronianTriangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for HeronianTriangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
