//! Heronian triangle primitives.
//!
//! This module provides the pure building blocks the enumerator composes:
//!
//! - Exact integer helpers (`gcd`, `gcd3`, integer square roots)
//! - The canonical [`Triple`] and the report-ordered [`HeronianTriangle`]
//! - Heron's formula, both as a floating-point area and as an exact
//!   integrality test
//!
//! # Exactness
//!
//! Whether a triangle is Heronian is decided entirely in integer arithmetic
//! on `16 * area^2`, so there is no tolerance to tune and no false negatives
//! for large sides. [`compute_area`] remains available for callers that
//! want the real-valued area of any triangle.
//!
//! # Example
//!
//! ```
//! use heronian::heron::{compute_area, is_heronian, Triple, HeronianTriangle};
//!
//! assert!(is_heronian(5, 5, 6));
//! assert!((compute_area(3, 4, 5).unwrap() - 6.0).abs() < 1e-12);
//!
//! let t = HeronianTriangle::from_triple(Triple::new(5, 4, 3).unwrap()).unwrap();
//! assert_eq!(t.area, 6);
//! assert_eq!(t.perimeter(), 12);
//! ```

pub mod arith;
pub mod area;
pub mod triangle;

// Re-export main functionality
pub use self::area::{
    area_from_radicand, compute_area, heronian_area, is_heronian, radicand16, Radicand,
};
pub use self::arith::{gcd, gcd3};
pub use self::triangle::{HeronianTriangle, Triple};
