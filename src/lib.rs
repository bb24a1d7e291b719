//! Enumeration of primitive Heronian triangles.
//!
//! A Heronian triangle has integer sides and integer area. This crate lists
//! those whose sides share no common factor, up to a maximum side length,
//! and reports them ordered by area, then perimeter, then sides.
//!
//! ```
//! use heronian::enumerate::enumerate_sorted;
//!
//! let found = enumerate_sorted(10).unwrap();
//! assert_eq!(found[0].sides.sides(), [3, 4, 5]);
//! assert_eq!(found[0].area, 6);
//! ```

pub mod cli;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod heron;
pub mod logging;
pub mod report;

pub use crate::enumerate::{enumerate, enumerate_sorted, enumerate_with};
pub use crate::error::{HeronError, Result};
pub use crate::heron::{compute_area, gcd3, is_heronian, HeronianTriangle, Triple};
pub use crate::report::{generate_report, sort_triangles, Report};
