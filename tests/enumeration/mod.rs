//! Integration tests for enumeration.
//!
//! Known fixed points from the literature plus structural properties of the
//! returned set.

mod properties;
