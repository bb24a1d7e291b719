//! Enumeration of primitive Heronian triangles.
//!
//! Candidates are generated per shortest side `a`, run through the filter
//! pipeline (canonical order, triangle inequality, primitivity, integer
//! area) and collected in `(a, b, c)` order. Slices for different `a` share
//! nothing, so large bounds fan out across the rayon pool and are merged in
//! order.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{EnumerationConfig, SearchStrategy};
use crate::error::{HeronError, Result};
use crate::heron::{radicand16, HeronianTriangle, Triple};
use crate::{log_error, span_trace};

/// Primitive Heronian triangles with every side in `[1, max_side]`.
///
/// Results come back in generation order; see
/// [`crate::report::sort_triangles`] for the report order.
pub fn enumerate(max_side: u32) -> Result<Vec<HeronianTriangle>> {
    enumerate_with(&EnumerationConfig::new(max_side))
}

/// [`enumerate`] followed by the area, perimeter, sides sort.
pub fn enumerate_sorted(max_side: u32) -> Result<Vec<HeronianTriangle>> {
    let mut found = enumerate(max_side)?;
    crate::report::sort_triangles(&mut found);
    Ok(found)
}

/// Enumeration with explicit strategy and execution settings.
///
/// The bound is validated before any work starts. Every strategy and
/// execution mode returns the same sequence.
pub fn enumerate_with(cfg: &EnumerationConfig) -> Result<Vec<HeronianTriangle>> {
    cfg.validate()?;

    let span = span_trace!("enumerate", max_side = cfg.max_side, strategy = %cfg.strategy);
    let _guard = span.enter();

    let n = cfg.max_side;
    let parallel = cfg.runs_parallel();
    debug!(parallel, par_threshold = cfg.par_threshold, "starting enumeration");

    let start = Instant::now();
    let found = match cfg.strategy {
        SearchStrategy::Canonical => run_slices(n, parallel, |a| canonical_candidates(a, n)),
        SearchStrategy::CartesianProduct => run_slices(n, parallel, |a| cartesian_candidates(a, n)),
    };

    info!(
        max_side = n,
        count = found.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "enumeration finished"
    );
    Ok(found)
}

fn run_slices<F, I>(n: u32, parallel: bool, slice: F) -> Vec<HeronianTriangle>
where
    F: Fn(u32) -> I + Sync + Send,
    I: Iterator<Item = Triple>,
{
    if parallel {
        (1..=n)
            .into_par_iter()
            .flat_map_iter(|a| slice(a).filter_map(admit))
            .collect()
    } else {
        (1..=n).flat_map(|a| slice(a).filter_map(admit)).collect()
    }
}

/// Triples with shortest side `a`, bounded so that `b <= c < a + b`.
fn canonical_candidates(a: u32, n: u32) -> impl Iterator<Item = Triple> {
    (a..=n).flat_map(move |b| {
        let c_max = n.min(a + b - 1);
        (b..=c_max).map(move |c| Triple::from_sorted(a, b, c))
    })
}

/// The `a` slice of the full cube, reduced to canonical order.
fn cartesian_candidates(a: u32, n: u32) -> impl Iterator<Item = Triple> {
    (1..=n)
        .flat_map(move |b| (1..=n).map(move |c| (b, c)))
        .filter(move |&(b, c)| a <= b && b <= c)
        .map(move |(b, c)| Triple::from_sorted(a, b, c))
}

/// The filter pipeline for a canonical candidate.
fn admit(sides: Triple) -> Option<HeronianTriangle> {
    if !sides.is_triangle() || !sides.is_primitive() {
        return None;
    }
    match radicand16(sides.a(), sides.b(), sides.c()) {
        Ok(r16) => r16.exact_area().map(|area| HeronianTriangle { sides, area }),
        Err(err) => {
            invariant_violation(sides, &err);
            None
        }
    }
}

/// A triple passed the triangle filter but Heron's radicand rejected it.
/// Fatal in debug builds; logged and skipped otherwise.
fn invariant_violation(sides: Triple, err: &HeronError) {
    let violation = HeronError::InvariantViolation(format!(
        "{} passed the triangle filter: {}",
        sides, err
    ));
    if cfg!(debug_assertions) {
        panic!("{}", violation);
    }
    log_error!(violation, "skipping triple");
}
