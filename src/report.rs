//! Sorting and presentation of enumeration results.
//!
//! A [`Report`] holds the total count, the first few triangles in report
//! order and, optionally, every triangle with one chosen area. It renders as
//! console text or JSON.

use std::fmt::Write as _;
use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EnumerationConfig, OutputFormat, ReportConfig};
use crate::enumerate::enumerate_with;
use crate::error::{HeronError, Result};
use crate::heron::{HeronianTriangle, Triple};

/// Sorts by area, then perimeter, then sides lexicographically.
pub fn sort_triangles(triangles: &mut [HeronianTriangle]) {
    triangles.sort_unstable();
}

/// One reported triangle.
///
/// Deserialization checks `perimeter` and `area` against `sides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RowRepr")]
pub struct ReportRow {
    pub sides: Triple,
    pub perimeter: u64,
    pub area: u64,
}

#[derive(Deserialize)]
struct RowRepr {
    sides: Triple,
    perimeter: u64,
    area: u64,
}

impl TryFrom<RowRepr> for ReportRow {
    type Error = HeronError;

    fn try_from(repr: RowRepr) -> Result<Self> {
        if repr.perimeter != repr.sides.perimeter() {
            return Err(HeronError::invalid(format!(
                "perimeter of {} is {}, not {}",
                repr.sides,
                repr.sides.perimeter(),
                repr.perimeter
            )));
        }
        let t = HeronianTriangle::try_from_parts(repr.sides, repr.area)?;
        Ok(Self::from(&t))
    }
}

impl From<&HeronianTriangle> for ReportRow {
    fn from(t: &HeronianTriangle) -> Self {
        Self {
            sides: t.sides,
            perimeter: t.perimeter(),
            area: t.area,
        }
    }
}

impl ReportRow {
    fn write_line(&self, out: &mut String) {
        let _ = writeln!(
            out,
            " {:>14} perim: {:>3} area: {}",
            self.sides, self.perimeter, self.area
        );
    }
}

/// Every triangle sharing one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaListing {
    pub area: u64,
    pub triangles: Vec<ReportRow>,
}

/// Summary of one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Upper bound the enumeration ran with.
    pub max_side: u32,
    /// Number of primitive Heronian triangles found.
    pub total: usize,
    /// Leading triangles in report order.
    pub first: Vec<ReportRow>,
    /// Present when an area listing was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_listing: Option<AreaListing>,
}

impl Report {
    /// Sorts `triangles` and extracts what `cfg` asks for.
    pub fn build(max_side: u32, mut triangles: Vec<HeronianTriangle>, cfg: &ReportConfig) -> Self {
        sort_triangles(&mut triangles);

        let first = triangles.iter().take(cfg.limit).map(ReportRow::from).collect();
        let area_listing = cfg.area.map(|area| AreaListing {
            area,
            triangles: triangles
                .iter()
                .filter(|t| t.area == area)
                .map(ReportRow::from)
                .collect(),
        });

        Self {
            max_side,
            total: triangles.len(),
            first,
            area_listing,
        }
    }

    /// Console layout: count, blank line, header, one line per triangle.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Primitive Heronian triangles with sides up to {}: {}",
            self.max_side, self.total
        );
        let _ = writeln!(
            out,
            "\nFirst {} ordered by increasing area, then perimeter, then side lengths:",
            self.first.len()
        );
        for row in &self.first {
            row.write_line(&mut out);
        }

        if let Some(listing) = &self.area_listing {
            let _ = writeln!(
                out,
                "\nAll with area {} ordered by perimeter, then side lengths:",
                listing.area
            );
            if listing.triangles.is_empty() {
                out.push_str(" (none)\n");
            }
            for row in &listing.triangles {
                row.write_line(&mut out);
            }
        }
        out
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HeronError::Serialization(format!("JSON serialization error: {}", e)))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| HeronError::Serialization(format!("JSON deserialization error: {}", e)))
    }

    /// Renders in the requested format. JSON output ends with a newline.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.to_json_string().map(|mut s| {
                s.push('\n');
                s
            }),
        }
    }

    /// Renders and writes the report to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        out.write_all(self.render(format)?.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Enumerates with `enumeration` and summarizes with `report`.
pub fn generate_report(enumeration: &EnumerationConfig, report: &ReportConfig) -> Result<Report> {
    let triangles = enumerate_with(enumeration)?;
    debug!(
        count = triangles.len(),
        limit = report.limit,
        area = ?report.area,
        "building report"
    );
    Ok(Report::build(enumeration.max_side, triangles, report))
}
