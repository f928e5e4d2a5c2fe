//! Console rendering of a [`RatioSummary`].
use crate::calculator::RatioSummary;
use core::fmt;

const HEADERS: [&str; 8] = [
    "(index)",
    "name",
    "reads",
    "writes",
    "weight",
    "total_weight",
    "used_gas",
    "ratio",
];

impl RatioSummary {
    fn rows(&self) -> Vec<[String; 8]> {
        self.reports
            .iter()
            .enumerate()
            .map(|(index, r)| {
                [
                    index.to_string(),
                    r.name.clone(),
                    r.reads.to_string(),
                    r.writes.to_string(),
                    r.weight.to_string(),
                    r.total_weight.to_string(),
                    r.used_gas.to_string(),
                    r.ratio.to_string(),
                ]
            })
            .collect()
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize; 8]) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_row<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize; 8],
    cells: &[S; 8],
) -> fmt::Result {
    for (column, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let cell = cell.as_ref();
        // Names are left aligned, numbers right aligned.
        if column == 1 {
            write!(f, "| {cell:<width$} ")?;
        } else {
            write!(f, "| {cell:>width$} ")?;
        }
    }
    writeln!(f, "|")
}

/// Renders the reports as a table followed by the final ratio.
impl fmt::Display for RatioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write_separator(f, &widths)?;
        write_row(f, &widths, &HEADERS)?;
        write_separator(f, &widths)?;
        for row in &rows {
            write_row(f, &widths, row)?;
        }
        write_separator(f, &widths)?;
        write!(f, "Ratio {}", self.ratio)
    }
}
