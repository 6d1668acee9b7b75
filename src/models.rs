use crate::error::{Result, SeriesError};
use serde::{Deserialize, Serialize};

/// How to specify the year-column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSpec {
    /// Single year like 2020
    Year(i32),
    /// Inclusive range like 1960..=2024
    Range { start: i32, end: i32 },
}

impl DateSpec {
    /// Inclusive (start, end) bounds of the span.
    pub fn bounds(&self) -> (i32, i32) {
        match *self {
            DateSpec::Year(y) => (y, y),
            DateSpec::Range { start, end } => (start, end),
        }
    }
}

/// Wide-format table: one row per country, one column per year.
///
/// Loaded once and passed by reference; never mutated after load. Rows keep
/// their raw text cells so that selection and reshaping stay untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpTable {
    /// Header row in source order.
    pub headers: Vec<String>,
    /// Data rows; short rows are allowed and read as missing cells.
    pub rows: Vec<Vec<String>>,
    /// Index of the country-identifying column within `headers`.
    pub country_col: usize,
}

impl GdpTable {
    /// Resolve a [`DateSpec`] to the contiguous header slice `lo..=hi`.
    ///
    /// Both bound labels must exist as headers; the selection is the
    /// positional slice between them, matching the original dataset layout
    /// where year columns are contiguous.
    pub fn year_span(&self, span: DateSpec) -> Result<(usize, usize)> {
        let (start, end) = span.bounds();
        let (s, e) = (start.to_string(), end.to_string());
        let lo = self
            .headers
            .iter()
            .position(|h| *h == s)
            .ok_or(SeriesError::YearColumnNotFound { label: s })?;
        let hi = self
            .headers
            .iter()
            .position(|h| *h == e)
            .ok_or(SeriesError::YearColumnNotFound { label: e })?;
        if hi < lo {
            return Err(SeriesError::EmptySpan);
        }
        Ok((lo, hi))
    }
}

/// The single row matching a requested country, reduced to its year columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    /// `(year label, raw cell)` pairs in source column order. Values are
    /// untouched text; typing happens later in the pipeline.
    pub cells: Vec<(String, String)>,
}

/// Per-cell parse result. Unparseable or non-finite values become `Absent`
/// explicitly instead of relying on an exception-catching pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Present(f64),
    Absent,
}

impl CellValue {
    /// Parse a raw cell. Empty strings, non-numeric text, and non-finite
    /// numbers (inf/NaN literals) all read as `Absent`.
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            return CellValue::Absent;
        }
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Present(v),
            _ => CellValue::Absent,
        }
    }
}

/// One retained observation of the annual series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub gdp: f64,
    /// Percentage change against the previous *retained* observation.
    /// `None` for the first element (no denominator).
    pub growth_rate: Option<f64>,
}

/// Ordered sequence of observations, strictly increasing by year, containing
/// only years whose GDP parsed as a finite number.
pub type AnnualSeries = Vec<Observation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_parsing() {
        assert_eq!(CellValue::parse("21000000000000"), CellValue::Present(21e12));
        assert_eq!(CellValue::parse(" 3.9e12 "), CellValue::Present(3.9e12));
        assert_eq!(CellValue::parse(""), CellValue::Absent);
        assert_eq!(CellValue::parse("  "), CellValue::Absent);
        assert_eq!(CellValue::parse("n/a"), CellValue::Absent);
        assert_eq!(CellValue::parse("inf"), CellValue::Absent);
        assert_eq!(CellValue::parse("NaN"), CellValue::Absent);
    }

    #[test]
    fn date_spec_bounds() {
        assert_eq!(DateSpec::Year(2020).bounds(), (2020, 2020));
        assert_eq!(
            DateSpec::Range { start: 1960, end: 2024 }.bounds(),
            (1960, 2024)
        );
    }
}
