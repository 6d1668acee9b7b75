//! The reshape-and-growth pipeline: select one country's row, pivot its year
//! columns into rows, type and clean the values, compute growth rates.

use crate::error::{Result, SeriesError};
use crate::models::{AnnualSeries, CellValue, CountryRecord, DateSpec, GdpTable, Observation};
use log::debug;

/// Builds an [`AnnualSeries`] for one country over one span of year columns.
///
/// Growth rates are computed between retained-sequence-adjacent observations,
/// so after a missing year is dropped the next rate bridges the gap.
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    country: String,
    span: DateSpec,
}

impl SeriesBuilder {
    pub fn new(country: impl Into<String>, span: DateSpec) -> Self {
        Self {
            country: country.into(),
            span,
        }
    }

    /// Select the single row whose identifying cell equals the configured
    /// country name (exact, case-sensitive).
    ///
    /// ### Errors
    /// - [`SeriesError::CountryNotFound`] when no row matches
    /// - [`SeriesError::AmbiguousCountry`] when more than one row matches
    /// - [`SeriesError::YearColumnNotFound`] / [`SeriesError::EmptySpan`] when
    ///   the configured span does not resolve against the header
    pub fn select(&self, table: &GdpTable) -> Result<CountryRecord> {
        let matches: Vec<&Vec<String>> = table
            .rows
            .iter()
            .filter(|row| {
                row.get(table.country_col).map(String::as_str) == Some(self.country.as_str())
            })
            .collect();

        let row = match matches.len() {
            0 => {
                return Err(SeriesError::CountryNotFound {
                    name: self.country.clone(),
                });
            }
            1 => matches[0],
            n => {
                return Err(SeriesError::AmbiguousCountry {
                    name: self.country.clone(),
                    matches: n,
                });
            }
        };

        let (lo, hi) = table.year_span(self.span)?;
        let cells = (lo..=hi)
            .map(|i| {
                // Short rows read as missing cells.
                let raw = row.get(i).cloned().unwrap_or_default();
                (table.headers[i].clone(), raw)
            })
            .collect();

        Ok(CountryRecord {
            country: self.country.clone(),
            cells,
        })
    }

    /// Run the full pipeline: select, reshape, clean and type, compute growth.
    pub fn build(&self, table: &GdpTable) -> Result<AnnualSeries> {
        let record = self.select(table)?;
        let pairs = reshape(&record);
        let series = clean_and_type(&pairs)?;
        compute_growth(series)
    }
}

/// Transpose the year-keyed columns into `(label, raw value)` rows, preserving
/// source column order. No filtering, no typing.
pub fn reshape(record: &CountryRecord) -> Vec<(String, String)> {
    record.cells.clone()
}

/// Parse year labels and values into a typed, gap-free series.
///
/// Every label must parse as an integer ([`SeriesError::MalformedYear`]
/// otherwise; no placeholder is substituted). Values go through
/// [`CellValue::parse`]; absent cells drop their `(year, gdp)` pair entirely.
/// The result must be strictly ascending by year; the source order is
/// verified, not assumed, since gaps can appear anywhere in the range.
pub fn clean_and_type(pairs: &[(String, String)]) -> Result<AnnualSeries> {
    let mut out = Vec::with_capacity(pairs.len());
    for (label, raw) in pairs {
        let year: i32 = label
            .trim()
            .parse()
            .map_err(|_| SeriesError::MalformedYear {
                label: label.clone(),
            })?;
        match CellValue::parse(raw) {
            CellValue::Present(gdp) => out.push(Observation {
                year,
                gdp,
                growth_rate: None,
            }),
            CellValue::Absent => debug!("dropping {year}: no numeric GDP value"),
        }
    }

    for w in out.windows(2) {
        if w[1].year <= w[0].year {
            return Err(SeriesError::UnorderedYears { year: w[1].year });
        }
    }

    Ok(out)
}

/// Fill in growth rates between retained-sequence-adjacent observations.
///
/// The first element keeps `growth_rate: None` (no denominator). Element `i`
/// gets `(gdp[i] - gdp[i-1]) / gdp[i-1] * 100` where `i-1` is the previous
/// *retained* observation, not necessarily the calendar-preceding year.
///
/// Zero-division policy: a zero GDP denominator fails with
/// [`SeriesError::ZeroGdpDenominator`] instead of producing ±inf.
pub fn compute_growth(mut series: AnnualSeries) -> Result<AnnualSeries> {
    for i in 1..series.len() {
        let (prev_year, prev_gdp) = (series[i - 1].year, series[i - 1].gdp);
        if prev_gdp == 0.0 {
            return Err(SeriesError::ZeroGdpDenominator { year: prev_year });
        }
        let rate = (series[i].gdp - prev_gdp) / prev_gdp * 100.0;
        series[i].growth_rate = Some(rate);
    }
    Ok(series)
}
