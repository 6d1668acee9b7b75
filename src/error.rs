use thiserror::Error;

/// Errors raised while loading a table or building a series.
///
/// Structural problems (unknown country, a non-integer year header, a broken
/// file) are fatal and surface through these variants. A single GDP cell that
/// fails numeric parsing is *not* an error: it becomes
/// [`CellValue::Absent`](crate::models::CellValue) and the year is dropped.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// No row matches the requested country name (exact, case-sensitive).
    #[error("country {name:?} not found in table")]
    CountryNotFound { name: String },

    /// More than one row matches the requested country name. The caller must
    /// disambiguate the input; we never silently take the first match.
    #[error("country {name:?} matches {matches} rows; disambiguate the input table")]
    AmbiguousCountry { name: String, matches: usize },

    /// A selected year-column header is not parseable as an integer.
    #[error("year column {label:?} is not an integer")]
    MalformedYear { label: String },

    /// Year order in the source is verified, not assumed.
    #[error("years are not strictly increasing at {year}")]
    UnorderedYears { year: i32 },

    /// Zero-division policy for growth rates: a zero GDP denominator is an
    /// error, never a silent ±inf.
    #[error("growth rate undefined: GDP for {year} is zero")]
    ZeroGdpDenominator { year: i32 },

    /// The identifying column (e.g. "Country Name") is missing from the header.
    #[error("identifying column {name:?} not found in header")]
    MissingColumn { name: String },

    /// A year-span bound (e.g. "1960") has no matching header.
    #[error("year column {label:?} not present in header")]
    YearColumnNotFound { label: String },

    /// The year span selects no columns (end before start).
    #[error("year span selects no columns")]
    EmptySpan,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SeriesError> = std::result::Result<T, E>;
