use crate::error::{Result, SeriesError};
use crate::models::GdpTable;
use csv::ReaderBuilder;
use log::debug;
use std::path::Path;

/// Identifying column used by the World Bank wide-format download.
pub const DEFAULT_COUNTRY_COLUMN: &str = "Country Name";

/// Options for reading the input file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter, `b','` by default.
    pub delimiter: u8,
    /// Header of the country-identifying column.
    pub country_column: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            country_column: DEFAULT_COUNTRY_COLUMN.to_string(),
        }
    }
}

/// Read a delimited file with a header row into a [`GdpTable`].
///
/// The only schema requirement is that the identifying column exists; rows
/// shorter than the header are accepted and read as missing cells later.
pub fn load_table<P: AsRef<Path>>(path: P, opts: &LoadOptions) -> Result<GdpTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let country_col = headers
        .iter()
        .position(|h| *h == opts.country_column)
        .ok_or_else(|| SeriesError::MissingColumn {
            name: opts.country_column.clone(),
        })?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(
        "loaded table: {} columns, {} rows, identifying column at index {}",
        headers.len(),
        rows.len(),
        country_col
    );

    Ok(GdpTable {
        headers,
        rows,
        country_col,
    })
}
