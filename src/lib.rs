//! gdp-series
//!
//! A lightweight Rust library for turning a wide-format (year-as-column) GDP
//! table into a cleaned, typed annual series with year-over-year growth rates.
//! Pairs with the `gdps` CLI.
//!
//! ### Features
//! - Load a delimited table with a country-name column and one column per year
//! - Select one country's row, reshape it into long (year-as-row) form
//! - Type and clean the values; non-numeric cells are dropped, not coerced
//! - Compute growth rates between retained observations
//! - Quick summary statistics (min, max, mean, median)
//! - Generate SVG/PNG line charts from the series
//!
//! ### Example
//! ```no_run
//! use gdp_series::loader::{self, LoadOptions};
//! use gdp_series::{DateSpec, SeriesBuilder};
//!
//! let table = loader::load_table("gdp_data.csv", &LoadOptions::default())?;
//! let series = SeriesBuilder::new("United States", DateSpec::Range { start: 1960, end: 2024 })
//!     .build(&table)?;
//! gdp_series::viz::plot_gdp(&series, "United States", "gdp.svg", 1000, 600)?;
//! gdp_series::viz::plot_growth(&series, "United States", "growth.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod series;
pub mod stats;
pub mod viz;

pub use error::SeriesError;
pub use models::{AnnualSeries, CellValue, CountryRecord, DateSpec, GdpTable, Observation};
pub use series::SeriesBuilder;
