use gdp_series::series::{clean_and_type, compute_growth};
use gdp_series::viz;
use gdp_series::Observation;
use std::fs;
use tempfile::tempdir;

fn sample_series() -> Vec<Observation> {
    let pairs: Vec<(String, String)> = [
        ("2019", "20.5e12"),
        ("2020", "21.0e12"),
        ("2021", "23.0e12"),
        ("2022", ""),
        ("2023", "26.0e12"),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    compute_growth(clean_and_type(&pairs).unwrap()).unwrap()
}

#[test]
fn gdp_chart_svg_has_content() {
    if !viz::ensure_fonts_registered() {
        eprintln!("skipping: no usable font on this system");
        return;
    }
    let dir = tempdir().unwrap();
    let path = dir.path().join("gdp.svg");
    viz::plot_gdp(&sample_series(), "United States", &path, 800, 480).unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "svg has content");
}

#[test]
fn growth_chart_png_has_content() {
    if !viz::ensure_fonts_registered() {
        eprintln!("skipping: no usable font on this system");
        return;
    }
    let dir = tempdir().unwrap();
    let path = dir.path().join("growth.png");
    viz::plot_growth(&sample_series(), "United States", &path, 800, 480).unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "png has content");
}

#[test]
fn empty_series_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let e = viz::plot_gdp(&[], "Nowhere", &path, 800, 480);
    assert!(e.is_err());
}

#[test]
fn growth_chart_needs_at_least_one_rate() {
    // A single observation has no growth rate, so there is nothing to plot.
    let series = vec![Observation {
        year: 2020,
        gdp: 1.0e12,
        growth_rate: None,
    }];
    let dir = tempdir().unwrap();
    let path = dir.path().join("single.svg");
    let e = viz::plot_growth(&series, "Nowhere", &path, 800, 480);
    assert!(e.is_err());
}

#[test]
fn axis_scale_by_magnitude() {
    assert_eq!(viz::choose_axis_scale(2.6e13), (1.0e12, "trillions"));
    assert_eq!(viz::choose_axis_scale(5.0e9), (1.0e9, "billions"));
    assert_eq!(viz::choose_axis_scale(2.0e6), (1.0e6, "millions"));
    assert_eq!(viz::choose_axis_scale(1.5e3), (1.0e3, "thousands"));
    assert_eq!(viz::choose_axis_scale(12.0), (1.0, ""));
}
