//! Visualization: render the annual series to **SVG** or **PNG** line charts.
//!
//! - GDP-over-time chart with magnitude-scaled Y axis (thousands … trillions)
//! - Growth-rate chart with a zero reference line
//! - Backend chosen by file extension (`.svg` → SVG, anything else → bitmap)

use crate::models::Observation;
use anyhow::{Result, anyhow};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

/// Series colors from the Office chart palette.
const GDP_COLOR: RGBColor = RGBColor(68, 114, 196); // blue (#4472C4)
const GROWTH_COLOR: RGBColor = RGBColor(112, 173, 71); // green (#70AD47)

/// One-time registration of a fallback "sans-serif" font for the `ab_glyph`
/// text path. Required because `ab_glyph` doesn't discover OS fonts; the
/// bytes come from `GDP_SERIES_FONT` or a handful of well-known locations.
static INIT_FONTS: Once = Once::new();
static FONTS_OK: AtomicBool = AtomicBool::new(false);

/// Register a sans-serif font once; returns whether one is available.
///
/// Rendering fails cleanly without a font. Point `GDP_SERIES_FONT` at a
/// `.ttf` file to override discovery.
pub fn ensure_fonts_registered() -> bool {
    INIT_FONTS.call_once(|| {
        if let Some(bytes) = load_font_bytes() {
            let ok = plotters::style::register_font(
                "sans-serif",
                plotters::style::FontStyle::Normal,
                bytes,
            )
            .is_ok();
            FONTS_OK.store(ok, Ordering::Relaxed);
        }
    });
    FONTS_OK.load(Ordering::Relaxed)
}

fn load_font_bytes() -> Option<&'static [u8]> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(p) = std::env::var("GDP_SERIES_FONT") {
        candidates.push(p.into());
    }
    for p in [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ] {
        candidates.push(p.into());
    }
    for path in candidates {
        if let Ok(bytes) = std::fs::read(&path) {
            // Registered fonts live for the process lifetime.
            return Some(Box::leak(bytes.into_boxed_slice()));
        }
    }
    None
}

/// Pick a single Y-axis scale and its human label based on the overall magnitude.
/// Returns (scale, label), e.g. (1e12, "trillions").
pub fn choose_axis_scale(max_abs: f64) -> (f64, &'static str) {
    if max_abs >= 1.0e12 {
        (1.0e12, "trillions")
    } else if max_abs >= 1.0e9 {
        (1.0e9, "billions")
    } else if max_abs >= 1.0e6 {
        (1.0e6, "millions")
    } else if max_abs >= 1.0e3 {
        (1.0e3, "thousands")
    } else {
        (1.0, "")
    }
}

/// Render the GDP-over-time line chart.
pub fn plot_gdp<P: AsRef<Path>>(
    series: &[Observation],
    country: &str,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let max_abs = series.iter().map(|o| o.gdp.abs()).fold(0.0, f64::max);
    let (yscale, scale_word) = choose_axis_scale(max_abs);
    let y_desc = if scale_word.is_empty() {
        "GDP (current US$)".to_string()
    } else {
        format!("GDP ({scale_word} current US$)")
    };
    let pts: Vec<(f64, f64)> = series
        .iter()
        .map(|o| (o.year as f64, o.gdp / yscale))
        .collect();

    render_line(
        &pts,
        out_path,
        width,
        height,
        &format!("GDP of {country} Over Time"),
        &y_desc,
        "GDP",
        GDP_COLOR,
        false,
    )
}

/// Render the growth-rate line chart with a zero reference line.
pub fn plot_growth<P: AsRef<Path>>(
    series: &[Observation],
    country: &str,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let pts: Vec<(f64, f64)> = series
        .iter()
        .filter_map(|o| o.growth_rate.map(|g| (o.year as f64, g)))
        .collect();

    render_line(
        &pts,
        out_path,
        width,
        height,
        &format!("GDP Growth Rate of {country}"),
        "Growth Rate (%)",
        "Growth Rate",
        GROWTH_COLOR,
        true,
    )
}

#[allow(clippy::too_many_arguments)]
fn render_line<P: AsRef<Path>>(
    pts: &[(f64, f64)],
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
    y_desc: &str,
    series_label: &str,
    color: RGBColor,
    zero_line: bool,
) -> Result<()> {
    if pts.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    if !ensure_fonts_registered() {
        return Err(anyhow!(
            "no usable font found; set GDP_SERIES_FONT to a .ttf file"
        ));
    }
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_line(root, pts, title, y_desc, series_label, color, zero_line)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_line(root, pts, title, y_desc, series_label, color, zero_line)?;
    }
    Ok(())
}

fn draw_line<DB>(
    root: DrawingArea<DB, Shift>,
    pts: &[(f64, f64)],
    title: &str,
    y_desc: &str,
    series_label: &str,
    color: RGBColor,
    zero_line: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let (mut x_min, mut x_max) = pts
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    if (x_max - x_min).abs() < f64::EPSILON {
        x_min -= 1.0;
        x_max += 1.0;
    }
    let (mut y_min, mut y_max) = pts
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 1.0;
        y_max += 1.0;
    }
    // Keep the reference line inside the plotting area.
    if zero_line {
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
    }

    root.fill(&WHITE).map_err(|e| anyhow!("fill: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .caption(title, (FontFamily::SansSerif, 20))
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("build chart: {e}"))?;

    let x_label_count = (((x_max - x_min) as usize) + 1).min(12);
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc(y_desc)
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&|x: &f64| (x.round() as i32).to_string())
        .y_label_formatter(&|v: &f64| {
            let a = v.abs();
            let prec = if a >= 100.0 {
                0
            } else if a >= 10.0 {
                1
            } else {
                2
            };
            format!("{:.*}", prec, *v)
        })
        .draw()
        .map_err(|e| anyhow!("draw mesh: {e}"))?;

    if zero_line {
        chart
            .draw_series(LineSeries::new(
                [(x_min, 0.0), (x_max, 0.0)],
                BLACK.stroke_width(1),
            ))
            .map_err(|e| anyhow!("draw zero line: {e}"))?;
    }

    chart
        .draw_series(LineSeries::new(pts.to_vec(), color.stroke_width(2)))
        .map_err(|e| anyhow!("draw series: {e}"))?
        .label(series_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| anyhow!("draw legend: {e}"))?;

    root.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
