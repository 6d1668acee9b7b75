use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gdp_series::loader::{self, DEFAULT_COUNTRY_COLUMN, LoadOptions};
use gdp_series::{DateSpec, SeriesBuilder, stats, viz};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gdps",
    version,
    about = "Reshape a wide GDP table into an annual series with growth rates & charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build one country's annual series (and optionally plot and print stats).
    Build(BuildArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Path to the wide-format delimited file (header row, one column per year).
    #[arg(short, long)]
    input: PathBuf,
    /// Country name, matched exactly against the identifying column.
    #[arg(short, long)]
    country: String,
    /// Header of the identifying column.
    #[arg(long, default_value = DEFAULT_COUNTRY_COLUMN)]
    column: String,
    /// Field delimiter.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Year (YYYY) or inclusive range (YYYY:YYYY) of columns to use.
    #[arg(short = 'd', long)]
    date: Option<String>,
    /// Create the GDP-over-time chart at the given path (.svg or .png).
    #[arg(long)]
    gdp_plot: Option<PathBuf>,
    /// Create the growth-rate chart at the given path (.svg or .png).
    #[arg(long)]
    growth_plot: Option<PathBuf>,
    /// Width of the plots (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plots (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Print summary statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_date(s: &str) -> Option<DateSpec> {
    if let Some((a, b)) = s.split_once(':') {
        let start = a.parse::<i32>().ok()?;
        let end = b.parse::<i32>().ok()?;
        Some(DateSpec::Range { start, end })
    } else {
        s.parse::<i32>().ok().map(DateSpec::Year)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
    }
}

fn cmd_build(args: BuildArgs) -> Result<()> {
    if !args.delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }
    let opts = LoadOptions {
        delimiter: args.delimiter as u8,
        country_column: args.column.clone(),
    };
    let table = loader::load_table(&args.input, &opts)?;

    let date = match &args.date {
        Some(s) => parse_date(s)
            .ok_or_else(|| anyhow::anyhow!("invalid --date, expected YYYY or YYYY:YYYY"))?,
        None => DateSpec::Range {
            start: 1960,
            end: 2024,
        },
    };

    let series = SeriesBuilder::new(&args.country, date).build(&table)?;
    info!(
        "built series for {}: {} observations",
        args.country,
        series.len()
    );

    println!("{:<6} {:>20} {:>10}", "Year", "GDP", "Growth %");
    for o in &series {
        println!(
            "{:<6} {:>20.0} {:>10}",
            o.year,
            o.gdp,
            fmt_opt(o.growth_rate)
        );
    }

    if let Some(path) = args.gdp_plot.as_ref() {
        viz::plot_gdp(&series, &args.country, path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", path.display());
    }
    if let Some(path) = args.growth_plot.as_ref() {
        viz::plot_growth(&series, &args.country, path, args.width, args.height)?;
        eprintln!("Wrote plot to {}", path.display());
    }

    if args.stats {
        let gdp = stats::summarize(series.iter().map(|o| o.gdp));
        let growth = stats::summarize(series.iter().filter_map(|o| o.growth_rate));
        for (name, s) in [("GDP", gdp), ("GrowthRate", growth)] {
            println!(
                "{}  count={}  min={} max={} mean={} median={}",
                name,
                s.count,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }

    Ok(())
}
