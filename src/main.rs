use anyhow::{Context, Result};
use chartgen::{generate, ChartConfig, ChartKind, Dataset};
use clap::Parser;
use std::io::Read;

/// Generate renderer-ready chart options from tabular data.
///
/// Reads records from stdin (a JSON array of objects by default, CSV
/// with --csv) and prints the option tree as JSON on stdout.
#[derive(Parser)]
#[command(name = "chartgen", version)]
struct Cli {
    /// Chart kind, e.g. bar_chart, line_chart, pie_chart
    #[arg(short = 't', long = "chart-type")]
    chart_type: String,

    /// Chart configuration as a JSON object
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Treat stdin as CSV with a header row instead of JSON
    #[arg(long)]
    csv: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let dataset = if cli.csv {
        Dataset::from_csv(input.as_bytes()).context("failed to parse CSV input")?
    } else {
        let value: serde_json::Value =
            serde_json::from_str(&input).context("stdin is not valid JSON")?;
        Dataset::from_json(&value).context("failed to load records")?
    };

    let kind: ChartKind = cli.chart_type.parse()?;
    let config: ChartConfig = match &cli.config {
        Some(raw) => serde_json::from_str(raw).context("invalid --config JSON")?,
        None => ChartConfig::default(),
    };

    let spec = generate(&dataset, kind, &config)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&spec)?
    } else {
        serde_json::to_string(&spec)?
    };
    println!("{}", output);
    Ok(())
}
