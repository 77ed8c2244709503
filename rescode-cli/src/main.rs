/*!
# Resistor Color-Code CLI

Command-line calculator for resistor color codes: decode band colors into
a resistance value, encode a target value back into band colors, and
browse the standard-series (E6..E192) value catalog.

## Usage

### Decode band colors
```bash
rescode decode 4 brown black red gold
```

### Encode a value (shorthand accepted: 47k, 4r7, 1m)
```bash
rescode encode 4.7k --bands 4 --tolerance 5
```

### Browse the catalog
```bash
rescode catalog --series E24 --query 2.2 --limit 20
```

### Generate a configuration file
```bash
rescode config --output rescode.toml
```

All subcommands accept `--json` for machine-readable output; logging goes
to stderr so stdout stays clean.
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

mod config;

use config::AppConfig;
use rescode::{
    decode, encode, format_ohms, parse_ohms, BandCount, Catalog, CatalogQuery, Color, Decoded,
    ESeries, SortOrder,
};

#[derive(Parser)]
#[command(name = "rescode")]
#[command(about = "Resistor color-code calculator and E-series catalog browser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "rescode.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an ordered band color sequence into a resistance value
    Decode {
        /// Number of bands (4, 5 or 6)
        bands: u8,

        /// Band colors in order, e.g. brown black red gold
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode a target resistance into band colors
    Encode {
        /// Target resistance; accepts shorthand like "47k", "4r7", "330 ohm"
        value: String,

        /// Number of bands (4, 5 or 6); defaults from the config file
        #[arg(short, long)]
        bands: Option<u8>,

        /// Tolerance percentage; defaults from the config file
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List standard-series values from the catalog
    Catalog {
        /// Keep only entries from one series (E6, E12, E24, E48, E96, E192)
        #[arg(short, long)]
        series: Option<String>,

        /// Sort order by nominal value
        #[arg(short, long, default_value = "asc")]
        order: OrderArg,

        /// Free-text match against the formatted value, e.g. "4.7 k"
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum number of entries to print
        #[arg(short, long, default_value = "50")]
        limit: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a configuration file with default settings
    Config {
        /// Output path for configuration file
        #[arg(short, long, default_value = "rescode.toml")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Asc => Self::Ascending,
            OrderArg::Desc => Self::Descending,
        }
    }
}

/// Decode result enriched with formatted text, matching the payload the
/// original calculation endpoint returned
#[derive(Debug, Serialize)]
struct DecodeReport {
    ohms: f64,
    text_value: String,
    tolerance_percent: f64,
    tolerance_color: Color,
    min_ohms: f64,
    max_ohms: f64,
    min_text: String,
    max_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tempco_ppm: Option<u16>,
}

impl From<Decoded> for DecodeReport {
    fn from(decoded: Decoded) -> Self {
        Self {
            ohms: decoded.ohms,
            text_value: format_ohms(decoded.ohms),
            tolerance_percent: decoded.tolerance_percent,
            tolerance_color: decoded.tolerance_color,
            min_ohms: decoded.min_ohms,
            max_ohms: decoded.max_ohms,
            min_text: format_ohms(decoded.min_ohms),
            max_text: format_ohms(decoded.max_ohms),
            tempco_ppm: decoded.tempco_ppm,
        }
    }
}

#[derive(Debug, Serialize)]
struct EncodeReport {
    ohms: f64,
    text_value: String,
    band_count: BandCount,
    tolerance_percent: f64,
    colors: Vec<Color>,
}

fn main() -> Result<()> {
    // Initialize logging to stderr to keep stdout clean for results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config);

    match cli.command {
        Commands::Decode { bands, colors, json } => run_decode(bands, &colors, json),
        Commands::Encode { value, bands, tolerance, json } => {
            run_encode(&config, &value, bands, tolerance, json)
        }
        Commands::Catalog { series, order, query, limit, json } => {
            run_catalog(&config, series, order, query, limit, json)
        }
        Commands::Config { output } => generate_config_file(output),
    }
}

/// Load the config file, falling back to defaults when it is absent
fn load_config(path: &Path) -> AppConfig {
    if path.exists() {
        AppConfig::load_from_file(path).unwrap_or_else(|e| {
            warn!("Failed to load config {}: {e}, using defaults", path.display());
            AppConfig::new()
        })
    } else {
        AppConfig::new()
    }
}

/// Decode band colors and print the resulting value
fn run_decode(bands: u8, colors: &[String], json: bool) -> Result<()> {
    let band_count = BandCount::try_from(bands)?;
    let colors: Vec<Color> = colors
        .iter()
        .map(|name| name.parse())
        .collect::<rescode::Result<_>>()?;

    let report: DecodeReport = decode(&colors, band_count)?.into();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Value:     {}", report.text_value);
        println!(
            "Tolerance: ±{}% ({})",
            report.tolerance_percent, report.tolerance_color
        );
        println!("Range:     {} to {}", report.min_text, report.max_text);
        if let Some(ppm) = report.tempco_ppm {
            println!("Tempco:    {ppm} ppm/K");
        }
    }

    Ok(())
}

/// Encode a target resistance and print the band colors
fn run_encode(
    config: &AppConfig,
    value: &str,
    bands: Option<u8>,
    tolerance: Option<f64>,
    json: bool,
) -> Result<()> {
    let ohms = parse_ohms(value)?;
    let band_count = BandCount::try_from(bands.unwrap_or(config.encoder.default_band_count))?;
    let tolerance_percent = tolerance.unwrap_or(config.encoder.default_tolerance_percent);

    let colors = encode(ohms, band_count, tolerance_percent)?;

    if json {
        let report = EncodeReport {
            ohms,
            text_value: format_ohms(ohms),
            band_count,
            tolerance_percent,
            colors,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let names: Vec<&str> = colors.iter().map(|c| c.as_str()).collect();
        println!("{} ({band_count} bands): {}", format_ohms(ohms), names.join(" "));
    }

    Ok(())
}

/// Query the catalog and print matching entries
fn run_catalog(
    config: &AppConfig,
    series: Option<String>,
    order: OrderArg,
    query: Option<String>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let series = series
        .map(|s| s.parse::<ESeries>())
        .transpose()
        .context("invalid --series value")?;

    let catalog = Catalog::build(config.catalog.min_ohms, config.catalog.max_ohms);
    let results = catalog.query(&CatalogQuery {
        series,
        order: order.into(),
        query,
    });

    if json {
        let limited: Vec<_> = results.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&limited)?);
    } else {
        for entry in results.iter().take(limit) {
            println!("{}", entry.label);
        }
        if results.len() > limit {
            println!("... {} more (raise --limit to see them)", results.len() - limit);
        }
    }

    Ok(())
}

/// Generate a default configuration file
fn generate_config_file(output_path: PathBuf) -> Result<()> {
    let config = AppConfig::new();
    config.save_to_file(&output_path)?;

    println!("✅ Generated configuration file: {}", output_path.display());
    println!("📝 Edit the file to customize settings, then run:");
    println!("   rescode --config {} catalog", output_path.display());

    Ok(())
}
