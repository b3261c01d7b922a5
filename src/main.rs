use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inflow_extractor::config::ExtractorConfig;
use inflow_extractor::inflow::InflowExtractor;
use inflow_extractor::utils::{clean_dropped_path, SuffixSource};

#[derive(Parser)]
#[command(name = "inflow-extractor")]
#[command(about = "Convert a HYDROGRAPHS workbook sheet into a FLO-2D INFLOW_<suffix>.dat file", long_about = None)]
struct Cli {
    /// Hydrograph workbook (.xls/.xlsx). Prompted for when omitted
    path: Option<PathBuf>,

    /// Output suffix, e.g. "US_50yr" for INFLOW_US_50yr.dat. Derived from the
    /// file name or prompted for when omitted
    #[arg(long)]
    suffix: Option<String>,

    /// Worksheet holding the hydrographs
    #[arg(long, env = "HYDROGRAPH_SHEET")]
    sheet: Option<String>,

    /// Number of leading rows searched for the surface row
    #[arg(long, env = "SURFACE_ROW_SEARCH_LIMIT")]
    surface_search_limit: Option<usize>,

    /// Exclusive upper bound on hydrograph data rows
    #[arg(long, env = "MAX_DATA_ROW")]
    max_data_row: Option<usize>,
}

/// Print a prompt and read one trimmed line from stdin
fn prompt(message: &str) -> io::Result<String> {
    println!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,inflow_extractor=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let mut config = ExtractorConfig::from_env();
    if let Some(sheet) = cli.sheet {
        config = config.with_sheet_name(sheet);
    }
    if let Some(limit) = cli.surface_search_limit {
        config = config.with_surface_row_search_limit(limit);
    }
    if let Some(max_row) = cli.max_data_row {
        config = config.with_max_data_row(max_row);
    }

    let path = match cli.path {
        Some(path) => path,
        None => {
            let raw = prompt("\n Please drag and drop the data file and then press enter.")?;
            PathBuf::from(clean_dropped_path(&raw))
        }
    };

    let extractor = InflowExtractor::with_config(path, config);

    let suffix = match cli.suffix {
        Some(suffix) => suffix,
        None => match extractor.suffix_source() {
            SuffixSource::Derived(suffix) => {
                info!("Using suffix {} from file name", suffix);
                suffix
            }
            SuffixSource::PromptRequired => prompt(
                "\n Please enter a suffix to textfile name.\n ex: 'US_50yr' would result in INFLOW_US_50yr.dat\n",
            )?
            .trim()
            .to_string(),
        },
    };

    if suffix.is_empty() {
        warn!("Empty suffix, output will be named without one");
    }

    let summary = extractor.convert(&suffix)?;
    info!(
        "Done: {} hydrographs, {} records -> {}",
        summary.blocks,
        summary.records,
        summary.output_path.display()
    );

    Ok(())
}
