use calamine::{open_workbook_auto, DataType, Reader};
use clap::Parser;
use std::path::PathBuf;

use inflow_extractor::config::ExtractorConfig;
use inflow_extractor::inflow::{find_surface_row, HydrographSheet, InflowExtractor};

#[derive(Parser)]
#[command(name = "examine-hydrographs")]
#[command(about = "Dump the layout of a hydrograph workbook and what would be extracted from it", long_about = None)]
struct Cli {
    /// Hydrograph workbook (.xls/.xlsx)
    path: PathBuf,

    /// Worksheet to examine
    #[arg(long, env = "HYDROGRAPH_SHEET")]
    sheet: Option<String>,

    /// Number of leading rows to print
    #[arg(long, default_value = "20")]
    rows: usize,

    /// Print the extracted hydrograph blocks as JSON only
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ExtractorConfig::from_env();
    if let Some(sheet) = cli.sheet {
        config = config.with_sheet_name(sheet);
    }

    let mut workbook = open_workbook_auto(&cli.path)?;
    let range = workbook.worksheet_range(&config.sheet_name)?;
    let extractor = InflowExtractor::with_config(cli.path.clone(), config.clone());

    if cli.json {
        let blocks = extractor.extract_from_range(&range)?;
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    println!("Opening workbook: {}", cli.path.display());
    println!("\nSheet names:");
    for (i, name) in workbook.sheet_names().iter().enumerate() {
        println!("  {i}: {name}");
    }

    println!("\n\nExamining sheet: {}", config.sheet_name);
    println!("{}", "=".repeat(100));

    let sheet = HydrographSheet::new(&range);
    println!(
        "Used area starts at {:?}, {} rows x {} columns from A1",
        range.start(),
        sheet.row_count(),
        sheet.column_count()
    );

    println!("\nFirst {} rows (showing first 10 columns):", cli.rows);
    println!("{}", "=".repeat(100));
    for row in 0..cli.rows.min(sheet.row_count()) {
        print!("Row {row:3}: ");
        for col in 0..sheet.column_count().min(10) {
            match sheet.cell(row, col) {
                Some(cell) if !cell.is_empty() => print!("[{cell}] "),
                _ => print!("[empty] "),
            }
        }
        println!();
    }

    println!("\n{}", "=".repeat(100));
    match find_surface_row(&sheet, config.surface_row_search_limit) {
        Ok(row) => println!("Surface row: {row}"),
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    }

    match extractor.extract_from_range(&range) {
        Ok(blocks) => {
            for block in &blocks {
                println!(
                    "Column {:3}: base flow {:.0}, {} hydrograph points",
                    block.column,
                    block.base_flow,
                    block.points.len()
                );
            }
        }
        Err(e) => println!("Extraction failed: {e}"),
    }

    Ok(())
}
