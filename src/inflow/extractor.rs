use calamine::{open_workbook_auto, Data, Range, Reader};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::record::{HydrographBlock, HydrographPoint};
use super::sheet::HydrographSheet;
use super::writer::write_inflow_file;
use crate::config::ExtractorConfig;
use crate::utils::{derive_suffix, SuffixSource};

/// Column holding the values that decide whether a data row is emitted
const ROW_PRESENCE_COL: usize = 1;

/// Column holding elapsed time in hours
const ELAPSED_TIME_COL: usize = 2;

#[derive(Error, Debug)]
pub enum InflowError {
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("No surface row (zeros in columns A and B) within the first {limit} rows")]
    NoSurfaceRowFound { limit: usize },

    #[error("Invalid data at row {row}, col {col}: {msg}")]
    InvalidData { row: usize, col: usize, msg: String },

    #[error("Cannot determine output directory for {0}")]
    InvalidInputPath(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a full workbook to INFLOW.DAT conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub output_path: PathBuf,
    pub blocks: usize,
    pub records: usize,
}

/// Locate the surface row: first row within `0..limit` whose first two
/// columns hold the zero marker.
pub fn find_surface_row(sheet: &HydrographSheet<'_>, limit: usize) -> Result<usize, InflowError> {
    (0..limit)
        .find(|&row| sheet.is_zero_marker_row(row))
        .ok_or(InflowError::NoSurfaceRowFound { limit })
}

/// Converts the HYDROGRAPHS sheet of a workbook into INFLOW.DAT blocks
///
/// # Expected Sheet Structure:
/// ```text
/// Rows 0..S-1: Header metadata, row S-1 holds the base flow of each hydrograph column
/// Row S:       Surface row, 0 | 0 in columns A and B
/// Rows S..57:  Column B non-blank for data rows, column C elapsed time,
///              every hydrograph column its discharge
/// ```
pub struct InflowExtractor {
    workbook_path: PathBuf,
    config: ExtractorConfig,
}

impl InflowExtractor {
    pub fn new(workbook_path: impl Into<PathBuf>) -> Self {
        Self::with_config(workbook_path, ExtractorConfig::default())
    }

    pub fn with_config(workbook_path: impl Into<PathBuf>, config: ExtractorConfig) -> Self {
        Self {
            workbook_path: workbook_path.into(),
            config,
        }
    }

    pub fn workbook_path(&self) -> &Path {
        &self.workbook_path
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Suffix derived from the workbook file name, if it has one
    pub fn suffix_source(&self) -> SuffixSource {
        match self.workbook_path.file_name() {
            Some(name) => derive_suffix(&name.to_string_lossy()),
            None => SuffixSource::PromptRequired,
        }
    }

    /// Open the workbook and extract every hydrograph block from the
    /// configured sheet
    pub fn extract(&self) -> Result<Vec<HydrographBlock>, InflowError> {
        info!(
            "Reading sheet {} from {}",
            self.config.sheet_name,
            self.workbook_path.display()
        );

        let mut workbook = match open_workbook_auto(&self.workbook_path) {
            Ok(wb) => wb,
            Err(e) => return Err(InflowError::WorkbookOpen(e.to_string())),
        };

        let range = match workbook.worksheet_range(&self.config.sheet_name) {
            Ok(range) => range,
            Err(_) => return Err(InflowError::SheetNotFound(self.config.sheet_name.clone())),
        };

        self.extract_from_range(&range)
    }

    /// Extract hydrograph blocks from an already loaded worksheet range
    pub fn extract_from_range(
        &self,
        range: &Range<Data>,
    ) -> Result<Vec<HydrographBlock>, InflowError> {
        let sheet = HydrographSheet::new(range);
        let surface_row = find_surface_row(&sheet, self.config.surface_row_search_limit)?;
        debug!("Surface row found at index {}", surface_row);

        let header_row = match surface_row.checked_sub(1) {
            Some(row) => row,
            None => {
                return Err(InflowError::InvalidData {
                    row: 0,
                    col: 0,
                    msg: "Surface row is the first row, no base flow row above it".to_string(),
                })
            }
        };

        // Data rows are gated on column B for every hydrograph column
        let data_rows: Vec<usize> = (surface_row..self.config.max_data_row)
            .filter(|&row| !sheet.is_blank(row, ROW_PRESENCE_COL))
            .collect();

        let mut blocks = Vec::new();
        for col in 0..sheet.column_count() {
            if sheet.is_blank(header_row, col) {
                continue;
            }

            let base_flow = sheet.number(header_row, col)?;
            let mut points = Vec::with_capacity(data_rows.len());
            for &row in &data_rows {
                points.push(HydrographPoint {
                    row,
                    elapsed_time: sheet.number(row, ELAPSED_TIME_COL)?,
                    discharge: sheet.number(row, col)?,
                });
            }

            debug!(
                "Column {}: base flow {}, {} hydrograph points",
                col,
                base_flow,
                points.len()
            );
            blocks.push(HydrographBlock {
                column: col,
                base_flow,
                points,
            });
        }

        if blocks.is_empty() {
            warn!("No hydrograph columns found in row {}", header_row);
        }

        info!("Extracted {} hydrograph blocks", blocks.len());
        Ok(blocks)
    }

    /// `<workbook dir>/<prefix><suffix><extension>`
    pub fn output_path(&self, suffix: &str) -> Result<PathBuf, InflowError> {
        let absolute = std::path::absolute(&self.workbook_path)?;
        let dir = absolute
            .parent()
            .ok_or_else(|| InflowError::InvalidInputPath(self.workbook_path.clone()))?;
        Ok(dir.join(self.config.output_file_name(suffix)))
    }

    /// Extract the workbook and write its INFLOW file, replacing any
    /// existing file with the same name
    pub fn convert(&self, suffix: &str) -> Result<ConversionSummary, InflowError> {
        let blocks = self.extract()?;
        let output_path = self.output_path(suffix)?;
        let records = write_inflow_file(&output_path, &blocks)?;

        info!(
            "Wrote {} records in {} blocks to {}",
            records,
            blocks.len(),
            output_path.display()
        );

        Ok(ConversionSummary {
            output_path,
            blocks: blocks.len(),
            records,
        })
    }
}
