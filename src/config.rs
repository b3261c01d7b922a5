use std::env;

/// Sheet the FLO-2D hydrograph workbooks keep their inflow tables in
pub const DEFAULT_SHEET_NAME: &str = "HYDROGRAPHS";

/// Rows scanned (0..limit) when looking for the surface row marker
pub const DEFAULT_SURFACE_ROW_SEARCH_LIMIT: usize = 10;

/// Exclusive upper bound on hydrograph data rows
pub const DEFAULT_MAX_DATA_ROW: usize = 58;

pub const DEFAULT_OUTPUT_PREFIX: &str = "INFLOW_";
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub sheet_name: String,
    pub surface_row_search_limit: usize,
    pub max_data_row: usize,
    pub output_prefix: String,
    pub output_extension: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            surface_row_search_limit: DEFAULT_SURFACE_ROW_SEARCH_LIMIT,
            max_data_row: DEFAULT_MAX_DATA_ROW,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Build a config from environment variables, falling back to the defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            sheet_name: env::var("HYDROGRAPH_SHEET")
                .unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string()),
            surface_row_search_limit: env::var("SURFACE_ROW_SEARCH_LIMIT")
                .unwrap_or_else(|_| DEFAULT_SURFACE_ROW_SEARCH_LIMIT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SURFACE_ROW_SEARCH_LIMIT),
            max_data_row: env::var("MAX_DATA_ROW")
                .unwrap_or_else(|_| DEFAULT_MAX_DATA_ROW.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_DATA_ROW),
            output_prefix: env::var("INFLOW_PREFIX")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_PREFIX.to_string()),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    pub fn with_surface_row_search_limit(mut self, limit: usize) -> Self {
        self.surface_row_search_limit = limit;
        self
    }

    pub fn with_max_data_row(mut self, max_data_row: usize) -> Self {
        self.max_data_row = max_data_row;
        self
    }

    /// File name for a given suffix, e.g. `INFLOW_DS_50yr.dat`
    pub fn output_file_name(&self, suffix: &str) -> String {
        format!("{}{}{}", self.output_prefix, suffix, self.output_extension)
    }
}
