// FLO-2D inflow hydrograph module
//
// Converts the HYDROGRAPHS sheet of a hydrograph workbook into the
// INFLOW_<suffix>.dat boundary-condition file read by FLO-2D.
// - sheet: absolute cell addressing and cell coercion
// - extractor: surface row detection and per-column hydrograph extraction
// - record: F/H records and their text layout
// - writer: sequential .dat output

pub mod extractor;
pub mod record;
pub mod sheet;
pub mod writer;

pub use extractor::{find_surface_row, ConversionSummary, InflowError, InflowExtractor};
pub use record::{HydrographBlock, HydrographPoint, InflowRecord};
pub use sheet::HydrographSheet;
