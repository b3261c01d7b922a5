use serde::Serialize;
use std::fmt;

/// A single line of a FLO-2D INFLOW.DAT hydrograph block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum InflowRecord {
    /// `F` line: base flow declared before the hydrograph starts
    #[serde(rename = "F")]
    BaseFlow { base_flow: f64 },
    /// `H` line: elapsed time and discharge
    #[serde(rename = "H")]
    Hydrograph { elapsed_time: f64, discharge: f64 },
}

impl fmt::Display for InflowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InflowRecord::BaseFlow { base_flow } => write!(f, "F\t0\t{base_flow:.0}"),
            InflowRecord::Hydrograph {
                elapsed_time,
                discharge,
            } => write!(f, "H\t{elapsed_time:.2}\t{discharge:.2}"),
        }
    }
}

/// One time/discharge pair read from a data row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrographPoint {
    pub row: usize,
    pub elapsed_time: f64,
    pub discharge: f64,
}

/// Hydrograph extracted from one sheet column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrographBlock {
    pub column: usize,
    pub base_flow: f64,
    pub points: Vec<HydrographPoint>,
}

impl HydrographBlock {
    /// Records in file order: the `F` line, then one `H` line per point
    pub fn records(&self) -> impl Iterator<Item = InflowRecord> + '_ {
        std::iter::once(InflowRecord::BaseFlow {
            base_flow: self.base_flow,
        })
        .chain(self.points.iter().map(|p| InflowRecord::Hydrograph {
            elapsed_time: p.elapsed_time,
            discharge: p.discharge,
        }))
    }

    pub fn record_count(&self) -> usize {
        self.points.len() + 1
    }
}
