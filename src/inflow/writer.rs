use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use super::record::HydrographBlock;

/// Write hydrograph blocks as tab-separated INFLOW.DAT lines
///
/// Returns the number of records written.
pub fn write_blocks<W: Write>(out: &mut W, blocks: &[HydrographBlock]) -> std::io::Result<usize> {
    let mut written = 0;
    for block in blocks {
        for record in block.records() {
            writeln!(out, "{record}")?;
            written += 1;
        }
    }
    Ok(written)
}

/// Create (or truncate) `path` and write every block into it
pub fn write_inflow_file(path: &Path, blocks: &[HydrographBlock]) -> std::io::Result<usize> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let written = write_blocks(&mut out, blocks)?;
    out.flush()?;
    debug!("Wrote {} records to {}", written, path.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inflow::record::HydrographPoint;

    fn block(column: usize, base_flow: f64, points: &[(f64, f64)]) -> HydrographBlock {
        HydrographBlock {
            column,
            base_flow,
            points: points
                .iter()
                .enumerate()
                .map(|(i, &(elapsed_time, discharge))| HydrographPoint {
                    row: i,
                    elapsed_time,
                    discharge,
                })
                .collect(),
        }
    }

    #[test]
    fn test_write_blocks_layout() {
        let blocks = vec![
            block(3, 10.0, &[(0.0, 10.0), (0.1, 55.5)]),
            block(4, 2.0, &[(0.0, 2.0)]),
        ];

        let mut buf = Vec::new();
        let written = write_blocks(&mut buf, &blocks).unwrap();

        assert_eq!(written, 5);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "F\t0\t10\nH\t0.00\t10.00\nH\t0.10\t55.50\nF\t0\t2\nH\t0.00\t2.00\n"
        );
    }

    #[test]
    fn test_write_blocks_empty() {
        let mut buf = Vec::new();
        assert_eq!(write_blocks(&mut buf, &[]).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_inflow_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("INFLOW_DS.dat");
        std::fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();

        write_inflow_file(&path, &[block(0, 1.0, &[])]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "F\t0\t1\n");
    }
}
