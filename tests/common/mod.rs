#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes CSV rows (header first) to a fresh temp file.
pub fn csv_file(rows: &[&[&str]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    {
        let mut wtr = csv::Writer::from_writer(file.as_file_mut());
        for row in rows {
            wtr.write_record(*row).expect("Failed to write row");
        }
        wtr.flush().expect("Failed to flush CSV");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Generates `count` anonymous payments of 1.0 in `mode`.
pub fn generate_payments(path: &Path, mode: &str, count: usize) -> Result<(), std::io::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["client", "mode", "amount"])?;
    for _ in 0..count {
        wtr.write_record(["", mode, "1.0"])?;
    }
    wtr.flush()?;
    Ok(())
}
