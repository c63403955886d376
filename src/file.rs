// src/file.rs

use std::{
    fs::{ self, File },
    io::{ BufWriter, Write },
    path::{ Path, PathBuf },
};

use tracing::info;

use crate::config::consts::CSV_HEADERS;
use crate::config::options::ExportOptions;
use crate::csv::write_row;
use crate::data::Record;
use crate::error::{ Error, Result };

/// Write all records as one CSV file (header row first), truncating any existing file.
/// Returns the absolute path written to.
pub fn export_records(export: &ExportOptions, records: &[Record]) -> Result<PathBuf> {
    let path = export.out_path();
    let io_err = |source| Error::Io { path: path.clone(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(&path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_row(&mut out, &CSV_HEADERS).map_err(io_err)?;
    for r in records {
        write_row(&mut out, &r.to_row()).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    info!("Saved {} records to {}", records.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "path exists but is not a directory: {}", dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
