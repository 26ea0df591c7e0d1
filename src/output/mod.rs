//! CSV record files, one per map

pub mod writer;

use std::path::{Path, PathBuf};

pub use writer::{CsvWriter, RectangleRow, GEN_ID, HEADER, LINE_END, ROUTE_ID};

use crate::error::{Error, Result};
use crate::extract::{Extraction, MapRecord};
use crate::terrain::TerrainKind;

pub const DEFAULT_OUT_DIR: &str = "data";

/// Rows for a map: all grass rows, then all water rows
pub fn rows(record: &MapRecord) -> impl Iterator<Item = RectangleRow> + '_ {
    TerrainKind::ALL.into_iter().flat_map(move |kind| {
        record.rects(kind).iter().map(move |&rect| RectangleRow::new(kind, rect))
    })
}

pub fn write_map_csv(path: &Path, rows: impl IntoIterator<Item = RectangleRow>) -> Result<()> {
    let mut writer = CsvWriter::with_capacity(4096);
    writer.write_header();
    for row in rows {
        writer.write_row(&row);
    }

    std::fs::write(path, writer.as_slice()).map_err(|e| Error::OutputPath {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write `<slug>.csv` into `out_dir` for every map with at least one match.
/// The directory is created if missing.
pub fn write_records(extraction: &Extraction, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| Error::OutputPath {
        path: out_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut written = Vec::new();
    for record in extraction.maps.values().filter(|r| r.has_matches()) {
        let path = out_dir.join(format!("{}.csv", record.slug));
        write_map_csv(&path, rows(record))?;
        tracing::debug!(path = %path.display(), "wrote terrain rows");
        written.push(path);
    }
    Ok(written)
}
