//! CSV source and sink for ticket records.
//!
//! The source side reads every `*.csv` under an export directory and
//! concatenates the rows into one working set; the sink writes the final
//! set back out with a header row taken from the first record's field
//! order. Row values are opaque strings in both directions.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SiftError;
use crate::record::Record;

/// Read one CSV file into records, pairing each row with the header.
pub fn read_csv(path: &Path) -> Result<Vec<Record>, SiftError> {
    let file = File::open(path).map_err(|e| SiftError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        rows.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        );
    }
    debug!(path = %path.display(), rows = rows.len(), "read export file");
    Ok(rows)
}

/// Load and concatenate every `*.csv` file in `dir` into one record set.
///
/// Files are visited in path order so repeated runs see the same
/// concatenation. A directory with no CSV files yields an empty set;
/// the caller decides whether that is worth telling the user about.
pub fn load_dir(dir: &Path) -> Result<Vec<Record>, SiftError> {
    let entries = fs::read_dir(dir).map_err(|e| SiftError::io(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SiftError::io(dir, e))?.path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut rows = Vec::new();
    for path in &paths {
        rows.extend(read_csv(path)?);
    }
    info!(
        dir = %dir.display(),
        files = paths.len(),
        rows = rows.len(),
        "loaded ticket exports"
    );
    Ok(rows)
}

/// Write records to `path` as CSV.
///
/// The header row is the field names of the first record in their stored
/// order; every row is serialized by header-name lookup, with columns a
/// record lacks written as empty strings. The caller guarantees `rows` is
/// non-empty.
pub fn write_csv(path: &Path, rows: &[Record]) -> Result<(), SiftError> {
    let file = File::create(path).map_err(|e| SiftError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    let header: Vec<&str> = rows[0].field_names().collect();
    writer.write_record(&header)?;
    for record in rows {
        writer.write_record(header.iter().map(|name| record.get(name).unwrap_or("")))?;
    }
    writer.flush().map_err(|e| SiftError::io(path, e))?;
    info!(path = %path.display(), rows = rows.len(), "wrote export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{COL_CREATED, COL_ENGINEERS, COL_ID, COL_STATUS};
    use tempfile::TempDir;

    const HEADER: &str = "Name,Engineers,ID,Status,created";

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_csv_as_records() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "export.csv",
            &format!(
                "{HEADER}\nArtist Search Broken,Jimmie Dean,301,Complete,\"April 12, 2024 2:01 PM\"\n"
            ),
        );
        let rows = read_csv(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(COL_ID), Some("301"));
        assert_eq!(rows[0].get(COL_ENGINEERS), Some("Jimmie Dean"));
        assert_eq!(rows[0].get(COL_CREATED), Some("April 12, 2024 2:01 PM"));
    }

    #[test]
    fn test_read_header_only_csv_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "export.csv", &format!("{HEADER}\n"));
        assert!(read_csv(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_multiple_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "export.csv",
            &format!(
                "{HEADER}\n\
                 Artist Search Broken,Jimmie Dean,301,Complete,\"April 12, 2024 2:01 PM\"\n\
                 Playlist Sync Failing,Duke Ellington,302,In Progress,\"March 10, 2025 9:00 AM\"\n"
            ),
        );
        let rows = read_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get(COL_ID), Some("302"));
    }

    #[test]
    fn test_load_dir_concatenates_and_skips_non_csv() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "a.csv",
            &format!("{HEADER}\nA,Jimmie Dean,301,Complete,\"April 12, 2024 2:01 PM\"\n"),
        );
        write_file(
            &dir,
            "b.csv",
            &format!("{HEADER}\nB,Carol D,302,Complete,\"July 4, 2024 12:00 PM\"\n"),
        );
        write_file(&dir, "notes.txt", "not an export");

        let rows = load_dir(dir.path()).unwrap();
        assert_eq!(rows.len(), 2);
        // Path order: a.csv before b.csv
        assert_eq!(rows[0].get(COL_ID), Some("301"));
        assert_eq!(rows[1].get(COL_ID), Some("302"));
    }

    #[test]
    fn test_load_dir_with_no_csv_files_is_empty() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "notes.txt", "not an export");
        assert!(load_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_dir_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = load_dir(&missing).unwrap_err();
        assert!(matches!(err, SiftError::Io { .. }));
    }

    #[test]
    fn test_write_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("results.csv");
        let rows = vec![Record::from_pairs([
            ("Name", "Artist Search Broken"),
            (COL_ENGINEERS, "Jimmie Dean, Duke Ellington"),
            (COL_ID, "301"),
            (COL_STATUS, "Complete"),
            (COL_CREATED, "April 12, 2024 2:01 PM"),
        ])];
        write_csv(&out, &rows).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with(HEADER));
        assert!(written.contains("\"Jimmie Dean, Duke Ellington\""));
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("results.csv");
        let rows = vec![
            Record::from_pairs([
                (COL_ID, "301"),
                (COL_ENGINEERS, "Jimmie Dean, Duke Ellington"),
                (COL_STATUS, "Complete"),
                (COL_CREATED, "April 12, 2024 2:01 PM"),
            ]),
            Record::from_pairs([
                (COL_ID, "302"),
                (COL_ENGINEERS, "Carol D"),
                (COL_STATUS, "In Progress"),
                (COL_CREATED, "March 10, 2025 9:00 AM"),
            ]),
        ];
        write_csv(&out, &rows).unwrap();
        assert_eq!(read_csv(&out).unwrap(), rows);
    }

    #[test]
    fn test_write_fills_missing_columns_with_empty() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("results.csv");
        let rows = vec![
            Record::from_pairs([(COL_ID, "301"), (COL_STATUS, "Complete")]),
            Record::from_pairs([(COL_ID, "302")]),
        ];
        write_csv(&out, &rows).unwrap();

        let back = read_csv(&out).unwrap();
        assert_eq!(back[1].get(COL_STATUS), Some(""));
    }
}
