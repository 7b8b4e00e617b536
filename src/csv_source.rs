//! Reading issue rows from the input CSV.
//!
//! The file must have a header row with a `Title` column. A `Body` column is
//! optional. Other columns are ignored.

use std::io::Read;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::model::CsvRow;

const TITLE_COLUMN: &str = "Title";
const BODY_COLUMN: &str = "Body";

/// Read all rows from a CSV file on disk.
pub fn read_rows(path: &Path) -> Result<Vec<CsvRow>> {
    if !path.is_file() {
        return Err(ImportError::CsvNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path).map_err(|e| unreadable(path, e))?;
    read_rows_from(file)
}

fn unreadable(path: &Path, err: std::io::Error) -> ImportError {
    ImportError::InvalidCsv(format!("cannot open {}: {}", path.display(), err))
}

/// Read all rows from any CSV source.
///
/// Titles and bodies are trimmed. Rows whose title is empty after trimming
/// are skipped; short rows read missing cells as empty.
pub fn read_rows_from<R: Read>(source: R) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let title_idx = column(TITLE_COLUMN).ok_or_else(|| {
        ImportError::InvalidCsv(format!("missing required '{}' column", TITLE_COLUMN))
    })?;
    let body_idx = column(BODY_COLUMN);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let title = record.get(title_idx).unwrap_or_default().trim();
        if title.is_empty() {
            skipped += 1;
            continue;
        }
        let body = body_idx
            .and_then(|idx| record.get(idx))
            .unwrap_or_default()
            .trim();
        rows.push(CsvRow::new(title, body));
    }

    tracing::debug!(rows = rows.len(), skipped, "Read CSV rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(content: &str) -> Result<Vec<CsvRow>> {
        read_rows_from(content.as_bytes())
    }

    #[test]
    fn test_reads_title_and_body() {
        let rows = read("Title,Body\nParser,Write the parser\nDocs,\n").unwrap();
        assert_eq!(
            rows,
            vec![
                CsvRow::new("Parser", "Write the parser"),
                CsvRow::new("Docs", ""),
            ]
        );
    }

    #[test]
    fn test_skips_blank_titles() {
        let rows = read("Title,Body\n,orphan body\n   ,x\nKept, body \n").unwrap();
        assert_eq!(rows, vec![CsvRow::new("Kept", "body")]);
    }

    #[test]
    fn test_body_column_is_optional() {
        let rows = read("Title\nOnly title\n").unwrap();
        assert_eq!(rows, vec![CsvRow::new("Only title", "")]);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let rows = read("Priority,Body,Title\nhigh,the body,the title\n").unwrap();
        assert_eq!(rows, vec![CsvRow::new("the title", "the body")]);
    }

    #[test]
    fn test_short_records_are_tolerated() {
        let rows = read("Title,Body\nNo body cell\n").unwrap();
        assert_eq!(rows, vec![CsvRow::new("No body cell", "")]);
    }

    #[test]
    fn test_quoted_multiline_body() {
        let rows = read("Title,Body\n\"Quoted, title\",\"line one\nline two\"\n").unwrap();
        assert_eq!(rows[0].title, "Quoted, title");
        assert_eq!(rows[0].body, "line one\nline two");
    }

    #[test]
    fn test_missing_title_column() {
        let err = read("Name,Body\nx,y\n").unwrap_err();
        assert!(matches!(err, ImportError::InvalidCsv(_)));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_rows(&temp_dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ImportError::CsvNotFound(_)));
    }

    #[test]
    fn test_unopenable_file_is_invalid_csv() {
        let err = unreadable(
            Path::new("issues.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        assert!(err.is_usage());
        assert_eq!(
            err.to_string(),
            "Invalid CSV: cannot open issues.csv: Permission denied"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_is_invalid_csv() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("issues.csv");
        std::fs::write(&path, "Title\nx\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores file modes, so only check the error when the open fails
        if std::fs::File::open(&path).is_err() {
            let err = read_rows(&path).unwrap_err();
            assert!(matches!(err, ImportError::InvalidCsv(_)));
        }
    }

    #[test]
    fn test_reads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("issues.csv");
        std::fs::write(&path, "Title,Body\nOne,first\nTwo,second\n").unwrap();
        assert_eq!(read_rows(&path).unwrap().len(), 2);
    }
}
