use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use super::model::{DataError, WeightDataset};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Column names in file order. The header row is required but its spelling
/// is not checked; these names identify columns in error messages.
const COLUMNS: [&str; 3] = ["frequency", "delta_t", "weight"];

/// Load the measurement CSV.
///
/// Layout: one header row, then data rows of exactly three numeric cells
/// `frequency,delta_t,weight`. Rows in error messages are 1-based data rows
/// (the header is row 0).
pub fn load_csv(path: &Path) -> Result<WeightDataset, DataError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DataError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DataError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    // flexible: ragged rows are reported as ColumnCount, not a reader error
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers().map_err(|source| DataError::Csv {
        row: 0,
        source,
    })?;
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DataError::HeaderMissing {
            path: path.to_path_buf(),
        });
    }

    let mut dataset = WeightDataset::default();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| DataError::Csv { row, source })?;

        if record.len() != COLUMNS.len() {
            return Err(DataError::ColumnCount {
                row,
                found: record.len(),
            });
        }

        let mut cells = [0.0; 3];
        for (idx, column) in COLUMNS.into_iter().enumerate() {
            let text = record.get(idx).unwrap_or("");
            cells[idx] = text.parse::<f64>().map_err(|_| DataError::DataFormat {
                row,
                column,
                value: text.to_string(),
            })?;
        }

        dataset.frequencies.push(cells[0]);
        dataset.delta_t.push(cells[1]);
        dataset.raw_weights.push(cells[2]);
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn write_csv(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("weights.csv");
        let mut file = File::create(&path).expect("create csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        (dir, path)
    }

    #[test]
    fn round_trips_literal_values() {
        let (_dir, path) = write_csv(
            "frequency,delta_t,weight\n\
             1.0,-10.0,0.75\n\
             2.0,-10.0,0.6\n\
             3.0,-10.0,0.55\n\
             1.0,10.0,0.4\n\
             2.0,10.0,0.45\n",
        );
        let dataset = load_csv(&path).expect("load");
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.frequencies, vec![1.0, 2.0, 3.0, 1.0, 2.0]);
        assert_eq!(dataset.delta_t, vec![-10.0, -10.0, -10.0, 10.0, 10.0]);
        assert_eq!(dataset.raw_weights, vec![0.75, 0.6, 0.55, 0.4, 0.45]);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { .. }));
    }

    #[test]
    fn empty_file_is_header_missing() {
        let (_dir, path) = write_csv("");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, DataError::HeaderMissing { .. }));
    }

    #[test]
    fn non_numeric_cell_names_row_and_column() {
        let (_dir, path) = write_csv(
            "frequency,delta_t,weight\n\
             1.0,-10.0,0.75\n\
             2.0,-10.0,abc\n",
        );
        match load_csv(&path).unwrap_err() {
            DataError::DataFormat { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "weight");
                assert_eq!(value, "abc");
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_column_count() {
        let (_dir, path) = write_csv(
            "frequency,delta_t,weight\n\
             1.0,-10.0\n",
        );
        match load_csv(&path).unwrap_err() {
            DataError::ColumnCount { row, found } => {
                assert_eq!(row, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected ColumnCount, got {other:?}"),
        }
    }
}
