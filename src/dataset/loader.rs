use crate::dataset::error::DatasetError;
use crate::dataset::models::*;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_DELIMITER: u8 = b',';

/// Cell values read as missing, same set a dataframe reader uses by default
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    cell.is_empty() || NA_VALUES.contains(&cell)
}

pub fn load_dataset_from_file<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(DatasetError::UnexpectedInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    debug!(path = %path.display(), "reading dataset");
    load_dataset_from_reader(file, delimiter)
}

/// Load from uploaded file contents
pub fn load_dataset_from_str(content: &str, delimiter: u8) -> Result<Dataset, DatasetError> {
    load_dataset_from_reader(content.as_bytes(), delimiter)
}

pub fn load_dataset_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Dataset, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DatasetError::UnexpectedInput(
            "No columns to parse from file".to_string(),
        ));
    }

    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    debug!(?columns, "read header");

    let project_idx = column_index(&headers, PROJECT_COLUMN);
    let unit_type_idx = column_index(&headers, UNIT_TYPE_COLUMN);

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            DatasetError::UnexpectedInput(format!("Failed to parse CSV row {}: {}", index + 1, e))
        })?;

        // Short rows read as missing cells; long rows are malformed
        if record.len() > headers.len() {
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            return Err(DatasetError::UnexpectedInput(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                record.len()
            )));
        }

        records.push(UnitRecord {
            project: cell(&record, project_idx),
            unit_type: cell(&record, unit_type_idx),
        });
    }

    info!(rows = records.len(), columns = columns.len(), "loaded dataset");

    Ok(Dataset::new(columns, records))
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .filter(|value| !is_missing(value))
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_basic_csv() {
        let csv = "Project,Unit Type,Price\nTower A,Studio Suite,100\nTower B,2BR Deluxe,200\n";
        let dataset = load_dataset_from_str(csv, DEFAULT_DELIMITER).unwrap();

        assert_eq!(dataset.columns, vec!["Project", "Unit Type", "Price"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0], UnitRecord::new("Tower A", "Studio Suite"));
        assert_eq!(dataset.records[1], UnitRecord::new("Tower B", "2BR Deluxe"));
    }

    #[test]
    fn test_missing_cells_become_none() {
        let csv = "Project,Unit Type\nTower A,\nTower A,NaN\n,Studio\nTower C\n";
        let dataset = load_dataset_from_str(csv, DEFAULT_DELIMITER).unwrap();

        assert_eq!(dataset.records[0].unit_type, None);
        assert_eq!(dataset.records[1].unit_type, None);
        assert_eq!(dataset.records[2].project, None);
        assert_eq!(dataset.records[2].unit_type(), Some("Studio"));
        // short row
        assert_eq!(dataset.records[3].project.as_deref(), Some("Tower C"));
        assert_eq!(dataset.records[3].unit_type, None);
    }

    #[test]
    fn test_long_row_is_unexpected() {
        let csv = "Project,Unit Type\nTower A,Studio\nTower B,2BR,stray,cells\n";
        let err = load_dataset_from_str(csv, DEFAULT_DELIMITER).unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnexpectedInput("Expected 2 fields in line 3, saw 4".to_string())
        );
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let csv = "Project,Unit Type\nTower A, 2 Bed \n";
        let dataset = load_dataset_from_str(csv, DEFAULT_DELIMITER).unwrap();
        assert_eq!(dataset.records[0].unit_type(), Some(" 2 Bed "));
    }

    #[test]
    fn test_missing_column_still_loads() {
        // schema is enforced by the grouping pass, not the loader
        let csv = "Project,Kind\nTower A,Studio\n";
        let dataset = load_dataset_from_str(csv, DEFAULT_DELIMITER).unwrap();
        assert!(!dataset.has_column(UNIT_TYPE_COLUMN));
        assert_eq!(dataset.records[0].unit_type, None);
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "Project;Unit Type\nTower A;3 BHK\n";
        let dataset = load_dataset_from_str(csv, b';').unwrap();
        assert_eq!(dataset.records[0], UnitRecord::new("Tower A", "3 BHK"));
    }

    #[test]
    fn test_empty_input_is_unexpected() {
        let err = load_dataset_from_str("", DEFAULT_DELIMITER).unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnexpectedInput("No columns to parse from file".to_string())
        );
    }

    #[test]
    fn test_invalid_utf8_is_unexpected() {
        let bytes: &[u8] = b"Project,Unit Type\nTower A,\xff\xfe\n";
        let err = load_dataset_from_reader(bytes, DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(err, DatasetError::UnexpectedInput(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Project,Unit Type").unwrap();
        writeln!(file, "Park Tower,2 Bed").unwrap();

        let dataset = load_dataset_from_file(file.path(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(dataset.records, vec![UnitRecord::new("Park Tower", "2 Bed")]);
    }

    #[test]
    fn test_missing_file_is_unexpected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset_from_file(dir.path().join("absent.csv"), DEFAULT_DELIMITER)
            .unwrap_err();
        assert!(err.to_string().starts_with("File does not exist"));
    }
}
