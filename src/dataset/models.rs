use crate::dataset::error::DatasetError;

pub const PROJECT_COLUMN: &str = "Project";
pub const UNIT_TYPE_COLUMN: &str = "Unit Type";
pub const REQUIRED_COLUMNS: [&str; 2] = [PROJECT_COLUMN, UNIT_TYPE_COLUMN];

/// One input row. Either field is `None` when the cell was empty or an NA marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecord {
    pub project: Option<String>,
    pub unit_type: Option<String>,
}

impl UnitRecord {
    pub fn new(project: impl Into<String>, unit_type: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            unit_type: Some(unit_type.into()),
        }
    }

    pub fn unit_type(&self) -> Option<&str> {
        self.unit_type.as_deref()
    }
}

/// Tabular input: declared header plus the rows projected onto the two
/// columns the grouping pass reads.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<UnitRecord>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<UnitRecord>) -> Self {
        Self { columns, records }
    }

    /// Dataset with the standard header, for records built in code
    pub fn from_records(records: Vec<UnitRecord>) -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn missing_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|c| !self.has_column(c))
            .map(|c| c.to_string())
            .collect()
    }

    /// Exact, case-sensitive header check
    pub fn validate_schema(&self) -> Result<(), DatasetError> {
        let missing = self.missing_columns();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DatasetError::Schema(missing))
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_case_sensitive() {
        let dataset = Dataset::new(vec!["project".to_string(), "Unit Type".to_string()], vec![]);
        assert_eq!(
            dataset.validate_schema(),
            Err(DatasetError::Schema(vec!["Project".to_string()]))
        );
    }

    #[test]
    fn test_schema_reports_both_columns() {
        let dataset = Dataset::new(vec!["Name".to_string()], vec![]);
        assert_eq!(
            dataset.missing_columns(),
            vec!["Project".to_string(), "Unit Type".to_string()]
        );
    }

    #[test]
    fn test_extra_columns_are_fine() {
        let dataset = Dataset::new(
            vec!["Price".to_string(), "Unit Type".to_string(), "Project".to_string()],
            vec![],
        );
        assert!(dataset.validate_schema().is_ok());
    }
}
