use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Required columns absent from the header (names listed)
    Schema(Vec<String>),
    /// Anything else that went wrong reading the uploaded file
    UnexpectedInput(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Schema(missing) => write!(
                f,
                "Both 'Project' and 'Unit Type' columns must be present in the input file (missing: {})",
                missing
                    .iter()
                    .map(|c| format!("'{}'", c))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            DatasetError::UnexpectedInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::UnexpectedInput(format!("Failed to parse CSV: {}", err))
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::UnexpectedInput(format!("Failed to read file: {}", err))
    }
}
