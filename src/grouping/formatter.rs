use crate::grouping::models::ProjectGroups;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::path::Path;

/// Download name for the JSON export
pub const EXPORT_FILE_NAME: &str = "grouped_projects.json";
pub const DEFAULT_INDENT: usize = 4;

/// Display text for a missing unit type
const MISSING_UNIT_TYPE: &str = "nan";

#[derive(Debug)]
pub enum ExportError {
    Json(String),
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Json(msg) => write!(f, "JSON error: {}", msg),
            ExportError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

/// Render the grouped result as display text:
///
/// ```text
/// Project: Tower A
/// ("Studio Suite", "1"),
/// ("2BR Deluxe", "2"),
/// ---
/// ```
pub fn format_display(groups: &ProjectGroups) -> String {
    let mut out = String::new();

    for group in groups {
        let _ = writeln!(out, "Project: {}", group.project);
        for unit in &group.units {
            let unit_type = unit.unit_type.as_deref().unwrap_or(MISSING_UNIT_TYPE);
            let _ = writeln!(out, "(\"{}\", \"{}\"),", unit_type, unit.room_count);
        }
        out.push_str("---\n");
    }

    out
}

/// Pretty JSON export: project -> [[unitType, roomCount], ...]
pub fn to_export_json(groups: &ProjectGroups, indent: usize) -> Result<String, ExportError> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    groups.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| ExportError::Json(e.to_string()))
}

/// Parse an export back into grouped form, keeping key order
pub fn from_export_json(json: &str) -> Result<ProjectGroups, ExportError> {
    Ok(serde_json::from_str(json)?)
}

pub fn write_export<P: AsRef<Path>>(
    groups: &ProjectGroups,
    path: P,
    indent: usize,
) -> Result<(), ExportError> {
    let json = to_export_json(groups, indent)?;
    std::fs::write(path, json)?;
    Ok(())
}
