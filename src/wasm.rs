// WebAssembly bindings for browser hosts: the page reads the uploaded CSV,
// passes its text in, and offers the returned JSON as grouped_projects.json
use crate::classifier;
use crate::dataset;
use crate::grouping;
use wasm_bindgen::prelude::*;

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&format!("{}: {}", context, err)).into()
}

#[wasm_bindgen]
pub struct RoomCountWasm {
    delimiter: u8,
    indent: usize,
    file_name: String,
}

impl Default for RoomCountWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RoomCountWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            delimiter: dataset::DEFAULT_DELIMITER,
            indent: grouping::DEFAULT_INDENT,
            file_name: grouping::EXPORT_FILE_NAME.to_string(),
        }
    }

    /// Load settings from TOML text (same format as roomcount.toml)
    #[wasm_bindgen]
    pub fn configure(&mut self, config_content: &str) -> Result<(), JsValue> {
        let config = crate::config::Config::load_from_str(config_content)
            .map_err(|e| js_error("Failed to load config", e))?;
        self.delimiter = config
            .delimiter()
            .map_err(|e| js_error("Failed to load config", e))?;
        self.indent = config.export.indent;
        self.file_name = config.export.file_name;
        Ok(())
    }

    /// Room count for a single unit type label
    #[wasm_bindgen]
    pub fn classify(&self, unit_type: Option<String>) -> String {
        classifier::determine_room_count(unit_type.as_deref()).to_string()
    }

    /// Uploaded CSV text -> display text
    #[wasm_bindgen]
    pub fn display_from_csv(&self, csv_content: &str) -> Result<String, JsValue> {
        let groups = self.group(csv_content)?;
        Ok(grouping::format_display(&groups))
    }

    /// Uploaded CSV text -> JSON export
    #[wasm_bindgen]
    pub fn export_from_csv(&self, csv_content: &str) -> Result<String, JsValue> {
        let groups = self.group(csv_content)?;
        grouping::to_export_json(&groups, self.indent)
            .map_err(|e| js_error("Failed to serialize result", e))
    }

    #[wasm_bindgen(getter)]
    pub fn export_file_name(&self) -> String {
        self.file_name.clone()
    }
}

impl RoomCountWasm {
    fn group(&self, csv_content: &str) -> Result<grouping::ProjectGroups, JsValue> {
        let dataset = dataset::load_dataset_from_str(csv_content, self.delimiter)
            .map_err(|e| js_error("Error", e))?;
        grouping::group_by_project(&dataset).map_err(|e| js_error("Error", e))
    }
}
