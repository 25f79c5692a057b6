//! WASM bindings for the document editor
//!
//! All editor state (version history and the live content) is held in Rust.
//! JavaScript only mirrors the live content into the editable surface and
//! hands downloaded bytes to the browser.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { DocumentEditor, listCategoriesJson, formSchemaJson } from './pkg/docgen_wasm.js';
//!
//! await init();
//!
//! const categories = JSON.parse(listCategoriesJson());
//! const schema = JSON.parse(formSchemaJson(categories[0].category));
//!
//! const editor = new DocumentEditor(category, JSON.stringify(formValues));
//! surface.innerHTML = editor.content;
//!
//! editor.setContent(surface.innerHTML);
//! const id = editor.saveVersion();
//! editor.switchVersion(1n);
//! const versions = JSON.parse(editor.versionsJson());
//!
//! downloadBlob(editor.exportPdf(), editor.exportFilename("pdf"));
//! ```

pub mod version_display;

use editor_core::{plain_text, EditorSession, ExportFormat};
use shared_types::field_values_from_json;
use template_engine::TemplateCatalog;
use wasm_bindgen::prelude::*;

pub use version_display::{VersionListItem, VersionSummary};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Categories for the category picker as a JSON array
#[wasm_bindgen(js_name = listCategoriesJson)]
pub fn list_categories_json() -> String {
    serde_json::to_string(&TemplateCatalog::builtin().list()).unwrap_or_else(|_| "[]".to_string())
}

/// Form fields of a category as JSON
#[wasm_bindgen(js_name = formSchemaJson)]
pub fn form_schema_json(category: &str) -> Result<String, JsValue> {
    schema_json(category).map_err(|e| JsValue::from_str(&e))
}

fn schema_json(category: &str) -> Result<String, String> {
    let catalog = TemplateCatalog::builtin();
    let entry = catalog
        .get(category)
        .ok_or_else(|| format!("No template for category '{}'", category))?;
    serde_json::to_string(&entry.form_schema()).map_err(|e| format!("Serialization error: {}", e))
}

fn to_uint8_array(bytes: &[u8]) -> js_sys::Uint8Array {
    let array = js_sys::Uint8Array::new_with_length(bytes.len() as u32);
    array.copy_from(bytes);
    array
}

/// Editor for one generated document
#[wasm_bindgen]
pub struct DocumentEditor {
    session: EditorSession,
}

impl DocumentEditor {
    /// Open the editor the way the form page does.
    ///
    /// Without a category the editor starts empty. With a category but no
    /// values the raw template is shown.
    pub fn open(category: Option<&str>, values_json: Option<&str>) -> Result<Self, String> {
        let session = match category {
            None => EditorSession::new(""),
            Some(category) => {
                let values = values_json
                    .map(field_values_from_json)
                    .transpose()
                    .map_err(|e| e.to_string())?;
                EditorSession::open(&TemplateCatalog::builtin(), category, values.as_ref())
            }
        };
        Ok(Self { session })
    }

    fn restore(&mut self, id: u64) -> Result<(), String> {
        self.session.switch_version(id).map_err(|e| e.to_string())
    }

    fn history_json(&self) -> String {
        let items = version_display::version_items(self.session.ledger());
        serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
    }

    fn summary_json(&self) -> String {
        let summary = version_display::version_summary(self.session.ledger());
        serde_json::to_string(&summary).unwrap_or_else(|_| "{}".to_string())
    }

    fn export_bytes(&self, format: ExportFormat) -> Result<Vec<u8>, String> {
        self.session
            .capture(format)
            .run_default()
            .map(|artifact| artifact.bytes)
            .map_err(|e| format!("Export error: {}", e))
    }
}

#[wasm_bindgen]
impl DocumentEditor {
    /// Create an editor for `category`, optionally pre-filled from a JSON
    /// object of field values
    #[wasm_bindgen(constructor)]
    pub fn new(category: Option<String>, values_json: Option<String>) -> Result<DocumentEditor, JsValue> {
        Self::open(category.as_deref(), values_json.as_deref()).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn category(&self) -> Option<String> {
        self.session.category().map(str::to_string)
    }

    /// Live content shown in the editable surface
    #[wasm_bindgen(getter)]
    pub fn content(&self) -> String {
        self.session.live_content().to_string()
    }

    /// Mirror the editable surface after a user edit
    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&mut self, content: String) {
        self.session.set_live_content(content);
    }

    /// Commit the live content and return the new version id
    #[wasm_bindgen(js_name = saveVersion)]
    pub fn save_version(&mut self) -> u64 {
        self.session.save_version().id
    }

    /// Load a saved version into the live content
    #[wasm_bindgen(js_name = switchVersion)]
    pub fn switch_version(&mut self, id: u64) -> Result<(), JsValue> {
        self.restore(id).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter, js_name = currentVersionId)]
    pub fn current_version_id(&self) -> u64 {
        self.session.current_version_id()
    }

    /// Version dropdown entries as a JSON array
    #[wasm_bindgen(js_name = versionsJson)]
    pub fn versions_json(&self) -> String {
        self.history_json()
    }

    #[wasm_bindgen(js_name = versionSummaryJson)]
    pub fn version_summary_json(&self) -> String {
        self.summary_json()
    }

    #[wasm_bindgen(getter, js_name = hasUnsavedChanges)]
    pub fn has_unsaved_changes(&self) -> bool {
        self.session.has_unsaved_changes()
    }

    /// Live content as the text a DOC export would contain
    #[wasm_bindgen(js_name = plainText)]
    pub fn plain_text(&self) -> String {
        plain_text(self.session.live_content())
    }

    /// Download name for `format` ("pdf" or "doc")
    #[wasm_bindgen(js_name = exportFilename)]
    pub fn export_filename(&self, format: &str) -> Result<String, JsValue> {
        let format: ExportFormat = format.parse().map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        Ok(self.session.capture(format).filename())
    }

    #[wasm_bindgen(js_name = exportDoc)]
    pub fn export_doc(&self) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = self.export_bytes(ExportFormat::Doc).map_err(|e| JsValue::from_str(&e))?;
        Ok(to_uint8_array(&bytes))
    }

    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = self.export_bytes(ExportFormat::Pdf).map_err(|e| JsValue::from_str(&e))?;
        Ok(to_uint8_array(&bytes))
    }
}
