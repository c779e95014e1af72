//! WebAssembly bindings for the Swatch theme mapper.
//!
//! This crate provides the JavaScript API the plugin glue calls: parse a
//! theme file, look up library keys through the candidate-name chain, plan
//! collection modes, and track per-session bookkeeping. The host variable
//! API itself stays on the JS side; only values cross this boundary.
//!
//! ## Example
//!
//! ```js
//! import { ThemeMapper } from 'swatch';
//!
//! const mapper = new ThemeMapper();
//! const summary = mapper.parseTheme(cssText, 'danger.css');
//! for (const v of summary.variables) {
//!   // v.variableName, v.lightReference, v.darkReference
//! }
//! ```

use wasm_bindgen::prelude::*;

use swatch_core::{ParseOptions, VariableMapping};
use swatch_parser::parse_theme_file;
use swatch_resolver::{candidate_names, plan_modes, MappingSession, WriteMode};

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The main mapper interface for JavaScript.
#[wasm_bindgen]
pub struct ThemeMapper {
    session: MappingSession,
    options: ParseOptions,
    last_mappings: Vec<VariableMapping>,
}

#[wasm_bindgen]
impl ThemeMapper {
    /// Create a new mapper with a fresh session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: MappingSession::default(),
            options: ParseOptions::default(),
            last_mappings: Vec::new(),
        }
    }

    /// Get the version of the mapper.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Switch between strict (default) and lenient completeness handling.
    #[wasm_bindgen(js_name = setLenient)]
    pub fn set_lenient(&mut self, lenient: bool) {
        self.options = if lenient {
            ParseOptions::lenient()
        } else {
            ParseOptions::strict()
        };
    }

    /// Set the write mode: `"merge"` or `"replace"`.
    #[wasm_bindgen(js_name = setWriteMode)]
    pub fn set_write_mode(&mut self, mode: &str) -> Result<(), JsError> {
        let mode = match mode {
            "merge" => WriteMode::Merge,
            "replace" => WriteMode::Replace,
            other => return Err(JsError::new(&format!("Unknown write mode: {}", other))),
        };
        self.session.set_write_mode(mode);
        Ok(())
    }

    /// Classify an uploaded filename into a sentiment tag.
    ///
    /// Returns the tag (or `null` when no filename is given); a filename
    /// that matches no tag is an error.
    #[wasm_bindgen(js_name = classifyFile)]
    pub fn classify_file(&mut self, filename: Option<String>) -> Result<Option<String>, JsError> {
        let sentiment = self
            .session
            .classify_file(filename.as_deref())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(sentiment.map(|s| s.as_str().to_string()))
    }

    /// Parse a CSS theme source into its mapping table.
    ///
    /// When a filename is given it is classified first (and must be a
    /// recognized sentiment file). Returns a `ParseSummaryJs` object.
    #[wasm_bindgen(js_name = parseTheme)]
    pub fn parse_theme(
        &mut self,
        source: &str,
        filename: Option<String>,
    ) -> Result<JsValue, JsError> {
        if filename.is_some() {
            self.session
                .classify_file(filename.as_deref())
                .map_err(|e| JsError::new(&e.to_string()))?;
        }

        let file = parse_theme_file(filename.as_deref(), source, &self.options)
            .map_err(|e| JsError::new(&format!("Error parsing CSS: {}", e)))?;

        web_sys::console::log_1(
            &format!("Extracted {} theme variables", file.mappings.len()).into(),
        );

        let summary = ParseSummaryJs {
            sentiment: file.sentiment.map(|s| s.as_str().to_string()),
            total_found: file.mappings.len(),
            variables: file
                .mappings
                .iter()
                .map(VariableMappingJs::from_core)
                .collect(),
        };

        self.last_mappings = file.mappings;

        serde_wasm_bindgen::to_value(&summary)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Load a token manifest from a JSON object.
    #[wasm_bindgen(js_name = loadManifest)]
    pub fn load_manifest(&mut self, json: JsValue) -> Result<usize, JsError> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(json)
            .map_err(|e| JsError::new(&format!("Invalid manifest: {}", e)))?;

        self.session
            .load_manifest(&value.to_string())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Load a token manifest from a JSON string.
    #[wasm_bindgen(js_name = loadManifestFromString)]
    pub fn load_manifest_from_string(&mut self, json: &str) -> Result<usize, JsError> {
        self.session
            .load_manifest(json)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Look up the library key for a reference through the loaded manifest.
    #[wasm_bindgen(js_name = findVariableKey)]
    pub fn find_variable_key(&self, name: &str) -> Option<String> {
        self.session.find_key(name).map(str::to_string)
    }

    /// Plan the Light/Dark mode setup for a target collection.
    #[wasm_bindgen(js_name = planModes)]
    pub fn plan_modes(&self, modes: JsValue, default_mode_id: &str) -> Result<JsValue, JsError> {
        let modes: Vec<ModeInfoJs> = serde_wasm_bindgen::from_value(modes)
            .map_err(|e| JsError::new(&format!("Invalid mode list: {}", e)))?;
        let modes: Vec<_> = modes.into_iter().map(ModeInfoJs::into_core).collect();

        let plan = ModePlanJs::from_core(plan_modes(&modes, default_mode_id));
        serde_wasm_bindgen::to_value(&plan)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Existing variable names orphaned by the last parsed mapping set.
    ///
    /// Empty unless the session is in replace mode with a known sentiment.
    #[wasm_bindgen(js_name = orphanedVariables)]
    pub fn orphaned_variables(&self, existing: Vec<String>) -> Vec<String> {
        let incoming: Vec<String> = self
            .last_mappings
            .iter()
            .map(|m| m.target.clone())
            .collect();
        self.session.orphans(&existing, &incoming)
    }

    /// Remember a library variable imported during this session.
    #[wasm_bindgen(js_name = recordImport)]
    pub fn record_import(&mut self, id: String) {
        self.session.record_import(id);
    }

    /// Hand back the imported-variable ids for host-side cleanup.
    #[wasm_bindgen(js_name = takeImports)]
    pub fn take_imports(&mut self) -> Vec<String> {
        self.session.take_imports()
    }
}

impl Default for ThemeMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered candidate names a consumer should try for a reference.
#[wasm_bindgen(js_name = candidateNames)]
pub fn candidate_names_js(name: &str) -> Vec<String> {
    candidate_names(name)
}

/// Get the mapper version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
