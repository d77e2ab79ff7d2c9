//! WASM bindings for trade-finance operation text extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use ctower_core::{ExtractionResult, OperationInfoParser, OperationParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Flattened records serialize as maps; emit them as plain JS objects.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract operation data from one free-text block.
#[wasm_bindgen]
pub fn parse_operation_info(text: &str) -> Result<JsValue, JsValue> {
    to_js(&ctower_core::parse_operation_info(text))
}

/// Check that a text carries the client and value labels of an operation block.
#[wasm_bindgen]
pub fn is_valid_operation_text(text: &str) -> bool {
    ctower_core::text::is_valid_operation_text(text)
}

/// Validate a SWIFT/BIC code.
#[wasm_bindgen]
pub fn is_valid_swift_code(code: &str) -> bool {
    ctower_core::text::is_valid_swift_code(code)
}

/// Validate a bank account number.
#[wasm_bindgen]
pub fn is_valid_account_number(account: &str) -> bool {
    ctower_core::text::is_valid_account_number(account)
}

/// Convert `DD/MM/YYYY` to `YYYY-MM-DD`; `undefined` for anything else.
#[wasm_bindgen]
pub fn convert_date_format(date: &str) -> Option<String> {
    ctower_core::text::convert_date_format(date)
}

/// Canonical display name of a country.
#[wasm_bindgen]
pub fn normalize_country_name(name: &str) -> String {
    ctower_core::text::normalize_country_name(name)
}

/// Dashboard label for an Incoterm pair, "FOB / CIF" when both are missing.
#[wasm_bindgen]
pub fn incoterm_display(compra: &str, venta: &str) -> String {
    let (compra, venta) = (compra.trim(), venta.trim());
    if compra.is_empty() && venta.is_empty() {
        return "FOB / CIF".to_string();
    }
    format!("{} / {}", compra, venta)
}

/// Operation extractor class for browser use.
#[wasm_bindgen]
pub struct OperationExtractor {
    parser: OperationInfoParser,
}

#[wasm_bindgen]
impl OperationExtractor {
    /// Create a new operation extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: OperationInfoParser::new(),
        }
    }

    /// Status assigned to giros without an `ESTADO` label.
    #[wasm_bindgen]
    pub fn set_default_giro_status(&mut self, status: &str) {
        self.parser = self.parser.clone().with_default_giro_status(status);
    }

    /// Status assigned to liberaciones without an `ESTADO` label.
    #[wasm_bindgen]
    pub fn set_default_liberacion_status(&mut self, status: &str) {
        self.parser = self.parser.clone().with_default_liberacion_status(status);
    }

    /// Extract operation data from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Extract operation data along with the list of missing field groups.
    #[wasm_bindgen]
    pub fn extract_with_warnings(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse_with_report(text))
    }

    /// Extract every operation-looking string of an array; other entries are skipped.
    #[wasm_bindgen]
    pub fn extract_many(&self, texts: &js_sys::Array) -> Result<JsValue, JsValue> {
        let results: Vec<ExtractionResult> = texts
            .iter()
            .filter_map(|value| value.as_string())
            .filter(|text| ctower_core::text::is_valid_operation_text(text))
            .map(|text| self.parser.parse_with_report(&text))
            .collect();

        to_js(&results)
    }
}

impl Default for OperationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoterm_display() {
        assert_eq!(incoterm_display("FOB", "DAP"), "FOB / DAP");
        assert_eq!(incoterm_display("", ""), "FOB / CIF");
        assert_eq!(incoterm_display(" ", "\t"), "FOB / CIF");
        assert_eq!(incoterm_display("EXW", ""), "EXW / ");
    }

    #[test]
    fn test_passthrough_validators() {
        assert!(is_valid_swift_code("ZJCBCN2N"));
        assert!(!is_valid_swift_code("ZJCB"));
        assert_eq!(convert_date_format("25/07/2025").as_deref(), Some("2025-07-25"));
        assert_eq!(normalize_country_name("mexico"), "México");
    }
}
