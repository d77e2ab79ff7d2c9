#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use ctower_wasm::{parse_operation_info, OperationExtractor};

const TEXT: &str = "CLIENTE: MALE\nVALOR TOTAL DE COMPRA: 100\nICOTERM COMPRA: FOB\n---\nVALOR SOLICITADO: 100";

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn parse_returns_plain_object() {
    let op = parse_operation_info(TEXT).unwrap();

    assert!(op.is_object());
    assert_eq!(field(&op, "cliente").as_string().as_deref(), Some("MALE"));
    assert_eq!(field(&op, "incotermCompra").as_string().as_deref(), Some("FOB"));
    assert_eq!(field(&op, "valorTotalCompra").as_f64(), Some(100.0));
    assert!(field(&op, "calificacion").is_null());
}

#[wasm_bindgen_test]
fn extractor_uses_configured_status() {
    let mut extractor = OperationExtractor::new();
    extractor.set_default_giro_status("Por girar");

    let op = extractor.extract(TEXT).unwrap();
    let giros = js_sys::Array::from(&field(&op, "giros"));
    assert_eq!(giros.length(), 1);
    assert_eq!(
        field(&giros.get(0), "estado").as_string().as_deref(),
        Some("Por girar")
    );
}

#[wasm_bindgen_test]
fn extract_many_skips_non_operations() {
    let texts = js_sys::Array::new();
    texts.push(&JsValue::from_str(TEXT));
    texts.push(&JsValue::from_str("nota suelta"));
    texts.push(&JsValue::from_f64(3.0));

    let results = OperationExtractor::new().extract_many(&texts).unwrap();
    assert_eq!(js_sys::Array::from(&results).length(), 1);
}
