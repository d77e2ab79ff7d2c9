//! Rule-based operation parser.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::operation::OperationInfo;
use crate::text::{
    clean_text, extract_number, extract_payment_terms, normalize_country_name,
    normalize_whitespace,
};

use super::bank::extract_bank_details;
use super::feedback::extract_feedback;
use super::labels::{
    LabelChain, CLIENTE, INCOTERM_COMPRA, INCOTERM_LEADING, INCOTERM_VENTA, MONEDA,
    PAIS_EXPORTADOR, PAIS_IMPORTADOR, VALOR_TOTAL,
};
use super::segments::{GiroExtractor, LiberacionExtractor};
use super::{FieldExtractor, OperationParser};

/// Parsed record plus the field groups that could not be found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// Extracted operation data.
    pub operation: OperationInfo,
    /// Extraction warnings, in field order.
    pub warnings: Vec<String>,
}

/// Parser applying ordered label chains and per-segment extractors.
#[derive(Debug, Clone, Default)]
pub struct OperationInfoParser {
    giros: GiroExtractor,
    liberaciones: LiberacionExtractor,
}

impl OperationInfoParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from the extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_default_giro_status(config.default_giro_status.clone())
            .with_default_liberacion_status(config.default_liberacion_status.clone())
    }

    /// Set the status given to giros without an `ESTADO` label.
    pub fn with_default_giro_status(mut self, status: impl Into<String>) -> Self {
        self.giros = self.giros.with_default_status(status);
        self
    }

    /// Set the status given to liberaciones without an `ESTADO` label.
    pub fn with_default_liberacion_status(mut self, status: impl Into<String>) -> Self {
        self.liberaciones = self.liberaciones.with_default_status(status);
        self
    }

    /// Parse and report which field groups came back empty.
    pub fn parse_with_report(&self, text: &str) -> ExtractionResult {
        let operation = self.parse(text);
        let mut warnings = Vec::new();

        let mut missing = |empty: bool, what: &str| {
            if empty {
                warnings.push(format!("Could not extract {what}"));
            }
        };

        missing(operation.cliente.is_empty(), "client");
        missing(operation.pais_importador.is_empty(), "importing country");
        missing(operation.pais_exportador.is_empty(), "exporting country");
        missing(operation.valor_total_compra.is_zero(), "total purchase value");
        missing(operation.moneda_pago.is_empty(), "payment currency");
        missing(operation.terminos_pago.is_empty(), "payment terms");
        missing(operation.banco.is_empty(), "bank data");
        missing(operation.incoterm_compra.is_empty(), "purchase Incoterm");
        missing(operation.incoterm_venta.is_empty(), "sale Incoterm");

        ExtractionResult { operation, warnings }
    }
}

impl OperationParser for OperationInfoParser {
    fn parse(&self, text: &str) -> OperationInfo {
        let text = normalize_line_endings(text);

        info!("Parsing operation info from {} characters of text", text.len());

        let bank = extract_bank_details(&text);
        let giros = self.giros.extract_all(&text);
        let liberaciones = self.liberaciones.extract_all(&text);

        debug!(
            "Extracted {} giros and {} liberaciones",
            giros.len(),
            liberaciones.len()
        );

        OperationInfo {
            cliente: labeled(&CLIENTE, &text, |v| normalize_whitespace(&clean_text(v))),
            pais_importador: labeled(&PAIS_IMPORTADOR, &text, normalize_country_name),
            pais_exportador: labeled(&PAIS_EXPORTADOR, &text, normalize_country_name),
            valor_total_compra: VALOR_TOTAL
                .capture(&text)
                .and_then(extract_number)
                .unwrap_or(Decimal::ZERO),
            moneda_pago: labeled(&MONEDA, &text, normalize_whitespace),
            terminos_pago: extract_payment_terms(&text)
                .map(|t| normalize_whitespace(&t))
                .unwrap_or_default(),
            beneficiario: bank.beneficiario,
            banco: bank.banco,
            direccion_banco: bank.direccion_banco,
            numero_cuenta: bank.numero_cuenta,
            swift: bank.swift,
            incoterm_compra: labeled(&INCOTERM_COMPRA, &text, leading_incoterm),
            incoterm_venta: labeled(&INCOTERM_VENTA, &text, leading_incoterm),
            giros,
            liberaciones,
            feedback: extract_feedback(&text),
        }
    }
}

/// Parse with a default parser.
pub fn parse_operation_info(text: &str) -> OperationInfo {
    OperationInfoParser::new().parse(text)
}

/// Unify `\r\n` and `\r` to `\n` and trim.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

fn labeled(chain: &LabelChain, text: &str, transform: impl Fn(&str) -> String) -> String {
    chain.capture(text).map(transform).unwrap_or_default()
}

/// Keep only the leading code of values like "FOB - SHANGHAI".
fn leading_incoterm(value: &str) -> String {
    INCOTERM_LEADING
        .captures(value)
        .map(|caps| caps[1].to_uppercase())
        .unwrap_or_default()
}
