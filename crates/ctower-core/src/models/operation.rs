//! Operation data models as served to the control-tower dashboards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;
use crate::text::is_valid_swift_code;

/// Status label used when a giro or liberación carries no explicit `ESTADO`.
pub const DEFAULT_STATUS: &str = "Pendiente";

/// Structured record recovered from one operation-info text block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    /// Client name.
    pub cliente: String,

    /// Importing country, canonical display form.
    pub pais_importador: String,

    /// Exporting country, canonical display form.
    pub pais_exportador: String,

    /// Total purchase value. Zero means the value was not found.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_total_compra: Decimal,

    /// Payment currency as written (may carry noise, e.g. "USD NA").
    pub moneda_pago: String,

    /// Payment terms, free text.
    pub terminos_pago: String,

    /// Beneficiary of the supplier payment.
    pub beneficiario: String,

    /// Beneficiary bank name.
    pub banco: String,

    /// Beneficiary bank address.
    pub direccion_banco: String,

    /// Beneficiary account number.
    pub numero_cuenta: String,

    /// SWIFT/BIC code; empty unless it passed validation.
    pub swift: String,

    /// Purchase-side Incoterm code.
    pub incoterm_compra: String,

    /// Sale-side Incoterm code.
    pub incoterm_venta: String,

    /// Disbursements in order of appearance.
    #[serde(default)]
    pub giros: Vec<Giro>,

    /// Capital releases in order of appearance.
    #[serde(default)]
    pub liberaciones: Vec<Liberacion>,

    /// Post-operation NPS feedback.
    #[serde(flatten)]
    pub feedback: Feedback,
}

/// A scheduled disbursement to the supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Giro {
    /// Requested amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_solicitado: Decimal,

    /// Free-text sequence label, e.g. "1er Giro a Proveedor".
    pub numero_giro: String,

    /// Free-text share of the total, e.g. "30% del total".
    pub porcentaje_giro: String,

    /// Status label.
    pub estado: String,
}

/// A scheduled capital release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liberacion {
    /// 1-based position in the release schedule.
    pub numero: u32,

    /// Released capital.
    #[serde(with = "rust_decimal::serde::float")]
    pub capital: Decimal,

    /// `YYYY-MM-DD` when the source date could be read, raw text otherwise.
    pub fecha: String,

    /// Status label.
    pub estado: String,
}

/// NPS block found after the `NPS` marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Whether the client reported problems.
    pub inconvenientes: bool,

    /// Description of the reported problems.
    pub descripcion_inconvenientes: Option<String>,

    /// Satisfaction score, 1 to 5.
    pub calificacion: Option<u8>,
}

impl OperationInfo {
    /// Sum of all requested disbursement amounts, `None` on decimal overflow.
    pub fn giros_total(&self) -> Option<Decimal> {
        checked_sum(self.giros.iter().map(|g| g.valor_solicitado))
    }

    /// Sum of all released capital, `None` on decimal overflow.
    pub fn liberaciones_total(&self) -> Option<Decimal> {
        checked_sum(self.liberaciones.iter().map(|l| l.capital))
    }

    /// Check that the giros add up to the declared purchase total.
    ///
    /// Records without giros or without a purchase total are not checked.
    pub fn reconcile(&self, tolerance: Decimal) -> Result<(), ExtractionError> {
        if self.giros.is_empty() || self.valor_total_compra.is_zero() {
            return Ok(());
        }

        let disbursed = self
            .giros_total()
            .ok_or(ExtractionError::AmountOverflow("giros"))?;

        // A difference outside the decimal range is past any tolerance
        let within_tolerance = disbursed
            .checked_sub(self.valor_total_compra)
            .is_some_and(|diff| diff.abs() <= tolerance);

        if !within_tolerance {
            return Err(ExtractionError::TotalMismatch {
                declared: self.valor_total_compra,
                disbursed,
            });
        }

        Ok(())
    }

    /// Incoterm pair as shown on the dashboards, e.g. "FOB / DAP".
    ///
    /// Missing sides stay empty; display fallbacks belong to the caller.
    pub fn incoterms_label(&self) -> String {
        match (self.incoterm_compra.is_empty(), self.incoterm_venta.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.incoterm_compra.clone(),
            (true, false) => self.incoterm_venta.clone(),
            (false, false) => format!("{} / {}", self.incoterm_compra, self.incoterm_venta),
        }
    }

    /// Validate the extracted data and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.cliente.is_empty() {
            issues.push("Missing client".to_string());
        }

        if self.valor_total_compra.is_zero() {
            issues.push("Total purchase value is zero".to_string());
        }

        if self.moneda_pago.is_empty() {
            issues.push("Missing payment currency".to_string());
        }

        if !self.banco.is_empty() && self.swift.is_empty() {
            issues.push("Bank block has no valid SWIFT code".to_string());
        }

        if !self.swift.is_empty() && !is_valid_swift_code(&self.swift) {
            issues.push(format!("Invalid SWIFT code: {}", self.swift));
        }

        if let Err(e) = self.reconcile(Decimal::new(1, 2)) {
            issues.push(e.to_string());
        }

        for (i, lib) in self.liberaciones.iter().enumerate() {
            if lib.capital.is_zero() {
                issues.push(format!("Liberación {} has no capital", i + 1));
            }
        }

        issues
    }
}

fn checked_sum(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}
