//! Label fallback chains and section markers for operation text.
//!
//! Each field owns an ordered list of label spellings. Canonical spellings
//! come first, typos and synonyms last; the first variant that yields a
//! non-empty value wins. Reordering a chain changes the output on text that
//! carries more than one spelling.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Ordered label variants for one field.
#[derive(Debug)]
pub struct LabelChain {
    field: &'static str,
    patterns: Vec<Regex>,
}

impl LabelChain {
    // Variants are constant regex fragments, so compilation cannot fail at runtime.
    fn new(field: &'static str, labels: &[&str]) -> Self {
        let patterns = labels
            .iter()
            .map(|label| {
                Regex::new(&format!(
                    r"(?im)^[ \t*•\-]*(?:{label})[ \t]*[:：][ \t]*([^\r\n]*)"
                ))
                .unwrap()
            })
            .collect();

        Self { field, patterns }
    }

    /// Field name, for diagnostics.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Trimmed value after the highest-priority label present in `text`.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        for (variant, re) in self.patterns.iter().enumerate() {
            let value = re
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .find(|v| !v.is_empty());

            if let Some(value) = value {
                trace!(field = self.field, variant, "label matched");
                return Some(value);
            }
        }

        trace!(field = self.field, "no label variant matched");
        None
    }
}

lazy_static! {
    // Scalar fields
    pub static ref CLIENTE: LabelChain = LabelChain::new("cliente", &[
        r"CLIENTE",
        r"NOMBRE\s+DEL\s+CLIENTE",
        r"RAZ[OÓ]N\s+SOCIAL",
        r"CLIENT",
    ]);

    pub static ref PAIS_IMPORTADOR: LabelChain = LabelChain::new("paisImportador", &[
        r"PA[IÍ]S\s+IMPORTADOR",
        r"PA[IÍ]S\s+DEL\s+IMPORTADOR",
        r"PA[IÍ]S\s+DE\s+(?:IMPORTACI[OÓ]N|DESTINO)",
    ]);

    pub static ref PAIS_EXPORTADOR: LabelChain = LabelChain::new("paisExportador", &[
        r"PA[IÍ]S\s+EXPORTADOR",
        r"PA[IÍ]S\s+DEL\s+EXPORTADOR",
        r"PA[IÍ]S\s+DE\s+(?:EXPORTACI[OÓ]N|ORIGEN)",
        r"PA[IÍ]S\s+(?:DEL\s+)?PROVEEDOR",
    ]);

    pub static ref VALOR_TOTAL: LabelChain = LabelChain::new("valorTotalCompra", &[
        r"VALOR\s+TOTAL\s+DE\s+(?:LA\s+)?COMPRA",
        r"VALOR\s+TOTAL\s+COMPRA",
        r"VALOR\s+TOTAL",
        r"MONTO\s+TOTAL(?:\s+DE\s+(?:LA\s+)?COMPRA)?",
        r"TOTAL\s+(?:DE\s+(?:LA\s+)?)?COMPRA",
    ]);

    pub static ref MONEDA: LabelChain = LabelChain::new("monedaPago", &[
        r"MONEDA\s+DE\s+PAGO",
        r"MONEDA",
        r"DIVISA",
        r"CURRENCY",
    ]);

    // Bank block
    pub static ref BENEFICIARIO: LabelChain = LabelChain::new("beneficiario", &[
        r"BENEFICIARIO",
        r"NOMBRE\s+DEL\s+BENEFICIARIO",
        r"BENEFICIARY(?:\s+NAME)?",
    ]);

    pub static ref BANCO: LabelChain = LabelChain::new("banco", &[
        r"BANCO",
        r"BANCO\s+(?:DEL\s+)?BENEFICIARIO",
        r"NOMBRE\s+DEL\s+BANCO",
        r"BANK(?:\s+NAME)?",
    ]);

    pub static ref DIRECCION_BANCO: LabelChain = LabelChain::new("direccionBanco", &[
        r"DIRECCI[OÓ]N\s+(?:DEL\s+)?BANCO",
        r"DIRECCI[OÓ]N",
        r"BANK\s+ADDRESS",
        r"ADDRESS",
    ]);

    pub static ref NUMERO_CUENTA: LabelChain = LabelChain::new("numeroCuenta", &[
        r"N[UÚ]MERO\s+DE\s+CUENTA",
        r"N[°ºo]\.?\s*(?:DE\s+)?CUENTA",
        r"CUENTA(?:\s+BANCARIA)?",
        r"ACCOUNT(?:\s+(?:NUMBER|NO\.?))?",
        r"IBAN",
    ]);

    pub static ref SWIFT: LabelChain = LabelChain::new("swift", &[
        r"SWIFT",
        r"C[OÓ]DIGO\s+SWIFT",
        r"SWIFT\s*/\s*BIC",
        r"SWIFT\s+CODE",
        r"BIC",
    ]);

    // Incoterms
    pub static ref INCOTERM_COMPRA: LabelChain = LabelChain::new("incotermCompra", &[
        r"INCOTERMS?\s+(?:DE\s+)?COMPRA",
        r"INCOTERMS?\s+(?:DEL\s+)?PROVEEDOR",
        r"ICOTERMS?\s+(?:DE\s+)?COMPRA",
        r"INCOTEMS?\s+(?:DE\s+)?COMPRA",
    ]);

    pub static ref INCOTERM_VENTA: LabelChain = LabelChain::new("incotermVenta", &[
        r"INCOTERMS?\s+(?:DE\s+)?VENTA",
        r"INCOTERMS?\s+(?:DEL\s+)?CLIENTE",
        r"ICOTERMS?\s+(?:DE\s+)?VENTA",
        r"INCOTEMS?\s+(?:DE\s+)?VENTA",
    ]);

    // Giro segments
    pub static ref VALOR_SOLICITADO: LabelChain = LabelChain::new("valorSolicitado", &[
        r"VALOR\s+SOLICITADO",
        r"VALOR\s+SOLICITADO\s+(?:DEL\s+)?GIRO",
        r"MONTO\s+SOLICITADO",
        r"VALOR\s+(?:DEL\s+)?GIRO",
    ]);

    pub static ref NUMERO_GIRO: LabelChain = LabelChain::new("numeroGiro", &[
        r"N[UÚ]MERO\s+DE\s+GIRO",
        r"N[°ºo]\.?\s*(?:DE\s+)?GIRO",
        r"GIRO\s+N[°ºo]\.?",
    ]);

    pub static ref PORCENTAJE_GIRO: LabelChain = LabelChain::new("porcentajeGiro", &[
        r"PORCENTAJE\s+DE\s+GIRO",
        r"PORCENTAJE\s+DEL\s+GIRO",
        r"%\s+DE(?:L)?\s+GIRO",
        r"PORCENTAJE",
    ]);

    pub static ref ESTADO: LabelChain = LabelChain::new("estado", &[
        r"ESTADO",
        r"ESTADO\s+(?:DEL\s+)?(?:GIRO|PAGO)",
        r"ESTADO\s+(?:DE\s+LA\s+)?LIBERACI[OÓ]N",
        r"STATUS",
    ]);

    // Liberación segments
    pub static ref FECHA: LabelChain = LabelChain::new("fecha", &[
        r"FECHA",
        r"FECHA\s+DE\s+(?:LA\s+)?(?:LIBERACI[OÓ]N|PAGO|VENCIMIENTO)",
        r"VENCIMIENTO",
    ]);

    // NPS block
    pub static ref INCONVENIENTES: LabelChain = LabelChain::new("inconvenientes", &[
        r"INCONVENIENTES",
        r"¿?\s*TUVO\s+INCONVENIENTES\s*\??",
        r"PROBLEMAS",
    ]);

    pub static ref DESCRIPCION_INCONVENIENTES: LabelChain = LabelChain::new("descripcionInconvenientes", &[
        r"DESCRIPCI[OÓ]N\s+(?:DE\s+)?(?:LOS\s+)?INCONVENIENTES",
        r"DESCRIPCI[OÓ]N",
        r"DETALLE\s+(?:DE\s+)?(?:LOS\s+)?INCONVENIENTES",
    ]);

    pub static ref CALIFICACION: LabelChain = LabelChain::new("calificacion", &[
        r"CALIFICACI[OÓ]N",
        r"PUNTUACI[OÓ]N",
        r"PUNTAJE",
        r"NOTA",
    ]);
}

lazy_static! {
    /// A line made only of three or more hyphens.
    pub static ref DASH_RULE: Regex = Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*$").unwrap();

    pub static ref BANK_MARKER: Regex = Regex::new(
        r"(?i)\*{3,}[ \t]*DATOS[ \t]+BANCARIOS[ \t]*\*{3,}"
    ).unwrap();

    pub static ref NPS_MARKER: Regex = Regex::new(r"\bNPS\b").unwrap();

    /// "Liberación N" heading; the sequence number is optional.
    pub static ref LIBERACION_HEADING: Regex = Regex::new(
        r"(?im)^[ \t*•#\-]*LIBERACI[OÓ]N(?:[ \t]+DE[ \t]+CAPITAL)?(?:[ \t]*(?:N[°ºo]\.?|#)?[ \t]*(\d+))?\b"
    ).unwrap();

    /// "Capital" label whose amount may sit on the following line.
    pub static ref CAPITAL_LABEL: Regex = Regex::new(
        r"(?im)^[ \t*•\-]*CAPITAL\b(?:[ \t]+(?:A[ \t]+)?LIBERAD[OA]|[ \t]+A[ \t]+LIBERAR)?[ \t]*[:：]?[ \t]*([^\r\n]*)"
    ).unwrap();

    /// A line that starts with its own `label:`.
    pub static ref LABEL_LINE: Regex = Regex::new(r"^[\p{L}\s.°º]+[:：]").unwrap();

    /// Leading 3-4 letter code, stopped by whitespace, a dash, or punctuation.
    pub static ref INCOTERM_LEADING: Regex = Regex::new(
        r"^([A-Za-z]{3,4})(?:[\s\-–—,/.(]|$)"
    ).unwrap();
}
