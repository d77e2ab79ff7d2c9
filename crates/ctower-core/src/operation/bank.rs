//! Bank block extraction.
//!
//! Bank labels are only read between the `*******DATOS BANCARIOS*******`
//! marker and the next dash rule, so generic labels such as `DIRECCIÓN`
//! cannot pick up values from elsewhere in the operation text.

use tracing::debug;

use crate::text::{clean_text, is_valid_swift_code, normalize_whitespace};

use super::labels::{BANCO, BANK_MARKER, BENEFICIARIO, DASH_RULE, DIRECCION_BANCO, NUMERO_CUENTA, SWIFT};

/// Beneficiary bank data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankDetails {
    pub beneficiario: String,
    pub banco: String,
    pub direccion_banco: String,
    pub numero_cuenta: String,
    pub swift: String,
}

/// Text between the bank marker and the next dash rule (or the end of text).
pub fn bank_block(text: &str) -> Option<&str> {
    let marker = BANK_MARKER.find(text)?;
    let rest = &text[marker.end()..];
    let end = DASH_RULE.find(rest).map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

/// Extract the bank fields; all empty when the block is absent.
pub fn extract_bank_details(text: &str) -> BankDetails {
    let Some(block) = bank_block(text) else {
        debug!("No bank data block found");
        return BankDetails::default();
    };

    let field = |value: Option<&str>| {
        value
            .map(|v| normalize_whitespace(&clean_text(v)))
            .unwrap_or_default()
    };

    BankDetails {
        beneficiario: field(BENEFICIARIO.capture(block)),
        banco: field(BANCO.capture(block)),
        direccion_banco: field(DIRECCION_BANCO.capture(block)),
        numero_cuenta: NUMERO_CUENTA
            .capture(block)
            .map(normalize_whitespace)
            .unwrap_or_default(),
        swift: SWIFT.capture(block).and_then(parse_swift).unwrap_or_default(),
    }
}

/// Upper-case the captured code and keep it only if it is a valid SWIFT/BIC.
fn parse_swift(raw: &str) -> Option<String> {
    let first_token = raw.split_whitespace().next()?.to_uppercase();
    if is_valid_swift_code(&first_token) {
        return Some(first_token);
    }

    let compact: String = raw.split_whitespace().collect::<String>().to_uppercase();
    if is_valid_swift_code(&compact) {
        return Some(compact);
    }

    debug!(swift = raw, "Discarding invalid SWIFT code");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "CLIENTE: MALE\nDIRECCIÓN: Av. Cliente 1\n*******DATOS BANCARIOS*******\nBENEFICIARIO: YIWU TRADING CO., LTD\nBANCO: ZHEJIANG CHOUZHOU COMMERCIAL BANK\nDIRECCIÓN: YIWULEYUAN EAST, JIANGBIN RD\nNÚMERO DE CUENTA: 1234 5678 9012\nSWIFT: zjcbcn2n\n-----------------\nVALOR SOLICITADO: 100\nBANCO: otro";

    #[test]
    fn test_bank_block_scoped() {
        let details = extract_bank_details(TEXT);
        assert_eq!(
            details,
            BankDetails {
                beneficiario: "YIWU TRADING CO., LTD".to_string(),
                banco: "ZHEJIANG CHOUZHOU COMMERCIAL BANK".to_string(),
                direccion_banco: "YIWULEYUAN EAST, JIANGBIN RD".to_string(),
                numero_cuenta: "1234 5678 9012".to_string(),
                swift: "ZJCBCN2N".to_string(),
            }
        );
    }

    #[test]
    fn test_no_marker_no_bank_data() {
        let details = extract_bank_details("BANCO: HSBC\nSWIFT: HSBCHKHH");
        assert_eq!(details, BankDetails::default());
    }

    #[test]
    fn test_invalid_swift_discarded() {
        let text = "*******DATOS BANCARIOS*******\nBANCO: X\nSWIFT: 1234";
        let details = extract_bank_details(text);
        assert_eq!(details.banco, "X");
        assert_eq!(details.swift, "");
    }

    #[test]
    fn test_spaced_swift() {
        assert_eq!(parse_swift("ZJCB CN2N XXX"), Some("ZJCBCN2NXXX".to_string()));
        assert_eq!(parse_swift("BCMXMXMM (sucursal centro)"), Some("BCMXMXMM".to_string()));
    }
}
