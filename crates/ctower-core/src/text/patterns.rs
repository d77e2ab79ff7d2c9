//! Common regex patterns shared by the text utilities.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Thousands-grouped first so "80,000.50" is not cut at the first comma
    pub static ref NUMBER: Regex = Regex::new(
        r"-?\d{1,3}(?:[.,]\d{3})+(?:[.,]\d+)?\b|-?\d+(?:[.,]\d+)?"
    ).unwrap();

    pub static ref PERCENTAGE: Regex = Regex::new(
        r"(\d+(?:[.,]\d+)?)%"
    ).unwrap();

    // Dates
    pub static ref ISO_DATE: Regex = Regex::new(
        r"\b\d{4}-\d{2}-\d{2}\b"
    ).unwrap();

    pub static ref DMY_DATE: Regex = Regex::new(
        r"^(\d{1,2})/(\d{1,2})/(\d{4})$"
    ).unwrap();

    /// Day-first date inside running text, separated by `/`, `-` or `.`.
    pub static ref DMY_DATE_INLINE: Regex = Regex::new(
        r"\b\d{1,2}(?:/\d{1,2}/|-\d{1,2}-|\.\d{1,2}\.)\d{4}\b"
    ).unwrap();

    // Bank identifiers
    pub static ref SWIFT_CODE: Regex = Regex::new(
        r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}(?:[A-Z0-9]{3})?$"
    ).unwrap();

    pub static ref ACCOUNT_DIGITS: Regex = Regex::new(
        r"^\d{6,34}$"
    ).unwrap();

    // Contact data
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"\+?\d(?:[ .\-]?\d){6,14}"
    ).unwrap();

    // Codes
    pub static ref CURRENCY_CODE: Regex = Regex::new(
        r"(?i)\b(USD|EUR|CNY|MXN|COP|PEN|CLP|ARS|BRL|GBP|JPY|CHF|CAD|AUD|HKD|KRW|INR|GTQ|CRC|DOP)\b"
    ).unwrap();

    pub static ref INCOTERM_CODE: Regex = Regex::new(
        r"(?i)\b(EXW|FCA|FAS|FOB|CFR|CIF|CPT|CIP|DAP|DPU|DDP|DAT)\b"
    ).unwrap();

    // Labels
    pub static ref PAYMENT_TERMS: Regex = Regex::new(
        r"(?im)^[\s*•\-]*(?:T[EÉ]RMINOS?\s+DE\s+PAGO|CONDICI[OÓ]N(?:ES)?\s+DE\s+PAGO|FORMA\s+DE\s+PAGO|PAYMENT\s+TERMS)\s*[:：][ \t]*([^\r\n]*)"
    ).unwrap();

    pub static ref CLIENT_MARKER: Regex = Regex::new(
        r"(?i)\bCLIENTE\s*[:：]"
    ).unwrap();

    pub static ref VALUE_MARKER: Regex = Regex::new(
        r"(?i)\bVALOR\s+(?:TOTAL|SOLICITADO)\b"
    ).unwrap();
}
