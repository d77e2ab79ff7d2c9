//! Currency and Incoterm code lookups.

use super::patterns::{CURRENCY_CODE, INCOTERM_CODE};

/// First known ISO currency code appearing as a whole token, upper-cased.
pub fn extract_currency_code(text: &str) -> Option<String> {
    CURRENCY_CODE
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

/// First whitelisted Incoterm appearing as a whole token, upper-cased.
pub fn extract_incoterm(text: &str) -> Option<String> {
    INCOTERM_CODE
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}
