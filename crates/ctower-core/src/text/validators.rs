//! Bank-identifier validators and contact-data scanners.

use super::patterns::{ACCOUNT_DIGITS, DMY_DATE_INLINE, EMAIL, ISO_DATE, PHONE, SWIFT_CODE};

/// Validate a SWIFT/BIC code.
///
/// Layout: 4 letters (bank), 2 letters (country), 2 alphanumerics
/// (location), optionally 3 alphanumerics (branch).
pub fn is_valid_swift_code(text: &str) -> bool {
    SWIFT_CODE.is_match(text.trim())
}

/// Loose account-number check: 6 to 34 digits once spaces and dashes are gone.
pub fn is_valid_account_number(text: &str) -> bool {
    let digits: String = text.chars().filter(|c| *c != ' ' && *c != '-').collect();
    ACCOUNT_DIGITS.is_match(&digits)
}

/// Find phone-number shaped substrings: optional `+`, 7 to 15 digits.
///
/// Runs embedded in longer digit strings are skipped, as are ISO and
/// day-first dates.
pub fn extract_phone_numbers(text: &str) -> Vec<&str> {
    PHONE
        .find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(|c| c.is_ascii_digit())
                && !after.is_some_and(|c| c.is_ascii_digit())
        })
        .map(|m| m.as_str())
        .filter(|candidate| !ISO_DATE.is_match(candidate) && !DMY_DATE_INLINE.is_match(candidate))
        .collect()
}

/// Find email addresses.
pub fn extract_emails(text: &str) -> Vec<&str> {
    EMAIL.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swift_valid() {
        assert!(is_valid_swift_code("ZJCBCN2N"));
        assert!(is_valid_swift_code("ZJCBCN2NXXX"));
        assert!(is_valid_swift_code("  BCMXMXMM  "));
    }

    #[test]
    fn test_swift_invalid() {
        assert!(!is_valid_swift_code("1234"));
        assert!(!is_valid_swift_code("ZJCBCN2NX"));
        assert!(!is_valid_swift_code("ZJ1BCN2N"));
        assert!(!is_valid_swift_code("zjcbcn2n"));
        assert!(!is_valid_swift_code(""));
    }

    #[test]
    fn test_account_number() {
        assert!(is_valid_account_number("1234 5678 9012"));
        assert!(is_valid_account_number("012-345"));
        assert!(!is_valid_account_number("12345"));
        assert!(!is_valid_account_number("CN12 3456 7890"));
        assert!(!is_valid_account_number(&"1".repeat(35)));
    }

    #[test]
    fn test_extract_phone_numbers() {
        let text = "Tel: +52 55 1234 5678, oficina 555-123-4567. Fecha 2025-07-25. Cuenta 62284800101234567890";
        assert_eq!(
            extract_phone_numbers(text),
            vec!["+52 55 1234 5678", "555-123-4567"]
        );
    }

    #[test]
    fn test_extract_phone_numbers_skips_day_first_dates() {
        assert_eq!(
            extract_phone_numbers("Fecha 25.07.2025 tel +56 9 1234 5678"),
            vec!["+56 9 1234 5678"]
        );
        assert_eq!(extract_phone_numbers("Vence 25-07-2025"), Vec::<&str>::new());
    }

    #[test]
    fn test_extract_emails() {
        let text = "contacto: ops@male.com.mx; copia a finanzas.latam@example.com";
        assert_eq!(
            extract_emails(text),
            vec!["ops@male.com.mx", "finanzas.latam@example.com"]
        );
    }
}
