//! Date extraction and conversion.

use chrono::NaiveDate;

use super::patterns::{DMY_DATE, DMY_DATE_INLINE, ISO_DATE};

/// Find every `YYYY-MM-DD` substring, in order, duplicates retained.
pub fn extract_dates(text: &str) -> Vec<&str> {
    ISO_DATE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Convert a `DD/MM/YYYY` date to `YYYY-MM-DD`.
///
/// Only the day-first shape is accepted; anything else (ISO dates
/// included) or an impossible calendar date yields `None`.
pub fn convert_date_format(date_string: &str) -> Option<String> {
    let caps = DMY_DATE.captures(date_string.trim())?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Best-effort ISO rendering of a date written somewhere in `text`.
///
/// Tries the whole text as `DD/MM/YYYY`, then the first embedded
/// day-first date (`DD/MM/YYYY`, `DD-MM-YYYY` or `DD.MM.YYYY`), then the
/// first embedded ISO date.
pub fn find_iso_date(text: &str) -> Option<String> {
    if let Some(iso) = convert_date_format(text) {
        return Some(iso);
    }

    if let Some(iso) = DMY_DATE_INLINE
        .find_iter(text)
        .find_map(|m| convert_date_format(&m.as_str().replace(['-', '.'], "/")))
    {
        return Some(iso);
    }

    extract_dates(text)
        .into_iter()
        .find(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").is_ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_date_format() {
        assert_eq!(convert_date_format("25/07/2025"), Some("2025-07-25".to_string()));
        assert_eq!(convert_date_format(" 5/8/2025 "), Some("2025-08-05".to_string()));
        assert_eq!(convert_date_format("2025-07-25"), None);
        assert_eq!(convert_date_format("07/25/2025"), None);
        assert_eq!(convert_date_format("25/07/25"), None);
        assert_eq!(convert_date_format(""), None);
    }

    #[test]
    fn test_extract_dates() {
        let text = "Fecha: 2025-07-25, otra 2025-08-25 y de nuevo 2025-07-25";
        assert_eq!(
            extract_dates(text),
            vec!["2025-07-25", "2025-08-25", "2025-07-25"]
        );
        assert!(extract_dates("25/07/2025").is_empty());
    }

    #[test]
    fn test_find_iso_date() {
        assert_eq!(find_iso_date("25/07/2025"), Some("2025-07-25".to_string()));
        assert_eq!(find_iso_date("aprox. 25/07/2025"), Some("2025-07-25".to_string()));
        assert_eq!(find_iso_date("2025-09-01"), Some("2025-09-01".to_string()));
        assert_eq!(find_iso_date("finales de julio"), None);
    }

    #[test]
    fn test_find_iso_date_other_separators() {
        assert_eq!(find_iso_date("25-07-2025"), Some("2025-07-25".to_string()));
        assert_eq!(find_iso_date("el 25.07.2025 aprox."), Some("2025-07-25".to_string()));
        assert_eq!(find_iso_date("31-02-2025"), None);
        assert_eq!(convert_date_format("25-07-2025"), None);
        assert_eq!(convert_date_format("25.07.2025"), None);
    }
}
