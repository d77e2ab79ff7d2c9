//! Domain-agnostic text utilities.
//!
//! Every function here is pure and total: a failed lookup returns `None`,
//! an empty `Vec`, or `false`, never an error.

pub mod codes;
pub mod dates;
pub mod normalize;
pub mod numbers;
pub mod patterns;
pub mod search;
pub mod validators;

pub use codes::{extract_currency_code, extract_incoterm};
pub use dates::{convert_date_format, extract_dates, find_iso_date};
pub use normalize::{
    capitalize_words, clean_text, normalize_country_name, normalize_whitespace, sanitize_name,
};
pub use numbers::{extract_number, extract_percentage, parse_number_token};
pub use search::{
    extract_after_label, extract_after_label_with, extract_between, extract_lines_containing,
    extract_payment_terms, is_valid_operation_text, split_into_blocks, TextPattern,
};
pub use validators::{
    extract_emails, extract_phone_numbers, is_valid_account_number, is_valid_swift_code,
};
