//! Core library for trade-finance operation text extraction.
//!
//! This crate provides:
//! - Text utilities (normalization, numbers, dates, validators, lookups)
//! - Operation field extraction (client, bank block, Incoterms, giros,
//!   liberaciones, NPS feedback) from free-text CSV cells
//! - Operation data models serialized for the dashboard API

pub mod error;
pub mod models;
pub mod operation;
pub mod text;

pub use error::{CtowerError, ExtractionError, Result};
pub use models::config::CtowerConfig;
pub use models::operation::{Feedback, Giro, Liberacion, OperationInfo};
pub use operation::{
    parse_operation_info, ExtractionResult, OperationInfoParser, OperationParser,
};
