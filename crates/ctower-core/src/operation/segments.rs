//! Per-segment extraction of giros and liberaciones.
//!
//! Operation text repeats its schedule entries in blocks separated by
//! dash-rule lines. Each block is read on its own; blocks without the
//! entry's primary field are skipped.

use rust_decimal::Decimal;

use crate::models::operation::{Giro, Liberacion, DEFAULT_STATUS};
use crate::text::{extract_number, find_iso_date, normalize_whitespace};

use super::labels::{
    CAPITAL_LABEL, DASH_RULE, ESTADO, FECHA, LABEL_LINE, LIBERACION_HEADING, NUMERO_GIRO,
    PORCENTAJE_GIRO, VALOR_SOLICITADO,
};
use super::FieldExtractor;

/// Split text into dash-rule delimited segments, dropping empty ones.
pub fn split_segments(text: &str) -> Vec<&str> {
    crate::text::split_into_blocks(text, &*DASH_RULE)
}

/// Extracts one [`Giro`] from a segment holding a requested value.
#[derive(Debug, Clone)]
pub struct GiroExtractor {
    default_status: String,
}

impl GiroExtractor {
    pub fn new() -> Self {
        Self {
            default_status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Status used when a segment carries no `ESTADO` label.
    pub fn with_default_status(mut self, status: impl Into<String>) -> Self {
        self.default_status = status.into();
        self
    }
}

impl Default for GiroExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GiroExtractor {
    type Output = Giro;

    fn extract(&self, segment: &str) -> Option<Giro> {
        let valor_solicitado = VALOR_SOLICITADO.capture(segment).and_then(extract_number)?;

        Some(Giro {
            valor_solicitado,
            numero_giro: label_text(NUMERO_GIRO.capture(segment)),
            porcentaje_giro: label_text(PORCENTAJE_GIRO.capture(segment)),
            estado: ESTADO
                .capture(segment)
                .map(normalize_whitespace)
                .unwrap_or_else(|| self.default_status.clone()),
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Giro> {
        split_segments(text)
            .into_iter()
            .filter_map(|segment| self.extract(segment))
            .collect()
    }
}

/// Extracts [`Liberacion`]s from segments opened by a "Liberación N" heading.
#[derive(Debug, Clone)]
pub struct LiberacionExtractor {
    default_status: String,
}

impl LiberacionExtractor {
    pub fn new() -> Self {
        Self {
            default_status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Status used when a segment carries no `ESTADO` label.
    pub fn with_default_status(mut self, status: impl Into<String>) -> Self {
        self.default_status = status.into();
        self
    }

    /// Read one release block; `position` is the 1-based fallback number.
    fn extract_at(&self, block: &str, position: u32) -> Option<Liberacion> {
        let heading = LIBERACION_HEADING.captures(block)?;
        let numero = heading
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(position);

        let fecha = FECHA
            .capture(block)
            .map(|raw| find_iso_date(raw).unwrap_or_else(|| normalize_whitespace(raw)))
            .unwrap_or_default();

        Some(Liberacion {
            numero,
            capital: extract_capital(block),
            fecha,
            estado: ESTADO
                .capture(block)
                .map(normalize_whitespace)
                .unwrap_or_else(|| self.default_status.clone()),
        })
    }
}

impl Default for LiberacionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for LiberacionExtractor {
    type Output = Liberacion;

    fn extract(&self, segment: &str) -> Option<Liberacion> {
        self.extract_at(segment, 1)
    }

    fn extract_all(&self, text: &str) -> Vec<Liberacion> {
        split_segments(text)
            .into_iter()
            .flat_map(release_blocks)
            .scan(0u32, |position, block| {
                *position += 1;
                Some((block, *position))
            })
            .filter_map(|(block, position)| self.extract_at(block, position))
            .collect()
    }
}

/// Cut a segment at every release heading; text before the first heading is dropped.
fn release_blocks(segment: &str) -> Vec<&str> {
    let starts: Vec<usize> = LIBERACION_HEADING
        .find_iter(segment)
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(segment.len());
            &segment[start..end]
        })
        .collect()
}

/// Capital amount, read from the label line or, failing that, the next line.
fn extract_capital(block: &str) -> Decimal {
    let Some(caps) = CAPITAL_LABEL.captures(block) else {
        return Decimal::ZERO;
    };

    if let Some(amount) = caps.get(1).and_then(|m| extract_number(m.as_str())) {
        return amount;
    }

    let label_end = caps.get(0).map_or(block.len(), |m| m.end());
    block[label_end..]
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| !LABEL_LINE.is_match(line))
        .and_then(extract_number)
        .unwrap_or(Decimal::ZERO)
}

fn label_text(value: Option<&str>) -> String {
    value.map(normalize_whitespace).unwrap_or_default()
}
