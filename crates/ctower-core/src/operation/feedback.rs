//! NPS feedback block.

use rust_decimal::prelude::ToPrimitive;

use crate::models::operation::Feedback;
use crate::text::normalize::fold;
use crate::text::{extract_number, normalize_whitespace};

use super::labels::{CALIFICACION, DESCRIPCION_INCONVENIENTES, INCONVENIENTES, NPS_MARKER};

const AFFIRMATIVE: &[&str] = &["si", "s", "yes", "y", "true", "1", "x"];

const NO_DESCRIPTION: &[&str] = &[
    "", "-", "n/a", "na", "no", "no aplica", "ninguno", "ninguna", "none", "sin inconvenientes",
];

/// Read the feedback labels found after the `NPS` marker.
pub fn extract_feedback(text: &str) -> Feedback {
    let Some(marker) = NPS_MARKER.find(text) else {
        return Feedback::default();
    };
    let tail = &text[marker.end()..];

    Feedback {
        inconvenientes: INCONVENIENTES.capture(tail).is_some_and(is_affirmative),
        descripcion_inconvenientes: DESCRIPCION_INCONVENIENTES
            .capture(tail)
            .map(normalize_whitespace)
            .filter(|d| !NO_DESCRIPTION.contains(&fold(d).trim_end_matches('.'))),
        calificacion: CALIFICACION.capture(tail).and_then(parse_score),
    }
}

fn is_affirmative(value: &str) -> bool {
    let folded = fold(value);
    let first_word = folded
        .split(|c: char| !c.is_alphanumeric())
        .find(|w| !w.is_empty())
        .unwrap_or("");
    AFFIRMATIVE.contains(&first_word)
}

/// Whole score from 1 to 5; anything else is discarded, not clamped.
fn parse_score(value: &str) -> Option<u8> {
    let score = extract_number(value)?;
    if !score.fract().is_zero() {
        return None;
    }
    score.to_u8().filter(|s| (1..=5).contains(s))
}
