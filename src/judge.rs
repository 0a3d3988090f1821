//! Juez superficial de los envíos.
//!
//! Un envío pasa si su texto, sin distinguir mayúsculas, contiene `return`.
//! Las pistas de cada pregunta no se evalúan: solo se muestran como ayuda
//! cuando el envío falla.

use crate::model::{Question, SubmissionResult};

/// Puntos que suma cada envío correcto.
pub const SCORE_INCREMENT: u32 = 10;

pub const MISSING_RETURN: &str = "Your code is missing a return statement.";

pub fn check(code: &str, question: &Question, previous_score: u32) -> SubmissionResult {
    let passed = code.to_lowercase().contains("return");

    if passed {
        SubmissionResult {
            passed,
            score_after: previous_score.saturating_add(SCORE_INCREMENT),
            feedback: Vec::new(),
        }
    } else {
        let mut feedback = vec![MISSING_RETURN.to_string()];
        feedback.extend(
            question
                .validators
                .iter()
                .map(|hint| format!("Hint: {}", hint.text)),
        );
        SubmissionResult {
            passed,
            score_after: previous_score,
            feedback,
        }
    }
}
