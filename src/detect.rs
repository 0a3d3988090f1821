//! Detección heurística del lenguaje de un búfer de código.
//!
//! Las reglas se evalúan en orden y gana la primera que coincide. El orden
//! importa porque los patrones se solapan: una plantilla Go con `fmt.Print`
//! también contiene paréntesis y llaves de estilo C.

use crate::model::Language;

/// Lenguaje que se devuelve si ninguna regla coincide.
pub const FALLBACK_LANGUAGE: Language = Language::Go;

/// Prueba textual sobre el búfer ya recortado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// `<` seguido de una letra ASCII o `!` al principio del texto.
    OpensWithTag,
    Contains(&'static str),
}

impl Probe {
    fn matches(self, trimmed: &str) -> bool {
        match self {
            Probe::OpensWithTag => {
                let mut chars = trimmed.chars();
                chars.next() == Some('<')
                    && chars
                        .next()
                        .is_some_and(|c| c.is_ascii_alphabetic() || c == '!')
            }
            Probe::Contains(needle) => trimmed.contains(needle),
        }
    }
}

#[derive(Debug)]
pub struct DetectionRule {
    pub language: Language,
    pub probes: &'static [Probe],
}

impl DetectionRule {
    pub fn matches(&self, trimmed: &str) -> bool {
        self.probes.iter().any(|p| p.matches(trimmed))
    }
}

use Probe::{Contains, OpensWithTag};

pub static RULES: &[DetectionRule] = &[
    DetectionRule {
        language: Language::Html,
        probes: &[
            OpensWithTag,
            Contains("</div>"),
            Contains("</body>"),
            Contains("</p>"),
            Contains("</span>"),
        ],
    },
    DetectionRule {
        language: Language::Go,
        probes: &[
            Contains("package main"),
            Contains("func main"),
            Contains("fmt.Print"),
        ],
    },
    DetectionRule {
        language: Language::Python,
        probes: &[
            Contains("def "),
            Contains("import "),
            Contains("print("),
            Contains("class "),
        ],
    },
    DetectionRule {
        language: Language::JavaScript,
        probes: &[
            Contains("import React"),
            Contains("console.log"),
            Contains("const "),
            Contains("let "),
            Contains("function "),
            Contains("=>"),
        ],
    },
    DetectionRule {
        language: Language::Cpp,
        probes: &[Contains("#include <"), Contains("int main("), Contains("std::")],
    },
    DetectionRule {
        language: Language::Java,
        probes: &[
            Contains("public class"),
            Contains("System.out.println"),
            Contains("public static void main"),
        ],
    },
    DetectionRule {
        language: Language::Css,
        probes: &[
            Contains("body {"),
            Contains("div {"),
            Contains("margin:"),
            Contains("color:"),
        ],
    },
];

/// Primera regla que coincide con `text`, si la hay.
pub fn matching_rule(text: &str) -> Option<&'static DetectionRule> {
    let trimmed = text.trim();
    RULES.iter().find(|rule| rule.matches(trimmed))
}

/// Siempre devuelve exactamente una etiqueta; nunca falla.
pub fn detect_language(text: &str) -> Language {
    let detected = matching_rule(text)
        .map(|rule| rule.language)
        .unwrap_or(FALLBACK_LANGUAGE);
    log::trace!("detected {detected} for {} bytes of code", text.len());
    detected
}
