use crate::model::Language;
use regex::Regex;
use std::sync::LazyLock;

/// Unidad de sangría que emite el formateador.
pub const INDENT_UNIT: &str = "\t";

// Etiqueta de apertura "a lo bruto": <nombre ...>
static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z0-9]+[^>]*>").expect("invalid open-tag regex"));
static CLOSE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</[a-zA-Z0-9]+>").expect("invalid close-tag regex"));

/// Reajusta la sangría de `code` según el balance de llaves, paréntesis,
/// corchetes y etiquetas. No reordena tokens ni toca nada dentro de la línea
/// salvo el espacio inicial y final.
///
/// Si `language` no es formateable el texto se devuelve tal cual.
pub fn format_code(code: &str, language: Language) -> String {
    if !language.is_formattable() {
        return code.to_string();
    }

    let mut indent_level: usize = 0;
    code.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }

            // Los cierres se desplazan un nivel respecto a su apertura
            let current = if starts_with_closer(trimmed) {
                indent_level.saturating_sub(1)
            } else {
                indent_level
            };
            let formatted = format!("{}{trimmed}", INDENT_UNIT.repeat(current));

            let next = indent_level as i64 + net_indent_change(trimmed);
            indent_level = next.max(0) as usize;

            formatted
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_closer(trimmed: &str) -> bool {
    trimmed.starts_with('}')
        || trimmed.starts_with(')')
        || trimmed.starts_with(']')
        || trimmed.starts_with("</")
}

/// Aperturas menos cierres de una línea: los tres tipos de paréntesis más
/// el recuento aproximado de etiquetas HTML.
pub fn net_indent_change(trimmed: &str) -> i64 {
    bracket_balance(trimmed) + tag_balance(trimmed)
}

pub fn bracket_balance(line: &str) -> i64 {
    line.chars()
        .map(|c| match c {
            '{' | '(' | '[' => 1,
            '}' | ')' | ']' => -1,
            _ => 0,
        })
        .sum()
}

pub fn tag_balance(line: &str) -> i64 {
    let opens = OPEN_TAG
        .find_iter(line)
        .filter(|m| !m.as_str().contains("/>") && !m.as_str().starts_with("</"))
        .count();
    let closes = CLOSE_TAG.find_iter(line).count();
    opens as i64 - closes as i64
}
