use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Etiqueta de sintaxis que el editor y el formateador entienden.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    JavaScript,
    Python,
    Html,
    Css,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Go,
        Language::JavaScript,
        Language::Python,
        Language::Html,
        Language::Css,
        Language::Java,
        Language::Cpp,
    ];

    /// Lenguajes que el reformateador de sangría sabe tratar.
    pub const FORMATTABLE: [Language; 6] = [
        Language::Go,
        Language::JavaScript,
        Language::Java,
        Language::Cpp,
        Language::Css,
        Language::Html,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    pub fn is_formattable(self) -> bool {
        Self::FORMATTABLE.contains(&self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.tag() == wanted)
            .ok_or(UnknownLanguage(s.to_string()))
    }
}

/// Selección del desplegable de lenguaje: detección automática o fija.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageChoice {
    Auto,
    Fixed(Language),
}

impl LanguageChoice {
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageChoice::Auto => "Auto-detect",
            LanguageChoice::Fixed(lang) => lang.display_name(),
        }
    }

    /// Opciones en el orden en que se muestran en el selector.
    pub fn options() -> [LanguageChoice; 8] {
        [
            LanguageChoice::Auto,
            LanguageChoice::Fixed(Language::Go),
            LanguageChoice::Fixed(Language::JavaScript),
            LanguageChoice::Fixed(Language::Python),
            LanguageChoice::Fixed(Language::Html),
            LanguageChoice::Fixed(Language::Css),
            LanguageChoice::Fixed(Language::Java),
            LanguageChoice::Fixed(Language::Cpp),
        ]
    }
}

impl FromStr for LanguageChoice {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(LanguageChoice::Auto)
        } else {
            s.parse().map(LanguageChoice::Fixed)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    #[serde(rename = "hint")]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: u8,
    pub template: String,
    // Pistas para el alumno; el juez no las evalúa
    #[serde(default)]
    pub validators: Vec<Hint>,
}

/// Veredicto de un envío. Se muestra una vez y se descarta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub passed: bool,
    pub score_after: u32,
    pub feedback: Vec<String>,
}

impl SubmissionResult {
    pub fn summary(&self) -> String {
        if self.passed {
            format!("✅ Passed! Score: {}", self.score_after)
        } else {
            let issues = self
                .feedback
                .iter()
                .map(|line| format!("- {line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("❌ Not Passed! Score: {}\nIssues:\n{issues}", self.score_after)
        }
    }
}
