//! Puente entre la sesión y el widget de edición.

use crate::code_utils::format_code;
use crate::model::Language;
use std::collections::HashMap;

pub type FormattingProvider = Box<dyn Fn(&str) -> String>;

/// Proveedores de formateo registrados por lenguaje.
#[derive(Default)]
pub struct FormattingProviders {
    providers: HashMap<Language, FormattingProvider>,
}

impl FormattingProviders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra el reformateador de sangría para cada lenguaje formateable.
    pub fn with_defaults() -> Self {
        let mut providers = Self::new();
        for lang in Language::FORMATTABLE {
            providers.register(lang, Box::new(move |text| format_code(text, lang)));
        }
        providers
    }

    pub fn register(&mut self, language: Language, provider: FormattingProvider) {
        self.providers.insert(language, provider);
    }

    pub fn is_registered(&self, language: Language) -> bool {
        self.providers.contains_key(&language)
    }

    /// Formatea con el proveedor del lenguaje; `None` si no hay ninguno.
    pub fn format_document(&self, language: Language, text: &str) -> Option<String> {
        self.providers.get(&language).map(|provider| provider(text))
    }

    /// Proveedor registrado o, en su defecto, el formateador directo.
    pub fn format_or_fallback(&self, language: Language, text: &str) -> String {
        self.format_document(language, text)
            .unwrap_or_else(|| format_code(text, language))
    }
}

impl std::fmt::Debug for FormattingProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut languages: Vec<_> = self.providers.keys().collect();
        languages.sort();
        f.debug_struct("FormattingProviders")
            .field("languages", &languages)
            .finish()
    }
}

/// Lo que recibe el widget: el texto y la etiqueta de lenguaje.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorBinding<'a> {
    pub value: &'a str,
    pub language: Language,
}
