use std::path::PathBuf;
use std::time::Duration;

/// Nombre que se muestra cuando no hay usuario guardado.
pub const DEFAULT_USERNAME: &str = "Learner";

/// Retardo cosmético entre "Run Checker" y el veredicto.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 600;

/// Ajustes de la sesión de práctica
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeConfig {
    /// Espera antes de mostrar el veredicto de un envío
    pub submit_delay: Duration,
    /// Nombre por defecto si el almacén no tiene ninguno
    pub placeholder_username: String,
    /// Catálogo YAML alternativo al embebido
    pub catalog_path: Option<PathBuf>,
    /// Etiqueta de origen del banco de preguntas
    pub source_label: String,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            placeholder_username: DEFAULT_USERNAME.to_string(),
            catalog_path: None,
            source_label: "Local".to_string(),
        }
    }
}

impl PracticeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Igual que `from_env`, pero leyendo las variables de `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();

        let submit_delay = match lookup("PRACTICE_SUBMIT_DELAY_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    log::warn!("PRACTICE_SUBMIT_DELAY_MS={raw:?} is not a number of milliseconds; using default");
                    default.submit_delay
                }
            },
            None => default.submit_delay,
        };

        let placeholder_username = lookup("PRACTICE_USERNAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(default.placeholder_username);

        let catalog_path = lookup("PRACTICE_CATALOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let source_label = if catalog_path.is_some() {
            "File".to_string()
        } else {
            default.source_label
        };

        Self {
            submit_delay,
            placeholder_username,
            catalog_path,
            source_label,
        }
    }
}
