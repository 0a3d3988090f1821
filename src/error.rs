use std::path::PathBuf;
use thiserror::Error;

/// Errores de configuración que impiden arrancar una sesión.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("the question bank is empty; there is nothing to practise")]
    EmptyQuestionBank,

    #[error("question id `{0}` appears more than once in the catalog")]
    DuplicateQuestionId(String),

    #[error("question `{id}` has difficulty {difficulty}; it must be at least 1")]
    InvalidDifficulty { id: String, difficulty: u8 },

    #[error("could not parse the question catalog: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    #[error("could not read the question catalog at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fallo al escribir en el almacén clave-valor. Nunca se propaga al usuario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("the store is read-only")]
    ReadOnly,

    #[error("storage backend failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, PracticeError>;
