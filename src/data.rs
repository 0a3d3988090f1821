// src/data.rs

use crate::error::{PracticeError, Result};
use crate::model::Question;
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("data/questions.yaml");

/// Catálogo estático de ejercicios. Nunca está vacío.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    catalog: Vec<Question>,
}

impl QuestionBank {
    /// Valida el catálogo: no vacío, ids únicos y dificultad positiva.
    pub fn new(catalog: Vec<Question>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(PracticeError::EmptyQuestionBank);
        }

        let mut seen = HashSet::new();
        for q in &catalog {
            if !seen.insert(q.id.as_str()) {
                return Err(PracticeError::DuplicateQuestionId(q.id.clone()));
            }
            if q.difficulty == 0 {
                return Err(PracticeError::InvalidDifficulty {
                    id: q.id.clone(),
                    difficulty: q.difficulty,
                });
            }
        }

        Ok(Self { catalog })
    }

    /// Carga el banco de preguntas desde el YAML embebido
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_CATALOG)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let catalog: Vec<Question> = serde_yaml::from_str(text)?;
        Self::new(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| PracticeError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// El índice se toma módulo la longitud, así la navegación da la vuelta.
    pub fn get(&self, index: usize) -> &Question {
        wrapping_get(&self.catalog, index)
    }

    /// Copia nueva del catálogo, sin ningún cambio hecho en tiempo de ejecución.
    pub fn reset(&self) -> Vec<Question> {
        self.catalog.clone()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    // Siempre falso: el constructor rechaza catálogos vacíos
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.catalog
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.catalog.iter().position(|q| q.id == id)
    }
}

/// Acceso circular a una lista de preguntas no vacía.
pub(crate) fn wrapping_get(questions: &[Question], index: usize) -> &Question {
    &questions[index % questions.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Hint;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            difficulty: 1,
            template: format!("func {id}() {{\n}}"),
            validators: vec![Hint {
                text: "Return something.".into(),
            }],
        }
    }

    #[test]
    fn embedded_catalog_loads_all_exercises() {
        let bank = QuestionBank::embedded().expect("embedded catalog is valid");
        assert_eq!(bank.len(), 11);
        assert_eq!(bank.get(0).id, "checknumber");
        assert_eq!(bank.get(10).id, "iscapitalized");
        assert!(bank.questions().iter().all(|q| !q.validators.is_empty()));
        assert!(bank.get(0).template.starts_with("package piscine"));
    }

    #[test]
    fn get_wraps_around() {
        let bank = QuestionBank::new(vec![question("a"), question("b"), question("c")]).unwrap();
        assert_eq!(bank.get(3).id, "a");
        assert_eq!(bank.get(5).id, "c");
        assert_eq!(bank.position_of("b"), Some(1));
        assert_eq!(bank.position_of("z"), None);
    }

    #[test]
    fn reset_returns_an_independent_copy() {
        let bank = QuestionBank::new(vec![question("a")]).unwrap();
        let mut copy = bank.reset();
        copy[0].title = "changed".into();
        assert_eq!(bank.reset()[0].title, "A");
    }

    #[test]
    fn empty_catalog_is_a_configuration_error() {
        let err = QuestionBank::new(Vec::new()).unwrap_err();
        assert!(matches!(err, PracticeError::EmptyQuestionBank));
        assert!(matches!(
            QuestionBank::from_yaml("[]"),
            Err(PracticeError::EmptyQuestionBank)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionBank::new(vec![question("a"), question("a")]).unwrap_err();
        assert!(matches!(err, PracticeError::DuplicateQuestionId(id) if id == "a"));
    }

    #[test]
    fn zero_difficulty_is_rejected() {
        let mut q = question("a");
        q.difficulty = 0;
        assert!(matches!(
            QuestionBank::new(vec![q]),
            Err(PracticeError::InvalidDifficulty { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            QuestionBank::from_yaml("- id: [unclosed"),
            Err(PracticeError::CatalogParse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = QuestionBank::from_path(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, PracticeError::CatalogRead { .. }));
    }
}
