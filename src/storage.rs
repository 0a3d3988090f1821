//! Almacén clave-valor donde se guardan la puntuación y el nombre.

use crate::error::StoreError;
use std::collections::HashMap;

pub const SCORE_KEY: &str = "score";
pub const USERNAME_KEY: &str = "username";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Almacén en memoria; útil en pruebas y como búfer de escrituras.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Adaptador sobre el almacenamiento persistente de eframe.
pub struct EframeStore<'a>(pub &'a mut dyn eframe::Storage);

impl KeyValueStore for EframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.set_string(key, value.to_string());
        Ok(())
    }
}

/// Vista de solo lectura: la que ofrece eframe al crear la aplicación.
pub struct ReadOnlyEframeStore<'a>(pub &'a dyn eframe::Storage);

impl KeyValueStore for ReadOnlyEframeStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::ReadOnly)
    }
}

/// Escritura pendiente de aplicar en el almacén.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistWrite {
    pub key: &'static str,
    pub value: String,
}

/// Aplica las escrituras sin reintentos. Los fallos se registran y se
/// descartan: el estado en memoria sigue siendo el bueno.
pub fn write_all(store: &mut dyn KeyValueStore, writes: impl IntoIterator<Item = PersistWrite>) {
    for write in writes {
        if let Err(err) = store.set(write.key, &write.value) {
            log::warn!("dropping write of `{}`: {err}", write.key);
        }
    }
}

/// Lee la puntuación guardada; 0 si falta o no es un número.
pub fn load_score(store: &dyn KeyValueStore) -> u32 {
    match store.get(SCORE_KEY) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("stored score {raw:?} is not a number; starting from 0");
            0
        }),
        None => 0,
    }
}

/// Lee el nombre guardado; `placeholder` si falta o está vacío.
pub fn load_username(store: &dyn KeyValueStore, placeholder: &str) -> String {
    store
        .get(USERNAME_KEY)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}
