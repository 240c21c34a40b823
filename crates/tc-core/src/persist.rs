//! Persisted canvas state.
//!
//! The whole document is written as one JSON value under a single key:
//! `{"textArray": [TextItem, ...]}`. Reading is forgiving: an absent key,
//! unparsable JSON, or a missing `textArray` all yield an empty document.

use crate::error::{PersistError, StoreError};
use crate::model::TextItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// String-keyed durable storage (browser `localStorage`, a file, memory).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The serialized document shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasState {
    #[serde(default)]
    pub text_array: Vec<TextItem>,
}

impl CanvasState {
    pub fn to_json(items: &[TextItem]) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Borrowed<'a> {
            text_array: &'a [TextItem],
        }
        serde_json::to_string(&Borrowed { text_array: items })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Write `items` to `store` under `key`.
pub fn save(
    store: &mut dyn KeyValueStore,
    key: &str,
    items: &[TextItem],
) -> Result<(), PersistError> {
    let json = CanvasState::to_json(items)?;
    store.set(key, &json)?;
    log::info!("Canvas state saved ({} items).", items.len());
    Ok(())
}

/// Read the document stored under `key`. Never fails: anything that cannot
/// be read or decoded is logged and treated as an empty document.
pub fn load(store: &dyn KeyValueStore, key: &str) -> Vec<TextItem> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("no saved canvas state under `{key}`");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("{e}");
            return Vec::new();
        }
    };
    match CanvasState::from_json(&raw) {
        Ok(state) => {
            log::info!("Canvas state loaded ({} items).", state.text_array.len());
            state.text_array
        }
        Err(e) => {
            log::warn!("discarding malformed canvas state under `{key}`: {e}");
            Vec::new()
        }
    }
}

// ─── In-memory store ─────────────────────────────────────────────────────

/// A `HashMap`-backed store for native hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
