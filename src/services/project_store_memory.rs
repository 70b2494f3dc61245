//! In-memory project store for tests and embedding.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::page::Page;
use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Keeps serialized pages in a map keyed by project id.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    pages: Mutex<HashMap<String, String>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored JSON blob for a project, if any.
    pub fn page_json(&self, project_id: &str) -> Option<String> {
        self.pages.lock().expect("store lock poisoned").get(project_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.pages.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn persist_page(&self, project_id: &str, page: &Page) -> Result<(), AppError> {
        let json = serde_json::to_string(page).map_err(|err| AppError::Parse {
            what: "page".to_string(),
            details: err.to_string(),
        })?;
        self.pages.lock().expect("store lock poisoned").insert(project_id.to_string(), json);
        Ok(())
    }
}
