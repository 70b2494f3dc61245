//! Filesystem-backed project persistence.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;

use crate::domain::page::Page;
use crate::domain::validation::validate_identifier;
use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Stores finished pages as `<root>/<project-id>.json` blobs with a small
/// envelope recording when they were saved.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredProject<'a> {
    project_id: &'a str,
    saved_at: String,
    page: &'a Page,
}

impl FilesystemProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn project_path(&self, project_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", project_id))
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn persist_page(&self, project_id: &str, page: &Page) -> Result<(), AppError> {
        if !validate_identifier(project_id) {
            return Err(AppError::InvalidProjectId(project_id.to_string()));
        }

        let envelope = StoredProject {
            project_id,
            saved_at: Utc::now().to_rfc3339(),
            page,
        };
        let json = serde_json::to_string_pretty(&envelope).map_err(|err| AppError::Parse {
            what: "page".to_string(),
            details: err.to_string(),
        })?;

        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.project_path(project_id), json + "\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::Archetype;
    use crate::domain::skeleton::build_skeleton;

    #[test]
    fn persists_page_under_project_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemProjectStore::new(dir.path());
        let page = build_skeleton(Archetype::Saas, Some("fitness app"));

        store.persist_page("launch-page", &page).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("launch-page.json")).unwrap();
        assert!(raw.contains("\"projectId\": \"launch-page\""));
        assert!(raw.contains("\"savedAt\""));
        assert!(raw.contains("\"archetype\": \"saas\""));
    }

    #[test]
    fn rejects_path_traversal_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemProjectStore::new(dir.path());
        let page = build_skeleton(Archetype::Saas, None);

        for id in ["../escape", "a/b", "", ".."] {
            let err = store.persist_page(id, &page).unwrap_err();
            assert!(matches!(err, AppError::InvalidProjectId(_)), "id '{}' should be rejected", id);
        }
    }

    #[test]
    fn overwrites_existing_project() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemProjectStore::new(dir.path());

        let first = build_skeleton(Archetype::Saas, None);
        store.persist_page("p1", &first).unwrap();
        let second = build_skeleton(Archetype::Creator, None);
        store.persist_page("p1", &second).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("p1.json")).unwrap();
        assert!(raw.contains("\"archetype\": \"creator\""));
    }
}
