//! Persistence collaborator port definition.

use crate::domain::AppError;
use crate::domain::page::Page;

/// Port for persisting finished pages. Nothing beyond "valid JSON blob
/// keyed by project id" is required of an implementation.
pub trait ProjectStore {
    /// Persist a finished page under an opaque project identifier.
    fn persist_page(&self, project_id: &str, page: &Page) -> Result<(), AppError>;
}
