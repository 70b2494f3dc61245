//! pageforge: Turn a free-text product description into a fully-populated,
//! schema-conformant landing-page document, then score it for copy quality.
//!
//! The pipeline never trusts the oracle: it builds a closed skeleton, asks
//! the oracle to fill only the writable fields, grafts the response onto the
//! skeleton's envelope, and reports structural violations and quality issues
//! as data alongside the best-effort document.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{GenerateOptions, GenerationOutcome};
pub use domain::{
    AppError, Archetype, ColorPalette, Grade, Page, QualityIssue, QualityReport, Section,
    SectionKind, Severity, Signals, StructuralViolation, Theme, Tone,
};
pub use services::ContentFiller;

use domain::GenerationConfig;
use services::{FilesystemProjectStore, HttpOracleClient, RetryPolicy, RetryingOracleClient};

/// Directory where `generate --project <id>` persists finished pages.
pub const DEFAULT_PROJECTS_DIR: &str = "projects";

/// Build the empty, fully-shaped page for an archetype.
///
/// Deterministic: same arguments, same skeleton, always.
pub fn build_skeleton(archetype: Archetype, industry_hint: Option<&str>) -> Page {
    domain::skeleton::build_skeleton(archetype, industry_hint)
}

/// Derive generation signals from a raw prompt. Never fails; fields degrade
/// to documented defaults.
pub fn extract_signals(prompt: &str) -> Signals {
    domain::signals::extract_signals(prompt)
}

/// Select the deterministic color palette for an industry hint.
pub fn select_color_palette(industry_hint: Option<&str>) -> ColorPalette {
    domain::palette::select_color_palette(industry_hint)
}

/// Check a filled page against the structural rules. Returns violations in
/// document order; empty means conformant.
pub fn validate_structure(page: &Page) -> Vec<StructuralViolation> {
    domain::validation::validate_structure(page)
}

/// Score a filled page's copy quality.
pub fn score_quality(page: &Page) -> QualityReport {
    domain::quality::score_quality(page)
}

/// Run the full generation pipeline with the default adapters: HTTP oracle
/// (API key from the environment, retrying transport), no usage ceiling,
/// and filesystem persistence under [`DEFAULT_PROJECTS_DIR`].
pub fn generate(options: &GenerateOptions) -> Result<GenerationOutcome, AppError> {
    let config = GenerationConfig::load_default()?;

    let transport = HttpOracleClient::from_env_with_config(&config.oracle)?;
    let oracle = RetryingOracleClient::new(
        Box::new(transport),
        RetryPolicy::from_config(&config.oracle),
    );
    let usage = ports::StaticUsageGate::unlimited("local");
    let store = FilesystemProjectStore::new(DEFAULT_PROJECTS_DIR);

    app::generate::execute(options, &oracle, &usage, &store)
}
