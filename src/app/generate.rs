//! Generation pipeline orchestration.
//!
//! One invocation produces one document: usage check, signal extraction,
//! skeleton, fill, structural validation, optional section repair, quality
//! scoring, persistence. Structural and quality findings are data returned
//! to the caller; only usage refusal, prompt assembly, transport, and parse
//! failures abort the run.

use crate::domain::page::{Archetype, Page};
use crate::domain::quality::{QualityReport, score_quality};
use crate::domain::signals::{Signals, extract_signals};
use crate::domain::skeleton::build_skeleton;
use crate::domain::validation::{StructuralViolation, validate_structure};
use crate::domain::AppError;
use crate::ports::{OracleClient, ProjectStore, UsageGate};
use crate::services::ContentFiller;

/// Repair attempts per offending section before giving up on it.
pub const REPAIR_ATTEMPT_CEILING: u32 = 2;

const SEED_DESCRIPTION_CHARS: usize = 150;

/// Options for one generation request.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Free-text product description.
    pub prompt: String,
    /// Page template family.
    pub archetype: Archetype,
    /// Palette hint; the full prompt is used when absent.
    pub industry_hint: Option<String>,
    /// Persist the finished page under this project id.
    pub project_id: Option<String>,
    /// User identity for the usage gate.
    pub user: String,
    /// Repair sections with structural violations before returning.
    pub repair_sections: bool,
}

/// Everything one generation produces: the best-effort document plus the
/// advisory reports describing it.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub page: Page,
    pub signals: Signals,
    pub violations: Vec<StructuralViolation>,
    pub quality: QualityReport,
    /// Ids of sections whose repair brought them to conformance.
    pub repaired_sections: Vec<String>,
    /// Repair attempts that failed outright, formatted for reporting.
    pub repair_errors: Vec<String>,
}

/// Execute the generation pipeline.
pub fn execute<C, U, S>(
    options: &GenerateOptions,
    oracle: &C,
    usage: &U,
    store: &S,
) -> Result<GenerationOutcome, AppError>
where
    C: OracleClient + ?Sized,
    U: UsageGate,
    S: ProjectStore,
{
    let snapshot = usage.current_usage(&options.user)?;
    if snapshot.exhausted() {
        return Err(AppError::UsageLimitExceeded {
            used: snapshot.used,
            limit: snapshot.limit.ceiling().unwrap_or(0),
        });
    }

    let signals = extract_signals(&options.prompt);
    let skeleton = seeded_skeleton(options, &signals);

    let filler = ContentFiller::new(oracle);
    let mut page = filler.fill(&skeleton, &signals)?;
    let mut violations = validate_structure(&page);

    let mut repaired_sections = Vec::new();
    let mut repair_errors = Vec::new();
    if options.repair_sections && !violations.is_empty() {
        repair_offending_sections(
            &filler,
            &signals,
            &mut page,
            &mut violations,
            &mut repaired_sections,
            &mut repair_errors,
        );
    }

    let quality = score_quality(&page);

    usage.record_generation(&options.user)?;
    if let Some(project_id) = &options.project_id {
        store.persist_page(project_id, &page)?;
    }

    Ok(GenerationOutcome { page, signals, violations, quality, repaired_sections, repair_errors })
}

/// Build the skeleton and seed it with what the prompt already tells us, so
/// even a degraded fill returns a non-empty shell.
pub fn seeded_skeleton(options: &GenerateOptions, signals: &Signals) -> Page {
    let hint = options.industry_hint.as_deref().unwrap_or(&options.prompt);
    let mut skeleton = build_skeleton(options.archetype, Some(hint));

    skeleton.brand.name = signals.business.clone();
    skeleton.meta.title = format!("{} - Landing Page", signals.business);
    skeleton.meta.description = options.prompt.chars().take(SEED_DESCRIPTION_CHARS).collect();
    skeleton
}

fn repair_offending_sections<C: OracleClient + ?Sized>(
    filler: &ContentFiller<'_, C>,
    signals: &Signals,
    page: &mut Page,
    violations: &mut Vec<StructuralViolation>,
    repaired_sections: &mut Vec<String>,
    repair_errors: &mut Vec<String>,
) {
    let offending = offending_section_indexes(violations);

    for index in offending {
        for _ in 0..REPAIR_ATTEMPT_CEILING {
            let section = &page.layout.sections[index];
            match filler.repair_section(section, signals) {
                Ok(replacement) => {
                    page.layout.sections[index] = replacement;
                    *violations = validate_structure(page);
                    if violations.iter().all(|v| v.section_index != Some(index)) {
                        repaired_sections.push(page.layout.sections[index].id().to_string());
                        break;
                    }
                }
                Err(err) => {
                    repair_errors
                        .push(format!("{}: {}", page.layout.sections[index].id(), err));
                    break;
                }
            }
        }
    }
}

/// Ordered, deduplicated indexes of sections carrying violations.
fn offending_section_indexes(violations: &[StructuralViolation]) -> Vec<usize> {
    let mut indexes: Vec<usize> =
        violations.iter().filter_map(|violation| violation.section_index).collect();
    indexes.sort_unstable();
    indexes.dedup();
    indexes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::StructuralViolation;

    fn violation(index: Option<usize>) -> StructuralViolation {
        StructuralViolation {
            section_index: index,
            section: "features".to_string(),
            message: "incomplete".to_string(),
        }
    }

    #[test]
    fn offending_indexes_are_ordered_and_unique() {
        let violations = vec![
            violation(Some(4)),
            violation(Some(2)),
            violation(None),
            violation(Some(4)),
        ];
        assert_eq!(offending_section_indexes(&violations), vec![2, 4]);
    }

    #[test]
    fn seeded_skeleton_prefills_brand_and_meta() {
        let options = GenerateOptions {
            prompt: "Create a landing page for a fitness app".to_string(),
            archetype: Archetype::Saas,
            industry_hint: None,
            project_id: None,
            user: "local".to_string(),
            repair_sections: false,
        };
        let signals = extract_signals(&options.prompt);
        let skeleton = seeded_skeleton(&options, &signals);

        assert_eq!(skeleton.brand.name, "fitness app");
        assert_eq!(skeleton.meta.title, "fitness app - Landing Page");
        assert!(skeleton.meta.description.starts_with("Create a landing page"));
        // The whole prompt acts as the palette hint: "fitness" rule.
        assert_eq!(skeleton.brand.primary_color, "#EF4444");
    }

    #[test]
    fn explicit_industry_hint_overrides_prompt_for_palette() {
        let options = GenerateOptions {
            prompt: "Create a landing page for a fitness app".to_string(),
            archetype: Archetype::Saas,
            industry_hint: Some("crypto wallet".to_string()),
            project_id: None,
            user: "local".to_string(),
            repair_sections: false,
        };
        let signals = extract_signals(&options.prompt);
        let skeleton = seeded_skeleton(&options, &signals);
        assert_eq!(skeleton.brand.primary_color, "#10B981");
    }
}
