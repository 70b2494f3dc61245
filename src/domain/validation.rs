//! Structural conformance checks over a filled page.
//!
//! Violations are advisory data, not errors: the caller decides whether to
//! trigger section repair or accept the document with a degraded report.

use std::fmt;

use serde::Serialize;

use crate::domain::page::{Page, Section};

const MIN_META_TITLE_CHARS: usize = 10;
const MIN_META_DESCRIPTION_CHARS: usize = 50;

/// A required-field or cardinality failure, located by section index when it
/// concerns one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralViolation {
    pub section_index: Option<usize>,
    pub section: String,
    pub message: String,
}

impl StructuralViolation {
    fn page(section: &str, message: impl Into<String>) -> Self {
        Self { section_index: None, section: section.to_string(), message: message.into() }
    }

    fn section(index: usize, section: &Section, message: impl Into<String>) -> Self {
        Self {
            section_index: Some(index),
            section: section.kind().to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StructuralViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.section_index {
            Some(index) => write!(f, "section {} ({}): {}", index, self.section, self.message),
            None => write!(f, "{}: {}", self.section, self.message),
        }
    }
}

/// Walk the document and report every structural violation, in document
/// order. An empty list means the page is conformant. Never mutates.
pub fn validate_structure(page: &Page) -> Vec<StructuralViolation> {
    let mut violations = Vec::new();

    if char_len(&page.meta.title) < MIN_META_TITLE_CHARS {
        violations.push(StructuralViolation::page(
            "meta",
            format!("title shorter than {} characters", MIN_META_TITLE_CHARS),
        ));
    }
    if char_len(&page.meta.description) < MIN_META_DESCRIPTION_CHARS {
        violations.push(StructuralViolation::page(
            "meta",
            format!("description shorter than {} characters", MIN_META_DESCRIPTION_CHARS),
        ));
    }
    if page.brand.name.is_empty() {
        violations.push(StructuralViolation::page("brand", "name missing"));
    }

    for (index, section) in page.layout.sections.iter().enumerate() {
        validate_section(index, section, &mut violations);
    }

    violations
}

fn validate_section(index: usize, section: &Section, violations: &mut Vec<StructuralViolation>) {
    let mut report = |message: String| {
        violations.push(StructuralViolation::section(index, section, message));
    };

    match section {
        Section::Hero(hero) => {
            let data = &hero.data;
            if data.headline.is_empty() {
                report("headline missing".to_string());
            } else if char_len(&data.headline) > hero.constraints.max_headline_chars {
                report(format!(
                    "headline exceeds {} characters",
                    hero.constraints.max_headline_chars
                ));
            }
            if data.subheadline.is_empty() {
                report("subheadline missing".to_string());
            } else if char_len(&data.subheadline) > hero.constraints.max_subheadline_chars {
                report(format!(
                    "subheadline exceeds {} characters",
                    hero.constraints.max_subheadline_chars
                ));
            }
            if hero.constraints.require_cta && data.primary_cta.label.is_empty() {
                report("primary CTA label missing".to_string());
            }
        }
        Section::SocialProof(_) => {
            // Optional section; no required fields.
        }
        Section::Features(features) => {
            let data = &features.data;
            if data.section_title.is_empty() {
                report("section title missing".to_string());
            }
            if data.items.is_empty() {
                report("no feature items".to_string());
            }
            for (item_index, item) in data.items.iter().enumerate() {
                if item.title.is_empty() || item.body.is_empty() || item.icon.is_empty() {
                    report(format!("feature item {} incomplete", item_index));
                }
            }
        }
        Section::Pricing(pricing) => {
            let data = &pricing.data;
            if data.headline.is_empty() {
                report("headline missing".to_string());
            }
            if data.plans.is_empty() {
                report("no pricing plans".to_string());
            }
            for (plan_index, plan) in data.plans.iter().enumerate() {
                if plan.name.is_empty() || plan.price.is_empty() || plan.features.is_empty() {
                    report(format!("plan {} incomplete", plan_index));
                }
            }
        }
        Section::Faq(faq) => {
            let data = &faq.data;
            if data.headline.is_empty() {
                report("headline missing".to_string());
            }
            if data.items.is_empty() {
                report("no FAQ items".to_string());
            }
            for (item_index, item) in data.items.iter().enumerate() {
                if item.question.is_empty() || item.answer.is_empty() {
                    report(format!("FAQ item {} incomplete", item_index));
                }
            }
        }
        Section::Cta(cta) => {
            if cta.data.headline.is_empty() {
                report("headline missing".to_string());
            }
            if cta.data.cta.label.is_empty() {
                report("CTA label missing".to_string());
            }
        }
        Section::Footer(footer) => {
            if footer.data.copyright.is_empty() {
                report("copyright missing".to_string());
            }
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Validates an identifier string (project ids, stored document names).
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', or '_'
pub fn validate_identifier(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
