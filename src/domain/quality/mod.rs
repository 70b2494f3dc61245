//! Heuristic marketing-copy scoring.
//!
//! Orthogonal to structural validation: the scorer critiques copy
//! effectiveness, not field presence. It is read-only and deterministic;
//! scoring the same page twice yields the identical report, issue order
//! included.

mod rules;

use serde::{Deserialize, Serialize};

use crate::domain::page::{Page, Section};

/// Issue severity, in decreasing penalty order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

impl Severity {
    /// Points subtracted from the starting score of 100.
    pub fn penalty(&self) -> u8 {
        match self {
            Severity::Critical => 20,
            Severity::Warning => 10,
            Severity::Suggestion => 5,
        }
    }
}

/// Ordinal score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Grade::Excellent,
            75.. => Grade::Good,
            60.. => Grade::Fair,
            _ => Grade::Poor,
        }
    }
}

/// One severity-tagged critique, located by section tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub severity: Severity,
    pub section: String,
    pub message: String,
}

impl QualityIssue {
    pub(crate) fn new(severity: Severity, section: &str, message: impl Into<String>) -> Self {
        Self { severity, section: section.to_string(), message: message.into() }
    }
}

/// Derived, advisory view over a completed page. Recomputed on every call;
/// never authoritative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: u8,
    pub grade: Grade,
    pub issues: Vec<QualityIssue>,
    pub suggestions: Vec<String>,
}

/// Score a filled page.
///
/// The page is assumed structurally present but not necessarily conformant;
/// empty fields simply trip the relevant heuristics.
pub fn score_quality(page: &Page) -> QualityReport {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    rules::check_meta(&page.meta, &mut issues, &mut suggestions);

    for section in &page.layout.sections {
        match section {
            Section::Hero(hero) => rules::check_hero(&hero.data, &mut issues, &mut suggestions),
            Section::SocialProof(proof) => {
                rules::check_social_proof(&proof.data, &mut issues, &mut suggestions)
            }
            Section::Features(features) => {
                rules::check_features(&features.data, &mut issues, &mut suggestions)
            }
            Section::Pricing(pricing) => {
                rules::check_pricing(&pricing.data, &mut issues, &mut suggestions)
            }
            Section::Faq(faq) => rules::check_faq(&faq.data, &mut issues, &mut suggestions),
            Section::Cta(_) | Section::Footer(_) => {}
        }
    }

    let score = score_for_issues(&issues);
    QualityReport { score, grade: Grade::from_score(score), issues, suggestions }
}

/// Compute the 0-100 score for an issue list: 100 minus the per-severity
/// penalties, clamped at 0.
pub fn score_for_issues(issues: &[QualityIssue]) -> u8 {
    let penalty: u32 = issues.iter().map(|issue| u32::from(issue.severity.penalty())).sum();
    100u32.saturating_sub(penalty).min(100) as u8
}
