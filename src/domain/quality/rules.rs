//! Heuristic rule tables and per-section checks.
//!
//! Rules live in literal ordered tables so the set is unit-testable and
//! extensible without touching scoring orchestration.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::page::{
    FaqData, FeaturesData, HeroData, PageMeta, PricingData, SocialProofData,
};

use super::{QualityIssue, Severity};

/// Headline openers that bury the value proposition. Case-insensitive
/// prefix match.
const WEAK_HEADLINE_OPENERS: &[&str] = &["welcome to", "introducing", "we are", "check out"];

/// CTA copy fragments that convert poorly. Case-insensitive substring match.
const WEAK_CTA_VERBS: &[&str] = &["click here", "submit", "go", "enter", "continue"];

/// Objection topics an FAQ should cover.
const OBJECTION_TOPICS: &[&str] = &["pricing", "cancel", "refund", "support", "security", "data"];

/// Feature titles that describe capability instead of outcome.
static CAPABILITY_PHRASING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(includes|has|with|featuring)\b").expect("capability pattern must compile")
});

const MAX_META_TITLE_CHARS: usize = 60;
const MAX_META_DESCRIPTION_CHARS: usize = 160;
const MIN_META_DESCRIPTION_CHARS: usize = 120;
const MIN_HERO_HEADLINE_CHARS: usize = 20;
const MIN_HERO_SUBHEADLINE_CHARS: usize = 50;
const MIN_FEATURE_COUNT: usize = 3;
const MAX_FEATURE_COUNT: usize = 6;
const MAX_FEATURE_TITLE_CHARS: usize = 50;
const MIN_FEATURE_BODY_CHARS: usize = 30;
const MIN_PLAN_FEATURE_COUNT: usize = 3;
const MIN_FAQ_COUNT: usize = 4;
const MIN_FAQ_ANSWER_CHARS: usize = 50;
const MIN_LOGO_COUNT: usize = 3;
const MIN_TESTIMONIAL_QUOTE_CHARS: usize = 50;
const MIN_OBJECTIONS_COVERED: usize = 2;

pub(super) fn check_meta(
    meta: &PageMeta,
    issues: &mut Vec<QualityIssue>,
    suggestions: &mut Vec<String>,
) {
    if char_len(&meta.title) > MAX_META_TITLE_CHARS {
        issues.push(QualityIssue::new(
            Severity::Warning,
            "meta",
            "Title exceeds 60 characters (may be truncated in search results)",
        ));
    }

    if char_len(&meta.description) > MAX_META_DESCRIPTION_CHARS {
        issues.push(QualityIssue::new(
            Severity::Warning,
            "meta",
            "Description exceeds 160 characters (may be truncated in search results)",
        ));
    } else if char_len(&meta.description) < MIN_META_DESCRIPTION_CHARS {
        issues.push(QualityIssue::new(
            Severity::Suggestion,
            "meta",
            "Description under 120 characters",
        ));
        suggestions
            .push("Expand meta description to 120-160 characters for better SEO".to_string());
    }
}

pub(super) fn check_hero(
    data: &HeroData,
    issues: &mut Vec<QualityIssue>,
    suggestions: &mut Vec<String>,
) {
    let headline = data.headline.to_lowercase();
    if WEAK_HEADLINE_OPENERS.iter().any(|opener| headline.starts_with(opener)) {
        issues.push(QualityIssue::new(
            Severity::Warning,
            "hero",
            "Headline uses weak opening (avoid \"Welcome to\", \"Introducing\", etc.)",
        ));
        suggestions.push("Start headline with clear value proposition or outcome".to_string());
    }

    if char_len(&data.headline) < MIN_HERO_HEADLINE_CHARS {
        issues.push(QualityIssue::new(
            Severity::Suggestion,
            "hero",
            "Headline may be too short to communicate value",
        ));
    }

    if char_len(&data.subheadline) < MIN_HERO_SUBHEADLINE_CHARS {
        suggestions.push("Expand subheadline to better explain benefits".to_string());
    }

    let cta = data.primary_cta.label.to_lowercase();
    if WEAK_CTA_VERBS.iter().any(|verb| cta.contains(verb)) {
        issues.push(QualityIssue::new(
            Severity::Warning,
            "hero",
            format!("Weak CTA copy: \"{}\"", data.primary_cta.label),
        ));
        suggestions
            .push("Use action-oriented CTA like \"Start Free Trial\" or \"Get Started Free\"".to_string());
    }
}

pub(super) fn check_features(
    data: &FeaturesData,
    issues: &mut Vec<QualityIssue>,
    suggestions: &mut Vec<String>,
) {
    if data.items.len() < MIN_FEATURE_COUNT {
        issues.push(QualityIssue::new(
            Severity::Warning,
            "features",
            "Too few features (recommended: 3-6)",
        ));
    }

    if data.items.len() > MAX_FEATURE_COUNT {
        issues.push(QualityIssue::new(
            Severity::Suggestion,
            "features",
            "Too many features may overwhelm users",
        ));
        suggestions.push("Consider focusing on 3-6 key features".to_string());
    }

    for (index, item) in data.items.iter().enumerate() {
        if char_len(&item.title) > MAX_FEATURE_TITLE_CHARS {
            issues.push(QualityIssue::new(
                Severity::Suggestion,
                "features",
                format!("Feature {} title too long", index + 1),
            ));
        }

        if char_len(&item.body) < MIN_FEATURE_BODY_CHARS {
            issues.push(QualityIssue::new(
                Severity::Suggestion,
                "features",
                format!("Feature {} description too brief", index + 1),
            ));
        }

        if CAPABILITY_PHRASING.is_match(&item.title) {
            suggestions
                .push(format!("Feature {}: Focus on outcome rather than capability", index + 1));
        }
    }
}

pub(super) fn check_pricing(
    data: &PricingData,
    issues: &mut Vec<QualityIssue>,
    suggestions: &mut Vec<String>,
) {
    let has_highlight = data.plans.iter().any(|plan| plan.highlight);
    if !has_highlight && data.plans.len() > 1 {
        issues.push(QualityIssue::new(
            Severity::Warning,
            "pricing",
            "No plan highlighted (recommended to highlight most popular option)",
        ));
    }

    for (index, plan) in data.plans.iter().enumerate() {
        if plan.features.len() < MIN_PLAN_FEATURE_COUNT {
            issues.push(QualityIssue::new(
                Severity::Warning,
                "pricing",
                format!("Plan {} has too few features listed", index + 1),
            ));
        }

        if plan.price.to_lowercase().contains("contact") && !plan.highlight {
            suggestions.push(format!("Plan {}: \"Contact us\" pricing reduces conversion", index + 1));
        }
    }
}

pub(super) fn check_faq(
    data: &FaqData,
    issues: &mut Vec<QualityIssue>,
    suggestions: &mut Vec<String>,
) {
    if data.items.len() < MIN_FAQ_COUNT {
        issues.push(QualityIssue::new(
            Severity::Suggestion,
            "faq",
            "Consider adding more FAQ items (recommended: 4-8)",
        ));
    }

    for (index, item) in data.items.iter().enumerate() {
        if char_len(&item.answer) < MIN_FAQ_ANSWER_CHARS {
            issues.push(QualityIssue::new(
                Severity::Suggestion,
                "faq",
                format!("FAQ {} answer too brief", index + 1),
            ));
        }

        if !item.question.ends_with('?') {
            issues.push(QualityIssue::new(
                Severity::Suggestion,
                "faq",
                format!("FAQ {} question should end with \"?\"", index + 1),
            ));
        }
    }

    let covered = data
        .items
        .iter()
        .filter(|item| {
            let question = item.question.to_lowercase();
            OBJECTION_TOPICS.iter().any(|topic| question.contains(topic))
        })
        .count();
    if covered < MIN_OBJECTIONS_COVERED {
        suggestions
            .push("Address common objections: pricing, cancellation, support, security".to_string());
    }
}

pub(super) fn check_social_proof(
    data: &SocialProofData,
    issues: &mut Vec<QualityIssue>,
    suggestions: &mut Vec<String>,
) {
    if data.logos.is_empty() && data.testimonial.is_none() {
        issues.push(QualityIssue::new(
            Severity::Critical,
            "social-proof",
            "No social proof provided (logos or testimonials)",
        ));
    }

    if !data.logos.is_empty() && data.logos.len() < MIN_LOGO_COUNT {
        issues.push(QualityIssue::new(
            Severity::Suggestion,
            "social-proof",
            "Too few logos (recommended: 5-8)",
        ));
    }

    if let Some(testimonial) = &data.testimonial {
        if char_len(&testimonial.quote) < MIN_TESTIMONIAL_QUOTE_CHARS {
            issues.push(QualityIssue::new(
                Severity::Suggestion,
                "social-proof",
                "Testimonial quote too short",
            ));
        }

        if testimonial.role.is_none() {
            suggestions.push("Include role/company for testimonial credibility".to_string());
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
