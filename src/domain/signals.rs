//! Rule-based extraction of generation signals from the raw prompt.
//!
//! Extraction never fails; every field degrades to a documented default when
//! no pattern matches. The pattern lists are ordered: the first match wins
//! and later tiers are not consulted.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUDIENCE: &str = "general users";
pub const DEFAULT_GOAL: &str = "attract and convert users";
pub const DEFAULT_TONE: &str = "confident-clear";

/// Request-scoped signals passed to the content filler and section repair.
/// Derived once per generation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub business: String,
    pub audience: String,
    pub goal: String,
    pub tone: String,
}

/// Business-name tiers in priority order: quoted literal, "for/about a X",
/// "create/build/make a X". Falling through all tiers uses the prompt's
/// first three whitespace tokens.
static BUSINESS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r#""([^"]+)"|“([^”]+)”"#,
        r"(?i)(?:for|about)\s+an?\s+([^,.]+)",
        r"(?i)^(?:create|build|make)\s+an?\s+([^,.]+)",
    ])
});

static AUDIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)(?:for|targeting)\s+([^,.]*(?:users|customers|developers|designers|teams|businesses)[^,.]*)",
    ])
});

static GOAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)(?:to|that)\s+((?:help|enable|allow)[^,.]+)",
        r"(?i)(?:goal|aim|purpose)(?:\s+is)?\s+to\s+([^,.]+)",
    ])
});

/// Tone keyword rules, consulted in declaration order.
const TONE_RULES: &[(&str, &[&str])] = &[
    ("professional", &["professional", "enterprise", "business", "corporate"]),
    ("friendly", &["friendly", "approachable", "casual", "fun"]),
    ("serious", &["serious", "formal", "authoritative", "expert"]),
];

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("signal pattern must compile"))
        .collect()
}

/// Derive [`Signals`] from a raw prompt.
pub fn extract_signals(prompt: &str) -> Signals {
    Signals {
        business: extract_business(prompt),
        audience: first_capture(&AUDIENCE_PATTERNS, prompt)
            .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
        goal: first_capture(&GOAL_PATTERNS, prompt).unwrap_or_else(|| DEFAULT_GOAL.to_string()),
        tone: extract_tone(prompt),
    }
}

fn extract_business(prompt: &str) -> String {
    if let Some(matched) = first_capture(&BUSINESS_PATTERNS, prompt) {
        return matched;
    }
    prompt.split_whitespace().take(3).collect::<Vec<_>>().join(" ")
}

fn extract_tone(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    for (tone, keywords) in TONE_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return (*tone).to_string();
        }
    }
    DEFAULT_TONE.to_string()
}

/// Run the ordered pattern list; return the first non-empty capture group of
/// the first matching pattern.
fn first_capture(patterns: &[Regex], input: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(input) {
            let matched = captures
                .iter()
                .skip(1)
                .flatten()
                .map(|group| group.as_str().trim())
                .find(|text| !text.is_empty());
            if let Some(text) = matched {
                return Some(text.to_string());
            }
        }
    }
    None
}
