//! Schema-constrained content filling and section repair.
//!
//! A pure transform from (skeleton, signals) to a candidate filled page.
//! The oracle's output is parsed, then grafted atomically onto a clone of
//! the skeleton; a failed parse leaves the caller's document untouched and
//! nothing here repairs structure.

use crate::domain::AppError;
use crate::domain::page::{Page, Section};
use crate::domain::prompt::{
    FILL_SYSTEM_INSTRUCTION, REPAIR_SYSTEM_INSTRUCTION, build_fill_prompt, build_repair_prompt,
};
use crate::domain::signals::Signals;
use crate::ports::{CompletionRequest, OracleClient};

/// Fills skeleton documents through an injected oracle client.
pub struct ContentFiller<'a, C: OracleClient + ?Sized> {
    oracle: &'a C,
}

impl<'a, C: OracleClient + ?Sized> ContentFiller<'a, C> {
    pub fn new(oracle: &'a C) -> Self {
        Self { oracle }
    }

    /// Fill every writable field of `skeleton` with oracle-generated copy.
    ///
    /// The returned page keeps the skeleton's envelope bit-for-bit: section
    /// list, order, ids, variants, and constraints are taken from the
    /// skeleton, never from the oracle. Sections the oracle dropped,
    /// reordered, or retyped keep their empty skeleton data for the
    /// structural validator to flag.
    pub fn fill(&self, skeleton: &Page, signals: &Signals) -> Result<Page, AppError> {
        let request = CompletionRequest {
            system: FILL_SYSTEM_INSTRUCTION.to_string(),
            user: build_fill_prompt(skeleton, signals)?,
        };

        let raw = self.oracle.complete(request)?;
        let candidate: Page = parse_oracle_json(&raw)?;

        let mut filled = skeleton.clone();
        let adopted = filled.adopt_content(&candidate);
        if adopted < filled.layout.sections.len() {
            eprintln!(
                "Oracle drifted from submitted structure: {}/{} sections adopted",
                adopted,
                filled.layout.sections.len()
            );
        }
        Ok(filled)
    }

    /// Regenerate one section's data record.
    ///
    /// The returned section carries the input's envelope unchanged; only
    /// `data` differs. Safe to invoke repeatedly on the same section.
    pub fn repair_section(
        &self,
        section: &Section,
        signals: &Signals,
    ) -> Result<Section, AppError> {
        let request = CompletionRequest {
            system: REPAIR_SYSTEM_INSTRUCTION.to_string(),
            user: build_repair_prompt(section, signals)?,
        };

        let raw = self.oracle.complete(request)?;
        let candidate: Section = parse_oracle_json(&raw)?;

        let mut repaired = section.clone();
        if !repaired.adopt_data(&candidate) {
            return Err(AppError::GenerationParse {
                reason: format!(
                    "oracle changed section type from '{}' to '{}'",
                    section.kind(),
                    candidate.kind()
                ),
            });
        }
        Ok(repaired)
    }
}

fn parse_oracle_json<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::GenerationParse { reason: err.to_string() })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::page::Archetype;
    use crate::domain::signals::extract_signals;
    use crate::domain::skeleton::build_skeleton;
    use crate::domain::validation::validate_structure;
    use crate::ports::MockOracleClient;
    use crate::testing::{fill_demo_content, fill_section};

    fn signals() -> Signals {
        extract_signals("Create a landing page for a fitness app")
    }

    fn filled_page_json() -> String {
        let mut page = build_skeleton(Archetype::Saas, Some("fitness app"));
        fill_demo_content(&mut page);
        serde_json::to_string(&page).unwrap()
    }

    #[test]
    fn fill_populates_data_and_passes_validation() {
        let oracle = MockOracleClient::new(filled_page_json());
        let filler = ContentFiller::new(&oracle);

        let skeleton = build_skeleton(Archetype::Saas, Some("fitness app"));
        let page = filler.fill(&skeleton, &signals()).unwrap();

        assert_eq!(page.brand.name, "PulseTrack");
        assert!(validate_structure(&page).is_empty());
    }

    #[test]
    fn fill_keeps_envelope_even_when_oracle_rewrites_it() {
        let mut tampered = build_skeleton(Archetype::Saas, Some("fitness app"));
        fill_demo_content(&mut tampered);
        // Oracle "renames" ids and reorders two sections.
        tampered.layout.sections.swap(1, 2);
        if let Section::Hero(ref mut hero) = tampered.layout.sections[0] {
            hero.id = "hero-renamed".to_string();
            hero.constraints.max_headline_chars = 999;
        }
        let oracle = MockOracleClient::new(serde_json::to_string(&tampered).unwrap());
        let filler = ContentFiller::new(&oracle);

        let skeleton = build_skeleton(Archetype::Saas, Some("fitness app"));
        let page = filler.fill(&skeleton, &signals()).unwrap();

        for (before, after) in skeleton.layout.sections.iter().zip(&page.layout.sections) {
            assert_eq!(before.id(), after.id());
            assert_eq!(before.kind(), after.kind());
        }
        match &page.layout.sections[0] {
            Section::Hero(hero) => assert_eq!(hero.constraints.max_headline_chars, 60),
            other => panic!("expected hero, got {:?}", other.kind()),
        }
        // The swapped positions did not line up by type, so their data
        // stayed empty for the validator to flag.
        assert!(!validate_structure(&page).is_empty());
    }

    #[test]
    fn fill_rejects_non_json_output() {
        let oracle = MockOracleClient::new("Sure! Here is your landing page: ...");
        let filler = ContentFiller::new(&oracle);

        let skeleton = build_skeleton(Archetype::Saas, None);
        let err = filler.fill(&skeleton, &signals()).unwrap_err();
        assert!(matches!(err, AppError::GenerationParse { .. }));
    }

    #[test]
    fn fill_rejects_truncated_json() {
        let truncated: String = filled_page_json().chars().take(200).collect();
        let oracle = MockOracleClient::new(truncated);
        let filler = ContentFiller::new(&oracle);

        let skeleton = build_skeleton(Archetype::Saas, None);
        let err = filler.fill(&skeleton, &signals()).unwrap_err();
        assert!(matches!(err, AppError::GenerationParse { .. }));
    }

    #[test]
    fn fill_propagates_oracle_transport_errors_distinctly() {
        struct DownOracle;
        impl OracleClient for DownOracle {
            fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
                Err(AppError::OracleApi { message: "connection refused".to_string(), status: None })
            }
        }

        let filler = ContentFiller::new(&DownOracle);
        let skeleton = build_skeleton(Archetype::Saas, None);
        let err = filler.fill(&skeleton, &signals()).unwrap_err();
        assert!(matches!(err, AppError::OracleApi { .. }));
    }

    #[test]
    fn repair_replaces_data_and_keeps_envelope() {
        let skeleton = build_skeleton(Archetype::Saas, None);
        let mut regenerated = skeleton.layout.sections[2].clone();
        fill_section(&mut regenerated);
        let oracle = MockOracleClient::new(serde_json::to_string(&regenerated).unwrap());
        let filler = ContentFiller::new(&oracle);

        let repaired = filler.repair_section(&skeleton.layout.sections[2], &signals()).unwrap();
        assert_eq!(repaired.id(), skeleton.layout.sections[2].id());
        match &repaired {
            Section::Features(features) => {
                assert!(!features.data.section_title.is_empty());
                assert!(features.data.items.iter().all(|item| !item.body.is_empty()));
            }
            other => panic!("expected features, got {:?}", other.kind()),
        }
    }

    #[test]
    fn repair_rejects_section_type_change() {
        let skeleton = build_skeleton(Archetype::Saas, None);
        let mut wrong_type = skeleton.layout.sections[5].clone();
        fill_section(&mut wrong_type);
        let oracle = MockOracleClient::new(serde_json::to_string(&wrong_type).unwrap());
        let filler = ContentFiller::new(&oracle);

        let err = filler.repair_section(&skeleton.layout.sections[2], &signals()).unwrap_err();
        match err {
            AppError::GenerationParse { reason } => {
                assert!(reason.contains("changed section type"));
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn repair_is_idempotent_per_response() {
        struct CountingOracle {
            inner: MockOracleClient,
            calls: AtomicUsize,
        }
        impl OracleClient for CountingOracle {
            fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                self.inner.complete(request)
            }
        }

        let skeleton = build_skeleton(Archetype::Saas, None);
        let mut regenerated = skeleton.layout.sections[4].clone();
        fill_section(&mut regenerated);
        let oracle = CountingOracle {
            inner: MockOracleClient::new(serde_json::to_string(&regenerated).unwrap()),
            calls: AtomicUsize::new(0),
        };
        let filler = ContentFiller::new(&oracle);

        let first = filler.repair_section(&skeleton.layout.sections[4], &signals()).unwrap();
        let second = filler.repair_section(&skeleton.layout.sections[4], &signals()).unwrap();
        assert_eq!(first, second);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 2);
    }
}
