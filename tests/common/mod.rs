//! Shared fixtures for integration tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use pageforge::domain::AppError;
use pageforge::ports::{CompletionRequest, GenerationLimit, OracleClient, PlanUsage, UsageGate};

/// Oracle double that pops scripted responses in order and counts calls.
pub struct ScriptedOracle {
    responses: Mutex<Vec<Result<String, AppError>>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedOracle {
    pub fn new(responses: Vec<Result<String, AppError>>) -> Self {
        Self { responses: Mutex::new(responses), calls: AtomicUsize::new(0) }
    }

    pub fn single(response: impl Into<String>) -> Self {
        Self::new(vec![Ok(response.into())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OracleClient for ScriptedOracle {
    fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.responses.lock().expect("responses lock poisoned");
        if guard.is_empty() {
            return Err(AppError::OracleApi {
                message: "test: unexpected extra oracle call".to_string(),
                status: Some(500),
            });
        }
        guard.remove(0)
    }
}

/// Usage gate with a fixed snapshot and a recording counter.
pub struct CountingUsageGate {
    usage: PlanUsage,
    recorded: AtomicUsize,
}

#[allow(dead_code)]
impl CountingUsageGate {
    pub fn with_limit(used: u32, limit: u32) -> Self {
        Self {
            usage: PlanUsage {
                plan: "starter".to_string(),
                used,
                limit: GenerationLimit::Limited(limit),
            },
            recorded: AtomicUsize::new(0),
        }
    }

    pub fn unlimited() -> Self {
        Self {
            usage: PlanUsage {
                plan: "agency".to_string(),
                used: 0,
                limit: GenerationLimit::Unlimited,
            },
            recorded: AtomicUsize::new(0),
        }
    }

    pub fn recorded(&self) -> usize {
        self.recorded.load(Ordering::SeqCst)
    }
}

impl UsageGate for CountingUsageGate {
    fn current_usage(&self, _user: &str) -> Result<PlanUsage, AppError> {
        Ok(self.usage.clone())
    }

    fn record_generation(&self, _user: &str) -> Result<(), AppError> {
        self.recorded.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Fill a skeleton's writable fields the way a well-behaved oracle would:
/// by editing the serialized JSON, leaving every envelope key untouched.
pub fn oracle_filled_json(skeleton_json: &str) -> String {
    let mut page: Value = serde_json::from_str(skeleton_json).expect("skeleton must be JSON");

    page["meta"]["title"] = "NovaBooks - Bookkeeping Without the Busywork".into();
    page["meta"]["description"] = "NovaBooks reconciles your accounts nightly, files the \
                                   paperwork you dread, and hands you a clean ledger every \
                                   Monday morning."
        .into();
    page["brand"]["name"] = "NovaBooks".into();

    let sections = page["layout"]["sections"].as_array_mut().expect("sections array");
    for section in sections {
        let kind = section["type"].as_str().expect("type tag").to_string();
        fill_section_value(&kind, &mut section["data"]);
    }

    serde_json::to_string(&page).expect("filled page must serialize")
}

fn fill_section_value(kind: &str, data: &mut Value) {
    match kind {
        "hero" => {
            data["headline"] = "Close your books in minutes".into();
            data["subheadline"] = "Automated reconciliation and tax-ready reports for \
                                   freelancers who would rather be working."
                .into();
            data["primaryCta"]["label"] = "Start Free Trial".into();
            if data.get("secondaryCta").is_some_and(|v| !v.is_null()) {
                data["secondaryCta"]["label"] = "See It Work".into();
            }
        }
        "social-proof" => {
            data["logos"] =
                serde_json::json!(["LedgerWorks", "TaxNest", "Brightside Co", "FreelanceHub"]);
            data["testimonial"] = serde_json::json!({
                "quote": "NovaBooks gave me back my Sundays. Reconciliation just happens, and my accountant stopped sighing.",
                "author": "Priya Shah",
                "role": "Independent Consultant"
            });
        }
        "features" => {
            data["sectionTitle"] = "Bookkeeping that runs itself".into();
            if let Some(items) = data["items"].as_array_mut() {
                for (index, item) in items.iter_mut().enumerate() {
                    item["icon"] = "check".into();
                    item["title"] = format!("Automation {}", index + 1).into();
                    item["body"] = "Nightly syncs categorize every transaction so your \
                                    ledger is always current."
                        .into();
                }
            }
        }
        "pricing" => {
            data["headline"] = "Plans that pay for themselves".into();
            if let Some(plans) = data["plans"].as_array_mut() {
                for (index, plan) in plans.iter_mut().enumerate() {
                    plan["name"] = format!("Tier {}", index + 1).into();
                    plan["price"] = "$19/mo".into();
                    plan["features"] = serde_json::json!([
                        "Unlimited transactions",
                        "Tax-ready exports",
                        "Email support"
                    ]);
                    plan["ctaLabel"] = "Choose Plan".into();
                }
            }
        }
        "faq" => {
            data["headline"] = "Before you ask".into();
            if let Some(items) = data["items"].as_array_mut() {
                for item in items.iter_mut() {
                    item["question"] = "Can I cancel my subscription anytime?".into();
                    item["answer"] = "Yes, cancellation takes two clicks and your data stays \
                                      exportable for ninety days afterwards."
                        .into();
                }
            }
        }
        "cta" => {
            data["headline"] = "Your ledger could be done by tonight".into();
            data["cta"]["label"] = "Start Free Trial".into();
        }
        "footer" => {
            data["copyright"] = "© 2025 NovaBooks, Inc.".into();
        }
        other => panic!("unknown section type in fixture: {}", other),
    }
}
