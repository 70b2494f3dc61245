mod oracle_client;
mod project_store;
mod usage_gate;

pub use oracle_client::{CompletionRequest, MockOracleClient, OracleClient};
pub use project_store::ProjectStore;
pub use usage_gate::{GenerationLimit, PlanUsage, StaticUsageGate, UsageGate};
