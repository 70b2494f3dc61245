//! Usage/limit collaborator port definition.

use crate::domain::AppError;

/// Plan ceiling for generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationLimit {
    /// At most this many generations.
    Limited(u32),
    /// Unlimited sentinel; the gate never blocks.
    Unlimited,
}

impl GenerationLimit {
    /// Whether another generation is allowed at the given usage count.
    pub fn allows(&self, used: u32) -> bool {
        match self {
            GenerationLimit::Limited(limit) => used < *limit,
            GenerationLimit::Unlimited => true,
        }
    }

    /// The numeric ceiling, when one exists.
    pub fn ceiling(&self) -> Option<u32> {
        match self {
            GenerationLimit::Limited(limit) => Some(*limit),
            GenerationLimit::Unlimited => None,
        }
    }
}

/// A user's current plan usage snapshot.
#[derive(Debug, Clone)]
pub struct PlanUsage {
    pub plan: String,
    pub used: u32,
    pub limit: GenerationLimit,
}

impl PlanUsage {
    pub fn exhausted(&self) -> bool {
        !self.limit.allows(self.used)
    }
}

/// Port for the usage/limit collaborator.
pub trait UsageGate {
    /// Current usage for a user identity.
    fn current_usage(&self, user: &str) -> Result<PlanUsage, AppError>;

    /// Record one completed generation.
    fn record_generation(&self, user: &str) -> Result<(), AppError>;
}

/// Gate that reports a fixed usage snapshot and ignores recordings. The
/// unlimited form backs local CLI runs, which have no account system.
#[derive(Debug, Clone)]
pub struct StaticUsageGate {
    usage: PlanUsage,
}

impl StaticUsageGate {
    pub fn new(usage: PlanUsage) -> Self {
        Self { usage }
    }

    pub fn unlimited(plan: impl Into<String>) -> Self {
        Self::new(PlanUsage { plan: plan.into(), used: 0, limit: GenerationLimit::Unlimited })
    }
}

impl UsageGate for StaticUsageGate {
    fn current_usage(&self, _user: &str) -> Result<PlanUsage, AppError> {
        Ok(self.usage.clone())
    }

    fn record_generation(&self, _user: &str) -> Result<(), AppError> {
        Ok(())
    }
}
