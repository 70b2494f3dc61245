pub mod generate;

pub use generate::{GenerateOptions, GenerationOutcome, REPAIR_ATTEMPT_CEILING};
