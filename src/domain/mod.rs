pub mod configuration;
pub mod error;
pub mod page;
pub mod palette;
pub mod prompt;
pub mod quality;
pub mod signals;
pub mod skeleton;
pub mod validation;

pub use configuration::{GenerationConfig, OracleApiConfig};
pub use error::AppError;
pub use page::{
    Archetype, Brand, FontFamily, Layout, Page, PageMeta, Section, SectionKind, Theme, Tone,
};
pub use palette::{ColorPalette, select_color_palette};
pub use quality::{Grade, QualityIssue, QualityReport, Severity, score_quality};
pub use signals::{Signals, extract_signals};
pub use skeleton::build_skeleton;
pub use validation::{StructuralViolation, validate_identifier, validate_structure};
