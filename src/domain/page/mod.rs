//! Landing-page document model.
//!
//! A [`Page`] is created empty by the skeleton builder, has its writable
//! fields grafted exactly once by the content filler, and is inspected
//! read-only by the structural validator and the quality scorer. Section
//! envelopes (`type`, `variant`, `id`, `constraints`) are fixed at skeleton
//! time and never change afterwards.

pub mod section;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use section::{
    Badge, BadgeTone, CtaData, CtaSection, CtaVariant, FaqData, FaqItem, FaqSection, FaqVariant,
    FeatureItem, FeaturesData, FeaturesSection, FeaturesVariant, FooterData, FooterSection,
    FooterVariant, HeroConstraints, HeroData, HeroImage, HeroImageStyle, HeroSection, HeroVariant,
    LabeledLink, PricingData, PricingPlan, PricingSection, PricingVariant, Section, SectionKind,
    SocialProofData, SocialProofSection, SocialProofVariant, Testimonial,
};

/// Root document aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub meta: PageMeta,
    pub brand: Brand,
    pub layout: Layout,
}

impl Page {
    /// Graft the writable content of `candidate` onto this page.
    ///
    /// Copies `meta` text fields, `brand.name`, and each section's `data`
    /// where the candidate section at the same position has the same type.
    /// Envelope fields and palette-derived brand fields are never touched.
    /// Empty candidate text leaves existing seeds in place. Returns the
    /// number of sections whose data was adopted; a count short of
    /// `self.layout.sections.len()` means the oracle drifted from the
    /// submitted structure.
    pub fn adopt_content(&mut self, candidate: &Page) -> usize {
        if !candidate.meta.title.is_empty() {
            self.meta.title = candidate.meta.title.clone();
        }
        if !candidate.meta.description.is_empty() {
            self.meta.description = candidate.meta.description.clone();
        }
        if candidate.meta.favicon_url.is_some() {
            self.meta.favicon_url = candidate.meta.favicon_url.clone();
        }
        if !candidate.brand.name.is_empty() {
            self.brand.name = candidate.brand.name.clone();
        }

        let mut adopted = 0;
        for (section, filled) in self.layout.sections.iter_mut().zip(&candidate.layout.sections) {
            if section.adopt_data(filled) {
                adopted += 1;
            }
        }
        adopted
    }
}

/// Document head: title, description, optional favicon reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
}

/// Brand identity applied across the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default)]
    pub tone: Tone,
}

/// Visual theme family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "modern-saas")]
    ModernSaas,
    #[serde(rename = "friendly-startup")]
    FriendlyStartup,
    #[serde(rename = "enterprise-dark")]
    EnterpriseDark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::ModernSaas => "modern-saas",
            Theme::FriendlyStartup => "friendly-startup",
            Theme::EnterpriseDark => "enterprise-dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brand copy tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    ConfidentClear,
    Friendly,
    Serious,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::ConfidentClear => "confident-clear",
            Tone::Friendly => "friendly",
            Tone::Serious => "serious",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typeface family. A single family is supported today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Inter,
}

/// Archetype tag plus the ordered, closed section list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub archetype: Archetype,
    pub sections: Vec<Section>,
}

/// Top-level page template family determining section list and ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    #[default]
    Saas,
    MobileApp,
    Creator,
}

impl Archetype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Saas => "saas",
            Archetype::MobileApp => "mobile-app",
            Archetype::Creator => "creator",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "saas" => Ok(Archetype::Saas),
            "mobile-app" => Ok(Archetype::MobileApp),
            "creator" => Ok(Archetype::Creator),
            other => Err(AppError::InvalidArchetype(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skeleton::build_skeleton;

    #[test]
    fn archetype_round_trips_through_str() {
        for archetype in [Archetype::Saas, Archetype::MobileApp, Archetype::Creator] {
            assert_eq!(archetype.as_str().parse::<Archetype>().unwrap(), archetype);
        }
    }

    #[test]
    fn archetype_rejects_unknown_tag() {
        let err = "newsletter".parse::<Archetype>().unwrap_err();
        assert!(matches!(err, AppError::InvalidArchetype(tag) if tag == "newsletter"));
    }

    #[test]
    fn page_serializes_with_wire_casing() {
        let page = build_skeleton(Archetype::Saas, Some("fitness app"));
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"primaryColor\""));
        assert!(json.contains("\"fontFamily\":\"Inter\""));
        assert!(json.contains("\"archetype\":\"saas\""));
        assert!(json.contains("\"type\":\"social-proof\""));
    }

    #[test]
    fn adopt_content_keeps_seeds_when_candidate_fields_are_empty() {
        let mut page = build_skeleton(Archetype::Saas, None);
        page.meta.title = "Seeded Title".to_string();
        page.brand.name = "Seeded".to_string();

        let candidate = build_skeleton(Archetype::Saas, None);
        page.adopt_content(&candidate);

        assert_eq!(page.meta.title, "Seeded Title");
        assert_eq!(page.brand.name, "Seeded");
    }

    #[test]
    fn adopt_content_reports_sections_adopted() {
        let mut page = build_skeleton(Archetype::Saas, None);
        let candidate = build_skeleton(Archetype::Saas, None);
        assert_eq!(page.adopt_content(&candidate), page.layout.sections.len());

        let mut short = build_skeleton(Archetype::Saas, None);
        short.layout.sections.truncate(2);
        let mut page = build_skeleton(Archetype::Saas, None);
        assert_eq!(page.adopt_content(&short), 2);
    }
}
