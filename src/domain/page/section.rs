//! Closed tagged union over the seven section types.
//!
//! `type`, `variant`, `id`, and `constraints` are assigned at skeleton time
//! and immutable thereafter; only the `data` record is writable. Consumers
//! match exhaustively, so adding a section type forces every validator and
//! scorer arm to be updated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One section of a page. Internally tagged on the wire (`"type": "hero"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Section {
    #[serde(rename = "hero")]
    Hero(HeroSection),
    #[serde(rename = "social-proof")]
    SocialProof(SocialProofSection),
    #[serde(rename = "features")]
    Features(FeaturesSection),
    #[serde(rename = "pricing")]
    Pricing(PricingSection),
    #[serde(rename = "faq")]
    Faq(FaqSection),
    #[serde(rename = "cta")]
    Cta(CtaSection),
    #[serde(rename = "footer")]
    Footer(FooterSection),
}

impl Section {
    /// Stable identifier, unique within a document.
    pub fn id(&self) -> &str {
        match self {
            Section::Hero(s) => &s.id,
            Section::SocialProof(s) => &s.id,
            Section::Features(s) => &s.id,
            Section::Pricing(s) => &s.id,
            Section::Faq(s) => &s.id,
            Section::Cta(s) => &s.id,
            Section::Footer(s) => &s.id,
        }
    }

    /// Discriminant tag for reporting.
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::SocialProof(_) => SectionKind::SocialProof,
            Section::Features(_) => SectionKind::Features,
            Section::Pricing(_) => SectionKind::Pricing,
            Section::Faq(_) => SectionKind::Faq,
            Section::Cta(_) => SectionKind::Cta,
            Section::Footer(_) => SectionKind::Footer,
        }
    }

    /// Copy `candidate`'s data record into this section when the types line
    /// up, leaving the envelope untouched. Returns false on a type mismatch,
    /// in which case nothing changes.
    pub fn adopt_data(&mut self, candidate: &Section) -> bool {
        match (self, candidate) {
            (Section::Hero(mine), Section::Hero(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            (Section::SocialProof(mine), Section::SocialProof(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            (Section::Features(mine), Section::Features(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            (Section::Pricing(mine), Section::Pricing(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            (Section::Faq(mine), Section::Faq(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            (Section::Cta(mine), Section::Cta(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            (Section::Footer(mine), Section::Footer(theirs)) => {
                mine.data = theirs.data.clone();
                true
            }
            _ => false,
        }
    }
}

/// Section discriminant, used by violation and quality reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Hero,
    SocialProof,
    Features,
    Pricing,
    Faq,
    Cta,
    Footer,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::SocialProof => "social-proof",
            SectionKind::Features => "features",
            SectionKind::Pricing => "pricing",
            SectionKind::Faq => "faq",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled link target shared by CTAs and footer links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub href: String,
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub variant: HeroVariant,
    pub id: String,
    pub constraints: HeroConstraints,
    #[serde(default)]
    pub data: HeroData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroVariant {
    LeftImage,
    Centered,
}

/// Length ceilings and CTA requirement fixed at skeleton time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConstraints {
    pub max_headline_chars: usize,
    pub max_subheadline_chars: usize,
    #[serde(rename = "requireCTA")]
    pub require_cta: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: LabeledLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<LabeledLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_bullet_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<HeroImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    pub style: HeroImageStyle,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroImageStyle {
    DashboardScreenshot,
    AbstractUi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    #[default]
    Info,
}

// ---------------------------------------------------------------------------
// Social proof
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProofSection {
    pub variant: SocialProofVariant,
    pub id: String,
    #[serde(default)]
    pub data: SocialProofData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialProofVariant {
    LogoRow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProofData {
    pub logos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesSection {
    pub variant: FeaturesVariant,
    pub id: String,
    #[serde(default)]
    pub data: FeaturesData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeaturesVariant {
    #[serde(rename = "3-col-cards")]
    ThreeColCards,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesData {
    pub section_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_subtitle: Option<String>,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSection {
    pub variant: PricingVariant,
    pub id: String,
    #[serde(default)]
    pub data: PricingData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingVariant {
    #[serde(rename = "2-tier")]
    TwoTier,
    #[serde(rename = "3-tier")]
    ThreeTier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingData {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_note: Option<String>,
    pub highlight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<String>,
    pub cta_label: String,
    pub cta_href: String,
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqSection {
    pub variant: FaqVariant,
    pub id: String,
    #[serde(default)]
    pub data: FaqData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaqVariant {
    #[serde(rename = "2-col")]
    TwoCol,
    #[serde(rename = "accordion")]
    Accordion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqData {
    pub headline: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// CTA
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaSection {
    pub variant: CtaVariant,
    pub id: String,
    #[serde(default)]
    pub data: CtaData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaVariant {
    Centered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaData {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    pub cta: LabeledLink,
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub variant: FooterVariant,
    pub id: String,
    #[serde(default)]
    pub data: FooterData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FooterVariant {
    Simple,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterData {
    pub copyright: String,
    pub links: Vec<LabeledLink>,
}
