//! Archetype-driven skeleton construction.
//!
//! A skeleton is a fully-shaped, deterministic [`Page`] with every `data`
//! field present but unfilled. The filler writes into existing leaf fields
//! only; it never adds, removes, or reorders sections.

use crate::domain::page::{
    Archetype, Brand, CtaData, CtaSection, CtaVariant, FaqData, FaqItem, FaqSection, FaqVariant,
    FeatureItem, FeaturesData, FeaturesSection, FeaturesVariant, FontFamily, FooterData,
    FooterSection, FooterVariant, HeroConstraints, HeroData, HeroSection, HeroVariant, LabeledLink,
    Layout, Page, PageMeta, PricingData, PricingPlan, PricingSection, PricingVariant, Section,
    SocialProofData, SocialProofSection, SocialProofVariant, Theme, Tone,
};
use crate::domain::palette::select_color_palette;

/// Feature sections always ship this many empty item slots.
pub const FEATURE_SLOT_COUNT: usize = 6;
/// FAQ sections always ship this many empty item slots.
pub const FAQ_SLOT_COUNT: usize = 5;

const MAX_HEADLINE_CHARS: usize = 60;
const MAX_SUBHEADLINE_CHARS: usize = 150;

/// Build the empty, fully-shaped page for an archetype.
pub fn build_skeleton(archetype: Archetype, industry_hint: Option<&str>) -> Page {
    match archetype {
        Archetype::Saas => saas_skeleton(industry_hint),
        Archetype::MobileApp => mobile_app_skeleton(industry_hint),
        Archetype::Creator => creator_skeleton(industry_hint),
    }
}

fn saas_skeleton(industry_hint: Option<&str>) -> Page {
    let palette = select_color_palette(industry_hint);

    Page {
        meta: empty_meta(),
        brand: brand(palette.primary_color, palette.theme, Tone::ConfidentClear),
        layout: Layout {
            archetype: Archetype::Saas,
            sections: vec![
                hero(HeroVariant::LeftImage, "#signup", Some("#demo")),
                social_proof(),
                features(),
                pricing(
                    PricingVariant::ThreeTier,
                    vec![
                        plan("#signup", false),
                        plan("#signup", true),
                        plan("#contact", false),
                    ],
                ),
                faq(FaqVariant::Accordion),
                cta("#signup"),
                footer(vec![
                    link("Privacy", "/privacy"),
                    link("Terms", "/terms"),
                    link("Contact", "/contact"),
                ]),
            ],
        },
    }
}

fn mobile_app_skeleton(industry_hint: Option<&str>) -> Page {
    let palette = select_color_palette(industry_hint);

    Page {
        meta: empty_meta(),
        brand: brand(palette.primary_color, palette.theme, Tone::Friendly),
        layout: Layout {
            archetype: Archetype::MobileApp,
            sections: vec![
                hero(HeroVariant::Centered, "#download", None),
                features(),
                social_proof(),
                pricing(
                    PricingVariant::TwoTier,
                    vec![plan("#download", false), plan("#download", true)],
                ),
                faq(FaqVariant::TwoCol),
                cta("#download"),
                footer(vec![
                    link("Privacy", "/privacy"),
                    link("Terms", "/terms"),
                    link("Support", "/support"),
                ]),
            ],
        },
    }
}

fn creator_skeleton(industry_hint: Option<&str>) -> Page {
    let palette = select_color_palette(industry_hint);

    Page {
        meta: empty_meta(),
        brand: brand(palette.primary_color, palette.theme, Tone::Friendly),
        layout: Layout {
            archetype: Archetype::Creator,
            sections: vec![
                hero(HeroVariant::Centered, "#join", None),
                features(),
                social_proof(),
                cta("#join"),
                footer(vec![link("About", "/about"), link("Contact", "/contact")]),
            ],
        },
    }
}

fn empty_meta() -> PageMeta {
    PageMeta { title: String::new(), description: String::new(), favicon_url: None }
}

fn brand(primary_color: &str, theme: Theme, tone: Tone) -> Brand {
    Brand {
        name: String::new(),
        primary_color: primary_color.to_string(),
        theme,
        font_family: FontFamily::Inter,
        tone,
    }
}

fn hero(variant: HeroVariant, primary_href: &str, secondary_href: Option<&str>) -> Section {
    Section::Hero(HeroSection {
        variant,
        id: "hero-1".to_string(),
        constraints: HeroConstraints {
            max_headline_chars: MAX_HEADLINE_CHARS,
            max_subheadline_chars: MAX_SUBHEADLINE_CHARS,
            require_cta: true,
        },
        data: HeroData {
            primary_cta: LabeledLink { label: String::new(), href: primary_href.to_string() },
            secondary_cta: secondary_href
                .map(|href| LabeledLink { label: String::new(), href: href.to_string() }),
            ..Default::default()
        },
    })
}

fn social_proof() -> Section {
    Section::SocialProof(SocialProofSection {
        variant: SocialProofVariant::LogoRow,
        id: "social-proof-1".to_string(),
        data: SocialProofData::default(),
    })
}

fn features() -> Section {
    Section::Features(FeaturesSection {
        variant: FeaturesVariant::ThreeColCards,
        id: "features-1".to_string(),
        data: FeaturesData {
            items: (0..FEATURE_SLOT_COUNT).map(|_| FeatureItem::default()).collect(),
            ..Default::default()
        },
    })
}

fn pricing(variant: PricingVariant, plans: Vec<PricingPlan>) -> Section {
    Section::Pricing(PricingSection {
        variant,
        id: "pricing-1".to_string(),
        data: PricingData { plans, ..Default::default() },
    })
}

fn plan(cta_href: &str, highlight: bool) -> PricingPlan {
    PricingPlan { highlight, cta_href: cta_href.to_string(), ..Default::default() }
}

fn faq(variant: FaqVariant) -> Section {
    Section::Faq(FaqSection {
        variant,
        id: "faq-1".to_string(),
        data: FaqData {
            items: (0..FAQ_SLOT_COUNT).map(|_| FaqItem::default()).collect(),
            ..Default::default()
        },
    })
}

fn cta(href: &str) -> Section {
    Section::Cta(CtaSection {
        variant: CtaVariant::Centered,
        id: "cta-1".to_string(),
        data: CtaData {
            cta: LabeledLink { label: String::new(), href: href.to_string() },
            ..Default::default()
        },
    })
}

fn footer(links: Vec<LabeledLink>) -> Section {
    Section::Footer(FooterSection {
        variant: FooterVariant::Simple,
        id: "footer-1".to_string(),
        data: FooterData { copyright: String::new(), links },
    })
}

fn link(label: &str, href: &str) -> LabeledLink {
    LabeledLink { label: label.to_string(), href: href.to_string() }
}
