//! Deterministic industry-hint to color/theme mapping.

use crate::domain::page::Theme;

/// A primary color paired with a visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub primary_color: &'static str,
    pub theme: Theme,
}

/// Ordered keyword rules; the first rule whose keyword appears in the hint
/// wins, so earlier rules take precedence over later ones when a hint could
/// match several.
const PALETTE_RULES: &[(&[&str], ColorPalette)] = &[
    (
        &["fitness", "health", "gym"],
        ColorPalette { primary_color: "#EF4444", theme: Theme::FriendlyStartup },
    ),
    (
        &["finance", "banking", "crypto"],
        ColorPalette { primary_color: "#10B981", theme: Theme::EnterpriseDark },
    ),
    (
        &["creative", "design", "art"],
        ColorPalette { primary_color: "#F59E0B", theme: Theme::FriendlyStartup },
    ),
    (
        &["education", "learning", "course"],
        ColorPalette { primary_color: "#8B5CF6", theme: Theme::ModernSaas },
    ),
    (
        &["music", "audio", "podcast"],
        ColorPalette { primary_color: "#EC4899", theme: Theme::FriendlyStartup },
    ),
    (
        &["gaming", "esport"],
        ColorPalette { primary_color: "#7C3AED", theme: Theme::EnterpriseDark },
    ),
    (
        &["food", "restaurant", "delivery"],
        ColorPalette { primary_color: "#F97316", theme: Theme::FriendlyStartup },
    ),
    (
        &["travel", "booking", "hotel"],
        ColorPalette { primary_color: "#06B6D4", theme: Theme::ModernSaas },
    ),
    (
        &["real estate", "property"],
        ColorPalette { primary_color: "#0EA5E9", theme: Theme::ModernSaas },
    ),
    (
        &["social", "community", "network"],
        ColorPalette { primary_color: "#8B5CF6", theme: Theme::FriendlyStartup },
    ),
    (
        &["enterprise", "b2b", "corporate"],
        ColorPalette { primary_color: "#1E40AF", theme: Theme::EnterpriseDark },
    ),
    (
        &["productivity", "tool", "workflow"],
        ColorPalette { primary_color: "#6366F1", theme: Theme::ModernSaas },
    ),
    (
        &["ecommerce", "shop", "store"],
        ColorPalette { primary_color: "#059669", theme: Theme::ModernSaas },
    ),
];

/// Fallback palettes for hints no rule covers. Selection is `hash mod len`
/// where the hash is the hint's character count; deterministic, nothing more.
const FALLBACK_PALETTES: &[ColorPalette] = &[
    ColorPalette { primary_color: "#3B82F6", theme: Theme::ModernSaas },
    ColorPalette { primary_color: "#10B981", theme: Theme::ModernSaas },
    ColorPalette { primary_color: "#8B5CF6", theme: Theme::FriendlyStartup },
    ColorPalette { primary_color: "#EC4899", theme: Theme::FriendlyStartup },
    ColorPalette { primary_color: "#F59E0B", theme: Theme::FriendlyStartup },
    ColorPalette { primary_color: "#EF4444", theme: Theme::ModernSaas },
    ColorPalette { primary_color: "#06B6D4", theme: Theme::ModernSaas },
    ColorPalette { primary_color: "#6366F1", theme: Theme::EnterpriseDark },
];

/// Select a color palette for an optional industry hint.
///
/// Same hint, same palette, always. An absent hint selects the first
/// fallback palette.
pub fn select_color_palette(industry_hint: Option<&str>) -> ColorPalette {
    let hint = industry_hint.unwrap_or("").to_lowercase();

    for (keywords, palette) in PALETTE_RULES {
        if keywords.iter().any(|keyword| hint.contains(keyword)) {
            return *palette;
        }
    }

    FALLBACK_PALETTES[hint.chars().count() % FALLBACK_PALETTES.len()]
}
