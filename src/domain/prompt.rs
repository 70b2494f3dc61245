//! Oracle prompt assembly from embedded templates.
//!
//! Both requests fix the output contract the same way: valid JSON only, the
//! submitted structure echoed back with only `data` fields written. Length
//! ceilings are read from the hero section's constraints and repeated in the
//! instruction text so the oracle sees them explicitly.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::page::{Page, Section};
use crate::domain::signals::Signals;

static PROMPT_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// System instruction for whole-document fill requests.
pub const FILL_SYSTEM_INSTRUCTION: &str = "You are a professional copywriter specializing in \
     high-converting landing pages. You always output valid JSON.";

/// System instruction for single-section repair requests.
pub const REPAIR_SYSTEM_INSTRUCTION: &str =
    "You are a professional copywriter. You always output valid JSON.";

// Ceilings used when a page carries no hero section.
const DEFAULT_MAX_HEADLINE_CHARS: usize = 60;
const DEFAULT_MAX_SUBHEADLINE_CHARS: usize = 150;

/// Build the user instruction for a whole-document fill.
pub fn build_fill_prompt(page: &Page, signals: &Signals) -> Result<String, AppError> {
    let page_json = to_pretty_json(page)?;
    let (max_headline_chars, max_subheadline_chars) = hero_ceilings(page);

    render(
        "fill.j2",
        context! {
            business => signals.business,
            audience => signals.audience,
            goal => signals.goal,
            tone => signals.tone,
            brand_name => display_brand_name(page, signals),
            brand_theme => page.brand.theme.as_str(),
            brand_color => page.brand.primary_color,
            brand_tone => page.brand.tone.as_str(),
            page_json => page_json,
            max_headline_chars => max_headline_chars,
            max_subheadline_chars => max_subheadline_chars,
        },
    )
}

/// Build the user instruction for a single-section repair.
pub fn build_repair_prompt(section: &Section, signals: &Signals) -> Result<String, AppError> {
    let section_json = to_pretty_json(section)?;

    render(
        "repair.j2",
        context! {
            business => signals.business,
            audience => signals.audience,
            goal => signals.goal,
            tone => signals.tone,
            section_json => section_json,
        },
    )
}

fn render(template_name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let source = PROMPT_ASSETS
        .get_file(template_name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| {
            AppError::PromptAssembly(format!("embedded template '{}' missing", template_name))
        })?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(source, ctx).map_err(|err| {
        AppError::PromptAssembly(format!("template '{}' failed to render: {}", template_name, err))
    })
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|err| AppError::PromptAssembly(err.to_string()))
}

fn hero_ceilings(page: &Page) -> (usize, usize) {
    page.layout
        .sections
        .iter()
        .find_map(|section| match section {
            Section::Hero(hero) => Some((
                hero.constraints.max_headline_chars,
                hero.constraints.max_subheadline_chars,
            )),
            _ => None,
        })
        .unwrap_or((DEFAULT_MAX_HEADLINE_CHARS, DEFAULT_MAX_SUBHEADLINE_CHARS))
}

fn display_brand_name<'a>(page: &'a Page, signals: &'a Signals) -> &'a str {
    if page.brand.name.is_empty() { &signals.business } else { &page.brand.name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::Archetype;
    use crate::domain::signals::extract_signals;
    use crate::domain::skeleton::build_skeleton;

    fn signals() -> Signals {
        extract_signals("Create a landing page for a fitness app targeting busy professionals")
    }

    #[test]
    fn fill_prompt_embeds_skeleton_and_ceilings() {
        let page = build_skeleton(Archetype::Saas, Some("fitness app"));
        let prompt = build_fill_prompt(&page, &signals()).unwrap();

        assert!(prompt.contains("max 60 chars"));
        assert!(prompt.contains("max 150 chars"));
        assert!(prompt.contains("\"type\": \"hero\""));
        assert!(prompt.contains("Business: fitness app targeting busy professionals"));
        assert!(prompt.contains("Do NOT change the layout"));
    }

    #[test]
    fn fill_prompt_falls_back_to_signal_business_for_brand() {
        let page = build_skeleton(Archetype::Saas, None);
        let prompt = build_fill_prompt(&page, &signals()).unwrap();
        assert!(prompt.contains("Name: fitness app targeting busy professionals"));
    }

    #[test]
    fn repair_prompt_scopes_to_one_section() {
        let page = build_skeleton(Archetype::Saas, None);
        let prompt = build_repair_prompt(&page.layout.sections[2], &signals()).unwrap();

        assert!(prompt.contains("\"type\": \"features\""));
        assert!(!prompt.contains("\"type\": \"pricing\""));
        assert!(prompt.contains("Do NOT change the type, variant, or id"));
    }

    #[test]
    fn prompts_are_deterministic() {
        let page = build_skeleton(Archetype::Creator, Some("indie musician"));
        let signals = signals();
        assert_eq!(
            build_fill_prompt(&page, &signals).unwrap(),
            build_fill_prompt(&page, &signals).unwrap()
        );
    }
}
