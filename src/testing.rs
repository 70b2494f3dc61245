//! Shared helpers for unit tests.

use crate::domain::page::{
    Badge, BadgeTone, LabeledLink, Page, Section, Testimonial,
};

/// Fill every writable field of `page` with plausible copy, the way a
/// well-behaved oracle would. Envelopes are left untouched.
pub(crate) fn fill_demo_content(page: &mut Page) {
    page.meta.title = "PulseTrack - Train Smarter Every Day".to_string();
    page.meta.description = "PulseTrack turns your workout history into adaptive training \
                             plans that fit your schedule, your gear, and your goals, week \
                             after week."
        .to_string();
    page.brand.name = "PulseTrack".to_string();

    for section in &mut page.layout.sections {
        fill_section(section);
    }
}

/// Fill one section's data record with plausible copy.
pub(crate) fn fill_section(section: &mut Section) {
    match section {
        Section::Hero(hero) => {
            hero.data.headline = "Train smarter, recover faster".to_string();
            hero.data.subheadline = "Adaptive plans that react to every workout you log, \
                                     so each week builds on the last."
                .to_string();
            hero.data.primary_cta.label = "Start Free Trial".to_string();
            if let Some(secondary) = hero.data.secondary_cta.as_mut() {
                secondary.label = "Watch Demo".to_string();
            }
            hero.data.badge =
                Some(Badge { label: "New: race-day mode".to_string(), tone: BadgeTone::Info });
        }
        Section::SocialProof(proof) => {
            proof.data.logos = vec![
                "IronWorks".to_string(),
                "CityRun Club".to_string(),
                "Peak Physio".to_string(),
                "Summit Gyms".to_string(),
            ];
            proof.data.testimonial = Some(Testimonial {
                quote: "PulseTrack shaved eleven minutes off my marathon time in one \
                        season. The adaptive plan just works."
                    .to_string(),
                author: "Dana Reyes".to_string(),
                role: Some("Head Coach, CityRun Club".to_string()),
            });
        }
        Section::Features(features) => {
            features.data.section_title = "Everything your training needs".to_string();
            let copy = [
                ("chart", "Adaptive plans", "Workouts adjust to your logged effort so every week builds on the last one."),
                ("lightning", "Instant sync", "Sessions land from your watch before you finish your cooldown stretch."),
                ("shield", "Injury guard", "Load warnings flag risky ramp-ups before they turn into forced rest weeks."),
                ("users", "Coach sharing", "Send any block to your coach for inline feedback and quick adjustments."),
                ("star", "Race-day mode", "Taper schedules and pacing bands generated from your recent results."),
                ("globe", "Works everywhere", "Full offline tracking with automatic sync when you are back in range."),
            ];
            for (item, (icon, title, body)) in features.data.items.iter_mut().zip(copy) {
                item.icon = icon.to_string();
                item.title = title.to_string();
                item.body = body.to_string();
            }
        }
        Section::Pricing(pricing) => {
            pricing.data.headline = "Simple pricing that scales with you".to_string();
            let names = ["Starter", "Pro", "Team"];
            let prices = ["$9/mo", "$19/mo", "$49/mo"];
            for (index, plan) in pricing.data.plans.iter_mut().enumerate() {
                plan.name = names.get(index).unwrap_or(&"Plan").to_string();
                plan.price = prices.get(index).unwrap_or(&"$29/mo").to_string();
                plan.features = vec![
                    "Unlimited workout history".to_string(),
                    "Adaptive weekly plans".to_string(),
                    "Priority support".to_string(),
                ];
                plan.cta_label = "Get Started".to_string();
            }
        }
        Section::Faq(faq) => {
            faq.data.headline = "Questions, answered".to_string();
            let copy = [
                ("Can I cancel anytime?", "Yes. Cancel from settings in two clicks and keep access until the end of your billing period, no emails required."),
                ("Does it work with my watch?", "PulseTrack syncs with every major watch platform and imports your full history the first time you connect."),
                ("Is my data secure?", "All training data is encrypted in transit and at rest, and you can export or delete everything whenever you choose."),
                ("What if I miss a workout?", "The plan rebalances the rest of your week automatically instead of stacking missed sessions on top of your next one."),
                ("Do you offer refunds?", "If PulseTrack is not for you, write us within 30 days of purchase and we refund the full amount, no questions asked."),
            ];
            for (item, (question, answer)) in faq.data.items.iter_mut().zip(copy) {
                item.question = question.to_string();
                item.answer = answer.to_string();
            }
        }
        Section::Cta(cta) => {
            cta.data.headline = "Your next PR starts this week".to_string();
            cta.data.cta =
                LabeledLink { label: "Start Free Trial".to_string(), href: "#signup".to_string() };
        }
        Section::Footer(footer) => {
            footer.data.copyright = "© 2025 PulseTrack, Inc.".to_string();
        }
    }
}
