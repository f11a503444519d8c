//! Home page handler
//!
//! Composes the hero, about, services, benefits, and contact sections into
//! a single page, all driven by the locale dictionary.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::contact::ContactModel;
use super::PageChrome;
use crate::i18n::Dictionary;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const HERO_TITLE: &str = "Professional Interpretation Services";
    pub const HERO_SUBTITLE: &str = "Connecting you to the world in over 100 languages";
    pub const HERO_CTA: &str = "Get Started";
    pub const HERO_APPLY_NOW: &str = "Apply Now";
    pub const HERO_LEARN_MORE: &str = "Learn More";

    pub const CAROUSEL: [(&str, &str, &str); 3] = [
        (
            "hero.carousel.image1",
            "Medical Interpretation",
            "HIPAA-compliant interpreters available around the clock for healthcare providers.",
        ),
        (
            "hero.carousel.image2",
            "Legal Interpretation",
            "Court-certified interpreters for depositions, hearings, and client meetings.",
        ),
        (
            "hero.carousel.image3",
            "Business Interpretation",
            "Facilitate international meetings and negotiations without missing a word.",
        ),
    ];

    pub const ABOUT_TITLE: &str = "About E-Voque";
    pub const ABOUT_DESCRIPTION: &str =
        "A leading provider of over-the-phone interpretation services connecting businesses and individuals with professional interpreters.";
    pub const ABOUT_MISSION: &str =
        "Our mission is to break down language barriers and connect people through professional interpretation services.";

    pub const SERVICES_TITLE: &str = "Our Services";
    pub const SERVICES: [(&str, &str, &str); 4] = [
        (
            "services.medical",
            "Medical Interpretation",
            "Immediate access to HIPAA-compliant medical interpreters with specialized terminology knowledge.",
        ),
        (
            "services.legal",
            "Legal Interpretation",
            "Court-certified interpreters for depositions, witness interviews, and sensitive legal matters.",
        ),
        (
            "services.business",
            "Business Interpretation",
            "International meeting facilitation, sales support, and multi-party conference calls.",
        ),
        (
            "services.emergency",
            "Emergency Services",
            "Immediate connection to interpreters with priority handling for crisis situations.",
        ),
    ];

    pub const BENEFITS_TITLE: &str = "Why Choose E-Voque";
    pub const BENEFITS: [(&str, &str); 6] = [
        ("benefits.quality", "Certified professional interpreters"),
        ("benefits.speed", "Connection in seconds, not hours"),
        ("benefits.availability", "Available 24 hours a day, 7 days a week"),
        ("benefits.languages", "Over 100 languages supported"),
        ("benefits.security", "Secure and confidential calls"),
        ("benefits.technology", "Reliable, modern call platform"),
    ];
}

/// One carousel slide in the hero section
pub struct SlideModel {
    pub title: String,
    pub description: String,
}

/// Hero section content
pub struct HeroModel {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub apply_now: String,
    pub learn_more: String,
    pub slides: Vec<SlideModel>,
}

/// About section content
pub struct AboutSectionModel {
    pub title: String,
    pub description: String,
    pub mission: String,
}

/// One service card
pub struct ServiceCardModel {
    pub title: String,
    pub description: String,
}

/// Services section content
pub struct ServicesSectionModel {
    pub title: String,
    pub cards: Vec<ServiceCardModel>,
}

/// Benefits section content
pub struct BenefitsSectionModel {
    pub title: String,
    pub items: Vec<String>,
}

/// Home page template
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub hero: HeroModel,
    pub about: AboutSectionModel,
    pub services: ServicesSectionModel,
    pub benefits: BenefitsSectionModel,
    pub contact: ContactModel,
}

fn build_hero(dictionary: &Dictionary) -> HeroModel {
    let slides = defaults::CAROUSEL
        .iter()
        .map(|(path, title, description)| SlideModel {
            title: dictionary.text(&format!("{}.title", path), title),
            description: dictionary.text(&format!("{}.description", path), description),
        })
        .collect();

    HeroModel {
        title: dictionary.text("hero.title", defaults::HERO_TITLE),
        subtitle: dictionary.text("hero.subtitle", defaults::HERO_SUBTITLE),
        cta: dictionary.text("hero.cta", defaults::HERO_CTA),
        apply_now: dictionary.text("hero.applyNow", defaults::HERO_APPLY_NOW),
        learn_more: dictionary.text("hero.learnMore", defaults::HERO_LEARN_MORE),
        slides,
    }
}

/// GET /{locale}
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;

    let hero = build_hero(dictionary);
    let about = AboutSectionModel {
        title: dictionary.text("about.title", defaults::ABOUT_TITLE),
        description: dictionary.text("about.description", defaults::ABOUT_DESCRIPTION),
        mission: dictionary.text("about.mission", defaults::ABOUT_MISSION),
    };
    let services = ServicesSectionModel {
        title: dictionary.text("services.title", defaults::SERVICES_TITLE),
        cards: defaults::SERVICES
            .iter()
            .map(|(path, title, description)| ServiceCardModel {
                title: dictionary.text(&format!("{}.title", path), title),
                description: dictionary.text(&format!("{}.description", path), description),
            })
            .collect(),
    };
    let benefits = BenefitsSectionModel {
        title: dictionary.text("benefits.title", defaults::BENEFITS_TITLE),
        items: defaults::BENEFITS
            .iter()
            .map(|(path, default)| dictionary.text(path, default))
            .collect(),
    };

    let template = HomeTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "",
            &hero.title,
        ),
        hero,
        about,
        services,
        benefits,
        contact: ContactModel::build(&state, dictionary),
    };
    Ok(Html(template.render()?))
}
