//! Built-in screen templates
//!
//! The catalog is an ordered registry of generator functions. Declaration
//! order matters: the matcher breaks score ties in favour of the template
//! registered first.

pub mod builder;

mod dashboard;
mod form;
mod list;
mod login;
mod onboarding;
mod profile;
mod settings;

pub use builder::Theme;
pub use dashboard::DashboardSlots;
pub use form::FormSlots;
pub use list::ListSlots;
pub use login::LoginSlots;
pub use onboarding::OnboardingSlots;
pub use profile::ProfileSlots;
pub use settings::SettingsSlots;

use crate::error::Result;
use crate::keywords;
use crate::types::*;
use builder::{heading, navbar, text, ScreenBuilder};

pub type GenerateFn = fn(&Viewport, &Theme, &[String]) -> Vec<Element>;

/// Keyword weights a template responds to. Screen keywords are synonyms, so
/// only the strongest one present counts; component weights add up.
#[derive(Debug, Clone, Copy)]
pub struct KeywordProfile {
    pub screen: &'static [(&'static str, f64)],
    pub components: &'static [(&'static str, f64)],
}

impl KeywordProfile {
    pub fn max_weight(&self) -> f64 {
        let screen = self.screen.iter().map(|(_, w)| *w).fold(0.0, f64::max);
        let components: f64 = self.components.iter().map(|(_, w)| *w).sum();
        screen + components
    }

    pub fn matched_weight(&self, present: &[&str]) -> f64 {
        let screen = self
            .screen
            .iter()
            .filter(|(k, _)| present.contains(k))
            .map(|(_, w)| *w)
            .fold(0.0, f64::max);
        let components: f64 = self
            .components
            .iter()
            .filter(|(k, _)| present.contains(k))
            .map(|(_, w)| *w)
            .sum();
        screen + components
    }
}

pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub profile: KeywordProfile,
    build: GenerateFn,
}

impl Template {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        profile: KeywordProfile,
        build: GenerateFn,
    ) -> Self {
        Self {
            name,
            description,
            profile,
            build,
        }
    }

    /// Generate the template for a `width` x `height` screen. Elements that
    /// leave the screen or have no area at this size are omitted.
    pub fn generate(&self, width: f64, height: f64, style: &str, hints: &[String]) -> Result<Vec<Element>> {
        let viewport = Viewport::new(width, height)?;
        let theme = Theme::from_style(style);

        log::debug!(
            "Generating '{}' at {}x{} ({}), theme '{}', {} hint(s)",
            self.name,
            width,
            height,
            viewport.breakpoint(),
            theme.name,
            hints.len()
        );

        let elements = (self.build)(&viewport, &theme, hints)
            .into_iter()
            .filter(|e| e.fits_within(viewport.width, viewport.height))
            .collect();
        Ok(elements)
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

pub static CATALOG: [Template; 7] = [
    Template {
        name: "login",
        description: "Sign-in / sign-up form with credentials and a primary action",
        profile: login::PROFILE,
        build: login::generate,
    },
    Template {
        name: "dashboard",
        description: "Stat cards, a chart and a recent-activity feed",
        profile: dashboard::PROFILE,
        build: dashboard::generate,
    },
    Template {
        name: "settings",
        description: "Grouped preference toggles and account rows",
        profile: settings::PROFILE,
        build: settings::generate,
    },
    Template {
        name: "list",
        description: "Searchable list or grid of items",
        profile: list::PROFILE,
        build: list::generate,
    },
    Template {
        name: "form",
        description: "Data-entry form with labelled fields and a submit button",
        profile: form::PROFILE,
        build: form::generate,
    },
    Template {
        name: "profile",
        description: "User profile with avatar, bio, stats and a photo grid",
        profile: profile::PROFILE,
        build: profile::generate,
    },
    Template {
        name: "onboarding",
        description: "Welcome step with illustration, pager dots and a call to action",
        profile: onboarding::PROFILE,
        build: onboarding::generate,
    },
];

pub fn get_template(name: &str) -> Option<&'static Template> {
    CATALOG.iter().find(|t| t.name == name)
}

pub fn available_templates() -> Vec<&'static str> {
    CATALOG.iter().map(|t| t.name).collect()
}

/// Hint `index`, or `default` when the hint is missing or blank
pub(crate) fn slot(hints: &[String], index: usize, default: &str) -> String {
    hints
        .get(index)
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Like [`slot`], but a lone generic word ("User") keeps the default
pub(crate) fn strict_slot(hints: &[String], index: usize, default: &str) -> String {
    let hint = slot(hints, index, default);
    let mut words = hint.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) if keywords::is_generic_hint_word(word) => default.to_string(),
        _ => hint,
    }
}

/// Screen used when no template matches: a pinned title bar and the raw
/// description as a text block.
pub fn fallback_screen(viewport: &Viewport, style: &str, title: &str, description: &str) -> Vec<Element> {
    let theme = Theme::from_style(style);
    let padding = builder::side_padding(viewport.breakpoint());
    let width = viewport.width - padding * 2.0;
    let mut builder = ScreenBuilder::new(*viewport);

    builder.push_chrome(navbar(viewport, title, &theme));
    let body = if description.trim().is_empty() {
        "Describe the screen to generate".to_string()
    } else {
        description.trim().to_string()
    };
    builder.push(
        text(padding, NAV_BAR_HEIGHT + 24.0, width, 120.0, &body, 16.0, theme.text)
            .with_prop("role", "description"),
    );
    builder.push(
        heading(padding, NAV_BAR_HEIGHT + 160.0, width, 20.0, "No template matched", 13.0, theme.muted),
    );
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORTS: [(f64, f64); 3] = [(393.0, 852.0), (834.0, 1194.0), (1440.0, 900.0)];

    fn hints(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(
            available_templates(),
            vec!["login", "dashboard", "settings", "list", "form", "profile", "onboarding"]
        );
    }

    #[test]
    fn test_get_template() {
        let template = get_template("dashboard").unwrap();
        assert_eq!(template.name, "dashboard");
        assert!(!template.description.is_empty());
        assert!(get_template("kanban").is_none());
    }

    #[test]
    fn test_profiles_reference_known_keywords() {
        for template in &CATALOG {
            for (keyword, weight) in template.profile.screen.iter().chain(template.profile.components) {
                assert!(keywords::is_keyword(keyword), "{}: '{}' unknown", template.name, keyword);
                assert!(*weight > 0.0);
            }
            assert!(template.profile.max_weight() > 0.0);
        }
    }

    #[test]
    fn test_every_template_fits_every_viewport() {
        for template in &CATALOG {
            for (width, height) in VIEWPORTS {
                let elements = template.generate(width, height, "flat", &[]).unwrap();
                assert!(
                    elements.len() >= 5,
                    "{} at {}x{} produced {} elements",
                    template.name,
                    width,
                    height,
                    elements.len()
                );
                for e in &elements {
                    assert!(e.x >= 0.0 && e.y >= 0.0, "{} {:?}", template.name, e);
                    assert!(e.right() <= width + 1.0, "{} {:?}", template.name, e);
                    assert!(e.bottom() <= height + 1.0, "{} {:?}", template.name, e);
                    assert!(e.width > 0.0 && e.height > 0.0, "{} {:?}", template.name, e);
                }
            }
        }
    }

    #[test]
    fn test_templates_fit_small_screens() {
        for template in &CATALOG {
            let elements = template.generate(320.0, 300.0, "ios", &[]).unwrap();
            for e in &elements {
                assert!(e.fits_within(320.0, 300.0), "{} {:?}", template.name, e);
            }
        }
    }

    #[test]
    fn test_templates_survive_tiny_screens() {
        for template in &CATALOG {
            for width in [1.0, 10.0, 30.0, 60.0, 120.0, 200.0] {
                for height in [40.0, 852.0] {
                    let elements = template.generate(width, height, "flat", &[]).unwrap();
                    for e in &elements {
                        assert!(e.fits_within(width, height), "{} at {}x{}: {:?}", template.name, width, height, e);
                    }
                }
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for template in &CATALOG {
            let a = template.generate(393.0, 852.0, "material", &hints(&["Alpha Beta"])).unwrap();
            let b = template.generate(393.0, 852.0, "material", &hints(&["Alpha Beta"])).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_generate_rejects_bad_dimensions() {
        let template = get_template("login").unwrap();
        assert!(template.generate(-393.0, 852.0, "flat", &[]).is_err());
        assert!(template.generate(393.0, 0.0, "flat", &[]).is_err());
        assert!(template.generate(f64::INFINITY, 852.0, "flat", &[]).is_err());
    }

    #[test]
    fn test_slot_helpers() {
        let values = hints(&["Quarterly Sales", "", "User"]);
        assert_eq!(slot(&values, 0, "Default"), "Quarterly Sales");
        assert_eq!(slot(&values, 1, "Default"), "Default");
        assert_eq!(slot(&values, 5, "Default"), "Default");
        assert_eq!(slot(&values, 2, "Default"), "User");
        assert_eq!(strict_slot(&values, 2, "Jane Cooper"), "Jane Cooper");
        assert_eq!(strict_slot(&values, 0, "Default"), "Quarterly Sales");
    }

    #[test]
    fn test_fallback_screen() {
        let viewport = Viewport::new(393.0, 852.0).unwrap();
        let elements = fallback_screen(&viewport, "flat", "Rotating Globe", "a 3D rotating globe");

        assert!(elements[0].is_pinned());
        assert_eq!(elements[0].prop_str("title"), Some("Rotating Globe"));
        assert_eq!(elements[1].prop_str("content"), Some("a 3D rotating globe"));
    }
}
