//! Mockup Screen Composer
//!
//! Turns a short natural-language description of a UI screen ("login screen
//! with email and password") into a positioned list of UI elements, and
//! rearranges existing element collections into stacks, rows and grids.
//!
//! # Features
//!
//! - Keyword-driven description parsing with content hints
//! - Seven responsive screen templates (login, dashboard, settings, list,
//!   form, profile, onboarding)
//! - Keyword-triggered augmentation (social sign-in, search, charts, ...)
//! - Vertical, horizontal and grid auto-layout
//! - Greedy overlap resolution that respects pinned chrome
//! - Marketing-page section composer
//!
//! # Basic Usage
//!
//! ```rust
//! use mockc::{generate_screen, Result};
//!
//! fn main() -> Result<()> {
//!     let screen = generate_screen("login screen with email and password", 393.0, 852.0, "flat")?;
//!     assert_eq!(screen.match_info.template.as_deref(), Some("login"));
//!     Ok(())
//! }
//! ```
//!
//! # Composition Pipeline
//!
//! 1. **Parse**: tokenize the description, classify keywords, extract hints
//! 2. **Match**: score every template and pick the best one
//! 3. **Generate**: build the template (or the fallback screen) for the viewport
//! 4. **Augment**: add elements the description asked for explicitly
//! 5. **Resolve** (optional): push partially overlapping elements apart
//! 6. **Bounds**: drop anything that does not fit on the screen

pub mod augment;
pub mod cli;
pub mod error;
pub mod keywords;
pub mod layout;
pub mod matcher;
pub mod overlap;
pub mod parser;
pub mod sections;
pub mod templates;
pub mod types;

use serde::{Deserialize, Serialize};

pub use augment::augment_elements;
pub use cli::ComposerCli;
pub use error::{ComposerError, Result};
pub use layout::{auto_layout, Align, Direction, Insets, LayoutOptions, Padding};
pub use matcher::{match_template, Confidence, MatchResult, TemplateMatcher};
pub use overlap::resolve_overlaps;
pub use parser::{parse_description, DescriptionParser, ParseResult};
pub use sections::{compose_sections, ComposedSections, SectionRequest};
pub use templates::{available_templates, get_template, Template, Theme};
pub use types::*;

/// Composer version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub const BUILD_INFO: ComposerInfo = ComposerInfo {
    version: VERSION,
    name: NAME,
    description: DESCRIPTION,
    supported_features: &[
        "templates",
        "content-hints",
        "augmentation",
        "auto-layout",
        "overlap-resolution",
        "sections",
        "themes",
    ],
};

#[derive(Debug, Clone)]
pub struct ComposerInfo {
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub supported_features: &'static [&'static str],
}

/// Pipeline settings shared by the library entry points and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerOptions {
    /// Screen width in points
    pub width: f64,

    /// Screen height in points
    pub height: f64,

    /// Theme name (flat, wireframe, material, ios)
    pub style: String,

    /// Run the overlap resolver on the generated screen
    pub resolve_overlaps: bool,

    /// Defaults for the `layout` command
    pub layout: LayoutOptions,

    /// Log every pipeline phase at info level
    pub debug_mode: bool,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            width: 393.0,
            height: 852.0,
            style: "flat".to_string(),
            resolve_overlaps: false,
            layout: LayoutOptions::default(),
            debug_mode: false,
        }
    }
}

/// Output of [`generate_screen`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedScreen {
    pub elements: Vec<Element>,
    pub match_info: MatchResult,
    pub name_hint: String,
}

/// Generate a screen for `description` with default pipeline settings
pub fn generate_screen(description: &str, width: f64, height: f64, style: &str) -> Result<GeneratedScreen> {
    let options = ComposerOptions {
        width,
        height,
        style: style.to_string(),
        ..ComposerOptions::default()
    };
    generate_screen_with_options(description, &options)
}

pub fn generate_screen_with_options(description: &str, options: &ComposerOptions) -> Result<GeneratedScreen> {
    let viewport = Viewport::new(options.width, options.height)?;

    if options.debug_mode {
        log::info!("{} v{}", NAME, VERSION);
        log::info!(
            "Generating '{}' at {}x{} ({})",
            description,
            viewport.width,
            viewport.height,
            viewport.breakpoint()
        );
    }

    // Phase 1: parse
    let parsed = parse_description(description);

    // Phase 2: match
    let match_info = match_template(&parsed);

    // Phase 3: template or fallback
    let elements = match &match_info.template {
        Some(name) => {
            let template = get_template(name).ok_or_else(|| ComposerError::UnknownTemplate { name: name.clone() })?;
            template.generate(viewport.width, viewport.height, &options.style, &parsed.content_hints)?
        }
        None => {
            log::info!(
                "No template matched '{}' (score {:.3}), using fallback screen",
                description,
                match_info.score
            );
            templates::fallback_screen(&viewport, &options.style, &parsed.name_hint, description)
        }
    };
    log::debug!("Phase 3: {} element(s) from template", elements.len());

    // Phase 4: augmentation
    let mut elements = augment_elements(&elements, &parsed, viewport.width, viewport.height)?;
    log::debug!("Phase 4: {} element(s) after augmentation", elements.len());

    // Phase 5: overlap resolution
    if options.resolve_overlaps {
        elements = resolve_overlaps(&elements, viewport.width)?;
        log::debug!("Phase 5: overlaps resolved");
    }

    // Phase 6: bounds filter
    let before = elements.len();
    elements.retain(|e| e.fits_within(viewport.width, viewport.height));
    if elements.len() < before {
        log::debug!("Phase 6: dropped {} out-of-bounds element(s)", before - elements.len());
    }

    if options.debug_mode {
        log::info!(
            "Generated {} element(s) using {:?} ({} confidence)",
            elements.len(),
            match_info.template,
            match_info.confidence
        );
    }

    Ok(GeneratedScreen {
        elements,
        match_info,
        name_hint: parsed.name_hint,
    })
}

/// Check if the composer supports a named feature
pub fn supports_feature(feature: &str) -> bool {
    BUILD_INFO.supported_features.contains(&feature)
}

pub fn build_info() -> &'static ComposerInfo {
    &BUILD_INFO
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORTS: [(f64, f64); 3] = [(393.0, 852.0), (834.0, 1194.0), (1440.0, 900.0)];

    fn count(elements: &[Element], element_type: &str) -> usize {
        elements.iter().filter(|e| e.is_type(element_type)).count()
    }

    #[test]
    fn test_login_end_to_end() {
        let screen = generate_screen("login screen with email and password", 393.0, 852.0, "flat").unwrap();
        assert_eq!(screen.match_info.template.as_deref(), Some("login"));
        assert_eq!(screen.match_info.confidence, Confidence::High);
        assert_eq!(count(&screen.elements, kinds::INPUT), 2);
        assert!(screen
            .elements
            .iter()
            .any(|e| e.prop_str("label") == Some("Sign In")));
    }

    #[test]
    fn test_unmatched_description_uses_fallback() {
        let screen = generate_screen("a 3D rotating globe", 393.0, 852.0, "flat").unwrap();
        assert_eq!(screen.match_info.template, None);
        assert_eq!(screen.match_info.confidence, Confidence::Low);
        assert!(!screen.match_info.suggestions.is_empty());

        assert!(screen.elements[0].is_type(kinds::NAVBAR));
        assert_eq!(screen.elements[0].prop_str("title"), Some(screen.name_hint.as_str()));
        assert_eq!(screen.elements[1].prop_str("content"), Some("a 3D rotating globe"));
    }

    #[test]
    fn test_empty_description() {
        let screen = generate_screen("", 393.0, 852.0, "flat").unwrap();
        assert_eq!(screen.name_hint, "Screen");
        assert!(!screen.elements.is_empty());
    }

    #[test]
    fn test_dashboard_defaults() {
        let screen = generate_screen("dashboard with charts and stats", 1440.0, 900.0, "flat").unwrap();
        assert_eq!(screen.match_info.template.as_deref(), Some("dashboard"));
        assert_eq!(screen.match_info.augmentations, vec!["chart"]);
        // The template already has a chart, so augmentation adds none
        assert_eq!(count(&screen.elements, kinds::CHART), 1);
        assert!(screen
            .elements
            .iter()
            .any(|e| e.prop_str("content") == Some("Total Users")));
    }

    #[test]
    fn test_content_hints_reach_template() {
        let screen = generate_screen(
            "dashboard with Monthly Revenue, Active Subscribers and Churn Rate",
            393.0,
            852.0,
            "flat",
        )
        .unwrap();
        let contents: Vec<_> = screen.elements.iter().filter_map(|e| e.prop_str("content")).collect();
        assert!(contents.contains(&"Monthly Revenue"));
        assert!(contents.contains(&"Active Subscribers"));
        assert!(!contents.contains(&"Total Users"));
    }

    #[test]
    fn test_social_augmentation() {
        let screen = generate_screen("login with social sign in", 393.0, 852.0, "ios").unwrap();
        assert_eq!(screen.match_info.template.as_deref(), Some("login"));
        assert_eq!(count(&screen.elements, kinds::SOCIAL_BUTTON), 2);
    }

    #[test]
    fn test_every_element_fits() {
        let descriptions = [
            "login screen with email and password",
            "signup form with social buttons",
            "dashboard with charts, search and tab bar",
            "settings page with toggles and dark mode",
            "inbox list with search and filters",
            "contact form with name and email",
            "user profile with avatar and photos",
            "onboarding walkthrough with skip",
            "a 3D rotating globe with navbar",
        ];
        for description in descriptions {
            for (width, height) in VIEWPORTS {
                let screen = generate_screen(description, width, height, "material").unwrap();
                assert!(!screen.elements.is_empty(), "{}", description);
                for e in &screen.elements {
                    assert!(e.fits_within(width, height), "{} at {}x{}: {:?}", description, width, height, e);
                }
            }
        }
    }

    #[test]
    fn test_tiny_viewports_yield_valid_elements() {
        let descriptions = [
            "user profile with avatar",
            "dashboard with charts, search and tab bar",
            "settings page with toggles",
            "inbox list with search",
            "login with social sign in and navbar",
            "onboarding walkthrough",
        ];
        for description in descriptions {
            for width in [1.0, 30.0, 60.0, 200.0] {
                let options = ComposerOptions {
                    width,
                    height: 852.0,
                    resolve_overlaps: true,
                    ..ComposerOptions::default()
                };
                let screen = generate_screen_with_options(description, &options).unwrap();
                for e in &screen.elements {
                    assert!(e.width > 0.0 && e.height > 0.0, "{} at {}: {:?}", description, width, e);
                    assert!(e.fits_within(width, 852.0), "{} at {}: {:?}", description, width, e);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_screen("user profile with avatar", 834.0, 1194.0, "wireframe").unwrap();
        let b = generate_screen("user profile with avatar", 834.0, 1194.0, "wireframe").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_overlaps_option() {
        let options = ComposerOptions {
            resolve_overlaps: true,
            ..ComposerOptions::default()
        };
        let resolved = generate_screen_with_options("settings page with toggles", &options).unwrap();
        let plain = generate_screen("settings page with toggles", 393.0, 852.0, "flat").unwrap();
        assert_eq!(resolved.match_info, plain.match_info);
        assert!(!resolved.elements.is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            generate_screen("login", 0.0, 852.0, "flat"),
            Err(ComposerError::InvalidDimensions { .. })
        ));
        assert!(generate_screen("login", 393.0, f64::INFINITY, "flat").is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let screen = generate_screen("login", 393.0, 852.0, "flat").unwrap();
        let json = serde_json::to_value(&screen).unwrap();
        assert_eq!(json["match_info"]["template"], "login");
        assert!(json["elements"][0]["type"].is_string());
        assert!(json["elements"][0].get("id").is_none());
    }

    #[test]
    fn test_build_info() {
        let info = build_info();
        assert!(!info.version.is_empty());
        assert_eq!(info.name, "mockc");
        assert!(supports_feature("auto-layout"));
        assert!(!supports_feature("nonexistent_feature"));
    }

    #[test]
    fn test_composer_options_default() {
        let options = ComposerOptions::default();
        assert_eq!(options.width, 393.0);
        assert_eq!(options.height, 852.0);
        assert_eq!(options.style, "flat");
        assert!(!options.resolve_overlaps);
        assert!(!options.debug_mode);
        assert_eq!(options.layout, LayoutOptions::default());
    }
}
