//! Login / sign-up archetype

use super::builder::*;
use super::{slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[
        ("login", 1.0),
        ("signin", 1.0),
        ("signup", 1.0),
        ("register", 1.0),
        ("registration", 1.0),
        ("auth", 1.0),
        ("authentication", 1.0),
    ],
    components: &[
        ("email", 0.2),
        ("password", 0.25),
        ("username", 0.15),
        ("remember", 0.1),
        ("forgot", 0.1),
        ("social", 0.1),
    ],
};

// Height of the stacked form block, used to centre it vertically
const FORM_BLOCK_HEIGHT: f64 = 416.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSlots {
    pub headline: String,
    pub button_label: String,
}

impl LoginSlots {
    pub const DEFAULT_HEADLINE: &'static str = "Welcome Back";
    pub const DEFAULT_BUTTON_LABEL: &'static str = "Sign In";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            headline: slot(hints, 0, Self::DEFAULT_HEADLINE),
            button_label: slot(hints, 1, Self::DEFAULT_BUTTON_LABEL),
        }
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = LoginSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let mut builder = ScreenBuilder::new(*viewport);
    let half = (viewport.width / 2.0).floor();

    let (left, width) = match breakpoint {
        Breakpoint::Narrow => (24.0, viewport.width - 48.0),
        Breakpoint::Wide => {
            let width = 400f64.min(viewport.width - 128.0);
            (((viewport.width - width) / 2.0).floor(), width)
        }
        Breakpoint::Desktop => {
            let width = 400f64.min(half - 96.0);
            (half + ((half - width) / 2.0).floor(), width)
        }
    };
    let top = match breakpoint {
        Breakpoint::Narrow => 120.0,
        Breakpoint::Wide | Breakpoint::Desktop => {
            ((viewport.height - FORM_BLOCK_HEIGHT) / 2.0).floor().max(80.0)
        }
    };

    match breakpoint {
        Breakpoint::Desktop => {
            builder.push(rect(0.0, 0.0, half, viewport.height, theme.primary, theme.primary, 0.0));
            builder.push(heading(48.0, top, half - 96.0, 48.0, "Your Brand", 36.0, theme.on_primary));
            builder.push(text(
                48.0,
                top + 64.0,
                half - 96.0,
                56.0,
                "Everything your team needs, in one place.",
                18.0,
                theme.on_primary,
            ));
        }
        Breakpoint::Wide => {
            builder.push(rect(
                left - 32.0,
                top - 32.0,
                width + 64.0,
                FORM_BLOCK_HEIGHT + 64.0,
                theme.surface,
                theme.border,
                theme.radius * 2.0,
            ));
        }
        Breakpoint::Narrow => {}
    }

    let mut y = top;
    builder.push(image(left, y, 56.0, 56.0).with_prop("role", "logo"));
    y += 80.0;
    builder.push(heading(left, y, width, 40.0, &slots.headline, 28.0, theme.text));
    y += 48.0;
    builder.push(text(left, y, width, 24.0, "Sign in to your account", 15.0, theme.muted));
    y += 40.0;
    builder.push(input(left, y, width, 48.0, "Email", "you@example.com", "email"));
    y += 64.0;
    builder.push(input(left, y, width, 48.0, "Password", "••••••••", "password"));
    y += 64.0;

    let forgot_width = 140f64.min(width);
    builder.push(
        text(left + width - forgot_width, y, forgot_width, 20.0, "Forgot password?", 14.0, theme.primary)
            .with_prop("align", "right"),
    );
    y += 36.0;
    builder.push(button(left, y, width, 48.0, &slots.button_label, "primary"));
    y += 64.0;
    builder.push(
        text(left, y, width, 20.0, "Don't have an account? Sign up", 14.0, theme.muted)
            .with_prop("align", "center"),
    );

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_at(width: f64, height: f64, hints: &[String]) -> Vec<Element> {
        generate(&Viewport::new(width, height).unwrap(), &FLAT, hints)
    }

    #[test]
    fn test_defaults() {
        let elements = generate_at(393.0, 852.0, &[]);

        let headline = elements.iter().find(|e| e.prop_str("fontWeight") == Some("bold")).unwrap();
        assert_eq!(headline.prop_str("content"), Some("Welcome Back"));

        let submit = elements.iter().find(|e| e.is_type(kinds::BUTTON)).unwrap();
        assert_eq!(submit.prop_str("label"), Some("Sign In"));
        assert_eq!(submit.prop_str("variant"), Some("primary"));
    }

    #[test]
    fn test_hints_fill_slots_in_order() {
        let hints = vec!["Hello Again".to_string(), "Let Me In".to_string()];
        let slots = LoginSlots::from_hints(&hints);
        assert_eq!(slots.headline, "Hello Again");
        assert_eq!(slots.button_label, "Let Me In");

        let slots = LoginSlots::from_hints(&hints[..1]);
        assert_eq!(slots.button_label, LoginSlots::DEFAULT_BUTTON_LABEL);
    }

    #[test]
    fn test_has_credentials_inputs() {
        let elements = generate_at(393.0, 852.0, &[]);
        let types: Vec<_> = elements
            .iter()
            .filter(|e| e.is_type(kinds::INPUT))
            .filter_map(|e| e.prop_str("type"))
            .collect();
        assert_eq!(types, vec!["email", "password"]);
    }

    #[test]
    fn test_desktop_has_brand_panel() {
        let elements = generate_at(1440.0, 900.0, &[]);
        let panel = &elements[0];
        assert!(panel.is_type(kinds::RECTANGLE));
        assert_eq!(panel.width, 720.0);

        let email = elements.iter().find(|e| e.is_type(kinds::INPUT)).unwrap();
        assert!(email.x >= 720.0);
    }

    #[test]
    fn test_wide_form_is_centered_card() {
        let elements = generate_at(834.0, 1194.0, &[]);
        let email = elements.iter().find(|e| e.is_type(kinds::INPUT)).unwrap();
        assert_eq!(email.width, 400.0);
        assert_eq!(email.x, 217.0);
    }
}
