//! Data-entry form archetype

use super::builder::*;
use super::{slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[
        ("contact", 1.0),
        ("survey", 1.0),
        ("feedback", 1.0),
        ("questionnaire", 1.0),
        ("form", 0.6),
    ],
    components: &[
        ("name", 0.2),
        ("email", 0.15),
        ("phone", 0.15),
        ("message", 0.2),
        ("dropdown", 0.1),
        ("checkbox", 0.1),
    ],
};

const FIELD_HEIGHT: f64 = 48.0;
const FIELD_GAP: f64 = 16.0;
const MESSAGE_HEIGHT: f64 = 120.0;

// (label, placeholder, input type)
const FIELDS: [(&str, &str, &str); 3] = [
    ("Name", "Jane Cooper", "text"),
    ("Email", "jane@example.com", "email"),
    ("Phone", "+1 555 0100", "tel"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSlots {
    pub title: String,
    pub submit_label: String,
}

impl FormSlots {
    pub const DEFAULT_TITLE: &'static str = "Contact Us";
    pub const DEFAULT_SUBMIT_LABEL: &'static str = "Send Message";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            title: slot(hints, 0, Self::DEFAULT_TITLE),
            submit_label: slot(hints, 1, Self::DEFAULT_SUBMIT_LABEL),
        }
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = FormSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let padding = side_padding(breakpoint);
    let mut builder = ScreenBuilder::new(*viewport);

    builder.push_chrome(navbar(viewport, &slots.title, theme));

    let top = NAV_BAR_HEIGHT + 24.0;
    let frame = match breakpoint {
        Breakpoint::Narrow => Frame {
            left: padding,
            width: viewport.width - padding * 2.0,
            top,
        },
        Breakpoint::Wide => Frame {
            left: padding,
            width: viewport.width - padding * 2.0,
            top,
        }
        .centered(560.0),
        Breakpoint::Desktop => {
            // Info panel on the left third, form on the right
            let panel_width = ((viewport.width - padding * 3.0) / 3.0).floor();
            builder.push(rect(padding, top, panel_width, 320.0, theme.surface, theme.border, theme.radius));
            builder.push(heading(padding + 24.0, top + 24.0, panel_width - 48.0, 32.0, "Get in touch", 22.0, theme.text));
            builder.push(text(
                padding + 24.0,
                top + 72.0,
                panel_width - 48.0,
                64.0,
                "We usually answer within one business day.",
                15.0,
                theme.muted,
            ));
            builder.push(text(padding + 24.0, top + 152.0, panel_width - 48.0, 20.0, "hello@example.com", 15.0, theme.primary));
            builder.push(text(padding + 24.0, top + 184.0, panel_width - 48.0, 20.0, "+1 555 0100", 15.0, theme.primary));

            let left = padding * 2.0 + panel_width;
            Frame {
                left,
                width: viewport.width - left - padding,
                top,
            }
            .centered(560.0)
        }
    };

    let mut y = frame.top;
    builder.push(heading(frame.left, y, frame.width, 36.0, &slots.title, 26.0, theme.text));
    y += 44.0;
    builder.push(text(
        frame.left,
        y,
        frame.width,
        40.0,
        "Fill in the details below and we'll get back to you.",
        15.0,
        theme.muted,
    ));
    y += 56.0;

    for (label, placeholder, input_type) in FIELDS {
        builder.push(input(frame.left, y, frame.width, FIELD_HEIGHT, label, placeholder, input_type));
        y += FIELD_HEIGHT + FIELD_GAP;
    }

    builder.push(
        Element::new(kinds::TEXTAREA, frame.left, y, frame.width, MESSAGE_HEIGHT)
            .with_prop("label", "Message")
            .with_prop("placeholder", "How can we help?"),
    );
    y += MESSAGE_HEIGHT + FIELD_GAP;

    builder.push(checkbox(frame.left, y, frame.width, 24.0, "Subscribe to product updates", false));
    y += 24.0 + 24.0;

    builder.push(button(frame.left, y, frame.width, 48.0, &slots.submit_label, "primary"));

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
        let title = elements.iter().find(|e| e.is_type(kinds::TEXT)).unwrap();
        assert_eq!(title.prop_str("content"), Some("Contact Us"));

        let submit = elements.iter().find(|e| e.is_type(kinds::BUTTON)).unwrap();
        assert_eq!(submit.prop_str("label"), Some("Send Message"));
    }

    #[test]
    fn test_fields_in_order() {
        let elements = generate_at(393.0, 852.0, &[]);
        let labels: Vec<_> = elements
            .iter()
            .filter(|e| e.is_type(kinds::INPUT) || e.is_type(kinds::TEXTAREA))
            .filter_map(|e| e.prop_str("label"))
            .collect();
        assert_eq!(labels, vec!["Name", "Email", "Phone", "Message"]);

        let ys: Vec<f64> = elements
            .iter()
            .filter(|e| e.is_type(kinds::INPUT))
            .map(|e| e.y)
            .collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hints() {
        let hints = vec!["Request A Quote".to_string(), "Get Quote".to_string()];
        let elements = generate_at(834.0, 1194.0, &hints);
        let navbar = elements.iter().find(|e| e.is_type(kinds::NAVBAR)).unwrap();
        assert_eq!(navbar.prop_str("title"), Some("Request A Quote"));
        let submit = elements.iter().find(|e| e.is_type(kinds::BUTTON)).unwrap();
        assert_eq!(submit.prop_str("label"), Some("Get Quote"));
        assert_eq!(submit.width, 560.0);
    }

    #[test]
    fn test_desktop_info_panel() {
        let elements = generate_at(1440.0, 900.0, &[]);
        let panel = elements.iter().find(|e| e.is_type(kinds::RECTANGLE)).unwrap();
        let first_input = elements.iter().find(|e| e.is_type(kinds::INPUT)).unwrap();
        assert!(first_input.x > panel.right());
    }
}
