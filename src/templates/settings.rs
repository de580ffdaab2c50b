//! Settings archetype

use super::builder::*;
use super::{slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[
        ("settings", 1.0),
        ("setting", 1.0),
        ("preferences", 1.0),
        ("configuration", 1.0),
    ],
    components: &[
        ("toggle", 0.25),
        ("switch", 0.2),
        ("notification", 0.15),
        ("language", 0.1),
        ("dark", 0.1),
    ],
};

const ROW_HEIGHT: f64 = 52.0;
const ROW_GAP: f64 = 8.0;

const ACCOUNT_ROWS: [&str; 3] = ["Edit Profile", "Privacy", "Help & Support"];
const CATEGORIES: [&str; 5] = ["General", "Account", "Privacy", "Notifications", "About"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSlots {
    pub first_toggle: String,
    pub second_toggle: String,
    pub third_toggle: String,
}

impl SettingsSlots {
    pub const DEFAULT_FIRST_TOGGLE: &'static str = "Notifications";
    pub const DEFAULT_SECOND_TOGGLE: &'static str = "Dark Mode";
    pub const DEFAULT_THIRD_TOGGLE: &'static str = "Location Services";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            first_toggle: slot(hints, 0, Self::DEFAULT_FIRST_TOGGLE),
            second_toggle: slot(hints, 1, Self::DEFAULT_SECOND_TOGGLE),
            third_toggle: slot(hints, 2, Self::DEFAULT_THIRD_TOGGLE),
        }
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = SettingsSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let mut builder = ScreenBuilder::new(*viewport);

    let frame = match breakpoint {
        Breakpoint::Desktop => {
            app_chrome(&mut builder, theme, "Settings", &CATEGORIES, "General").centered(720.0)
        }
        Breakpoint::Narrow | Breakpoint::Wide => app_chrome(
            &mut builder,
            theme,
            "Settings",
            &["Home", "Search", "Settings"],
            "Settings",
        )
        .centered(600.0),
    };

    let mut y = frame.top;
    builder.push(section_header(&frame, y, "PREFERENCES", theme));
    y += 32.0;

    let toggles = [
        (&slots.first_toggle, true),
        (&slots.second_toggle, false),
        (&slots.third_toggle, true),
    ];
    for (label, checked) in toggles {
        if !builder.push(toggle(frame.left, y, frame.width, ROW_HEIGHT, label, checked)) {
            break;
        }
        y += ROW_HEIGHT + ROW_GAP;
    }

    y += 16.0;
    builder.push(section_header(&frame, y, "ACCOUNT", theme));
    y += 32.0;

    for label in ACCOUNT_ROWS {
        let row = vec![
            rect(frame.left, y, frame.width, ROW_HEIGHT, theme.surface, theme.border, theme.radius),
            text(frame.left + 16.0, y + 16.0, frame.width - 64.0, 20.0, label, 16.0, theme.text),
            text(frame.right() - 32.0, y + 16.0, 16.0, 20.0, "›", 16.0, theme.muted),
        ];
        if !builder.push_group(row) {
            break;
        }
        y += ROW_HEIGHT + ROW_GAP;
    }

    y += 16.0;
    builder.push(
        button(frame.left, y, frame.width, 48.0, "Sign Out", "outline").with_prop("tone", "destructive"),
    );

    builder.finish()
}

fn section_header(frame: &Frame, y: f64, label: &str, theme: &Theme) -> Element {
    text(frame.left, y, frame.width, 20.0, label, 13.0, theme.muted).with_prop("fontWeight", "bold")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_at(width: f64, height: f64, hints: &[String]) -> Vec<Element> {
        generate(&Viewport::new(width, height).unwrap(), &FLAT, hints)
    }

    fn toggle_labels(elements: &[Element]) -> Vec<&str> {
        elements
            .iter()
            .filter(|e| e.is_type(kinds::TOGGLE))
            .filter_map(|e| e.prop_str("label"))
            .collect()
    }

    #[test]
    fn test_default_toggles() {
        let elements = generate_at(393.0, 852.0, &[]);
        assert_eq!(
            toggle_labels(&elements),
            vec!["Notifications", "Dark Mode", "Location Services"]
        );
    }

    #[test]
    fn test_hints_rename_toggles() {
        let hints = vec!["Auto Backup".to_string(), "Cellular Sync".to_string()];
        let elements = generate_at(393.0, 852.0, &hints);
        assert_eq!(
            toggle_labels(&elements),
            vec!["Auto Backup", "Cellular Sync", "Location Services"]
        );
    }

    #[test]
    fn test_desktop_uses_sidebar_and_caps_width() {
        let elements = generate_at(1440.0, 900.0, &[]);
        assert!(elements.iter().any(|e| e.is_type(kinds::SIDEBAR)));

        let first = elements.iter().find(|e| e.is_type(kinds::TOGGLE)).unwrap();
        assert_eq!(first.width, 720.0);
        assert!(first.x >= SIDEBAR_WIDTH);
    }

    #[test]
    fn test_sign_out_button() {
        let elements = generate_at(834.0, 1194.0, &[]);
        let sign_out = elements.iter().find(|e| e.is_type(kinds::BUTTON)).unwrap();
        assert_eq!(sign_out.prop_str("label"), Some("Sign Out"));
        assert_eq!(sign_out.width, 600.0);
    }
}
