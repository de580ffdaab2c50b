//! Onboarding / welcome archetype

use super::builder::*;
use super::{slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[
        ("onboarding", 1.0),
        ("welcome", 1.0),
        ("walkthrough", 1.0),
        ("tutorial", 1.0),
        ("intro", 0.8),
        ("splash", 0.8),
    ],
    components: &[
        ("step", 0.2),
        ("skip", 0.15),
        ("progress", 0.15),
        ("illustration", 0.15),
        ("pagination", 0.1),
    ],
};

const PAGES: usize = 3;
const DOT_SIZE: f64 = 8.0;
const DOT_GAP: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSlots {
    pub headline: String,
    pub body: String,
    pub button_label: String,
}

impl OnboardingSlots {
    pub const DEFAULT_HEADLINE: &'static str = "Welcome Aboard";
    pub const DEFAULT_BODY: &'static str = "Everything you need, all in one place";
    pub const DEFAULT_BUTTON_LABEL: &'static str = "Get Started";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            headline: slot(hints, 0, Self::DEFAULT_HEADLINE),
            body: slot(hints, 1, Self::DEFAULT_BODY),
            button_label: slot(hints, 2, Self::DEFAULT_BUTTON_LABEL),
        }
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = OnboardingSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let padding = side_padding(breakpoint);
    let mut builder = ScreenBuilder::new(*viewport);

    builder.push(
        button(viewport.width - padding - 64.0, 16.0, 64.0, 32.0, "Skip", "ghost").with_prop("role", "skip"),
    );

    let frame = match breakpoint {
        Breakpoint::Desktop => {
            // Illustration fills the left half, copy sits in the right half
            let half = (viewport.width / 2.0).floor();
            let art = (half - padding * 2.0).min(viewport.height - 160.0).max(0.0);
            builder.push(
                image(
                    ((half - art) / 2.0).floor(),
                    ((viewport.height - art) / 2.0).floor(),
                    art,
                    art,
                )
                .with_prop("role", "illustration"),
            );
            let column = Frame {
                left: half + padding,
                width: half - padding * 2.0,
                top: 0.0,
            }
            .centered(480.0);
            Frame {
                top: ((viewport.height - 320.0) / 2.0).floor().max(64.0),
                ..column
            }
        }
        Breakpoint::Narrow | Breakpoint::Wide => {
            let column = Frame {
                left: padding,
                width: viewport.width - padding * 2.0,
                top: 64.0,
            }
            .centered(560.0);
            let art = column.width.min(viewport.height * 0.4).floor();
            builder.push(
                image(column.left + ((column.width - art) / 2.0).floor(), column.top, art, art)
                    .with_prop("role", "illustration"),
            );
            Frame {
                top: column.top + art + 32.0,
                ..column
            }
        }
    };

    let mut y = frame.top;
    builder.push(
        heading(frame.left, y, frame.width, 40.0, &slots.headline, 28.0, theme.text).with_prop("align", "center"),
    );
    y += 52.0;
    builder.push(
        text(frame.left, y, frame.width, 48.0, &slots.body, 16.0, theme.muted).with_prop("align", "center"),
    );
    y += 48.0 + 32.0;

    let dots_width = PAGES as f64 * DOT_SIZE + (PAGES - 1) as f64 * DOT_GAP;
    let dots_left = frame.left + ((frame.width - dots_width) / 2.0).floor();
    let dots = (0..PAGES)
        .map(|i| {
            let fill = if i == 0 { theme.primary } else { theme.border };
            rect(
                dots_left + i as f64 * (DOT_SIZE + DOT_GAP),
                y,
                DOT_SIZE,
                DOT_SIZE,
                fill,
                fill,
                DOT_SIZE / 2.0,
            )
            .with_prop("role", "page-indicator")
        })
        .collect();
    builder.push_group(dots);
    y += DOT_SIZE + 32.0;

    builder.push(button(frame.left, y, frame.width, 52.0, &slots.button_label, "primary"));
    y += 52.0 + 12.0;
    builder.push(button(frame.left, y, frame.width, 40.0, "I already have an account", "ghost"));

    builder.finish()
}
