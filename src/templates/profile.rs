//! User profile archetype

use super::builder::*;
use super::{slot, strict_slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[("profile", 1.0), ("account", 0.8)],
    components: &[
        ("avatar", 0.3),
        ("bio", 0.15),
        ("follower", 0.15),
        ("photo", 0.1),
        ("post", 0.1),
    ],
};

const AVATAR_SIZE: f64 = 96.0;

const STATS: [(&str, &str); 3] = [("248", "Posts"), ("12.4k", "Followers"), ("318", "Following")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSlots {
    pub name: String,
    pub bio: String,
    pub action_label: String,
}

impl ProfileSlots {
    pub const DEFAULT_NAME: &'static str = "Jane Cooper";
    pub const DEFAULT_BIO: &'static str = "Product designer and coffee enthusiast";
    pub const DEFAULT_ACTION_LABEL: &'static str = "Edit Profile";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            name: strict_slot(hints, 0, Self::DEFAULT_NAME),
            bio: strict_slot(hints, 1, Self::DEFAULT_BIO),
            action_label: slot(hints, 2, Self::DEFAULT_ACTION_LABEL),
        }
    }

    pub fn handle(&self) -> String {
        let handle: String = self
            .name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        format!("@{}", handle)
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = ProfileSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let mut builder = ScreenBuilder::new(*viewport);
    let frame = app_chrome(
        &mut builder,
        theme,
        "Profile",
        &["Home", "Explore", "Profile"],
        "Profile",
    );

    let cover_height = match breakpoint {
        Breakpoint::Narrow => 140.0,
        Breakpoint::Wide | Breakpoint::Desktop => 200.0,
    };
    let mut y = frame.top;

    builder.push(rect(frame.left, y, frame.width, cover_height, theme.primary, theme.primary, theme.radius));
    // Avatar sits inside the bottom-left corner of the cover
    builder.push(avatar(
        frame.left + 16.0,
        y + cover_height - AVATAR_SIZE - 12.0,
        AVATAR_SIZE,
        &slots.name,
    ));
    y += cover_height + 16.0;

    builder.push(heading(frame.left, y, frame.width, 32.0, &slots.name, 24.0, theme.text));
    y += 36.0;
    builder.push(text(frame.left, y, frame.width, 20.0, &slots.handle(), 15.0, theme.muted));
    y += 28.0;
    builder.push(text(frame.left, y, frame.width, 44.0, &slots.bio, 15.0, theme.text));
    y += 56.0;

    let stats_frame = frame.centered(480.0);
    let (stat_width, xs) = stats_frame.columns(STATS.len(), 8.0);
    let stats: Vec<Element> = xs
        .iter()
        .zip(STATS)
        .flat_map(|(x, (value, label))| {
            vec![
                heading(*x, y, stat_width, 28.0, value, 20.0, theme.text).with_prop("align", "center"),
                text(*x, y + 30.0, stat_width, 18.0, label, 13.0, theme.muted).with_prop("align", "center"),
            ]
        })
        .collect();
    builder.push_group(stats);
    y += 64.0;

    let action_width = match breakpoint {
        Breakpoint::Narrow => frame.width,
        Breakpoint::Wide | Breakpoint::Desktop => 240f64.min(frame.width),
    };
    builder.push(button(frame.left, y, action_width, 44.0, &slots.action_label, "outline"));
    y += 44.0 + 24.0;

    let columns = match breakpoint {
        Breakpoint::Narrow => 3,
        Breakpoint::Wide => 4,
        Breakpoint::Desktop => 5,
    };
    let (tile, xs) = frame.columns(columns, 4.0);
    if tile <= 0.0 {
        return builder.finish();
    }
    'rows: loop {
        for x in &xs {
            if !builder.push(image(*x, y, tile, tile).with_prop("role", "photo")) {
                break 'rows;
            }
        }
        y += tile + 4.0;
    }

    builder.finish()
}
