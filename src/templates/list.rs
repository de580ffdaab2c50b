//! List / feed archetype

use super::builder::*;
use super::{slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[
        ("list", 1.0),
        ("feed", 1.0),
        ("inbox", 1.0),
        ("catalog", 1.0),
        ("directory", 1.0),
    ],
    components: &[
        ("item", 0.2),
        ("row", 0.15),
        ("search", 0.2),
        ("filter", 0.15),
        ("thumbnail", 0.1),
    ],
};

const MAX_ITEMS: usize = 12;

const EXTRA_ITEMS: [&str; 9] = [
    "Budget Planning",
    "Client Workshop",
    "Quarterly Review",
    "Code Freeze",
    "Product Demo",
    "Hiring Sync",
    "Book Club",
    "Release Party",
    "Offsite Prep",
];

const SUBTITLES: [&str; 4] = ["Today, 9:00 AM", "Today, 11:30 AM", "Tomorrow, 2:00 PM", "Friday, 4:15 PM"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSlots {
    pub title: String,
    pub first_item: String,
    pub second_item: String,
    pub third_item: String,
}

impl ListSlots {
    pub const DEFAULT_TITLE: &'static str = "Discover";
    pub const DEFAULT_FIRST_ITEM: &'static str = "Morning Run";
    pub const DEFAULT_SECOND_ITEM: &'static str = "Team Standup";
    pub const DEFAULT_THIRD_ITEM: &'static str = "Design Review";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            title: slot(hints, 0, Self::DEFAULT_TITLE),
            first_item: slot(hints, 1, Self::DEFAULT_FIRST_ITEM),
            second_item: slot(hints, 2, Self::DEFAULT_SECOND_ITEM),
            third_item: slot(hints, 3, Self::DEFAULT_THIRD_ITEM),
        }
    }

    fn items(&self) -> impl Iterator<Item = &str> {
        [
            self.first_item.as_str(),
            self.second_item.as_str(),
            self.third_item.as_str(),
        ]
        .into_iter()
        .chain(EXTRA_ITEMS)
        .take(MAX_ITEMS)
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = ListSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let mut builder = ScreenBuilder::new(*viewport);
    let frame = app_chrome(
        &mut builder,
        theme,
        &slots.title,
        &["Discover", "Saved", "Profile"],
        "Discover",
    );

    let mut y = frame.top;
    builder.push(search_bar(frame.left, y, frame.width, 44.0, "Search"));
    y += 44.0 + 24.0;

    let columns = match breakpoint {
        Breakpoint::Narrow => 1,
        Breakpoint::Wide => 2,
        Breakpoint::Desktop => 3,
    };
    let item_height = if columns == 1 { 72.0 } else { 88.0 };
    let (item_width, xs) = frame.columns(columns, 16.0);

    for (index, title) in slots.items().enumerate() {
        let column = index % columns;
        if index > 0 && column == 0 {
            y += item_height + 12.0;
        }
        let x = xs[column];
        let subtitle = SUBTITLES[index % SUBTITLES.len()];
        let thumb = item_height - 24.0;
        let row = vec![
            rect(x, y, item_width, item_height, theme.surface, theme.border, theme.radius),
            image(x + 12.0, y + 12.0, thumb, thumb),
            text(x + thumb + 24.0, y + 14.0, item_width - thumb - 36.0, 20.0, title, 16.0, theme.text)
                .with_prop("fontWeight", "bold"),
            text(x + thumb + 24.0, y + 38.0, item_width - thumb - 36.0, 18.0, subtitle, 13.0, theme.muted),
        ];
        if !builder.push_group(row) {
            break;
        }
    }

    builder.finish()
}
