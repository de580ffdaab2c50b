//! Dashboard archetype: stat cards, a chart and an activity feed

use super::builder::*;
use super::{slot, KeywordProfile};
use crate::types::*;

pub const PROFILE: KeywordProfile = KeywordProfile {
    screen: &[
        ("dashboard", 1.0),
        ("analytics", 1.0),
        ("overview", 0.8),
        ("admin", 0.8),
    ],
    components: &[
        ("chart", 0.25),
        ("stat", 0.25),
        ("metric", 0.15),
        ("graph", 0.15),
        ("card", 0.1),
        ("table", 0.1),
    ],
};

const CARD_HEIGHT: f64 = 100.0;
const ROW_HEIGHT: f64 = 56.0;

const CARD_VALUES: [&str; 4] = ["12,480", "$48,295", "1,024", "3.6%"];

const ACTIVITY: [(&str, &str, &str); 5] = [
    ("Olivia Martin", "Upgraded to Pro", "2m ago"),
    ("Jackson Lee", "Exported a report", "18m ago"),
    ("Isabella Nguyen", "Invited 3 teammates", "1h ago"),
    ("William Kim", "Closed ticket #482", "3h ago"),
    ("Sofia Davis", "Renewed subscription", "Yesterday"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSlots {
    pub card1_title: String,
    pub card2_title: String,
    pub chart_label: String,
    pub activity_title: String,
    pub card3_title: String,
    pub card4_title: String,
}

impl DashboardSlots {
    pub const DEFAULT_CARD1_TITLE: &'static str = "Total Users";
    pub const DEFAULT_CARD2_TITLE: &'static str = "Revenue";
    pub const DEFAULT_CHART_LABEL: &'static str = "Weekly Overview";
    pub const DEFAULT_ACTIVITY_TITLE: &'static str = "Recent Activity";
    pub const DEFAULT_CARD3_TITLE: &'static str = "Active Sessions";
    pub const DEFAULT_CARD4_TITLE: &'static str = "Conversion Rate";

    pub fn from_hints(hints: &[String]) -> Self {
        Self {
            card1_title: slot(hints, 0, Self::DEFAULT_CARD1_TITLE),
            card2_title: slot(hints, 1, Self::DEFAULT_CARD2_TITLE),
            chart_label: slot(hints, 2, Self::DEFAULT_CHART_LABEL),
            activity_title: slot(hints, 3, Self::DEFAULT_ACTIVITY_TITLE),
            card3_title: slot(hints, 4, Self::DEFAULT_CARD3_TITLE),
            card4_title: slot(hints, 5, Self::DEFAULT_CARD4_TITLE),
        }
    }

    fn card_titles(&self) -> [&str; 4] {
        [
            &self.card1_title,
            &self.card2_title,
            &self.card3_title,
            &self.card4_title,
        ]
    }
}

pub fn generate(viewport: &Viewport, theme: &Theme, hints: &[String]) -> Vec<Element> {
    let slots = DashboardSlots::from_hints(hints);
    let breakpoint = viewport.breakpoint();
    let mut builder = ScreenBuilder::new(*viewport);
    let frame = app_chrome(
        &mut builder,
        theme,
        "Dashboard",
        &["Home", "Reports", "Users", "Settings"],
        "Home",
    );

    let card_count = match breakpoint {
        Breakpoint::Narrow => 2,
        Breakpoint::Wide => 3,
        Breakpoint::Desktop => 4,
    };
    let (card_width, xs) = frame.columns(card_count, 16.0);
    let mut y = frame.top;

    for ((x, title), value) in xs.iter().zip(slots.card_titles()).zip(CARD_VALUES) {
        builder.push_group(vec![
            rect(*x, y, card_width, CARD_HEIGHT, theme.surface, theme.border, theme.radius),
            text(x + 16.0, y + 16.0, card_width - 32.0, 20.0, title, 14.0, theme.muted),
            heading(x + 16.0, y + 44.0, card_width - 32.0, 36.0, value, 28.0, theme.text),
        ]);
    }
    y += CARD_HEIGHT + 24.0;

    let chart_height = match breakpoint {
        Breakpoint::Narrow => 200.0,
        Breakpoint::Wide | Breakpoint::Desktop => 260.0,
    };

    // Desktop puts the activity feed beside the chart, otherwise below it
    let (chart_width, activity_left, activity_width, activity_top) = match breakpoint {
        Breakpoint::Desktop => {
            let chart_width = ((frame.width - 24.0) * 0.62).floor();
            (
                chart_width,
                frame.left + chart_width + 24.0,
                frame.width - chart_width - 24.0,
                y,
            )
        }
        Breakpoint::Narrow | Breakpoint::Wide => {
            (frame.width, frame.left, frame.width, y + 32.0 + chart_height + 24.0)
        }
    };

    builder.push(heading(frame.left, y, chart_width, 24.0, &slots.chart_label, 18.0, theme.text));
    builder.push(chart(frame.left, y + 32.0, chart_width, chart_height, "line", &slots.chart_label));

    let mut row_y = activity_top;
    builder.push(heading(
        activity_left,
        row_y,
        activity_width,
        24.0,
        &slots.activity_title,
        18.0,
        theme.text,
    ));
    row_y += 36.0;

    for (name, action, when) in ACTIVITY {
        let detail = format!("{} · {}", action, when);
        let row = vec![
            avatar(activity_left, row_y + 10.0, 36.0, name),
            text(activity_left + 48.0, row_y + 8.0, activity_width - 48.0, 20.0, name, 15.0, theme.text),
            text(activity_left + 48.0, row_y + 30.0, activity_width - 48.0, 18.0, &detail, 13.0, theme.muted),
        ];
        if !builder.push_group(row) {
            break;
        }
        row_y += ROW_HEIGHT + 8.0;
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_at(width: f64, height: f64, hints: &[String]) -> Vec<Element> {
        generate(&Viewport::new(width, height).unwrap(), &FLAT, hints)
    }

    fn card_titles(elements: &[Element]) -> Vec<String> {
        // Card titles are the muted 14px labels sitting 16px inside a card
        elements
            .iter()
            .filter(|e| {
                e.is_type(kinds::TEXT)
                    && e.properties.get("fontSize").and_then(|v| v.as_f64()) == Some(14.0)
            })
            .filter_map(|e| e.prop_str("content").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_default_card_titles() {
        let elements = generate_at(1440.0, 900.0, &[]);
        assert_eq!(
            card_titles(&elements),
            vec!["Total Users", "Revenue", "Active Sessions", "Conversion Rate"]
        );
    }

    #[test]
    fn test_visible_cards_by_breakpoint() {
        assert_eq!(card_titles(&generate_at(393.0, 852.0, &[])).len(), 2);
        assert_eq!(card_titles(&generate_at(834.0, 1194.0, &[])).len(), 3);
        assert_eq!(card_titles(&generate_at(1440.0, 900.0, &[])).len(), 4);
    }

    #[test]
    fn test_hint_order() {
        let hints: Vec<String> = ["Monthly Revenue", "Active Subscribers", "Churn Trend"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let elements = generate_at(393.0, 852.0, &hints);

        assert_eq!(card_titles(&elements), vec!["Monthly Revenue", "Active Subscribers"]);
        let chart = elements.iter().find(|e| e.is_type(kinds::CHART)).unwrap();
        assert_eq!(chart.prop_str("label"), Some("Churn Trend"));
    }

    #[test]
    fn test_chrome_by_breakpoint() {
        let narrow = generate_at(393.0, 852.0, &[]);
        assert!(narrow.iter().any(|e| e.is_type(kinds::TABBAR)));
        assert!(!narrow.iter().any(|e| e.is_type(kinds::SIDEBAR)));

        let desktop = generate_at(1440.0, 900.0, &[]);
        assert!(desktop.iter().any(|e| e.is_type(kinds::SIDEBAR)));
        assert!(!desktop.iter().any(|e| e.is_type(kinds::TABBAR)));
    }

    #[test]
    fn test_content_stays_above_tab_bar() {
        let elements = generate_at(393.0, 852.0, &[]);
        let tab_top = 852.0 - TAB_BAR_HEIGHT;
        for e in elements.iter().filter(|e| !e.is_pinned()) {
            assert!(e.bottom() <= tab_top + 1.0, "{:?}", e);
        }
    }
}
