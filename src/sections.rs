//! Marketing-page sections
//!
//! Named, full-width blocks (navigation, hero, feature cards, stats band,
//! footer) stacked top to bottom into a single page. Each section reads its
//! copy from loose JSON props and falls back to stock text.

use crate::error::{ComposerError, Result};
use crate::templates::builder::{button, heading, rect, text, FLAT};
use crate::types::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const NAVY: &str = "#1A1A2E";
const FOOTER_FILL: &str = "#0F0F1A";
const LINK_MUTED: &str = "#A5B4FC";
const HERO_SUBTITLE: &str = "#C7D2FE";
const STATS_BAND: &str = "#EEF2FF";
const FOOTER_TEXT: &str = "#475569";
const WHITE: &str = "#FFFFFF";

const SECTION_NAV_HEIGHT: f64 = 60.0;
const FEATURE_CARD_HEIGHT: f64 = 200.0;
const STAT_ROW_HEIGHT: f64 = 104.0;

pub type SectionProps = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionRequest {
    pub name: String,
    #[serde(default)]
    pub props: SectionProps,
}

impl SectionRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            props: SectionProps::new(),
        }
    }

    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
    pub elements: Vec<Element>,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedSections {
    pub elements: Vec<Element>,
    pub height: f64,
}

pub type SectionFn = fn(f64, f64, &SectionProps) -> SectionOutput;

pub struct Section {
    pub name: &'static str,
    pub description: &'static str,
    build: SectionFn,
}

impl Section {
    pub fn build(&self, width: f64, y: f64, props: &SectionProps) -> SectionOutput {
        (self.build)(width, y, props)
    }
}

pub static SECTIONS: [Section; 5] = [
    Section {
        name: "navbar",
        description: "Pinned site navigation with brand, links and a call to action",
        build: navbar_section,
    },
    Section {
        name: "hero",
        description: "Full-width banner with a headline, subtitle and optional button",
        build: hero_section,
    },
    Section {
        name: "features",
        description: "Grid of feature cards",
        build: features_section,
    },
    Section {
        name: "stats",
        description: "Band of headline numbers",
        build: stats_section,
    },
    Section {
        name: "footer",
        description: "Brand, copyright and legal links",
        build: footer_section,
    },
];

pub fn get_section(name: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.name == name)
}

pub fn available_sections() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.name).collect()
}

/// Stack the requested sections from y = 0 downwards
pub fn compose_sections(width: f64, requests: &[SectionRequest]) -> Result<ComposedSections> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ComposerError::option(
            "width",
            format!("must be a positive number, got {}", width),
        ));
    }

    let mut elements = Vec::new();
    let mut y = 0.0;
    for request in requests {
        let section = get_section(&request.name).ok_or_else(|| ComposerError::UnknownSection {
            name: request.name.clone(),
        })?;
        let output = section.build(width, y, &request.props);
        log::debug!(
            "Section '{}' at y={}: {} element(s), {}px tall",
            section.name,
            y,
            output.elements.len(),
            output.height
        );
        elements.extend(output.elements);
        y += output.height;
    }

    Ok(ComposedSections { elements, height: y })
}

fn prop_str<'a>(props: &'a SectionProps, key: &str, default: &'a str) -> &'a str {
    props.get(key).and_then(Value::as_str).unwrap_or(default)
}

fn prop_strings(props: &SectionProps, key: &str, default: &[&str]) -> Vec<String> {
    match props.get(key).and_then(Value::as_array) {
        Some(values) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => default.iter().map(|s| s.to_string()).collect(),
    }
}

/// Pairs read from an array of objects, e.g. `[{"title": .., "description": ..}]`
fn prop_pairs(
    props: &SectionProps,
    key: &str,
    fields: (&str, &str),
    default: &[(&str, &str)],
) -> Vec<(String, String)> {
    match props.get(key).and_then(Value::as_array) {
        Some(values) => values
            .iter()
            .filter_map(|v| {
                let first = v.get(fields.0)?.as_str()?;
                let second = v.get(fields.1).and_then(Value::as_str).unwrap_or("");
                Some((first.to_string(), second.to_string()))
            })
            .collect(),
        None => default
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

fn margin(width: f64) -> f64 {
    match Breakpoint::from_width(width) {
        Breakpoint::Narrow => 16.0,
        Breakpoint::Wide => 32.0,
        Breakpoint::Desktop => 48.0,
    }
}

fn columns_for(width: f64, desktop: usize) -> usize {
    match Breakpoint::from_width(width) {
        Breakpoint::Narrow => 1,
        Breakpoint::Wide => 2,
        Breakpoint::Desktop => desktop,
    }
}

fn navbar_section(width: f64, y: f64, props: &SectionProps) -> SectionOutput {
    let brand = prop_str(props, "brand", "Acme Corp");
    let active = prop_str(props, "active", "Home");
    let cta = prop_str(props, "cta", "Get Started");
    let links = prop_strings(props, "links", &["Home", "About", "Services", "Portfolio", "Contact"]);
    let side = margin(width);

    let mut elements = vec![
        rect(0.0, y, width, SECTION_NAV_HEIGHT, NAVY, NAVY, 0.0).with_z(PINNED_Z_INDEX),
        heading(side, y + 16.0, 180f64.min(width / 2.0), 28.0, brand, 20.0, WHITE).with_z(PINNED_Z_INDEX + 1),
    ];

    match Breakpoint::from_width(width) {
        Breakpoint::Narrow => {
            elements.push(
                button(width - side - 72.0, y + 14.0, 72.0, 32.0, "Menu", "ghost").with_z(PINNED_Z_INDEX + 1),
            );
        }
        Breakpoint::Wide | Breakpoint::Desktop => {
            let link_width = 88.0;
            let row_width = link_width * links.len() as f64;
            let mut x = ((width - row_width) / 2.0).floor().max(side + 180.0);
            for link in &links {
                let color = if link == active { WHITE } else { LINK_MUTED };
                elements.push(
                    text(x, y + 18.0, link_width - 8.0, 24.0, link, 14.0, color).with_z(PINNED_Z_INDEX + 1),
                );
                x += link_width;
            }
            elements.push(
                button(width - side - 120.0, y + 14.0, 120.0, 32.0, cta, "outline").with_z(PINNED_Z_INDEX + 1),
            );
        }
    }

    SectionOutput {
        elements,
        height: SECTION_NAV_HEIGHT,
    }
}

fn hero_section(width: f64, y: f64, props: &SectionProps) -> SectionOutput {
    let title = prop_str(props, "title", "Build Better Products Faster");
    let subtitle = prop_str(
        props,
        "subtitle",
        "We help businesses transform their digital presence with cutting-edge solutions.",
    );
    let fill = prop_str(props, "background", FLAT.primary);
    let cta = props.get("cta").and_then(Value::as_str);

    let side = margin(width);
    let narrow = Breakpoint::from_width(width) == Breakpoint::Narrow;
    let title_size = if narrow { 32.0 } else { 44.0 };
    let title_width = (width - side * 2.0).min(1040.0);
    let subtitle_width = (width - side * 2.0).min(800.0);
    let height = if cta.is_some() { 320.0 } else { 240.0 };

    let mut elements = vec![
        rect(0.0, y, width, height, fill, fill, 0.0),
        heading(((width - title_width) / 2.0).floor(), y + 56.0, title_width, 64.0, title, title_size, WHITE)
            .with_prop("align", "center"),
        text(
            ((width - subtitle_width) / 2.0).floor(),
            y + 132.0,
            subtitle_width,
            52.0,
            subtitle,
            17.0,
            HERO_SUBTITLE,
        )
        .with_prop("align", "center"),
    ];
    if let Some(label) = cta {
        let button_width = 168f64.min(width - side * 2.0);
        elements.push(button(((width - button_width) / 2.0).floor(), y + 216.0, button_width, 48.0, label, "ghost"));
    }

    SectionOutput { elements, height }
}

const DEFAULT_FEATURES: [(&str, &str); 3] = [
    (
        "Lightning Fast",
        "Deploy your apps in minutes, not hours. Infrastructure scales automatically.",
    ),
    (
        "Enterprise Security",
        "Bank-grade encryption and SOC2 compliance keeps your data safe 24/7.",
    ),
    (
        "Advanced Analytics",
        "Real-time dashboards give you actionable insights to grow the business.",
    ),
];

fn features_section(width: f64, y: f64, props: &SectionProps) -> SectionOutput {
    let items = prop_pairs(props, "items", ("title", "description"), &DEFAULT_FEATURES);
    let side = margin(width);
    let gap = 24.0;
    let columns = columns_for(width, 3);
    let card_width = ((width - side * 2.0 - gap * (columns as f64 - 1.0)) / columns as f64).floor();

    let mut elements = Vec::new();
    let mut rows = 0;
    for (index, (title, description)) in items.iter().enumerate() {
        let row = index / columns;
        let column = index % columns;
        rows = row + 1;
        let x = side + column as f64 * (card_width + gap);
        let card_y = y + gap + row as f64 * (FEATURE_CARD_HEIGHT + gap);
        elements.extend([
            rect(x, card_y, card_width, FEATURE_CARD_HEIGHT, FLAT.surface, FLAT.border, 10.0),
            heading(x + 24.0, card_y + 20.0, card_width - 48.0, 28.0, title, 18.0, NAVY),
            text(x + 24.0, card_y + 56.0, card_width - 48.0, 80.0, description, 14.0, FLAT.muted),
            text(x + 24.0, card_y + 152.0, 140.0, 24.0, "Learn more →", 14.0, FLAT.primary),
        ]);
    }

    SectionOutput {
        elements,
        height: gap + rows as f64 * (FEATURE_CARD_HEIGHT + gap),
    }
}

const DEFAULT_STATS: [(&str, &str); 4] = [
    ("500+", "Clients"),
    ("99.9%", "Uptime SLA"),
    ("10x", "Faster Deploy"),
    ("24/7", "Expert Support"),
];

fn stats_section(width: f64, y: f64, props: &SectionProps) -> SectionOutput {
    let items = prop_pairs(props, "items", ("value", "label"), &DEFAULT_STATS);
    let side = margin(width);
    let columns = match Breakpoint::from_width(width) {
        Breakpoint::Desktop => items.len().clamp(1, 4),
        Breakpoint::Narrow | Breakpoint::Wide => items.len().clamp(1, 2),
    };
    let rows = (items.len() + columns - 1) / columns;
    let height = 24.0 * 2.0 + rows.max(1) as f64 * STAT_ROW_HEIGHT;
    let cell = ((width - side * 2.0) / columns as f64).floor();

    let mut elements = vec![rect(0.0, y, width, height, STATS_BAND, STATS_BAND, 0.0)];
    for (index, (value, label)) in items.iter().enumerate() {
        let x = side + (index % columns) as f64 * cell;
        let row_y = y + 24.0 + (index / columns) as f64 * STAT_ROW_HEIGHT;
        elements.extend([
            heading(x, row_y, cell, 52.0, value, 36.0, FLAT.primary).with_prop("align", "center"),
            text(x, row_y + 56.0, cell, 24.0, label, 14.0, FLAT.muted).with_prop("align", "center"),
        ]);
    }

    SectionOutput { elements, height }
}

fn footer_section(width: f64, y: f64, props: &SectionProps) -> SectionOutput {
    let brand = prop_str(props, "brand", "Acme Corp");
    let default_copyright = format!("© 2026 {}. All rights reserved.", brand);
    let copyright = prop_str(props, "copyright", &default_copyright).to_string();
    let links = prop_strings(props, "links", &["Privacy", "Terms", "Contact"]).join(" · ");
    let side = margin(width);
    let inner = width - side * 2.0;

    let (elements, height) = match Breakpoint::from_width(width) {
        Breakpoint::Narrow => {
            let height = 104.0;
            (
                vec![
                    rect(0.0, y, width, height, FOOTER_FILL, FOOTER_FILL, 0.0),
                    heading(side, y + 16.0, inner, 22.0, brand, 16.0, WHITE),
                    text(side, y + 46.0, inner, 18.0, &copyright, 13.0, FOOTER_TEXT),
                    text(side, y + 72.0, inner, 18.0, &links, 12.0, FOOTER_TEXT),
                ],
                height,
            )
        }
        Breakpoint::Wide | Breakpoint::Desktop => {
            let height = 60.0;
            let middle = (inner / 3.0).floor();
            (
                vec![
                    rect(0.0, y, width, height, FOOTER_FILL, FOOTER_FILL, 0.0),
                    heading(side, y + 15.0, middle, 22.0, brand, 16.0, WHITE),
                    text(side + middle, y + 22.0, middle, 18.0, &copyright, 13.0, FOOTER_TEXT)
                        .with_prop("align", "center"),
                    text(side + middle * 2.0, y + 22.0, middle, 18.0, &links, 12.0, FOOTER_TEXT)
                        .with_prop("align", "right"),
                ],
                height,
            )
        }
    };

    SectionOutput { elements, height }
}
