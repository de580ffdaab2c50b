//! Shared building blocks for the screen templates

use crate::types::*;
use serde_json::{json, Value};

/// Colour and shape palette selected by the style string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: &'static str,
    pub on_primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub radius: f64,
}

pub const FLAT: Theme = Theme {
    name: "flat",
    primary: "#4F46E5",
    on_primary: "#FFFFFF",
    background: "#FFFFFF",
    surface: "#F8FAFC",
    border: "#E2E8F0",
    text: "#1A1A2E",
    muted: "#64748B",
    radius: 8.0,
};

pub const WIREFRAME: Theme = Theme {
    name: "wireframe",
    primary: "#333333",
    on_primary: "#FFFFFF",
    background: "#FFFFFF",
    surface: "#F5F5F5",
    border: "#DDDDDD",
    text: "#333333",
    muted: "#888888",
    radius: 0.0,
};

pub const MATERIAL: Theme = Theme {
    name: "material",
    primary: "#6200EE",
    on_primary: "#FFFFFF",
    background: "#FFFFFF",
    surface: "#F5F5F5",
    border: "#E0E0E0",
    text: "#212121",
    muted: "#757575",
    radius: 4.0,
};

pub const IOS: Theme = Theme {
    name: "ios",
    primary: "#007AFF",
    on_primary: "#FFFFFF",
    background: "#F2F2F7",
    surface: "#FFFFFF",
    border: "#C6C6C8",
    text: "#000000",
    muted: "#8E8E93",
    radius: 12.0,
};

impl Theme {
    /// Unknown styles fall back to the flat theme
    pub fn from_style(style: &str) -> Self {
        match style.trim().to_lowercase().as_str() {
            "wireframe" | "sketch" => WIREFRAME,
            "material" | "android" => MATERIAL,
            "ios" | "cupertino" => IOS,
            _ => FLAT,
        }
    }
}

/// Collects template output, omitting anything that would spill past the
/// bottom of the usable area or has no area left at this viewport.
pub struct ScreenBuilder {
    viewport: Viewport,
    limit: f64,
    elements: Vec<Element>,
}

impl ScreenBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            limit: viewport.height,
            elements: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bottom edge available to content (above a tab bar, for instance)
    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.min(self.viewport.height);
    }

    pub fn fits(&self, bottom: f64) -> bool {
        bottom <= self.limit + BOUNDS_TOLERANCE
    }

    /// Push a content element; returns false when it was omitted
    pub fn push(&mut self, element: Element) -> bool {
        if element.has_area() && self.fits(element.bottom()) {
            self.elements.push(element);
            true
        } else {
            log::trace!(
                "Omitting {} at y={} (limit {})",
                element.element_type,
                element.y,
                self.limit
            );
            false
        }
    }

    /// Push a group of elements only if all of them fit. Members squeezed
    /// to nothing are dropped from the group.
    pub fn push_group(&mut self, group: Vec<Element>) -> bool {
        let group: Vec<Element> = group.into_iter().filter(Element::has_area).collect();
        let bottom = group.iter().map(Element::bottom).fold(0.0, f64::max);
        if group.is_empty() || !self.fits(bottom) {
            return false;
        }
        self.elements.extend(group);
        true
    }

    /// Chrome is only bounded by the screen itself
    pub fn push_chrome(&mut self, element: Element) {
        if element.has_area() && element.bottom() <= self.viewport.height + BOUNDS_TOLERANCE {
            self.elements.push(element);
        }
    }

    pub fn finish(self) -> Vec<Element> {
        self.elements
    }
}

/// Horizontal content band plus the y where content starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub width: f64,
    pub top: f64,
}

impl Frame {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Narrow the frame to at most `max_width`, centred in the current band
    pub fn centered(&self, max_width: f64) -> Frame {
        if self.width <= max_width {
            return *self;
        }
        Frame {
            left: (self.left + (self.width - max_width) / 2.0).floor(),
            width: max_width,
            top: self.top,
        }
    }

    /// Split into `count` equal columns separated by `gap`
    pub fn columns(&self, count: usize, gap: f64) -> (f64, Vec<f64>) {
        let count = count.max(1);
        let column_width = ((self.width - gap * (count as f64 - 1.0)) / count as f64).floor();
        let xs = (0..count)
            .map(|i| self.left + i as f64 * (column_width + gap))
            .collect();
        (column_width, xs)
    }
}

pub fn side_padding(breakpoint: Breakpoint) -> f64 {
    match breakpoint {
        Breakpoint::Narrow => 16.0,
        Breakpoint::Wide | Breakpoint::Desktop => 32.0,
    }
}

/// Navigation bar on top, plus a sidebar on desktop or a tab bar otherwise.
/// Returns the content frame left over.
pub fn app_chrome(
    builder: &mut ScreenBuilder,
    theme: &Theme,
    title: &str,
    sections: &[&str],
    active: &str,
) -> Frame {
    let viewport = builder.viewport();
    let breakpoint = viewport.breakpoint();
    let padding = side_padding(breakpoint);

    builder.push_chrome(navbar(&viewport, title, theme));

    match breakpoint {
        Breakpoint::Desktop => {
            builder.push_chrome(sidebar(&viewport, sections, active, theme));
            let left = SIDEBAR_WIDTH + padding;
            Frame {
                left,
                width: viewport.width - left - padding,
                top: NAV_BAR_HEIGHT + 24.0,
            }
        }
        Breakpoint::Narrow | Breakpoint::Wide => {
            builder.push_chrome(tabbar(&viewport, sections, active, theme));
            builder.set_limit(viewport.height - TAB_BAR_HEIGHT);
            Frame {
                left: padding,
                width: viewport.width - padding * 2.0,
                top: NAV_BAR_HEIGHT + 24.0,
            }
        }
    }
}

pub fn rect(x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, radius: f64) -> Element {
    Element::new(kinds::RECTANGLE, x, y, w, h)
        .with_prop("fill", fill)
        .with_prop("stroke", stroke)
        .with_prop("cornerRadius", radius)
}

pub fn text(x: f64, y: f64, w: f64, h: f64, content: &str, size: f64, color: &str) -> Element {
    Element::new(kinds::TEXT, x, y, w, h)
        .with_prop("content", content)
        .with_prop("fontSize", size)
        .with_prop("fontWeight", "normal")
        .with_prop("color", color)
        .with_prop("align", "left")
}

pub fn heading(x: f64, y: f64, w: f64, h: f64, content: &str, size: f64, color: &str) -> Element {
    text(x, y, w, h, content, size, color).with_prop("fontWeight", "bold")
}

pub fn button(x: f64, y: f64, w: f64, h: f64, label: &str, variant: &str) -> Element {
    let size = if h >= 48.0 { "lg" } else if h <= 32.0 { "sm" } else { "md" };
    Element::new(kinds::BUTTON, x, y, w, h)
        .with_prop("label", label)
        .with_prop("variant", variant)
        .with_prop("size", size)
}

pub fn input(x: f64, y: f64, w: f64, h: f64, label: &str, placeholder: &str, input_type: &str) -> Element {
    Element::new(kinds::INPUT, x, y, w, h)
        .with_prop("label", label)
        .with_prop("placeholder", placeholder)
        .with_prop("type", input_type)
}

pub fn image(x: f64, y: f64, w: f64, h: f64) -> Element {
    Element::new(kinds::IMAGE, x, y, w, h)
}

pub fn toggle(x: f64, y: f64, w: f64, h: f64, label: &str, checked: bool) -> Element {
    Element::new(kinds::TOGGLE, x, y, w, h)
        .with_prop("label", label)
        .with_prop("checked", checked)
}

pub fn checkbox(x: f64, y: f64, w: f64, h: f64, label: &str, checked: bool) -> Element {
    Element::new(kinds::CHECKBOX, x, y, w, h)
        .with_prop("label", label)
        .with_prop("checked", checked)
}

pub fn search_bar(x: f64, y: f64, w: f64, h: f64, placeholder: &str) -> Element {
    Element::new(kinds::SEARCH, x, y, w, h).with_prop("placeholder", placeholder)
}

pub fn chart(x: f64, y: f64, w: f64, h: f64, chart_type: &str, label: &str) -> Element {
    Element::new(kinds::CHART, x, y, w, h)
        .with_prop("chartType", chart_type)
        .with_prop("label", label)
}

pub fn avatar(x: f64, y: f64, size: f64, name: &str) -> Element {
    Element::new(kinds::AVATAR, x, y, size, size).with_prop("initials", initials(name))
}

pub fn navbar(viewport: &Viewport, title: &str, theme: &Theme) -> Element {
    Element::new(kinds::NAVBAR, 0.0, 0.0, viewport.width, NAV_BAR_HEIGHT)
        .with_z(PINNED_Z_INDEX)
        .with_prop("title", title)
        .with_prop("fill", theme.surface)
}

pub fn tabbar(viewport: &Viewport, tabs: &[&str], active: &str, theme: &Theme) -> Element {
    Element::new(
        kinds::TABBAR,
        0.0,
        viewport.height - TAB_BAR_HEIGHT,
        viewport.width,
        TAB_BAR_HEIGHT,
    )
    .with_z(PINNED_Z_INDEX)
    .with_prop("tabs", string_list(tabs))
    .with_prop("active", active)
    .with_prop("fill", theme.surface)
}

pub fn sidebar(viewport: &Viewport, items: &[&str], active: &str, theme: &Theme) -> Element {
    Element::new(
        kinds::SIDEBAR,
        0.0,
        NAV_BAR_HEIGHT,
        SIDEBAR_WIDTH,
        viewport.height - NAV_BAR_HEIGHT,
    )
    .with_z(PINNED_Z_INDEX)
    .with_prop("items", string_list(items))
    .with_prop("active", active)
    .with_prop("fill", theme.surface)
}

fn string_list(items: &[&str]) -> Value {
    json!(items)
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
