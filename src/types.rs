//! Core types and constants for the mockup composer

use crate::error::{ComposerError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// Pinned chrome threshold
pub const PINNED_Z_INDEX: i32 = 10;

// Breakpoints
pub const WIDE_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

// Chrome metrics
pub const NAV_BAR_HEIGHT: f64 = 56.0;
pub const TAB_BAR_HEIGHT: f64 = 64.0;
pub const SIDEBAR_WIDTH: f64 = 240.0;

// Tolerance used by the bounds filter
pub const BOUNDS_TOLERANCE: f64 = 1.0;

/// Element type names used by the built-in generators
pub mod kinds {
    pub const RECTANGLE: &str = "rectangle";
    pub const TEXT: &str = "text";
    pub const BUTTON: &str = "button";
    pub const INPUT: &str = "input";
    pub const IMAGE: &str = "image";
    pub const NAVBAR: &str = "navbar";
    pub const TABBAR: &str = "tabbar";
    pub const SIDEBAR: &str = "sidebar";
    pub const TOGGLE: &str = "toggle";
    pub const CHECKBOX: &str = "checkbox";
    pub const SEARCH: &str = "search";
    pub const CHART: &str = "chart";
    pub const AVATAR: &str = "avatar";
    pub const SOCIAL_BUTTON: &str = "social_button";
    pub const TEXTAREA: &str = "textarea";

    /// Types that count as form controls when placing follow-up elements
    pub const FORM_CONTROLS: &[&str] = &[
        INPUT, TEXTAREA, BUTTON, CHECKBOX, TOGGLE, SOCIAL_BUTTON,
    ];
}

/// A positioned UI element. Elements are plain values: the composer never
/// assigns identity, `id` is carried through untouched when a caller sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Element {
    pub fn new(element_type: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            element_type: element_type.to_string(),
            x,
            y,
            width,
            height,
            z_index: 0,
            properties: BTreeMap::new(),
            id: None,
        }
    }

    pub fn with_z(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Chrome elements (nav bars, tab bars) are never moved by layout passes
    pub fn is_pinned(&self) -> bool {
        self.z_index >= PINNED_Z_INDEX
    }

    pub fn is_type(&self, element_type: &str) -> bool {
        self.element_type == element_type
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Whether the element has an area and lies inside a `width` x `height` screen
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.has_area()
            && self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= width + BOUNDS_TOLERANCE
            && self.bottom() <= height + BOUNDS_TOLERANCE
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Positive-area intersection; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Responsive width class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Narrow,
    Wide,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= WIDE_MIN_WIDTH {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakpoint::Narrow => write!(f, "narrow"),
            Breakpoint::Wide => write!(f, "wide"),
            Breakpoint::Desktop => write!(f, "desktop"),
        }
    }
}

/// Validated screen dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ComposerError::dimensions(width, height, "dimensions must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ComposerError::dimensions(width, height, "dimensions must be positive"));
        }
        Ok(Self { width, height })
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.width)
    }
}

/// A screen as handed over by the store: dimensions plus its elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub elements: Vec<Element>,
}
