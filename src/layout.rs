//! Automatic arrangement of elements
//!
//! Stacks, rows and grids. Pinned chrome keeps its geometry, and when an
//! id allow-list is given only the listed elements move.

use crate::error::{ComposerError, Result};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SPACING: f64 = 16.0;
pub const DEFAULT_PADDING: f64 = 16.0;
pub const DEFAULT_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
    Grid,
}

impl FromStr for Direction {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vertical" | "column" | "col" => Ok(Direction::Vertical),
            "horizontal" | "row" => Ok(Direction::Horizontal),
            "grid" => Ok(Direction::Grid),
            other => Err(ComposerError::option(
                "direction",
                format!("'{}' (expected vertical, horizontal or grid)", other),
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Vertical => write!(f, "vertical"),
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Grid => write!(f, "grid"),
        }
    }
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    #[default]
    Stretch,
}

impl FromStr for Align {
    type Err = ComposerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Ok(Align::Start),
            "center" | "centre" => Ok(Align::Center),
            "stretch" => Ok(Align::Stretch),
            other => Err(ComposerError::option(
                "align",
                format!("'{}' (expected start, center or stretch)", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Padding as written by the caller: one number or four sides
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Sides(Insets),
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Uniform(DEFAULT_PADDING)
    }
}

impl Padding {
    pub fn insets(&self) -> Insets {
        match *self {
            Padding::Uniform(value) => Insets::uniform(value),
            Padding::Sides(insets) => insets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub direction: Direction,
    pub spacing: f64,
    pub padding: Padding,
    pub align: Align,
    pub columns: usize,
    /// Only elements with one of these ids are arranged
    pub element_ids: Option<Vec<String>>,
    /// Extra offset added to the top padding
    pub start_y: Option<f64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            spacing: DEFAULT_SPACING,
            padding: Padding::default(),
            align: Align::default(),
            columns: DEFAULT_COLUMNS,
            element_ids: None,
            start_y: None,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ComposerError::option(
                "spacing",
                format!("must be a non-negative number, got {}", self.spacing),
            ));
        }
        let insets = self.padding.insets();
        for (side, value) in [
            ("top", insets.top),
            ("right", insets.right),
            ("bottom", insets.bottom),
            ("left", insets.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ComposerError::option(
                    "padding",
                    format!("{} must be a non-negative number, got {}", side, value),
                ));
            }
        }
        if let Some(start_y) = self.start_y {
            if !start_y.is_finite() {
                return Err(ComposerError::option("start_y", "must be a finite number"));
            }
        }
        Ok(())
    }

    fn selects(&self, element: &Element) -> bool {
        if element.is_pinned() {
            return false;
        }
        match (&self.element_ids, &element.id) {
            (None, _) => true,
            (Some(ids), Some(id)) => ids.iter().any(|candidate| candidate == id),
            (Some(_), None) => false,
        }
    }
}

/// Content box left after padding
#[derive(Debug, Clone, Copy)]
struct Area {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

pub fn auto_layout(elements: &[Element], width: f64, height: f64, options: &LayoutOptions) -> Result<Vec<Element>> {
    let viewport = Viewport::new(width, height)?;
    options.validate()?;

    let mut output = elements.to_vec();
    let selected: Vec<usize> = output
        .iter()
        .enumerate()
        .filter(|(_, e)| options.selects(e))
        .map(|(i, _)| i)
        .collect();

    if selected.is_empty() {
        log::debug!("auto_layout: nothing to arrange among {} element(s)", elements.len());
        return Ok(output);
    }

    let insets = options.padding.insets();
    let top = insets.top + options.start_y.unwrap_or(0.0);
    let area = Area {
        left: insets.left,
        top,
        width: viewport.width - insets.left - insets.right,
        height: viewport.height - top - insets.bottom,
    };
    if area.width <= 0.0 {
        return Err(ComposerError::option(
            "padding",
            format!("leaves no horizontal room on a {}px wide screen", viewport.width),
        ));
    }

    log::debug!(
        "auto_layout: {} {} element(s), spacing {}, align {:?}",
        options.direction,
        selected.len(),
        options.spacing,
        options.align
    );

    match options.direction {
        Direction::Vertical => stack_vertical(&mut output, &selected, area, options),
        Direction::Horizontal => stack_horizontal(&mut output, &selected, area, options),
        Direction::Grid => arrange_grid(&mut output, &selected, area, options),
    }

    Ok(output)
}

fn stack_vertical(elements: &mut [Element], selected: &[usize], area: Area, options: &LayoutOptions) {
    let mut y = area.top;
    for &index in selected {
        let element = &mut elements[index];
        match options.align {
            Align::Start => element.x = area.left,
            Align::Center => element.x = area.left + ((area.width - element.width) / 2.0).max(0.0),
            Align::Stretch => {
                element.x = area.left;
                element.width = area.width;
            }
        }
        element.y = y;
        y += element.height + options.spacing;
    }
}

fn stack_horizontal(elements: &mut [Element], selected: &[usize], area: Area, options: &LayoutOptions) {
    let mut x = area.left;
    for &index in selected {
        let element = &mut elements[index];
        match options.align {
            Align::Start => element.y = area.top,
            Align::Center => element.y = area.top + ((area.height - element.height) / 2.0).max(0.0),
            Align::Stretch => {
                element.y = area.top;
                if area.height > 0.0 {
                    element.height = area.height;
                }
            }
        }
        element.x = x;
        x += element.width + options.spacing;
    }
}

fn arrange_grid(elements: &mut [Element], selected: &[usize], area: Area, options: &LayoutOptions) {
    let columns = options.columns.max(1);
    let gaps = options.spacing * (columns as f64 - 1.0);
    let cell_width = ((area.width - gaps) / columns as f64).floor().max(1.0);

    let mut y = area.top;
    for row in selected.chunks(columns) {
        let mut row_height: f64 = 0.0;
        for (column, &index) in row.iter().enumerate() {
            let element = &mut elements[index];
            let cell_x = area.left + column as f64 * (cell_width + options.spacing);
            match options.align {
                Align::Start => {
                    element.width = element.width.min(cell_width);
                    element.x = cell_x;
                }
                Align::Center => {
                    element.width = element.width.min(cell_width);
                    element.x = cell_x + ((cell_width - element.width) / 2.0).floor();
                }
                Align::Stretch => {
                    element.width = cell_width;
                    element.x = cell_x;
                }
            }
            element.y = y;
            row_height = row_height.max(element.height);
        }
        y += row_height + options.spacing;
    }
}
