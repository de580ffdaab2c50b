//! Overlap resolution
//!
//! Greedy, order-preserving: pinned elements are fixed obstacles, every other
//! element is taken in order and pushed down below whatever it partially
//! overlaps. An element that only clips the top of pinned bottom chrome is
//! lifted above it instead when there is room. Strict containment is treated
//! as nesting and left alone; identical boxes are a conflict.

use crate::error::{ComposerError, Result};
use crate::types::*;

/// Where an element started and how far it was moved
#[derive(Debug, Clone, Copy)]
struct Displacement {
    original: Rect,
    dx: f64,
    dy: f64,
}

fn nested(a: &Rect, b: &Rect) -> bool {
    a != b && (a.contains(b) || b.contains(a))
}

fn conflicts(a: &Rect, b: &Rect) -> bool {
    a.intersects(b) && !nested(a, b)
}

/// Move above the first pinned box that starts lower and overlaps, if the
/// element then sits on screen clear of every obstacle
fn lift_above_chrome(element: &mut Element, pinned: &[Rect], obstacles: &[Rect]) -> bool {
    let rect = element.rect();
    let chrome = match pinned.iter().find(|p| p.y > rect.y && conflicts(&rect, p)) {
        Some(chrome) => chrome,
        None => return false,
    };

    let lifted = Rect::new(rect.x, chrome.y - rect.height, rect.width, rect.height);
    if lifted.y < 0.0 || obstacles.iter().any(|o| conflicts(&lifted, o)) {
        return false;
    }
    log::trace!(
        "{} at y={} clips chrome starting at {}, lifting to {}",
        element.element_type,
        element.y,
        chrome.y,
        lifted.y
    );
    element.y = lifted.y;
    true
}

/// Returns whether the element moved
fn shift_below(element: &mut Element, obstacles: &[Rect]) -> bool {
    let mut moved = false;
    // Each step moves strictly below one obstacle, so this ends
    while let Some(obstacle) = obstacles.iter().find(|o| conflicts(&element.rect(), o)) {
        log::trace!(
            "{} at y={} overlaps box ending at {}, shifting down",
            element.element_type,
            element.y,
            obstacle.bottom()
        );
        element.y = obstacle.bottom();
        moved = true;
    }
    moved
}

pub fn resolve_overlaps(elements: &[Element], width: f64) -> Result<Vec<Element>> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ComposerError::option(
            "width",
            format!("must be a positive number, got {}", width),
        ));
    }

    let mut output = elements.to_vec();
    let pinned: Vec<Rect> = output
        .iter()
        .filter(|e| e.is_pinned())
        .map(Element::rect)
        .collect();
    let mut obstacles = pinned.clone();
    let mut displacements: Vec<Displacement> = Vec::new();
    let mut moved = 0usize;

    for element in output.iter_mut().filter(|e| !e.is_pinned()) {
        let original = element.rect();
        let mut displaced = false;

        // Children travel with the innermost displaced box that held them
        if let Some(parent) = displacements
            .iter()
            .rev()
            .find(|d| d.original.contains(&original) && d.original != original)
        {
            element.x += parent.dx;
            element.y += parent.dy;
            displaced = true;
        }

        displaced |= lift_above_chrome(element, &pinned, &obstacles);
        displaced |= shift_below(element, &obstacles);

        // Only displaced elements are pulled back inside the screen edges
        if displaced {
            let max_x = (width - element.width).max(0.0);
            let clamped = element.x.clamp(0.0, max_x);
            if clamped != element.x {
                element.x = clamped;
                shift_below(element, &obstacles);
            }
        }

        let dx = element.x - original.x;
        let dy = element.y - original.y;
        if dx != 0.0 || dy != 0.0 {
            moved += 1;
            displacements.push(Displacement { original, dx, dy });
        }
        obstacles.push(element.rect());
    }

    log::debug!("resolve_overlaps: moved {} of {} element(s)", moved, elements.len());
    Ok(output)
}
