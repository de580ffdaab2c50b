//! Keyword-driven augmentation
//!
//! A template covers the common shape of a screen; augmentation adds the
//! extras the description asked for explicitly. Each rule is keyed by one
//! keyword and produces one element type. A rule is skipped when the screen
//! already contains that type, which keeps augmentation idempotent.

use crate::error::Result;
use crate::parser::ParseResult;
use crate::types::*;

const GAP: f64 = 16.0;
const SEARCH_HEIGHT: f64 = 44.0;
const SOCIAL_HEIGHT: f64 = 44.0;
const CHART_HEIGHT: f64 = 200.0;
const TOGGLE_HEIGHT: f64 = 52.0;

/// Keywords with a rule, in application order
pub const RULE_KEYWORDS: [&str; 6] = ["social", "search", "chart", "toggle", "tabbar", "navbar"];

type ApplyFn = fn(&mut Vec<Element>, &Context<'_>);

struct Rule {
    keyword: &'static str,
    produces: &'static str,
    apply: ApplyFn,
}

const RULES: [Rule; 6] = [
    Rule {
        keyword: "social",
        produces: kinds::SOCIAL_BUTTON,
        apply: add_social_buttons,
    },
    Rule {
        keyword: "search",
        produces: kinds::SEARCH,
        apply: add_search_bar,
    },
    Rule {
        keyword: "chart",
        produces: kinds::CHART,
        apply: add_chart,
    },
    Rule {
        keyword: "toggle",
        produces: kinds::TOGGLE,
        apply: add_toggle,
    },
    Rule {
        keyword: "tabbar",
        produces: kinds::TABBAR,
        apply: add_tab_bar,
    },
    Rule {
        keyword: "navbar",
        produces: kinds::NAVBAR,
        apply: add_nav_bar,
    },
];

struct Context<'a> {
    viewport: Viewport,
    parsed: &'a ParseResult,
}

impl Context<'_> {
    fn padding(&self) -> f64 {
        match self.viewport.breakpoint() {
            Breakpoint::Narrow => 16.0,
            Breakpoint::Wide | Breakpoint::Desktop => 32.0,
        }
    }
}

/// Apply every rule whose keyword appears in `parsed`. Returns a new vector;
/// `elements` is left untouched.
pub fn augment_elements(
    elements: &[Element],
    parsed: &ParseResult,
    width: f64,
    height: f64,
) -> Result<Vec<Element>> {
    let viewport = Viewport::new(width, height)?;
    let context = Context { viewport, parsed };
    let mut output = elements.to_vec();

    for rule in &RULES {
        if !parsed.has_keyword(rule.keyword) {
            continue;
        }
        if output.iter().any(|e| e.is_type(rule.produces)) {
            log::trace!("Skipping '{}' rule, {} already present", rule.keyword, rule.produces);
            continue;
        }
        let before = output.len();
        (rule.apply)(&mut output, &context);
        log::debug!(
            "Rule '{}' added {} element(s)",
            rule.keyword,
            output.len() - before
        );
    }

    Ok(output)
}

/// Bottom edge of full-width chrome pinned to the top of the screen
fn top_chrome_bottom(elements: &[Element], viewport: &Viewport) -> f64 {
    elements
        .iter()
        .filter(|e| e.is_pinned() && e.y <= 0.0 && e.width >= viewport.width / 2.0)
        .map(Element::bottom)
        .fold(0.0, f64::max)
}

/// Top edge of chrome pinned to the bottom half of the screen
fn bottom_chrome_top(elements: &[Element], viewport: &Viewport) -> f64 {
    elements
        .iter()
        .filter(|e| e.is_pinned() && e.y > viewport.height / 2.0)
        .map(|e| e.y)
        .fold(viewport.height, f64::min)
}

/// Left edge of the content area, to the right of any pinned side panel
fn content_left(elements: &[Element], context: &Context<'_>) -> f64 {
    let side = elements
        .iter()
        .filter(|e| e.is_pinned() && e.x <= 0.0 && e.width < context.viewport.width / 2.0)
        .map(Element::right)
        .fold(0.0, f64::max);
    side + context.padding()
}

fn content_bottom(elements: &[Element], viewport: &Viewport) -> f64 {
    elements
        .iter()
        .filter(|e| !e.is_pinned())
        .map(Element::bottom)
        .fold(top_chrome_bottom(elements, viewport), f64::max)
}

/// Move every non-pinned element at or below `from_y` down by `dy`
fn shift_down(elements: &mut [Element], from_y: f64, dy: f64) {
    for element in elements.iter_mut().filter(|e| !e.is_pinned() && e.y >= from_y) {
        element.y += dy;
    }
}

/// Drop content moved to `moved_from` or below that now crosses `limit`
fn drop_past_chrome(elements: &mut Vec<Element>, moved_from: f64, limit: f64) {
    let before = elements.len();
    elements.retain(|e| e.is_pinned() || e.y < moved_from || e.bottom() <= limit + BOUNDS_TOLERANCE);
    if elements.len() < before {
        log::debug!(
            "Dropped {} element(s) pushed past bottom chrome at {}",
            before - elements.len(),
            limit
        );
    }
}

fn add_social_buttons(elements: &mut Vec<Element>, context: &Context<'_>) {
    let anchor = elements
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.is_pinned() && kinds::FORM_CONTROLS.contains(&e.element_type.as_str()))
        .max_by(|(_, a), (_, b)| a.bottom().total_cmp(&b.bottom()));

    let (index, left, width, y) = match anchor {
        Some((index, control)) => (index + 1, control.x, control.width, control.bottom() + GAP),
        None => {
            let left = content_left(elements, context);
            let right = context.viewport.width - context.padding();
            (
                elements.len(),
                left,
                right - left,
                content_bottom(elements, &context.viewport) + GAP,
            )
        }
    };

    let limit = bottom_chrome_top(elements, &context.viewport);
    if width <= 12.0 || y + SOCIAL_HEIGHT > limit + BOUNDS_TOLERANCE {
        log::debug!("No room for social buttons (y={}, limit={})", y, limit);
        return;
    }

    shift_down(elements, y, SOCIAL_HEIGHT + GAP);

    let button_width = ((width - 12.0) / 2.0).floor();
    let buttons = [("google", "Continue with Google"), ("apple", "Continue with Apple")]
        .iter()
        .enumerate()
        .map(|(i, (provider, label))| {
            Element::new(
                kinds::SOCIAL_BUTTON,
                left + i as f64 * (button_width + 12.0),
                y,
                button_width,
                SOCIAL_HEIGHT,
            )
            .with_prop("provider", *provider)
            .with_prop("label", *label)
        })
        .collect::<Vec<_>>();

    let tail = elements.split_off(index.min(elements.len()));
    elements.extend(buttons);
    elements.extend(tail);
    drop_past_chrome(elements, y + SOCIAL_HEIGHT + GAP, limit);
}

fn add_search_bar(elements: &mut Vec<Element>, context: &Context<'_>) {
    let viewport = &context.viewport;
    let y = top_chrome_bottom(elements, viewport) + GAP;
    let left = content_left(elements, context);
    let width = viewport.width - context.padding() - left;
    if width <= 0.0 {
        return;
    }

    let limit = bottom_chrome_top(elements, viewport);
    shift_down(elements, y - GAP, SEARCH_HEIGHT + GAP);

    let index = elements.iter().take_while(|e| e.is_pinned()).count();
    elements.insert(
        index,
        Element::new(kinds::SEARCH, left, y, width, SEARCH_HEIGHT).with_prop("placeholder", "Search"),
    );
    drop_past_chrome(elements, y + SEARCH_HEIGHT, limit);
}

/// Place `element` below the current content if it fits above bottom chrome
fn append_below_content(elements: &mut Vec<Element>, context: &Context<'_>, element: Element) {
    let viewport = &context.viewport;
    let y = content_bottom(elements, viewport) + GAP;
    let limit = bottom_chrome_top(elements, viewport);
    if element.width <= 0.0 || y + element.height > limit + BOUNDS_TOLERANCE {
        log::debug!(
            "No room for {} below content (y={}, limit={})",
            element.element_type,
            y,
            limit
        );
        return;
    }
    elements.push(Element { y, ..element });
}

fn add_chart(elements: &mut Vec<Element>, context: &Context<'_>) {
    let left = content_left(elements, context);
    let width = context.viewport.width - context.padding() - left;
    let chart = Element::new(kinds::CHART, left, 0.0, width, CHART_HEIGHT)
        .with_prop("chartType", "bar")
        .with_prop("label", "Chart");
    append_below_content(elements, context, chart);
}

fn add_toggle(elements: &mut Vec<Element>, context: &Context<'_>) {
    let left = content_left(elements, context);
    let width = context.viewport.width - context.padding() - left;
    let toggle = Element::new(kinds::TOGGLE, left, 0.0, width, TOGGLE_HEIGHT)
        .with_prop("label", "Enable")
        .with_prop("checked", false);
    append_below_content(elements, context, toggle);
}

fn add_tab_bar(elements: &mut Vec<Element>, context: &Context<'_>) {
    let viewport = &context.viewport;
    let height = TAB_BAR_HEIGHT.min(viewport.height);
    elements.push(
        Element::new(kinds::TABBAR, 0.0, viewport.height - height, viewport.width, height)
            .with_z(PINNED_Z_INDEX)
            .with_prop("tabs", serde_json::json!(["Home", "Search", "Profile"]))
            .with_prop("active", "Home"),
    );
}

fn add_nav_bar(elements: &mut Vec<Element>, context: &Context<'_>) {
    let viewport = &context.viewport;
    let height = NAV_BAR_HEIGHT.min(viewport.height);

    // Push content that would sit under the new bar out of the way
    let top = elements
        .iter()
        .filter(|e| !e.is_pinned())
        .map(|e| e.y)
        .fold(f64::INFINITY, f64::min);
    if top.is_finite() && top < height {
        let limit = bottom_chrome_top(elements, viewport);
        shift_down(elements, f64::NEG_INFINITY, height - top);
        drop_past_chrome(elements, f64::NEG_INFINITY, limit);
    }

    elements.insert(
        0,
        Element::new(kinds::NAVBAR, 0.0, 0.0, viewport.width, height)
            .with_z(PINNED_Z_INDEX)
            .with_prop("title", context.parsed.name_hint.as_str()),
    );
}
