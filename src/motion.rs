//! Pointer & Scroll Motion
//!
//! Offsets for magnetic buttons and parallax cards.

/// Element bounds in client coordinates (from `getBoundingClientRect`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Offset a magnetic button follows: `strength` times the pointer's distance
/// from the button center, per axis.
pub fn magnetic_offset(pointer_x: f64, pointer_y: f64, rect: Rect, strength: f64) -> (f64, f64) {
    let dx = pointer_x - rect.left - rect.width / 2.0;
    let dy = pointer_y - rect.top - rect.height / 2.0;
    (dx * strength, dy * strength)
}

pub fn magnetic_transform(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", px(offset.0), px(offset.1))
}

pub const MAGNETIC_RESET: &str = "translate(0, 0)";

/// Scroll speed for the `index`-th floating card
pub fn parallax_speed(index: usize, base: f64, step: f64) -> f64 {
    base + index as f64 * step
}

/// Vertical offset; deliberately unclamped
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", px(offset))
}

/// Avoid writing `-0px`
fn px(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
