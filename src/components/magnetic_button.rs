//! Magnetic Buttons
//!
//! `.btn-magnetic` buttons drift toward the pointer while it hovers them.

use web_sys::{Event, MouseEvent};

use dom_listeners::listen;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;
use crate::motion::{magnetic_offset, magnetic_transform, Rect, MAGNETIC_RESET};

pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let buttons = dom::query_all(&config.selectors.magnetic_buttons)?;
    if buttons.is_empty() {
        return Ok(false);
    }
        let strength = config.effects.magnetic_strength;

        for button in &buttons {
            let el = button.clone();
            listen(button, "mousemove", move |ev: MouseEvent| {
                let bounds = el.get_bounding_client_rect();
                let rect = Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    width: bounds.width(),
                    height: bounds.height(),
                };
                let offset = magnetic_offset(ev.client_x() as f64, ev.client_y() as f64, rect, strength);
                dom::set_style(&el, "transform", &magnetic_transform(offset));
            });

            let el = button.clone();
            listen(button, "mouseleave", move |_: Event| {
                dom::set_style(&el, "transform", MAGNETIC_RESET);
            });
        }

    Ok(true)
}
