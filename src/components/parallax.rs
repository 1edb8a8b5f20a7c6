//! Hero Parallax
//!
//! Floating hero cards scroll slower than the page, each a little faster than
//! the one before it.

use leptos::prelude::window;
use web_sys::Event;

use dom_listeners::listen_window;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;
use crate::motion::{parallax_offset, parallax_speed, parallax_transform};

pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let cards = dom::query_all(&config.selectors.floating_cards)?;
    if cards.is_empty() {
        return Ok(false);
    }

    let effects = config.effects;
    listen_window("scroll", move |_: Event| {
        let scrolled = window().page_y_offset().unwrap_or(0.0);
        for (index, card) in cards.iter().enumerate() {
            let speed = parallax_speed(index, effects.parallax_base_speed, effects.parallax_speed_step);
            dom::set_style(card, "transform", &parallax_transform(parallax_offset(scrolled, speed)));
        }
    });

    Ok(true)
}
