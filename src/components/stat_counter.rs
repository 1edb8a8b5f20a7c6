//! Stat Counters
//!
//! Count-up animation for `.stat-number[data-target]`, started the first time
//! each counter is half visible.

use dom_listeners::{observe_once, ObserveOptions};
use leptos::prelude::request_animation_frame;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::counter::CounterAnimation;
use crate::dom;
use crate::error::MarkupError;

pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let counters = dom::query_all(&config.selectors.counters)?;
    if counters.is_empty() {
        return Ok(false);
    }

    let duration = config.timings.counter_duration_ms;
    let frame = config.timings.counter_frame_ms;
    let options = ObserveOptions {
        threshold: config.timings.counter_threshold,
        root_margin: None,
    };

    observe_once(&counters, &options, move |el| {
        let raw = el.get_attribute("data-target").unwrap_or_default();
        match CounterAnimation::parse_target(&raw) {
            Some(target) => play(el, CounterAnimation::new(target, duration, frame)),
            None => log::warn!("Skipping counter with non-numeric data-target {:?}", raw),
        }
    })
    .map_err(|e| MarkupError::Dom(format!("{:?}", e)))?;

    Ok(true)
}

/// Render one frame, then schedule the next until the target is shown
fn play(el: Element, mut animation: CounterAnimation) {
    let frame = animation.next_frame();
    el.set_text_content(Some(&frame.text));
    if !frame.done {
        request_animation_frame(move || play(el, animation));
    }
}
