//! Testimonial Slider
//!
//! Carousel with generated dots, prev/next buttons and hover-paused autoplay.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use web_sys::{Element, Event};

use dom_listeners::listen;

use crate::carousel::{Autoplay, Carousel};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;

const DOT_CLASS: &str = "slider-dot";
const ACTIVE: &str = "active";

#[derive(Clone)]
struct TestimonialSlider {
    state: RwSignal<Carousel>,
    autoplay: StoredValue<Autoplay<Interval>, LocalStorage>,
    autoplay_ms: u32,
    track: Element,
    dots: Vec<Element>,
}

pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let sel = &config.selectors;

    let Some(slider) = dom::query(&sel.slider)? else {
        return Ok(false);
    };
    let Some(track) = dom::query_in(&slider, &sel.slider_track)? else {
        log::debug!("Slider has no track, leaving it static");
        return Ok(false);
    };
    let cards = dom::query_all_in(&slider, &sel.slider_cards)?;
    let Some(carousel) = Carousel::new(cards.len()) else {
        log::debug!("Slider has no slides, leaving it static");
        return Ok(false);
    };
    let dots_container = dom::require(&sel.slider_dots)?;

    let dots = (0..carousel.count())
        .map(|_| -> Result<Element, MarkupError> {
            let dot = document()
                .create_element("div")
                .map_err(|e| MarkupError::Dom(format!("{:?}", e)))?;
            dom::set_class(&dot, DOT_CLASS, true);
            let _ = dots_container.append_child(&dot);
            Ok(dot)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let this = TestimonialSlider {
        state: RwSignal::new(carousel),
        autoplay: StoredValue::new_local(Autoplay::default()),
        autoplay_ms: config.timings.autoplay_ms,
        track,
        dots,
    };
    this.render();

    for (i, dot) in this.dots.iter().enumerate() {
        let s = this.clone();
        listen(dot, "click", move |_: Event| s.go_to(i));
    }
    if let Some(prev) = dom::query(&sel.slider_prev)? {
        let s = this.clone();
        listen(&prev, "click", move |_: Event| s.prev());
    }
    if let Some(next) = dom::query(&sel.slider_next)? {
        let s = this.clone();
        listen(&next, "click", move |_: Event| s.next());
    }

    let s = this.clone();
    listen(&slider, "mouseenter", move |_: Event| s.pause_autoplay());
    let s = this.clone();
    listen(&slider, "mouseleave", move |_: Event| s.start_autoplay());

    this.start_autoplay();
    log::debug!("Slider mounted with {} slides", carousel.count());
    Ok(true)
}

impl TestimonialSlider {
    fn next(&self) {
        self.state.update(|c| c.next());
        self.render();
    }

    fn prev(&self) {
        self.state.update(|c| c.prev());
        self.render();
    }

    fn go_to(&self, index: usize) {
        self.state.update(|c| c.go_to(index));
        self.render();
    }

    /// Fresh timer; any previous one is cancelled
    fn start_autoplay(&self) {
        let s = self.clone();
        let ms = self.autoplay_ms;
        self.autoplay.update_value(|a| a.start(move || Interval::new(ms, move || s.next())));
    }

    fn pause_autoplay(&self) {
        self.autoplay.update_value(|a| a.pause());
    }

    fn render(&self) {
        let carousel = self.state.get_untracked();
        dom::set_style(&self.track, "transform", &carousel.track_transform());
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE, carousel.is_dot_active(i));
        }
    }
}
