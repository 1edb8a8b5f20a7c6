//! Portfolio Filter
//!
//! Category buttons that fade portfolio cards in and out.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{Element, Event};

use dom_listeners::listen;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;
use crate::filter::{Filter, Pending, Transition};

const ACTIVE: &str = "active";

/// One card and its pending transition step
#[derive(Clone)]
struct PortfolioItem {
    el: Element,
    pending: StoredValue<Pending<Timeout>, LocalStorage>,
}

#[derive(Clone)]
struct PortfolioFilter {
    buttons: Vec<Element>,
    items: Vec<PortfolioItem>,
    show_delay_ms: u32,
    hide_delay_ms: u32,
}

/// Bind the filter buttons; `false` when the page has none
pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let buttons = dom::query_all(&config.selectors.filter_buttons)?;
    if buttons.is_empty() {
        return Ok(false);
    }
    let items = dom::query_all(&config.selectors.portfolio_items)?
        .into_iter()
        .map(|el| PortfolioItem { el, pending: StoredValue::new_local(Pending::default()) })
        .collect();

    let filter = PortfolioFilter {
        buttons,
        items,
        show_delay_ms: config.timings.filter_show_delay_ms,
        hide_delay_ms: config.timings.filter_hide_delay_ms,
    };

    for (i, button) in filter.buttons.iter().enumerate() {
        let s = filter.clone();
        listen(button, "click", move |_: Event| s.select(i));
    }

    Ok(true)
}

impl PortfolioFilter {
    /// Activate the `index`-th filter button and re-filter every card
    fn select(&self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        for (i, b) in self.buttons.iter().enumerate() {
            dom::set_class(b, ACTIVE, i == index);
        }

        let filter = Filter::from_attr(button.get_attribute("data-filter").as_deref());
        log::debug!("Filter selected: {:?}", filter);
        for item in &self.items {
            let category = item.el.get_attribute("data-category");
            self.transition(item, Transition::for_item(&filter, category.as_deref()));
        }
    }

    /// Apply the immediate half of a fade and schedule the delayed half
    fn transition(&self, item: &PortfolioItem, transition: Transition) {
        let el = item.el.clone();
        let (opacity, transform) = transition.settled_style();
        let (show_ms, hide_ms) = (self.show_delay_ms, self.hide_delay_ms);

        item.pending.update_value(|pending| {
            pending.replace(move || match transition {
                Transition::FadeIn => {
                    dom::set_style(&el, "display", "block");
                    Timeout::new(show_ms, move || {
                        dom::set_style(&el, "opacity", opacity);
                        dom::set_style(&el, "transform", transform);
                    })
                }
                Transition::FadeOut => {
                    dom::set_style(&el, "opacity", opacity);
                    dom::set_style(&el, "transform", transform);
                    Timeout::new(hide_ms, move || {
                        dom::set_style(&el, "display", "none");
                    })
                }
            })
        });
    }
}
