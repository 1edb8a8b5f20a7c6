//! Smooth Anchor Scrolling

use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use dom_listeners::listen;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;

pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let anchors = dom::query_all(&config.selectors.anchors)?;
    if anchors.is_empty() {
        return Ok(false);
    }

    for anchor in &anchors {
        let el = anchor.clone();
        listen(anchor, "click", move |ev: MouseEvent| {
            let href = el.get_attribute("href").unwrap_or_default();
            if href == "#" {
                return;
            }
            ev.prevent_default();
            // hrefs that are not valid selectors just do nothing
            if let Ok(Some(target)) = dom::query(&href) {
                scroll_to(&target);
            }
        });
    }

    Ok(true)
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
