//! Reveal on Scroll
//!
//! Marks `.animate-on-scroll` elements `animated` once they enter the viewport.

use dom_listeners::{observe_once, ObserveOptions};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;

const ANIMATED: &str = "animated";

/// The observer stays alive on the JS side for as long as it has targets
pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let targets = dom::query_all(&config.selectors.reveal)?;
    if targets.is_empty() {
        return Ok(false);
    }

    let options = ObserveOptions {
        threshold: config.timings.reveal_threshold,
        root_margin: Some(config.timings.reveal_root_margin.clone()),
    };
    observe_once(&targets, &options, |el| dom::set_class(&el, ANIMATED, true))
        .map_err(|e| MarkupError::Dom(format!("{:?}", e)))?;

    log::debug!("Watching {} elements for reveal", targets.len());
    Ok(true)
}
