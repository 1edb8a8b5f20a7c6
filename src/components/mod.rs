//! Page Components
//!
//! DOM bindings for each behavior on the page. Every component mounts
//! independently: a component whose markup is absent stays off, one whose
//! markup is broken logs why and stays off, and neither affects the rest.

mod nav_bar;
mod scroll_reveal;
mod stat_counter;
mod testimonial_slider;
mod portfolio_filter;
mod case_study_modal;
mod contact_form;
mod magnetic_button;
mod parallax;
mod smooth_scroll;

use std::rc::Rc;

use leptos::prelude::document;

use crate::config::SiteConfig;
use crate::error::MarkupError;
use crate::submission::{SimulatedSubmitter, Submitter};

const ERROR_STYLE: &str = r#"
    .form-input.error {
        border-color: var(--error) !important;
    }
"#;

/// Mount every component found on the page; returns how many are active.
///
/// Components own nothing the caller must keep: listeners are leaked to the
/// page and timer handles live in reactive storage.
pub fn mount_all(config: &SiteConfig) -> usize {
    let submitter: Rc<dyn Submitter> = Rc::new(SimulatedSubmitter {
        delay_ms: config.timings.submit_delay_ms,
    });

    let mounted = [
        report("nav bar", nav_bar::mount(config)),
        report("scroll reveal", scroll_reveal::mount(config)),
        report("stat counters", stat_counter::mount(config)),
        report("testimonial slider", testimonial_slider::mount(config)),
        report("portfolio filter", portfolio_filter::mount(config)),
        report("case study modal", case_study_modal::mount(config)),
        report("contact form", contact_form::mount(config, submitter)),
        report("magnetic buttons", magnetic_button::mount(config)),
        report("parallax", parallax::mount(config)),
        report("smooth scroll", smooth_scroll::mount(config)),
    ];
    inject_error_style();

    let active = mounted.iter().filter(|on| **on).count();
    log::info!("{} page components active", active);
    active
}

fn report(name: &str, mounted: Result<bool, MarkupError>) -> bool {
    match mounted {
        Ok(true) => {
            log::debug!("{} ready", name);
            true
        }
        Ok(false) => {
            log::debug!("{} not on this page", name);
            false
        }
        Err(e) => {
            log::error!("{} disabled: {}", name, e);
            false
        }
    }
}

/// Error border for invalid fields, for pages whose stylesheet lacks it
fn inject_error_style() {
    let doc = document();
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(ERROR_STYLE));
    let _ = head.append_child(&style);
}
