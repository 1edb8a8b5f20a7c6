//! HATechLabs Site Entry Point
//!
//! Enhances the static marketing pages: navigation, scroll effects,
//! testimonial slider, portfolio filter and case-study modal, contact form.

mod config;
mod error;
mod dom;
mod models;
mod header;
mod counter;
mod carousel;
mod filter;
mod validation;
mod case_study;
mod motion;
mod submission;
mod components;

#[cfg(test)]
mod testing;

use leptos::prelude::document;
use web_sys::Event;

use config::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Info);

    let config = SiteConfig::from_window();
    console_logger::set_level(config.level_filter());

    // Module scripts may run before parsing finishes
    if document().ready_state() == "loading" {
        dom_listeners::listen_document("DOMContentLoaded", move |_: Event| {
            components::mount_all(&config);
        });
    } else {
        components::mount_all(&config);
    }
}
