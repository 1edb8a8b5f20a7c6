//! Case Study Modal
//!
//! "View case study" buttons open a modal filled from the static records.

use leptos::prelude::*;
use web_sys::{Element, Event, KeyboardEvent};

use dom_listeners::{listen, listen_document};

use crate::case_study::render_case_study;
use crate::config::SiteConfig;
use crate::dom;
use crate::error::MarkupError;
use crate::models::find_case_study;

const ACTIVE: &str = "active";

#[derive(Clone)]
struct CaseStudyModal {
    open: RwSignal<bool>,
    modal: Element,
    body: Element,
}

/// Needs both the modal and its body container; either missing disables it.
pub fn mount(config: &SiteConfig) -> Result<bool, MarkupError> {
    let sel = &config.selectors;
    let (Some(modal), Some(body)) = (dom::query(&sel.modal)?, dom::query(&sel.modal_body)?) else {
        return Ok(false);
    };

    let this = CaseStudyModal { open: RwSignal::new(false), modal, body };

    for button in dom::query_all(&sel.case_study_buttons)? {
        let s = this.clone();
        let project = button.get_attribute("data-project");
        listen(&button, "click", move |_: Event| s.open(project.as_deref()));
    }
    if let Some(close) = dom::query(&sel.modal_close)? {
        let s = this.clone();
        listen(&close, "click", move |_: Event| s.close());
    }
    if let Some(overlay) = dom::query_in(&this.modal, &sel.modal_overlay)? {
        let s = this.clone();
        listen(&overlay, "click", move |_: Event| s.close());
    }

    let s = this.clone();
    listen_document("keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" && s.is_open() {
            s.close();
        }
    });

    Ok(true)
}

impl CaseStudyModal {
    fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    /// Fill the body for `project` (unknown ids show the first project) and open
    fn open(&self, project: Option<&str>) {
        let study = find_case_study(project);
        log::debug!("Opening case study {} for {:?}", study.id, project);
        self.body.set_inner_html(&render_case_study(study));
        dom::set_class(&self.modal, ACTIVE, true);
        dom::lock_page_scroll(true);
        self.open.set(true);
    }

    fn close(&self) {
        dom::set_class(&self.modal, ACTIVE, false);
        dom::lock_page_scroll(false);
        self.open.set(false);
    }
}
