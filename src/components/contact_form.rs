//! Contact Form
//!
//! DOM side of the contact form: inline field errors, live re-validation, and
//! the `FormView` the submit lifecycle drives.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement, SubmitEvent};

use dom_listeners::listen;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::{MarkupError, SubmitError};
use crate::submission::{submit_form, BusyButton, FormPayload, FormView, SuccessBanner, Submitter};
use crate::validation::{required_indices, should_validate, validate, Field, FieldEvent, FieldKind, Validation};

const ERROR: &str = "error";
const ACTIVE: &str = "active";
const FAILURE_ALERT: &str = "An error occurred. Please try again.";

#[derive(Clone)]
struct ContactForm {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    success: Option<Element>,
    input_selector: String,
    error_selector: String,
    /// Required fields from the last validation pass, in document order
    checked: StoredValue<Vec<Element>, LocalStorage>,
    busy: StoredValue<BusyButton>,
    banner: StoredValue<SuccessBanner<Timeout>, LocalStorage>,
}

/// Bind validation and submission; `false` when the page has no form
pub fn mount(config: &SiteConfig, submitter: Rc<dyn Submitter>) -> Result<bool, MarkupError> {
    let sel = &config.selectors;
    let Some(form) = dom::query(&sel.contact_form)? else {
        return Ok(false);
    };
    let form: HtmlFormElement = dom::cast(form, &sel.contact_form, "form")?;
    let submit = dom::require_in(&form, &sel.form_submit)?;
    let submit: HtmlButtonElement = dom::cast(submit, &sel.form_submit, "button")?;

    let contact = ContactForm {
        form,
        submit,
        success: dom::query(&sel.form_success)?,
        input_selector: sel.form_inputs.clone(),
        error_selector: sel.form_errors.clone(),
        checked: StoredValue::new_local(Vec::new()),
        busy: StoredValue::new(BusyButton::default()),
        banner: StoredValue::new_local(SuccessBanner::new(config.timings.success_display_ms)),
    };

    let s = contact.clone();
    listen(&contact.form, "submit", move |ev: SubmitEvent| {
        ev.prevent_default();
        let view = s.clone();
        let submitter = submitter.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = submit_form(&view, &*submitter).await;
            log::debug!("Contact form outcome: {:?}", outcome);
        });
    });

    for input in dom::query_all_in(&contact.form, &contact.input_selector)? {
        for (name, event) in [("blur", FieldEvent::Blur), ("input", FieldEvent::Input)] {
            let s = contact.clone();
            let el = input.clone();
            listen(&input, name, move |_: Event| {
                if should_validate(event, dom::has_class(&el, ERROR)) {
                    s.check(&el);
                }
            });
        }
    }

    Ok(true)
}

impl ContactForm {
    /// Controls inside the form matching the input selector, which may be a
    /// selector list
    fn inputs(&self) -> Vec<Element> {
        dom::query_all_in(&self.form, &self.input_selector).unwrap_or_default()
    }

    /// Validate one control and show the result next to it
    fn check(&self, el: &Element) {
        let result = validate(&read_field(el));
        self.show_on(el, &result);
    }

    fn show_on(&self, el: &Element, result: &Validation) {
        dom::set_class(el, ERROR, !result.valid);
        let message = el
            .parent_element()
            .and_then(|parent| dom::query_in(&parent, &self.error_selector).ok().flatten());
        if let Some(message) = message {
            message.set_text_content(Some(&result.message));
        }
    }
}

fn read_field(el: &Element) -> Field {
    let input_type = el.dyn_ref::<HtmlInputElement>().map(|input| input.type_()).unwrap_or_default();
    Field::new(
        el.get_attribute("name").unwrap_or_default(),
        FieldKind::from_element(&el.tag_name(), &input_type),
        el.has_attribute("required"),
        dom::control_value(el),
    )
}

impl FormView for ContactForm {
    fn clear_errors(&self) {
        if let Ok(messages) = dom::query_all(&self.error_selector) {
            for message in messages {
                message.set_text_content(Some(""));
            }
        }
        for field in self.inputs() {
            dom::set_class(&field, ERROR, false);
        }
    }

    fn required_fields(&self) -> Vec<Field> {
        let elements = self.inputs();
        let fields: Vec<Field> = elements.iter().map(read_field).collect();
        let required = required_indices(&fields);
        self.checked.set_value(required.iter().map(|&i| elements[i].clone()).collect());
        required.into_iter().map(|i| fields[i].clone()).collect()
    }

    fn show_validation(&self, index: usize, result: &Validation) {
        let el = self.checked.with_value(|checked| checked.get(index).cloned());
        if let Some(el) = el {
            self.show_on(&el, result);
        }
    }

    fn payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return payload;
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return payload;
        };
        for entry in entries.flatten() {
            let pair: js_sys::Array = entry.unchecked_into();
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                payload.insert(name, value);
            }
        }
        payload
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            let current = self.submit.inner_html();
            if let Some(label) = self.busy.try_update_value(|b| b.begin(&current)) {
                self.submit.set_inner_html(label);
            }
            self.submit.set_disabled(true);
        } else if let Some(Some(idle)) = self.busy.try_update_value(|b| b.end()) {
            self.submit.set_inner_html(&idle);
            self.submit.set_disabled(false);
        }
    }

    fn show_success(&self) {
        let Some(success) = self.success.clone() else {
            return;
        };
        dom::set_class(&success, ACTIVE, true);
        self.banner.update_value(|banner| {
            banner.show(|ms| Timeout::new(ms, move || dom::set_class(&success, ACTIVE, false)))
        });
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn report_failure(&self, error: &SubmitError) {
        log::warn!("Contact form not sent: {}", error);
        let _ = window().alert_with_message(FAILURE_ALERT);
    }
}
