//! Contact Form Submission
//!
//! Submit lifecycle independent of the DOM: validate, lock the button, hand the
//! payload to a `Submitter`, report the outcome, unlock. `FormView` is the seam
//! the DOM binding implements.

use std::collections::BTreeMap;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use crate::error::SubmitError;
use crate::validation::{validate_all, Field, Validation};

/// Field name -> value, as collected from the form
pub type FormPayload = BTreeMap<String, String>;

/// Label shown on the submit button while waiting
pub const BUSY_LABEL: &str = "Sending...";

/// Where form data goes
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, payload: &FormPayload) -> Result<(), SubmitError>;
}

/// Stand-in for a backend: waits, logs the payload as JSON, succeeds.
/// A zero delay answers without touching the browser timer.
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, payload: &FormPayload) -> Result<(), SubmitError> {
        let json = serde_json::to_string(payload).map_err(|e| SubmitError::Undelivered(e.to_string()))?;
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        log::info!("Form submitted: {}", json);
        Ok(())
    }
}

/// Submit button state across overlapping submissions.
///
/// Only the first submission captures the idle label, and the label comes
/// back once the last in-flight submission finishes.
#[derive(Debug, Default)]
pub struct BusyButton {
    idle_label: Option<String>,
    in_flight: usize,
}

impl BusyButton {
    /// Record a submission starting while the button shows `current`;
    /// returns the label to show instead
    pub fn begin(&mut self, current: &str) -> &'static str {
        if self.in_flight == 0 {
            self.idle_label = Some(current.to_string());
        }
        self.in_flight += 1;
        BUSY_LABEL
    }

    /// Record a submission finishing. `Some(label)` when the button should
    /// be restored and re-enabled.
    pub fn end(&mut self) -> Option<String> {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.idle_label.take()
        } else {
            None
        }
    }
}

/// Success indicator hide timer. Each success replaces the pending hide, so
/// the indicator stays up for the full display time after the latest one.
#[derive(Debug)]
pub struct SuccessBanner<T> {
    display_ms: u32,
    hide: Option<T>,
}

impl<T> SuccessBanner<T> {
    pub fn new(display_ms: u32) -> Self {
        Self { display_ms, hide: None }
    }

    /// Schedule the hide with `spawn(display_ms)`, cancelling the previous one
    pub fn show(&mut self, spawn: impl FnOnce(u32) -> T) {
        self.hide.take();
        self.hide = Some(spawn(self.display_ms));
    }
}

/// DOM operations the submit lifecycle needs
pub trait FormView {
    /// Blank every error message and drop every error class
    fn clear_errors(&self);
    /// Required fields, in document order
    fn required_fields(&self) -> Vec<Field>;
    /// Show / hide the error for the `index`-th required field
    fn show_validation(&self, index: usize, result: &Validation);
    fn payload(&self) -> FormPayload;
    /// Disable the submit button and swap its label, or restore both
    fn set_busy(&self, busy: bool);
    fn show_success(&self);
    fn reset(&self);
    fn report_failure(&self, error: &SubmitError);
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed on this many fields; nothing was sent
    Invalid(usize),
    Sent,
    Failed(SubmitError),
}

/// Run one submission. The button is restored whatever the submitter returns.
pub async fn submit_form<V, S>(view: &V, submitter: &S) -> SubmitOutcome
where
    V: FormView + ?Sized,
    S: Submitter + ?Sized,
{
    view.clear_errors();

    let mut invalid = 0;
    for (index, result) in validate_all(&view.required_fields()) {
        if !result.valid {
            invalid += 1;
        }
        view.show_validation(index, &result);
    }
    if invalid > 0 {
        log::debug!("Submission blocked: {} invalid field(s)", invalid);
        return SubmitOutcome::Invalid(invalid);
    }

    let payload = view.payload();
    view.set_busy(true);

    let outcome = match submitter.submit(&payload).await {
        Ok(()) => {
            view.show_success();
            view.reset();
            SubmitOutcome::Sent
        }
        Err(e) => {
            log::error!("Submission failed: {}", e);
            view.report_failure(&e);
            SubmitOutcome::Failed(e)
        }
    };

    view.set_busy(false);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTimer;
    use crate::validation::{FieldKind, MSG_REQUIRED};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Records every view call in order
    #[derive(Default)]
    struct RecordingView {
        fields: Vec<Field>,
        calls: RefCell<Vec<String>>,
    }

    impl RecordingView {
        fn with_fields(fields: Vec<Field>) -> Self {
            Self { fields, ..Default::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    impl FormView for RecordingView {
        fn clear_errors(&self) {
            self.record("clear");
        }
        fn required_fields(&self) -> Vec<Field> {
            self.fields.iter().filter(|f| f.required).cloned().collect()
        }
        fn show_validation(&self, index: usize, result: &Validation) {
            if !result.valid {
                self.record(format!("error:{}:{}", index, result.message));
            }
        }
        fn payload(&self) -> FormPayload {
            self.fields.iter().map(|f| (f.name.clone(), f.value.clone())).collect()
        }
        fn set_busy(&self, busy: bool) {
            self.record(format!("busy:{}", busy));
        }
        fn show_success(&self) {
            self.record("success");
        }
        fn reset(&self) {
            self.record("reset");
        }
        fn report_failure(&self, _error: &SubmitError) {
            self.record("alert");
        }
    }

    struct FakeSubmitter {
        fail: bool,
        calls: Cell<usize>,
        last: RefCell<Option<FormPayload>>,
    }

    impl FakeSubmitter {
        fn new(fail: bool) -> Self {
            Self { fail, calls: Cell::new(0), last: RefCell::new(None) }
        }
    }

    #[async_trait(?Send)]
    impl Submitter for FakeSubmitter {
        async fn submit(&self, payload: &FormPayload) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload.clone());
            if self.fail {
                Err(SubmitError::Undelivered("server unavailable".into()))
            } else {
                Ok(())
            }
        }
    }

    fn contact_fields(email: &str, message: &str) -> Vec<Field> {
        vec![
            Field::new("name", FieldKind::Text, true, "Ada Lovelace"),
            Field::new("email", FieldKind::Email, true, email),
            Field::new("company", FieldKind::Text, false, ""),
            Field::new("message", FieldKind::TextArea, true, message),
        ]
    }

    #[tokio::test]
    async fn test_empty_required_field_blocks_submission() {
        let view = RecordingView::with_fields(contact_fields("ada@example.com", ""));
        let submitter = FakeSubmitter::new(false);

        let outcome = submit_form(&view, &submitter).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(1));
        assert_eq!(submitter.calls.get(), 0);
        // message index 2 among required fields (name, email, message)
        assert_eq!(view.calls(), vec!["clear".to_string(), format!("error:2:{}", MSG_REQUIRED)]);
    }

    #[tokio::test]
    async fn test_valid_form_locks_button_until_sent() {
        let view = RecordingView::with_fields(contact_fields("ada@example.com", "Hello"));
        let submitter = FakeSubmitter::new(false);

        let outcome = submit_form(&view, &submitter).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(view.calls(), vec!["clear", "busy:true", "success", "reset", "busy:false"]);

        let payload = submitter.last.borrow().clone().unwrap();
        assert_eq!(payload.get("email").map(String::as_str), Some("ada@example.com"));
        assert_eq!(payload.get("company").map(String::as_str), Some(""));
    }

    #[tokio::test]
    async fn test_failed_submission_alerts_and_restores_button() {
        let view = RecordingView::with_fields(contact_fields("ada@example.com", "Hello"));
        let submitter = FakeSubmitter::new(true);

        let outcome = submit_form(&view, &submitter).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Undelivered(_))));
        assert_eq!(view.calls(), vec!["clear", "busy:true", "alert", "busy:false"]);
    }

    #[tokio::test]
    async fn test_every_invalid_field_is_reported() {
        let view = RecordingView::with_fields(contact_fields("nope", ""));
        let submitter = FakeSubmitter::new(false);

        assert_eq!(submit_form(&view, &submitter).await, SubmitOutcome::Invalid(2));
        assert_eq!(view.calls().iter().filter(|c| c.starts_with("error:")).count(), 2);
    }

    #[tokio::test]
    async fn test_simulated_submitter_accepts_payload() {
        let submitter = SimulatedSubmitter { delay_ms: 0 };
        let view = RecordingView::with_fields(contact_fields("ada@example.com", "Hello"));

        assert_eq!(submitter.submit(&view.payload()).await, Ok(()));
        assert_eq!(submit_form(&view, &submitter).await, SubmitOutcome::Sent);
    }

    #[test]
    fn test_success_hides_after_display_time() {
        let live = Rc::new(Cell::new(0));
        let mut banner = SuccessBanner::new(5000);

        banner.show(|ms| FakeTimer::labeled(&live, "first", ms));

        let hide = banner.hide.as_ref().unwrap();
        assert_eq!((hide.label, hide.delay_ms), ("first", 5000));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn test_second_success_restarts_hide_timer() {
        let live = Rc::new(Cell::new(0));
        let mut banner = SuccessBanner::new(5000);

        banner.show(|ms| FakeTimer::labeled(&live, "first", ms));
        banner.show(|ms| FakeTimer::labeled(&live, "second", ms));

        // the first hide was cancelled, so it cannot cut the second display short
        assert_eq!(live.get(), 1);
        let hide = banner.hide.as_ref().unwrap();
        assert_eq!((hide.label, hide.delay_ms), ("second", 5000));
    }

    #[test]
    fn test_busy_button_restores_original_label() {
        let mut button = BusyButton::default();

        assert_eq!(button.begin("Send Message"), BUSY_LABEL);
        assert_eq!(button.end(), Some("Send Message".to_string()));
        assert_eq!(button.end(), None);
    }

    #[test]
    fn test_overlapping_submissions_keep_idle_label() {
        let mut button = BusyButton::default();

        button.begin("Send Message");
        // second submit lands while the button already reads "Sending..."
        button.begin(BUSY_LABEL);

        assert_eq!(button.end(), None);
        assert_eq!(button.end(), Some("Send Message".to_string()));
    }
}
