//! Portfolio Filter
//!
//! Category selection and the per-item visibility it implies.

/// Filter value meaning "no filtering"
pub const ALL: &str = "all";

/// Active portfolio filter
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// From a `data-filter` attribute; a missing attribute shows everything
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None | Some(ALL) => Filter::All,
            Some(category) => Filter::Category(category.to_string()),
        }
    }

    /// Whether an item with `data-category = category` is visible
    pub fn shows(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(selected) => category == Some(selected.as_str()),
        }
    }
}

/// Style steps for one item when the filter changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// `display:block` now, fade/scale in after the show delay
    FadeIn,
    /// fade/scale out now, `display:none` after the hide delay
    FadeOut,
}

impl Transition {
    pub fn for_item(filter: &Filter, category: Option<&str>) -> Self {
        if filter.shows(category) {
            Transition::FadeIn
        } else {
            Transition::FadeOut
        }
    }

    /// `(opacity, transform)` once the transition settles
    pub fn settled_style(self) -> (&'static str, &'static str) {
        match self {
            Transition::FadeIn => ("1", "scale(1)"),
            Transition::FadeOut => ("0", "scale(0.8)"),
        }
    }
}

/// The delayed half of an item's current transition.
///
/// Timer handles cancel on drop, so replacing the slot cancels the step a
/// previous filter click scheduled. Whatever the click order, the item ends
/// in the state the latest click asked for.
#[derive(Debug)]
pub struct Pending<T> {
    step: Option<T>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self { step: None }
    }
}

impl<T> Pending<T> {
    /// Cancel any scheduled step and schedule the one `spawn` returns
    pub fn replace(&mut self, spawn: impl FnOnce() -> T) {
        self.step.take();
        self.step = Some(spawn());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTimer;
    use std::cell::Cell;
    use std::rc::Rc;

    const ITEMS: &[Option<&str>] = &[Some("web"), Some("mobile"), Some("web"), Some("ai"), None];

    fn visible(filter: &Filter) -> Vec<usize> {
        ITEMS.iter().enumerate().filter(|(_, c)| filter.shows(**c)).map(|(i, _)| i).collect()
    }

    #[test]
    fn test_all_shows_every_item() {
        assert_eq!(visible(&Filter::from_attr(Some("all"))), vec![0, 1, 2, 3, 4]);
        assert_eq!(visible(&Filter::from_attr(None)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_category_shows_only_exact_matches() {
        assert_eq!(visible(&Filter::from_attr(Some("web"))), vec![0, 2]);
        assert_eq!(visible(&Filter::from_attr(Some("ai"))), vec![3]);
        assert_eq!(visible(&Filter::from_attr(Some("Web"))), Vec::<usize>::new());
    }

    #[test]
    fn test_transition_for_item() {
        let filter = Filter::Category("mobile".into());
        assert_eq!(Transition::for_item(&filter, Some("mobile")), Transition::FadeIn);
        assert_eq!(Transition::for_item(&filter, Some("web")), Transition::FadeOut);
        assert_eq!(Transition::FadeOut.settled_style(), ("0", "scale(0.8)"));
    }

    fn schedule(pending: &mut Pending<FakeTimer>, live: &Rc<Cell<usize>>, transition: Transition) {
        let (label, delay) = match transition {
            Transition::FadeIn => ("fade-in", 10),
            Transition::FadeOut => ("fade-out", 300),
        };
        pending.replace(|| FakeTimer::labeled(live, label, delay));
    }

    #[test]
    fn test_latest_click_cancels_pending_fade() {
        let live = Rc::new(Cell::new(0));
        let mut pending = Pending::default();

        // "web" hides a mobile card, then "all" is clicked before it settles
        let web = Filter::from_attr(Some("web"));
        schedule(&mut pending, &live, Transition::for_item(&web, Some("mobile")));
        assert_eq!(pending.step.as_ref().map(|t| t.label), Some("fade-out"));

        let all = Filter::from_attr(Some("all"));
        schedule(&mut pending, &live, Transition::for_item(&all, Some("mobile")));

        assert_eq!(live.get(), 1);
        let step = pending.step.as_ref().unwrap();
        assert_eq!((step.label, step.delay_ms), ("fade-in", 10));
    }

    #[test]
    fn test_rapid_clicks_leave_one_pending_step() {
        let live = Rc::new(Cell::new(0));
        let mut pending = Pending::default();
        let filters = ["web", "all", "mobile", "ai", "web", "all", "mobile"];

        for value in filters {
            let filter = Filter::from_attr(Some(value));
            schedule(&mut pending, &live, Transition::for_item(&filter, Some("mobile")));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(pending.step.as_ref().map(|t| t.label), Some("fade-in"));
    }
}
