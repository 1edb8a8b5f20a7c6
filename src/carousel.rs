//! Carousel State
//!
//! Slide index state machine and autoplay timer ownership for the testimonial
//! slider. DOM rendering lives in `components::testimonial_slider`.

/// Current slide out of `count` (always > 0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    count: usize,
}

impl Carousel {
    /// `None` for an empty slider; nothing to rotate.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.count;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.count - 1) % self.count;
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index % self.count;
    }

    /// Track offset, e.g. `translateX(-200%)` for the third slide
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    /// Exactly one dot is active: the one at the current index
    pub fn is_dot_active(&self, dot: usize) -> bool {
        dot == self.index
    }
}

/// Owner of the autoplay timer handle.
///
/// Timer handles cancel when dropped (`gloo_timers::callback::Interval`), so
/// holding at most one handle means at most one running timer, however fast
/// hover enter/leave events arrive.
#[derive(Debug)]
pub struct Autoplay<T> {
    timer: Option<T>,
}

impl<T> Default for Autoplay<T> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<T> Autoplay<T> {
    /// Replace any running timer with a fresh one from `spawn`
    pub fn start(&mut self, spawn: impl FnOnce() -> T) {
        self.timer.take();
        self.timer = Some(spawn());
    }

    pub fn pause(&mut self) {
        self.timer.take();
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}
