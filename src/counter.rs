//! Counter Animation
//!
//! Frame-by-frame count-up from 0 to a target, rendered as `"{n}+"`.

/// Count-up state for one stat element
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

/// Text to show for one frame, and whether to schedule another
#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterAnimation {
    /// `duration_ms / frame_ms` frames, i.e. 125 at 2000ms and ~60fps
    pub fn new(target: i64, duration_ms: f64, frame_ms: f64) -> Self {
        Self {
            target,
            increment: target as f64 / (duration_ms / frame_ms),
            current: 0.0,
            done: false,
        }
    }

    /// Parse a `data-target` attribute value
    pub fn parse_target(raw: &str) -> Option<i64> {
        raw.trim().parse().ok()
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame. Once done, keeps returning the final text.
    pub fn next_frame(&mut self) -> CounterFrame {
        if !self.done {
            self.current += self.increment;
        }
        if !self.done && self.current < self.target as f64 {
            CounterFrame {
                text: format!("{}+", self.current.floor() as i64),
                done: false,
            }
        } else {
            self.done = true;
            CounterFrame {
                text: format!("{}+", self.target),
                done: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: i64) -> Vec<String> {
        let mut anim = CounterAnimation::new(target, 2000.0, 16.0);
        let mut frames = Vec::new();
        loop {
            let frame = anim.next_frame();
            frames.push(frame.text);
            if frame.done {
                break;
            }
            assert!(frames.len() < 1000, "animation never finished");
        }
        frames
    }

    fn value(text: &str) -> i64 {
        text.strip_suffix('+').expect("suffix").parse().expect("integer")
    }

    #[test]
    fn test_ends_exactly_at_target() {
        for target in [0, 1, 7, 50, 99, 150, 500, 12345] {
            let frames = run(target);
            assert_eq!(frames.last().unwrap(), &format!("{}+", target));
        }
    }

    #[test]
    fn test_values_are_non_decreasing() {
        for target in [3, 98, 250, 100_000] {
            let values: Vec<i64> = run(target).iter().map(|t| value(t)).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {}: {:?}", target, values);
            assert!(values.iter().all(|v| *v <= target));
        }
    }

    #[test]
    fn test_frame_count_follows_duration() {
        // 125 increments of target/125; the last lands on the target
        assert_eq!(run(500).len(), 125);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        assert_eq!(run(0), vec!["0+".to_string()]);
    }

    #[test]
    fn test_done_is_sticky() {
        let mut anim = CounterAnimation::new(10, 2000.0, 16.0);
        while !anim.next_frame().done {}
        assert!(anim.is_done());
        assert_eq!(anim.next_frame().text, "10+");
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(CounterAnimation::parse_target("250"), Some(250));
        assert_eq!(CounterAnimation::parse_target(" 98 "), Some(98));
        assert_eq!(CounterAnimation::parse_target("lots"), None);
    }
}
