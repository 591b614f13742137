use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub direction: ScrollDirection,
    /// Whether a hide-on-scroll header should be shown
    pub visible: bool,
    /// Page has moved away from the very top
    pub scrolled: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            direction: ScrollDirection::Idle,
            visible: true,
            scrolled: false,
        }
    }
}

/// Derives direction and header visibility from successive scroll offsets
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    last_y: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            last_y: 0.0,
            state: ScrollState::default(),
        }
    }

    pub fn update(&mut self, y: f64) -> ScrollState {
        // overscroll bounce reports negative offsets
        let y = y.max(0.0);
        let delta = y - self.last_y;
        self.last_y = y;

        let direction = if delta > 0.0 {
            ScrollDirection::Down
        } else if delta < 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Idle
        };

        let visible = if y <= self.threshold {
            true
        } else {
            match direction {
                ScrollDirection::Down => false,
                ScrollDirection::Up => true,
                ScrollDirection::Idle => self.state.visible,
            }
        };

        self.state = ScrollState {
            direction,
            visible,
            scrolled: y > 0.0,
        };
        self.state
    }
}

/// Window scroll tracking for hide-on-scroll headers
pub fn use_scroll_direction(threshold: f64) -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());

    #[cfg(feature = "hydrate")]
    {
        let tracker = StoredValue::new(ScrollTracker::new(threshold));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = window().scroll_y().unwrap_or(0.0);
            if let Some(next) = tracker.try_update_value(|t| t.update(y)) {
                if state.get_untracked() != next {
                    set_state.set(next);
                }
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (threshold, set_state);

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_visible_near_the_top() {
        let mut tracker = ScrollTracker::new(80.0);
        let s = tracker.update(40.0);
        assert_eq!(s.direction, ScrollDirection::Down);
        assert!(s.visible);
        assert!(s.scrolled);
    }

    #[test]
    fn hides_going_down_and_shows_going_up() {
        let mut tracker = ScrollTracker::new(80.0);
        tracker.update(50.0);
        assert!(!tracker.update(200.0).visible);
        assert!(!tracker.update(200.0).visible, "idle keeps the last visibility");

        let up = tracker.update(150.0);
        assert_eq!(up.direction, ScrollDirection::Up);
        assert!(up.visible);
    }

    #[test]
    fn negative_offsets_count_as_top() {
        let mut tracker = ScrollTracker::new(80.0);
        tracker.update(300.0);
        let s = tracker.update(-20.0);
        assert!(s.visible);
        assert!(!s.scrolled);
    }
}
