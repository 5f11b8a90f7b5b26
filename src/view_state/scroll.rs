/// Offset past which the navigation bar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    pub viewport_height: f64,
}

impl ScrollPosition {
    /// Missing or non-finite readings count as zero.
    pub fn new(offset: Option<f64>, viewport_height: Option<f64>) -> Self {
        let sanitize = |v: Option<f64>| v.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0);
        Self {
            offset: sanitize(offset),
            viewport_height: sanitize(viewport_height),
        }
    }

    /// The point a third of the way down the viewport, used to pick the active section.
    pub fn probe(&self) -> f64 {
        self.offset + self.viewport_height / 3.0
    }

    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }
}

/// Last observed scroll/resize reading.
///
/// Observations are only taken while attached. The owning component attaches on
/// mount and detaches on cleanup, so a late event after teardown cannot move the
/// position.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    position: ScrollPosition,
    attached: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Records a reading. Returns whether it was accepted.
    pub fn observe(&mut self, offset: Option<f64>, viewport_height: Option<f64>) -> bool {
        if !self.attached {
            return false;
        }
        self.position = ScrollPosition::new(offset, viewport_height);
        true
    }

    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    pub fn offset(&self) -> f64 {
        self.position.offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.position.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_source_reads_zero() {
        let pos = ScrollPosition::new(None, None);
        assert_eq!(pos.offset, 0.0);
        assert_eq!(pos.viewport_height, 0.0);

        let pos = ScrollPosition::new(Some(f64::NAN), Some(-20.0));
        assert_eq!(pos, ScrollPosition::default());
    }

    #[test]
    fn test_probe_is_a_third_down_the_viewport() {
        let pos = ScrollPosition::new(Some(600.0), Some(900.0));
        assert_eq!(pos.probe(), 900.0);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!ScrollPosition::new(Some(50.0), Some(800.0)).is_scrolled());
        assert!(ScrollPosition::new(Some(51.0), Some(800.0)).is_scrolled());
    }

    #[test]
    fn test_tracker_ignores_events_while_detached() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.observe(Some(100.0), Some(800.0)));
        assert_eq!(tracker.offset(), 0.0);

        tracker.attach();
        assert!(tracker.observe(Some(100.0), Some(800.0)));
        assert_eq!(tracker.offset(), 100.0);
        assert_eq!(tracker.viewport_height(), 800.0);

        tracker.detach();
        assert!(!tracker.observe(Some(400.0), Some(800.0)));
        assert_eq!(tracker.offset(), 100.0);
    }
}
