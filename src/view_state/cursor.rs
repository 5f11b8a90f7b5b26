use std::collections::VecDeque;

/// Number of recent pointer positions kept for the cursor trail.
pub const TRAIL_LEN: usize = 10;
/// Ring scale while the pointer is over something clickable.
pub const HOVER_SCALE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// Stable key for keyed rendering; grows with every push.
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// The last [`TRAIL_LEN`] pointer positions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    next_id: u64,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if self.points.len() == TRAIL_LEN {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint {
            id: self.next_id,
            x,
            y,
        });
        self.next_id += 1;
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Whether the element under the pointer should enlarge the cursor ring.
///
/// `tag` is the DOM `tagName`, which browsers report upper-cased for HTML.
pub fn is_interactive(tag: &str, has_pointer_class: bool) -> bool {
    has_pointer_class || tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button")
}

pub fn ring_scale(hovering: bool) -> f64 {
    if hovering {
        HOVER_SCALE
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_keeps_last_ten_points() {
        let mut trail = CursorTrail::new();
        assert!(trail.is_empty());
        for i in 0..25 {
            trail.push(i as f64, (i * 2) as f64);
        }
        assert_eq!(trail.len(), TRAIL_LEN);

        let xs = trail.points().map(|p| p.x).collect::<Vec<_>>();
        assert_eq!(xs, (15..25).map(f64::from).collect::<Vec<_>>());
        let ids = trail.points().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, (15..25).collect::<Vec<u64>>());
    }

    #[test]
    fn test_trail_ignores_non_finite_positions() {
        let mut trail = CursorTrail::new();
        trail.push(f64::NAN, 3.0);
        trail.push(1.0, f64::INFINITY);
        assert!(trail.is_empty());

        trail.push(1.0, 2.0);
        assert_eq!(
            trail.points().next(),
            Some(&TrailPoint {
                id: 0,
                x: 1.0,
                y: 2.0
            })
        );
    }

    #[test]
    fn test_ring_scales_over_links_and_buttons() {
        assert!(is_interactive("A", false));
        assert!(is_interactive("BUTTON", false));
        assert!(is_interactive("DIV", true));
        assert!(!is_interactive("DIV", false));
        assert!(!is_interactive("INPUT", false));

        assert_eq!(ring_scale(true), HOVER_SCALE);
        assert_eq!(ring_scale(false), 1.0);
    }
}
