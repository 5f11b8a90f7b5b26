use std::cmp::Ordering;

/// Auto-advance period for rotating lists.
pub const AUTO_ADVANCE_MS: u64 = 5000;

/// Direction of the last index change, used to pick the slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }
}

/// Index cycler over a non-empty list.
///
/// Moving past either end wraps around. The auto-advance timer lives in the
/// component and just calls `advance(Direction::Forward)`; manual navigation
/// does not reset it.
#[derive(Debug, Clone)]
pub struct Rotation<T> {
    items: Vec<T>,
    current: usize,
    direction: Direction,
}

impl<T> Rotation<T> {
    /// Returns `None` for an empty list, which has no valid index.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            current: 0,
            direction: Direction::Still,
        })
    }

    pub fn advance(&mut self, direction: Direction) -> &T {
        let count = self.items.len();
        self.current = match direction {
            Direction::Forward => (self.current + 1) % count,
            Direction::Backward if self.current == 0 => count - 1,
            Direction::Backward => self.current - 1,
            Direction::Still => self.current,
        };
        self.direction = direction;
        &self.items[self.current]
    }

    /// Jumps to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers only pass indices of rendered items.
    pub fn go_to(&mut self, index: usize) -> &T {
        assert!(
            index < self.items.len(),
            "rotation index {index} out of range for {} items",
            self.items.len()
        );
        self.direction = match index.cmp(&self.current) {
            Ordering::Greater => Direction::Forward,
            Ordering::Equal => Direction::Still,
            Ordering::Less => Direction::Backward,
        };
        self.current = index;
        &self.items[self.current]
    }

    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_rotation() {
        assert!(Rotation::<u8>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut rotation = Rotation::new(vec!["a", "b", "c", "d"]).unwrap();
        rotation.go_to(2);
        for _ in 0..rotation.len() {
            rotation.advance(Direction::Forward);
        }
        assert_eq!(rotation.index(), 2);
    }

    #[test]
    fn test_backward_wraps_to_last() {
        let mut rotation = Rotation::new(vec![1, 2, 3]).unwrap();
        assert_eq!(*rotation.advance(Direction::Backward), 3);
        assert_eq!(rotation.index(), 2);
        assert_eq!(rotation.direction(), Direction::Backward);
    }

    #[test]
    fn test_forward_wraps_to_first() {
        let mut rotation = Rotation::new(vec![1, 2, 3]).unwrap();
        rotation.go_to(2);
        assert_eq!(*rotation.advance(Direction::Forward), 1);
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.direction().as_i8(), 1);
    }

    #[test]
    fn test_single_item() {
        let mut rotation = Rotation::new(vec!["only"]).unwrap();
        rotation.advance(Direction::Forward);
        rotation.advance(Direction::Backward);
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut rotation = Rotation::new(vec![1, 2, 3]).unwrap();
        rotation.go_to(2);
        assert_eq!(rotation.direction(), Direction::Forward);
        rotation.go_to(0);
        assert_eq!(rotation.direction(), Direction::Backward);
        assert_eq!(*rotation.current(), 1);
    }

    #[test]
    fn test_go_to_current_stays_still() {
        let mut rotation = Rotation::new(vec![1, 2, 3]).unwrap();
        rotation.advance(Direction::Forward);
        assert_eq!(rotation.direction(), Direction::Forward);
        rotation.go_to(1);
        assert_eq!(rotation.direction(), Direction::Still);
        assert_eq!(rotation.direction().as_i8(), 0);
        assert_eq!(rotation.index(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_go_to_out_of_range_panics() {
        let mut rotation = Rotation::new(vec![1, 2, 3]).unwrap();
        rotation.go_to(3);
    }
}
