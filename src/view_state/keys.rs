/// ↑ ↑ ↓ ↓ ← → ← → B A
const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub const KONAMI_MESSAGE: &str = "🎮 KONAMI CODE ACTIVATED! You found the secret!";
pub const KONAMI_MESSAGE_MS: u64 = 5000;

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+`
    ToggleConsole,
    /// Ctrl+M
    ToggleMatrix,
    /// Escape
    Dismiss,
}

pub fn shortcut_for(key: &str, ctrl: bool) -> Option<Shortcut> {
    match (key, ctrl) {
        ("`", true) => Some(Shortcut::ToggleConsole),
        ("m", true) => Some(Shortcut::ToggleMatrix),
        ("Escape", _) => Some(Shortcut::Dismiss),
        _ => None,
    }
}

/// Matches the Konami code one key at a time. Any wrong key starts over.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    matched: usize,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the key that completes the sequence.
    pub fn feed(&mut self, key: &str) -> bool {
        if KONAMI_CODE[self.matched] != key {
            self.matched = 0;
            return false;
        }
        self.matched += 1;
        if self.matched == KONAMI_CODE.len() {
            self.matched = 0;
            return true;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(detector: &mut KonamiDetector, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|k| detector.feed(k)).collect()
    }

    #[test]
    fn test_full_sequence_triggers_once() {
        let mut detector = KonamiDetector::new();
        let hits = feed_all(&mut detector, &KONAMI_CODE);
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_wrong_key_resets() {
        let mut detector = KonamiDetector::new();
        feed_all(&mut detector, &KONAMI_CODE[..5]);
        assert_eq!(detector.progress(), 5);
        assert!(!detector.feed("x"));
        assert_eq!(detector.progress(), 0);

        // the tail alone does not trigger
        assert!(!feed_all(&mut detector, &KONAMI_CODE[5..]).contains(&true));
    }

    #[test]
    fn test_triggers_again_after_reset() {
        let mut detector = KonamiDetector::new();
        feed_all(&mut detector, &KONAMI_CODE);
        assert!(feed_all(&mut detector, &KONAMI_CODE)[9]);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(shortcut_for("`", true), Some(Shortcut::ToggleConsole));
        assert_eq!(shortcut_for("`", false), None);
        assert_eq!(shortcut_for("m", true), Some(Shortcut::ToggleMatrix));
        assert_eq!(shortcut_for("m", false), None);
        assert_eq!(shortcut_for("Escape", false), Some(Shortcut::Dismiss));
        assert_eq!(shortcut_for("a", true), None);
    }
}
