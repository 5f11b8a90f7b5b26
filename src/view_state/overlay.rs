/// Interval between splash progress ticks.
pub const SPLASH_TICK_MS: u64 = 40;
/// How long the splash stays on screen at 100% before it exits.
pub const SPLASH_HOLD_MS: u64 = 500;
const SPLASH_STEP: u8 = 2;

/// What a detail modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    Project(u32),
    Certification(u32),
}

/// The single overlay slot of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    None,
    MobileMenu,
    CommandOverlay,
    DetailModal(Detail),
    LoadingSplash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    MobileMenu,
    CommandOverlay,
    DetailModal,
    LoadingSplash,
}

impl OverlayState {
    pub fn kind(&self) -> Option<OverlayKind> {
        match self {
            Self::None => None,
            Self::MobileMenu => Some(OverlayKind::MobileMenu),
            Self::CommandOverlay => Some(OverlayKind::CommandOverlay),
            Self::DetailModal(_) => Some(OverlayKind::DetailModal),
            Self::LoadingSplash => Some(OverlayKind::LoadingSplash),
        }
    }

    pub fn detail(&self) -> Option<Detail> {
        match self {
            Self::DetailModal(detail) => Some(*detail),
            _ => None,
        }
    }
}

/// Keeps at most one overlay open.
///
/// Opening an overlay replaces whatever was open. The loading splash is entered
/// at construction only; while it is up every user request is ignored, and it
/// leaves through [`OverlayManager::finish_splash`].
#[derive(Debug, Clone)]
pub struct OverlayManager {
    current: OverlayState,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayManager {
    pub fn new() -> Self {
        Self {
            current: OverlayState::LoadingSplash,
        }
    }

    pub fn current(&self) -> OverlayState {
        self.current
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.current.kind() == Some(kind)
    }

    /// Whether key presses belong to a text input rather than the page.
    pub fn captures_typing(&self) -> bool {
        self.current == OverlayState::CommandOverlay
    }

    pub fn is_splash_active(&self) -> bool {
        self.current == OverlayState::LoadingSplash
    }

    /// Returns whether the overlay slot changed.
    pub fn open(&mut self, overlay: OverlayState) -> bool {
        match overlay {
            OverlayState::None => false,
            OverlayState::LoadingSplash => {
                log::warn!("loading splash cannot be reopened");
                false
            }
            _ if self.is_splash_active() => {
                log::debug!("ignoring {overlay:?} while loading splash is up");
                false
            }
            _ => {
                if self.current != OverlayState::None && self.current != overlay {
                    log::debug!("{:?} replaces {:?}", overlay, self.current);
                }
                let changed = self.current != overlay;
                self.current = overlay;
                changed
            }
        }
    }

    /// Closing something that is not open is a no-op.
    pub fn close(&mut self, kind: OverlayKind) -> bool {
        if kind == OverlayKind::LoadingSplash || !self.is_open(kind) {
            return false;
        }
        self.current = OverlayState::None;
        true
    }

    pub fn toggle(&mut self, overlay: OverlayState) -> bool {
        match overlay.kind() {
            Some(kind) if self.is_open(kind) => self.close(kind),
            _ => self.open(overlay),
        }
    }

    /// Escape key or backdrop click: closes whatever user overlay is open.
    pub fn dismiss(&mut self) -> bool {
        match self.current.kind() {
            Some(kind) => self.close(kind),
            None => false,
        }
    }

    pub fn finish_splash(&mut self) -> bool {
        if !self.is_splash_active() {
            return false;
        }
        log::debug!("loading splash finished");
        self.current = OverlayState::None;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashStep {
    Progress(u8),
    /// Progress has been at 100 for a tick; start the exit hold.
    Complete,
}

/// Simulated loading progress: +2% per tick up to 100.
#[derive(Debug, Clone, Default)]
pub struct SplashProgress {
    percent: u8,
}

impl SplashProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn tick(&mut self) -> SplashStep {
        if self.percent >= 100 {
            return SplashStep::Complete;
        }
        self.percent = (self.percent + SPLASH_STEP).min(100);
        SplashStep::Progress(self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> OverlayManager {
        let mut overlays = OverlayManager::new();
        assert!(overlays.finish_splash());
        overlays
    }

    #[test]
    fn test_starts_with_splash_that_suppresses_everything() {
        let mut overlays = OverlayManager::new();
        assert_eq!(overlays.current(), OverlayState::LoadingSplash);

        assert!(!overlays.open(OverlayState::MobileMenu));
        assert!(!overlays.toggle(OverlayState::CommandOverlay));
        assert!(!overlays.dismiss());
        assert!(!overlays.close(OverlayKind::LoadingSplash));
        assert_eq!(overlays.current(), OverlayState::LoadingSplash);

        assert!(overlays.finish_splash());
        assert_eq!(overlays.current(), OverlayState::None);
        assert!(overlays.open(OverlayState::MobileMenu));
        assert_eq!(overlays.current(), OverlayState::MobileMenu);
    }

    #[test]
    fn test_splash_cannot_be_reopened() {
        let mut overlays = ready();
        assert!(!overlays.open(OverlayState::LoadingSplash));
        assert!(!overlays.finish_splash());
        assert_eq!(overlays.current(), OverlayState::None);
    }

    #[test]
    fn test_opening_modal_closes_mobile_menu() {
        let mut overlays = ready();
        overlays.open(OverlayState::MobileMenu);
        assert!(overlays.open(OverlayState::DetailModal(Detail::Project(3))));

        assert!(!overlays.is_open(OverlayKind::MobileMenu));
        assert!(overlays.is_open(OverlayKind::DetailModal));
        assert_eq!(overlays.current().detail(), Some(Detail::Project(3)));
    }

    #[test]
    fn test_close_only_affects_the_open_overlay() {
        let mut overlays = ready();
        assert!(!overlays.close(OverlayKind::CommandOverlay));

        overlays.open(OverlayState::CommandOverlay);
        assert!(!overlays.close(OverlayKind::MobileMenu));
        assert!(overlays.is_open(OverlayKind::CommandOverlay));

        assert!(overlays.close(OverlayKind::CommandOverlay));
        assert_eq!(overlays.current(), OverlayState::None);
    }

    #[test]
    fn test_toggle() {
        let mut overlays = ready();
        assert!(overlays.toggle(OverlayState::CommandOverlay));
        assert!(overlays.is_open(OverlayKind::CommandOverlay));
        assert!(overlays.toggle(OverlayState::CommandOverlay));
        assert_eq!(overlays.current(), OverlayState::None);

        overlays.open(OverlayState::MobileMenu);
        assert!(overlays.toggle(OverlayState::CommandOverlay));
        assert!(overlays.is_open(OverlayKind::CommandOverlay));
    }

    #[test]
    fn test_dismiss_closes_any_user_overlay() {
        let mut overlays = ready();
        assert!(!overlays.dismiss());

        overlays.open(OverlayState::DetailModal(Detail::Certification(1)));
        assert!(overlays.dismiss());
        assert_eq!(overlays.current(), OverlayState::None);
    }

    #[test]
    fn test_only_the_console_captures_typing() {
        let mut overlays = ready();
        assert!(!overlays.captures_typing());

        overlays.open(OverlayState::CommandOverlay);
        assert!(overlays.captures_typing());

        overlays.open(OverlayState::MobileMenu);
        assert!(!overlays.captures_typing());
        overlays.open(OverlayState::DetailModal(Detail::Project(1)));
        assert!(!overlays.captures_typing());
        assert!(!OverlayManager::new().captures_typing());
    }

    #[test]
    fn test_switching_modal_payload() {
        let mut overlays = ready();
        overlays.open(OverlayState::DetailModal(Detail::Project(1)));
        assert!(overlays.open(OverlayState::DetailModal(Detail::Project(2))));
        assert!(!overlays.open(OverlayState::DetailModal(Detail::Project(2))));
        assert_eq!(overlays.current().detail(), Some(Detail::Project(2)));
    }

    #[test]
    fn test_splash_progress() {
        let mut progress = SplashProgress::new();
        assert_eq!(progress.tick(), SplashStep::Progress(2));

        let mut ticks = 1;
        while progress.tick() != SplashStep::Complete {
            ticks += 1;
        }
        // 50 ticks to reach 100, one more to complete
        assert_eq!(ticks, 50);
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.tick(), SplashStep::Complete);
    }
}
