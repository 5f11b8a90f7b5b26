//! Page view state: which section is on screen, which overlay owns the page,
//! and the small cyclers and key sequences that drive the decorative parts.
//!
//! Nothing here touches the DOM. The `app` components feed browser events in
//! and render whatever these types report back.

mod cursor;
mod keys;
mod overlay;
mod rotation;
mod scroll;
mod sections;
mod theme;

pub use cursor::{is_interactive, ring_scale, CursorTrail, TrailPoint, HOVER_SCALE, TRAIL_LEN};
pub use keys::{shortcut_for, KonamiDetector, Shortcut, KONAMI_MESSAGE, KONAMI_MESSAGE_MS};
pub use overlay::{
    Detail, OverlayKind, OverlayManager, OverlayState, SplashProgress, SplashStep, SPLASH_HOLD_MS,
    SPLASH_TICK_MS,
};
pub use rotation::{Direction, Rotation, AUTO_ADVANCE_MS};
pub use scroll::{ScrollPosition, ScrollTracker, SCROLLED_THRESHOLD};
pub use sections::{Section, SectionId, SectionResolver, SectionSpec, SECTIONS};
pub use theme::{Theme, THEME_STORAGE_KEY};
