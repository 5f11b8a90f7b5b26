#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod console;
pub mod contact;
pub mod content;
pub mod relay;
pub mod view_state;

#[cfg(feature = "hydrate")]
const WELCOME_BANNER: [&str; 4] = [
    "👋 Hey there, curious developer!",
    "🎮 Try the Konami code: ↑ ↑ ↓ ↓ ← → ← → B A",
    "💻 Press Ctrl+` to open the command console",
    "🟩 Press Ctrl+M to toggle matrix mode",
];

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    for line in WELCOME_BANNER {
        log::info!("{line}");
    }
    leptos::mount::hydrate_body(App);
}
