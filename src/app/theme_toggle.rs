use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::view_state::{Theme, THEME_STORAGE_KEY};

/// The visual theme, persisted in local storage.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.stored.with(|s| Theme::from_stored(Some(s.as_str())))
    }

    pub fn set(&self, theme: Theme) {
        self.set_stored.set(theme.to_string());
    }

    pub fn cycle(&self) {
        let next = self
            .stored
            .with_untracked(|s| Theme::from_stored(Some(s.as_str())))
            .next();
        log::debug!("theme -> {next}");
        self.set(next);
    }
}

/// Reads the stored theme and keeps `data-theme` on the document element in sync.
pub fn provide_theme() {
    let (stored, set_stored, _) =
        use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    let ctx = ThemeContext { stored, set_stored };

    Effect::new(move |_| {
        let theme = ctx.get();
        let Some(root) = document().document_element() else {
            return;
        };
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("could not apply theme {theme}");
        }
    });
    provide_context(ctx);
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <div class="fixed bottom-6 left-6 z-40 flex gap-2 rounded-full p-1 bg-surface/80 backdrop-blur">
            {Theme::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button
                            type="button"
                            title=t.label()
                            aria-label=format!("{} theme", t.label())
                            class=move || {
                                if theme.get() == t {
                                    "px-3 py-1 rounded-full bg-accent text-background"
                                } else {
                                    "px-3 py-1 rounded-full hover:bg-accent/20"
                                }
                            }
                            on:click=move |_| theme.set(t)
                        >
                            {t.icon()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
