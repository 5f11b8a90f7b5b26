use leptos::prelude::*;

use super::ViewContext;
use crate::view_state::{OverlayKind, OverlayState, SectionSpec, SECTIONS};

#[component]
pub fn Navigation(initials: String) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let menu_open = move || ctx.is_open(OverlayKind::MobileMenu);

    view! {
        <header class=move || {
            if ctx.is_scrolled() {
                "fixed top-0 inset-x-0 z-40 transition-all bg-background/90 backdrop-blur shadow-lg py-3"
            } else {
                "fixed top-0 inset-x-0 z-40 transition-all bg-transparent py-6"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <button
                    type="button"
                    class="text-2xl font-bold text-accent"
                    on:click=move |_| {
                        ctx.jump_to(SECTIONS[0].id);
                    }
                >
                    {initials}
                </button>
                <nav class="hidden md:flex items-center gap-6">
                    {SECTIONS
                        .into_iter()
                        .map(|spec| view! { <NavItem spec /> })
                        .collect_view()}
                </nav>
                <button
                    type="button"
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| ctx.toggle(OverlayState::MobileMenu)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
        <Show when=menu_open>
            <MobileMenu />
        </Show>
    }
}

#[component]
fn NavItem(spec: SectionSpec) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let is_active = move || ctx.active_section() == spec.id;

    view! {
        <button
            type="button"
            class=move || {
                if is_active() {
                    "text-sm font-medium text-accent border-b-2 border-accent"
                } else {
                    "text-sm font-medium text-muted hover:text-foreground"
                }
            }
            on:click=move |_| {
                ctx.jump_to(spec.id);
            }
        >
            {spec.label}
        </button>
    }
}

/// Full-screen menu for narrow viewports. Highlights from the same resolver as
/// the desktop bar.
#[component]
fn MobileMenu() -> impl IntoView {
    let ctx = expect_context::<ViewContext>();

    view! {
        <div
            class="fixed inset-0 z-30 bg-background/60 backdrop-blur-sm md:hidden"
            on:click=move |_| ctx.close(OverlayKind::MobileMenu)
        ></div>
        <nav class="fixed top-20 inset-x-4 z-40 flex flex-col gap-2 rounded-xl p-4 bg-surface shadow-2xl md:hidden">
            {SECTIONS
                .into_iter()
                .map(|spec| {
                    let is_active = move || ctx.active_section() == spec.id;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_active() {
                                    "text-left px-4 py-2 rounded-md bg-accent/20 text-accent"
                                } else {
                                    "text-left px-4 py-2 rounded-md hover:bg-accent/10"
                                }
                            }
                            on:click=move |_| {
                                if ctx.jump_to(spec.id) {
                                    ctx.close(OverlayKind::MobileMenu);
                                }
                            }
                        >
                            {spec.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
