use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener, use_interval_fn, use_mouse, use_timeout_fn, use_window, UseMouseReturn,
    UseTimeoutFnReturn,
};
use wasm_bindgen::JsCast;

use super::ViewContext;
use crate::view_state::{
    is_interactive, ring_scale, shortcut_for, CursorTrail, KonamiDetector, OverlayState, Shortcut,
    SplashProgress, SplashStep, TrailPoint, KONAMI_MESSAGE, KONAMI_MESSAGE_MS, SPLASH_HOLD_MS,
    SPLASH_TICK_MS,
};

const PARTICLE_COUNT: usize = 40;
const PARTICLE_SEED: u32 = 0x5eed;

#[component]
pub fn LoadingSplash(name: String) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let visible = move || ctx.overlay.with(|o| o.is_splash_active());

    view! {
        <Show when=visible>
            <SplashScreen name=name.clone() />
        </Show>
    }
}

/// Timers live here so they are cancelled when the splash unmounts.
#[component]
fn SplashScreen(name: String) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let splash = StoredValue::new(SplashProgress::new());
    let percent = RwSignal::new(0u8);
    let complete = RwSignal::new(false);

    let UseTimeoutFnReturn {
        start: start_hold, ..
    } = use_timeout_fn(
        move |_: ()| {
            ctx.overlay.update(|o| {
                if o.finish_splash() {
                    log::debug!("splash finished");
                }
            });
        },
        SPLASH_HOLD_MS as f64,
    );

    let ticker = use_interval_fn(
        move || match splash.try_update_value(|s| s.tick()) {
            Some(SplashStep::Progress(p)) => percent.set(p),
            Some(SplashStep::Complete) => complete.set(true),
            None => {}
        },
        SPLASH_TICK_MS,
    );

    Effect::new(move |_| {
        if complete.get() {
            (ticker.pause)();
            start_hold(());
        }
    });

    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center gap-6 bg-background">
            <h1 class="text-4xl font-bold tracking-widest text-accent animate-pulse">{name}</h1>
            <div class="w-64 h-1 rounded-full bg-muted/30 overflow-hidden">
                <div
                    class="h-full bg-accent transition-all"
                    style:width=move || format!("{}%", percent.get())
                ></div>
            </div>
            <p class="text-sm text-muted">{move || format!("Loading... {}%", percent.get())}</p>
        </div>
    }
}

/// Dot, hover ring and a short fading trail following the pointer.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let trail = RwSignal::new(CursorTrail::new());
    let hovering = RwSignal::new(false);

    Effect::new(move |_| {
        let (x, y) = (x.get(), y.get());
        trail.update(|t| t.push(x, y));
    });

    let _ = use_event_listener(use_window(), ev::mouseover, move |ev| {
        let over = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| {
                let pointer = el.class_name().split_whitespace().any(|c| c == "cursor-pointer");
                is_interactive(&el.tag_name(), pointer)
            });
        hovering.set(over);
    });

    view! {
        <div class="pointer-events-none fixed inset-0 z-[60] hidden md:block" aria-hidden="true">
            <div
                class="cursor-ring absolute top-0 left-0 w-6 h-6 -ml-3 -mt-3 rounded-full border-2 border-accent"
                style:transform=move || {
                    format!(
                        "translate({}px, {}px) scale({})",
                        x.get(),
                        y.get(),
                        ring_scale(hovering.get()),
                    )
                }
            ></div>
            <div
                class="custom-cursor absolute top-0 left-0 w-2 h-2 -ml-1 -mt-1 rounded-full bg-accent mix-blend-difference"
                style:transform=move || format!("translate({}px, {}px)", x.get(), y.get())
            ></div>
            <For
                each=move || trail.with(|t| t.points().copied().collect::<Vec<_>>())
                key=|p| p.id
                children=|p: TrailPoint| {
                    view! {
                        <div
                            class="cursor-trail absolute top-0 left-0 w-1 h-1 rounded-full bg-accent"
                            style:transform=format!("translate({}px, {}px)", p.x, p.y)
                        ></div>
                    }
                }
            />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
}

/// Positions from a fixed-seed LCG, so the server and the browser agree.
fn particles(count: usize, seed: u32) -> Vec<Particle> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(state >> 8) / f64::from(1u32 << 24)
    };
    (0..count)
        .map(|_| Particle {
            left: next() * 100.0,
            top: next() * 100.0,
            size: 1.0 + next() * 3.0,
            delay: next() * 6.0,
        })
        .collect()
}

#[component]
pub fn ParticleField() -> impl IntoView {
    view! {
        <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden" aria-hidden="true">
            {particles(PARTICLE_COUNT, PARTICLE_SEED)
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="particle absolute rounded-full bg-accent/40"
                            style=format!(
                                "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s",
                                p.left,
                                p.top,
                                p.size,
                                p.size,
                                p.delay,
                            )
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Global shortcuts, the Konami code and the layers they switch on.
#[component]
pub fn EasterEggs() -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let konami = StoredValue::new(KonamiDetector::new());

    let UseTimeoutFnReturn {
        start: start_celebration_timer,
        ..
    } = use_timeout_fn(move |_: ()| ctx.celebrating.set(false), KONAMI_MESSAGE_MS as f64);

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        let key = ev.key();
        match shortcut_for(&key, ev.ctrl_key()) {
            Some(Shortcut::ToggleConsole) => {
                ev.prevent_default();
                ctx.toggle(OverlayState::CommandOverlay);
            }
            Some(Shortcut::ToggleMatrix) => {
                ev.prevent_default();
                ctx.matrix.update(|m| *m = !*m);
            }
            Some(Shortcut::Dismiss) => ctx.dismiss(),
            None => {}
        }
        // keys typed into the console are not page input
        if ctx.overlay.with_untracked(|o| o.captures_typing()) {
            return;
        }
        if konami.try_update_value(|k| k.feed(&key)).unwrap_or(false) {
            log::info!("{KONAMI_MESSAGE}");
            ctx.celebrating.set(true);
            start_celebration_timer(());
        }
    });

    view! {
        <Show when=move || ctx.matrix.get()>
            <div class="matrix-rain pointer-events-none fixed inset-0 z-20" aria-hidden="true"></div>
        </Show>
        <Show when=move || ctx.celebrating.get()>
            <div class="fixed top-24 left-1/2 -translate-x-1/2 z-50 px-6 py-4 rounded-xl bg-accent text-background font-bold shadow-2xl animate-bounce">
                {KONAMI_MESSAGE}
            </div>
            <div class="celebration pointer-events-none fixed inset-0 z-40" aria-hidden="true"></div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_deterministic() {
        let a = particles(PARTICLE_COUNT, PARTICLE_SEED);
        let b = particles(PARTICLE_COUNT, PARTICLE_SEED);
        assert_eq!(a, b);
        assert_eq!(a.len(), PARTICLE_COUNT);
        assert_ne!(a, particles(PARTICLE_COUNT, PARTICLE_SEED + 1));
    }

    #[test]
    fn test_particles_stay_on_screen() {
        for p in particles(500, 7) {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.0..6.0).contains(&p.delay));
        }
    }
}
