mod console_overlay;
mod contact_form;
mod effects;
mod navigation;
mod sections;
mod showcase;
mod testimonials;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::JsCast;

use crate::{
    content::{portfolio, Portfolio},
    view_state::{
        OverlayKind, OverlayManager, OverlayState, ScrollTracker, SectionId, SectionResolver,
        SECTIONS,
    },
};

use console_overlay::CommandConsole;
use contact_form::ContactSection;
use effects::{CustomCursor, EasterEggs, LoadingSplash, ParticleField};
use navigation::Navigation;
use sections::{AboutSection, ExperienceSection, Footer, HeroSection, ResumeSection, SkillsSection};
use showcase::{CertificationsSection, DetailModal, ProjectsSection};
use testimonials::TestimonialsSection;
use theme_toggle::{provide_theme, ThemeToggle};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Page-wide view state shared by every component.
///
/// There is exactly one section resolver: the desktop bar and the mobile menu
/// both highlight from it.
#[derive(Clone, Copy)]
pub struct ViewContext {
    pub overlay: RwSignal<OverlayManager>,
    pub sections: RwSignal<SectionResolver>,
    pub scroll: RwSignal<ScrollTracker>,
    pub matrix: RwSignal<bool>,
    pub celebrating: RwSignal<bool>,
}

impl ViewContext {
    fn new() -> Self {
        Self {
            overlay: RwSignal::new(OverlayManager::new()),
            sections: RwSignal::new(SectionResolver::new(&SECTIONS)),
            scroll: RwSignal::new(ScrollTracker::new()),
            matrix: RwSignal::new(false),
            celebrating: RwSignal::new(false),
        }
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay.with(|o| o.current())
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.overlay.with(|o| o.is_open(kind))
    }

    pub fn open(&self, state: OverlayState) {
        self.overlay.update(|o| {
            if !o.open(state) {
                log::debug!("overlay {state:?} not opened");
            }
        });
    }

    pub fn close(&self, kind: OverlayKind) {
        self.overlay.update(|o| {
            o.close(kind);
        });
    }

    pub fn toggle(&self, state: OverlayState) {
        self.overlay.update(|o| {
            o.toggle(state);
        });
    }

    pub fn dismiss(&self) {
        self.overlay.update(|o| {
            o.dismiss();
        });
    }

    pub fn active_section(&self) -> SectionId {
        self.sections.with(|r| r.active())
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.with(|t| t.position().is_scrolled())
    }

    /// Smooth-scrolls to a section. Returns `false` when it is not rendered.
    pub fn jump_to(&self, id: SectionId) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            log::warn!("no element for section '{id}'");
            return false;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

fn section_layout(id: SectionId) -> Option<(f64, f64)> {
    let el = document()
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some((el.offset_top() as f64, el.offset_height() as f64))
}

/// Feeds window scroll and resize readings into the tracker and resolver.
fn track_scroll(ctx: ViewContext) {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, height } = use_window_size();

    Effect::new(move |_| {
        ctx.scroll.update(|t| t.attach());
    });
    on_cleanup(move || {
        ctx.scroll.try_update(|t| t.detach());
    });

    // boundaries move on resize and once the splash has cleared
    Effect::new(move |_| {
        width.track();
        height.track();
        let splash = ctx.overlay.with(|o| o.is_splash_active());
        let position = ctx.scroll.with_untracked(|t| t.position());
        ctx.sections.update(|r| {
            r.measure(section_layout);
            r.resolve(position);
        });
        log::debug!("measured sections (splash active: {splash})");
    });

    Effect::new(move |_| {
        let offset = scroll_y.get();
        let viewport = height.get();
        let mut accepted = None;
        ctx.scroll.update(|t| {
            if t.observe(Some(offset), Some(viewport)) {
                accepted = Some(t.position());
            }
        });
        // content above may have changed height since the last reading
        if let Some(position) = accepted {
            ctx.sections.update(|r| {
                r.refresh(section_layout, position);
            });
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = ViewContext::new();
    provide_context(ctx);
    provide_theme();
    track_scroll(ctx);

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let portfolio: &'static Portfolio = match portfolio() {
        Ok(portfolio) => portfolio,
        Err(e) => {
            log::error!("{e}");
            return view! { <p class="p-8">"Content is unavailable."</p> }.into_any();
        }
    };

    view! {
        <Title text=format!("{} | Portfolio", portfolio.profile.name) />
        <LoadingSplash name=portfolio.profile.name.clone() />
        <CustomCursor />
        <ParticleField />
        <EasterEggs />
        <Navigation initials=portfolio.profile.initials.clone() />
        <ThemeToggle />
        <main class=move || {
            if ctx.matrix.get() { "relative matrix-mode" } else { "relative" }
        }>
            <HeroSection portfolio />
            <AboutSection portfolio />
            <SkillsSection portfolio />
            <ProjectsSection portfolio />
            <ExperienceSection portfolio />
            <ResumeSection portfolio />
            <CertificationsSection portfolio />
            <TestimonialsSection portfolio />
            <ContactSection portfolio />
        </main>
        <Footer portfolio />
        <DetailModal portfolio />
        <CommandConsole portfolio />
    }
    .into_any()
}
