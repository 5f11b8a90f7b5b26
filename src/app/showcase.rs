use leptos::{either::Either, ev, prelude::*};

use super::{sections::Tags, ViewContext};
use crate::{
    content::{Certification, Portfolio, Project, ALL_CATEGORIES},
    view_state::{Detail, OverlayKind, OverlayState},
};

#[component]
pub fn ProjectsSection(portfolio: &'static Portfolio) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let filter = RwSignal::new(ALL_CATEGORIES);

    view! {
        <section id="projects" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="section-title text-center mb-8">"Projects"</h2>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {portfolio
                        .project_categories()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if filter.get() == category {
                                            "px-4 py-2 rounded-full bg-accent text-background capitalize"
                                        } else {
                                            "px-4 py-2 rounded-full bg-surface hover:bg-accent/20 capitalize"
                                        }
                                    }
                                    on:click=move |_| filter.set(category)
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        portfolio
                            .projects_in(filter.get())
                            .map(|project| {
                                let id = project.id;
                                view! {
                                    <article
                                        class="group cursor-pointer rounded-xl overflow-hidden bg-surface hover:-translate-y-1 transition-transform"
                                        on:click=move |_| {
                                            ctx.open(OverlayState::DetailModal(Detail::Project(id)))
                                        }
                                    >
                                        <img
                                            src=project.image.clone()
                                            alt=project.title.clone()
                                            class="w-full h-48 object-cover"
                                        />
                                        <div class="p-6 space-y-2">
                                            <div class="flex items-center gap-2 text-xs text-accent">
                                                <span>{project.category.clone()}</span>
                                                {project.featured.then_some(view! { <span>"★ Featured"</span> })}
                                            </div>
                                            <h3 class="text-xl font-semibold">{project.title.clone()}</h3>
                                            <p class="text-sm text-muted line-clamp-3">{project.description.clone()}</p>
                                            <Tags tags=project.tags.clone() />
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CertificationsSection(portfolio: &'static Portfolio) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();

    view! {
        <section id="certifications" class="py-24 px-6">
            <div class="max-w-6xl mx-auto space-y-12">
                <h2 class="section-title text-center">"Certifications & Achievements"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {portfolio
                        .certifications
                        .iter()
                        .map(|cert| {
                            let id = cert.id;
                            view! {
                                <button
                                    type="button"
                                    class="text-left p-6 rounded-xl bg-surface hover:bg-accent/10 space-y-2"
                                    on:click=move |_| {
                                        ctx.open(OverlayState::DetailModal(Detail::Certification(id)))
                                    }
                                >
                                    <div class="text-4xl">{cert.badge.clone()}</div>
                                    <h3 class="text-lg font-semibold">{cert.title.clone()}</h3>
                                    <div class="text-sm text-accent">{cert.issuer.clone()}</div>
                                    <div class="text-xs text-muted">{cert.date.clone()}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {portfolio
                        .achievements
                        .iter()
                        .map(|a| {
                            view! {
                                <div class="p-6 rounded-xl bg-surface text-center space-y-2">
                                    <div class="text-3xl">{a.icon.clone()}</div>
                                    <h3 class="font-semibold">{a.title.clone()}</h3>
                                    <p class="text-sm text-muted">{a.description.clone()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Modal for whichever project or certification the overlay slot names.
#[component]
pub fn DetailModal(portfolio: &'static Portfolio) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let detail = Memo::new(move |_| ctx.overlay().detail());
    let close = move |_: ev::MouseEvent| ctx.close(OverlayKind::DetailModal);

    // an id with no content would leave an invisible overlay holding the slot
    Effect::new(move |_| {
        if let Some(missing) = detail.get().filter(|d| !portfolio.has_detail(*d)) {
            log::warn!("no content for {missing:?}, closing detail modal");
            ctx.close(OverlayKind::DetailModal);
        }
    });

    move || {
        let body = match detail.get()? {
            Detail::Project(id) => {
                let project = portfolio.project(id)?;
                Either::Left(view! { <ProjectDetail project /> })
            }
            Detail::Certification(id) => {
                let cert = portfolio.certification(id)?;
                Either::Right(view! { <CertificationDetail cert /> })
            }
        };
        Some(view! {
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-background/80 backdrop-blur-sm"
                on:click=close
            >
                <div
                    class="relative max-w-2xl w-full max-h-[90vh] overflow-y-auto rounded-2xl bg-surface p-8 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-2xl text-muted hover:text-foreground"
                        aria-label="Close"
                        on:click=close
                    >
                        "✕"
                    </button>
                    {body}
                </div>
            </div>
        })
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <img src=project.image.clone() alt=project.title.clone() class="w-full h-64 object-cover rounded-xl mb-6" />
        <div class="text-sm text-accent">{project.category.clone()}</div>
        <h3 class="text-3xl font-bold mb-4">{project.title.clone()}</h3>
        <p class="leading-relaxed">{project.description.clone()}</p>
        <Tags tags=project.tags.clone() />
        <div class="mt-6 flex gap-4">
            <a
                href=project.github.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="px-4 py-2 rounded-full border border-accent text-accent"
            >
                "Source"
            </a>
            {project
                .demo
                .clone()
                .map(|demo| {
                    view! {
                        <a
                            href=demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-4 py-2 rounded-full bg-accent text-background"
                        >
                            "Live Demo"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
fn CertificationDetail(cert: &'static Certification) -> impl IntoView {
    view! {
        <div class="text-6xl mb-4">{cert.badge.clone()}</div>
        <h3 class="text-2xl font-bold">{cert.title.clone()}</h3>
        <div class="text-accent">{cert.issuer.clone()}</div>
        <div class="text-sm text-muted mb-4">{cert.date.clone()}</div>
        <Tags tags=cert.skills.clone() />
        {cert
            .verify_url
            .clone()
            .map(|url| {
                view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block mt-6 px-4 py-2 rounded-full bg-accent text-background"
                    >
                        "Verify"
                    </a>
                }
            })}
    }
}
