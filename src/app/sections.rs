use std::collections::HashSet;

use chrono::Datelike;
use leptos::prelude::*;

use super::ViewContext;
use crate::content::{Portfolio, ALL_CATEGORIES};

const FALLBACK_YEAR: i32 = 2026;

#[component]
pub fn HeroSection(portfolio: &'static Portfolio) -> impl IntoView {
    let ctx = expect_context::<ViewContext>();
    let profile = &portfolio.profile;

    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center px-6 pt-24">
            <div class="max-w-4xl text-center space-y-6">
                <img
                    src=profile.image.clone()
                    alt=profile.name.clone()
                    class="mx-auto w-40 h-40 rounded-full object-cover border-4 border-accent shadow-2xl"
                />
                <h1 class="text-6xl md:text-8xl font-black tracking-tight glitch" data-text=profile.headline.clone()>
                    {profile.headline.clone()}
                </h1>
                <p class="text-xl text-accent">{profile.roles.clone()}</p>
                <p class="text-lg text-muted">{profile.tagline.clone()}</p>
                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        type="button"
                        class="px-6 py-3 rounded-full bg-accent text-background font-semibold"
                        on:click=move |_| {
                            ctx.jump_to("projects");
                        }
                    >
                        "View Projects"
                    </button>
                    <button
                        type="button"
                        class="px-6 py-3 rounded-full border border-accent text-accent font-semibold"
                        on:click=move |_| {
                            ctx.jump_to("contact");
                        }
                    >
                        "Get In Touch"
                    </button>
                </div>
                <SocialLinks portfolio />
            </div>
        </section>
    }
}

#[component]
fn SocialLinks(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <div class="flex justify-center gap-4">
            {portfolio
                .profile
                .socials
                .iter()
                .map(|s| {
                    view! {
                        <a
                            href=s.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            title=s.label.clone()
                            aria-label=s.label.clone()
                            class="w-12 h-12 flex items-center justify-center rounded-full bg-surface hover:bg-accent/20 text-xl"
                        >
                            {s.icon.clone()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AboutSection(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;

    view! {
        <section id="about" class="py-24 px-6">
            <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12">
                <div class="space-y-6">
                    <h2 class="section-title">"About Me"</h2>
                    <p class="text-lg leading-relaxed">{profile.summary.clone()}</p>
                    <div class="grid grid-cols-2 gap-4">
                        {profile
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="p-4 rounded-xl bg-surface text-center">
                                        <div class="text-3xl font-bold text-accent">{stat.value.clone()}</div>
                                        <div class="text-sm text-muted">{stat.label.clone()}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <ol class="relative border-l border-accent/40 space-y-8 pl-6">
                    {profile
                        .timeline
                        .iter()
                        .map(|m| {
                            view! {
                                <li>
                                    <span class="absolute -left-1.5 w-3 h-3 rounded-full bg-accent"></span>
                                    <div class="text-sm text-accent">{m.year.clone()}</div>
                                    <h3 class="font-semibold">{m.title.clone()}</h3>
                                    <p class="text-sm text-muted">{m.description.clone()}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

/// Skill cards under a category filter. A card flips on click and stays
/// flipped across filter changes.
#[component]
pub fn SkillsSection(portfolio: &'static Portfolio) -> impl IntoView {
    let filter = RwSignal::new(ALL_CATEGORIES);
    let flipped = RwSignal::new(HashSet::<&'static str>::new());

    view! {
        <section id="skills" class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="section-title text-center mb-8">"Skills"</h2>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {portfolio
                        .skill_categories()
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
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {move || {
                        portfolio
                            .skills_in(filter.get())
                            .map(|skill| {
                                let name = skill.name.as_str();
                                let is_flipped = move || flipped.with(|f| f.contains(name));
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if is_flipped() { "skill-card flipped" } else { "skill-card" }
                                        }
                                        aria-pressed=move || is_flipped().to_string()
                                        on:click=move |_| {
                                            flipped
                                                .update(|f| {
                                                    if !f.remove(name) {
                                                        f.insert(name);
                                                    }
                                                })
                                        }
                                    >
                                        <div class="skill-card-front p-6 rounded-xl bg-surface space-y-2">
                                            <h3 class="text-lg font-semibold">{name}</h3>
                                            <p class="text-sm text-muted">{skill.category.clone()}</p>
                                            <p class="text-xs text-accent">"Click to flip"</p>
                                        </div>
                                        <div class="skill-card-back p-6 rounded-xl bg-surface space-y-3">
                                            <div class="text-3xl font-bold text-accent">
                                                {format!("{}%", skill.proficiency)}
                                            </div>
                                            <div class="h-2 rounded-full bg-muted/20 overflow-hidden">
                                                <div
                                                    class="h-full bg-accent"
                                                    style:width=format!("{}%", skill.proficiency.min(100))
                                                ></div>
                                            </div>
                                            <p class="text-xs text-accent">"Click to flip back"</p>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="mt-12 flex flex-wrap justify-center gap-8 text-center">
                    {portfolio
                        .skills_by_category()
                        .into_iter()
                        .map(|(category, skills)| {
                            view! {
                                <div>
                                    <div class="text-2xl font-bold text-accent">{skills.len()}</div>
                                    <div class="text-sm text-muted">{category.to_string()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id="experience" class="py-24 px-6">
            <div class="max-w-4xl mx-auto">
                <h2 class="section-title text-center mb-12">"Experience"</h2>
                <div class="space-y-8">
                    {portfolio
                        .experience
                        .iter()
                        .map(|role| {
                            view! {
                                <article class="p-6 rounded-xl bg-surface border-l-4 border-accent">
                                    <div class="flex flex-wrap justify-between gap-2">
                                        <h3 class="text-xl font-semibold">{role.role.clone()}</h3>
                                        <span class="text-sm text-muted">{role.period.clone()}</span>
                                    </div>
                                    <div class="text-accent">{role.company.clone()}</div>
                                    <p class="mt-3">{role.description.clone()}</p>
                                    <ul class="mt-3 list-disc list-inside text-sm text-muted">
                                        {role
                                            .achievements
                                            .iter()
                                            .map(|a| view! { <li>{a.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                    <Tags tags=role.technologies.clone() />
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Tags(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="mt-4 flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|t| {
                    view! { <span class="px-2 py-1 text-xs rounded-full bg-accent/10 text-accent">{t}</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ResumeSection(portfolio: &'static Portfolio) -> impl IntoView {
    let resume = &portfolio.resume;

    view! {
        <section id="resume" class="py-24 px-6">
            <div class="max-w-4xl mx-auto space-y-8">
                <h2 class="section-title text-center">"Resume"</h2>
                <p class="text-lg leading-relaxed">{resume.summary.clone()}</p>
                <div class="grid md:grid-cols-2 gap-6">
                    {resume
                        .education
                        .iter()
                        .map(|e| {
                            view! {
                                <div class="p-6 rounded-xl bg-surface">
                                    <h3 class="font-semibold">{e.degree.clone()}</h3>
                                    <div class="text-accent">{e.institution.clone()}</div>
                                    <div class="flex justify-between text-sm text-muted mt-2">
                                        <span>{e.years.clone()}</span>
                                        <span>{e.grade.clone()}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <a
                        href=resume.download.clone()
                        download=""
                        class="inline-block px-6 py-3 rounded-full bg-accent text-background font-semibold"
                    >
                        "Download Resume"
                    </a>
                </div>
            </div>
        </section>
    }
}

fn build_year() -> i32 {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <footer class="py-8 px-6 border-t border-muted/20 text-center text-sm text-muted space-y-2">
            <SocialLinks portfolio />
            <p>{format!("© {} {}. All rights reserved.", build_year(), portfolio.profile.name)}</p>
            <p>"Press " <kbd class="px-1 rounded bg-surface">"Ctrl"</kbd> " + "
                <kbd class="px-1 rounded bg-surface">"`"</kbd> " to open the console."</p>
        </footer>
    }
}
