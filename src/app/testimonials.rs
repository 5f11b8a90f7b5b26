use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::{
    content::{Portfolio, Testimonial},
    view_state::{Direction, Rotation, AUTO_ADVANCE_MS},
};

#[component]
pub fn TestimonialsSection(portfolio: &'static Portfolio) -> impl IntoView {
    let items = portfolio.testimonials.iter().collect::<Vec<_>>();
    let Some(rotation) = Rotation::new(items) else {
        return ().into_any();
    };
    view! { <Carousel rotation /> }.into_any()
}

/// Auto-advances on a fixed interval. Manual paging does not reset the timer.
#[component]
fn Carousel(rotation: Rotation<&'static Testimonial>) -> impl IntoView {
    let count = rotation.len();
    let rotation = RwSignal::new(rotation);

    // cancelled with the component
    let _ = use_interval_fn(
        move || {
            rotation.update(|r| {
                r.advance(Direction::Forward);
            });
        },
        AUTO_ADVANCE_MS,
    );

    let step = move |direction: Direction| {
        rotation.update(|r| {
            r.advance(direction);
        });
    };
    let slide_class = move || match rotation.with(|r| r.direction()) {
        Direction::Forward => "animate-slide-left",
        Direction::Backward => "animate-slide-right",
        Direction::Still => "",
    };

    view! {
        <section id="testimonials" class="py-24 px-6">
            <div class="max-w-3xl mx-auto text-center space-y-8">
                <h2 class="section-title">"Testimonials"</h2>
                {move || {
                    let t = rotation.with(|r| *r.current());
                    view! {
                        <blockquote class=format!("p-8 rounded-2xl bg-surface space-y-4 {}", slide_class())>
                            <img
                                src=t.image.clone()
                                alt=t.name.clone()
                                class="mx-auto w-20 h-20 rounded-full object-cover"
                            />
                            <div class="text-accent" aria-label=format!("{} out of 5", t.rating)>
                                {"★".repeat(t.rating.min(5) as usize)}
                            </div>
                            <p class="text-lg italic">{format!("\u{201c}{}\u{201d}", t.text)}</p>
                            <footer>
                                <div class="font-semibold">{t.name.clone()}</div>
                                <div class="text-sm text-muted">
                                    {format!("{}, {}", t.role, t.company)}
                                </div>
                            </footer>
                        </blockquote>
                    }
                }}
                <div class="flex items-center justify-center gap-4">
                    <button
                        type="button"
                        class="w-10 h-10 rounded-full bg-surface hover:bg-accent/20"
                        aria-label="Previous testimonial"
                        on:click=move |_| step(Direction::Backward)
                    >
                        "‹"
                    </button>
                    {(0..count)
                        .map(|i| {
                            view! {
                                <button
                                    type="button"
                                    aria-label=format!("Show testimonial {}", i + 1)
                                    class=move || {
                                        if rotation.with(|r| r.index()) == i {
                                            "w-3 h-3 rounded-full bg-accent"
                                        } else {
                                            "w-3 h-3 rounded-full bg-muted/40"
                                        }
                                    }
                                    on:click=move |_| {
                                        rotation.update(|r| {
                                            r.go_to(i);
                                        })
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                    <button
                        type="button"
                        class="w-10 h-10 rounded-full bg-surface hover:bg-accent/20"
                        aria-label="Next testimonial"
                        on:click=move |_| step(Direction::Forward)
                    >
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}
