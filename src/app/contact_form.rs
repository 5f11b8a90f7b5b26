use leptos::{ev, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactFields, ContactForm, ContactStatus, FAILED_NOTICE_MS, SENT_NOTICE_MS},
    content::Portfolio,
};

#[server]
pub async fn send_contact(fields: ContactFields) -> Result<(), ServerFnError> {
    use crate::relay::EmailRelay;

    fields
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let relay = use_context::<EmailRelay>()
        .ok_or_else(|| ServerFnError::new("email relay is not configured"))?;
    relay.send(&fields).await.map_err(|e| {
        tracing::warn!("contact relay failed: {e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn ContactSection(portfolio: &'static Portfolio) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    // timers for the two notices; a stale one is ignored by generation
    let UseTimeoutFnReturn {
        start: start_sent_timer,
        ..
    } = use_timeout_fn(
        move |generation: u64| {
            form.update(|f| {
                f.expire_notice(generation);
            });
        },
        SENT_NOTICE_MS as f64,
    );
    let UseTimeoutFnReturn {
        start: start_failed_timer,
        ..
    } = use_timeout_fn(
        move |generation: u64| {
            form.update(|f| {
                f.expire_notice(generation);
            });
        },
        FAILED_NOTICE_MS as f64,
    );
    let start_notice = move || {
        let (status, generation) = form.with_untracked(|f| (f.status().clone(), f.generation()));
        match status {
            ContactStatus::Sent => start_sent_timer(generation),
            ContactStatus::Failed(_) => start_failed_timer(generation),
            ContactStatus::Idle | ContactStatus::Sending => {}
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submit) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let fields = match submit {
            Ok(fields) => fields,
            Err(e) => {
                log::debug!("contact form not sent: {e}");
                start_notice();
                return;
            }
        };
        let start_notice = start_notice.clone();
        spawn_local(async move {
            let result = send_contact(fields).await;
            form.update(|f| {
                f.finish(result);
            });
            start_notice();
        });
    };

    view! {
        <section id="contact" class="py-24 px-6">
            <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-12">
                <div class="space-y-6">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="text-lg text-muted">
                        "Have a project in mind or just want to say hello? Send a message and I'll get back to you."
                    </p>
                    <a href=format!("mailto:{}", portfolio.profile.email) class="block text-accent">
                        {portfolio.profile.email.clone()}
                    </a>
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required
                        class="form-input"
                        prop:value=move || form.with(|f| f.fields().name.clone())
                        on:input=move |ev| form.update(|f| f.fields_mut().name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        required
                        class="form-input"
                        prop:value=move || form.with(|f| f.fields().email.clone())
                        on:input=move |ev| form.update(|f| f.fields_mut().email = event_target_value(&ev))
                    />
                    <input
                        type="tel"
                        name="phone"
                        placeholder="Your Phone"
                        required
                        class="form-input"
                        prop:value=move || form.with(|f| f.fields().phone.clone())
                        on:input=move |ev| form.update(|f| f.fields_mut().phone = event_target_value(&ev))
                    />
                    <textarea
                        name="message"
                        rows="5"
                        placeholder="Your Message"
                        required
                        class="form-input"
                        prop:value=move || form.with(|f| f.fields().message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.fields_mut().message = event_target_value(&ev))
                        }
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full px-6 py-3 rounded-full bg-accent text-background font-semibold disabled:opacity-50"
                        disabled=move || !form.with(|f| f.can_submit())
                    >
                        {move || {
                            if form.with(|f| f.can_submit()) { "Send Message" } else { "Sending..." }
                        }}
                    </button>
                    {move || match form.with(|f| f.status().clone()) {
                        ContactStatus::Sent => {
                            Some(
                                view! {
                                    <p class="text-green-400" role="status">
                                        "Message sent successfully!"
                                    </p>
                                }
                                    .into_any(),
                            )
                        }
                        ContactStatus::Failed(message) => {
                            Some(
                                view! {
                                    <p class="text-red-400" role="alert">
                                        {message}
                                    </p>
                                }
                                    .into_any(),
                            )
                        }
                        ContactStatus::Idle | ContactStatus::Sending => None,
                    }}
                </form>
            </div>
        </section>
    }
}
