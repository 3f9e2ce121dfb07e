use std::{sync::Arc, time::Duration};

use leptos::prelude::*;

use crate::{
    contact::{ContactForm, Field, FormErrors, FormStatus, PendingStep, RESET_DELAY, SUBMIT_DELAY},
    content::SITE,
};

use super::reveal::{DomTimers, Reveal};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 relative">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "Have a project in mind or want to talk shop? Send me a message."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <Reveal delay=Duration::from_millis(200) class="space-y-6">
                        <ContactInfo />
                    </Reveal>
                    <Reveal delay=Duration::from_millis(400) class="lg:col-span-2">
                        <ContactFormCard />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="glass-card rounded-xl p-6 space-y-6">
            <h3 class="text-xl font-display font-bold">"Contact Information"</h3>
            <div>
                <p class="text-sm text-muted">"Email"</p>
                <a href=format!("mailto:{}", SITE.email) class="hover:text-primary transition-colors">
                    {SITE.email}
                </a>
            </div>
            <div>
                <p class="text-sm text-muted">"Phone"</p>
                <a href=SITE.phone_href class="hover:text-primary transition-colors">
                    {SITE.phone}
                </a>
            </div>
            <div>
                <p class="text-sm text-muted">"Location"</p>
                <p>{SITE.location}</p>
            </div>
        </div>
        <div class="glass-card rounded-xl p-6">
            <h3 class="text-xl font-display font-bold mb-2">"Availability"</h3>
            <p class="text-muted text-sm">
                "Currently taking on freelance projects and open to full-time opportunities."
            </p>
            <div class="flex items-center gap-2 mt-4">
                <span class="w-3 h-3 rounded-full bg-green-500 animate-pulse"></span>
                <span class="text-sm">"Available for new projects"</span>
            </div>
        </div>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let status = RwSignal::new(FormStatus::Idle);
    let busy = move || status.get().is_busy();
    let step = Arc::new(PendingStep::new(DomTimers));
    on_cleanup({
        let step = Arc::clone(&step);
        move || step.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = status.get_untracked();
        if current.is_busy() {
            return;
        }
        match form.with_untracked(|f| current.on_submit(f)) {
            Err(found) => errors.set(found),
            Ok(next) => {
                errors.set(FormErrors::default());
                status.set(next);
                let reset = Arc::clone(&step);
                step.schedule(SUBMIT_DELAY, move || {
                    log::debug!("contact form delivered");
                    status.update(|s| *s = s.on_delivered());
                    form.update(ContactForm::clear);
                    reset.schedule(RESET_DELAY, move || status.update(|s| *s = s.on_reset()));
                });
            }
        }
    };

    view! {
        <form class="glass-card rounded-xl p-6 space-y-6 relative" on:submit=on_submit novalidate>
            <h3 class="text-xl font-display font-bold">"Send Me a Message"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField form=form errors=errors field=Field::FullName busy=busy placeholder="John Doe" />
                <FormField form=form errors=errors field=Field::Email busy=busy placeholder="john@example.com" />
            </div>
            <FormField form=form errors=errors field=Field::Subject busy=busy placeholder="Project inquiry" />
            <FormField form=form errors=errors field=Field::Message busy=busy placeholder="Tell me about your project..." />
            <button
                type="submit"
                class="w-full px-6 py-3 rounded-md bg-primary hover:bg-primary/80 text-white transition-all duration-300 disabled:opacity-60"
                disabled=busy
            >
                {move || if busy() { "Sending..." } else { "Send Message" }}
            </button>

            <Show when=move || status.get() == FormStatus::Submitted>
                <div
                    role="status"
                    class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50 glass-card rounded-lg px-6 py-4 shadow-xl"
                >
                    <p class="font-semibold">"Message sent!"</p>
                    <p class="text-sm text-muted">"Thanks for reaching out. I'll get back to you soon."</p>
                </div>
            </Show>
        </form>
    }
}

fn field_value(form: &ContactForm, field: Field) -> &str {
    match field {
        Field::FullName => &form.full_name,
        Field::Email => &form.email,
        Field::Subject => &form.subject,
        Field::Message => &form.message,
    }
}

fn field_value_mut(form: &mut ContactForm, field: Field) -> &mut String {
    match field {
        Field::FullName => &mut form.full_name,
        Field::Email => &mut form.email,
        Field::Subject => &mut form.subject,
        Field::Message => &mut form.message,
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    errors: RwSignal<FormErrors>,
    field: Field,
    busy: impl Fn() -> bool + Copy + Send + Sync + 'static,
    placeholder: &'static str,
) -> impl IntoView {
    let id = format!("contact-{}", field.label().to_lowercase());
    let value = move || form.with(|f| field_value(f, field).to_string());
    let error = move || errors.with(|e| e.message(field));
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| *field_value_mut(f, field) = text);
        errors.update(|e| e.clear(field));
    };
    let input_class = move || {
        if error().is_some() {
            "w-full px-4 py-2 rounded-md bg-background border border-red-500 focus:outline-none focus:ring-2 focus:ring-red-500"
        } else {
            "w-full px-4 py-2 rounded-md bg-background border border-border focus:outline-none focus:ring-2 focus:ring-primary"
        }
    };

    let input_type = if field == Field::Email { "email" } else { "text" };
    let input = if field == Field::Message {
        view! {
            <textarea
                id=id.clone()
                rows="5"
                class=input_class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=busy
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type=input_type
                class=input_class
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=busy
            />
        }
        .into_any()
    };

    view! {
        <div class="space-y-2">
            <label for=id class="text-sm font-medium">
                {field.label()}
            </label>
            {input}
            {move || error().map(|msg| view! { <p class="text-sm text-red-500">{msg}</p> })}
        </div>
    }
}
