use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::{SITE, TIMELINE, TRAITS},
    reveal::Stagger,
};

use super::reveal::Reveal;

const TIMELINE_STAGGER: Stagger = Stagger::from_millis(500, 200);

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 relative">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="section-title">"About Me"</h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "Get to know more about me, my background, and what drives me."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center mb-20">
                    <Reveal delay=Duration::from_millis(200)>
                        <div class="relative max-w-sm mx-auto">
                            <div class="absolute inset-0 bg-gradient-to-br from-primary to-secondary rounded-2xl rotate-6"></div>
                            <div class="relative glass-card rounded-2xl aspect-square flex items-center justify-center text-6xl font-display font-bold text-gradient">
                                {SITE.brand.0}
                            </div>
                        </div>
                    </Reveal>

                    <Reveal delay=Duration::from_millis(400) class="space-y-6">
                        <h3 class="text-2xl font-display font-bold">
                            "Software Developer, Web Developer & Network Engineer"
                        </h3>
                        <p class="text-muted">
                            "I build reliable software and the networks it runs on. Over the years I have shipped enterprise web applications, designed secure infrastructure, and helped teams turn rough ideas into products people enjoy using."
                        </p>
                        <p class="text-muted">
                            "I care about clean code, honest estimates, and interfaces that stay out of the way."
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {TRAITS
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="px-3 py-1 rounded-full bg-primary/10 text-primary text-sm">
                                            {*t}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>

                <Reveal class="text-center mb-12">
                    <h3 class="text-2xl font-display font-bold">"My Journey"</h3>
                </Reveal>
                <div class="relative max-w-4xl mx-auto">
                    <div class="absolute left-1/2 -translate-x-1/2 h-full w-0.5 bg-primary/30"></div>
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let side = if i % 2 == 0 {
                                "md:pr-12 md:text-right md:mr-auto"
                            } else {
                                "md:pl-12 md:ml-auto"
                            };
                            view! {
                                <Reveal
                                    delay=TIMELINE_STAGGER.delay(i)
                                    class=format!("relative mb-12 md:w-1/2 {side}")
                                >
                                    <div class="glass-card rounded-xl p-6">
                                        <span class="text-primary font-bold">{entry.year}</span>
                                        <h4 class="text-lg font-semibold mt-1">{entry.title}</h4>
                                        <p class="text-muted mt-2">{entry.description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
