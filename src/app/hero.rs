use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::SITE;

const PARALLAX_RATE: f64 = 0.5;

#[component]
pub fn HeroSection() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let background_offset = move || format!("{}px", scroll_y.get() * PARALLAX_RATE);

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center pt-20 overflow-hidden"
        >
            <div
                class="absolute inset-0 grid-pattern opacity-30 -z-10"
                style:background-position-y=background_offset
            ></div>
            <div class="absolute top-1/4 right-0 w-72 h-72 bg-primary/20 rounded-full filter blur-3xl -z-10"></div>
            <div class="absolute bottom-1/4 left-0 w-96 h-96 bg-secondary/20 rounded-full filter blur-3xl -z-10"></div>

            <div class="container mx-auto px-4 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-6 animate-fade-in">
                    <p class="text-primary font-medium">"Hello, I'm " {SITE.owner}</p>
                    <h1 class="text-4xl md:text-6xl font-display font-bold leading-tight">
                        "Creating " <span class="text-gradient">{SITE.headline}</span>
                        " for the Digital World"
                    </h1>
                    <p class="text-lg text-muted max-w-xl">{SITE.tagline}</p>
                    <div class="flex flex-wrap gap-4 pt-4">
                        <a
                            href="#portfolio"
                            class="px-6 py-3 rounded-md bg-primary hover:bg-primary/80 text-white transition-all duration-300"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            class="px-6 py-3 rounded-md border border-primary text-primary hover:bg-primary/10 transition-all duration-300"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>

                <div class="hidden lg:block">
                    <CodeCard />
                </div>
            </div>

            <a
                href="#about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-muted hover:text-primary transition-colors"
            >
                <span class="text-sm mb-2">"Scroll Down"</span>
                <span class="animate-bounce">"↓"</span>
            </a>
        </section>
    }
}

#[component]
fn CodeCard() -> impl IntoView {
    view! {
        <div class="glass-card rounded-xl p-6 font-mono text-sm shadow-xl">
            <div class="flex gap-2 mb-4">
                <span class="w-3 h-3 rounded-full bg-red-500"></span>
                <span class="w-3 h-3 rounded-full bg-yellow-500"></span>
                <span class="w-3 h-3 rounded-full bg-green-500"></span>
            </div>
            <pre class="whitespace-pre-wrap leading-relaxed">
                <span class="text-primary">"const "</span>
                "developer = {\n"
                "  name: "
                <span class="text-green-500">{format!("\"{}\"", SITE.owner)}</span>
                ",\n"
                "  skills: ["
                <span class="text-green-500">"\"Web\", \"Software\", \"Networks\""</span>
                "],\n"
                "  passion: "
                <span class="text-green-500">"\"Building the future\""</span>
                ",\n"
                "  available: "
                <span class="text-primary">"true"</span>
                "\n};"
                <span class="caret-blink">"|"</span>
            </pre>
        </div>
    }
}
