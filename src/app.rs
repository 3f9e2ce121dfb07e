mod about;
mod blog;
mod contact;
mod cursor;
mod footer;
mod header;
mod hero;
mod portfolio;
pub mod reveal;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::content::SITE;
use about::AboutSection;
use blog::BlogSection;
use contact::ContactSection;
use cursor::CustomCursor;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use portfolio::PortfolioSection;
use reveal::provide_reveal;
use skills::SkillsSection;
use theme::{provide_theme, use_theme};

const SCROLL_TO_TOP_AFTER: f64 = 500.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <noscript>
                    <style>".reveal-hidden { opacity: 1 !important; transform: none !important; }"</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_reveal();
    provide_theme();

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE.owner) />
        <Meta name="description" content=SITE.tagline />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio: every section on one scrolling page.
#[component]
fn HomePage() -> impl IntoView {
    let theme = use_theme();
    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!("{} min-h-screen bg-background text-foreground relative", theme.get().class())
        }>
            <CustomCursor />
            <Header />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <PortfolioSection />
                <BlogSection />
                <ContactSection />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = move || scroll_y.get() > SCROLL_TO_TOP_AFTER;

    view! {
        <button
            aria-label="Scroll to top"
            class=move || {
                format!(
                    "fixed bottom-6 right-6 z-40 w-10 h-10 rounded-full bg-primary text-primary-foreground shadow-lg transition-all duration-300 {}",
                    if visible() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    },
                )
            }
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}

fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollToOptions};

        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}
