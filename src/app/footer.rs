use leptos::prelude::*;

use crate::content::{QUICK_LINKS, SERVICES, SITE};

/// Year the binary was built, taken from the RFC 3339 stamp `build.rs` records.
fn build_year() -> &'static str {
    let stamp = env!("BUILD_TIME");
    stamp.get(..4).unwrap_or(stamp)
}

#[component]
pub fn Footer() -> impl IntoView {
    let socials = [
        ("LinkedIn", SITE.linkedin),
        ("GitHub", SITE.github),
        ("Twitter", SITE.twitter),
    ];

    view! {
        <footer class="bg-muted/5 border-t border-border pt-16 pb-8">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-12">
                    <div class="space-y-4">
                        <a href="#home" class="text-2xl font-display font-bold text-gradient">
                            {SITE.brand.0}
                            <span class="text-primary">{SITE.brand.1}</span>
                        </a>
                        <p class="text-muted text-sm">
                            "Building fast, secure, and thoughtful software for the web and the networks behind it."
                        </p>
                        <div class="flex gap-3">
                            {socials
                                .into_iter()
                                .map(|(name, href)| {
                                    view! {
                                        <a
                                            href=href
                                            aria-label=name
                                            class="px-3 py-1 rounded-full bg-primary/10 hover:bg-primary hover:text-white text-sm transition-colors"
                                        >
                                            {name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {QUICK_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=format!("#{}", link.to_lowercase())
                                                class="text-muted hover:text-primary text-sm transition-colors"
                                            >
                                                {*link}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4">"Services"</h4>
                        <ul class="space-y-2">
                            {SERVICES
                                .iter()
                                .map(|service| {
                                    view! { <li class="text-muted text-sm">{*service}</li> }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4">"Contact"</h4>
                        <address class="not-italic text-muted text-sm space-y-2">
                            <p>{SITE.location}</p>
                            <p>
                                <a href=format!("mailto:{}", SITE.email) class="hover:text-primary">
                                    {SITE.email}
                                </a>
                            </p>
                            <p>
                                <a href=SITE.phone_href class="hover:text-primary">
                                    {SITE.phone}
                                </a>
                            </p>
                        </address>
                    </div>
                </div>

                <div class="border-t border-border pt-8 text-center text-sm text-muted">
                    {format!(
                        "© {} {}{}. All rights reserved.",
                        build_year(),
                        SITE.brand.0,
                        SITE.brand.1,
                    )}
                </div>
            </div>
        </footer>
    }
}
