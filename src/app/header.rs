use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_ITEMS, SITE};

use super::theme::use_theme;

const SCROLLED_AFTER: f64 = 50.0;

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_AFTER;
    let (menu_open, set_menu_open) = signal(false);

    let bar = move |open_class: &'static str| {
        move || {
            if menu_open.get() {
                format!("block h-0.5 w-full bg-foreground transition-all duration-300 {open_class}")
            } else {
                "block h-0.5 w-full bg-foreground transition-all duration-300".to_string()
            }
        }
    };

    view! {
        <header class=move || {
            if scrolled() {
                "fixed w-full top-0 left-0 z-50 transition-all duration-300 bg-background/80 backdrop-blur-xl shadow-md py-2"
            } else {
                "fixed w-full top-0 left-0 z-50 transition-all duration-300 bg-transparent py-4"
            }
        }>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <a href="#home" class="text-2xl font-display font-bold text-gradient">
                    {SITE.brand.0}
                    <span class="text-primary">{SITE.brand.1}</span>
                </a>

                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-sm font-medium hover:text-primary transition-colors relative group"
                                >
                                    {item.name}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-primary transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-2">
                    <button
                        class="rounded-full w-10 h-10 hover:bg-primary/10 transition-colors"
                        on:click=move |_| theme.update(|t| *t = t.toggled())
                    >
                        {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                        <span class="sr-only">"Toggle theme"</span>
                    </button>
                    <a
                        href="#contact"
                        class="hidden md:inline-flex px-4 py-2 rounded-md bg-primary hover:bg-primary/80 text-white transition-all duration-300"
                    >
                        "Hire Me"
                    </a>
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <div class="w-6 flex flex-col gap-1.5">
                            <span class=bar("rotate-45 translate-y-2")></span>
                            <span class=bar("opacity-0")></span>
                            <span class=bar("-rotate-45 -translate-y-2")></span>
                        </div>
                    </button>
                </div>
            </div>

            <div class=move || {
                if menu_open.get() {
                    "absolute top-full left-0 w-full bg-background/95 backdrop-blur-xl transition-all duration-300 overflow-hidden md:hidden max-h-[500px] border-b border-border"
                } else {
                    "absolute top-full left-0 w-full bg-background/95 backdrop-blur-xl transition-all duration-300 overflow-hidden md:hidden max-h-0"
                }
            }>
                <nav class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="text-lg font-medium px-4 py-2 hover:bg-primary/10 rounded-md transition-colors"
                                    on:click=move |_| set_menu_open(false)
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="mt-2 px-4 py-2 rounded-md bg-primary text-white text-center"
                        on:click=move |_| set_menu_open(false)
                    >
                        "Hire Me"
                    </a>
                </nav>
            </div>
        </header>
    }
}
