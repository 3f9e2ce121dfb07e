use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::{filter_projects, find_project, project_categories, Project, ALL_CATEGORIES},
    reveal::Stagger,
};

use super::reveal::Reveal;

const CARD_STAGGER: Stagger = Stagger::from_millis(300, 100);
const PREVIEW_CHIPS: usize = 3;

#[component]
pub fn PortfolioSection() -> impl IntoView {
    let (filter, set_filter) = signal(ALL_CATEGORIES);
    let selected = RwSignal::new(None::<u32>);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;
        use leptos_use::{use_document, use_event_listener};

        let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
            if ev.key() == "Escape" && selected.get_untracked().is_some() {
                selected.set(None);
            }
        });
    }

    view! {
        <section id="portfolio" class="py-20 relative">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="section-title">"My Portfolio"</h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "A selection of recent projects across software, web, and network engineering."
                    </p>
                </Reveal>

                <Reveal class="flex flex-wrap justify-center gap-3 mb-12">
                    {project_categories()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == category {
                                            "px-5 py-2 rounded-full bg-primary text-white transition-all"
                                        } else {
                                            "px-5 py-2 rounded-full bg-primary/10 hover:bg-primary/20 transition-all"
                                        }
                                    }
                                    on:click=move |_| set_filter(category)
                                >
                                    {category}
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || {
                            filter_projects(filter.get()).into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|(_, project)| project.id
                        children=move |(index, project)| {
                            view! {
                                <ProjectCard
                                    project=project
                                    index=index
                                    on_open=move || selected.set(Some(project.id))
                                />
                            }
                        }
                    />
                </div>

                <Reveal delay=Duration::from_millis(700) class="text-center mt-12">
                    <a
                        href="#portfolio"
                        class="inline-flex px-6 py-3 rounded-md bg-primary hover:bg-primary/80 text-white transition-all duration-300"
                    >
                        "View All Projects"
                    </a>
                </Reveal>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(find_project)
                    .map(|project| {
                        view! { <ProjectModal project=project on_close=move || selected.set(None) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    on_open: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let (chips, hidden) = project.preview_technologies(PREVIEW_CHIPS);
    view! {
        <Reveal delay=CARD_STAGGER.delay(index)>
            <div
                role="button"
                class="glass-card rounded-xl overflow-hidden group cursor-pointer h-full"
                on:click=move |_| on_open()
            >
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <span class="absolute top-3 left-3 px-3 py-1 rounded-full bg-primary/90 text-white text-xs">
                        {project.category}
                    </span>
                </div>
                <div class="p-6">
                    <h3 class="text-lg font-semibold mb-2 group-hover:text-primary transition-colors">
                        {project.title}
                    </h3>
                    <p class="text-sm text-muted mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2">
                        {chips
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2 py-1 rounded bg-primary/10 text-xs">{*tech}</span>
                                }
                            })
                            .collect_view()}
                        {(hidden > 0)
                            .then(|| {
                                view! {
                                    <span class="px-2 py-1 rounded bg-primary/10 text-xs">
                                        {format!("+{hidden}")}
                                    </span>
                                }
                            })}
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectModal(
    project: &'static Project,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/70 backdrop-blur-sm"
            on:click=move |_| on_close()
        >
            <div
                role="dialog"
                aria-modal="true"
                class="glass-card rounded-xl max-w-3xl w-full max-h-[90vh] overflow-y-auto bg-background"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="relative h-64">
                    <img src=project.image alt=project.title class="w-full h-full object-cover" />
                    <button
                        aria-label="Close"
                        class="absolute top-4 right-4 w-10 h-10 rounded-full bg-black/50 text-white hover:bg-black/70"
                        on:click=move |_| on_close()
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6 space-y-4">
                    <span class="px-3 py-1 rounded-full bg-primary/10 text-primary text-sm">
                        {project.category}
                    </span>
                    <h3 class="text-2xl font-display font-bold">{project.title}</h3>
                    <p class="text-muted">{project.detailed_description}</p>
                    <div>
                        <h4 class="font-semibold mb-2">"Technologies"</h4>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1 rounded bg-primary/10 text-sm">{*tech}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex gap-4 pt-2">
                        <a
                            href=project.demo_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-5 py-2 rounded-md bg-primary hover:bg-primary/80 text-white transition-colors"
                        >
                            "Live Demo"
                        </a>
                        <a
                            href=project.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-5 py-2 rounded-md border border-primary text-primary hover:bg-primary/10 transition-colors"
                        >
                            "Source Code"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
