use leptos::prelude::*;

use crate::{
    content::{Skill, ADDITIONAL_SKILLS, SKILL_CATEGORIES},
    reveal::Stagger,
};

use super::reveal::Reveal;

const SKILL_STAGGER: Stagger = Stagger::from_millis(400, 100);

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    view! {
        <section id="skills" class="py-20 relative bg-muted/5">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="section-title">"My Skills"</h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "Technologies and tools I work with every day."
                    </p>
                </Reveal>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == i {
                                            "px-5 py-2 rounded-full bg-primary text-white transition-all"
                                        } else {
                                            "px-5 py-2 rounded-full bg-primary/10 hover:bg-primary/20 transition-all"
                                        }
                                    }
                                    on:click=move |_| set_active(i)
                                >
                                    {category.name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // keyed on the category so its rows remount and reveal again
                {move || {
                    let category = &SKILL_CATEGORIES[active.get()];
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-5xl mx-auto mb-16">
                            {category
                                .skills
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| view! { <SkillRow skill=skill index=i /> })
                                .collect_view()}
                        </div>
                    }
                }}

                <Reveal class="text-center">
                    <h3 class="text-xl font-display font-bold mb-6">"Additional Expertise"</h3>
                    <div class="flex flex-wrap justify-center gap-3 max-w-3xl mx-auto">
                        {ADDITIONAL_SKILLS
                            .iter()
                            .map(|s| {
                                view! {
                                    <span class="px-4 py-2 glass-card rounded-full text-sm hover:text-primary transition-colors">
                                        {*s}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillRow(skill: &'static Skill, index: usize) -> impl IntoView {
    view! {
        <Reveal delay=SKILL_STAGGER.delay(index) class="glass-card rounded-xl p-6">
            <div class="flex justify-between mb-2">
                <span class="font-semibold">{skill.name}</span>
                <span class="text-primary">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 bg-primary/10 rounded-full overflow-hidden mb-3">
                <div
                    class="h-full bg-gradient-to-r from-primary to-secondary rounded-full"
                    style:width=format!("{}%", skill.level)
                ></div>
            </div>
            <p class="text-sm text-muted">{skill.description}</p>
        </Reveal>
    }
}
