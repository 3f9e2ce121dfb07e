use std::time::Duration;

use leptos::prelude::*;
use server_fn::codec::GetUrl;

use crate::{blog::PostMeta, reveal::Stagger};

use super::reveal::Reveal;

const RECENT_POSTS: usize = 3;
const POST_STAGGER: Stagger = Stagger::from_millis(300, 100);
const VIEW_ALL_DELAY: Duration = Duration::from_millis(700);

#[server(input = GetUrl)]
pub async fn get_recent_posts(limit: usize) -> Result<Vec<PostMeta>, ServerFnError> {
    crate::blog::recent_posts(limit).map_err(|e| {
        tracing::error!("failed to load blog posts: {e}");
        ServerFnError::new(e)
    })
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = Resource::new(
        || RECENT_POSTS,
        move |limit| async move {
            get_recent_posts(limit).await.unwrap_or_else(|e| {
                log::warn!("blog teaser unavailable: {e}");
                Vec::new()
            })
        },
    );

    view! {
        <section id="blog" class="py-20 relative bg-muted/5">
            <div class="container mx-auto px-4">
                <Reveal class="text-center mb-16">
                    <h2 class="section-title">"Latest Articles"</h2>
                    <p class="text-muted max-w-2xl mx-auto">
                        "Thoughts on development, infrastructure, and the craft of building software."
                    </p>
                </Reveal>

                <Transition fallback=move || {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                            {(0..RECENT_POSTS)
                                .map(|_| {
                                    view! {
                                        <div class="glass-card rounded-xl overflow-hidden">
                                            <div class="loading-skeleton h-48"></div>
                                            <div class="p-6 space-y-3">
                                                <div class="loading-skeleton h-4 rounded w-1/3"></div>
                                                <div class="loading-skeleton h-6 rounded"></div>
                                                <div class="loading-skeleton h-4 rounded w-4/5"></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let posts = posts.await;
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                                {posts
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, post)| view! { <PostCard post=post index=i /> })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>

                <ViewAllArticles />
            </div>
        </section>
    }
}

#[component]
fn ViewAllArticles() -> impl IntoView {
    view! {
        <Reveal delay=VIEW_ALL_DELAY class="text-center mt-12">
            <a
                href="#blog"
                class="inline-flex px-6 py-3 rounded-md border border-primary text-primary hover:bg-primary/10 transition-all duration-300"
            >
                "View All Articles"
            </a>
        </Reveal>
    }
}

#[component]
fn PostCard(post: PostMeta, index: usize) -> impl IntoView {
    let date = post.display_date();
    view! {
        <Reveal delay=POST_STAGGER.delay(index)>
            <article class="glass-card rounded-xl overflow-hidden group h-full flex flex-col">
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=post.image
                        alt=post.title.clone()
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <span class="absolute top-3 left-3 px-3 py-1 rounded-full bg-primary/90 text-white text-xs">
                        {post.category}
                    </span>
                </div>
                <div class="p-6 flex flex-col flex-grow">
                    <div class="flex gap-4 text-xs text-muted mb-3">
                        <span>{date}</span>
                        <span>{post.read_time}</span>
                    </div>
                    <h3 class="text-lg font-semibold mb-2 group-hover:text-primary transition-colors">
                        {post.title}
                    </h3>
                    <p class="text-sm text-muted mb-4 flex-grow">{post.description}</p>
                    <div class="flex justify-between items-center text-sm">
                        <span class="text-muted">"By " {post.author}</span>
                        <span class="text-primary">"Read More →"</span>
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_view_all_articles_starts_hidden() {
        let html = Owner::new().with(|| view! { <ViewAllArticles /> }.to_html());

        assert!(html.contains("View All Articles"));
        assert!(html.contains("href=\"#blog\""));
        assert!(html.contains("reveal reveal-hidden text-center mt-12"));
        assert!(VIEW_ALL_DELAY > POST_STAGGER.delay(RECENT_POSTS - 1));
    }
}
