use leptos::*;

use crate::{
    api::{ApiClient, PostResponse},
    components::layout::{ErrorMessage, LoadingSpinner, WithLayout},
    router::routes,
    utils::format::{format_release_date, format_timestamp},
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <WithLayout title="Welcome" require_auth=false>
            {|| view! { <HomeContent/> }}
        </WithLayout>
    }
}

#[component]
fn HomeContent() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let api_clone = api.clone();
    let featured = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { api.featured_albums().await }
        },
    );

    let api_clone = api.clone();
    let latest = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { api.latest_posts(3).await }
        },
    );

    view! {
        <section class="mb-10">
            <h3 class="text-3xl font-bold text-fg mb-2">"Discover new music"</h3>
            <p class="text-fg-muted mb-4">
                "Browse the catalog, follow your favorite artists, and build playlists."
            </p>
            <a
                href=routes::ALBUMS
                class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover"
            >
                "Browse albums"
            </a>
        </section>
        <section class="mb-10">
            <h3 class="text-xl font-semibold text-fg mb-4">"Featured albums"</h3>
            <Suspense fallback=move || view! { <LoadingSpinner/> }>
                {move || featured.get().map(|result| match result {
                    Ok(albums) => view! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            {albums
                                .into_iter()
                                .map(|album| view! {
                                    <div class="rounded-lg border border-border bg-surface-elevated p-4 shadow-sm">
                                        <p class="font-medium text-fg">{album.title}</p>
                                        <p class="text-sm text-fg-muted">{album.artist_name}</p>
                                        <p class="text-sm text-fg-muted">
                                            {format_release_date(album.release_date)}
                                        </p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                    Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                })}
            </Suspense>
        </section>
        <section>
            <h3 class="text-xl font-semibold text-fg mb-4">"Latest posts"</h3>
            <Suspense fallback=move || view! { <LoadingSpinner/> }>
                {move || latest.get().map(|result| match result {
                    Ok(posts) => view! {
                        <div class="space-y-4">
                            {posts.into_iter().map(post_card).collect_view()}
                        </div>
                    }
                    .into_view(),
                    Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                })}
            </Suspense>
        </section>
    }
}

fn post_card(post: PostResponse) -> impl IntoView {
    view! {
        <article class="rounded-lg border border-border bg-surface-elevated p-4 shadow-sm">
            <h4 class="font-medium text-fg">{post.title}</h4>
            <p class="text-sm text-fg-muted">
                {format!("{} · {}", post.author, format_timestamp(post.published_at))}
            </p>
            {post.excerpt.map(|excerpt| view! {
                <p class="mt-2 text-sm text-fg">{excerpt}</p>
            })}
        </article>
    }
}
