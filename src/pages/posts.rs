use leptos::*;

use crate::{
    api::{ApiClient, PostResponse},
    components::{
        layout::{ErrorMessage, LoadingSpinner, WithLayout},
        table::PaginatedTable,
    },
    utils::format::format_timestamp,
};

#[component]
pub fn PostsPage() -> impl IntoView {
    view! {
        <WithLayout title="Posts">
            {|| view! { <PostsContent/> }}
        </WithLayout>
    }
}

#[component]
fn PostsContent() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let api_clone = api.clone();
    let posts = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { api.list_posts().await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || posts.get().map(|result| match result {
                Ok(items) => view! {
                    <PaginatedTable
                        items=items
                        headers=vec!["Title", "Author", "Published"]
                        render_row=post_row
                    />
                }
                .into_view(),
                Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
            })}
        </Suspense>
    }
}

fn post_row(post: PostResponse, _index: usize) -> impl IntoView {
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{post.title}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{post.author}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{format_timestamp(post.published_at)}</td>
        </tr>
    }
}
