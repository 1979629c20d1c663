use leptos::*;

use crate::{
    api::{ApiClient, ArtistResponse},
    components::{
        layout::{ErrorMessage, LoadingSpinner, WithLayout},
        table::PaginatedTable,
    },
};

#[component]
pub fn ArtistsPage() -> impl IntoView {
    view! {
        <WithLayout title="Artists">
            {|| view! { <ArtistsContent/> }}
        </WithLayout>
    }
}

#[component]
fn ArtistsContent() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let api_clone = api.clone();
    let artists = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { api.list_artists().await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || artists.get().map(|result| match result {
                Ok(items) => view! {
                    <PaginatedTable
                        items=items
                        headers=vec!["Name", "Genre", "Albums"]
                        render_row=artist_row
                    />
                }
                .into_view(),
                Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
            })}
        </Suspense>
    }
}

fn artist_row(artist: ArtistResponse, _index: usize) -> impl IntoView {
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{artist.name}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">
                {artist.genre.unwrap_or_else(|| "Unknown".to_string())}
            </td>
            <td class="px-4 py-3 text-sm text-fg-muted">{artist.album_count}</td>
        </tr>
    }
}
