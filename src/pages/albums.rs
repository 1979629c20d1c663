use leptos::*;

use crate::{
    api::{AlbumResponse, ApiClient},
    components::{
        layout::{ErrorMessage, LoadingSpinner, WithLayout},
        table::PaginatedTable,
    },
    utils::format::{format_duration, format_release_date},
};

#[component]
pub fn AlbumsPage() -> impl IntoView {
    view! {
        <WithLayout title="Albums">
            {|| view! { <AlbumsContent/> }}
        </WithLayout>
    }
}

#[component]
fn AlbumsContent() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let api_clone = api.clone();
    let albums = create_resource(
        || (),
        move |_| {
            let api = api_clone.clone();
            async move { api.list_albums().await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || albums.get().map(|result| match result {
                Ok(items) => view! {
                    <PaginatedTable
                        items=items
                        headers=vec!["Title", "Artist", "Released", "Tracks", "Runtime", "Status"]
                        render_row=album_row
                    />
                }
                .into_view(),
                Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
            })}
        </Suspense>
    }
}

pub(crate) fn album_status(published: bool) -> &'static str {
    if published {
        "Published"
    } else {
        "Draft"
    }
}

fn album_row(album: AlbumResponse, _index: usize) -> impl IntoView {
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{album.title}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{album.artist_name}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">
                {format_release_date(album.release_date)}
            </td>
            <td class="px-4 py-3 text-sm text-fg-muted">{album.track_count}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{format_duration(album.total_seconds)}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{album_status(album.published)}</td>
        </tr>
    }
}
