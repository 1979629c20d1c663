use leptos::*;

use crate::{
    api::AlbumResponse,
    components::{
        common::Button,
        empty_state::EmptyState,
        forms::TextField,
        layout::{ErrorMessage, LoadingSpinner, WithLayout},
        table::PaginatedTable,
    },
    pages::{albums::album_status, my_albums::view_model::use_my_albums_view_model},
    state::auth::Role,
    utils::format::{format_duration, format_release_date},
};

#[component]
pub fn MyAlbumsPage() -> impl IntoView {
    view! {
        <WithLayout title="My albums" allowed_roles=vec![Role::Artist, Role::Admin]>
            {|| view! { <MyAlbumsPanel/> }}
        </WithLayout>
    }
}

#[component]
fn MyAlbumsPanel() -> impl IntoView {
    let vm = use_my_albums_view_model();
    let toggle = Callback::new(vm.handle_toggle_published());
    let title_error = Signal::derive(move || {
        vm.form_error
            .get()
            .and_then(|error| error.field_error("title"))
    });

    view! {
        {move || vm.form_error.get().filter(|error| error.field_error("title").is_none()).map(|error| {
            view! { <ErrorMessage message=error.to_string()/> }
        })}
        <form class="mb-6 max-w-md" on:submit=vm.handle_create()>
            <TextField
                label="Album title"
                name="title"
                value=vm.form_title.read_only()
                on_input=Callback::new(move |value: String| vm.form_title.set(value))
                error=title_error
            />
            <TextField
                label="Release date"
                name="release_date"
                input_type="date".to_string()
                value=vm.form_release_date.read_only()
                on_input=Callback::new(move |value: String| vm.form_release_date.set(value))
            />
            <Button loading=vm.create_action.pending()>
                "Add album"
            </Button>
        </form>
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || vm.albums_resource.get().map(|result| match result {
                Ok(albums) if albums.is_empty() => view! {
                    <EmptyState
                        title="No albums yet"
                        description="Add your first album and publish it when it is ready.".to_string()
                    />
                }
                .into_view(),
                Ok(albums) => view! {
                    <PaginatedTable
                        items=albums
                        headers=vec!["Title", "Released", "Tracks", "Runtime", "Status", ""]
                        render_row=move |album: AlbumResponse, _index: usize| {
                            my_album_row(album, toggle)
                        }
                    />
                }
                .into_view(),
                Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
            })}
        </Suspense>
    }
}

fn my_album_row(album: AlbumResponse, on_toggle: Callback<AlbumResponse>) -> impl IntoView {
    let toggle_label = if album.published { "Unpublish" } else { "Publish" };
    let album_for_toggle = album.clone();
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{album.title.clone()}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">
                {format_release_date(album.release_date)}
            </td>
            <td class="px-4 py-3 text-sm text-fg-muted">{album.track_count}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{format_duration(album.total_seconds)}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{album_status(album.published)}</td>
            <td class="px-4 py-3 text-right">
                <Button
                    class="px-3 py-1.5"
                    on:click=move |_| on_toggle.call(album_for_toggle.clone())
                >
                    {toggle_label}
                </Button>
            </td>
        </tr>
    }
}
