use leptos::*;

use crate::{
    api::{AlbumResponse, ArtistResponse},
    components::{
        common::{Button, ButtonVariant},
        forms::TextField,
        layout::{ErrorMessage, LoadingSpinner, WithLayout},
        table::PaginatedTable,
    },
    pages::{albums::album_status, admin_catalog::view_model::use_admin_catalog_view_model},
    state::auth::Role,
    utils::format::format_release_date,
};

#[component]
pub fn AdminCatalogPage() -> impl IntoView {
    view! {
        <WithLayout title="Manage catalog" allowed_roles=vec![Role::Admin]>
            {|| view! { <AdminCatalogPanel/> }}
        </WithLayout>
    }
}

#[component]
fn AdminCatalogPanel() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <ArtistsSection/>
            <AlbumsSection/>
        </div>
    }
}

#[component]
fn ArtistsSection() -> impl IntoView {
    let vm = use_admin_catalog_view_model();
    let edit = Callback::new(vm.handle_edit());
    let delete = Callback::new(vm.handle_delete());
    let name_error = Signal::derive(move || {
        vm.form_error
            .get()
            .and_then(|error| error.field_error("name"))
    });
    let form_heading = move || {
        if vm.editing.get().is_some() {
            "Edit artist"
        } else {
            "Add artist"
        }
    };

    view! {
        <section>
            <h3 class="text-xl font-semibold text-fg mb-4">"Artists"</h3>
            {move || vm.form_error.get().filter(|error| error.field_error("name").is_none()).map(|error| {
                view! { <ErrorMessage message=error.to_string()/> }
            })}
            <form class="mb-6 max-w-md" on:submit=vm.handle_save()>
                <h4 class="text-sm font-semibold text-fg-muted uppercase tracking-wide mb-2">
                    {form_heading}
                </h4>
                <TextField
                    label="Name"
                    name="name"
                    value=vm.form_name.read_only()
                    on_input=Callback::new(move |value: String| vm.form_name.set(value))
                    error=name_error
                />
                <TextField
                    label="Genre"
                    name="genre"
                    value=vm.form_genre.read_only()
                    on_input=Callback::new(move |value: String| vm.form_genre.set(value))
                />
                <div class="flex gap-2">
                    <Button loading=vm.save_action.pending()>
                        {move || if vm.editing.get().is_some() { "Save changes" } else { "Add artist" }}
                    </Button>
                    <Show when=move || vm.editing.get().is_some()>
                        <Button
                            variant=ButtonVariant::Danger
                            on:click=vm.handle_cancel_edit()
                        >
                            "Cancel"
                        </Button>
                    </Show>
                </div>
            </form>
            <Suspense fallback=move || view! { <LoadingSpinner/> }>
                {move || vm.artists_resource.get().map(|result| match result {
                    Ok(artists) => view! {
                        <PaginatedTable
                            items=artists
                            headers=vec!["Name", "Genre", "Albums", ""]
                            render_row=move |artist: ArtistResponse, _index: usize| {
                                admin_artist_row(artist, edit, delete)
                            }
                        />
                    }
                    .into_view(),
                    Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                })}
            </Suspense>
        </section>
    }
}

fn admin_artist_row(
    artist: ArtistResponse,
    on_edit: Callback<ArtistResponse>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let artist_for_edit = artist.clone();
    let id = artist.id.clone();
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{artist.name.clone()}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">
                {artist.genre.clone().unwrap_or_else(|| "Unknown".to_string())}
            </td>
            <td class="px-4 py-3 text-sm text-fg-muted">{artist.album_count}</td>
            <td class="px-4 py-3 text-right">
                <div class="flex justify-end gap-2">
                    <Button
                        class="px-3 py-1.5"
                        on:click=move |_| on_edit.call(artist_for_edit.clone())
                    >
                        "Edit"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        class="px-3 py-1.5"
                        on:click=move |_| on_delete.call(id.clone())
                    >
                        "Delete"
                    </Button>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn AlbumsSection() -> impl IntoView {
    let vm = use_admin_catalog_view_model();
    let toggle = Callback::new(vm.handle_toggle_published());

    view! {
        <section>
            <h3 class="text-xl font-semibold text-fg mb-4">"Albums"</h3>
            <Suspense fallback=move || view! { <LoadingSpinner/> }>
                {move || vm.albums_resource.get().map(|result| match result {
                    Ok(albums) => view! {
                        <PaginatedTable
                            items=albums
                            headers=vec!["Title", "Artist", "Released", "Status", ""]
                            render_row=move |album: AlbumResponse, _index: usize| {
                                admin_album_row(album, toggle)
                            }
                        />
                    }
                    .into_view(),
                    Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
                })}
            </Suspense>
        </section>
    }
}

fn admin_album_row(album: AlbumResponse, on_toggle: Callback<AlbumResponse>) -> impl IntoView {
    let toggle_label = if album.published { "Unpublish" } else { "Publish" };
    let album_for_toggle = album.clone();
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{album.title.clone()}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{album.artist_name.clone()}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">
                {format_release_date(album.release_date)}
            </td>
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
