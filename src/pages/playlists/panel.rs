use leptos::*;

use crate::{
    api::PlaylistResponse,
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        forms::TextField,
        layout::{ErrorMessage, LoadingSpinner, WithLayout},
        table::PaginatedTable,
    },
    pages::playlists::view_model::use_playlists_view_model,
    state::auth::Role,
    utils::format::format_timestamp,
};

#[component]
pub fn PlaylistsPage() -> impl IntoView {
    view! {
        <WithLayout title="My playlists" allowed_roles=vec![Role::Listener, Role::Admin]>
            {|| view! { <PlaylistsPanel/> }}
        </WithLayout>
    }
}

#[component]
fn PlaylistsPanel() -> impl IntoView {
    let vm = use_playlists_view_model();
    let delete = Callback::new(vm.handle_delete());
    let name_error = Signal::derive(move || {
        vm.form_error
            .get()
            .and_then(|error| error.field_error("name"))
    });

    view! {
        {move || vm.form_error.get().filter(|error| !error.is_validation()).map(|error| {
            view! { <ErrorMessage message=error.to_string()/> }
        })}
        <form class="mb-6 max-w-md" on:submit=vm.handle_create()>
            <TextField
                label="New playlist"
                name="name"
                value=vm.form_name.read_only()
                on_input=Callback::new(move |value: String| vm.form_name.set(value))
                error=name_error
            />
            {move || vm.form_error.get()
                .filter(|error| error.is_validation() && error.field_error("name").is_none())
                .map(|error| view! { <p class="mb-2 text-sm text-status-error-text">{error.to_string()}</p> })}
            <Button loading=vm.create_action.pending()>
                "Create playlist"
            </Button>
        </form>
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || vm.playlists_resource.get().map(|result| match result {
                Ok(playlists) if playlists.is_empty() => view! {
                    <EmptyState
                        title="No playlists yet"
                        description="Create your first playlist to start collecting tracks.".to_string()
                    />
                }
                .into_view(),
                Ok(playlists) => view! {
                    <PaginatedTable
                        items=playlists
                        headers=vec!["Name", "Tracks", "Created", ""]
                        render_row=move |playlist: PlaylistResponse, _index: usize| {
                            playlist_row(playlist, delete)
                        }
                    />
                }
                .into_view(),
                Err(error) => view! { <ErrorMessage message=error.to_string()/> }.into_view(),
            })}
        </Suspense>
    }
}

fn playlist_row(playlist: PlaylistResponse, on_delete: Callback<String>) -> impl IntoView {
    let id = playlist.id.clone();
    view! {
        <tr class="hover:bg-surface-muted">
            <td class="px-4 py-3 text-sm font-medium text-fg">{playlist.name}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">{playlist.track_count}</td>
            <td class="px-4 py-3 text-sm text-fg-muted">
                {format_timestamp(Some(playlist.created_at))}
            </td>
            <td class="px-4 py-3 text-right">
                <Button
                    variant=ButtonVariant::Danger
                    class="px-3 py-1.5"
                    on:click=move |_| on_delete.call(id.clone())
                >
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{listener_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    #[test]
    fn playlists_page_shows_the_create_form() {
        let html = render_to_string(move || {
            provide_auth(Some(listener_user()));
            view! { <PlaylistsPage/> }
        });
        assert!(html.contains("New playlist"));
        assert!(html.contains("Create playlist"));
    }

    #[test]
    fn playlist_row_renders_name_and_delete_button() {
        let html = render_to_string(move || {
            playlist_row(
                PlaylistResponse {
                    id: "pl-1".into(),
                    name: "Rainy days".into(),
                    track_count: 14,
                    created_at: Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap(),
                },
                Callback::new(|_id: String| {}),
            )
        });
        assert!(html.contains("Rainy days"));
        assert!(html.contains("2025-05-01 12:00"));
        assert!(html.contains("Delete"));
    }
}
