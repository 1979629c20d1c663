use leptos::{ev::SubmitEvent, *};

use crate::api::{ApiClient, ApiError, CreatePlaylistRequest, PlaylistResponse};

#[derive(Clone, Copy)]
pub struct PlaylistsViewModel {
    pub playlists_resource: Resource<u32, Result<Vec<PlaylistResponse>, ApiError>>,
    pub refresh: RwSignal<u32>,
    pub create_action: Action<CreatePlaylistRequest, Result<PlaylistResponse, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub form_name: RwSignal<String>,
    pub form_error: RwSignal<Option<ApiError>>,
}

impl PlaylistsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let refresh = create_rw_signal(0u32);
        let api_clone = api.clone();
        let playlists_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_clone.clone();
                async move { api.my_playlists().await }
            },
        );

        let api_clone = api.clone();
        let create = create_action(move |request: &CreatePlaylistRequest| {
            let api = api_clone.clone();
            let request = request.clone();
            async move { api.create_playlist(&request).await }
        });

        let api_clone = api.clone();
        let delete = create_action(move |id: &String| {
            let api = api_clone.clone();
            let id = id.clone();
            async move { api.delete_playlist(&id).await }
        });

        let form_name = create_rw_signal(String::new());
        let form_error = create_rw_signal(None);

        create_effect(move |_| {
            if let Some(result) = create.value().get() {
                match result {
                    Ok(_) => {
                        form_name.set(String::new());
                        form_error.set(None);
                        refresh.update(|n| *n += 1);
                    }
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete.value().get() {
                match result {
                    Ok(()) => refresh.update(|n| *n += 1),
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        Self {
            playlists_resource,
            refresh,
            create_action: create,
            delete_action: delete,
            form_name,
            form_error,
        }
    }

    pub fn handle_create(&self) -> impl Fn(SubmitEvent) {
        let create_action = self.create_action;
        let form_name = self.form_name;
        let form_error = self.form_error;
        move |ev| {
            ev.prevent_default();
            if create_action.pending().get_untracked() {
                return;
            }
            let name = form_name.get_untracked().trim().to_string();
            if name.is_empty() {
                form_error.set(Some(ApiError::validation("Playlist name is required.")));
                return;
            }
            form_error.set(None);
            create_action.dispatch(CreatePlaylistRequest { name });
        }
    }

    pub fn handle_delete(&self) -> impl Fn(String) {
        let delete_action = self.delete_action;
        move |id| {
            if delete_action.pending().get_untracked() {
                return;
            }
            delete_action.dispatch(id);
        }
    }
}

pub fn use_playlists_view_model() -> PlaylistsViewModel {
    match use_context::<PlaylistsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = PlaylistsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
