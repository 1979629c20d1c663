use leptos::{ev::SubmitEvent, *};

use crate::api::{
    AlbumResponse, ApiClient, ApiError, ArtistResponse, CreateArtistRequest,
};

/// Create or update payload for the artist form; `id` decides which.
#[derive(Clone)]
pub struct ArtistSave {
    pub id: Option<String>,
    pub request: CreateArtistRequest,
}

pub fn empty_to_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone, Copy)]
pub struct AdminCatalogViewModel {
    pub artists_resource: Resource<u32, Result<Vec<ArtistResponse>, ApiError>>,
    pub albums_resource: Resource<u32, Result<Vec<AlbumResponse>, ApiError>>,
    pub refresh: RwSignal<u32>,
    pub save_action: Action<ArtistSave, Result<ArtistResponse, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
    pub publish_action: Action<(String, bool), Result<AlbumResponse, ApiError>>,
    pub editing: RwSignal<Option<ArtistResponse>>,
    pub form_name: RwSignal<String>,
    pub form_genre: RwSignal<String>,
    pub form_error: RwSignal<Option<ApiError>>,
}

impl AdminCatalogViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let refresh = create_rw_signal(0u32);
        let api_clone = api.clone();
        let artists_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_clone.clone();
                async move { api.list_artists().await }
            },
        );

        let api_clone = api.clone();
        let albums_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_clone.clone();
                async move { api.list_albums().await }
            },
        );

        let api_clone = api.clone();
        let save_action = create_action(move |save: &ArtistSave| {
            let api = api_clone.clone();
            let save = save.clone();
            async move {
                match save.id {
                    Some(id) => api.update_artist(&id, &save.request).await,
                    None => api.create_artist(&save.request).await,
                }
            }
        });

        let api_clone = api.clone();
        let delete_action = create_action(move |id: &String| {
            let api = api_clone.clone();
            let id = id.clone();
            async move { api.delete_artist(&id).await }
        });

        let api_clone = api.clone();
        let publish_action = create_action(move |payload: &(String, bool)| {
            let api = api_clone.clone();
            let (id, published) = payload.clone();
            async move { api.set_album_published(&id, published).await }
        });

        let editing = create_rw_signal(None::<ArtistResponse>);
        let form_name = create_rw_signal(String::new());
        let form_genre = create_rw_signal(String::new());
        let form_error = create_rw_signal(None);

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(_) => {
                        editing.set(None);
                        form_name.set(String::new());
                        form_genre.set(String::new());
                        form_error.set(None);
                        refresh.update(|n| *n += 1);
                    }
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                match result {
                    Ok(()) => {
                        editing.set(None);
                        refresh.update(|n| *n += 1);
                    }
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = publish_action.value().get() {
                match result {
                    Ok(_) => refresh.update(|n| *n += 1),
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        Self {
            artists_resource,
            albums_resource,
            refresh,
            save_action,
            delete_action,
            publish_action,
            editing,
            form_name,
            form_genre,
            form_error,
        }
    }

    pub fn handle_save(&self) -> impl Fn(SubmitEvent) {
        let save_action = self.save_action;
        let editing = self.editing;
        let form_name = self.form_name;
        let form_genre = self.form_genre;
        let form_error = self.form_error;
        move |ev| {
            ev.prevent_default();
            if save_action.pending().get_untracked() {
                return;
            }
            let name = form_name.get_untracked().trim().to_string();
            if name.is_empty() {
                form_error.set(Some(ApiError::validation("Artist name is required.")));
                return;
            }
            form_error.set(None);
            save_action.dispatch(ArtistSave {
                id: editing.get_untracked().map(|artist| artist.id),
                request: CreateArtistRequest {
                    name,
                    genre: empty_to_none(&form_genre.get_untracked()),
                },
            });
        }
    }

    pub fn handle_edit(&self) -> impl Fn(ArtistResponse) {
        let editing = self.editing;
        let form_name = self.form_name;
        let form_genre = self.form_genre;
        let form_error = self.form_error;
        move |artist| {
            form_name.set(artist.name.clone());
            form_genre.set(artist.genre.clone().unwrap_or_default());
            form_error.set(None);
            editing.set(Some(artist));
        }
    }

    pub fn handle_cancel_edit(&self) -> impl Fn(leptos::ev::MouseEvent) {
        let editing = self.editing;
        let form_name = self.form_name;
        let form_genre = self.form_genre;
        let form_error = self.form_error;
        move |_| {
            editing.set(None);
            form_name.set(String::new());
            form_genre.set(String::new());
            form_error.set(None);
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

    pub fn handle_toggle_published(&self) -> impl Fn(AlbumResponse) {
        let publish_action = self.publish_action;
        move |album| {
            if publish_action.pending().get_untracked() {
                return;
            }
            publish_action.dispatch((album.id, !album.published));
        }
    }
}

pub fn use_admin_catalog_view_model() -> AdminCatalogViewModel {
    match use_context::<AdminCatalogViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminCatalogViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
