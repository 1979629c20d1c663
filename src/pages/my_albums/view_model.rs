use chrono::NaiveDate;
use leptos::{ev::SubmitEvent, *};

use crate::api::{AlbumResponse, ApiClient, ApiError, CreateAlbumRequest};

/// Release date comes from a plain `<input type="date">`, so an empty
/// string means "not announced yet".
pub fn parse_release_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| "Enter the release date as YYYY-MM-DD.".to_string())
}

#[derive(Clone, Copy)]
pub struct MyAlbumsViewModel {
    pub albums_resource: Resource<u32, Result<Vec<AlbumResponse>, ApiError>>,
    pub refresh: RwSignal<u32>,
    pub create_action: Action<CreateAlbumRequest, Result<AlbumResponse, ApiError>>,
    pub publish_action: Action<(String, bool), Result<AlbumResponse, ApiError>>,
    pub form_title: RwSignal<String>,
    pub form_release_date: RwSignal<String>,
    pub form_error: RwSignal<Option<ApiError>>,
}

impl MyAlbumsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

        let refresh = create_rw_signal(0u32);
        let api_clone = api.clone();
        let albums_resource = create_resource(
            move || refresh.get(),
            move |_| {
                let api = api_clone.clone();
                async move { api.my_albums().await }
            },
        );

        let api_clone = api.clone();
        let create = create_action(move |request: &CreateAlbumRequest| {
            let api = api_clone.clone();
            let request = request.clone();
            async move { api.create_album(&request).await }
        });

        let api_clone = api.clone();
        let publish = create_action(move |payload: &(String, bool)| {
            let api = api_clone.clone();
            let (id, published) = payload.clone();
            async move { api.set_album_published(&id, published).await }
        });

        let form_title = create_rw_signal(String::new());
        let form_release_date = create_rw_signal(String::new());
        let form_error = create_rw_signal(None);

        create_effect(move |_| {
            if let Some(result) = create.value().get() {
                match result {
                    Ok(_) => {
                        form_title.set(String::new());
                        form_release_date.set(String::new());
                        form_error.set(None);
                        refresh.update(|n| *n += 1);
                    }
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = publish.value().get() {
                match result {
                    Ok(_) => refresh.update(|n| *n += 1),
                    Err(error) => form_error.set(Some(error)),
                }
            }
        });

        Self {
            albums_resource,
            refresh,
            create_action: create,
            publish_action: publish,
            form_title,
            form_release_date,
            form_error,
        }
    }

    pub fn handle_create(&self) -> impl Fn(SubmitEvent) {
        let create_action = self.create_action;
        let form_title = self.form_title;
        let form_release_date = self.form_release_date;
        let form_error = self.form_error;
        move |ev| {
            ev.prevent_default();
            if create_action.pending().get_untracked() {
                return;
            }
            let title = form_title.get_untracked().trim().to_string();
            if title.is_empty() {
                form_error.set(Some(ApiError::validation("Album title is required.")));
                return;
            }
            let release_date = match parse_release_date(&form_release_date.get_untracked()) {
                Ok(date) => date,
                Err(message) => {
                    form_error.set(Some(ApiError::validation(message)));
                    return;
                }
            };
            form_error.set(None);
            create_action.dispatch(CreateAlbumRequest {
                title,
                release_date,
            });
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

pub fn use_my_albums_view_model() -> MyAlbumsViewModel {
    match use_context::<MyAlbumsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = MyAlbumsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
