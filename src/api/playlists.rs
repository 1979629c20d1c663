use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, CreatePlaylistRequest, PlaylistResponse},
};

impl ApiClient {
    pub async fn my_playlists(&self) -> Result<Vec<PlaylistResponse>, ApiError> {
        self.request_json(Method::GET, "/me/playlists", None).await
    }

    pub async fn create_playlist(
        &self,
        request: &CreatePlaylistRequest,
    ) -> Result<PlaylistResponse, ApiError> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request_json(Method::POST, "/me/playlists", Some(payload))
            .await
    }

    pub async fn delete_playlist(&self, id: &str) -> Result<(), ApiError> {
        self.request_empty(Method::DELETE, &format!("/me/playlists/{}", id), None)
            .await
    }
}
