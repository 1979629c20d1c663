use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        AlbumResponse, ApiError, ArtistResponse, CreateAlbumRequest, CreateArtistRequest,
        PublishAlbumRequest,
    },
};

impl ApiClient {
    pub async fn list_artists(&self) -> Result<Vec<ArtistResponse>, ApiError> {
        self.request_json(Method::GET, "/artists", None).await
    }

    pub async fn create_artist(
        &self,
        request: &CreateArtistRequest,
    ) -> Result<ArtistResponse, ApiError> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request_json(Method::POST, "/artists", Some(payload))
            .await
    }

    pub async fn update_artist(
        &self,
        id: &str,
        request: &CreateArtistRequest,
    ) -> Result<ArtistResponse, ApiError> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request_json(Method::PUT, &format!("/artists/{}", id), Some(payload))
            .await
    }

    pub async fn delete_artist(&self, id: &str) -> Result<(), ApiError> {
        self.request_empty(Method::DELETE, &format!("/artists/{}", id), None)
            .await
    }

    pub async fn list_albums(&self) -> Result<Vec<AlbumResponse>, ApiError> {
        self.request_json(Method::GET, "/albums", None).await
    }

    pub async fn featured_albums(&self) -> Result<Vec<AlbumResponse>, ApiError> {
        self.request_json(Method::GET, "/albums/featured", None)
            .await
    }

    /// Albums owned by the authenticated artist.
    pub async fn my_albums(&self) -> Result<Vec<AlbumResponse>, ApiError> {
        self.request_json(Method::GET, "/me/albums", None).await
    }

    pub async fn create_album(
        &self,
        request: &CreateAlbumRequest,
    ) -> Result<AlbumResponse, ApiError> {
        let payload = serde_json::to_value(request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request_json(Method::POST, "/me/albums", Some(payload))
            .await
    }

    pub async fn set_album_published(
        &self,
        id: &str,
        published: bool,
    ) -> Result<AlbumResponse, ApiError> {
        let payload = json!(PublishAlbumRequest { published });
        self.request_json(
            Method::PUT,
            &format!("/albums/{}/publish", id),
            Some(payload),
        )
        .await
    }
}
