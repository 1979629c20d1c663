use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, PostResponse},
};

impl ApiClient {
    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, ApiError> {
        self.request_json(Method::GET, "/posts", None).await
    }

    /// Most recent published posts, newest first, for the landing page.
    pub async fn latest_posts(&self, limit: usize) -> Result<Vec<PostResponse>, ApiError> {
        self.request_json(Method::GET, &format!("/posts/latest?limit={}", limit), None)
            .await
    }
}
