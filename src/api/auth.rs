use reqwest::Method;

use super::{
    client::{clear_session, persist_session, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, UserProfile},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let payload = serde_json::to_value(&request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        let response: LoginResponse = self
            .request_json(Method::POST, "/auth/login", Some(payload))
            .await?;
        persist_session(&response);
        Ok(response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .request_empty(Method::POST, "/auth/logout", Some(serde_json::json!({})))
            .await;
        // Local session is dropped regardless of the server result.
        clear_session();
        result
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.request_json(Method::GET, "/auth/me", None).await
    }
}
