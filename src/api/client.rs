use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::types::{ApiError, LoginResponse, UserProfile},
    config,
    utils::storage,
};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn bearer_token() -> Option<String> {
        storage::get_item(ACCESS_TOKEN_KEY)
    }

    fn handle_unauthorized_status(status: u16) {
        if status == 401 {
            clear_session();
            redirect_to_login_if_needed();
        }
    }

    /// Single choke point for requests: JSON in, `(status, JSON)` out.
    /// Host tests route through the registered mock transport instead of
    /// the network.
    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<(u16, Value), ApiError> {
        let mut builder = self.client.request(method, url);
        if let Some(token) = Self::bearer_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::lookup(url) {
            let request = builder
                .build()
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
            let response = responder.respond(&request)?;
            return Ok((response.status, response.body));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        let (status, value) = self.send_json(method, &url, body.as_ref()).await?;

        Self::handle_unauthorized_status(status);
        if (200..300).contains(&status) {
            serde_json::from_value(value)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(status, value))
        }
    }

    /// Same as [`request_json`], for endpoints whose success body is empty.
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        let (status, value) = self.send_json(method, &url, body.as_ref()).await?;

        Self::handle_unauthorized_status(status);
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(parse_error_body(status, value))
        }
    }
}

fn parse_error_body(status: u16, value: Value) -> ApiError {
    serde_json::from_value::<ApiError>(value)
        .unwrap_or_else(|_| ApiError::unknown(format!("Request failed with status {}", status)))
}

pub(crate) fn persist_session(response: &LoginResponse) {
    storage::set_item(ACCESS_TOKEN_KEY, &response.token);
    if let Ok(user_json) = serde_json::to_string(&response.user) {
        storage::set_item(CURRENT_USER_KEY, &user_json);
    }
}

pub(crate) fn clear_session() {
    storage::remove_item(ACCESS_TOKEN_KEY);
    storage::remove_item(CURRENT_USER_KEY);
}

/// Cached profile from the last login, used to seed auth state before the
/// `/auth/me` round trip settles.
pub fn cached_user() -> Option<UserProfile> {
    let raw = storage::get_item(CURRENT_USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login_if_needed() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if let Ok(pathname) = location.pathname() {
            if pathname == crate::router::routes::LOGIN {
                return;
            }
        }
        let _ = location.set_href(crate::router::routes::LOGIN);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login_if_needed() {}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_body_falls_back_to_status_text() {
        let parsed = parse_error_body(500, Value::Null);
        assert_eq!(parsed.code, "UNKNOWN");
        assert!(parsed.error.contains("500"));

        let parsed = parse_error_body(
            422,
            json!({
                "error": "The given data was invalid.",
                "code": "VALIDATION_ERROR",
                "details": {"name": ["The name field is required."]}
            }),
        );
        assert!(parsed.is_validation());
        assert_eq!(
            parsed.field_error("name").as_deref(),
            Some("The name field is required.")
        );
    }

    #[test]
    fn cached_user_is_absent_without_browser_storage() {
        assert!(cached_user().is_none());
    }
}
