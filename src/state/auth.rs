use crate::api::{cached_user, ApiClient, ApiError, LoginRequest, UserProfile};
use leptos::*;

/// Roles the catalog recognizes. The server sends roles as free-form
/// strings; anything unrecognized parses to `None` and falls through to
/// the default layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Artist,
    Listener,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "artist" => Some(Role::Artist),
            "listener" => Some(Role::Listener),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Artist => "artist",
            Role::Listener => "listener",
        }
    }

    pub const fn all() -> [Role; 3] {
        [Role::Admin, Role::Artist, Role::Listener]
    }
}

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|user| Role::from_name(&user.role))
    }
}

/// Initial auth state for a fresh page load. The profile persisted at the
/// last login keeps the UI authenticated while `/auth/me` revalidates the
/// session; `loading` stays true until that round trip settles.
fn seeded_state(user: Option<UserProfile>) -> AuthState {
    AuthState {
        is_authenticated: user.is_some(),
        user,
        loading: true,
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(seeded_state(cached_user()));

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let set_auth_for_check = set_auth_state;
    spawn_local(async move {
        match api_client.get_me().await {
            Ok(user) => set_auth_for_check.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(_) => set_auth_for_check.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            }),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api_client.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api_client.logout().await;

    // Auth state resets even when the server call fails.
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::{MockServer, POST};
    use leptos::create_runtime;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(serde_json::json!({
                "user": {
                    "id": "u1",
                    "email": "ada@crescendo.test",
                    "display_name": "Ada",
                    "role": "listener"
                },
                "token": "tok-123"
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(200).json_body(serde_json::json!({}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        login_request(
            LoginRequest {
                email: "ada@crescendo.test".into(),
                password: "secret".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.role(), Some(Role::Listener));

        logout(&api, set_state).await.unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_keeps_state_unauthenticated() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(serde_json::json!({
                "error": "Invalid credentials.",
                "code": "UNAUTHORIZED"
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));

        let error = login_request(
            LoginRequest {
                email: "ada@crescendo.test".into(),
                password: "wrong".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(error.code, "UNAUTHORIZED");
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
