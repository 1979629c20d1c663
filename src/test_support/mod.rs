#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserProfile;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn user_with_role(role: &str) -> UserProfile {
        UserProfile {
            id: format!("u-{}", role),
            email: format!("{}@crescendo.test", role),
            display_name: format!("Test {}", role),
            role: role.into(),
        }
    }

    pub fn admin_user() -> UserProfile {
        user_with_role("admin")
    }

    pub fn artist_user() -> UserProfile {
        user_with_role("artist")
    }

    pub fn listener_user() -> UserProfile {
        user_with_role("listener")
    }

    pub fn provide_auth(
        user: Option<UserProfile>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_unauthenticated() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        provide_auth(None)
    }
}
