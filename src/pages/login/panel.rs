use leptos::*;

use crate::{
    api::LoginRequest,
    components::{
        common::Button,
        forms::TextField,
        layout::{navigate_to, ErrorMessage, WithLayout},
    },
    pages::login::utils,
    router::routes,
    state::auth::use_login_action,
};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <WithLayout title="Sign in" require_auth=false>
            {|| view! { <LoginForm/> }}
        </WithLayout>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(Option::<String>::None);

    let login_action = use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigate_to(routes::DASHBOARD),
                Err(error) => set_form_error.set(Some(error.into())),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = utils::normalize_email(&email.get_untracked());
        let password_value = password.get_untracked();
        if let Err(message) = utils::validate_credentials(&email_value, &password_value) {
            set_form_error.set(Some(message));
            return;
        }
        set_form_error.set(None);
        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <form class="max-w-md mx-auto" on:submit=on_submit>
            {move || form_error.get().map(|message| view! { <ErrorMessage message=message/> })}
            <TextField
                label="Email"
                name="email"
                input_type="email".to_string()
                value=email
                on_input=Callback::new(move |value: String| set_email.set(value))
            />
            <TextField
                label="Password"
                name="password"
                input_type="password".to_string()
                value=password
                on_input=Callback::new(move |value: String| set_password.set(value))
            />
            <Button class="w-full" loading=pending>
                "Sign in"
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_unauthenticated;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_form_renders_both_fields() {
        let html = render_to_string(move || {
            provide_unauthenticated();
            view! { <LoginPage/> }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("Password"));
        assert!(html.contains("Sign in"));
        assert!(html.contains("type=\"password\""));
    }
}
