use leptos::*;

use crate::{
    components::layout::WithLayout,
    router::routes,
    state::auth::{use_auth, Role},
};

/// Landing page after sign-in. The allow list is left empty so users
/// whose role the client cannot place still have somewhere to land.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <WithLayout title="Dashboard" allowed_roles=Vec::new()>
            {|| view! { <DashboardContent/> }}
        </WithLayout>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}.", user.display_name))
            .unwrap_or_else(|| "Welcome back.".to_string())
    };
    let role = create_memo(move |_| auth.get().role());

    view! {
        <p class="text-lg text-fg mb-6">{greeting}</p>
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
            <DashboardLink href=routes::ARTISTS label="Browse artists"/>
            <DashboardLink href=routes::ALBUMS label="Browse albums"/>
            <DashboardLink href=routes::POSTS label="Read posts"/>
            <Show when=move || role.get() == Some(Role::Listener)>
                <DashboardLink href=routes::PLAYLISTS label="My playlists"/>
            </Show>
            <Show when=move || role.get() == Some(Role::Artist)>
                <DashboardLink href=routes::MY_ALBUMS label="My albums"/>
            </Show>
            <Show when=move || role.get() == Some(Role::Admin)>
                <DashboardLink href=routes::ADMIN_CATALOG label="Manage catalog"/>
            </Show>
        </div>
    }
}

#[component]
fn DashboardLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            class="block rounded-lg border border-border bg-surface-elevated p-6 text-fg font-medium shadow-sm hover:bg-surface-muted"
        >
            {label}
        </a>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, listener_user, provide_auth, user_with_role};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn listener_sees_greeting_and_playlist_link() {
        let html = render_to_string(move || {
            provide_auth(Some(listener_user()));
            view! { <DashboardPage/> }
        });
        assert!(html.contains("Welcome back, Test listener."));
        assert!(html.contains("/playlists"));
        assert!(!html.contains("/admin/catalog"));
    }

    #[test]
    fn admin_sees_catalog_management_link() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <DashboardPage/> }
        });
        assert!(html.contains("/admin/catalog"));
        assert!(!html.contains("/my-albums"));
    }

    #[test]
    fn unknown_role_still_lands_on_the_dashboard() {
        let html = render_to_string(move || {
            provide_auth(Some(user_with_role("superfan")));
            view! { <DashboardPage/> }
        });
        assert!(html.contains("Welcome back, Test superfan."));
        assert!(html.contains("/artists"));
    }
}
