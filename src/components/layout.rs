use leptos::*;
use leptos_meta::Title;

use crate::{
    router::routes,
    state::auth::{use_auth, use_logout_action, Role},
    state::theme::{use_theme, Theme},
};

pub const APP_NAME: &str = "Crescendo";

/// Which chrome wraps the page content once the guard lets it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Admin,
    Artist,
    Listener,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    RedirectToLogin,
    RedirectToDashboard,
    Render(ShellKind),
}

pub fn shell_for_role(role: Option<Role>) -> ShellKind {
    match role {
        Some(Role::Admin) => ShellKind::Admin,
        Some(Role::Artist) => ShellKind::Artist,
        Some(Role::Listener) => ShellKind::Listener,
        None => ShellKind::Default,
    }
}

/// Guard logic for [`WithLayout`]. An empty `allowed_roles` list means
/// "any authenticated user", which is what keeps the dashboard from
/// redirecting to itself when a role fails to parse. A non-empty list is
/// enforced for every authenticated viewer, even on pages that do not
/// require auth.
pub fn guard_decision(
    loading: bool,
    is_authenticated: bool,
    role: Option<Role>,
    require_auth: bool,
    allowed_roles: &[Role],
) -> GuardOutcome {
    if loading {
        if require_auth {
            return GuardOutcome::Loading;
        }
        return GuardOutcome::Render(shell_for_role(role));
    }
    if is_authenticated && !allowed_roles.is_empty() {
        match role {
            Some(role) if allowed_roles.contains(&role) => {}
            _ => return GuardOutcome::RedirectToDashboard,
        }
    }
    if !require_auth || is_authenticated {
        return GuardOutcome::Render(shell_for_role(role));
    }
    GuardOutcome::RedirectToLogin
}

pub fn document_title(title: &str) -> String {
    format!("{} · {}", title, APP_NAME)
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn navigate_to(_path: &str) {}

/// Page wrapper that combines the auth guard with the role-specific
/// shell. Pages declare their title and who may see them; the wrapper
/// redirects everyone else and picks the chrome for the current role.
#[component]
pub fn WithLayout(
    #[prop(into, default = String::from("Page"))] title: String,
    #[prop(default = true)] require_auth: bool,
    #[prop(default = Role::all().to_vec())] allowed_roles: Vec<Role>,
    #[prop(optional, into)] render_header: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let allowed = store_value(allowed_roles);

    let outcome = create_memo(move |_| {
        let state = auth.get();
        allowed.with_value(|roles| {
            guard_decision(
                state.loading,
                state.is_authenticated,
                state.role(),
                require_auth,
                roles,
            )
        })
    });

    create_effect(move |_| match outcome.get() {
        GuardOutcome::RedirectToLogin => navigate_to(routes::LOGIN),
        GuardOutcome::RedirectToDashboard => {
            if let Some(user) = auth.get_untracked().user {
                if Role::from_name(&user.role).is_none() {
                    log::warn!("unrecognized role {:?} for user {}", user.role, user.id);
                }
            }
            navigate_to(routes::DASHBOARD);
        }
        GuardOutcome::Loading | GuardOutcome::Render(_) => {}
    });

    let page_title = document_title(&title);
    let heading = title;

    view! {
        {move || {
            let heading = heading.clone();
            let header = render_header.clone().map(|f| f.run());
            match outcome.get() {
                GuardOutcome::Loading => view! { <LoadingSpinner/> }.into_view(),
                GuardOutcome::RedirectToLogin | GuardOutcome::RedirectToDashboard => ().into_view(),
                GuardOutcome::Render(kind) => {
                    let content = children().into_view();
                    let shell = match kind {
                        ShellKind::Admin => view! {
                            <AdminShell title=heading header=header>{content}</AdminShell>
                        }
                        .into_view(),
                        ShellKind::Artist => view! {
                            <ArtistShell title=heading header=header>{content}</ArtistShell>
                        }
                        .into_view(),
                        ShellKind::Listener => view! {
                            <ListenerShell title=heading header=header>{content}</ListenerShell>
                        }
                        .into_view(),
                        ShellKind::Default => view! {
                            <DefaultShell title=heading header=header>{content}</DefaultShell>
                        }
                        .into_view(),
                    };
                    // The document title only changes when the page actually
                    // renders; redirect passes leave it alone.
                    view! {
                        <Title text=page_title.clone()/>
                        {shell}
                    }
                    .into_view()
                }
            }
        }}
    }
}

const ADMIN_NAV: &[(&str, &str)] = &[
    (routes::DASHBOARD, "Dashboard"),
    (routes::ARTISTS, "Artists"),
    (routes::ALBUMS, "Albums"),
    (routes::POSTS, "Posts"),
    (routes::ADMIN_CATALOG, "Manage catalog"),
];

const ARTIST_NAV: &[(&str, &str)] = &[
    (routes::DASHBOARD, "Dashboard"),
    (routes::ARTISTS, "Artists"),
    (routes::ALBUMS, "Albums"),
    (routes::POSTS, "Posts"),
    (routes::MY_ALBUMS, "My albums"),
];

const LISTENER_NAV: &[(&str, &str)] = &[
    (routes::DASHBOARD, "Dashboard"),
    (routes::ARTISTS, "Artists"),
    (routes::ALBUMS, "Albums"),
    (routes::POSTS, "Posts"),
    (routes::PLAYLISTS, "My playlists"),
];

const DEFAULT_NAV: &[(&str, &str)] = &[(routes::HOME, "Home")];

#[component]
pub fn AdminShell(
    title: String,
    header: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <ShellFrame title=title nav_links=ADMIN_NAV show_logout=true header=header>
            {children()}
        </ShellFrame>
    }
}

#[component]
pub fn ArtistShell(
    title: String,
    header: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <ShellFrame title=title nav_links=ARTIST_NAV show_logout=true header=header>
            {children()}
        </ShellFrame>
    }
}

#[component]
pub fn ListenerShell(
    title: String,
    header: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <ShellFrame title=title nav_links=LISTENER_NAV show_logout=true header=header>
            {children()}
        </ShellFrame>
    }
}

/// Chrome for visitors and for signed-in users whose role the client
/// does not recognize.
#[component]
pub fn DefaultShell(
    title: String,
    header: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <ShellFrame title=title nav_links=DEFAULT_NAV show_logout=false header=header>
            {children()}
        </ShellFrame>
    }
}

#[component]
fn ShellFrame(
    title: String,
    nav_links: &'static [(&'static str, &'static str)],
    show_logout: bool,
    header: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <header class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <a href=routes::HOME class="text-xl font-semibold text-fg">
                            {APP_NAME}
                        </a>
                        <div class="flex items-center gap-2">
                            <nav class="hidden lg:flex space-x-4">
                                {nav_links
                                    .iter()
                                    .map(|(href, label)| view! {
                                        <a
                                            href=*href
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {*label}
                                        </a>
                                    })
                                    .collect_view()}
                            </nav>
                            <ThemeToggle/>
                            <Show
                                when=move || show_logout
                                fallback=|| view! {
                                    <a
                                        href=routes::LOGIN
                                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    >
                                        "Log in"
                                    </a>
                                }
                            >
                                <LogoutButton/>
                            </Show>
                        </div>
                    </div>
                </div>
            </header>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {match header {
                    Some(header) => header,
                    None => view! {
                        <h2 class="text-2xl font-semibold text-fg mb-6">{title}</h2>
                    }
                    .into_view(),
                }}
                {children()}
            </main>
        </div>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let logout_action = use_logout_action();
    let pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigate_to(routes::LOGIN);
        }
    });
    let on_logout = move |_| {
        if pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    view! {
        <button
            on:click=on_logout
            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
            disabled=move || pending.get()
        >
            "Log out"
        </button>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let label = {
        let theme = theme.clone();
        move || match theme.theme.get() {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    };
    let on_toggle = move |_| theme.toggle();
    view! {
        <button
            on:click=on_toggle
            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
            aria-label="Toggle color theme"
        >
            {label}
        </button>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_users_are_sent_to_login() {
        let outcome = guard_decision(false, false, None, true, &Role::all());
        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn loading_wins_over_every_redirect() {
        assert_eq!(
            guard_decision(true, false, None, true, &Role::all()),
            GuardOutcome::Loading
        );
        assert_eq!(
            guard_decision(true, true, Some(Role::Listener), true, &[Role::Admin]),
            GuardOutcome::Loading
        );
    }

    #[test]
    fn role_outside_the_allow_list_goes_to_dashboard() {
        let outcome = guard_decision(false, true, Some(Role::Listener), true, &[Role::Admin]);
        assert_eq!(outcome, GuardOutcome::RedirectToDashboard);

        let outcome = guard_decision(false, true, None, true, &Role::all());
        assert_eq!(outcome, GuardOutcome::RedirectToDashboard);
    }

    #[test]
    fn allowed_roles_render_their_own_shell() {
        assert_eq!(
            guard_decision(false, true, Some(Role::Admin), true, &[Role::Admin]),
            GuardOutcome::Render(ShellKind::Admin)
        );
        assert_eq!(
            guard_decision(false, true, Some(Role::Artist), true, &Role::all()),
            GuardOutcome::Render(ShellKind::Artist)
        );
    }

    #[test]
    fn empty_allow_list_admits_any_authenticated_user() {
        assert_eq!(
            guard_decision(false, true, None, true, &[]),
            GuardOutcome::Render(ShellKind::Default)
        );
        assert_eq!(
            guard_decision(false, true, Some(Role::Listener), true, &[]),
            GuardOutcome::Render(ShellKind::Listener)
        );
    }

    #[test]
    fn public_pages_render_without_auth() {
        assert_eq!(
            guard_decision(true, false, None, false, &Role::all()),
            GuardOutcome::Render(ShellKind::Default)
        );
    }

    #[test]
    fn allow_list_applies_even_when_auth_is_optional() {
        assert_eq!(
            guard_decision(false, true, Some(Role::Listener), false, &[Role::Admin]),
            GuardOutcome::RedirectToDashboard
        );
        // Anonymous visitors are untouched by the list.
        assert_eq!(
            guard_decision(false, false, None, false, &[Role::Admin]),
            GuardOutcome::Render(ShellKind::Default)
        );
        assert_eq!(
            guard_decision(false, true, Some(Role::Admin), false, &[Role::Admin]),
            GuardOutcome::Render(ShellKind::Admin)
        );
    }

    #[test]
    fn shell_selection_follows_the_role() {
        assert_eq!(shell_for_role(Some(Role::Admin)), ShellKind::Admin);
        assert_eq!(shell_for_role(Some(Role::Artist)), ShellKind::Artist);
        assert_eq!(shell_for_role(Some(Role::Listener)), ShellKind::Listener);
        assert_eq!(shell_for_role(None), ShellKind::Default);
    }

    #[test]
    fn document_title_carries_the_app_name() {
        assert_eq!(document_title("Artists"), "Artists · Crescendo");
    }

    #[test]
    fn every_shell_links_to_its_role_section() {
        assert!(ADMIN_NAV.iter().any(|(href, _)| *href == routes::ADMIN_CATALOG));
        assert!(ARTIST_NAV.iter().any(|(href, _)| *href == routes::MY_ALBUMS));
        assert!(LISTENER_NAV.iter().any(|(href, _)| *href == routes::PLAYLISTS));
        assert!(!DEFAULT_NAV.iter().any(|(href, _)| *href == routes::ADMIN_CATALOG));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{
        artist_user, listener_user, provide_auth, provide_unauthenticated, user_with_role,
    };
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn artist_sees_content_inside_the_artist_shell() {
        let html = render_to_string(move || {
            provide_auth(Some(artist_user()));
            view! {
                <WithLayout title="My albums">
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
        });
        assert!(html.contains("page-content"));
        assert!(html.contains("/my-albums"));
        assert!(html.contains("Log out"));
    }

    #[test]
    fn unauthenticated_visitors_see_nothing_on_guarded_pages() {
        let html = render_to_string(move || {
            provide_unauthenticated();
            view! {
                <WithLayout title="My albums">
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
        });
        assert!(!html.contains("page-content"));
    }

    #[test]
    fn listener_is_kept_out_of_admin_pages() {
        let html = render_to_string(move || {
            provide_auth(Some(listener_user()));
            view! {
                <WithLayout title="Manage catalog" allowed_roles=vec![Role::Admin]>
                    {|| view! { <div>"admin-content"</div> }}
                </WithLayout>
            }
        });
        assert!(!html.contains("admin-content"));
    }

    #[test]
    fn unknown_role_with_open_allow_list_gets_the_default_shell() {
        let html = render_to_string(move || {
            provide_auth(Some(user_with_role("superfan")));
            view! {
                <WithLayout title="Dashboard" allowed_roles=Vec::new()>
                    {|| view! { <div>"dashboard-content"</div> }}
                </WithLayout>
            }
        });
        assert!(html.contains("dashboard-content"));
        assert!(!html.contains("/admin/catalog"));
    }

    #[test]
    fn public_page_renders_default_shell_with_login_link() {
        let html = render_to_string(move || {
            provide_unauthenticated();
            view! {
                <WithLayout title="Welcome" require_auth=false>
                    {|| view! { <div>"hero"</div> }}
                </WithLayout>
            }
        });
        assert!(html.contains("hero"));
        assert!(html.contains("Log in"));
        assert!(!html.contains("Log out"));
    }

    #[test]
    fn loading_auth_state_shows_the_spinner() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(crate::state::auth::AuthState {
                user: None,
                is_authenticated: false,
                loading: true,
            });
            provide_context((auth, set_auth));
            view! {
                <WithLayout title="Artists">
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("page-content"));
    }

    #[test]
    fn custom_header_replaces_the_default_heading() {
        let html = render_to_string(move || {
            provide_auth(Some(artist_user()));
            view! {
                <WithLayout
                    title="My albums"
                    render_header=ViewFn::from(|| view! { <div>"custom-banner"</div> })
                >
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
        });
        assert!(html.contains("custom-banner"));
        assert!(html.contains("page-content"));
        assert!(!html.contains("text-2xl"));
    }

    #[test]
    fn default_heading_shows_when_no_header_is_supplied() {
        let html = render_to_string(move || {
            provide_auth(Some(artist_user()));
            view! {
                <WithLayout title="My albums">
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
        });
        assert!(html.contains("text-2xl"));
        assert!(html.contains("My albums"));
    }

    #[test]
    fn public_page_still_enforces_the_allow_list() {
        let html = render_to_string(move || {
            provide_auth(Some(listener_user()));
            view! {
                <WithLayout title="Welcome" require_auth=false allowed_roles=vec![Role::Admin]>
                    {|| view! { <div>"members-only"</div> }}
                </WithLayout>
            }
        });
        assert!(!html.contains("members-only"));
    }

    #[test]
    fn title_is_set_only_when_the_page_renders() {
        use leptos_meta::{provide_meta_context, use_head};

        crate::test_support::ssr::with_runtime(|| {
            provide_meta_context();
            provide_auth(Some(artist_user()));
            let _ = view! {
                <WithLayout title="My albums">
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
            .into_view()
            .render_to_string();
            let title = use_head().title.as_string().map(|t| t.to_string());
            assert_eq!(title.as_deref(), Some("My albums · Crescendo"));
        });

        crate::test_support::ssr::with_runtime(|| {
            provide_meta_context();
            provide_unauthenticated();
            let html = view! {
                <WithLayout title="My albums">
                    {|| view! { <div>"page-content"</div> }}
                </WithLayout>
            }
            .into_view()
            .render_to_string()
            .to_string();
            assert!(!html.contains("page-content"));
            assert!(use_head().title.as_string().is_none());
        });
    }
}
