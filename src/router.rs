use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    pages::{
        admin_catalog::AdminCatalogPage, albums::AlbumsPage, artists::ArtistsPage,
        dashboard::DashboardPage, home::HomePage, login::LoginPage, my_albums::MyAlbumsPage,
        playlists::PlaylistsPage, posts::PostsPage,
    },
    state::{auth::AuthProvider, theme::provide_theme},
};

pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const ARTISTS: &str = "/artists";
    pub const ALBUMS: &str = "/albums";
    pub const POSTS: &str = "/posts";
    pub const PLAYLISTS: &str = "/playlists";
    pub const MY_ALBUMS: &str = "/my-albums";
    pub const ADMIN_CATALOG: &str = "/admin/catalog";
}

pub const ROUTE_PATHS: &[&str] = &[
    routes::HOME,
    routes::LOGIN,
    routes::DASHBOARD,
    routes::ARTISTS,
    routes::ALBUMS,
    routes::POSTS,
    routes::PLAYLISTS,
    routes::MY_ALBUMS,
    routes::ADMIN_CATALOG,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    routes::DASHBOARD,
    routes::ARTISTS,
    routes::ALBUMS,
    routes::POSTS,
    routes::PLAYLISTS,
    routes::MY_ALBUMS,
    routes::ADMIN_CATALOG,
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[routes::HOME, routes::LOGIN];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    provide_theme();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path=routes::HOME view=HomePage/>
                    <Route path=routes::LOGIN view=LoginPage/>
                    <Route path=routes::DASHBOARD view=DashboardPage/>
                    <Route path=routes::ARTISTS view=ArtistsPage/>
                    <Route path=routes::ALBUMS view=AlbumsPage/>
                    <Route path=routes::POSTS view=PostsPage/>
                    <Route path=routes::PLAYLISTS view=PlaylistsPage/>
                    <Route path=routes::MY_ALBUMS view=MyAlbumsPage/>
                    <Route path=routes::ADMIN_CATALOG view=AdminCatalogPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
