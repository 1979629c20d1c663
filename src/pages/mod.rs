pub mod admin_catalog;
pub mod albums;
pub mod artists;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod my_albums;
pub mod playlists;
pub mod posts;
