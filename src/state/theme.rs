use leptos::*;

use crate::utils::storage;

pub const THEME_STORAGE_KEY: &str = "crescendo_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Initial theme: the persisted choice wins, then the OS preference.
fn initial_theme() -> Theme {
    storage::get_item(THEME_STORAGE_KEY)
        .and_then(|name| Theme::from_name(&name))
        .unwrap_or_else(system_preference)
}

#[cfg(target_arch = "wasm32")]
fn system_preference() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn system_preference() -> Theme {
    Theme::Light
}

#[derive(Clone)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(initial_theme()),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::set_item(THEME_STORAGE_KEY, theme.name());
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        let next = match self.theme.get() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set_theme(next);
    }

    #[cfg(target_arch = "wasm32")]
    fn apply_to_dom(&self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let class_list = root.class_list();
                let _ = class_list.remove_1("dark");
                let class = self.theme.get_untracked().as_class();
                if !class.is_empty() {
                    let _ = class_list.add_1(class);
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn apply_to_dom(&self) {}

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::new)
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state.clone());
    state.apply_to_dom();
    state
}
