use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Provides the page theme, restored from and persisted to local storage.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
        Effect::watch(
            || (),
            move |_, _, _| {
                theme.set(stored.get_untracked());
            },
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |current, _, _| {
                set_stored.set(*current);
            },
            false,
        );
    }

    provide_context(theme);
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}
