use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Class applied to `<body>`
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Light/dark flag. Purely presentational and not persisted.
#[derive(Debug, Default)]
pub struct ThemeToggle {
    dark: AtomicBool,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Theme {
        if self.dark.load(Ordering::SeqCst) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Flips the theme and returns the new one.
    pub fn toggle(&self) -> Theme {
        let was_dark = self.dark.fetch_xor(true, Ordering::SeqCst);
        if was_dark {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}
