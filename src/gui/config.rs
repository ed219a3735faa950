use iced::Theme;

use crate::core::{AppState, ProjectStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeChoice {
    Light,
    #[default]
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// Start with the two sample projects.
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            seed: true,
        }
    }
}

impl AppConfig {
    pub fn initial_state(&self) -> AppState {
        if self.seed {
            AppState::default()
        } else {
            AppState::new(ProjectStore::new())
        }
    }
}
