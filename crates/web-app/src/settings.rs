use std::fmt::{self, Display};

/// UI state persisted next to the user data: settings and the session tab
/// that was open last.
#[allow(clippy::missing_errors_doc)]
pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, String>;
    fn write_settings(&self, settings: Settings) -> Result<(), String>;

    fn read_active_tab(&self) -> Result<ActiveTab, String>;
    fn write_active_tab(&self, active_tab: &ActiveTab) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// The session tab selected on the workouts page, stored as the raw string
/// the original value key contains: `all` or a session ID.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    All,
    Session(String),
}

impl Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveTab::All => write!(f, "all"),
            ActiveTab::Session(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for ActiveTab {
    fn from(value: &str) -> Self {
        match value {
            "all" => ActiveTab::All,
            id => ActiveTab::Session(id.to_string()),
        }
    }
}
