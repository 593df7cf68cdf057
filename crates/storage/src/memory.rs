//! In-memory backend holding the same serialized blobs the browser backend
//! keeps in local storage. Reads go through the same parse and normalization
//! path, so behavior on stale or damaged data matches the browser exactly.

use std::cell::RefCell;

use log::error;
use tamrinsaz_domain as domain;
use tamrinsaz_web_app as web_app;

use crate::{codec, normalize};

#[derive(Default)]
pub struct Memory {
    user_data: RefCell<Option<String>>,
    settings: RefCell<Option<String>>,
    active_tab: RefCell<Option<String>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend already holding a raw user data blob, as if a
    /// previous run had written it.
    #[must_use]
    pub fn with_user_data(blob: &str) -> Self {
        Self {
            user_data: RefCell::new(Some(blob.to_string())),
            ..Self::default()
        }
    }
}

impl domain::UserDataRepository for Memory {
    fn read_user_data(&self) -> Result<domain::UserData, domain::ReadError> {
        let Some(blob) = self.user_data.borrow().clone() else {
            return Ok(domain::UserData::default());
        };
        let value = match serde_json::from_str(&blob) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse stored user data: {err}");
                return Ok(domain::UserData::default());
            }
        };
        Ok(normalize::normalize_user_data(&value).unwrap_or_else(|| {
            error!("stored user data has no sessions");
            domain::UserData::default()
        }))
    }

    fn write_user_data(&self, data: &domain::UserData) -> Result<(), domain::WriteError> {
        let blob =
            serde_json::to_string(&codec::UserData::from(data)).expect("serialization failed");
        *self.user_data.borrow_mut() = Some(blob);
        Ok(())
    }

    fn clear_user_data(&self) -> Result<(), domain::WriteError> {
        *self.user_data.borrow_mut() = None;
        Ok(())
    }
}

impl web_app::SettingsRepository for Memory {
    fn read_settings(&self) -> Result<web_app::Settings, String> {
        self.settings.borrow().as_deref().map_or_else(
            || Ok(web_app::Settings::default()),
            |blob| serde_json::from_str(blob).map_err(|err| err.to_string()),
        )
    }

    fn write_settings(&self, settings: web_app::Settings) -> Result<(), String> {
        *self.settings.borrow_mut() =
            Some(serde_json::to_string(&settings).map_err(|err| err.to_string())?);
        Ok(())
    }

    fn read_active_tab(&self) -> Result<web_app::ActiveTab, String> {
        Ok(self
            .active_tab
            .borrow()
            .as_deref()
            .map_or_else(web_app::ActiveTab::default, web_app::ActiveTab::from))
    }

    fn write_active_tab(&self, active_tab: &web_app::ActiveTab) -> Result<(), String> {
        *self.active_tab.borrow_mut() = Some(active_tab.to_string());
        Ok(())
    }
}
