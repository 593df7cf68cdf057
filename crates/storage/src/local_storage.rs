//! Browser local storage backend.
//!
//! User data lives as one JSON blob under [`crate::STORAGE_KEY`]. A missing
//! or damaged blob yields empty data instead of an error, so a first visit
//! and a corrupted store both start the app cleanly.

use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use log::error;
use tamrinsaz_domain as domain;
use tamrinsaz_web_app as web_app;

use crate::{codec, normalize};

pub struct LocalStorage;

const KEY_SETTINGS: &str = "settings";
const KEY_ACTIVE_TAB: &str = "workout-active-tab";
const KEY_LOG: &str = "log";

impl domain::UserDataRepository for LocalStorage {
    fn read_user_data(&self) -> Result<domain::UserData, domain::ReadError> {
        match gloo_storage::LocalStorage::get::<serde_json::Value>(crate::STORAGE_KEY) {
            Ok(value) => Ok(normalize::normalize_user_data(&value).unwrap_or_else(|| {
                error!("stored user data has no sessions");
                domain::UserData::default()
            })),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
                Ok(domain::UserData::default())
            }
            Err(gloo_storage::errors::StorageError::SerdeError(err)) => {
                error!("failed to parse stored user data: {err}");
                Ok(domain::UserData::default())
            }
            Err(err) => Err(domain::StorageError::Unavailable(err.to_string()).into()),
        }
    }

    fn write_user_data(&self, data: &domain::UserData) -> Result<(), domain::WriteError> {
        gloo_storage::LocalStorage::set(crate::STORAGE_KEY, codec::UserData::from(data))
            .map_err(|err| domain::StorageError::Unavailable(err.to_string()).into())
    }

    fn clear_user_data(&self) -> Result<(), domain::WriteError> {
        gloo_storage::LocalStorage::delete(crate::STORAGE_KEY);
        Ok(())
    }
}

impl web_app::SettingsRepository for LocalStorage {
    fn read_settings(&self) -> Result<web_app::Settings, String> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
                Ok(web_app::Settings::default())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    fn write_settings(&self, settings: web_app::Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }

    // The active tab is kept as a bare string, not JSON, for compatibility
    // with values written by earlier versions.
    fn read_active_tab(&self) -> Result<web_app::ActiveTab, String> {
        gloo_storage::LocalStorage::raw()
            .get_item(KEY_ACTIVE_TAB)
            .map(|value| {
                value
                    .as_deref()
                    .map_or_else(web_app::ActiveTab::default, web_app::ActiveTab::from)
            })
            .map_err(|err| format!("{err:?}"))
    }

    fn write_active_tab(&self, active_tab: &web_app::ActiveTab) -> Result<(), String> {
        gloo_storage::LocalStorage::raw()
            .set_item(KEY_ACTIVE_TAB, &active_tab.to_string())
            .map_err(|err| format!("{err:?}"))
    }
}

pub struct Log;

impl web_app::log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<web_app::log::Entry>, web_app::log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| web_app::log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: web_app::log::Entry) -> Result<(), web_app::log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(web_app::log::MAX_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| web_app::log::Error::Unknown(err.to_string()))
    }
}
