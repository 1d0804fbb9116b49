//! "Launch at Login" toggle.
//!
//! Holds a cached copy of the helper's login item state, read from the OS
//! once at construction. Changing the toggle registers or unregisters the
//! helper; failures are reported through a modal alert and the toggle keeps
//! the value the user picked.

use crate::alert::{Alert, AlertPresenter};
use crate::config::UPDATE_FAILED_MESSAGE;
use crate::login_item::{LoginItemService, LoginItemStatus};
use parking_lot::Mutex;
use std::sync::Arc;

/// What a toggle change ended up doing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ToggleOutcome {
    Unchanged,
    Registered,
    Unregistered,
    Failed { error: String },
}

pub struct LoginItemToggle {
    identifier: String,
    is_checked: Mutex<bool>,
    service: Arc<dyn LoginItemService>,
    presenter: Arc<dyn AlertPresenter>,
}

impl LoginItemToggle {
    pub fn new(
        identifier: impl Into<String>,
        service: Arc<dyn LoginItemService>,
        presenter: Arc<dyn AlertPresenter>,
    ) -> Self {
        let identifier = identifier.into();
        let status = service.status(&identifier);
        log::info!("Login item {} status: {}", identifier, status);

        Self {
            is_checked: Mutex::new(status.is_enabled()),
            identifier,
            service,
            presenter,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_checked(&self) -> bool {
        *self.is_checked.lock()
    }

    /// Live status from the OS; does not touch the cached flag.
    pub fn status(&self) -> LoginItemStatus {
        self.service.status(&self.identifier)
    }

    /// Re-reads the OS status into the cached flag.
    pub fn refresh(&self) -> bool {
        let enabled = self.status().is_enabled();
        *self.is_checked.lock() = enabled;
        enabled
    }

    /// Applies a change of the checkbox.
    ///
    /// Setting the value the toggle already holds does nothing. Otherwise
    /// the flag takes the new value first and is not rolled back if the OS
    /// refuses the change.
    pub fn set_checked(&self, enabled: bool) -> ToggleOutcome {
        {
            let mut checked = self.is_checked.lock();
            if *checked == enabled {
                return ToggleOutcome::Unchanged;
            }
            *checked = enabled;
        }

        let result = if enabled {
            self.service.register(&self.identifier)
        } else {
            self.service.unregister(&self.identifier)
        };

        match result {
            Ok(()) if enabled => {
                log::info!("Registered login item {}", self.identifier);
                ToggleOutcome::Registered
            }
            Ok(()) => {
                log::info!("Unregistered login item {}", self.identifier);
                ToggleOutcome::Unregistered
            }
            Err(e) => {
                log::warn!("Failed to update login item {}: {:?}", self.identifier, e);
                let info = e.to_string();
                self.presenter
                    .run_modal(&Alert::warning(UPDATE_FAILED_MESSAGE, Some(info.clone())));
                ToggleOutcome::Failed { error: info }
            }
        }
    }
}
