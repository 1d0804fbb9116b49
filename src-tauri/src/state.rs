use crate::config::AppConfig;
use crate::toggle::LoginItemToggle;

pub struct AppState {
    config: AppConfig,
    toggle: LoginItemToggle,
}

impl AppState {
    pub fn new(config: AppConfig, toggle: LoginItemToggle) -> Self {
        Self { config, toggle }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn toggle(&self) -> &LoginItemToggle {
        &self.toggle
    }
}
