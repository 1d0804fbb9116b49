use crate::login_item::LoginItemStatus;
use crate::state::AppState;
use crate::toggle::ToggleOutcome;

#[cfg(target_os = "macos")]
const LOGIN_ITEMS_SETTINGS_URL: &str =
    "x-apple.systempreferences:com.apple.LoginItems-Settings.extension";

#[tauri::command]
pub fn get_launch_at_login(state: tauri::State<'_, AppState>) -> bool {
    state.toggle().is_checked()
}

// Async so the failure alert blocks a worker thread rather than the event loop.
#[tauri::command]
pub async fn set_launch_at_login(
    state: tauri::State<'_, AppState>,
    enabled: bool,
) -> Result<ToggleOutcome, String> {
    Ok(state.toggle().set_checked(enabled))
}

#[tauri::command]
pub fn refresh_launch_at_login(state: tauri::State<'_, AppState>) -> bool {
    state.toggle().refresh()
}

#[tauri::command]
pub fn get_login_item_status(state: tauri::State<'_, AppState>) -> LoginItemStatus {
    state.toggle().status()
}

#[tauri::command]
pub fn get_helper_identifier(state: tauri::State<'_, AppState>) -> String {
    state.config().helper_identifier.clone()
}

#[tauri::command]
#[allow(unused_variables)]
pub fn open_login_items_settings(app: tauri::AppHandle) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    {
        use tauri_plugin_opener::OpenerExt;

        app.opener()
            .open_url(LOGIN_ITEMS_SETTINGS_URL, None::<&str>)
            .map_err(|e| e.to_string())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Err("Login Items settings are only available on macOS".to_string())
    }
}
