mod alert;
mod commands;
mod config;
mod error;
mod login_item;
mod state;
mod toggle;
mod windows;

use std::sync::Arc;

use alert::DialogPresenter;
use config::AppConfig;
use state::AppState;
use tauri::Manager;
use toggle::LoginItemToggle;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    log::info!("LoginItem Demo starting (helper: {})", config.helper_identifier);

    let builder = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init());

    #[cfg(any(windows, target_os = "linux"))]
    let builder = builder.plugin(tauri_plugin_autostart::init(
        tauri_plugin_autostart::MacosLauncher::LaunchAgent,
        None,
    ));

    builder
        .invoke_handler(tauri::generate_handler![
            commands::get_launch_at_login,
            commands::set_launch_at_login,
            commands::refresh_launch_at_login,
            commands::get_login_item_status,
            commands::get_helper_identifier,
            commands::open_login_items_settings,
        ])
        .setup(move |app| {
            let handle = app.handle().clone();

            // The flag is read from the OS once, here; the window only sees
            // the cached value.
            let service = login_item::platform_service(&handle);
            let presenter = Arc::new(DialogPresenter::new(handle.clone()));
            let toggle = LoginItemToggle::new(config.helper_identifier.clone(), service, presenter);

            let title = config.window_title.clone();
            app.manage(AppState::new(config.clone(), toggle));

            windows::create_main_window(&handle, &title)?;
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
