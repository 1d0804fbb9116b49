use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};

pub const MAIN_WINDOW: &str = "main";

pub fn create_main_window(app: &tauri::AppHandle, title: &str) -> tauri::Result<()> {
    if let Some(win) = app.get_webview_window(MAIN_WINDOW) {
        let _ = win.show();
        let _ = win.set_focus();
        return Ok(());
    }

    let win = WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::App("index.html".into()))
        .title(title)
        .inner_size(280.0, 96.0)
        .resizable(false)
        .center()
        .visible(true)
        .focused(true)
        .build()?;

    let _ = win.set_focus();
    Ok(())
}
