use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStyle {
    Informational,
    Warning,
    Critical,
}

/// A modal alert: a headline message plus optional detail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub info: Option<String>,
    pub style: AlertStyle,
}

impl Alert {
    pub fn warning(message: impl Into<String>, info: Option<String>) -> Self {
        Self {
            message: message.into(),
            info,
            style: AlertStyle::Warning,
        }
    }
}

/// Shows alerts to the user. `run_modal` returns once the alert is dismissed.
pub trait AlertPresenter: Send + Sync {
    fn run_modal(&self, alert: &Alert);
}

/// Native message box through the dialog plugin.
///
/// `blocking_show` waits on the main thread's event loop, so this must be
/// called from a worker thread (async commands run on one).
pub struct DialogPresenter {
    app: AppHandle,
}

impl DialogPresenter {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl AlertPresenter for DialogPresenter {
    fn run_modal(&self, alert: &Alert) {
        let kind = match alert.style {
            AlertStyle::Informational => MessageDialogKind::Info,
            AlertStyle::Warning => MessageDialogKind::Warning,
            AlertStyle::Critical => MessageDialogKind::Error,
        };

        // The dialog title becomes the bold headline on macOS, the body the
        // informative text.
        let body = alert.info.clone().unwrap_or_default();
        self.app
            .dialog()
            .message(body)
            .title(alert.message.clone())
            .kind(kind)
            .buttons(MessageDialogButtons::Ok)
            .blocking_show();
    }
}
