// Login item management. macOS goes through SMAppService (macOS 13+) via the
// Objective-C shim in login_item_helper.m; other desktops use the autostart plugin.
use crate::error::{Operation, RegistrationError, RegistrationResult};
use std::fmt;
use std::sync::Arc;

/// Registration state as reported by the OS login item registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginItemStatus {
    NotRegistered,
    Enabled,
    RequiresApproval,
    NotFound,
}

impl LoginItemStatus {
    /// Maps SMAppService's raw status values. Anything unrecognised is
    /// treated as a missing helper.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => LoginItemStatus::NotRegistered,
            1 => LoginItemStatus::Enabled,
            2 => LoginItemStatus::RequiresApproval,
            _ => LoginItemStatus::NotFound,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == LoginItemStatus::Enabled
    }
}

impl fmt::Display for LoginItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginItemStatus::NotRegistered => write!(f, "not_registered"),
            LoginItemStatus::Enabled => write!(f, "enabled"),
            LoginItemStatus::RequiresApproval => write!(f, "requires_approval"),
            LoginItemStatus::NotFound => write!(f, "not_found"),
        }
    }
}

/// The OS-owned login item registry, addressed by helper bundle identifier.
pub trait LoginItemService: Send + Sync {
    fn status(&self, identifier: &str) -> LoginItemStatus;
    fn register(&self, identifier: &str) -> RegistrationResult<()>;
    fn unregister(&self, identifier: &str) -> RegistrationResult<()>;
}

#[cfg(target_os = "macos")]
mod ffi {
    use std::os::raw::{c_char, c_int, c_long};

    pub const OK: c_int = 0;
    pub const UNAVAILABLE: c_int = -1;

    extern "C" {
        pub fn login_item_status(identifier: *const c_char) -> c_int;
        pub fn login_item_register(
            identifier: *const c_char,
            err_buf: *mut c_char,
            err_len: usize,
            err_code: *mut c_long,
        ) -> c_int;
        pub fn login_item_unregister(
            identifier: *const c_char,
            err_buf: *mut c_char,
            err_len: usize,
            err_code: *mut c_long,
        ) -> c_int;
    }
}

/// SMAppService-backed login items.
#[cfg(target_os = "macos")]
pub struct SmAppService;

#[cfg(target_os = "macos")]
impl SmAppService {
    const ERROR_BUF_LEN: usize = 512;

    fn c_identifier(identifier: &str) -> RegistrationResult<std::ffi::CString> {
        std::ffi::CString::new(identifier)
            .map_err(|_| RegistrationError::InvalidIdentifier(identifier.to_string()))
    }

    fn update(&self, identifier: &str, operation: Operation) -> RegistrationResult<()> {
        use std::os::raw::{c_char, c_long};

        let ident = Self::c_identifier(identifier)?;
        let mut err_buf = [0 as c_char; Self::ERROR_BUF_LEN];
        let mut err_code: c_long = 0;

        let ret = unsafe {
            let call = match operation {
                Operation::Register => ffi::login_item_register,
                Operation::Unregister => ffi::login_item_unregister,
            };
            call(ident.as_ptr(), err_buf.as_mut_ptr(), err_buf.len(), &mut err_code)
        };

        if ret == ffi::OK {
            return Ok(());
        }

        // The shim always NUL-terminates within the buffer.
        let description = unsafe { std::ffi::CStr::from_ptr(err_buf.as_ptr()) }
            .to_string_lossy()
            .into_owned();

        if ret == ffi::UNAVAILABLE {
            Err(RegistrationError::Unavailable(description))
        } else {
            Err(RegistrationError::declined(operation, err_code as i64, description))
        }
    }
}

#[cfg(target_os = "macos")]
impl LoginItemService for SmAppService {
    fn status(&self, identifier: &str) -> LoginItemStatus {
        let Ok(ident) = Self::c_identifier(identifier) else {
            log::warn!("Login item identifier {:?} contains a NUL byte", identifier);
            return LoginItemStatus::NotFound;
        };
        match unsafe { ffi::login_item_status(ident.as_ptr()) } {
            ffi::UNAVAILABLE => LoginItemStatus::NotRegistered,
            raw => LoginItemStatus::from_raw(raw),
        }
    }

    fn register(&self, identifier: &str) -> RegistrationResult<()> {
        self.update(identifier, Operation::Register)
    }

    fn unregister(&self, identifier: &str) -> RegistrationResult<()> {
        self.update(identifier, Operation::Unregister)
    }
}

/// Autostart-plugin-backed login items. The plugin registers this app's own
/// executable, so the identifier is only used for logging.
#[cfg(any(windows, target_os = "linux"))]
pub struct AutostartService {
    app: tauri::AppHandle,
}

#[cfg(any(windows, target_os = "linux"))]
impl AutostartService {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

#[cfg(any(windows, target_os = "linux"))]
impl LoginItemService for AutostartService {
    fn status(&self, identifier: &str) -> LoginItemStatus {
        use tauri_plugin_autostart::ManagerExt;

        match self.app.autolaunch().is_enabled() {
            Ok(true) => LoginItemStatus::Enabled,
            Ok(false) => LoginItemStatus::NotRegistered,
            Err(e) => {
                log::warn!("Failed to read autostart status for {}: {}", identifier, e);
                LoginItemStatus::NotRegistered
            }
        }
    }

    fn register(&self, identifier: &str) -> RegistrationResult<()> {
        use tauri_plugin_autostart::ManagerExt;

        log::debug!("Enabling autostart for {}", identifier);
        self.app
            .autolaunch()
            .enable()
            .map_err(|e| RegistrationError::declined(Operation::Register, 0, e.to_string()))
    }

    fn unregister(&self, identifier: &str) -> RegistrationResult<()> {
        use tauri_plugin_autostart::ManagerExt;

        log::debug!("Disabling autostart for {}", identifier);
        self.app
            .autolaunch()
            .disable()
            .map_err(|e| RegistrationError::declined(Operation::Unregister, 0, e.to_string()))
    }
}

/// Fallback for platforms without a login item mechanism.
#[cfg(not(any(target_os = "macos", windows, target_os = "linux")))]
pub struct UnsupportedService;

#[cfg(not(any(target_os = "macos", windows, target_os = "linux")))]
impl LoginItemService for UnsupportedService {
    fn status(&self, _identifier: &str) -> LoginItemStatus {
        LoginItemStatus::NotRegistered
    }

    fn register(&self, _identifier: &str) -> RegistrationResult<()> {
        Err(RegistrationError::Unavailable(
            "Login items are not supported on this platform.".into(),
        ))
    }

    fn unregister(&self, _identifier: &str) -> RegistrationResult<()> {
        Err(RegistrationError::Unavailable(
            "Login items are not supported on this platform.".into(),
        ))
    }
}

/// Picks the login item backend for the current platform.
pub fn platform_service(app: &tauri::AppHandle) -> Arc<dyn LoginItemService> {
    #[cfg(target_os = "macos")]
    {
        let _ = app;
        Arc::new(SmAppService)
    }
    #[cfg(any(windows, target_os = "linux"))]
    {
        Arc::new(AutostartService::new(app.clone()))
    }
    #[cfg(not(any(target_os = "macos", windows, target_os = "linux")))]
    {
        let _ = app;
        Arc::new(UnsupportedService)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_raw() {
        assert_eq!(LoginItemStatus::from_raw(0), LoginItemStatus::NotRegistered);
        assert_eq!(LoginItemStatus::from_raw(1), LoginItemStatus::Enabled);
        assert_eq!(LoginItemStatus::from_raw(2), LoginItemStatus::RequiresApproval);
        assert_eq!(LoginItemStatus::from_raw(3), LoginItemStatus::NotFound);
        assert_eq!(LoginItemStatus::from_raw(42), LoginItemStatus::NotFound);
    }

    #[test]
    fn test_only_enabled_counts_as_checked() {
        assert!(LoginItemStatus::Enabled.is_enabled());
        assert!(!LoginItemStatus::NotRegistered.is_enabled());
        assert!(!LoginItemStatus::RequiresApproval.is_enabled());
        assert!(!LoginItemStatus::NotFound.is_enabled());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&LoginItemStatus::RequiresApproval).unwrap();
        assert_eq!(json, "\"requires_approval\"");
        assert_eq!(LoginItemStatus::RequiresApproval.to_string(), "requires_approval");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_nul_identifier_rejected_before_os_call() {
        let err = SmAppService.register("com.example\0helper").unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidIdentifier(_)));
    }
}
