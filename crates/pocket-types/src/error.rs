//! Error types for the pocket launcher.

use std::io;

/// Errors produced by the launcher framework.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display() {
        let e = LauncherError::Backend("init failed".into());
        assert_eq!(format!("{e}"), "backend error: init failed");
    }

    #[test]
    fn font_error_display() {
        let e = LauncherError::Font("no such family: Arial".into());
        assert_eq!(format!("{e}"), "font error: no such family: Arial");
    }

    #[test]
    fn config_error_display() {
        let e = LauncherError::Config("menu is empty".into());
        assert_eq!(format!("{e}"), "config error: menu is empty");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: LauncherError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: LauncherError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(LauncherError::Config("oops".into()));
        assert!(r.is_err());
    }
}
