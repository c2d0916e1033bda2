use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "HANDLERGEN_CONFIG";

/// Base handlergen config directory (universal ~/.config/handlergen/ on all platforms)
pub fn handlergen() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("handlergen"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("handlergen"))
    }
}

/// Global handlergen.json config file path, unless overridden by `HANDLERGEN_CONFIG`.
pub fn handlergen_json() -> Result<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(handlergen()?.join("handlergen.json")),
    }
}
