//! Default config and log locations.

use dirs::{config_dir, data_dir};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PW_IO_CONFIG";

/// `$PW_IO_CONFIG` when set, else `<config_dir>/pw_io/config.xml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    config_dir().map(|base| base.join("pw_io").join("config.xml"))
}

/// Suggested log file location, `<data_dir>/pw_io/pw_io.log`.
pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|base| base.join("pw_io").join("pw_io.log"))
}
