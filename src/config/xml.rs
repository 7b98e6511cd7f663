//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request; never overwrites.
//!
//! A missing file yields defaults. Unknown fields and malformed values are errors.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path};
use super::types::{Config, DEFAULT_WAIT_TIMEOUT, LogLevel};
use crate::access::DEFAULT_POLL_INTERVAL;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    wait_timeout_ms: Option<String>,
    poll_interval_ms: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn millis(field: &str, raw: Option<String>) -> Result<Option<Duration>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(v) => {
            let ms: u64 = v.parse().with_context(|| format!("invalid {field}: '{v}'"))?;
            Ok(Some(Duration::from_millis(ms)))
        }
    }
}

/// Parse config XML text.
pub fn parse_config_xml(content: &str) -> Result<Config> {
    let parsed: XmlConfig = from_xml_str(content).context("parse config xml")?;

    let log_level = match non_empty(parsed.log_level) {
        None => LogLevel::default(),
        Some(s) => s.parse::<LogLevel>().map_err(anyhow::Error::msg)?,
    };
    Ok(Config {
        log_level,
        log_file: non_empty(parsed.log_file).map(PathBuf::from),
        wait_timeout: millis("wait_timeout_ms", parsed.wait_timeout_ms)?.unwrap_or(DEFAULT_WAIT_TIMEOUT),
        poll_interval: millis("poll_interval_ms", parsed.poll_interval_ms)?.unwrap_or(DEFAULT_POLL_INTERVAL),
    })
}

/// Load from an explicit path; a missing file yields defaults.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    parse_config_xml(&content).with_context(|| format!("config file {}", path.display()))
}

/// Load from `$PW_IO_CONFIG` or the default location.
pub fn load_config() -> Result<Config> {
    match default_config_path() {
        Some(path) => load_config_from_xml_path(&path),
        None => Ok(Config::default()),
    }
}

/// Write a commented template config. Fails if `path` already exists.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create config directory {}", parent.display()))?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/pw_io.log".into());

    let content = format!(
        "<!--\n  pw_io configuration (XML)\n\n    log_level         -> quiet | normal | info | debug\n    log_file          -> optional log file (console output is always on)\n    wait_timeout_ms   -> how long `wait` keeps retrying a locked file\n    poll_interval_ms  -> delay between retries\n\n  CLI flags override these values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <wait_timeout_ms>{}</wait_timeout_ms>\n  <poll_interval_ms>{}</poll_interval_ms>\n</config>\n",
        suggested_log,
        DEFAULT_WAIT_TIMEOUT.as_millis(),
        DEFAULT_POLL_INTERVAL.as_millis(),
    );

    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("create config {}", path.display()))?;
    f.write_all(content.as_bytes())?;
    f.sync_all()?;

    info!("Created template config at {}", path.display());
    Ok(())
}
