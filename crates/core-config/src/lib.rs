//! Configuration loading and parsing.
//!
//! Parses `kiln.toml` (or an override path provided by the binary). Every
//! field is optional; a missing file or a parse error yields the defaults so a
//! broken config never keeps the editor from starting. Unknown fields are
//! ignored. `tab_stop` is clamped to `1..=16` and the two timeouts to a day
//! and a minute when the config is loaded; the raw parsed values are kept
//! alongside the effective ones.

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "kiln.toml";
pub const MAX_TAB_STOP: usize = 16;
pub const MAX_MESSAGE_TIMEOUT_SECS: u64 = 24 * 60 * 60;
pub const MAX_POLL_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_stop")]
    pub tab_stop: usize,
    /// Extra Ctrl-Q presses required to quit with unsaved changes.
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            quit_times: Self::default_quit_times(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_stop() -> usize {
        8
    }
    const fn default_quit_times() -> u32 {
        3
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl StatusConfig {
    const fn default_message_timeout_secs() -> u64 {
        5
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Idle wait per loop iteration; bounds how late an expired message disappears.
    #[serde(default = "InputConfig::default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: Self::default_poll_timeout_ms(),
        }
    }
}

impl InputConfig {
    const fn default_poll_timeout_ms() -> u64 {
        100
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>, // file contents as read, when loaded from disk
    pub file: ConfigFile,    // parsed (or default) data
    pub effective_tab_stop: usize,
    pub effective_message_timeout_secs: u64,
    pub effective_poll_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(None, ConfigFile::default())
    }
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("kiln").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config::from_file(Some(content), file)),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn from_file(raw: Option<String>, file: ConfigFile) -> Self {
        let requested = file.editor.tab_stop;
        let effective_tab_stop = requested.clamp(1, MAX_TAB_STOP);
        if effective_tab_stop != requested {
            info!(
                target: "config",
                requested,
                clamped = effective_tab_stop,
                max = MAX_TAB_STOP,
                "tab_stop_clamped"
            );
        }
        let effective_message_timeout_secs = clamp_logged(
            "message_timeout_secs",
            file.status.message_timeout_secs,
            MAX_MESSAGE_TIMEOUT_SECS,
        );
        let effective_poll_timeout_ms =
            clamp_logged("poll_timeout_ms", file.input.poll_timeout_ms, MAX_POLL_TIMEOUT_MS);
        Self {
            raw,
            file,
            effective_tab_stop,
            effective_message_timeout_secs,
            effective_poll_timeout_ms,
        }
    }

    pub fn tab_stop(&self) -> usize {
        self.effective_tab_stop
    }

    pub fn quit_times(&self) -> u32 {
        self.file.editor.quit_times
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.effective_message_timeout_secs)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.effective_poll_timeout_ms)
    }
}

fn clamp_logged(field: &'static str, requested: u64, max: u64) -> u64 {
    let clamped = requested.min(max);
    if clamped != requested {
        info!(target: "config", field, requested, clamped, max, "timeout_clamped");
    }
    clamped
}
