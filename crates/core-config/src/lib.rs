//! Configuration loading and parsing.
//!
//! Parses `kitvi.toml` (or an override path provided by the binary). Every
//! table and key is optional; anything absent takes the built-in default, and
//! a file that fails to parse falls back to defaults entirely. Unknown fields
//! are ignored so older binaries tolerate newer files.
//!
//! Loading happens before the log subscriber exists (the log file name is a
//! config value), so `load_from` records what happened on the `Config` and
//! [`Config::log_summary`] reports it once logging is up.
//!
//! ```toml
//! [write]
//! default_path = "output.txt"   # save target when no file name is bound
//!
//! [cursor]
//! vertical_clamp = "eager"      # or "lazy"
//!
//! [status]
//! paint_last = true             # paint the status line after the document
//!
//! [log]
//! file = "kitvi.log"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "kitvi.toml";
pub const DEFAULT_SAVE_PATH: &str = "output.txt";
pub const DEFAULT_LOG_FILE: &str = "kitvi.log";

/// How vertical cursor motion treats a column past the end of the target line.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerticalClamp {
    /// Clamp to the destination line on every vertical move.
    #[default]
    Eager,
    /// Keep the column; clamp on the next horizontal move or edit.
    Lazy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WriteConfig {
    #[serde(default = "WriteConfig::default_path")]
    pub default_path: PathBuf,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            default_path: Self::default_path(),
        }
    }
}

impl WriteConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_SAVE_PATH)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CursorConfig {
    #[serde(default)]
    pub vertical_clamp: VerticalClamp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_paint_last")]
    pub paint_last: bool,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            paint_last: Self::default_paint_last(),
        }
    }
}

impl StatusConfig {
    // Status over document line 0 keeps the mode visible.
    fn default_paint_last() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Self::default_file(),
        }
    }
}

impl LogConfig {
    fn default_file() -> String {
        DEFAULT_LOG_FILE.to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub write: WriteConfig,
    #[serde(default)]
    pub cursor: CursorConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,         // original file string (optional)
    pub file: ConfigFile,            // parsed (or default) data
    pub source: Option<PathBuf>,     // file that was read, parsed or not
    pub parse_error: Option<String>, // set when `source` failed to parse
}

impl Config {
    /// Emit the deferred load outcome and the active settings.
    pub fn log_summary(&self) {
        match (&self.source, &self.parse_error) {
            (Some(path), Some(error)) => {
                warn!(target: "config", path = %path.display(), error = error.as_str(), "config_parse_failed_using_defaults");
            }
            (Some(path), None) => {
                info!(target: "config", path = %path.display(), "config_loaded");
            }
            (None, _) => {
                info!(target: "config", "config_not_found_using_defaults");
            }
        }
        info!(
            target: "config",
            from_file = self.raw.is_some(),
            default_save_path = %self.default_save_path().display(),
            vertical_clamp = ?self.vertical_clamp(),
            status_paint_last = self.status_paint_last(),
            log_file = self.log_file(),
            "config_active"
        );
    }

    pub fn default_save_path(&self) -> &std::path::Path {
        &self.file.write.default_path
    }

    pub fn vertical_clamp(&self) -> VerticalClamp {
        self.file.cursor.vertical_clamp
    }

    pub fn status_paint_last(&self) -> bool {
        self.file.status.paint_last
    }

    pub fn log_file(&self) -> &str {
        &self.file.log.file
    }
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("kitvi").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
            source: Some(path),
            parse_error: None,
        }),
        Err(e) => Ok(Config {
            source: Some(path),
            parse_error: Some(e.to_string()),
            ..Config::default()
        }),
    }
}
