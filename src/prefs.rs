//! On-disk preference store.
//!
//! A single JSON object; today it only carries `"theme"`. Unknown keys are
//! preserved on save so older and newer builds can share a file.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::theme::Theme;

const APP_DIR: &str = "slidedeck";
const PREFS_FILE: &str = "prefs.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to read preferences {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("malformed preferences {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode preferences: {0}")]
    Serialize(serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/slidedeck/prefs.json`, falling back to the working
    /// directory when the platform has no config dir.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(PREFS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields defaults.
    pub fn load(&self) -> Result<Preferences, PrefsError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preferences file, using defaults");
                return Ok(Preferences::default());
            }
            Err(source) => {
                return Err(PrefsError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&text).map_err(|source| PrefsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn load_or_default(&self) -> Preferences {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unusable preferences");
            Preferences::default()
        })
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        let write_err = |source| PrefsError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        let text = serde_json::to_string_pretty(prefs).map_err(PrefsError::Serialize)?;
        fs::write(&self.path, text).map_err(write_err)?;
        debug!(path = %self.path.display(), theme = %prefs.theme, "preferences saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
