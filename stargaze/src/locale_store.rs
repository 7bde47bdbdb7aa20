//! Remembers the user's language choice between runs.
//!
//! The preference lives in a small JSON file, by default
//! `<config dir>/stargaze/preferences.json`. Nothing is written unless the
//! caller asks for it with [`LocaleStore::save`].

use crate::i18n::Locale;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "stargaze";
const FILE_NAME: &str = "preferences.json";

#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    lang: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStore {
    path: PathBuf,
}

impl LocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(FILE_NAME))
    }

    /// Store under the platform's per-user configuration directory, if the
    /// platform has one.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::in_dir(dir.join(APP_DIR)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved locale, or `None` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Locale>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved locale");
                return Ok(None);
            }
            Err(err) => return Err(Error::Io(err)),
        };
        let prefs: Preferences = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), locale = %prefs.lang, "loaded saved locale");
        Ok(Some(prefs.lang))
    }

    pub fn save(&self, locale: Locale) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Preferences { lang: locale })?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), %locale, "saved locale preference");
        Ok(())
    }
}
