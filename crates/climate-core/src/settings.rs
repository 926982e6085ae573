//! Unit preference file.
//!
//! The two display units are kept in a small XML document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <settings>
//!     <temperatureUnit>°C</temperatureUnit>
//!     <pressureUnit>Pa</pressureUnit>
//! </settings>
//! ```
//!
//! A missing or unrecognised value falls back to its default on its own;
//! only a document that cannot be read at all is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use climate_types::{PressureUnit, TemperatureUnit, UnitPreferences};

use crate::error::{Error, Result};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "settings")]
struct SettingsDocument {
    #[serde(
        rename = "temperatureUnit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    temperature_unit: Option<String>,
    #[serde(
        rename = "pressureUnit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pressure_unit: Option<String>,
}

impl From<&UnitPreferences> for SettingsDocument {
    fn from(prefs: &UnitPreferences) -> Self {
        Self {
            temperature_unit: Some(prefs.temperature_unit.symbol().to_string()),
            pressure_unit: Some(prefs.pressure_unit.token().to_string()),
        }
    }
}

impl SettingsDocument {
    fn into_preferences(self, path: &Path) -> UnitPreferences {
        let mut prefs = UnitPreferences::default();
        if let Some(value) = self.temperature_unit {
            match value.trim().parse::<TemperatureUnit>() {
                Ok(unit) => prefs.temperature_unit = unit,
                Err(e) => warn!("{} in {}, keeping {}", e, path.display(), prefs.temperature_unit),
            }
        }
        if let Some(value) = self.pressure_unit {
            match value.trim().parse::<PressureUnit>() {
                Ok(unit) => prefs.pressure_unit = unit,
                Err(e) => warn!("{} in {}, keeping {}", e, path.display(), prefs.pressure_unit),
            }
        }
        prefs
    }
}

/// Location of the preference file and the operations on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Preference file at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/climate/settings.xml`, or `./settings.xml` when the
    /// platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("climate").join("settings.xml"))
            .unwrap_or_else(|| PathBuf::from("settings.xml"))
    }

    /// Where this file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the preferences.
    ///
    /// # Errors
    ///
    /// [`Error::PersistenceUnavailable`] when the file cannot be read and
    /// [`Error::MalformedSettings`] when it is not a well-formed document.
    pub fn load(&self) -> Result<UnitPreferences> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| Error::persistence(&self.path, e))?;
        let document: SettingsDocument = quick_xml::de::from_str(&content)
            .map_err(|e| Error::malformed(&self.path, e.to_string()))?;
        let prefs = document.into_preferences(&self.path);
        info!(
            "Loaded settings from {}: {}, {}",
            self.path.display(),
            prefs.temperature_unit,
            prefs.pressure_unit
        );
        Ok(prefs)
    }

    /// Read the preferences, falling back to the defaults on any error.
    pub fn load_or_default(&self) -> UnitPreferences {
        self.load().unwrap_or_else(|e| {
            warn!("{}; using default units", e);
            UnitPreferences::default()
        })
    }

    /// Write the preferences, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// [`Error::PersistenceUnavailable`] when the file cannot be written and
    /// [`Error::EncodeSettings`] when the document cannot be produced.
    pub fn save(&self, prefs: &UnitPreferences) -> Result<()> {
        let content = to_xml(prefs)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::persistence(&self.path, e))?;
        }
        fs::write(&self.path, content).map_err(|e| Error::persistence(&self.path, e))?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Write the preferences, logging instead of returning a failure.
    pub fn save_or_log(&self, prefs: &UnitPreferences) {
        if let Err(e) = self.save(prefs) {
            warn!("{}", e);
        }
    }
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

fn to_xml(prefs: &UnitPreferences) -> Result<String> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 4);
    SettingsDocument::from(prefs)
        .serialize(serializer)
        .map_err(|e| Error::EncodeSettings(e.to_string()))?;
    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}
