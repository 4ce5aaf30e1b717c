//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading and saving the
//! tracker settings as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{TrackerError, TrackerResult};

use super::types::AppContext;

/// File name of the settings document inside a configuration directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Loads, holds and persists the tracker settings.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── settings.yaml   # positions, locations, current user, default rate
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Positions: {:?}", loader.context().positions);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    context: AppContext,
}

impl ConfigLoader {
    /// Loads settings from `settings.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The settings file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(dir: P) -> TrackerResult<Self> {
        let path = dir.as_ref().join(SETTINGS_FILE);
        let context = Self::load_yaml(&path)?;

        Ok(Self {
            path: Some(path),
            context,
        })
    }

    /// Loads settings, falling back to the built-in defaults when the file is
    /// missing or malformed.
    ///
    /// The path is remembered either way so a later [`save`](Self::save)
    /// creates the file.
    pub fn load_or_default<P: AsRef<Path>>(dir: P) -> Self {
        let path = dir.as_ref().join(SETTINGS_FILE);
        let context = match Self::load_yaml(&path) {
            Ok(context) => context,
            Err(err) => {
                warn!(error = %err, "Falling back to default settings");
                AppContext::default()
            }
        };

        Self {
            path: Some(path),
            context,
        }
    }

    /// Creates a loader around an in-memory context with no backing file.
    pub fn from_context(context: AppContext) -> Self {
        Self {
            path: None,
            context,
        }
    }

    fn load_yaml(path: &Path) -> TrackerResult<AppContext> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded application context.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Returns the path of the backing settings file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replaces the position list and persists the settings.
    pub fn update_positions(&mut self, positions: Vec<String>) -> TrackerResult<()> {
        self.replace(AppContext {
            positions,
            ..self.context.clone()
        })
    }

    /// Replaces the location list and persists the settings.
    pub fn update_locations(&mut self, locations: Vec<String>) -> TrackerResult<()> {
        self.replace(AppContext {
            locations,
            ..self.context.clone()
        })
    }

    /// Replaces the whole context and persists the settings.
    ///
    /// The in-memory settings change only once the file is written.
    pub fn replace(&mut self, context: AppContext) -> TrackerResult<()> {
        self.write(&context)?;
        self.context = context;
        Ok(())
    }

    /// Writes the current settings to the backing file.
    ///
    /// A loader without a backing file keeps its settings in memory only.
    pub fn save(&self) -> TrackerResult<()> {
        self.write(&self.context)
    }

    fn write(&self, context: &AppContext) -> TrackerResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let path_str = path.display().to_string();
        let write_error = |e: &dyn std::fmt::Display| TrackerError::ConfigWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        };

        let content = serde_yaml::to_string(context).map_err(|e| write_error(&e))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(&e))?;
        }
        fs::write(path, content).map_err(|e| write_error(&e))?;

        info!(path = %path_str, "Settings saved");
        Ok(())
    }
}
