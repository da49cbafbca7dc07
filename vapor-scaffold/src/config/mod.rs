//! Configuration management for vapor-scaffold
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables (`VAPOR_SCAFFOLD_` prefix, `__` for nesting)
//! 3. `./scaffold.toml`
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # scaffold.toml
//! [output]
//! root = "."
//! source_extension = "swift"
//! view_extension = "leaf"
//!
//! [fields]
//! strict = false
//! ```
//!
//! The same settings from the environment:
//!
//! ```bash
//! VAPOR_SCAFFOLD_OUTPUT__ROOT=../my-app
//! VAPOR_SCAFFOLD_FIELDS__STRICT=true
//! ```

use crate::error::{Result, ScaffoldError};
use crate::scaffold::{ArtifactLayout, ParseMode};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the project-local configuration file
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "VAPOR_SCAFFOLD_";

/// Where and how generated files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory the generated paths are relative to
    pub root: PathBuf,

    /// Extension of model, controller and migration files
    pub source_extension: String,

    /// Extension of view templates
    pub view_extension: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        let layout = ArtifactLayout::default();
        Self {
            root: PathBuf::from("."),
            source_extension: layout.source_extension,
            view_extension: layout.view_extension,
        }
    }
}

impl OutputSettings {
    /// File extensions as an artifact layout
    #[must_use]
    pub fn layout(&self) -> ArtifactLayout {
        ArtifactLayout {
            source_extension: self.source_extension.clone(),
            view_extension: self.view_extension.clone(),
        }
    }
}

/// Field argument parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Reject malformed field arguments instead of dropping them
    pub strict: bool,
}

impl FieldSettings {
    /// Parse mode for these settings
    #[must_use]
    pub const fn parse_mode(&self) -> ParseMode {
        ParseMode::from_strict(self.strict)
    }
}

/// Complete vapor-scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,

    /// Field parsing settings
    #[serde(default)]
    pub fields: FieldSettings,
}

impl ScaffoldConfig {
    /// Load configuration from `./scaffold.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if a source cannot be parsed or the
    /// result is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from an explicit file and the environment
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if a source cannot be parsed or the
    /// result is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Layered configuration sources
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check settings that deserialize but cannot be used
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`] if a file extension is empty.
    pub fn validate(&self) -> Result<()> {
        if self.output.source_extension.is_empty() {
            return Err(ScaffoldError::Config(
                "output.source_extension must not be empty".to_string(),
            ));
        }
        if self.output.view_extension.is_empty() {
            return Err(ScaffoldError::Config(
                "output.view_extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
