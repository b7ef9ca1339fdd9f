use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MemsplitError, Result};

pub const DEFAULT_IMAGE_FILE_NAME: &str = "memVal.mem";
pub const DEFAULT_MODULE_FILE_NAME: &str = "generated.v";

/// What to do when the source has no register array with an initial block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoMatchPolicy {
    /// Fail with `NoMatchFound`, writing nothing
    #[default]
    Error,
    /// Copy the source through unchanged and report a no-op run
    Passthrough,
}

/// Output naming and policies for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub image_file_name: String,
    pub module_file_name: String,
    pub on_no_match: NoMatchPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            image_file_name: DEFAULT_IMAGE_FILE_NAME.to_string(),
            module_file_name: DEFAULT_MODULE_FILE_NAME.to_string(),
            on_no_match: NoMatchPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MemsplitError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: GeneratorConfig =
            toml::from_str(&content).map_err(|e| MemsplitError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn with_image_file_name(mut self, name: impl Into<String>) -> Self {
        self.image_file_name = name.into();
        self
    }

    pub fn with_module_file_name(mut self, name: impl Into<String>) -> Self {
        self.module_file_name = name.into();
        self
    }

    pub fn with_no_match_policy(mut self, policy: NoMatchPolicy) -> Self {
        self.on_no_match = policy;
        self
    }

    /// Output names must be plain file names inside the destination directory.
    pub fn validate(&self, origin: &Path) -> Result<()> {
        for (key, value) in [
            ("image_file_name", &self.image_file_name),
            ("module_file_name", &self.module_file_name),
        ] {
            if !is_plain_file_name(value) {
                return Err(MemsplitError::Config {
                    path: origin.to_path_buf(),
                    message: format!("{} must be a plain file name, got `{}`", key, value),
                });
            }
        }
        if self.image_file_name == self.module_file_name {
            return Err(MemsplitError::Config {
                path: origin.to_path_buf(),
                message: "image_file_name and module_file_name must differ".to_string(),
            });
        }
        Ok(())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
