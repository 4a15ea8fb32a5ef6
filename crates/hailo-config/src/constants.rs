//! Constants and enums for configuration file locations and schema keys.

use std::path::Path;

/// Environment variable overriding the discovered repository root.
pub const ROOT_ENV: &str = "HAILO_APPS_ROOT";

/// Directory holding both documents, relative to the repository root.
pub const CONFIG_SUBDIR: &str = "hailo_apps/config";

/// Capacity of the process-wide document cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Source tag applied to model entries that do not declare one.
pub const DEFAULT_MODEL_SOURCE: &str = "mz";

/// Source tag marking a model from the generative model zoo.
pub const GEN_AI_SOURCE: &str = "gen-ai-mz";

/// Top-level keys of the resource document that are never applications.
pub const RESERVED_KEYS: [&str; 5] = ["videos", "images", "json", "inputs", "inputs_aliases"];

/// The two configuration documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    /// `config.yaml`: resource root paths and the model zoo mapping
    Main,
    /// `resources_config.yaml`: apps, architectures, models and inputs
    Resources,
}

impl ConfigFile {
    /// Get the file name of the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "config.yaml",
            Self::Resources => "resources_config.yaml",
        }
    }
}

impl AsRef<Path> for ConfigFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
