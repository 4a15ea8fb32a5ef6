//! Location of the configuration documents.
//!
//! The repository root is computed once per process and anchored to where
//! the code is installed, never to the current working directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::{CONFIG_SUBDIR, ConfigFile, ROOT_ENV};

static REPO_ROOT: OnceLock<PathBuf> = OnceLock::new();
static DISCOVERED: OnceLock<ConfigPaths> = OnceLock::new();

/// Paths of the main and resource documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    config_dir: PathBuf,
}

impl ConfigPaths {
    /// Paths derived from the discovered repository root.
    ///
    /// Computed on first call and shared for the rest of the process.
    pub fn discover() -> &'static ConfigPaths {
        DISCOVERED.get_or_init(|| Self::from_root(repo_root()))
    }

    /// Paths under `<root>/hailo_apps/config`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self {
            config_dir: root.as_ref().join(CONFIG_SUBDIR),
        }
    }

    /// Paths directly inside `dir`.
    pub fn from_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn file(&self, file: ConfigFile) -> PathBuf {
        self.config_dir.join(file)
    }

    pub fn main_config(&self) -> PathBuf {
        self.file(ConfigFile::Main)
    }

    pub fn resources_config(&self) -> PathBuf {
        self.file(ConfigFile::Resources)
    }
}

/// The repository root containing `hailo_apps/config/`.
pub fn repo_root() -> &'static Path {
    REPO_ROOT.get_or_init(locate_repo_root)
}

fn locate_repo_root() -> PathBuf {
    if let Some(root) = env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
        let root = PathBuf::from(root);
        tracing::debug!(root = %root.display(), "Using repository root from {}", ROOT_ENV);
        return root;
    }

    if let Some(root) = env::current_exe().ok().and_then(|exe| root_above(&exe)) {
        tracing::debug!(root = %root.display(), "Found installed configuration next to executable");
        return root;
    }

    let root = source_checkout_root();
    tracing::debug!(root = %root.display(), "Falling back to source checkout root");
    root
}

/// Nearest ancestor of `start` that holds the main document.
fn root_above(start: &Path) -> Option<PathBuf> {
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .skip(1)
        .find(|dir| dir.join(CONFIG_SUBDIR).join(ConfigFile::Main).is_file())
        .map(Path::to_path_buf)
}

/// Workspace root of this crate's source tree (`crates/hailo-config` is two levels down).
fn source_checkout_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}
