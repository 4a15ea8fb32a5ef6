//! Shared test utilities for the hailo-apps configuration workspace.
//!
//! Dev-dependency only. [`ConfigFixture`] lays out a temporary install root
//! with `hailo_apps/config/` documents; the sample constants cover the
//! shapes the resolver has to accept.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory of the documents relative to the install root.
pub const CONFIG_SUBDIR: &str = "hailo_apps/config";

pub const MAIN_CONFIG_FILE: &str = "config.yaml";
pub const RESOURCES_CONFIG_FILE: &str = "resources_config.yaml";

/// Main document with both optional sections.
pub const SAMPLE_MAIN: &str = r#"
resources:
  root: /usr/local/hailo/resources
  models_dir: models
  videos_dir: videos
model_zoo_mapping:
  mz: https://hailo-model-zoo.s3.eu-west-2.amazonaws.com/ModelZoo/Compiled
  gen-ai-mz: https://dev-public.hailo.ai/gen-ai
"#;

/// Resource document exercising every authored shape.
pub const SAMPLE_RESOURCES: &str = r#"
images:
  - {name: bus.jpg, url: "https://cdn.example/images/bus.jpg"}
  - {name: dog.jpg, url: "https://cdn.example/images/dog.jpg"}
videos:
  - {name: example.mp4, url: "https://cdn.example/videos/example.mp4"}
json:
  - {name: coco_labels.json, url: "https://cdn.example/json/coco_labels.json"}

inputs:
  detection:
    images:
      - {name: bus, ref: bus.jpg}
      - {name: override, ref: bus.jpg, url: "https://mirror.example/bus.jpg"}
    videos:
      - {name: example.mp4}
      - {name: missing_url}
  chat:
    images:
      - {name: dog.jpg}

inputs_aliases:
  llm_chat: chat
  vlm_chat: chat

detection:
  models:
    hailo8:
      default: {name: yolov8s, source: mz}
      extra:
        - {name: yolov8m, source: mz, url: "http://x/y.hef"}
        - yolov8n
    hailo8l:
      default: yolov8s
      extra: None
    hailo10h: not-a-mapping

pose_estimation:
  models:
    hailo8:
      default: [yolov8s_pose, {name: yolov8m_pose}]

llm_chat:
  models:
    hailo8: {default: none}
    hailo10h:
      default: {name: Qwen2.5-1.5B-Instruct, source: gen-ai-mz}

version: 2
"#;

/// A temporary install root holding configuration documents.
///
/// # Example
///
/// ```rust,no_run
/// use hailo_test_utils::{ConfigFixture, SAMPLE_RESOURCES};
///
/// let fixture = ConfigFixture::new().with_resources(SAMPLE_RESOURCES);
/// assert!(fixture.resources_path().exists());
/// ```
pub struct ConfigFixture {
    temp_dir: TempDir,
}

impl Default for ConfigFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFixture {
    /// Create an install root with an empty config directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(CONFIG_SUBDIR)).unwrap();
        Self { temp_dir }
    }

    /// Install root with both sample documents written.
    pub fn sample() -> Self {
        Self::new()
            .with_main(SAMPLE_MAIN)
            .with_resources(SAMPLE_RESOURCES)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join(CONFIG_SUBDIR)
    }

    pub fn main_path(&self) -> PathBuf {
        self.config_dir().join(MAIN_CONFIG_FILE)
    }

    pub fn resources_path(&self) -> PathBuf {
        self.config_dir().join(RESOURCES_CONFIG_FILE)
    }

    pub fn with_main(self, content: &str) -> Self {
        self.write_main(content);
        self
    }

    pub fn with_resources(self, content: &str) -> Self {
        self.write_resources(content);
        self
    }

    /// Overwrite `config.yaml`.
    pub fn write_main(&self, content: &str) {
        fs::write(self.main_path(), content).unwrap();
    }

    /// Overwrite `resources_config.yaml`.
    pub fn write_resources(&self, content: &str) {
        fs::write(self.resources_path(), content).unwrap();
    }
}
