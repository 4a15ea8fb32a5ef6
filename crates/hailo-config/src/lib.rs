//! Configuration and resource resolution for Hailo applications.
//!
//! Two YAML documents under `hailo_apps/config/` describe which models,
//! inputs and shared assets belong to which application and accelerator
//! architecture:
//!
//! - `config.yaml`: resource root paths and the model zoo mapping
//! - `resources_config.yaml`: apps, architectures, model tiers and inputs
//!
//! The free functions below answer queries against the discovered install
//! location through the process-wide [`DocumentCache`]. Use a
//! [`ConfigContext`] to point at another directory, or work on a
//! [`ResourceCatalog`] directly once a document is loaded.
//!
//! Only a missing or unparsable document is an [`Error`]. Unknown apps,
//! architectures, models and inputs are empty results.

pub mod capability;
pub mod catalog;
pub mod constants;
pub mod context;
pub mod document;
pub mod error;
pub mod inputs;
pub mod main_config;
pub mod model;
pub mod paths;

pub use catalog::ResourceCatalog;
pub use constants::{ConfigFile, DEFAULT_MODEL_SOURCE, GEN_AI_SOURCE, RESERVED_KEYS};
pub use context::ConfigContext;
pub use document::{Document, DocumentCache};
pub use error::{Error, Result};
pub use inputs::{InputAsset, InputKind, SharedPool};
pub use main_config::MainConfig;
pub use model::{ModelEntry, ModelSpec, Tier, extract_models};
pub use paths::ConfigPaths;

use serde_yaml::{Mapping, Value};

fn resources() -> Result<ResourceCatalog> {
    ConfigContext::global().resources()
}

pub fn main_config() -> Result<MainConfig> {
    ConfigContext::global().main_config()
}

pub fn resources_path_config() -> Result<Mapping> {
    Ok(main_config()?.resources())
}

pub fn model_zoo_mapping() -> Result<Mapping> {
    Ok(main_config()?.model_zoo_mapping())
}

pub fn available_apps() -> Result<Vec<String>> {
    Ok(resources()?.available_apps())
}

pub fn supported_architectures(app: &str) -> Result<Vec<String>> {
    Ok(resources()?.supported_architectures(app))
}

pub fn default_models(app: &str, arch: &str) -> Result<Vec<ModelEntry>> {
    Ok(resources()?.default_models(app, arch))
}

pub fn extra_models(app: &str, arch: &str) -> Result<Vec<ModelEntry>> {
    Ok(resources()?.extra_models(app, arch))
}

pub fn all_models(app: &str, arch: &str) -> Result<Vec<ModelEntry>> {
    Ok(resources()?.all_models(app, arch))
}

pub fn model_info(app: &str, arch: &str, name: &str) -> Result<Option<ModelEntry>> {
    Ok(resources()?.model_info(app, arch, name))
}

pub fn resolve_inputs_app(app: &str) -> Result<String> {
    Ok(resources()?.resolve_inputs_app(app))
}

pub fn inputs_for_app(app: &str) -> Result<Mapping> {
    Ok(resources()?.inputs_for_app(app))
}

pub fn shared_images() -> Result<Vec<Value>> {
    Ok(resources()?.shared_images().to_vec())
}

pub fn shared_videos() -> Result<Vec<Value>> {
    Ok(resources()?.shared_videos().to_vec())
}

pub fn shared_json() -> Result<Vec<Value>> {
    Ok(resources()?.shared_json().to_vec())
}

pub fn is_gen_ai_app(app: &str) -> Result<bool> {
    Ok(resources()?.is_gen_ai_app(app))
}
