//! Queries over the resource document: apps, architectures and models.
//!
//! Structural absence is never an error here. An unknown app, a missing
//! `models` key or a mis-shaped architecture all resolve to empty results.

use std::sync::Arc;

use serde_yaml::{Mapping, Value};

use crate::constants::RESERVED_KEYS;
use crate::document::Document;
use crate::model::{ModelEntry, Tier, extract_models};

/// Read-only view of the resource document.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    doc: Arc<Document>,
}

impl ResourceCatalog {
    pub fn new(doc: Arc<Document>) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Application names, sorted.
    pub fn available_apps(&self) -> Vec<String> {
        let mut apps: Vec<String> = self
            .doc
            .root()
            .iter()
            .filter(|(_, value)| value.is_mapping())
            .filter_map(|(key, _)| key.as_str())
            .filter(|key| !RESERVED_KEYS.contains(key))
            .map(str::to_string)
            .collect();
        apps.sort();
        apps
    }

    /// Architectures declared under `app.models`, sorted.
    pub fn supported_architectures(&self, app: &str) -> Vec<String> {
        let Some(models) = self.models_section(app) else {
            return Vec::new();
        };
        let mut archs: Vec<String> = models
            .iter()
            .filter(|(_, value)| value.is_mapping())
            .filter_map(|(key, _)| key.as_str())
            .map(str::to_string)
            .collect();
        archs.sort();
        archs
    }

    /// Models in one tier, in source order.
    pub fn models(&self, app: &str, arch: &str, tier: Tier) -> Vec<ModelEntry> {
        extract_models(self.slot(app, arch, tier))
    }

    pub fn default_models(&self, app: &str, arch: &str) -> Vec<ModelEntry> {
        self.models(app, arch, Tier::Default)
    }

    pub fn extra_models(&self, app: &str, arch: &str) -> Vec<ModelEntry> {
        self.models(app, arch, Tier::Extra)
    }

    /// Default models followed by extra models.
    pub fn all_models(&self, app: &str, arch: &str) -> Vec<ModelEntry> {
        let mut models = self.default_models(app, arch);
        models.extend(self.extra_models(app, arch));
        models
    }

    /// First model named `name`; default tier wins over extra.
    pub fn model_info(&self, app: &str, arch: &str, name: &str) -> Option<ModelEntry> {
        self.all_models(app, arch)
            .into_iter()
            .find(|m| m.name() == name)
    }

    fn app_section(&self, app: &str) -> Option<&Mapping> {
        self.doc.mapping(app)
    }

    fn models_section(&self, app: &str) -> Option<&Mapping> {
        self.app_section(app)?.get("models")?.as_mapping()
    }

    fn slot(&self, app: &str, arch: &str, tier: Tier) -> Option<&Value> {
        self.models_section(app)?
            .get(arch)?
            .as_mapping()?
            .get(tier.as_str())
    }
}
