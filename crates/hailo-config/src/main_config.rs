//! The main application configuration document (`config.yaml`).

use std::sync::Arc;

use serde_yaml::Mapping;

use crate::document::Document;

/// Read-only view of the main document.
///
/// Both sections are optional and default to an empty mapping.
#[derive(Debug, Clone)]
pub struct MainConfig {
    doc: Arc<Document>,
}

impl MainConfig {
    pub fn new(doc: Arc<Document>) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Where downloaded resources live, consumed by the download planner.
    pub fn resources(&self) -> Mapping {
        self.section("resources")
    }

    /// Model zoo identifier -> remote source descriptor.
    pub fn model_zoo_mapping(&self) -> Mapping {
        self.section("model_zoo_mapping")
    }

    fn section(&self, key: &str) -> Mapping {
        self.doc.mapping(key).cloned().unwrap_or_default()
    }
}
