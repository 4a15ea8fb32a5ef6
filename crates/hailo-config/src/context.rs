//! Entry point tying document locations to a document cache.

use std::sync::{Arc, OnceLock};

use crate::catalog::ResourceCatalog;
use crate::constants::ConfigFile;
use crate::document::{Document, DocumentCache};
use crate::main_config::MainConfig;
use crate::model::ModelEntry;
use crate::paths::ConfigPaths;
use crate::Result;

#[derive(Debug, Clone)]
enum CacheHandle {
    Global,
    Owned(Arc<DocumentCache>),
}

/// Configuration paths plus the cache their documents are loaded through.
///
/// [`ConfigContext::global`] serves the discovered install location from the
/// process-wide cache. Contexts built with [`ConfigContext::new`] own a
/// private cache.
#[derive(Debug, Clone)]
pub struct ConfigContext {
    paths: ConfigPaths,
    cache: CacheHandle,
}

impl ConfigContext {
    pub fn new(paths: ConfigPaths) -> Self {
        Self::with_cache(paths, Arc::new(DocumentCache::new()))
    }

    pub fn with_cache(paths: ConfigPaths, cache: Arc<DocumentCache>) -> Self {
        Self {
            paths,
            cache: CacheHandle::Owned(cache),
        }
    }

    pub fn global() -> &'static ConfigContext {
        static GLOBAL: OnceLock<ConfigContext> = OnceLock::new();
        GLOBAL.get_or_init(|| ConfigContext {
            paths: ConfigPaths::discover().clone(),
            cache: CacheHandle::Global,
        })
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn cache(&self) -> &DocumentCache {
        match &self.cache {
            CacheHandle::Global => DocumentCache::global(),
            CacheHandle::Owned(cache) => cache.as_ref(),
        }
    }

    /// Load one of the two configuration documents through the cache.
    pub fn document(&self, file: ConfigFile) -> Result<Arc<Document>> {
        tracing::trace!(file = %file, "Loading configuration document");
        self.cache().load(&self.paths.file(file))
    }

    pub fn main_document(&self) -> Result<Arc<Document>> {
        self.document(ConfigFile::Main)
    }

    pub fn resources_document(&self) -> Result<Arc<Document>> {
        self.document(ConfigFile::Resources)
    }

    pub fn main_config(&self) -> Result<MainConfig> {
        self.main_document().map(MainConfig::new)
    }

    pub fn resources(&self) -> Result<ResourceCatalog> {
        self.resources_document().map(ResourceCatalog::new)
    }

    pub fn available_apps(&self) -> Result<Vec<String>> {
        Ok(self.resources()?.available_apps())
    }

    pub fn supported_architectures(&self, app: &str) -> Result<Vec<String>> {
        Ok(self.resources()?.supported_architectures(app))
    }

    pub fn all_models(&self, app: &str, arch: &str) -> Result<Vec<ModelEntry>> {
        Ok(self.resources()?.all_models(app, arch))
    }

    pub fn model_info(&self, app: &str, arch: &str, name: &str) -> Result<Option<ModelEntry>> {
        Ok(self.resources()?.model_info(app, arch, name))
    }

    pub fn is_gen_ai_app(&self, app: &str) -> Result<bool> {
        Ok(self.resources()?.is_gen_ai_app(app))
    }
}
