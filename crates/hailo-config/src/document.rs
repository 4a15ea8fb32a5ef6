//! Parsed configuration documents and the bounded cache that owns them.
//!
//! A [`Document`] is immutable once loaded. The [`DocumentCache`] hands out
//! `Arc<Document>` handles, so readers never observe a partially updated
//! tree: a reload swaps the whole handle.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_yaml::{Mapping, Sequence, Value};

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::{Error, Result};

/// Root mapping of a YAML configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Mapping,
}

impl Document {
    /// Parse YAML text read from `path`.
    ///
    /// An empty or null document is an empty mapping. Any other non-mapping
    /// root is rejected. Merge keys (`<<: *anchor`) are applied.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut value: Value =
            serde_yaml::from_str(content).map_err(|e| Error::invalid(path, e))?;
        value.apply_merge().map_err(|e| Error::invalid(path, e))?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(root) => Ok(Self { root }),
            other => Err(Error::invalid(
                path,
                format!("expected a mapping at the document root, found {}", kind(&other)),
            )),
        }
    }

    pub fn from_mapping(root: Mapping) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The value at `key` if it is a mapping.
    pub fn mapping(&self, key: &str) -> Option<&Mapping> {
        self.get(key).and_then(Value::as_mapping)
    }

    /// The value at `key` if it is a sequence.
    pub fn sequence(&self, key: &str) -> Option<&Sequence> {
        self.get(key).and_then(Value::as_sequence)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::missing(path),
        _ => Error::invalid(path, e),
    })?;
    Document::parse(path, &content)
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<PathBuf, Arc<Document>>,
    /// Requested path -> resolved path, so hits skip the filesystem.
    aliases: HashMap<PathBuf, PathBuf>,
    /// Resolved paths in insertion order; the front is evicted first.
    order: VecDeque<PathBuf>,
}

impl CacheState {
    fn lookup(&self, requested: &Path) -> Option<&Arc<Document>> {
        let resolved = self.aliases.get(requested).map(PathBuf::as_path)?;
        self.entries.get(resolved)
    }

    fn remove(&mut self, resolved: &Path) -> bool {
        self.order.retain(|p| p != resolved);
        self.aliases.retain(|_, target| target != resolved);
        self.entries.remove(resolved).is_some()
    }
}

/// Bounded, thread-safe cache of parsed documents keyed by resolved path.
///
/// Concurrent misses on the same path may each parse the file; the first
/// insert wins and later callers receive the cached handle.
#[derive(Debug)]
pub struct DocumentCache {
    capacity: usize,
    state: RwLock<CacheState>,
}

impl Default for DocumentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCache {
    /// Create a cache holding up to [`DEFAULT_CACHE_CAPACITY`] documents.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding up to `capacity` documents (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: RwLock::new(CacheState::default()),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static DocumentCache {
        static GLOBAL: OnceLock<DocumentCache> = OnceLock::new();
        GLOBAL.get_or_init(DocumentCache::new)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a document for `path` is currently cached.
    pub fn contains(&self, path: &Path) -> bool {
        let state = self.read();
        state.lookup(path).is_some() || state.entries.contains_key(path)
    }

    /// Load the document at `path`, parsing it only on the first request.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingConfig`] if nothing exists at `path`
    /// - [`Error::InvalidConfig`] if the file cannot be read or parsed
    pub fn load(&self, path: &Path) -> Result<Arc<Document>> {
        if let Some(doc) = self.read().lookup(path) {
            tracing::trace!(path = %path.display(), "Document cache hit");
            return Ok(Arc::clone(doc));
        }

        if !path.exists() {
            return Err(Error::missing(path));
        }
        let resolved = dunce::canonicalize(path).map_err(|e| Error::invalid(path, e))?;

        let cached = self.read().entries.get(&resolved).cloned();
        if let Some(doc) = cached {
            tracing::trace!(path = %resolved.display(), "Document cache hit via resolved path");
            self.write().aliases.insert(path.to_path_buf(), resolved);
            return Ok(doc);
        }

        let doc = Arc::new(read_document(path)?);
        tracing::debug!(
            path = %resolved.display(),
            keys = doc.root().len(),
            "Loaded configuration document"
        );
        Ok(self.insert(path, resolved, doc))
    }

    fn insert(&self, requested: &Path, resolved: PathBuf, doc: Arc<Document>) -> Arc<Document> {
        let mut state = self.write();
        state
            .aliases
            .insert(requested.to_path_buf(), resolved.clone());

        if let Some(existing) = state.entries.get(&resolved) {
            return Arc::clone(existing);
        }

        state.entries.insert(resolved.clone(), Arc::clone(&doc));
        state.order.push_back(resolved);

        while state.entries.len() > self.capacity {
            let Some(oldest) = state.order.front().cloned() else {
                break;
            };
            tracing::debug!(path = %oldest.display(), "Evicting configuration document");
            state.remove(&oldest);
        }

        doc
    }

    /// Drop the cached document for `path`. Returns whether one was cached.
    pub fn invalidate(&self, path: &Path) -> bool {
        let mut state = self.write();
        let resolved = state
            .aliases
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_path_buf());
        let removed = state.remove(&resolved);
        if removed {
            tracing::debug!(path = %resolved.display(), "Invalidated configuration document");
        }
        removed
    }

    /// Re-read every cached document and swap them in together.
    ///
    /// If any document fails to load, the cache is left untouched.
    pub fn reload_all(&self) -> Result<()> {
        let paths: Vec<PathBuf> = self.read().order.iter().cloned().collect();

        let fresh = paths
            .into_iter()
            .map(|path| read_document(&path).map(|doc| (path, Arc::new(doc))))
            .collect::<Result<Vec<_>>>()?;

        let mut state = self.write();
        for (path, doc) in fresh {
            if let Some(slot) = state.entries.get_mut(&path) {
                tracing::debug!(path = %path.display(), "Reloaded configuration document");
                *slot = doc;
            }
        }
        Ok(())
    }

    pub fn clear(&self) {
        let mut state = self.write();
        state.entries.clear();
        state.aliases.clear();
        state.order.clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
