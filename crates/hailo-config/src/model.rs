//! Model entries and normalization of as-authored model slots.
//!
//! A model slot (`default` or `extra` under an architecture) may be written
//! in several equivalent shapes:
//!
//! ```yaml
//! default: None                    # no models
//! default: yolov8s                 # bare name
//! default: {name: yolov8s, source: mz}
//! extra:
//!   - {name: yolov8m, url: "https://host/yolov8m.hef"}
//!   - yolov8n
//! ```
//!
//! [`ModelSpec`] classifies the raw value once; [`ModelSpec::into_entries`]
//! turns it into [`ModelEntry`] values. Malformed items are skipped.

use std::fmt;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::constants::{DEFAULT_MODEL_SOURCE, GEN_AI_SOURCE};

/// A resolved model for one (app, architecture) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModelEntry {
    name: String,
    source: String,
    url: Option<String>,
}

impl ModelEntry {
    /// An entry from the default model zoo with no explicit URL.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: DEFAULT_MODEL_SOURCE.to_string(),
            url: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Explicit download URL overriding the model zoo location.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether this model comes from the generative model zoo.
    pub fn is_gen_ai(&self) -> bool {
        self.source == GEN_AI_SOURCE
    }
}

impl fmt::Display for ModelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Model slot under an architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Default,
    Extra,
}

impl Tier {
    /// Tiers in resolution order.
    pub const ALL: [Tier; 2] = [Tier::Default, Tier::Extra];

    /// Key of the slot in the resource document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Default => "default",
            Tier::Extra => "extra",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `null` or the case-insensitive string `"none"`.
pub(crate) fn is_none(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.eq_ignore_ascii_case("none"),
        _ => false,
    }
}

/// One element of a model slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelItem<'a> {
    /// `null` or `"none"`
    Empty,
    /// Shorthand: the model name alone
    Name(&'a str),
    /// Full form: `{name, source?, url?}`
    Entry(&'a Mapping),
    /// Anything else (numbers, booleans, nested lists)
    Unsupported(&'a Value),
}

impl<'a> ModelItem<'a> {
    pub fn classify(value: &'a Value) -> Self {
        if is_none(value) {
            return ModelItem::Empty;
        }
        match value {
            Value::String(name) => ModelItem::Name(name),
            Value::Mapping(map) => ModelItem::Entry(map),
            other => ModelItem::Unsupported(other),
        }
    }

    /// The entry this item describes, if it names a model.
    pub fn into_entry(self) -> Option<ModelEntry> {
        let entry = match self {
            ModelItem::Empty => return None,
            ModelItem::Name(name) => ModelEntry::new(name),
            ModelItem::Entry(map) => {
                let name = map.get("name").filter(|v| !is_none(v))?.as_str()?;
                let mut entry = ModelEntry::new(name);
                if let Some(source) = map.get("source").and_then(Value::as_str) {
                    entry.source = source.to_string();
                }
                entry.url = map.get("url").and_then(Value::as_str).map(str::to_string);
                entry
            }
            ModelItem::Unsupported(value) => {
                tracing::trace!(?value, "Skipping unsupported model item");
                return None;
            }
        };

        if entry.name.is_empty() {
            tracing::trace!("Skipping model item with an empty name");
            return None;
        }
        Some(entry)
    }
}

/// As-authored value of a model slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSpec<'a> {
    /// Missing key, `null` or `"none"`
    Absent,
    /// A bare string or a single mapping
    Single(ModelItem<'a>),
    /// A list of strings and mappings
    List(Vec<ModelItem<'a>>),
}

impl<'a> ModelSpec<'a> {
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None => ModelSpec::Absent,
            Some(v) if is_none(v) => ModelSpec::Absent,
            Some(Value::Sequence(items)) => {
                ModelSpec::List(items.iter().map(ModelItem::classify).collect())
            }
            Some(v) => ModelSpec::Single(ModelItem::classify(v)),
        }
    }

    /// Normalized entries in source order.
    pub fn into_entries(self) -> Vec<ModelEntry> {
        match self {
            ModelSpec::Absent => Vec::new(),
            ModelSpec::Single(item) => item.into_entry().into_iter().collect(),
            ModelSpec::List(items) => items.into_iter().filter_map(ModelItem::into_entry).collect(),
        }
    }
}

/// Normalize a raw model slot into entries.
pub fn extract_models(value: Option<&Value>) -> Vec<ModelEntry> {
    ModelSpec::from_value(value).into_entries()
}
