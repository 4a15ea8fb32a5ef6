//! Input assets (images and videos) declared per application.
//!
//! ```yaml
//! images:                 # shared pool
//!   - {name: bus.jpg, url: "https://host/bus.jpg"}
//! inputs:
//!   detection:
//!     images:
//!       - {name: street, ref: bus.jpg}
//! inputs_aliases:
//!   detection_simple: detection
//! ```

use std::fmt;

use serde::Serialize;
use serde_yaml::{Mapping, Sequence, Value};

use crate::catalog::ResourceCatalog;

/// Kind of an application input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Image,
    Video,
}

impl InputKind {
    pub const ALL: [InputKind; 2] = [InputKind::Image, InputKind::Video];

    /// Key of the list holding inputs of this kind.
    pub fn key(&self) -> &'static str {
        match self {
            InputKind::Image => "images",
            InputKind::Video => "videos",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Image => "image",
            InputKind::Video => "video",
        }
    }

    /// Shared pool consulted for URLs of this kind.
    pub fn pool(&self) -> SharedPool {
        match self {
            InputKind::Image => SharedPool::Images,
            InputKind::Video => SharedPool::Videos,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level lists of reusable assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharedPool {
    Images,
    Videos,
    Json,
}

impl SharedPool {
    pub fn key(&self) -> &'static str {
        match self {
            SharedPool::Images => "images",
            SharedPool::Videos => "videos",
            SharedPool::Json => "json",
        }
    }
}

/// One input declared for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputAsset {
    pub kind: InputKind,
    pub name: String,
    /// Name of a shared-pool entry to inherit the URL from
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InputAsset {
    fn from_mapping(kind: InputKind, map: &Mapping) -> Option<Self> {
        let name = map.get("name").and_then(Value::as_str)?;
        Some(Self {
            kind,
            name: name.to_string(),
            reference: non_empty_str(map.get("ref")),
            url: non_empty_str(map.get("url")),
        })
    }

    /// The pool entry name this asset points at: `ref`, else its own name.
    pub fn lookup_name(&self) -> &str {
        self.reference.as_deref().unwrap_or(&self.name)
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl ResourceCatalog {
    /// The app whose inputs `app` uses, following one alias hop.
    pub fn resolve_inputs_app(&self, app: &str) -> String {
        self.document()
            .mapping("inputs_aliases")
            .and_then(|aliases| aliases.get(app))
            .and_then(Value::as_str)
            .unwrap_or(app)
            .to_string()
    }

    /// The `inputs` entry for `app` after alias resolution, as authored.
    pub fn inputs_for_app(&self, app: &str) -> Mapping {
        let resolved = self.resolve_inputs_app(app);
        self.document()
            .mapping("inputs")
            .and_then(|inputs| inputs.get(resolved.as_str()))
            .and_then(Value::as_mapping)
            .cloned()
            .unwrap_or_default()
    }

    /// Typed inputs for `app`: images first, then videos.
    ///
    /// Items without a string `name` are skipped.
    pub fn app_inputs(&self, app: &str) -> Vec<InputAsset> {
        let inputs = self.inputs_for_app(app);
        InputKind::ALL
            .iter()
            .flat_map(|&kind| {
                inputs
                    .get(kind.key())
                    .and_then(Value::as_sequence)
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_mapping)
                    .filter_map(move |map| InputAsset::from_mapping(kind, map))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// The first input of `app` named `id`.
    pub fn find_input(&self, app: &str, id: &str) -> Option<InputAsset> {
        self.app_inputs(app).into_iter().find(|asset| asset.name == id)
    }

    /// A shared pool as authored; empty if absent.
    pub fn shared_pool(&self, pool: SharedPool) -> &[Value] {
        self.document()
            .sequence(pool.key())
            .map(Sequence::as_slice)
            .unwrap_or(&[])
    }

    pub fn shared_images(&self) -> &[Value] {
        self.shared_pool(SharedPool::Images)
    }

    pub fn shared_videos(&self) -> &[Value] {
        self.shared_pool(SharedPool::Videos)
    }

    pub fn shared_json(&self) -> &[Value] {
        self.shared_pool(SharedPool::Json)
    }

    /// The shared entry of `kind` whose `name` equals `name`.
    pub fn shared_asset(&self, kind: InputKind, name: &str) -> Option<&Mapping> {
        self.shared_pool(kind.pool())
            .iter()
            .filter_map(Value::as_mapping)
            .find(|entry| entry.get("name").and_then(Value::as_str) == Some(name))
    }

    /// Download URL for `asset`.
    ///
    /// The asset's own `url` wins; otherwise the shared entry matched by
    /// `ref` (or by `name`) supplies it. `None` if neither has one.
    pub fn resolve_input_url(&self, asset: &InputAsset) -> Option<String> {
        if let Some(url) = &asset.url {
            return Some(url.clone());
        }
        let shared = self.shared_asset(asset.kind, asset.lookup_name())?;
        non_empty_str(shared.get("url"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use std::sync::Arc;

    fn catalog(src: &str) -> ResourceCatalog {
        let doc = Document::parse(Path::new("resources_config.yaml"), src).unwrap();
        ResourceCatalog::new(Arc::new(doc))
    }

    const INPUTS: &str = r#"
images:
  - {name: bus.jpg, url: "https://cdn/images/bus.jpg"}
  - {name: zidane.jpg, url: "https://cdn/images/zidane.jpg"}
videos:
  - {name: example.mp4, url: "https://cdn/videos/example.mp4"}
  - {name: no_url.mp4}
json:
  - {name: labels.json, url: "https://cdn/json/labels.json"}
inputs:
  chat:
    images:
      - {name: street, ref: bus.jpg}
      - {name: zidane.jpg}
      - {name: custom, url: "https://other/custom.png", ref: bus.jpg}
      - not-a-mapping
      - {ref: bus.jpg}
    videos:
      - {name: example.mp4}
      - {name: orphan}
      - {name: no_url.mp4}
inputs_aliases:
  llm_chat: chat
  broken: 7
"#;

    #[test]
    fn test_resolve_inputs_app_follows_alias() {
        let cat = catalog(INPUTS);
        assert_eq!(cat.resolve_inputs_app("llm_chat"), "chat");
        assert_eq!(cat.resolve_inputs_app("chat"), "chat");
        assert_eq!(cat.resolve_inputs_app("detection"), "detection");
        assert_eq!(cat.resolve_inputs_app("broken"), "broken");
    }

    #[test]
    fn test_resolve_inputs_app_without_alias_map() {
        let cat = catalog("detection: {models: {}}\n");
        assert_eq!(cat.resolve_inputs_app("llm_chat"), "llm_chat");
    }

    #[test]
    fn test_resolve_is_single_hop() {
        let cat = catalog("inputs_aliases: {a: b, b: c}\n");
        assert_eq!(cat.resolve_inputs_app("a"), "b");
    }

    #[test]
    fn test_inputs_for_app_through_alias() {
        let cat = catalog(INPUTS);
        let inputs = cat.inputs_for_app("llm_chat");
        assert!(inputs.contains_key("images"));
        assert_eq!(inputs, cat.inputs_for_app("chat"));
        assert!(cat.inputs_for_app("unknown").is_empty());
    }

    #[test]
    fn test_app_inputs_images_then_videos() {
        let cat = catalog(INPUTS);
        let names: Vec<(InputKind, String)> = cat
            .app_inputs("chat")
            .into_iter()
            .map(|a| (a.kind, a.name))
            .collect();
        assert_eq!(
            names,
            vec![
                (InputKind::Image, "street".to_string()),
                (InputKind::Image, "zidane.jpg".to_string()),
                (InputKind::Image, "custom".to_string()),
                (InputKind::Video, "example.mp4".to_string()),
                (InputKind::Video, "orphan".to_string()),
                (InputKind::Video, "no_url.mp4".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_from_ref() {
        let cat = catalog(INPUTS);
        let asset = cat.find_input("chat", "street").unwrap();
        assert_eq!(asset.lookup_name(), "bus.jpg");
        assert_eq!(
            cat.resolve_input_url(&asset).as_deref(),
            Some("https://cdn/images/bus.jpg")
        );
    }

    #[test]
    fn test_url_from_name_when_ref_absent() {
        let cat = catalog(INPUTS);
        let asset = cat.find_input("llm_chat", "zidane.jpg").unwrap();
        assert_eq!(
            cat.resolve_input_url(&asset).as_deref(),
            Some("https://cdn/images/zidane.jpg")
        );
        let video = cat.find_input("chat", "example.mp4").unwrap();
        assert_eq!(
            cat.resolve_input_url(&video).as_deref(),
            Some("https://cdn/videos/example.mp4")
        );
    }

    #[test]
    fn test_own_url_wins_over_ref() {
        let cat = catalog(INPUTS);
        let asset = cat.find_input("chat", "custom").unwrap();
        assert_eq!(
            cat.resolve_input_url(&asset).as_deref(),
            Some("https://other/custom.png")
        );
    }

    #[test]
    fn test_no_url_resolves_to_none() {
        let cat = catalog(INPUTS);
        let orphan = cat.find_input("chat", "orphan").unwrap();
        assert_eq!(cat.resolve_input_url(&orphan), None);
        let no_url = cat.find_input("chat", "no_url.mp4").unwrap();
        assert_eq!(cat.resolve_input_url(&no_url), None);
    }

    #[test]
    fn test_pools_are_kind_specific() {
        let cat = catalog(INPUTS);
        assert!(cat.shared_asset(InputKind::Image, "example.mp4").is_none());
        assert!(cat.shared_asset(InputKind::Video, "example.mp4").is_some());
    }

    #[test]
    fn test_shared_pools_verbatim() {
        let cat = catalog(INPUTS);
        assert_eq!(cat.shared_images().len(), 2);
        assert_eq!(cat.shared_videos().len(), 2);
        assert_eq!(cat.shared_json().len(), 1);

        let empty = catalog("{}");
        assert!(empty.shared_images().is_empty());
        assert!(empty.shared_json().is_empty());
    }

    #[test]
    fn test_find_input_missing() {
        let cat = catalog(INPUTS);
        assert!(cat.find_input("chat", "nope").is_none());
        assert!(cat.find_input("unknown", "street").is_none());
    }
}
