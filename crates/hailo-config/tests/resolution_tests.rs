//! End-to-end resolution against on-disk documents

use hailo_config::{ConfigContext, ConfigFile, ConfigPaths, Error, InputKind, ModelEntry, Tier};
use hailo_test_utils::{ConfigFixture, SAMPLE_MAIN, SAMPLE_RESOURCES};
use pretty_assertions::assert_eq;
use serde_yaml::Value;

fn context(fixture: &ConfigFixture) -> ConfigContext {
    ConfigContext::new(ConfigPaths::from_root(fixture.root()))
}

#[test]
fn test_detection_scenario() {
    let fixture = ConfigFixture::new().with_resources(
        r#"
detection:
  models:
    hailo8:
      default: {name: yolov8s, source: mz}
      extra: [{name: yolov8m, source: mz, url: "http://x/y.hef"}, "yolov8n"]
"#,
    );
    let catalog = context(&fixture).resources().unwrap();

    assert_eq!(catalog.supported_architectures("detection"), vec!["hailo8"]);
    assert_eq!(
        catalog.all_models("detection", "hailo8"),
        vec![
            ModelEntry::new("yolov8s"),
            ModelEntry::new("yolov8m").with_url("http://x/y.hef"),
            ModelEntry::new("yolov8n"),
        ]
    );
    assert_eq!(
        catalog.model_info("detection", "hailo8", "yolov8n"),
        Some(ModelEntry::new("yolov8n"))
    );
    assert_eq!(catalog.model_info("detection", "hailo8", "missing"), None);
}

#[test]
fn test_sample_catalog() {
    let fixture = ConfigFixture::sample();
    let ctx = context(&fixture);
    let catalog = ctx.resources().unwrap();

    assert_eq!(
        catalog.available_apps(),
        vec!["detection", "llm_chat", "pose_estimation"]
    );
    assert_eq!(
        catalog.supported_architectures("detection"),
        vec!["hailo8", "hailo8l"]
    );
    assert_eq!(
        catalog.models("detection", "hailo8l", Tier::Default),
        vec![ModelEntry::new("yolov8s")]
    );
    assert!(catalog.extra_models("detection", "hailo8l").is_empty());
    assert_eq!(
        catalog.all_models("pose_estimation", "hailo8"),
        vec![ModelEntry::new("yolov8s_pose"), ModelEntry::new("yolov8m_pose")]
    );

    assert!(ctx.is_gen_ai_app("llm_chat").unwrap());
    assert!(!ctx.is_gen_ai_app("detection").unwrap());
    assert!(!ctx.is_gen_ai_app("pose_estimation").unwrap());
}

fn entry(name: &str, url: Option<&str>) -> (String, Option<String>) {
    (name.to_string(), url.map(str::to_string))
}

#[test]
fn test_sample_inputs() {
    let fixture = ConfigFixture::sample();
    let catalog = context(&fixture).resources().unwrap();

    assert_eq!(catalog.resolve_inputs_app("llm_chat"), "chat");
    assert_eq!(catalog.resolve_inputs_app("detection"), "detection");

    let chat = catalog.app_inputs("vlm_chat");
    assert_eq!(chat.len(), 1);
    assert_eq!(chat[0].kind, InputKind::Image);
    assert_eq!(
        catalog.resolve_input_url(&chat[0]).as_deref(),
        Some("https://cdn.example/images/dog.jpg")
    );

    let urls: Vec<(String, Option<String>)> = catalog
        .app_inputs("detection")
        .iter()
        .map(|a| (a.name.clone(), catalog.resolve_input_url(a)))
        .collect();
    assert_eq!(
        urls,
        vec![
            entry("bus", Some("https://cdn.example/images/bus.jpg")),
            entry("override", Some("https://mirror.example/bus.jpg")),
            entry("example.mp4", Some("https://cdn.example/videos/example.mp4")),
            entry("missing_url", None),
        ]
    );
}

#[test]
fn test_main_config_sections() {
    let fixture = ConfigFixture::sample();
    let main = context(&fixture).main_config().unwrap();

    assert_eq!(
        main.resources().get("models_dir").and_then(Value::as_str),
        Some("models")
    );
    assert_eq!(main.model_zoo_mapping().len(), 2);
}

#[test]
fn test_missing_main_config() {
    let fixture = ConfigFixture::new().with_resources(SAMPLE_RESOURCES);
    let err = context(&fixture).main_config().unwrap_err();

    match err {
        Error::MissingConfig { path } => assert_eq!(path, fixture.main_path()),
        other => panic!("expected MissingConfig, got {other:?}"),
    }
}

#[test]
fn test_missing_resources_config_fails_every_query() {
    let fixture = ConfigFixture::new().with_main(SAMPLE_MAIN);
    let ctx = context(&fixture);

    assert!(matches!(ctx.available_apps(), Err(Error::MissingConfig { .. })));
    assert!(matches!(
        ctx.all_models("detection", "hailo8"),
        Err(Error::MissingConfig { .. })
    ));
    assert!(matches!(ctx.is_gen_ai_app("llm_chat"), Err(Error::MissingConfig { .. })));
    assert!(ctx.main_config().is_ok());
}

#[test]
fn test_invalid_resources_config() {
    let fixture = ConfigFixture::new().with_resources("detection:\n  models: [unclosed\n");
    let err = context(&fixture).resources().unwrap_err();

    assert!(matches!(err, Error::InvalidConfig { .. }));
    assert_eq!(err.path(), fixture.resources_path());
}

#[test]
fn test_empty_documents_are_valid() {
    let fixture = ConfigFixture::new().with_main("").with_resources("");
    let ctx = context(&fixture);

    assert!(ctx.available_apps().unwrap().is_empty());
    assert!(ctx.main_config().unwrap().resources().is_empty());
    assert_eq!(ctx.resources().unwrap().resolve_inputs_app("x"), "x");
}

#[test]
fn test_context_caches_documents() {
    let fixture = ConfigFixture::sample();
    let ctx = context(&fixture);

    assert_eq!(ctx.available_apps().unwrap().len(), 3);
    fixture.write_resources("only_app: {models: {}}\n");
    assert_eq!(ctx.available_apps().unwrap().len(), 3);

    ctx.cache().reload_all().unwrap();
    assert_eq!(ctx.available_apps().unwrap(), vec!["only_app"]);
}

#[test]
fn test_contexts_do_not_share_private_caches() {
    let fixture = ConfigFixture::sample();
    let first = context(&fixture);
    first.available_apps().unwrap();

    fixture.write_resources("only_app: {models: {}}\n");
    let second = context(&fixture);

    assert_eq!(second.available_apps().unwrap(), vec!["only_app"]);
    assert_eq!(first.available_apps().unwrap().len(), 3);
}

#[test]
fn test_document_by_file_shares_cache_entry() {
    let fixture = ConfigFixture::sample();
    let ctx = context(&fixture);

    let by_file = ctx.document(ConfigFile::Resources).unwrap();
    let by_name = ctx.resources_document().unwrap();
    assert!(std::sync::Arc::ptr_eq(&by_file, &by_name));
    assert!(ctx.document(ConfigFile::Main).unwrap().get("model_zoo_mapping").is_some());
}

#[test]
fn test_merged_architecture_resolves_inherited_models() {
    let fixture = ConfigFixture::new().with_resources(
        r#"
detection:
  models:
    hailo8: &h8
      default: yolov8s
      extra: [yolov8m]
    hailo8l:
      <<: *h8
      extra: none
"#,
    );
    let ctx = context(&fixture);

    assert_eq!(
        ctx.all_models("detection", "hailo8l").unwrap(),
        vec![ModelEntry::new("yolov8s")]
    );
    assert_eq!(
        ctx.all_models("detection", "hailo8").unwrap(),
        vec![ModelEntry::new("yolov8s"), ModelEntry::new("yolov8m")]
    );
}
