use std::fs;
use std::path::Path;

use gwt_manifest_gen::{FileCategory, GenerateError, GeneratorConfig, ManifestBuilder};
use tempfile::tempdir;

fn write_file(path: &Path) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(path, "").unwrap();
}

fn config() -> GeneratorConfig {
  GeneratorConfig {
    source_root: "src".into(),
    module_base: "A".into(),
    output: "Module.gwt.xml".into(),
    ..GeneratorConfig::default()
  }
}

#[test]
fn lists_module_sources_and_static_resources() {
  let dir = tempdir().unwrap();
  let src = dir.path().join("src");
  write_file(&src.join("A/B.java"));
  write_file(&src.join("A/C.vs"));
  write_file(&src.join("A/D.txt"));

  let artifacts = ManifestBuilder::new(config(), dir.path()).generate().unwrap();

  let sources: Vec<_> = artifacts
    .scan
    .module_sources
    .iter()
    .map(|entry| entry.relative_path.as_str())
    .collect();
  let statics: Vec<_> = artifacts
    .scan
    .static_resources
    .iter()
    .map(|entry| entry.relative_path.as_str())
    .collect();
  assert_eq!(sources, vec!["B.java"]);
  assert_eq!(statics, vec!["A/C.vs"]);

  let written = fs::read_to_string(dir.path().join("Module.gwt.xml")).unwrap();
  assert_eq!(written.matches("<include ").count(), 1);
  assert_eq!(written.matches("<define-configuration-property ").count(), 1);
  assert_eq!(written.matches("<extend-configuration-property ").count(), 1);
  assert!(!written.contains("D.txt"));
}

#[test]
fn empty_tree_renders_empty_source_block() {
  let dir = tempdir().unwrap();
  fs::create_dir_all(dir.path().join("src")).unwrap();

  ManifestBuilder::new(config(), dir.path()).generate().unwrap();

  let written = fs::read_to_string(dir.path().join("Module.gwt.xml")).unwrap();
  assert_eq!(
    written,
    concat!(
      "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
      "<module rename-to=\"parallax\">\n",
      "\t<source path=\"parallax\">\n",
      "\t</source>\n",
      "</module>\n",
    )
  );
}

#[test]
fn regenerating_is_byte_identical() {
  let dir = tempdir().unwrap();
  let src = dir.path().join("src");
  for name in ["A/z/Last.java", "A/First.java", "shaders/b.glsl", "shaders/a.fs"] {
    write_file(&src.join(name));
  }

  let builder = ManifestBuilder::new(config(), dir.path());
  builder.generate().unwrap();
  let first = fs::read(dir.path().join("Module.gwt.xml")).unwrap();
  builder.generate().unwrap();
  let second = fs::read(dir.path().join("Module.gwt.xml")).unwrap();

  assert_eq!(first, second);
  assert!(builder.check().unwrap());
}

#[test]
fn every_listed_path_is_normalised() {
  let dir = tempdir().unwrap();
  let src = dir.path().join("src");
  write_file(&src.join("A/deep/nested/Mesh.java"));
  write_file(&src.join("A/deep/nested/mesh.fs"));
  write_file(&src.join("other/Loose.java"));

  let artifacts = ManifestBuilder::new(config(), dir.path()).build().unwrap();

  for entry in artifacts
    .scan
    .module_sources
    .iter()
    .chain(&artifacts.scan.static_resources)
  {
    assert!(!entry.relative_path.contains('\\'), "{}", entry.relative_path);
    assert!(!entry.relative_path.starts_with("./"), "{}", entry.relative_path);
  }
  assert!(
    artifacts
      .scan
      .module_sources
      .iter()
      .all(|entry| entry.category == FileCategory::ModuleSource && entry.extension == "java")
  );
  assert_eq!(artifacts.scan.len(), 3);
}

#[test]
fn config_file_drives_generation() {
  let dir = tempdir().unwrap();
  write_file(&dir.path().join("client/engine/Renderer.java"));
  write_file(&dir.path().join("client/engine/RendererTest.java"));
  write_file(&dir.path().join("client/engine/fog.glsl"));
  fs::create_dir_all(dir.path().join("out")).unwrap();
  fs::write(
    dir.path().join("gwt-manifest.json"),
    r#"{
      "source_root": "client",
      "module_base": "engine",
      "exclude": ["*Test.java"],
      "rename_to": "engine",
      "source_path": "engine",
      "static_property": "engine.shaders",
      "output": "out/Engine.gwt.xml"
    }"#,
  )
  .unwrap();

  let (config, source) = GeneratorConfig::discover(dir.path()).unwrap();
  ManifestBuilder::new(config, dir.path())
    .with_config_source(source)
    .generate()
    .unwrap();

  let written = fs::read_to_string(dir.path().join("out/Engine.gwt.xml")).unwrap();
  assert!(written.contains("<module rename-to=\"engine\">"));
  assert!(written.contains("<include name=\"Renderer.java\"/>"));
  assert!(!written.contains("RendererTest"));
  assert!(written.contains(
    "<extend-configuration-property name=\"engine.shaders\" value=\"engine/fog.glsl\"/>"
  ));
}

#[test]
fn default_config_lists_shaders_under_the_app_classpath() {
  let dir = tempdir().unwrap();
  let shaders = "src/org/parallax3d/parallax/graphics/renderers/shaders/source";
  write_file(&dir.path().join(shaders).join("default.vs"));

  let artifacts = ManifestBuilder::new(GeneratorConfig::default(), dir.path())
    .build()
    .unwrap();

  assert!(artifacts.document.contains(concat!(
    "<extend-configuration-property name=\"app.files.classpath\" ",
    "value=\"org/parallax3d/parallax/graphics/renderers/shaders/source/default.vs\"/>"
  )));
}

#[test]
fn unwritable_destination_is_an_io_error() {
  let dir = tempdir().unwrap();
  fs::create_dir_all(dir.path().join("src")).unwrap();
  let config = GeneratorConfig {
    output: "no/such/dir/Module.gwt.xml".into(),
    ..config()
  };

  let err = ManifestBuilder::new(config, dir.path()).generate().unwrap_err();
  assert!(matches!(err, GenerateError::Io { .. }));
}
