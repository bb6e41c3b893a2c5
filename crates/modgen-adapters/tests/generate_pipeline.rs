//! End-to-end pipeline tests over the in-memory adapters.

use std::path::{Path, PathBuf};

use modgen_adapters::{MemoryFilesystem, MemoryTemplateStore, RecordingRunner, SimpleRenderer};
use modgen_core::prelude::*;
use serde_json::{Value, json};

struct Harness {
    fs: MemoryFilesystem,
    runner: RecordingRunner,
    service: GenerateService,
}

fn harness() -> Harness {
    let fs = MemoryFilesystem::new();
    let runner = RecordingRunner::new();
    let service = GenerateService::new(
        Box::new(fs.clone()),
        Box::new(MemoryTemplateStore::with_builtins()),
        Box::new(SimpleRenderer::new()),
        Box::new(runner.clone()),
    );
    Harness {
        fs,
        runner,
        service,
    }
}

fn request(generator: &str, target_folder: Option<&str>) -> GenerateRequest {
    GenerateRequest {
        generator: generator.into(),
        name: "test-name".into(),
        target_folder: target_folder.map(Into::into),
        app_name: "tmp".into(),
        script_app_name: "tmp".into(),
        persisted: Value::Null,
        create_service: None,
        no_template: false,
        flags: GenerateFlags {
            use_defaults: true,
            skip_inject: true,
            ..GenerateFlags::default()
        },
    }
}

fn content(fs: &MemoryFilesystem, path: &str) -> String {
    use modgen_core::application::ports::Filesystem;
    fs.read_file(Path::new(path))
        .unwrap_or_else(|_| panic!("missing file {path}"))
}

#[test]
fn component_run_creates_expected_files() {
    let h = harness();
    let report = h.service.generate(&request("cp", None)).unwrap();

    let expected = [
        "app/scripts/test-name/test-name-cp.html",
        "app/scripts/test-name/_test-name-cp.scss",
        "app/scripts/test-name/test-name-cp.js",
        "app/scripts/test-name/test-name-cp.spec.js",
    ];
    let created: Vec<PathBuf> = expected.iter().map(PathBuf::from).collect();
    assert_eq!(report.created_files, created);
    assert_eq!(h.fs.list_files().len(), 4, "no extra files");

    let script = content(&h.fs, "app/scripts/test-name/test-name-cp.js");
    assert!(script.contains("module('tmp')"));
    assert!(script.contains("testName"));
    assert!(script.contains("scripts/test-name/test-name-cp.html"));
    assert!(!script.contains("testNamea"));

    let spec = content(&h.fs, "app/scripts/test-name/test-name-cp.spec.js");
    assert!(spec.contains("('<test-name></test-name>')"));

    let view = content(&h.fs, "app/scripts/test-name/test-name-cp.html");
    assert!(view.contains("testName"));
}

#[test]
fn component_in_sub_folder() {
    let h = harness();
    h.service
        .generate(&request("cp", Some("test-path")))
        .unwrap();

    let script = content(&h.fs, "app/scripts/test-path/test-name/test-name-cp.js");
    assert!(script.contains("scripts/test-path/test-name/test-name-cp.html"));
    assert!(
        h.fs.list_files()
            .iter()
            .all(|p| p.starts_with("app/scripts/test-path/test-name"))
    );
}

#[test]
fn app_prefixed_path_argument_resolves_identically() {
    let plain = harness();
    plain
        .service
        .generate(&request("cp", Some("test-path")))
        .unwrap();

    let prefixed = harness();
    prefixed
        .service
        .generate(&request("cp", Some("app/scripts/test-path")))
        .unwrap();

    assert_eq!(plain.fs.list_files(), prefixed.fs.list_files());
}

#[test]
fn service_without_template_omits_views_and_template_url() {
    let h = harness();
    let mut req = request("cp", Some("test-path"));
    req.create_service = Some(ServiceKind::Service);
    req.no_template = true;
    h.service.generate(&req).unwrap();

    let files = h.fs.list_files();
    let names: Vec<&str> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "test-name-cp.js",
            "test-name-cp.spec.js",
            "test-name-s.js",
            "test-name-s.spec.js",
        ]
    );

    let script = content(&h.fs, "app/scripts/test-path/test-name/test-name-cp.js");
    assert!(!script.contains("templateUrl"), "no view, no templateUrl");

    let svc = content(&h.fs, "app/scripts/test-path/test-name/test-name-s.js");
    assert!(svc.contains("module('tmp')"));
    assert!(svc.contains("TestName"));

    let svc_spec = content(&h.fs, "app/scripts/test-path/test-name/test-name-s.spec.js");
    assert!(svc_spec.contains("TestName"));
}

#[test]
fn route_run_uses_route_templates() {
    let h = harness();
    h.service.generate(&request("rt", None)).unwrap();

    let script = content(&h.fs, "app/scripts/test-name/test-name-rt.js");
    assert!(script.contains("$routeProvider.when('/test-name'"));
    assert!(script.contains("scripts/test-name/test-name-rt.html"));
}

#[test]
fn persisted_config_changes_extensions() {
    let h = harness();
    let store = MemoryTemplateStore::with_builtins();
    store.insert("_cp.less", ".{{dashedName}} {\n}\n");
    let service = GenerateService::new(
        Box::new(h.fs.clone()),
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(h.runner.clone()),
    );

    let mut req = request("cp", None);
    req.flags.use_defaults = false;
    req.persisted = json!({ "fileExt": { "style": ".less" } });
    service.generate(&req).unwrap();

    assert!(
        h.fs.list_files()
            .contains(&PathBuf::from("app/scripts/test-name/_test-name-cp.less"))
    );
}

#[test]
fn inline_override_replaces_builtin_output() {
    let h = harness();
    let mut req = request("cp", None);
    req.flags.use_defaults = false;
    req.persisted = json!({
        "subGenerators": {
            "cp": { "overrides": { "script": "// custom {{cameledName}}\n" } }
        }
    });
    h.service.generate(&req).unwrap();

    let script = content(&h.fs, "app/scripts/test-name/test-name-cp.js");
    assert_eq!(script, "// custom testName\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = harness();
    first.service.generate(&request("cp", None)).unwrap();
    let second = harness();
    second.service.generate(&request("cp", None)).unwrap();

    assert_eq!(first.fs.list_files(), second.fs.list_files());
    for path in first.fs.list_files() {
        let p = path.to_str().unwrap();
        assert_eq!(content(&first.fs, p), content(&second.fs, p), "{p} differs");
    }
}

#[test]
fn inject_hook_spawns_unless_skipped() {
    let h = harness();
    let mut req = request("cp", None);
    req.flags.skip_inject = false;
    h.service.generate(&req).unwrap();

    let calls = h.runner.calls();
    assert_eq!(calls, vec![("gulp".to_string(), vec!["inject".to_string()])]);
}

#[test]
fn editor_hook_opens_every_created_file() {
    let h = harness();
    let mut req = request("cp", None);
    req.flags.open_in_editor = true;
    let report = h.service.generate(&req).unwrap();

    let calls = h.runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "subl");
    let expected: Vec<String> = report
        .created_files
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(calls[0].1, expected);
}

#[test]
fn unknown_template_variable_fails_fast() {
    let h = harness();
    let store = MemoryTemplateStore::with_builtins();
    store.insert("cp.html", "{{typoedName}}");
    let service = GenerateService::new(
        Box::new(h.fs.clone()),
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(h.runner.clone()),
    );

    let err = service.generate(&request("cp", None)).unwrap_err();
    assert!(err.to_string().contains("cp.html"));
    assert!(h.fs.list_files().is_empty(), "first descriptor failed");
}
