use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

const PLAN: &str = r#"[
  {
    "type": "SerializerOp",
    "config": { "template": "?s <http://ex.org/name> ?o .", "format": "NTriples" },
    "operator": {
      "type": "ExtendOp",
      "config": {
        "extend_pairs": {
          "?s": { "type": "Iri", "inner_function": { "type": "Reference", "value": "id" } },
          "?o": { "type": "Literal", "inner_function": { "type": "Reference", "value": "name" } }
        }
      },
      "operator": {
        "type": "ProjectOp",
        "config": { "projection_attributes": ["id", "name"] },
        "operator": { "type": "SourceOp", "config": { "path": "people.csv" } }
      }
    }
  }
]"#;

fn workspace(plan: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("plan.json");
    fs::write(&path, plan).expect("write plan");
    (dir, path)
}

#[cfg(unix)]
fn stub_dot(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    // dot -T<fmt> -o <image> <source>: copy the source to the image path.
    let stub = dir.join("fake-dot");
    fs::write(&stub, "#!/bin/sh\ncp \"$4\" \"$3\"\n").expect("write stub");
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    stub
}

#[test]
fn no_arguments_is_a_usage_error() {
    let dir = TempDir::new().expect("tempdir");
    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(!dir.path().join("output-graphviz").exists());
}

#[test]
fn missing_doc_name_is_a_usage_error() {
    let (dir, plan) = workspace(PLAN);
    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .arg(&plan)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("<RML_DOC_NAME>"));
    assert!(!dir.path().join("output-graphviz").exists());
}

#[test]
fn missing_input_file_fails_and_names_it() {
    let dir = TempDir::new().expect("tempdir");
    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .args(["absent.json", "doc.ttl"])
        .output()
        .expect("run");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.json"), "stderr: {stderr}");
}

#[test]
fn malformed_input_fails() {
    let (dir, plan) = workspace("[{\"type\": ");
    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .arg(&plan)
        .arg("doc.ttl")
        .output()
        .expect("run");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed mapping plan"));
}

#[test]
fn missing_config_key_fails_before_rendering() {
    let (dir, plan) = workspace(r#"[{"type": "SourceOp", "config": {}}]"#);
    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .arg(&plan)
        .arg("doc.ttl")
        .output()
        .expect("run");
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("SourceOp is missing config key 'path'")
    );
    assert!(!dir.path().join("output-graphviz").exists());
}

#[test]
fn unavailable_dot_is_a_render_failure() {
    let (dir, plan) = workspace(PLAN);
    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .env("MAPPING_PLAN_VIZ_DOT", dir.path().join("no-such-dot"))
        .arg(&plan)
        .arg("doc.ttl")
        .output()
        .expect("run");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("graphviz render failed"));
}

#[cfg(unix)]
#[test]
fn renders_plan_into_output_dir() {
    let (dir, plan) = workspace(PLAN);
    let stub = stub_dot(dir.path());

    let output = cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .env("MAPPING_PLAN_VIZ_DOT", &stub)
        .env_remove("MAPPING_PLAN_VIZ_OUT_DIR")
        .arg(&plan)
        .arg("people.rml.ttl")
        .output()
        .expect("run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out_dir = dir.path().join("output-graphviz");
    let source = fs::read_to_string(out_dir.join("mapping_tree.gv")).expect("source");
    assert!(out_dir.join("mapping_tree.gv.png").exists());

    assert!(source.starts_with("// The mapping plan for people.rml.ttl\ngraph mapping_tree {\n"));
    assert!(source.contains(r#"?s -> Iri(Reference(id))"#));
    assert!(source.contains(r#"?o -> Literal(Reference(name))"#));
    assert!(source.contains(r#"[label="ProjectOp\nid,name"]"#));
    assert!(source.contains(r#"[label="SourceOp\n file:people.csv"]"#));
    assert_eq!(source.matches(" [label=").count(), 4);
    assert_eq!(source.matches(" -- ").count(), 3);

    // Re-running overwrites the same files.
    cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .env("MAPPING_PLAN_VIZ_DOT", &stub)
        .env_remove("MAPPING_PLAN_VIZ_OUT_DIR")
        .arg(&plan)
        .arg("other.ttl")
        .assert()
        .success();
    let source = fs::read_to_string(out_dir.join("mapping_tree.gv")).expect("source");
    assert!(source.starts_with("// The mapping plan for other.ttl\n"));
}

#[cfg(unix)]
#[test]
fn output_dir_can_be_redirected() {
    let (dir, plan) = workspace(r#"[{"type": "JoinOp"}]"#);
    let stub = stub_dot(dir.path());
    let target = dir.path().join("nested").join("graphs");

    cargo_bin_cmd!("mapping-plan-viz")
        .current_dir(dir.path())
        .env("MAPPING_PLAN_VIZ_DOT", &stub)
        .env("MAPPING_PLAN_VIZ_OUT_DIR", &target)
        .arg(&plan)
        .arg("doc.ttl")
        .assert()
        .success();

    let source = fs::read_to_string(target.join("mapping_tree.gv")).expect("source");
    assert!(source.contains("\tn0 [label=\"JoinOp\"]\n"));
    assert!(!dir.path().join("output-graphviz").exists());
}
