//! CLI integration tests for schema-introspect binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("schema-introspect"))
}

// Helper to create a temp schema document
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const LIMIT_PARAM: &str = r#"{
    "type": "pipe",
    "in": { "type": "transform" },
    "out": {
        "type": "optional",
        "innerType": {
            "type": "default",
            "defaultValue": 50,
            "innerType": { "type": "number", "format": "safeint", "minValue": 1, "maxValue": 55 }
        }
    }
}"#;

mod describe_command {
    use super::*;

    #[test]
    fn basic_describe() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "limit.json", LIMIT_PARAM);

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""type":"integer""#))
            .stdout(predicate::str::contains(r#""required":false"#))
            .stdout(predicate::str::contains(r#""default":50"#))
            .stdout(predicate::str::contains(r#""min":1.0"#))
            .stdout(predicate::str::contains(r#""max":55.0"#));
    }

    #[test]
    fn describe_with_pretty() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "s.json", r#"{"type":"string"}"#);

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("{\n"));
    }

    #[test]
    fn describe_with_output_file() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "s.json", r#"{"type":"string","format":"email"}"#);
        let output = dir.path().join("output.json");

        cmd()
            .args([
                "describe",
                schema.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains(r#""type":"email""#));
    }

    #[test]
    fn postman_target_hints() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "upload.json",
            r#"{"type":"file","meta":{"contentType":"image/png","style":"form"}}"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--target", "postman"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""type":"binary""#))
            .stdout(predicate::str::contains(r#""contentType":"image/png""#))
            .stdout(predicate::str::contains("style").not());
    }

    #[test]
    fn no_hints_flag() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "s.json",
            r#"{"type":"string","meta":{"style":"form"}}"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--no-hints"])
            .assert()
            .success()
            .stdout(predicate::str::contains("hints").not());
    }

    #[test]
    fn max_depth_flag() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "nested.json",
            r#"{
                "type": "object",
                "shape": {
                    "inner": { "type": "object", "shape": { "leaf": { "type": "boolean" } } }
                }
            }"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--max-depth", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("inner"))
            .stdout(predicate::str::contains("leaf").not());
    }

    #[test]
    fn rejects_non_schema_document() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "route.json",
            r#"{"params":{"type":"object","shape":{}}}"#,
        );

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("not a schema node"));
    }

    #[test]
    fn rejects_numeric_type_tag() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "numeric.json", r#"{"type":5}"#);

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not a schema node"));
    }

    #[test]
    fn unknown_target() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "s.json", r#"{"type":"string"}"#);

        cmd()
            .args(["describe", schema.to_str().unwrap(), "--target", "swagger"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown target"));
    }
}

mod check_command {
    use super::*;

    #[test]
    fn check_valid_document() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "limit.json", LIMIT_PARAM);

        cmd()
            .args(["check", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid"));
    }

    #[test]
    fn check_invalid_document() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "bad.json", r#"{"type":"array"}"#);

        cmd()
            .args(["check", schema.to_str().unwrap()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Check failed"));
    }

    #[test]
    fn check_json_output_valid() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "s.json", r#"{"type":"boolean"}"#);

        cmd()
            .args(["check", schema.to_str().unwrap(), "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"valid":true}"#));
    }

    #[test]
    fn check_json_output_invalid() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(
            &dir,
            "bad.json",
            r#"{"type":"optional","innerType":{"type":"string","minLength":"one"}}"#,
        );

        cmd()
            .args(["check", schema.to_str().unwrap(), "--json"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(r#""valid":false"#))
            .stdout(predicate::str::contains("/innerType/minLength"));
    }

    #[test]
    fn check_json_output_file_error() {
        cmd()
            .args(["check", "/nonexistent/schema.json", "--json"])
            .assert()
            .code(3)
            .stdout(predicate::str::contains(r#""valid":false"#));
    }
}

mod type_command {
    use super::*;

    #[test]
    fn prints_canonical_type() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "limit.json", LIMIT_PARAM);

        cmd()
            .args(["type", schema.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::diff("integer\n"));
    }

    #[test]
    fn rejects_non_schema_document() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "route.json", r#"{"query":{}}"#);

        cmd()
            .args(["type", schema.to_str().unwrap()])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("not a schema node"));
    }
}

mod error_handling {
    use super::*;

    #[test]
    fn file_not_found() {
        cmd()
            .args(["describe", "/nonexistent/schema.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn invalid_json_document() {
        let dir = TempDir::new().unwrap();
        let schema = write_temp_file(&dir, "bad.json", r#"{ not valid json"#);

        cmd()
            .args(["describe", schema.to_str().unwrap()])
            .assert()
            .code(2);
    }

    #[test]
    fn missing_schema_argument() {
        cmd().arg("describe").assert().failure();
    }
}

mod help_and_version {
    use super::*;

    #[test]
    fn help_flag() {
        cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Describe validation schema documents"));
    }

    #[test]
    fn version_flag() {
        cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("schema-introspect"));
    }

    #[test]
    fn describe_help() {
        cmd()
            .args(["describe", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--target"))
            .stdout(predicate::str::contains("--no-hints"))
            .stdout(predicate::str::contains("--pretty"));
    }
}

#[cfg(feature = "remote")]
mod remote {
    use super::*;

    #[test]
    fn describe_from_url() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/limit.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(LIMIT_PARAM)
            .create();

        cmd()
            .args(["describe", &format!("{}/limit.json", server.url())])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""type":"integer""#));
    }

    #[test]
    fn describe_url_404() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing.json").with_status(404).create();

        cmd()
            .args(["describe", &format!("{}/missing.json", server.url())])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("failed to fetch"));
    }
}
