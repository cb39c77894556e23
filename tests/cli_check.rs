use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const KUBE_OUTPUT: &str = r#"Client Version: version.Info{Major:"1", Minor:"7", GitVersion:"v1.7.0", GitCommit:"d3ada0119e776222f11ec7945e6d860061339aad", GitTreeState:"clean", BuildDate:"2017-06-30T09:51:01Z", GoVersion:"go1.8.3", Compiler:"gc", Platform:"darwin/amd64"}
	Server Version: version.Info{Major:"1", Minor:"7", GitVersion:"v1.7.0", GitCommit:"d3ada0119e776222f11ec7945e6d860061339aad", GitTreeState:"clean", BuildDate:"2017-07-26T00:12:31Z", GoVersion:"go1.8.3", Compiler:"gc", Platform:"linux/amd64"}"#;

/// A kubecheck invocation isolated from any real config files
fn kubecheck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kubecheck").unwrap();
    cmd.current_dir(dir.path());
    cmd.env("HOME", dir.path());
    cmd
}

fn write_fixture(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("kubectl-version.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn check_passes_on_matching_versions() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    kubecheck(&dir)
        .args(["check", "--client", "1.7", "--server", "1.7"])
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("2/2 checks passed"));
}

#[test]
fn check_warns_on_mismatch_without_strict() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    kubecheck(&dir)
        .args(["check", "--client", "1.6"])
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unexpected Client version 1.7"));
}

#[test]
fn check_fails_on_mismatch_with_strict() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    kubecheck(&dir)
        .args(["check", "--client", "2.0", "--strict"])
        .arg("--input")
        .arg(&fixture)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unexpected Client version 1.7"));
}

#[test]
fn check_reports_unparsable_output() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "something unexpected");

    kubecheck(&dir)
        .args(["check", "--server", "2.0"])
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Couldn't find Server version from kubectl output 'something unexpected'",
        ));
}

#[test]
fn check_reads_stdin() {
    let dir = TempDir::new().unwrap();

    kubecheck(&dir)
        .args(["check", "--client", "1.7", "--input", "-"])
        .write_stdin(KUBE_OUTPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 checks passed"));
}

#[test]
fn check_emits_json_report() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    let assert = kubecheck(&dir)
        .args(["check", "--client", "1.6", "--format", "json"])
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["outcomes"][0]["role"], "Client");
    assert_eq!(report["outcomes"][0]["expected"], "1.6");
    assert_eq!(report["outcomes"][0]["found"], "1.7");
    assert_eq!(
        report["outcomes"][0]["message"],
        "Unexpected Client version 1.7"
    );
}

#[test]
fn check_uses_expected_versions_from_config() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    fs::write(
        dir.path().join(".kubecheck.toml"),
        r#"
        [expected.client]
        major = "1"
        minor = "7"

        [expected.server]
        major = "1"
        minor = "8"
        "#,
    )
    .unwrap();

    kubecheck(&dir)
        .arg("check")
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("1/2 checks passed"))
        .stdout(predicate::str::contains("Unexpected Server version 1.7"));
}

#[test]
fn check_rejects_malformed_expected_version() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    kubecheck(&dir)
        .args(["check", "--client", "nonsense"])
        .arg("--input")
        .arg(&fixture)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid version 'nonsense'"));
}

#[test]
fn check_without_expectations_explains_itself() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    kubecheck(&dir)
        .arg("check")
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to check"));
}

#[test]
fn show_prints_found_versions() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, KUBE_OUTPUT);

    kubecheck(&dir)
        .arg("show")
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Client version: 1.7"))
        .stdout(predicate::str::contains("Server version: 1.7"));
}

#[test]
fn show_reports_missing_versions() {
    let dir = TempDir::new().unwrap();
    let fixture = write_fixture(&dir, "something unexpected");

    kubecheck(&dir)
        .arg("show")
        .arg("--input")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Client version: not found"));
}
