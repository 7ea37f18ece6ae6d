use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const ONE: &str = "src/a.ts(10,2): error TS2322: Type 'number' is not assignable to type 'string'.\n";
const TWO: &str = "src/a.ts(10,2): error TS2322: Type 'number' is not assignable to type 'string'.\nsrc/a.ts(14,7): error TS2322: Type 'number' is not assignable to type 'string'.\n";

fn repo() -> TempDir {
    let td = TempDir::new().expect("temp");
    fs::create_dir(td.path().join(".git")).unwrap();
    td
}

fn cmd(td: &TempDir) -> Command {
    let mut c = Command::cargo_bin("tsc-baseline").unwrap();
    c.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--repo-root")
        .arg(td.path());
    c
}

#[test]
fn save_then_check_same_input_passes() {
    let td = repo();
    cmd(&td).arg("save").write_stdin(ONE).assert().success();
    assert!(td.path().join(".tsc-baseline.json").exists());

    let out = cmd(&td).arg("check").write_stdin(format!("> tsc\n{ONE}Found 1 error.\n")).assert().success();
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(stdout.contains("0 new errors found. 1 error in baseline."), "{stdout}");
}

#[test]
fn extra_occurrence_is_reported_with_count_one() {
    let td = repo();
    cmd(&td).arg("save").write_stdin(ONE).assert().success();

    let out = cmd(&td).arg("check").write_stdin(TWO).assert().code(1);
    let stdout = String::from_utf8_lossy(&out.get_output().stdout).to_string();
    assert!(stdout.contains("Count of new errors: 1"), "{stdout}");
    assert!(stdout.contains("2 current errors:\nsrc/a.ts(10,2)\nsrc/a.ts(14,7)"), "{stdout}");
    assert!(stdout.contains("1 new error found."), "{stdout}");
}

#[test]
fn json_output_and_report_file() {
    let td = repo();
    cmd(&td).arg("save").write_stdin("").assert().success();

    let out = cmd(&td)
        .args(["check", "--output", "json", "--report-path", "cc.json"])
        .write_stdin(ONE)
        .assert()
        .code(1);
    let printed: serde_json::Value = serde_json::from_slice(&out.get_output().stdout).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(td.path().join("cc.json")).unwrap()).unwrap();
    assert_eq!(printed, written);
    assert_eq!(printed[0]["location"]["path"], "src/a.ts");
    assert_eq!(printed[0]["location"]["lines"]["begin"], 10);
}

#[test]
fn add_accepts_hash_then_check_passes() {
    let td = repo();
    cmd(&td).arg("save").write_stdin("").assert().success();
    let out = cmd(&td).args(["check", "--output", "json"]).write_stdin(ONE).assert().code(1);
    let report: serde_json::Value = serde_json::from_slice(&out.get_output().stdout).unwrap();
    let hash = report[0]["fingerprint"].as_str().unwrap().to_string();

    cmd(&td).args(["add", &hash]).write_stdin(ONE).assert().success();
    cmd(&td).arg("check").write_stdin(ONE).assert().success();
    cmd(&td).args(["add", "deadbeef"]).write_stdin(ONE).assert().code(2);
}

#[test]
fn missing_and_legacy_baselines_are_rejected() {
    let td = repo();
    let out = cmd(&td).arg("check").write_stdin(ONE).assert().code(2);
    let stderr = String::from_utf8_lossy(&out.get_output().stderr).to_string();
    assert!(stderr.contains("tsc-baseline save"), "{stderr}");

    fs::write(td.path().join(".tsc-baseline.json"), "{}").unwrap();
    let out = cmd(&td).arg("check").write_stdin(ONE).assert().code(2);
    let stderr = String::from_utf8_lossy(&out.get_output().stderr).to_string();
    assert!(stderr.contains("outdated"), "{stderr}");
}

#[test]
fn mode_mismatch_is_rejected() {
    let td = repo();
    cmd(&td).arg("save").write_stdin(ONE).assert().success();
    cmd(&td).args(["check", "--ignore-messages"]).write_stdin(ONE).assert().code(2);

    cmd(&td).args(["save", "--ignore-messages"]).write_stdin(ONE).assert().success();
    cmd(&td).arg("check").write_stdin(ONE).assert().success();
}

#[test]
fn clear_removes_baseline() {
    let td = repo();
    cmd(&td).arg("save").write_stdin(ONE).assert().success();
    cmd(&td).arg("clear").assert().success();
    assert!(!td.path().join(".tsc-baseline.json").exists());
    cmd(&td).arg("clear").assert().success();
}

#[test]
fn fatal_error_is_printed_once() {
    let td = repo();
    let out = cmd(&td).arg("check").write_stdin(ONE).assert().code(2);
    let stderr = String::from_utf8_lossy(&out.get_output().stderr).to_string();
    assert_eq!(stderr.matches("could not read baseline").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("hint:").count(), 1, "{stderr}");
}

#[test]
fn unwritable_report_path_is_named() {
    let td = repo();
    cmd(&td).arg("save").write_stdin("").assert().success();
    let out = cmd(&td)
        .args(["check", "--report-path", "no-such-dir/cc.json"])
        .write_stdin(ONE)
        .assert()
        .code(3);
    let stderr = String::from_utf8_lossy(&out.get_output().stderr).to_string();
    assert!(stderr.contains("could not write report") && stderr.contains("no-such-dir"), "{stderr}");
}
