//! End-to-end tests of the `sufalign` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn sufalign() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sufalign"))
}

fn cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("cases")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_case(root: &Path, name: &str, pattern: &str, text: &str, expected: &str) {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("P.fa"), format!(">P\n{}\n", pattern)).unwrap();
    fs::write(dir.join("T.fa"), format!(">T\n{}\n", text)).unwrap();
    fs::write(dir.join("output.txt"), format!("{}\n", expected)).unwrap();
}

#[test]
fn align_prints_loci() {
    let case = cases_dir().join("banana");
    for algorithm in ["auto", "naive", "doubling"].iter() {
        let output = sufalign()
            .arg("align")
            .arg("--pattern")
            .arg(case.join("P.fa"))
            .arg("--text")
            .arg(case.join("T.fa"))
            .args(["--algorithm", *algorithm])
            .output()
            .expect("failed to run sufalign align");

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), "Alignment loci: [2, 4]\n");
    }
}

#[test]
fn align_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = sufalign()
        .arg("align")
        .arg("--pattern")
        .arg(dir.path().join("absent.fa"))
        .arg("--text")
        .arg(cases_dir().join("banana").join("T.fa"))
        .output()
        .expect("failed to run sufalign align");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("absent.fa"));
}

#[test]
fn check_bundled_cases_succeeds() {
    let output = sufalign()
        .arg("check")
        .arg(cases_dir())
        .args(["--color", "never"])
        .output()
        .expect("failed to run sufalign check");

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).trim_end().ends_with("ALL TESTS PASSED!!!"));
}

#[test]
fn check_fails_on_wrong_expectation() {
    let root = tempfile::tempdir().unwrap();
    write_case(root.path(), "good", "aa", "aaaa", "Alignment loci: [1, 2, 3]");
    write_case(root.path(), "wrong", "ana", "banana", "Alignment loci: [2]");

    let output = sufalign()
        .arg("check")
        .arg(root.path())
        .args(["--color", "never"])
        .output()
        .expect("failed to run sufalign check");

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("FAIL"));
    assert!(out.contains("1 of 2 cases failed"));
    assert!(!out.contains("ALL TESTS PASSED!!!"));
}

#[test]
fn verbose_enables_debug_logging() {
    let quiet = sufalign()
        .arg("check")
        .arg(cases_dir())
        .args(["--color", "never"])
        .output()
        .expect("failed to run sufalign check");
    assert!(!stderr(&quiet).contains("debug:"));

    let verbose = sufalign()
        .arg("-v")
        .arg("check")
        .arg(cases_dir())
        .args(["--color", "never"])
        .output()
        .expect("failed to run sufalign -v check");
    let log = stderr(&verbose);
    assert!(log.contains("debug: case banana: passed"), "stderr: {}", log);
    assert!(!log.contains("trace:"));

    let trace = sufalign()
        .arg("-vv")
        .arg("check")
        .arg(cases_dir())
        .args(["--color", "never"])
        .output()
        .expect("failed to run sufalign -vv check");
    assert!(stderr(&trace).contains("trace: pattern of"));
}
