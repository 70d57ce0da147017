mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("pm-poster").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pm-poster"));
}

#[test]
fn missing_data_file_reports_in_thai_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pm-poster").unwrap();
    cmd.current_dir(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("ไม่พบไฟล์ข้อมูล 'pm_data.csv'"));
    assert!(common::png_files(dir.path()).is_empty());
}

#[test]
fn missing_fonts_report_in_thai() {
    let dir = tempfile::tempdir().unwrap();
    common::write_template(&dir.path().join("template.png"));
    let mut cmd = Command::cargo_bin("pm-poster").unwrap();
    cmd.current_dir(dir.path())
        .arg("--data")
        .arg(common::fixture_csv());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("ไม่พบไฟล์ฟอนต์"));
    assert_eq!(common::png_files(dir.path()).len(), 1, "only the template");
}

#[test]
fn renders_with_explicit_paths_and_prints_stats() {
    let Some(font) = common::test_font() else {
        eprintln!("skipping: no TrueType font found (set PM_POSTER_TEST_FONT)");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("bg.png");
    common::write_template(&template);
    let out = dir.path().join("poster.png");

    let mut cmd = Command::cargo_bin("pm-poster").unwrap();
    cmd.arg("--data")
        .arg(common::fixture_csv())
        .arg("--template")
        .arg(&template)
        .arg("--bold-font")
        .arg(&font)
        .arg("--regular-font")
        .arg(&font)
        .arg("--output")
        .arg(&out)
        .arg("--stats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("สร้างโปสเตอร์สำเร็จ"))
        .stdout(predicate::str::contains("poster.png"))
        .stdout(predicate::str::contains("จำนวน 7 จุด"));
    assert!(out.exists());
}

#[test]
fn unknown_locale_is_reported_before_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pm-poster").unwrap();
    cmd.current_dir(dir.path()).args(["--locale", "qq_QQ.UTF-8"]);
    // The warning comes first even though the run then fails on missing data.
    cmd.assert().failure().stderr(
        predicate::str::contains("ไม่สามารถตั้งค่า Locale ภาษาไทยได้")
            .and(predicate::str::contains("ไม่พบไฟล์ข้อมูล"))
            .and(predicate::function(|err: &str| {
                err.find("Locale") < err.find("ไม่พบไฟล์ข้อมูล")
            })),
    );
}

#[test]
fn thai_locale_prints_no_locale_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("pm-poster").unwrap();
    cmd.current_dir(dir.path()).args(["--locale", "th_TH"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Locale").not());
}
