use std::io::Cursor;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn tagboard() -> Command {
    Command::cargo_bin("tagboard").expect("tagboard binary")
}

fn png_size(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).expect("read png");
    let reader = png::Decoder::new(Cursor::new(bytes))
        .read_info()
        .expect("png header");
    (reader.info().width, reader.info().height)
}

#[test]
fn writes_board_with_expected_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("boards");
    tagboard()
        .args(["-x", "2", "-y", "2", "-s", "100", "-a", "0", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag36h11_2_2.png"));

    assert_eq!(png_size(&out.join("Tag36h11_2_2.png")), (275, 275));
}

#[test]
fn default_axis_grows_the_canvas() {
    let dir = tempfile::tempdir().expect("tempdir");
    tagboard()
        .args(["-x", "3", "-y", "2", "--no-corners", "-o"])
        .arg(dir.path())
        .assert()
        .success();
    // 3 * 120 + 4 * 30 + 60, 2 * 120 + 3 * 30 + 60
    assert_eq!(png_size(&dir.path().join("Tag36h11_2_3.png")), (540, 390));
}

#[test]
fn svg_and_report_are_optional_siblings() {
    let dir = tempfile::tempdir().expect("tempdir");
    tagboard()
        .args(["-x", "2", "-y", "1", "-f", "16h5", "-b", "classic", "--svg", "--report", "-o"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("Tag16h5_1_2.png").is_file());
    assert!(dir.path().join("Tag16h5_1_2.svg").is_file());
    let raw = std::fs::read_to_string(dir.path().join("Tag16h5_1_2.json")).expect("report");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(report["family"], "16h5");
    assert_eq!(report["board"]["border"], "outer_white_inner_black");
    assert_eq!(report["markers"].as_array().map(Vec::len), Some(2));
}

#[test]
fn config_file_replaces_board_flags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("board.json");
    let out = dir.path().join("from-config");
    let json = serde_json::json!({
        "board": { "cols": 1, "rows": 1, "tag_size": 10.0, "spacing_ratio": 0.0, "axis_length": 0 },
        "output_dir": out,
    });
    std::fs::write(&config, json.to_string()).expect("write config");

    tagboard()
        .args(["-x", "9"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
    assert_eq!(png_size(&out.join("Tag36h11_1_1.png")), (10, 10));
}

#[test]
fn too_many_markers_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    tagboard()
        .args(["-x", "10", "-y", "10", "-f", "16h5", "-o"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs 100 tag ids"));
    assert!(!dir.path().join("Tag16h5_10_10.png").exists());
}

#[test]
fn tiny_tags_warn_but_succeed() {
    let dir = tempfile::tempdir().expect("tempdir");
    tagboard()
        .args(["-x", "1", "-y", "1", "-s", "5", "-i", "0", "-a", "0", "-o"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("0 pixels per bit"));
    assert_eq!(png_size(&dir.path().join("Tag36h11_1_1.png")), (5, 5));
}

#[test]
fn unknown_family_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    tagboard()
        .args(["-f", "99h1", "-o"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tag family"));
}

#[test]
fn invalid_border_value_is_a_usage_error() {
    tagboard()
        .args(["-b", "purple"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
