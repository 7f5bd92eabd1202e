//! Smoke tests for the glyphpick binary's scripted subcommands

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with HOME pointed at an empty directory, so no user config applies
fn glyphpick(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("glyphpick").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("GLYPHPICK_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// === List ===

#[test]
fn test_list_search() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["list", "--search", "HO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("house\n"))
        .stdout(predicate::str::contains("home\n"));
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();
    let output = glyphpick(&home)
        .args(["list", "--page", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["page"], 2);
    assert_eq!(report["glyphs"].as_array().unwrap().len(), 40);
    assert_eq!(report["controls"][0]["kind"], "previous");
    assert_eq!(report["controls"][0]["enabled"], true);
}

#[test]
fn test_list_no_matches() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["list", "--search", "no-such-icon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No icons match"));
}

// === Show ===

#[test]
fn test_show_known_glyph() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["show", "house"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected Icon: house"));
}

#[test]
fn test_show_unknown_glyph() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown glyph"));
}

#[test]
fn test_show_from_glyph_pack() {
    let home = TempDir::new().unwrap();
    let pack = home.path().join("pack");
    std::fs::create_dir_all(&pack).unwrap();
    std::fs::write(pack.join("comet.toml"), "symbol = \"☄\"\n").unwrap();

    let config = home.path().join("glyphpick.toml");
    std::fs::write(&config, "glyph_dir = \"${HOME}/pack\"\n").unwrap();

    glyphpick(&home)
        .arg("--config")
        .arg(&config)
        .args(["show", "comet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("☄"));
}

// === Config ===

#[test]
fn test_config_path() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("load_delay_ms = 0"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .args(["--config", "/definitely/not/here.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config not found"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    glyphpick(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("icon picker"));
}
