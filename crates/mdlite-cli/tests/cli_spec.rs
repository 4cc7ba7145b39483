use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// Runs the binary with an isolated HOME so no user config leaks in.
fn mdlite(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mdlite");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_stdin_to_stdout() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .write_stdin("#Header!\n* __Bold Item__\n* _Italic Item_")
        .assert()
        .success()
        .stdout(
            "<h1>Header!</h1><li><strong>Bold Item</strong></li><li><em>Italic Item</em></li>\n",
        );
}

#[test]
fn empty_stdin_is_empty_paragraph() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout("<p></p>\n");
}

#[test]
fn group_lists_flag() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .arg("--group-lists")
        .write_stdin("* a\n* b\nend")
        .assert()
        .success()
        .stdout("<ul><li>a</li><li>b</li></ul><p>end</p>\n");
}

#[test]
fn max_header_level_flag() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .args(["--max-header-level", "6"])
        .write_stdin("####### seven")
        .assert()
        .success()
        .stdout("<p>####### seven</p>\n");
}

#[test]
fn escape_html_flag() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .arg("--escape-html")
        .write_stdin("a < b")
        .assert()
        .success()
        .stdout("<p>a &lt; b</p>\n");
}

#[test]
fn renders_files_in_order() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.md");
    let b = dir.path().join("b.md");
    std::fs::write(&a, "# A").unwrap();
    std::fs::write(&b, "_b_").unwrap();

    mdlite(&home)
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("<h1>A</h1>\n<p><em>b</em></p>\n");
}

#[test]
fn writes_output_dir() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.md");
    std::fs::write(&input, "* item").unwrap();
    let out_dir = dir.path().join("site");

    mdlite(&home)
        .arg(&input)
        .arg("-o")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout("");

    let html = std::fs::read_to_string(out_dir.join("notes.html")).unwrap();
    assert_eq!(html, "<li>item</li>");
}

#[test]
fn config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/mdlite");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[render]\ngroup_lists = true\n",
    )
    .unwrap();

    mdlite(&home)
        .write_stdin("* x")
        .assert()
        .success()
        .stdout("<ul><li>x</li></ul>\n");
}

#[test]
fn explicit_config_path() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[render]\nmax_header_level = 2\n").unwrap();

    mdlite(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("### deep")
        .assert()
        .success()
        .stdout("<p>### deep</p>\n");
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .args(["--config", "/definitely/not/here.toml"])
        .write_stdin("x")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Config file not found"));
}

#[test]
fn invalid_config_reports_path() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[render\n").unwrap();

    mdlite(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(contains("Failed to parse config file").and(contains("broken.toml")));
}

#[test]
fn missing_input_file_fails() {
    let home = TempDir::new().unwrap();
    mdlite(&home)
        .arg("/definitely/not/here.md")
        .assert()
        .failure()
        .stderr(contains("Failed to read /definitely/not/here.md"));
}
