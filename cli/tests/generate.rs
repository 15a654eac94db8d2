use std::{fs, path::Path, process::Command};

const TOKEN_H: &str = include_str!("../../crates/kwgen/fixtures/token.h");
const TOKEN_CONVERT_H: &str = include_str!("../../crates/kwgen/fixtures/token_convert.h");

fn kwgen(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_kwgen"))
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .env_remove("KWGEN_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_uses_conventional_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("token.h"), TOKEN_H).unwrap();

    let output = kwgen(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("token_convert.h")).unwrap(),
        TOKEN_CONVERT_H
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Generated"));
}

#[test]
fn test_config_file_and_print() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("include")).unwrap();
    fs::write(dir.path().join("include").join("tokens.h"), TOKEN_H).unwrap();
    fs::write(
        dir.path().join("kwgen.toml"),
        "[paths]\ninput = \"include/tokens.h\"\noutput = \"include/keywords.h\"\n",
    )
    .unwrap();

    let output = kwgen(dir.path(), &["--print"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), TOKEN_CONVERT_H);
    assert_eq!(
        fs::read_to_string(dir.path().join("include").join("keywords.h")).unwrap(),
        TOKEN_CONVERT_H
    );
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = kwgen(dir.path(), &["-i", "absent.h"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.h"));
    assert!(!dir.path().join("token_convert.h").exists());
}
