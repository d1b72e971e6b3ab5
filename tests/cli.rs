use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passmeter").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn quiet_prints_one_password_of_requested_length() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home).args(["-l", "16", "-q"]).assert().success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 16);
}

#[test]
fn number_flag_prints_several_passwords() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home).args(["-l", "20", "-n", "3", "-q"]).assert().success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 20));
}

#[test]
fn invalid_length_uses_default() {
    let home = TempDir::new().unwrap();
    for bad in ["abc", "0", "-7"] {
        let out = cmd(&home).args(["-l", bad, "-q"]).assert().success();
        let lines = stdout_lines(&out.get_output().stdout);
        assert_eq!(lines[0].len(), 12, "length input {bad:?}");
    }
}

#[test]
fn oversized_length_is_capped() {
    let home = TempDir::new().unwrap();
    for huge in ["18446744073709551615", "100000000000"] {
        let out = cmd(&home).args(["-l", huge, "-q"]).assert().success();
        let lines = stdout_lines(&out.get_output().stdout);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 4096, "length input {huge:?}");
    }
}

#[test]
fn oversized_count_is_capped() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home)
        .args(["-l", "4", "-n", "1000000000000", "-q"])
        .assert()
        .success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 10_000);
    assert!(lines.iter().all(|l| l.len() == 4));
}

#[test]
fn digits_only_pool() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home)
        .args(["--no-letters", "--no-special", "-l", "40", "-q"])
        .assert()
        .success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert!(lines[0].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn report_follows_each_password() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home).args(["-l", "12", "-n", "2"]).assert().success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].trim_start().starts_with("Strength: "));
    assert!(lines[3].contains("bits | Pool: "));
}

#[test]
fn no_classes_is_reported_not_crashed() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--no-letters", "--no-digits", "--no-special"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("No character types selected"));
}

#[test]
fn assess_argument() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-a", "Ab3!"])
        .assert()
        .success()
        .stdout(contains(
            "Strength: very weak | Entropy: 24.68 bits | Pool: 72 chars",
        ));
}

#[test]
fn assess_reads_stdin() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--assess", "-"])
        .write_stdin("Ab3!\u{eb}\n")
        .assert()
        .success()
        .stdout(contains("Strength: weak | Entropy: 30.95 bits | Pool: 73 chars"));
}

#[test]
fn assess_empty_string() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-a", ""])
        .assert()
        .success()
        .stdout(contains("Strength: very weak | Entropy: 0.0 bits | Pool: 1 chars"));
}

#[test]
fn saved_settings_apply_with_flag() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config/passmeter");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("settings"), "24,2,true,false,false,false\n").unwrap();

    let out = cmd(&home).args(["-s", "-q"]).assert().success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 2);
    assert!(
        lines
            .iter()
            .all(|l| l.len() == 24 && l.chars().all(|c| c.is_ascii_alphabetic()))
    );

    // Without -s the file is ignored
    let out = cmd(&home).arg("-q").assert().success();
    assert_eq!(stdout_lines(&out.get_output().stdout)[0].len(), 12);
}

#[test]
fn no_args_without_tty_generates_one() {
    let home = TempDir::new().unwrap();
    let out = cmd(&home).assert().success();
    let lines = stdout_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 12);
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
