use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_bsh(cwd: &Path, script: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bsh"))
        .current_dir(cwd)
        .env_remove("BSH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start bsh");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Output lines with the prompts stripped and blank lines dropped.
fn output_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim_start_matches("> ").to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_pwd_mkdir_cd_pwd_exit() {
    let temp = tempfile::tempdir().unwrap();
    let base = fs::canonicalize(temp.path()).unwrap();

    let output = run_bsh(&base, "pwd\nmkdir sub\ncd sub\npwd\nexit\n");

    assert!(output.status.success());
    let lines = output_lines(&output);
    assert_eq!(lines.len(), 2, "stdout: {:?}", lines);
    assert_eq!(lines[1], format!("{}/sub", lines[0]));
    assert!(base.join("sub").is_dir());
}

#[test]
fn test_prompt_is_printed_before_every_read() {
    let temp = tempfile::tempdir().unwrap();

    let output = run_bsh(temp.path(), "echo a b c\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> a b c\n> ");
}

#[test]
fn test_end_of_input_exits_successfully() {
    let temp = tempfile::tempdir().unwrap();

    let output = run_bsh(temp.path(), "");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "> ");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_commands_after_exit_are_not_run() {
    let temp = tempfile::tempdir().unwrap();

    let output = run_bsh(temp.path(), "exit\ntouch never\n");

    assert!(output.status.success());
    assert!(!temp.path().join("never").exists());
}

#[test]
fn test_external_program_output_is_inherited() {
    let temp = tempfile::tempdir().unwrap();

    let output = run_bsh(temp.path(), "echo before\nprintf external\necho after\nexit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let before = stdout.find("before").unwrap();
    let external = stdout.find("external").unwrap();
    let after = stdout.find("after").unwrap();
    assert!(before < external && external < after, "stdout: {stdout}");
}

#[test]
fn test_unknown_program_is_reported_and_loop_continues() {
    let temp = tempfile::tempdir().unwrap();

    let output = run_bsh(temp.path(), "bsh-no-such-program-4711 x\necho alive\n");

    assert!(output.status.success());
    assert_eq!(output_lines(&output), ["alive"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bsh-no-such-program-4711"), "stderr: {stderr}");
}

#[test]
fn test_touch_then_cat_is_empty_and_cat_normalizes() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("crlf"), b"one\r\ntwo\r\n").unwrap();

    let output = run_bsh(temp.path(), "touch f\ncat f\ncat crlf\nexit\n");

    assert!(output.status.success());
    assert_eq!(output_lines(&output), ["one", "two"]);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_diagnostics_go_to_stderr() {
    let temp = tempfile::tempdir().unwrap();

    let output = run_bsh(temp.path(), "cd\ncd does-not-exist\npwd\nexit\n");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected argument to \"cd\""));
    assert!(stderr.contains("cd: does-not-exist"));
    let canonical = fs::canonicalize(temp.path()).unwrap();
    assert_eq!(output_lines(&output), [canonical.display().to_string()]);
}

#[test]
fn test_custom_prompt() {
    let temp = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_bsh"))
        .args(["--prompt", "$ "])
        .current_dir(temp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"exit\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "$ ");
}
