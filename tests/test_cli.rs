use assert_cmd::Command;

fn stepc() -> Command {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.arg("--no-color");
    command
}

#[test]
fn test_prints_tables() {
    let output = stepc()
        .write_stdin("int x = 5;\nfloat y = \"hi\";\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Token Type"));
    assert!(stdout.contains("│ IDENTIFIER │ x     │ 1    │"));
    assert!(stdout.contains("Data Type"));
    assert!(stdout.contains("│ y          │ float     │ 2    │"));
}

#[test]
fn test_syntax_error_exit_code() {
    let output = stepc().write_stdin("x = 5\ny = 6;\n").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let expected = "Syntax Error: Missing semicolon after x = 5. Expected ';' at line 1";
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains(expected));
    assert!(stderr.contains(expected));
    assert!(!stdout.contains("Token Type"));
}

#[test]
fn test_quiet_skips_immediate_reports() {
    let output = stepc()
        .arg("--quiet")
        .write_stdin("5 = x;\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unexpected token INTEGER at line 1"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Unexpected token"));
}

#[test]
fn test_lexical_error_exit_code() {
    let output = stepc().write_stdin("x = 1.2.3;").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Lexical Error"));
}

#[test]
fn test_unreadable_input_exit_code() {
    let output = stepc().arg("does/not/exist.step").output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: cannot read does/not/exist.step"));

    let output = stepc().write_stdin(vec![0x78, 0xff, 0xfe]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: cannot read <stdin>"));
}
