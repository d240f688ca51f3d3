use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_match() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("match")
        .arg("[a-z]+")
        .arg("abc")
        .arg("xyz")
        .assert()
        .success()
        .stdout("[ PASS ] abc\n[ PASS ] xyz\n");
}

#[test]
fn cli_no_match() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("match")
        .arg("[a-z]+")
        .arg("abc")
        .arg("ABC")
        .assert()
        .code(1)
        .stdout("[ PASS ] abc\n[ FAIL ] ABC\n");
}

#[test]
fn cli_match_xpath() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("match")
        .arg("--xpath")
        .arg("^a")
        .arg("abc")
        .arg("cba")
        .assert()
        .code(1)
        .stdout("[ PASS ] abc\n[ FAIL ] cba\n");
}

#[test]
fn cli_match_stdin() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("match")
        .arg(r"\d+")
        .write_stdin("123\n456\n")
        .assert()
        .success()
        .stdout("[ PASS ] 123\n[ PASS ] 456\n");
}

#[test]
fn cli_invalid_pattern() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("match")
        .arg("[z-a]")
        .arg("a")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains(
            "error[E002]: invalid pattern",
        ))
        .stderr(predicate::str::contains(
            "character range is in the wrong order",
        ));
}

#[test]
fn cli_debug_ast() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("debug")
        .arg("ast")
        .arg("a|b")
        .assert()
        .success()
        .stdout(predicate::str::contains("branches"));
}

#[test]
fn cli_debug_code() {
    Command::cargo_bin("xspattern")
        .unwrap()
        .arg("debug")
        .arg("code")
        .arg("a")
        .assert()
        .success()
        .stdout(
            r#"
00000: JUMP 00001
00001: LIT 0x61
00002: JUMP 00003
00003: MATCH
"#,
        );
}
