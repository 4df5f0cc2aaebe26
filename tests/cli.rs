use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("rotcipher").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn caesar_encipher() {
    cmd()
        .args(["--caesar", "J", "HELLOWORLD"])
        .assert()
        .success()
        .stdout("QNUUXFXAUM\n");
}

#[test]
fn caesar_decipher() {
    cmd()
        .args(["--decipher", "-c", "J", "QNUUX FXAUM"])
        .assert()
        .success()
        .stdout("HELLO WORLD\n");
}

#[test]
fn caesar_key_must_be_single_letter() {
    cmd()
        .args(["--caesar", "JK", "HELLO"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Key should be a single letter to rotate by"));
}

#[test]
fn caesar_non_letter_key_warns_and_passes_through() {
    cmd()
        .args(["-c", ".", "I SHOULD NOT CHANGE"])
        .assert()
        .success()
        .stdout("I SHOULD NOT CHANGE\n")
        .stderr(contains("not an ASCII letter"));
}

#[test]
fn vigenere_encipher() {
    cmd()
        .args(["--vigenere", "ARAGON", "Gondor calls for aid!"])
        .assert()
        .success()
        .stdout("Gfnjce crlrg soi aor!\n");
}

#[test]
fn vigenere_decipher_with_filler_in_key() {
    cmd()
        .args([
            "-d",
            "-v",
            "I'm a key!",
            "Qz tri jizd yj rpq bvmll, fho slm-qyoh kiz ic ogvs.",
        ])
        .assert()
        .success()
        .stdout("In the land of the blind, the one-eyed man is king.\n");
}

#[test]
fn long_text_is_not_truncated() {
    let text = "abc ".repeat(600);
    cmd()
        .args(["-c", "A", text.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{text}\n")));
}

#[test]
fn missing_cipher_is_usage_error() {
    cmd().arg("HELLO").assert().failure().code(2);
}

#[test]
fn missing_text_is_usage_error() {
    cmd().args(["--vigenere", "KEY"]).assert().failure().code(2);
}

#[test]
fn help_lists_ciphers_and_examples() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--caesar"))
        .stdout(contains("--vigenere"))
        .stdout(contains("--decipher"))
        .stdout(contains("rotcipher --vigenere ARAGON"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    cmd()
        .args(["--verbose", "-c", "B", "abc"])
        .assert()
        .success()
        .stdout("bcd\n")
        .stderr(contains("running Caesar cipher"));
}
