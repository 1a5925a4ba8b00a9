use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn spellint() -> Command {
    Command::cargo_bin("spellint").unwrap()
}

#[test]
fn test_reports_comment_misspelling() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "value = 1  # this comment has a typpo\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("SC100 Possibly misspelt word: 'typpo'"));
}

#[test]
fn test_reports_name_misspelling() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "recieve_total = 1\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("SC200 Possibly misspelt word: 'recieve'"));
}

#[test]
fn test_clean_file_passes() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "count = count + 1  # increment the counter\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling problems found"));
}

#[test]
fn test_no_fail_keeps_exit_code_zero() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "# a typpo\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("typpo"));
}

#[test]
fn test_allowlist_words_are_known() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "# a typpo\n").unwrap();
    let allowlist = dir.path().join("extra.txt");
    fs::write(&allowlist, "typpo\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .arg("--allowlist")
        .arg(&allowlist)
        .assert()
        .success();
}

#[test]
fn test_legacy_whitelist_is_still_honored() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "# a typpo\n").unwrap();
    fs::write(dir.path().join("whitelist.txt"), "typpo\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_targets_restrict_what_is_checked() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "recieve_total = 1  # a typpo\n").unwrap();

    // only comments: the misspelt identifier is ignored
    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .arg("--spellcheck-targets")
        .arg("comments")
        .assert()
        .failure()
        .stdout(predicate::str::contains("typpo"))
        .stdout(predicate::str::contains("recieve").not());
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "# a typpo\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"code\": \"SC100\""))
        .stdout(predicate::str::contains("\"total_errors\": 1"));
}

#[test]
fn test_unknown_dictionary_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("sample.py");
    fs::write(&file, "# fine\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(&file)
        .arg("--dictionaries")
        .arg("klingon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dictionary"));
}

#[test]
fn test_directory_argument_walks_python_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.py"), "# fine\n").unwrap();
    fs::write(dir.path().join("bad.py"), "# a typpo\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "zzqzz\n").unwrap();

    spellint()
        .current_dir(dir.path())
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("typpo"))
        .stdout(predicate::str::contains("zzqzz").not());
}

#[test]
fn test_no_files_given() {
    spellint()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files specified"));
}
