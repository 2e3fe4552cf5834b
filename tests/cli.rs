use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studyflow(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyflow").unwrap();
    cmd.env("STUDYFLOW_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("STUDYFLOW_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn stats_for_new_user() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("This Week"));

    assert!(home.path().join("studyflow.db").exists());
}

#[test]
fn logged_sessions_show_in_stats_and_history() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["log", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 25m focus session"));
    let logged = json_output(studyflow(&home).args(["log", "50", "-o", "json"]));
    assert_eq!(logged["profile"]["totalSessions"], 2);
    assert_eq!(logged["today"]["sessionsCount"], 2);
    assert_eq!(logged["recorded"]["durationMinutes"], 50);
    assert!(logged["profile"].get("revision").is_none());

    let stats = json_output(studyflow(&home).args(["stats", "--output", "json"]));
    assert_eq!(stats["totalSessions"], 2);
    assert_eq!(stats["totalMinutes"], 75);
    assert_eq!(stats["weekSessions"], 2);
    assert_eq!(stats["currentStreak"], 2);

    let history = json_output(studyflow(&home).args(["history", "-o", "json"]));
    assert_eq!(history["count"], 2);
    assert_eq!(history["items"][0]["durationMinutes"], 50);
}

#[test]
fn history_limit() {
    let home = TempDir::new().unwrap();
    for _ in 0..3 {
        studyflow(&home).args(["log", "10"]).assert().success();
    }

    let history = json_output(studyflow(&home).args(["-o", "json", "history", "--limit", "2"]));
    assert_eq!(history["count"], 2);
}

#[test]
fn log_rejects_out_of_range_minutes() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["log", "61"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between 1 and 60"));
}

#[test]
fn config_changes_are_persisted() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["config", "focus", "45"])
        .assert()
        .success();
    studyflow(&home)
        .args(["config", "theme", "forest"])
        .assert()
        .success();

    let config = json_output(studyflow(&home).args(["config", "show", "-o", "json"]));
    assert_eq!(config["timer"]["focus_minutes"], 45);
    assert_eq!(config["appearance"]["theme"], "forest");

    let saved = std::fs::read_to_string(home.path().join("config.yaml")).unwrap();
    assert!(saved.contains("focus_minutes: 45"));
}

#[test]
fn config_rejects_invalid_break() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["config", "break", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("break duration"));
    assert!(!home.path().join("config.yaml").exists());
}

#[test]
fn default_output_from_config() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    let quote = json_output(studyflow(&home).arg("quote"));
    assert!(quote["author"].is_string());
}

#[test]
fn invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "timer:\n  focus_minutes: 90\n").unwrap();

    studyflow(&home)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("focus duration"));
}

#[test]
fn music_selection() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["music", "select", "rain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rain Sounds"));

    let music = json_output(studyflow(&home).args(["music", "-o", "json"]));
    assert_eq!(music["current"]["name"], "Rain Sounds");

    studyflow(&home)
        .args(["music", "select", "jazz"])
        .assert()
        .failure();

    studyflow(&home)
        .args(["music", "url", "file:///tmp/a.mp3"])
        .assert()
        .failure();

    studyflow(&home)
        .args(["music", "volume", "35"])
        .assert()
        .success()
        .stdout(predicate::str::contains("35%"));
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studyflow"));
}

#[test]
fn user_override_keeps_profiles_apart() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .args(["--user", "alex", "log", "25"])
        .assert()
        .success();

    let alex = json_output(studyflow(&home).args(["stats", "-o", "json", "-u", "alex"]));
    assert_eq!(alex["totalSessions"], 1);

    let local = json_output(studyflow(&home).args(["stats", "-o", "json"]));
    assert_eq!(local["totalSessions"], 0);
}

#[test]
fn unwritable_log_file_falls_back_to_stderr() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir(home.path().join("studyflow.log")).unwrap();

    studyflow(&home)
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("logging to stderr"));
}

#[test]
fn logs_go_to_data_dir() {
    let home = TempDir::new().unwrap();

    studyflow(&home)
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(home.path().join("studyflow.log").is_file());
}
