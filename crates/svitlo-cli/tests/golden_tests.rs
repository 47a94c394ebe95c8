use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use similar::{ChangeTag, TextDiff};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn fixture(name: &str) -> String {
    project_root()
        .join("fixtures")
        .join(name)
        .to_str()
        .unwrap()
        .to_string()
}

fn golden_dir() -> PathBuf {
    project_root().join("golden")
}

fn update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN").is_ok()
}

fn diff_strings(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    out
}

fn cases() -> Vec<(&'static str, Vec<String>)> {
    let today = fixture("schedule_today.json");
    let tomorrow = fixture("schedule_tomorrow.json");
    let history = fixture("schedule_history.json");

    vec![
        (
            "schedule_today",
            vec![
                "schedule".into(),
                "--today".into(),
                today.clone(),
                "--history".into(),
                history.clone(),
                "--date".into(),
                "2025-01-10".into(),
                "--queue".into(),
                "1".into(),
                "--output-format".into(),
                "json".into(),
            ],
        ),
        (
            "schedule_tomorrow",
            vec![
                "schedule".into(),
                "--today".into(),
                today.clone(),
                "--tomorrow".into(),
                tomorrow.clone(),
                "--date".into(),
                "2025-01-11".into(),
                "--queue".into(),
                "1".into(),
                "--output-format".into(),
                "json".into(),
            ],
        ),
        (
            "calendar",
            vec![
                "calendar".into(),
                "--today".into(),
                today,
                "--tomorrow".into(),
                tomorrow,
                "--history".into(),
                history,
                "--output-format".into(),
                "json".into(),
            ],
        ),
    ]
}

#[test]
fn golden_json_output() {
    let golden = golden_dir();

    for (name, args) in cases() {
        let golden_path = golden.join(format!("{name}.json"));

        let output = Command::new(env!("CARGO_BIN_EXE_svitlo"))
            .args(&args)
            .output()
            .expect("Failed to execute svitlo");

        assert!(
            output.status.success(),
            "svitlo failed for {}: {}",
            name,
            String::from_utf8_lossy(&output.stderr)
        );

        let actual = String::from_utf8(output.stdout).expect("Output is not valid UTF-8");

        if update_golden() {
            fs::create_dir_all(&golden).ok();
            fs::write(&golden_path, &actual)
                .unwrap_or_else(|e| panic!("Failed to write golden file {golden_path:?}: {e}"));
            eprintln!("Updated golden file: {golden_path:?}");
            continue;
        }

        let expected = fs::read_to_string(&golden_path).unwrap_or_else(|e| {
            panic!(
                "Golden file {golden_path:?} not found: {e}\n\
                 Hint: Run with UPDATE_GOLDEN=1 to generate golden files"
            )
        });

        if actual != expected {
            let diff = diff_strings(&expected, &actual);
            panic!(
                "Golden test mismatch for {name}:\n\n\
                 {diff}\n\n\
                 Run with UPDATE_GOLDEN=1 to refresh snapshots"
            );
        }
    }
}

#[test]
fn queue_not_found_reports_typed_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_svitlo"))
        .args([
            "schedule",
            "--today",
            &fixture("schedule_today.json"),
            "--date",
            "2025-01-10",
            "--queue",
            "6",
            "--output-format",
            "json",
        ])
        .output()
        .expect("Failed to execute svitlo");

    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8(output.stderr).expect("stderr is not valid UTF-8");
    let envelope: serde_json::Value =
        serde_json::from_str(&stderr).expect("stderr is not a JSON error envelope");
    assert_eq!(envelope["status"], "queue_not_found");
    assert_eq!(envelope["exit_code"], 3);
}

#[test]
fn missing_date_fails_not_found() {
    let output = Command::new(env!("CARGO_BIN_EXE_svitlo"))
        .args([
            "schedule",
            "--today",
            &fixture("schedule_today.json"),
            "--date",
            "2025-01-12",
            "--queue",
            "1",
            "--output-format",
            "json",
        ])
        .output()
        .expect("Failed to execute svitlo");

    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8(output.stderr).expect("stderr is not valid UTF-8");
    let envelope: serde_json::Value =
        serde_json::from_str(&stderr).expect("stderr is not a JSON error envelope");
    assert_eq!(envelope["status"], "not_found");
}
