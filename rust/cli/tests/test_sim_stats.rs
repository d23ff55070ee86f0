use elemental_cli::run;
use serial_test::serial;
use std::path::Path;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["elemental"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn sim(hands: &str, path: &Path, seed: &str) -> (i32, String, String) {
    let p = path.to_string_lossy().into_owned();
    run_cli(&["sim", "--hands", hands, "--output", &p, "--seed", seed])
}

#[test]
#[serial]
fn sim_then_stats_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let (code, stdout, stderr) = sim("40", &path, "3");
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Simulated: 40 hands"));

    let (code, stdout, stderr) = run_cli(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["hands"].as_u64(), Some(40));
    assert_eq!(json["unsettled"].as_u64(), Some(0));
    assert_eq!(
        json["showdowns"].as_u64().unwrap() + json["ended_by_fold"].as_u64().unwrap(),
        40
    );
    assert_eq!(json["conservation_ok"].as_bool(), Some(true));
}

#[test]
#[serial]
fn compressed_output_is_readable_by_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl.zst");
    let (code, _, stderr) = sim("12", &path, "8");
    assert_eq!(code, 0, "stderr: {}", stderr);

    let raw = std::fs::read(&path).unwrap();
    assert!(serde_json::from_slice::<serde_json::Value>(&raw).is_err());

    let (code, stdout, _) = run_cli(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["hands"].as_u64(), Some(12));
}

#[test]
#[serial]
fn stats_walks_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    assert_eq!(sim("5", &dir.path().join("one.jsonl"), "1").0, 0);
    assert_eq!(sim("7", &nested.join("two.jsonl"), "2").0, 0);
    std::fs::write(dir.path().join("notes.txt"), "not a record\n").unwrap();

    let (code, stdout, _) = run_cli(&["stats", "--input", &dir.path().to_string_lossy()]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["hands"].as_u64(), Some(12));
}

#[test]
#[serial]
fn break_after_interrupts_with_130() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.jsonl");
    unsafe {
        std::env::set_var("ELEMENTAL_SIM_BREAK_AFTER", "3");
    }
    let (code, stdout, _) = sim("10", &path, "4");
    unsafe {
        std::env::remove_var("ELEMENTAL_SIM_BREAK_AFTER");
    }
    assert_eq!(code, 130);
    assert!(stdout.contains("Interrupted: saved 3/10"));
    let lines = std::fs::read_to_string(&path).unwrap().lines().count();
    assert_eq!(lines, 3);
}

#[test]
#[serial]
fn stats_flags_tampered_payouts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    assert_eq!(sim("3", &path, "6").0, 0);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let pot = lines[0]["result"]["pot"].as_u64().unwrap();
    lines[0]["result"]["pot"] = serde_json::json!(pot + 7);
    let tampered: String = lines.iter().map(|v| format!("{}\n", v)).collect();
    std::fs::write(&path, tampered).unwrap();

    let (code, stdout, stderr) = run_cli(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Chip conservation violated at hand"));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["conservation_ok"].as_bool(), Some(false));
}

#[test]
fn stats_on_missing_file_fails() {
    let (code, _, stderr) = run_cli(&["stats", "--input", "definitely/not/here.jsonl"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read"));
}

#[test]
fn stats_rejects_garbage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.jsonl");
    std::fs::write(&path, "{\"hand_id\": 5}\nnot json\n").unwrap();
    let (code, _, stderr) = run_cli(&["stats", "--input", &path.to_string_lossy()]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Skipped 2 corrupted record(s)"));
}
