use elemental_cli::run;
use serial_test::serial;
use std::io::Write;

const VARS: [&str; 10] = [
    "ELEMENTAL_CONFIG",
    "ELEMENTAL_STACK",
    "ELEMENTAL_SMALL_BLIND",
    "ELEMENTAL_BIG_BLIND",
    "ELEMENTAL_SEATS",
    "ELEMENTAL_SEED",
    "ELEMENTAL_SIDE_POTS",
    "ELEMENTAL_ODD_CHIP",
    "ELEMENTAL_AI",
    "ELEMENTAL_SIM_BREAK_AFTER",
];

/// Clears every ELEMENTAL_* variable on creation and again on drop.
struct CleanEnv;

impl CleanEnv {
    fn new() -> Self {
        clear();
        CleanEnv
    }

    fn set(&self, key: &str, value: &str) {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl Drop for CleanEnv {
    fn drop(&mut self) {
        clear();
    }
}

fn clear() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn cfg_json() -> (i32, serde_json::Value, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["elemental", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(serde_json::Value::Null);
    (code, json, String::from_utf8_lossy(&err).into_owned())
}

#[test]
#[serial]
fn cfg_shows_default_settings() {
    let _env = CleanEnv::new();
    let (code, json, err) = cfg_json();
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(json["starting_stack"]["value"].as_u64(), Some(1000));
    assert_eq!(json["starting_stack"]["source"].as_str(), Some("default"));
    assert_eq!(json["seats"]["value"].as_u64(), Some(4));
    assert_eq!(json["odd_chip"]["value"].as_str(), Some("discard"));
    assert_eq!(json["side_pots"]["value"].as_bool(), Some(true));
    assert_eq!(json["ai"]["value"].as_str(), Some("baseline"));
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file_which_overrides_defaults() {
    let env = CleanEnv::new();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "seed = 456\nseats = 3\nodd_chip = \"first-after-dealer\"\nai = \"passive\""
    )
    .unwrap();
    env.set("ELEMENTAL_CONFIG", &file.path().to_string_lossy());
    env.set("ELEMENTAL_SEED", "789");

    let (code, json, err) = cfg_json();
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["seats"]["value"].as_u64(), Some(3));
    assert_eq!(json["seats"]["source"].as_str(), Some("file"));
    assert_eq!(json["odd_chip"]["value"].as_str(), Some("first-after-dealer"));
    assert_eq!(json["ai"]["value"].as_str(), Some("passive"));
    assert_eq!(json["big_blind"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn invalid_values_fail_with_exit_code_2() {
    let env = CleanEnv::new();
    for (key, value) in [
        ("ELEMENTAL_SEATS", "5"),
        ("ELEMENTAL_SEATS", "many"),
        ("ELEMENTAL_SMALL_BLIND", "50"),
        ("ELEMENTAL_BIG_BLIND", "0"),
        ("ELEMENTAL_STACK", "0"),
        ("ELEMENTAL_SIDE_POTS", "sometimes"),
        ("ELEMENTAL_ODD_CHIP", "split"),
        ("ELEMENTAL_AI", "oracle"),
    ] {
        clear();
        env.set(key, value);
        let (code, _, err) = cfg_json();
        assert_eq!(code, 2, "{}={} should be rejected", key, value);
        assert!(err.contains("Invalid configuration"), "stderr: {}", err);
    }
}

#[test]
#[serial]
fn configured_seed_drives_deal() {
    let env = CleanEnv::new();
    env.set("ELEMENTAL_SEED", "99");
    let mut a = Vec::new();
    let mut err = Vec::new();
    assert_eq!(run(["elemental", "deal"], &mut a, &mut err), 0);
    let mut b = Vec::new();
    assert_eq!(run(["elemental", "deal", "--seed", "99"], &mut b, &mut err), 0);
    assert_eq!(a, b);
    assert!(String::from_utf8(a).unwrap().starts_with("Seed: 99"));
}

#[test]
#[serial]
fn two_seat_table_from_env() {
    let env = CleanEnv::new();
    env.set("ELEMENTAL_SEATS", "2");
    let mut out = Vec::new();
    let mut err = Vec::new();
    assert_eq!(run(["elemental", "deal", "--seed", "5"], &mut out, &mut err), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Seat 2:"));
    assert!(!text.contains("Seat 3:"));
}
