//! Shared test helpers

use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

/// Directory holding the XML fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Config path that never exists, so tests run with defaults.
pub fn isolated_config() -> PathBuf {
    std::env::temp_dir().join("oscrec-tests-no-such-dir").join("config.toml")
}

/// Run the oscrec binary and capture (stdout, stderr, exit code).
pub fn run_oscrec(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_oscrec"))
        .args(args)
        .env("OSCREC_CONFIG", isolated_config())
        .env_remove("OSCREC_LOG")
        .output()
        .expect("Failed to execute oscrec");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Poll `condition` until it holds or `timeout` passes.
pub fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    condition()
}
