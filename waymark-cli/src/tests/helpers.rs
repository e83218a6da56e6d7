//! Test helpers for writing venue documents and driving commands.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::TempDir;

/// Serialises tests that read or write the process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets an environment variable for the guard's lifetime and restores the
/// previous value on drop. Holds the environment lock throughout.
pub(super) struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    #[expect(unsafe_code, reason = "ENV_LOCK serialises environment access in tests")]
    pub(super) fn set(key: &'static str, value: &str) -> Self {
        let lock = lock_env();
        let previous = env::var_os(key);
        // SAFETY: every test touching the environment holds ENV_LOCK.
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key,
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    #[expect(unsafe_code, reason = "ENV_LOCK is still held by this guard")]
    fn drop(&mut self) {
        // SAFETY: the guard still holds ENV_LOCK.
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// A 300 by 400 venue: the greedy route from Entrance A walks 1000 ft.
pub(super) const SAMPLE_VENUE: &str = r#"{
  "stores": [
    {
      "id": "gap", "name": "Gap", "zone": "Fashion Ave", "category": "Apparel",
      "x": 300, "y": 0,
      "coupons": [
        {"title": "20% off denim", "desc": "Jeans only.", "code": "DENIM20", "expires": "2026-12-31"}
      ]
    },
    {"id": "nike", "name": "Nike", "zone": "Oasis", "category": "Sportswear", "x": 300, "y": 400},
    {"id": "lego", "name": "LEGO", "zone": "Colonnade", "category": "Toys", "x": 0, "y": 400}
  ],
  "starts": [
    {"id": "Entrance B", "name": "Entrance B (East)", "x": 600, "y": 0},
    {"id": "Entrance A", "name": "Entrance A (West)", "x": 0, "y": 0}
  ],
  "corridors": []
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}

/// A temporary directory holding `venue.json`.
pub(super) struct VenueFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl VenueFile {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("venue.json");
        write_utf8(&path, contents.as_bytes());
        Self { _dir: dir, path }
    }

    pub(super) fn sample() -> Self {
        Self::with_contents(SAMPLE_VENUE)
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Parse `args` (without the binary name) and run the command, capturing
/// stdout.
pub(super) fn run_cli(args: &[&str]) -> (Result<(), CliError>, String) {
    let _env = lock_env();
    let argv = std::iter::once("waymark").chain(args.iter().copied());
    let mut stdout = Vec::new();
    let outcome = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| dispatch(cli.command, &mut stdout));
    let output = String::from_utf8(stdout).expect("stdout utf-8");
    (outcome, output)
}
