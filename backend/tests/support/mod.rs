#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use markcalc::store::{GpxFileStore, MarkStore, ReloadPolicy};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Path of the shared GPX fixture.
///
/// Marks: 1A (50,-1), 2A (49,-1), 3A (49,-2), 2B (49.5,-1.5),
/// 4E (0,1), 4W (0,-1).
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/marks.gpx")
}

/// Store over the shared fixture, re-read on every load.
pub fn fixture_store() -> Arc<dyn MarkStore> {
    Arc::new(GpxFileStore::new(fixture_path(), ReloadPolicy::Always))
}

/// Write `contents` to a temporary `.gpx` file that lives as long as the handle.
pub fn write_gpx(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".gpx")
        .tempfile()
        .expect("create temp gpx");
    file.write_all(contents.as_bytes()).expect("write temp gpx");
    file.flush().expect("flush temp gpx");
    file
}

/// Minimal GPX document with one `<wpt>` per `(name, lat, lon)`.
pub fn gpx_document(waypoints: &[(&str, f64, f64)]) -> String {
    let body: String = waypoints
        .iter()
        .map(|(name, lat, lon)| {
            format!(
                "  <wpt lat=\"{}\" lon=\"{}\"><name>{}</name><sym>Y</sym></wpt>\n",
                lat, lon, name
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gpx version=\"1.1\" creator=\"markcalc tests\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n{}</gpx>\n",
        body
    )
}

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
