//! GPX waypoint file backed mark store.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info, warn};

use super::error::{StoreError, StoreResult};
use super::MarkStore;
use crate::models::{Mark, Symbol};

/// When the waypoint file is re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReloadPolicy {
    /// Read and parse the file on every load.
    #[default]
    Always,
    /// Re-parse only when the file's modification time changes.
    OnChange,
}

impl FromStr for ReloadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ReloadPolicy::Always),
            "on-change" | "on_change" | "onchange" => Ok(ReloadPolicy::OnChange),
            other => Err(format!("Unknown reload policy: {}", other)),
        }
    }
}

#[derive(Debug)]
struct CachedMarks {
    modified: SystemTime,
    marks: Arc<Vec<Mark>>,
}

/// Mark store reading `<wpt>` entries from a GPX 1.x file.
#[derive(Debug)]
pub struct GpxFileStore {
    path: PathBuf,
    policy: ReloadPolicy,
    cache: Mutex<Option<CachedMarks>>,
}

impl GpxFileStore {
    pub fn new(path: impl Into<PathBuf>, policy: ReloadPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> ReloadPolicy {
        self.policy
    }

    async fn read_and_parse(&self) -> StoreResult<Vec<Mark>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        let marks = parse_waypoints(&bytes, &self.path)?;
        debug!(path = %self.path.display(), count = marks.len(), "Parsed waypoint file");
        Ok(marks)
    }

    async fn load_if_changed(&self) -> StoreResult<Vec<Mark>> {
        let modified = tokio::fs::metadata(&self.path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(|e| StoreError::io(&self.path, e))?;

        let cached = self
            .cache
            .lock()
            .as_ref()
            .filter(|c| c.modified == modified)
            .map(|c| Arc::clone(&c.marks));
        if let Some(marks) = cached {
            return Ok(marks.as_ref().clone());
        }

        let marks = self.read_and_parse().await?;
        info!(path = %self.path.display(), count = marks.len(), "Waypoint file changed, cache refreshed");
        *self.cache.lock() = Some(CachedMarks {
            modified,
            marks: Arc::new(marks.clone()),
        });
        Ok(marks)
    }
}

#[async_trait]
impl MarkStore for GpxFileStore {
    async fn load(&self) -> StoreResult<Vec<Mark>> {
        match self.policy {
            ReloadPolicy::Always => self.read_and_parse().await,
            ReloadPolicy::OnChange => self.load_if_changed().await,
        }
    }

    fn describe(&self) -> String {
        format!("gpx:{}", self.path().display())
    }
}

/// Parse GPX waypoints into marks, in document order.
///
/// Waypoints without a name are skipped. Names are trimmed and must be
/// unique; a repeated name fails the whole parse.
pub fn parse_waypoints(bytes: &[u8], path: &Path) -> StoreResult<Vec<Mark>> {
    let document = gpx::read(bytes).map_err(|e| StoreError::parse(path, e.to_string()))?;

    let mut seen = HashSet::new();
    let mut marks = Vec::with_capacity(document.waypoints.len());

    for (index, waypoint) in document.waypoints.iter().enumerate() {
        let id = trimmed(waypoint.name.as_deref());
        if id.is_empty() {
            warn!(path = %path.display(), index, "Skipping waypoint without a name");
            continue;
        }
        if !seen.insert(id.clone()) {
            return Err(StoreError::DuplicateMark {
                path: path.to_path_buf(),
                id,
            });
        }

        let point = waypoint.point();
        marks.push(Mark {
            id,
            description: trimmed(waypoint.description.as_deref()),
            symbol: Symbol::from(trimmed(waypoint.symbol.as_deref())),
            lat: point.y(),
            lon: point.x(),
        });
    }

    Ok(marks)
}

fn trimmed(text: Option<&str>) -> String {
    text.map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="markcalc tests" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="50.771200" lon="-1.154000">
    <name> 1A </name>
    <desc>North Ryde Middle</desc>
    <sym>R</sym>
  </wpt>
  <wpt lat="50.779000" lon="-1.179000">
    <name>2B</name>
    <sym>YBY</sym>
  </wpt>
  <wpt lat="50.700000" lon="-1.200000">
    <desc>No name here</desc>
  </wpt>
</gpx>
"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_waypoints() {
        let marks = parse_waypoints(SAMPLE.as_bytes(), Path::new("sample.gpx")).unwrap();

        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].id, "1A");
        assert_eq!(marks[0].description, "North Ryde Middle");
        assert_eq!(marks[0].symbol, Symbol::Red);
        assert!((marks[0].lat - 50.7712).abs() < 1e-9);
        assert!((marks[0].lon + 1.154).abs() < 1e-9);

        assert_eq!(marks[1].id, "2B");
        assert_eq!(marks[1].description, "");
        assert_eq!(marks[1].symbol, Symbol::Other("YBY".to_string()));
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let doc = r#"<?xml version="1.0"?>
<gpx version="1.1" creator="t" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="50.0" lon="-1.0"><name>1A</name></wpt>
  <wpt lat="50.1" lon="-1.1"><name>1A</name></wpt>
</gpx>"#;
        let err = parse_waypoints(doc.as_bytes(), Path::new("dup.gpx")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateMark { ref id, .. } if id == "1A"));
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        let err = parse_waypoints(b"<gpx version=\"1.1\"><wpt", Path::new("bad.gpx")).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_reload_policy_from_str() {
        assert_eq!("always".parse::<ReloadPolicy>().unwrap(), ReloadPolicy::Always);
        assert_eq!("on-change".parse::<ReloadPolicy>().unwrap(), ReloadPolicy::OnChange);
        assert!("sometimes".parse::<ReloadPolicy>().is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = write_temp(SAMPLE);
        let store = GpxFileStore::new(file.path(), ReloadPolicy::Always);

        let marks = store.load().await.unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(store.path(), file.path());
        assert_eq!(store.policy(), ReloadPolicy::Always);
        assert_eq!(store.describe(), format!("gpx:{}", file.path().display()));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = GpxFileStore::new(dir.path().join("absent.gpx"), ReloadPolicy::OnChange);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn test_on_change_serves_cached_marks() {
        let file = write_temp(SAMPLE);
        let store = GpxFileStore::new(file.path(), ReloadPolicy::OnChange);

        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();
        assert_eq!(first, second);
        assert!(store.cache.lock().is_some());
    }
}
