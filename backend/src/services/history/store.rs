//! SQLite persistence for scan history.
//!
//! Each call opens its own connection to the database file; SQLite's file
//! locking serializes concurrent writers. Records are only ever inserted and
//! selected, never updated or deleted.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use common::model::analysis::Severity;
use common::model::scan::{NewScan, ScanRecord};
use rusqlite::{params, Connection, TransactionBehavior};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Number of records returned by the history read path.
pub const HISTORY_PAGE_SIZE: usize = 5;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS scan_history (
    id          TEXT PRIMARY KEY,
    disease     TEXT NOT NULL,
    severity    TEXT NOT NULL,
    description TEXT NOT NULL,
    cure        TEXT NOT NULL DEFAULT '[]',
    image_data  TEXT NOT NULL,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS scan_history_created_at ON scan_history (created_at);";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("invalid cure list: {0}")]
    Cure(#[from] serde_json::Error),
    #[error("invalid stored severity: {0}")]
    Severity(String),
    #[error("invalid stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

/// Column values as stored, before validation.
struct StoredRow {
    id: String,
    disease: String,
    severity: String,
    description: String,
    cure: String,
    image_data: String,
    created_at: String,
}

impl StoredRow {
    fn into_record(self) -> Result<ScanRecord, StoreError> {
        let severity =
            Severity::parse(&self.severity).ok_or(StoreError::Severity(self.severity))?;
        Ok(ScanRecord {
            id: self.id,
            disease: self.disease,
            severity,
            description: self.description,
            cure: serde_json::from_str(&self.cure)?,
            image_data: self.image_data,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Fixed-width RFC 3339 so that text order equals time order.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, StoreError> {
    Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
}

/// Creation time for a new record: `now` at microsecond precision, moved one
/// microsecond past `latest` when the clock has not advanced beyond it.
fn next_timestamp(now: DateTime<Utc>, latest: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = now.trunc_subsecs(6);
    match latest {
        Some(latest) if now <= latest => latest + Duration::microseconds(1),
        _ => now,
    }
}

impl HistoryStore {
    /// Opens (creating if needed) the history database at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        store.connect()?.execute_batch(SCHEMA)?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Appends one scan, assigning its id and creation time. Creation times
    /// are strictly increasing across the store.
    pub fn insert(&self, scan: &NewScan) -> Result<ScanRecord, StoreError> {
        let mut conn = self.connect()?;
        // Immediate: the latest timestamp must not change before our insert.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let latest: Option<String> =
            tx.query_row("SELECT MAX(created_at) FROM scan_history", [], |row| row.get(0))?;
        let latest = latest.as_deref().map(parse_timestamp).transpose()?;

        let record = ScanRecord {
            id: Uuid::new_v4().to_string(),
            disease: scan.analysis.disease.clone(),
            severity: scan.analysis.severity,
            description: scan.analysis.description.clone(),
            cure: scan.analysis.cure.clone(),
            image_data: scan.image_data.clone(),
            created_at: next_timestamp(Utc::now(), latest),
        };

        tx.execute(
            "INSERT INTO scan_history (id, disease, severity, description, cure, image_data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &record.id,
                &record.disease,
                record.severity.as_str(),
                &record.description,
                serde_json::to_string(&record.cure)?,
                &record.image_data,
                format_timestamp(&record.created_at),
            ],
        )?;
        tx.commit()?;

        Ok(record)
    }

    /// Returns at most `limit` records, most recent first. `rowid` orders rows
    /// written before creation times were made unique.
    pub fn recent(&self, limit: usize) -> Result<Vec<ScanRecord>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, disease, severity, description, cure, image_data, created_at
             FROM scan_history
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                disease: row.get(1)?,
                severity: row.get(2)?,
                description: row.get(3)?,
                cure: row.get(4)?,
                image_data: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?;

        let records = rows
            .map(|row| row.map_err(StoreError::from).and_then(StoredRow::into_record))
            .collect::<Result<Vec<_>, _>>();
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::analysis::AnalysisResult;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("history.sqlite")).unwrap();
        (dir, store)
    }

    fn scan(disease: &str, severity: Severity) -> NewScan {
        NewScan {
            analysis: AnalysisResult {
                disease: disease.to_string(),
                severity,
                description: format!("{} detected.", disease),
                cure: vec!["Consult local agricultural expert".to_string()],
            },
            image_data: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        }
    }

    #[test]
    fn empty_store_reads_nothing() {
        let (_dir, store) = temp_store();
        assert!(store.recent(HISTORY_PAGE_SIZE).unwrap().is_empty());
    }

    #[test]
    fn same_scan_twice_gives_two_records() {
        let (_dir, store) = temp_store();
        let first = store.insert(&scan("Leaf Rust", Severity::Mild)).unwrap();
        let second = store.insert(&scan("Leaf Rust", Severity::Mild)).unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(first.created_at, second.created_at);
        assert_eq!(store.recent(HISTORY_PAGE_SIZE).unwrap(), vec![second, first]);
    }

    #[test]
    fn creation_times_never_repeat_or_go_backwards() {
        let at = Utc::now().trunc_subsecs(6);
        assert_eq!(next_timestamp(at, None), at);
        assert_eq!(next_timestamp(at, Some(at)), at + Duration::microseconds(1));
        assert_eq!(
            next_timestamp(at - Duration::seconds(2), Some(at)),
            at + Duration::microseconds(1)
        );
        assert_eq!(next_timestamp(at + Duration::seconds(1), Some(at)), at + Duration::seconds(1));
    }

    #[test]
    fn rapid_inserts_get_strictly_increasing_times() {
        let (_dir, store) = temp_store();
        let records: Vec<ScanRecord> = (0..20)
            .map(|_| store.insert(&scan("Leaf Rust", Severity::Mild)).unwrap())
            .collect();

        assert!(records.windows(2).all(|w| w[0].created_at < w[1].created_at));
    }

    #[test]
    fn six_inserts_read_back_five_newest_first() {
        let (_dir, store) = temp_store();
        let inserted: Vec<ScanRecord> = (0..6)
            .map(|i| store.insert(&scan(&format!("Scan {}", i), Severity::Healthy)).unwrap())
            .collect();

        let recent = store.recent(HISTORY_PAGE_SIZE).unwrap();
        assert_eq!(recent.len(), 5);

        let expected: Vec<&str> = inserted[1..].iter().rev().map(|r| r.id.as_str()).collect();
        let actual: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(actual, expected);
        assert!(recent.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[test]
    fn cure_steps_survive_the_round_trip() {
        let (_dir, store) = temp_store();
        let mut new_scan = scan("Stem Rust", Severity::Severe);
        new_scan.analysis.cure = vec!["Spray fungicide".to_string(), "Burn residue".to_string()];
        let record = store.insert(&new_scan).unwrap();

        let read = store.recent(1).unwrap();
        assert_eq!(read, vec![record]);
        assert_eq!(read[0].analysis(), new_scan.analysis);
    }

    #[test]
    fn reopening_keeps_existing_records() {
        let (dir, store) = temp_store();
        store.insert(&scan("Septoria Leaf Blotch", Severity::Mild)).unwrap();

        let reopened = HistoryStore::open(store.path().to_path_buf()).unwrap();
        assert_eq!(reopened.recent(HISTORY_PAGE_SIZE).unwrap().len(), 1);
        drop(dir);
    }

    #[test]
    fn corrupt_severity_is_reported() {
        let (_dir, store) = temp_store();
        store.insert(&scan("Leaf Rust", Severity::Mild)).unwrap();
        Connection::open(store.path())
            .unwrap()
            .execute("UPDATE scan_history SET severity = 'moderate'", [])
            .unwrap();

        assert!(matches!(
            store.recent(HISTORY_PAGE_SIZE),
            Err(StoreError::Severity(value)) if value == "moderate"
        ));
    }
}
