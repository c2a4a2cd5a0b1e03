// Upload store: ordered CV uploads per job, written through to disk on
// every mutation. The JSON slot holds structured metadata only; file bytes
// live in memory for the session and do not survive a restart.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::JobKey;
use crate::error::{Result, ShortlistError};

/// One uploaded CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadEntry {
    pub file_name: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    /// Raw bytes, present only for uploads made this session.
    #[serde(skip)]
    pub content: Option<Vec<u8>>,
}

impl UploadEntry {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            size: content.len() as u64,
            uploaded_at: Utc::now(),
            content: Some(content),
        }
    }
}

/// Mapping from job to its ordered upload list.
///
/// Every mutation rewrites the whole mapping to the backing file; the file
/// is read exactly once, at startup.
#[derive(Debug, Default)]
pub struct UploadStore {
    entries: BTreeMap<String, Vec<UploadEntry>>,
    path: Option<PathBuf>,
}

impl UploadStore {
    /// Store with no backing file. Mutations stay in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the persisted mapping from `path`. An absent file yields an
    /// empty store; corrupt data also yields an empty store, with the parse
    /// failure returned as a warning for the caller to log. Never fatal.
    pub fn load(path: PathBuf) -> (Self, Option<String>) {
        match read_entries(&path) {
            Ok(entries) => (
                Self {
                    entries,
                    path: Some(path),
                },
                None,
            ),
            Err(err) => (
                Self {
                    entries: BTreeMap::new(),
                    path: Some(path),
                },
                Some(format!("Could not read upload store: {err}")),
            ),
        }
    }

    /// Append files to a job's list, creating the list on first upload.
    /// No deduplication and no reordering: files land at the end in the
    /// order they were picked.
    pub fn add(&mut self, job: &JobKey, files: Vec<UploadEntry>) -> Result<()> {
        if files.is_empty() {
            return Ok(());
        }
        self.entries
            .entry(job.storage_key())
            .or_default()
            .extend(files);
        self.persist()
    }

    /// Remove the entry at `index`, shifting later entries down.
    /// An out-of-range index or unknown job is a silent no-op.
    pub fn remove(&mut self, job: &JobKey, index: usize) -> Result<()> {
        let Some(list) = self.entries.get_mut(&job.storage_key()) else {
            return Ok(());
        };
        if index >= list.len() {
            return Ok(());
        }
        list.remove(index);
        self.persist()
    }

    /// Uploads for a job, oldest first.
    pub fn uploads(&self, job: &JobKey) -> &[UploadEntry] {
        self.entries
            .get(&job.storage_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of jobs that have at least one upload.
    pub fn job_count(&self) -> usize {
        self.entries.values().filter(|list| !list.is_empty()).count()
    }

    /// Write the bytes of the entry at `index` into `dir`, named after the
    /// original file. Errors if the bytes did not survive a restart.
    pub fn export(&self, job: &JobKey, index: usize, dir: &Path) -> Result<PathBuf> {
        let entry = self
            .uploads(job)
            .get(index)
            .ok_or(ShortlistError::NoSuchUpload { index })?;
        let content = entry
            .content
            .as_deref()
            .ok_or_else(|| ShortlistError::ContentUnavailable {
                file_name: entry.file_name.clone(),
            })?;

        let target = dir.join(&entry.file_name);
        fs::write(&target, content)?;
        Ok(target)
    }

    /// Write the whole mapping through to the backing file, atomically
    /// via a temp file. In-memory stores skip this.
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;

        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

/// Read and parse the persisted mapping. An absent file is an empty mapping.
fn read_entries(path: &Path) -> Result<BTreeMap<String, Vec<UploadEntry>>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn job() -> JobKey {
        JobKey::new(1, "Full stack developer")
    }

    fn entry(name: &str) -> UploadEntry {
        UploadEntry::new(name, format!("%PDF {name}").into_bytes())
    }

    fn names(store: &UploadStore, job: &JobKey) -> Vec<String> {
        store
            .uploads(job)
            .iter()
            .map(|e| e.file_name.clone())
            .collect()
    }

    #[test]
    fn test_add_then_reload_keeps_names_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uploads.json");

        let (mut store, warning) = UploadStore::load(path.clone());
        assert!(warning.is_none());
        store
            .add(&job(), vec![entry("a.pdf"), entry("b.pdf")])
            .unwrap();

        let (reloaded, warning) = UploadStore::load(path);
        assert!(warning.is_none());
        assert_eq!(names(&reloaded, &job()), ["a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_content_does_not_survive_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uploads.json");

        let (mut store, _) = UploadStore::load(path.clone());
        store.add(&job(), vec![entry("a.pdf")]).unwrap();
        assert!(store.uploads(&job())[0].content.is_some());

        let (reloaded, _) = UploadStore::load(path);
        let entry = &reloaded.uploads(&job())[0];
        assert!(entry.content.is_none());
        assert_eq!(entry.size, "%PDF a.pdf".len() as u64);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut store = UploadStore::in_memory();
        store
            .add(&job(), vec![entry("a.pdf"), entry("b.pdf"), entry("c.pdf")])
            .unwrap();

        store.remove(&job(), 1).unwrap();
        assert_eq!(names(&store, &job()), ["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_remove_out_of_range_is_a_no_op() {
        let mut store = UploadStore::in_memory();
        store.add(&job(), vec![entry("a.pdf")]).unwrap();

        store.remove(&job(), 1).unwrap();
        store.remove(&job(), usize::MAX).unwrap();
        store.remove(&JobKey::new(9, "Unknown"), 0).unwrap();
        assert_eq!(names(&store, &job()), ["a.pdf"]);
    }

    #[test]
    fn test_add_empty_pick_is_a_no_op() {
        let mut store = UploadStore::in_memory();
        store.add(&job(), Vec::new()).unwrap();
        assert_eq!(store.job_count(), 0);
    }

    #[test]
    fn test_load_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uploads.json");

        let (mut store, _) = UploadStore::load(path.clone());
        let other = JobKey::new(2, "Data Scientist");
        store.add(&job(), vec![entry("a.pdf")]).unwrap();
        store.add(&other, vec![entry("b.pdf")]).unwrap();

        let (first, _) = UploadStore::load(path.clone());
        let (second, _) = UploadStore::load(path);
        assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uploads.json");
        fs::write(&path, "{not json").unwrap();

        let (store, warning) = UploadStore::load(path.clone());
        assert_eq!(store.job_count(), 0);
        assert!(warning.is_some());

        // A recovered store still persists new uploads
        let mut store = store;
        store.add(&job(), vec![entry("a.pdf")]).unwrap();
        let (reloaded, warning) = UploadStore::load(path);
        assert!(warning.is_none());
        assert_eq!(names(&reloaded, &job()), ["a.pdf"]);
    }

    #[test]
    fn test_same_title_different_companies_stay_separate() {
        let mut store = UploadStore::in_memory();
        let at_one = JobKey::new(1, "Full stack developer");
        let at_two = JobKey::new(2, "Full stack developer");

        store.add(&at_one, vec![entry("a.pdf")]).unwrap();
        store.add(&at_two, vec![entry("b.pdf")]).unwrap();

        assert_eq!(names(&store, &at_one), ["a.pdf"]);
        assert_eq!(names(&store, &at_two), ["b.pdf"]);
        assert_eq!(store.job_count(), 2);
    }

    #[test]
    fn test_export_writes_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = UploadStore::in_memory();
        store.add(&job(), vec![entry("a.pdf")]).unwrap();

        let target = store.export(&job(), 0, temp_dir.path()).unwrap();
        assert_eq!(fs::read(target).unwrap(), b"%PDF a.pdf");
    }

    #[test]
    fn test_export_without_content_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("uploads.json");

        let (mut store, _) = UploadStore::load(path.clone());
        store.add(&job(), vec![entry("a.pdf")]).unwrap();

        let (reloaded, _) = UploadStore::load(path);
        let err = reloaded.export(&job(), 0, temp_dir.path()).unwrap_err();
        assert!(matches!(err, ShortlistError::ContentUnavailable { .. }));

        let err = reloaded.export(&job(), 5, temp_dir.path()).unwrap_err();
        assert!(matches!(err, ShortlistError::NoSuchUpload { index: 5 }));
    }
}
