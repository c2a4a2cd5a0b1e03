// File picker modal state.
// Browses one directory and multi-selects files to upload. The `.pdf`
// filter mirrors the advisory picker hint: it narrows the listing but is
// not enforcement, and can be toggled off.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::widgets::ListState;

use crate::error::Result;
use crate::store::UploadEntry;

/// One pickable file.
#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// State of the open picker modal.
#[derive(Debug)]
pub struct PickerState {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    /// Indices marked for upload with Space.
    pub marked: HashSet<usize>,
    pub list_state: ListState,
    /// When set, only `.pdf` files are listed.
    pub pdf_only: bool,
}

impl PickerState {
    /// Open the picker over `dir` with the PDF filter on.
    pub fn open(dir: PathBuf) -> Result<Self> {
        let mut picker = Self {
            dir,
            entries: Vec::new(),
            marked: HashSet::new(),
            list_state: ListState::default(),
            pdf_only: true,
        };
        picker.refresh()?;
        Ok(picker)
    }

    /// Re-scan the directory with the current filter. Clears marks.
    pub fn refresh(&mut self) -> Result<()> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }
            if self.pdf_only && !is_pdf(&path) {
                continue;
            }
            entries.push(PickerEntry {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                size: dir_entry.metadata().map(|m| m.len()).unwrap_or(0),
                path,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        self.entries = entries;
        self.marked.clear();
        self.list_state
            .select(if self.entries.is_empty() { None } else { Some(0) });
        Ok(())
    }

    /// Toggle the advisory PDF filter and re-scan.
    pub fn toggle_filter(&mut self) -> Result<()> {
        self.pdf_only = !self.pdf_only;
        self.refresh()
    }

    /// Mark or unmark the highlighted file.
    pub fn toggle_marked(&mut self) {
        if let Some(i) = self.list_state.selected() {
            if !self.marked.remove(&i) {
                self.marked.insert(i);
            }
        }
    }

    /// Select the next file in the list.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous file in the list.
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Read the marked files (or the highlighted one when nothing is
    /// marked) in listing order. Unreadable files are skipped and reported
    /// as warnings alongside the successful reads.
    pub fn pick(&self) -> (Vec<UploadEntry>, Vec<String>) {
        let mut indices: Vec<usize> = if self.marked.is_empty() {
            self.list_state.selected().into_iter().collect()
        } else {
            self.marked.iter().copied().collect()
        };
        indices.sort_unstable();

        let mut picked = Vec::new();
        let mut warnings = Vec::new();
        for index in indices {
            let Some(entry) = self.entries.get(index) else {
                continue;
            };
            match fs::read(&entry.path) {
                Ok(bytes) => picked.push(UploadEntry::new(entry.name.clone(), bytes)),
                Err(err) => warnings.push(format!("Could not read {}: {err}", entry.name)),
            }
        }
        (picked, warnings)
    }
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with_files() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.pdf"), b"%PDF b").unwrap();
        fs::write(temp_dir.path().join("a.pdf"), b"%PDF a").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"plain text").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        temp_dir
    }

    #[test]
    fn test_open_lists_only_pdfs_sorted() {
        let temp_dir = dir_with_files();
        let picker = PickerState::open(temp_dir.path().to_path_buf()).unwrap();

        let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf"]);
        assert_eq!(picker.list_state.selected(), Some(0));
    }

    #[test]
    fn test_filter_is_advisory() {
        let temp_dir = dir_with_files();
        let mut picker = PickerState::open(temp_dir.path().to_path_buf()).unwrap();

        picker.toggle_filter().unwrap();
        let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf", "notes.txt"]);
    }

    #[test]
    fn test_pick_marked_in_listing_order() {
        let temp_dir = dir_with_files();
        let mut picker = PickerState::open(temp_dir.path().to_path_buf()).unwrap();

        picker.select_next(); // b.pdf
        picker.toggle_marked();
        picker.select_prev(); // a.pdf
        picker.toggle_marked();

        let (picked, warnings) = picker.pick();
        assert!(warnings.is_empty());
        let names: Vec<&str> = picked.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf"]);
        assert_eq!(picked[0].content.as_deref(), Some(b"%PDF a".as_slice()));
    }

    #[test]
    fn test_pick_falls_back_to_highlighted() {
        let temp_dir = dir_with_files();
        let picker = PickerState::open(temp_dir.path().to_path_buf()).unwrap();

        let (picked, _) = picker.pick();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].file_name, "a.pdf");
    }

    #[test]
    fn test_toggle_marked_twice_unmarks() {
        let temp_dir = dir_with_files();
        let mut picker = PickerState::open(temp_dir.path().to_path_buf()).unwrap();

        picker.toggle_marked();
        assert_eq!(picker.marked.len(), 1);
        picker.toggle_marked();
        assert!(picker.marked.is_empty());
    }
}
