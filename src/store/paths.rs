// Storage path utilities.
// Locates the durable slot for the upload mapping in the user data dir.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Result, ShortlistError};

/// Get the base data directory (~/.local/share/shortlist on Linux).
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shortlist").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the persisted upload mapping.
pub fn uploads_path() -> Result<PathBuf> {
    data_dir()
        .map(|dir| dir.join("uploads.json"))
        .ok_or(ShortlistError::MissingDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploads_path_file_name() {
        let path = uploads_path().unwrap();
        assert!(path.ends_with("uploads.json"));
    }
}
