// Upload store module.
// Persists the per-job CV upload lists as JSON in the user data dir.

#![allow(dead_code)]

pub mod paths;
pub mod store;

pub use store::{UploadEntry, UploadStore};
