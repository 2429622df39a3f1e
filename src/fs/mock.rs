// src/fs/mock.rs

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};

use super::ExistenceCheck;

/// In-memory existence check for tests.
///
/// Directories are registered with [`add_dir`](Self::add_dir); ancestors are
/// created implicitly, since a directory existing on a real filesystem
/// implies its parents exist. [`fail_with`](Self::fail_with) switches the
/// probe into a failure mode for error-propagation tests.
#[derive(Debug, Clone, Default)]
pub struct MockExistenceCheck {
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    fail: Arc<Mutex<Option<String>>>,
}

impl MockExistenceCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory (and, implicitly, all of its ancestors).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut cur = path.as_ref();
        loop {
            if cur.as_os_str().is_empty() {
                break;
            }
            dirs.insert(cur.to_path_buf());
            match cur.parent() {
                Some(parent) if parent != cur => cur = parent,
                _ => break,
            }
        }
    }

    /// Make every subsequent probe fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail.lock().unwrap() = Some(message.into());
    }
}

impl ExistenceCheck for MockExistenceCheck {
    fn dirs_exist(
        &self,
        candidates: &[PathBuf],
    ) -> impl Future<Output = Result<HashMap<PathBuf, bool>>> + Send {
        let paths: Vec<PathBuf> = candidates.to_vec();
        let dirs = Arc::clone(&self.dirs);
        let fail = Arc::clone(&self.fail);

        async move {
            if let Some(message) = fail.lock().unwrap().clone() {
                return Err(anyhow!(message));
            }

            let dirs = dirs.lock().unwrap();
            Ok(paths
                .into_iter()
                .map(|path| {
                    let exists = dirs.contains(&path);
                    (path, exists)
                })
                .collect())
        }
    }
}
