// src/fs/mod.rs

//! The existence-check capability.
//!
//! Filtering the watch set down to directories that exist is the only
//! filesystem access in this crate, so it is modelled as an injected trait
//! rather than a hard dependency on `std::fs`: production code uses
//! [`FsExistenceCheck`], tests use [`mock::MockExistenceCheck`].

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::task::JoinSet;
use tracing::debug;

pub mod mock;

/// Abstract batch probe: which of the candidate paths exist as directories?
///
/// The probe is the computation's only suspension point. Results reflect a
/// best-effort snapshot; probes racing concurrent filesystem mutation are
/// resolved by the next build trigger, not here.
pub trait ExistenceCheck: Send + Sync {
    /// Report, for every candidate, whether it exists as a directory.
    ///
    /// A missing path is a `false` entry, not an error; errors are reserved
    /// for probes that could not be answered (I/O failure, permissions).
    fn dirs_exist(
        &self,
        candidates: &[PathBuf],
    ) -> impl Future<Output = Result<HashMap<PathBuf, bool>>> + Send;
}

/// Implementation backed by the real filesystem.
///
/// Probes are independent and I/O-bound, so they are fanned out
/// concurrently and aggregated before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExistenceCheck;

impl ExistenceCheck for FsExistenceCheck {
    fn dirs_exist(
        &self,
        candidates: &[PathBuf],
    ) -> impl Future<Output = Result<HashMap<PathBuf, bool>>> + Send {
        let paths: Vec<PathBuf> = candidates.to_vec();

        async move {
            let mut join = JoinSet::new();
            for path in paths {
                join.spawn(async move {
                    match tokio::fs::metadata(&path).await {
                        Ok(meta) => Ok((path, meta.is_dir())),
                        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok((path, false)),
                        Err(e) => Err(anyhow::Error::new(e)
                            .context(format!("probing directory {}", path.display()))),
                    }
                });
            }

            let mut out = HashMap::new();
            while let Some(res) = join.join_next().await {
                let (path, exists) = res.context("existence probe task panicked")??;
                out.insert(path, exists);
            }

            debug!(probed = out.len(), "directory existence probe complete");
            Ok(out)
        }
    }
}
