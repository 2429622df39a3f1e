// src/watchset/mod.rs

//! Watch-set computation.
//!
//! This module is responsible for:
//! - Mapping every resolved unit to the directory its dependency-declaration
//!   artifact lives in.
//! - Walking up through every ancestor of those directories.
//! - Fanning the resulting directory set out across all levels.
//! - (Optionally) filtering the candidates down to directories that exist,
//!   via an injected [`ExistenceCheck`](crate::fs::ExistenceCheck).
//!
//! It does **not** watch anything itself; it only produces the path list the
//! external watcher/cache layer registers as build dependencies.

pub mod ancestry;
pub mod builder;

pub use builder::{DEPS_TECH, build_watch_set, build_watch_set_existing};
