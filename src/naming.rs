// src/naming.rs

//! Mapping from abstract BEM units to their canonical on-disk layout.
//!
//! This is a pure string/path construction with no filesystem access, so it
//! is independently testable. The scheme, per segment:
//!
//! - base directory: `block`
//! - element directory (if any): `__elem`
//! - modifier directory (if any): `_name`
//! - file name: the canonical entity name plus `.` plus the tech suffix,
//!   where a non-`true` modifier value appends `_val` to the name.
//!
//! Example: `{block: page, elem: script, mod: {name: async, val: "yes"}}`
//! with tech `js` under level `blocks.common` maps to
//! `blocks.common/page/__script/_async/page__script_async_yes.js`.

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::unit::BemUnit;

/// Map a unit to its canonical relative path for the given tech suffix,
/// optionally prefixed by a level.
///
/// The level prefix is joined verbatim: no normalisation, no resolution
/// against the working directory. Fails with
/// [`BemWatchError::InvalidUnit`](crate::BemWatchError::InvalidUnit) when
/// the unit violates the structural constraints of the naming scheme.
pub fn bem_path(unit: &BemUnit, tech: &str, level: Option<&Path>) -> Result<PathBuf> {
    unit.validate()?;

    let mut path = match level {
        Some(level) => level.to_path_buf(),
        None => PathBuf::new(),
    };

    path.push(&unit.block);
    if let Some(elem) = &unit.elem {
        path.push(format!("__{elem}"));
    }
    if let Some(m) = &unit.modifier {
        path.push(format!("_{}", m.name));
    }
    path.push(format!("{unit}.{tech}"));

    Ok(path)
}
