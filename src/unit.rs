// src/unit.rs

//! The BEM unit data model.
//!
//! A unit identifies one buildable entity: a block, an element of a block,
//! or a modifier of either. Units arrive from the external dependency
//! resolver in their declaration shape, e.g.:
//!
//! ```json
//! { "block": "img", "mod": { "name": "lightbox", "val": true } }
//! ```
//!
//! Identity is the ordered tuple (block, elem?, mod.name?, mod.val?); two
//! units with identical tuples are interchangeable for path purposes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BemWatchError, Result};

/// A single resolved BEM unit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BemUnit {
    /// Block name. Required; an empty string is rejected at validation so
    /// that declarations missing the field deserialize and then fail with
    /// a pointed error instead of an opaque serde one.
    #[serde(default)]
    pub block: String,

    /// Element name, if this unit names an element of `block`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elem: Option<String>,

    /// Modifier, if this unit names a modifier of the block or element.
    #[serde(rename = "mod", default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<BemModifier>,
}

/// A modifier descriptor: a name plus a boolean-or-valued variation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BemModifier {
    pub name: String,
    pub val: ModVal,
}

/// A modifier value: boolean `true`, a string, or a number.
///
/// `false` and the empty string are structurally invalid; see
/// [`BemUnit::validate`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModVal {
    Flag(bool),
    Num(i64),
    Str(String),
}

impl From<bool> for ModVal {
    fn from(v: bool) -> Self {
        ModVal::Flag(v)
    }
}

impl From<i64> for ModVal {
    fn from(v: i64) -> Self {
        ModVal::Num(v)
    }
}

impl From<&str> for ModVal {
    fn from(v: &str) -> Self {
        ModVal::Str(v.to_string())
    }
}

impl fmt::Display for ModVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModVal::Flag(v) => write!(f, "{v}"),
            ModVal::Num(n) => write!(f, "{n}"),
            ModVal::Str(s) => write!(f, "{s}"),
        }
    }
}

impl BemUnit {
    /// A plain block unit.
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            elem: None,
            modifier: None,
        }
    }

    /// Add an element name.
    pub fn with_elem(mut self, elem: impl Into<String>) -> Self {
        self.elem = Some(elem.into());
        self
    }

    /// Add a modifier.
    pub fn with_mod(mut self, name: impl Into<String>, val: impl Into<ModVal>) -> Self {
        self.modifier = Some(BemModifier {
            name: name.into(),
            val: val.into(),
        });
        self
    }

    /// Check the structural constraints of the naming scheme:
    ///
    /// - `block` must be non-empty (so an element or modifier cannot exist
    ///   without its block),
    /// - `elem` must be non-empty when present,
    /// - `mod.name` must be non-empty when present,
    /// - `mod.val` must be `true`, a non-empty string, or a number.
    pub fn validate(&self) -> Result<()> {
        if self.block.is_empty() {
            return Err(self.invalid("`block` must be a non-empty identifier"));
        }
        if let Some(elem) = &self.elem {
            if elem.is_empty() {
                return Err(self.invalid("`elem` must be a non-empty identifier"));
            }
        }
        if let Some(m) = &self.modifier {
            if m.name.is_empty() {
                return Err(self.invalid("`mod.name` must be a non-empty identifier"));
            }
            match &m.val {
                ModVal::Flag(false) => {
                    return Err(
                        self.invalid("`mod.val` must be `true`, a non-empty string or a number")
                    );
                }
                ModVal::Str(s) if s.is_empty() => {
                    return Err(self.invalid("`mod.val` must not be an empty string"));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> BemWatchError {
        BemWatchError::InvalidUnit {
            unit: format!("{self:?}"),
            reason: reason.to_string(),
        }
    }
}

/// The canonical entity name, which doubles as the file-name stem:
/// `block`, `block__elem`, `block_mod`, `block__elem_mod_val`, ...
///
/// A boolean `true` value contributes no `_val` suffix.
impl fmt::Display for BemUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)?;
        if let Some(elem) = &self.elem {
            write!(f, "__{elem}")?;
        }
        if let Some(m) = &self.modifier {
            write!(f, "_{}", m.name)?;
            if !matches!(m.val, ModVal::Flag(true)) {
                write!(f, "_{}", m.val)?;
            }
        }
        Ok(())
    }
}
