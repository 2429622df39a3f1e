#![allow(dead_code)]

use bemwatch::{BemUnit, ModVal};

/// Shorthand for a plain block unit.
pub fn block(name: &str) -> BemUnit {
    BemUnit::new(name)
}

/// Shorthand for an element unit.
pub fn elem(block: &str, elem: &str) -> BemUnit {
    BemUnit::new(block).with_elem(elem)
}

/// Shorthand for a boolean modifier unit.
pub fn bool_mod(block: &str, name: &str) -> BemUnit {
    BemUnit::new(block).with_mod(name, true)
}

/// Shorthand for a valued modifier unit.
pub fn val_mod(block: &str, name: &str, val: impl Into<ModVal>) -> BemUnit {
    BemUnit::new(block).with_mod(name, val)
}

/// A resolved declaration covering every unit shape: block, element,
/// boolean modifier, valued modifier. Mirrors the kind of list the external
/// resolver hands over.
pub fn sample_decl() -> Vec<BemUnit> {
    vec![
        block("page"),
        elem("page", "script"),
        bool_mod("img", "lightbox"),
    ]
}

/// A larger synthetic declaration for performance-oriented tests.
pub fn synthetic_decl(blocks: usize) -> Vec<BemUnit> {
    let mut units = Vec::with_capacity(blocks * 4);
    for i in 0..blocks {
        let name = format!("block-{i}");
        units.push(block(&name));
        units.push(elem(&name, "inner"));
        units.push(bool_mod(&name, "visible"));
        units.push(val_mod(&name, "theme", "dark"));
    }
    units
}
