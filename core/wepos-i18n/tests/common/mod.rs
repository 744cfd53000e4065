//! Shared fixtures for translation tests.

#![allow(dead_code)]

use std::path::Path;

/// Encodes `(original, translation)` pairs as a little-endian `.mo` file.
/// An empty original carries the header block.
pub fn build_mo(pairs: &[(&str, &str)]) -> Vec<u8> {
    let n = pairs.len();
    let originals_at = 28;
    let translations_at = originals_at + n * 8;
    let mut strings_at = translations_at + n * 8;

    let mut out = Vec::new();
    for word in [0x950412deu32, 0, n as u32, originals_at as u32, translations_at as u32, 0, 0] {
        out.extend_from_slice(&word.to_le_bytes());
    }

    let mut table = Vec::new();
    let mut data = Vec::new();
    for column in [0usize, 1] {
        for pair in pairs {
            let s = if column == 0 { pair.0 } else { pair.1 };
            table.extend_from_slice(&(s.len() as u32).to_le_bytes());
            table.extend_from_slice(&(strings_at as u32).to_le_bytes());
            data.extend_from_slice(s.as_bytes());
            data.push(0);
            strings_at += s.len() + 1;
        }
    }
    out.extend_from_slice(&table);
    out.extend_from_slice(&data);
    out
}

/// Writes a `.mo` file built from `pairs` to `dir/<stem>.mo`.
pub fn write_mo(dir: &Path, stem: &str, pairs: &[(&str, &str)]) {
    std::fs::write(dir.join(format!("{stem}.mo")), build_mo(pairs)).unwrap();
}

pub const FR_HEADER: &str = "Language: fr_FR\nPlural-Forms: nplurals=2; plural=(n > 1);\n";
