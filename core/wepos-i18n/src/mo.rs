//! GNU gettext machine-object (`.mo`) reader.
//!
//! Layout: a 28-byte header (magic, revision, string count, offset of the
//! originals table, offset of the translations table, hash size, hash
//! offset) followed by two tables of `(length, offset)` pairs pointing into
//! the string area. Either byte order is accepted, detected from the magic.

use crate::error::{I18nError, I18nResult};
use crate::translations::{CONTEXT_SEPARATOR, TranslationEntry, Translations};
use std::path::Path;
use tracing::debug;

/// Magic number in the file's own byte order.
pub const MO_MAGIC: u32 = 0x950412de;

const HEADER_LEN: usize = 28;

#[derive(Clone, Copy)]
enum ByteOrder {
    Little,
    Big,
}

struct Reader<'a> {
    bytes: &'a [u8],
    order: ByteOrder,
}

impl<'a> Reader<'a> {
    fn u32_at(&self, offset: usize, what: &'static str) -> I18nResult<u32> {
        let raw: [u8; 4] = offset
            .checked_add(4)
            .and_then(|end| self.bytes.get(offset..end))
            .and_then(|s| s.try_into().ok())
            .ok_or(I18nError::Truncated { what, offset })?;
        Ok(match self.order {
            ByteOrder::Little => u32::from_le_bytes(raw),
            ByteOrder::Big => u32::from_be_bytes(raw),
        })
    }

    /// Reads entry `i` of the `(length, offset)` table starting at `table`.
    fn string_at(&self, table: usize, i: usize, what: &'static str) -> I18nResult<String> {
        let slot = table + i * 8;
        let len = self.u32_at(slot, what)? as usize;
        let offset = self.u32_at(slot + 4, what)? as usize;
        let bytes = offset
            .checked_add(len)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(I18nError::Truncated { what, offset })?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Parses the contents of a `.mo` file.
pub fn parse_mo(bytes: &[u8]) -> I18nResult<Translations> {
    if bytes.len() < HEADER_LEN {
        return Err(I18nError::Truncated {
            what: "header",
            offset: bytes.len(),
        });
    }

    let le = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let order = if le == MO_MAGIC {
        ByteOrder::Little
    } else if le.swap_bytes() == MO_MAGIC {
        ByteOrder::Big
    } else {
        return Err(I18nError::BadMagic(le));
    };
    let reader = Reader { bytes, order };

    let revision = reader.u32_at(4, "revision")?;
    if revision >> 16 != 0 {
        return Err(I18nError::UnsupportedRevision(revision));
    }
    let count = reader.u32_at(8, "string count")? as usize;
    let originals = reader.u32_at(12, "originals table")? as usize;
    let translated = reader.u32_at(16, "translations table")? as usize;

    let mut catalog = Translations::new();
    for i in 0..count {
        let original = reader.string_at(originals, i, "original string")?;
        let translation = reader.string_at(translated, i, "translated string")?;

        if original.is_empty() {
            catalog.set_headers_from_block(&translation);
            continue;
        }
        catalog.add_entry(entry_from_pair(&original, &translation));
    }

    debug!(entries = catalog.len(), "Parsed MO catalog");
    Ok(catalog)
}

/// Reads and parses a `.mo` file from disk.
pub fn read_mo_file(path: &Path) -> I18nResult<Translations> {
    let bytes = std::fs::read(path)?;
    parse_mo(&bytes)
}

fn entry_from_pair(original: &str, translation: &str) -> TranslationEntry {
    let (context, rest) = match original.split_once(CONTEXT_SEPARATOR) {
        Some((ctx, rest)) => (Some(ctx.to_string()), rest),
        None => (None, original),
    };
    let (singular, plural) = match rest.split_once('\0') {
        Some((s, p)) => (s.to_string(), Some(p.to_string())),
        None => (rest.to_string(), None),
    };
    TranslationEntry {
        context,
        singular,
        plural,
        translations: translation.split('\0').map(str::to_string).collect(),
    }
}
