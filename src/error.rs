//! Error taxonomy for the top-level font-bytes contract.
//!
//! Everything below this module stays fail-soft: missing or malformed
//! optional tables resolve to `None` and shaping degrades gracefully.
//! This module exists only for the boundary where a caller hands us raw
//! bytes and needs to know *why* we could not produce a [`FontRef`].

use thiserror::Error;

use super::font::{FontDataRef, FontRef};
use super::internal::{raw_tag, RawFont, RawTag};

const REQUIRED_TABLES: &[(RawTag, &str)] = &[
    (raw_tag(b"cmap"), "cmap"),
    (raw_tag(b"head"), "head"),
    (raw_tag(b"hhea"), "hhea"),
    (raw_tag(b"hmtx"), "hmtx"),
    (raw_tag(b"maxp"), "maxp"),
];

/// Errors surfaced when opening a font or decoding one of its tables.
#[derive(Debug, Error)]
pub enum FontError {
    /// The byte slice is not a recognizable `sfnt`, `OTTO`/`true` tag, or
    /// `ttcf` collection header.
    #[error("data does not begin with a recognized sfnt, OTTO, or ttcf tag")]
    InvalidSfnt,

    /// The requested font index does not exist in a collection.
    #[error("font index {0} is out of range")]
    FontIndexOutOfRange(usize),

    /// A table required for shaping to proceed at all is absent from the
    /// table directory.
    #[error("missing required table `{0}`")]
    MissingRequiredTable(&'static str),

    /// A table was located in the directory but its length does not allow
    /// the fixed-size header to be decoded.
    #[error("table `{0}` is truncated")]
    TruncatedTable(&'static str),

    /// A table declares a version or format this crate does not recognize.
    #[error("table `{tag}` uses unsupported format {format}")]
    UnsupportedTableFormat { tag: &'static str, format: u16 },
}

/// Opens the font at `index` within `data`, validating the sfnt/ttcf header
/// and the presence of the tables shaping cannot proceed without.
///
/// Optional tables (`GSUB`, `GPOS`, `morx`, `BASE`, `MATH`, `gasp`, ...) are
/// not validated here -- their absence is a normal, fail-soft condition
/// handled by the shaping plan, not an error.
pub fn open(data: &[u8], index: usize) -> Result<FontRef<'_>, FontError> {
    let fonts = FontDataRef::new(data).ok_or(FontError::InvalidSfnt)?;
    let font = fonts
        .get(index)
        .ok_or(FontError::FontIndexOutOfRange(index))?;
    for (tag, name) in REQUIRED_TABLES {
        let (start, end) = font
            .table_range(*tag)
            .ok_or(FontError::MissingRequiredTable(name))?;
        if end < start {
            return Err(FontError::TruncatedTable(name));
        }
    }
    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_font_bytes() {
        let data = b"not a font";
        assert!(matches!(open(data, 0), Err(FontError::InvalidSfnt)));
    }

    #[test]
    fn rejects_empty_slice() {
        assert!(matches!(open(&[], 0), Err(FontError::InvalidSfnt)));
    }
}
