//! Baseline table.
//!
//! Surfaces the literal coordinate stored in a `BaseCoord` record. Formats
//! 2 (glyph contour point) and 3 (device table) both carry the same
//! fallback `i16` design-unit coordinate at the same offset as format 1, so
//! no distinction needs to be made between them here: callers that want
//! device- or hint-adjusted values are out of scope for this table model.

use super::{raw_tag, Bytes, RawFont, RawTag};

pub const BASE: RawTag = raw_tag(b"BASE");

/// Baseline table.
#[derive(Copy, Clone)]
pub struct Base<'a>(Bytes<'a>);

impl<'a> Base<'a> {
    /// Creates a `BASE` table wrapping the specified data.
    pub fn new(data: &'a [u8]) -> Self {
        Self(Bytes::new(data))
    }

    /// Creates a `BASE` table from the specified font. Returns `None` if
    /// the font does not contain a `BASE` table.
    pub fn from_font(font: impl RawFont<'a>) -> Option<Self> {
        Some(Self::new(font.table_data(BASE)?))
    }

    /// Returns the underlying bytes of the table.
    pub fn data(&self) -> &'a [u8] {
        self.0.data()
    }

    /// Returns the major version of the table.
    pub fn major_version(&self) -> u16 {
        self.0.read(0).unwrap_or(0)
    }

    /// Returns the minor version of the table. 0 or 1.
    pub fn minor_version(&self) -> u16 {
        self.0.read(2).unwrap_or(0)
    }

    /// Returns the horizontal axis, used when laying out horizontal text.
    pub fn horiz_axis(&self) -> Option<Axis<'a>> {
        self.axis(4)
    }

    /// Returns the vertical axis, used when laying out vertical text.
    pub fn vert_axis(&self) -> Option<Axis<'a>> {
        self.axis(6)
    }

    fn axis(&self, field_offset: usize) -> Option<Axis<'a>> {
        let offset = self.0.read::<u16>(field_offset)?;
        if offset == 0 {
            return None;
        }
        Some(Axis {
            data: self.0,
            base: offset as usize,
        })
    }
}

/// One axis (horizontal or vertical) of a [`Base`] table: a list of named
/// baseline tags plus, per script, the coordinate for each.
#[derive(Copy, Clone)]
pub struct Axis<'a> {
    data: Bytes<'a>,
    base: usize,
}

impl<'a> Axis<'a> {
    /// Returns the number of baseline tags declared for this axis.
    pub fn tag_count(&self) -> u16 {
        let Some(list) = self.tag_list_base() else {
            return 0;
        };
        self.data.read_or_default(list)
    }

    /// Returns the baseline tag at the specified index.
    pub fn tag(&self, index: u16) -> Option<RawTag> {
        let list = self.tag_list_base()?;
        if index >= self.data.read::<u16>(list)? {
            return None;
        }
        self.data.read(list + 2 + index as usize * 4)
    }

    /// Returns the index of the specified baseline tag in this axis's tag
    /// list, if declared.
    pub fn tag_index(&self, tag: RawTag) -> Option<u16> {
        (0..self.tag_count()).find(|&i| self.tag(i) == Some(tag))
    }

    fn tag_list_base(&self) -> Option<usize> {
        let offset = self.data.read::<u16>(self.base)?;
        (offset != 0).then_some(self.base + offset as usize)
    }

    fn script_list_base(&self) -> Option<usize> {
        let offset = self.data.read::<u16>(self.base + 2)?;
        (offset != 0).then_some(self.base + offset as usize)
    }

    /// Returns the baseline coordinate, in font design units, for the
    /// specified script and baseline tag. Falls back to the script's
    /// default baseline when `baseline_tag` is not declared for it.
    pub fn baseline_coord(&self, script: RawTag, baseline_tag: RawTag) -> Option<i16> {
        let script_record = self.script_record(script)?;
        let values_offset = self.data.read::<u16>(script_record)?;
        if values_offset == 0 {
            return None;
        }
        let values = script_record + values_offset as usize;
        let default_index = self.data.read::<u16>(values)?;
        let coord_count = self.data.read::<u16>(values + 2)?;
        let index = self
            .tag_index(baseline_tag)
            .filter(|&i| i < coord_count)
            .unwrap_or(default_index);
        if index >= coord_count {
            return None;
        }
        let coord_offset = self.data.read::<u16>(values + 4 + index as usize * 2)?;
        if coord_offset == 0 {
            return None;
        }
        // BaseCoordFormat 1/2/3 all place the i16 design-unit coordinate
        // immediately after the format field.
        self.data.read(values + coord_offset as usize + 2)
    }

    fn script_record(&self, script: RawTag) -> Option<usize> {
        let list = self.script_list_base()?;
        let count = self.data.read::<u16>(list)?;
        let mut l = 0;
        let mut h = count;
        while l < h {
            use core::cmp::Ordering::*;
            let i = (l + h) / 2;
            let rec = list + 2 + i as usize * 6;
            let tag = self.data.read::<u32>(rec)?;
            match script.cmp(&tag) {
                Less => h = i,
                Greater => l = i + 1,
                Equal => {
                    let offset = self.data.read::<u16>(rec + 4)?;
                    return Some(list + offset as usize);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_no_axes() {
        let data = [0u8; 8];
        let base = Base::new(&data);
        assert!(base.horiz_axis().is_none());
        assert!(base.vert_axis().is_none());
    }
}
