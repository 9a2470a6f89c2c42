//! Grid-fitting and scan-conversion procedure table.

use super::{raw_tag, Bytes, RawFont, RawTag};

pub const GASP: RawTag = raw_tag(b"gasp");

/// Grid-fit and anti-alias behavior flags for a [`GaspRange`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GaspBehavior(pub u16);

impl GaspBehavior {
    /// Use gridfitting.
    pub fn gridfit(self) -> bool {
        self.0 & 0x0001 != 0
    }

    /// Use grayscale rendering.
    pub fn dogray(self) -> bool {
        self.0 & 0x0002 != 0
    }

    /// Gridfit for stem width symmetry (version 1).
    pub fn symmetric_gridfit(self) -> bool {
        self.0 & 0x0004 != 0
    }

    /// Use smoothing along multiple axes with symmetric rendering (version 1).
    pub fn symmetric_smoothing(self) -> bool {
        self.0 & 0x0008 != 0
    }
}

/// A single entry in the `gasp` table's range list.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GaspRange {
    /// Upper limit, in ppem, of the range covered by this entry. The last
    /// entry in a table should specify 0xFFFF.
    pub range_max_ppem: u16,
    pub behavior: GaspBehavior,
}

/// Grid-fitting and scan-conversion procedure table.
#[derive(Copy, Clone)]
pub struct Gasp<'a>(Bytes<'a>);

impl<'a> Gasp<'a> {
    /// Creates a `gasp` table wrapping the specified data.
    pub fn new(data: &'a [u8]) -> Self {
        Self(Bytes::new(data))
    }

    /// Creates a `gasp` table from the specified font. Returns `None` if
    /// the font does not contain a `gasp` table.
    pub fn from_font(font: impl RawFont<'a>) -> Option<Self> {
        Some(Self::new(font.table_data(GASP)?))
    }

    /// Returns the underlying bytes of the table.
    pub fn data(&self) -> &'a [u8] {
        self.0.data()
    }

    /// Returns the version of the table. Version 1 adds the symmetric
    /// gridfitting and smoothing behavior flags.
    pub fn version(&self) -> u16 {
        self.0.read(0).unwrap_or(0)
    }

    /// Returns the number of ranges in the table.
    pub fn num_ranges(&self) -> u16 {
        self.0.read(2).unwrap_or(0)
    }

    /// Returns the range at the specified index.
    pub fn range(&self, index: u16) -> Option<GaspRange> {
        if index >= self.num_ranges() {
            return None;
        }
        let base = 4 + index as usize * 4;
        Some(GaspRange {
            range_max_ppem: self.0.read(base)?,
            behavior: GaspBehavior(self.0.read(base + 2)?),
        })
    }

    /// Returns an iterator over the ranges in the table, in ascending
    /// `range_max_ppem` order.
    pub fn ranges(&self) -> impl Iterator<Item = GaspRange> + 'a {
        let table = *self;
        (0..table.num_ranges()).filter_map(move |i| table.range(i))
    }

    /// Returns the behavior flags that apply at the specified ppem, taking
    /// the first range whose `range_max_ppem` is greater than or equal to
    /// `ppem`. If `ppem` exceeds every range, returns the last range's
    /// behavior; if the table has no ranges at all, returns
    /// `GridFit|DoGray`.
    pub fn behavior(&self, ppem: u16) -> GaspBehavior {
        let mut last = None;
        for range in self.ranges() {
            if ppem <= range.range_max_ppem {
                return range.behavior;
            }
            last = Some(range.behavior);
        }
        last.unwrap_or(GaspBehavior(0x0003))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<u8> {
        let mut data = vec![0u8; 4 + 4 * 2];
        data[0..2].copy_from_slice(&1u16.to_be_bytes());
        data[2..4].copy_from_slice(&2u16.to_be_bytes());
        data[4..6].copy_from_slice(&8u16.to_be_bytes());
        data[6..8].copy_from_slice(&0x0003u16.to_be_bytes());
        data[8..10].copy_from_slice(&0xFFFFu16.to_be_bytes());
        data[10..12].copy_from_slice(&0x000Fu16.to_be_bytes());
        data
    }

    #[test]
    fn behavior_picks_first_matching_range() {
        let data = table();
        let gasp = Gasp::new(&data);
        assert_eq!(gasp.num_ranges(), 2);
        let low = gasp.behavior(4);
        assert!(low.gridfit());
        assert!(low.dogray());
        assert!(!low.symmetric_gridfit());
        let high = gasp.behavior(72);
        assert!(high.symmetric_gridfit());
        assert!(high.symmetric_smoothing());
    }

    #[test]
    fn behavior_falls_back_to_last_range_past_its_max_ppem() {
        let mut data = table();
        data[8..10].copy_from_slice(&20u16.to_be_bytes());
        let gasp = Gasp::new(&data);
        let behavior = gasp.behavior(72);
        assert!(behavior.symmetric_gridfit());
        assert!(behavior.symmetric_smoothing());
    }

    #[test]
    fn behavior_defaults_when_table_has_no_ranges() {
        let mut data = table();
        data[2..4].copy_from_slice(&0u16.to_be_bytes());
        let gasp = Gasp::new(&data);
        let behavior = gasp.behavior(12);
        assert!(behavior.gridfit());
        assert!(behavior.dogray());
        assert!(!behavior.symmetric_gridfit());
    }
}
