//! Mathematical typesetting table.

use super::{raw_tag, Bytes, RawFont, RawTag};

pub const MATH: RawTag = raw_tag(b"MATH");

/// One of the named constants in the `MathConstants` subtable.
///
/// The discriminant is the constant's byte offset from the start of the
/// subtable, which lets [`MathConstants::get`] do a single table read
/// instead of branching.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u16)]
pub enum MathConstant {
    ScriptPercentScaleDown = 0,
    ScriptScriptPercentScaleDown = 2,
    DelimitedSubFormulaMinHeight = 4,
    DisplayOperatorMinHeight = 6,
    MathLeading = 8,
    AxisHeight = 12,
    AccentBaseHeight = 16,
    FlattenedAccentBaseHeight = 20,
    SubscriptShiftDown = 24,
    SubscriptTopMax = 28,
    SubscriptBaselineDropMin = 32,
    SuperscriptShiftUp = 36,
    SuperscriptShiftUpCramped = 40,
    SuperscriptBottomMin = 44,
    SuperscriptBaselineDropMax = 48,
    SubSuperscriptGapMin = 52,
    SuperscriptBottomMaxWithSubscript = 56,
    SpaceAfterScript = 60,
    UpperLimitGapMin = 64,
    UpperLimitBaselineRiseMin = 68,
    LowerLimitGapMin = 72,
    LowerLimitBaselineDropMin = 76,
    StackTopShiftUp = 80,
    StackTopDisplayStyleShiftUp = 84,
    StackBottomShiftDown = 88,
    StackBottomDisplayStyleShiftDown = 92,
    StackGapMin = 96,
    StackDisplayStyleGapMin = 100,
    StretchStackTopShiftUp = 104,
    StretchStackBottomShiftDown = 108,
    StretchStackGapAboveMin = 112,
    StretchStackGapBelowMin = 116,
    FractionNumeratorShiftUp = 120,
    FractionNumeratorDisplayStyleShiftUp = 124,
    FractionDenominatorShiftDown = 128,
    FractionDenominatorDisplayStyleShiftDown = 132,
    FractionNumeratorGapMin = 136,
    FractionNumDisplayStyleGapMin = 140,
    FractionRuleThickness = 144,
    FractionDenominatorGapMin = 148,
    FractionDenomDisplayStyleGapMin = 152,
    SkewedFractionHorizontalGap = 156,
    SkewedFractionVerticalGap = 160,
    OverbarVerticalGap = 164,
    OverbarRuleThickness = 168,
    OverbarExtraAscender = 172,
    UnderbarVerticalGap = 176,
    UnderbarRuleThickness = 180,
    UnderbarExtraDescender = 184,
    RadicalVerticalGap = 188,
    RadicalDisplayStyleVerticalGap = 192,
    RadicalRuleThickness = 196,
    RadicalExtraAscender = 200,
    RadicalKernBeforeDegree = 204,
    RadicalKernAfterDegree = 208,
    RadicalDegreeBottomRaisePercent = 212,
}

/// Constant geometric values used by a math layout engine, e.g. TeX-style
/// fraction and radical placement.
#[derive(Copy, Clone)]
pub struct MathConstants<'a>(Bytes<'a>);

impl<'a> MathConstants<'a> {
    /// Returns the value for the specified constant. `ScriptPercentScaleDown`,
    /// `ScriptScriptPercentScaleDown` and `RadicalDegreeBottomRaisePercent`
    /// are plain `int16`s; every other entry is a `MathValueRecord` whose
    /// device-table adjustment is ignored, matching the rest of this table
    /// model's "literal value" policy.
    pub fn get(&self, constant: MathConstant) -> i16 {
        self.0.read_or_default(constant as u16 as usize)
    }
}

/// Mathematical typesetting table.
#[derive(Copy, Clone)]
pub struct Math<'a>(Bytes<'a>);

impl<'a> Math<'a> {
    /// Creates a `MATH` table wrapping the specified data.
    pub fn new(data: &'a [u8]) -> Self {
        Self(Bytes::new(data))
    }

    /// Creates a `MATH` table from the specified font. Returns `None` if
    /// the font does not contain a `MATH` table.
    pub fn from_font(font: impl RawFont<'a>) -> Option<Self> {
        Some(Self::new(font.table_data(MATH)?))
    }

    /// Returns the underlying bytes of the table.
    pub fn data(&self) -> &'a [u8] {
        self.0.data()
    }

    /// Returns the major version of the table. Set to 1.
    pub fn major_version(&self) -> u16 {
        self.0.read(0).unwrap_or(0)
    }

    /// Returns the minor version of the table. Set to 0.
    pub fn minor_version(&self) -> u16 {
        self.0.read(2).unwrap_or(0)
    }

    /// Returns the constants subtable.
    pub fn constants(&self) -> Option<MathConstants<'a>> {
        let offset = self.0.read::<u16>(4)?;
        if offset == 0 {
            return None;
        }
        Some(MathConstants(Bytes::with_offset(self.0.data(), offset as usize)?))
    }

    /// Returns the glyph info subtable (italics correction, top accent
    /// attachment, extended shape flags, kerning).
    pub fn glyph_info(&self) -> Option<MathGlyphInfo<'a>> {
        let offset = self.0.read::<u16>(6)?;
        if offset == 0 {
            return None;
        }
        Some(MathGlyphInfo(Bytes::with_offset(self.0.data(), offset as usize)?))
    }

    /// Returns the glyph variants subtable (stretchy delimiter construction).
    pub fn variants(&self) -> Option<MathVariants<'a>> {
        let offset = self.0.read::<u16>(8)?;
        if offset == 0 {
            return None;
        }
        Some(MathVariants(Bytes::with_offset(self.0.data(), offset as usize)?))
    }
}

fn coverage_glyph_value(b: &Bytes, coverage: usize, values: usize, glyph_id: u16) -> Option<i16> {
    let index = super::at::coverage(b, coverage as u32, glyph_id)?;
    b.read(values + index as usize * 2)
}

/// Per-glyph mathematical metadata.
#[derive(Copy, Clone)]
pub struct MathGlyphInfo<'a>(Bytes<'a>);

impl<'a> MathGlyphInfo<'a> {
    /// Returns the italics correction (the horizontal distance to skew a
    /// following superscript by) for the specified glyph.
    pub fn italics_correction(&self, glyph_id: u16) -> Option<i16> {
        let offset = self.0.read::<u16>(0)? as usize;
        if offset == 0 {
            return None;
        }
        let coverage = offset + self.0.read::<u16>(offset)? as usize;
        let count = self.0.read::<u16>(offset + 2)?;
        let index = super::at::coverage(&self.0, coverage as u32, glyph_id)?;
        if index >= count {
            return None;
        }
        coverage_glyph_value(&self.0, coverage, offset + 4, glyph_id)
    }

    /// Returns the horizontal position, relative to the glyph's origin, at
    /// which an accent placed over this glyph should be centered.
    pub fn top_accent_attachment(&self, glyph_id: u16) -> Option<i16> {
        let offset = self.0.read::<u16>(2)? as usize;
        if offset == 0 {
            return None;
        }
        let coverage = offset + self.0.read::<u16>(offset)? as usize;
        let count = self.0.read::<u16>(offset + 2)?;
        let index = super::at::coverage(&self.0, coverage as u32, glyph_id)?;
        if index >= count {
            return None;
        }
        coverage_glyph_value(&self.0, coverage, offset + 4, glyph_id)
    }

    /// Returns true if the specified glyph is a variant shape that should
    /// not be used as the base glyph for a stretchy construction.
    pub fn is_extended_shape(&self, glyph_id: u16) -> bool {
        let Some(offset) = self.0.read::<u16>(4) else {
            return false;
        };
        if offset == 0 {
            return false;
        }
        super::at::coverage(&self.0, offset as u32, glyph_id).is_some()
    }
}

/// One entry of a stretchy-construction variant list: a glyph and the
/// advance (width for horizontal assemblies, height for vertical ones) it
/// provides.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MathGlyphVariant {
    pub glyph_id: u16,
    pub advance: u16,
}

/// One part of a [`GlyphAssembly`]: a piece that can be repeated
/// (`is_extender`) to stretch a construction to an arbitrary size.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GlyphPart {
    pub glyph_id: u16,
    pub start_connector_length: u16,
    pub end_connector_length: u16,
    pub full_advance: u16,
    pub is_extender: bool,
}

/// The sequence of [`GlyphPart`]s that assemble into a stretched version of
/// a base glyph.
#[derive(Copy, Clone)]
pub struct GlyphAssembly<'a> {
    data: Bytes<'a>,
    base: usize,
}

impl<'a> GlyphAssembly<'a> {
    /// Returns the italics correction to apply to the assembled glyph.
    pub fn italics_correction(&self) -> i16 {
        self.data.read_or_default(self.base)
    }

    /// Returns the number of parts in the assembly.
    pub fn len(&self) -> u16 {
        self.data.read_or_default::<u16>(self.base + 4)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the part at the specified index, in order from the glyph's
    /// starting edge.
    pub fn get(&self, index: u16) -> Option<GlyphPart> {
        if index >= self.len() {
            return None;
        }
        let rec = self.base + 6 + index as usize * 10;
        let flags: u16 = self.data.read(rec + 8)?;
        Some(GlyphPart {
            glyph_id: self.data.read(rec)?,
            start_connector_length: self.data.read(rec + 2)?,
            end_connector_length: self.data.read(rec + 4)?,
            full_advance: self.data.read(rec + 6)?,
            is_extender: flags & 0x0001 != 0,
        })
    }
}

/// Glyph construction for one base glyph: a discrete ladder of
/// pre-rendered variants plus, optionally, a part assembly for sizes
/// beyond the largest variant.
#[derive(Copy, Clone)]
pub struct GlyphConstruction<'a> {
    data: Bytes<'a>,
    base: usize,
}

impl<'a> GlyphConstruction<'a> {
    /// Returns the part assembly for this construction, if present.
    pub fn assembly(&self) -> Option<GlyphAssembly<'a>> {
        let offset = self.data.read::<u16>(self.base)?;
        if offset == 0 {
            return None;
        }
        Some(GlyphAssembly {
            data: self.data,
            base: self.base + offset as usize,
        })
    }

    /// Returns the number of discrete variants, ordered from smallest to
    /// largest advance.
    pub fn variant_count(&self) -> u16 {
        self.data.read_or_default(self.base + 2)
    }

    /// Returns the variant at the specified index.
    pub fn variant(&self, index: u16) -> Option<MathGlyphVariant> {
        if index >= self.variant_count() {
            return None;
        }
        let rec = self.base + 4 + index as usize * 4;
        Some(MathGlyphVariant {
            glyph_id: self.data.read(rec)?,
            advance: self.data.read(rec + 2)?,
        })
    }

    /// Returns the smallest variant whose advance is at least
    /// `min_advance`, falling back to the largest variant and finally to
    /// the part assembly.
    pub fn best_fit(&self, min_advance: u16) -> Option<MathGlyphVariant> {
        let count = self.variant_count();
        (0..count)
            .filter_map(|i| self.variant(i))
            .find(|v| v.advance >= min_advance)
            .or_else(|| (count > 0).then(|| self.variant(count - 1)).flatten())
    }
}

/// Stretchy delimiter construction data.
#[derive(Copy, Clone)]
pub struct MathVariants<'a>(Bytes<'a>);

impl<'a> MathVariants<'a> {
    /// Minimum overlap between connected parts in a glyph assembly, in
    /// font design units.
    pub fn min_connector_overlap(&self) -> u16 {
        self.0.read_or_default(0)
    }

    /// Returns the vertical construction for the specified base glyph, if
    /// the glyph has one.
    pub fn vertical_construction(&self, glyph_id: u16) -> Option<GlyphConstruction<'a>> {
        self.construction(2, 6, glyph_id)
    }

    /// Returns the horizontal construction for the specified base glyph, if
    /// the glyph has one.
    pub fn horizontal_construction(&self, glyph_id: u16) -> Option<GlyphConstruction<'a>> {
        self.construction(4, 6, glyph_id)
    }

    fn construction(
        &self,
        coverage_field: usize,
        counts_base: usize,
        glyph_id: u16,
    ) -> Option<GlyphConstruction<'a>> {
        let coverage_offset = self.0.read::<u16>(coverage_field)? as usize;
        if coverage_offset == 0 {
            return None;
        }
        let index = super::at::coverage(&self.0, coverage_offset as u32, glyph_id)?;
        let vert_count: u16 = self.0.read(counts_base)?;
        let is_vertical = coverage_field == 2;
        let (count, rec_index) = if is_vertical {
            (vert_count, index)
        } else {
            let horiz_count: u16 = self.0.read(counts_base + 2)?;
            (horiz_count, index)
        };
        if index >= count {
            return None;
        }
        // Vertical records are listed first, then horizontal.
        let base_index = if is_vertical {
            rec_index
        } else {
            vert_count + rec_index
        };
        let rec = counts_base + 4 + base_index as usize * 2;
        let offset = self.0.read::<u16>(rec)?;
        if offset == 0 {
            return None;
        }
        Some(GlyphConstruction {
            data: self.0,
            base: offset as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_math_table_has_no_subtables() {
        let data = [0u8; 10];
        let math = Math::new(&data);
        assert!(math.constants().is_none());
        assert!(math.glyph_info().is_none());
        assert!(math.variants().is_none());
    }
}
