#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::redundant_static_lifetimes)]
#![allow(clippy::too_many_arguments)]

//! A text-shaping engine: given a font and a run of Unicode codepoints
//! (plus script, language, direction and feature selection), produces an
//! ordered sequence of positioned glyphs.
//!
//! Start with [`error::open`] to validate a font file and obtain a
//! [`FontRef`], then drive [`shape::ShapeContext`] to run the pipeline.

#[macro_use]
mod macros;

mod attributes;
mod cache;
mod charmap;
pub mod error;
mod feature;
mod font;
mod internal;
mod metrics;
mod setting;
mod string;
mod tag;
mod variation;

pub mod shape;
pub mod text;

pub use attributes::*;
pub use cache::CacheKey;
pub use charmap::Charmap;
#[allow(unused)]
pub use feature::{Action, Feature, WritingSystem};
pub use font::{FontDataRef, FontRef, TableProvider};
pub use internal::base::{Axis as BaseAxis, Base};
pub use internal::gasp::{Gasp, GaspBehavior, GaspRange};
pub use internal::math::{
    GlyphAssembly, GlyphConstruction, GlyphPart, Math, MathConstant, MathConstants,
    MathGlyphInfo, MathGlyphVariant, MathVariants,
};
pub use metrics::{GlyphMetrics, Metrics};
pub use setting::Setting;
#[allow(unused)]
pub use string::{LocalizedString, StringId};
pub use tag::{tag_from_bytes, tag_from_str_lossy, Tag};
#[allow(unused)]
pub use variation::{Instance, Variation};

/// Collection of various iterators over metadata contained in a font.
pub mod iter {
    pub use super::feature::{Features, WritingSystems};
    #[allow(unused)]
    pub use super::font::Fonts;
    pub use super::variation::{Instances, Variations};
}

use iter::*;

/// Glyph identifier.
pub type GlyphId = u16;

/// Normalized variation coordinate in 2.14 fixed point format.
pub type NormalizedCoord = i16;

impl<'a> FontRef<'a> {
    /// Returns the primary attributes for the font.
    pub fn attributes(&self) -> Attributes {
        Attributes::from_font(self)
    }

    /// Returns an iterator over the localized strings for the font.
    pub fn localized_strings(&self) -> LocalizedStrings<'a> {
        LocalizedStrings::from_font(self)
    }

    /// Returns an iterator over the variations for the font.
    pub fn variations(&self) -> Variations<'a> {
        Variations::from_font(self)
    }

    /// Returns an iterator over the named instances for the font.
    pub fn instances(&self) -> Instances<'a> {
        Instances::from_font(self)
    }

    /// Returns an iterator over writing systems supported by the font.
    pub fn writing_systems(&self) -> WritingSystems<'a> {
        WritingSystems::from_font(self)
    }

    /// Returns an iterator over the features supported by a font.
    pub fn features(&self) -> Features<'a> {
        Features::from_font(self)
    }

    /// Returns metrics for the font and the specified normalized variation
    /// coordinates.
    pub fn metrics(&self, coords: &'a [NormalizedCoord]) -> Metrics {
        Metrics::from_font(self, coords)
    }

    /// Returns glyph metrics for the font and the specified normalized
    /// variation coordinates.
    pub fn glyph_metrics(&self, coords: &'a [NormalizedCoord]) -> GlyphMetrics<'a> {
        GlyphMetrics::from_font(self, coords)
    }

    /// Returns the character map for the font.
    pub fn charmap(&self) -> Charmap<'a> {
        Charmap::from_font(self)
    }

    /// Returns the grid-fitting and scan-conversion procedure table.
    pub fn gasp(&self) -> Option<Gasp<'a>> {
        use internal::RawFont;
        Gasp::from_font(self)
    }

    /// Returns the baseline table.
    pub fn base(&self) -> Option<Base<'a>> {
        use internal::RawFont;
        Base::from_font(self)
    }

    /// Returns the mathematical typesetting table.
    pub fn math(&self) -> Option<Math<'a>> {
        use internal::RawFont;
        Math::from_font(self)
    }

    /// Returns the table data for the specified tag.
    pub fn table(&self, tag: Tag) -> Option<&'a [u8]> {
        use internal::RawFont;
        let range = self.table_range(tag)?;
        self.data.get(range.0 as usize..range.1 as usize)
    }

    /// Returns the name for the specified glyph identifier. This is an internal
    /// function used for testing and stability is not guaranteed.
    #[doc(hidden)]
    pub fn glyph_name(&self, glyph_id: GlyphId) -> Option<&'a str> {
        use internal::head::Post;
        Post::from_font(self)?.name(glyph_id)
    }
}
