// font_introspector was retired from https://github.com/dfrg/swash
// which is licensed under MIT license

//! Character properties and the contract functions that back the
//! shaping engine's segmentation and normalization passes.

use super::compose::{self, Decompose};
pub use super::unicode_data::{Category, ClusterBreak, JoiningType, Script, WordBreak};

/// Returns the general category of a character.
pub fn general_category(ch: char) -> Category {
    super::unicode_data::category(ch as u32)
}

/// Returns the canonical combining class of a character.
pub fn combining_class(ch: char) -> u8 {
    super::unicode_data::combining_class(ch as u32)
}

/// Returns the Unicode script of a character.
pub fn script(ch: char) -> Script {
    super::unicode_data::script(ch as u32)
}

/// Returns the grapheme cluster break class of a character, as
/// defined by UAX #29.
pub fn grapheme_break(ch: char) -> ClusterBreak {
    super::unicode_data::cluster_break(ch as u32)
}

/// Returns the word break class of a character, as defined by
/// UAX #29.
pub fn word_break(ch: char) -> WordBreak {
    super::unicode_data::word_break(ch as u32)
}

/// Unicode properties of a character, bit packed for efficient
/// storage in a cluster parser token stream.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Properties(u64);

const BOUNDARY_SHIFT: u32 = 32;
const BOUNDARY_MASK: u64 = 0b11;

impl Properties {
    #[inline]
    fn codepoint(self) -> u32 {
        self.0 as u32
    }

    /// Returns the general category.
    pub fn category(self) -> Category {
        super::unicode_data::category(self.codepoint())
    }

    /// Returns the Unicode script.
    pub fn script(self) -> Script {
        super::unicode_data::script(self.codepoint())
    }

    /// Returns the grapheme cluster break class.
    pub fn cluster_break(self) -> ClusterBreak {
        super::unicode_data::cluster_break(self.codepoint())
    }

    /// Returns the word break class.
    pub fn word_break(self) -> WordBreak {
        super::unicode_data::word_break(self.codepoint())
    }

    /// Returns the Arabic cursive joining type.
    pub fn joining_type(self) -> JoiningType {
        super::unicode_data::joining_type(self.codepoint())
    }

    /// Returns the canonical combining class.
    pub fn combining_class(self) -> u8 {
        super::unicode_data::combining_class(self.codepoint())
    }

    /// Returns true if the character carries the Extended_Pictographic
    /// property (used to detect emoji sequences).
    pub fn is_emoji(self) -> bool {
        super::unicode_data::extended_pictographic(self.codepoint())
    }

    /// Returns true if the character is a variation selector
    /// (U+180B..=U+180F, U+FE00..=U+FE0F or U+E0100..=U+E01EF).
    pub fn is_variation_selector(self) -> bool {
        matches!(
            self.codepoint(),
            0x180B..=0x180F | 0xFE00..=0xFE0F | 0xE0100..=0xE01EF
        )
    }

    /// Returns true if the character is ignorable for the purposes of
    /// glyph mapping (default-ignorable control and format
    /// characters, excluding ZWJ/ZWNJ which still affect shaping).
    pub fn is_ignorable(self) -> bool {
        match self.codepoint() {
            0x200C | 0x200D => false,
            0x00AD | 0x034F | 0x115F..=0x1160 | 0x180B..=0x180F | 0xFE00..=0xFE0F => true,
            _ => matches!(self.category(), Category::Format) || self.codepoint() == 0x200B,
        }
    }

    /// Returns true if the character should be considered when
    /// mapping codepoints to nominal glyph identifiers.
    pub fn contributes_to_shaping(self) -> bool {
        !matches!(self.category(), Category::Control | Category::Cs)
    }

    /// Returns the grapheme cluster break class paired with the
    /// emoji flag, as consumed by the simple cluster parser.
    pub fn cluster_class(self) -> (ClusterBreak, bool) {
        (self.cluster_break(), self.is_emoji())
    }

    /// Returns the Myanmar cluster class paired with the emoji flag.
    pub(crate) fn myanmar_class(self) -> (super::unicode_data::MyanmarClass, bool) {
        (
            super::unicode_data::myanmar_class(self.codepoint()),
            self.is_emoji(),
        )
    }

    /// Returns the USE cluster class, a flag indicating the character
    /// requires special Khmer-style decomposition, and the emoji
    /// flag.
    pub(crate) fn use_class(self) -> (super::unicode_data::UseClass, bool, bool) {
        let (class, needs_decomp) = super::unicode_data::use_class(self.codepoint());
        (class, needs_decomp, self.is_emoji())
    }

    /// Returns the raw boundary bits attached to this value.
    pub(crate) fn boundary(self) -> u16 {
        ((self.0 >> BOUNDARY_SHIFT) & BOUNDARY_MASK) as u16
    }

    /// Returns a copy of these properties with the given boundary
    /// bits attached.
    pub(crate) fn with_boundary(self, boundary: u16) -> Self {
        let cleared = self.0 & !(BOUNDARY_MASK << BOUNDARY_SHIFT);
        Self(cleared | (((boundary as u64) & BOUNDARY_MASK) << BOUNDARY_SHIFT))
    }
}

impl From<char> for Properties {
    fn from(ch: char) -> Self {
        Self(ch as u32 as u64)
    }
}

/// Extension trait providing Unicode properties, decomposition and
/// composition for `char`.
pub trait Codepoint {
    /// Returns the Unicode properties for this character.
    fn properties(self) -> Properties;

    /// Returns the canonical decomposition of this character.
    fn decompose(self) -> Decompose;

    /// Returns the compatibility decomposition of this character.
    fn decompose_compat(self) -> Decompose;

    /// Returns the canonical composition of a pair of characters, if
    /// one exists.
    fn compose(a: char, b: char) -> Option<char>;
}

impl Codepoint for char {
    fn properties(self) -> Properties {
        Properties::from(self)
    }

    fn decompose(self) -> Decompose {
        compose::decompose(self)
    }

    fn decompose_compat(self) -> Decompose {
        compose::decompose_compat(self)
    }

    fn compose(a: char, b: char) -> Option<char> {
        compose::compose_pair(a, b)
    }
}
