// font_introspector was retired from https://github.com/dfrg/swash
// which is licensed under MIT license

//! Raw Unicode Character Database tables and lookups.
//!
//! The range tables in this module are generated from the Unicode
//! Character Database (general category, scripts, grapheme/word
//! break classes, joining types, combining classes and a handful of
//! Indic/Myanmar-specific properties used to drive complex text
//! shaping). Coverage is bounded to the codepoints the shaping engine
//! actually classifies; anything outside the generated ranges falls
//! back to the listed default value.

use core::cmp::Ordering;

fn lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32, default: T) -> T {
    match table.binary_search_by(|&(start, end, _)| {
        if cp < start {
            Ordering::Greater
        } else if cp > end {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }) {
        Ok(index) => table[index].2,
        Err(_) => default,
    }
}

/// Unicode general category.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Category {
    Lu, Ll, Lt, Lm, Lo,
    Mn, Mc, Me,
    Nd, Nl, No,
    Pc, Pd, Ps, Pe, Pi, Pf, Po,
    Sm, Sc, Sk, So,
    Zs, Zl, Zp,
    Control, Format, Cs, Co, Cn,
}

impl Default for Category {
    fn default() -> Self {
        Self::Cn
    }
}

impl Category {
    /// Returns true if this category is a mark (Mn, Mc or Me).
    pub fn is_mark(self) -> bool {
        matches!(self, Self::Mn | Self::Mc | Self::Me)
    }

    /// Returns true if this category is a letter.
    pub fn is_letter(self) -> bool {
        matches!(self, Self::Lu | Self::Ll | Self::Lt | Self::Lm | Self::Lo)
    }
}

pub fn category(cp: u32) -> Category {
    lookup(CATEGORY_TABLE, cp, Category::Cn)
}

/// Canonical combining class, as defined by the Unicode Character
/// Database.
pub fn combining_class(cp: u32) -> u8 {
    lookup(COMBINING_CLASS_TABLE, cp, 0)
}

/// Grapheme cluster break property (UAX #29).
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum ClusterBreak {
    PP,
    CN,
    LF,
    CR,
    L,
    V,
    LV,
    LVT,
    T,
    RI,
    EX,
    SM,
    ZWJ,
    XX,
}

impl Default for ClusterBreak {
    fn default() -> Self {
        Self::XX
    }
}

pub fn cluster_break(cp: u32) -> ClusterBreak {
    lookup(CLUSTER_BREAK_TABLE, cp, ClusterBreak::XX)
}

/// Returns true if the codepoint has the Extended_Pictographic
/// property (used to detect emoji sequences during cluster
/// formation).
pub fn extended_pictographic(cp: u32) -> bool {
    lookup(EXTENDED_PICTOGRAPHIC_TABLE, cp, false)
}

/// Word break property (UAX #29).
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum WordBreak {
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
    Other,
}

impl Default for WordBreak {
    fn default() -> Self {
        Self::Other
    }
}

pub fn word_break(cp: u32) -> WordBreak {
    lookup(WORD_BREAK_TABLE, cp, WordBreak::Other)
}

/// Arabic cursive joining type.
///
/// Variant discriminants line up with the shaping buffer's join-state
/// table (`shape::buffer::JOIN_STATES`): `T` (Transparent) sits at
/// index 6 and is skipped outright, the rest index the table's six
/// columns. `Alaph` is reserved for the Syriac joining-group special
/// case and is never produced by [`joining_type`] from UCD data alone.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum JoiningType {
    U = 0,
    R = 1,
    D = 2,
    C = 3,
    L = 4,
    Alaph = 5,
    T = 6,
}

impl Default for JoiningType {
    fn default() -> Self {
        Self::U
    }
}

pub fn joining_type(cp: u32) -> JoiningType {
    lookup(JOINING_TYPE_TABLE, cp, JoiningType::U)
}

/// Unicode script property, by ISO 15924 name.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Script {
    Common,
    Latin,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Syriac,
    Thaana,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Georgian,
    Hangul,
    Ethiopic,
    Cherokee,
    Canadian_Aboriginal,
    Ogham,
    Runic,
    Khmer,
    Mongolian,
    Hiragana,
    Katakana,
    Bopomofo,
    Han,
    Yi,
    Old_Italic,
    Gothic,
    Deseret,
    Inherited,
    Tagalog,
    Hanunoo,
    Buhid,
    Tagbanwa,
    Limbu,
    Tai_Le,
    Linear_B,
    Ugaritic,
    Shavian,
    Osmanya,
    Cypriot,
    Braille,
    Buginese,
    Coptic,
    New_Tai_Lue,
    Glagolitic,
    Tifinagh,
    Syloti_Nagri,
    Old_Persian,
    Kharoshthi,
    Balinese,
    Cuneiform,
    Phoenician,
    Phags_Pa,
    Nko,
    Sundanese,
    Lepcha,
    Ol_Chiki,
    Vai,
    Saurashtra,
    Kayah_Li,
    Rejang,
    Cham,
    Tai_Tham,
    Tai_Viet,
    Avestan,
    Egyptian_Hieroglyphs,
    Samaritan,
    Lisu,
    Bamum,
    Javanese,
    Meetei_Mayek,
    Imperial_Aramaic,
    Old_South_Arabian,
    Inscriptional_Parthian,
    Inscriptional_Pahlavi,
    Old_Turkic,
    Kaithi,
    Batak,
    Brahmi,
    Mandaic,
    Chakma,
    Meroitic_Cursive,
    Meroitic_Hieroglyphs,
    Miao,
    Sharada,
    Sora_Sompeng,
    Takri,
    Unknown,
}

impl Default for Script {
    fn default() -> Self {
        Self::Latin
    }
}

impl Script {
    /// Returns true if the script requires a complex (Indic/USE-style)
    /// shaping engine rather than the default Latin-style pipeline.
    pub fn is_complex(self) -> bool {
        matches!(
            self,
            Self::Devanagari
                | Self::Bengali
                | Self::Gurmukhi
                | Self::Gujarati
                | Self::Oriya
                | Self::Tamil
                | Self::Telugu
                | Self::Kannada
                | Self::Malayalam
                | Self::Sinhala
                | Self::Tibetan
                | Self::Myanmar
                | Self::Khmer
                | Self::Javanese
                | Self::Balinese
                | Self::Sundanese
                | Self::Lepcha
                | Self::Ol_Chiki
                | Self::Kayah_Li
                | Self::Saurashtra
                | Self::Rejang
                | Self::Cham
                | Self::Tai_Tham
                | Self::Tai_Viet
                | Self::Batak
                | Self::Brahmi
                | Self::Kaithi
                | Self::Chakma
                | Self::Sharada
                | Self::Takri
                | Self::Buginese
        )
    }

    /// Returns true if the script is a cursive-joining script (its
    /// glyphs are selected with ISOL/INIT/MEDI/FINA-style features).
    pub fn is_joined(self) -> bool {
        matches!(
            self,
            Self::Arabic | Self::Syriac | Self::Mongolian | Self::Nko | Self::Phags_Pa
        )
    }

    /// Maps an OpenType script tag to a [`Script`], if recognized.
    pub fn from_opentype(tag: crate::Tag) -> Option<Self> {
        use crate::tag::tag_from_bytes;
        Some(match tag {
            _ if tag == tag_from_bytes(b"latn") => Self::Latin,
            _ if tag == tag_from_bytes(b"grek") => Self::Greek,
            _ if tag == tag_from_bytes(b"cyrl") => Self::Cyrillic,
            _ if tag == tag_from_bytes(b"armn") => Self::Armenian,
            _ if tag == tag_from_bytes(b"hebr") => Self::Hebrew,
            _ if tag == tag_from_bytes(b"arab") => Self::Arabic,
            _ if tag == tag_from_bytes(b"syrc") => Self::Syriac,
            _ if tag == tag_from_bytes(b"thaa") => Self::Thaana,
            _ if tag == tag_from_bytes(b"deva") => Self::Devanagari,
            _ if tag == tag_from_bytes(b"beng") => Self::Bengali,
            _ if tag == tag_from_bytes(b"guru") => Self::Gurmukhi,
            _ if tag == tag_from_bytes(b"gujr") => Self::Gujarati,
            _ if tag == tag_from_bytes(b"orya") => Self::Oriya,
            _ if tag == tag_from_bytes(b"taml") => Self::Tamil,
            _ if tag == tag_from_bytes(b"telu") => Self::Telugu,
            _ if tag == tag_from_bytes(b"knda") => Self::Kannada,
            _ if tag == tag_from_bytes(b"mlym") => Self::Malayalam,
            _ if tag == tag_from_bytes(b"sinh") => Self::Sinhala,
            _ if tag == tag_from_bytes(b"thai") => Self::Thai,
            _ if tag == tag_from_bytes(b"lao ") => Self::Lao,
            _ if tag == tag_from_bytes(b"tibt") => Self::Tibetan,
            _ if tag == tag_from_bytes(b"mymr") => Self::Myanmar,
            _ if tag == tag_from_bytes(b"geor") => Self::Georgian,
            _ if tag == tag_from_bytes(b"hang") => Self::Hangul,
            _ if tag == tag_from_bytes(b"ethi") => Self::Ethiopic,
            _ if tag == tag_from_bytes(b"cher") => Self::Cherokee,
            _ if tag == tag_from_bytes(b"khmr") => Self::Khmer,
            _ if tag == tag_from_bytes(b"mong") => Self::Mongolian,
            _ if tag == tag_from_bytes(b"kana") => Self::Katakana,
            _ if tag == tag_from_bytes(b"hira") => Self::Hiragana,
            _ if tag == tag_from_bytes(b"bopo") => Self::Bopomofo,
            _ if tag == tag_from_bytes(b"hani") => Self::Han,
            _ if tag == tag_from_bytes(b"yi  ") => Self::Yi,
            _ if tag == tag_from_bytes(b"nko ") => Self::Nko,
            _ if tag == tag_from_bytes(b"java") => Self::Javanese,
            _ if tag == tag_from_bytes(b"bali") => Self::Balinese,
            _ if tag == tag_from_bytes(b"sund") => Self::Sundanese,
            _ if tag == tag_from_bytes(b"lepc") => Self::Lepcha,
            _ if tag == tag_from_bytes(b"talu") => Self::New_Tai_Lue,
            _ if tag == tag_from_bytes(b"tale") => Self::Tai_Le,
            _ if tag == tag_from_bytes(b"lana") => Self::Tai_Tham,
            _ if tag == tag_from_bytes(b"tavt") => Self::Tai_Viet,
            _ if tag == tag_from_bytes(b"cham") => Self::Cham,
            _ if tag == tag_from_bytes(b"bugi") => Self::Buginese,
            _ if tag == tag_from_bytes(b"batk") => Self::Batak,
            _ if tag == tag_from_bytes(b"brah") => Self::Brahmi,
            _ if tag == tag_from_bytes(b"kthi") => Self::Kaithi,
            _ if tag == tag_from_bytes(b"cakm") => Self::Chakma,
            _ if tag == tag_from_bytes(b"shrd") => Self::Sharada,
            _ if tag == tag_from_bytes(b"takr") => Self::Takri,
            _ if tag == tag_from_bytes(b"phag") => Self::Phags_Pa,
            _ if tag == tag_from_bytes(b"DFLT") => Self::Common,
            _ => return None,
        })
    }
}

/// Universal Shaping Engine character class, derived from
/// `Indic_Syllabic_Category` and `Indic_Positional_Category`.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum UseClass {
    O, Rsv, WJ, IND, R, CS, B, GB, N, S, VS, SMAbv, SMBlw, H, SUB, HN, MPre,
    MAbv, MBlw, MPst, VPre, VMPre, VAbv, VBlw, VPst, VMAbv, VMBlw, VMPst,
    FAbv, FBlw, FPst, FM, CMAbv, CMBlw, ZWNJ, ZWJ,
}

impl Default for UseClass {
    fn default() -> Self {
        Self::O
    }
}

pub(crate) fn use_class(cp: u32) -> (UseClass, bool) {
    let class = lookup(USE_CLASS_TABLE, cp, UseClass::O);
    let needs_decomp = lookup(USE_NEEDS_DECOMP_TABLE, cp, false);
    (class, needs_decomp)
}

/// Myanmar cluster character class.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum MyanmarClass {
    O, P, S, R, WJ, D0, C, IV, D, DB, H, As, MY, MR, MW, MH, VPre, VAbv, VBlw,
    A, V, J, VPst, PT,
}

impl Default for MyanmarClass {
    fn default() -> Self {
        Self::O
    }
}

pub(crate) fn myanmar_class(cp: u32) -> MyanmarClass {
    lookup(MYANMAR_CLASS_TABLE, cp, MyanmarClass::O)
}

static CATEGORY_TABLE: &[(u32, u32, Category)] = &[
    (0x0, 0x1F, Category::Control),
    (0x20, 0x20, Category::Zs),
    (0x21, 0x23, Category::Po),
    (0x24, 0x24, Category::Sc),
    (0x25, 0x27, Category::Po),
    (0x28, 0x28, Category::Ps),
    (0x29, 0x29, Category::Pe),
    (0x2A, 0x2A, Category::Po),
    (0x2B, 0x2B, Category::Sm),
    (0x2C, 0x2C, Category::Po),
    (0x2D, 0x2D, Category::Pd),
    (0x2E, 0x2F, Category::Po),
    (0x30, 0x39, Category::Nd),
    (0x3A, 0x3B, Category::Po),
    (0x3C, 0x3E, Category::Sm),
    (0x3F, 0x40, Category::Po),
    (0x41, 0x5A, Category::Lu),
    (0x5B, 0x5B, Category::Ps),
    (0x5C, 0x5C, Category::Po),
    (0x5D, 0x5D, Category::Pe),
    (0x5E, 0x5E, Category::Sk),
    (0x5F, 0x5F, Category::Pc),
    (0x60, 0x60, Category::Sk),
    (0x61, 0x7A, Category::Ll),
    (0x7B, 0x7B, Category::Ps),
    (0x7C, 0x7C, Category::Sm),
    (0x7D, 0x7D, Category::Pe),
    (0x7E, 0x7E, Category::Sm),
    (0x7F, 0x9F, Category::Control),
    (0xA0, 0xA0, Category::Zs),
    (0xA1, 0xA1, Category::Po),
    (0xA2, 0xA5, Category::Sc),
    (0xA6, 0xA6, Category::So),
    (0xA7, 0xA7, Category::Po),
    (0xA8, 0xA8, Category::Sk),
    (0xA9, 0xA9, Category::So),
    (0xAA, 0xAA, Category::Lo),
    (0xAB, 0xAB, Category::Pi),
    (0xAC, 0xAC, Category::Sm),
    (0xAD, 0xAD, Category::Format),
    (0xAE, 0xAE, Category::So),
    (0xAF, 0xAF, Category::Sk),
    (0xB0, 0xB0, Category::So),
    (0xB1, 0xB1, Category::Sm),
    (0xB2, 0xB3, Category::No),
    (0xB4, 0xB4, Category::Sk),
    (0xB5, 0xB5, Category::Ll),
    (0xB6, 0xB7, Category::Po),
    (0xB8, 0xB8, Category::Sk),
    (0xB9, 0xB9, Category::No),
    (0xBA, 0xBA, Category::Lo),
    (0xBB, 0xBB, Category::Pf),
    (0xBC, 0xBE, Category::No),
    (0xBF, 0xBF, Category::Po),
    (0xC0, 0xD6, Category::Lu),
    (0xD7, 0xD7, Category::Sm),
    (0xD8, 0xDE, Category::Lu),
    (0xDF, 0xF6, Category::Ll),
    (0xF7, 0xF7, Category::Sm),
    (0xF8, 0xFF, Category::Ll),
    (0x100, 0x100, Category::Lu),
    (0x101, 0x101, Category::Ll),
    (0x102, 0x102, Category::Lu),
    (0x103, 0x103, Category::Ll),
    (0x104, 0x104, Category::Lu),
    (0x105, 0x105, Category::Ll),
    (0x106, 0x106, Category::Lu),
    (0x107, 0x107, Category::Ll),
    (0x108, 0x108, Category::Lu),
    (0x109, 0x109, Category::Ll),
    (0x10A, 0x10A, Category::Lu),
    (0x10B, 0x10B, Category::Ll),
    (0x10C, 0x10C, Category::Lu),
    (0x10D, 0x10D, Category::Ll),
    (0x10E, 0x10E, Category::Lu),
    (0x10F, 0x10F, Category::Ll),
    (0x110, 0x110, Category::Lu),
    (0x111, 0x111, Category::Ll),
    (0x112, 0x112, Category::Lu),
    (0x113, 0x113, Category::Ll),
    (0x114, 0x114, Category::Lu),
    (0x115, 0x115, Category::Ll),
    (0x116, 0x116, Category::Lu),
    (0x117, 0x117, Category::Ll),
    (0x118, 0x118, Category::Lu),
    (0x119, 0x119, Category::Ll),
    (0x11A, 0x11A, Category::Lu),
    (0x11B, 0x11B, Category::Ll),
    (0x11C, 0x11C, Category::Lu),
    (0x11D, 0x11D, Category::Ll),
    (0x11E, 0x11E, Category::Lu),
    (0x11F, 0x11F, Category::Ll),
    (0x120, 0x120, Category::Lu),
    (0x121, 0x121, Category::Ll),
    (0x122, 0x122, Category::Lu),
    (0x123, 0x123, Category::Ll),
    (0x124, 0x124, Category::Lu),
    (0x125, 0x125, Category::Ll),
    (0x126, 0x126, Category::Lu),
    (0x127, 0x127, Category::Ll),
    (0x128, 0x128, Category::Lu),
    (0x129, 0x129, Category::Ll),
    (0x12A, 0x12A, Category::Lu),
    (0x12B, 0x12B, Category::Ll),
    (0x12C, 0x12C, Category::Lu),
    (0x12D, 0x12D, Category::Ll),
    (0x12E, 0x12E, Category::Lu),
    (0x12F, 0x12F, Category::Ll),
    (0x130, 0x130, Category::Lu),
    (0x131, 0x131, Category::Ll),
    (0x132, 0x132, Category::Lu),
    (0x133, 0x133, Category::Ll),
    (0x134, 0x134, Category::Lu),
    (0x135, 0x135, Category::Ll),
    (0x136, 0x136, Category::Lu),
    (0x137, 0x138, Category::Ll),
    (0x139, 0x139, Category::Lu),
    (0x13A, 0x13A, Category::Ll),
    (0x13B, 0x13B, Category::Lu),
    (0x13C, 0x13C, Category::Ll),
    (0x13D, 0x13D, Category::Lu),
    (0x13E, 0x13E, Category::Ll),
    (0x13F, 0x13F, Category::Lu),
    (0x140, 0x140, Category::Ll),
    (0x141, 0x141, Category::Lu),
    (0x142, 0x142, Category::Ll),
    (0x143, 0x143, Category::Lu),
    (0x144, 0x144, Category::Ll),
    (0x145, 0x145, Category::Lu),
    (0x146, 0x146, Category::Ll),
    (0x147, 0x147, Category::Lu),
    (0x148, 0x149, Category::Ll),
    (0x14A, 0x14A, Category::Lu),
    (0x14B, 0x14B, Category::Ll),
    (0x14C, 0x14C, Category::Lu),
    (0x14D, 0x14D, Category::Ll),
    (0x14E, 0x14E, Category::Lu),
    (0x14F, 0x14F, Category::Ll),
    (0x150, 0x150, Category::Lu),
    (0x151, 0x151, Category::Ll),
    (0x152, 0x152, Category::Lu),
    (0x153, 0x153, Category::Ll),
    (0x154, 0x154, Category::Lu),
    (0x155, 0x155, Category::Ll),
    (0x156, 0x156, Category::Lu),
    (0x157, 0x157, Category::Ll),
    (0x158, 0x158, Category::Lu),
    (0x159, 0x159, Category::Ll),
    (0x15A, 0x15A, Category::Lu),
    (0x15B, 0x15B, Category::Ll),
    (0x15C, 0x15C, Category::Lu),
    (0x15D, 0x15D, Category::Ll),
    (0x15E, 0x15E, Category::Lu),
    (0x15F, 0x15F, Category::Ll),
    (0x160, 0x160, Category::Lu),
    (0x161, 0x161, Category::Ll),
    (0x162, 0x162, Category::Lu),
    (0x163, 0x163, Category::Ll),
    (0x164, 0x164, Category::Lu),
    (0x165, 0x165, Category::Ll),
    (0x166, 0x166, Category::Lu),
    (0x167, 0x167, Category::Ll),
    (0x168, 0x168, Category::Lu),
    (0x169, 0x169, Category::Ll),
    (0x16A, 0x16A, Category::Lu),
    (0x16B, 0x16B, Category::Ll),
    (0x16C, 0x16C, Category::Lu),
    (0x16D, 0x16D, Category::Ll),
    (0x16E, 0x16E, Category::Lu),
    (0x16F, 0x16F, Category::Ll),
    (0x170, 0x170, Category::Lu),
    (0x171, 0x171, Category::Ll),
    (0x172, 0x172, Category::Lu),
    (0x173, 0x173, Category::Ll),
    (0x174, 0x174, Category::Lu),
    (0x175, 0x175, Category::Ll),
    (0x176, 0x176, Category::Lu),
    (0x177, 0x177, Category::Ll),
    (0x178, 0x179, Category::Lu),
    (0x17A, 0x17A, Category::Ll),
    (0x17B, 0x17B, Category::Lu),
    (0x17C, 0x17C, Category::Ll),
    (0x17D, 0x17D, Category::Lu),
    (0x17E, 0x180, Category::Ll),
    (0x181, 0x182, Category::Lu),
    (0x183, 0x183, Category::Ll),
    (0x184, 0x184, Category::Lu),
    (0x185, 0x185, Category::Ll),
    (0x186, 0x187, Category::Lu),
    (0x188, 0x188, Category::Ll),
    (0x189, 0x18B, Category::Lu),
    (0x18C, 0x18D, Category::Ll),
    (0x18E, 0x191, Category::Lu),
    (0x192, 0x192, Category::Ll),
    (0x193, 0x194, Category::Lu),
    (0x195, 0x195, Category::Ll),
    (0x196, 0x198, Category::Lu),
    (0x199, 0x19B, Category::Ll),
    (0x19C, 0x19D, Category::Lu),
    (0x19E, 0x19E, Category::Ll),
    (0x19F, 0x1A0, Category::Lu),
    (0x1A1, 0x1A1, Category::Ll),
    (0x1A2, 0x1A2, Category::Lu),
    (0x1A3, 0x1A3, Category::Ll),
    (0x1A4, 0x1A4, Category::Lu),
    (0x1A5, 0x1A5, Category::Ll),
    (0x1A6, 0x1A7, Category::Lu),
    (0x1A8, 0x1A8, Category::Ll),
    (0x1A9, 0x1A9, Category::Lu),
    (0x1AA, 0x1AB, Category::Ll),
    (0x1AC, 0x1AC, Category::Lu),
    (0x1AD, 0x1AD, Category::Ll),
    (0x1AE, 0x1AF, Category::Lu),
    (0x1B0, 0x1B0, Category::Ll),
    (0x1B1, 0x1B3, Category::Lu),
    (0x1B4, 0x1B4, Category::Ll),
    (0x1B5, 0x1B5, Category::Lu),
    (0x1B6, 0x1B6, Category::Ll),
    (0x1B7, 0x1B8, Category::Lu),
    (0x1B9, 0x1BA, Category::Ll),
    (0x1BB, 0x1BB, Category::Lo),
    (0x1BC, 0x1BC, Category::Lu),
    (0x1BD, 0x1BF, Category::Ll),
    (0x1C0, 0x1C3, Category::Lo),
    (0x1C4, 0x1C4, Category::Lu),
    (0x1C5, 0x1C5, Category::Lt),
    (0x1C6, 0x1C6, Category::Ll),
    (0x1C7, 0x1C7, Category::Lu),
    (0x1C8, 0x1C8, Category::Lt),
    (0x1C9, 0x1C9, Category::Ll),
    (0x1CA, 0x1CA, Category::Lu),
    (0x1CB, 0x1CB, Category::Lt),
    (0x1CC, 0x1CC, Category::Ll),
    (0x1CD, 0x1CD, Category::Lu),
    (0x1CE, 0x1CE, Category::Ll),
    (0x1CF, 0x1CF, Category::Lu),
    (0x1D0, 0x1D0, Category::Ll),
    (0x1D1, 0x1D1, Category::Lu),
    (0x1D2, 0x1D2, Category::Ll),
    (0x1D3, 0x1D3, Category::Lu),
    (0x1D4, 0x1D4, Category::Ll),
    (0x1D5, 0x1D5, Category::Lu),
    (0x1D6, 0x1D6, Category::Ll),
    (0x1D7, 0x1D7, Category::Lu),
    (0x1D8, 0x1D8, Category::Ll),
    (0x1D9, 0x1D9, Category::Lu),
    (0x1DA, 0x1DA, Category::Ll),
    (0x1DB, 0x1DB, Category::Lu),
    (0x1DC, 0x1DD, Category::Ll),
    (0x1DE, 0x1DE, Category::Lu),
    (0x1DF, 0x1DF, Category::Ll),
    (0x1E0, 0x1E0, Category::Lu),
    (0x1E1, 0x1E1, Category::Ll),
    (0x1E2, 0x1E2, Category::Lu),
    (0x1E3, 0x1E3, Category::Ll),
    (0x1E4, 0x1E4, Category::Lu),
    (0x1E5, 0x1E5, Category::Ll),
    (0x1E6, 0x1E6, Category::Lu),
    (0x1E7, 0x1E7, Category::Ll),
    (0x1E8, 0x1E8, Category::Lu),
    (0x1E9, 0x1E9, Category::Ll),
    (0x1EA, 0x1EA, Category::Lu),
    (0x1EB, 0x1EB, Category::Ll),
    (0x1EC, 0x1EC, Category::Lu),
    (0x1ED, 0x1ED, Category::Ll),
    (0x1EE, 0x1EE, Category::Lu),
    (0x1EF, 0x1F0, Category::Ll),
    (0x1F1, 0x1F1, Category::Lu),
    (0x1F2, 0x1F2, Category::Lt),
    (0x1F3, 0x1F3, Category::Ll),
    (0x1F4, 0x1F4, Category::Lu),
    (0x1F5, 0x1F5, Category::Ll),
    (0x1F6, 0x1F8, Category::Lu),
    (0x1F9, 0x1F9, Category::Ll),
    (0x1FA, 0x1FA, Category::Lu),
    (0x1FB, 0x1FB, Category::Ll),
    (0x1FC, 0x1FC, Category::Lu),
    (0x1FD, 0x1FD, Category::Ll),
    (0x1FE, 0x1FE, Category::Lu),
    (0x1FF, 0x1FF, Category::Ll),
    (0x200, 0x200, Category::Lu),
    (0x201, 0x201, Category::Ll),
    (0x202, 0x202, Category::Lu),
    (0x203, 0x203, Category::Ll),
    (0x204, 0x204, Category::Lu),
    (0x205, 0x205, Category::Ll),
    (0x206, 0x206, Category::Lu),
    (0x207, 0x207, Category::Ll),
    (0x208, 0x208, Category::Lu),
    (0x209, 0x209, Category::Ll),
    (0x20A, 0x20A, Category::Lu),
    (0x20B, 0x20B, Category::Ll),
    (0x20C, 0x20C, Category::Lu),
    (0x20D, 0x20D, Category::Ll),
    (0x20E, 0x20E, Category::Lu),
    (0x20F, 0x20F, Category::Ll),
    (0x210, 0x210, Category::Lu),
    (0x211, 0x211, Category::Ll),
    (0x212, 0x212, Category::Lu),
    (0x213, 0x213, Category::Ll),
    (0x214, 0x214, Category::Lu),
    (0x215, 0x215, Category::Ll),
    (0x216, 0x216, Category::Lu),
    (0x217, 0x217, Category::Ll),
    (0x218, 0x218, Category::Lu),
    (0x219, 0x219, Category::Ll),
    (0x21A, 0x21A, Category::Lu),
    (0x21B, 0x21B, Category::Ll),
    (0x21C, 0x21C, Category::Lu),
    (0x21D, 0x21D, Category::Ll),
    (0x21E, 0x21E, Category::Lu),
    (0x21F, 0x21F, Category::Ll),
    (0x220, 0x220, Category::Lu),
    (0x221, 0x221, Category::Ll),
    (0x222, 0x222, Category::Lu),
    (0x223, 0x223, Category::Ll),
    (0x224, 0x224, Category::Lu),
    (0x225, 0x225, Category::Ll),
    (0x226, 0x226, Category::Lu),
    (0x227, 0x227, Category::Ll),
    (0x228, 0x228, Category::Lu),
    (0x229, 0x229, Category::Ll),
    (0x22A, 0x22A, Category::Lu),
    (0x22B, 0x22B, Category::Ll),
    (0x22C, 0x22C, Category::Lu),
    (0x22D, 0x22D, Category::Ll),
    (0x22E, 0x22E, Category::Lu),
    (0x22F, 0x22F, Category::Ll),
    (0x230, 0x230, Category::Lu),
    (0x231, 0x231, Category::Ll),
    (0x232, 0x232, Category::Lu),
    (0x233, 0x239, Category::Ll),
    (0x23A, 0x23B, Category::Lu),
    (0x23C, 0x23C, Category::Ll),
    (0x23D, 0x23E, Category::Lu),
    (0x23F, 0x240, Category::Ll),
    (0x241, 0x241, Category::Lu),
    (0x242, 0x242, Category::Ll),
    (0x243, 0x246, Category::Lu),
    (0x247, 0x247, Category::Ll),
    (0x248, 0x248, Category::Lu),
    (0x249, 0x249, Category::Ll),
    (0x24A, 0x24A, Category::Lu),
    (0x24B, 0x24B, Category::Ll),
    (0x24C, 0x24C, Category::Lu),
    (0x24D, 0x24D, Category::Ll),
    (0x24E, 0x24E, Category::Lu),
    (0x24F, 0x293, Category::Ll),
    (0x294, 0x294, Category::Lo),
    (0x295, 0x2AF, Category::Ll),
    (0x2B0, 0x2C1, Category::Lm),
    (0x2C2, 0x2C5, Category::Sk),
    (0x2C6, 0x2D1, Category::Lm),
    (0x2D2, 0x2DF, Category::Sk),
    (0x2E0, 0x2E4, Category::Lm),
    (0x2E5, 0x2EB, Category::Sk),
    (0x2EC, 0x2EC, Category::Lm),
    (0x2ED, 0x2ED, Category::Sk),
    (0x2EE, 0x2EE, Category::Lm),
    (0x2EF, 0x2FF, Category::Sk),
    (0x300, 0x36F, Category::Mn),
    (0x370, 0x370, Category::Lu),
    (0x371, 0x371, Category::Ll),
    (0x372, 0x372, Category::Lu),
    (0x373, 0x373, Category::Ll),
    (0x374, 0x374, Category::Lm),
    (0x375, 0x375, Category::Sk),
    (0x376, 0x376, Category::Lu),
    (0x377, 0x377, Category::Ll),
    (0x378, 0x379, Category::Cn),
    (0x37A, 0x37A, Category::Lm),
    (0x37B, 0x37D, Category::Ll),
    (0x37E, 0x37E, Category::Po),
    (0x37F, 0x37F, Category::Lu),
    (0x380, 0x383, Category::Cn),
    (0x384, 0x385, Category::Sk),
    (0x386, 0x386, Category::Lu),
    (0x387, 0x387, Category::Po),
    (0x388, 0x38A, Category::Lu),
    (0x38B, 0x38B, Category::Cn),
    (0x38C, 0x38C, Category::Lu),
    (0x38D, 0x38D, Category::Cn),
    (0x38E, 0x38F, Category::Lu),
    (0x390, 0x390, Category::Ll),
    (0x391, 0x3A1, Category::Lu),
    (0x3A2, 0x3A2, Category::Cn),
    (0x3A3, 0x3AB, Category::Lu),
    (0x3AC, 0x3CE, Category::Ll),
    (0x3CF, 0x3CF, Category::Lu),
    (0x3D0, 0x3D1, Category::Ll),
    (0x3D2, 0x3D4, Category::Lu),
    (0x3D5, 0x3D7, Category::Ll),
    (0x3D8, 0x3D8, Category::Lu),
    (0x3D9, 0x3D9, Category::Ll),
    (0x3DA, 0x3DA, Category::Lu),
    (0x3DB, 0x3DB, Category::Ll),
    (0x3DC, 0x3DC, Category::Lu),
    (0x3DD, 0x3DD, Category::Ll),
    (0x3DE, 0x3DE, Category::Lu),
    (0x3DF, 0x3DF, Category::Ll),
    (0x3E0, 0x3E0, Category::Lu),
    (0x3E1, 0x3E1, Category::Ll),
    (0x3E2, 0x3E2, Category::Lu),
    (0x3E3, 0x3E3, Category::Ll),
    (0x3E4, 0x3E4, Category::Lu),
    (0x3E5, 0x3E5, Category::Ll),
    (0x3E6, 0x3E6, Category::Lu),
    (0x3E7, 0x3E7, Category::Ll),
    (0x3E8, 0x3E8, Category::Lu),
    (0x3E9, 0x3E9, Category::Ll),
    (0x3EA, 0x3EA, Category::Lu),
    (0x3EB, 0x3EB, Category::Ll),
    (0x3EC, 0x3EC, Category::Lu),
    (0x3ED, 0x3ED, Category::Ll),
    (0x3EE, 0x3EE, Category::Lu),
    (0x3EF, 0x3F3, Category::Ll),
    (0x3F4, 0x3F4, Category::Lu),
    (0x3F5, 0x3F5, Category::Ll),
    (0x3F6, 0x3F6, Category::Sm),
    (0x3F7, 0x3F7, Category::Lu),
    (0x3F8, 0x3F8, Category::Ll),
    (0x3F9, 0x3FA, Category::Lu),
    (0x3FB, 0x3FC, Category::Ll),
    (0x3FD, 0x42F, Category::Lu),
    (0x430, 0x45F, Category::Ll),
    (0x460, 0x460, Category::Lu),
    (0x461, 0x461, Category::Ll),
    (0x462, 0x462, Category::Lu),
    (0x463, 0x463, Category::Ll),
    (0x464, 0x464, Category::Lu),
    (0x465, 0x465, Category::Ll),
    (0x466, 0x466, Category::Lu),
    (0x467, 0x467, Category::Ll),
    (0x468, 0x468, Category::Lu),
    (0x469, 0x469, Category::Ll),
    (0x46A, 0x46A, Category::Lu),
    (0x46B, 0x46B, Category::Ll),
    (0x46C, 0x46C, Category::Lu),
    (0x46D, 0x46D, Category::Ll),
    (0x46E, 0x46E, Category::Lu),
    (0x46F, 0x46F, Category::Ll),
    (0x470, 0x470, Category::Lu),
    (0x471, 0x471, Category::Ll),
    (0x472, 0x472, Category::Lu),
    (0x473, 0x473, Category::Ll),
    (0x474, 0x474, Category::Lu),
    (0x475, 0x475, Category::Ll),
    (0x476, 0x476, Category::Lu),
    (0x477, 0x477, Category::Ll),
    (0x478, 0x478, Category::Lu),
    (0x479, 0x479, Category::Ll),
    (0x47A, 0x47A, Category::Lu),
    (0x47B, 0x47B, Category::Ll),
    (0x47C, 0x47C, Category::Lu),
    (0x47D, 0x47D, Category::Ll),
    (0x47E, 0x47E, Category::Lu),
    (0x47F, 0x47F, Category::Ll),
    (0x480, 0x480, Category::Lu),
    (0x481, 0x481, Category::Ll),
    (0x482, 0x482, Category::So),
    (0x483, 0x487, Category::Mn),
    (0x488, 0x489, Category::Me),
    (0x48A, 0x48A, Category::Lu),
    (0x48B, 0x48B, Category::Ll),
    (0x48C, 0x48C, Category::Lu),
    (0x48D, 0x48D, Category::Ll),
    (0x48E, 0x48E, Category::Lu),
    (0x48F, 0x48F, Category::Ll),
    (0x490, 0x490, Category::Lu),
    (0x491, 0x491, Category::Ll),
    (0x492, 0x492, Category::Lu),
    (0x493, 0x493, Category::Ll),
    (0x494, 0x494, Category::Lu),
    (0x495, 0x495, Category::Ll),
    (0x496, 0x496, Category::Lu),
    (0x497, 0x497, Category::Ll),
    (0x498, 0x498, Category::Lu),
    (0x499, 0x499, Category::Ll),
    (0x49A, 0x49A, Category::Lu),
    (0x49B, 0x49B, Category::Ll),
    (0x49C, 0x49C, Category::Lu),
    (0x49D, 0x49D, Category::Ll),
    (0x49E, 0x49E, Category::Lu),
    (0x49F, 0x49F, Category::Ll),
    (0x4A0, 0x4A0, Category::Lu),
    (0x4A1, 0x4A1, Category::Ll),
    (0x4A2, 0x4A2, Category::Lu),
    (0x4A3, 0x4A3, Category::Ll),
    (0x4A4, 0x4A4, Category::Lu),
    (0x4A5, 0x4A5, Category::Ll),
    (0x4A6, 0x4A6, Category::Lu),
    (0x4A7, 0x4A7, Category::Ll),
    (0x4A8, 0x4A8, Category::Lu),
    (0x4A9, 0x4A9, Category::Ll),
    (0x4AA, 0x4AA, Category::Lu),
    (0x4AB, 0x4AB, Category::Ll),
    (0x4AC, 0x4AC, Category::Lu),
    (0x4AD, 0x4AD, Category::Ll),
    (0x4AE, 0x4AE, Category::Lu),
    (0x4AF, 0x4AF, Category::Ll),
    (0x4B0, 0x4B0, Category::Lu),
    (0x4B1, 0x4B1, Category::Ll),
    (0x4B2, 0x4B2, Category::Lu),
    (0x4B3, 0x4B3, Category::Ll),
    (0x4B4, 0x4B4, Category::Lu),
    (0x4B5, 0x4B5, Category::Ll),
    (0x4B6, 0x4B6, Category::Lu),
    (0x4B7, 0x4B7, Category::Ll),
    (0x4B8, 0x4B8, Category::Lu),
    (0x4B9, 0x4B9, Category::Ll),
    (0x4BA, 0x4BA, Category::Lu),
    (0x4BB, 0x4BB, Category::Ll),
    (0x4BC, 0x4BC, Category::Lu),
    (0x4BD, 0x4BD, Category::Ll),
    (0x4BE, 0x4BE, Category::Lu),
    (0x4BF, 0x4BF, Category::Ll),
    (0x4C0, 0x4C1, Category::Lu),
    (0x4C2, 0x4C2, Category::Ll),
    (0x4C3, 0x4C3, Category::Lu),
    (0x4C4, 0x4C4, Category::Ll),
    (0x4C5, 0x4C5, Category::Lu),
    (0x4C6, 0x4C6, Category::Ll),
    (0x4C7, 0x4C7, Category::Lu),
    (0x4C8, 0x4C8, Category::Ll),
    (0x4C9, 0x4C9, Category::Lu),
    (0x4CA, 0x4CA, Category::Ll),
    (0x4CB, 0x4CB, Category::Lu),
    (0x4CC, 0x4CC, Category::Ll),
    (0x4CD, 0x4CD, Category::Lu),
    (0x4CE, 0x4CF, Category::Ll),
    (0x4D0, 0x4D0, Category::Lu),
    (0x4D1, 0x4D1, Category::Ll),
    (0x4D2, 0x4D2, Category::Lu),
    (0x4D3, 0x4D3, Category::Ll),
    (0x4D4, 0x4D4, Category::Lu),
    (0x4D5, 0x4D5, Category::Ll),
    (0x4D6, 0x4D6, Category::Lu),
    (0x4D7, 0x4D7, Category::Ll),
    (0x4D8, 0x4D8, Category::Lu),
    (0x4D9, 0x4D9, Category::Ll),
    (0x4DA, 0x4DA, Category::Lu),
    (0x4DB, 0x4DB, Category::Ll),
    (0x4DC, 0x4DC, Category::Lu),
    (0x4DD, 0x4DD, Category::Ll),
    (0x4DE, 0x4DE, Category::Lu),
    (0x4DF, 0x4DF, Category::Ll),
    (0x4E0, 0x4E0, Category::Lu),
    (0x4E1, 0x4E1, Category::Ll),
    (0x4E2, 0x4E2, Category::Lu),
    (0x4E3, 0x4E3, Category::Ll),
    (0x4E4, 0x4E4, Category::Lu),
    (0x4E5, 0x4E5, Category::Ll),
    (0x4E6, 0x4E6, Category::Lu),
    (0x4E7, 0x4E7, Category::Ll),
    (0x4E8, 0x4E8, Category::Lu),
    (0x4E9, 0x4E9, Category::Ll),
    (0x4EA, 0x4EA, Category::Lu),
    (0x4EB, 0x4EB, Category::Ll),
    (0x4EC, 0x4EC, Category::Lu),
    (0x4ED, 0x4ED, Category::Ll),
    (0x4EE, 0x4EE, Category::Lu),
    (0x4EF, 0x4EF, Category::Ll),
    (0x4F0, 0x4F0, Category::Lu),
    (0x4F1, 0x4F1, Category::Ll),
    (0x4F2, 0x4F2, Category::Lu),
    (0x4F3, 0x4F3, Category::Ll),
    (0x4F4, 0x4F4, Category::Lu),
    (0x4F5, 0x4F5, Category::Ll),
    (0x4F6, 0x4F6, Category::Lu),
    (0x4F7, 0x4F7, Category::Ll),
    (0x4F8, 0x4F8, Category::Lu),
    (0x4F9, 0x4F9, Category::Ll),
    (0x4FA, 0x4FA, Category::Lu),
    (0x4FB, 0x4FB, Category::Ll),
    (0x4FC, 0x4FC, Category::Lu),
    (0x4FD, 0x4FD, Category::Ll),
    (0x4FE, 0x4FE, Category::Lu),
    (0x4FF, 0x4FF, Category::Ll),
    (0x500, 0x500, Category::Lu),
    (0x501, 0x501, Category::Ll),
    (0x502, 0x502, Category::Lu),
    (0x503, 0x503, Category::Ll),
    (0x504, 0x504, Category::Lu),
    (0x505, 0x505, Category::Ll),
    (0x506, 0x506, Category::Lu),
    (0x507, 0x507, Category::Ll),
    (0x508, 0x508, Category::Lu),
    (0x509, 0x509, Category::Ll),
    (0x50A, 0x50A, Category::Lu),
    (0x50B, 0x50B, Category::Ll),
    (0x50C, 0x50C, Category::Lu),
    (0x50D, 0x50D, Category::Ll),
    (0x50E, 0x50E, Category::Lu),
    (0x50F, 0x50F, Category::Ll),
    (0x510, 0x510, Category::Lu),
    (0x511, 0x511, Category::Ll),
    (0x512, 0x512, Category::Lu),
    (0x513, 0x513, Category::Ll),
    (0x514, 0x514, Category::Lu),
    (0x515, 0x515, Category::Ll),
    (0x516, 0x516, Category::Lu),
    (0x517, 0x517, Category::Ll),
    (0x518, 0x518, Category::Lu),
    (0x519, 0x519, Category::Ll),
    (0x51A, 0x51A, Category::Lu),
    (0x51B, 0x51B, Category::Ll),
    (0x51C, 0x51C, Category::Lu),
    (0x51D, 0x51D, Category::Ll),
    (0x51E, 0x51E, Category::Lu),
    (0x51F, 0x51F, Category::Ll),
    (0x520, 0x520, Category::Lu),
    (0x521, 0x521, Category::Ll),
    (0x522, 0x522, Category::Lu),
    (0x523, 0x523, Category::Ll),
    (0x524, 0x524, Category::Lu),
    (0x525, 0x525, Category::Ll),
    (0x526, 0x526, Category::Lu),
    (0x527, 0x527, Category::Ll),
    (0x528, 0x528, Category::Lu),
    (0x529, 0x529, Category::Ll),
    (0x52A, 0x52A, Category::Lu),
    (0x52B, 0x52B, Category::Ll),
    (0x52C, 0x52C, Category::Lu),
    (0x52D, 0x52D, Category::Ll),
    (0x52E, 0x52E, Category::Lu),
    (0x52F, 0x52F, Category::Ll),
    (0x530, 0x530, Category::Cn),
    (0x531, 0x556, Category::Lu),
    (0x557, 0x558, Category::Cn),
    (0x559, 0x559, Category::Lm),
    (0x55A, 0x55F, Category::Po),
    (0x560, 0x588, Category::Ll),
    (0x589, 0x589, Category::Po),
    (0x58A, 0x58A, Category::Pd),
    (0x58B, 0x58C, Category::Cn),
    (0x58D, 0x58E, Category::So),
    (0x58F, 0x58F, Category::Sc),
    (0x590, 0x590, Category::Cn),
    (0x591, 0x5BD, Category::Mn),
    (0x5BE, 0x5BE, Category::Pd),
    (0x5BF, 0x5BF, Category::Mn),
    (0x5C0, 0x5C0, Category::Po),
    (0x5C1, 0x5C2, Category::Mn),
    (0x5C3, 0x5C3, Category::Po),
    (0x5C4, 0x5C5, Category::Mn),
    (0x5C6, 0x5C6, Category::Po),
    (0x5C7, 0x5C7, Category::Mn),
    (0x5C8, 0x5CF, Category::Cn),
    (0x5D0, 0x5EA, Category::Lo),
    (0x5EB, 0x5EE, Category::Cn),
    (0x5EF, 0x5F2, Category::Lo),
    (0x5F3, 0x5F4, Category::Po),
    (0x5F5, 0x5FF, Category::Cn),
    (0x600, 0x605, Category::Format),
    (0x606, 0x608, Category::Sm),
    (0x609, 0x60A, Category::Po),
    (0x60B, 0x60B, Category::Sc),
    (0x60C, 0x60D, Category::Po),
    (0x60E, 0x60F, Category::So),
    (0x610, 0x61A, Category::Mn),
    (0x61B, 0x61B, Category::Po),
    (0x61C, 0x61C, Category::Format),
    (0x61D, 0x61F, Category::Po),
    (0x620, 0x63F, Category::Lo),
    (0x640, 0x640, Category::Lm),
    (0x641, 0x64A, Category::Lo),
    (0x64B, 0x65F, Category::Mn),
    (0x660, 0x669, Category::Nd),
    (0x66A, 0x66D, Category::Po),
    (0x66E, 0x66F, Category::Lo),
    (0x670, 0x670, Category::Mn),
    (0x671, 0x6D3, Category::Lo),
    (0x6D4, 0x6D4, Category::Po),
    (0x6D5, 0x6D5, Category::Lo),
    (0x6D6, 0x6DC, Category::Mn),
    (0x6DD, 0x6DD, Category::Format),
    (0x6DE, 0x6DE, Category::So),
    (0x6DF, 0x6E4, Category::Mn),
    (0x6E5, 0x6E6, Category::Lm),
    (0x6E7, 0x6E8, Category::Mn),
    (0x6E9, 0x6E9, Category::So),
    (0x6EA, 0x6ED, Category::Mn),
    (0x6EE, 0x6EF, Category::Lo),
    (0x6F0, 0x6F9, Category::Nd),
    (0x6FA, 0x6FC, Category::Lo),
    (0x6FD, 0x6FE, Category::So),
    (0x6FF, 0x6FF, Category::Lo),
    (0x700, 0x70D, Category::Po),
    (0x70E, 0x70E, Category::Cn),
    (0x70F, 0x70F, Category::Format),
    (0x710, 0x710, Category::Lo),
    (0x711, 0x711, Category::Mn),
    (0x712, 0x72F, Category::Lo),
    (0x730, 0x74A, Category::Mn),
    (0x74B, 0x74C, Category::Cn),
    (0x74D, 0x7A5, Category::Lo),
    (0x7A6, 0x7B0, Category::Mn),
    (0x7B1, 0x7B1, Category::Lo),
    (0x7B2, 0x7BF, Category::Cn),
    (0x7C0, 0x7C9, Category::Nd),
    (0x7CA, 0x7EA, Category::Lo),
    (0x7EB, 0x7F3, Category::Mn),
    (0x7F4, 0x7F5, Category::Lm),
    (0x7F6, 0x7F6, Category::So),
    (0x7F7, 0x7F9, Category::Po),
    (0x7FA, 0x7FA, Category::Lm),
    (0x7FB, 0x7FC, Category::Cn),
    (0x7FD, 0x7FD, Category::Mn),
    (0x7FE, 0x7FF, Category::Sc),
    (0x800, 0x815, Category::Lo),
    (0x816, 0x819, Category::Mn),
    (0x81A, 0x81A, Category::Lm),
    (0x81B, 0x823, Category::Mn),
    (0x824, 0x824, Category::Lm),
    (0x825, 0x827, Category::Mn),
    (0x828, 0x828, Category::Lm),
    (0x829, 0x82D, Category::Mn),
    (0x82E, 0x82F, Category::Cn),
    (0x830, 0x83E, Category::Po),
    (0x83F, 0x83F, Category::Cn),
    (0x840, 0x858, Category::Lo),
    (0x859, 0x85B, Category::Mn),
    (0x85C, 0x85D, Category::Cn),
    (0x85E, 0x85E, Category::Po),
    (0x85F, 0x85F, Category::Cn),
    (0x860, 0x86A, Category::Lo),
    (0x86B, 0x86F, Category::Cn),
    (0x870, 0x887, Category::Lo),
    (0x888, 0x888, Category::Sk),
    (0x889, 0x88E, Category::Lo),
    (0x88F, 0x88F, Category::Cn),
    (0x890, 0x891, Category::Format),
    (0x892, 0x897, Category::Cn),
    (0x898, 0x89F, Category::Mn),
    (0x8A0, 0x8C8, Category::Lo),
    (0x8C9, 0x8C9, Category::Lm),
    (0x8CA, 0x8E1, Category::Mn),
    (0x8E2, 0x8E2, Category::Format),
    (0x8E3, 0x902, Category::Mn),
    (0x903, 0x903, Category::Mc),
    (0x904, 0x939, Category::Lo),
    (0x93A, 0x93A, Category::Mn),
    (0x93B, 0x93B, Category::Mc),
    (0x93C, 0x93C, Category::Mn),
    (0x93D, 0x93D, Category::Lo),
    (0x93E, 0x940, Category::Mc),
    (0x941, 0x948, Category::Mn),
    (0x949, 0x94C, Category::Mc),
    (0x94D, 0x94D, Category::Mn),
    (0x94E, 0x94F, Category::Mc),
    (0x950, 0x950, Category::Lo),
    (0x951, 0x957, Category::Mn),
    (0x958, 0x961, Category::Lo),
    (0x962, 0x963, Category::Mn),
    (0x964, 0x965, Category::Po),
    (0x966, 0x96F, Category::Nd),
    (0x970, 0x970, Category::Po),
    (0x971, 0x971, Category::Lm),
    (0x972, 0x980, Category::Lo),
    (0x981, 0x981, Category::Mn),
    (0x982, 0x983, Category::Mc),
    (0x984, 0x984, Category::Cn),
    (0x985, 0x98C, Category::Lo),
    (0x98D, 0x98E, Category::Cn),
    (0x98F, 0x990, Category::Lo),
    (0x991, 0x992, Category::Cn),
    (0x993, 0x9A8, Category::Lo),
    (0x9A9, 0x9A9, Category::Cn),
    (0x9AA, 0x9B0, Category::Lo),
    (0x9B1, 0x9B1, Category::Cn),
    (0x9B2, 0x9B2, Category::Lo),
    (0x9B3, 0x9B5, Category::Cn),
    (0x9B6, 0x9B9, Category::Lo),
    (0x9BA, 0x9BB, Category::Cn),
    (0x9BC, 0x9BC, Category::Mn),
    (0x9BD, 0x9BD, Category::Lo),
    (0x9BE, 0x9C0, Category::Mc),
    (0x9C1, 0x9C4, Category::Mn),
    (0x9C5, 0x9C6, Category::Cn),
    (0x9C7, 0x9C8, Category::Mc),
    (0x9C9, 0x9CA, Category::Cn),
    (0x9CB, 0x9CC, Category::Mc),
    (0x9CD, 0x9CD, Category::Mn),
    (0x9CE, 0x9CE, Category::Lo),
    (0x9CF, 0x9D6, Category::Cn),
    (0x9D7, 0x9D7, Category::Mc),
    (0x9D8, 0x9DB, Category::Cn),
    (0x9DC, 0x9DD, Category::Lo),
    (0x9DE, 0x9DE, Category::Cn),
    (0x9DF, 0x9E1, Category::Lo),
    (0x9E2, 0x9E3, Category::Mn),
    (0x9E4, 0x9E5, Category::Cn),
    (0x9E6, 0x9EF, Category::Nd),
    (0x9F0, 0x9F1, Category::Lo),
    (0x9F2, 0x9F3, Category::Sc),
    (0x9F4, 0x9F9, Category::No),
    (0x9FA, 0x9FA, Category::So),
    (0x9FB, 0x9FB, Category::Sc),
    (0x9FC, 0x9FC, Category::Lo),
    (0x9FD, 0x9FD, Category::Po),
    (0x9FE, 0x9FE, Category::Mn),
    (0x9FF, 0xA00, Category::Cn),
    (0xA01, 0xA02, Category::Mn),
    (0xA03, 0xA03, Category::Mc),
    (0xA04, 0xA04, Category::Cn),
    (0xA05, 0xA0A, Category::Lo),
    (0xA0B, 0xA0E, Category::Cn),
    (0xA0F, 0xA10, Category::Lo),
    (0xA11, 0xA12, Category::Cn),
    (0xA13, 0xA28, Category::Lo),
    (0xA29, 0xA29, Category::Cn),
    (0xA2A, 0xA30, Category::Lo),
    (0xA31, 0xA31, Category::Cn),
    (0xA32, 0xA33, Category::Lo),
    (0xA34, 0xA34, Category::Cn),
    (0xA35, 0xA36, Category::Lo),
    (0xA37, 0xA37, Category::Cn),
    (0xA38, 0xA39, Category::Lo),
    (0xA3A, 0xA3B, Category::Cn),
    (0xA3C, 0xA3C, Category::Mn),
    (0xA3D, 0xA3D, Category::Cn),
    (0xA3E, 0xA40, Category::Mc),
    (0xA41, 0xA42, Category::Mn),
    (0xA43, 0xA46, Category::Cn),
    (0xA47, 0xA48, Category::Mn),
    (0xA49, 0xA4A, Category::Cn),
    (0xA4B, 0xA4D, Category::Mn),
    (0xA4E, 0xA50, Category::Cn),
    (0xA51, 0xA51, Category::Mn),
    (0xA52, 0xA58, Category::Cn),
    (0xA59, 0xA5C, Category::Lo),
    (0xA5D, 0xA5D, Category::Cn),
    (0xA5E, 0xA5E, Category::Lo),
    (0xA5F, 0xA65, Category::Cn),
    (0xA66, 0xA6F, Category::Nd),
    (0xA70, 0xA71, Category::Mn),
    (0xA72, 0xA74, Category::Lo),
    (0xA75, 0xA75, Category::Mn),
    (0xA76, 0xA76, Category::Po),
    (0xA77, 0xA80, Category::Cn),
    (0xA81, 0xA82, Category::Mn),
    (0xA83, 0xA83, Category::Mc),
    (0xA84, 0xA84, Category::Cn),
    (0xA85, 0xA8D, Category::Lo),
    (0xA8E, 0xA8E, Category::Cn),
    (0xA8F, 0xA91, Category::Lo),
    (0xA92, 0xA92, Category::Cn),
    (0xA93, 0xAA8, Category::Lo),
    (0xAA9, 0xAA9, Category::Cn),
    (0xAAA, 0xAB0, Category::Lo),
    (0xAB1, 0xAB1, Category::Cn),
    (0xAB2, 0xAB3, Category::Lo),
    (0xAB4, 0xAB4, Category::Cn),
    (0xAB5, 0xAB9, Category::Lo),
    (0xABA, 0xABB, Category::Cn),
    (0xABC, 0xABC, Category::Mn),
    (0xABD, 0xABD, Category::Lo),
    (0xABE, 0xAC0, Category::Mc),
    (0xAC1, 0xAC5, Category::Mn),
    (0xAC6, 0xAC6, Category::Cn),
    (0xAC7, 0xAC8, Category::Mn),
    (0xAC9, 0xAC9, Category::Mc),
    (0xACA, 0xACA, Category::Cn),
    (0xACB, 0xACC, Category::Mc),
    (0xACD, 0xACD, Category::Mn),
    (0xACE, 0xACF, Category::Cn),
    (0xAD0, 0xAD0, Category::Lo),
    (0xAD1, 0xADF, Category::Cn),
    (0xAE0, 0xAE1, Category::Lo),
    (0xAE2, 0xAE3, Category::Mn),
    (0xAE4, 0xAE5, Category::Cn),
    (0xAE6, 0xAEF, Category::Nd),
    (0xAF0, 0xAF0, Category::Po),
    (0xAF1, 0xAF1, Category::Sc),
    (0xAF2, 0xAF8, Category::Cn),
    (0xAF9, 0xAF9, Category::Lo),
    (0xAFA, 0xAFF, Category::Mn),
    (0xB00, 0xB00, Category::Cn),
    (0xB01, 0xB01, Category::Mn),
    (0xB02, 0xB03, Category::Mc),
    (0xB04, 0xB04, Category::Cn),
    (0xB05, 0xB0C, Category::Lo),
    (0xB0D, 0xB0E, Category::Cn),
    (0xB0F, 0xB10, Category::Lo),
    (0xB11, 0xB12, Category::Cn),
    (0xB13, 0xB28, Category::Lo),
    (0xB29, 0xB29, Category::Cn),
    (0xB2A, 0xB30, Category::Lo),
    (0xB31, 0xB31, Category::Cn),
    (0xB32, 0xB33, Category::Lo),
    (0xB34, 0xB34, Category::Cn),
    (0xB35, 0xB39, Category::Lo),
    (0xB3A, 0xB3B, Category::Cn),
    (0xB3C, 0xB3C, Category::Mn),
    (0xB3D, 0xB3D, Category::Lo),
    (0xB3E, 0xB3E, Category::Mc),
    (0xB3F, 0xB3F, Category::Mn),
    (0xB40, 0xB40, Category::Mc),
    (0xB41, 0xB44, Category::Mn),
    (0xB45, 0xB46, Category::Cn),
    (0xB47, 0xB48, Category::Mc),
    (0xB49, 0xB4A, Category::Cn),
    (0xB4B, 0xB4C, Category::Mc),
    (0xB4D, 0xB4D, Category::Mn),
    (0xB4E, 0xB54, Category::Cn),
    (0xB55, 0xB56, Category::Mn),
    (0xB57, 0xB57, Category::Mc),
    (0xB58, 0xB5B, Category::Cn),
    (0xB5C, 0xB5D, Category::Lo),
    (0xB5E, 0xB5E, Category::Cn),
    (0xB5F, 0xB61, Category::Lo),
    (0xB62, 0xB63, Category::Mn),
    (0xB64, 0xB65, Category::Cn),
    (0xB66, 0xB6F, Category::Nd),
    (0xB70, 0xB70, Category::So),
    (0xB71, 0xB71, Category::Lo),
    (0xB72, 0xB77, Category::No),
    (0xB78, 0xB81, Category::Cn),
    (0xB82, 0xB82, Category::Mn),
    (0xB83, 0xB83, Category::Lo),
    (0xB84, 0xB84, Category::Cn),
    (0xB85, 0xB8A, Category::Lo),
    (0xB8B, 0xB8D, Category::Cn),
    (0xB8E, 0xB90, Category::Lo),
    (0xB91, 0xB91, Category::Cn),
    (0xB92, 0xB95, Category::Lo),
    (0xB96, 0xB98, Category::Cn),
    (0xB99, 0xB9A, Category::Lo),
    (0xB9B, 0xB9B, Category::Cn),
    (0xB9C, 0xB9C, Category::Lo),
    (0xB9D, 0xB9D, Category::Cn),
    (0xB9E, 0xB9F, Category::Lo),
    (0xBA0, 0xBA2, Category::Cn),
    (0xBA3, 0xBA4, Category::Lo),
    (0xBA5, 0xBA7, Category::Cn),
    (0xBA8, 0xBAA, Category::Lo),
    (0xBAB, 0xBAD, Category::Cn),
    (0xBAE, 0xBB9, Category::Lo),
    (0xBBA, 0xBBD, Category::Cn),
    (0xBBE, 0xBBF, Category::Mc),
    (0xBC0, 0xBC0, Category::Mn),
    (0xBC1, 0xBC2, Category::Mc),
    (0xBC3, 0xBC5, Category::Cn),
    (0xBC6, 0xBC8, Category::Mc),
    (0xBC9, 0xBC9, Category::Cn),
    (0xBCA, 0xBCC, Category::Mc),
    (0xBCD, 0xBCD, Category::Mn),
    (0xBCE, 0xBCF, Category::Cn),
    (0xBD0, 0xBD0, Category::Lo),
    (0xBD1, 0xBD6, Category::Cn),
    (0xBD7, 0xBD7, Category::Mc),
    (0xBD8, 0xBE5, Category::Cn),
    (0xBE6, 0xBEF, Category::Nd),
    (0xBF0, 0xBF2, Category::No),
    (0xBF3, 0xBF8, Category::So),
    (0xBF9, 0xBF9, Category::Sc),
    (0xBFA, 0xBFA, Category::So),
    (0xBFB, 0xBFF, Category::Cn),
    (0xC00, 0xC00, Category::Mn),
    (0xC01, 0xC03, Category::Mc),
    (0xC04, 0xC04, Category::Mn),
    (0xC05, 0xC0C, Category::Lo),
    (0xC0D, 0xC0D, Category::Cn),
    (0xC0E, 0xC10, Category::Lo),
    (0xC11, 0xC11, Category::Cn),
    (0xC12, 0xC28, Category::Lo),
    (0xC29, 0xC29, Category::Cn),
    (0xC2A, 0xC39, Category::Lo),
    (0xC3A, 0xC3B, Category::Cn),
    (0xC3C, 0xC3C, Category::Mn),
    (0xC3D, 0xC3D, Category::Lo),
    (0xC3E, 0xC40, Category::Mn),
    (0xC41, 0xC44, Category::Mc),
    (0xC45, 0xC45, Category::Cn),
    (0xC46, 0xC48, Category::Mn),
    (0xC49, 0xC49, Category::Cn),
    (0xC4A, 0xC4D, Category::Mn),
    (0xC4E, 0xC54, Category::Cn),
    (0xC55, 0xC56, Category::Mn),
    (0xC57, 0xC57, Category::Cn),
    (0xC58, 0xC5A, Category::Lo),
    (0xC5B, 0xC5C, Category::Cn),
    (0xC5D, 0xC5D, Category::Lo),
    (0xC5E, 0xC5F, Category::Cn),
    (0xC60, 0xC61, Category::Lo),
    (0xC62, 0xC63, Category::Mn),
    (0xC64, 0xC65, Category::Cn),
    (0xC66, 0xC6F, Category::Nd),
    (0xC70, 0xC76, Category::Cn),
    (0xC77, 0xC77, Category::Po),
    (0xC78, 0xC7E, Category::No),
    (0xC7F, 0xC7F, Category::So),
    (0xC80, 0xC80, Category::Lo),
    (0xC81, 0xC81, Category::Mn),
    (0xC82, 0xC83, Category::Mc),
    (0xC84, 0xC84, Category::Po),
    (0xC85, 0xC8C, Category::Lo),
    (0xC8D, 0xC8D, Category::Cn),
    (0xC8E, 0xC90, Category::Lo),
    (0xC91, 0xC91, Category::Cn),
    (0xC92, 0xCA8, Category::Lo),
    (0xCA9, 0xCA9, Category::Cn),
    (0xCAA, 0xCB3, Category::Lo),
    (0xCB4, 0xCB4, Category::Cn),
    (0xCB5, 0xCB9, Category::Lo),
    (0xCBA, 0xCBB, Category::Cn),
    (0xCBC, 0xCBC, Category::Mn),
    (0xCBD, 0xCBD, Category::Lo),
    (0xCBE, 0xCBE, Category::Mc),
    (0xCBF, 0xCBF, Category::Mn),
    (0xCC0, 0xCC4, Category::Mc),
    (0xCC5, 0xCC5, Category::Cn),
    (0xCC6, 0xCC6, Category::Mn),
    (0xCC7, 0xCC8, Category::Mc),
    (0xCC9, 0xCC9, Category::Cn),
    (0xCCA, 0xCCB, Category::Mc),
    (0xCCC, 0xCCD, Category::Mn),
    (0xCCE, 0xCD4, Category::Cn),
    (0xCD5, 0xCD6, Category::Mc),
    (0xCD7, 0xCDC, Category::Cn),
    (0xCDD, 0xCDE, Category::Lo),
    (0xCDF, 0xCDF, Category::Cn),
    (0xCE0, 0xCE1, Category::Lo),
    (0xCE2, 0xCE3, Category::Mn),
    (0xCE4, 0xCE5, Category::Cn),
    (0xCE6, 0xCEF, Category::Nd),
    (0xCF0, 0xCF0, Category::Cn),
    (0xCF1, 0xCF2, Category::Lo),
    (0xCF3, 0xCFF, Category::Cn),
    (0xD00, 0xD01, Category::Mn),
    (0xD02, 0xD03, Category::Mc),
    (0xD04, 0xD0C, Category::Lo),
    (0xD0D, 0xD0D, Category::Cn),
    (0xD0E, 0xD10, Category::Lo),
    (0xD11, 0xD11, Category::Cn),
    (0xD12, 0xD3A, Category::Lo),
    (0xD3B, 0xD3C, Category::Mn),
    (0xD3D, 0xD3D, Category::Lo),
    (0xD3E, 0xD40, Category::Mc),
    (0xD41, 0xD44, Category::Mn),
    (0xD45, 0xD45, Category::Cn),
    (0xD46, 0xD48, Category::Mc),
    (0xD49, 0xD49, Category::Cn),
    (0xD4A, 0xD4C, Category::Mc),
    (0xD4D, 0xD4D, Category::Mn),
    (0xD4E, 0xD4E, Category::Lo),
    (0xD4F, 0xD4F, Category::So),
    (0xD50, 0xD53, Category::Cn),
    (0xD54, 0xD56, Category::Lo),
    (0xD57, 0xD57, Category::Mc),
    (0xD58, 0xD5E, Category::No),
    (0xD5F, 0xD61, Category::Lo),
    (0xD62, 0xD63, Category::Mn),
    (0xD64, 0xD65, Category::Cn),
    (0xD66, 0xD6F, Category::Nd),
    (0xD70, 0xD78, Category::No),
    (0xD79, 0xD79, Category::So),
    (0xD7A, 0xD7F, Category::Lo),
    (0xD80, 0xD80, Category::Cn),
    (0xD81, 0xD81, Category::Mn),
    (0xD82, 0xD83, Category::Mc),
    (0xD84, 0xD84, Category::Cn),
    (0xD85, 0xD96, Category::Lo),
    (0xD97, 0xD99, Category::Cn),
    (0xD9A, 0xDB1, Category::Lo),
    (0xDB2, 0xDB2, Category::Cn),
    (0xDB3, 0xDBB, Category::Lo),
    (0xDBC, 0xDBC, Category::Cn),
    (0xDBD, 0xDBD, Category::Lo),
    (0xDBE, 0xDBF, Category::Cn),
    (0xDC0, 0xDC6, Category::Lo),
    (0xDC7, 0xDC9, Category::Cn),
    (0xDCA, 0xDCA, Category::Mn),
    (0xDCB, 0xDCE, Category::Cn),
    (0xDCF, 0xDD1, Category::Mc),
    (0xDD2, 0xDD4, Category::Mn),
    (0xDD5, 0xDD5, Category::Cn),
    (0xDD6, 0xDD6, Category::Mn),
    (0xDD7, 0xDD7, Category::Cn),
    (0xDD8, 0xDDF, Category::Mc),
    (0xDE0, 0xDE5, Category::Cn),
    (0xDE6, 0xDEF, Category::Nd),
    (0xDF0, 0xDF1, Category::Cn),
    (0xDF2, 0xDF3, Category::Mc),
    (0xDF4, 0xDF4, Category::Po),
    (0xDF5, 0xE00, Category::Cn),
    (0xE01, 0xE30, Category::Lo),
    (0xE31, 0xE31, Category::Mn),
    (0xE32, 0xE33, Category::Lo),
    (0xE34, 0xE3A, Category::Mn),
    (0xE3B, 0xE3E, Category::Cn),
    (0xE3F, 0xE3F, Category::Sc),
    (0xE40, 0xE45, Category::Lo),
    (0xE46, 0xE46, Category::Lm),
    (0xE47, 0xE4E, Category::Mn),
    (0xE4F, 0xE4F, Category::Po),
    (0xE50, 0xE59, Category::Nd),
    (0xE5A, 0xE5B, Category::Po),
    (0xE5C, 0xE80, Category::Cn),
    (0xE81, 0xE82, Category::Lo),
    (0xE83, 0xE83, Category::Cn),
    (0xE84, 0xE84, Category::Lo),
    (0xE85, 0xE85, Category::Cn),
    (0xE86, 0xE8A, Category::Lo),
    (0xE8B, 0xE8B, Category::Cn),
    (0xE8C, 0xEA3, Category::Lo),
    (0xEA4, 0xEA4, Category::Cn),
    (0xEA5, 0xEA5, Category::Lo),
    (0xEA6, 0xEA6, Category::Cn),
    (0xEA7, 0xEB0, Category::Lo),
    (0xEB1, 0xEB1, Category::Mn),
    (0xEB2, 0xEB3, Category::Lo),
    (0xEB4, 0xEBC, Category::Mn),
    (0xEBD, 0xEBD, Category::Lo),
    (0xEBE, 0xEBF, Category::Cn),
    (0xEC0, 0xEC4, Category::Lo),
    (0xEC5, 0xEC5, Category::Cn),
    (0xEC6, 0xEC6, Category::Lm),
    (0xEC7, 0xEC7, Category::Cn),
    (0xEC8, 0xECD, Category::Mn),
    (0xECE, 0xECF, Category::Cn),
    (0xED0, 0xED9, Category::Nd),
    (0xEDA, 0xEDB, Category::Cn),
    (0xEDC, 0xEDF, Category::Lo),
    (0xEE0, 0xEFF, Category::Cn),
    (0xF00, 0xF00, Category::Lo),
    (0xF01, 0xF03, Category::So),
    (0xF04, 0xF12, Category::Po),
    (0xF13, 0xF13, Category::So),
    (0xF14, 0xF14, Category::Po),
    (0xF15, 0xF17, Category::So),
    (0xF18, 0xF19, Category::Mn),
    (0xF1A, 0xF1F, Category::So),
    (0xF20, 0xF29, Category::Nd),
    (0xF2A, 0xF33, Category::No),
    (0xF34, 0xF34, Category::So),
    (0xF35, 0xF35, Category::Mn),
    (0xF36, 0xF36, Category::So),
    (0xF37, 0xF37, Category::Mn),
    (0xF38, 0xF38, Category::So),
    (0xF39, 0xF39, Category::Mn),
    (0xF3A, 0xF3A, Category::Ps),
    (0xF3B, 0xF3B, Category::Pe),
    (0xF3C, 0xF3C, Category::Ps),
    (0xF3D, 0xF3D, Category::Pe),
    (0xF3E, 0xF3F, Category::Mc),
    (0xF40, 0xF47, Category::Lo),
    (0xF48, 0xF48, Category::Cn),
    (0xF49, 0xF6C, Category::Lo),
    (0xF6D, 0xF70, Category::Cn),
    (0xF71, 0xF7E, Category::Mn),
    (0xF7F, 0xF7F, Category::Mc),
    (0xF80, 0xF84, Category::Mn),
    (0xF85, 0xF85, Category::Po),
    (0xF86, 0xF87, Category::Mn),
    (0xF88, 0xF8C, Category::Lo),
    (0xF8D, 0xF97, Category::Mn),
    (0xF98, 0xF98, Category::Cn),
    (0xF99, 0xFBC, Category::Mn),
    (0xFBD, 0xFBD, Category::Cn),
    (0xFBE, 0xFC5, Category::So),
    (0xFC6, 0xFC6, Category::Mn),
    (0xFC7, 0xFCC, Category::So),
    (0xFCD, 0xFCD, Category::Cn),
    (0xFCE, 0xFCF, Category::So),
    (0xFD0, 0xFD4, Category::Po),
    (0xFD5, 0xFD8, Category::So),
    (0xFD9, 0xFDA, Category::Po),
    (0xFDB, 0xFFF, Category::Cn),
    (0x1000, 0x102A, Category::Lo),
    (0x102B, 0x102C, Category::Mc),
    (0x102D, 0x1030, Category::Mn),
    (0x1031, 0x1031, Category::Mc),
    (0x1032, 0x1037, Category::Mn),
    (0x1038, 0x1038, Category::Mc),
    (0x1039, 0x103A, Category::Mn),
    (0x103B, 0x103C, Category::Mc),
    (0x103D, 0x103E, Category::Mn),
    (0x103F, 0x103F, Category::Lo),
    (0x1040, 0x1049, Category::Nd),
    (0x104A, 0x104F, Category::Po),
    (0x1050, 0x1055, Category::Lo),
    (0x1056, 0x1057, Category::Mc),
    (0x1058, 0x1059, Category::Mn),
    (0x105A, 0x105D, Category::Lo),
    (0x105E, 0x1060, Category::Mn),
    (0x1061, 0x1061, Category::Lo),
    (0x1062, 0x1064, Category::Mc),
    (0x1065, 0x1066, Category::Lo),
    (0x1067, 0x106D, Category::Mc),
    (0x106E, 0x1070, Category::Lo),
    (0x1071, 0x1074, Category::Mn),
    (0x1075, 0x1081, Category::Lo),
    (0x1082, 0x1082, Category::Mn),
    (0x1083, 0x1084, Category::Mc),
    (0x1085, 0x1086, Category::Mn),
    (0x1087, 0x108C, Category::Mc),
    (0x108D, 0x108D, Category::Mn),
    (0x108E, 0x108E, Category::Lo),
    (0x108F, 0x108F, Category::Mc),
    (0x1090, 0x1099, Category::Nd),
    (0x109A, 0x109C, Category::Mc),
    (0x109D, 0x109D, Category::Mn),
    (0x109E, 0x109F, Category::So),
    (0x10A0, 0x10C5, Category::Lu),
    (0x10C6, 0x10C6, Category::Cn),
    (0x10C7, 0x10C7, Category::Lu),
    (0x10C8, 0x10CC, Category::Cn),
    (0x10CD, 0x10CD, Category::Lu),
    (0x10CE, 0x10CF, Category::Cn),
    (0x10D0, 0x10FA, Category::Ll),
    (0x10FB, 0x10FB, Category::Po),
    (0x10FC, 0x10FC, Category::Lm),
    (0x10FD, 0x10FF, Category::Ll),
    (0x1100, 0x1248, Category::Lo),
    (0x1249, 0x1249, Category::Cn),
    (0x124A, 0x124D, Category::Lo),
    (0x124E, 0x124F, Category::Cn),
    (0x1250, 0x1256, Category::Lo),
    (0x1257, 0x1257, Category::Cn),
    (0x1258, 0x1258, Category::Lo),
    (0x1259, 0x1259, Category::Cn),
    (0x125A, 0x125D, Category::Lo),
    (0x125E, 0x125F, Category::Cn),
    (0x1260, 0x1288, Category::Lo),
    (0x1289, 0x1289, Category::Cn),
    (0x128A, 0x128D, Category::Lo),
    (0x128E, 0x128F, Category::Cn),
    (0x1290, 0x12B0, Category::Lo),
    (0x12B1, 0x12B1, Category::Cn),
    (0x12B2, 0x12B5, Category::Lo),
    (0x12B6, 0x12B7, Category::Cn),
    (0x12B8, 0x12BE, Category::Lo),
    (0x12BF, 0x12BF, Category::Cn),
    (0x12C0, 0x12C0, Category::Lo),
    (0x12C1, 0x12C1, Category::Cn),
    (0x12C2, 0x12C5, Category::Lo),
    (0x12C6, 0x12C7, Category::Cn),
    (0x12C8, 0x12D6, Category::Lo),
    (0x12D7, 0x12D7, Category::Cn),
    (0x12D8, 0x1310, Category::Lo),
    (0x1311, 0x1311, Category::Cn),
    (0x1312, 0x1315, Category::Lo),
    (0x1316, 0x1317, Category::Cn),
    (0x1318, 0x135A, Category::Lo),
    (0x135B, 0x135C, Category::Cn),
    (0x135D, 0x135F, Category::Mn),
    (0x1360, 0x1368, Category::Po),
    (0x1369, 0x137C, Category::No),
    (0x137D, 0x137F, Category::Cn),
    (0x1380, 0x138F, Category::Lo),
    (0x1390, 0x1399, Category::So),
    (0x139A, 0x139F, Category::Cn),
    (0x13A0, 0x13F5, Category::Lu),
    (0x13F6, 0x13F7, Category::Cn),
    (0x13F8, 0x13FD, Category::Ll),
    (0x13FE, 0x13FF, Category::Cn),
    (0x1400, 0x1400, Category::Pd),
    (0x1401, 0x166C, Category::Lo),
    (0x166D, 0x166D, Category::So),
    (0x166E, 0x166E, Category::Po),
    (0x166F, 0x167F, Category::Lo),
    (0x1680, 0x1680, Category::Zs),
    (0x1681, 0x169A, Category::Lo),
    (0x169B, 0x169B, Category::Ps),
    (0x169C, 0x169C, Category::Pe),
    (0x169D, 0x169F, Category::Cn),
    (0x16A0, 0x16EA, Category::Lo),
    (0x16EB, 0x16ED, Category::Po),
    (0x16EE, 0x16F0, Category::Nl),
    (0x16F1, 0x16F8, Category::Lo),
    (0x16F9, 0x16FF, Category::Cn),
    (0x1700, 0x1711, Category::Lo),
    (0x1712, 0x1714, Category::Mn),
    (0x1715, 0x1715, Category::Mc),
    (0x1716, 0x171E, Category::Cn),
    (0x171F, 0x1731, Category::Lo),
    (0x1732, 0x1733, Category::Mn),
    (0x1734, 0x1734, Category::Mc),
    (0x1735, 0x1736, Category::Po),
    (0x1737, 0x173F, Category::Cn),
    (0x1740, 0x1751, Category::Lo),
    (0x1752, 0x1753, Category::Mn),
    (0x1754, 0x175F, Category::Cn),
    (0x1760, 0x176C, Category::Lo),
    (0x176D, 0x176D, Category::Cn),
    (0x176E, 0x1770, Category::Lo),
    (0x1771, 0x1771, Category::Cn),
    (0x1772, 0x1773, Category::Mn),
    (0x1774, 0x177F, Category::Cn),
    (0x1780, 0x17B3, Category::Lo),
    (0x17B4, 0x17B5, Category::Mn),
    (0x17B6, 0x17B6, Category::Mc),
    (0x17B7, 0x17BD, Category::Mn),
    (0x17BE, 0x17C5, Category::Mc),
    (0x17C6, 0x17C6, Category::Mn),
    (0x17C7, 0x17C8, Category::Mc),
    (0x17C9, 0x17D3, Category::Mn),
    (0x17D4, 0x17D6, Category::Po),
    (0x17D7, 0x17D7, Category::Lm),
    (0x17D8, 0x17DA, Category::Po),
    (0x17DB, 0x17DB, Category::Sc),
    (0x17DC, 0x17DC, Category::Lo),
    (0x17DD, 0x17DD, Category::Mn),
    (0x17DE, 0x17DF, Category::Cn),
    (0x17E0, 0x17E9, Category::Nd),
    (0x17EA, 0x17EF, Category::Cn),
    (0x17F0, 0x17F9, Category::No),
    (0x17FA, 0x17FF, Category::Cn),
    (0x1800, 0x1805, Category::Po),
    (0x1806, 0x1806, Category::Pd),
    (0x1807, 0x180A, Category::Po),
    (0x180B, 0x180D, Category::Mn),
    (0x180E, 0x180E, Category::Format),
    (0x180F, 0x180F, Category::Mn),
    (0x1810, 0x1819, Category::Nd),
    (0x181A, 0x181F, Category::Cn),
    (0x1820, 0x1842, Category::Lo),
    (0x1843, 0x1843, Category::Lm),
    (0x1844, 0x1878, Category::Lo),
    (0x1879, 0x187F, Category::Cn),
    (0x1880, 0x1884, Category::Lo),
    (0x1885, 0x1886, Category::Mn),
    (0x1887, 0x18A8, Category::Lo),
    (0x18A9, 0x18A9, Category::Mn),
    (0x18AA, 0x18AA, Category::Lo),
    (0x18AB, 0x18AF, Category::Cn),
    (0x18B0, 0x18F5, Category::Lo),
    (0x18F6, 0x18FF, Category::Cn),
    (0x1900, 0x191E, Category::Lo),
    (0x191F, 0x191F, Category::Cn),
    (0x1920, 0x1922, Category::Mn),
    (0x1923, 0x1926, Category::Mc),
    (0x1927, 0x1928, Category::Mn),
    (0x1929, 0x192B, Category::Mc),
    (0x192C, 0x192F, Category::Cn),
    (0x1930, 0x1931, Category::Mc),
    (0x1932, 0x1932, Category::Mn),
    (0x1933, 0x1938, Category::Mc),
    (0x1939, 0x193B, Category::Mn),
    (0x193C, 0x193F, Category::Cn),
    (0x1940, 0x1940, Category::So),
    (0x1941, 0x1943, Category::Cn),
    (0x1944, 0x1945, Category::Po),
    (0x1946, 0x194F, Category::Nd),
    (0x1950, 0x196D, Category::Lo),
    (0x196E, 0x196F, Category::Cn),
    (0x1970, 0x1974, Category::Lo),
    (0x1975, 0x197F, Category::Cn),
    (0x1980, 0x19AB, Category::Lo),
    (0x19AC, 0x19AF, Category::Cn),
    (0x19B0, 0x19C9, Category::Lo),
    (0x19CA, 0x19CF, Category::Cn),
    (0x19D0, 0x19D9, Category::Nd),
    (0x19DA, 0x19DA, Category::No),
    (0x19DB, 0x19DD, Category::Cn),
    (0x19DE, 0x19FF, Category::So),
    (0x1A00, 0x1A16, Category::Lo),
    (0x1A17, 0x1A18, Category::Mn),
    (0x1A19, 0x1A1A, Category::Mc),
    (0x1A1B, 0x1A1B, Category::Mn),
    (0x1A1C, 0x1A1D, Category::Cn),
    (0x1A1E, 0x1A1F, Category::Po),
    (0x1A20, 0x1A54, Category::Lo),
    (0x1A55, 0x1A55, Category::Mc),
    (0x1A56, 0x1A56, Category::Mn),
    (0x1A57, 0x1A57, Category::Mc),
    (0x1A58, 0x1A5E, Category::Mn),
    (0x1A5F, 0x1A5F, Category::Cn),
    (0x1A60, 0x1A60, Category::Mn),
    (0x1A61, 0x1A61, Category::Mc),
    (0x1A62, 0x1A62, Category::Mn),
    (0x1A63, 0x1A64, Category::Mc),
    (0x1A65, 0x1A6C, Category::Mn),
    (0x1A6D, 0x1A72, Category::Mc),
    (0x1A73, 0x1A7C, Category::Mn),
    (0x1A7D, 0x1A7E, Category::Cn),
    (0x1A7F, 0x1A7F, Category::Mn),
    (0x1A80, 0x1A89, Category::Nd),
    (0x1A8A, 0x1A8F, Category::Cn),
    (0x1A90, 0x1A99, Category::Nd),
    (0x1A9A, 0x1A9F, Category::Cn),
    (0x1AA0, 0x1AA6, Category::Po),
    (0x1AA7, 0x1AA7, Category::Lm),
    (0x1AA8, 0x1AAD, Category::Po),
    (0x1AAE, 0x1AAF, Category::Cn),
    (0x1AB0, 0x1ABD, Category::Mn),
    (0x1ABE, 0x1ABE, Category::Me),
    (0x1ABF, 0x1ACE, Category::Mn),
    (0x1ACF, 0x1AFF, Category::Cn),
    (0x1B00, 0x1B03, Category::Mn),
    (0x1B04, 0x1B04, Category::Mc),
    (0x1B05, 0x1B33, Category::Lo),
    (0x1B34, 0x1B34, Category::Mn),
    (0x1B35, 0x1B35, Category::Mc),
    (0x1B36, 0x1B3A, Category::Mn),
    (0x1B3B, 0x1B3B, Category::Mc),
    (0x1B3C, 0x1B3C, Category::Mn),
    (0x1B3D, 0x1B41, Category::Mc),
    (0x1B42, 0x1B42, Category::Mn),
    (0x1B43, 0x1B44, Category::Mc),
    (0x1B45, 0x1B4C, Category::Lo),
    (0x1B4D, 0x1B4F, Category::Cn),
    (0x1B50, 0x1B59, Category::Nd),
    (0x1B5A, 0x1B60, Category::Po),
    (0x1B61, 0x1B6A, Category::So),
    (0x1B6B, 0x1B73, Category::Mn),
    (0x1B74, 0x1B7C, Category::So),
    (0x1B7D, 0x1B7E, Category::Po),
    (0x1B7F, 0x1B7F, Category::Cn),
    (0x1B80, 0x1B81, Category::Mn),
    (0x1B82, 0x1B82, Category::Mc),
    (0x1B83, 0x1BA0, Category::Lo),
    (0x1BA1, 0x1BA1, Category::Mc),
    (0x1BA2, 0x1BA5, Category::Mn),
    (0x1BA6, 0x1BA7, Category::Mc),
    (0x1BA8, 0x1BA9, Category::Mn),
    (0x1BAA, 0x1BAA, Category::Mc),
    (0x1BAB, 0x1BAD, Category::Mn),
    (0x1BAE, 0x1BAF, Category::Lo),
    (0x1BB0, 0x1BB9, Category::Nd),
    (0x1BBA, 0x1BE5, Category::Lo),
    (0x1BE6, 0x1BE6, Category::Mn),
    (0x1BE7, 0x1BE7, Category::Mc),
    (0x1BE8, 0x1BE9, Category::Mn),
    (0x1BEA, 0x1BEC, Category::Mc),
    (0x1BED, 0x1BED, Category::Mn),
    (0x1BEE, 0x1BEE, Category::Mc),
    (0x1BEF, 0x1BF1, Category::Mn),
    (0x1BF2, 0x1BF3, Category::Mc),
    (0x1BF4, 0x1BFB, Category::Cn),
    (0x1BFC, 0x1BFF, Category::Po),
    (0x1C00, 0x1C23, Category::Lo),
    (0x1C24, 0x1C2B, Category::Mc),
    (0x1C2C, 0x1C33, Category::Mn),
    (0x1C34, 0x1C35, Category::Mc),
    (0x1C36, 0x1C37, Category::Mn),
    (0x1C38, 0x1C3A, Category::Cn),
    (0x1C3B, 0x1C3F, Category::Po),
    (0x1C40, 0x1C49, Category::Nd),
    (0x1C4A, 0x1C4C, Category::Cn),
    (0x1C4D, 0x1C4F, Category::Lo),
    (0x1C50, 0x1C59, Category::Nd),
    (0x1C5A, 0x1C77, Category::Lo),
    (0x1C78, 0x1C7D, Category::Lm),
    (0x1C7E, 0x1C7F, Category::Po),
    (0x1C80, 0x1C88, Category::Ll),
    (0x1C89, 0x1C8F, Category::Cn),
    (0x1C90, 0x1CBA, Category::Lu),
    (0x1CBB, 0x1CBC, Category::Cn),
    (0x1CBD, 0x1CBF, Category::Lu),
    (0x1CC0, 0x1CC7, Category::Po),
    (0x1CC8, 0x1CCF, Category::Cn),
    (0x1CD0, 0x1CD2, Category::Mn),
    (0x1CD3, 0x1CD3, Category::Po),
    (0x1CD4, 0x1CE0, Category::Mn),
    (0x1CE1, 0x1CE1, Category::Mc),
    (0x1CE2, 0x1CE8, Category::Mn),
    (0x1CE9, 0x1CEC, Category::Lo),
    (0x1CED, 0x1CED, Category::Mn),
    (0x1CEE, 0x1CF3, Category::Lo),
    (0x1CF4, 0x1CF4, Category::Mn),
    (0x1CF5, 0x1CF6, Category::Lo),
    (0x1CF7, 0x1CF7, Category::Mc),
    (0x1CF8, 0x1CF9, Category::Mn),
    (0x1CFA, 0x1CFA, Category::Lo),
    (0x1CFB, 0x1CFF, Category::Cn),
    (0x1D00, 0x1D2B, Category::Ll),
    (0x1D2C, 0x1D6A, Category::Lm),
    (0x1D6B, 0x1D77, Category::Ll),
    (0x1D78, 0x1D78, Category::Lm),
    (0x1D79, 0x1D9A, Category::Ll),
    (0x1D9B, 0x1DBF, Category::Lm),
    (0x1DC0, 0x1DFF, Category::Mn),
    (0x1E00, 0x1E00, Category::Lu),
    (0x1E01, 0x1E01, Category::Ll),
    (0x1E02, 0x1E02, Category::Lu),
    (0x1E03, 0x1E03, Category::Ll),
    (0x1E04, 0x1E04, Category::Lu),
    (0x1E05, 0x1E05, Category::Ll),
    (0x1E06, 0x1E06, Category::Lu),
    (0x1E07, 0x1E07, Category::Ll),
    (0x1E08, 0x1E08, Category::Lu),
    (0x1E09, 0x1E09, Category::Ll),
    (0x1E0A, 0x1E0A, Category::Lu),
    (0x1E0B, 0x1E0B, Category::Ll),
    (0x1E0C, 0x1E0C, Category::Lu),
    (0x1E0D, 0x1E0D, Category::Ll),
    (0x1E0E, 0x1E0E, Category::Lu),
    (0x1E0F, 0x1E0F, Category::Ll),
    (0x1E10, 0x1E10, Category::Lu),
    (0x1E11, 0x1E11, Category::Ll),
    (0x1E12, 0x1E12, Category::Lu),
    (0x1E13, 0x1E13, Category::Ll),
    (0x1E14, 0x1E14, Category::Lu),
    (0x1E15, 0x1E15, Category::Ll),
    (0x1E16, 0x1E16, Category::Lu),
    (0x1E17, 0x1E17, Category::Ll),
    (0x1E18, 0x1E18, Category::Lu),
    (0x1E19, 0x1E19, Category::Ll),
    (0x1E1A, 0x1E1A, Category::Lu),
    (0x1E1B, 0x1E1B, Category::Ll),
    (0x1E1C, 0x1E1C, Category::Lu),
    (0x1E1D, 0x1E1D, Category::Ll),
    (0x1E1E, 0x1E1E, Category::Lu),
    (0x1E1F, 0x1E1F, Category::Ll),
    (0x1E20, 0x1E20, Category::Lu),
    (0x1E21, 0x1E21, Category::Ll),
    (0x1E22, 0x1E22, Category::Lu),
    (0x1E23, 0x1E23, Category::Ll),
    (0x1E24, 0x1E24, Category::Lu),
    (0x1E25, 0x1E25, Category::Ll),
    (0x1E26, 0x1E26, Category::Lu),
    (0x1E27, 0x1E27, Category::Ll),
    (0x1E28, 0x1E28, Category::Lu),
    (0x1E29, 0x1E29, Category::Ll),
    (0x1E2A, 0x1E2A, Category::Lu),
    (0x1E2B, 0x1E2B, Category::Ll),
    (0x1E2C, 0x1E2C, Category::Lu),
    (0x1E2D, 0x1E2D, Category::Ll),
    (0x1E2E, 0x1E2E, Category::Lu),
    (0x1E2F, 0x1E2F, Category::Ll),
    (0x1E30, 0x1E30, Category::Lu),
    (0x1E31, 0x1E31, Category::Ll),
    (0x1E32, 0x1E32, Category::Lu),
    (0x1E33, 0x1E33, Category::Ll),
    (0x1E34, 0x1E34, Category::Lu),
    (0x1E35, 0x1E35, Category::Ll),
    (0x1E36, 0x1E36, Category::Lu),
    (0x1E37, 0x1E37, Category::Ll),
    (0x1E38, 0x1E38, Category::Lu),
    (0x1E39, 0x1E39, Category::Ll),
    (0x1E3A, 0x1E3A, Category::Lu),
    (0x1E3B, 0x1E3B, Category::Ll),
    (0x1E3C, 0x1E3C, Category::Lu),
    (0x1E3D, 0x1E3D, Category::Ll),
    (0x1E3E, 0x1E3E, Category::Lu),
    (0x1E3F, 0x1E3F, Category::Ll),
    (0x1E40, 0x1E40, Category::Lu),
    (0x1E41, 0x1E41, Category::Ll),
    (0x1E42, 0x1E42, Category::Lu),
    (0x1E43, 0x1E43, Category::Ll),
    (0x1E44, 0x1E44, Category::Lu),
    (0x1E45, 0x1E45, Category::Ll),
    (0x1E46, 0x1E46, Category::Lu),
    (0x1E47, 0x1E47, Category::Ll),
    (0x1E48, 0x1E48, Category::Lu),
    (0x1E49, 0x1E49, Category::Ll),
    (0x1E4A, 0x1E4A, Category::Lu),
    (0x1E4B, 0x1E4B, Category::Ll),
    (0x1E4C, 0x1E4C, Category::Lu),
    (0x1E4D, 0x1E4D, Category::Ll),
    (0x1E4E, 0x1E4E, Category::Lu),
    (0x1E4F, 0x1E4F, Category::Ll),
    (0x1E50, 0x1E50, Category::Lu),
    (0x1E51, 0x1E51, Category::Ll),
    (0x1E52, 0x1E52, Category::Lu),
    (0x1E53, 0x1E53, Category::Ll),
    (0x1E54, 0x1E54, Category::Lu),
    (0x1E55, 0x1E55, Category::Ll),
    (0x1E56, 0x1E56, Category::Lu),
    (0x1E57, 0x1E57, Category::Ll),
    (0x1E58, 0x1E58, Category::Lu),
    (0x1E59, 0x1E59, Category::Ll),
    (0x1E5A, 0x1E5A, Category::Lu),
    (0x1E5B, 0x1E5B, Category::Ll),
    (0x1E5C, 0x1E5C, Category::Lu),
    (0x1E5D, 0x1E5D, Category::Ll),
    (0x1E5E, 0x1E5E, Category::Lu),
    (0x1E5F, 0x1E5F, Category::Ll),
    (0x1E60, 0x1E60, Category::Lu),
    (0x1E61, 0x1E61, Category::Ll),
    (0x1E62, 0x1E62, Category::Lu),
    (0x1E63, 0x1E63, Category::Ll),
    (0x1E64, 0x1E64, Category::Lu),
    (0x1E65, 0x1E65, Category::Ll),
    (0x1E66, 0x1E66, Category::Lu),
    (0x1E67, 0x1E67, Category::Ll),
    (0x1E68, 0x1E68, Category::Lu),
    (0x1E69, 0x1E69, Category::Ll),
    (0x1E6A, 0x1E6A, Category::Lu),
    (0x1E6B, 0x1E6B, Category::Ll),
    (0x1E6C, 0x1E6C, Category::Lu),
    (0x1E6D, 0x1E6D, Category::Ll),
    (0x1E6E, 0x1E6E, Category::Lu),
    (0x1E6F, 0x1E6F, Category::Ll),
    (0x1E70, 0x1E70, Category::Lu),
    (0x1E71, 0x1E71, Category::Ll),
    (0x1E72, 0x1E72, Category::Lu),
    (0x1E73, 0x1E73, Category::Ll),
    (0x1E74, 0x1E74, Category::Lu),
    (0x1E75, 0x1E75, Category::Ll),
    (0x1E76, 0x1E76, Category::Lu),
    (0x1E77, 0x1E77, Category::Ll),
    (0x1E78, 0x1E78, Category::Lu),
    (0x1E79, 0x1E79, Category::Ll),
    (0x1E7A, 0x1E7A, Category::Lu),
    (0x1E7B, 0x1E7B, Category::Ll),
    (0x1E7C, 0x1E7C, Category::Lu),
    (0x1E7D, 0x1E7D, Category::Ll),
    (0x1E7E, 0x1E7E, Category::Lu),
    (0x1E7F, 0x1E7F, Category::Ll),
    (0x1E80, 0x1E80, Category::Lu),
    (0x1E81, 0x1E81, Category::Ll),
    (0x1E82, 0x1E82, Category::Lu),
    (0x1E83, 0x1E83, Category::Ll),
    (0x1E84, 0x1E84, Category::Lu),
    (0x1E85, 0x1E85, Category::Ll),
    (0x1E86, 0x1E86, Category::Lu),
    (0x1E87, 0x1E87, Category::Ll),
    (0x1E88, 0x1E88, Category::Lu),
    (0x1E89, 0x1E89, Category::Ll),
    (0x1E8A, 0x1E8A, Category::Lu),
    (0x1E8B, 0x1E8B, Category::Ll),
    (0x1E8C, 0x1E8C, Category::Lu),
    (0x1E8D, 0x1E8D, Category::Ll),
    (0x1E8E, 0x1E8E, Category::Lu),
    (0x1E8F, 0x1E8F, Category::Ll),
    (0x1E90, 0x1E90, Category::Lu),
    (0x1E91, 0x1E91, Category::Ll),
    (0x1E92, 0x1E92, Category::Lu),
    (0x1E93, 0x1E93, Category::Ll),
    (0x1E94, 0x1E94, Category::Lu),
    (0x1E95, 0x1E9D, Category::Ll),
    (0x1E9E, 0x1E9E, Category::Lu),
    (0x1E9F, 0x1E9F, Category::Ll),
    (0x1EA0, 0x1EA0, Category::Lu),
    (0x1EA1, 0x1EA1, Category::Ll),
    (0x1EA2, 0x1EA2, Category::Lu),
    (0x1EA3, 0x1EA3, Category::Ll),
    (0x1EA4, 0x1EA4, Category::Lu),
    (0x1EA5, 0x1EA5, Category::Ll),
    (0x1EA6, 0x1EA6, Category::Lu),
    (0x1EA7, 0x1EA7, Category::Ll),
    (0x1EA8, 0x1EA8, Category::Lu),
    (0x1EA9, 0x1EA9, Category::Ll),
    (0x1EAA, 0x1EAA, Category::Lu),
    (0x1EAB, 0x1EAB, Category::Ll),
    (0x1EAC, 0x1EAC, Category::Lu),
    (0x1EAD, 0x1EAD, Category::Ll),
    (0x1EAE, 0x1EAE, Category::Lu),
    (0x1EAF, 0x1EAF, Category::Ll),
    (0x1EB0, 0x1EB0, Category::Lu),
    (0x1EB1, 0x1EB1, Category::Ll),
    (0x1EB2, 0x1EB2, Category::Lu),
    (0x1EB3, 0x1EB3, Category::Ll),
    (0x1EB4, 0x1EB4, Category::Lu),
    (0x1EB5, 0x1EB5, Category::Ll),
    (0x1EB6, 0x1EB6, Category::Lu),
    (0x1EB7, 0x1EB7, Category::Ll),
    (0x1EB8, 0x1EB8, Category::Lu),
    (0x1EB9, 0x1EB9, Category::Ll),
    (0x1EBA, 0x1EBA, Category::Lu),
    (0x1EBB, 0x1EBB, Category::Ll),
    (0x1EBC, 0x1EBC, Category::Lu),
    (0x1EBD, 0x1EBD, Category::Ll),
    (0x1EBE, 0x1EBE, Category::Lu),
    (0x1EBF, 0x1EBF, Category::Ll),
    (0x1EC0, 0x1EC0, Category::Lu),
    (0x1EC1, 0x1EC1, Category::Ll),
    (0x1EC2, 0x1EC2, Category::Lu),
    (0x1EC3, 0x1EC3, Category::Ll),
    (0x1EC4, 0x1EC4, Category::Lu),
    (0x1EC5, 0x1EC5, Category::Ll),
    (0x1EC6, 0x1EC6, Category::Lu),
    (0x1EC7, 0x1EC7, Category::Ll),
    (0x1EC8, 0x1EC8, Category::Lu),
    (0x1EC9, 0x1EC9, Category::Ll),
    (0x1ECA, 0x1ECA, Category::Lu),
    (0x1ECB, 0x1ECB, Category::Ll),
    (0x1ECC, 0x1ECC, Category::Lu),
    (0x1ECD, 0x1ECD, Category::Ll),
    (0x1ECE, 0x1ECE, Category::Lu),
    (0x1ECF, 0x1ECF, Category::Ll),
    (0x1ED0, 0x1ED0, Category::Lu),
    (0x1ED1, 0x1ED1, Category::Ll),
    (0x1ED2, 0x1ED2, Category::Lu),
    (0x1ED3, 0x1ED3, Category::Ll),
    (0x1ED4, 0x1ED4, Category::Lu),
    (0x1ED5, 0x1ED5, Category::Ll),
    (0x1ED6, 0x1ED6, Category::Lu),
    (0x1ED7, 0x1ED7, Category::Ll),
    (0x1ED8, 0x1ED8, Category::Lu),
    (0x1ED9, 0x1ED9, Category::Ll),
    (0x1EDA, 0x1EDA, Category::Lu),
    (0x1EDB, 0x1EDB, Category::Ll),
    (0x1EDC, 0x1EDC, Category::Lu),
    (0x1EDD, 0x1EDD, Category::Ll),
    (0x1EDE, 0x1EDE, Category::Lu),
    (0x1EDF, 0x1EDF, Category::Ll),
    (0x1EE0, 0x1EE0, Category::Lu),
    (0x1EE1, 0x1EE1, Category::Ll),
    (0x1EE2, 0x1EE2, Category::Lu),
    (0x1EE3, 0x1EE3, Category::Ll),
    (0x1EE4, 0x1EE4, Category::Lu),
    (0x1EE5, 0x1EE5, Category::Ll),
    (0x1EE6, 0x1EE6, Category::Lu),
    (0x1EE7, 0x1EE7, Category::Ll),
    (0x1EE8, 0x1EE8, Category::Lu),
    (0x1EE9, 0x1EE9, Category::Ll),
    (0x1EEA, 0x1EEA, Category::Lu),
    (0x1EEB, 0x1EEB, Category::Ll),
    (0x1EEC, 0x1EEC, Category::Lu),
    (0x1EED, 0x1EED, Category::Ll),
    (0x1EEE, 0x1EEE, Category::Lu),
    (0x1EEF, 0x1EEF, Category::Ll),
    (0x1EF0, 0x1EF0, Category::Lu),
    (0x1EF1, 0x1EF1, Category::Ll),
    (0x1EF2, 0x1EF2, Category::Lu),
    (0x1EF3, 0x1EF3, Category::Ll),
    (0x1EF4, 0x1EF4, Category::Lu),
    (0x1EF5, 0x1EF5, Category::Ll),
    (0x1EF6, 0x1EF6, Category::Lu),
    (0x1EF7, 0x1EF7, Category::Ll),
    (0x1EF8, 0x1EF8, Category::Lu),
    (0x1EF9, 0x1EF9, Category::Ll),
    (0x1EFA, 0x1EFA, Category::Lu),
    (0x1EFB, 0x1EFB, Category::Ll),
    (0x1EFC, 0x1EFC, Category::Lu),
    (0x1EFD, 0x1EFD, Category::Ll),
    (0x1EFE, 0x1EFE, Category::Lu),
    (0x1EFF, 0x1F07, Category::Ll),
    (0x1F08, 0x1F0F, Category::Lu),
    (0x1F10, 0x1F15, Category::Ll),
    (0x1F16, 0x1F17, Category::Cn),
    (0x1F18, 0x1F1D, Category::Lu),
    (0x1F1E, 0x1F1F, Category::Cn),
    (0x1F20, 0x1F27, Category::Ll),
    (0x1F28, 0x1F2F, Category::Lu),
    (0x1F30, 0x1F37, Category::Ll),
    (0x1F38, 0x1F3F, Category::Lu),
    (0x1F40, 0x1F45, Category::Ll),
    (0x1F46, 0x1F47, Category::Cn),
    (0x1F48, 0x1F4D, Category::Lu),
    (0x1F4E, 0x1F4F, Category::Cn),
    (0x1F50, 0x1F57, Category::Ll),
    (0x1F58, 0x1F58, Category::Cn),
    (0x1F59, 0x1F59, Category::Lu),
    (0x1F5A, 0x1F5A, Category::Cn),
    (0x1F5B, 0x1F5B, Category::Lu),
    (0x1F5C, 0x1F5C, Category::Cn),
    (0x1F5D, 0x1F5D, Category::Lu),
    (0x1F5E, 0x1F5E, Category::Cn),
    (0x1F5F, 0x1F5F, Category::Lu),
    (0x1F60, 0x1F67, Category::Ll),
    (0x1F68, 0x1F6F, Category::Lu),
    (0x1F70, 0x1F7D, Category::Ll),
    (0x1F7E, 0x1F7F, Category::Cn),
    (0x1F80, 0x1F87, Category::Ll),
    (0x1F88, 0x1F8F, Category::Lt),
    (0x1F90, 0x1F97, Category::Ll),
    (0x1F98, 0x1F9F, Category::Lt),
    (0x1FA0, 0x1FA7, Category::Ll),
    (0x1FA8, 0x1FAF, Category::Lt),
    (0x1FB0, 0x1FB4, Category::Ll),
    (0x1FB5, 0x1FB5, Category::Cn),
    (0x1FB6, 0x1FB7, Category::Ll),
    (0x1FB8, 0x1FBB, Category::Lu),
    (0x1FBC, 0x1FBC, Category::Lt),
    (0x1FBD, 0x1FBD, Category::Sk),
    (0x1FBE, 0x1FBE, Category::Ll),
    (0x1FBF, 0x1FC1, Category::Sk),
    (0x1FC2, 0x1FC4, Category::Ll),
    (0x1FC5, 0x1FC5, Category::Cn),
    (0x1FC6, 0x1FC7, Category::Ll),
    (0x1FC8, 0x1FCB, Category::Lu),
    (0x1FCC, 0x1FCC, Category::Lt),
    (0x1FCD, 0x1FCF, Category::Sk),
    (0x1FD0, 0x1FD3, Category::Ll),
    (0x1FD4, 0x1FD5, Category::Cn),
    (0x1FD6, 0x1FD7, Category::Ll),
    (0x1FD8, 0x1FDB, Category::Lu),
    (0x1FDC, 0x1FDC, Category::Cn),
    (0x1FDD, 0x1FDF, Category::Sk),
    (0x1FE0, 0x1FE7, Category::Ll),
    (0x1FE8, 0x1FEC, Category::Lu),
    (0x1FED, 0x1FEF, Category::Sk),
    (0x1FF0, 0x1FF1, Category::Cn),
    (0x1FF2, 0x1FF4, Category::Ll),
    (0x1FF5, 0x1FF5, Category::Cn),
    (0x1FF6, 0x1FF7, Category::Ll),
    (0x1FF8, 0x1FFB, Category::Lu),
    (0x1FFC, 0x1FFC, Category::Lt),
    (0x1FFD, 0x1FFE, Category::Sk),
    (0x1FFF, 0x1FFF, Category::Cn),
    (0x2000, 0x200A, Category::Zs),
    (0x200B, 0x200F, Category::Format),
    (0x2010, 0x2015, Category::Pd),
    (0x2016, 0x2017, Category::Po),
    (0x2018, 0x2018, Category::Pi),
    (0x2019, 0x2019, Category::Pf),
    (0x201A, 0x201A, Category::Ps),
    (0x201B, 0x201C, Category::Pi),
    (0x201D, 0x201D, Category::Pf),
    (0x201E, 0x201E, Category::Ps),
    (0x201F, 0x201F, Category::Pi),
    (0x2020, 0x2027, Category::Po),
    (0x2028, 0x2028, Category::Zl),
    (0x2029, 0x2029, Category::Zp),
    (0x202A, 0x202E, Category::Format),
    (0x202F, 0x202F, Category::Zs),
    (0x2030, 0x2038, Category::Po),
    (0x2039, 0x2039, Category::Pi),
    (0x203A, 0x203A, Category::Pf),
    (0x203B, 0x203E, Category::Po),
    (0x203F, 0x2040, Category::Pc),
    (0x2041, 0x2043, Category::Po),
    (0x2044, 0x2044, Category::Sm),
    (0x2045, 0x2045, Category::Ps),
    (0x2046, 0x2046, Category::Pe),
    (0x2047, 0x2051, Category::Po),
    (0x2052, 0x2052, Category::Sm),
    (0x2053, 0x2053, Category::Po),
    (0x2054, 0x2054, Category::Pc),
    (0x2055, 0x205E, Category::Po),
    (0x205F, 0x205F, Category::Zs),
    (0x2060, 0x2064, Category::Format),
    (0x2065, 0x2065, Category::Cn),
    (0x2066, 0x206F, Category::Format),
    (0x2070, 0x2070, Category::No),
    (0x2071, 0x2071, Category::Lm),
    (0x2072, 0x2073, Category::Cn),
    (0x2074, 0x2079, Category::No),
    (0x207A, 0x207C, Category::Sm),
    (0x207D, 0x207D, Category::Ps),
    (0x207E, 0x207E, Category::Pe),
    (0x207F, 0x207F, Category::Lm),
    (0x2080, 0x2089, Category::No),
    (0x208A, 0x208C, Category::Sm),
    (0x208D, 0x208D, Category::Ps),
    (0x208E, 0x208E, Category::Pe),
    (0x208F, 0x208F, Category::Cn),
    (0x2090, 0x209C, Category::Lm),
    (0x209D, 0x209F, Category::Cn),
    (0x20A0, 0x20C0, Category::Sc),
    (0x20C1, 0x20CF, Category::Cn),
    (0x20D0, 0x20DC, Category::Mn),
    (0x20DD, 0x20E0, Category::Me),
    (0x20E1, 0x20E1, Category::Mn),
    (0x20E2, 0x20E4, Category::Me),
    (0x20E5, 0x20F0, Category::Mn),
    (0x20F1, 0x20FF, Category::Cn),
    (0x2100, 0x2101, Category::So),
    (0x2102, 0x2102, Category::Lu),
    (0x2103, 0x2106, Category::So),
    (0x2107, 0x2107, Category::Lu),
    (0x2108, 0x2109, Category::So),
    (0x210A, 0x210A, Category::Ll),
    (0x210B, 0x210D, Category::Lu),
    (0x210E, 0x210F, Category::Ll),
    (0x2110, 0x2112, Category::Lu),
    (0x2113, 0x2113, Category::Ll),
    (0x2114, 0x2114, Category::So),
    (0x2115, 0x2115, Category::Lu),
    (0x2116, 0x2117, Category::So),
    (0x2118, 0x2118, Category::Sm),
    (0x2119, 0x211D, Category::Lu),
    (0x211E, 0x2123, Category::So),
    (0x2124, 0x2124, Category::Lu),
    (0x2125, 0x2125, Category::So),
    (0x2126, 0x2126, Category::Lu),
    (0x2127, 0x2127, Category::So),
    (0x2128, 0x2128, Category::Lu),
    (0x2129, 0x2129, Category::So),
    (0x212A, 0x212D, Category::Lu),
    (0x212E, 0x212E, Category::So),
    (0x212F, 0x212F, Category::Ll),
    (0x2130, 0x2133, Category::Lu),
    (0x2134, 0x2134, Category::Ll),
    (0x2135, 0x2138, Category::Lo),
    (0x2139, 0x2139, Category::Ll),
    (0x213A, 0x213B, Category::So),
    (0x213C, 0x213D, Category::Ll),
    (0x213E, 0x213F, Category::Lu),
    (0x2140, 0x2144, Category::Sm),
    (0x2145, 0x2145, Category::Lu),
    (0x2146, 0x2149, Category::Ll),
    (0x214A, 0x214A, Category::So),
    (0x214B, 0x214B, Category::Sm),
    (0x214C, 0x214D, Category::So),
    (0x214E, 0x214E, Category::Ll),
    (0x214F, 0x214F, Category::So),
    (0x2150, 0x215F, Category::No),
    (0x2160, 0x2182, Category::Nl),
    (0x2183, 0x2183, Category::Lu),
    (0x2184, 0x2184, Category::Ll),
    (0x2185, 0x2188, Category::Nl),
    (0x2189, 0x2189, Category::No),
    (0x218A, 0x218B, Category::So),
    (0x218C, 0x218F, Category::Cn),
    (0x2190, 0x2194, Category::Sm),
    (0x2195, 0x2199, Category::So),
    (0x219A, 0x219B, Category::Sm),
    (0x219C, 0x219F, Category::So),
    (0x21A0, 0x21A0, Category::Sm),
    (0x21A1, 0x21A2, Category::So),
    (0x21A3, 0x21A3, Category::Sm),
    (0x21A4, 0x21A5, Category::So),
    (0x21A6, 0x21A6, Category::Sm),
    (0x21A7, 0x21AD, Category::So),
    (0x21AE, 0x21AE, Category::Sm),
    (0x21AF, 0x21CD, Category::So),
    (0x21CE, 0x21CF, Category::Sm),
    (0x21D0, 0x21D1, Category::So),
    (0x21D2, 0x21D2, Category::Sm),
    (0x21D3, 0x21D3, Category::So),
    (0x21D4, 0x21D4, Category::Sm),
    (0x21D5, 0x21F3, Category::So),
    (0x21F4, 0x22FF, Category::Sm),
    (0x2300, 0x2307, Category::So),
    (0x2308, 0x2308, Category::Ps),
    (0x2309, 0x2309, Category::Pe),
    (0x230A, 0x230A, Category::Ps),
    (0x230B, 0x230B, Category::Pe),
    (0x230C, 0x231F, Category::So),
    (0x2320, 0x2321, Category::Sm),
    (0x2322, 0x2328, Category::So),
    (0x2329, 0x2329, Category::Ps),
    (0x232A, 0x232A, Category::Pe),
    (0x232B, 0x237B, Category::So),
    (0x237C, 0x237C, Category::Sm),
    (0x237D, 0x239A, Category::So),
    (0x239B, 0x23B3, Category::Sm),
    (0x23B4, 0x23DB, Category::So),
    (0x23DC, 0x23E1, Category::Sm),
    (0x23E2, 0x2426, Category::So),
    (0x2427, 0x243F, Category::Cn),
    (0x2440, 0x244A, Category::So),
    (0x244B, 0x245F, Category::Cn),
    (0x2460, 0x249B, Category::No),
    (0x249C, 0x24E9, Category::So),
    (0x24EA, 0x24FF, Category::No),
    (0x2500, 0x25B6, Category::So),
    (0x25B7, 0x25B7, Category::Sm),
    (0x25B8, 0x25C0, Category::So),
    (0x25C1, 0x25C1, Category::Sm),
    (0x25C2, 0x25F7, Category::So),
    (0x25F8, 0x25FF, Category::Sm),
    (0x2600, 0x266E, Category::So),
    (0x266F, 0x266F, Category::Sm),
    (0x2670, 0x2767, Category::So),
    (0x2768, 0x2768, Category::Ps),
    (0x2769, 0x2769, Category::Pe),
    (0x276A, 0x276A, Category::Ps),
    (0x276B, 0x276B, Category::Pe),
    (0x276C, 0x276C, Category::Ps),
    (0x276D, 0x276D, Category::Pe),
    (0x276E, 0x276E, Category::Ps),
    (0x276F, 0x276F, Category::Pe),
    (0x2770, 0x2770, Category::Ps),
    (0x2771, 0x2771, Category::Pe),
    (0x2772, 0x2772, Category::Ps),
    (0x2773, 0x2773, Category::Pe),
    (0x2774, 0x2774, Category::Ps),
    (0x2775, 0x2775, Category::Pe),
    (0x2776, 0x2793, Category::No),
    (0x2794, 0x27BF, Category::So),
    (0x27C0, 0x27C4, Category::Sm),
    (0x27C5, 0x27C5, Category::Ps),
    (0x27C6, 0x27C6, Category::Pe),
    (0x27C7, 0x27E5, Category::Sm),
    (0x27E6, 0x27E6, Category::Ps),
    (0x27E7, 0x27E7, Category::Pe),
    (0x27E8, 0x27E8, Category::Ps),
    (0x27E9, 0x27E9, Category::Pe),
    (0x27EA, 0x27EA, Category::Ps),
    (0x27EB, 0x27EB, Category::Pe),
    (0x27EC, 0x27EC, Category::Ps),
    (0x27ED, 0x27ED, Category::Pe),
    (0x27EE, 0x27EE, Category::Ps),
    (0x27EF, 0x27EF, Category::Pe),
    (0x27F0, 0x27FF, Category::Sm),
    (0x2800, 0x28FF, Category::So),
    (0x2900, 0x2982, Category::Sm),
    (0x2983, 0x2983, Category::Ps),
    (0x2984, 0x2984, Category::Pe),
    (0x2985, 0x2985, Category::Ps),
    (0x2986, 0x2986, Category::Pe),
    (0x2987, 0x2987, Category::Ps),
    (0x2988, 0x2988, Category::Pe),
    (0x2989, 0x2989, Category::Ps),
    (0x298A, 0x298A, Category::Pe),
    (0x298B, 0x298B, Category::Ps),
    (0x298C, 0x298C, Category::Pe),
    (0x298D, 0x298D, Category::Ps),
    (0x298E, 0x298E, Category::Pe),
    (0x298F, 0x298F, Category::Ps),
    (0x2990, 0x2990, Category::Pe),
    (0x2991, 0x2991, Category::Ps),
    (0x2992, 0x2992, Category::Pe),
    (0x2993, 0x2993, Category::Ps),
    (0x2994, 0x2994, Category::Pe),
    (0x2995, 0x2995, Category::Ps),
    (0x2996, 0x2996, Category::Pe),
    (0x2997, 0x2997, Category::Ps),
    (0x2998, 0x2998, Category::Pe),
    (0x2999, 0x29D7, Category::Sm),
    (0x29D8, 0x29D8, Category::Ps),
    (0x29D9, 0x29D9, Category::Pe),
    (0x29DA, 0x29DA, Category::Ps),
    (0x29DB, 0x29DB, Category::Pe),
    (0x29DC, 0x29FB, Category::Sm),
    (0x29FC, 0x29FC, Category::Ps),
    (0x29FD, 0x29FD, Category::Pe),
    (0x29FE, 0x2AFF, Category::Sm),
    (0x2B00, 0x2B2F, Category::So),
    (0x2B30, 0x2B44, Category::Sm),
    (0x2B45, 0x2B46, Category::So),
    (0x2B47, 0x2B4C, Category::Sm),
    (0x2B4D, 0x2B73, Category::So),
    (0x2B74, 0x2B75, Category::Cn),
    (0x2B76, 0x2B95, Category::So),
    (0x2B96, 0x2B96, Category::Cn),
    (0x2B97, 0x2BFF, Category::So),
    (0x2C00, 0x2C2F, Category::Lu),
    (0x2C30, 0x2C5F, Category::Ll),
    (0x2C60, 0x2C60, Category::Lu),
    (0x2C61, 0x2C61, Category::Ll),
    (0x2C62, 0x2C64, Category::Lu),
    (0x2C65, 0x2C66, Category::Ll),
    (0x2C67, 0x2C67, Category::Lu),
    (0x2C68, 0x2C68, Category::Ll),
    (0x2C69, 0x2C69, Category::Lu),
    (0x2C6A, 0x2C6A, Category::Ll),
    (0x2C6B, 0x2C6B, Category::Lu),
    (0x2C6C, 0x2C6C, Category::Ll),
    (0x2C6D, 0x2C70, Category::Lu),
    (0x2C71, 0x2C71, Category::Ll),
    (0x2C72, 0x2C72, Category::Lu),
    (0x2C73, 0x2C74, Category::Ll),
    (0x2C75, 0x2C75, Category::Lu),
    (0x2C76, 0x2C7B, Category::Ll),
    (0x2C7C, 0x2C7D, Category::Lm),
    (0x2C7E, 0x2C80, Category::Lu),
    (0x2C81, 0x2C81, Category::Ll),
    (0x2C82, 0x2C82, Category::Lu),
    (0x2C83, 0x2C83, Category::Ll),
    (0x2C84, 0x2C84, Category::Lu),
    (0x2C85, 0x2C85, Category::Ll),
    (0x2C86, 0x2C86, Category::Lu),
    (0x2C87, 0x2C87, Category::Ll),
    (0x2C88, 0x2C88, Category::Lu),
    (0x2C89, 0x2C89, Category::Ll),
    (0x2C8A, 0x2C8A, Category::Lu),
    (0x2C8B, 0x2C8B, Category::Ll),
    (0x2C8C, 0x2C8C, Category::Lu),
    (0x2C8D, 0x2C8D, Category::Ll),
    (0x2C8E, 0x2C8E, Category::Lu),
    (0x2C8F, 0x2C8F, Category::Ll),
    (0x2C90, 0x2C90, Category::Lu),
    (0x2C91, 0x2C91, Category::Ll),
    (0x2C92, 0x2C92, Category::Lu),
    (0x2C93, 0x2C93, Category::Ll),
    (0x2C94, 0x2C94, Category::Lu),
    (0x2C95, 0x2C95, Category::Ll),
    (0x2C96, 0x2C96, Category::Lu),
    (0x2C97, 0x2C97, Category::Ll),
    (0x2C98, 0x2C98, Category::Lu),
    (0x2C99, 0x2C99, Category::Ll),
    (0x2C9A, 0x2C9A, Category::Lu),
    (0x2C9B, 0x2C9B, Category::Ll),
    (0x2C9C, 0x2C9C, Category::Lu),
    (0x2C9D, 0x2C9D, Category::Ll),
    (0x2C9E, 0x2C9E, Category::Lu),
    (0x2C9F, 0x2C9F, Category::Ll),
    (0x2CA0, 0x2CA0, Category::Lu),
    (0x2CA1, 0x2CA1, Category::Ll),
    (0x2CA2, 0x2CA2, Category::Lu),
    (0x2CA3, 0x2CA3, Category::Ll),
    (0x2CA4, 0x2CA4, Category::Lu),
    (0x2CA5, 0x2CA5, Category::Ll),
    (0x2CA6, 0x2CA6, Category::Lu),
    (0x2CA7, 0x2CA7, Category::Ll),
    (0x2CA8, 0x2CA8, Category::Lu),
    (0x2CA9, 0x2CA9, Category::Ll),
    (0x2CAA, 0x2CAA, Category::Lu),
    (0x2CAB, 0x2CAB, Category::Ll),
    (0x2CAC, 0x2CAC, Category::Lu),
    (0x2CAD, 0x2CAD, Category::Ll),
    (0x2CAE, 0x2CAE, Category::Lu),
    (0x2CAF, 0x2CAF, Category::Ll),
    (0x2CB0, 0x2CB0, Category::Lu),
    (0x2CB1, 0x2CB1, Category::Ll),
    (0x2CB2, 0x2CB2, Category::Lu),
    (0x2CB3, 0x2CB3, Category::Ll),
    (0x2CB4, 0x2CB4, Category::Lu),
    (0x2CB5, 0x2CB5, Category::Ll),
    (0x2CB6, 0x2CB6, Category::Lu),
    (0x2CB7, 0x2CB7, Category::Ll),
    (0x2CB8, 0x2CB8, Category::Lu),
    (0x2CB9, 0x2CB9, Category::Ll),
    (0x2CBA, 0x2CBA, Category::Lu),
    (0x2CBB, 0x2CBB, Category::Ll),
    (0x2CBC, 0x2CBC, Category::Lu),
    (0x2CBD, 0x2CBD, Category::Ll),
    (0x2CBE, 0x2CBE, Category::Lu),
    (0x2CBF, 0x2CBF, Category::Ll),
    (0x2CC0, 0x2CC0, Category::Lu),
    (0x2CC1, 0x2CC1, Category::Ll),
    (0x2CC2, 0x2CC2, Category::Lu),
    (0x2CC3, 0x2CC3, Category::Ll),
    (0x2CC4, 0x2CC4, Category::Lu),
    (0x2CC5, 0x2CC5, Category::Ll),
    (0x2CC6, 0x2CC6, Category::Lu),
    (0x2CC7, 0x2CC7, Category::Ll),
    (0x2CC8, 0x2CC8, Category::Lu),
    (0x2CC9, 0x2CC9, Category::Ll),
    (0x2CCA, 0x2CCA, Category::Lu),
    (0x2CCB, 0x2CCB, Category::Ll),
    (0x2CCC, 0x2CCC, Category::Lu),
    (0x2CCD, 0x2CCD, Category::Ll),
    (0x2CCE, 0x2CCE, Category::Lu),
    (0x2CCF, 0x2CCF, Category::Ll),
    (0x2CD0, 0x2CD0, Category::Lu),
    (0x2CD1, 0x2CD1, Category::Ll),
    (0x2CD2, 0x2CD2, Category::Lu),
    (0x2CD3, 0x2CD3, Category::Ll),
    (0x2CD4, 0x2CD4, Category::Lu),
    (0x2CD5, 0x2CD5, Category::Ll),
    (0x2CD6, 0x2CD6, Category::Lu),
    (0x2CD7, 0x2CD7, Category::Ll),
    (0x2CD8, 0x2CD8, Category::Lu),
    (0x2CD9, 0x2CD9, Category::Ll),
    (0x2CDA, 0x2CDA, Category::Lu),
    (0x2CDB, 0x2CDB, Category::Ll),
    (0x2CDC, 0x2CDC, Category::Lu),
    (0x2CDD, 0x2CDD, Category::Ll),
    (0x2CDE, 0x2CDE, Category::Lu),
    (0x2CDF, 0x2CDF, Category::Ll),
    (0x2CE0, 0x2CE0, Category::Lu),
    (0x2CE1, 0x2CE1, Category::Ll),
    (0x2CE2, 0x2CE2, Category::Lu),
    (0x2CE3, 0x2CE4, Category::Ll),
    (0x2CE5, 0x2CEA, Category::So),
    (0x2CEB, 0x2CEB, Category::Lu),
    (0x2CEC, 0x2CEC, Category::Ll),
    (0x2CED, 0x2CED, Category::Lu),
    (0x2CEE, 0x2CEE, Category::Ll),
    (0x2CEF, 0x2CF1, Category::Mn),
    (0x2CF2, 0x2CF2, Category::Lu),
    (0x2CF3, 0x2CF3, Category::Ll),
    (0x2CF4, 0x2CF8, Category::Cn),
    (0x2CF9, 0x2CFC, Category::Po),
    (0x2CFD, 0x2CFD, Category::No),
    (0x2CFE, 0x2CFF, Category::Po),
    (0x2D00, 0x2D25, Category::Ll),
    (0x2D26, 0x2D26, Category::Cn),
    (0x2D27, 0x2D27, Category::Ll),
    (0x2D28, 0x2D2C, Category::Cn),
    (0x2D2D, 0x2D2D, Category::Ll),
    (0x2D2E, 0x2D2F, Category::Cn),
    (0x2D30, 0x2D67, Category::Lo),
    (0x2D68, 0x2D6E, Category::Cn),
    (0x2D6F, 0x2D6F, Category::Lm),
    (0x2D70, 0x2D70, Category::Po),
    (0x2D71, 0x2D7E, Category::Cn),
    (0x2D7F, 0x2D7F, Category::Mn),
    (0x2D80, 0x2D96, Category::Lo),
    (0x2D97, 0x2D9F, Category::Cn),
    (0x2DA0, 0x2DA6, Category::Lo),
    (0x2DA7, 0x2DA7, Category::Cn),
    (0x2DA8, 0x2DAE, Category::Lo),
    (0x2DAF, 0x2DAF, Category::Cn),
    (0x2DB0, 0x2DB6, Category::Lo),
    (0x2DB7, 0x2DB7, Category::Cn),
    (0x2DB8, 0x2DBE, Category::Lo),
    (0x2DBF, 0x2DBF, Category::Cn),
    (0x2DC0, 0x2DC6, Category::Lo),
    (0x2DC7, 0x2DC7, Category::Cn),
    (0x2DC8, 0x2DCE, Category::Lo),
    (0x2DCF, 0x2DCF, Category::Cn),
    (0x2DD0, 0x2DD6, Category::Lo),
    (0x2DD7, 0x2DD7, Category::Cn),
    (0x2DD8, 0x2DDE, Category::Lo),
    (0x2DDF, 0x2DDF, Category::Cn),
    (0x2DE0, 0x2DFF, Category::Mn),
    (0x2E00, 0x2E01, Category::Po),
    (0x2E02, 0x2E02, Category::Pi),
    (0x2E03, 0x2E03, Category::Pf),
    (0x2E04, 0x2E04, Category::Pi),
    (0x2E05, 0x2E05, Category::Pf),
    (0x2E06, 0x2E08, Category::Po),
    (0x2E09, 0x2E09, Category::Pi),
    (0x2E0A, 0x2E0A, Category::Pf),
    (0x2E0B, 0x2E0B, Category::Po),
    (0x2E0C, 0x2E0C, Category::Pi),
    (0x2E0D, 0x2E0D, Category::Pf),
    (0x2E0E, 0x2E16, Category::Po),
    (0x2E17, 0x2E17, Category::Pd),
    (0x2E18, 0x2E19, Category::Po),
    (0x2E1A, 0x2E1A, Category::Pd),
    (0x2E1B, 0x2E1B, Category::Po),
    (0x2E1C, 0x2E1C, Category::Pi),
    (0x2E1D, 0x2E1D, Category::Pf),
    (0x2E1E, 0x2E1F, Category::Po),
    (0x2E20, 0x2E20, Category::Pi),
    (0x2E21, 0x2E21, Category::Pf),
    (0x2E22, 0x2E22, Category::Ps),
    (0x2E23, 0x2E23, Category::Pe),
    (0x2E24, 0x2E24, Category::Ps),
    (0x2E25, 0x2E25, Category::Pe),
    (0x2E26, 0x2E26, Category::Ps),
    (0x2E27, 0x2E27, Category::Pe),
    (0x2E28, 0x2E28, Category::Ps),
    (0x2E29, 0x2E29, Category::Pe),
    (0x2E2A, 0x2E2E, Category::Po),
    (0x2E2F, 0x2E2F, Category::Lm),
    (0x2E30, 0x2E39, Category::Po),
    (0x2E3A, 0x2E3B, Category::Pd),
    (0x2E3C, 0x2E3F, Category::Po),
    (0x2E40, 0x2E40, Category::Pd),
    (0x2E41, 0x2E41, Category::Po),
    (0x2E42, 0x2E42, Category::Ps),
    (0x2E43, 0x2E4F, Category::Po),
    (0x2E50, 0x2E51, Category::So),
    (0x2E52, 0x2E54, Category::Po),
    (0x2E55, 0x2E55, Category::Ps),
    (0x2E56, 0x2E56, Category::Pe),
    (0x2E57, 0x2E57, Category::Ps),
    (0x2E58, 0x2E58, Category::Pe),
    (0x2E59, 0x2E59, Category::Ps),
    (0x2E5A, 0x2E5A, Category::Pe),
    (0x2E5B, 0x2E5B, Category::Ps),
    (0x2E5C, 0x2E5C, Category::Pe),
    (0x2E5D, 0x2E5D, Category::Pd),
    (0x2E5E, 0x2E7F, Category::Cn),
    (0x2E80, 0x2E99, Category::So),
    (0x2E9A, 0x2E9A, Category::Cn),
    (0x2E9B, 0x2EF3, Category::So),
    (0x2EF4, 0x2EFF, Category::Cn),
    (0x2F00, 0x2FD5, Category::So),
    (0x2FD6, 0x2FEF, Category::Cn),
    (0x2FF0, 0x2FFB, Category::So),
    (0x2FFC, 0x2FFF, Category::Cn),
    (0x3000, 0x3000, Category::Zs),
    (0x3001, 0x3003, Category::Po),
    (0x3004, 0x3004, Category::So),
    (0x3005, 0x3005, Category::Lm),
    (0x3006, 0x3006, Category::Lo),
    (0x3007, 0x3007, Category::Nl),
    (0x3008, 0x3008, Category::Ps),
    (0x3009, 0x3009, Category::Pe),
    (0x300A, 0x300A, Category::Ps),
    (0x300B, 0x300B, Category::Pe),
    (0x300C, 0x300C, Category::Ps),
    (0x300D, 0x300D, Category::Pe),
    (0x300E, 0x300E, Category::Ps),
    (0x300F, 0x300F, Category::Pe),
    (0x3010, 0x3010, Category::Ps),
    (0x3011, 0x3011, Category::Pe),
    (0x3012, 0x3013, Category::So),
    (0x3014, 0x3014, Category::Ps),
    (0x3015, 0x3015, Category::Pe),
    (0x3016, 0x3016, Category::Ps),
    (0x3017, 0x3017, Category::Pe),
    (0x3018, 0x3018, Category::Ps),
    (0x3019, 0x3019, Category::Pe),
    (0x301A, 0x301A, Category::Ps),
    (0x301B, 0x301B, Category::Pe),
    (0x301C, 0x301C, Category::Pd),
    (0x301D, 0x301D, Category::Ps),
    (0x301E, 0x301F, Category::Pe),
    (0x3020, 0x3020, Category::So),
    (0x3021, 0x3029, Category::Nl),
    (0x302A, 0x302D, Category::Mn),
    (0x302E, 0x302F, Category::Mc),
    (0x3030, 0x3030, Category::Pd),
    (0x3031, 0x3035, Category::Lm),
    (0x3036, 0x3037, Category::So),
    (0x3038, 0x303A, Category::Nl),
    (0x303B, 0x303B, Category::Lm),
    (0x303C, 0x303C, Category::Lo),
    (0x303D, 0x303D, Category::Po),
    (0x303E, 0x303F, Category::So),
    (0x3040, 0x3040, Category::Cn),
    (0x3041, 0x3096, Category::Lo),
    (0x3097, 0x3098, Category::Cn),
    (0x3099, 0x309A, Category::Mn),
    (0x309B, 0x309C, Category::Sk),
    (0x309D, 0x309E, Category::Lm),
    (0x309F, 0x309F, Category::Lo),
    (0x30A0, 0x30A0, Category::Pd),
    (0x30A1, 0x30FA, Category::Lo),
    (0x30FB, 0x30FB, Category::Po),
    (0x30FC, 0x30FE, Category::Lm),
    (0x30FF, 0x30FF, Category::Lo),
    (0x3100, 0x3104, Category::Cn),
    (0x3105, 0x312F, Category::Lo),
    (0x3130, 0x3130, Category::Cn),
    (0x3131, 0x318E, Category::Lo),
    (0x318F, 0x318F, Category::Cn),
    (0x3190, 0x3191, Category::So),
    (0x3192, 0x3195, Category::No),
    (0x3196, 0x319F, Category::So),
    (0x31A0, 0x31BF, Category::Lo),
    (0x31C0, 0x31E3, Category::So),
    (0x31E4, 0x31EF, Category::Cn),
    (0x31F0, 0x31FF, Category::Lo),
    (0x3200, 0x321E, Category::So),
    (0x321F, 0x321F, Category::Cn),
    (0x3220, 0x3229, Category::No),
    (0x322A, 0x3247, Category::So),
    (0x3248, 0x324F, Category::No),
    (0x3250, 0x3250, Category::So),
    (0x3251, 0x325F, Category::No),
    (0x3260, 0x327F, Category::So),
    (0x3280, 0x3289, Category::No),
    (0x328A, 0x32B0, Category::So),
    (0x32B1, 0x32BF, Category::No),
    (0x32C0, 0x33FF, Category::So),
    (0x3400, 0x4DBF, Category::Lo),
    (0x4DC0, 0x4DFF, Category::So),
    (0x4E00, 0xA014, Category::Lo),
    (0xA015, 0xA015, Category::Lm),
    (0xA016, 0xA48C, Category::Lo),
    (0xA48D, 0xA48F, Category::Cn),
    (0xA490, 0xA4C6, Category::So),
    (0xA4C7, 0xA4CF, Category::Cn),
    (0xA4D0, 0xA4F7, Category::Lo),
    (0xA4F8, 0xA4FD, Category::Lm),
    (0xA4FE, 0xA4FF, Category::Po),
    (0xA500, 0xA60B, Category::Lo),
    (0xA60C, 0xA60C, Category::Lm),
    (0xA60D, 0xA60F, Category::Po),
    (0xA610, 0xA61F, Category::Lo),
    (0xA620, 0xA629, Category::Nd),
    (0xA62A, 0xA62B, Category::Lo),
    (0xA62C, 0xA63F, Category::Cn),
    (0xA640, 0xA640, Category::Lu),
    (0xA641, 0xA641, Category::Ll),
    (0xA642, 0xA642, Category::Lu),
    (0xA643, 0xA643, Category::Ll),
    (0xA644, 0xA644, Category::Lu),
    (0xA645, 0xA645, Category::Ll),
    (0xA646, 0xA646, Category::Lu),
    (0xA647, 0xA647, Category::Ll),
    (0xA648, 0xA648, Category::Lu),
    (0xA649, 0xA649, Category::Ll),
    (0xA64A, 0xA64A, Category::Lu),
    (0xA64B, 0xA64B, Category::Ll),
    (0xA64C, 0xA64C, Category::Lu),
    (0xA64D, 0xA64D, Category::Ll),
    (0xA64E, 0xA64E, Category::Lu),
    (0xA64F, 0xA64F, Category::Ll),
    (0xA650, 0xA650, Category::Lu),
    (0xA651, 0xA651, Category::Ll),
    (0xA652, 0xA652, Category::Lu),
    (0xA653, 0xA653, Category::Ll),
    (0xA654, 0xA654, Category::Lu),
    (0xA655, 0xA655, Category::Ll),
    (0xA656, 0xA656, Category::Lu),
    (0xA657, 0xA657, Category::Ll),
    (0xA658, 0xA658, Category::Lu),
    (0xA659, 0xA659, Category::Ll),
    (0xA65A, 0xA65A, Category::Lu),
    (0xA65B, 0xA65B, Category::Ll),
    (0xA65C, 0xA65C, Category::Lu),
    (0xA65D, 0xA65D, Category::Ll),
    (0xA65E, 0xA65E, Category::Lu),
    (0xA65F, 0xA65F, Category::Ll),
    (0xA660, 0xA660, Category::Lu),
    (0xA661, 0xA661, Category::Ll),
    (0xA662, 0xA662, Category::Lu),
    (0xA663, 0xA663, Category::Ll),
    (0xA664, 0xA664, Category::Lu),
    (0xA665, 0xA665, Category::Ll),
    (0xA666, 0xA666, Category::Lu),
    (0xA667, 0xA667, Category::Ll),
    (0xA668, 0xA668, Category::Lu),
    (0xA669, 0xA669, Category::Ll),
    (0xA66A, 0xA66A, Category::Lu),
    (0xA66B, 0xA66B, Category::Ll),
    (0xA66C, 0xA66C, Category::Lu),
    (0xA66D, 0xA66D, Category::Ll),
    (0xA66E, 0xA66E, Category::Lo),
    (0xA66F, 0xA66F, Category::Mn),
    (0xA670, 0xA672, Category::Me),
    (0xA673, 0xA673, Category::Po),
    (0xA674, 0xA67D, Category::Mn),
    (0xA67E, 0xA67E, Category::Po),
    (0xA67F, 0xA67F, Category::Lm),
    (0xA680, 0xA680, Category::Lu),
    (0xA681, 0xA681, Category::Ll),
    (0xA682, 0xA682, Category::Lu),
    (0xA683, 0xA683, Category::Ll),
    (0xA684, 0xA684, Category::Lu),
    (0xA685, 0xA685, Category::Ll),
    (0xA686, 0xA686, Category::Lu),
    (0xA687, 0xA687, Category::Ll),
    (0xA688, 0xA688, Category::Lu),
    (0xA689, 0xA689, Category::Ll),
    (0xA68A, 0xA68A, Category::Lu),
    (0xA68B, 0xA68B, Category::Ll),
    (0xA68C, 0xA68C, Category::Lu),
    (0xA68D, 0xA68D, Category::Ll),
    (0xA68E, 0xA68E, Category::Lu),
    (0xA68F, 0xA68F, Category::Ll),
    (0xA690, 0xA690, Category::Lu),
    (0xA691, 0xA691, Category::Ll),
    (0xA692, 0xA692, Category::Lu),
    (0xA693, 0xA693, Category::Ll),
    (0xA694, 0xA694, Category::Lu),
    (0xA695, 0xA695, Category::Ll),
    (0xA696, 0xA696, Category::Lu),
    (0xA697, 0xA697, Category::Ll),
    (0xA698, 0xA698, Category::Lu),
    (0xA699, 0xA699, Category::Ll),
    (0xA69A, 0xA69A, Category::Lu),
    (0xA69B, 0xA69B, Category::Ll),
    (0xA69C, 0xA69D, Category::Lm),
    (0xA69E, 0xA69F, Category::Mn),
    (0xA6A0, 0xA6E5, Category::Lo),
    (0xA6E6, 0xA6EF, Category::Nl),
    (0xA6F0, 0xA6F1, Category::Mn),
    (0xA6F2, 0xA6F7, Category::Po),
    (0xA6F8, 0xA6FF, Category::Cn),
    (0xA700, 0xA716, Category::Sk),
    (0xA717, 0xA71F, Category::Lm),
    (0xA720, 0xA721, Category::Sk),
    (0xA722, 0xA722, Category::Lu),
    (0xA723, 0xA723, Category::Ll),
    (0xA724, 0xA724, Category::Lu),
    (0xA725, 0xA725, Category::Ll),
    (0xA726, 0xA726, Category::Lu),
    (0xA727, 0xA727, Category::Ll),
    (0xA728, 0xA728, Category::Lu),
    (0xA729, 0xA729, Category::Ll),
    (0xA72A, 0xA72A, Category::Lu),
    (0xA72B, 0xA72B, Category::Ll),
    (0xA72C, 0xA72C, Category::Lu),
    (0xA72D, 0xA72D, Category::Ll),
    (0xA72E, 0xA72E, Category::Lu),
    (0xA72F, 0xA731, Category::Ll),
    (0xA732, 0xA732, Category::Lu),
    (0xA733, 0xA733, Category::Ll),
    (0xA734, 0xA734, Category::Lu),
    (0xA735, 0xA735, Category::Ll),
    (0xA736, 0xA736, Category::Lu),
    (0xA737, 0xA737, Category::Ll),
    (0xA738, 0xA738, Category::Lu),
    (0xA739, 0xA739, Category::Ll),
    (0xA73A, 0xA73A, Category::Lu),
    (0xA73B, 0xA73B, Category::Ll),
    (0xA73C, 0xA73C, Category::Lu),
    (0xA73D, 0xA73D, Category::Ll),
    (0xA73E, 0xA73E, Category::Lu),
    (0xA73F, 0xA73F, Category::Ll),
    (0xA740, 0xA740, Category::Lu),
    (0xA741, 0xA741, Category::Ll),
    (0xA742, 0xA742, Category::Lu),
    (0xA743, 0xA743, Category::Ll),
    (0xA744, 0xA744, Category::Lu),
    (0xA745, 0xA745, Category::Ll),
    (0xA746, 0xA746, Category::Lu),
    (0xA747, 0xA747, Category::Ll),
    (0xA748, 0xA748, Category::Lu),
    (0xA749, 0xA749, Category::Ll),
    (0xA74A, 0xA74A, Category::Lu),
    (0xA74B, 0xA74B, Category::Ll),
    (0xA74C, 0xA74C, Category::Lu),
    (0xA74D, 0xA74D, Category::Ll),
    (0xA74E, 0xA74E, Category::Lu),
    (0xA74F, 0xA74F, Category::Ll),
    (0xA750, 0xA750, Category::Lu),
    (0xA751, 0xA751, Category::Ll),
    (0xA752, 0xA752, Category::Lu),
    (0xA753, 0xA753, Category::Ll),
    (0xA754, 0xA754, Category::Lu),
    (0xA755, 0xA755, Category::Ll),
    (0xA756, 0xA756, Category::Lu),
    (0xA757, 0xA757, Category::Ll),
    (0xA758, 0xA758, Category::Lu),
    (0xA759, 0xA759, Category::Ll),
    (0xA75A, 0xA75A, Category::Lu),
    (0xA75B, 0xA75B, Category::Ll),
    (0xA75C, 0xA75C, Category::Lu),
    (0xA75D, 0xA75D, Category::Ll),
    (0xA75E, 0xA75E, Category::Lu),
    (0xA75F, 0xA75F, Category::Ll),
    (0xA760, 0xA760, Category::Lu),
    (0xA761, 0xA761, Category::Ll),
    (0xA762, 0xA762, Category::Lu),
    (0xA763, 0xA763, Category::Ll),
    (0xA764, 0xA764, Category::Lu),
    (0xA765, 0xA765, Category::Ll),
    (0xA766, 0xA766, Category::Lu),
    (0xA767, 0xA767, Category::Ll),
    (0xA768, 0xA768, Category::Lu),
    (0xA769, 0xA769, Category::Ll),
    (0xA76A, 0xA76A, Category::Lu),
    (0xA76B, 0xA76B, Category::Ll),
    (0xA76C, 0xA76C, Category::Lu),
    (0xA76D, 0xA76D, Category::Ll),
    (0xA76E, 0xA76E, Category::Lu),
    (0xA76F, 0xA76F, Category::Ll),
    (0xA770, 0xA770, Category::Lm),
    (0xA771, 0xA778, Category::Ll),
    (0xA779, 0xA779, Category::Lu),
    (0xA77A, 0xA77A, Category::Ll),
    (0xA77B, 0xA77B, Category::Lu),
    (0xA77C, 0xA77C, Category::Ll),
    (0xA77D, 0xA77E, Category::Lu),
    (0xA77F, 0xA77F, Category::Ll),
    (0xA780, 0xA780, Category::Lu),
    (0xA781, 0xA781, Category::Ll),
    (0xA782, 0xA782, Category::Lu),
    (0xA783, 0xA783, Category::Ll),
    (0xA784, 0xA784, Category::Lu),
    (0xA785, 0xA785, Category::Ll),
    (0xA786, 0xA786, Category::Lu),
    (0xA787, 0xA787, Category::Ll),
    (0xA788, 0xA788, Category::Lm),
    (0xA789, 0xA78A, Category::Sk),
    (0xA78B, 0xA78B, Category::Lu),
    (0xA78C, 0xA78C, Category::Ll),
    (0xA78D, 0xA78D, Category::Lu),
    (0xA78E, 0xA78E, Category::Ll),
    (0xA78F, 0xA78F, Category::Lo),
    (0xA790, 0xA790, Category::Lu),
    (0xA791, 0xA791, Category::Ll),
    (0xA792, 0xA792, Category::Lu),
    (0xA793, 0xA795, Category::Ll),
    (0xA796, 0xA796, Category::Lu),
    (0xA797, 0xA797, Category::Ll),
    (0xA798, 0xA798, Category::Lu),
    (0xA799, 0xA799, Category::Ll),
    (0xA79A, 0xA79A, Category::Lu),
    (0xA79B, 0xA79B, Category::Ll),
    (0xA79C, 0xA79C, Category::Lu),
    (0xA79D, 0xA79D, Category::Ll),
    (0xA79E, 0xA79E, Category::Lu),
    (0xA79F, 0xA79F, Category::Ll),
    (0xA7A0, 0xA7A0, Category::Lu),
    (0xA7A1, 0xA7A1, Category::Ll),
    (0xA7A2, 0xA7A2, Category::Lu),
    (0xA7A3, 0xA7A3, Category::Ll),
    (0xA7A4, 0xA7A4, Category::Lu),
    (0xA7A5, 0xA7A5, Category::Ll),
    (0xA7A6, 0xA7A6, Category::Lu),
    (0xA7A7, 0xA7A7, Category::Ll),
    (0xA7A8, 0xA7A8, Category::Lu),
    (0xA7A9, 0xA7A9, Category::Ll),
    (0xA7AA, 0xA7AE, Category::Lu),
    (0xA7AF, 0xA7AF, Category::Ll),
    (0xA7B0, 0xA7B4, Category::Lu),
    (0xA7B5, 0xA7B5, Category::Ll),
    (0xA7B6, 0xA7B6, Category::Lu),
    (0xA7B7, 0xA7B7, Category::Ll),
    (0xA7B8, 0xA7B8, Category::Lu),
    (0xA7B9, 0xA7B9, Category::Ll),
    (0xA7BA, 0xA7BA, Category::Lu),
    (0xA7BB, 0xA7BB, Category::Ll),
    (0xA7BC, 0xA7BC, Category::Lu),
    (0xA7BD, 0xA7BD, Category::Ll),
    (0xA7BE, 0xA7BE, Category::Lu),
    (0xA7BF, 0xA7BF, Category::Ll),
    (0xA7C0, 0xA7C0, Category::Lu),
    (0xA7C1, 0xA7C1, Category::Ll),
    (0xA7C2, 0xA7C2, Category::Lu),
    (0xA7C3, 0xA7C3, Category::Ll),
    (0xA7C4, 0xA7C7, Category::Lu),
    (0xA7C8, 0xA7C8, Category::Ll),
    (0xA7C9, 0xA7C9, Category::Lu),
    (0xA7CA, 0xA7CA, Category::Ll),
    (0xA7CB, 0xA7CF, Category::Cn),
    (0xA7D0, 0xA7D0, Category::Lu),
    (0xA7D1, 0xA7D1, Category::Ll),
    (0xA7D2, 0xA7D2, Category::Cn),
    (0xA7D3, 0xA7D3, Category::Ll),
    (0xA7D4, 0xA7D4, Category::Cn),
    (0xA7D5, 0xA7D5, Category::Ll),
    (0xA7D6, 0xA7D6, Category::Lu),
    (0xA7D7, 0xA7D7, Category::Ll),
    (0xA7D8, 0xA7D8, Category::Lu),
    (0xA7D9, 0xA7D9, Category::Ll),
    (0xA7DA, 0xA7F1, Category::Cn),
    (0xA7F2, 0xA7F4, Category::Lm),
    (0xA7F5, 0xA7F5, Category::Lu),
    (0xA7F6, 0xA7F6, Category::Ll),
    (0xA7F7, 0xA7F7, Category::Lo),
    (0xA7F8, 0xA7F9, Category::Lm),
    (0xA7FA, 0xA7FA, Category::Ll),
    (0xA7FB, 0xA801, Category::Lo),
    (0xA802, 0xA802, Category::Mn),
    (0xA803, 0xA805, Category::Lo),
    (0xA806, 0xA806, Category::Mn),
    (0xA807, 0xA80A, Category::Lo),
    (0xA80B, 0xA80B, Category::Mn),
    (0xA80C, 0xA822, Category::Lo),
    (0xA823, 0xA824, Category::Mc),
    (0xA825, 0xA826, Category::Mn),
    (0xA827, 0xA827, Category::Mc),
    (0xA828, 0xA82B, Category::So),
    (0xA82C, 0xA82C, Category::Mn),
    (0xA82D, 0xA82F, Category::Cn),
    (0xA830, 0xA835, Category::No),
    (0xA836, 0xA837, Category::So),
    (0xA838, 0xA838, Category::Sc),
    (0xA839, 0xA839, Category::So),
    (0xA83A, 0xA83F, Category::Cn),
    (0xA840, 0xA873, Category::Lo),
    (0xA874, 0xA877, Category::Po),
    (0xA878, 0xA87F, Category::Cn),
    (0xA880, 0xA881, Category::Mc),
    (0xA882, 0xA8B3, Category::Lo),
    (0xA8B4, 0xA8C3, Category::Mc),
    (0xA8C4, 0xA8C5, Category::Mn),
    (0xA8C6, 0xA8CD, Category::Cn),
    (0xA8CE, 0xA8CF, Category::Po),
    (0xA8D0, 0xA8D9, Category::Nd),
    (0xA8DA, 0xA8DF, Category::Cn),
    (0xA8E0, 0xA8F1, Category::Mn),
    (0xA8F2, 0xA8F7, Category::Lo),
    (0xA8F8, 0xA8FA, Category::Po),
    (0xA8FB, 0xA8FB, Category::Lo),
    (0xA8FC, 0xA8FC, Category::Po),
    (0xA8FD, 0xA8FE, Category::Lo),
    (0xA8FF, 0xA8FF, Category::Mn),
    (0xA900, 0xA909, Category::Nd),
    (0xA90A, 0xA925, Category::Lo),
    (0xA926, 0xA92D, Category::Mn),
    (0xA92E, 0xA92F, Category::Po),
    (0xA930, 0xA946, Category::Lo),
    (0xA947, 0xA951, Category::Mn),
    (0xA952, 0xA953, Category::Mc),
    (0xA954, 0xA95E, Category::Cn),
    (0xA95F, 0xA95F, Category::Po),
    (0xA960, 0xA97C, Category::Lo),
    (0xA97D, 0xA97F, Category::Cn),
    (0xA980, 0xA982, Category::Mn),
    (0xA983, 0xA983, Category::Mc),
    (0xA984, 0xA9B2, Category::Lo),
    (0xA9B3, 0xA9B3, Category::Mn),
    (0xA9B4, 0xA9B5, Category::Mc),
    (0xA9B6, 0xA9B9, Category::Mn),
    (0xA9BA, 0xA9BB, Category::Mc),
    (0xA9BC, 0xA9BD, Category::Mn),
    (0xA9BE, 0xA9C0, Category::Mc),
    (0xA9C1, 0xA9CD, Category::Po),
    (0xA9CE, 0xA9CE, Category::Cn),
    (0xA9CF, 0xA9CF, Category::Lm),
    (0xA9D0, 0xA9D9, Category::Nd),
    (0xA9DA, 0xA9DD, Category::Cn),
    (0xA9DE, 0xA9DF, Category::Po),
    (0xA9E0, 0xA9E4, Category::Lo),
    (0xA9E5, 0xA9E5, Category::Mn),
    (0xA9E6, 0xA9E6, Category::Lm),
    (0xA9E7, 0xA9EF, Category::Lo),
    (0xA9F0, 0xA9F9, Category::Nd),
    (0xA9FA, 0xA9FE, Category::Lo),
    (0xA9FF, 0xA9FF, Category::Cn),
    (0xAA00, 0xAA28, Category::Lo),
    (0xAA29, 0xAA2E, Category::Mn),
    (0xAA2F, 0xAA30, Category::Mc),
    (0xAA31, 0xAA32, Category::Mn),
    (0xAA33, 0xAA34, Category::Mc),
    (0xAA35, 0xAA36, Category::Mn),
    (0xAA37, 0xAA3F, Category::Cn),
    (0xAA40, 0xAA42, Category::Lo),
    (0xAA43, 0xAA43, Category::Mn),
    (0xAA44, 0xAA4B, Category::Lo),
    (0xAA4C, 0xAA4C, Category::Mn),
    (0xAA4D, 0xAA4D, Category::Mc),
    (0xAA4E, 0xAA4F, Category::Cn),
    (0xAA50, 0xAA59, Category::Nd),
    (0xAA5A, 0xAA5B, Category::Cn),
    (0xAA5C, 0xAA5F, Category::Po),
    (0xAA60, 0xAA6F, Category::Lo),
    (0xAA70, 0xAA70, Category::Lm),
    (0xAA71, 0xAA76, Category::Lo),
    (0xAA77, 0xAA79, Category::So),
    (0xAA7A, 0xAA7A, Category::Lo),
    (0xAA7B, 0xAA7B, Category::Mc),
    (0xAA7C, 0xAA7C, Category::Mn),
    (0xAA7D, 0xAA7D, Category::Mc),
    (0xAA7E, 0xAAAF, Category::Lo),
    (0xAAB0, 0xAAB0, Category::Mn),
    (0xAAB1, 0xAAB1, Category::Lo),
    (0xAAB2, 0xAAB4, Category::Mn),
    (0xAAB5, 0xAAB6, Category::Lo),
    (0xAAB7, 0xAAB8, Category::Mn),
    (0xAAB9, 0xAABD, Category::Lo),
    (0xAABE, 0xAABF, Category::Mn),
    (0xAAC0, 0xAAC0, Category::Lo),
    (0xAAC1, 0xAAC1, Category::Mn),
    (0xAAC2, 0xAAC2, Category::Lo),
    (0xAAC3, 0xAADA, Category::Cn),
    (0xAADB, 0xAADC, Category::Lo),
    (0xAADD, 0xAADD, Category::Lm),
    (0xAADE, 0xAADF, Category::Po),
    (0xAAE0, 0xAAEA, Category::Lo),
    (0xAAEB, 0xAAEB, Category::Mc),
    (0xAAEC, 0xAAED, Category::Mn),
    (0xAAEE, 0xAAEF, Category::Mc),
    (0xAAF0, 0xAAF1, Category::Po),
    (0xAAF2, 0xAAF2, Category::Lo),
    (0xAAF3, 0xAAF4, Category::Lm),
    (0xAAF5, 0xAAF5, Category::Mc),
    (0xAAF6, 0xAAF6, Category::Mn),
    (0xAAF7, 0xAB00, Category::Cn),
    (0xAB01, 0xAB06, Category::Lo),
    (0xAB07, 0xAB08, Category::Cn),
    (0xAB09, 0xAB0E, Category::Lo),
    (0xAB0F, 0xAB10, Category::Cn),
    (0xAB11, 0xAB16, Category::Lo),
    (0xAB17, 0xAB1F, Category::Cn),
    (0xAB20, 0xAB26, Category::Lo),
    (0xAB27, 0xAB27, Category::Cn),
    (0xAB28, 0xAB2E, Category::Lo),
    (0xAB2F, 0xAB2F, Category::Cn),
    (0xAB30, 0xAB5A, Category::Ll),
    (0xAB5B, 0xAB5B, Category::Sk),
    (0xAB5C, 0xAB5F, Category::Lm),
    (0xAB60, 0xAB68, Category::Ll),
    (0xAB69, 0xAB69, Category::Lm),
    (0xAB6A, 0xAB6B, Category::Sk),
    (0xAB6C, 0xAB6F, Category::Cn),
    (0xAB70, 0xABBF, Category::Ll),
    (0xABC0, 0xABE2, Category::Lo),
    (0xABE3, 0xABE4, Category::Mc),
    (0xABE5, 0xABE5, Category::Mn),
    (0xABE6, 0xABE7, Category::Mc),
    (0xABE8, 0xABE8, Category::Mn),
    (0xABE9, 0xABEA, Category::Mc),
    (0xABEB, 0xABEB, Category::Po),
    (0xABEC, 0xABEC, Category::Mc),
    (0xABED, 0xABED, Category::Mn),
    (0xABEE, 0xABEF, Category::Cn),
    (0xABF0, 0xABF9, Category::Nd),
    (0xABFA, 0xABFF, Category::Cn),
    (0xAC00, 0xD7A3, Category::Lo),
    (0xD7A4, 0xD7AF, Category::Cn),
    (0xD7B0, 0xD7C6, Category::Lo),
    (0xD7C7, 0xD7CA, Category::Cn),
    (0xD7CB, 0xD7FB, Category::Lo),
    (0xD7FC, 0xD7FF, Category::Cn),
    (0xD800, 0xDFFF, Category::Cs),
    (0xE000, 0xF8FF, Category::Co),
    (0xF900, 0xFA6D, Category::Lo),
    (0xFA6E, 0xFA6F, Category::Cn),
    (0xFA70, 0xFAD9, Category::Lo),
    (0xFADA, 0xFAFF, Category::Cn),
    (0xFB00, 0xFB06, Category::Ll),
    (0xFB07, 0xFB12, Category::Cn),
    (0xFB13, 0xFB17, Category::Ll),
    (0xFB18, 0xFB1C, Category::Cn),
    (0xFB1D, 0xFB1D, Category::Lo),
    (0xFB1E, 0xFB1E, Category::Mn),
    (0xFB1F, 0xFB28, Category::Lo),
    (0xFB29, 0xFB29, Category::Sm),
    (0xFB2A, 0xFB36, Category::Lo),
    (0xFB37, 0xFB37, Category::Cn),
    (0xFB38, 0xFB3C, Category::Lo),
    (0xFB3D, 0xFB3D, Category::Cn),
    (0xFB3E, 0xFB3E, Category::Lo),
    (0xFB3F, 0xFB3F, Category::Cn),
    (0xFB40, 0xFB41, Category::Lo),
    (0xFB42, 0xFB42, Category::Cn),
    (0xFB43, 0xFB44, Category::Lo),
    (0xFB45, 0xFB45, Category::Cn),
    (0xFB46, 0xFBB1, Category::Lo),
    (0xFBB2, 0xFBC2, Category::Sk),
    (0xFBC3, 0xFBD2, Category::Cn),
    (0xFBD3, 0xFD3D, Category::Lo),
    (0xFD3E, 0xFD3E, Category::Pe),
    (0xFD3F, 0xFD3F, Category::Ps),
    (0xFD40, 0xFD4F, Category::So),
    (0xFD50, 0xFD8F, Category::Lo),
    (0xFD90, 0xFD91, Category::Cn),
    (0xFD92, 0xFDC7, Category::Lo),
    (0xFDC8, 0xFDCE, Category::Cn),
    (0xFDCF, 0xFDCF, Category::So),
    (0xFDD0, 0xFDEF, Category::Cn),
    (0xFDF0, 0xFDFB, Category::Lo),
    (0xFDFC, 0xFDFC, Category::Sc),
    (0xFDFD, 0xFDFF, Category::So),
    (0xFE00, 0xFE0F, Category::Mn),
    (0xFE10, 0xFE16, Category::Po),
    (0xFE17, 0xFE17, Category::Ps),
    (0xFE18, 0xFE18, Category::Pe),
    (0xFE19, 0xFE19, Category::Po),
    (0xFE1A, 0xFE1F, Category::Cn),
    (0xFE20, 0xFE2F, Category::Mn),
    (0xFE30, 0xFE30, Category::Po),
    (0xFE31, 0xFE32, Category::Pd),
    (0xFE33, 0xFE34, Category::Pc),
    (0xFE35, 0xFE35, Category::Ps),
    (0xFE36, 0xFE36, Category::Pe),
    (0xFE37, 0xFE37, Category::Ps),
    (0xFE38, 0xFE38, Category::Pe),
    (0xFE39, 0xFE39, Category::Ps),
    (0xFE3A, 0xFE3A, Category::Pe),
    (0xFE3B, 0xFE3B, Category::Ps),
    (0xFE3C, 0xFE3C, Category::Pe),
    (0xFE3D, 0xFE3D, Category::Ps),
    (0xFE3E, 0xFE3E, Category::Pe),
    (0xFE3F, 0xFE3F, Category::Ps),
    (0xFE40, 0xFE40, Category::Pe),
    (0xFE41, 0xFE41, Category::Ps),
    (0xFE42, 0xFE42, Category::Pe),
    (0xFE43, 0xFE43, Category::Ps),
    (0xFE44, 0xFE44, Category::Pe),
    (0xFE45, 0xFE46, Category::Po),
    (0xFE47, 0xFE47, Category::Ps),
    (0xFE48, 0xFE48, Category::Pe),
    (0xFE49, 0xFE4C, Category::Po),
    (0xFE4D, 0xFE4F, Category::Pc),
    (0xFE50, 0xFE52, Category::Po),
    (0xFE53, 0xFE53, Category::Cn),
    (0xFE54, 0xFE57, Category::Po),
    (0xFE58, 0xFE58, Category::Pd),
    (0xFE59, 0xFE59, Category::Ps),
    (0xFE5A, 0xFE5A, Category::Pe),
    (0xFE5B, 0xFE5B, Category::Ps),
    (0xFE5C, 0xFE5C, Category::Pe),
    (0xFE5D, 0xFE5D, Category::Ps),
    (0xFE5E, 0xFE5E, Category::Pe),
    (0xFE5F, 0xFE61, Category::Po),
    (0xFE62, 0xFE62, Category::Sm),
    (0xFE63, 0xFE63, Category::Pd),
    (0xFE64, 0xFE66, Category::Sm),
    (0xFE67, 0xFE67, Category::Cn),
    (0xFE68, 0xFE68, Category::Po),
    (0xFE69, 0xFE69, Category::Sc),
    (0xFE6A, 0xFE6B, Category::Po),
    (0xFE6C, 0xFE6F, Category::Cn),
    (0xFE70, 0xFE74, Category::Lo),
    (0xFE75, 0xFE75, Category::Cn),
    (0xFE76, 0xFEFC, Category::Lo),
    (0xFEFD, 0xFEFE, Category::Cn),
    (0xFEFF, 0xFEFF, Category::Format),
    (0xFF00, 0xFF00, Category::Cn),
    (0xFF01, 0xFF03, Category::Po),
    (0xFF04, 0xFF04, Category::Sc),
    (0xFF05, 0xFF07, Category::Po),
    (0xFF08, 0xFF08, Category::Ps),
    (0xFF09, 0xFF09, Category::Pe),
    (0xFF0A, 0xFF0A, Category::Po),
    (0xFF0B, 0xFF0B, Category::Sm),
    (0xFF0C, 0xFF0C, Category::Po),
    (0xFF0D, 0xFF0D, Category::Pd),
    (0xFF0E, 0xFF0F, Category::Po),
    (0xFF10, 0xFF19, Category::Nd),
    (0xFF1A, 0xFF1B, Category::Po),
    (0xFF1C, 0xFF1E, Category::Sm),
    (0xFF1F, 0xFF20, Category::Po),
    (0xFF21, 0xFF3A, Category::Lu),
    (0xFF3B, 0xFF3B, Category::Ps),
    (0xFF3C, 0xFF3C, Category::Po),
    (0xFF3D, 0xFF3D, Category::Pe),
    (0xFF3E, 0xFF3E, Category::Sk),
    (0xFF3F, 0xFF3F, Category::Pc),
    (0xFF40, 0xFF40, Category::Sk),
    (0xFF41, 0xFF5A, Category::Ll),
    (0xFF5B, 0xFF5B, Category::Ps),
    (0xFF5C, 0xFF5C, Category::Sm),
    (0xFF5D, 0xFF5D, Category::Pe),
    (0xFF5E, 0xFF5E, Category::Sm),
    (0xFF5F, 0xFF5F, Category::Ps),
    (0xFF60, 0xFF60, Category::Pe),
    (0xFF61, 0xFF61, Category::Po),
    (0xFF62, 0xFF62, Category::Ps),
    (0xFF63, 0xFF63, Category::Pe),
    (0xFF64, 0xFF65, Category::Po),
    (0xFF66, 0xFF6F, Category::Lo),
    (0xFF70, 0xFF70, Category::Lm),
    (0xFF71, 0xFF9D, Category::Lo),
    (0xFF9E, 0xFF9F, Category::Lm),
    (0xFFA0, 0xFFBE, Category::Lo),
    (0xFFBF, 0xFFC1, Category::Cn),
    (0xFFC2, 0xFFC7, Category::Lo),
    (0xFFC8, 0xFFC9, Category::Cn),
    (0xFFCA, 0xFFCF, Category::Lo),
    (0xFFD0, 0xFFD1, Category::Cn),
    (0xFFD2, 0xFFD7, Category::Lo),
    (0xFFD8, 0xFFD9, Category::Cn),
    (0xFFDA, 0xFFDC, Category::Lo),
    (0xFFDD, 0xFFDF, Category::Cn),
    (0xFFE0, 0xFFE1, Category::Sc),
    (0xFFE2, 0xFFE2, Category::Sm),
    (0xFFE3, 0xFFE3, Category::Sk),
    (0xFFE4, 0xFFE4, Category::So),
    (0xFFE5, 0xFFE6, Category::Sc),
    (0xFFE7, 0xFFE7, Category::Cn),
    (0xFFE8, 0xFFE8, Category::So),
    (0xFFE9, 0xFFEC, Category::Sm),
    (0xFFED, 0xFFEE, Category::So),
    (0xFFEF, 0xFFF8, Category::Cn),
    (0xFFF9, 0xFFFB, Category::Format),
    (0xFFFC, 0xFFFD, Category::So),
    (0xFFFE, 0xFFFF, Category::Cn),
    (0x10000, 0x1000B, Category::Lo),
    (0x1000C, 0x1000C, Category::Cn),
    (0x1000D, 0x10026, Category::Lo),
    (0x10027, 0x10027, Category::Cn),
    (0x10028, 0x1003A, Category::Lo),
    (0x1003B, 0x1003B, Category::Cn),
    (0x1003C, 0x1003D, Category::Lo),
    (0x1003E, 0x1003E, Category::Cn),
    (0x1003F, 0x1004D, Category::Lo),
    (0x1004E, 0x1004F, Category::Cn),
    (0x10050, 0x1005D, Category::Lo),
    (0x1005E, 0x1007F, Category::Cn),
    (0x10080, 0x100FA, Category::Lo),
    (0x100FB, 0x100FF, Category::Cn),
    (0x10100, 0x10102, Category::Po),
    (0x10103, 0x10106, Category::Cn),
    (0x10107, 0x10133, Category::No),
    (0x10134, 0x10136, Category::Cn),
    (0x10137, 0x1013F, Category::So),
    (0x10140, 0x10174, Category::Nl),
    (0x10175, 0x10178, Category::No),
    (0x10179, 0x10189, Category::So),
    (0x1018A, 0x1018B, Category::No),
    (0x1018C, 0x1018E, Category::So),
    (0x1018F, 0x1018F, Category::Cn),
    (0x10190, 0x1019C, Category::So),
    (0x1019D, 0x1019F, Category::Cn),
    (0x101A0, 0x101A0, Category::So),
    (0x101A1, 0x101CF, Category::Cn),
    (0x101D0, 0x101FC, Category::So),
    (0x101FD, 0x101FD, Category::Mn),
    (0x101FE, 0x1027F, Category::Cn),
    (0x10280, 0x1029C, Category::Lo),
    (0x1029D, 0x1029F, Category::Cn),
    (0x102A0, 0x102D0, Category::Lo),
    (0x102D1, 0x102DF, Category::Cn),
    (0x102E0, 0x102E0, Category::Mn),
    (0x102E1, 0x102FB, Category::No),
    (0x102FC, 0x102FF, Category::Cn),
    (0x10300, 0x1031F, Category::Lo),
    (0x10320, 0x10323, Category::No),
    (0x10324, 0x1032C, Category::Cn),
    (0x1032D, 0x10340, Category::Lo),
    (0x10341, 0x10341, Category::Nl),
    (0x10342, 0x10349, Category::Lo),
    (0x1034A, 0x1034A, Category::Nl),
    (0x1034B, 0x1034F, Category::Cn),
    (0x10350, 0x10375, Category::Lo),
    (0x10376, 0x1037A, Category::Mn),
    (0x1037B, 0x1037F, Category::Cn),
    (0x10380, 0x1039D, Category::Lo),
    (0x1039E, 0x1039E, Category::Cn),
    (0x1039F, 0x1039F, Category::Po),
    (0x103A0, 0x103C3, Category::Lo),
    (0x103C4, 0x103C7, Category::Cn),
    (0x103C8, 0x103CF, Category::Lo),
    (0x103D0, 0x103D0, Category::Po),
    (0x103D1, 0x103D5, Category::Nl),
    (0x103D6, 0x103FF, Category::Cn),
    (0x10400, 0x10427, Category::Lu),
    (0x10428, 0x1044F, Category::Ll),
    (0x10450, 0x1049D, Category::Lo),
    (0x1049E, 0x1049F, Category::Cn),
    (0x104A0, 0x104A9, Category::Nd),
    (0x104AA, 0x104AF, Category::Cn),
    (0x104B0, 0x104D3, Category::Lu),
    (0x104D4, 0x104D7, Category::Cn),
    (0x104D8, 0x104FB, Category::Ll),
    (0x104FC, 0x104FF, Category::Cn),
    (0x10500, 0x10527, Category::Lo),
    (0x10528, 0x1052F, Category::Cn),
    (0x10530, 0x10563, Category::Lo),
    (0x10564, 0x1056E, Category::Cn),
    (0x1056F, 0x1056F, Category::Po),
    (0x10570, 0x1057A, Category::Lu),
    (0x1057B, 0x1057B, Category::Cn),
    (0x1057C, 0x1058A, Category::Lu),
    (0x1058B, 0x1058B, Category::Cn),
    (0x1058C, 0x10592, Category::Lu),
    (0x10593, 0x10593, Category::Cn),
    (0x10594, 0x10595, Category::Lu),
    (0x10596, 0x10596, Category::Cn),
    (0x10597, 0x105A1, Category::Ll),
    (0x105A2, 0x105A2, Category::Cn),
    (0x105A3, 0x105B1, Category::Ll),
    (0x105B2, 0x105B2, Category::Cn),
    (0x105B3, 0x105B9, Category::Ll),
    (0x105BA, 0x105BA, Category::Cn),
    (0x105BB, 0x105BC, Category::Ll),
    (0x105BD, 0x105FF, Category::Cn),
    (0x10600, 0x10736, Category::Lo),
    (0x10737, 0x1073F, Category::Cn),
    (0x10740, 0x10755, Category::Lo),
    (0x10756, 0x1075F, Category::Cn),
    (0x10760, 0x10767, Category::Lo),
    (0x10768, 0x1077F, Category::Cn),
    (0x10780, 0x10785, Category::Lm),
    (0x10786, 0x10786, Category::Cn),
    (0x10787, 0x107B0, Category::Lm),
    (0x107B1, 0x107B1, Category::Cn),
    (0x107B2, 0x107BA, Category::Lm),
    (0x107BB, 0x107FF, Category::Cn),
    (0x10800, 0x10805, Category::Lo),
    (0x10806, 0x10807, Category::Cn),
    (0x10808, 0x10808, Category::Lo),
    (0x10809, 0x10809, Category::Cn),
    (0x1080A, 0x10835, Category::Lo),
    (0x10836, 0x10836, Category::Cn),
    (0x10837, 0x10838, Category::Lo),
    (0x10839, 0x1083B, Category::Cn),
    (0x1083C, 0x1083C, Category::Lo),
    (0x1083D, 0x1083E, Category::Cn),
    (0x1083F, 0x10855, Category::Lo),
    (0x10856, 0x10856, Category::Cn),
    (0x10857, 0x10857, Category::Po),
    (0x10858, 0x1085F, Category::No),
    (0x10860, 0x10876, Category::Lo),
    (0x10877, 0x10878, Category::So),
    (0x10879, 0x1087F, Category::No),
    (0x10880, 0x1089E, Category::Lo),
    (0x1089F, 0x108A6, Category::Cn),
    (0x108A7, 0x108AF, Category::No),
    (0x108B0, 0x108DF, Category::Cn),
    (0x108E0, 0x108F2, Category::Lo),
    (0x108F3, 0x108F3, Category::Cn),
    (0x108F4, 0x108F5, Category::Lo),
    (0x108F6, 0x108FA, Category::Cn),
    (0x108FB, 0x108FF, Category::No),
    (0x10900, 0x10915, Category::Lo),
    (0x10916, 0x1091B, Category::No),
    (0x1091C, 0x1091E, Category::Cn),
    (0x1091F, 0x1091F, Category::Po),
    (0x10920, 0x10939, Category::Lo),
    (0x1093A, 0x1093E, Category::Cn),
    (0x1093F, 0x1093F, Category::Po),
    (0x10940, 0x1097F, Category::Cn),
    (0x10980, 0x109B7, Category::Lo),
    (0x109B8, 0x109BB, Category::Cn),
    (0x109BC, 0x109BD, Category::No),
    (0x109BE, 0x109BF, Category::Lo),
    (0x109C0, 0x109CF, Category::No),
    (0x109D0, 0x109D1, Category::Cn),
    (0x109D2, 0x109FF, Category::No),
    (0x10A00, 0x10A00, Category::Lo),
    (0x10A01, 0x10A03, Category::Mn),
    (0x10A04, 0x10A04, Category::Cn),
    (0x10A05, 0x10A06, Category::Mn),
    (0x10A07, 0x10A0B, Category::Cn),
    (0x10A0C, 0x10A0F, Category::Mn),
    (0x10A10, 0x10A13, Category::Lo),
    (0x10A14, 0x10A14, Category::Cn),
    (0x10A15, 0x10A17, Category::Lo),
    (0x10A18, 0x10A18, Category::Cn),
    (0x10A19, 0x10A35, Category::Lo),
    (0x10A36, 0x10A37, Category::Cn),
    (0x10A38, 0x10A3A, Category::Mn),
    (0x10A3B, 0x10A3E, Category::Cn),
    (0x10A3F, 0x10A3F, Category::Mn),
    (0x10A40, 0x10A48, Category::No),
    (0x10A49, 0x10A4F, Category::Cn),
    (0x10A50, 0x10A58, Category::Po),
    (0x10A59, 0x10A5F, Category::Cn),
    (0x10A60, 0x10A7C, Category::Lo),
    (0x10A7D, 0x10A7E, Category::No),
    (0x10A7F, 0x10A7F, Category::Po),
    (0x10A80, 0x10A9C, Category::Lo),
    (0x10A9D, 0x10A9F, Category::No),
    (0x10AA0, 0x10ABF, Category::Cn),
    (0x10AC0, 0x10AC7, Category::Lo),
    (0x10AC8, 0x10AC8, Category::So),
    (0x10AC9, 0x10AE4, Category::Lo),
    (0x10AE5, 0x10AE6, Category::Mn),
    (0x10AE7, 0x10AEA, Category::Cn),
    (0x10AEB, 0x10AEF, Category::No),
    (0x10AF0, 0x10AF6, Category::Po),
    (0x10AF7, 0x10AFF, Category::Cn),
    (0x10B00, 0x10B35, Category::Lo),
    (0x10B36, 0x10B38, Category::Cn),
    (0x10B39, 0x10B3F, Category::Po),
    (0x10B40, 0x10B55, Category::Lo),
    (0x10B56, 0x10B57, Category::Cn),
    (0x10B58, 0x10B5F, Category::No),
    (0x10B60, 0x10B72, Category::Lo),
    (0x10B73, 0x10B77, Category::Cn),
    (0x10B78, 0x10B7F, Category::No),
    (0x10B80, 0x10B91, Category::Lo),
    (0x10B92, 0x10B98, Category::Cn),
    (0x10B99, 0x10B9C, Category::Po),
    (0x10B9D, 0x10BA8, Category::Cn),
    (0x10BA9, 0x10BAF, Category::No),
    (0x10BB0, 0x10BFF, Category::Cn),
    (0x10C00, 0x10C48, Category::Lo),
    (0x10C49, 0x10C7F, Category::Cn),
    (0x10C80, 0x10CB2, Category::Lu),
    (0x10CB3, 0x10CBF, Category::Cn),
    (0x10CC0, 0x10CF2, Category::Ll),
    (0x10CF3, 0x10CF9, Category::Cn),
    (0x10CFA, 0x10CFF, Category::No),
    (0x10D00, 0x10D23, Category::Lo),
    (0x10D24, 0x10D27, Category::Mn),
    (0x10D28, 0x10D2F, Category::Cn),
    (0x10D30, 0x10D39, Category::Nd),
    (0x10D3A, 0x10E5F, Category::Cn),
    (0x10E60, 0x10E7E, Category::No),
    (0x10E7F, 0x10E7F, Category::Cn),
    (0x10E80, 0x10EA9, Category::Lo),
    (0x10EAA, 0x10EAA, Category::Cn),
    (0x10EAB, 0x10EAC, Category::Mn),
    (0x10EAD, 0x10EAD, Category::Pd),
    (0x10EAE, 0x10EAF, Category::Cn),
    (0x10EB0, 0x10EB1, Category::Lo),
    (0x10EB2, 0x10EFF, Category::Cn),
    (0x10F00, 0x10F1C, Category::Lo),
    (0x10F1D, 0x10F26, Category::No),
    (0x10F27, 0x10F27, Category::Lo),
    (0x10F28, 0x10F2F, Category::Cn),
    (0x10F30, 0x10F45, Category::Lo),
    (0x10F46, 0x10F50, Category::Mn),
    (0x10F51, 0x10F54, Category::No),
    (0x10F55, 0x10F59, Category::Po),
    (0x10F5A, 0x10F6F, Category::Cn),
    (0x10F70, 0x10F81, Category::Lo),
    (0x10F82, 0x10F85, Category::Mn),
    (0x10F86, 0x10F89, Category::Po),
    (0x10F8A, 0x10FAF, Category::Cn),
    (0x10FB0, 0x10FC4, Category::Lo),
    (0x10FC5, 0x10FCB, Category::No),
    (0x10FCC, 0x10FDF, Category::Cn),
    (0x10FE0, 0x10FF6, Category::Lo),
    (0x10FF7, 0x10FFF, Category::Cn),
    (0x11000, 0x11000, Category::Mc),
    (0x11001, 0x11001, Category::Mn),
    (0x11002, 0x11002, Category::Mc),
    (0x11003, 0x11037, Category::Lo),
    (0x11038, 0x11046, Category::Mn),
    (0x11047, 0x1104D, Category::Po),
    (0x1104E, 0x11051, Category::Cn),
    (0x11052, 0x11065, Category::No),
    (0x11066, 0x1106F, Category::Nd),
    (0x11070, 0x11070, Category::Mn),
    (0x11071, 0x11072, Category::Lo),
    (0x11073, 0x11074, Category::Mn),
    (0x11075, 0x11075, Category::Lo),
    (0x11076, 0x1107E, Category::Cn),
    (0x1107F, 0x11081, Category::Mn),
    (0x11082, 0x11082, Category::Mc),
    (0x11083, 0x110AF, Category::Lo),
    (0x110B0, 0x110B2, Category::Mc),
    (0x110B3, 0x110B6, Category::Mn),
    (0x110B7, 0x110B8, Category::Mc),
    (0x110B9, 0x110BA, Category::Mn),
    (0x110BB, 0x110BC, Category::Po),
    (0x110BD, 0x110BD, Category::Format),
    (0x110BE, 0x110C1, Category::Po),
    (0x110C2, 0x110C2, Category::Mn),
    (0x110C3, 0x110CC, Category::Cn),
    (0x110CD, 0x110CD, Category::Format),
    (0x110CE, 0x110CF, Category::Cn),
    (0x110D0, 0x110E8, Category::Lo),
    (0x110E9, 0x110EF, Category::Cn),
    (0x110F0, 0x110F9, Category::Nd),
    (0x110FA, 0x110FF, Category::Cn),
    (0x11100, 0x11102, Category::Mn),
    (0x11103, 0x11126, Category::Lo),
    (0x11127, 0x1112B, Category::Mn),
    (0x1112C, 0x1112C, Category::Mc),
    (0x1112D, 0x11134, Category::Mn),
    (0x11135, 0x11135, Category::Cn),
    (0x11136, 0x1113F, Category::Nd),
    (0x11140, 0x11143, Category::Po),
    (0x11144, 0x11144, Category::Lo),
    (0x11145, 0x11146, Category::Mc),
    (0x11147, 0x11147, Category::Lo),
    (0x11148, 0x1114F, Category::Cn),
    (0x11150, 0x11172, Category::Lo),
    (0x11173, 0x11173, Category::Mn),
    (0x11174, 0x11175, Category::Po),
    (0x11176, 0x11176, Category::Lo),
    (0x11177, 0x1117F, Category::Cn),
    (0x11180, 0x11181, Category::Mn),
    (0x11182, 0x11182, Category::Mc),
    (0x11183, 0x111B2, Category::Lo),
    (0x111B3, 0x111B5, Category::Mc),
    (0x111B6, 0x111BE, Category::Mn),
    (0x111BF, 0x111C0, Category::Mc),
    (0x111C1, 0x111C4, Category::Lo),
    (0x111C5, 0x111C8, Category::Po),
    (0x111C9, 0x111CC, Category::Mn),
    (0x111CD, 0x111CD, Category::Po),
    (0x111CE, 0x111CE, Category::Mc),
    (0x111CF, 0x111CF, Category::Mn),
    (0x111D0, 0x111D9, Category::Nd),
    (0x111DA, 0x111DA, Category::Lo),
    (0x111DB, 0x111DB, Category::Po),
    (0x111DC, 0x111DC, Category::Lo),
    (0x111DD, 0x111DF, Category::Po),
    (0x111E0, 0x111E0, Category::Cn),
    (0x111E1, 0x111F4, Category::No),
    (0x111F5, 0x111FF, Category::Cn),
    (0x11200, 0x11211, Category::Lo),
    (0x11212, 0x11212, Category::Cn),
    (0x11213, 0x1122B, Category::Lo),
    (0x1122C, 0x1122E, Category::Mc),
    (0x1122F, 0x11231, Category::Mn),
    (0x11232, 0x11233, Category::Mc),
    (0x11234, 0x11234, Category::Mn),
    (0x11235, 0x11235, Category::Mc),
    (0x11236, 0x11237, Category::Mn),
    (0x11238, 0x1123D, Category::Po),
    (0x1123E, 0x1123E, Category::Mn),
    (0x1123F, 0x1127F, Category::Cn),
    (0x11280, 0x11286, Category::Lo),
    (0x11287, 0x11287, Category::Cn),
    (0x11288, 0x11288, Category::Lo),
    (0x11289, 0x11289, Category::Cn),
    (0x1128A, 0x1128D, Category::Lo),
    (0x1128E, 0x1128E, Category::Cn),
    (0x1128F, 0x1129D, Category::Lo),
    (0x1129E, 0x1129E, Category::Cn),
    (0x1129F, 0x112A8, Category::Lo),
    (0x112A9, 0x112A9, Category::Po),
    (0x112AA, 0x112AF, Category::Cn),
    (0x112B0, 0x112DE, Category::Lo),
    (0x112DF, 0x112DF, Category::Mn),
    (0x112E0, 0x112E2, Category::Mc),
    (0x112E3, 0x112EA, Category::Mn),
    (0x112EB, 0x112EF, Category::Cn),
    (0x112F0, 0x112F9, Category::Nd),
    (0x112FA, 0x112FF, Category::Cn),
    (0x11300, 0x11301, Category::Mn),
    (0x11302, 0x11303, Category::Mc),
    (0x11304, 0x11304, Category::Cn),
    (0x11305, 0x1130C, Category::Lo),
    (0x1130D, 0x1130E, Category::Cn),
    (0x1130F, 0x11310, Category::Lo),
    (0x11311, 0x11312, Category::Cn),
    (0x11313, 0x11328, Category::Lo),
    (0x11329, 0x11329, Category::Cn),
    (0x1132A, 0x11330, Category::Lo),
    (0x11331, 0x11331, Category::Cn),
    (0x11332, 0x11333, Category::Lo),
    (0x11334, 0x11334, Category::Cn),
    (0x11335, 0x11339, Category::Lo),
    (0x1133A, 0x1133A, Category::Cn),
    (0x1133B, 0x1133C, Category::Mn),
    (0x1133D, 0x1133D, Category::Lo),
    (0x1133E, 0x1133F, Category::Mc),
    (0x11340, 0x11340, Category::Mn),
    (0x11341, 0x11344, Category::Mc),
    (0x11345, 0x11346, Category::Cn),
    (0x11347, 0x11348, Category::Mc),
    (0x11349, 0x1134A, Category::Cn),
    (0x1134B, 0x1134D, Category::Mc),
    (0x1134E, 0x1134F, Category::Cn),
    (0x11350, 0x11350, Category::Lo),
    (0x11351, 0x11356, Category::Cn),
    (0x11357, 0x11357, Category::Mc),
    (0x11358, 0x1135C, Category::Cn),
    (0x1135D, 0x11361, Category::Lo),
    (0x11362, 0x11363, Category::Mc),
    (0x11364, 0x11365, Category::Cn),
    (0x11366, 0x1136C, Category::Mn),
    (0x1136D, 0x1136F, Category::Cn),
    (0x11370, 0x11374, Category::Mn),
    (0x11375, 0x113FF, Category::Cn),
    (0x11400, 0x11434, Category::Lo),
    (0x11435, 0x11437, Category::Mc),
    (0x11438, 0x1143F, Category::Mn),
    (0x11440, 0x11441, Category::Mc),
    (0x11442, 0x11444, Category::Mn),
    (0x11445, 0x11445, Category::Mc),
    (0x11446, 0x11446, Category::Mn),
    (0x11447, 0x1144A, Category::Lo),
    (0x1144B, 0x1144F, Category::Po),
    (0x11450, 0x11459, Category::Nd),
    (0x1145A, 0x1145B, Category::Po),
    (0x1145C, 0x1145C, Category::Cn),
    (0x1145D, 0x1145D, Category::Po),
    (0x1145E, 0x1145E, Category::Mn),
    (0x1145F, 0x11461, Category::Lo),
    (0x11462, 0x1147F, Category::Cn),
    (0x11480, 0x114AF, Category::Lo),
    (0x114B0, 0x114B2, Category::Mc),
    (0x114B3, 0x114B8, Category::Mn),
    (0x114B9, 0x114B9, Category::Mc),
    (0x114BA, 0x114BA, Category::Mn),
    (0x114BB, 0x114BE, Category::Mc),
    (0x114BF, 0x114C0, Category::Mn),
    (0x114C1, 0x114C1, Category::Mc),
    (0x114C2, 0x114C3, Category::Mn),
    (0x114C4, 0x114C5, Category::Lo),
    (0x114C6, 0x114C6, Category::Po),
    (0x114C7, 0x114C7, Category::Lo),
    (0x114C8, 0x114CF, Category::Cn),
    (0x114D0, 0x114D9, Category::Nd),
    (0x114DA, 0x1157F, Category::Cn),
    (0x11580, 0x115AE, Category::Lo),
    (0x115AF, 0x115B1, Category::Mc),
    (0x115B2, 0x115B5, Category::Mn),
    (0x115B6, 0x115B7, Category::Cn),
    (0x115B8, 0x115BB, Category::Mc),
    (0x115BC, 0x115BD, Category::Mn),
    (0x115BE, 0x115BE, Category::Mc),
    (0x115BF, 0x115C0, Category::Mn),
    (0x115C1, 0x115D7, Category::Po),
    (0x115D8, 0x115DB, Category::Lo),
    (0x115DC, 0x115DD, Category::Mn),
    (0x115DE, 0x115FF, Category::Cn),
    (0x11600, 0x1162F, Category::Lo),
    (0x11630, 0x11632, Category::Mc),
    (0x11633, 0x1163A, Category::Mn),
    (0x1163B, 0x1163C, Category::Mc),
    (0x1163D, 0x1163D, Category::Mn),
    (0x1163E, 0x1163E, Category::Mc),
    (0x1163F, 0x11640, Category::Mn),
    (0x11641, 0x11643, Category::Po),
    (0x11644, 0x11644, Category::Lo),
    (0x11645, 0x1164F, Category::Cn),
    (0x11650, 0x11659, Category::Nd),
    (0x1165A, 0x1165F, Category::Cn),
    (0x11660, 0x1166C, Category::Po),
    (0x1166D, 0x1167F, Category::Cn),
    (0x11680, 0x116AA, Category::Lo),
    (0x116AB, 0x116AB, Category::Mn),
    (0x116AC, 0x116AC, Category::Mc),
    (0x116AD, 0x116AD, Category::Mn),
    (0x116AE, 0x116AF, Category::Mc),
    (0x116B0, 0x116B5, Category::Mn),
    (0x116B6, 0x116B6, Category::Mc),
    (0x116B7, 0x116B7, Category::Mn),
    (0x116B8, 0x116B8, Category::Lo),
    (0x116B9, 0x116B9, Category::Po),
    (0x116BA, 0x116BF, Category::Cn),
    (0x116C0, 0x116C9, Category::Nd),
    (0x116CA, 0x116FF, Category::Cn),
    (0x11700, 0x1171A, Category::Lo),
    (0x1171B, 0x1171C, Category::Cn),
    (0x1171D, 0x1171F, Category::Mn),
    (0x11720, 0x11721, Category::Mc),
    (0x11722, 0x11725, Category::Mn),
    (0x11726, 0x11726, Category::Mc),
    (0x11727, 0x1172B, Category::Mn),
    (0x1172C, 0x1172F, Category::Cn),
    (0x11730, 0x11739, Category::Nd),
    (0x1173A, 0x1173B, Category::No),
    (0x1173C, 0x1173E, Category::Po),
    (0x1173F, 0x1173F, Category::So),
    (0x11740, 0x11746, Category::Lo),
    (0x11747, 0x117FF, Category::Cn),
    (0x11800, 0x1182B, Category::Lo),
    (0x1182C, 0x1182E, Category::Mc),
    (0x1182F, 0x11837, Category::Mn),
    (0x11838, 0x11838, Category::Mc),
    (0x11839, 0x1183A, Category::Mn),
    (0x1183B, 0x1183B, Category::Po),
    (0x1183C, 0x1189F, Category::Cn),
    (0x118A0, 0x118BF, Category::Lu),
    (0x118C0, 0x118DF, Category::Ll),
    (0x118E0, 0x118E9, Category::Nd),
    (0x118EA, 0x118F2, Category::No),
    (0x118F3, 0x118FE, Category::Cn),
    (0x118FF, 0x11906, Category::Lo),
    (0x11907, 0x11908, Category::Cn),
    (0x11909, 0x11909, Category::Lo),
    (0x1190A, 0x1190B, Category::Cn),
    (0x1190C, 0x11913, Category::Lo),
    (0x11914, 0x11914, Category::Cn),
    (0x11915, 0x11916, Category::Lo),
    (0x11917, 0x11917, Category::Cn),
    (0x11918, 0x1192F, Category::Lo),
    (0x11930, 0x11935, Category::Mc),
    (0x11936, 0x11936, Category::Cn),
    (0x11937, 0x11938, Category::Mc),
    (0x11939, 0x1193A, Category::Cn),
    (0x1193B, 0x1193C, Category::Mn),
    (0x1193D, 0x1193D, Category::Mc),
    (0x1193E, 0x1193E, Category::Mn),
    (0x1193F, 0x1193F, Category::Lo),
    (0x11940, 0x11940, Category::Mc),
    (0x11941, 0x11941, Category::Lo),
    (0x11942, 0x11942, Category::Mc),
    (0x11943, 0x11943, Category::Mn),
    (0x11944, 0x11946, Category::Po),
    (0x11947, 0x1194F, Category::Cn),
    (0x11950, 0x11959, Category::Nd),
    (0x1195A, 0x1199F, Category::Cn),
    (0x119A0, 0x119A7, Category::Lo),
    (0x119A8, 0x119A9, Category::Cn),
    (0x119AA, 0x119D0, Category::Lo),
    (0x119D1, 0x119D3, Category::Mc),
    (0x119D4, 0x119D7, Category::Mn),
    (0x119D8, 0x119D9, Category::Cn),
    (0x119DA, 0x119DB, Category::Mn),
    (0x119DC, 0x119DF, Category::Mc),
    (0x119E0, 0x119E0, Category::Mn),
    (0x119E1, 0x119E1, Category::Lo),
    (0x119E2, 0x119E2, Category::Po),
    (0x119E3, 0x119E3, Category::Lo),
    (0x119E4, 0x119E4, Category::Mc),
    (0x119E5, 0x119FF, Category::Cn),
    (0x11A00, 0x11A00, Category::Lo),
    (0x11A01, 0x11A0A, Category::Mn),
    (0x11A0B, 0x11A32, Category::Lo),
    (0x11A33, 0x11A38, Category::Mn),
    (0x11A39, 0x11A39, Category::Mc),
    (0x11A3A, 0x11A3A, Category::Lo),
    (0x11A3B, 0x11A3E, Category::Mn),
    (0x11A3F, 0x11A46, Category::Po),
    (0x11A47, 0x11A47, Category::Mn),
    (0x11A48, 0x11A4F, Category::Cn),
    (0x11A50, 0x11A50, Category::Lo),
    (0x11A51, 0x11A56, Category::Mn),
    (0x11A57, 0x11A58, Category::Mc),
    (0x11A59, 0x11A5B, Category::Mn),
    (0x11A5C, 0x11A89, Category::Lo),
    (0x11A8A, 0x11A96, Category::Mn),
    (0x11A97, 0x11A97, Category::Mc),
    (0x11A98, 0x11A99, Category::Mn),
    (0x11A9A, 0x11A9C, Category::Po),
    (0x11A9D, 0x11A9D, Category::Lo),
    (0x11A9E, 0x11AA2, Category::Po),
    (0x11AA3, 0x11AAF, Category::Cn),
    (0x11AB0, 0x11AF8, Category::Lo),
    (0x11AF9, 0x11BFF, Category::Cn),
    (0x11C00, 0x11C08, Category::Lo),
    (0x11C09, 0x11C09, Category::Cn),
    (0x11C0A, 0x11C2E, Category::Lo),
    (0x11C2F, 0x11C2F, Category::Mc),
    (0x11C30, 0x11C36, Category::Mn),
    (0x11C37, 0x11C37, Category::Cn),
    (0x11C38, 0x11C3D, Category::Mn),
    (0x11C3E, 0x11C3E, Category::Mc),
    (0x11C3F, 0x11C3F, Category::Mn),
    (0x11C40, 0x11C40, Category::Lo),
    (0x11C41, 0x11C45, Category::Po),
    (0x11C46, 0x11C4F, Category::Cn),
    (0x11C50, 0x11C59, Category::Nd),
    (0x11C5A, 0x11C6C, Category::No),
    (0x11C6D, 0x11C6F, Category::Cn),
    (0x11C70, 0x11C71, Category::Po),
    (0x11C72, 0x11C8F, Category::Lo),
    (0x11C90, 0x11C91, Category::Cn),
    (0x11C92, 0x11CA7, Category::Mn),
    (0x11CA8, 0x11CA8, Category::Cn),
    (0x11CA9, 0x11CA9, Category::Mc),
    (0x11CAA, 0x11CB0, Category::Mn),
    (0x11CB1, 0x11CB1, Category::Mc),
    (0x11CB2, 0x11CB3, Category::Mn),
    (0x11CB4, 0x11CB4, Category::Mc),
    (0x11CB5, 0x11CB6, Category::Mn),
    (0x11CB7, 0x11CFF, Category::Cn),
    (0x11D00, 0x11D06, Category::Lo),
    (0x11D07, 0x11D07, Category::Cn),
    (0x11D08, 0x11D09, Category::Lo),
    (0x11D0A, 0x11D0A, Category::Cn),
    (0x11D0B, 0x11D30, Category::Lo),
    (0x11D31, 0x11D36, Category::Mn),
    (0x11D37, 0x11D39, Category::Cn),
    (0x11D3A, 0x11D3A, Category::Mn),
    (0x11D3B, 0x11D3B, Category::Cn),
    (0x11D3C, 0x11D3D, Category::Mn),
    (0x11D3E, 0x11D3E, Category::Cn),
    (0x11D3F, 0x11D45, Category::Mn),
    (0x11D46, 0x11D46, Category::Lo),
    (0x11D47, 0x11D47, Category::Mn),
    (0x11D48, 0x11D4F, Category::Cn),
    (0x11D50, 0x11D59, Category::Nd),
    (0x11D5A, 0x11D5F, Category::Cn),
    (0x11D60, 0x11D65, Category::Lo),
    (0x11D66, 0x11D66, Category::Cn),
    (0x11D67, 0x11D68, Category::Lo),
    (0x11D69, 0x11D69, Category::Cn),
    (0x11D6A, 0x11D89, Category::Lo),
    (0x11D8A, 0x11D8E, Category::Mc),
    (0x11D8F, 0x11D8F, Category::Cn),
    (0x11D90, 0x11D91, Category::Mn),
    (0x11D92, 0x11D92, Category::Cn),
    (0x11D93, 0x11D94, Category::Mc),
    (0x11D95, 0x11D95, Category::Mn),
    (0x11D96, 0x11D96, Category::Mc),
    (0x11D97, 0x11D97, Category::Mn),
    (0x11D98, 0x11D98, Category::Lo),
    (0x11D99, 0x11D9F, Category::Cn),
    (0x11DA0, 0x11DA9, Category::Nd),
    (0x11DAA, 0x11EDF, Category::Cn),
    (0x11EE0, 0x11EF2, Category::Lo),
    (0x11EF3, 0x11EF4, Category::Mn),
    (0x11EF5, 0x11EF6, Category::Mc),
    (0x11EF7, 0x11EF8, Category::Po),
    (0x11EF9, 0x11FAF, Category::Cn),
    (0x11FB0, 0x11FB0, Category::Lo),
    (0x11FB1, 0x11FBF, Category::Cn),
    (0x11FC0, 0x11FD4, Category::No),
    (0x11FD5, 0x11FDC, Category::So),
    (0x11FDD, 0x11FE0, Category::Sc),
    (0x11FE1, 0x11FF1, Category::So),
    (0x11FF2, 0x11FFE, Category::Cn),
    (0x11FFF, 0x11FFF, Category::Po),
    (0x12000, 0x12399, Category::Lo),
    (0x1239A, 0x123FF, Category::Cn),
    (0x12400, 0x1246E, Category::Nl),
    (0x1246F, 0x1246F, Category::Cn),
    (0x12470, 0x12474, Category::Po),
    (0x12475, 0x1247F, Category::Cn),
    (0x12480, 0x12543, Category::Lo),
    (0x12544, 0x12F8F, Category::Cn),
    (0x12F90, 0x12FF0, Category::Lo),
    (0x12FF1, 0x12FF2, Category::Po),
    (0x12FF3, 0x12FFF, Category::Cn),
    (0x13000, 0x1342E, Category::Lo),
    (0x1342F, 0x1342F, Category::Cn),
    (0x13430, 0x13438, Category::Format),
    (0x13439, 0x143FF, Category::Cn),
    (0x14400, 0x14646, Category::Lo),
    (0x14647, 0x167FF, Category::Cn),
    (0x16800, 0x16A38, Category::Lo),
    (0x16A39, 0x16A3F, Category::Cn),
    (0x16A40, 0x16A5E, Category::Lo),
    (0x16A5F, 0x16A5F, Category::Cn),
    (0x16A60, 0x16A69, Category::Nd),
    (0x16A6A, 0x16A6D, Category::Cn),
    (0x16A6E, 0x16A6F, Category::Po),
    (0x16A70, 0x16ABE, Category::Lo),
    (0x16ABF, 0x16ABF, Category::Cn),
    (0x16AC0, 0x16AC9, Category::Nd),
    (0x16ACA, 0x16ACF, Category::Cn),
    (0x16AD0, 0x16AED, Category::Lo),
    (0x16AEE, 0x16AEF, Category::Cn),
    (0x16AF0, 0x16AF4, Category::Mn),
    (0x16AF5, 0x16AF5, Category::Po),
    (0x16AF6, 0x16AFF, Category::Cn),
    (0x16B00, 0x16B2F, Category::Lo),
    (0x16B30, 0x16B36, Category::Mn),
    (0x16B37, 0x16B3B, Category::Po),
    (0x16B3C, 0x16B3F, Category::So),
    (0x16B40, 0x16B43, Category::Lm),
    (0x16B44, 0x16B44, Category::Po),
    (0x16B45, 0x16B45, Category::So),
    (0x16B46, 0x16B4F, Category::Cn),
    (0x16B50, 0x16B59, Category::Nd),
    (0x16B5A, 0x16B5A, Category::Cn),
    (0x16B5B, 0x16B61, Category::No),
    (0x16B62, 0x16B62, Category::Cn),
    (0x16B63, 0x16B77, Category::Lo),
    (0x16B78, 0x16B7C, Category::Cn),
    (0x16B7D, 0x16B8F, Category::Lo),
    (0x16B90, 0x16E3F, Category::Cn),
    (0x16E40, 0x16E5F, Category::Lu),
    (0x16E60, 0x16E7F, Category::Ll),
    (0x16E80, 0x16E96, Category::No),
    (0x16E97, 0x16E9A, Category::Po),
    (0x16E9B, 0x16EFF, Category::Cn),
    (0x16F00, 0x16F4A, Category::Lo),
    (0x16F4B, 0x16F4E, Category::Cn),
    (0x16F4F, 0x16F4F, Category::Mn),
    (0x16F50, 0x16F50, Category::Lo),
    (0x16F51, 0x16F87, Category::Mc),
    (0x16F88, 0x16F8E, Category::Cn),
    (0x16F8F, 0x16F92, Category::Mn),
    (0x16F93, 0x16F9F, Category::Lm),
    (0x16FA0, 0x16FDF, Category::Cn),
    (0x16FE0, 0x16FE1, Category::Lm),
    (0x16FE2, 0x16FE2, Category::Po),
    (0x16FE3, 0x16FE3, Category::Lm),
    (0x16FE4, 0x16FE4, Category::Mn),
    (0x16FE5, 0x16FEF, Category::Cn),
    (0x16FF0, 0x16FF1, Category::Mc),
    (0x16FF2, 0x16FFF, Category::Cn),
    (0x17000, 0x187F7, Category::Lo),
    (0x187F8, 0x187FF, Category::Cn),
    (0x18800, 0x18CD5, Category::Lo),
    (0x18CD6, 0x18CFF, Category::Cn),
    (0x18D00, 0x18D08, Category::Lo),
    (0x18D09, 0x1AFEF, Category::Cn),
    (0x1AFF0, 0x1AFF3, Category::Lm),
    (0x1AFF4, 0x1AFF4, Category::Cn),
    (0x1AFF5, 0x1AFFB, Category::Lm),
    (0x1AFFC, 0x1AFFC, Category::Cn),
    (0x1AFFD, 0x1AFFE, Category::Lm),
    (0x1AFFF, 0x1AFFF, Category::Cn),
    (0x1B000, 0x1B122, Category::Lo),
    (0x1B123, 0x1B14F, Category::Cn),
    (0x1B150, 0x1B152, Category::Lo),
    (0x1B153, 0x1B163, Category::Cn),
    (0x1B164, 0x1B167, Category::Lo),
    (0x1B168, 0x1B16F, Category::Cn),
    (0x1B170, 0x1B2FB, Category::Lo),
    (0x1B2FC, 0x1BBFF, Category::Cn),
    (0x1BC00, 0x1BC6A, Category::Lo),
    (0x1BC6B, 0x1BC6F, Category::Cn),
    (0x1BC70, 0x1BC7C, Category::Lo),
    (0x1BC7D, 0x1BC7F, Category::Cn),
    (0x1BC80, 0x1BC88, Category::Lo),
    (0x1BC89, 0x1BC8F, Category::Cn),
    (0x1BC90, 0x1BC99, Category::Lo),
    (0x1BC9A, 0x1BC9B, Category::Cn),
    (0x1BC9C, 0x1BC9C, Category::So),
    (0x1BC9D, 0x1BC9E, Category::Mn),
    (0x1BC9F, 0x1BC9F, Category::Po),
    (0x1BCA0, 0x1BCA3, Category::Format),
    (0x1BCA4, 0x1CEFF, Category::Cn),
    (0x1CF00, 0x1CF2D, Category::Mn),
    (0x1CF2E, 0x1CF2F, Category::Cn),
    (0x1CF30, 0x1CF46, Category::Mn),
    (0x1CF47, 0x1CF4F, Category::Cn),
    (0x1CF50, 0x1CFC3, Category::So),
    (0x1CFC4, 0x1CFFF, Category::Cn),
    (0x1D000, 0x1D0F5, Category::So),
    (0x1D0F6, 0x1D0FF, Category::Cn),
    (0x1D100, 0x1D126, Category::So),
    (0x1D127, 0x1D128, Category::Cn),
    (0x1D129, 0x1D164, Category::So),
    (0x1D165, 0x1D166, Category::Mc),
    (0x1D167, 0x1D169, Category::Mn),
    (0x1D16A, 0x1D16C, Category::So),
    (0x1D16D, 0x1D172, Category::Mc),
    (0x1D173, 0x1D17A, Category::Format),
    (0x1D17B, 0x1D182, Category::Mn),
    (0x1D183, 0x1D184, Category::So),
    (0x1D185, 0x1D18B, Category::Mn),
    (0x1D18C, 0x1D1A9, Category::So),
    (0x1D1AA, 0x1D1AD, Category::Mn),
    (0x1D1AE, 0x1D1EA, Category::So),
    (0x1D1EB, 0x1D1FF, Category::Cn),
    (0x1D200, 0x1D241, Category::So),
    (0x1D242, 0x1D244, Category::Mn),
    (0x1D245, 0x1D245, Category::So),
    (0x1D246, 0x1D2DF, Category::Cn),
    (0x1D2E0, 0x1D2F3, Category::No),
    (0x1D2F4, 0x1D2FF, Category::Cn),
    (0x1D300, 0x1D356, Category::So),
    (0x1D357, 0x1D35F, Category::Cn),
    (0x1D360, 0x1D378, Category::No),
    (0x1D379, 0x1D3FF, Category::Cn),
    (0x1D400, 0x1D419, Category::Lu),
    (0x1D41A, 0x1D433, Category::Ll),
    (0x1D434, 0x1D44D, Category::Lu),
    (0x1D44E, 0x1D454, Category::Ll),
    (0x1D455, 0x1D455, Category::Cn),
    (0x1D456, 0x1D467, Category::Ll),
    (0x1D468, 0x1D481, Category::Lu),
    (0x1D482, 0x1D49B, Category::Ll),
    (0x1D49C, 0x1D49C, Category::Lu),
    (0x1D49D, 0x1D49D, Category::Cn),
    (0x1D49E, 0x1D49F, Category::Lu),
    (0x1D4A0, 0x1D4A1, Category::Cn),
    (0x1D4A2, 0x1D4A2, Category::Lu),
    (0x1D4A3, 0x1D4A4, Category::Cn),
    (0x1D4A5, 0x1D4A6, Category::Lu),
    (0x1D4A7, 0x1D4A8, Category::Cn),
    (0x1D4A9, 0x1D4AC, Category::Lu),
    (0x1D4AD, 0x1D4AD, Category::Cn),
    (0x1D4AE, 0x1D4B5, Category::Lu),
    (0x1D4B6, 0x1D4B9, Category::Ll),
    (0x1D4BA, 0x1D4BA, Category::Cn),
    (0x1D4BB, 0x1D4BB, Category::Ll),
    (0x1D4BC, 0x1D4BC, Category::Cn),
    (0x1D4BD, 0x1D4C3, Category::Ll),
    (0x1D4C4, 0x1D4C4, Category::Cn),
    (0x1D4C5, 0x1D4CF, Category::Ll),
    (0x1D4D0, 0x1D4E9, Category::Lu),
    (0x1D4EA, 0x1D503, Category::Ll),
    (0x1D504, 0x1D505, Category::Lu),
    (0x1D506, 0x1D506, Category::Cn),
    (0x1D507, 0x1D50A, Category::Lu),
    (0x1D50B, 0x1D50C, Category::Cn),
    (0x1D50D, 0x1D514, Category::Lu),
    (0x1D515, 0x1D515, Category::Cn),
    (0x1D516, 0x1D51C, Category::Lu),
    (0x1D51D, 0x1D51D, Category::Cn),
    (0x1D51E, 0x1D537, Category::Ll),
    (0x1D538, 0x1D539, Category::Lu),
    (0x1D53A, 0x1D53A, Category::Cn),
    (0x1D53B, 0x1D53E, Category::Lu),
    (0x1D53F, 0x1D53F, Category::Cn),
    (0x1D540, 0x1D544, Category::Lu),
    (0x1D545, 0x1D545, Category::Cn),
    (0x1D546, 0x1D546, Category::Lu),
    (0x1D547, 0x1D549, Category::Cn),
    (0x1D54A, 0x1D550, Category::Lu),
    (0x1D551, 0x1D551, Category::Cn),
    (0x1D552, 0x1D56B, Category::Ll),
    (0x1D56C, 0x1D585, Category::Lu),
    (0x1D586, 0x1D59F, Category::Ll),
    (0x1D5A0, 0x1D5B9, Category::Lu),
    (0x1D5BA, 0x1D5D3, Category::Ll),
    (0x1D5D4, 0x1D5ED, Category::Lu),
    (0x1D5EE, 0x1D607, Category::Ll),
    (0x1D608, 0x1D621, Category::Lu),
    (0x1D622, 0x1D63B, Category::Ll),
    (0x1D63C, 0x1D655, Category::Lu),
    (0x1D656, 0x1D66F, Category::Ll),
    (0x1D670, 0x1D689, Category::Lu),
    (0x1D68A, 0x1D6A5, Category::Ll),
    (0x1D6A6, 0x1D6A7, Category::Cn),
    (0x1D6A8, 0x1D6C0, Category::Lu),
    (0x1D6C1, 0x1D6C1, Category::Sm),
    (0x1D6C2, 0x1D6DA, Category::Ll),
    (0x1D6DB, 0x1D6DB, Category::Sm),
    (0x1D6DC, 0x1D6E1, Category::Ll),
    (0x1D6E2, 0x1D6FA, Category::Lu),
    (0x1D6FB, 0x1D6FB, Category::Sm),
    (0x1D6FC, 0x1D714, Category::Ll),
    (0x1D715, 0x1D715, Category::Sm),
    (0x1D716, 0x1D71B, Category::Ll),
    (0x1D71C, 0x1D734, Category::Lu),
    (0x1D735, 0x1D735, Category::Sm),
    (0x1D736, 0x1D74E, Category::Ll),
    (0x1D74F, 0x1D74F, Category::Sm),
    (0x1D750, 0x1D755, Category::Ll),
    (0x1D756, 0x1D76E, Category::Lu),
    (0x1D76F, 0x1D76F, Category::Sm),
    (0x1D770, 0x1D788, Category::Ll),
    (0x1D789, 0x1D789, Category::Sm),
    (0x1D78A, 0x1D78F, Category::Ll),
    (0x1D790, 0x1D7A8, Category::Lu),
    (0x1D7A9, 0x1D7A9, Category::Sm),
    (0x1D7AA, 0x1D7C2, Category::Ll),
    (0x1D7C3, 0x1D7C3, Category::Sm),
    (0x1D7C4, 0x1D7C9, Category::Ll),
    (0x1D7CA, 0x1D7CA, Category::Lu),
    (0x1D7CB, 0x1D7CB, Category::Ll),
    (0x1D7CC, 0x1D7CD, Category::Cn),
    (0x1D7CE, 0x1D7FF, Category::Nd),
    (0x1D800, 0x1D9FF, Category::So),
    (0x1DA00, 0x1DA36, Category::Mn),
    (0x1DA37, 0x1DA3A, Category::So),
    (0x1DA3B, 0x1DA6C, Category::Mn),
    (0x1DA6D, 0x1DA74, Category::So),
    (0x1DA75, 0x1DA75, Category::Mn),
    (0x1DA76, 0x1DA83, Category::So),
    (0x1DA84, 0x1DA84, Category::Mn),
    (0x1DA85, 0x1DA86, Category::So),
    (0x1DA87, 0x1DA8B, Category::Po),
    (0x1DA8C, 0x1DA9A, Category::Cn),
    (0x1DA9B, 0x1DA9F, Category::Mn),
    (0x1DAA0, 0x1DAA0, Category::Cn),
    (0x1DAA1, 0x1DAAF, Category::Mn),
    (0x1DAB0, 0x1DEFF, Category::Cn),
    (0x1DF00, 0x1DF09, Category::Ll),
    (0x1DF0A, 0x1DF0A, Category::Lo),
    (0x1DF0B, 0x1DF1E, Category::Ll),
    (0x1DF1F, 0x1DFFF, Category::Cn),
    (0x1E000, 0x1E006, Category::Mn),
    (0x1E007, 0x1E007, Category::Cn),
    (0x1E008, 0x1E018, Category::Mn),
    (0x1E019, 0x1E01A, Category::Cn),
    (0x1E01B, 0x1E021, Category::Mn),
    (0x1E022, 0x1E022, Category::Cn),
    (0x1E023, 0x1E024, Category::Mn),
    (0x1E025, 0x1E025, Category::Cn),
    (0x1E026, 0x1E02A, Category::Mn),
    (0x1E02B, 0x1E0FF, Category::Cn),
    (0x1E100, 0x1E12C, Category::Lo),
    (0x1E12D, 0x1E12F, Category::Cn),
    (0x1E130, 0x1E136, Category::Mn),
    (0x1E137, 0x1E13D, Category::Lm),
    (0x1E13E, 0x1E13F, Category::Cn),
    (0x1E140, 0x1E149, Category::Nd),
    (0x1E14A, 0x1E14D, Category::Cn),
    (0x1E14E, 0x1E14E, Category::Lo),
    (0x1E14F, 0x1E14F, Category::So),
    (0x1E150, 0x1E28F, Category::Cn),
    (0x1E290, 0x1E2AD, Category::Lo),
    (0x1E2AE, 0x1E2AE, Category::Mn),
    (0x1E2AF, 0x1E2BF, Category::Cn),
    (0x1E2C0, 0x1E2EB, Category::Lo),
    (0x1E2EC, 0x1E2EF, Category::Mn),
    (0x1E2F0, 0x1E2F9, Category::Nd),
    (0x1E2FA, 0x1E2FE, Category::Cn),
    (0x1E2FF, 0x1E2FF, Category::Sc),
    (0x1E300, 0x1E7DF, Category::Cn),
    (0x1E7E0, 0x1E7E6, Category::Lo),
    (0x1E7E7, 0x1E7E7, Category::Cn),
    (0x1E7E8, 0x1E7EB, Category::Lo),
    (0x1E7EC, 0x1E7EC, Category::Cn),
    (0x1E7ED, 0x1E7EE, Category::Lo),
    (0x1E7EF, 0x1E7EF, Category::Cn),
    (0x1E7F0, 0x1E7FE, Category::Lo),
    (0x1E7FF, 0x1E7FF, Category::Cn),
    (0x1E800, 0x1E8C4, Category::Lo),
    (0x1E8C5, 0x1E8C6, Category::Cn),
    (0x1E8C7, 0x1E8CF, Category::No),
    (0x1E8D0, 0x1E8D6, Category::Mn),
    (0x1E8D7, 0x1E8FF, Category::Cn),
    (0x1E900, 0x1E921, Category::Lu),
    (0x1E922, 0x1E943, Category::Ll),
    (0x1E944, 0x1E94A, Category::Mn),
    (0x1E94B, 0x1E94B, Category::Lm),
    (0x1E94C, 0x1E94F, Category::Cn),
    (0x1E950, 0x1E959, Category::Nd),
    (0x1E95A, 0x1E95D, Category::Cn),
    (0x1E95E, 0x1E95F, Category::Po),
    (0x1E960, 0x1EC70, Category::Cn),
    (0x1EC71, 0x1ECAB, Category::No),
    (0x1ECAC, 0x1ECAC, Category::So),
    (0x1ECAD, 0x1ECAF, Category::No),
    (0x1ECB0, 0x1ECB0, Category::Sc),
    (0x1ECB1, 0x1ECB4, Category::No),
    (0x1ECB5, 0x1ED00, Category::Cn),
    (0x1ED01, 0x1ED2D, Category::No),
    (0x1ED2E, 0x1ED2E, Category::So),
    (0x1ED2F, 0x1ED3D, Category::No),
    (0x1ED3E, 0x1EDFF, Category::Cn),
    (0x1EE00, 0x1EE03, Category::Lo),
    (0x1EE04, 0x1EE04, Category::Cn),
    (0x1EE05, 0x1EE1F, Category::Lo),
    (0x1EE20, 0x1EE20, Category::Cn),
    (0x1EE21, 0x1EE22, Category::Lo),
    (0x1EE23, 0x1EE23, Category::Cn),
    (0x1EE24, 0x1EE24, Category::Lo),
    (0x1EE25, 0x1EE26, Category::Cn),
    (0x1EE27, 0x1EE27, Category::Lo),
    (0x1EE28, 0x1EE28, Category::Cn),
    (0x1EE29, 0x1EE32, Category::Lo),
    (0x1EE33, 0x1EE33, Category::Cn),
    (0x1EE34, 0x1EE37, Category::Lo),
    (0x1EE38, 0x1EE38, Category::Cn),
    (0x1EE39, 0x1EE39, Category::Lo),
    (0x1EE3A, 0x1EE3A, Category::Cn),
    (0x1EE3B, 0x1EE3B, Category::Lo),
    (0x1EE3C, 0x1EE41, Category::Cn),
    (0x1EE42, 0x1EE42, Category::Lo),
    (0x1EE43, 0x1EE46, Category::Cn),
    (0x1EE47, 0x1EE47, Category::Lo),
    (0x1EE48, 0x1EE48, Category::Cn),
    (0x1EE49, 0x1EE49, Category::Lo),
    (0x1EE4A, 0x1EE4A, Category::Cn),
    (0x1EE4B, 0x1EE4B, Category::Lo),
    (0x1EE4C, 0x1EE4C, Category::Cn),
    (0x1EE4D, 0x1EE4F, Category::Lo),
    (0x1EE50, 0x1EE50, Category::Cn),
    (0x1EE51, 0x1EE52, Category::Lo),
    (0x1EE53, 0x1EE53, Category::Cn),
    (0x1EE54, 0x1EE54, Category::Lo),
    (0x1EE55, 0x1EE56, Category::Cn),
    (0x1EE57, 0x1EE57, Category::Lo),
    (0x1EE58, 0x1EE58, Category::Cn),
    (0x1EE59, 0x1EE59, Category::Lo),
    (0x1EE5A, 0x1EE5A, Category::Cn),
    (0x1EE5B, 0x1EE5B, Category::Lo),
    (0x1EE5C, 0x1EE5C, Category::Cn),
    (0x1EE5D, 0x1EE5D, Category::Lo),
    (0x1EE5E, 0x1EE5E, Category::Cn),
    (0x1EE5F, 0x1EE5F, Category::Lo),
    (0x1EE60, 0x1EE60, Category::Cn),
    (0x1EE61, 0x1EE62, Category::Lo),
    (0x1EE63, 0x1EE63, Category::Cn),
    (0x1EE64, 0x1EE64, Category::Lo),
    (0x1EE65, 0x1EE66, Category::Cn),
    (0x1EE67, 0x1EE6A, Category::Lo),
    (0x1EE6B, 0x1EE6B, Category::Cn),
    (0x1EE6C, 0x1EE72, Category::Lo),
    (0x1EE73, 0x1EE73, Category::Cn),
    (0x1EE74, 0x1EE77, Category::Lo),
    (0x1EE78, 0x1EE78, Category::Cn),
    (0x1EE79, 0x1EE7C, Category::Lo),
    (0x1EE7D, 0x1EE7D, Category::Cn),
    (0x1EE7E, 0x1EE7E, Category::Lo),
    (0x1EE7F, 0x1EE7F, Category::Cn),
    (0x1EE80, 0x1EE89, Category::Lo),
    (0x1EE8A, 0x1EE8A, Category::Cn),
    (0x1EE8B, 0x1EE9B, Category::Lo),
    (0x1EE9C, 0x1EEA0, Category::Cn),
    (0x1EEA1, 0x1EEA3, Category::Lo),
    (0x1EEA4, 0x1EEA4, Category::Cn),
    (0x1EEA5, 0x1EEA9, Category::Lo),
    (0x1EEAA, 0x1EEAA, Category::Cn),
    (0x1EEAB, 0x1EEBB, Category::Lo),
    (0x1EEBC, 0x1EEEF, Category::Cn),
    (0x1EEF0, 0x1EEF1, Category::Sm),
    (0x1EEF2, 0x1EFFF, Category::Cn),
    (0x1F000, 0x1F02B, Category::So),
    (0x1F02C, 0x1F02F, Category::Cn),
    (0x1F030, 0x1F093, Category::So),
    (0x1F094, 0x1F09F, Category::Cn),
    (0x1F0A0, 0x1F0AE, Category::So),
    (0x1F0AF, 0x1F0B0, Category::Cn),
    (0x1F0B1, 0x1F0BF, Category::So),
    (0x1F0C0, 0x1F0C0, Category::Cn),
    (0x1F0C1, 0x1F0CF, Category::So),
    (0x1F0D0, 0x1F0D0, Category::Cn),
    (0x1F0D1, 0x1F0F5, Category::So),
    (0x1F0F6, 0x1F0FF, Category::Cn),
    (0x1F100, 0x1F10C, Category::No),
    (0x1F10D, 0x1F1AD, Category::So),
    (0x1F1AE, 0x1F1E5, Category::Cn),
    (0x1F1E6, 0x1F202, Category::So),
    (0x1F203, 0x1F20F, Category::Cn),
    (0x1F210, 0x1F23B, Category::So),
    (0x1F23C, 0x1F23F, Category::Cn),
    (0x1F240, 0x1F248, Category::So),
    (0x1F249, 0x1F24F, Category::Cn),
    (0x1F250, 0x1F251, Category::So),
    (0x1F252, 0x1F25F, Category::Cn),
    (0x1F260, 0x1F265, Category::So),
    (0x1F266, 0x1F2FF, Category::Cn),
    (0x1F300, 0x1F3FA, Category::So),
    (0x1F3FB, 0x1F3FF, Category::Sk),
    (0x1F400, 0x1F6D7, Category::So),
    (0x1F6D8, 0x1F6DC, Category::Cn),
    (0x1F6DD, 0x1F6EC, Category::So),
    (0x1F6ED, 0x1F6EF, Category::Cn),
    (0x1F6F0, 0x1F6FC, Category::So),
    (0x1F6FD, 0x1F6FF, Category::Cn),
    (0x1F700, 0x1F773, Category::So),
    (0x1F774, 0x1F77F, Category::Cn),
    (0x1F780, 0x1F7D8, Category::So),
    (0x1F7D9, 0x1F7DF, Category::Cn),
    (0x1F7E0, 0x1F7EB, Category::So),
    (0x1F7EC, 0x1F7EF, Category::Cn),
    (0x1F7F0, 0x1F7F0, Category::So),
    (0x1F7F1, 0x1F7FF, Category::Cn),
    (0x1F800, 0x1F80B, Category::So),
    (0x1F80C, 0x1F80F, Category::Cn),
    (0x1F810, 0x1F847, Category::So),
    (0x1F848, 0x1F84F, Category::Cn),
    (0x1F850, 0x1F859, Category::So),
    (0x1F85A, 0x1F85F, Category::Cn),
    (0x1F860, 0x1F887, Category::So),
    (0x1F888, 0x1F88F, Category::Cn),
    (0x1F890, 0x1F8AD, Category::So),
    (0x1F8AE, 0x1F8AF, Category::Cn),
    (0x1F8B0, 0x1F8B1, Category::So),
    (0x1F8B2, 0x1F8FF, Category::Cn),
    (0x1F900, 0x1FA53, Category::So),
    (0x1FA54, 0x1FA5F, Category::Cn),
    (0x1FA60, 0x1FA6D, Category::So),
    (0x1FA6E, 0x1FA6F, Category::Cn),
    (0x1FA70, 0x1FA74, Category::So),
    (0x1FA75, 0x1FA77, Category::Cn),
    (0x1FA78, 0x1FA7C, Category::So),
    (0x1FA7D, 0x1FA7F, Category::Cn),
    (0x1FA80, 0x1FA86, Category::So),
    (0x1FA87, 0x1FA8F, Category::Cn),
    (0x1FA90, 0x1FAAC, Category::So),
    (0x1FAAD, 0x1FAAF, Category::Cn),
    (0x1FAB0, 0x1FABA, Category::So),
    (0x1FABB, 0x1FABF, Category::Cn),
    (0x1FAC0, 0x1FAC5, Category::So),
    (0x1FAC6, 0x1FACF, Category::Cn),
    (0x1FAD0, 0x1FAD9, Category::So),
    (0x1FADA, 0x1FADF, Category::Cn),
    (0x1FAE0, 0x1FAE7, Category::So),
    (0x1FAE8, 0x1FAEF, Category::Cn),
    (0x1FAF0, 0x1FAF6, Category::So),
    (0x1FAF7, 0x1FAFF, Category::Cn),
    (0x1FB00, 0x1FB92, Category::So),
    (0x1FB93, 0x1FB93, Category::Cn),
    (0x1FB94, 0x1FBCA, Category::So),
    (0x1FBCB, 0x1FBEF, Category::Cn),
    (0x1FBF0, 0x1FBF9, Category::Nd),
    (0x1FBFA, 0x1FFFF, Category::Cn),
    (0x20000, 0x2A6DF, Category::Lo),
    (0x2A6E0, 0x2A6FF, Category::Cn),
    (0x2A700, 0x2B738, Category::Lo),
    (0x2B739, 0x2B73F, Category::Cn),
    (0x2B740, 0x2B81D, Category::Lo),
    (0x2B81E, 0x2B81F, Category::Cn),
    (0x2B820, 0x2CEA1, Category::Lo),
    (0x2CEA2, 0x2CEAF, Category::Cn),
    (0x2CEB0, 0x2EBE0, Category::Lo),
    (0x2EBE1, 0x2F7FF, Category::Cn),
    (0x2F800, 0x2FA1D, Category::Lo),
    (0x2FA1E, 0x2FFFF, Category::Cn),
    (0x30000, 0x3134A, Category::Lo),
    (0x3134B, 0xE0000, Category::Cn),
    (0xE0001, 0xE0001, Category::Format),
    (0xE0002, 0xE001F, Category::Cn),
    (0xE0020, 0xE007F, Category::Format),
    (0xE0080, 0xE00FF, Category::Cn),
    (0xE0100, 0xE01EF, Category::Mn),
    (0xE01F0, 0xEFFFF, Category::Cn),
    (0xF0000, 0xFFFFD, Category::Co),
    (0xFFFFE, 0xFFFFF, Category::Cn),
    (0x100000, 0x10FFFD, Category::Co),
    (0x10FFFE, 0x10FFFF, Category::Cn),
];

static CLUSTER_BREAK_TABLE: &[(u32, u32, ClusterBreak)] = &[
    (0x0, 0x9, ClusterBreak::CN),
    (0xA, 0xA, ClusterBreak::LF),
    (0xB, 0xC, ClusterBreak::CN),
    (0xD, 0xD, ClusterBreak::CR),
    (0xE, 0x1F, ClusterBreak::CN),
    (0x20, 0x7E, ClusterBreak::XX),
    (0x7F, 0x9F, ClusterBreak::CN),
    (0xA0, 0xAC, ClusterBreak::XX),
    (0xAD, 0xAD, ClusterBreak::CN),
    (0xAE, 0x2FF, ClusterBreak::XX),
    (0x300, 0x36F, ClusterBreak::EX),
    (0x370, 0x482, ClusterBreak::XX),
    (0x483, 0x489, ClusterBreak::EX),
    (0x48A, 0x590, ClusterBreak::XX),
    (0x591, 0x5BD, ClusterBreak::EX),
    (0x5BE, 0x5BE, ClusterBreak::XX),
    (0x5BF, 0x5BF, ClusterBreak::EX),
    (0x5C0, 0x5C0, ClusterBreak::XX),
    (0x5C1, 0x5C2, ClusterBreak::EX),
    (0x5C3, 0x5C3, ClusterBreak::XX),
    (0x5C4, 0x5C5, ClusterBreak::EX),
    (0x5C6, 0x5C6, ClusterBreak::XX),
    (0x5C7, 0x5C7, ClusterBreak::EX),
    (0x5C8, 0x5FF, ClusterBreak::XX),
    (0x600, 0x605, ClusterBreak::PP),
    (0x606, 0x60F, ClusterBreak::XX),
    (0x610, 0x61A, ClusterBreak::EX),
    (0x61B, 0x61B, ClusterBreak::XX),
    (0x61C, 0x61C, ClusterBreak::CN),
    (0x61D, 0x64A, ClusterBreak::XX),
    (0x64B, 0x65F, ClusterBreak::EX),
    (0x660, 0x66F, ClusterBreak::XX),
    (0x670, 0x670, ClusterBreak::EX),
    (0x671, 0x6D5, ClusterBreak::XX),
    (0x6D6, 0x6DC, ClusterBreak::EX),
    (0x6DD, 0x6DD, ClusterBreak::PP),
    (0x6DE, 0x6DE, ClusterBreak::XX),
    (0x6DF, 0x6E4, ClusterBreak::EX),
    (0x6E5, 0x6E6, ClusterBreak::XX),
    (0x6E7, 0x6E8, ClusterBreak::EX),
    (0x6E9, 0x6E9, ClusterBreak::XX),
    (0x6EA, 0x6ED, ClusterBreak::EX),
    (0x6EE, 0x70E, ClusterBreak::XX),
    (0x70F, 0x70F, ClusterBreak::PP),
    (0x710, 0x710, ClusterBreak::XX),
    (0x711, 0x711, ClusterBreak::EX),
    (0x712, 0x72F, ClusterBreak::XX),
    (0x730, 0x74A, ClusterBreak::EX),
    (0x74B, 0x7A5, ClusterBreak::XX),
    (0x7A6, 0x7B0, ClusterBreak::EX),
    (0x7B1, 0x7EA, ClusterBreak::XX),
    (0x7EB, 0x7F3, ClusterBreak::EX),
    (0x7F4, 0x7FC, ClusterBreak::XX),
    (0x7FD, 0x7FD, ClusterBreak::EX),
    (0x7FE, 0x815, ClusterBreak::XX),
    (0x816, 0x819, ClusterBreak::EX),
    (0x81A, 0x81A, ClusterBreak::XX),
    (0x81B, 0x823, ClusterBreak::EX),
    (0x824, 0x824, ClusterBreak::XX),
    (0x825, 0x827, ClusterBreak::EX),
    (0x828, 0x828, ClusterBreak::XX),
    (0x829, 0x82D, ClusterBreak::EX),
    (0x82E, 0x858, ClusterBreak::XX),
    (0x859, 0x85B, ClusterBreak::EX),
    (0x85C, 0x88F, ClusterBreak::XX),
    (0x890, 0x891, ClusterBreak::PP),
    (0x892, 0x896, ClusterBreak::XX),
    (0x897, 0x89F, ClusterBreak::EX),
    (0x8A0, 0x8C9, ClusterBreak::XX),
    (0x8CA, 0x8E1, ClusterBreak::EX),
    (0x8E2, 0x8E2, ClusterBreak::PP),
    (0x8E3, 0x902, ClusterBreak::EX),
    (0x903, 0x903, ClusterBreak::SM),
    (0x904, 0x939, ClusterBreak::XX),
    (0x93A, 0x93A, ClusterBreak::EX),
    (0x93B, 0x93B, ClusterBreak::SM),
    (0x93C, 0x93C, ClusterBreak::EX),
    (0x93D, 0x93D, ClusterBreak::XX),
    (0x93E, 0x940, ClusterBreak::SM),
    (0x941, 0x948, ClusterBreak::EX),
    (0x949, 0x94C, ClusterBreak::SM),
    (0x94D, 0x94D, ClusterBreak::EX),
    (0x94E, 0x94F, ClusterBreak::SM),
    (0x950, 0x950, ClusterBreak::XX),
    (0x951, 0x957, ClusterBreak::EX),
    (0x958, 0x961, ClusterBreak::XX),
    (0x962, 0x963, ClusterBreak::EX),
    (0x964, 0x980, ClusterBreak::XX),
    (0x981, 0x981, ClusterBreak::EX),
    (0x982, 0x983, ClusterBreak::SM),
    (0x984, 0x9BB, ClusterBreak::XX),
    (0x9BC, 0x9BC, ClusterBreak::EX),
    (0x9BD, 0x9BD, ClusterBreak::XX),
    (0x9BE, 0x9BE, ClusterBreak::EX),
    (0x9BF, 0x9C0, ClusterBreak::SM),
    (0x9C1, 0x9C4, ClusterBreak::EX),
    (0x9C5, 0x9C6, ClusterBreak::XX),
    (0x9C7, 0x9C8, ClusterBreak::SM),
    (0x9C9, 0x9CA, ClusterBreak::XX),
    (0x9CB, 0x9CC, ClusterBreak::SM),
    (0x9CD, 0x9CD, ClusterBreak::EX),
    (0x9CE, 0x9D6, ClusterBreak::XX),
    (0x9D7, 0x9D7, ClusterBreak::EX),
    (0x9D8, 0x9E1, ClusterBreak::XX),
    (0x9E2, 0x9E3, ClusterBreak::EX),
    (0x9E4, 0x9FD, ClusterBreak::XX),
    (0x9FE, 0x9FE, ClusterBreak::EX),
    (0x9FF, 0xA00, ClusterBreak::XX),
    (0xA01, 0xA02, ClusterBreak::EX),
    (0xA03, 0xA03, ClusterBreak::SM),
    (0xA04, 0xA3B, ClusterBreak::XX),
    (0xA3C, 0xA3C, ClusterBreak::EX),
    (0xA3D, 0xA3D, ClusterBreak::XX),
    (0xA3E, 0xA40, ClusterBreak::SM),
    (0xA41, 0xA42, ClusterBreak::EX),
    (0xA43, 0xA46, ClusterBreak::XX),
    (0xA47, 0xA48, ClusterBreak::EX),
    (0xA49, 0xA4A, ClusterBreak::XX),
    (0xA4B, 0xA4D, ClusterBreak::EX),
    (0xA4E, 0xA50, ClusterBreak::XX),
    (0xA51, 0xA51, ClusterBreak::EX),
    (0xA52, 0xA6F, ClusterBreak::XX),
    (0xA70, 0xA71, ClusterBreak::EX),
    (0xA72, 0xA74, ClusterBreak::XX),
    (0xA75, 0xA75, ClusterBreak::EX),
    (0xA76, 0xA80, ClusterBreak::XX),
    (0xA81, 0xA82, ClusterBreak::EX),
    (0xA83, 0xA83, ClusterBreak::SM),
    (0xA84, 0xABB, ClusterBreak::XX),
    (0xABC, 0xABC, ClusterBreak::EX),
    (0xABD, 0xABD, ClusterBreak::XX),
    (0xABE, 0xAC0, ClusterBreak::SM),
    (0xAC1, 0xAC5, ClusterBreak::EX),
    (0xAC6, 0xAC6, ClusterBreak::XX),
    (0xAC7, 0xAC8, ClusterBreak::EX),
    (0xAC9, 0xAC9, ClusterBreak::SM),
    (0xACA, 0xACA, ClusterBreak::XX),
    (0xACB, 0xACC, ClusterBreak::SM),
    (0xACD, 0xACD, ClusterBreak::EX),
    (0xACE, 0xAE1, ClusterBreak::XX),
    (0xAE2, 0xAE3, ClusterBreak::EX),
    (0xAE4, 0xAF9, ClusterBreak::XX),
    (0xAFA, 0xAFF, ClusterBreak::EX),
    (0xB00, 0xB00, ClusterBreak::XX),
    (0xB01, 0xB01, ClusterBreak::EX),
    (0xB02, 0xB03, ClusterBreak::SM),
    (0xB04, 0xB3B, ClusterBreak::XX),
    (0xB3C, 0xB3C, ClusterBreak::EX),
    (0xB3D, 0xB3D, ClusterBreak::XX),
    (0xB3E, 0xB3F, ClusterBreak::EX),
    (0xB40, 0xB40, ClusterBreak::SM),
    (0xB41, 0xB44, ClusterBreak::EX),
    (0xB45, 0xB46, ClusterBreak::XX),
    (0xB47, 0xB48, ClusterBreak::SM),
    (0xB49, 0xB4A, ClusterBreak::XX),
    (0xB4B, 0xB4C, ClusterBreak::SM),
    (0xB4D, 0xB4D, ClusterBreak::EX),
    (0xB4E, 0xB54, ClusterBreak::XX),
    (0xB55, 0xB57, ClusterBreak::EX),
    (0xB58, 0xB61, ClusterBreak::XX),
    (0xB62, 0xB63, ClusterBreak::EX),
    (0xB64, 0xB81, ClusterBreak::XX),
    (0xB82, 0xB82, ClusterBreak::EX),
    (0xB83, 0xBBD, ClusterBreak::XX),
    (0xBBE, 0xBBE, ClusterBreak::EX),
    (0xBBF, 0xBBF, ClusterBreak::SM),
    (0xBC0, 0xBC0, ClusterBreak::EX),
    (0xBC1, 0xBC2, ClusterBreak::SM),
    (0xBC3, 0xBC5, ClusterBreak::XX),
    (0xBC6, 0xBC8, ClusterBreak::SM),
    (0xBC9, 0xBC9, ClusterBreak::XX),
    (0xBCA, 0xBCC, ClusterBreak::SM),
    (0xBCD, 0xBCD, ClusterBreak::EX),
    (0xBCE, 0xBD6, ClusterBreak::XX),
    (0xBD7, 0xBD7, ClusterBreak::EX),
    (0xBD8, 0xBFF, ClusterBreak::XX),
    (0xC00, 0xC00, ClusterBreak::EX),
    (0xC01, 0xC03, ClusterBreak::SM),
    (0xC04, 0xC04, ClusterBreak::EX),
    (0xC05, 0xC3B, ClusterBreak::XX),
    (0xC3C, 0xC3C, ClusterBreak::EX),
    (0xC3D, 0xC3D, ClusterBreak::XX),
    (0xC3E, 0xC40, ClusterBreak::EX),
    (0xC41, 0xC44, ClusterBreak::SM),
    (0xC45, 0xC45, ClusterBreak::XX),
    (0xC46, 0xC48, ClusterBreak::EX),
    (0xC49, 0xC49, ClusterBreak::XX),
    (0xC4A, 0xC4D, ClusterBreak::EX),
    (0xC4E, 0xC54, ClusterBreak::XX),
    (0xC55, 0xC56, ClusterBreak::EX),
    (0xC57, 0xC61, ClusterBreak::XX),
    (0xC62, 0xC63, ClusterBreak::EX),
    (0xC64, 0xC80, ClusterBreak::XX),
    (0xC81, 0xC81, ClusterBreak::EX),
    (0xC82, 0xC83, ClusterBreak::SM),
    (0xC84, 0xCBB, ClusterBreak::XX),
    (0xCBC, 0xCBC, ClusterBreak::EX),
    (0xCBD, 0xCBD, ClusterBreak::XX),
    (0xCBE, 0xCBE, ClusterBreak::SM),
    (0xCBF, 0xCC0, ClusterBreak::EX),
    (0xCC1, 0xCC1, ClusterBreak::SM),
    (0xCC2, 0xCC2, ClusterBreak::EX),
    (0xCC3, 0xCC4, ClusterBreak::SM),
    (0xCC5, 0xCC5, ClusterBreak::XX),
    (0xCC6, 0xCC8, ClusterBreak::EX),
    (0xCC9, 0xCC9, ClusterBreak::XX),
    (0xCCA, 0xCCD, ClusterBreak::EX),
    (0xCCE, 0xCD4, ClusterBreak::XX),
    (0xCD5, 0xCD6, ClusterBreak::EX),
    (0xCD7, 0xCE1, ClusterBreak::XX),
    (0xCE2, 0xCE3, ClusterBreak::EX),
    (0xCE4, 0xCF2, ClusterBreak::XX),
    (0xCF3, 0xCF3, ClusterBreak::SM),
    (0xCF4, 0xCFF, ClusterBreak::XX),
    (0xD00, 0xD01, ClusterBreak::EX),
    (0xD02, 0xD03, ClusterBreak::SM),
    (0xD04, 0xD3A, ClusterBreak::XX),
    (0xD3B, 0xD3C, ClusterBreak::EX),
    (0xD3D, 0xD3D, ClusterBreak::XX),
    (0xD3E, 0xD3E, ClusterBreak::EX),
    (0xD3F, 0xD40, ClusterBreak::SM),
    (0xD41, 0xD44, ClusterBreak::EX),
    (0xD45, 0xD45, ClusterBreak::XX),
    (0xD46, 0xD48, ClusterBreak::SM),
    (0xD49, 0xD49, ClusterBreak::XX),
    (0xD4A, 0xD4C, ClusterBreak::SM),
    (0xD4D, 0xD4D, ClusterBreak::EX),
    (0xD4E, 0xD4E, ClusterBreak::PP),
    (0xD4F, 0xD56, ClusterBreak::XX),
    (0xD57, 0xD57, ClusterBreak::EX),
    (0xD58, 0xD61, ClusterBreak::XX),
    (0xD62, 0xD63, ClusterBreak::EX),
    (0xD64, 0xD80, ClusterBreak::XX),
    (0xD81, 0xD81, ClusterBreak::EX),
    (0xD82, 0xD83, ClusterBreak::SM),
    (0xD84, 0xDC9, ClusterBreak::XX),
    (0xDCA, 0xDCA, ClusterBreak::EX),
    (0xDCB, 0xDCE, ClusterBreak::XX),
    (0xDCF, 0xDCF, ClusterBreak::EX),
    (0xDD0, 0xDD1, ClusterBreak::SM),
    (0xDD2, 0xDD4, ClusterBreak::EX),
    (0xDD5, 0xDD5, ClusterBreak::XX),
    (0xDD6, 0xDD6, ClusterBreak::EX),
    (0xDD7, 0xDD7, ClusterBreak::XX),
    (0xDD8, 0xDDE, ClusterBreak::SM),
    (0xDDF, 0xDDF, ClusterBreak::EX),
    (0xDE0, 0xDF1, ClusterBreak::XX),
    (0xDF2, 0xDF3, ClusterBreak::SM),
    (0xDF4, 0xE30, ClusterBreak::XX),
    (0xE31, 0xE31, ClusterBreak::EX),
    (0xE32, 0xE32, ClusterBreak::XX),
    (0xE33, 0xE33, ClusterBreak::SM),
    (0xE34, 0xE3A, ClusterBreak::EX),
    (0xE3B, 0xE46, ClusterBreak::XX),
    (0xE47, 0xE4E, ClusterBreak::EX),
    (0xE4F, 0xEB0, ClusterBreak::XX),
    (0xEB1, 0xEB1, ClusterBreak::EX),
    (0xEB2, 0xEB2, ClusterBreak::XX),
    (0xEB3, 0xEB3, ClusterBreak::SM),
    (0xEB4, 0xEBC, ClusterBreak::EX),
    (0xEBD, 0xEC7, ClusterBreak::XX),
    (0xEC8, 0xECE, ClusterBreak::EX),
    (0xECF, 0xF17, ClusterBreak::XX),
    (0xF18, 0xF19, ClusterBreak::EX),
    (0xF1A, 0xF34, ClusterBreak::XX),
    (0xF35, 0xF35, ClusterBreak::EX),
    (0xF36, 0xF36, ClusterBreak::XX),
    (0xF37, 0xF37, ClusterBreak::EX),
    (0xF38, 0xF38, ClusterBreak::XX),
    (0xF39, 0xF39, ClusterBreak::EX),
    (0xF3A, 0xF3D, ClusterBreak::XX),
    (0xF3E, 0xF3F, ClusterBreak::SM),
    (0xF40, 0xF70, ClusterBreak::XX),
    (0xF71, 0xF7E, ClusterBreak::EX),
    (0xF7F, 0xF7F, ClusterBreak::SM),
    (0xF80, 0xF84, ClusterBreak::EX),
    (0xF85, 0xF85, ClusterBreak::XX),
    (0xF86, 0xF87, ClusterBreak::EX),
    (0xF88, 0xF8C, ClusterBreak::XX),
    (0xF8D, 0xF97, ClusterBreak::EX),
    (0xF98, 0xF98, ClusterBreak::XX),
    (0xF99, 0xFBC, ClusterBreak::EX),
    (0xFBD, 0xFC5, ClusterBreak::XX),
    (0xFC6, 0xFC6, ClusterBreak::EX),
    (0xFC7, 0x102C, ClusterBreak::XX),
    (0x102D, 0x1030, ClusterBreak::EX),
    (0x1031, 0x1031, ClusterBreak::SM),
    (0x1032, 0x1037, ClusterBreak::EX),
    (0x1038, 0x1038, ClusterBreak::XX),
    (0x1039, 0x103A, ClusterBreak::EX),
    (0x103B, 0x103C, ClusterBreak::SM),
    (0x103D, 0x103E, ClusterBreak::EX),
    (0x103F, 0x1055, ClusterBreak::XX),
    (0x1056, 0x1057, ClusterBreak::SM),
    (0x1058, 0x1059, ClusterBreak::EX),
    (0x105A, 0x105D, ClusterBreak::XX),
    (0x105E, 0x1060, ClusterBreak::EX),
    (0x1061, 0x1070, ClusterBreak::XX),
    (0x1071, 0x1074, ClusterBreak::EX),
    (0x1075, 0x1081, ClusterBreak::XX),
    (0x1082, 0x1082, ClusterBreak::EX),
    (0x1083, 0x1083, ClusterBreak::XX),
    (0x1084, 0x1084, ClusterBreak::SM),
    (0x1085, 0x1086, ClusterBreak::EX),
    (0x1087, 0x108C, ClusterBreak::XX),
    (0x108D, 0x108D, ClusterBreak::EX),
    (0x108E, 0x109C, ClusterBreak::XX),
    (0x109D, 0x109D, ClusterBreak::EX),
    (0x109E, 0x10FF, ClusterBreak::XX),
    (0x1100, 0x115F, ClusterBreak::L),
    (0x1160, 0x11A7, ClusterBreak::V),
    (0x11A8, 0x11FF, ClusterBreak::T),
    (0x1200, 0x135C, ClusterBreak::XX),
    (0x135D, 0x135F, ClusterBreak::EX),
    (0x1360, 0x1711, ClusterBreak::XX),
    (0x1712, 0x1715, ClusterBreak::EX),
    (0x1716, 0x1731, ClusterBreak::XX),
    (0x1732, 0x1734, ClusterBreak::EX),
    (0x1735, 0x1751, ClusterBreak::XX),
    (0x1752, 0x1753, ClusterBreak::EX),
    (0x1754, 0x1771, ClusterBreak::XX),
    (0x1772, 0x1773, ClusterBreak::EX),
    (0x1774, 0x17B3, ClusterBreak::XX),
    (0x17B4, 0x17B5, ClusterBreak::EX),
    (0x17B6, 0x17B6, ClusterBreak::SM),
    (0x17B7, 0x17BD, ClusterBreak::EX),
    (0x17BE, 0x17C5, ClusterBreak::SM),
    (0x17C6, 0x17C6, ClusterBreak::EX),
    (0x17C7, 0x17C8, ClusterBreak::SM),
    (0x17C9, 0x17D3, ClusterBreak::EX),
    (0x17D4, 0x17DC, ClusterBreak::XX),
    (0x17DD, 0x17DD, ClusterBreak::EX),
    (0x17DE, 0x180A, ClusterBreak::XX),
    (0x180B, 0x180D, ClusterBreak::EX),
    (0x180E, 0x180E, ClusterBreak::CN),
    (0x180F, 0x180F, ClusterBreak::EX),
    (0x1810, 0x1884, ClusterBreak::XX),
    (0x1885, 0x1886, ClusterBreak::EX),
    (0x1887, 0x18A8, ClusterBreak::XX),
    (0x18A9, 0x18A9, ClusterBreak::EX),
    (0x18AA, 0x191F, ClusterBreak::XX),
    (0x1920, 0x1922, ClusterBreak::EX),
    (0x1923, 0x1926, ClusterBreak::SM),
    (0x1927, 0x1928, ClusterBreak::EX),
    (0x1929, 0x192B, ClusterBreak::SM),
    (0x192C, 0x192F, ClusterBreak::XX),
    (0x1930, 0x1931, ClusterBreak::SM),
    (0x1932, 0x1932, ClusterBreak::EX),
    (0x1933, 0x1938, ClusterBreak::SM),
    (0x1939, 0x193B, ClusterBreak::EX),
    (0x193C, 0x1A16, ClusterBreak::XX),
    (0x1A17, 0x1A18, ClusterBreak::EX),
    (0x1A19, 0x1A1A, ClusterBreak::SM),
    (0x1A1B, 0x1A1B, ClusterBreak::EX),
    (0x1A1C, 0x1A54, ClusterBreak::XX),
    (0x1A55, 0x1A55, ClusterBreak::SM),
    (0x1A56, 0x1A56, ClusterBreak::EX),
    (0x1A57, 0x1A57, ClusterBreak::SM),
    (0x1A58, 0x1A5E, ClusterBreak::EX),
    (0x1A5F, 0x1A5F, ClusterBreak::XX),
    (0x1A60, 0x1A60, ClusterBreak::EX),
    (0x1A61, 0x1A61, ClusterBreak::XX),
    (0x1A62, 0x1A62, ClusterBreak::EX),
    (0x1A63, 0x1A64, ClusterBreak::XX),
    (0x1A65, 0x1A6C, ClusterBreak::EX),
    (0x1A6D, 0x1A72, ClusterBreak::SM),
    (0x1A73, 0x1A7C, ClusterBreak::EX),
    (0x1A7D, 0x1A7E, ClusterBreak::XX),
    (0x1A7F, 0x1A7F, ClusterBreak::EX),
    (0x1A80, 0x1AAF, ClusterBreak::XX),
    (0x1AB0, 0x1ADD, ClusterBreak::EX),
    (0x1ADE, 0x1ADF, ClusterBreak::XX),
    (0x1AE0, 0x1AEB, ClusterBreak::EX),
    (0x1AEC, 0x1AFF, ClusterBreak::XX),
    (0x1B00, 0x1B03, ClusterBreak::EX),
    (0x1B04, 0x1B04, ClusterBreak::SM),
    (0x1B05, 0x1B33, ClusterBreak::XX),
    (0x1B34, 0x1B3D, ClusterBreak::EX),
    (0x1B3E, 0x1B41, ClusterBreak::SM),
    (0x1B42, 0x1B44, ClusterBreak::EX),
    (0x1B45, 0x1B6A, ClusterBreak::XX),
    (0x1B6B, 0x1B73, ClusterBreak::EX),
    (0x1B74, 0x1B7F, ClusterBreak::XX),
    (0x1B80, 0x1B81, ClusterBreak::EX),
    (0x1B82, 0x1B82, ClusterBreak::SM),
    (0x1B83, 0x1BA0, ClusterBreak::XX),
    (0x1BA1, 0x1BA1, ClusterBreak::SM),
    (0x1BA2, 0x1BA5, ClusterBreak::EX),
    (0x1BA6, 0x1BA7, ClusterBreak::SM),
    (0x1BA8, 0x1BAD, ClusterBreak::EX),
    (0x1BAE, 0x1BE5, ClusterBreak::XX),
    (0x1BE6, 0x1BE6, ClusterBreak::EX),
    (0x1BE7, 0x1BE7, ClusterBreak::SM),
    (0x1BE8, 0x1BE9, ClusterBreak::EX),
    (0x1BEA, 0x1BEC, ClusterBreak::SM),
    (0x1BED, 0x1BED, ClusterBreak::EX),
    (0x1BEE, 0x1BEE, ClusterBreak::SM),
    (0x1BEF, 0x1BF3, ClusterBreak::EX),
    (0x1BF4, 0x1C23, ClusterBreak::XX),
    (0x1C24, 0x1C2B, ClusterBreak::SM),
    (0x1C2C, 0x1C33, ClusterBreak::EX),
    (0x1C34, 0x1C35, ClusterBreak::SM),
    (0x1C36, 0x1C37, ClusterBreak::EX),
    (0x1C38, 0x1CCF, ClusterBreak::XX),
    (0x1CD0, 0x1CD2, ClusterBreak::EX),
    (0x1CD3, 0x1CD3, ClusterBreak::XX),
    (0x1CD4, 0x1CE0, ClusterBreak::EX),
    (0x1CE1, 0x1CE1, ClusterBreak::SM),
    (0x1CE2, 0x1CE8, ClusterBreak::EX),
    (0x1CE9, 0x1CEC, ClusterBreak::XX),
    (0x1CED, 0x1CED, ClusterBreak::EX),
    (0x1CEE, 0x1CF3, ClusterBreak::XX),
    (0x1CF4, 0x1CF4, ClusterBreak::EX),
    (0x1CF5, 0x1CF6, ClusterBreak::XX),
    (0x1CF7, 0x1CF7, ClusterBreak::SM),
    (0x1CF8, 0x1CF9, ClusterBreak::EX),
    (0x1CFA, 0x1DBF, ClusterBreak::XX),
    (0x1DC0, 0x1DFF, ClusterBreak::EX),
    (0x1E00, 0x200A, ClusterBreak::XX),
    (0x200B, 0x200B, ClusterBreak::CN),
    (0x200C, 0x200C, ClusterBreak::EX),
    (0x200D, 0x200D, ClusterBreak::ZWJ),
    (0x200E, 0x200F, ClusterBreak::CN),
    (0x2010, 0x2027, ClusterBreak::XX),
    (0x2028, 0x202E, ClusterBreak::CN),
    (0x202F, 0x205F, ClusterBreak::XX),
    (0x2060, 0x206F, ClusterBreak::CN),
    (0x2070, 0x20CF, ClusterBreak::XX),
    (0x20D0, 0x20F0, ClusterBreak::EX),
    (0x20F1, 0x2CEE, ClusterBreak::XX),
    (0x2CEF, 0x2CF1, ClusterBreak::EX),
    (0x2CF2, 0x2D7E, ClusterBreak::XX),
    (0x2D7F, 0x2D7F, ClusterBreak::EX),
    (0x2D80, 0x2DDF, ClusterBreak::XX),
    (0x2DE0, 0x2DFF, ClusterBreak::EX),
    (0x2E00, 0x3029, ClusterBreak::XX),
    (0x302A, 0x302F, ClusterBreak::EX),
    (0x3030, 0x3098, ClusterBreak::XX),
    (0x3099, 0x309A, ClusterBreak::EX),
    (0x309B, 0xA66E, ClusterBreak::XX),
    (0xA66F, 0xA672, ClusterBreak::EX),
    (0xA673, 0xA673, ClusterBreak::XX),
    (0xA674, 0xA67D, ClusterBreak::EX),
    (0xA67E, 0xA69D, ClusterBreak::XX),
    (0xA69E, 0xA69F, ClusterBreak::EX),
    (0xA6A0, 0xA6EF, ClusterBreak::XX),
    (0xA6F0, 0xA6F1, ClusterBreak::EX),
    (0xA6F2, 0xA801, ClusterBreak::XX),
    (0xA802, 0xA802, ClusterBreak::EX),
    (0xA803, 0xA805, ClusterBreak::XX),
    (0xA806, 0xA806, ClusterBreak::EX),
    (0xA807, 0xA80A, ClusterBreak::XX),
    (0xA80B, 0xA80B, ClusterBreak::EX),
    (0xA80C, 0xA822, ClusterBreak::XX),
    (0xA823, 0xA824, ClusterBreak::SM),
    (0xA825, 0xA826, ClusterBreak::EX),
    (0xA827, 0xA827, ClusterBreak::SM),
    (0xA828, 0xA82B, ClusterBreak::XX),
    (0xA82C, 0xA82C, ClusterBreak::EX),
    (0xA82D, 0xA87F, ClusterBreak::XX),
    (0xA880, 0xA881, ClusterBreak::SM),
    (0xA882, 0xA8B3, ClusterBreak::XX),
    (0xA8B4, 0xA8C3, ClusterBreak::SM),
    (0xA8C4, 0xA8C5, ClusterBreak::EX),
    (0xA8C6, 0xA8DF, ClusterBreak::XX),
    (0xA8E0, 0xA8F1, ClusterBreak::EX),
    (0xA8F2, 0xA8FE, ClusterBreak::XX),
    (0xA8FF, 0xA8FF, ClusterBreak::EX),
    (0xA900, 0xA925, ClusterBreak::XX),
    (0xA926, 0xA92D, ClusterBreak::EX),
    (0xA92E, 0xA946, ClusterBreak::XX),
    (0xA947, 0xA951, ClusterBreak::EX),
    (0xA952, 0xA952, ClusterBreak::SM),
    (0xA953, 0xA953, ClusterBreak::EX),
    (0xA954, 0xA95F, ClusterBreak::XX),
    (0xA960, 0xA97C, ClusterBreak::L),
    (0xA97D, 0xA97F, ClusterBreak::XX),
    (0xA980, 0xA982, ClusterBreak::EX),
    (0xA983, 0xA983, ClusterBreak::SM),
    (0xA984, 0xA9B2, ClusterBreak::XX),
    (0xA9B3, 0xA9B3, ClusterBreak::EX),
    (0xA9B4, 0xA9B5, ClusterBreak::SM),
    (0xA9B6, 0xA9B9, ClusterBreak::EX),
    (0xA9BA, 0xA9BB, ClusterBreak::SM),
    (0xA9BC, 0xA9BD, ClusterBreak::EX),
    (0xA9BE, 0xA9BF, ClusterBreak::SM),
    (0xA9C0, 0xA9C0, ClusterBreak::EX),
    (0xA9C1, 0xA9E4, ClusterBreak::XX),
    (0xA9E5, 0xA9E5, ClusterBreak::EX),
    (0xA9E6, 0xAA28, ClusterBreak::XX),
    (0xAA29, 0xAA2E, ClusterBreak::EX),
    (0xAA2F, 0xAA30, ClusterBreak::SM),
    (0xAA31, 0xAA32, ClusterBreak::EX),
    (0xAA33, 0xAA34, ClusterBreak::SM),
    (0xAA35, 0xAA36, ClusterBreak::EX),
    (0xAA37, 0xAA42, ClusterBreak::XX),
    (0xAA43, 0xAA43, ClusterBreak::EX),
    (0xAA44, 0xAA4B, ClusterBreak::XX),
    (0xAA4C, 0xAA4C, ClusterBreak::EX),
    (0xAA4D, 0xAA4D, ClusterBreak::SM),
    (0xAA4E, 0xAA7B, ClusterBreak::XX),
    (0xAA7C, 0xAA7C, ClusterBreak::EX),
    (0xAA7D, 0xAAAF, ClusterBreak::XX),
    (0xAAB0, 0xAAB0, ClusterBreak::EX),
    (0xAAB1, 0xAAB1, ClusterBreak::XX),
    (0xAAB2, 0xAAB4, ClusterBreak::EX),
    (0xAAB5, 0xAAB6, ClusterBreak::XX),
    (0xAAB7, 0xAAB8, ClusterBreak::EX),
    (0xAAB9, 0xAABD, ClusterBreak::XX),
    (0xAABE, 0xAABF, ClusterBreak::EX),
    (0xAAC0, 0xAAC0, ClusterBreak::XX),
    (0xAAC1, 0xAAC1, ClusterBreak::EX),
    (0xAAC2, 0xAAEA, ClusterBreak::XX),
    (0xAAEB, 0xAAEB, ClusterBreak::SM),
    (0xAAEC, 0xAAED, ClusterBreak::EX),
    (0xAAEE, 0xAAEF, ClusterBreak::SM),
    (0xAAF0, 0xAAF4, ClusterBreak::XX),
    (0xAAF5, 0xAAF5, ClusterBreak::SM),
    (0xAAF6, 0xAAF6, ClusterBreak::EX),
    (0xAAF7, 0xABE2, ClusterBreak::XX),
    (0xABE3, 0xABE4, ClusterBreak::SM),
    (0xABE5, 0xABE5, ClusterBreak::EX),
    (0xABE6, 0xABE7, ClusterBreak::SM),
    (0xABE8, 0xABE8, ClusterBreak::EX),
    (0xABE9, 0xABEA, ClusterBreak::SM),
    (0xABEB, 0xABEB, ClusterBreak::XX),
    (0xABEC, 0xABEC, ClusterBreak::SM),
    (0xABED, 0xABED, ClusterBreak::EX),
    (0xABEE, 0xABFF, ClusterBreak::XX),
    (0xAC00, 0xAC00, ClusterBreak::LV),
    (0xAC01, 0xAC1B, ClusterBreak::LVT),
    (0xAC1C, 0xAC1C, ClusterBreak::LV),
    (0xAC1D, 0xAC37, ClusterBreak::LVT),
    (0xAC38, 0xAC38, ClusterBreak::LV),
    (0xAC39, 0xAC53, ClusterBreak::LVT),
    (0xAC54, 0xAC54, ClusterBreak::LV),
    (0xAC55, 0xAC6F, ClusterBreak::LVT),
    (0xAC70, 0xAC70, ClusterBreak::LV),
    (0xAC71, 0xAC8B, ClusterBreak::LVT),
    (0xAC8C, 0xAC8C, ClusterBreak::LV),
    (0xAC8D, 0xACA7, ClusterBreak::LVT),
    (0xACA8, 0xACA8, ClusterBreak::LV),
    (0xACA9, 0xACC3, ClusterBreak::LVT),
    (0xACC4, 0xACC4, ClusterBreak::LV),
    (0xACC5, 0xACDF, ClusterBreak::LVT),
    (0xACE0, 0xACE0, ClusterBreak::LV),
    (0xACE1, 0xACFB, ClusterBreak::LVT),
    (0xACFC, 0xACFC, ClusterBreak::LV),
    (0xACFD, 0xAD17, ClusterBreak::LVT),
    (0xAD18, 0xAD18, ClusterBreak::LV),
    (0xAD19, 0xAD33, ClusterBreak::LVT),
    (0xAD34, 0xAD34, ClusterBreak::LV),
    (0xAD35, 0xAD4F, ClusterBreak::LVT),
    (0xAD50, 0xAD50, ClusterBreak::LV),
    (0xAD51, 0xAD6B, ClusterBreak::LVT),
    (0xAD6C, 0xAD6C, ClusterBreak::LV),
    (0xAD6D, 0xAD87, ClusterBreak::LVT),
    (0xAD88, 0xAD88, ClusterBreak::LV),
    (0xAD89, 0xADA3, ClusterBreak::LVT),
    (0xADA4, 0xADA4, ClusterBreak::LV),
    (0xADA5, 0xADBF, ClusterBreak::LVT),
    (0xADC0, 0xADC0, ClusterBreak::LV),
    (0xADC1, 0xADDB, ClusterBreak::LVT),
    (0xADDC, 0xADDC, ClusterBreak::LV),
    (0xADDD, 0xADF7, ClusterBreak::LVT),
    (0xADF8, 0xADF8, ClusterBreak::LV),
    (0xADF9, 0xAE13, ClusterBreak::LVT),
    (0xAE14, 0xAE14, ClusterBreak::LV),
    (0xAE15, 0xAE2F, ClusterBreak::LVT),
    (0xAE30, 0xAE30, ClusterBreak::LV),
    (0xAE31, 0xAE4B, ClusterBreak::LVT),
    (0xAE4C, 0xAE4C, ClusterBreak::LV),
    (0xAE4D, 0xAE67, ClusterBreak::LVT),
    (0xAE68, 0xAE68, ClusterBreak::LV),
    (0xAE69, 0xAE83, ClusterBreak::LVT),
    (0xAE84, 0xAE84, ClusterBreak::LV),
    (0xAE85, 0xAE9F, ClusterBreak::LVT),
    (0xAEA0, 0xAEA0, ClusterBreak::LV),
    (0xAEA1, 0xAEBB, ClusterBreak::LVT),
    (0xAEBC, 0xAEBC, ClusterBreak::LV),
    (0xAEBD, 0xAED7, ClusterBreak::LVT),
    (0xAED8, 0xAED8, ClusterBreak::LV),
    (0xAED9, 0xAEF3, ClusterBreak::LVT),
    (0xAEF4, 0xAEF4, ClusterBreak::LV),
    (0xAEF5, 0xAF0F, ClusterBreak::LVT),
    (0xAF10, 0xAF10, ClusterBreak::LV),
    (0xAF11, 0xAF2B, ClusterBreak::LVT),
    (0xAF2C, 0xAF2C, ClusterBreak::LV),
    (0xAF2D, 0xAF47, ClusterBreak::LVT),
    (0xAF48, 0xAF48, ClusterBreak::LV),
    (0xAF49, 0xAF63, ClusterBreak::LVT),
    (0xAF64, 0xAF64, ClusterBreak::LV),
    (0xAF65, 0xAF7F, ClusterBreak::LVT),
    (0xAF80, 0xAF80, ClusterBreak::LV),
    (0xAF81, 0xAF9B, ClusterBreak::LVT),
    (0xAF9C, 0xAF9C, ClusterBreak::LV),
    (0xAF9D, 0xAFB7, ClusterBreak::LVT),
    (0xAFB8, 0xAFB8, ClusterBreak::LV),
    (0xAFB9, 0xAFD3, ClusterBreak::LVT),
    (0xAFD4, 0xAFD4, ClusterBreak::LV),
    (0xAFD5, 0xAFEF, ClusterBreak::LVT),
    (0xAFF0, 0xAFF0, ClusterBreak::LV),
    (0xAFF1, 0xB00B, ClusterBreak::LVT),
    (0xB00C, 0xB00C, ClusterBreak::LV),
    (0xB00D, 0xB027, ClusterBreak::LVT),
    (0xB028, 0xB028, ClusterBreak::LV),
    (0xB029, 0xB043, ClusterBreak::LVT),
    (0xB044, 0xB044, ClusterBreak::LV),
    (0xB045, 0xB05F, ClusterBreak::LVT),
    (0xB060, 0xB060, ClusterBreak::LV),
    (0xB061, 0xB07B, ClusterBreak::LVT),
    (0xB07C, 0xB07C, ClusterBreak::LV),
    (0xB07D, 0xB097, ClusterBreak::LVT),
    (0xB098, 0xB098, ClusterBreak::LV),
    (0xB099, 0xB0B3, ClusterBreak::LVT),
    (0xB0B4, 0xB0B4, ClusterBreak::LV),
    (0xB0B5, 0xB0CF, ClusterBreak::LVT),
    (0xB0D0, 0xB0D0, ClusterBreak::LV),
    (0xB0D1, 0xB0EB, ClusterBreak::LVT),
    (0xB0EC, 0xB0EC, ClusterBreak::LV),
    (0xB0ED, 0xB107, ClusterBreak::LVT),
    (0xB108, 0xB108, ClusterBreak::LV),
    (0xB109, 0xB123, ClusterBreak::LVT),
    (0xB124, 0xB124, ClusterBreak::LV),
    (0xB125, 0xB13F, ClusterBreak::LVT),
    (0xB140, 0xB140, ClusterBreak::LV),
    (0xB141, 0xB15B, ClusterBreak::LVT),
    (0xB15C, 0xB15C, ClusterBreak::LV),
    (0xB15D, 0xB177, ClusterBreak::LVT),
    (0xB178, 0xB178, ClusterBreak::LV),
    (0xB179, 0xB193, ClusterBreak::LVT),
    (0xB194, 0xB194, ClusterBreak::LV),
    (0xB195, 0xB1AF, ClusterBreak::LVT),
    (0xB1B0, 0xB1B0, ClusterBreak::LV),
    (0xB1B1, 0xB1CB, ClusterBreak::LVT),
    (0xB1CC, 0xB1CC, ClusterBreak::LV),
    (0xB1CD, 0xB1E7, ClusterBreak::LVT),
    (0xB1E8, 0xB1E8, ClusterBreak::LV),
    (0xB1E9, 0xB203, ClusterBreak::LVT),
    (0xB204, 0xB204, ClusterBreak::LV),
    (0xB205, 0xB21F, ClusterBreak::LVT),
    (0xB220, 0xB220, ClusterBreak::LV),
    (0xB221, 0xB23B, ClusterBreak::LVT),
    (0xB23C, 0xB23C, ClusterBreak::LV),
    (0xB23D, 0xB257, ClusterBreak::LVT),
    (0xB258, 0xB258, ClusterBreak::LV),
    (0xB259, 0xB273, ClusterBreak::LVT),
    (0xB274, 0xB274, ClusterBreak::LV),
    (0xB275, 0xB28F, ClusterBreak::LVT),
    (0xB290, 0xB290, ClusterBreak::LV),
    (0xB291, 0xB2AB, ClusterBreak::LVT),
    (0xB2AC, 0xB2AC, ClusterBreak::LV),
    (0xB2AD, 0xB2C7, ClusterBreak::LVT),
    (0xB2C8, 0xB2C8, ClusterBreak::LV),
    (0xB2C9, 0xB2E3, ClusterBreak::LVT),
    (0xB2E4, 0xB2E4, ClusterBreak::LV),
    (0xB2E5, 0xB2FF, ClusterBreak::LVT),
    (0xB300, 0xB300, ClusterBreak::LV),
    (0xB301, 0xB31B, ClusterBreak::LVT),
    (0xB31C, 0xB31C, ClusterBreak::LV),
    (0xB31D, 0xB337, ClusterBreak::LVT),
    (0xB338, 0xB338, ClusterBreak::LV),
    (0xB339, 0xB353, ClusterBreak::LVT),
    (0xB354, 0xB354, ClusterBreak::LV),
    (0xB355, 0xB36F, ClusterBreak::LVT),
    (0xB370, 0xB370, ClusterBreak::LV),
    (0xB371, 0xB38B, ClusterBreak::LVT),
    (0xB38C, 0xB38C, ClusterBreak::LV),
    (0xB38D, 0xB3A7, ClusterBreak::LVT),
    (0xB3A8, 0xB3A8, ClusterBreak::LV),
    (0xB3A9, 0xB3C3, ClusterBreak::LVT),
    (0xB3C4, 0xB3C4, ClusterBreak::LV),
    (0xB3C5, 0xB3DF, ClusterBreak::LVT),
    (0xB3E0, 0xB3E0, ClusterBreak::LV),
    (0xB3E1, 0xB3FB, ClusterBreak::LVT),
    (0xB3FC, 0xB3FC, ClusterBreak::LV),
    (0xB3FD, 0xB417, ClusterBreak::LVT),
    (0xB418, 0xB418, ClusterBreak::LV),
    (0xB419, 0xB433, ClusterBreak::LVT),
    (0xB434, 0xB434, ClusterBreak::LV),
    (0xB435, 0xB44F, ClusterBreak::LVT),
    (0xB450, 0xB450, ClusterBreak::LV),
    (0xB451, 0xB46B, ClusterBreak::LVT),
    (0xB46C, 0xB46C, ClusterBreak::LV),
    (0xB46D, 0xB487, ClusterBreak::LVT),
    (0xB488, 0xB488, ClusterBreak::LV),
    (0xB489, 0xB4A3, ClusterBreak::LVT),
    (0xB4A4, 0xB4A4, ClusterBreak::LV),
    (0xB4A5, 0xB4BF, ClusterBreak::LVT),
    (0xB4C0, 0xB4C0, ClusterBreak::LV),
    (0xB4C1, 0xB4DB, ClusterBreak::LVT),
    (0xB4DC, 0xB4DC, ClusterBreak::LV),
    (0xB4DD, 0xB4F7, ClusterBreak::LVT),
    (0xB4F8, 0xB4F8, ClusterBreak::LV),
    (0xB4F9, 0xB513, ClusterBreak::LVT),
    (0xB514, 0xB514, ClusterBreak::LV),
    (0xB515, 0xB52F, ClusterBreak::LVT),
    (0xB530, 0xB530, ClusterBreak::LV),
    (0xB531, 0xB54B, ClusterBreak::LVT),
    (0xB54C, 0xB54C, ClusterBreak::LV),
    (0xB54D, 0xB567, ClusterBreak::LVT),
    (0xB568, 0xB568, ClusterBreak::LV),
    (0xB569, 0xB583, ClusterBreak::LVT),
    (0xB584, 0xB584, ClusterBreak::LV),
    (0xB585, 0xB59F, ClusterBreak::LVT),
    (0xB5A0, 0xB5A0, ClusterBreak::LV),
    (0xB5A1, 0xB5BB, ClusterBreak::LVT),
    (0xB5BC, 0xB5BC, ClusterBreak::LV),
    (0xB5BD, 0xB5D7, ClusterBreak::LVT),
    (0xB5D8, 0xB5D8, ClusterBreak::LV),
    (0xB5D9, 0xB5F3, ClusterBreak::LVT),
    (0xB5F4, 0xB5F4, ClusterBreak::LV),
    (0xB5F5, 0xB60F, ClusterBreak::LVT),
    (0xB610, 0xB610, ClusterBreak::LV),
    (0xB611, 0xB62B, ClusterBreak::LVT),
    (0xB62C, 0xB62C, ClusterBreak::LV),
    (0xB62D, 0xB647, ClusterBreak::LVT),
    (0xB648, 0xB648, ClusterBreak::LV),
    (0xB649, 0xB663, ClusterBreak::LVT),
    (0xB664, 0xB664, ClusterBreak::LV),
    (0xB665, 0xB67F, ClusterBreak::LVT),
    (0xB680, 0xB680, ClusterBreak::LV),
    (0xB681, 0xB69B, ClusterBreak::LVT),
    (0xB69C, 0xB69C, ClusterBreak::LV),
    (0xB69D, 0xB6B7, ClusterBreak::LVT),
    (0xB6B8, 0xB6B8, ClusterBreak::LV),
    (0xB6B9, 0xB6D3, ClusterBreak::LVT),
    (0xB6D4, 0xB6D4, ClusterBreak::LV),
    (0xB6D5, 0xB6EF, ClusterBreak::LVT),
    (0xB6F0, 0xB6F0, ClusterBreak::LV),
    (0xB6F1, 0xB70B, ClusterBreak::LVT),
    (0xB70C, 0xB70C, ClusterBreak::LV),
    (0xB70D, 0xB727, ClusterBreak::LVT),
    (0xB728, 0xB728, ClusterBreak::LV),
    (0xB729, 0xB743, ClusterBreak::LVT),
    (0xB744, 0xB744, ClusterBreak::LV),
    (0xB745, 0xB75F, ClusterBreak::LVT),
    (0xB760, 0xB760, ClusterBreak::LV),
    (0xB761, 0xB77B, ClusterBreak::LVT),
    (0xB77C, 0xB77C, ClusterBreak::LV),
    (0xB77D, 0xB797, ClusterBreak::LVT),
    (0xB798, 0xB798, ClusterBreak::LV),
    (0xB799, 0xB7B3, ClusterBreak::LVT),
    (0xB7B4, 0xB7B4, ClusterBreak::LV),
    (0xB7B5, 0xB7CF, ClusterBreak::LVT),
    (0xB7D0, 0xB7D0, ClusterBreak::LV),
    (0xB7D1, 0xB7EB, ClusterBreak::LVT),
    (0xB7EC, 0xB7EC, ClusterBreak::LV),
    (0xB7ED, 0xB807, ClusterBreak::LVT),
    (0xB808, 0xB808, ClusterBreak::LV),
    (0xB809, 0xB823, ClusterBreak::LVT),
    (0xB824, 0xB824, ClusterBreak::LV),
    (0xB825, 0xB83F, ClusterBreak::LVT),
    (0xB840, 0xB840, ClusterBreak::LV),
    (0xB841, 0xB85B, ClusterBreak::LVT),
    (0xB85C, 0xB85C, ClusterBreak::LV),
    (0xB85D, 0xB877, ClusterBreak::LVT),
    (0xB878, 0xB878, ClusterBreak::LV),
    (0xB879, 0xB893, ClusterBreak::LVT),
    (0xB894, 0xB894, ClusterBreak::LV),
    (0xB895, 0xB8AF, ClusterBreak::LVT),
    (0xB8B0, 0xB8B0, ClusterBreak::LV),
    (0xB8B1, 0xB8CB, ClusterBreak::LVT),
    (0xB8CC, 0xB8CC, ClusterBreak::LV),
    (0xB8CD, 0xB8E7, ClusterBreak::LVT),
    (0xB8E8, 0xB8E8, ClusterBreak::LV),
    (0xB8E9, 0xB903, ClusterBreak::LVT),
    (0xB904, 0xB904, ClusterBreak::LV),
    (0xB905, 0xB91F, ClusterBreak::LVT),
    (0xB920, 0xB920, ClusterBreak::LV),
    (0xB921, 0xB93B, ClusterBreak::LVT),
    (0xB93C, 0xB93C, ClusterBreak::LV),
    (0xB93D, 0xB957, ClusterBreak::LVT),
    (0xB958, 0xB958, ClusterBreak::LV),
    (0xB959, 0xB973, ClusterBreak::LVT),
    (0xB974, 0xB974, ClusterBreak::LV),
    (0xB975, 0xB98F, ClusterBreak::LVT),
    (0xB990, 0xB990, ClusterBreak::LV),
    (0xB991, 0xB9AB, ClusterBreak::LVT),
    (0xB9AC, 0xB9AC, ClusterBreak::LV),
    (0xB9AD, 0xB9C7, ClusterBreak::LVT),
    (0xB9C8, 0xB9C8, ClusterBreak::LV),
    (0xB9C9, 0xB9E3, ClusterBreak::LVT),
    (0xB9E4, 0xB9E4, ClusterBreak::LV),
    (0xB9E5, 0xB9FF, ClusterBreak::LVT),
    (0xBA00, 0xBA00, ClusterBreak::LV),
    (0xBA01, 0xBA1B, ClusterBreak::LVT),
    (0xBA1C, 0xBA1C, ClusterBreak::LV),
    (0xBA1D, 0xBA37, ClusterBreak::LVT),
    (0xBA38, 0xBA38, ClusterBreak::LV),
    (0xBA39, 0xBA53, ClusterBreak::LVT),
    (0xBA54, 0xBA54, ClusterBreak::LV),
    (0xBA55, 0xBA6F, ClusterBreak::LVT),
    (0xBA70, 0xBA70, ClusterBreak::LV),
    (0xBA71, 0xBA8B, ClusterBreak::LVT),
    (0xBA8C, 0xBA8C, ClusterBreak::LV),
    (0xBA8D, 0xBAA7, ClusterBreak::LVT),
    (0xBAA8, 0xBAA8, ClusterBreak::LV),
    (0xBAA9, 0xBAC3, ClusterBreak::LVT),
    (0xBAC4, 0xBAC4, ClusterBreak::LV),
    (0xBAC5, 0xBADF, ClusterBreak::LVT),
    (0xBAE0, 0xBAE0, ClusterBreak::LV),
    (0xBAE1, 0xBAFB, ClusterBreak::LVT),
    (0xBAFC, 0xBAFC, ClusterBreak::LV),
    (0xBAFD, 0xBB17, ClusterBreak::LVT),
    (0xBB18, 0xBB18, ClusterBreak::LV),
    (0xBB19, 0xBB33, ClusterBreak::LVT),
    (0xBB34, 0xBB34, ClusterBreak::LV),
    (0xBB35, 0xBB4F, ClusterBreak::LVT),
    (0xBB50, 0xBB50, ClusterBreak::LV),
    (0xBB51, 0xBB6B, ClusterBreak::LVT),
    (0xBB6C, 0xBB6C, ClusterBreak::LV),
    (0xBB6D, 0xBB87, ClusterBreak::LVT),
    (0xBB88, 0xBB88, ClusterBreak::LV),
    (0xBB89, 0xBBA3, ClusterBreak::LVT),
    (0xBBA4, 0xBBA4, ClusterBreak::LV),
    (0xBBA5, 0xBBBF, ClusterBreak::LVT),
    (0xBBC0, 0xBBC0, ClusterBreak::LV),
    (0xBBC1, 0xBBDB, ClusterBreak::LVT),
    (0xBBDC, 0xBBDC, ClusterBreak::LV),
    (0xBBDD, 0xBBF7, ClusterBreak::LVT),
    (0xBBF8, 0xBBF8, ClusterBreak::LV),
    (0xBBF9, 0xBC13, ClusterBreak::LVT),
    (0xBC14, 0xBC14, ClusterBreak::LV),
    (0xBC15, 0xBC2F, ClusterBreak::LVT),
    (0xBC30, 0xBC30, ClusterBreak::LV),
    (0xBC31, 0xBC4B, ClusterBreak::LVT),
    (0xBC4C, 0xBC4C, ClusterBreak::LV),
    (0xBC4D, 0xBC67, ClusterBreak::LVT),
    (0xBC68, 0xBC68, ClusterBreak::LV),
    (0xBC69, 0xBC83, ClusterBreak::LVT),
    (0xBC84, 0xBC84, ClusterBreak::LV),
    (0xBC85, 0xBC9F, ClusterBreak::LVT),
    (0xBCA0, 0xBCA0, ClusterBreak::LV),
    (0xBCA1, 0xBCBB, ClusterBreak::LVT),
    (0xBCBC, 0xBCBC, ClusterBreak::LV),
    (0xBCBD, 0xBCD7, ClusterBreak::LVT),
    (0xBCD8, 0xBCD8, ClusterBreak::LV),
    (0xBCD9, 0xBCF3, ClusterBreak::LVT),
    (0xBCF4, 0xBCF4, ClusterBreak::LV),
    (0xBCF5, 0xBD0F, ClusterBreak::LVT),
    (0xBD10, 0xBD10, ClusterBreak::LV),
    (0xBD11, 0xBD2B, ClusterBreak::LVT),
    (0xBD2C, 0xBD2C, ClusterBreak::LV),
    (0xBD2D, 0xBD47, ClusterBreak::LVT),
    (0xBD48, 0xBD48, ClusterBreak::LV),
    (0xBD49, 0xBD63, ClusterBreak::LVT),
    (0xBD64, 0xBD64, ClusterBreak::LV),
    (0xBD65, 0xBD7F, ClusterBreak::LVT),
    (0xBD80, 0xBD80, ClusterBreak::LV),
    (0xBD81, 0xBD9B, ClusterBreak::LVT),
    (0xBD9C, 0xBD9C, ClusterBreak::LV),
    (0xBD9D, 0xBDB7, ClusterBreak::LVT),
    (0xBDB8, 0xBDB8, ClusterBreak::LV),
    (0xBDB9, 0xBDD3, ClusterBreak::LVT),
    (0xBDD4, 0xBDD4, ClusterBreak::LV),
    (0xBDD5, 0xBDEF, ClusterBreak::LVT),
    (0xBDF0, 0xBDF0, ClusterBreak::LV),
    (0xBDF1, 0xBE0B, ClusterBreak::LVT),
    (0xBE0C, 0xBE0C, ClusterBreak::LV),
    (0xBE0D, 0xBE27, ClusterBreak::LVT),
    (0xBE28, 0xBE28, ClusterBreak::LV),
    (0xBE29, 0xBE43, ClusterBreak::LVT),
    (0xBE44, 0xBE44, ClusterBreak::LV),
    (0xBE45, 0xBE5F, ClusterBreak::LVT),
    (0xBE60, 0xBE60, ClusterBreak::LV),
    (0xBE61, 0xBE7B, ClusterBreak::LVT),
    (0xBE7C, 0xBE7C, ClusterBreak::LV),
    (0xBE7D, 0xBE97, ClusterBreak::LVT),
    (0xBE98, 0xBE98, ClusterBreak::LV),
    (0xBE99, 0xBEB3, ClusterBreak::LVT),
    (0xBEB4, 0xBEB4, ClusterBreak::LV),
    (0xBEB5, 0xBECF, ClusterBreak::LVT),
    (0xBED0, 0xBED0, ClusterBreak::LV),
    (0xBED1, 0xBEEB, ClusterBreak::LVT),
    (0xBEEC, 0xBEEC, ClusterBreak::LV),
    (0xBEED, 0xBF07, ClusterBreak::LVT),
    (0xBF08, 0xBF08, ClusterBreak::LV),
    (0xBF09, 0xBF23, ClusterBreak::LVT),
    (0xBF24, 0xBF24, ClusterBreak::LV),
    (0xBF25, 0xBF3F, ClusterBreak::LVT),
    (0xBF40, 0xBF40, ClusterBreak::LV),
    (0xBF41, 0xBF5B, ClusterBreak::LVT),
    (0xBF5C, 0xBF5C, ClusterBreak::LV),
    (0xBF5D, 0xBF77, ClusterBreak::LVT),
    (0xBF78, 0xBF78, ClusterBreak::LV),
    (0xBF79, 0xBF93, ClusterBreak::LVT),
    (0xBF94, 0xBF94, ClusterBreak::LV),
    (0xBF95, 0xBFAF, ClusterBreak::LVT),
    (0xBFB0, 0xBFB0, ClusterBreak::LV),
    (0xBFB1, 0xBFCB, ClusterBreak::LVT),
    (0xBFCC, 0xBFCC, ClusterBreak::LV),
    (0xBFCD, 0xBFE7, ClusterBreak::LVT),
    (0xBFE8, 0xBFE8, ClusterBreak::LV),
    (0xBFE9, 0xC003, ClusterBreak::LVT),
    (0xC004, 0xC004, ClusterBreak::LV),
    (0xC005, 0xC01F, ClusterBreak::LVT),
    (0xC020, 0xC020, ClusterBreak::LV),
    (0xC021, 0xC03B, ClusterBreak::LVT),
    (0xC03C, 0xC03C, ClusterBreak::LV),
    (0xC03D, 0xC057, ClusterBreak::LVT),
    (0xC058, 0xC058, ClusterBreak::LV),
    (0xC059, 0xC073, ClusterBreak::LVT),
    (0xC074, 0xC074, ClusterBreak::LV),
    (0xC075, 0xC08F, ClusterBreak::LVT),
    (0xC090, 0xC090, ClusterBreak::LV),
    (0xC091, 0xC0AB, ClusterBreak::LVT),
    (0xC0AC, 0xC0AC, ClusterBreak::LV),
    (0xC0AD, 0xC0C7, ClusterBreak::LVT),
    (0xC0C8, 0xC0C8, ClusterBreak::LV),
    (0xC0C9, 0xC0E3, ClusterBreak::LVT),
    (0xC0E4, 0xC0E4, ClusterBreak::LV),
    (0xC0E5, 0xC0FF, ClusterBreak::LVT),
    (0xC100, 0xC100, ClusterBreak::LV),
    (0xC101, 0xC11B, ClusterBreak::LVT),
    (0xC11C, 0xC11C, ClusterBreak::LV),
    (0xC11D, 0xC137, ClusterBreak::LVT),
    (0xC138, 0xC138, ClusterBreak::LV),
    (0xC139, 0xC153, ClusterBreak::LVT),
    (0xC154, 0xC154, ClusterBreak::LV),
    (0xC155, 0xC16F, ClusterBreak::LVT),
    (0xC170, 0xC170, ClusterBreak::LV),
    (0xC171, 0xC18B, ClusterBreak::LVT),
    (0xC18C, 0xC18C, ClusterBreak::LV),
    (0xC18D, 0xC1A7, ClusterBreak::LVT),
    (0xC1A8, 0xC1A8, ClusterBreak::LV),
    (0xC1A9, 0xC1C3, ClusterBreak::LVT),
    (0xC1C4, 0xC1C4, ClusterBreak::LV),
    (0xC1C5, 0xC1DF, ClusterBreak::LVT),
    (0xC1E0, 0xC1E0, ClusterBreak::LV),
    (0xC1E1, 0xC1FB, ClusterBreak::LVT),
    (0xC1FC, 0xC1FC, ClusterBreak::LV),
    (0xC1FD, 0xC217, ClusterBreak::LVT),
    (0xC218, 0xC218, ClusterBreak::LV),
    (0xC219, 0xC233, ClusterBreak::LVT),
    (0xC234, 0xC234, ClusterBreak::LV),
    (0xC235, 0xC24F, ClusterBreak::LVT),
    (0xC250, 0xC250, ClusterBreak::LV),
    (0xC251, 0xC26B, ClusterBreak::LVT),
    (0xC26C, 0xC26C, ClusterBreak::LV),
    (0xC26D, 0xC287, ClusterBreak::LVT),
    (0xC288, 0xC288, ClusterBreak::LV),
    (0xC289, 0xC2A3, ClusterBreak::LVT),
    (0xC2A4, 0xC2A4, ClusterBreak::LV),
    (0xC2A5, 0xC2BF, ClusterBreak::LVT),
    (0xC2C0, 0xC2C0, ClusterBreak::LV),
    (0xC2C1, 0xC2DB, ClusterBreak::LVT),
    (0xC2DC, 0xC2DC, ClusterBreak::LV),
    (0xC2DD, 0xC2F7, ClusterBreak::LVT),
    (0xC2F8, 0xC2F8, ClusterBreak::LV),
    (0xC2F9, 0xC313, ClusterBreak::LVT),
    (0xC314, 0xC314, ClusterBreak::LV),
    (0xC315, 0xC32F, ClusterBreak::LVT),
    (0xC330, 0xC330, ClusterBreak::LV),
    (0xC331, 0xC34B, ClusterBreak::LVT),
    (0xC34C, 0xC34C, ClusterBreak::LV),
    (0xC34D, 0xC367, ClusterBreak::LVT),
    (0xC368, 0xC368, ClusterBreak::LV),
    (0xC369, 0xC383, ClusterBreak::LVT),
    (0xC384, 0xC384, ClusterBreak::LV),
    (0xC385, 0xC39F, ClusterBreak::LVT),
    (0xC3A0, 0xC3A0, ClusterBreak::LV),
    (0xC3A1, 0xC3BB, ClusterBreak::LVT),
    (0xC3BC, 0xC3BC, ClusterBreak::LV),
    (0xC3BD, 0xC3D7, ClusterBreak::LVT),
    (0xC3D8, 0xC3D8, ClusterBreak::LV),
    (0xC3D9, 0xC3F3, ClusterBreak::LVT),
    (0xC3F4, 0xC3F4, ClusterBreak::LV),
    (0xC3F5, 0xC40F, ClusterBreak::LVT),
    (0xC410, 0xC410, ClusterBreak::LV),
    (0xC411, 0xC42B, ClusterBreak::LVT),
    (0xC42C, 0xC42C, ClusterBreak::LV),
    (0xC42D, 0xC447, ClusterBreak::LVT),
    (0xC448, 0xC448, ClusterBreak::LV),
    (0xC449, 0xC463, ClusterBreak::LVT),
    (0xC464, 0xC464, ClusterBreak::LV),
    (0xC465, 0xC47F, ClusterBreak::LVT),
    (0xC480, 0xC480, ClusterBreak::LV),
    (0xC481, 0xC49B, ClusterBreak::LVT),
    (0xC49C, 0xC49C, ClusterBreak::LV),
    (0xC49D, 0xC4B7, ClusterBreak::LVT),
    (0xC4B8, 0xC4B8, ClusterBreak::LV),
    (0xC4B9, 0xC4D3, ClusterBreak::LVT),
    (0xC4D4, 0xC4D4, ClusterBreak::LV),
    (0xC4D5, 0xC4EF, ClusterBreak::LVT),
    (0xC4F0, 0xC4F0, ClusterBreak::LV),
    (0xC4F1, 0xC50B, ClusterBreak::LVT),
    (0xC50C, 0xC50C, ClusterBreak::LV),
    (0xC50D, 0xC527, ClusterBreak::LVT),
    (0xC528, 0xC528, ClusterBreak::LV),
    (0xC529, 0xC543, ClusterBreak::LVT),
    (0xC544, 0xC544, ClusterBreak::LV),
    (0xC545, 0xC55F, ClusterBreak::LVT),
    (0xC560, 0xC560, ClusterBreak::LV),
    (0xC561, 0xC57B, ClusterBreak::LVT),
    (0xC57C, 0xC57C, ClusterBreak::LV),
    (0xC57D, 0xC597, ClusterBreak::LVT),
    (0xC598, 0xC598, ClusterBreak::LV),
    (0xC599, 0xC5B3, ClusterBreak::LVT),
    (0xC5B4, 0xC5B4, ClusterBreak::LV),
    (0xC5B5, 0xC5CF, ClusterBreak::LVT),
    (0xC5D0, 0xC5D0, ClusterBreak::LV),
    (0xC5D1, 0xC5EB, ClusterBreak::LVT),
    (0xC5EC, 0xC5EC, ClusterBreak::LV),
    (0xC5ED, 0xC607, ClusterBreak::LVT),
    (0xC608, 0xC608, ClusterBreak::LV),
    (0xC609, 0xC623, ClusterBreak::LVT),
    (0xC624, 0xC624, ClusterBreak::LV),
    (0xC625, 0xC63F, ClusterBreak::LVT),
    (0xC640, 0xC640, ClusterBreak::LV),
    (0xC641, 0xC65B, ClusterBreak::LVT),
    (0xC65C, 0xC65C, ClusterBreak::LV),
    (0xC65D, 0xC677, ClusterBreak::LVT),
    (0xC678, 0xC678, ClusterBreak::LV),
    (0xC679, 0xC693, ClusterBreak::LVT),
    (0xC694, 0xC694, ClusterBreak::LV),
    (0xC695, 0xC6AF, ClusterBreak::LVT),
    (0xC6B0, 0xC6B0, ClusterBreak::LV),
    (0xC6B1, 0xC6CB, ClusterBreak::LVT),
    (0xC6CC, 0xC6CC, ClusterBreak::LV),
    (0xC6CD, 0xC6E7, ClusterBreak::LVT),
    (0xC6E8, 0xC6E8, ClusterBreak::LV),
    (0xC6E9, 0xC703, ClusterBreak::LVT),
    (0xC704, 0xC704, ClusterBreak::LV),
    (0xC705, 0xC71F, ClusterBreak::LVT),
    (0xC720, 0xC720, ClusterBreak::LV),
    (0xC721, 0xC73B, ClusterBreak::LVT),
    (0xC73C, 0xC73C, ClusterBreak::LV),
    (0xC73D, 0xC757, ClusterBreak::LVT),
    (0xC758, 0xC758, ClusterBreak::LV),
    (0xC759, 0xC773, ClusterBreak::LVT),
    (0xC774, 0xC774, ClusterBreak::LV),
    (0xC775, 0xC78F, ClusterBreak::LVT),
    (0xC790, 0xC790, ClusterBreak::LV),
    (0xC791, 0xC7AB, ClusterBreak::LVT),
    (0xC7AC, 0xC7AC, ClusterBreak::LV),
    (0xC7AD, 0xC7C7, ClusterBreak::LVT),
    (0xC7C8, 0xC7C8, ClusterBreak::LV),
    (0xC7C9, 0xC7E3, ClusterBreak::LVT),
    (0xC7E4, 0xC7E4, ClusterBreak::LV),
    (0xC7E5, 0xC7FF, ClusterBreak::LVT),
    (0xC800, 0xC800, ClusterBreak::LV),
    (0xC801, 0xC81B, ClusterBreak::LVT),
    (0xC81C, 0xC81C, ClusterBreak::LV),
    (0xC81D, 0xC837, ClusterBreak::LVT),
    (0xC838, 0xC838, ClusterBreak::LV),
    (0xC839, 0xC853, ClusterBreak::LVT),
    (0xC854, 0xC854, ClusterBreak::LV),
    (0xC855, 0xC86F, ClusterBreak::LVT),
    (0xC870, 0xC870, ClusterBreak::LV),
    (0xC871, 0xC88B, ClusterBreak::LVT),
    (0xC88C, 0xC88C, ClusterBreak::LV),
    (0xC88D, 0xC8A7, ClusterBreak::LVT),
    (0xC8A8, 0xC8A8, ClusterBreak::LV),
    (0xC8A9, 0xC8C3, ClusterBreak::LVT),
    (0xC8C4, 0xC8C4, ClusterBreak::LV),
    (0xC8C5, 0xC8DF, ClusterBreak::LVT),
    (0xC8E0, 0xC8E0, ClusterBreak::LV),
    (0xC8E1, 0xC8FB, ClusterBreak::LVT),
    (0xC8FC, 0xC8FC, ClusterBreak::LV),
    (0xC8FD, 0xC917, ClusterBreak::LVT),
    (0xC918, 0xC918, ClusterBreak::LV),
    (0xC919, 0xC933, ClusterBreak::LVT),
    (0xC934, 0xC934, ClusterBreak::LV),
    (0xC935, 0xC94F, ClusterBreak::LVT),
    (0xC950, 0xC950, ClusterBreak::LV),
    (0xC951, 0xC96B, ClusterBreak::LVT),
    (0xC96C, 0xC96C, ClusterBreak::LV),
    (0xC96D, 0xC987, ClusterBreak::LVT),
    (0xC988, 0xC988, ClusterBreak::LV),
    (0xC989, 0xC9A3, ClusterBreak::LVT),
    (0xC9A4, 0xC9A4, ClusterBreak::LV),
    (0xC9A5, 0xC9BF, ClusterBreak::LVT),
    (0xC9C0, 0xC9C0, ClusterBreak::LV),
    (0xC9C1, 0xC9DB, ClusterBreak::LVT),
    (0xC9DC, 0xC9DC, ClusterBreak::LV),
    (0xC9DD, 0xC9F7, ClusterBreak::LVT),
    (0xC9F8, 0xC9F8, ClusterBreak::LV),
    (0xC9F9, 0xCA13, ClusterBreak::LVT),
    (0xCA14, 0xCA14, ClusterBreak::LV),
    (0xCA15, 0xCA2F, ClusterBreak::LVT),
    (0xCA30, 0xCA30, ClusterBreak::LV),
    (0xCA31, 0xCA4B, ClusterBreak::LVT),
    (0xCA4C, 0xCA4C, ClusterBreak::LV),
    (0xCA4D, 0xCA67, ClusterBreak::LVT),
    (0xCA68, 0xCA68, ClusterBreak::LV),
    (0xCA69, 0xCA83, ClusterBreak::LVT),
    (0xCA84, 0xCA84, ClusterBreak::LV),
    (0xCA85, 0xCA9F, ClusterBreak::LVT),
    (0xCAA0, 0xCAA0, ClusterBreak::LV),
    (0xCAA1, 0xCABB, ClusterBreak::LVT),
    (0xCABC, 0xCABC, ClusterBreak::LV),
    (0xCABD, 0xCAD7, ClusterBreak::LVT),
    (0xCAD8, 0xCAD8, ClusterBreak::LV),
    (0xCAD9, 0xCAF3, ClusterBreak::LVT),
    (0xCAF4, 0xCAF4, ClusterBreak::LV),
    (0xCAF5, 0xCB0F, ClusterBreak::LVT),
    (0xCB10, 0xCB10, ClusterBreak::LV),
    (0xCB11, 0xCB2B, ClusterBreak::LVT),
    (0xCB2C, 0xCB2C, ClusterBreak::LV),
    (0xCB2D, 0xCB47, ClusterBreak::LVT),
    (0xCB48, 0xCB48, ClusterBreak::LV),
    (0xCB49, 0xCB63, ClusterBreak::LVT),
    (0xCB64, 0xCB64, ClusterBreak::LV),
    (0xCB65, 0xCB7F, ClusterBreak::LVT),
    (0xCB80, 0xCB80, ClusterBreak::LV),
    (0xCB81, 0xCB9B, ClusterBreak::LVT),
    (0xCB9C, 0xCB9C, ClusterBreak::LV),
    (0xCB9D, 0xCBB7, ClusterBreak::LVT),
    (0xCBB8, 0xCBB8, ClusterBreak::LV),
    (0xCBB9, 0xCBD3, ClusterBreak::LVT),
    (0xCBD4, 0xCBD4, ClusterBreak::LV),
    (0xCBD5, 0xCBEF, ClusterBreak::LVT),
    (0xCBF0, 0xCBF0, ClusterBreak::LV),
    (0xCBF1, 0xCC0B, ClusterBreak::LVT),
    (0xCC0C, 0xCC0C, ClusterBreak::LV),
    (0xCC0D, 0xCC27, ClusterBreak::LVT),
    (0xCC28, 0xCC28, ClusterBreak::LV),
    (0xCC29, 0xCC43, ClusterBreak::LVT),
    (0xCC44, 0xCC44, ClusterBreak::LV),
    (0xCC45, 0xCC5F, ClusterBreak::LVT),
    (0xCC60, 0xCC60, ClusterBreak::LV),
    (0xCC61, 0xCC7B, ClusterBreak::LVT),
    (0xCC7C, 0xCC7C, ClusterBreak::LV),
    (0xCC7D, 0xCC97, ClusterBreak::LVT),
    (0xCC98, 0xCC98, ClusterBreak::LV),
    (0xCC99, 0xCCB3, ClusterBreak::LVT),
    (0xCCB4, 0xCCB4, ClusterBreak::LV),
    (0xCCB5, 0xCCCF, ClusterBreak::LVT),
    (0xCCD0, 0xCCD0, ClusterBreak::LV),
    (0xCCD1, 0xCCEB, ClusterBreak::LVT),
    (0xCCEC, 0xCCEC, ClusterBreak::LV),
    (0xCCED, 0xCD07, ClusterBreak::LVT),
    (0xCD08, 0xCD08, ClusterBreak::LV),
    (0xCD09, 0xCD23, ClusterBreak::LVT),
    (0xCD24, 0xCD24, ClusterBreak::LV),
    (0xCD25, 0xCD3F, ClusterBreak::LVT),
    (0xCD40, 0xCD40, ClusterBreak::LV),
    (0xCD41, 0xCD5B, ClusterBreak::LVT),
    (0xCD5C, 0xCD5C, ClusterBreak::LV),
    (0xCD5D, 0xCD77, ClusterBreak::LVT),
    (0xCD78, 0xCD78, ClusterBreak::LV),
    (0xCD79, 0xCD93, ClusterBreak::LVT),
    (0xCD94, 0xCD94, ClusterBreak::LV),
    (0xCD95, 0xCDAF, ClusterBreak::LVT),
    (0xCDB0, 0xCDB0, ClusterBreak::LV),
    (0xCDB1, 0xCDCB, ClusterBreak::LVT),
    (0xCDCC, 0xCDCC, ClusterBreak::LV),
    (0xCDCD, 0xCDE7, ClusterBreak::LVT),
    (0xCDE8, 0xCDE8, ClusterBreak::LV),
    (0xCDE9, 0xCE03, ClusterBreak::LVT),
    (0xCE04, 0xCE04, ClusterBreak::LV),
    (0xCE05, 0xCE1F, ClusterBreak::LVT),
    (0xCE20, 0xCE20, ClusterBreak::LV),
    (0xCE21, 0xCE3B, ClusterBreak::LVT),
    (0xCE3C, 0xCE3C, ClusterBreak::LV),
    (0xCE3D, 0xCE57, ClusterBreak::LVT),
    (0xCE58, 0xCE58, ClusterBreak::LV),
    (0xCE59, 0xCE73, ClusterBreak::LVT),
    (0xCE74, 0xCE74, ClusterBreak::LV),
    (0xCE75, 0xCE8F, ClusterBreak::LVT),
    (0xCE90, 0xCE90, ClusterBreak::LV),
    (0xCE91, 0xCEAB, ClusterBreak::LVT),
    (0xCEAC, 0xCEAC, ClusterBreak::LV),
    (0xCEAD, 0xCEC7, ClusterBreak::LVT),
    (0xCEC8, 0xCEC8, ClusterBreak::LV),
    (0xCEC9, 0xCEE3, ClusterBreak::LVT),
    (0xCEE4, 0xCEE4, ClusterBreak::LV),
    (0xCEE5, 0xCEFF, ClusterBreak::LVT),
    (0xCF00, 0xCF00, ClusterBreak::LV),
    (0xCF01, 0xCF1B, ClusterBreak::LVT),
    (0xCF1C, 0xCF1C, ClusterBreak::LV),
    (0xCF1D, 0xCF37, ClusterBreak::LVT),
    (0xCF38, 0xCF38, ClusterBreak::LV),
    (0xCF39, 0xCF53, ClusterBreak::LVT),
    (0xCF54, 0xCF54, ClusterBreak::LV),
    (0xCF55, 0xCF6F, ClusterBreak::LVT),
    (0xCF70, 0xCF70, ClusterBreak::LV),
    (0xCF71, 0xCF8B, ClusterBreak::LVT),
    (0xCF8C, 0xCF8C, ClusterBreak::LV),
    (0xCF8D, 0xCFA7, ClusterBreak::LVT),
    (0xCFA8, 0xCFA8, ClusterBreak::LV),
    (0xCFA9, 0xCFC3, ClusterBreak::LVT),
    (0xCFC4, 0xCFC4, ClusterBreak::LV),
    (0xCFC5, 0xCFDF, ClusterBreak::LVT),
    (0xCFE0, 0xCFE0, ClusterBreak::LV),
    (0xCFE1, 0xCFFB, ClusterBreak::LVT),
    (0xCFFC, 0xCFFC, ClusterBreak::LV),
    (0xCFFD, 0xD017, ClusterBreak::LVT),
    (0xD018, 0xD018, ClusterBreak::LV),
    (0xD019, 0xD033, ClusterBreak::LVT),
    (0xD034, 0xD034, ClusterBreak::LV),
    (0xD035, 0xD04F, ClusterBreak::LVT),
    (0xD050, 0xD050, ClusterBreak::LV),
    (0xD051, 0xD06B, ClusterBreak::LVT),
    (0xD06C, 0xD06C, ClusterBreak::LV),
    (0xD06D, 0xD087, ClusterBreak::LVT),
    (0xD088, 0xD088, ClusterBreak::LV),
    (0xD089, 0xD0A3, ClusterBreak::LVT),
    (0xD0A4, 0xD0A4, ClusterBreak::LV),
    (0xD0A5, 0xD0BF, ClusterBreak::LVT),
    (0xD0C0, 0xD0C0, ClusterBreak::LV),
    (0xD0C1, 0xD0DB, ClusterBreak::LVT),
    (0xD0DC, 0xD0DC, ClusterBreak::LV),
    (0xD0DD, 0xD0F7, ClusterBreak::LVT),
    (0xD0F8, 0xD0F8, ClusterBreak::LV),
    (0xD0F9, 0xD113, ClusterBreak::LVT),
    (0xD114, 0xD114, ClusterBreak::LV),
    (0xD115, 0xD12F, ClusterBreak::LVT),
    (0xD130, 0xD130, ClusterBreak::LV),
    (0xD131, 0xD14B, ClusterBreak::LVT),
    (0xD14C, 0xD14C, ClusterBreak::LV),
    (0xD14D, 0xD167, ClusterBreak::LVT),
    (0xD168, 0xD168, ClusterBreak::LV),
    (0xD169, 0xD183, ClusterBreak::LVT),
    (0xD184, 0xD184, ClusterBreak::LV),
    (0xD185, 0xD19F, ClusterBreak::LVT),
    (0xD1A0, 0xD1A0, ClusterBreak::LV),
    (0xD1A1, 0xD1BB, ClusterBreak::LVT),
    (0xD1BC, 0xD1BC, ClusterBreak::LV),
    (0xD1BD, 0xD1D7, ClusterBreak::LVT),
    (0xD1D8, 0xD1D8, ClusterBreak::LV),
    (0xD1D9, 0xD1F3, ClusterBreak::LVT),
    (0xD1F4, 0xD1F4, ClusterBreak::LV),
    (0xD1F5, 0xD20F, ClusterBreak::LVT),
    (0xD210, 0xD210, ClusterBreak::LV),
    (0xD211, 0xD22B, ClusterBreak::LVT),
    (0xD22C, 0xD22C, ClusterBreak::LV),
    (0xD22D, 0xD247, ClusterBreak::LVT),
    (0xD248, 0xD248, ClusterBreak::LV),
    (0xD249, 0xD263, ClusterBreak::LVT),
    (0xD264, 0xD264, ClusterBreak::LV),
    (0xD265, 0xD27F, ClusterBreak::LVT),
    (0xD280, 0xD280, ClusterBreak::LV),
    (0xD281, 0xD29B, ClusterBreak::LVT),
    (0xD29C, 0xD29C, ClusterBreak::LV),
    (0xD29D, 0xD2B7, ClusterBreak::LVT),
    (0xD2B8, 0xD2B8, ClusterBreak::LV),
    (0xD2B9, 0xD2D3, ClusterBreak::LVT),
    (0xD2D4, 0xD2D4, ClusterBreak::LV),
    (0xD2D5, 0xD2EF, ClusterBreak::LVT),
    (0xD2F0, 0xD2F0, ClusterBreak::LV),
    (0xD2F1, 0xD30B, ClusterBreak::LVT),
    (0xD30C, 0xD30C, ClusterBreak::LV),
    (0xD30D, 0xD327, ClusterBreak::LVT),
    (0xD328, 0xD328, ClusterBreak::LV),
    (0xD329, 0xD343, ClusterBreak::LVT),
    (0xD344, 0xD344, ClusterBreak::LV),
    (0xD345, 0xD35F, ClusterBreak::LVT),
    (0xD360, 0xD360, ClusterBreak::LV),
    (0xD361, 0xD37B, ClusterBreak::LVT),
    (0xD37C, 0xD37C, ClusterBreak::LV),
    (0xD37D, 0xD397, ClusterBreak::LVT),
    (0xD398, 0xD398, ClusterBreak::LV),
    (0xD399, 0xD3B3, ClusterBreak::LVT),
    (0xD3B4, 0xD3B4, ClusterBreak::LV),
    (0xD3B5, 0xD3CF, ClusterBreak::LVT),
    (0xD3D0, 0xD3D0, ClusterBreak::LV),
    (0xD3D1, 0xD3EB, ClusterBreak::LVT),
    (0xD3EC, 0xD3EC, ClusterBreak::LV),
    (0xD3ED, 0xD407, ClusterBreak::LVT),
    (0xD408, 0xD408, ClusterBreak::LV),
    (0xD409, 0xD423, ClusterBreak::LVT),
    (0xD424, 0xD424, ClusterBreak::LV),
    (0xD425, 0xD43F, ClusterBreak::LVT),
    (0xD440, 0xD440, ClusterBreak::LV),
    (0xD441, 0xD45B, ClusterBreak::LVT),
    (0xD45C, 0xD45C, ClusterBreak::LV),
    (0xD45D, 0xD477, ClusterBreak::LVT),
    (0xD478, 0xD478, ClusterBreak::LV),
    (0xD479, 0xD493, ClusterBreak::LVT),
    (0xD494, 0xD494, ClusterBreak::LV),
    (0xD495, 0xD4AF, ClusterBreak::LVT),
    (0xD4B0, 0xD4B0, ClusterBreak::LV),
    (0xD4B1, 0xD4CB, ClusterBreak::LVT),
    (0xD4CC, 0xD4CC, ClusterBreak::LV),
    (0xD4CD, 0xD4E7, ClusterBreak::LVT),
    (0xD4E8, 0xD4E8, ClusterBreak::LV),
    (0xD4E9, 0xD503, ClusterBreak::LVT),
    (0xD504, 0xD504, ClusterBreak::LV),
    (0xD505, 0xD51F, ClusterBreak::LVT),
    (0xD520, 0xD520, ClusterBreak::LV),
    (0xD521, 0xD53B, ClusterBreak::LVT),
    (0xD53C, 0xD53C, ClusterBreak::LV),
    (0xD53D, 0xD557, ClusterBreak::LVT),
    (0xD558, 0xD558, ClusterBreak::LV),
    (0xD559, 0xD573, ClusterBreak::LVT),
    (0xD574, 0xD574, ClusterBreak::LV),
    (0xD575, 0xD58F, ClusterBreak::LVT),
    (0xD590, 0xD590, ClusterBreak::LV),
    (0xD591, 0xD5AB, ClusterBreak::LVT),
    (0xD5AC, 0xD5AC, ClusterBreak::LV),
    (0xD5AD, 0xD5C7, ClusterBreak::LVT),
    (0xD5C8, 0xD5C8, ClusterBreak::LV),
    (0xD5C9, 0xD5E3, ClusterBreak::LVT),
    (0xD5E4, 0xD5E4, ClusterBreak::LV),
    (0xD5E5, 0xD5FF, ClusterBreak::LVT),
    (0xD600, 0xD600, ClusterBreak::LV),
    (0xD601, 0xD61B, ClusterBreak::LVT),
    (0xD61C, 0xD61C, ClusterBreak::LV),
    (0xD61D, 0xD637, ClusterBreak::LVT),
    (0xD638, 0xD638, ClusterBreak::LV),
    (0xD639, 0xD653, ClusterBreak::LVT),
    (0xD654, 0xD654, ClusterBreak::LV),
    (0xD655, 0xD66F, ClusterBreak::LVT),
    (0xD670, 0xD670, ClusterBreak::LV),
    (0xD671, 0xD68B, ClusterBreak::LVT),
    (0xD68C, 0xD68C, ClusterBreak::LV),
    (0xD68D, 0xD6A7, ClusterBreak::LVT),
    (0xD6A8, 0xD6A8, ClusterBreak::LV),
    (0xD6A9, 0xD6C3, ClusterBreak::LVT),
    (0xD6C4, 0xD6C4, ClusterBreak::LV),
    (0xD6C5, 0xD6DF, ClusterBreak::LVT),
    (0xD6E0, 0xD6E0, ClusterBreak::LV),
    (0xD6E1, 0xD6FB, ClusterBreak::LVT),
    (0xD6FC, 0xD6FC, ClusterBreak::LV),
    (0xD6FD, 0xD717, ClusterBreak::LVT),
    (0xD718, 0xD718, ClusterBreak::LV),
    (0xD719, 0xD733, ClusterBreak::LVT),
    (0xD734, 0xD734, ClusterBreak::LV),
    (0xD735, 0xD74F, ClusterBreak::LVT),
    (0xD750, 0xD750, ClusterBreak::LV),
    (0xD751, 0xD76B, ClusterBreak::LVT),
    (0xD76C, 0xD76C, ClusterBreak::LV),
    (0xD76D, 0xD787, ClusterBreak::LVT),
    (0xD788, 0xD788, ClusterBreak::LV),
    (0xD789, 0xD7A3, ClusterBreak::LVT),
    (0xD7A4, 0xD7AF, ClusterBreak::XX),
    (0xD7B0, 0xD7C6, ClusterBreak::V),
    (0xD7C7, 0xD7CA, ClusterBreak::XX),
    (0xD7CB, 0xD7FB, ClusterBreak::T),
    (0xD7FC, 0xFB1D, ClusterBreak::XX),
    (0xFB1E, 0xFB1E, ClusterBreak::EX),
    (0xFB1F, 0xFDFF, ClusterBreak::XX),
    (0xFE00, 0xFE0F, ClusterBreak::EX),
    (0xFE10, 0xFE1F, ClusterBreak::XX),
    (0xFE20, 0xFE2F, ClusterBreak::EX),
    (0xFE30, 0xFEFE, ClusterBreak::XX),
    (0xFEFF, 0xFEFF, ClusterBreak::CN),
    (0xFF00, 0xFF9D, ClusterBreak::XX),
    (0xFF9E, 0xFF9F, ClusterBreak::EX),
    (0xFFA0, 0xFFEF, ClusterBreak::XX),
    (0xFFF0, 0xFFFB, ClusterBreak::CN),
    (0xFFFC, 0x101FC, ClusterBreak::XX),
    (0x101FD, 0x101FD, ClusterBreak::EX),
    (0x101FE, 0x102DF, ClusterBreak::XX),
    (0x102E0, 0x102E0, ClusterBreak::EX),
    (0x102E1, 0x10375, ClusterBreak::XX),
    (0x10376, 0x1037A, ClusterBreak::EX),
    (0x1037B, 0x10A00, ClusterBreak::XX),
    (0x10A01, 0x10A03, ClusterBreak::EX),
    (0x10A04, 0x10A04, ClusterBreak::XX),
    (0x10A05, 0x10A06, ClusterBreak::EX),
    (0x10A07, 0x10A0B, ClusterBreak::XX),
    (0x10A0C, 0x10A0F, ClusterBreak::EX),
    (0x10A10, 0x10A37, ClusterBreak::XX),
    (0x10A38, 0x10A3A, ClusterBreak::EX),
    (0x10A3B, 0x10A3E, ClusterBreak::XX),
    (0x10A3F, 0x10A3F, ClusterBreak::EX),
    (0x10A40, 0x10AE4, ClusterBreak::XX),
    (0x10AE5, 0x10AE6, ClusterBreak::EX),
    (0x10AE7, 0x10D23, ClusterBreak::XX),
    (0x10D24, 0x10D27, ClusterBreak::EX),
    (0x10D28, 0x10D68, ClusterBreak::XX),
    (0x10D69, 0x10D6D, ClusterBreak::EX),
    (0x10D6E, 0x10EAA, ClusterBreak::XX),
    (0x10EAB, 0x10EAC, ClusterBreak::EX),
    (0x10EAD, 0x10EF9, ClusterBreak::XX),
    (0x10EFA, 0x10EFF, ClusterBreak::EX),
    (0x10F00, 0x10F45, ClusterBreak::XX),
    (0x10F46, 0x10F50, ClusterBreak::EX),
    (0x10F51, 0x10F81, ClusterBreak::XX),
    (0x10F82, 0x10F85, ClusterBreak::EX),
    (0x10F86, 0x10FFF, ClusterBreak::XX),
    (0x11000, 0x11000, ClusterBreak::SM),
    (0x11001, 0x11001, ClusterBreak::EX),
    (0x11002, 0x11002, ClusterBreak::SM),
    (0x11003, 0x11037, ClusterBreak::XX),
    (0x11038, 0x11046, ClusterBreak::EX),
    (0x11047, 0x1106F, ClusterBreak::XX),
    (0x11070, 0x11070, ClusterBreak::EX),
    (0x11071, 0x11072, ClusterBreak::XX),
    (0x11073, 0x11074, ClusterBreak::EX),
    (0x11075, 0x1107E, ClusterBreak::XX),
    (0x1107F, 0x11081, ClusterBreak::EX),
    (0x11082, 0x11082, ClusterBreak::SM),
    (0x11083, 0x110AF, ClusterBreak::XX),
    (0x110B0, 0x110B2, ClusterBreak::SM),
    (0x110B3, 0x110B6, ClusterBreak::EX),
    (0x110B7, 0x110B8, ClusterBreak::SM),
    (0x110B9, 0x110BA, ClusterBreak::EX),
    (0x110BB, 0x110BC, ClusterBreak::XX),
    (0x110BD, 0x110BD, ClusterBreak::PP),
    (0x110BE, 0x110C1, ClusterBreak::XX),
    (0x110C2, 0x110C2, ClusterBreak::EX),
    (0x110C3, 0x110CC, ClusterBreak::XX),
    (0x110CD, 0x110CD, ClusterBreak::PP),
    (0x110CE, 0x110FF, ClusterBreak::XX),
    (0x11100, 0x11102, ClusterBreak::EX),
    (0x11103, 0x11126, ClusterBreak::XX),
    (0x11127, 0x1112B, ClusterBreak::EX),
    (0x1112C, 0x1112C, ClusterBreak::SM),
    (0x1112D, 0x11134, ClusterBreak::EX),
    (0x11135, 0x11144, ClusterBreak::XX),
    (0x11145, 0x11146, ClusterBreak::SM),
    (0x11147, 0x11172, ClusterBreak::XX),
    (0x11173, 0x11173, ClusterBreak::EX),
    (0x11174, 0x1117F, ClusterBreak::XX),
    (0x11180, 0x11181, ClusterBreak::EX),
    (0x11182, 0x11182, ClusterBreak::SM),
    (0x11183, 0x111B2, ClusterBreak::XX),
    (0x111B3, 0x111B5, ClusterBreak::SM),
    (0x111B6, 0x111BE, ClusterBreak::EX),
    (0x111BF, 0x111BF, ClusterBreak::SM),
    (0x111C0, 0x111C0, ClusterBreak::EX),
    (0x111C1, 0x111C1, ClusterBreak::XX),
    (0x111C2, 0x111C3, ClusterBreak::PP),
    (0x111C4, 0x111C8, ClusterBreak::XX),
    (0x111C9, 0x111CC, ClusterBreak::EX),
    (0x111CD, 0x111CD, ClusterBreak::XX),
    (0x111CE, 0x111CE, ClusterBreak::SM),
    (0x111CF, 0x111CF, ClusterBreak::EX),
    (0x111D0, 0x1122B, ClusterBreak::XX),
    (0x1122C, 0x1122E, ClusterBreak::SM),
    (0x1122F, 0x11231, ClusterBreak::EX),
    (0x11232, 0x11233, ClusterBreak::SM),
    (0x11234, 0x11237, ClusterBreak::EX),
    (0x11238, 0x1123D, ClusterBreak::XX),
    (0x1123E, 0x1123E, ClusterBreak::EX),
    (0x1123F, 0x11240, ClusterBreak::XX),
    (0x11241, 0x11241, ClusterBreak::EX),
    (0x11242, 0x112DE, ClusterBreak::XX),
    (0x112DF, 0x112DF, ClusterBreak::EX),
    (0x112E0, 0x112E2, ClusterBreak::SM),
    (0x112E3, 0x112EA, ClusterBreak::EX),
    (0x112EB, 0x112FF, ClusterBreak::XX),
    (0x11300, 0x11301, ClusterBreak::EX),
    (0x11302, 0x11303, ClusterBreak::SM),
    (0x11304, 0x1133A, ClusterBreak::XX),
    (0x1133B, 0x1133C, ClusterBreak::EX),
    (0x1133D, 0x1133D, ClusterBreak::XX),
    (0x1133E, 0x1133E, ClusterBreak::EX),
    (0x1133F, 0x1133F, ClusterBreak::SM),
    (0x11340, 0x11340, ClusterBreak::EX),
    (0x11341, 0x11344, ClusterBreak::SM),
    (0x11345, 0x11346, ClusterBreak::XX),
    (0x11347, 0x11348, ClusterBreak::SM),
    (0x11349, 0x1134A, ClusterBreak::XX),
    (0x1134B, 0x1134C, ClusterBreak::SM),
    (0x1134D, 0x1134D, ClusterBreak::EX),
    (0x1134E, 0x11356, ClusterBreak::XX),
    (0x11357, 0x11357, ClusterBreak::EX),
    (0x11358, 0x11361, ClusterBreak::XX),
    (0x11362, 0x11363, ClusterBreak::SM),
    (0x11364, 0x11365, ClusterBreak::XX),
    (0x11366, 0x1136C, ClusterBreak::EX),
    (0x1136D, 0x1136F, ClusterBreak::XX),
    (0x11370, 0x11374, ClusterBreak::EX),
    (0x11375, 0x113B7, ClusterBreak::XX),
    (0x113B8, 0x113B8, ClusterBreak::EX),
    (0x113B9, 0x113BA, ClusterBreak::SM),
    (0x113BB, 0x113C0, ClusterBreak::EX),
    (0x113C1, 0x113C1, ClusterBreak::XX),
    (0x113C2, 0x113C2, ClusterBreak::EX),
    (0x113C3, 0x113C4, ClusterBreak::XX),
    (0x113C5, 0x113C5, ClusterBreak::EX),
    (0x113C6, 0x113C6, ClusterBreak::XX),
    (0x113C7, 0x113C9, ClusterBreak::EX),
    (0x113CA, 0x113CA, ClusterBreak::SM),
    (0x113CB, 0x113CB, ClusterBreak::XX),
    (0x113CC, 0x113CD, ClusterBreak::SM),
    (0x113CE, 0x113D0, ClusterBreak::EX),
    (0x113D1, 0x113D1, ClusterBreak::PP),
    (0x113D2, 0x113D2, ClusterBreak::EX),
    (0x113D3, 0x113E0, ClusterBreak::XX),
    (0x113E1, 0x113E2, ClusterBreak::EX),
    (0x113E3, 0x11434, ClusterBreak::XX),
    (0x11435, 0x11437, ClusterBreak::SM),
    (0x11438, 0x1143F, ClusterBreak::EX),
    (0x11440, 0x11441, ClusterBreak::SM),
    (0x11442, 0x11444, ClusterBreak::EX),
    (0x11445, 0x11445, ClusterBreak::SM),
    (0x11446, 0x11446, ClusterBreak::EX),
    (0x11447, 0x1145D, ClusterBreak::XX),
    (0x1145E, 0x1145E, ClusterBreak::EX),
    (0x1145F, 0x114AF, ClusterBreak::XX),
    (0x114B0, 0x114B0, ClusterBreak::EX),
    (0x114B1, 0x114B2, ClusterBreak::SM),
    (0x114B3, 0x114B8, ClusterBreak::EX),
    (0x114B9, 0x114B9, ClusterBreak::SM),
    (0x114BA, 0x114BA, ClusterBreak::EX),
    (0x114BB, 0x114BC, ClusterBreak::SM),
    (0x114BD, 0x114BD, ClusterBreak::EX),
    (0x114BE, 0x114BE, ClusterBreak::SM),
    (0x114BF, 0x114C0, ClusterBreak::EX),
    (0x114C1, 0x114C1, ClusterBreak::SM),
    (0x114C2, 0x114C3, ClusterBreak::EX),
    (0x114C4, 0x115AE, ClusterBreak::XX),
    (0x115AF, 0x115AF, ClusterBreak::EX),
    (0x115B0, 0x115B1, ClusterBreak::SM),
    (0x115B2, 0x115B5, ClusterBreak::EX),
    (0x115B6, 0x115B7, ClusterBreak::XX),
    (0x115B8, 0x115BB, ClusterBreak::SM),
    (0x115BC, 0x115BD, ClusterBreak::EX),
    (0x115BE, 0x115BE, ClusterBreak::SM),
    (0x115BF, 0x115C0, ClusterBreak::EX),
    (0x115C1, 0x115DB, ClusterBreak::XX),
    (0x115DC, 0x115DD, ClusterBreak::EX),
    (0x115DE, 0x1162F, ClusterBreak::XX),
    (0x11630, 0x11632, ClusterBreak::SM),
    (0x11633, 0x1163A, ClusterBreak::EX),
    (0x1163B, 0x1163C, ClusterBreak::SM),
    (0x1163D, 0x1163D, ClusterBreak::EX),
    (0x1163E, 0x1163E, ClusterBreak::SM),
    (0x1163F, 0x11640, ClusterBreak::EX),
    (0x11641, 0x116AA, ClusterBreak::XX),
    (0x116AB, 0x116AB, ClusterBreak::EX),
    (0x116AC, 0x116AC, ClusterBreak::SM),
    (0x116AD, 0x116AD, ClusterBreak::EX),
    (0x116AE, 0x116AF, ClusterBreak::SM),
    (0x116B0, 0x116B7, ClusterBreak::EX),
    (0x116B8, 0x1171C, ClusterBreak::XX),
    (0x1171D, 0x1171D, ClusterBreak::EX),
    (0x1171E, 0x1171E, ClusterBreak::SM),
    (0x1171F, 0x1171F, ClusterBreak::EX),
    (0x11720, 0x11721, ClusterBreak::XX),
    (0x11722, 0x11725, ClusterBreak::EX),
    (0x11726, 0x11726, ClusterBreak::SM),
    (0x11727, 0x1172B, ClusterBreak::EX),
    (0x1172C, 0x1182B, ClusterBreak::XX),
    (0x1182C, 0x1182E, ClusterBreak::SM),
    (0x1182F, 0x11837, ClusterBreak::EX),
    (0x11838, 0x11838, ClusterBreak::SM),
    (0x11839, 0x1183A, ClusterBreak::EX),
    (0x1183B, 0x1192F, ClusterBreak::XX),
    (0x11930, 0x11930, ClusterBreak::EX),
    (0x11931, 0x11935, ClusterBreak::SM),
    (0x11936, 0x11936, ClusterBreak::XX),
    (0x11937, 0x11938, ClusterBreak::SM),
    (0x11939, 0x1193A, ClusterBreak::XX),
    (0x1193B, 0x1193E, ClusterBreak::EX),
    (0x1193F, 0x1193F, ClusterBreak::PP),
    (0x11940, 0x11940, ClusterBreak::SM),
    (0x11941, 0x11941, ClusterBreak::PP),
    (0x11942, 0x11942, ClusterBreak::SM),
    (0x11943, 0x11943, ClusterBreak::EX),
    (0x11944, 0x119D0, ClusterBreak::XX),
    (0x119D1, 0x119D3, ClusterBreak::SM),
    (0x119D4, 0x119D7, ClusterBreak::EX),
    (0x119D8, 0x119D9, ClusterBreak::XX),
    (0x119DA, 0x119DB, ClusterBreak::EX),
    (0x119DC, 0x119DF, ClusterBreak::SM),
    (0x119E0, 0x119E0, ClusterBreak::EX),
    (0x119E1, 0x119E3, ClusterBreak::XX),
    (0x119E4, 0x119E4, ClusterBreak::SM),
    (0x119E5, 0x11A00, ClusterBreak::XX),
    (0x11A01, 0x11A0A, ClusterBreak::EX),
    (0x11A0B, 0x11A32, ClusterBreak::XX),
    (0x11A33, 0x11A38, ClusterBreak::EX),
    (0x11A39, 0x11A39, ClusterBreak::SM),
    (0x11A3A, 0x11A3A, ClusterBreak::XX),
    (0x11A3B, 0x11A3E, ClusterBreak::EX),
    (0x11A3F, 0x11A46, ClusterBreak::XX),
    (0x11A47, 0x11A47, ClusterBreak::EX),
    (0x11A48, 0x11A50, ClusterBreak::XX),
    (0x11A51, 0x11A56, ClusterBreak::EX),
    (0x11A57, 0x11A58, ClusterBreak::SM),
    (0x11A59, 0x11A5B, ClusterBreak::EX),
    (0x11A5C, 0x11A83, ClusterBreak::XX),
    (0x11A84, 0x11A89, ClusterBreak::PP),
    (0x11A8A, 0x11A96, ClusterBreak::EX),
    (0x11A97, 0x11A97, ClusterBreak::SM),
    (0x11A98, 0x11A99, ClusterBreak::EX),
    (0x11A9A, 0x11B5F, ClusterBreak::XX),
    (0x11B60, 0x11B60, ClusterBreak::EX),
    (0x11B61, 0x11B61, ClusterBreak::SM),
    (0x11B62, 0x11B64, ClusterBreak::EX),
    (0x11B65, 0x11B65, ClusterBreak::SM),
    (0x11B66, 0x11B66, ClusterBreak::EX),
    (0x11B67, 0x11B67, ClusterBreak::SM),
    (0x11B68, 0x11C2E, ClusterBreak::XX),
    (0x11C2F, 0x11C2F, ClusterBreak::SM),
    (0x11C30, 0x11C36, ClusterBreak::EX),
    (0x11C37, 0x11C37, ClusterBreak::XX),
    (0x11C38, 0x11C3D, ClusterBreak::EX),
    (0x11C3E, 0x11C3E, ClusterBreak::SM),
    (0x11C3F, 0x11C3F, ClusterBreak::EX),
    (0x11C40, 0x11C91, ClusterBreak::XX),
    (0x11C92, 0x11CA7, ClusterBreak::EX),
    (0x11CA8, 0x11CA8, ClusterBreak::XX),
    (0x11CA9, 0x11CA9, ClusterBreak::SM),
    (0x11CAA, 0x11CB0, ClusterBreak::EX),
    (0x11CB1, 0x11CB1, ClusterBreak::SM),
    (0x11CB2, 0x11CB3, ClusterBreak::EX),
    (0x11CB4, 0x11CB4, ClusterBreak::SM),
    (0x11CB5, 0x11CB6, ClusterBreak::EX),
    (0x11CB7, 0x11D30, ClusterBreak::XX),
    (0x11D31, 0x11D36, ClusterBreak::EX),
    (0x11D37, 0x11D39, ClusterBreak::XX),
    (0x11D3A, 0x11D3A, ClusterBreak::EX),
    (0x11D3B, 0x11D3B, ClusterBreak::XX),
    (0x11D3C, 0x11D3D, ClusterBreak::EX),
    (0x11D3E, 0x11D3E, ClusterBreak::XX),
    (0x11D3F, 0x11D45, ClusterBreak::EX),
    (0x11D46, 0x11D46, ClusterBreak::PP),
    (0x11D47, 0x11D47, ClusterBreak::EX),
    (0x11D48, 0x11D89, ClusterBreak::XX),
    (0x11D8A, 0x11D8E, ClusterBreak::SM),
    (0x11D8F, 0x11D8F, ClusterBreak::XX),
    (0x11D90, 0x11D91, ClusterBreak::EX),
    (0x11D92, 0x11D92, ClusterBreak::XX),
    (0x11D93, 0x11D94, ClusterBreak::SM),
    (0x11D95, 0x11D95, ClusterBreak::EX),
    (0x11D96, 0x11D96, ClusterBreak::SM),
    (0x11D97, 0x11D97, ClusterBreak::EX),
    (0x11D98, 0x11EF2, ClusterBreak::XX),
    (0x11EF3, 0x11EF4, ClusterBreak::EX),
    (0x11EF5, 0x11EF6, ClusterBreak::SM),
    (0x11EF7, 0x11EFF, ClusterBreak::XX),
    (0x11F00, 0x11F01, ClusterBreak::EX),
    (0x11F02, 0x11F02, ClusterBreak::PP),
    (0x11F03, 0x11F03, ClusterBreak::SM),
    (0x11F04, 0x11F33, ClusterBreak::XX),
    (0x11F34, 0x11F35, ClusterBreak::SM),
    (0x11F36, 0x11F3A, ClusterBreak::EX),
    (0x11F3B, 0x11F3D, ClusterBreak::XX),
    (0x11F3E, 0x11F3F, ClusterBreak::SM),
    (0x11F40, 0x11F42, ClusterBreak::EX),
    (0x11F43, 0x11F59, ClusterBreak::XX),
    (0x11F5A, 0x11F5A, ClusterBreak::EX),
    (0x11F5B, 0x1342F, ClusterBreak::XX),
    (0x13430, 0x1343F, ClusterBreak::CN),
    (0x13440, 0x13440, ClusterBreak::EX),
    (0x13441, 0x13446, ClusterBreak::XX),
    (0x13447, 0x13455, ClusterBreak::EX),
    (0x13456, 0x1611D, ClusterBreak::XX),
    (0x1611E, 0x16129, ClusterBreak::EX),
    (0x1612A, 0x1612C, ClusterBreak::SM),
    (0x1612D, 0x1612F, ClusterBreak::EX),
    (0x16130, 0x16AEF, ClusterBreak::XX),
    (0x16AF0, 0x16AF4, ClusterBreak::EX),
    (0x16AF5, 0x16B2F, ClusterBreak::XX),
    (0x16B30, 0x16B36, ClusterBreak::EX),
    (0x16B37, 0x16D62, ClusterBreak::XX),
    (0x16D63, 0x16D63, ClusterBreak::V),
    (0x16D64, 0x16D66, ClusterBreak::XX),
    (0x16D67, 0x16D6A, ClusterBreak::V),
    (0x16D6B, 0x16F4E, ClusterBreak::XX),
    (0x16F4F, 0x16F4F, ClusterBreak::EX),
    (0x16F50, 0x16F50, ClusterBreak::XX),
    (0x16F51, 0x16F87, ClusterBreak::SM),
    (0x16F88, 0x16F8E, ClusterBreak::XX),
    (0x16F8F, 0x16F92, ClusterBreak::EX),
    (0x16F93, 0x16FE3, ClusterBreak::XX),
    (0x16FE4, 0x16FE4, ClusterBreak::EX),
    (0x16FE5, 0x16FEF, ClusterBreak::XX),
    (0x16FF0, 0x16FF1, ClusterBreak::EX),
    (0x16FF2, 0x1BC9C, ClusterBreak::XX),
    (0x1BC9D, 0x1BC9E, ClusterBreak::EX),
    (0x1BC9F, 0x1BC9F, ClusterBreak::XX),
    (0x1BCA0, 0x1BCA3, ClusterBreak::CN),
    (0x1BCA4, 0x1CEFF, ClusterBreak::XX),
    (0x1CF00, 0x1CF2D, ClusterBreak::EX),
    (0x1CF2E, 0x1CF2F, ClusterBreak::XX),
    (0x1CF30, 0x1CF46, ClusterBreak::EX),
    (0x1CF47, 0x1D164, ClusterBreak::XX),
    (0x1D165, 0x1D169, ClusterBreak::EX),
    (0x1D16A, 0x1D16C, ClusterBreak::XX),
    (0x1D16D, 0x1D172, ClusterBreak::EX),
    (0x1D173, 0x1D17A, ClusterBreak::CN),
    (0x1D17B, 0x1D182, ClusterBreak::EX),
    (0x1D183, 0x1D184, ClusterBreak::XX),
    (0x1D185, 0x1D18B, ClusterBreak::EX),
    (0x1D18C, 0x1D1A9, ClusterBreak::XX),
    (0x1D1AA, 0x1D1AD, ClusterBreak::EX),
    (0x1D1AE, 0x1D241, ClusterBreak::XX),
    (0x1D242, 0x1D244, ClusterBreak::EX),
    (0x1D245, 0x1D9FF, ClusterBreak::XX),
    (0x1DA00, 0x1DA36, ClusterBreak::EX),
    (0x1DA37, 0x1DA3A, ClusterBreak::XX),
    (0x1DA3B, 0x1DA6C, ClusterBreak::EX),
    (0x1DA6D, 0x1DA74, ClusterBreak::XX),
    (0x1DA75, 0x1DA75, ClusterBreak::EX),
    (0x1DA76, 0x1DA83, ClusterBreak::XX),
    (0x1DA84, 0x1DA84, ClusterBreak::EX),
    (0x1DA85, 0x1DA9A, ClusterBreak::XX),
    (0x1DA9B, 0x1DA9F, ClusterBreak::EX),
    (0x1DAA0, 0x1DAA0, ClusterBreak::XX),
    (0x1DAA1, 0x1DAAF, ClusterBreak::EX),
    (0x1DAB0, 0x1DFFF, ClusterBreak::XX),
    (0x1E000, 0x1E006, ClusterBreak::EX),
    (0x1E007, 0x1E007, ClusterBreak::XX),
    (0x1E008, 0x1E018, ClusterBreak::EX),
    (0x1E019, 0x1E01A, ClusterBreak::XX),
    (0x1E01B, 0x1E021, ClusterBreak::EX),
    (0x1E022, 0x1E022, ClusterBreak::XX),
    (0x1E023, 0x1E024, ClusterBreak::EX),
    (0x1E025, 0x1E025, ClusterBreak::XX),
    (0x1E026, 0x1E02A, ClusterBreak::EX),
    (0x1E02B, 0x1E08E, ClusterBreak::XX),
    (0x1E08F, 0x1E08F, ClusterBreak::EX),
    (0x1E090, 0x1E12F, ClusterBreak::XX),
    (0x1E130, 0x1E136, ClusterBreak::EX),
    (0x1E137, 0x1E2AD, ClusterBreak::XX),
    (0x1E2AE, 0x1E2AE, ClusterBreak::EX),
    (0x1E2AF, 0x1E2EB, ClusterBreak::XX),
    (0x1E2EC, 0x1E2EF, ClusterBreak::EX),
    (0x1E2F0, 0x1E4EB, ClusterBreak::XX),
    (0x1E4EC, 0x1E4EF, ClusterBreak::EX),
    (0x1E4F0, 0x1E5ED, ClusterBreak::XX),
    (0x1E5EE, 0x1E5EF, ClusterBreak::EX),
    (0x1E5F0, 0x1E6E2, ClusterBreak::XX),
    (0x1E6E3, 0x1E6E3, ClusterBreak::EX),
    (0x1E6E4, 0x1E6E5, ClusterBreak::XX),
    (0x1E6E6, 0x1E6E6, ClusterBreak::EX),
    (0x1E6E7, 0x1E6ED, ClusterBreak::XX),
    (0x1E6EE, 0x1E6EF, ClusterBreak::EX),
    (0x1E6F0, 0x1E6F4, ClusterBreak::XX),
    (0x1E6F5, 0x1E6F5, ClusterBreak::EX),
    (0x1E6F6, 0x1E8CF, ClusterBreak::XX),
    (0x1E8D0, 0x1E8D6, ClusterBreak::EX),
    (0x1E8D7, 0x1E943, ClusterBreak::XX),
    (0x1E944, 0x1E94A, ClusterBreak::EX),
    (0x1E94B, 0x1F1E5, ClusterBreak::XX),
    (0x1F1E6, 0x1F1FF, ClusterBreak::RI),
    (0x1F200, 0x1F3FA, ClusterBreak::XX),
    (0x1F3FB, 0x1F3FF, ClusterBreak::EX),
    (0x1F400, 0xDFFFF, ClusterBreak::XX),
    (0xE0000, 0xE001F, ClusterBreak::CN),
    (0xE0020, 0xE007F, ClusterBreak::EX),
    (0xE0080, 0xE00FF, ClusterBreak::CN),
    (0xE0100, 0xE01EF, ClusterBreak::EX),
    (0xE01F0, 0xE0FFF, ClusterBreak::CN),
    (0xE1000, 0x10FFFF, ClusterBreak::XX),
];

static SCRIPT_TABLE: &[(u32, u32, Script)] = &[
    (0x0, 0x40, Script::Common),
    (0x41, 0x5A, Script::Latin),
    (0x5B, 0x60, Script::Common),
    (0x61, 0x7A, Script::Latin),
    (0x7B, 0xA9, Script::Common),
    (0xAA, 0xAA, Script::Latin),
    (0xAB, 0xB9, Script::Common),
    (0xBA, 0xBA, Script::Latin),
    (0xBB, 0xBF, Script::Common),
    (0xC0, 0xD6, Script::Latin),
    (0xD7, 0xD7, Script::Common),
    (0xD8, 0xF6, Script::Latin),
    (0xF7, 0xF7, Script::Common),
    (0xF8, 0x2B8, Script::Latin),
    (0x2B9, 0x2DF, Script::Common),
    (0x2E0, 0x2E4, Script::Latin),
    (0x2E5, 0x2E9, Script::Common),
    (0x2EA, 0x2EB, Script::Bopomofo),
    (0x2EC, 0x2FF, Script::Common),
    (0x300, 0x36F, Script::Inherited),
    (0x370, 0x373, Script::Greek),
    (0x374, 0x374, Script::Common),
    (0x375, 0x377, Script::Greek),
    (0x378, 0x379, Script::Unknown),
    (0x37A, 0x37D, Script::Greek),
    (0x37E, 0x37E, Script::Common),
    (0x37F, 0x37F, Script::Greek),
    (0x380, 0x383, Script::Unknown),
    (0x384, 0x384, Script::Greek),
    (0x385, 0x385, Script::Common),
    (0x386, 0x386, Script::Greek),
    (0x387, 0x387, Script::Common),
    (0x388, 0x38A, Script::Greek),
    (0x38B, 0x38B, Script::Unknown),
    (0x38C, 0x38C, Script::Greek),
    (0x38D, 0x38D, Script::Unknown),
    (0x38E, 0x3A1, Script::Greek),
    (0x3A2, 0x3A2, Script::Unknown),
    (0x3A3, 0x3E1, Script::Greek),
    (0x3E2, 0x3EF, Script::Coptic),
    (0x3F0, 0x3FF, Script::Greek),
    (0x400, 0x484, Script::Cyrillic),
    (0x485, 0x486, Script::Inherited),
    (0x487, 0x52F, Script::Cyrillic),
    (0x530, 0x530, Script::Unknown),
    (0x531, 0x556, Script::Armenian),
    (0x557, 0x558, Script::Unknown),
    (0x559, 0x58A, Script::Armenian),
    (0x58B, 0x58C, Script::Unknown),
    (0x58D, 0x58F, Script::Armenian),
    (0x590, 0x590, Script::Unknown),
    (0x591, 0x5C7, Script::Hebrew),
    (0x5C8, 0x5CF, Script::Unknown),
    (0x5D0, 0x5EA, Script::Hebrew),
    (0x5EB, 0x5EE, Script::Unknown),
    (0x5EF, 0x5F4, Script::Hebrew),
    (0x5F5, 0x5FF, Script::Unknown),
    (0x600, 0x604, Script::Arabic),
    (0x605, 0x605, Script::Common),
    (0x606, 0x60B, Script::Arabic),
    (0x60C, 0x60C, Script::Common),
    (0x60D, 0x61A, Script::Arabic),
    (0x61B, 0x61B, Script::Common),
    (0x61C, 0x61E, Script::Arabic),
    (0x61F, 0x61F, Script::Common),
    (0x620, 0x63F, Script::Arabic),
    (0x640, 0x640, Script::Common),
    (0x641, 0x64A, Script::Arabic),
    (0x64B, 0x655, Script::Inherited),
    (0x656, 0x66F, Script::Arabic),
    (0x670, 0x670, Script::Inherited),
    (0x671, 0x6DC, Script::Arabic),
    (0x6DD, 0x6DD, Script::Common),
    (0x6DE, 0x6FF, Script::Arabic),
    (0x700, 0x70D, Script::Syriac),
    (0x70E, 0x70E, Script::Unknown),
    (0x70F, 0x74A, Script::Syriac),
    (0x74B, 0x74C, Script::Unknown),
    (0x74D, 0x74F, Script::Syriac),
    (0x750, 0x77F, Script::Arabic),
    (0x780, 0x7B1, Script::Thaana),
    (0x7B2, 0x7BF, Script::Unknown),
    (0x7C0, 0x7FA, Script::Nko),
    (0x7FB, 0x7FC, Script::Unknown),
    (0x7FD, 0x7FF, Script::Nko),
    (0x800, 0x82D, Script::Samaritan),
    (0x82E, 0x82F, Script::Unknown),
    (0x830, 0x83E, Script::Samaritan),
    (0x83F, 0x83F, Script::Unknown),
    (0x840, 0x85B, Script::Mandaic),
    (0x85C, 0x85D, Script::Unknown),
    (0x85E, 0x85E, Script::Mandaic),
    (0x85F, 0x85F, Script::Unknown),
    (0x860, 0x86A, Script::Syriac),
    (0x86B, 0x86F, Script::Unknown),
    (0x870, 0x891, Script::Arabic),
    (0x892, 0x896, Script::Unknown),
    (0x897, 0x8E1, Script::Arabic),
    (0x8E2, 0x8E2, Script::Common),
    (0x8E3, 0x8FF, Script::Arabic),
    (0x900, 0x950, Script::Devanagari),
    (0x951, 0x954, Script::Inherited),
    (0x955, 0x963, Script::Devanagari),
    (0x964, 0x965, Script::Common),
    (0x966, 0x97F, Script::Devanagari),
    (0x980, 0x983, Script::Bengali),
    (0x984, 0x984, Script::Unknown),
    (0x985, 0x98C, Script::Bengali),
    (0x98D, 0x98E, Script::Unknown),
    (0x98F, 0x990, Script::Bengali),
    (0x991, 0x992, Script::Unknown),
    (0x993, 0x9A8, Script::Bengali),
    (0x9A9, 0x9A9, Script::Unknown),
    (0x9AA, 0x9B0, Script::Bengali),
    (0x9B1, 0x9B1, Script::Unknown),
    (0x9B2, 0x9B2, Script::Bengali),
    (0x9B3, 0x9B5, Script::Unknown),
    (0x9B6, 0x9B9, Script::Bengali),
    (0x9BA, 0x9BB, Script::Unknown),
    (0x9BC, 0x9C4, Script::Bengali),
    (0x9C5, 0x9C6, Script::Unknown),
    (0x9C7, 0x9C8, Script::Bengali),
    (0x9C9, 0x9CA, Script::Unknown),
    (0x9CB, 0x9CE, Script::Bengali),
    (0x9CF, 0x9D6, Script::Unknown),
    (0x9D7, 0x9D7, Script::Bengali),
    (0x9D8, 0x9DB, Script::Unknown),
    (0x9DC, 0x9DD, Script::Bengali),
    (0x9DE, 0x9DE, Script::Unknown),
    (0x9DF, 0x9E3, Script::Bengali),
    (0x9E4, 0x9E5, Script::Unknown),
    (0x9E6, 0x9FE, Script::Bengali),
    (0x9FF, 0xA00, Script::Unknown),
    (0xA01, 0xA03, Script::Gurmukhi),
    (0xA04, 0xA04, Script::Unknown),
    (0xA05, 0xA0A, Script::Gurmukhi),
    (0xA0B, 0xA0E, Script::Unknown),
    (0xA0F, 0xA10, Script::Gurmukhi),
    (0xA11, 0xA12, Script::Unknown),
    (0xA13, 0xA28, Script::Gurmukhi),
    (0xA29, 0xA29, Script::Unknown),
    (0xA2A, 0xA30, Script::Gurmukhi),
    (0xA31, 0xA31, Script::Unknown),
    (0xA32, 0xA33, Script::Gurmukhi),
    (0xA34, 0xA34, Script::Unknown),
    (0xA35, 0xA36, Script::Gurmukhi),
    (0xA37, 0xA37, Script::Unknown),
    (0xA38, 0xA39, Script::Gurmukhi),
    (0xA3A, 0xA3B, Script::Unknown),
    (0xA3C, 0xA3C, Script::Gurmukhi),
    (0xA3D, 0xA3D, Script::Unknown),
    (0xA3E, 0xA42, Script::Gurmukhi),
    (0xA43, 0xA46, Script::Unknown),
    (0xA47, 0xA48, Script::Gurmukhi),
    (0xA49, 0xA4A, Script::Unknown),
    (0xA4B, 0xA4D, Script::Gurmukhi),
    (0xA4E, 0xA50, Script::Unknown),
    (0xA51, 0xA51, Script::Gurmukhi),
    (0xA52, 0xA58, Script::Unknown),
    (0xA59, 0xA5C, Script::Gurmukhi),
    (0xA5D, 0xA5D, Script::Unknown),
    (0xA5E, 0xA5E, Script::Gurmukhi),
    (0xA5F, 0xA65, Script::Unknown),
    (0xA66, 0xA76, Script::Gurmukhi),
    (0xA77, 0xA80, Script::Unknown),
    (0xA81, 0xA83, Script::Gujarati),
    (0xA84, 0xA84, Script::Unknown),
    (0xA85, 0xA8D, Script::Gujarati),
    (0xA8E, 0xA8E, Script::Unknown),
    (0xA8F, 0xA91, Script::Gujarati),
    (0xA92, 0xA92, Script::Unknown),
    (0xA93, 0xAA8, Script::Gujarati),
    (0xAA9, 0xAA9, Script::Unknown),
    (0xAAA, 0xAB0, Script::Gujarati),
    (0xAB1, 0xAB1, Script::Unknown),
    (0xAB2, 0xAB3, Script::Gujarati),
    (0xAB4, 0xAB4, Script::Unknown),
    (0xAB5, 0xAB9, Script::Gujarati),
    (0xABA, 0xABB, Script::Unknown),
    (0xABC, 0xAC5, Script::Gujarati),
    (0xAC6, 0xAC6, Script::Unknown),
    (0xAC7, 0xAC9, Script::Gujarati),
    (0xACA, 0xACA, Script::Unknown),
    (0xACB, 0xACD, Script::Gujarati),
    (0xACE, 0xACF, Script::Unknown),
    (0xAD0, 0xAD0, Script::Gujarati),
    (0xAD1, 0xADF, Script::Unknown),
    (0xAE0, 0xAE3, Script::Gujarati),
    (0xAE4, 0xAE5, Script::Unknown),
    (0xAE6, 0xAF1, Script::Gujarati),
    (0xAF2, 0xAF8, Script::Unknown),
    (0xAF9, 0xAFF, Script::Gujarati),
    (0xB00, 0xB00, Script::Unknown),
    (0xB01, 0xB03, Script::Oriya),
    (0xB04, 0xB04, Script::Unknown),
    (0xB05, 0xB0C, Script::Oriya),
    (0xB0D, 0xB0E, Script::Unknown),
    (0xB0F, 0xB10, Script::Oriya),
    (0xB11, 0xB12, Script::Unknown),
    (0xB13, 0xB28, Script::Oriya),
    (0xB29, 0xB29, Script::Unknown),
    (0xB2A, 0xB30, Script::Oriya),
    (0xB31, 0xB31, Script::Unknown),
    (0xB32, 0xB33, Script::Oriya),
    (0xB34, 0xB34, Script::Unknown),
    (0xB35, 0xB39, Script::Oriya),
    (0xB3A, 0xB3B, Script::Unknown),
    (0xB3C, 0xB44, Script::Oriya),
    (0xB45, 0xB46, Script::Unknown),
    (0xB47, 0xB48, Script::Oriya),
    (0xB49, 0xB4A, Script::Unknown),
    (0xB4B, 0xB4D, Script::Oriya),
    (0xB4E, 0xB54, Script::Unknown),
    (0xB55, 0xB57, Script::Oriya),
    (0xB58, 0xB5B, Script::Unknown),
    (0xB5C, 0xB5D, Script::Oriya),
    (0xB5E, 0xB5E, Script::Unknown),
    (0xB5F, 0xB63, Script::Oriya),
    (0xB64, 0xB65, Script::Unknown),
    (0xB66, 0xB77, Script::Oriya),
    (0xB78, 0xB81, Script::Unknown),
    (0xB82, 0xB83, Script::Tamil),
    (0xB84, 0xB84, Script::Unknown),
    (0xB85, 0xB8A, Script::Tamil),
    (0xB8B, 0xB8D, Script::Unknown),
    (0xB8E, 0xB90, Script::Tamil),
    (0xB91, 0xB91, Script::Unknown),
    (0xB92, 0xB95, Script::Tamil),
    (0xB96, 0xB98, Script::Unknown),
    (0xB99, 0xB9A, Script::Tamil),
    (0xB9B, 0xB9B, Script::Unknown),
    (0xB9C, 0xB9C, Script::Tamil),
    (0xB9D, 0xB9D, Script::Unknown),
    (0xB9E, 0xB9F, Script::Tamil),
    (0xBA0, 0xBA2, Script::Unknown),
    (0xBA3, 0xBA4, Script::Tamil),
    (0xBA5, 0xBA7, Script::Unknown),
    (0xBA8, 0xBAA, Script::Tamil),
    (0xBAB, 0xBAD, Script::Unknown),
    (0xBAE, 0xBB9, Script::Tamil),
    (0xBBA, 0xBBD, Script::Unknown),
    (0xBBE, 0xBC2, Script::Tamil),
    (0xBC3, 0xBC5, Script::Unknown),
    (0xBC6, 0xBC8, Script::Tamil),
    (0xBC9, 0xBC9, Script::Unknown),
    (0xBCA, 0xBCD, Script::Tamil),
    (0xBCE, 0xBCF, Script::Unknown),
    (0xBD0, 0xBD0, Script::Tamil),
    (0xBD1, 0xBD6, Script::Unknown),
    (0xBD7, 0xBD7, Script::Tamil),
    (0xBD8, 0xBE5, Script::Unknown),
    (0xBE6, 0xBFA, Script::Tamil),
    (0xBFB, 0xBFF, Script::Unknown),
    (0xC00, 0xC0C, Script::Telugu),
    (0xC0D, 0xC0D, Script::Unknown),
    (0xC0E, 0xC10, Script::Telugu),
    (0xC11, 0xC11, Script::Unknown),
    (0xC12, 0xC28, Script::Telugu),
    (0xC29, 0xC29, Script::Unknown),
    (0xC2A, 0xC39, Script::Telugu),
    (0xC3A, 0xC3B, Script::Unknown),
    (0xC3C, 0xC44, Script::Telugu),
    (0xC45, 0xC45, Script::Unknown),
    (0xC46, 0xC48, Script::Telugu),
    (0xC49, 0xC49, Script::Unknown),
    (0xC4A, 0xC4D, Script::Telugu),
    (0xC4E, 0xC54, Script::Unknown),
    (0xC55, 0xC56, Script::Telugu),
    (0xC57, 0xC57, Script::Unknown),
    (0xC58, 0xC5A, Script::Telugu),
    (0xC5B, 0xC5B, Script::Unknown),
    (0xC5C, 0xC5D, Script::Telugu),
    (0xC5E, 0xC5F, Script::Unknown),
    (0xC60, 0xC63, Script::Telugu),
    (0xC64, 0xC65, Script::Unknown),
    (0xC66, 0xC6F, Script::Telugu),
    (0xC70, 0xC76, Script::Unknown),
    (0xC77, 0xC7F, Script::Telugu),
    (0xC80, 0xC8C, Script::Kannada),
    (0xC8D, 0xC8D, Script::Unknown),
    (0xC8E, 0xC90, Script::Kannada),
    (0xC91, 0xC91, Script::Unknown),
    (0xC92, 0xCA8, Script::Kannada),
    (0xCA9, 0xCA9, Script::Unknown),
    (0xCAA, 0xCB3, Script::Kannada),
    (0xCB4, 0xCB4, Script::Unknown),
    (0xCB5, 0xCB9, Script::Kannada),
    (0xCBA, 0xCBB, Script::Unknown),
    (0xCBC, 0xCC4, Script::Kannada),
    (0xCC5, 0xCC5, Script::Unknown),
    (0xCC6, 0xCC8, Script::Kannada),
    (0xCC9, 0xCC9, Script::Unknown),
    (0xCCA, 0xCCD, Script::Kannada),
    (0xCCE, 0xCD4, Script::Unknown),
    (0xCD5, 0xCD6, Script::Kannada),
    (0xCD7, 0xCDB, Script::Unknown),
    (0xCDC, 0xCDE, Script::Kannada),
    (0xCDF, 0xCDF, Script::Unknown),
    (0xCE0, 0xCE3, Script::Kannada),
    (0xCE4, 0xCE5, Script::Unknown),
    (0xCE6, 0xCEF, Script::Kannada),
    (0xCF0, 0xCF0, Script::Unknown),
    (0xCF1, 0xCF3, Script::Kannada),
    (0xCF4, 0xCFF, Script::Unknown),
    (0xD00, 0xD0C, Script::Malayalam),
    (0xD0D, 0xD0D, Script::Unknown),
    (0xD0E, 0xD10, Script::Malayalam),
    (0xD11, 0xD11, Script::Unknown),
    (0xD12, 0xD44, Script::Malayalam),
    (0xD45, 0xD45, Script::Unknown),
    (0xD46, 0xD48, Script::Malayalam),
    (0xD49, 0xD49, Script::Unknown),
    (0xD4A, 0xD4F, Script::Malayalam),
    (0xD50, 0xD53, Script::Unknown),
    (0xD54, 0xD63, Script::Malayalam),
    (0xD64, 0xD65, Script::Unknown),
    (0xD66, 0xD7F, Script::Malayalam),
    (0xD80, 0xD80, Script::Unknown),
    (0xD81, 0xD83, Script::Sinhala),
    (0xD84, 0xD84, Script::Unknown),
    (0xD85, 0xD96, Script::Sinhala),
    (0xD97, 0xD99, Script::Unknown),
    (0xD9A, 0xDB1, Script::Sinhala),
    (0xDB2, 0xDB2, Script::Unknown),
    (0xDB3, 0xDBB, Script::Sinhala),
    (0xDBC, 0xDBC, Script::Unknown),
    (0xDBD, 0xDBD, Script::Sinhala),
    (0xDBE, 0xDBF, Script::Unknown),
    (0xDC0, 0xDC6, Script::Sinhala),
    (0xDC7, 0xDC9, Script::Unknown),
    (0xDCA, 0xDCA, Script::Sinhala),
    (0xDCB, 0xDCE, Script::Unknown),
    (0xDCF, 0xDD4, Script::Sinhala),
    (0xDD5, 0xDD5, Script::Unknown),
    (0xDD6, 0xDD6, Script::Sinhala),
    (0xDD7, 0xDD7, Script::Unknown),
    (0xDD8, 0xDDF, Script::Sinhala),
    (0xDE0, 0xDE5, Script::Unknown),
    (0xDE6, 0xDEF, Script::Sinhala),
    (0xDF0, 0xDF1, Script::Unknown),
    (0xDF2, 0xDF4, Script::Sinhala),
    (0xDF5, 0xE00, Script::Unknown),
    (0xE01, 0xE3A, Script::Thai),
    (0xE3B, 0xE3E, Script::Unknown),
    (0xE3F, 0xE3F, Script::Common),
    (0xE40, 0xE5B, Script::Thai),
    (0xE5C, 0xE80, Script::Unknown),
    (0xE81, 0xE82, Script::Lao),
    (0xE83, 0xE83, Script::Unknown),
    (0xE84, 0xE84, Script::Lao),
    (0xE85, 0xE85, Script::Unknown),
    (0xE86, 0xE8A, Script::Lao),
    (0xE8B, 0xE8B, Script::Unknown),
    (0xE8C, 0xEA3, Script::Lao),
    (0xEA4, 0xEA4, Script::Unknown),
    (0xEA5, 0xEA5, Script::Lao),
    (0xEA6, 0xEA6, Script::Unknown),
    (0xEA7, 0xEBD, Script::Lao),
    (0xEBE, 0xEBF, Script::Unknown),
    (0xEC0, 0xEC4, Script::Lao),
    (0xEC5, 0xEC5, Script::Unknown),
    (0xEC6, 0xEC6, Script::Lao),
    (0xEC7, 0xEC7, Script::Unknown),
    (0xEC8, 0xECE, Script::Lao),
    (0xECF, 0xECF, Script::Unknown),
    (0xED0, 0xED9, Script::Lao),
    (0xEDA, 0xEDB, Script::Unknown),
    (0xEDC, 0xEDF, Script::Lao),
    (0xEE0, 0xEFF, Script::Unknown),
    (0xF00, 0xF47, Script::Tibetan),
    (0xF48, 0xF48, Script::Unknown),
    (0xF49, 0xF6C, Script::Tibetan),
    (0xF6D, 0xF70, Script::Unknown),
    (0xF71, 0xF97, Script::Tibetan),
    (0xF98, 0xF98, Script::Unknown),
    (0xF99, 0xFBC, Script::Tibetan),
    (0xFBD, 0xFBD, Script::Unknown),
    (0xFBE, 0xFCC, Script::Tibetan),
    (0xFCD, 0xFCD, Script::Unknown),
    (0xFCE, 0xFD4, Script::Tibetan),
    (0xFD5, 0xFD8, Script::Common),
    (0xFD9, 0xFDA, Script::Tibetan),
    (0xFDB, 0xFFF, Script::Unknown),
    (0x1000, 0x109F, Script::Myanmar),
    (0x10A0, 0x10C5, Script::Georgian),
    (0x10C6, 0x10C6, Script::Unknown),
    (0x10C7, 0x10C7, Script::Georgian),
    (0x10C8, 0x10CC, Script::Unknown),
    (0x10CD, 0x10CD, Script::Georgian),
    (0x10CE, 0x10CF, Script::Unknown),
    (0x10D0, 0x10FA, Script::Georgian),
    (0x10FB, 0x10FB, Script::Common),
    (0x10FC, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul),
    (0x1200, 0x1248, Script::Ethiopic),
    (0x1249, 0x1249, Script::Unknown),
    (0x124A, 0x124D, Script::Ethiopic),
    (0x124E, 0x124F, Script::Unknown),
    (0x1250, 0x1256, Script::Ethiopic),
    (0x1257, 0x1257, Script::Unknown),
    (0x1258, 0x1258, Script::Ethiopic),
    (0x1259, 0x1259, Script::Unknown),
    (0x125A, 0x125D, Script::Ethiopic),
    (0x125E, 0x125F, Script::Unknown),
    (0x1260, 0x1288, Script::Ethiopic),
    (0x1289, 0x1289, Script::Unknown),
    (0x128A, 0x128D, Script::Ethiopic),
    (0x128E, 0x128F, Script::Unknown),
    (0x1290, 0x12B0, Script::Ethiopic),
    (0x12B1, 0x12B1, Script::Unknown),
    (0x12B2, 0x12B5, Script::Ethiopic),
    (0x12B6, 0x12B7, Script::Unknown),
    (0x12B8, 0x12BE, Script::Ethiopic),
    (0x12BF, 0x12BF, Script::Unknown),
    (0x12C0, 0x12C0, Script::Ethiopic),
    (0x12C1, 0x12C1, Script::Unknown),
    (0x12C2, 0x12C5, Script::Ethiopic),
    (0x12C6, 0x12C7, Script::Unknown),
    (0x12C8, 0x12D6, Script::Ethiopic),
    (0x12D7, 0x12D7, Script::Unknown),
    (0x12D8, 0x1310, Script::Ethiopic),
    (0x1311, 0x1311, Script::Unknown),
    (0x1312, 0x1315, Script::Ethiopic),
    (0x1316, 0x1317, Script::Unknown),
    (0x1318, 0x135A, Script::Ethiopic),
    (0x135B, 0x135C, Script::Unknown),
    (0x135D, 0x137C, Script::Ethiopic),
    (0x137D, 0x137F, Script::Unknown),
    (0x1380, 0x1399, Script::Ethiopic),
    (0x139A, 0x139F, Script::Unknown),
    (0x13A0, 0x13F5, Script::Cherokee),
    (0x13F6, 0x13F7, Script::Unknown),
    (0x13F8, 0x13FD, Script::Cherokee),
    (0x13FE, 0x13FF, Script::Unknown),
    (0x1400, 0x167F, Script::Canadian_Aboriginal),
    (0x1680, 0x169C, Script::Ogham),
    (0x169D, 0x169F, Script::Unknown),
    (0x16A0, 0x16EA, Script::Runic),
    (0x16EB, 0x16ED, Script::Common),
    (0x16EE, 0x16F8, Script::Runic),
    (0x16F9, 0x16FF, Script::Unknown),
    (0x1700, 0x1715, Script::Tagalog),
    (0x1716, 0x171E, Script::Unknown),
    (0x171F, 0x171F, Script::Tagalog),
    (0x1720, 0x1734, Script::Hanunoo),
    (0x1735, 0x1736, Script::Common),
    (0x1737, 0x173F, Script::Unknown),
    (0x1740, 0x1753, Script::Buhid),
    (0x1754, 0x175F, Script::Unknown),
    (0x1760, 0x176C, Script::Tagbanwa),
    (0x176D, 0x176D, Script::Unknown),
    (0x176E, 0x1770, Script::Tagbanwa),
    (0x1771, 0x1771, Script::Unknown),
    (0x1772, 0x1773, Script::Tagbanwa),
    (0x1774, 0x177F, Script::Unknown),
    (0x1780, 0x17DD, Script::Khmer),
    (0x17DE, 0x17DF, Script::Unknown),
    (0x17E0, 0x17E9, Script::Khmer),
    (0x17EA, 0x17EF, Script::Unknown),
    (0x17F0, 0x17F9, Script::Khmer),
    (0x17FA, 0x17FF, Script::Unknown),
    (0x1800, 0x1801, Script::Mongolian),
    (0x1802, 0x1803, Script::Common),
    (0x1804, 0x1804, Script::Mongolian),
    (0x1805, 0x1805, Script::Common),
    (0x1806, 0x1819, Script::Mongolian),
    (0x181A, 0x181F, Script::Unknown),
    (0x1820, 0x1878, Script::Mongolian),
    (0x1879, 0x187F, Script::Unknown),
    (0x1880, 0x18AA, Script::Mongolian),
    (0x18AB, 0x18AF, Script::Unknown),
    (0x18B0, 0x18F5, Script::Canadian_Aboriginal),
    (0x18F6, 0x18FF, Script::Unknown),
    (0x1900, 0x191E, Script::Limbu),
    (0x191F, 0x191F, Script::Unknown),
    (0x1920, 0x192B, Script::Limbu),
    (0x192C, 0x192F, Script::Unknown),
    (0x1930, 0x193B, Script::Limbu),
    (0x193C, 0x193F, Script::Unknown),
    (0x1940, 0x1940, Script::Limbu),
    (0x1941, 0x1943, Script::Unknown),
    (0x1944, 0x194F, Script::Limbu),
    (0x1950, 0x196D, Script::Tai_Le),
    (0x196E, 0x196F, Script::Unknown),
    (0x1970, 0x1974, Script::Tai_Le),
    (0x1975, 0x197F, Script::Unknown),
    (0x1980, 0x19AB, Script::New_Tai_Lue),
    (0x19AC, 0x19AF, Script::Unknown),
    (0x19B0, 0x19C9, Script::New_Tai_Lue),
    (0x19CA, 0x19CF, Script::Unknown),
    (0x19D0, 0x19DA, Script::New_Tai_Lue),
    (0x19DB, 0x19DD, Script::Unknown),
    (0x19DE, 0x19DF, Script::New_Tai_Lue),
    (0x19E0, 0x19FF, Script::Khmer),
    (0x1A00, 0x1A1B, Script::Buginese),
    (0x1A1C, 0x1A1D, Script::Unknown),
    (0x1A1E, 0x1A1F, Script::Buginese),
    (0x1A20, 0x1A5E, Script::Tai_Tham),
    (0x1A5F, 0x1A5F, Script::Unknown),
    (0x1A60, 0x1A7C, Script::Tai_Tham),
    (0x1A7D, 0x1A7E, Script::Unknown),
    (0x1A7F, 0x1A89, Script::Tai_Tham),
    (0x1A8A, 0x1A8F, Script::Unknown),
    (0x1A90, 0x1A99, Script::Tai_Tham),
    (0x1A9A, 0x1A9F, Script::Unknown),
    (0x1AA0, 0x1AAD, Script::Tai_Tham),
    (0x1AAE, 0x1AAF, Script::Unknown),
    (0x1AB0, 0x1ADD, Script::Inherited),
    (0x1ADE, 0x1ADF, Script::Unknown),
    (0x1AE0, 0x1AEB, Script::Inherited),
    (0x1AEC, 0x1AFF, Script::Unknown),
    (0x1B00, 0x1B4C, Script::Balinese),
    (0x1B4D, 0x1B4D, Script::Unknown),
    (0x1B4E, 0x1B7F, Script::Balinese),
    (0x1B80, 0x1BBF, Script::Sundanese),
    (0x1BC0, 0x1BF3, Script::Batak),
    (0x1BF4, 0x1BFB, Script::Unknown),
    (0x1BFC, 0x1BFF, Script::Batak),
    (0x1C00, 0x1C37, Script::Lepcha),
    (0x1C38, 0x1C3A, Script::Unknown),
    (0x1C3B, 0x1C49, Script::Lepcha),
    (0x1C4A, 0x1C4C, Script::Unknown),
    (0x1C4D, 0x1C4F, Script::Lepcha),
    (0x1C50, 0x1C7F, Script::Ol_Chiki),
    (0x1C80, 0x1C8A, Script::Cyrillic),
    (0x1C8B, 0x1C8F, Script::Unknown),
    (0x1C90, 0x1CBA, Script::Georgian),
    (0x1CBB, 0x1CBC, Script::Unknown),
    (0x1CBD, 0x1CBF, Script::Georgian),
    (0x1CC0, 0x1CC7, Script::Sundanese),
    (0x1CC8, 0x1CCF, Script::Unknown),
    (0x1CD0, 0x1CD2, Script::Inherited),
    (0x1CD3, 0x1CD3, Script::Common),
    (0x1CD4, 0x1CE0, Script::Inherited),
    (0x1CE1, 0x1CE1, Script::Common),
    (0x1CE2, 0x1CE8, Script::Inherited),
    (0x1CE9, 0x1CEC, Script::Common),
    (0x1CED, 0x1CED, Script::Inherited),
    (0x1CEE, 0x1CF3, Script::Common),
    (0x1CF4, 0x1CF4, Script::Inherited),
    (0x1CF5, 0x1CF7, Script::Common),
    (0x1CF8, 0x1CF9, Script::Inherited),
    (0x1CFA, 0x1CFA, Script::Common),
    (0x1CFB, 0x1CFF, Script::Unknown),
    (0x1D00, 0x1D25, Script::Latin),
    (0x1D26, 0x1D2A, Script::Greek),
    (0x1D2B, 0x1D2B, Script::Cyrillic),
    (0x1D2C, 0x1D5C, Script::Latin),
    (0x1D5D, 0x1D61, Script::Greek),
    (0x1D62, 0x1D65, Script::Latin),
    (0x1D66, 0x1D6A, Script::Greek),
    (0x1D6B, 0x1D77, Script::Latin),
    (0x1D78, 0x1D78, Script::Cyrillic),
    (0x1D79, 0x1DBE, Script::Latin),
    (0x1DBF, 0x1DBF, Script::Greek),
    (0x1DC0, 0x1DFF, Script::Inherited),
    (0x1E00, 0x1EFF, Script::Latin),
    (0x1F00, 0x1F15, Script::Greek),
    (0x1F16, 0x1F17, Script::Unknown),
    (0x1F18, 0x1F1D, Script::Greek),
    (0x1F1E, 0x1F1F, Script::Unknown),
    (0x1F20, 0x1F45, Script::Greek),
    (0x1F46, 0x1F47, Script::Unknown),
    (0x1F48, 0x1F4D, Script::Greek),
    (0x1F4E, 0x1F4F, Script::Unknown),
    (0x1F50, 0x1F57, Script::Greek),
    (0x1F58, 0x1F58, Script::Unknown),
    (0x1F59, 0x1F59, Script::Greek),
    (0x1F5A, 0x1F5A, Script::Unknown),
    (0x1F5B, 0x1F5B, Script::Greek),
    (0x1F5C, 0x1F5C, Script::Unknown),
    (0x1F5D, 0x1F5D, Script::Greek),
    (0x1F5E, 0x1F5E, Script::Unknown),
    (0x1F5F, 0x1F7D, Script::Greek),
    (0x1F7E, 0x1F7F, Script::Unknown),
    (0x1F80, 0x1FB4, Script::Greek),
    (0x1FB5, 0x1FB5, Script::Unknown),
    (0x1FB6, 0x1FC4, Script::Greek),
    (0x1FC5, 0x1FC5, Script::Unknown),
    (0x1FC6, 0x1FD3, Script::Greek),
    (0x1FD4, 0x1FD5, Script::Unknown),
    (0x1FD6, 0x1FDB, Script::Greek),
    (0x1FDC, 0x1FDC, Script::Unknown),
    (0x1FDD, 0x1FEF, Script::Greek),
    (0x1FF0, 0x1FF1, Script::Unknown),
    (0x1FF2, 0x1FF4, Script::Greek),
    (0x1FF5, 0x1FF5, Script::Unknown),
    (0x1FF6, 0x1FFE, Script::Greek),
    (0x1FFF, 0x1FFF, Script::Unknown),
    (0x2000, 0x200B, Script::Common),
    (0x200C, 0x200D, Script::Inherited),
    (0x200E, 0x2064, Script::Common),
    (0x2065, 0x2065, Script::Unknown),
    (0x2066, 0x2070, Script::Common),
    (0x2071, 0x2071, Script::Latin),
    (0x2072, 0x2073, Script::Unknown),
    (0x2074, 0x207E, Script::Common),
    (0x207F, 0x207F, Script::Latin),
    (0x2080, 0x208E, Script::Common),
    (0x208F, 0x208F, Script::Unknown),
    (0x2090, 0x209C, Script::Latin),
    (0x209D, 0x209F, Script::Unknown),
    (0x20A0, 0x20C1, Script::Common),
    (0x20C2, 0x20CF, Script::Unknown),
    (0x20D0, 0x20F0, Script::Inherited),
    (0x20F1, 0x20FF, Script::Unknown),
    (0x2100, 0x2125, Script::Common),
    (0x2126, 0x2126, Script::Greek),
    (0x2127, 0x2129, Script::Common),
    (0x212A, 0x212B, Script::Latin),
    (0x212C, 0x2131, Script::Common),
    (0x2132, 0x2132, Script::Latin),
    (0x2133, 0x214D, Script::Common),
    (0x214E, 0x214E, Script::Latin),
    (0x214F, 0x215F, Script::Common),
    (0x2160, 0x2188, Script::Latin),
    (0x2189, 0x218B, Script::Common),
    (0x218C, 0x218F, Script::Unknown),
    (0x2190, 0x2429, Script::Common),
    (0x242A, 0x243F, Script::Unknown),
    (0x2440, 0x244A, Script::Common),
    (0x244B, 0x245F, Script::Unknown),
    (0x2460, 0x27FF, Script::Common),
    (0x2800, 0x28FF, Script::Braille),
    (0x2900, 0x2B73, Script::Common),
    (0x2B74, 0x2B75, Script::Unknown),
    (0x2B76, 0x2BFF, Script::Common),
    (0x2C00, 0x2C5F, Script::Glagolitic),
    (0x2C60, 0x2C7F, Script::Latin),
    (0x2C80, 0x2CF3, Script::Coptic),
    (0x2CF4, 0x2CF8, Script::Unknown),
    (0x2CF9, 0x2CFF, Script::Coptic),
    (0x2D00, 0x2D25, Script::Georgian),
    (0x2D26, 0x2D26, Script::Unknown),
    (0x2D27, 0x2D27, Script::Georgian),
    (0x2D28, 0x2D2C, Script::Unknown),
    (0x2D2D, 0x2D2D, Script::Georgian),
    (0x2D2E, 0x2D2F, Script::Unknown),
    (0x2D30, 0x2D67, Script::Tifinagh),
    (0x2D68, 0x2D6E, Script::Unknown),
    (0x2D6F, 0x2D70, Script::Tifinagh),
    (0x2D71, 0x2D7E, Script::Unknown),
    (0x2D7F, 0x2D7F, Script::Tifinagh),
    (0x2D80, 0x2D96, Script::Ethiopic),
    (0x2D97, 0x2D9F, Script::Unknown),
    (0x2DA0, 0x2DA6, Script::Ethiopic),
    (0x2DA7, 0x2DA7, Script::Unknown),
    (0x2DA8, 0x2DAE, Script::Ethiopic),
    (0x2DAF, 0x2DAF, Script::Unknown),
    (0x2DB0, 0x2DB6, Script::Ethiopic),
    (0x2DB7, 0x2DB7, Script::Unknown),
    (0x2DB8, 0x2DBE, Script::Ethiopic),
    (0x2DBF, 0x2DBF, Script::Unknown),
    (0x2DC0, 0x2DC6, Script::Ethiopic),
    (0x2DC7, 0x2DC7, Script::Unknown),
    (0x2DC8, 0x2DCE, Script::Ethiopic),
    (0x2DCF, 0x2DCF, Script::Unknown),
    (0x2DD0, 0x2DD6, Script::Ethiopic),
    (0x2DD7, 0x2DD7, Script::Unknown),
    (0x2DD8, 0x2DDE, Script::Ethiopic),
    (0x2DDF, 0x2DDF, Script::Unknown),
    (0x2DE0, 0x2DFF, Script::Cyrillic),
    (0x2E00, 0x2E5D, Script::Common),
    (0x2E5E, 0x2E7F, Script::Unknown),
    (0x2E80, 0x2E99, Script::Han),
    (0x2E9A, 0x2E9A, Script::Unknown),
    (0x2E9B, 0x2EF3, Script::Han),
    (0x2EF4, 0x2EFF, Script::Unknown),
    (0x2F00, 0x2FD5, Script::Han),
    (0x2FD6, 0x2FEF, Script::Unknown),
    (0x2FF0, 0x3004, Script::Common),
    (0x3005, 0x3005, Script::Han),
    (0x3006, 0x3006, Script::Common),
    (0x3007, 0x3007, Script::Han),
    (0x3008, 0x3020, Script::Common),
    (0x3021, 0x3029, Script::Han),
    (0x302A, 0x302D, Script::Inherited),
    (0x302E, 0x302F, Script::Hangul),
    (0x3030, 0x3037, Script::Common),
    (0x3038, 0x303B, Script::Han),
    (0x303C, 0x303F, Script::Common),
    (0x3040, 0x3040, Script::Unknown),
    (0x3041, 0x3096, Script::Hiragana),
    (0x3097, 0x3098, Script::Unknown),
    (0x3099, 0x309A, Script::Inherited),
    (0x309B, 0x309C, Script::Common),
    (0x309D, 0x309F, Script::Hiragana),
    (0x30A0, 0x30A0, Script::Common),
    (0x30A1, 0x30FA, Script::Katakana),
    (0x30FB, 0x30FC, Script::Common),
    (0x30FD, 0x30FF, Script::Katakana),
    (0x3100, 0x3104, Script::Unknown),
    (0x3105, 0x312F, Script::Bopomofo),
    (0x3130, 0x3130, Script::Unknown),
    (0x3131, 0x318E, Script::Hangul),
    (0x318F, 0x318F, Script::Unknown),
    (0x3190, 0x319F, Script::Common),
    (0x31A0, 0x31BF, Script::Bopomofo),
    (0x31C0, 0x31E5, Script::Common),
    (0x31E6, 0x31EE, Script::Unknown),
    (0x31EF, 0x31EF, Script::Common),
    (0x31F0, 0x31FF, Script::Katakana),
    (0x3200, 0x321E, Script::Hangul),
    (0x321F, 0x321F, Script::Unknown),
    (0x3220, 0x325F, Script::Common),
    (0x3260, 0x327E, Script::Hangul),
    (0x327F, 0x32CF, Script::Common),
    (0x32D0, 0x32FE, Script::Katakana),
    (0x32FF, 0x32FF, Script::Common),
    (0x3300, 0x3357, Script::Katakana),
    (0x3358, 0x33FF, Script::Common),
    (0x3400, 0x4DBF, Script::Han),
    (0x4DC0, 0x4DFF, Script::Common),
    (0x4E00, 0x9FFF, Script::Han),
    (0xA000, 0xA48C, Script::Yi),
    (0xA48D, 0xA48F, Script::Unknown),
    (0xA490, 0xA4C6, Script::Yi),
    (0xA4C7, 0xA4CF, Script::Unknown),
    (0xA4D0, 0xA4FF, Script::Lisu),
    (0xA500, 0xA62B, Script::Vai),
    (0xA62C, 0xA63F, Script::Unknown),
    (0xA640, 0xA69F, Script::Cyrillic),
    (0xA6A0, 0xA6F7, Script::Bamum),
    (0xA6F8, 0xA6FF, Script::Unknown),
    (0xA700, 0xA721, Script::Common),
    (0xA722, 0xA787, Script::Latin),
    (0xA788, 0xA78A, Script::Common),
    (0xA78B, 0xA7DC, Script::Latin),
    (0xA7DD, 0xA7F0, Script::Unknown),
    (0xA7F1, 0xA7FF, Script::Latin),
    (0xA800, 0xA82C, Script::Syloti_Nagri),
    (0xA82D, 0xA82F, Script::Unknown),
    (0xA830, 0xA839, Script::Common),
    (0xA83A, 0xA83F, Script::Unknown),
    (0xA840, 0xA877, Script::Phags_Pa),
    (0xA878, 0xA87F, Script::Unknown),
    (0xA880, 0xA8C5, Script::Saurashtra),
    (0xA8C6, 0xA8CD, Script::Unknown),
    (0xA8CE, 0xA8D9, Script::Saurashtra),
    (0xA8DA, 0xA8DF, Script::Unknown),
    (0xA8E0, 0xA8FF, Script::Devanagari),
    (0xA900, 0xA92D, Script::Kayah_Li),
    (0xA92E, 0xA92E, Script::Common),
    (0xA92F, 0xA92F, Script::Kayah_Li),
    (0xA930, 0xA953, Script::Rejang),
    (0xA954, 0xA95E, Script::Unknown),
    (0xA95F, 0xA95F, Script::Rejang),
    (0xA960, 0xA97C, Script::Hangul),
    (0xA97D, 0xA97F, Script::Unknown),
    (0xA980, 0xA9CD, Script::Javanese),
    (0xA9CE, 0xA9CE, Script::Unknown),
    (0xA9CF, 0xA9CF, Script::Common),
    (0xA9D0, 0xA9D9, Script::Javanese),
    (0xA9DA, 0xA9DD, Script::Unknown),
    (0xA9DE, 0xA9DF, Script::Javanese),
    (0xA9E0, 0xA9FE, Script::Myanmar),
    (0xA9FF, 0xA9FF, Script::Unknown),
    (0xAA00, 0xAA36, Script::Cham),
    (0xAA37, 0xAA3F, Script::Unknown),
    (0xAA40, 0xAA4D, Script::Cham),
    (0xAA4E, 0xAA4F, Script::Unknown),
    (0xAA50, 0xAA59, Script::Cham),
    (0xAA5A, 0xAA5B, Script::Unknown),
    (0xAA5C, 0xAA5F, Script::Cham),
    (0xAA60, 0xAA7F, Script::Myanmar),
    (0xAA80, 0xAAC2, Script::Tai_Viet),
    (0xAAC3, 0xAADA, Script::Unknown),
    (0xAADB, 0xAADF, Script::Tai_Viet),
    (0xAAE0, 0xAAF6, Script::Meetei_Mayek),
    (0xAAF7, 0xAB00, Script::Unknown),
    (0xAB01, 0xAB06, Script::Ethiopic),
    (0xAB07, 0xAB08, Script::Unknown),
    (0xAB09, 0xAB0E, Script::Ethiopic),
    (0xAB0F, 0xAB10, Script::Unknown),
    (0xAB11, 0xAB16, Script::Ethiopic),
    (0xAB17, 0xAB1F, Script::Unknown),
    (0xAB20, 0xAB26, Script::Ethiopic),
    (0xAB27, 0xAB27, Script::Unknown),
    (0xAB28, 0xAB2E, Script::Ethiopic),
    (0xAB2F, 0xAB2F, Script::Unknown),
    (0xAB30, 0xAB5A, Script::Latin),
    (0xAB5B, 0xAB5B, Script::Common),
    (0xAB5C, 0xAB64, Script::Latin),
    (0xAB65, 0xAB65, Script::Greek),
    (0xAB66, 0xAB69, Script::Latin),
    (0xAB6A, 0xAB6B, Script::Common),
    (0xAB6C, 0xAB6F, Script::Unknown),
    (0xAB70, 0xABBF, Script::Cherokee),
    (0xABC0, 0xABED, Script::Meetei_Mayek),
    (0xABEE, 0xABEF, Script::Unknown),
    (0xABF0, 0xABF9, Script::Meetei_Mayek),
    (0xABFA, 0xABFF, Script::Unknown),
    (0xAC00, 0xD7A3, Script::Hangul),
    (0xD7A4, 0xD7AF, Script::Unknown),
    (0xD7B0, 0xD7C6, Script::Hangul),
    (0xD7C7, 0xD7CA, Script::Unknown),
    (0xD7CB, 0xD7FB, Script::Hangul),
    (0xD7FC, 0xD7FF, Script::Unknown),
    (0xD800, 0xDFFF, Script::Common),
    (0xE000, 0xF8FF, Script::Unknown),
    (0xF900, 0xFA6D, Script::Han),
    (0xFA6E, 0xFA6F, Script::Unknown),
    (0xFA70, 0xFAD9, Script::Han),
    (0xFADA, 0xFAFF, Script::Unknown),
    (0xFB00, 0xFB06, Script::Latin),
    (0xFB07, 0xFB12, Script::Unknown),
    (0xFB13, 0xFB17, Script::Armenian),
    (0xFB18, 0xFB1C, Script::Unknown),
    (0xFB1D, 0xFB36, Script::Hebrew),
    (0xFB37, 0xFB37, Script::Unknown),
    (0xFB38, 0xFB3C, Script::Hebrew),
    (0xFB3D, 0xFB3D, Script::Unknown),
    (0xFB3E, 0xFB3E, Script::Hebrew),
    (0xFB3F, 0xFB3F, Script::Unknown),
    (0xFB40, 0xFB41, Script::Hebrew),
    (0xFB42, 0xFB42, Script::Unknown),
    (0xFB43, 0xFB44, Script::Hebrew),
    (0xFB45, 0xFB45, Script::Unknown),
    (0xFB46, 0xFB4F, Script::Hebrew),
    (0xFB50, 0xFD3D, Script::Arabic),
    (0xFD3E, 0xFD3F, Script::Common),
    (0xFD40, 0xFDCF, Script::Arabic),
    (0xFDD0, 0xFDEF, Script::Unknown),
    (0xFDF0, 0xFDFF, Script::Arabic),
    (0xFE00, 0xFE0F, Script::Inherited),
    (0xFE10, 0xFE19, Script::Common),
    (0xFE1A, 0xFE1F, Script::Unknown),
    (0xFE20, 0xFE2D, Script::Inherited),
    (0xFE2E, 0xFE2F, Script::Cyrillic),
    (0xFE30, 0xFE52, Script::Common),
    (0xFE53, 0xFE53, Script::Unknown),
    (0xFE54, 0xFE66, Script::Common),
    (0xFE67, 0xFE67, Script::Unknown),
    (0xFE68, 0xFE6B, Script::Common),
    (0xFE6C, 0xFE6F, Script::Unknown),
    (0xFE70, 0xFE74, Script::Arabic),
    (0xFE75, 0xFE75, Script::Unknown),
    (0xFE76, 0xFEFC, Script::Arabic),
    (0xFEFD, 0xFEFE, Script::Unknown),
    (0xFEFF, 0xFEFF, Script::Common),
    (0xFF00, 0xFF00, Script::Unknown),
    (0xFF01, 0xFF20, Script::Common),
    (0xFF21, 0xFF3A, Script::Latin),
    (0xFF3B, 0xFF40, Script::Common),
    (0xFF41, 0xFF5A, Script::Latin),
    (0xFF5B, 0xFF65, Script::Common),
    (0xFF66, 0xFF6F, Script::Katakana),
    (0xFF70, 0xFF70, Script::Common),
    (0xFF71, 0xFF9D, Script::Katakana),
    (0xFF9E, 0xFF9F, Script::Common),
    (0xFFA0, 0xFFBE, Script::Hangul),
    (0xFFBF, 0xFFC1, Script::Unknown),
    (0xFFC2, 0xFFC7, Script::Hangul),
    (0xFFC8, 0xFFC9, Script::Unknown),
    (0xFFCA, 0xFFCF, Script::Hangul),
    (0xFFD0, 0xFFD1, Script::Unknown),
    (0xFFD2, 0xFFD7, Script::Hangul),
    (0xFFD8, 0xFFD9, Script::Unknown),
    (0xFFDA, 0xFFDC, Script::Hangul),
    (0xFFDD, 0xFFDF, Script::Unknown),
    (0xFFE0, 0xFFE6, Script::Common),
    (0xFFE7, 0xFFE7, Script::Unknown),
    (0xFFE8, 0xFFEE, Script::Common),
    (0xFFEF, 0xFFF8, Script::Unknown),
    (0xFFF9, 0xFFFD, Script::Common),
    (0xFFFE, 0xFFFF, Script::Unknown),
    (0x10000, 0x1000B, Script::Linear_B),
    (0x1000C, 0x1000C, Script::Unknown),
    (0x1000D, 0x10026, Script::Linear_B),
    (0x10027, 0x10027, Script::Unknown),
    (0x10028, 0x1003A, Script::Linear_B),
    (0x1003B, 0x1003B, Script::Unknown),
    (0x1003C, 0x1003D, Script::Linear_B),
    (0x1003E, 0x1003E, Script::Unknown),
    (0x1003F, 0x1004D, Script::Linear_B),
    (0x1004E, 0x1004F, Script::Unknown),
    (0x10050, 0x1005D, Script::Linear_B),
    (0x1005E, 0x1007F, Script::Unknown),
    (0x10080, 0x100FA, Script::Linear_B),
    (0x100FB, 0x100FF, Script::Unknown),
    (0x10100, 0x10102, Script::Common),
    (0x10103, 0x10106, Script::Unknown),
    (0x10107, 0x10133, Script::Common),
    (0x10134, 0x10136, Script::Unknown),
    (0x10137, 0x1013F, Script::Common),
    (0x10140, 0x1018E, Script::Greek),
    (0x1018F, 0x1018F, Script::Unknown),
    (0x10190, 0x1019C, Script::Common),
    (0x1019D, 0x1019F, Script::Unknown),
    (0x101A0, 0x101A0, Script::Greek),
    (0x101A1, 0x101CF, Script::Unknown),
    (0x101D0, 0x101FC, Script::Common),
    (0x101FD, 0x101FD, Script::Inherited),
    (0x101FE, 0x102DF, Script::Unknown),
    (0x102E0, 0x102E0, Script::Inherited),
    (0x102E1, 0x102FB, Script::Common),
    (0x102FC, 0x102FF, Script::Unknown),
    (0x10300, 0x10323, Script::Old_Italic),
    (0x10324, 0x1032C, Script::Unknown),
    (0x1032D, 0x1032F, Script::Old_Italic),
    (0x10330, 0x1034A, Script::Gothic),
    (0x1034B, 0x1037F, Script::Unknown),
    (0x10380, 0x1039D, Script::Ugaritic),
    (0x1039E, 0x1039E, Script::Unknown),
    (0x1039F, 0x1039F, Script::Ugaritic),
    (0x103A0, 0x103C3, Script::Old_Persian),
    (0x103C4, 0x103C7, Script::Unknown),
    (0x103C8, 0x103D5, Script::Old_Persian),
    (0x103D6, 0x103FF, Script::Unknown),
    (0x10400, 0x1044F, Script::Deseret),
    (0x10450, 0x1047F, Script::Shavian),
    (0x10480, 0x1049D, Script::Osmanya),
    (0x1049E, 0x1049F, Script::Unknown),
    (0x104A0, 0x104A9, Script::Osmanya),
    (0x104AA, 0x1077F, Script::Unknown),
    (0x10780, 0x10785, Script::Latin),
    (0x10786, 0x10786, Script::Unknown),
    (0x10787, 0x107B0, Script::Latin),
    (0x107B1, 0x107B1, Script::Unknown),
    (0x107B2, 0x107BA, Script::Latin),
    (0x107BB, 0x107FF, Script::Unknown),
    (0x10800, 0x10805, Script::Cypriot),
    (0x10806, 0x10807, Script::Unknown),
    (0x10808, 0x10808, Script::Cypriot),
    (0x10809, 0x10809, Script::Unknown),
    (0x1080A, 0x10835, Script::Cypriot),
    (0x10836, 0x10836, Script::Unknown),
    (0x10837, 0x10838, Script::Cypriot),
    (0x10839, 0x1083B, Script::Unknown),
    (0x1083C, 0x1083C, Script::Cypriot),
    (0x1083D, 0x1083E, Script::Unknown),
    (0x1083F, 0x1083F, Script::Cypriot),
    (0x10840, 0x10855, Script::Imperial_Aramaic),
    (0x10856, 0x10856, Script::Unknown),
    (0x10857, 0x1085F, Script::Imperial_Aramaic),
    (0x10860, 0x108FF, Script::Unknown),
    (0x10900, 0x1091B, Script::Phoenician),
    (0x1091C, 0x1091E, Script::Unknown),
    (0x1091F, 0x1091F, Script::Phoenician),
    (0x10920, 0x1097F, Script::Unknown),
    (0x10980, 0x1099F, Script::Meroitic_Hieroglyphs),
    (0x109A0, 0x109B7, Script::Meroitic_Cursive),
    (0x109B8, 0x109BB, Script::Unknown),
    (0x109BC, 0x109CF, Script::Meroitic_Cursive),
    (0x109D0, 0x109D1, Script::Unknown),
    (0x109D2, 0x109FF, Script::Meroitic_Cursive),
    (0x10A00, 0x10A03, Script::Kharoshthi),
    (0x10A04, 0x10A04, Script::Unknown),
    (0x10A05, 0x10A06, Script::Kharoshthi),
    (0x10A07, 0x10A0B, Script::Unknown),
    (0x10A0C, 0x10A13, Script::Kharoshthi),
    (0x10A14, 0x10A14, Script::Unknown),
    (0x10A15, 0x10A17, Script::Kharoshthi),
    (0x10A18, 0x10A18, Script::Unknown),
    (0x10A19, 0x10A35, Script::Kharoshthi),
    (0x10A36, 0x10A37, Script::Unknown),
    (0x10A38, 0x10A3A, Script::Kharoshthi),
    (0x10A3B, 0x10A3E, Script::Unknown),
    (0x10A3F, 0x10A48, Script::Kharoshthi),
    (0x10A49, 0x10A4F, Script::Unknown),
    (0x10A50, 0x10A58, Script::Kharoshthi),
    (0x10A59, 0x10A5F, Script::Unknown),
    (0x10A60, 0x10A7F, Script::Old_South_Arabian),
    (0x10A80, 0x10AFF, Script::Unknown),
    (0x10B00, 0x10B35, Script::Avestan),
    (0x10B36, 0x10B38, Script::Unknown),
    (0x10B39, 0x10B3F, Script::Avestan),
    (0x10B40, 0x10B55, Script::Inscriptional_Parthian),
    (0x10B56, 0x10B57, Script::Unknown),
    (0x10B58, 0x10B5F, Script::Inscriptional_Parthian),
    (0x10B60, 0x10B72, Script::Inscriptional_Pahlavi),
    (0x10B73, 0x10B77, Script::Unknown),
    (0x10B78, 0x10B7F, Script::Inscriptional_Pahlavi),
    (0x10B80, 0x10BFF, Script::Unknown),
    (0x10C00, 0x10C48, Script::Old_Turkic),
    (0x10C49, 0x10E5F, Script::Unknown),
    (0x10E60, 0x10E7E, Script::Arabic),
    (0x10E7F, 0x10EC1, Script::Unknown),
    (0x10EC2, 0x10EC7, Script::Arabic),
    (0x10EC8, 0x10ECF, Script::Unknown),
    (0x10ED0, 0x10ED8, Script::Arabic),
    (0x10ED9, 0x10EF9, Script::Unknown),
    (0x10EFA, 0x10EFF, Script::Arabic),
    (0x10F00, 0x10FFF, Script::Unknown),
    (0x11000, 0x1104D, Script::Brahmi),
    (0x1104E, 0x11051, Script::Unknown),
    (0x11052, 0x11075, Script::Brahmi),
    (0x11076, 0x1107E, Script::Unknown),
    (0x1107F, 0x1107F, Script::Brahmi),
    (0x11080, 0x110C2, Script::Kaithi),
    (0x110C3, 0x110CC, Script::Unknown),
    (0x110CD, 0x110CD, Script::Kaithi),
    (0x110CE, 0x110CF, Script::Unknown),
    (0x110D0, 0x110E8, Script::Sora_Sompeng),
    (0x110E9, 0x110EF, Script::Unknown),
    (0x110F0, 0x110F9, Script::Sora_Sompeng),
    (0x110FA, 0x110FF, Script::Unknown),
    (0x11100, 0x11134, Script::Chakma),
    (0x11135, 0x11135, Script::Unknown),
    (0x11136, 0x11147, Script::Chakma),
    (0x11148, 0x1117F, Script::Unknown),
    (0x11180, 0x111DF, Script::Sharada),
    (0x111E0, 0x111E0, Script::Unknown),
    (0x111E1, 0x111F4, Script::Sinhala),
    (0x111F5, 0x1133A, Script::Unknown),
    (0x1133B, 0x1133B, Script::Inherited),
    (0x1133C, 0x1165F, Script::Unknown),
    (0x11660, 0x1166C, Script::Mongolian),
    (0x1166D, 0x1167F, Script::Unknown),
    (0x11680, 0x116B9, Script::Takri),
    (0x116BA, 0x116BF, Script::Unknown),
    (0x116C0, 0x116C9, Script::Takri),
    (0x116CA, 0x116CF, Script::Unknown),
    (0x116D0, 0x116E3, Script::Myanmar),
    (0x116E4, 0x11AAF, Script::Unknown),
    (0x11AB0, 0x11ABF, Script::Canadian_Aboriginal),
    (0x11AC0, 0x11AFF, Script::Unknown),
    (0x11B00, 0x11B09, Script::Devanagari),
    (0x11B0A, 0x11B5F, Script::Unknown),
    (0x11B60, 0x11B67, Script::Sharada),
    (0x11B68, 0x11FAF, Script::Unknown),
    (0x11FB0, 0x11FB0, Script::Lisu),
    (0x11FB1, 0x11FBF, Script::Unknown),
    (0x11FC0, 0x11FF1, Script::Tamil),
    (0x11FF2, 0x11FFE, Script::Unknown),
    (0x11FFF, 0x11FFF, Script::Tamil),
    (0x12000, 0x12399, Script::Cuneiform),
    (0x1239A, 0x123FF, Script::Unknown),
    (0x12400, 0x1246E, Script::Cuneiform),
    (0x1246F, 0x1246F, Script::Unknown),
    (0x12470, 0x12474, Script::Cuneiform),
    (0x12475, 0x1247F, Script::Unknown),
    (0x12480, 0x12543, Script::Cuneiform),
    (0x12544, 0x12FFF, Script::Unknown),
    (0x13000, 0x13455, Script::Egyptian_Hieroglyphs),
    (0x13456, 0x1345F, Script::Unknown),
    (0x13460, 0x143FA, Script::Egyptian_Hieroglyphs),
    (0x143FB, 0x167FF, Script::Unknown),
    (0x16800, 0x16A38, Script::Bamum),
    (0x16A39, 0x16EFF, Script::Unknown),
    (0x16F00, 0x16F4A, Script::Miao),
    (0x16F4B, 0x16F4E, Script::Unknown),
    (0x16F4F, 0x16F87, Script::Miao),
    (0x16F88, 0x16F8E, Script::Unknown),
    (0x16F8F, 0x16F9F, Script::Miao),
    (0x16FA0, 0x16FE1, Script::Unknown),
    (0x16FE2, 0x16FE3, Script::Han),
    (0x16FE4, 0x16FEF, Script::Unknown),
    (0x16FF0, 0x16FF6, Script::Han),
    (0x16FF7, 0x1AFEF, Script::Unknown),
    (0x1AFF0, 0x1AFF3, Script::Katakana),
    (0x1AFF4, 0x1AFF4, Script::Unknown),
    (0x1AFF5, 0x1AFFB, Script::Katakana),
    (0x1AFFC, 0x1AFFC, Script::Unknown),
    (0x1AFFD, 0x1AFFE, Script::Katakana),
    (0x1AFFF, 0x1AFFF, Script::Unknown),
    (0x1B000, 0x1B000, Script::Katakana),
    (0x1B001, 0x1B11F, Script::Hiragana),
    (0x1B120, 0x1B122, Script::Katakana),
    (0x1B123, 0x1B131, Script::Unknown),
    (0x1B132, 0x1B132, Script::Hiragana),
    (0x1B133, 0x1B14F, Script::Unknown),
    (0x1B150, 0x1B152, Script::Hiragana),
    (0x1B153, 0x1B154, Script::Unknown),
    (0x1B155, 0x1B155, Script::Katakana),
    (0x1B156, 0x1B163, Script::Unknown),
    (0x1B164, 0x1B167, Script::Katakana),
    (0x1B168, 0x1BC9F, Script::Unknown),
    (0x1BCA0, 0x1BCA3, Script::Common),
    (0x1BCA4, 0x1CBFF, Script::Unknown),
    (0x1CC00, 0x1CCFC, Script::Common),
    (0x1CCFD, 0x1CCFF, Script::Unknown),
    (0x1CD00, 0x1CEB3, Script::Common),
    (0x1CEB4, 0x1CEB9, Script::Unknown),
    (0x1CEBA, 0x1CED0, Script::Common),
    (0x1CED1, 0x1CEDF, Script::Unknown),
    (0x1CEE0, 0x1CEF0, Script::Common),
    (0x1CEF1, 0x1CEFF, Script::Unknown),
    (0x1CF00, 0x1CF2D, Script::Inherited),
    (0x1CF2E, 0x1CF2F, Script::Unknown),
    (0x1CF30, 0x1CF46, Script::Inherited),
    (0x1CF47, 0x1CF4F, Script::Unknown),
    (0x1CF50, 0x1CFC3, Script::Common),
    (0x1CFC4, 0x1CFFF, Script::Unknown),
    (0x1D000, 0x1D0F5, Script::Common),
    (0x1D0F6, 0x1D0FF, Script::Unknown),
    (0x1D100, 0x1D126, Script::Common),
    (0x1D127, 0x1D128, Script::Unknown),
    (0x1D129, 0x1D166, Script::Common),
    (0x1D167, 0x1D169, Script::Inherited),
    (0x1D16A, 0x1D17A, Script::Common),
    (0x1D17B, 0x1D182, Script::Inherited),
    (0x1D183, 0x1D184, Script::Common),
    (0x1D185, 0x1D18B, Script::Inherited),
    (0x1D18C, 0x1D1A9, Script::Common),
    (0x1D1AA, 0x1D1AD, Script::Inherited),
    (0x1D1AE, 0x1D1EA, Script::Common),
    (0x1D1EB, 0x1D1FF, Script::Unknown),
    (0x1D200, 0x1D245, Script::Greek),
    (0x1D246, 0x1D2BF, Script::Unknown),
    (0x1D2C0, 0x1D2D3, Script::Common),
    (0x1D2D4, 0x1D2DF, Script::Unknown),
    (0x1D2E0, 0x1D2F3, Script::Common),
    (0x1D2F4, 0x1D2FF, Script::Unknown),
    (0x1D300, 0x1D356, Script::Common),
    (0x1D357, 0x1D35F, Script::Unknown),
    (0x1D360, 0x1D378, Script::Common),
    (0x1D379, 0x1D3FF, Script::Unknown),
    (0x1D400, 0x1D454, Script::Common),
    (0x1D455, 0x1D455, Script::Unknown),
    (0x1D456, 0x1D49C, Script::Common),
    (0x1D49D, 0x1D49D, Script::Unknown),
    (0x1D49E, 0x1D49F, Script::Common),
    (0x1D4A0, 0x1D4A1, Script::Unknown),
    (0x1D4A2, 0x1D4A2, Script::Common),
    (0x1D4A3, 0x1D4A4, Script::Unknown),
    (0x1D4A5, 0x1D4A6, Script::Common),
    (0x1D4A7, 0x1D4A8, Script::Unknown),
    (0x1D4A9, 0x1D4AC, Script::Common),
    (0x1D4AD, 0x1D4AD, Script::Unknown),
    (0x1D4AE, 0x1D4B9, Script::Common),
    (0x1D4BA, 0x1D4BA, Script::Unknown),
    (0x1D4BB, 0x1D4BB, Script::Common),
    (0x1D4BC, 0x1D4BC, Script::Unknown),
    (0x1D4BD, 0x1D4C3, Script::Common),
    (0x1D4C4, 0x1D4C4, Script::Unknown),
    (0x1D4C5, 0x1D505, Script::Common),
    (0x1D506, 0x1D506, Script::Unknown),
    (0x1D507, 0x1D50A, Script::Common),
    (0x1D50B, 0x1D50C, Script::Unknown),
    (0x1D50D, 0x1D514, Script::Common),
    (0x1D515, 0x1D515, Script::Unknown),
    (0x1D516, 0x1D51C, Script::Common),
    (0x1D51D, 0x1D51D, Script::Unknown),
    (0x1D51E, 0x1D539, Script::Common),
    (0x1D53A, 0x1D53A, Script::Unknown),
    (0x1D53B, 0x1D53E, Script::Common),
    (0x1D53F, 0x1D53F, Script::Unknown),
    (0x1D540, 0x1D544, Script::Common),
    (0x1D545, 0x1D545, Script::Unknown),
    (0x1D546, 0x1D546, Script::Common),
    (0x1D547, 0x1D549, Script::Unknown),
    (0x1D54A, 0x1D550, Script::Common),
    (0x1D551, 0x1D551, Script::Unknown),
    (0x1D552, 0x1D6A5, Script::Common),
    (0x1D6A6, 0x1D6A7, Script::Unknown),
    (0x1D6A8, 0x1D7CB, Script::Common),
    (0x1D7CC, 0x1D7CD, Script::Unknown),
    (0x1D7CE, 0x1D7FF, Script::Common),
    (0x1D800, 0x1DEFF, Script::Unknown),
    (0x1DF00, 0x1DF1E, Script::Latin),
    (0x1DF1F, 0x1DF24, Script::Unknown),
    (0x1DF25, 0x1DF2A, Script::Latin),
    (0x1DF2B, 0x1DFFF, Script::Unknown),
    (0x1E000, 0x1E006, Script::Glagolitic),
    (0x1E007, 0x1E007, Script::Unknown),
    (0x1E008, 0x1E018, Script::Glagolitic),
    (0x1E019, 0x1E01A, Script::Unknown),
    (0x1E01B, 0x1E021, Script::Glagolitic),
    (0x1E022, 0x1E022, Script::Unknown),
    (0x1E023, 0x1E024, Script::Glagolitic),
    (0x1E025, 0x1E025, Script::Unknown),
    (0x1E026, 0x1E02A, Script::Glagolitic),
    (0x1E02B, 0x1E02F, Script::Unknown),
    (0x1E030, 0x1E06D, Script::Cyrillic),
    (0x1E06E, 0x1E08E, Script::Unknown),
    (0x1E08F, 0x1E08F, Script::Cyrillic),
    (0x1E090, 0x1E7DF, Script::Unknown),
    (0x1E7E0, 0x1E7E6, Script::Ethiopic),
    (0x1E7E7, 0x1E7E7, Script::Unknown),
    (0x1E7E8, 0x1E7EB, Script::Ethiopic),
    (0x1E7EC, 0x1E7EC, Script::Unknown),
    (0x1E7ED, 0x1E7EE, Script::Ethiopic),
    (0x1E7EF, 0x1E7EF, Script::Unknown),
    (0x1E7F0, 0x1E7FE, Script::Ethiopic),
    (0x1E7FF, 0x1EC70, Script::Unknown),
    (0x1EC71, 0x1ECB4, Script::Common),
    (0x1ECB5, 0x1ED00, Script::Unknown),
    (0x1ED01, 0x1ED3D, Script::Common),
    (0x1ED3E, 0x1EDFF, Script::Unknown),
    (0x1EE00, 0x1EE03, Script::Arabic),
    (0x1EE04, 0x1EE04, Script::Unknown),
    (0x1EE05, 0x1EE1F, Script::Arabic),
    (0x1EE20, 0x1EE20, Script::Unknown),
    (0x1EE21, 0x1EE22, Script::Arabic),
    (0x1EE23, 0x1EE23, Script::Unknown),
    (0x1EE24, 0x1EE24, Script::Arabic),
    (0x1EE25, 0x1EE26, Script::Unknown),
    (0x1EE27, 0x1EE27, Script::Arabic),
    (0x1EE28, 0x1EE28, Script::Unknown),
    (0x1EE29, 0x1EE32, Script::Arabic),
    (0x1EE33, 0x1EE33, Script::Unknown),
    (0x1EE34, 0x1EE37, Script::Arabic),
    (0x1EE38, 0x1EE38, Script::Unknown),
    (0x1EE39, 0x1EE39, Script::Arabic),
    (0x1EE3A, 0x1EE3A, Script::Unknown),
    (0x1EE3B, 0x1EE3B, Script::Arabic),
    (0x1EE3C, 0x1EE41, Script::Unknown),
    (0x1EE42, 0x1EE42, Script::Arabic),
    (0x1EE43, 0x1EE46, Script::Unknown),
    (0x1EE47, 0x1EE47, Script::Arabic),
    (0x1EE48, 0x1EE48, Script::Unknown),
    (0x1EE49, 0x1EE49, Script::Arabic),
    (0x1EE4A, 0x1EE4A, Script::Unknown),
    (0x1EE4B, 0x1EE4B, Script::Arabic),
    (0x1EE4C, 0x1EE4C, Script::Unknown),
    (0x1EE4D, 0x1EE4F, Script::Arabic),
    (0x1EE50, 0x1EE50, Script::Unknown),
    (0x1EE51, 0x1EE52, Script::Arabic),
    (0x1EE53, 0x1EE53, Script::Unknown),
    (0x1EE54, 0x1EE54, Script::Arabic),
    (0x1EE55, 0x1EE56, Script::Unknown),
    (0x1EE57, 0x1EE57, Script::Arabic),
    (0x1EE58, 0x1EE58, Script::Unknown),
    (0x1EE59, 0x1EE59, Script::Arabic),
    (0x1EE5A, 0x1EE5A, Script::Unknown),
    (0x1EE5B, 0x1EE5B, Script::Arabic),
    (0x1EE5C, 0x1EE5C, Script::Unknown),
    (0x1EE5D, 0x1EE5D, Script::Arabic),
    (0x1EE5E, 0x1EE5E, Script::Unknown),
    (0x1EE5F, 0x1EE5F, Script::Arabic),
    (0x1EE60, 0x1EE60, Script::Unknown),
    (0x1EE61, 0x1EE62, Script::Arabic),
    (0x1EE63, 0x1EE63, Script::Unknown),
    (0x1EE64, 0x1EE64, Script::Arabic),
    (0x1EE65, 0x1EE66, Script::Unknown),
    (0x1EE67, 0x1EE6A, Script::Arabic),
    (0x1EE6B, 0x1EE6B, Script::Unknown),
    (0x1EE6C, 0x1EE72, Script::Arabic),
    (0x1EE73, 0x1EE73, Script::Unknown),
    (0x1EE74, 0x1EE77, Script::Arabic),
    (0x1EE78, 0x1EE78, Script::Unknown),
    (0x1EE79, 0x1EE7C, Script::Arabic),
    (0x1EE7D, 0x1EE7D, Script::Unknown),
    (0x1EE7E, 0x1EE7E, Script::Arabic),
    (0x1EE7F, 0x1EE7F, Script::Unknown),
    (0x1EE80, 0x1EE89, Script::Arabic),
    (0x1EE8A, 0x1EE8A, Script::Unknown),
    (0x1EE8B, 0x1EE9B, Script::Arabic),
    (0x1EE9C, 0x1EEA0, Script::Unknown),
    (0x1EEA1, 0x1EEA3, Script::Arabic),
    (0x1EEA4, 0x1EEA4, Script::Unknown),
    (0x1EEA5, 0x1EEA9, Script::Arabic),
    (0x1EEAA, 0x1EEAA, Script::Unknown),
    (0x1EEAB, 0x1EEBB, Script::Arabic),
    (0x1EEBC, 0x1EEEF, Script::Unknown),
    (0x1EEF0, 0x1EEF1, Script::Arabic),
    (0x1EEF2, 0x1EFFF, Script::Unknown),
    (0x1F000, 0x1F02B, Script::Common),
    (0x1F02C, 0x1F02F, Script::Unknown),
    (0x1F030, 0x1F093, Script::Common),
    (0x1F094, 0x1F09F, Script::Unknown),
    (0x1F0A0, 0x1F0AE, Script::Common),
    (0x1F0AF, 0x1F0B0, Script::Unknown),
    (0x1F0B1, 0x1F0BF, Script::Common),
    (0x1F0C0, 0x1F0C0, Script::Unknown),
    (0x1F0C1, 0x1F0CF, Script::Common),
    (0x1F0D0, 0x1F0D0, Script::Unknown),
    (0x1F0D1, 0x1F0F5, Script::Common),
    (0x1F0F6, 0x1F0FF, Script::Unknown),
    (0x1F100, 0x1F1AD, Script::Common),
    (0x1F1AE, 0x1F1E5, Script::Unknown),
    (0x1F1E6, 0x1F1FF, Script::Common),
    (0x1F200, 0x1F200, Script::Hiragana),
    (0x1F201, 0x1F202, Script::Common),
    (0x1F203, 0x1F20F, Script::Unknown),
    (0x1F210, 0x1F23B, Script::Common),
    (0x1F23C, 0x1F23F, Script::Unknown),
    (0x1F240, 0x1F248, Script::Common),
    (0x1F249, 0x1F24F, Script::Unknown),
    (0x1F250, 0x1F251, Script::Common),
    (0x1F252, 0x1F25F, Script::Unknown),
    (0x1F260, 0x1F265, Script::Common),
    (0x1F266, 0x1F2FF, Script::Unknown),
    (0x1F300, 0x1F6D8, Script::Common),
    (0x1F6D9, 0x1F6DB, Script::Unknown),
    (0x1F6DC, 0x1F6EC, Script::Common),
    (0x1F6ED, 0x1F6EF, Script::Unknown),
    (0x1F6F0, 0x1F6FC, Script::Common),
    (0x1F6FD, 0x1F6FF, Script::Unknown),
    (0x1F700, 0x1F7D9, Script::Common),
    (0x1F7DA, 0x1F7DF, Script::Unknown),
    (0x1F7E0, 0x1F7EB, Script::Common),
    (0x1F7EC, 0x1F7EF, Script::Unknown),
    (0x1F7F0, 0x1F7F0, Script::Common),
    (0x1F7F1, 0x1F7FF, Script::Unknown),
    (0x1F800, 0x1F80B, Script::Common),
    (0x1F80C, 0x1F80F, Script::Unknown),
    (0x1F810, 0x1F847, Script::Common),
    (0x1F848, 0x1F84F, Script::Unknown),
    (0x1F850, 0x1F859, Script::Common),
    (0x1F85A, 0x1F85F, Script::Unknown),
    (0x1F860, 0x1F887, Script::Common),
    (0x1F888, 0x1F88F, Script::Unknown),
    (0x1F890, 0x1F8AD, Script::Common),
    (0x1F8AE, 0x1F8AF, Script::Unknown),
    (0x1F8B0, 0x1F8BB, Script::Common),
    (0x1F8BC, 0x1F8BF, Script::Unknown),
    (0x1F8C0, 0x1F8C1, Script::Common),
    (0x1F8C2, 0x1F8CF, Script::Unknown),
    (0x1F8D0, 0x1F8D8, Script::Common),
    (0x1F8D9, 0x1F8FF, Script::Unknown),
    (0x1F900, 0x1FA57, Script::Common),
    (0x1FA58, 0x1FA5F, Script::Unknown),
    (0x1FA60, 0x1FA6D, Script::Common),
    (0x1FA6E, 0x1FA6F, Script::Unknown),
    (0x1FA70, 0x1FA7C, Script::Common),
    (0x1FA7D, 0x1FA7F, Script::Unknown),
    (0x1FA80, 0x1FA8A, Script::Common),
    (0x1FA8B, 0x1FA8D, Script::Unknown),
    (0x1FA8E, 0x1FAC6, Script::Common),
    (0x1FAC7, 0x1FAC7, Script::Unknown),
    (0x1FAC8, 0x1FAC8, Script::Common),
    (0x1FAC9, 0x1FACC, Script::Unknown),
    (0x1FACD, 0x1FADC, Script::Common),
    (0x1FADD, 0x1FADE, Script::Unknown),
    (0x1FADF, 0x1FAEA, Script::Common),
    (0x1FAEB, 0x1FAEE, Script::Unknown),
    (0x1FAEF, 0x1FAF8, Script::Common),
    (0x1FAF9, 0x1FAFF, Script::Unknown),
    (0x1FB00, 0x1FB92, Script::Common),
    (0x1FB93, 0x1FB93, Script::Unknown),
    (0x1FB94, 0x1FBFA, Script::Common),
    (0x1FBFB, 0x1FFFF, Script::Unknown),
    (0x20000, 0x2A6DF, Script::Han),
    (0x2A6E0, 0x2A6FF, Script::Unknown),
    (0x2A700, 0x2B81D, Script::Han),
    (0x2B81E, 0x2B81F, Script::Unknown),
    (0x2B820, 0x2CEAD, Script::Han),
    (0x2CEAE, 0x2CEAF, Script::Unknown),
    (0x2CEB0, 0x2EBE0, Script::Han),
    (0x2EBE1, 0x2EBEF, Script::Unknown),
    (0x2EBF0, 0x2EE5D, Script::Han),
    (0x2EE5E, 0x2F7FF, Script::Unknown),
    (0x2F800, 0x2FA1D, Script::Han),
    (0x2FA1E, 0x2FFFF, Script::Unknown),
    (0x30000, 0x3134A, Script::Han),
    (0x3134B, 0x3134F, Script::Unknown),
    (0x31350, 0x33479, Script::Han),
    (0x3347A, 0xE0000, Script::Unknown),
    (0xE0001, 0xE0001, Script::Common),
    (0xE0002, 0xE001F, Script::Unknown),
    (0xE0020, 0xE007F, Script::Common),
    (0xE0080, 0xE00FF, Script::Unknown),
    (0xE0100, 0xE01EF, Script::Inherited),
    (0xE01F0, 0x10FFFF, Script::Unknown),
];

static WORD_BREAK_TABLE: &[(u32, u32, WordBreak)] = &[
    (0x0, 0x9, WordBreak::Other),
    (0xA, 0xA, WordBreak::LF),
    (0xB, 0xC, WordBreak::Newline),
    (0xD, 0xD, WordBreak::CR),
    (0xE, 0x1F, WordBreak::Other),
    (0x20, 0x20, WordBreak::WSegSpace),
    (0x21, 0x21, WordBreak::Other),
    (0x22, 0x22, WordBreak::DoubleQuote),
    (0x23, 0x26, WordBreak::Other),
    (0x27, 0x27, WordBreak::SingleQuote),
    (0x28, 0x2B, WordBreak::Other),
    (0x2C, 0x2C, WordBreak::MidNum),
    (0x2D, 0x2D, WordBreak::Other),
    (0x2E, 0x2E, WordBreak::MidNumLet),
    (0x2F, 0x2F, WordBreak::Other),
    (0x30, 0x39, WordBreak::Numeric),
    (0x3A, 0x3A, WordBreak::MidLetter),
    (0x3B, 0x3B, WordBreak::MidNum),
    (0x3C, 0x40, WordBreak::Other),
    (0x41, 0x5A, WordBreak::ALetter),
    (0x5B, 0x5E, WordBreak::Other),
    (0x5F, 0x5F, WordBreak::ExtendNumLet),
    (0x60, 0x60, WordBreak::Other),
    (0x61, 0x7A, WordBreak::ALetter),
    (0x7B, 0x84, WordBreak::Other),
    (0x85, 0x85, WordBreak::Newline),
    (0x86, 0xA9, WordBreak::Other),
    (0xAA, 0xAA, WordBreak::ALetter),
    (0xAB, 0xAC, WordBreak::Other),
    (0xAD, 0xAD, WordBreak::Format),
    (0xAE, 0xB4, WordBreak::Other),
    (0xB5, 0xB5, WordBreak::ALetter),
    (0xB6, 0xB6, WordBreak::Other),
    (0xB7, 0xB7, WordBreak::MidLetter),
    (0xB8, 0xB8, WordBreak::ALetter),
    (0xB9, 0xB9, WordBreak::Other),
    (0xBA, 0xBA, WordBreak::ALetter),
    (0xBB, 0xBF, WordBreak::Other),
    (0xC0, 0xD6, WordBreak::ALetter),
    (0xD7, 0xD7, WordBreak::Other),
    (0xD8, 0xF6, WordBreak::ALetter),
    (0xF7, 0xF7, WordBreak::Other),
    (0xF8, 0x2D7, WordBreak::ALetter),
    (0x2D8, 0x2DD, WordBreak::Other),
    (0x2DE, 0x2FF, WordBreak::ALetter),
    (0x300, 0x36F, WordBreak::Extend),
    (0x370, 0x374, WordBreak::ALetter),
    (0x375, 0x375, WordBreak::Other),
    (0x376, 0x377, WordBreak::ALetter),
    (0x378, 0x379, WordBreak::Other),
    (0x37A, 0x37D, WordBreak::ALetter),
    (0x37E, 0x37E, WordBreak::MidNum),
    (0x37F, 0x37F, WordBreak::ALetter),
    (0x380, 0x385, WordBreak::Other),
    (0x386, 0x386, WordBreak::ALetter),
    (0x387, 0x387, WordBreak::MidLetter),
    (0x388, 0x38A, WordBreak::ALetter),
    (0x38B, 0x38B, WordBreak::Other),
    (0x38C, 0x38C, WordBreak::ALetter),
    (0x38D, 0x38D, WordBreak::Other),
    (0x38E, 0x3A1, WordBreak::ALetter),
    (0x3A2, 0x3A2, WordBreak::Other),
    (0x3A3, 0x3F5, WordBreak::ALetter),
    (0x3F6, 0x3F6, WordBreak::Other),
    (0x3F7, 0x481, WordBreak::ALetter),
    (0x482, 0x482, WordBreak::Other),
    (0x483, 0x489, WordBreak::Extend),
    (0x48A, 0x52F, WordBreak::ALetter),
    (0x530, 0x530, WordBreak::Other),
    (0x531, 0x556, WordBreak::ALetter),
    (0x557, 0x558, WordBreak::Other),
    (0x559, 0x55C, WordBreak::ALetter),
    (0x55D, 0x55D, WordBreak::Other),
    (0x55E, 0x55E, WordBreak::ALetter),
    (0x55F, 0x55F, WordBreak::MidLetter),
    (0x560, 0x588, WordBreak::ALetter),
    (0x589, 0x589, WordBreak::MidNum),
    (0x58A, 0x58A, WordBreak::ALetter),
    (0x58B, 0x590, WordBreak::Other),
    (0x591, 0x5BD, WordBreak::Extend),
    (0x5BE, 0x5BE, WordBreak::Other),
    (0x5BF, 0x5BF, WordBreak::Extend),
    (0x5C0, 0x5C0, WordBreak::Other),
    (0x5C1, 0x5C2, WordBreak::Extend),
    (0x5C3, 0x5C3, WordBreak::Other),
    (0x5C4, 0x5C5, WordBreak::Extend),
    (0x5C6, 0x5C6, WordBreak::Other),
    (0x5C7, 0x5C7, WordBreak::Extend),
    (0x5C8, 0x5CF, WordBreak::Other),
    (0x5D0, 0x5EA, WordBreak::HebrewLetter),
    (0x5EB, 0x5EE, WordBreak::Other),
    (0x5EF, 0x5F2, WordBreak::HebrewLetter),
    (0x5F3, 0x5F3, WordBreak::ALetter),
    (0x5F4, 0x5F4, WordBreak::MidLetter),
    (0x5F5, 0x5FF, WordBreak::Other),
    (0x600, 0x605, WordBreak::Numeric),
    (0x606, 0x60B, WordBreak::Other),
    (0x60C, 0x60D, WordBreak::MidNum),
    (0x60E, 0x60F, WordBreak::Other),
    (0x610, 0x61A, WordBreak::Extend),
    (0x61B, 0x61B, WordBreak::Other),
    (0x61C, 0x61C, WordBreak::Format),
    (0x61D, 0x61F, WordBreak::Other),
    (0x620, 0x64A, WordBreak::ALetter),
    (0x64B, 0x65F, WordBreak::Extend),
    (0x660, 0x669, WordBreak::Numeric),
    (0x66A, 0x66A, WordBreak::Other),
    (0x66B, 0x66B, WordBreak::Numeric),
    (0x66C, 0x66C, WordBreak::MidNum),
    (0x66D, 0x66D, WordBreak::Other),
    (0x66E, 0x66F, WordBreak::ALetter),
    (0x670, 0x670, WordBreak::Extend),
    (0x671, 0x6D3, WordBreak::ALetter),
    (0x6D4, 0x6D4, WordBreak::Other),
    (0x6D5, 0x6D5, WordBreak::ALetter),
    (0x6D6, 0x6DC, WordBreak::Extend),
    (0x6DD, 0x6DD, WordBreak::Numeric),
    (0x6DE, 0x6DE, WordBreak::Other),
    (0x6DF, 0x6E4, WordBreak::Extend),
    (0x6E5, 0x6E6, WordBreak::ALetter),
    (0x6E7, 0x6E8, WordBreak::Extend),
    (0x6E9, 0x6E9, WordBreak::Other),
    (0x6EA, 0x6ED, WordBreak::Extend),
    (0x6EE, 0x6EF, WordBreak::ALetter),
    (0x6F0, 0x6F9, WordBreak::Numeric),
    (0x6FA, 0x6FC, WordBreak::ALetter),
    (0x6FD, 0x6FE, WordBreak::Other),
    (0x6FF, 0x6FF, WordBreak::ALetter),
    (0x700, 0x70E, WordBreak::Other),
    (0x70F, 0x710, WordBreak::ALetter),
    (0x711, 0x711, WordBreak::Extend),
    (0x712, 0x72F, WordBreak::ALetter),
    (0x730, 0x74A, WordBreak::Extend),
    (0x74B, 0x74C, WordBreak::Other),
    (0x74D, 0x7A5, WordBreak::ALetter),
    (0x7A6, 0x7B0, WordBreak::Extend),
    (0x7B1, 0x7B1, WordBreak::ALetter),
    (0x7B2, 0x7BF, WordBreak::Other),
    (0x7C0, 0x7C9, WordBreak::Numeric),
    (0x7CA, 0x7EA, WordBreak::ALetter),
    (0x7EB, 0x7F3, WordBreak::Extend),
    (0x7F4, 0x7F5, WordBreak::ALetter),
    (0x7F6, 0x7F7, WordBreak::Other),
    (0x7F8, 0x7F8, WordBreak::MidNum),
    (0x7F9, 0x7F9, WordBreak::Other),
    (0x7FA, 0x7FA, WordBreak::ALetter),
    (0x7FB, 0x7FC, WordBreak::Other),
    (0x7FD, 0x7FD, WordBreak::Extend),
    (0x7FE, 0x7FF, WordBreak::Other),
    (0x800, 0x815, WordBreak::ALetter),
    (0x816, 0x819, WordBreak::Extend),
    (0x81A, 0x81A, WordBreak::ALetter),
    (0x81B, 0x823, WordBreak::Extend),
    (0x824, 0x824, WordBreak::ALetter),
    (0x825, 0x827, WordBreak::Extend),
    (0x828, 0x828, WordBreak::ALetter),
    (0x829, 0x82D, WordBreak::Extend),
    (0x82E, 0x83F, WordBreak::Other),
    (0x840, 0x858, WordBreak::ALetter),
    (0x859, 0x85B, WordBreak::Extend),
    (0x85C, 0x85F, WordBreak::Other),
    (0x860, 0x86A, WordBreak::ALetter),
    (0x86B, 0x86F, WordBreak::Other),
    (0x870, 0x887, WordBreak::ALetter),
    (0x888, 0x888, WordBreak::Other),
    (0x889, 0x88F, WordBreak::ALetter),
    (0x890, 0x891, WordBreak::Numeric),
    (0x892, 0x896, WordBreak::Other),
    (0x897, 0x89F, WordBreak::Extend),
    (0x8A0, 0x8C9, WordBreak::ALetter),
    (0x8CA, 0x8E1, WordBreak::Extend),
    (0x8E2, 0x8E2, WordBreak::Numeric),
    (0x8E3, 0x903, WordBreak::Extend),
    (0x904, 0x939, WordBreak::ALetter),
    (0x93A, 0x93C, WordBreak::Extend),
    (0x93D, 0x93D, WordBreak::ALetter),
    (0x93E, 0x94F, WordBreak::Extend),
    (0x950, 0x950, WordBreak::ALetter),
    (0x951, 0x957, WordBreak::Extend),
    (0x958, 0x961, WordBreak::ALetter),
    (0x962, 0x963, WordBreak::Extend),
    (0x964, 0x965, WordBreak::Other),
    (0x966, 0x96F, WordBreak::Numeric),
    (0x970, 0x970, WordBreak::Other),
    (0x971, 0x980, WordBreak::ALetter),
    (0x981, 0x983, WordBreak::Extend),
    (0x984, 0x984, WordBreak::Other),
    (0x985, 0x98C, WordBreak::ALetter),
    (0x98D, 0x98E, WordBreak::Other),
    (0x98F, 0x990, WordBreak::ALetter),
    (0x991, 0x992, WordBreak::Other),
    (0x993, 0x9A8, WordBreak::ALetter),
    (0x9A9, 0x9A9, WordBreak::Other),
    (0x9AA, 0x9B0, WordBreak::ALetter),
    (0x9B1, 0x9B1, WordBreak::Other),
    (0x9B2, 0x9B2, WordBreak::ALetter),
    (0x9B3, 0x9B5, WordBreak::Other),
    (0x9B6, 0x9B9, WordBreak::ALetter),
    (0x9BA, 0x9BB, WordBreak::Other),
    (0x9BC, 0x9BC, WordBreak::Extend),
    (0x9BD, 0x9BD, WordBreak::ALetter),
    (0x9BE, 0x9C4, WordBreak::Extend),
    (0x9C5, 0x9C6, WordBreak::Other),
    (0x9C7, 0x9C8, WordBreak::Extend),
    (0x9C9, 0x9CA, WordBreak::Other),
    (0x9CB, 0x9CD, WordBreak::Extend),
    (0x9CE, 0x9CE, WordBreak::ALetter),
    (0x9CF, 0x9D6, WordBreak::Other),
    (0x9D7, 0x9D7, WordBreak::Extend),
    (0x9D8, 0x9DB, WordBreak::Other),
    (0x9DC, 0x9DD, WordBreak::ALetter),
    (0x9DE, 0x9DE, WordBreak::Other),
    (0x9DF, 0x9E1, WordBreak::ALetter),
    (0x9E2, 0x9E3, WordBreak::Extend),
    (0x9E4, 0x9E5, WordBreak::Other),
    (0x9E6, 0x9EF, WordBreak::Numeric),
    (0x9F0, 0x9F1, WordBreak::ALetter),
    (0x9F2, 0x9FB, WordBreak::Other),
    (0x9FC, 0x9FC, WordBreak::ALetter),
    (0x9FD, 0x9FD, WordBreak::Other),
    (0x9FE, 0x9FE, WordBreak::Extend),
    (0x9FF, 0xA00, WordBreak::Other),
    (0xA01, 0xA03, WordBreak::Extend),
    (0xA04, 0xA04, WordBreak::Other),
    (0xA05, 0xA0A, WordBreak::ALetter),
    (0xA0B, 0xA0E, WordBreak::Other),
    (0xA0F, 0xA10, WordBreak::ALetter),
    (0xA11, 0xA12, WordBreak::Other),
    (0xA13, 0xA28, WordBreak::ALetter),
    (0xA29, 0xA29, WordBreak::Other),
    (0xA2A, 0xA30, WordBreak::ALetter),
    (0xA31, 0xA31, WordBreak::Other),
    (0xA32, 0xA33, WordBreak::ALetter),
    (0xA34, 0xA34, WordBreak::Other),
    (0xA35, 0xA36, WordBreak::ALetter),
    (0xA37, 0xA37, WordBreak::Other),
    (0xA38, 0xA39, WordBreak::ALetter),
    (0xA3A, 0xA3B, WordBreak::Other),
    (0xA3C, 0xA3C, WordBreak::Extend),
    (0xA3D, 0xA3D, WordBreak::Other),
    (0xA3E, 0xA42, WordBreak::Extend),
    (0xA43, 0xA46, WordBreak::Other),
    (0xA47, 0xA48, WordBreak::Extend),
    (0xA49, 0xA4A, WordBreak::Other),
    (0xA4B, 0xA4D, WordBreak::Extend),
    (0xA4E, 0xA50, WordBreak::Other),
    (0xA51, 0xA51, WordBreak::Extend),
    (0xA52, 0xA58, WordBreak::Other),
    (0xA59, 0xA5C, WordBreak::ALetter),
    (0xA5D, 0xA5D, WordBreak::Other),
    (0xA5E, 0xA5E, WordBreak::ALetter),
    (0xA5F, 0xA65, WordBreak::Other),
    (0xA66, 0xA6F, WordBreak::Numeric),
    (0xA70, 0xA71, WordBreak::Extend),
    (0xA72, 0xA74, WordBreak::ALetter),
    (0xA75, 0xA75, WordBreak::Extend),
    (0xA76, 0xA80, WordBreak::Other),
    (0xA81, 0xA83, WordBreak::Extend),
    (0xA84, 0xA84, WordBreak::Other),
    (0xA85, 0xA8D, WordBreak::ALetter),
    (0xA8E, 0xA8E, WordBreak::Other),
    (0xA8F, 0xA91, WordBreak::ALetter),
    (0xA92, 0xA92, WordBreak::Other),
    (0xA93, 0xAA8, WordBreak::ALetter),
    (0xAA9, 0xAA9, WordBreak::Other),
    (0xAAA, 0xAB0, WordBreak::ALetter),
    (0xAB1, 0xAB1, WordBreak::Other),
    (0xAB2, 0xAB3, WordBreak::ALetter),
    (0xAB4, 0xAB4, WordBreak::Other),
    (0xAB5, 0xAB9, WordBreak::ALetter),
    (0xABA, 0xABB, WordBreak::Other),
    (0xABC, 0xABC, WordBreak::Extend),
    (0xABD, 0xABD, WordBreak::ALetter),
    (0xABE, 0xAC5, WordBreak::Extend),
    (0xAC6, 0xAC6, WordBreak::Other),
    (0xAC7, 0xAC9, WordBreak::Extend),
    (0xACA, 0xACA, WordBreak::Other),
    (0xACB, 0xACD, WordBreak::Extend),
    (0xACE, 0xACF, WordBreak::Other),
    (0xAD0, 0xAD0, WordBreak::ALetter),
    (0xAD1, 0xADF, WordBreak::Other),
    (0xAE0, 0xAE1, WordBreak::ALetter),
    (0xAE2, 0xAE3, WordBreak::Extend),
    (0xAE4, 0xAE5, WordBreak::Other),
    (0xAE6, 0xAEF, WordBreak::Numeric),
    (0xAF0, 0xAF8, WordBreak::Other),
    (0xAF9, 0xAF9, WordBreak::ALetter),
    (0xAFA, 0xAFF, WordBreak::Extend),
    (0xB00, 0xB00, WordBreak::Other),
    (0xB01, 0xB03, WordBreak::Extend),
    (0xB04, 0xB04, WordBreak::Other),
    (0xB05, 0xB0C, WordBreak::ALetter),
    (0xB0D, 0xB0E, WordBreak::Other),
    (0xB0F, 0xB10, WordBreak::ALetter),
    (0xB11, 0xB12, WordBreak::Other),
    (0xB13, 0xB28, WordBreak::ALetter),
    (0xB29, 0xB29, WordBreak::Other),
    (0xB2A, 0xB30, WordBreak::ALetter),
    (0xB31, 0xB31, WordBreak::Other),
    (0xB32, 0xB33, WordBreak::ALetter),
    (0xB34, 0xB34, WordBreak::Other),
    (0xB35, 0xB39, WordBreak::ALetter),
    (0xB3A, 0xB3B, WordBreak::Other),
    (0xB3C, 0xB3C, WordBreak::Extend),
    (0xB3D, 0xB3D, WordBreak::ALetter),
    (0xB3E, 0xB44, WordBreak::Extend),
    (0xB45, 0xB46, WordBreak::Other),
    (0xB47, 0xB48, WordBreak::Extend),
    (0xB49, 0xB4A, WordBreak::Other),
    (0xB4B, 0xB4D, WordBreak::Extend),
    (0xB4E, 0xB54, WordBreak::Other),
    (0xB55, 0xB57, WordBreak::Extend),
    (0xB58, 0xB5B, WordBreak::Other),
    (0xB5C, 0xB5D, WordBreak::ALetter),
    (0xB5E, 0xB5E, WordBreak::Other),
    (0xB5F, 0xB61, WordBreak::ALetter),
    (0xB62, 0xB63, WordBreak::Extend),
    (0xB64, 0xB65, WordBreak::Other),
    (0xB66, 0xB6F, WordBreak::Numeric),
    (0xB70, 0xB70, WordBreak::Other),
    (0xB71, 0xB71, WordBreak::ALetter),
    (0xB72, 0xB81, WordBreak::Other),
    (0xB82, 0xB82, WordBreak::Extend),
    (0xB83, 0xB83, WordBreak::ALetter),
    (0xB84, 0xB84, WordBreak::Other),
    (0xB85, 0xB8A, WordBreak::ALetter),
    (0xB8B, 0xB8D, WordBreak::Other),
    (0xB8E, 0xB90, WordBreak::ALetter),
    (0xB91, 0xB91, WordBreak::Other),
    (0xB92, 0xB95, WordBreak::ALetter),
    (0xB96, 0xB98, WordBreak::Other),
    (0xB99, 0xB9A, WordBreak::ALetter),
    (0xB9B, 0xB9B, WordBreak::Other),
    (0xB9C, 0xB9C, WordBreak::ALetter),
    (0xB9D, 0xB9D, WordBreak::Other),
    (0xB9E, 0xB9F, WordBreak::ALetter),
    (0xBA0, 0xBA2, WordBreak::Other),
    (0xBA3, 0xBA4, WordBreak::ALetter),
    (0xBA5, 0xBA7, WordBreak::Other),
    (0xBA8, 0xBAA, WordBreak::ALetter),
    (0xBAB, 0xBAD, WordBreak::Other),
    (0xBAE, 0xBB9, WordBreak::ALetter),
    (0xBBA, 0xBBD, WordBreak::Other),
    (0xBBE, 0xBC2, WordBreak::Extend),
    (0xBC3, 0xBC5, WordBreak::Other),
    (0xBC6, 0xBC8, WordBreak::Extend),
    (0xBC9, 0xBC9, WordBreak::Other),
    (0xBCA, 0xBCD, WordBreak::Extend),
    (0xBCE, 0xBCF, WordBreak::Other),
    (0xBD0, 0xBD0, WordBreak::ALetter),
    (0xBD1, 0xBD6, WordBreak::Other),
    (0xBD7, 0xBD7, WordBreak::Extend),
    (0xBD8, 0xBE5, WordBreak::Other),
    (0xBE6, 0xBEF, WordBreak::Numeric),
    (0xBF0, 0xBFF, WordBreak::Other),
    (0xC00, 0xC04, WordBreak::Extend),
    (0xC05, 0xC0C, WordBreak::ALetter),
    (0xC0D, 0xC0D, WordBreak::Other),
    (0xC0E, 0xC10, WordBreak::ALetter),
    (0xC11, 0xC11, WordBreak::Other),
    (0xC12, 0xC28, WordBreak::ALetter),
    (0xC29, 0xC29, WordBreak::Other),
    (0xC2A, 0xC39, WordBreak::ALetter),
    (0xC3A, 0xC3B, WordBreak::Other),
    (0xC3C, 0xC3C, WordBreak::Extend),
    (0xC3D, 0xC3D, WordBreak::ALetter),
    (0xC3E, 0xC44, WordBreak::Extend),
    (0xC45, 0xC45, WordBreak::Other),
    (0xC46, 0xC48, WordBreak::Extend),
    (0xC49, 0xC49, WordBreak::Other),
    (0xC4A, 0xC4D, WordBreak::Extend),
    (0xC4E, 0xC54, WordBreak::Other),
    (0xC55, 0xC56, WordBreak::Extend),
    (0xC57, 0xC57, WordBreak::Other),
    (0xC58, 0xC5A, WordBreak::ALetter),
    (0xC5B, 0xC5B, WordBreak::Other),
    (0xC5C, 0xC5D, WordBreak::ALetter),
    (0xC5E, 0xC5F, WordBreak::Other),
    (0xC60, 0xC61, WordBreak::ALetter),
    (0xC62, 0xC63, WordBreak::Extend),
    (0xC64, 0xC65, WordBreak::Other),
    (0xC66, 0xC6F, WordBreak::Numeric),
    (0xC70, 0xC7F, WordBreak::Other),
    (0xC80, 0xC80, WordBreak::ALetter),
    (0xC81, 0xC83, WordBreak::Extend),
    (0xC84, 0xC84, WordBreak::Other),
    (0xC85, 0xC8C, WordBreak::ALetter),
    (0xC8D, 0xC8D, WordBreak::Other),
    (0xC8E, 0xC90, WordBreak::ALetter),
    (0xC91, 0xC91, WordBreak::Other),
    (0xC92, 0xCA8, WordBreak::ALetter),
    (0xCA9, 0xCA9, WordBreak::Other),
    (0xCAA, 0xCB3, WordBreak::ALetter),
    (0xCB4, 0xCB4, WordBreak::Other),
    (0xCB5, 0xCB9, WordBreak::ALetter),
    (0xCBA, 0xCBB, WordBreak::Other),
    (0xCBC, 0xCBC, WordBreak::Extend),
    (0xCBD, 0xCBD, WordBreak::ALetter),
    (0xCBE, 0xCC4, WordBreak::Extend),
    (0xCC5, 0xCC5, WordBreak::Other),
    (0xCC6, 0xCC8, WordBreak::Extend),
    (0xCC9, 0xCC9, WordBreak::Other),
    (0xCCA, 0xCCD, WordBreak::Extend),
    (0xCCE, 0xCD4, WordBreak::Other),
    (0xCD5, 0xCD6, WordBreak::Extend),
    (0xCD7, 0xCDB, WordBreak::Other),
    (0xCDC, 0xCDE, WordBreak::ALetter),
    (0xCDF, 0xCDF, WordBreak::Other),
    (0xCE0, 0xCE1, WordBreak::ALetter),
    (0xCE2, 0xCE3, WordBreak::Extend),
    (0xCE4, 0xCE5, WordBreak::Other),
    (0xCE6, 0xCEF, WordBreak::Numeric),
    (0xCF0, 0xCF0, WordBreak::Other),
    (0xCF1, 0xCF2, WordBreak::ALetter),
    (0xCF3, 0xCF3, WordBreak::Extend),
    (0xCF4, 0xCFF, WordBreak::Other),
    (0xD00, 0xD03, WordBreak::Extend),
    (0xD04, 0xD0C, WordBreak::ALetter),
    (0xD0D, 0xD0D, WordBreak::Other),
    (0xD0E, 0xD10, WordBreak::ALetter),
    (0xD11, 0xD11, WordBreak::Other),
    (0xD12, 0xD3A, WordBreak::ALetter),
    (0xD3B, 0xD3C, WordBreak::Extend),
    (0xD3D, 0xD3D, WordBreak::ALetter),
    (0xD3E, 0xD44, WordBreak::Extend),
    (0xD45, 0xD45, WordBreak::Other),
    (0xD46, 0xD48, WordBreak::Extend),
    (0xD49, 0xD49, WordBreak::Other),
    (0xD4A, 0xD4D, WordBreak::Extend),
    (0xD4E, 0xD4E, WordBreak::ALetter),
    (0xD4F, 0xD53, WordBreak::Other),
    (0xD54, 0xD56, WordBreak::ALetter),
    (0xD57, 0xD57, WordBreak::Extend),
    (0xD58, 0xD5E, WordBreak::Other),
    (0xD5F, 0xD61, WordBreak::ALetter),
    (0xD62, 0xD63, WordBreak::Extend),
    (0xD64, 0xD65, WordBreak::Other),
    (0xD66, 0xD6F, WordBreak::Numeric),
    (0xD70, 0xD79, WordBreak::Other),
    (0xD7A, 0xD7F, WordBreak::ALetter),
    (0xD80, 0xD80, WordBreak::Other),
    (0xD81, 0xD83, WordBreak::Extend),
    (0xD84, 0xD84, WordBreak::Other),
    (0xD85, 0xD96, WordBreak::ALetter),
    (0xD97, 0xD99, WordBreak::Other),
    (0xD9A, 0xDB1, WordBreak::ALetter),
    (0xDB2, 0xDB2, WordBreak::Other),
    (0xDB3, 0xDBB, WordBreak::ALetter),
    (0xDBC, 0xDBC, WordBreak::Other),
    (0xDBD, 0xDBD, WordBreak::ALetter),
    (0xDBE, 0xDBF, WordBreak::Other),
    (0xDC0, 0xDC6, WordBreak::ALetter),
    (0xDC7, 0xDC9, WordBreak::Other),
    (0xDCA, 0xDCA, WordBreak::Extend),
    (0xDCB, 0xDCE, WordBreak::Other),
    (0xDCF, 0xDD4, WordBreak::Extend),
    (0xDD5, 0xDD5, WordBreak::Other),
    (0xDD6, 0xDD6, WordBreak::Extend),
    (0xDD7, 0xDD7, WordBreak::Other),
    (0xDD8, 0xDDF, WordBreak::Extend),
    (0xDE0, 0xDE5, WordBreak::Other),
    (0xDE6, 0xDEF, WordBreak::Numeric),
    (0xDF0, 0xDF1, WordBreak::Other),
    (0xDF2, 0xDF3, WordBreak::Extend),
    (0xDF4, 0xE30, WordBreak::Other),
    (0xE31, 0xE31, WordBreak::Extend),
    (0xE32, 0xE33, WordBreak::Other),
    (0xE34, 0xE3A, WordBreak::Extend),
    (0xE3B, 0xE46, WordBreak::Other),
    (0xE47, 0xE4E, WordBreak::Extend),
    (0xE4F, 0xE4F, WordBreak::Other),
    (0xE50, 0xE59, WordBreak::Numeric),
    (0xE5A, 0xEB0, WordBreak::Other),
    (0xEB1, 0xEB1, WordBreak::Extend),
    (0xEB2, 0xEB3, WordBreak::Other),
    (0xEB4, 0xEBC, WordBreak::Extend),
    (0xEBD, 0xEC7, WordBreak::Other),
    (0xEC8, 0xECE, WordBreak::Extend),
    (0xECF, 0xECF, WordBreak::Other),
    (0xED0, 0xED9, WordBreak::Numeric),
    (0xEDA, 0xEFF, WordBreak::Other),
    (0xF00, 0xF00, WordBreak::ALetter),
    (0xF01, 0xF17, WordBreak::Other),
    (0xF18, 0xF19, WordBreak::Extend),
    (0xF1A, 0xF1F, WordBreak::Other),
    (0xF20, 0xF29, WordBreak::Numeric),
    (0xF2A, 0xF34, WordBreak::Other),
    (0xF35, 0xF35, WordBreak::Extend),
    (0xF36, 0xF36, WordBreak::Other),
    (0xF37, 0xF37, WordBreak::Extend),
    (0xF38, 0xF38, WordBreak::Other),
    (0xF39, 0xF39, WordBreak::Extend),
    (0xF3A, 0xF3D, WordBreak::Other),
    (0xF3E, 0xF3F, WordBreak::Extend),
    (0xF40, 0xF47, WordBreak::ALetter),
    (0xF48, 0xF48, WordBreak::Other),
    (0xF49, 0xF6C, WordBreak::ALetter),
    (0xF6D, 0xF70, WordBreak::Other),
    (0xF71, 0xF84, WordBreak::Extend),
    (0xF85, 0xF85, WordBreak::Other),
    (0xF86, 0xF87, WordBreak::Extend),
    (0xF88, 0xF8C, WordBreak::ALetter),
    (0xF8D, 0xF97, WordBreak::Extend),
    (0xF98, 0xF98, WordBreak::Other),
    (0xF99, 0xFBC, WordBreak::Extend),
    (0xFBD, 0xFC5, WordBreak::Other),
    (0xFC6, 0xFC6, WordBreak::Extend),
    (0xFC7, 0x102A, WordBreak::Other),
    (0x102B, 0x103E, WordBreak::Extend),
    (0x103F, 0x103F, WordBreak::Other),
    (0x1040, 0x1049, WordBreak::Numeric),
    (0x104A, 0x1055, WordBreak::Other),
    (0x1056, 0x1059, WordBreak::Extend),
    (0x105A, 0x105D, WordBreak::Other),
    (0x105E, 0x1060, WordBreak::Extend),
    (0x1061, 0x1061, WordBreak::Other),
    (0x1062, 0x1064, WordBreak::Extend),
    (0x1065, 0x1066, WordBreak::Other),
    (0x1067, 0x106D, WordBreak::Extend),
    (0x106E, 0x1070, WordBreak::Other),
    (0x1071, 0x1074, WordBreak::Extend),
    (0x1075, 0x1081, WordBreak::Other),
    (0x1082, 0x108D, WordBreak::Extend),
    (0x108E, 0x108E, WordBreak::Other),
    (0x108F, 0x108F, WordBreak::Extend),
    (0x1090, 0x1099, WordBreak::Numeric),
    (0x109A, 0x109D, WordBreak::Extend),
    (0x109E, 0x109F, WordBreak::Other),
    (0x10A0, 0x10C5, WordBreak::ALetter),
    (0x10C6, 0x10C6, WordBreak::Other),
    (0x10C7, 0x10C7, WordBreak::ALetter),
    (0x10C8, 0x10CC, WordBreak::Other),
    (0x10CD, 0x10CD, WordBreak::ALetter),
    (0x10CE, 0x10CF, WordBreak::Other),
    (0x10D0, 0x10FA, WordBreak::ALetter),
    (0x10FB, 0x10FB, WordBreak::Other),
    (0x10FC, 0x1248, WordBreak::ALetter),
    (0x1249, 0x1249, WordBreak::Other),
    (0x124A, 0x124D, WordBreak::ALetter),
    (0x124E, 0x124F, WordBreak::Other),
    (0x1250, 0x1256, WordBreak::ALetter),
    (0x1257, 0x1257, WordBreak::Other),
    (0x1258, 0x1258, WordBreak::ALetter),
    (0x1259, 0x1259, WordBreak::Other),
    (0x125A, 0x125D, WordBreak::ALetter),
    (0x125E, 0x125F, WordBreak::Other),
    (0x1260, 0x1288, WordBreak::ALetter),
    (0x1289, 0x1289, WordBreak::Other),
    (0x128A, 0x128D, WordBreak::ALetter),
    (0x128E, 0x128F, WordBreak::Other),
    (0x1290, 0x12B0, WordBreak::ALetter),
    (0x12B1, 0x12B1, WordBreak::Other),
    (0x12B2, 0x12B5, WordBreak::ALetter),
    (0x12B6, 0x12B7, WordBreak::Other),
    (0x12B8, 0x12BE, WordBreak::ALetter),
    (0x12BF, 0x12BF, WordBreak::Other),
    (0x12C0, 0x12C0, WordBreak::ALetter),
    (0x12C1, 0x12C1, WordBreak::Other),
    (0x12C2, 0x12C5, WordBreak::ALetter),
    (0x12C6, 0x12C7, WordBreak::Other),
    (0x12C8, 0x12D6, WordBreak::ALetter),
    (0x12D7, 0x12D7, WordBreak::Other),
    (0x12D8, 0x1310, WordBreak::ALetter),
    (0x1311, 0x1311, WordBreak::Other),
    (0x1312, 0x1315, WordBreak::ALetter),
    (0x1316, 0x1317, WordBreak::Other),
    (0x1318, 0x135A, WordBreak::ALetter),
    (0x135B, 0x135C, WordBreak::Other),
    (0x135D, 0x135F, WordBreak::Extend),
    (0x1360, 0x137F, WordBreak::Other),
    (0x1380, 0x138F, WordBreak::ALetter),
    (0x1390, 0x139F, WordBreak::Other),
    (0x13A0, 0x13F5, WordBreak::ALetter),
    (0x13F6, 0x13F7, WordBreak::Other),
    (0x13F8, 0x13FD, WordBreak::ALetter),
    (0x13FE, 0x1400, WordBreak::Other),
    (0x1401, 0x166C, WordBreak::ALetter),
    (0x166D, 0x166E, WordBreak::Other),
    (0x166F, 0x167F, WordBreak::ALetter),
    (0x1680, 0x1680, WordBreak::WSegSpace),
    (0x1681, 0x169A, WordBreak::ALetter),
    (0x169B, 0x169F, WordBreak::Other),
    (0x16A0, 0x16EA, WordBreak::ALetter),
    (0x16EB, 0x16ED, WordBreak::Other),
    (0x16EE, 0x16F8, WordBreak::ALetter),
    (0x16F9, 0x16FF, WordBreak::Other),
    (0x1700, 0x1711, WordBreak::ALetter),
    (0x1712, 0x1715, WordBreak::Extend),
    (0x1716, 0x171E, WordBreak::Other),
    (0x171F, 0x1731, WordBreak::ALetter),
    (0x1732, 0x1734, WordBreak::Extend),
    (0x1735, 0x173F, WordBreak::Other),
    (0x1740, 0x1751, WordBreak::ALetter),
    (0x1752, 0x1753, WordBreak::Extend),
    (0x1754, 0x175F, WordBreak::Other),
    (0x1760, 0x176C, WordBreak::ALetter),
    (0x176D, 0x176D, WordBreak::Other),
    (0x176E, 0x1770, WordBreak::ALetter),
    (0x1771, 0x1771, WordBreak::Other),
    (0x1772, 0x1773, WordBreak::Extend),
    (0x1774, 0x17B3, WordBreak::Other),
    (0x17B4, 0x17D3, WordBreak::Extend),
    (0x17D4, 0x17DC, WordBreak::Other),
    (0x17DD, 0x17DD, WordBreak::Extend),
    (0x17DE, 0x17DF, WordBreak::Other),
    (0x17E0, 0x17E9, WordBreak::Numeric),
    (0x17EA, 0x180A, WordBreak::Other),
    (0x180B, 0x180D, WordBreak::Extend),
    (0x180E, 0x180E, WordBreak::Format),
    (0x180F, 0x180F, WordBreak::Extend),
    (0x1810, 0x1819, WordBreak::Numeric),
    (0x181A, 0x181F, WordBreak::Other),
    (0x1820, 0x1878, WordBreak::ALetter),
    (0x1879, 0x187F, WordBreak::Other),
    (0x1880, 0x1884, WordBreak::ALetter),
    (0x1885, 0x1886, WordBreak::Extend),
    (0x1887, 0x18A8, WordBreak::ALetter),
    (0x18A9, 0x18A9, WordBreak::Extend),
    (0x18AA, 0x18AA, WordBreak::ALetter),
    (0x18AB, 0x18AF, WordBreak::Other),
    (0x18B0, 0x18F5, WordBreak::ALetter),
    (0x18F6, 0x18FF, WordBreak::Other),
    (0x1900, 0x191E, WordBreak::ALetter),
    (0x191F, 0x191F, WordBreak::Other),
    (0x1920, 0x192B, WordBreak::Extend),
    (0x192C, 0x192F, WordBreak::Other),
    (0x1930, 0x193B, WordBreak::Extend),
    (0x193C, 0x1945, WordBreak::Other),
    (0x1946, 0x194F, WordBreak::Numeric),
    (0x1950, 0x19CF, WordBreak::Other),
    (0x19D0, 0x19DA, WordBreak::Numeric),
    (0x19DB, 0x19FF, WordBreak::Other),
    (0x1A00, 0x1A16, WordBreak::ALetter),
    (0x1A17, 0x1A1B, WordBreak::Extend),
    (0x1A1C, 0x1A54, WordBreak::Other),
    (0x1A55, 0x1A5E, WordBreak::Extend),
    (0x1A5F, 0x1A5F, WordBreak::Other),
    (0x1A60, 0x1A7C, WordBreak::Extend),
    (0x1A7D, 0x1A7E, WordBreak::Other),
    (0x1A7F, 0x1A7F, WordBreak::Extend),
    (0x1A80, 0x1A89, WordBreak::Numeric),
    (0x1A8A, 0x1A8F, WordBreak::Other),
    (0x1A90, 0x1A99, WordBreak::Numeric),
    (0x1A9A, 0x1AAF, WordBreak::Other),
    (0x1AB0, 0x1ADD, WordBreak::Extend),
    (0x1ADE, 0x1ADF, WordBreak::Other),
    (0x1AE0, 0x1AEB, WordBreak::Extend),
    (0x1AEC, 0x1AFF, WordBreak::Other),
    (0x1B00, 0x1B04, WordBreak::Extend),
    (0x1B05, 0x1B33, WordBreak::ALetter),
    (0x1B34, 0x1B44, WordBreak::Extend),
    (0x1B45, 0x1B4C, WordBreak::ALetter),
    (0x1B4D, 0x1B4F, WordBreak::Other),
    (0x1B50, 0x1B59, WordBreak::Numeric),
    (0x1B5A, 0x1B6A, WordBreak::Other),
    (0x1B6B, 0x1B73, WordBreak::Extend),
    (0x1B74, 0x1B7F, WordBreak::Other),
    (0x1B80, 0x1B82, WordBreak::Extend),
    (0x1B83, 0x1BA0, WordBreak::ALetter),
    (0x1BA1, 0x1BAD, WordBreak::Extend),
    (0x1BAE, 0x1BAF, WordBreak::ALetter),
    (0x1BB0, 0x1BB9, WordBreak::Numeric),
    (0x1BBA, 0x1BE5, WordBreak::ALetter),
    (0x1BE6, 0x1BF3, WordBreak::Extend),
    (0x1BF4, 0x1BFF, WordBreak::Other),
    (0x1C00, 0x1C23, WordBreak::ALetter),
    (0x1C24, 0x1C37, WordBreak::Extend),
    (0x1C38, 0x1C3F, WordBreak::Other),
    (0x1C40, 0x1C49, WordBreak::Numeric),
    (0x1C4A, 0x1C4C, WordBreak::Other),
    (0x1C4D, 0x1C4F, WordBreak::ALetter),
    (0x1C50, 0x1C59, WordBreak::Numeric),
    (0x1C5A, 0x1C7D, WordBreak::ALetter),
    (0x1C7E, 0x1C7F, WordBreak::Other),
    (0x1C80, 0x1C8A, WordBreak::ALetter),
    (0x1C8B, 0x1C8F, WordBreak::Other),
    (0x1C90, 0x1CBA, WordBreak::ALetter),
    (0x1CBB, 0x1CBC, WordBreak::Other),
    (0x1CBD, 0x1CBF, WordBreak::ALetter),
    (0x1CC0, 0x1CCF, WordBreak::Other),
    (0x1CD0, 0x1CD2, WordBreak::Extend),
    (0x1CD3, 0x1CD3, WordBreak::Other),
    (0x1CD4, 0x1CE8, WordBreak::Extend),
    (0x1CE9, 0x1CEC, WordBreak::ALetter),
    (0x1CED, 0x1CED, WordBreak::Extend),
    (0x1CEE, 0x1CF3, WordBreak::ALetter),
    (0x1CF4, 0x1CF4, WordBreak::Extend),
    (0x1CF5, 0x1CF6, WordBreak::ALetter),
    (0x1CF7, 0x1CF9, WordBreak::Extend),
    (0x1CFA, 0x1CFA, WordBreak::ALetter),
    (0x1CFB, 0x1CFF, WordBreak::Other),
    (0x1D00, 0x1DBF, WordBreak::ALetter),
    (0x1DC0, 0x1DFF, WordBreak::Extend),
    (0x1E00, 0x1F15, WordBreak::ALetter),
    (0x1F16, 0x1F17, WordBreak::Other),
    (0x1F18, 0x1F1D, WordBreak::ALetter),
    (0x1F1E, 0x1F1F, WordBreak::Other),
    (0x1F20, 0x1F45, WordBreak::ALetter),
    (0x1F46, 0x1F47, WordBreak::Other),
    (0x1F48, 0x1F4D, WordBreak::ALetter),
    (0x1F4E, 0x1F4F, WordBreak::Other),
    (0x1F50, 0x1F57, WordBreak::ALetter),
    (0x1F58, 0x1F58, WordBreak::Other),
    (0x1F59, 0x1F59, WordBreak::ALetter),
    (0x1F5A, 0x1F5A, WordBreak::Other),
    (0x1F5B, 0x1F5B, WordBreak::ALetter),
    (0x1F5C, 0x1F5C, WordBreak::Other),
    (0x1F5D, 0x1F5D, WordBreak::ALetter),
    (0x1F5E, 0x1F5E, WordBreak::Other),
    (0x1F5F, 0x1F7D, WordBreak::ALetter),
    (0x1F7E, 0x1F7F, WordBreak::Other),
    (0x1F80, 0x1FB4, WordBreak::ALetter),
    (0x1FB5, 0x1FB5, WordBreak::Other),
    (0x1FB6, 0x1FBC, WordBreak::ALetter),
    (0x1FBD, 0x1FBD, WordBreak::Other),
    (0x1FBE, 0x1FBE, WordBreak::ALetter),
    (0x1FBF, 0x1FC1, WordBreak::Other),
    (0x1FC2, 0x1FC4, WordBreak::ALetter),
    (0x1FC5, 0x1FC5, WordBreak::Other),
    (0x1FC6, 0x1FCC, WordBreak::ALetter),
    (0x1FCD, 0x1FCF, WordBreak::Other),
    (0x1FD0, 0x1FD3, WordBreak::ALetter),
    (0x1FD4, 0x1FD5, WordBreak::Other),
    (0x1FD6, 0x1FDB, WordBreak::ALetter),
    (0x1FDC, 0x1FDF, WordBreak::Other),
    (0x1FE0, 0x1FEC, WordBreak::ALetter),
    (0x1FED, 0x1FF1, WordBreak::Other),
    (0x1FF2, 0x1FF4, WordBreak::ALetter),
    (0x1FF5, 0x1FF5, WordBreak::Other),
    (0x1FF6, 0x1FFC, WordBreak::ALetter),
    (0x1FFD, 0x1FFF, WordBreak::Other),
    (0x2000, 0x2006, WordBreak::WSegSpace),
    (0x2007, 0x2007, WordBreak::Other),
    (0x2008, 0x200A, WordBreak::WSegSpace),
    (0x200B, 0x200B, WordBreak::Other),
    (0x200C, 0x200C, WordBreak::Extend),
    (0x200D, 0x200D, WordBreak::ZWJ),
    (0x200E, 0x200F, WordBreak::Format),
    (0x2010, 0x2017, WordBreak::Other),
    (0x2018, 0x2019, WordBreak::MidNumLet),
    (0x201A, 0x2023, WordBreak::Other),
    (0x2024, 0x2024, WordBreak::MidNumLet),
    (0x2025, 0x2026, WordBreak::Other),
    (0x2027, 0x2027, WordBreak::MidLetter),
    (0x2028, 0x2029, WordBreak::Newline),
    (0x202A, 0x202E, WordBreak::Format),
    (0x202F, 0x202F, WordBreak::ExtendNumLet),
    (0x2030, 0x203E, WordBreak::Other),
    (0x203F, 0x2040, WordBreak::ExtendNumLet),
    (0x2041, 0x2043, WordBreak::Other),
    (0x2044, 0x2044, WordBreak::MidNum),
    (0x2045, 0x2053, WordBreak::Other),
    (0x2054, 0x2054, WordBreak::ExtendNumLet),
    (0x2055, 0x205E, WordBreak::Other),
    (0x205F, 0x205F, WordBreak::WSegSpace),
    (0x2060, 0x2064, WordBreak::Format),
    (0x2065, 0x2065, WordBreak::Other),
    (0x2066, 0x206F, WordBreak::Format),
    (0x2070, 0x2070, WordBreak::Other),
    (0x2071, 0x2071, WordBreak::ALetter),
    (0x2072, 0x207E, WordBreak::Other),
    (0x207F, 0x207F, WordBreak::ALetter),
    (0x2080, 0x208F, WordBreak::Other),
    (0x2090, 0x209C, WordBreak::ALetter),
    (0x209D, 0x20CF, WordBreak::Other),
    (0x20D0, 0x20F0, WordBreak::Extend),
    (0x20F1, 0x2101, WordBreak::Other),
    (0x2102, 0x2102, WordBreak::ALetter),
    (0x2103, 0x2106, WordBreak::Other),
    (0x2107, 0x2107, WordBreak::ALetter),
    (0x2108, 0x2109, WordBreak::Other),
    (0x210A, 0x2113, WordBreak::ALetter),
    (0x2114, 0x2114, WordBreak::Other),
    (0x2115, 0x2115, WordBreak::ALetter),
    (0x2116, 0x2118, WordBreak::Other),
    (0x2119, 0x211D, WordBreak::ALetter),
    (0x211E, 0x2123, WordBreak::Other),
    (0x2124, 0x2124, WordBreak::ALetter),
    (0x2125, 0x2125, WordBreak::Other),
    (0x2126, 0x2126, WordBreak::ALetter),
    (0x2127, 0x2127, WordBreak::Other),
    (0x2128, 0x2128, WordBreak::ALetter),
    (0x2129, 0x2129, WordBreak::Other),
    (0x212A, 0x212D, WordBreak::ALetter),
    (0x212E, 0x212E, WordBreak::Other),
    (0x212F, 0x2139, WordBreak::ALetter),
    (0x213A, 0x213B, WordBreak::Other),
    (0x213C, 0x213F, WordBreak::ALetter),
    (0x2140, 0x2144, WordBreak::Other),
    (0x2145, 0x2149, WordBreak::ALetter),
    (0x214A, 0x214D, WordBreak::Other),
    (0x214E, 0x214E, WordBreak::ALetter),
    (0x214F, 0x215F, WordBreak::Other),
    (0x2160, 0x2188, WordBreak::ALetter),
    (0x2189, 0x24B5, WordBreak::Other),
    (0x24B6, 0x24E9, WordBreak::ALetter),
    (0x24EA, 0x2BFF, WordBreak::Other),
    (0x2C00, 0x2CE4, WordBreak::ALetter),
    (0x2CE5, 0x2CEA, WordBreak::Other),
    (0x2CEB, 0x2CEE, WordBreak::ALetter),
    (0x2CEF, 0x2CF1, WordBreak::Extend),
    (0x2CF2, 0x2CF3, WordBreak::ALetter),
    (0x2CF4, 0x2CFF, WordBreak::Other),
    (0x2D00, 0x2D25, WordBreak::ALetter),
    (0x2D26, 0x2D26, WordBreak::Other),
    (0x2D27, 0x2D27, WordBreak::ALetter),
    (0x2D28, 0x2D2C, WordBreak::Other),
    (0x2D2D, 0x2D2D, WordBreak::ALetter),
    (0x2D2E, 0x2D2F, WordBreak::Other),
    (0x2D30, 0x2D67, WordBreak::ALetter),
    (0x2D68, 0x2D6E, WordBreak::Other),
    (0x2D6F, 0x2D6F, WordBreak::ALetter),
    (0x2D70, 0x2D7E, WordBreak::Other),
    (0x2D7F, 0x2D7F, WordBreak::Extend),
    (0x2D80, 0x2D96, WordBreak::ALetter),
    (0x2D97, 0x2D9F, WordBreak::Other),
    (0x2DA0, 0x2DA6, WordBreak::ALetter),
    (0x2DA7, 0x2DA7, WordBreak::Other),
    (0x2DA8, 0x2DAE, WordBreak::ALetter),
    (0x2DAF, 0x2DAF, WordBreak::Other),
    (0x2DB0, 0x2DB6, WordBreak::ALetter),
    (0x2DB7, 0x2DB7, WordBreak::Other),
    (0x2DB8, 0x2DBE, WordBreak::ALetter),
    (0x2DBF, 0x2DBF, WordBreak::Other),
    (0x2DC0, 0x2DC6, WordBreak::ALetter),
    (0x2DC7, 0x2DC7, WordBreak::Other),
    (0x2DC8, 0x2DCE, WordBreak::ALetter),
    (0x2DCF, 0x2DCF, WordBreak::Other),
    (0x2DD0, 0x2DD6, WordBreak::ALetter),
    (0x2DD7, 0x2DD7, WordBreak::Other),
    (0x2DD8, 0x2DDE, WordBreak::ALetter),
    (0x2DDF, 0x2DDF, WordBreak::Other),
    (0x2DE0, 0x2DFF, WordBreak::Extend),
    (0x2E00, 0x2E2E, WordBreak::Other),
    (0x2E2F, 0x2E2F, WordBreak::ALetter),
    (0x2E30, 0x2FFF, WordBreak::Other),
    (0x3000, 0x3000, WordBreak::WSegSpace),
    (0x3001, 0x3004, WordBreak::Other),
    (0x3005, 0x3005, WordBreak::ALetter),
    (0x3006, 0x3029, WordBreak::Other),
    (0x302A, 0x302F, WordBreak::Extend),
    (0x3030, 0x3030, WordBreak::Other),
    (0x3031, 0x3035, WordBreak::Katakana),
    (0x3036, 0x303A, WordBreak::Other),
    (0x303B, 0x303C, WordBreak::ALetter),
    (0x303D, 0x3098, WordBreak::Other),
    (0x3099, 0x309A, WordBreak::Extend),
    (0x309B, 0x309C, WordBreak::Katakana),
    (0x309D, 0x309F, WordBreak::Other),
    (0x30A0, 0x30FA, WordBreak::Katakana),
    (0x30FB, 0x30FB, WordBreak::Other),
    (0x30FC, 0x30FF, WordBreak::Katakana),
    (0x3100, 0x3104, WordBreak::Other),
    (0x3105, 0x312F, WordBreak::ALetter),
    (0x3130, 0x3130, WordBreak::Other),
    (0x3131, 0x318E, WordBreak::ALetter),
    (0x318F, 0x319F, WordBreak::Other),
    (0x31A0, 0x31BF, WordBreak::ALetter),
    (0x31C0, 0x31EF, WordBreak::Other),
    (0x31F0, 0x31FF, WordBreak::Katakana),
    (0x3200, 0x32CF, WordBreak::Other),
    (0x32D0, 0x32FE, WordBreak::Katakana),
    (0x32FF, 0x32FF, WordBreak::Other),
    (0x3300, 0x3357, WordBreak::Katakana),
    (0x3358, 0x9FFF, WordBreak::Other),
    (0xA000, 0xA48C, WordBreak::ALetter),
    (0xA48D, 0xA4CF, WordBreak::Other),
    (0xA4D0, 0xA4FD, WordBreak::ALetter),
    (0xA4FE, 0xA4FF, WordBreak::Other),
    (0xA500, 0xA60C, WordBreak::ALetter),
    (0xA60D, 0xA60F, WordBreak::Other),
    (0xA610, 0xA61F, WordBreak::ALetter),
    (0xA620, 0xA629, WordBreak::Numeric),
    (0xA62A, 0xA62B, WordBreak::ALetter),
    (0xA62C, 0xA63F, WordBreak::Other),
    (0xA640, 0xA66E, WordBreak::ALetter),
    (0xA66F, 0xA672, WordBreak::Extend),
    (0xA673, 0xA673, WordBreak::Other),
    (0xA674, 0xA67D, WordBreak::Extend),
    (0xA67E, 0xA67E, WordBreak::Other),
    (0xA67F, 0xA69D, WordBreak::ALetter),
    (0xA69E, 0xA69F, WordBreak::Extend),
    (0xA6A0, 0xA6EF, WordBreak::ALetter),
    (0xA6F0, 0xA6F1, WordBreak::Extend),
    (0xA6F2, 0xA707, WordBreak::Other),
    (0xA708, 0xA7DC, WordBreak::ALetter),
    (0xA7DD, 0xA7F0, WordBreak::Other),
    (0xA7F1, 0xA801, WordBreak::ALetter),
    (0xA802, 0xA802, WordBreak::Extend),
    (0xA803, 0xA805, WordBreak::ALetter),
    (0xA806, 0xA806, WordBreak::Extend),
    (0xA807, 0xA80A, WordBreak::ALetter),
    (0xA80B, 0xA80B, WordBreak::Extend),
    (0xA80C, 0xA822, WordBreak::ALetter),
    (0xA823, 0xA827, WordBreak::Extend),
    (0xA828, 0xA82B, WordBreak::Other),
    (0xA82C, 0xA82C, WordBreak::Extend),
    (0xA82D, 0xA83F, WordBreak::Other),
    (0xA840, 0xA873, WordBreak::ALetter),
    (0xA874, 0xA87F, WordBreak::Other),
    (0xA880, 0xA881, WordBreak::Extend),
    (0xA882, 0xA8B3, WordBreak::ALetter),
    (0xA8B4, 0xA8C5, WordBreak::Extend),
    (0xA8C6, 0xA8CF, WordBreak::Other),
    (0xA8D0, 0xA8D9, WordBreak::Numeric),
    (0xA8DA, 0xA8DF, WordBreak::Other),
    (0xA8E0, 0xA8F1, WordBreak::Extend),
    (0xA8F2, 0xA8F7, WordBreak::ALetter),
    (0xA8F8, 0xA8FA, WordBreak::Other),
    (0xA8FB, 0xA8FB, WordBreak::ALetter),
    (0xA8FC, 0xA8FC, WordBreak::Other),
    (0xA8FD, 0xA8FE, WordBreak::ALetter),
    (0xA8FF, 0xA8FF, WordBreak::Extend),
    (0xA900, 0xA909, WordBreak::Numeric),
    (0xA90A, 0xA925, WordBreak::ALetter),
    (0xA926, 0xA92D, WordBreak::Extend),
    (0xA92E, 0xA92F, WordBreak::Other),
    (0xA930, 0xA946, WordBreak::ALetter),
    (0xA947, 0xA953, WordBreak::Extend),
    (0xA954, 0xA95F, WordBreak::Other),
    (0xA960, 0xA97C, WordBreak::ALetter),
    (0xA97D, 0xA97F, WordBreak::Other),
    (0xA980, 0xA983, WordBreak::Extend),
    (0xA984, 0xA9B2, WordBreak::ALetter),
    (0xA9B3, 0xA9C0, WordBreak::Extend),
    (0xA9C1, 0xA9CE, WordBreak::Other),
    (0xA9CF, 0xA9CF, WordBreak::ALetter),
    (0xA9D0, 0xA9D9, WordBreak::Numeric),
    (0xA9DA, 0xA9E4, WordBreak::Other),
    (0xA9E5, 0xA9E5, WordBreak::Extend),
    (0xA9E6, 0xA9EF, WordBreak::Other),
    (0xA9F0, 0xA9F9, WordBreak::Numeric),
    (0xA9FA, 0xA9FF, WordBreak::Other),
    (0xAA00, 0xAA28, WordBreak::ALetter),
    (0xAA29, 0xAA36, WordBreak::Extend),
    (0xAA37, 0xAA3F, WordBreak::Other),
    (0xAA40, 0xAA42, WordBreak::ALetter),
    (0xAA43, 0xAA43, WordBreak::Extend),
    (0xAA44, 0xAA4B, WordBreak::ALetter),
    (0xAA4C, 0xAA4D, WordBreak::Extend),
    (0xAA4E, 0xAA4F, WordBreak::Other),
    (0xAA50, 0xAA59, WordBreak::Numeric),
    (0xAA5A, 0xAA7A, WordBreak::Other),
    (0xAA7B, 0xAA7D, WordBreak::Extend),
    (0xAA7E, 0xAAAF, WordBreak::Other),
    (0xAAB0, 0xAAB0, WordBreak::Extend),
    (0xAAB1, 0xAAB1, WordBreak::Other),
    (0xAAB2, 0xAAB4, WordBreak::Extend),
    (0xAAB5, 0xAAB6, WordBreak::Other),
    (0xAAB7, 0xAAB8, WordBreak::Extend),
    (0xAAB9, 0xAABD, WordBreak::Other),
    (0xAABE, 0xAABF, WordBreak::Extend),
    (0xAAC0, 0xAAC0, WordBreak::Other),
    (0xAAC1, 0xAAC1, WordBreak::Extend),
    (0xAAC2, 0xAADF, WordBreak::Other),
    (0xAAE0, 0xAAEA, WordBreak::ALetter),
    (0xAAEB, 0xAAEF, WordBreak::Extend),
    (0xAAF0, 0xAAF1, WordBreak::Other),
    (0xAAF2, 0xAAF4, WordBreak::ALetter),
    (0xAAF5, 0xAAF6, WordBreak::Extend),
    (0xAAF7, 0xAB00, WordBreak::Other),
    (0xAB01, 0xAB06, WordBreak::ALetter),
    (0xAB07, 0xAB08, WordBreak::Other),
    (0xAB09, 0xAB0E, WordBreak::ALetter),
    (0xAB0F, 0xAB10, WordBreak::Other),
    (0xAB11, 0xAB16, WordBreak::ALetter),
    (0xAB17, 0xAB1F, WordBreak::Other),
    (0xAB20, 0xAB26, WordBreak::ALetter),
    (0xAB27, 0xAB27, WordBreak::Other),
    (0xAB28, 0xAB2E, WordBreak::ALetter),
    (0xAB2F, 0xAB2F, WordBreak::Other),
    (0xAB30, 0xAB69, WordBreak::ALetter),
    (0xAB6A, 0xAB6F, WordBreak::Other),
    (0xAB70, 0xABE2, WordBreak::ALetter),
    (0xABE3, 0xABEA, WordBreak::Extend),
    (0xABEB, 0xABEB, WordBreak::Other),
    (0xABEC, 0xABED, WordBreak::Extend),
    (0xABEE, 0xABEF, WordBreak::Other),
    (0xABF0, 0xABF9, WordBreak::Numeric),
    (0xABFA, 0xABFF, WordBreak::Other),
    (0xAC00, 0xD7A3, WordBreak::ALetter),
    (0xD7A4, 0xD7AF, WordBreak::Other),
    (0xD7B0, 0xD7C6, WordBreak::ALetter),
    (0xD7C7, 0xD7CA, WordBreak::Other),
    (0xD7CB, 0xD7FB, WordBreak::ALetter),
    (0xD7FC, 0xD7FF, WordBreak::Other),
    (0xD800, 0xDFFF, WordBreak::WSegSpace),
    (0xE000, 0xFAFF, WordBreak::Other),
    (0xFB00, 0xFB06, WordBreak::ALetter),
    (0xFB07, 0xFB12, WordBreak::Other),
    (0xFB13, 0xFB17, WordBreak::ALetter),
    (0xFB18, 0xFB1C, WordBreak::Other),
    (0xFB1D, 0xFB1D, WordBreak::HebrewLetter),
    (0xFB1E, 0xFB1E, WordBreak::Extend),
    (0xFB1F, 0xFB28, WordBreak::HebrewLetter),
    (0xFB29, 0xFB29, WordBreak::Other),
    (0xFB2A, 0xFB36, WordBreak::HebrewLetter),
    (0xFB37, 0xFB37, WordBreak::Other),
    (0xFB38, 0xFB3C, WordBreak::HebrewLetter),
    (0xFB3D, 0xFB3D, WordBreak::Other),
    (0xFB3E, 0xFB3E, WordBreak::HebrewLetter),
    (0xFB3F, 0xFB3F, WordBreak::Other),
    (0xFB40, 0xFB41, WordBreak::HebrewLetter),
    (0xFB42, 0xFB42, WordBreak::Other),
    (0xFB43, 0xFB44, WordBreak::HebrewLetter),
    (0xFB45, 0xFB45, WordBreak::Other),
    (0xFB46, 0xFB4F, WordBreak::HebrewLetter),
    (0xFB50, 0xFBB1, WordBreak::ALetter),
    (0xFBB2, 0xFBD2, WordBreak::Other),
    (0xFBD3, 0xFD3D, WordBreak::ALetter),
    (0xFD3E, 0xFD4F, WordBreak::Other),
    (0xFD50, 0xFD8F, WordBreak::ALetter),
    (0xFD90, 0xFD91, WordBreak::Other),
    (0xFD92, 0xFDC7, WordBreak::ALetter),
    (0xFDC8, 0xFDEF, WordBreak::Other),
    (0xFDF0, 0xFDFB, WordBreak::ALetter),
    (0xFDFC, 0xFDFF, WordBreak::Other),
    (0xFE00, 0xFE0F, WordBreak::Extend),
    (0xFE10, 0xFE12, WordBreak::Other),
    (0xFE13, 0xFE13, WordBreak::MidLetter),
    (0xFE14, 0xFE1F, WordBreak::Other),
    (0xFE20, 0xFE2F, WordBreak::Extend),
    (0xFE30, 0xFE32, WordBreak::Other),
    (0xFE33, 0xFE34, WordBreak::ExtendNumLet),
    (0xFE35, 0xFE4C, WordBreak::Other),
    (0xFE4D, 0xFE4F, WordBreak::ExtendNumLet),
    (0xFE50, 0xFE50, WordBreak::MidNum),
    (0xFE51, 0xFE51, WordBreak::Other),
    (0xFE52, 0xFE52, WordBreak::MidNumLet),
    (0xFE53, 0xFE53, WordBreak::Other),
    (0xFE54, 0xFE54, WordBreak::MidNum),
    (0xFE55, 0xFE55, WordBreak::MidLetter),
    (0xFE56, 0xFE6F, WordBreak::Other),
    (0xFE70, 0xFE74, WordBreak::ALetter),
    (0xFE75, 0xFE75, WordBreak::Other),
    (0xFE76, 0xFEFC, WordBreak::ALetter),
    (0xFEFD, 0xFEFE, WordBreak::Other),
    (0xFEFF, 0xFEFF, WordBreak::Format),
    (0xFF00, 0xFF06, WordBreak::Other),
    (0xFF07, 0xFF07, WordBreak::MidNumLet),
    (0xFF08, 0xFF0B, WordBreak::Other),
    (0xFF0C, 0xFF0C, WordBreak::MidNum),
    (0xFF0D, 0xFF0D, WordBreak::Other),
    (0xFF0E, 0xFF0E, WordBreak::MidNumLet),
    (0xFF0F, 0xFF0F, WordBreak::Other),
    (0xFF10, 0xFF19, WordBreak::Numeric),
    (0xFF1A, 0xFF1A, WordBreak::MidLetter),
    (0xFF1B, 0xFF1B, WordBreak::MidNum),
    (0xFF1C, 0xFF20, WordBreak::Other),
    (0xFF21, 0xFF3A, WordBreak::ALetter),
    (0xFF3B, 0xFF3E, WordBreak::Other),
    (0xFF3F, 0xFF3F, WordBreak::ExtendNumLet),
    (0xFF40, 0xFF40, WordBreak::Other),
    (0xFF41, 0xFF5A, WordBreak::ALetter),
    (0xFF5B, 0xFF65, WordBreak::Other),
    (0xFF66, 0xFF9D, WordBreak::Katakana),
    (0xFF9E, 0xFF9F, WordBreak::Extend),
    (0xFFA0, 0xFFBE, WordBreak::ALetter),
    (0xFFBF, 0xFFC1, WordBreak::Other),
    (0xFFC2, 0xFFC7, WordBreak::ALetter),
    (0xFFC8, 0xFFC9, WordBreak::Other),
    (0xFFCA, 0xFFCF, WordBreak::ALetter),
    (0xFFD0, 0xFFD1, WordBreak::Other),
    (0xFFD2, 0xFFD7, WordBreak::ALetter),
    (0xFFD8, 0xFFD9, WordBreak::Other),
    (0xFFDA, 0xFFDC, WordBreak::ALetter),
    (0xFFDD, 0xFFF8, WordBreak::Other),
    (0xFFF9, 0xFFFB, WordBreak::Format),
    (0xFFFC, 0xFFFF, WordBreak::Other),
    (0x10000, 0x1000B, WordBreak::ALetter),
    (0x1000C, 0x1000C, WordBreak::Other),
    (0x1000D, 0x10026, WordBreak::ALetter),
    (0x10027, 0x10027, WordBreak::Other),
    (0x10028, 0x1003A, WordBreak::ALetter),
    (0x1003B, 0x1003B, WordBreak::Other),
    (0x1003C, 0x1003D, WordBreak::ALetter),
    (0x1003E, 0x1003E, WordBreak::Other),
    (0x1003F, 0x1004D, WordBreak::ALetter),
    (0x1004E, 0x1004F, WordBreak::Other),
    (0x10050, 0x1005D, WordBreak::ALetter),
    (0x1005E, 0x1007F, WordBreak::Other),
    (0x10080, 0x100FA, WordBreak::ALetter),
    (0x100FB, 0x1013F, WordBreak::Other),
    (0x10140, 0x10174, WordBreak::ALetter),
    (0x10175, 0x101FC, WordBreak::Other),
    (0x101FD, 0x101FD, WordBreak::Extend),
    (0x101FE, 0x1027F, WordBreak::Other),
    (0x10280, 0x1029C, WordBreak::ALetter),
    (0x1029D, 0x1029F, WordBreak::Other),
    (0x102A0, 0x102D0, WordBreak::ALetter),
    (0x102D1, 0x102DF, WordBreak::Other),
    (0x102E0, 0x102E0, WordBreak::Extend),
    (0x102E1, 0x102FF, WordBreak::Other),
    (0x10300, 0x1031F, WordBreak::ALetter),
    (0x10320, 0x1032C, WordBreak::Other),
    (0x1032D, 0x1034A, WordBreak::ALetter),
    (0x1034B, 0x1034F, WordBreak::Other),
    (0x10350, 0x10375, WordBreak::ALetter),
    (0x10376, 0x1037A, WordBreak::Extend),
    (0x1037B, 0x1037F, WordBreak::Other),
    (0x10380, 0x1039D, WordBreak::ALetter),
    (0x1039E, 0x1039F, WordBreak::Other),
    (0x103A0, 0x103C3, WordBreak::ALetter),
    (0x103C4, 0x103C7, WordBreak::Other),
    (0x103C8, 0x103CF, WordBreak::ALetter),
    (0x103D0, 0x103D0, WordBreak::Other),
    (0x103D1, 0x103D5, WordBreak::ALetter),
    (0x103D6, 0x103FF, WordBreak::Other),
    (0x10400, 0x1049D, WordBreak::ALetter),
    (0x1049E, 0x1049F, WordBreak::Other),
    (0x104A0, 0x104A9, WordBreak::Numeric),
    (0x104AA, 0x104AF, WordBreak::Other),
    (0x104B0, 0x104D3, WordBreak::ALetter),
    (0x104D4, 0x104D7, WordBreak::Other),
    (0x104D8, 0x104FB, WordBreak::ALetter),
    (0x104FC, 0x104FF, WordBreak::Other),
    (0x10500, 0x10527, WordBreak::ALetter),
    (0x10528, 0x1052F, WordBreak::Other),
    (0x10530, 0x10563, WordBreak::ALetter),
    (0x10564, 0x1056F, WordBreak::Other),
    (0x10570, 0x1057A, WordBreak::ALetter),
    (0x1057B, 0x1057B, WordBreak::Other),
    (0x1057C, 0x1058A, WordBreak::ALetter),
    (0x1058B, 0x1058B, WordBreak::Other),
    (0x1058C, 0x10592, WordBreak::ALetter),
    (0x10593, 0x10593, WordBreak::Other),
    (0x10594, 0x10595, WordBreak::ALetter),
    (0x10596, 0x10596, WordBreak::Other),
    (0x10597, 0x105A1, WordBreak::ALetter),
    (0x105A2, 0x105A2, WordBreak::Other),
    (0x105A3, 0x105B1, WordBreak::ALetter),
    (0x105B2, 0x105B2, WordBreak::Other),
    (0x105B3, 0x105B9, WordBreak::ALetter),
    (0x105BA, 0x105BA, WordBreak::Other),
    (0x105BB, 0x105BC, WordBreak::ALetter),
    (0x105BD, 0x105BF, WordBreak::Other),
    (0x105C0, 0x105F3, WordBreak::ALetter),
    (0x105F4, 0x105FF, WordBreak::Other),
    (0x10600, 0x10736, WordBreak::ALetter),
    (0x10737, 0x1073F, WordBreak::Other),
    (0x10740, 0x10755, WordBreak::ALetter),
    (0x10756, 0x1075F, WordBreak::Other),
    (0x10760, 0x10767, WordBreak::ALetter),
    (0x10768, 0x1077F, WordBreak::Other),
    (0x10780, 0x10785, WordBreak::ALetter),
    (0x10786, 0x10786, WordBreak::Other),
    (0x10787, 0x107B0, WordBreak::ALetter),
    (0x107B1, 0x107B1, WordBreak::Other),
    (0x107B2, 0x107BA, WordBreak::ALetter),
    (0x107BB, 0x107FF, WordBreak::Other),
    (0x10800, 0x10805, WordBreak::ALetter),
    (0x10806, 0x10807, WordBreak::Other),
    (0x10808, 0x10808, WordBreak::ALetter),
    (0x10809, 0x10809, WordBreak::Other),
    (0x1080A, 0x10835, WordBreak::ALetter),
    (0x10836, 0x10836, WordBreak::Other),
    (0x10837, 0x10838, WordBreak::ALetter),
    (0x10839, 0x1083B, WordBreak::Other),
    (0x1083C, 0x1083C, WordBreak::ALetter),
    (0x1083D, 0x1083E, WordBreak::Other),
    (0x1083F, 0x10855, WordBreak::ALetter),
    (0x10856, 0x1085F, WordBreak::Other),
    (0x10860, 0x10876, WordBreak::ALetter),
    (0x10877, 0x1087F, WordBreak::Other),
    (0x10880, 0x1089E, WordBreak::ALetter),
    (0x1089F, 0x108DF, WordBreak::Other),
    (0x108E0, 0x108F2, WordBreak::ALetter),
    (0x108F3, 0x108F3, WordBreak::Other),
    (0x108F4, 0x108F5, WordBreak::ALetter),
    (0x108F6, 0x108FF, WordBreak::Other),
    (0x10900, 0x10915, WordBreak::ALetter),
    (0x10916, 0x1091F, WordBreak::Other),
    (0x10920, 0x10939, WordBreak::ALetter),
    (0x1093A, 0x1093F, WordBreak::Other),
    (0x10940, 0x10959, WordBreak::ALetter),
    (0x1095A, 0x1097F, WordBreak::Other),
    (0x10980, 0x109B7, WordBreak::ALetter),
    (0x109B8, 0x109BD, WordBreak::Other),
    (0x109BE, 0x109BF, WordBreak::ALetter),
    (0x109C0, 0x109FF, WordBreak::Other),
    (0x10A00, 0x10A00, WordBreak::ALetter),
    (0x10A01, 0x10A03, WordBreak::Extend),
    (0x10A04, 0x10A04, WordBreak::Other),
    (0x10A05, 0x10A06, WordBreak::Extend),
    (0x10A07, 0x10A0B, WordBreak::Other),
    (0x10A0C, 0x10A0F, WordBreak::Extend),
    (0x10A10, 0x10A13, WordBreak::ALetter),
    (0x10A14, 0x10A14, WordBreak::Other),
    (0x10A15, 0x10A17, WordBreak::ALetter),
    (0x10A18, 0x10A18, WordBreak::Other),
    (0x10A19, 0x10A35, WordBreak::ALetter),
    (0x10A36, 0x10A37, WordBreak::Other),
    (0x10A38, 0x10A3A, WordBreak::Extend),
    (0x10A3B, 0x10A3E, WordBreak::Other),
    (0x10A3F, 0x10A3F, WordBreak::Extend),
    (0x10A40, 0x10A5F, WordBreak::Other),
    (0x10A60, 0x10A7C, WordBreak::ALetter),
    (0x10A7D, 0x10A7F, WordBreak::Other),
    (0x10A80, 0x10A9C, WordBreak::ALetter),
    (0x10A9D, 0x10ABF, WordBreak::Other),
    (0x10AC0, 0x10AC7, WordBreak::ALetter),
    (0x10AC8, 0x10AC8, WordBreak::Other),
    (0x10AC9, 0x10AE4, WordBreak::ALetter),
    (0x10AE5, 0x10AE6, WordBreak::Extend),
    (0x10AE7, 0x10AFF, WordBreak::Other),
    (0x10B00, 0x10B35, WordBreak::ALetter),
    (0x10B36, 0x10B3F, WordBreak::Other),
    (0x10B40, 0x10B55, WordBreak::ALetter),
    (0x10B56, 0x10B5F, WordBreak::Other),
    (0x10B60, 0x10B72, WordBreak::ALetter),
    (0x10B73, 0x10B7F, WordBreak::Other),
    (0x10B80, 0x10B91, WordBreak::ALetter),
    (0x10B92, 0x10BFF, WordBreak::Other),
    (0x10C00, 0x10C48, WordBreak::ALetter),
    (0x10C49, 0x10C7F, WordBreak::Other),
    (0x10C80, 0x10CB2, WordBreak::ALetter),
    (0x10CB3, 0x10CBF, WordBreak::Other),
    (0x10CC0, 0x10CF2, WordBreak::ALetter),
    (0x10CF3, 0x10CFF, WordBreak::Other),
    (0x10D00, 0x10D23, WordBreak::ALetter),
    (0x10D24, 0x10D27, WordBreak::Extend),
    (0x10D28, 0x10D2F, WordBreak::Other),
    (0x10D30, 0x10D39, WordBreak::Numeric),
    (0x10D3A, 0x10D3F, WordBreak::Other),
    (0x10D40, 0x10D49, WordBreak::Numeric),
    (0x10D4A, 0x10D65, WordBreak::ALetter),
    (0x10D66, 0x10D68, WordBreak::Other),
    (0x10D69, 0x10D6D, WordBreak::Extend),
    (0x10D6E, 0x10D6E, WordBreak::Other),
    (0x10D6F, 0x10D85, WordBreak::ALetter),
    (0x10D86, 0x10E7F, WordBreak::Other),
    (0x10E80, 0x10EA9, WordBreak::ALetter),
    (0x10EAA, 0x10EAA, WordBreak::Other),
    (0x10EAB, 0x10EAC, WordBreak::Extend),
    (0x10EAD, 0x10EAF, WordBreak::Other),
    (0x10EB0, 0x10EB1, WordBreak::ALetter),
    (0x10EB2, 0x10EC1, WordBreak::Other),
    (0x10EC2, 0x10EC7, WordBreak::ALetter),
    (0x10EC8, 0x10EF9, WordBreak::Other),
    (0x10EFA, 0x10EFF, WordBreak::Extend),
    (0x10F00, 0x10F1C, WordBreak::ALetter),
    (0x10F1D, 0x10F26, WordBreak::Other),
    (0x10F27, 0x10F27, WordBreak::ALetter),
    (0x10F28, 0x10F2F, WordBreak::Other),
    (0x10F30, 0x10F45, WordBreak::ALetter),
    (0x10F46, 0x10F50, WordBreak::Extend),
    (0x10F51, 0x10F6F, WordBreak::Other),
    (0x10F70, 0x10F81, WordBreak::ALetter),
    (0x10F82, 0x10F85, WordBreak::Extend),
    (0x10F86, 0x10FAF, WordBreak::Other),
    (0x10FB0, 0x10FC4, WordBreak::ALetter),
    (0x10FC5, 0x10FDF, WordBreak::Other),
    (0x10FE0, 0x10FF6, WordBreak::ALetter),
    (0x10FF7, 0x10FFF, WordBreak::Other),
    (0x11000, 0x11002, WordBreak::Extend),
    (0x11003, 0x11037, WordBreak::ALetter),
    (0x11038, 0x11046, WordBreak::Extend),
    (0x11047, 0x11065, WordBreak::Other),
    (0x11066, 0x1106F, WordBreak::Numeric),
    (0x11070, 0x11070, WordBreak::Extend),
    (0x11071, 0x11072, WordBreak::ALetter),
    (0x11073, 0x11074, WordBreak::Extend),
    (0x11075, 0x11075, WordBreak::ALetter),
    (0x11076, 0x1107E, WordBreak::Other),
    (0x1107F, 0x11082, WordBreak::Extend),
    (0x11083, 0x110AF, WordBreak::ALetter),
    (0x110B0, 0x110BA, WordBreak::Extend),
    (0x110BB, 0x110BC, WordBreak::Other),
    (0x110BD, 0x110BD, WordBreak::Numeric),
    (0x110BE, 0x110C1, WordBreak::Other),
    (0x110C2, 0x110C2, WordBreak::Extend),
    (0x110C3, 0x110CC, WordBreak::Other),
    (0x110CD, 0x110CD, WordBreak::Numeric),
    (0x110CE, 0x110CF, WordBreak::Other),
    (0x110D0, 0x110E8, WordBreak::ALetter),
    (0x110E9, 0x110EF, WordBreak::Other),
    (0x110F0, 0x110F9, WordBreak::Numeric),
    (0x110FA, 0x110FF, WordBreak::Other),
    (0x11100, 0x11102, WordBreak::Extend),
    (0x11103, 0x11126, WordBreak::ALetter),
    (0x11127, 0x11134, WordBreak::Extend),
    (0x11135, 0x11135, WordBreak::Other),
    (0x11136, 0x1113F, WordBreak::Numeric),
    (0x11140, 0x11143, WordBreak::Other),
    (0x11144, 0x11144, WordBreak::ALetter),
    (0x11145, 0x11146, WordBreak::Extend),
    (0x11147, 0x11147, WordBreak::ALetter),
    (0x11148, 0x1114F, WordBreak::Other),
    (0x11150, 0x11172, WordBreak::ALetter),
    (0x11173, 0x11173, WordBreak::Extend),
    (0x11174, 0x11175, WordBreak::Other),
    (0x11176, 0x11176, WordBreak::ALetter),
    (0x11177, 0x1117F, WordBreak::Other),
    (0x11180, 0x11182, WordBreak::Extend),
    (0x11183, 0x111B2, WordBreak::ALetter),
    (0x111B3, 0x111C0, WordBreak::Extend),
    (0x111C1, 0x111C4, WordBreak::ALetter),
    (0x111C5, 0x111C8, WordBreak::Other),
    (0x111C9, 0x111CC, WordBreak::Extend),
    (0x111CD, 0x111CD, WordBreak::Other),
    (0x111CE, 0x111CF, WordBreak::Extend),
    (0x111D0, 0x111D9, WordBreak::Numeric),
    (0x111DA, 0x111DA, WordBreak::ALetter),
    (0x111DB, 0x111DB, WordBreak::Other),
    (0x111DC, 0x111DC, WordBreak::ALetter),
    (0x111DD, 0x111FF, WordBreak::Other),
    (0x11200, 0x11211, WordBreak::ALetter),
    (0x11212, 0x11212, WordBreak::Other),
    (0x11213, 0x1122B, WordBreak::ALetter),
    (0x1122C, 0x11237, WordBreak::Extend),
    (0x11238, 0x1123D, WordBreak::Other),
    (0x1123E, 0x1123E, WordBreak::Extend),
    (0x1123F, 0x11240, WordBreak::ALetter),
    (0x11241, 0x11241, WordBreak::Extend),
    (0x11242, 0x1127F, WordBreak::Other),
    (0x11280, 0x11286, WordBreak::ALetter),
    (0x11287, 0x11287, WordBreak::Other),
    (0x11288, 0x11288, WordBreak::ALetter),
    (0x11289, 0x11289, WordBreak::Other),
    (0x1128A, 0x1128D, WordBreak::ALetter),
    (0x1128E, 0x1128E, WordBreak::Other),
    (0x1128F, 0x1129D, WordBreak::ALetter),
    (0x1129E, 0x1129E, WordBreak::Other),
    (0x1129F, 0x112A8, WordBreak::ALetter),
    (0x112A9, 0x112AF, WordBreak::Other),
    (0x112B0, 0x112DE, WordBreak::ALetter),
    (0x112DF, 0x112EA, WordBreak::Extend),
    (0x112EB, 0x112EF, WordBreak::Other),
    (0x112F0, 0x112F9, WordBreak::Numeric),
    (0x112FA, 0x112FF, WordBreak::Other),
    (0x11300, 0x11303, WordBreak::Extend),
    (0x11304, 0x11304, WordBreak::Other),
    (0x11305, 0x1130C, WordBreak::ALetter),
    (0x1130D, 0x1130E, WordBreak::Other),
    (0x1130F, 0x11310, WordBreak::ALetter),
    (0x11311, 0x11312, WordBreak::Other),
    (0x11313, 0x11328, WordBreak::ALetter),
    (0x11329, 0x11329, WordBreak::Other),
    (0x1132A, 0x11330, WordBreak::ALetter),
    (0x11331, 0x11331, WordBreak::Other),
    (0x11332, 0x11333, WordBreak::ALetter),
    (0x11334, 0x11334, WordBreak::Other),
    (0x11335, 0x11339, WordBreak::ALetter),
    (0x1133A, 0x1133A, WordBreak::Other),
    (0x1133B, 0x1133C, WordBreak::Extend),
    (0x1133D, 0x1133D, WordBreak::ALetter),
    (0x1133E, 0x11344, WordBreak::Extend),
    (0x11345, 0x11346, WordBreak::Other),
    (0x11347, 0x11348, WordBreak::Extend),
    (0x11349, 0x1134A, WordBreak::Other),
    (0x1134B, 0x1134D, WordBreak::Extend),
    (0x1134E, 0x1134F, WordBreak::Other),
    (0x11350, 0x11350, WordBreak::ALetter),
    (0x11351, 0x11356, WordBreak::Other),
    (0x11357, 0x11357, WordBreak::Extend),
    (0x11358, 0x1135C, WordBreak::Other),
    (0x1135D, 0x11361, WordBreak::ALetter),
    (0x11362, 0x11363, WordBreak::Extend),
    (0x11364, 0x11365, WordBreak::Other),
    (0x11366, 0x1136C, WordBreak::Extend),
    (0x1136D, 0x1136F, WordBreak::Other),
    (0x11370, 0x11374, WordBreak::Extend),
    (0x11375, 0x1137F, WordBreak::Other),
    (0x11380, 0x11389, WordBreak::ALetter),
    (0x1138A, 0x1138A, WordBreak::Other),
    (0x1138B, 0x1138B, WordBreak::ALetter),
    (0x1138C, 0x1138D, WordBreak::Other),
    (0x1138E, 0x1138E, WordBreak::ALetter),
    (0x1138F, 0x1138F, WordBreak::Other),
    (0x11390, 0x113B5, WordBreak::ALetter),
    (0x113B6, 0x113B6, WordBreak::Other),
    (0x113B7, 0x113B7, WordBreak::ALetter),
    (0x113B8, 0x113C0, WordBreak::Extend),
    (0x113C1, 0x113C1, WordBreak::Other),
    (0x113C2, 0x113C2, WordBreak::Extend),
    (0x113C3, 0x113C4, WordBreak::Other),
    (0x113C5, 0x113C5, WordBreak::Extend),
    (0x113C6, 0x113C6, WordBreak::Other),
    (0x113C7, 0x113CA, WordBreak::Extend),
    (0x113CB, 0x113CB, WordBreak::Other),
    (0x113CC, 0x113D0, WordBreak::Extend),
    (0x113D1, 0x113D1, WordBreak::ALetter),
    (0x113D2, 0x113D2, WordBreak::Extend),
    (0x113D3, 0x113D3, WordBreak::ALetter),
    (0x113D4, 0x113E0, WordBreak::Other),
    (0x113E1, 0x113E2, WordBreak::Extend),
    (0x113E3, 0x113FF, WordBreak::Other),
    (0x11400, 0x11434, WordBreak::ALetter),
    (0x11435, 0x11446, WordBreak::Extend),
    (0x11447, 0x1144A, WordBreak::ALetter),
    (0x1144B, 0x1144F, WordBreak::Other),
    (0x11450, 0x11459, WordBreak::Numeric),
    (0x1145A, 0x1145D, WordBreak::Other),
    (0x1145E, 0x1145E, WordBreak::Extend),
    (0x1145F, 0x11461, WordBreak::ALetter),
    (0x11462, 0x1147F, WordBreak::Other),
    (0x11480, 0x114AF, WordBreak::ALetter),
    (0x114B0, 0x114C3, WordBreak::Extend),
    (0x114C4, 0x114C5, WordBreak::ALetter),
    (0x114C6, 0x114C6, WordBreak::Other),
    (0x114C7, 0x114C7, WordBreak::ALetter),
    (0x114C8, 0x114CF, WordBreak::Other),
    (0x114D0, 0x114D9, WordBreak::Numeric),
    (0x114DA, 0x1157F, WordBreak::Other),
    (0x11580, 0x115AE, WordBreak::ALetter),
    (0x115AF, 0x115B5, WordBreak::Extend),
    (0x115B6, 0x115B7, WordBreak::Other),
    (0x115B8, 0x115C0, WordBreak::Extend),
    (0x115C1, 0x115D7, WordBreak::Other),
    (0x115D8, 0x115DB, WordBreak::ALetter),
    (0x115DC, 0x115DD, WordBreak::Extend),
    (0x115DE, 0x115FF, WordBreak::Other),
    (0x11600, 0x1162F, WordBreak::ALetter),
    (0x11630, 0x11640, WordBreak::Extend),
    (0x11641, 0x11643, WordBreak::Other),
    (0x11644, 0x11644, WordBreak::ALetter),
    (0x11645, 0x1164F, WordBreak::Other),
    (0x11650, 0x11659, WordBreak::Numeric),
    (0x1165A, 0x1167F, WordBreak::Other),
    (0x11680, 0x116AA, WordBreak::ALetter),
    (0x116AB, 0x116B7, WordBreak::Extend),
    (0x116B8, 0x116B8, WordBreak::ALetter),
    (0x116B9, 0x116BF, WordBreak::Other),
    (0x116C0, 0x116C9, WordBreak::Numeric),
    (0x116CA, 0x116CF, WordBreak::Other),
    (0x116D0, 0x116E3, WordBreak::Numeric),
    (0x116E4, 0x1171C, WordBreak::Other),
    (0x1171D, 0x1172B, WordBreak::Extend),
    (0x1172C, 0x1172F, WordBreak::Other),
    (0x11730, 0x11739, WordBreak::Numeric),
    (0x1173A, 0x117FF, WordBreak::Other),
    (0x11800, 0x1182B, WordBreak::ALetter),
    (0x1182C, 0x1183A, WordBreak::Extend),
    (0x1183B, 0x1189F, WordBreak::Other),
    (0x118A0, 0x118DF, WordBreak::ALetter),
    (0x118E0, 0x118E9, WordBreak::Numeric),
    (0x118EA, 0x118FE, WordBreak::Other),
    (0x118FF, 0x11906, WordBreak::ALetter),
    (0x11907, 0x11908, WordBreak::Other),
    (0x11909, 0x11909, WordBreak::ALetter),
    (0x1190A, 0x1190B, WordBreak::Other),
    (0x1190C, 0x11913, WordBreak::ALetter),
    (0x11914, 0x11914, WordBreak::Other),
    (0x11915, 0x11916, WordBreak::ALetter),
    (0x11917, 0x11917, WordBreak::Other),
    (0x11918, 0x1192F, WordBreak::ALetter),
    (0x11930, 0x11935, WordBreak::Extend),
    (0x11936, 0x11936, WordBreak::Other),
    (0x11937, 0x11938, WordBreak::Extend),
    (0x11939, 0x1193A, WordBreak::Other),
    (0x1193B, 0x1193E, WordBreak::Extend),
    (0x1193F, 0x1193F, WordBreak::ALetter),
    (0x11940, 0x11940, WordBreak::Extend),
    (0x11941, 0x11941, WordBreak::ALetter),
    (0x11942, 0x11943, WordBreak::Extend),
    (0x11944, 0x1194F, WordBreak::Other),
    (0x11950, 0x11959, WordBreak::Numeric),
    (0x1195A, 0x1199F, WordBreak::Other),
    (0x119A0, 0x119A7, WordBreak::ALetter),
    (0x119A8, 0x119A9, WordBreak::Other),
    (0x119AA, 0x119D0, WordBreak::ALetter),
    (0x119D1, 0x119D7, WordBreak::Extend),
    (0x119D8, 0x119D9, WordBreak::Other),
    (0x119DA, 0x119E0, WordBreak::Extend),
    (0x119E1, 0x119E1, WordBreak::ALetter),
    (0x119E2, 0x119E2, WordBreak::Other),
    (0x119E3, 0x119E3, WordBreak::ALetter),
    (0x119E4, 0x119E4, WordBreak::Extend),
    (0x119E5, 0x119FF, WordBreak::Other),
    (0x11A00, 0x11A00, WordBreak::ALetter),
    (0x11A01, 0x11A0A, WordBreak::Extend),
    (0x11A0B, 0x11A32, WordBreak::ALetter),
    (0x11A33, 0x11A39, WordBreak::Extend),
    (0x11A3A, 0x11A3A, WordBreak::ALetter),
    (0x11A3B, 0x11A3E, WordBreak::Extend),
    (0x11A3F, 0x11A46, WordBreak::Other),
    (0x11A47, 0x11A47, WordBreak::Extend),
    (0x11A48, 0x11A4F, WordBreak::Other),
    (0x11A50, 0x11A50, WordBreak::ALetter),
    (0x11A51, 0x11A5B, WordBreak::Extend),
    (0x11A5C, 0x11A89, WordBreak::ALetter),
    (0x11A8A, 0x11A99, WordBreak::Extend),
    (0x11A9A, 0x11A9C, WordBreak::Other),
    (0x11A9D, 0x11A9D, WordBreak::ALetter),
    (0x11A9E, 0x11AAF, WordBreak::Other),
    (0x11AB0, 0x11AF8, WordBreak::ALetter),
    (0x11AF9, 0x11B5F, WordBreak::Other),
    (0x11B60, 0x11B67, WordBreak::Extend),
    (0x11B68, 0x11BBF, WordBreak::Other),
    (0x11BC0, 0x11BE0, WordBreak::ALetter),
    (0x11BE1, 0x11BEF, WordBreak::Other),
    (0x11BF0, 0x11BF9, WordBreak::Numeric),
    (0x11BFA, 0x11BFF, WordBreak::Other),
    (0x11C00, 0x11C08, WordBreak::ALetter),
    (0x11C09, 0x11C09, WordBreak::Other),
    (0x11C0A, 0x11C2E, WordBreak::ALetter),
    (0x11C2F, 0x11C36, WordBreak::Extend),
    (0x11C37, 0x11C37, WordBreak::Other),
    (0x11C38, 0x11C3F, WordBreak::Extend),
    (0x11C40, 0x11C40, WordBreak::ALetter),
    (0x11C41, 0x11C4F, WordBreak::Other),
    (0x11C50, 0x11C59, WordBreak::Numeric),
    (0x11C5A, 0x11C71, WordBreak::Other),
    (0x11C72, 0x11C8F, WordBreak::ALetter),
    (0x11C90, 0x11C91, WordBreak::Other),
    (0x11C92, 0x11CA7, WordBreak::Extend),
    (0x11CA8, 0x11CA8, WordBreak::Other),
    (0x11CA9, 0x11CB6, WordBreak::Extend),
    (0x11CB7, 0x11CFF, WordBreak::Other),
    (0x11D00, 0x11D06, WordBreak::ALetter),
    (0x11D07, 0x11D07, WordBreak::Other),
    (0x11D08, 0x11D09, WordBreak::ALetter),
    (0x11D0A, 0x11D0A, WordBreak::Other),
    (0x11D0B, 0x11D30, WordBreak::ALetter),
    (0x11D31, 0x11D36, WordBreak::Extend),
    (0x11D37, 0x11D39, WordBreak::Other),
    (0x11D3A, 0x11D3A, WordBreak::Extend),
    (0x11D3B, 0x11D3B, WordBreak::Other),
    (0x11D3C, 0x11D3D, WordBreak::Extend),
    (0x11D3E, 0x11D3E, WordBreak::Other),
    (0x11D3F, 0x11D45, WordBreak::Extend),
    (0x11D46, 0x11D46, WordBreak::ALetter),
    (0x11D47, 0x11D47, WordBreak::Extend),
    (0x11D48, 0x11D4F, WordBreak::Other),
    (0x11D50, 0x11D59, WordBreak::Numeric),
    (0x11D5A, 0x11D5F, WordBreak::Other),
    (0x11D60, 0x11D65, WordBreak::ALetter),
    (0x11D66, 0x11D66, WordBreak::Other),
    (0x11D67, 0x11D68, WordBreak::ALetter),
    (0x11D69, 0x11D69, WordBreak::Other),
    (0x11D6A, 0x11D89, WordBreak::ALetter),
    (0x11D8A, 0x11D8E, WordBreak::Extend),
    (0x11D8F, 0x11D8F, WordBreak::Other),
    (0x11D90, 0x11D91, WordBreak::Extend),
    (0x11D92, 0x11D92, WordBreak::Other),
    (0x11D93, 0x11D97, WordBreak::Extend),
    (0x11D98, 0x11D98, WordBreak::ALetter),
    (0x11D99, 0x11D9F, WordBreak::Other),
    (0x11DA0, 0x11DA9, WordBreak::Numeric),
    (0x11DAA, 0x11DAF, WordBreak::Other),
    (0x11DB0, 0x11DDB, WordBreak::ALetter),
    (0x11DDC, 0x11DDF, WordBreak::Other),
    (0x11DE0, 0x11DE9, WordBreak::Numeric),
    (0x11DEA, 0x11EDF, WordBreak::Other),
    (0x11EE0, 0x11EF2, WordBreak::ALetter),
    (0x11EF3, 0x11EF6, WordBreak::Extend),
    (0x11EF7, 0x11EFF, WordBreak::Other),
    (0x11F00, 0x11F01, WordBreak::Extend),
    (0x11F02, 0x11F02, WordBreak::ALetter),
    (0x11F03, 0x11F03, WordBreak::Extend),
    (0x11F04, 0x11F10, WordBreak::ALetter),
    (0x11F11, 0x11F11, WordBreak::Other),
    (0x11F12, 0x11F33, WordBreak::ALetter),
    (0x11F34, 0x11F3A, WordBreak::Extend),
    (0x11F3B, 0x11F3D, WordBreak::Other),
    (0x11F3E, 0x11F42, WordBreak::Extend),
    (0x11F43, 0x11F4F, WordBreak::Other),
    (0x11F50, 0x11F59, WordBreak::Numeric),
    (0x11F5A, 0x11F5A, WordBreak::Extend),
    (0x11F5B, 0x11FAF, WordBreak::Other),
    (0x11FB0, 0x11FB0, WordBreak::ALetter),
    (0x11FB1, 0x11FFF, WordBreak::Other),
    (0x12000, 0x12399, WordBreak::ALetter),
    (0x1239A, 0x123FF, WordBreak::Other),
    (0x12400, 0x1246E, WordBreak::ALetter),
    (0x1246F, 0x1247F, WordBreak::Other),
    (0x12480, 0x12543, WordBreak::ALetter),
    (0x12544, 0x12F8F, WordBreak::Other),
    (0x12F90, 0x12FF0, WordBreak::ALetter),
    (0x12FF1, 0x12FFF, WordBreak::Other),
    (0x13000, 0x1342F, WordBreak::ALetter),
    (0x13430, 0x1343F, WordBreak::Format),
    (0x13440, 0x13440, WordBreak::Extend),
    (0x13441, 0x13446, WordBreak::ALetter),
    (0x13447, 0x13455, WordBreak::Extend),
    (0x13456, 0x1345F, WordBreak::Other),
    (0x13460, 0x143FA, WordBreak::ALetter),
    (0x143FB, 0x143FF, WordBreak::Other),
    (0x14400, 0x14646, WordBreak::ALetter),
    (0x14647, 0x160FF, WordBreak::Other),
    (0x16100, 0x1611D, WordBreak::ALetter),
    (0x1611E, 0x1612F, WordBreak::Extend),
    (0x16130, 0x16139, WordBreak::Numeric),
    (0x1613A, 0x167FF, WordBreak::Other),
    (0x16800, 0x16A38, WordBreak::ALetter),
    (0x16A39, 0x16A3F, WordBreak::Other),
    (0x16A40, 0x16A5E, WordBreak::ALetter),
    (0x16A5F, 0x16A5F, WordBreak::Other),
    (0x16A60, 0x16A69, WordBreak::Numeric),
    (0x16A6A, 0x16A6F, WordBreak::Other),
    (0x16A70, 0x16ABE, WordBreak::ALetter),
    (0x16ABF, 0x16ABF, WordBreak::Other),
    (0x16AC0, 0x16AC9, WordBreak::Numeric),
    (0x16ACA, 0x16ACF, WordBreak::Other),
    (0x16AD0, 0x16AED, WordBreak::ALetter),
    (0x16AEE, 0x16AEF, WordBreak::Other),
    (0x16AF0, 0x16AF4, WordBreak::Extend),
    (0x16AF5, 0x16AFF, WordBreak::Other),
    (0x16B00, 0x16B2F, WordBreak::ALetter),
    (0x16B30, 0x16B36, WordBreak::Extend),
    (0x16B37, 0x16B3F, WordBreak::Other),
    (0x16B40, 0x16B43, WordBreak::ALetter),
    (0x16B44, 0x16B4F, WordBreak::Other),
    (0x16B50, 0x16B59, WordBreak::Numeric),
    (0x16B5A, 0x16B62, WordBreak::Other),
    (0x16B63, 0x16B77, WordBreak::ALetter),
    (0x16B78, 0x16B7C, WordBreak::Other),
    (0x16B7D, 0x16B8F, WordBreak::ALetter),
    (0x16B90, 0x16D3F, WordBreak::Other),
    (0x16D40, 0x16D6C, WordBreak::ALetter),
    (0x16D6D, 0x16D6F, WordBreak::Other),
    (0x16D70, 0x16D79, WordBreak::Numeric),
    (0x16D7A, 0x16E3F, WordBreak::Other),
    (0x16E40, 0x16E7F, WordBreak::ALetter),
    (0x16E80, 0x16E9F, WordBreak::Other),
    (0x16EA0, 0x16EB8, WordBreak::ALetter),
    (0x16EB9, 0x16EBA, WordBreak::Other),
    (0x16EBB, 0x16ED3, WordBreak::ALetter),
    (0x16ED4, 0x16EFF, WordBreak::Other),
    (0x16F00, 0x16F4A, WordBreak::ALetter),
    (0x16F4B, 0x16F4E, WordBreak::Other),
    (0x16F4F, 0x16F4F, WordBreak::Extend),
    (0x16F50, 0x16F50, WordBreak::ALetter),
    (0x16F51, 0x16F87, WordBreak::Extend),
    (0x16F88, 0x16F8E, WordBreak::Other),
    (0x16F8F, 0x16F92, WordBreak::Extend),
    (0x16F93, 0x16F9F, WordBreak::ALetter),
    (0x16FA0, 0x16FDF, WordBreak::Other),
    (0x16FE0, 0x16FE1, WordBreak::ALetter),
    (0x16FE2, 0x16FE2, WordBreak::Other),
    (0x16FE3, 0x16FE3, WordBreak::ALetter),
    (0x16FE4, 0x16FE4, WordBreak::Extend),
    (0x16FE5, 0x16FEF, WordBreak::Other),
    (0x16FF0, 0x16FF1, WordBreak::Extend),
    (0x16FF2, 0x1AFEF, WordBreak::Other),
    (0x1AFF0, 0x1AFF3, WordBreak::Katakana),
    (0x1AFF4, 0x1AFF4, WordBreak::Other),
    (0x1AFF5, 0x1AFFB, WordBreak::Katakana),
    (0x1AFFC, 0x1AFFC, WordBreak::Other),
    (0x1AFFD, 0x1AFFE, WordBreak::Katakana),
    (0x1AFFF, 0x1AFFF, WordBreak::Other),
    (0x1B000, 0x1B000, WordBreak::Katakana),
    (0x1B001, 0x1B11F, WordBreak::Other),
    (0x1B120, 0x1B122, WordBreak::Katakana),
    (0x1B123, 0x1B154, WordBreak::Other),
    (0x1B155, 0x1B155, WordBreak::Katakana),
    (0x1B156, 0x1B163, WordBreak::Other),
    (0x1B164, 0x1B167, WordBreak::Katakana),
    (0x1B168, 0x1BBFF, WordBreak::Other),
    (0x1BC00, 0x1BC6A, WordBreak::ALetter),
    (0x1BC6B, 0x1BC6F, WordBreak::Other),
    (0x1BC70, 0x1BC7C, WordBreak::ALetter),
    (0x1BC7D, 0x1BC7F, WordBreak::Other),
    (0x1BC80, 0x1BC88, WordBreak::ALetter),
    (0x1BC89, 0x1BC8F, WordBreak::Other),
    (0x1BC90, 0x1BC99, WordBreak::ALetter),
    (0x1BC9A, 0x1BC9C, WordBreak::Other),
    (0x1BC9D, 0x1BC9E, WordBreak::Extend),
    (0x1BC9F, 0x1BC9F, WordBreak::Other),
    (0x1BCA0, 0x1BCA3, WordBreak::Format),
    (0x1BCA4, 0x1CCEF, WordBreak::Other),
    (0x1CCF0, 0x1CCF9, WordBreak::Numeric),
    (0x1CCFA, 0x1CEFF, WordBreak::Other),
    (0x1CF00, 0x1CF2D, WordBreak::Extend),
    (0x1CF2E, 0x1CF2F, WordBreak::Other),
    (0x1CF30, 0x1CF46, WordBreak::Extend),
    (0x1CF47, 0x1D164, WordBreak::Other),
    (0x1D165, 0x1D169, WordBreak::Extend),
    (0x1D16A, 0x1D16C, WordBreak::Other),
    (0x1D16D, 0x1D172, WordBreak::Extend),
    (0x1D173, 0x1D17A, WordBreak::Format),
    (0x1D17B, 0x1D182, WordBreak::Extend),
    (0x1D183, 0x1D184, WordBreak::Other),
    (0x1D185, 0x1D18B, WordBreak::Extend),
    (0x1D18C, 0x1D1A9, WordBreak::Other),
    (0x1D1AA, 0x1D1AD, WordBreak::Extend),
    (0x1D1AE, 0x1D241, WordBreak::Other),
    (0x1D242, 0x1D244, WordBreak::Extend),
    (0x1D245, 0x1D3FF, WordBreak::Other),
    (0x1D400, 0x1D454, WordBreak::ALetter),
    (0x1D455, 0x1D455, WordBreak::Other),
    (0x1D456, 0x1D49C, WordBreak::ALetter),
    (0x1D49D, 0x1D49D, WordBreak::Other),
    (0x1D49E, 0x1D49F, WordBreak::ALetter),
    (0x1D4A0, 0x1D4A1, WordBreak::Other),
    (0x1D4A2, 0x1D4A2, WordBreak::ALetter),
    (0x1D4A3, 0x1D4A4, WordBreak::Other),
    (0x1D4A5, 0x1D4A6, WordBreak::ALetter),
    (0x1D4A7, 0x1D4A8, WordBreak::Other),
    (0x1D4A9, 0x1D4AC, WordBreak::ALetter),
    (0x1D4AD, 0x1D4AD, WordBreak::Other),
    (0x1D4AE, 0x1D4B9, WordBreak::ALetter),
    (0x1D4BA, 0x1D4BA, WordBreak::Other),
    (0x1D4BB, 0x1D4BB, WordBreak::ALetter),
    (0x1D4BC, 0x1D4BC, WordBreak::Other),
    (0x1D4BD, 0x1D4C3, WordBreak::ALetter),
    (0x1D4C4, 0x1D4C4, WordBreak::Other),
    (0x1D4C5, 0x1D505, WordBreak::ALetter),
    (0x1D506, 0x1D506, WordBreak::Other),
    (0x1D507, 0x1D50A, WordBreak::ALetter),
    (0x1D50B, 0x1D50C, WordBreak::Other),
    (0x1D50D, 0x1D514, WordBreak::ALetter),
    (0x1D515, 0x1D515, WordBreak::Other),
    (0x1D516, 0x1D51C, WordBreak::ALetter),
    (0x1D51D, 0x1D51D, WordBreak::Other),
    (0x1D51E, 0x1D539, WordBreak::ALetter),
    (0x1D53A, 0x1D53A, WordBreak::Other),
    (0x1D53B, 0x1D53E, WordBreak::ALetter),
    (0x1D53F, 0x1D53F, WordBreak::Other),
    (0x1D540, 0x1D544, WordBreak::ALetter),
    (0x1D545, 0x1D545, WordBreak::Other),
    (0x1D546, 0x1D546, WordBreak::ALetter),
    (0x1D547, 0x1D549, WordBreak::Other),
    (0x1D54A, 0x1D550, WordBreak::ALetter),
    (0x1D551, 0x1D551, WordBreak::Other),
    (0x1D552, 0x1D6A5, WordBreak::ALetter),
    (0x1D6A6, 0x1D6A7, WordBreak::Other),
    (0x1D6A8, 0x1D6C0, WordBreak::ALetter),
    (0x1D6C1, 0x1D6C1, WordBreak::Other),
    (0x1D6C2, 0x1D6DA, WordBreak::ALetter),
    (0x1D6DB, 0x1D6DB, WordBreak::Other),
    (0x1D6DC, 0x1D6FA, WordBreak::ALetter),
    (0x1D6FB, 0x1D6FB, WordBreak::Other),
    (0x1D6FC, 0x1D714, WordBreak::ALetter),
    (0x1D715, 0x1D715, WordBreak::Other),
    (0x1D716, 0x1D734, WordBreak::ALetter),
    (0x1D735, 0x1D735, WordBreak::Other),
    (0x1D736, 0x1D74E, WordBreak::ALetter),
    (0x1D74F, 0x1D74F, WordBreak::Other),
    (0x1D750, 0x1D76E, WordBreak::ALetter),
    (0x1D76F, 0x1D76F, WordBreak::Other),
    (0x1D770, 0x1D788, WordBreak::ALetter),
    (0x1D789, 0x1D789, WordBreak::Other),
    (0x1D78A, 0x1D7A8, WordBreak::ALetter),
    (0x1D7A9, 0x1D7A9, WordBreak::Other),
    (0x1D7AA, 0x1D7C2, WordBreak::ALetter),
    (0x1D7C3, 0x1D7C3, WordBreak::Other),
    (0x1D7C4, 0x1D7CB, WordBreak::ALetter),
    (0x1D7CC, 0x1D7CD, WordBreak::Other),
    (0x1D7CE, 0x1D7FF, WordBreak::Numeric),
    (0x1D800, 0x1D9FF, WordBreak::Other),
    (0x1DA00, 0x1DA36, WordBreak::Extend),
    (0x1DA37, 0x1DA3A, WordBreak::Other),
    (0x1DA3B, 0x1DA6C, WordBreak::Extend),
    (0x1DA6D, 0x1DA74, WordBreak::Other),
    (0x1DA75, 0x1DA75, WordBreak::Extend),
    (0x1DA76, 0x1DA83, WordBreak::Other),
    (0x1DA84, 0x1DA84, WordBreak::Extend),
    (0x1DA85, 0x1DA9A, WordBreak::Other),
    (0x1DA9B, 0x1DA9F, WordBreak::Extend),
    (0x1DAA0, 0x1DAA0, WordBreak::Other),
    (0x1DAA1, 0x1DAAF, WordBreak::Extend),
    (0x1DAB0, 0x1DEFF, WordBreak::Other),
    (0x1DF00, 0x1DF1E, WordBreak::ALetter),
    (0x1DF1F, 0x1DF24, WordBreak::Other),
    (0x1DF25, 0x1DF2A, WordBreak::ALetter),
    (0x1DF2B, 0x1DFFF, WordBreak::Other),
    (0x1E000, 0x1E006, WordBreak::Extend),
    (0x1E007, 0x1E007, WordBreak::Other),
    (0x1E008, 0x1E018, WordBreak::Extend),
    (0x1E019, 0x1E01A, WordBreak::Other),
    (0x1E01B, 0x1E021, WordBreak::Extend),
    (0x1E022, 0x1E022, WordBreak::Other),
    (0x1E023, 0x1E024, WordBreak::Extend),
    (0x1E025, 0x1E025, WordBreak::Other),
    (0x1E026, 0x1E02A, WordBreak::Extend),
    (0x1E02B, 0x1E02F, WordBreak::Other),
    (0x1E030, 0x1E06D, WordBreak::ALetter),
    (0x1E06E, 0x1E08E, WordBreak::Other),
    (0x1E08F, 0x1E08F, WordBreak::Extend),
    (0x1E090, 0x1E0FF, WordBreak::Other),
    (0x1E100, 0x1E12C, WordBreak::ALetter),
    (0x1E12D, 0x1E12F, WordBreak::Other),
    (0x1E130, 0x1E136, WordBreak::Extend),
    (0x1E137, 0x1E13D, WordBreak::ALetter),
    (0x1E13E, 0x1E13F, WordBreak::Other),
    (0x1E140, 0x1E149, WordBreak::Numeric),
    (0x1E14A, 0x1E14D, WordBreak::Other),
    (0x1E14E, 0x1E14E, WordBreak::ALetter),
    (0x1E14F, 0x1E28F, WordBreak::Other),
    (0x1E290, 0x1E2AD, WordBreak::ALetter),
    (0x1E2AE, 0x1E2AE, WordBreak::Extend),
    (0x1E2AF, 0x1E2BF, WordBreak::Other),
    (0x1E2C0, 0x1E2EB, WordBreak::ALetter),
    (0x1E2EC, 0x1E2EF, WordBreak::Extend),
    (0x1E2F0, 0x1E2F9, WordBreak::Numeric),
    (0x1E2FA, 0x1E4CF, WordBreak::Other),
    (0x1E4D0, 0x1E4EB, WordBreak::ALetter),
    (0x1E4EC, 0x1E4EF, WordBreak::Extend),
    (0x1E4F0, 0x1E4F9, WordBreak::Numeric),
    (0x1E4FA, 0x1E5CF, WordBreak::Other),
    (0x1E5D0, 0x1E5ED, WordBreak::ALetter),
    (0x1E5EE, 0x1E5EF, WordBreak::Extend),
    (0x1E5F0, 0x1E5F0, WordBreak::ALetter),
    (0x1E5F1, 0x1E5FA, WordBreak::Numeric),
    (0x1E5FB, 0x1E6BF, WordBreak::Other),
    (0x1E6C0, 0x1E6DE, WordBreak::ALetter),
    (0x1E6DF, 0x1E6DF, WordBreak::Other),
    (0x1E6E0, 0x1E6E2, WordBreak::ALetter),
    (0x1E6E3, 0x1E6E3, WordBreak::Extend),
    (0x1E6E4, 0x1E6E5, WordBreak::ALetter),
    (0x1E6E6, 0x1E6E6, WordBreak::Extend),
    (0x1E6E7, 0x1E6ED, WordBreak::ALetter),
    (0x1E6EE, 0x1E6EF, WordBreak::Extend),
    (0x1E6F0, 0x1E6F4, WordBreak::ALetter),
    (0x1E6F5, 0x1E6F5, WordBreak::Extend),
    (0x1E6F6, 0x1E6FD, WordBreak::Other),
    (0x1E6FE, 0x1E6FF, WordBreak::ALetter),
    (0x1E700, 0x1E7DF, WordBreak::Other),
    (0x1E7E0, 0x1E7E6, WordBreak::ALetter),
    (0x1E7E7, 0x1E7E7, WordBreak::Other),
    (0x1E7E8, 0x1E7EB, WordBreak::ALetter),
    (0x1E7EC, 0x1E7EC, WordBreak::Other),
    (0x1E7ED, 0x1E7EE, WordBreak::ALetter),
    (0x1E7EF, 0x1E7EF, WordBreak::Other),
    (0x1E7F0, 0x1E7FE, WordBreak::ALetter),
    (0x1E7FF, 0x1E7FF, WordBreak::Other),
    (0x1E800, 0x1E8C4, WordBreak::ALetter),
    (0x1E8C5, 0x1E8CF, WordBreak::Other),
    (0x1E8D0, 0x1E8D6, WordBreak::Extend),
    (0x1E8D7, 0x1E8FF, WordBreak::Other),
    (0x1E900, 0x1E943, WordBreak::ALetter),
    (0x1E944, 0x1E94A, WordBreak::Extend),
    (0x1E94B, 0x1E94B, WordBreak::ALetter),
    (0x1E94C, 0x1E94F, WordBreak::Other),
    (0x1E950, 0x1E959, WordBreak::Numeric),
    (0x1E95A, 0x1EDFF, WordBreak::Other),
    (0x1EE00, 0x1EE03, WordBreak::ALetter),
    (0x1EE04, 0x1EE04, WordBreak::Other),
    (0x1EE05, 0x1EE1F, WordBreak::ALetter),
    (0x1EE20, 0x1EE20, WordBreak::Other),
    (0x1EE21, 0x1EE22, WordBreak::ALetter),
    (0x1EE23, 0x1EE23, WordBreak::Other),
    (0x1EE24, 0x1EE24, WordBreak::ALetter),
    (0x1EE25, 0x1EE26, WordBreak::Other),
    (0x1EE27, 0x1EE27, WordBreak::ALetter),
    (0x1EE28, 0x1EE28, WordBreak::Other),
    (0x1EE29, 0x1EE32, WordBreak::ALetter),
    (0x1EE33, 0x1EE33, WordBreak::Other),
    (0x1EE34, 0x1EE37, WordBreak::ALetter),
    (0x1EE38, 0x1EE38, WordBreak::Other),
    (0x1EE39, 0x1EE39, WordBreak::ALetter),
    (0x1EE3A, 0x1EE3A, WordBreak::Other),
    (0x1EE3B, 0x1EE3B, WordBreak::ALetter),
    (0x1EE3C, 0x1EE41, WordBreak::Other),
    (0x1EE42, 0x1EE42, WordBreak::ALetter),
    (0x1EE43, 0x1EE46, WordBreak::Other),
    (0x1EE47, 0x1EE47, WordBreak::ALetter),
    (0x1EE48, 0x1EE48, WordBreak::Other),
    (0x1EE49, 0x1EE49, WordBreak::ALetter),
    (0x1EE4A, 0x1EE4A, WordBreak::Other),
    (0x1EE4B, 0x1EE4B, WordBreak::ALetter),
    (0x1EE4C, 0x1EE4C, WordBreak::Other),
    (0x1EE4D, 0x1EE4F, WordBreak::ALetter),
    (0x1EE50, 0x1EE50, WordBreak::Other),
    (0x1EE51, 0x1EE52, WordBreak::ALetter),
    (0x1EE53, 0x1EE53, WordBreak::Other),
    (0x1EE54, 0x1EE54, WordBreak::ALetter),
    (0x1EE55, 0x1EE56, WordBreak::Other),
    (0x1EE57, 0x1EE57, WordBreak::ALetter),
    (0x1EE58, 0x1EE58, WordBreak::Other),
    (0x1EE59, 0x1EE59, WordBreak::ALetter),
    (0x1EE5A, 0x1EE5A, WordBreak::Other),
    (0x1EE5B, 0x1EE5B, WordBreak::ALetter),
    (0x1EE5C, 0x1EE5C, WordBreak::Other),
    (0x1EE5D, 0x1EE5D, WordBreak::ALetter),
    (0x1EE5E, 0x1EE5E, WordBreak::Other),
    (0x1EE5F, 0x1EE5F, WordBreak::ALetter),
    (0x1EE60, 0x1EE60, WordBreak::Other),
    (0x1EE61, 0x1EE62, WordBreak::ALetter),
    (0x1EE63, 0x1EE63, WordBreak::Other),
    (0x1EE64, 0x1EE64, WordBreak::ALetter),
    (0x1EE65, 0x1EE66, WordBreak::Other),
    (0x1EE67, 0x1EE6A, WordBreak::ALetter),
    (0x1EE6B, 0x1EE6B, WordBreak::Other),
    (0x1EE6C, 0x1EE72, WordBreak::ALetter),
    (0x1EE73, 0x1EE73, WordBreak::Other),
    (0x1EE74, 0x1EE77, WordBreak::ALetter),
    (0x1EE78, 0x1EE78, WordBreak::Other),
    (0x1EE79, 0x1EE7C, WordBreak::ALetter),
    (0x1EE7D, 0x1EE7D, WordBreak::Other),
    (0x1EE7E, 0x1EE7E, WordBreak::ALetter),
    (0x1EE7F, 0x1EE7F, WordBreak::Other),
    (0x1EE80, 0x1EE89, WordBreak::ALetter),
    (0x1EE8A, 0x1EE8A, WordBreak::Other),
    (0x1EE8B, 0x1EE9B, WordBreak::ALetter),
    (0x1EE9C, 0x1EEA0, WordBreak::Other),
    (0x1EEA1, 0x1EEA3, WordBreak::ALetter),
    (0x1EEA4, 0x1EEA4, WordBreak::Other),
    (0x1EEA5, 0x1EEA9, WordBreak::ALetter),
    (0x1EEAA, 0x1EEAA, WordBreak::Other),
    (0x1EEAB, 0x1EEBB, WordBreak::ALetter),
    (0x1EEBC, 0x1F12F, WordBreak::Other),
    (0x1F130, 0x1F149, WordBreak::ALetter),
    (0x1F14A, 0x1F14F, WordBreak::Other),
    (0x1F150, 0x1F169, WordBreak::ALetter),
    (0x1F16A, 0x1F16F, WordBreak::Other),
    (0x1F170, 0x1F189, WordBreak::ALetter),
    (0x1F18A, 0x1F1E5, WordBreak::Other),
    (0x1F1E6, 0x1F1FF, WordBreak::RegionalIndicator),
    (0x1F200, 0x1F3FA, WordBreak::Other),
    (0x1F3FB, 0x1F3FF, WordBreak::Extend),
    (0x1F400, 0x1FBEF, WordBreak::Other),
    (0x1FBF0, 0x1FBF9, WordBreak::Numeric),
    (0x1FBFA, 0xE0000, WordBreak::Other),
    (0xE0001, 0xE0001, WordBreak::Format),
    (0xE0002, 0xE001F, WordBreak::Other),
    (0xE0020, 0xE007F, WordBreak::Extend),
    (0xE0080, 0xE00FF, WordBreak::Other),
    (0xE0100, 0xE01EF, WordBreak::Extend),
    (0xE01F0, 0x10FFFF, WordBreak::Other),
];

static JOINING_TYPE_TABLE: &[(u32, u32, JoiningType)] = &[
    (0x0, 0xAC, JoiningType::U),
    (0xAD, 0xAD, JoiningType::T),
    (0xAE, 0x2FF, JoiningType::U),
    (0x300, 0x36F, JoiningType::T),
    (0x370, 0x482, JoiningType::U),
    (0x483, 0x489, JoiningType::T),
    (0x48A, 0x590, JoiningType::U),
    (0x591, 0x5BD, JoiningType::T),
    (0x5BE, 0x5BE, JoiningType::U),
    (0x5BF, 0x5BF, JoiningType::T),
    (0x5C0, 0x5C0, JoiningType::U),
    (0x5C1, 0x5C2, JoiningType::T),
    (0x5C3, 0x5C3, JoiningType::U),
    (0x5C4, 0x5C5, JoiningType::T),
    (0x5C6, 0x5C6, JoiningType::U),
    (0x5C7, 0x5C7, JoiningType::T),
    (0x5C8, 0x60F, JoiningType::U),
    (0x610, 0x61A, JoiningType::T),
    (0x61B, 0x61B, JoiningType::U),
    (0x61C, 0x61C, JoiningType::T),
    (0x61D, 0x61F, JoiningType::U),
    (0x620, 0x620, JoiningType::D),
    (0x621, 0x621, JoiningType::U),
    (0x622, 0x625, JoiningType::R),
    (0x626, 0x626, JoiningType::D),
    (0x627, 0x627, JoiningType::R),
    (0x628, 0x628, JoiningType::D),
    (0x629, 0x629, JoiningType::R),
    (0x62A, 0x62E, JoiningType::D),
    (0x62F, 0x632, JoiningType::R),
    (0x633, 0x63F, JoiningType::D),
    (0x640, 0x640, JoiningType::C),
    (0x641, 0x647, JoiningType::D),
    (0x648, 0x648, JoiningType::R),
    (0x649, 0x64A, JoiningType::D),
    (0x64B, 0x65F, JoiningType::T),
    (0x660, 0x66D, JoiningType::U),
    (0x66E, 0x66F, JoiningType::D),
    (0x670, 0x670, JoiningType::T),
    (0x671, 0x673, JoiningType::R),
    (0x674, 0x674, JoiningType::U),
    (0x675, 0x677, JoiningType::R),
    (0x678, 0x687, JoiningType::D),
    (0x688, 0x699, JoiningType::R),
    (0x69A, 0x6BF, JoiningType::D),
    (0x6C0, 0x6C0, JoiningType::R),
    (0x6C1, 0x6C2, JoiningType::D),
    (0x6C3, 0x6CB, JoiningType::R),
    (0x6CC, 0x6CC, JoiningType::D),
    (0x6CD, 0x6CD, JoiningType::R),
    (0x6CE, 0x6CE, JoiningType::D),
    (0x6CF, 0x6CF, JoiningType::R),
    (0x6D0, 0x6D1, JoiningType::D),
    (0x6D2, 0x6D3, JoiningType::R),
    (0x6D4, 0x6D4, JoiningType::U),
    (0x6D5, 0x6D5, JoiningType::R),
    (0x6D6, 0x6DC, JoiningType::T),
    (0x6DD, 0x6DE, JoiningType::U),
    (0x6DF, 0x6E4, JoiningType::T),
    (0x6E5, 0x6E6, JoiningType::U),
    (0x6E7, 0x6E8, JoiningType::T),
    (0x6E9, 0x6E9, JoiningType::U),
    (0x6EA, 0x6ED, JoiningType::T),
    (0x6EE, 0x6EF, JoiningType::R),
    (0x6F0, 0x6F9, JoiningType::U),
    (0x6FA, 0x6FC, JoiningType::D),
    (0x6FD, 0x6FE, JoiningType::U),
    (0x6FF, 0x6FF, JoiningType::D),
    (0x700, 0x70E, JoiningType::U),
    (0x70F, 0x70F, JoiningType::T),
    (0x710, 0x710, JoiningType::R),
    (0x711, 0x711, JoiningType::T),
    (0x712, 0x714, JoiningType::D),
    (0x715, 0x719, JoiningType::R),
    (0x71A, 0x71D, JoiningType::D),
    (0x71E, 0x71E, JoiningType::R),
    (0x71F, 0x727, JoiningType::D),
    (0x728, 0x728, JoiningType::R),
    (0x729, 0x729, JoiningType::D),
    (0x72A, 0x72A, JoiningType::R),
    (0x72B, 0x72B, JoiningType::D),
    (0x72C, 0x72C, JoiningType::R),
    (0x72D, 0x72E, JoiningType::D),
    (0x72F, 0x72F, JoiningType::R),
    (0x730, 0x74A, JoiningType::T),
    (0x74B, 0x74C, JoiningType::U),
    (0x74D, 0x74D, JoiningType::R),
    (0x74E, 0x758, JoiningType::D),
    (0x759, 0x75B, JoiningType::R),
    (0x75C, 0x76A, JoiningType::D),
    (0x76B, 0x76C, JoiningType::R),
    (0x76D, 0x770, JoiningType::D),
    (0x771, 0x771, JoiningType::R),
    (0x772, 0x772, JoiningType::D),
    (0x773, 0x774, JoiningType::R),
    (0x775, 0x777, JoiningType::D),
    (0x778, 0x779, JoiningType::R),
    (0x77A, 0x77F, JoiningType::D),
    (0x780, 0x7A5, JoiningType::U),
    (0x7A6, 0x7B0, JoiningType::T),
    (0x7B1, 0x7C9, JoiningType::U),
    (0x7CA, 0x7EA, JoiningType::D),
    (0x7EB, 0x7F3, JoiningType::T),
    (0x7F4, 0x7F9, JoiningType::U),
    (0x7FA, 0x7FA, JoiningType::C),
    (0x7FB, 0x7FC, JoiningType::U),
    (0x7FD, 0x7FD, JoiningType::T),
    (0x7FE, 0x815, JoiningType::U),
    (0x816, 0x819, JoiningType::T),
    (0x81A, 0x81A, JoiningType::U),
    (0x81B, 0x823, JoiningType::T),
    (0x824, 0x824, JoiningType::U),
    (0x825, 0x827, JoiningType::T),
    (0x828, 0x828, JoiningType::U),
    (0x829, 0x82D, JoiningType::T),
    (0x82E, 0x83F, JoiningType::U),
    (0x840, 0x840, JoiningType::R),
    (0x841, 0x845, JoiningType::D),
    (0x846, 0x847, JoiningType::R),
    (0x848, 0x848, JoiningType::D),
    (0x849, 0x849, JoiningType::R),
    (0x84A, 0x853, JoiningType::D),
    (0x854, 0x854, JoiningType::R),
    (0x855, 0x855, JoiningType::D),
    (0x856, 0x858, JoiningType::R),
    (0x859, 0x85B, JoiningType::T),
    (0x85C, 0x85F, JoiningType::U),
    (0x860, 0x860, JoiningType::D),
    (0x861, 0x861, JoiningType::U),
    (0x862, 0x865, JoiningType::D),
    (0x866, 0x866, JoiningType::U),
    (0x867, 0x867, JoiningType::R),
    (0x868, 0x868, JoiningType::D),
    (0x869, 0x86A, JoiningType::R),
    (0x86B, 0x86F, JoiningType::U),
    (0x870, 0x882, JoiningType::R),
    (0x883, 0x885, JoiningType::C),
    (0x886, 0x886, JoiningType::D),
    (0x887, 0x888, JoiningType::U),
    (0x889, 0x88D, JoiningType::D),
    (0x88E, 0x88E, JoiningType::R),
    (0x88F, 0x88F, JoiningType::D),
    (0x890, 0x896, JoiningType::U),
    (0x897, 0x89F, JoiningType::T),
    (0x8A0, 0x8A9, JoiningType::D),
    (0x8AA, 0x8AC, JoiningType::R),
    (0x8AD, 0x8AD, JoiningType::U),
    (0x8AE, 0x8AE, JoiningType::R),
    (0x8AF, 0x8B0, JoiningType::D),
    (0x8B1, 0x8B2, JoiningType::R),
    (0x8B3, 0x8B8, JoiningType::D),
    (0x8B9, 0x8B9, JoiningType::R),
    (0x8BA, 0x8C8, JoiningType::D),
    (0x8C9, 0x8C9, JoiningType::U),
    (0x8CA, 0x8E1, JoiningType::T),
    (0x8E2, 0x8E2, JoiningType::U),
    (0x8E3, 0x902, JoiningType::T),
    (0x903, 0x939, JoiningType::U),
    (0x93A, 0x93A, JoiningType::T),
    (0x93B, 0x93B, JoiningType::U),
    (0x93C, 0x93C, JoiningType::T),
    (0x93D, 0x940, JoiningType::U),
    (0x941, 0x948, JoiningType::T),
    (0x949, 0x94C, JoiningType::U),
    (0x94D, 0x94D, JoiningType::T),
    (0x94E, 0x950, JoiningType::U),
    (0x951, 0x957, JoiningType::T),
    (0x958, 0x961, JoiningType::U),
    (0x962, 0x963, JoiningType::T),
    (0x964, 0x980, JoiningType::U),
    (0x981, 0x981, JoiningType::T),
    (0x982, 0x9BB, JoiningType::U),
    (0x9BC, 0x9BC, JoiningType::T),
    (0x9BD, 0x9C0, JoiningType::U),
    (0x9C1, 0x9C4, JoiningType::T),
    (0x9C5, 0x9CC, JoiningType::U),
    (0x9CD, 0x9CD, JoiningType::T),
    (0x9CE, 0x9E1, JoiningType::U),
    (0x9E2, 0x9E3, JoiningType::T),
    (0x9E4, 0x9FD, JoiningType::U),
    (0x9FE, 0x9FE, JoiningType::T),
    (0x9FF, 0xA00, JoiningType::U),
    (0xA01, 0xA02, JoiningType::T),
    (0xA03, 0xA3B, JoiningType::U),
    (0xA3C, 0xA3C, JoiningType::T),
    (0xA3D, 0xA40, JoiningType::U),
    (0xA41, 0xA42, JoiningType::T),
    (0xA43, 0xA46, JoiningType::U),
    (0xA47, 0xA48, JoiningType::T),
    (0xA49, 0xA4A, JoiningType::U),
    (0xA4B, 0xA4D, JoiningType::T),
    (0xA4E, 0xA50, JoiningType::U),
    (0xA51, 0xA51, JoiningType::T),
    (0xA52, 0xA6F, JoiningType::U),
    (0xA70, 0xA71, JoiningType::T),
    (0xA72, 0xA74, JoiningType::U),
    (0xA75, 0xA75, JoiningType::T),
    (0xA76, 0xA80, JoiningType::U),
    (0xA81, 0xA82, JoiningType::T),
    (0xA83, 0xABB, JoiningType::U),
    (0xABC, 0xABC, JoiningType::T),
    (0xABD, 0xAC0, JoiningType::U),
    (0xAC1, 0xAC5, JoiningType::T),
    (0xAC6, 0xAC6, JoiningType::U),
    (0xAC7, 0xAC8, JoiningType::T),
    (0xAC9, 0xACC, JoiningType::U),
    (0xACD, 0xACD, JoiningType::T),
    (0xACE, 0xAE1, JoiningType::U),
    (0xAE2, 0xAE3, JoiningType::T),
    (0xAE4, 0xAF9, JoiningType::U),
    (0xAFA, 0xAFF, JoiningType::T),
    (0xB00, 0xB00, JoiningType::U),
    (0xB01, 0xB01, JoiningType::T),
    (0xB02, 0xB3B, JoiningType::U),
    (0xB3C, 0xB3C, JoiningType::T),
    (0xB3D, 0xB3E, JoiningType::U),
    (0xB3F, 0xB3F, JoiningType::T),
    (0xB40, 0xB40, JoiningType::U),
    (0xB41, 0xB44, JoiningType::T),
    (0xB45, 0xB4C, JoiningType::U),
    (0xB4D, 0xB4D, JoiningType::T),
    (0xB4E, 0xB54, JoiningType::U),
    (0xB55, 0xB56, JoiningType::T),
    (0xB57, 0xB61, JoiningType::U),
    (0xB62, 0xB63, JoiningType::T),
    (0xB64, 0xB81, JoiningType::U),
    (0xB82, 0xB82, JoiningType::T),
    (0xB83, 0xBBF, JoiningType::U),
    (0xBC0, 0xBC0, JoiningType::T),
    (0xBC1, 0xBCC, JoiningType::U),
    (0xBCD, 0xBCD, JoiningType::T),
    (0xBCE, 0xBFF, JoiningType::U),
    (0xC00, 0xC00, JoiningType::T),
    (0xC01, 0xC03, JoiningType::U),
    (0xC04, 0xC04, JoiningType::T),
    (0xC05, 0xC3B, JoiningType::U),
    (0xC3C, 0xC3C, JoiningType::T),
    (0xC3D, 0xC3D, JoiningType::U),
    (0xC3E, 0xC40, JoiningType::T),
    (0xC41, 0xC45, JoiningType::U),
    (0xC46, 0xC48, JoiningType::T),
    (0xC49, 0xC49, JoiningType::U),
    (0xC4A, 0xC4D, JoiningType::T),
    (0xC4E, 0xC54, JoiningType::U),
    (0xC55, 0xC56, JoiningType::T),
    (0xC57, 0xC61, JoiningType::U),
    (0xC62, 0xC63, JoiningType::T),
    (0xC64, 0xC80, JoiningType::U),
    (0xC81, 0xC81, JoiningType::T),
    (0xC82, 0xCBB, JoiningType::U),
    (0xCBC, 0xCBC, JoiningType::T),
    (0xCBD, 0xCBE, JoiningType::U),
    (0xCBF, 0xCBF, JoiningType::T),
    (0xCC0, 0xCC5, JoiningType::U),
    (0xCC6, 0xCC6, JoiningType::T),
    (0xCC7, 0xCCB, JoiningType::U),
    (0xCCC, 0xCCD, JoiningType::T),
    (0xCCE, 0xCE1, JoiningType::U),
    (0xCE2, 0xCE3, JoiningType::T),
    (0xCE4, 0xCFF, JoiningType::U),
    (0xD00, 0xD01, JoiningType::T),
    (0xD02, 0xD3A, JoiningType::U),
    (0xD3B, 0xD3C, JoiningType::T),
    (0xD3D, 0xD40, JoiningType::U),
    (0xD41, 0xD44, JoiningType::T),
    (0xD45, 0xD4C, JoiningType::U),
    (0xD4D, 0xD4D, JoiningType::T),
    (0xD4E, 0xD61, JoiningType::U),
    (0xD62, 0xD63, JoiningType::T),
    (0xD64, 0xD80, JoiningType::U),
    (0xD81, 0xD81, JoiningType::T),
    (0xD82, 0xDC9, JoiningType::U),
    (0xDCA, 0xDCA, JoiningType::T),
    (0xDCB, 0xDD1, JoiningType::U),
    (0xDD2, 0xDD4, JoiningType::T),
    (0xDD5, 0xDD5, JoiningType::U),
    (0xDD6, 0xDD6, JoiningType::T),
    (0xDD7, 0xE30, JoiningType::U),
    (0xE31, 0xE31, JoiningType::T),
    (0xE32, 0xE33, JoiningType::U),
    (0xE34, 0xE3A, JoiningType::T),
    (0xE3B, 0xE46, JoiningType::U),
    (0xE47, 0xE4E, JoiningType::T),
    (0xE4F, 0xEB0, JoiningType::U),
    (0xEB1, 0xEB1, JoiningType::T),
    (0xEB2, 0xEB3, JoiningType::U),
    (0xEB4, 0xEBC, JoiningType::T),
    (0xEBD, 0xEC7, JoiningType::U),
    (0xEC8, 0xECE, JoiningType::T),
    (0xECF, 0xF17, JoiningType::U),
    (0xF18, 0xF19, JoiningType::T),
    (0xF1A, 0xF34, JoiningType::U),
    (0xF35, 0xF35, JoiningType::T),
    (0xF36, 0xF36, JoiningType::U),
    (0xF37, 0xF37, JoiningType::T),
    (0xF38, 0xF38, JoiningType::U),
    (0xF39, 0xF39, JoiningType::T),
    (0xF3A, 0xF70, JoiningType::U),
    (0xF71, 0xF7E, JoiningType::T),
    (0xF7F, 0xF7F, JoiningType::U),
    (0xF80, 0xF84, JoiningType::T),
    (0xF85, 0xF85, JoiningType::U),
    (0xF86, 0xF87, JoiningType::T),
    (0xF88, 0xF8C, JoiningType::U),
    (0xF8D, 0xF97, JoiningType::T),
    (0xF98, 0xF98, JoiningType::U),
    (0xF99, 0xFBC, JoiningType::T),
    (0xFBD, 0xFC5, JoiningType::U),
    (0xFC6, 0xFC6, JoiningType::T),
    (0xFC7, 0x102C, JoiningType::U),
    (0x102D, 0x1030, JoiningType::T),
    (0x1031, 0x1031, JoiningType::U),
    (0x1032, 0x1037, JoiningType::T),
    (0x1038, 0x1038, JoiningType::U),
    (0x1039, 0x103A, JoiningType::T),
    (0x103B, 0x103C, JoiningType::U),
    (0x103D, 0x103E, JoiningType::T),
    (0x103F, 0x1057, JoiningType::U),
    (0x1058, 0x1059, JoiningType::T),
    (0x105A, 0x105D, JoiningType::U),
    (0x105E, 0x1060, JoiningType::T),
    (0x1061, 0x1070, JoiningType::U),
    (0x1071, 0x1074, JoiningType::T),
    (0x1075, 0x1081, JoiningType::U),
    (0x1082, 0x1082, JoiningType::T),
    (0x1083, 0x1084, JoiningType::U),
    (0x1085, 0x1086, JoiningType::T),
    (0x1087, 0x108C, JoiningType::U),
    (0x108D, 0x108D, JoiningType::T),
    (0x108E, 0x109C, JoiningType::U),
    (0x109D, 0x109D, JoiningType::T),
    (0x109E, 0x135C, JoiningType::U),
    (0x135D, 0x135F, JoiningType::T),
    (0x1360, 0x1711, JoiningType::U),
    (0x1712, 0x1714, JoiningType::T),
    (0x1715, 0x1731, JoiningType::U),
    (0x1732, 0x1733, JoiningType::T),
    (0x1734, 0x1751, JoiningType::U),
    (0x1752, 0x1753, JoiningType::T),
    (0x1754, 0x1771, JoiningType::U),
    (0x1772, 0x1773, JoiningType::T),
    (0x1774, 0x17B3, JoiningType::U),
    (0x17B4, 0x17B5, JoiningType::T),
    (0x17B6, 0x17B6, JoiningType::U),
    (0x17B7, 0x17BD, JoiningType::T),
    (0x17BE, 0x17C5, JoiningType::U),
    (0x17C6, 0x17C6, JoiningType::T),
    (0x17C7, 0x17C8, JoiningType::U),
    (0x17C9, 0x17D3, JoiningType::T),
    (0x17D4, 0x17DC, JoiningType::U),
    (0x17DD, 0x17DD, JoiningType::T),
    (0x17DE, 0x1806, JoiningType::U),
    (0x1807, 0x1807, JoiningType::D),
    (0x1808, 0x1809, JoiningType::U),
    (0x180A, 0x180A, JoiningType::C),
    (0x180B, 0x180D, JoiningType::T),
    (0x180E, 0x180E, JoiningType::U),
    (0x180F, 0x180F, JoiningType::T),
    (0x1810, 0x181F, JoiningType::U),
    (0x1820, 0x1878, JoiningType::D),
    (0x1879, 0x1884, JoiningType::U),
    (0x1885, 0x1886, JoiningType::T),
    (0x1887, 0x18A8, JoiningType::D),
    (0x18A9, 0x18A9, JoiningType::T),
    (0x18AA, 0x18AA, JoiningType::D),
    (0x18AB, 0x191F, JoiningType::U),
    (0x1920, 0x1922, JoiningType::T),
    (0x1923, 0x1926, JoiningType::U),
    (0x1927, 0x1928, JoiningType::T),
    (0x1929, 0x1931, JoiningType::U),
    (0x1932, 0x1932, JoiningType::T),
    (0x1933, 0x1938, JoiningType::U),
    (0x1939, 0x193B, JoiningType::T),
    (0x193C, 0x1A16, JoiningType::U),
    (0x1A17, 0x1A18, JoiningType::T),
    (0x1A19, 0x1A1A, JoiningType::U),
    (0x1A1B, 0x1A1B, JoiningType::T),
    (0x1A1C, 0x1A55, JoiningType::U),
    (0x1A56, 0x1A56, JoiningType::T),
    (0x1A57, 0x1A57, JoiningType::U),
    (0x1A58, 0x1A5E, JoiningType::T),
    (0x1A5F, 0x1A5F, JoiningType::U),
    (0x1A60, 0x1A60, JoiningType::T),
    (0x1A61, 0x1A61, JoiningType::U),
    (0x1A62, 0x1A62, JoiningType::T),
    (0x1A63, 0x1A64, JoiningType::U),
    (0x1A65, 0x1A6C, JoiningType::T),
    (0x1A6D, 0x1A72, JoiningType::U),
    (0x1A73, 0x1A7C, JoiningType::T),
    (0x1A7D, 0x1A7E, JoiningType::U),
    (0x1A7F, 0x1A7F, JoiningType::T),
    (0x1A80, 0x1AAF, JoiningType::U),
    (0x1AB0, 0x1ADD, JoiningType::T),
    (0x1ADE, 0x1ADF, JoiningType::U),
    (0x1AE0, 0x1AEB, JoiningType::T),
    (0x1AEC, 0x1AFF, JoiningType::U),
    (0x1B00, 0x1B03, JoiningType::T),
    (0x1B04, 0x1B33, JoiningType::U),
    (0x1B34, 0x1B34, JoiningType::T),
    (0x1B35, 0x1B35, JoiningType::U),
    (0x1B36, 0x1B3A, JoiningType::T),
    (0x1B3B, 0x1B3B, JoiningType::U),
    (0x1B3C, 0x1B3C, JoiningType::T),
    (0x1B3D, 0x1B41, JoiningType::U),
    (0x1B42, 0x1B42, JoiningType::T),
    (0x1B43, 0x1B6A, JoiningType::U),
    (0x1B6B, 0x1B73, JoiningType::T),
    (0x1B74, 0x1B7F, JoiningType::U),
    (0x1B80, 0x1B81, JoiningType::T),
    (0x1B82, 0x1BA1, JoiningType::U),
    (0x1BA2, 0x1BA5, JoiningType::T),
    (0x1BA6, 0x1BA7, JoiningType::U),
    (0x1BA8, 0x1BA9, JoiningType::T),
    (0x1BAA, 0x1BAA, JoiningType::U),
    (0x1BAB, 0x1BAD, JoiningType::T),
    (0x1BAE, 0x1BE5, JoiningType::U),
    (0x1BE6, 0x1BE6, JoiningType::T),
    (0x1BE7, 0x1BE7, JoiningType::U),
    (0x1BE8, 0x1BE9, JoiningType::T),
    (0x1BEA, 0x1BEC, JoiningType::U),
    (0x1BED, 0x1BED, JoiningType::T),
    (0x1BEE, 0x1BEE, JoiningType::U),
    (0x1BEF, 0x1BF1, JoiningType::T),
    (0x1BF2, 0x1C2B, JoiningType::U),
    (0x1C2C, 0x1C33, JoiningType::T),
    (0x1C34, 0x1C35, JoiningType::U),
    (0x1C36, 0x1C37, JoiningType::T),
    (0x1C38, 0x1CCF, JoiningType::U),
    (0x1CD0, 0x1CD2, JoiningType::T),
    (0x1CD3, 0x1CD3, JoiningType::U),
    (0x1CD4, 0x1CE0, JoiningType::T),
    (0x1CE1, 0x1CE1, JoiningType::U),
    (0x1CE2, 0x1CE8, JoiningType::T),
    (0x1CE9, 0x1CEC, JoiningType::U),
    (0x1CED, 0x1CED, JoiningType::T),
    (0x1CEE, 0x1CF3, JoiningType::U),
    (0x1CF4, 0x1CF4, JoiningType::T),
    (0x1CF5, 0x1CF7, JoiningType::U),
    (0x1CF8, 0x1CF9, JoiningType::T),
    (0x1CFA, 0x1DBF, JoiningType::U),
    (0x1DC0, 0x1DFF, JoiningType::T),
    (0x1E00, 0x200A, JoiningType::U),
    (0x200B, 0x200B, JoiningType::T),
    (0x200C, 0x200C, JoiningType::U),
    (0x200D, 0x200D, JoiningType::C),
    (0x200E, 0x200F, JoiningType::T),
    (0x2010, 0x2029, JoiningType::U),
    (0x202A, 0x202E, JoiningType::T),
    (0x202F, 0x205F, JoiningType::U),
    (0x2060, 0x2064, JoiningType::T),
    (0x2065, 0x2069, JoiningType::U),
    (0x206A, 0x206F, JoiningType::T),
    (0x2070, 0x20CF, JoiningType::U),
    (0x20D0, 0x20F0, JoiningType::T),
    (0x20F1, 0x2CEE, JoiningType::U),
    (0x2CEF, 0x2CF1, JoiningType::T),
    (0x2CF2, 0x2D7E, JoiningType::U),
    (0x2D7F, 0x2D7F, JoiningType::T),
    (0x2D80, 0x2DDF, JoiningType::U),
    (0x2DE0, 0x2DFF, JoiningType::T),
    (0x2E00, 0x3029, JoiningType::U),
    (0x302A, 0x302D, JoiningType::T),
    (0x302E, 0x3098, JoiningType::U),
    (0x3099, 0x309A, JoiningType::T),
    (0x309B, 0xA66E, JoiningType::U),
    (0xA66F, 0xA672, JoiningType::T),
    (0xA673, 0xA673, JoiningType::U),
    (0xA674, 0xA67D, JoiningType::T),
    (0xA67E, 0xA69D, JoiningType::U),
    (0xA69E, 0xA69F, JoiningType::T),
    (0xA6A0, 0xA6EF, JoiningType::U),
    (0xA6F0, 0xA6F1, JoiningType::T),
    (0xA6F2, 0xA801, JoiningType::U),
    (0xA802, 0xA802, JoiningType::T),
    (0xA803, 0xA805, JoiningType::U),
    (0xA806, 0xA806, JoiningType::T),
    (0xA807, 0xA80A, JoiningType::U),
    (0xA80B, 0xA80B, JoiningType::T),
    (0xA80C, 0xA824, JoiningType::U),
    (0xA825, 0xA826, JoiningType::T),
    (0xA827, 0xA82B, JoiningType::U),
    (0xA82C, 0xA82C, JoiningType::T),
    (0xA82D, 0xA83F, JoiningType::U),
    (0xA840, 0xA871, JoiningType::D),
    (0xA872, 0xA872, JoiningType::L),
    (0xA873, 0xA8C3, JoiningType::U),
    (0xA8C4, 0xA8C5, JoiningType::T),
    (0xA8C6, 0xA8DF, JoiningType::U),
    (0xA8E0, 0xA8F1, JoiningType::T),
    (0xA8F2, 0xA8FE, JoiningType::U),
    (0xA8FF, 0xA8FF, JoiningType::T),
    (0xA900, 0xA925, JoiningType::U),
    (0xA926, 0xA92D, JoiningType::T),
    (0xA92E, 0xA946, JoiningType::U),
    (0xA947, 0xA951, JoiningType::T),
    (0xA952, 0xA97F, JoiningType::U),
    (0xA980, 0xA982, JoiningType::T),
    (0xA983, 0xA9B2, JoiningType::U),
    (0xA9B3, 0xA9B3, JoiningType::T),
    (0xA9B4, 0xA9B5, JoiningType::U),
    (0xA9B6, 0xA9B9, JoiningType::T),
    (0xA9BA, 0xA9BB, JoiningType::U),
    (0xA9BC, 0xA9BD, JoiningType::T),
    (0xA9BE, 0xA9E4, JoiningType::U),
    (0xA9E5, 0xA9E5, JoiningType::T),
    (0xA9E6, 0xAA28, JoiningType::U),
    (0xAA29, 0xAA2E, JoiningType::T),
    (0xAA2F, 0xAA30, JoiningType::U),
    (0xAA31, 0xAA32, JoiningType::T),
    (0xAA33, 0xAA34, JoiningType::U),
    (0xAA35, 0xAA36, JoiningType::T),
    (0xAA37, 0xAA42, JoiningType::U),
    (0xAA43, 0xAA43, JoiningType::T),
    (0xAA44, 0xAA4B, JoiningType::U),
    (0xAA4C, 0xAA4C, JoiningType::T),
    (0xAA4D, 0xAA7B, JoiningType::U),
    (0xAA7C, 0xAA7C, JoiningType::T),
    (0xAA7D, 0xAAAF, JoiningType::U),
    (0xAAB0, 0xAAB0, JoiningType::T),
    (0xAAB1, 0xAAB1, JoiningType::U),
    (0xAAB2, 0xAAB4, JoiningType::T),
    (0xAAB5, 0xAAB6, JoiningType::U),
    (0xAAB7, 0xAAB8, JoiningType::T),
    (0xAAB9, 0xAABD, JoiningType::U),
    (0xAABE, 0xAABF, JoiningType::T),
    (0xAAC0, 0xAAC0, JoiningType::U),
    (0xAAC1, 0xAAC1, JoiningType::T),
    (0xAAC2, 0xAAEB, JoiningType::U),
    (0xAAEC, 0xAAED, JoiningType::T),
    (0xAAEE, 0xAAF5, JoiningType::U),
    (0xAAF6, 0xAAF6, JoiningType::T),
    (0xAAF7, 0xABE4, JoiningType::U),
    (0xABE5, 0xABE5, JoiningType::T),
    (0xABE6, 0xABE7, JoiningType::U),
    (0xABE8, 0xABE8, JoiningType::T),
    (0xABE9, 0xABEC, JoiningType::U),
    (0xABED, 0xABED, JoiningType::T),
    (0xABEE, 0xFB1D, JoiningType::U),
    (0xFB1E, 0xFB1E, JoiningType::T),
    (0xFB1F, 0xFDFF, JoiningType::U),
    (0xFE00, 0xFE0F, JoiningType::T),
    (0xFE10, 0xFE1F, JoiningType::U),
    (0xFE20, 0xFE2F, JoiningType::T),
    (0xFE30, 0xFEFE, JoiningType::U),
    (0xFEFF, 0xFEFF, JoiningType::T),
    (0xFF00, 0xFFF8, JoiningType::U),
    (0xFFF9, 0xFFFB, JoiningType::T),
    (0xFFFC, 0x101FC, JoiningType::U),
    (0x101FD, 0x101FD, JoiningType::T),
    (0x101FE, 0x102DF, JoiningType::U),
    (0x102E0, 0x102E0, JoiningType::T),
    (0x102E1, 0x10375, JoiningType::U),
    (0x10376, 0x1037A, JoiningType::T),
    (0x1037B, 0x10A00, JoiningType::U),
    (0x10A01, 0x10A03, JoiningType::T),
    (0x10A04, 0x10A04, JoiningType::U),
    (0x10A05, 0x10A06, JoiningType::T),
    (0x10A07, 0x10A0B, JoiningType::U),
    (0x10A0C, 0x10A0F, JoiningType::T),
    (0x10A10, 0x10A37, JoiningType::U),
    (0x10A38, 0x10A3A, JoiningType::T),
    (0x10A3B, 0x10A3E, JoiningType::U),
    (0x10A3F, 0x10A3F, JoiningType::T),
    (0x10A40, 0x10ABF, JoiningType::U),
    (0x10AC0, 0x10AC4, JoiningType::D),
    (0x10AC5, 0x10AC5, JoiningType::R),
    (0x10AC6, 0x10AC6, JoiningType::U),
    (0x10AC7, 0x10AC7, JoiningType::R),
    (0x10AC8, 0x10AC8, JoiningType::U),
    (0x10AC9, 0x10ACA, JoiningType::R),
    (0x10ACB, 0x10ACC, JoiningType::U),
    (0x10ACD, 0x10ACD, JoiningType::L),
    (0x10ACE, 0x10AD2, JoiningType::R),
    (0x10AD3, 0x10AD6, JoiningType::D),
    (0x10AD7, 0x10AD7, JoiningType::L),
    (0x10AD8, 0x10ADC, JoiningType::D),
    (0x10ADD, 0x10ADD, JoiningType::R),
    (0x10ADE, 0x10AE0, JoiningType::D),
    (0x10AE1, 0x10AE1, JoiningType::R),
    (0x10AE2, 0x10AE3, JoiningType::U),
    (0x10AE4, 0x10AE4, JoiningType::R),
    (0x10AE5, 0x10AE6, JoiningType::T),
    (0x10AE7, 0x10AEA, JoiningType::U),
    (0x10AEB, 0x10AEE, JoiningType::D),
    (0x10AEF, 0x10AEF, JoiningType::R),
    (0x10AF0, 0x10B7F, JoiningType::U),
    (0x10B80, 0x10B80, JoiningType::D),
    (0x10B81, 0x10B81, JoiningType::R),
    (0x10B82, 0x10B82, JoiningType::D),
    (0x10B83, 0x10B85, JoiningType::R),
    (0x10B86, 0x10B88, JoiningType::D),
    (0x10B89, 0x10B89, JoiningType::R),
    (0x10B8A, 0x10B8B, JoiningType::D),
    (0x10B8C, 0x10B8C, JoiningType::R),
    (0x10B8D, 0x10B8D, JoiningType::D),
    (0x10B8E, 0x10B8F, JoiningType::R),
    (0x10B90, 0x10B90, JoiningType::D),
    (0x10B91, 0x10B91, JoiningType::R),
    (0x10B92, 0x10BA8, JoiningType::U),
    (0x10BA9, 0x10BAC, JoiningType::R),
    (0x10BAD, 0x10BAE, JoiningType::D),
    (0x10BAF, 0x10CFF, JoiningType::U),
    (0x10D00, 0x10D00, JoiningType::L),
    (0x10D01, 0x10D21, JoiningType::D),
    (0x10D22, 0x10D22, JoiningType::R),
    (0x10D23, 0x10D23, JoiningType::D),
    (0x10D24, 0x10D27, JoiningType::T),
    (0x10D28, 0x10D68, JoiningType::U),
    (0x10D69, 0x10D6D, JoiningType::T),
    (0x10D6E, 0x10EAA, JoiningType::U),
    (0x10EAB, 0x10EAC, JoiningType::T),
    (0x10EAD, 0x10EC1, JoiningType::U),
    (0x10EC2, 0x10EC2, JoiningType::R),
    (0x10EC3, 0x10EC4, JoiningType::D),
    (0x10EC5, 0x10EC5, JoiningType::U),
    (0x10EC6, 0x10EC7, JoiningType::D),
    (0x10EC8, 0x10EF9, JoiningType::U),
    (0x10EFA, 0x10EFF, JoiningType::T),
    (0x10F00, 0x10F2F, JoiningType::U),
    (0x10F30, 0x10F32, JoiningType::D),
    (0x10F33, 0x10F33, JoiningType::R),
    (0x10F34, 0x10F44, JoiningType::D),
    (0x10F45, 0x10F45, JoiningType::U),
    (0x10F46, 0x10F50, JoiningType::T),
    (0x10F51, 0x10F53, JoiningType::D),
    (0x10F54, 0x10F54, JoiningType::R),
    (0x10F55, 0x10F6F, JoiningType::U),
    (0x10F70, 0x10F73, JoiningType::D),
    (0x10F74, 0x10F75, JoiningType::R),
    (0x10F76, 0x10F81, JoiningType::D),
    (0x10F82, 0x10F85, JoiningType::T),
    (0x10F86, 0x10FAF, JoiningType::U),
    (0x10FB0, 0x10FB0, JoiningType::D),
    (0x10FB1, 0x10FB1, JoiningType::U),
    (0x10FB2, 0x10FB3, JoiningType::D),
    (0x10FB4, 0x10FB6, JoiningType::R),
    (0x10FB7, 0x10FB7, JoiningType::U),
    (0x10FB8, 0x10FB8, JoiningType::D),
    (0x10FB9, 0x10FBA, JoiningType::R),
    (0x10FBB, 0x10FBC, JoiningType::D),
    (0x10FBD, 0x10FBD, JoiningType::R),
    (0x10FBE, 0x10FBF, JoiningType::D),
    (0x10FC0, 0x10FC0, JoiningType::U),
    (0x10FC1, 0x10FC1, JoiningType::D),
    (0x10FC2, 0x10FC3, JoiningType::R),
    (0x10FC4, 0x10FC4, JoiningType::D),
    (0x10FC5, 0x10FC8, JoiningType::U),
    (0x10FC9, 0x10FC9, JoiningType::R),
    (0x10FCA, 0x10FCA, JoiningType::D),
    (0x10FCB, 0x10FCB, JoiningType::L),
    (0x10FCC, 0x11000, JoiningType::U),
    (0x11001, 0x11001, JoiningType::T),
    (0x11002, 0x11037, JoiningType::U),
    (0x11038, 0x11046, JoiningType::T),
    (0x11047, 0x1106F, JoiningType::U),
    (0x11070, 0x11070, JoiningType::T),
    (0x11071, 0x11072, JoiningType::U),
    (0x11073, 0x11074, JoiningType::T),
    (0x11075, 0x1107E, JoiningType::U),
    (0x1107F, 0x11081, JoiningType::T),
    (0x11082, 0x110B2, JoiningType::U),
    (0x110B3, 0x110B6, JoiningType::T),
    (0x110B7, 0x110B8, JoiningType::U),
    (0x110B9, 0x110BA, JoiningType::T),
    (0x110BB, 0x110C1, JoiningType::U),
    (0x110C2, 0x110C2, JoiningType::T),
    (0x110C3, 0x110FF, JoiningType::U),
    (0x11100, 0x11102, JoiningType::T),
    (0x11103, 0x11126, JoiningType::U),
    (0x11127, 0x1112B, JoiningType::T),
    (0x1112C, 0x1112C, JoiningType::U),
    (0x1112D, 0x11134, JoiningType::T),
    (0x11135, 0x11172, JoiningType::U),
    (0x11173, 0x11173, JoiningType::T),
    (0x11174, 0x1117F, JoiningType::U),
    (0x11180, 0x11181, JoiningType::T),
    (0x11182, 0x111B5, JoiningType::U),
    (0x111B6, 0x111BE, JoiningType::T),
    (0x111BF, 0x111C8, JoiningType::U),
    (0x111C9, 0x111CC, JoiningType::T),
    (0x111CD, 0x111CE, JoiningType::U),
    (0x111CF, 0x111CF, JoiningType::T),
    (0x111D0, 0x1122E, JoiningType::U),
    (0x1122F, 0x11231, JoiningType::T),
    (0x11232, 0x11233, JoiningType::U),
    (0x11234, 0x11234, JoiningType::T),
    (0x11235, 0x11235, JoiningType::U),
    (0x11236, 0x11237, JoiningType::T),
    (0x11238, 0x1123D, JoiningType::U),
    (0x1123E, 0x1123E, JoiningType::T),
    (0x1123F, 0x11240, JoiningType::U),
    (0x11241, 0x11241, JoiningType::T),
    (0x11242, 0x112DE, JoiningType::U),
    (0x112DF, 0x112DF, JoiningType::T),
    (0x112E0, 0x112E2, JoiningType::U),
    (0x112E3, 0x112EA, JoiningType::T),
    (0x112EB, 0x112FF, JoiningType::U),
    (0x11300, 0x11301, JoiningType::T),
    (0x11302, 0x1133A, JoiningType::U),
    (0x1133B, 0x1133C, JoiningType::T),
    (0x1133D, 0x1133F, JoiningType::U),
    (0x11340, 0x11340, JoiningType::T),
    (0x11341, 0x11365, JoiningType::U),
    (0x11366, 0x1136C, JoiningType::T),
    (0x1136D, 0x1136F, JoiningType::U),
    (0x11370, 0x11374, JoiningType::T),
    (0x11375, 0x113BA, JoiningType::U),
    (0x113BB, 0x113C0, JoiningType::T),
    (0x113C1, 0x113CD, JoiningType::U),
    (0x113CE, 0x113CE, JoiningType::T),
    (0x113CF, 0x113CF, JoiningType::U),
    (0x113D0, 0x113D0, JoiningType::T),
    (0x113D1, 0x113D1, JoiningType::U),
    (0x113D2, 0x113D2, JoiningType::T),
    (0x113D3, 0x113E0, JoiningType::U),
    (0x113E1, 0x113E2, JoiningType::T),
    (0x113E3, 0x11437, JoiningType::U),
    (0x11438, 0x1143F, JoiningType::T),
    (0x11440, 0x11441, JoiningType::U),
    (0x11442, 0x11444, JoiningType::T),
    (0x11445, 0x11445, JoiningType::U),
    (0x11446, 0x11446, JoiningType::T),
    (0x11447, 0x1145D, JoiningType::U),
    (0x1145E, 0x1145E, JoiningType::T),
    (0x1145F, 0x114B2, JoiningType::U),
    (0x114B3, 0x114B8, JoiningType::T),
    (0x114B9, 0x114B9, JoiningType::U),
    (0x114BA, 0x114BA, JoiningType::T),
    (0x114BB, 0x114BE, JoiningType::U),
    (0x114BF, 0x114C0, JoiningType::T),
    (0x114C1, 0x114C1, JoiningType::U),
    (0x114C2, 0x114C3, JoiningType::T),
    (0x114C4, 0x115B1, JoiningType::U),
    (0x115B2, 0x115B5, JoiningType::T),
    (0x115B6, 0x115BB, JoiningType::U),
    (0x115BC, 0x115BD, JoiningType::T),
    (0x115BE, 0x115BE, JoiningType::U),
    (0x115BF, 0x115C0, JoiningType::T),
    (0x115C1, 0x115DB, JoiningType::U),
    (0x115DC, 0x115DD, JoiningType::T),
    (0x115DE, 0x11632, JoiningType::U),
    (0x11633, 0x1163A, JoiningType::T),
    (0x1163B, 0x1163C, JoiningType::U),
    (0x1163D, 0x1163D, JoiningType::T),
    (0x1163E, 0x1163E, JoiningType::U),
    (0x1163F, 0x11640, JoiningType::T),
    (0x11641, 0x116AA, JoiningType::U),
    (0x116AB, 0x116AB, JoiningType::T),
    (0x116AC, 0x116AC, JoiningType::U),
    (0x116AD, 0x116AD, JoiningType::T),
    (0x116AE, 0x116AF, JoiningType::U),
    (0x116B0, 0x116B5, JoiningType::T),
    (0x116B6, 0x116B6, JoiningType::U),
    (0x116B7, 0x116B7, JoiningType::T),
    (0x116B8, 0x1171C, JoiningType::U),
    (0x1171D, 0x1171D, JoiningType::T),
    (0x1171E, 0x1171E, JoiningType::U),
    (0x1171F, 0x1171F, JoiningType::T),
    (0x11720, 0x11721, JoiningType::U),
    (0x11722, 0x11725, JoiningType::T),
    (0x11726, 0x11726, JoiningType::U),
    (0x11727, 0x1172B, JoiningType::T),
    (0x1172C, 0x1182E, JoiningType::U),
    (0x1182F, 0x11837, JoiningType::T),
    (0x11838, 0x11838, JoiningType::U),
    (0x11839, 0x1183A, JoiningType::T),
    (0x1183B, 0x1193A, JoiningType::U),
    (0x1193B, 0x1193C, JoiningType::T),
    (0x1193D, 0x1193D, JoiningType::U),
    (0x1193E, 0x1193E, JoiningType::T),
    (0x1193F, 0x11942, JoiningType::U),
    (0x11943, 0x11943, JoiningType::T),
    (0x11944, 0x119D3, JoiningType::U),
    (0x119D4, 0x119D7, JoiningType::T),
    (0x119D8, 0x119D9, JoiningType::U),
    (0x119DA, 0x119DB, JoiningType::T),
    (0x119DC, 0x119DF, JoiningType::U),
    (0x119E0, 0x119E0, JoiningType::T),
    (0x119E1, 0x11A00, JoiningType::U),
    (0x11A01, 0x11A0A, JoiningType::T),
    (0x11A0B, 0x11A32, JoiningType::U),
    (0x11A33, 0x11A38, JoiningType::T),
    (0x11A39, 0x11A3A, JoiningType::U),
    (0x11A3B, 0x11A3E, JoiningType::T),
    (0x11A3F, 0x11A46, JoiningType::U),
    (0x11A47, 0x11A47, JoiningType::T),
    (0x11A48, 0x11A50, JoiningType::U),
    (0x11A51, 0x11A56, JoiningType::T),
    (0x11A57, 0x11A58, JoiningType::U),
    (0x11A59, 0x11A5B, JoiningType::T),
    (0x11A5C, 0x11A89, JoiningType::U),
    (0x11A8A, 0x11A96, JoiningType::T),
    (0x11A97, 0x11A97, JoiningType::U),
    (0x11A98, 0x11A99, JoiningType::T),
    (0x11A9A, 0x11B5F, JoiningType::U),
    (0x11B60, 0x11B60, JoiningType::T),
    (0x11B61, 0x11B61, JoiningType::U),
    (0x11B62, 0x11B64, JoiningType::T),
    (0x11B65, 0x11B65, JoiningType::U),
    (0x11B66, 0x11B66, JoiningType::T),
    (0x11B67, 0x11C2F, JoiningType::U),
    (0x11C30, 0x11C36, JoiningType::T),
    (0x11C37, 0x11C37, JoiningType::U),
    (0x11C38, 0x11C3D, JoiningType::T),
    (0x11C3E, 0x11C3E, JoiningType::U),
    (0x11C3F, 0x11C3F, JoiningType::T),
    (0x11C40, 0x11C91, JoiningType::U),
    (0x11C92, 0x11CA7, JoiningType::T),
    (0x11CA8, 0x11CA9, JoiningType::U),
    (0x11CAA, 0x11CB0, JoiningType::T),
    (0x11CB1, 0x11CB1, JoiningType::U),
    (0x11CB2, 0x11CB3, JoiningType::T),
    (0x11CB4, 0x11CB4, JoiningType::U),
    (0x11CB5, 0x11CB6, JoiningType::T),
    (0x11CB7, 0x11D30, JoiningType::U),
    (0x11D31, 0x11D36, JoiningType::T),
    (0x11D37, 0x11D39, JoiningType::U),
    (0x11D3A, 0x11D3A, JoiningType::T),
    (0x11D3B, 0x11D3B, JoiningType::U),
    (0x11D3C, 0x11D3D, JoiningType::T),
    (0x11D3E, 0x11D3E, JoiningType::U),
    (0x11D3F, 0x11D45, JoiningType::T),
    (0x11D46, 0x11D46, JoiningType::U),
    (0x11D47, 0x11D47, JoiningType::T),
    (0x11D48, 0x11D8F, JoiningType::U),
    (0x11D90, 0x11D91, JoiningType::T),
    (0x11D92, 0x11D94, JoiningType::U),
    (0x11D95, 0x11D95, JoiningType::T),
    (0x11D96, 0x11D96, JoiningType::U),
    (0x11D97, 0x11D97, JoiningType::T),
    (0x11D98, 0x11EF2, JoiningType::U),
    (0x11EF3, 0x11EF4, JoiningType::T),
    (0x11EF5, 0x11EFF, JoiningType::U),
    (0x11F00, 0x11F01, JoiningType::T),
    (0x11F02, 0x11F35, JoiningType::U),
    (0x11F36, 0x11F3A, JoiningType::T),
    (0x11F3B, 0x11F3F, JoiningType::U),
    (0x11F40, 0x11F40, JoiningType::T),
    (0x11F41, 0x11F41, JoiningType::U),
    (0x11F42, 0x11F42, JoiningType::T),
    (0x11F43, 0x11F59, JoiningType::U),
    (0x11F5A, 0x11F5A, JoiningType::T),
    (0x11F5B, 0x1342F, JoiningType::U),
    (0x13430, 0x13440, JoiningType::T),
    (0x13441, 0x13446, JoiningType::U),
    (0x13447, 0x13455, JoiningType::T),
    (0x13456, 0x1611D, JoiningType::U),
    (0x1611E, 0x16129, JoiningType::T),
    (0x1612A, 0x1612C, JoiningType::U),
    (0x1612D, 0x1612F, JoiningType::T),
    (0x16130, 0x16AEF, JoiningType::U),
    (0x16AF0, 0x16AF4, JoiningType::T),
    (0x16AF5, 0x16B2F, JoiningType::U),
    (0x16B30, 0x16B36, JoiningType::T),
    (0x16B37, 0x16F4E, JoiningType::U),
    (0x16F4F, 0x16F4F, JoiningType::T),
    (0x16F50, 0x16F8E, JoiningType::U),
    (0x16F8F, 0x16F92, JoiningType::T),
    (0x16F93, 0x16FE3, JoiningType::U),
    (0x16FE4, 0x16FE4, JoiningType::T),
    (0x16FE5, 0x1BC9C, JoiningType::U),
    (0x1BC9D, 0x1BC9E, JoiningType::T),
    (0x1BC9F, 0x1BC9F, JoiningType::U),
    (0x1BCA0, 0x1BCA3, JoiningType::T),
    (0x1BCA4, 0x1CEFF, JoiningType::U),
    (0x1CF00, 0x1CF2D, JoiningType::T),
    (0x1CF2E, 0x1CF2F, JoiningType::U),
    (0x1CF30, 0x1CF46, JoiningType::T),
    (0x1CF47, 0x1D166, JoiningType::U),
    (0x1D167, 0x1D169, JoiningType::T),
    (0x1D16A, 0x1D172, JoiningType::U),
    (0x1D173, 0x1D182, JoiningType::T),
    (0x1D183, 0x1D184, JoiningType::U),
    (0x1D185, 0x1D18B, JoiningType::T),
    (0x1D18C, 0x1D1A9, JoiningType::U),
    (0x1D1AA, 0x1D1AD, JoiningType::T),
    (0x1D1AE, 0x1D241, JoiningType::U),
    (0x1D242, 0x1D244, JoiningType::T),
    (0x1D245, 0x1D9FF, JoiningType::U),
    (0x1DA00, 0x1DA36, JoiningType::T),
    (0x1DA37, 0x1DA3A, JoiningType::U),
    (0x1DA3B, 0x1DA6C, JoiningType::T),
    (0x1DA6D, 0x1DA74, JoiningType::U),
    (0x1DA75, 0x1DA75, JoiningType::T),
    (0x1DA76, 0x1DA83, JoiningType::U),
    (0x1DA84, 0x1DA84, JoiningType::T),
    (0x1DA85, 0x1DA9A, JoiningType::U),
    (0x1DA9B, 0x1DA9F, JoiningType::T),
    (0x1DAA0, 0x1DAA0, JoiningType::U),
    (0x1DAA1, 0x1DAAF, JoiningType::T),
    (0x1DAB0, 0x1DFFF, JoiningType::U),
    (0x1E000, 0x1E006, JoiningType::T),
    (0x1E007, 0x1E007, JoiningType::U),
    (0x1E008, 0x1E018, JoiningType::T),
    (0x1E019, 0x1E01A, JoiningType::U),
    (0x1E01B, 0x1E021, JoiningType::T),
    (0x1E022, 0x1E022, JoiningType::U),
    (0x1E023, 0x1E024, JoiningType::T),
    (0x1E025, 0x1E025, JoiningType::U),
    (0x1E026, 0x1E02A, JoiningType::T),
    (0x1E02B, 0x1E08E, JoiningType::U),
    (0x1E08F, 0x1E08F, JoiningType::T),
    (0x1E090, 0x1E12F, JoiningType::U),
    (0x1E130, 0x1E136, JoiningType::T),
    (0x1E137, 0x1E2AD, JoiningType::U),
    (0x1E2AE, 0x1E2AE, JoiningType::T),
    (0x1E2AF, 0x1E2EB, JoiningType::U),
    (0x1E2EC, 0x1E2EF, JoiningType::T),
    (0x1E2F0, 0x1E4EB, JoiningType::U),
    (0x1E4EC, 0x1E4EF, JoiningType::T),
    (0x1E4F0, 0x1E5ED, JoiningType::U),
    (0x1E5EE, 0x1E5EF, JoiningType::T),
    (0x1E5F0, 0x1E6E2, JoiningType::U),
    (0x1E6E3, 0x1E6E3, JoiningType::T),
    (0x1E6E4, 0x1E6E5, JoiningType::U),
    (0x1E6E6, 0x1E6E6, JoiningType::T),
    (0x1E6E7, 0x1E6ED, JoiningType::U),
    (0x1E6EE, 0x1E6EF, JoiningType::T),
    (0x1E6F0, 0x1E6F4, JoiningType::U),
    (0x1E6F5, 0x1E6F5, JoiningType::T),
    (0x1E6F6, 0x1E8CF, JoiningType::U),
    (0x1E8D0, 0x1E8D6, JoiningType::T),
    (0x1E8D7, 0x1E8FF, JoiningType::U),
    (0x1E900, 0x1E943, JoiningType::D),
    (0x1E944, 0x1E94B, JoiningType::T),
    (0x1E94C, 0xE0000, JoiningType::U),
    (0xE0001, 0xE0001, JoiningType::T),
    (0xE0002, 0xE001F, JoiningType::U),
    (0xE0020, 0xE007F, JoiningType::T),
    (0xE0080, 0xE00FF, JoiningType::U),
    (0xE0100, 0xE01EF, JoiningType::T),
    (0xE01F0, 0x10FFFF, JoiningType::U),
];

static COMBINING_CLASS_TABLE: &[(u32, u32, u8)] = &[
    (0x0, 0x2FF, 0),
    (0x300, 0x314, 230),
    (0x315, 0x315, 232),
    (0x316, 0x319, 220),
    (0x31A, 0x31A, 232),
    (0x31B, 0x31B, 216),
    (0x31C, 0x320, 220),
    (0x321, 0x322, 202),
    (0x323, 0x326, 220),
    (0x327, 0x328, 202),
    (0x329, 0x333, 220),
    (0x334, 0x338, 1),
    (0x339, 0x33C, 220),
    (0x33D, 0x344, 230),
    (0x345, 0x345, 240),
    (0x346, 0x346, 230),
    (0x347, 0x349, 220),
    (0x34A, 0x34C, 230),
    (0x34D, 0x34E, 220),
    (0x34F, 0x34F, 0),
    (0x350, 0x352, 230),
    (0x353, 0x356, 220),
    (0x357, 0x357, 230),
    (0x358, 0x358, 232),
    (0x359, 0x35A, 220),
    (0x35B, 0x35B, 230),
    (0x35C, 0x35C, 233),
    (0x35D, 0x35E, 234),
    (0x35F, 0x35F, 233),
    (0x360, 0x361, 234),
    (0x362, 0x362, 233),
    (0x363, 0x36F, 230),
    (0x370, 0x482, 0),
    (0x483, 0x487, 230),
    (0x488, 0x590, 0),
    (0x591, 0x591, 220),
    (0x592, 0x595, 230),
    (0x596, 0x596, 220),
    (0x597, 0x599, 230),
    (0x59A, 0x59A, 222),
    (0x59B, 0x59B, 220),
    (0x59C, 0x5A1, 230),
    (0x5A2, 0x5A7, 220),
    (0x5A8, 0x5A9, 230),
    (0x5AA, 0x5AA, 220),
    (0x5AB, 0x5AC, 230),
    (0x5AD, 0x5AD, 222),
    (0x5AE, 0x5AE, 228),
    (0x5AF, 0x5AF, 230),
    (0x5B0, 0x5B0, 10),
    (0x5B1, 0x5B1, 11),
    (0x5B2, 0x5B2, 12),
    (0x5B3, 0x5B3, 13),
    (0x5B4, 0x5B4, 14),
    (0x5B5, 0x5B5, 15),
    (0x5B6, 0x5B6, 16),
    (0x5B7, 0x5B7, 17),
    (0x5B8, 0x5B8, 18),
    (0x5B9, 0x5BA, 19),
    (0x5BB, 0x5BB, 20),
    (0x5BC, 0x5BC, 21),
    (0x5BD, 0x5BD, 22),
    (0x5BE, 0x5BE, 0),
    (0x5BF, 0x5BF, 23),
    (0x5C0, 0x5C0, 0),
    (0x5C1, 0x5C1, 24),
    (0x5C2, 0x5C2, 25),
    (0x5C3, 0x5C3, 0),
    (0x5C4, 0x5C4, 230),
    (0x5C5, 0x5C5, 220),
    (0x5C6, 0x5C6, 0),
    (0x5C7, 0x5C7, 18),
    (0x5C8, 0x60F, 0),
    (0x610, 0x617, 230),
    (0x618, 0x618, 30),
    (0x619, 0x619, 31),
    (0x61A, 0x61A, 32),
    (0x61B, 0x64A, 0),
    (0x64B, 0x64B, 27),
    (0x64C, 0x64C, 28),
    (0x64D, 0x64D, 29),
    (0x64E, 0x64E, 30),
    (0x64F, 0x64F, 31),
    (0x650, 0x650, 32),
    (0x651, 0x651, 33),
    (0x652, 0x652, 34),
    (0x653, 0x654, 230),
    (0x655, 0x656, 220),
    (0x657, 0x65B, 230),
    (0x65C, 0x65C, 220),
    (0x65D, 0x65E, 230),
    (0x65F, 0x65F, 220),
    (0x660, 0x66F, 0),
    (0x670, 0x670, 35),
    (0x671, 0x6D5, 0),
    (0x6D6, 0x6DC, 230),
    (0x6DD, 0x6DE, 0),
    (0x6DF, 0x6E2, 230),
    (0x6E3, 0x6E3, 220),
    (0x6E4, 0x6E4, 230),
    (0x6E5, 0x6E6, 0),
    (0x6E7, 0x6E8, 230),
    (0x6E9, 0x6E9, 0),
    (0x6EA, 0x6EA, 220),
    (0x6EB, 0x6EC, 230),
    (0x6ED, 0x6ED, 220),
    (0x6EE, 0x710, 0),
    (0x711, 0x711, 36),
    (0x712, 0x72F, 0),
    (0x730, 0x730, 230),
    (0x731, 0x731, 220),
    (0x732, 0x733, 230),
    (0x734, 0x734, 220),
    (0x735, 0x736, 230),
    (0x737, 0x739, 220),
    (0x73A, 0x73A, 230),
    (0x73B, 0x73C, 220),
    (0x73D, 0x73D, 230),
    (0x73E, 0x73E, 220),
    (0x73F, 0x741, 230),
    (0x742, 0x742, 220),
    (0x743, 0x743, 230),
    (0x744, 0x744, 220),
    (0x745, 0x745, 230),
    (0x746, 0x746, 220),
    (0x747, 0x747, 230),
    (0x748, 0x748, 220),
    (0x749, 0x74A, 230),
    (0x74B, 0x7EA, 0),
    (0x7EB, 0x7F1, 230),
    (0x7F2, 0x7F2, 220),
    (0x7F3, 0x7F3, 230),
    (0x7F4, 0x7FC, 0),
    (0x7FD, 0x7FD, 220),
    (0x7FE, 0x815, 0),
    (0x816, 0x819, 230),
    (0x81A, 0x81A, 0),
    (0x81B, 0x823, 230),
    (0x824, 0x824, 0),
    (0x825, 0x827, 230),
    (0x828, 0x828, 0),
    (0x829, 0x82D, 230),
    (0x82E, 0x858, 0),
    (0x859, 0x85B, 220),
    (0x85C, 0x897, 0),
    (0x898, 0x898, 230),
    (0x899, 0x89B, 220),
    (0x89C, 0x89F, 230),
    (0x8A0, 0x8C9, 0),
    (0x8CA, 0x8CE, 230),
    (0x8CF, 0x8D3, 220),
    (0x8D4, 0x8E1, 230),
    (0x8E2, 0x8E2, 0),
    (0x8E3, 0x8E3, 220),
    (0x8E4, 0x8E5, 230),
    (0x8E6, 0x8E6, 220),
    (0x8E7, 0x8E8, 230),
    (0x8E9, 0x8E9, 220),
    (0x8EA, 0x8EC, 230),
    (0x8ED, 0x8EF, 220),
    (0x8F0, 0x8F0, 27),
    (0x8F1, 0x8F1, 28),
    (0x8F2, 0x8F2, 29),
    (0x8F3, 0x8F5, 230),
    (0x8F6, 0x8F6, 220),
    (0x8F7, 0x8F8, 230),
    (0x8F9, 0x8FA, 220),
    (0x8FB, 0x8FF, 230),
    (0x900, 0x93B, 0),
    (0x93C, 0x93C, 7),
    (0x93D, 0x94C, 0),
    (0x94D, 0x94D, 9),
    (0x94E, 0x950, 0),
    (0x951, 0x951, 230),
    (0x952, 0x952, 220),
    (0x953, 0x954, 230),
    (0x955, 0x9BB, 0),
    (0x9BC, 0x9BC, 7),
    (0x9BD, 0x9CC, 0),
    (0x9CD, 0x9CD, 9),
    (0x9CE, 0x9FD, 0),
    (0x9FE, 0x9FE, 230),
    (0x9FF, 0xA3B, 0),
    (0xA3C, 0xA3C, 7),
    (0xA3D, 0xA4C, 0),
    (0xA4D, 0xA4D, 9),
    (0xA4E, 0xABB, 0),
    (0xABC, 0xABC, 7),
    (0xABD, 0xACC, 0),
    (0xACD, 0xACD, 9),
    (0xACE, 0xB3B, 0),
    (0xB3C, 0xB3C, 7),
    (0xB3D, 0xB4C, 0),
    (0xB4D, 0xB4D, 9),
    (0xB4E, 0xBCC, 0),
    (0xBCD, 0xBCD, 9),
    (0xBCE, 0xC3B, 0),
    (0xC3C, 0xC3C, 7),
    (0xC3D, 0xC4C, 0),
    (0xC4D, 0xC4D, 9),
    (0xC4E, 0xC54, 0),
    (0xC55, 0xC55, 84),
    (0xC56, 0xC56, 91),
    (0xC57, 0xCBB, 0),
    (0xCBC, 0xCBC, 7),
    (0xCBD, 0xCCC, 0),
    (0xCCD, 0xCCD, 9),
    (0xCCE, 0xD3A, 0),
    (0xD3B, 0xD3C, 9),
    (0xD3D, 0xD4C, 0),
    (0xD4D, 0xD4D, 9),
    (0xD4E, 0xDC9, 0),
    (0xDCA, 0xDCA, 9),
    (0xDCB, 0xE37, 0),
    (0xE38, 0xE39, 103),
    (0xE3A, 0xE3A, 9),
    (0xE3B, 0xE47, 0),
    (0xE48, 0xE4B, 107),
    (0xE4C, 0xEB7, 0),
    (0xEB8, 0xEB9, 118),
    (0xEBA, 0xEBA, 9),
    (0xEBB, 0xEC7, 0),
    (0xEC8, 0xECB, 122),
    (0xECC, 0xF17, 0),
    (0xF18, 0xF19, 220),
    (0xF1A, 0xF34, 0),
    (0xF35, 0xF35, 220),
    (0xF36, 0xF36, 0),
    (0xF37, 0xF37, 220),
    (0xF38, 0xF38, 0),
    (0xF39, 0xF39, 216),
    (0xF3A, 0xF70, 0),
    (0xF71, 0xF71, 129),
    (0xF72, 0xF72, 130),
    (0xF73, 0xF73, 0),
    (0xF74, 0xF74, 132),
    (0xF75, 0xF79, 0),
    (0xF7A, 0xF7D, 130),
    (0xF7E, 0xF7F, 0),
    (0xF80, 0xF80, 130),
    (0xF81, 0xF81, 0),
    (0xF82, 0xF83, 230),
    (0xF84, 0xF84, 9),
    (0xF85, 0xF85, 0),
    (0xF86, 0xF87, 230),
    (0xF88, 0xFC5, 0),
    (0xFC6, 0xFC6, 220),
    (0xFC7, 0x1036, 0),
    (0x1037, 0x1037, 7),
    (0x1038, 0x1038, 0),
    (0x1039, 0x103A, 9),
    (0x103B, 0x108C, 0),
    (0x108D, 0x108D, 220),
    (0x108E, 0x135C, 0),
    (0x135D, 0x135F, 230),
    (0x1360, 0x1713, 0),
    (0x1714, 0x1715, 9),
    (0x1716, 0x1733, 0),
    (0x1734, 0x1734, 9),
    (0x1735, 0x17D1, 0),
    (0x17D2, 0x17D2, 9),
    (0x17D3, 0x17DC, 0),
    (0x17DD, 0x17DD, 230),
    (0x17DE, 0x18A8, 0),
    (0x18A9, 0x18A9, 228),
    (0x18AA, 0x1938, 0),
    (0x1939, 0x1939, 222),
    (0x193A, 0x193A, 230),
    (0x193B, 0x193B, 220),
    (0x193C, 0x1A16, 0),
    (0x1A17, 0x1A17, 230),
    (0x1A18, 0x1A18, 220),
    (0x1A19, 0x1A5F, 0),
    (0x1A60, 0x1A60, 9),
    (0x1A61, 0x1A74, 0),
    (0x1A75, 0x1A7C, 230),
    (0x1A7D, 0x1A7E, 0),
    (0x1A7F, 0x1A7F, 220),
    (0x1A80, 0x1AAF, 0),
    (0x1AB0, 0x1AB4, 230),
    (0x1AB5, 0x1ABA, 220),
    (0x1ABB, 0x1ABC, 230),
    (0x1ABD, 0x1ABD, 220),
    (0x1ABE, 0x1ABE, 0),
    (0x1ABF, 0x1AC0, 220),
    (0x1AC1, 0x1AC2, 230),
    (0x1AC3, 0x1AC4, 220),
    (0x1AC5, 0x1AC9, 230),
    (0x1ACA, 0x1ACA, 220),
    (0x1ACB, 0x1ACE, 230),
    (0x1ACF, 0x1B33, 0),
    (0x1B34, 0x1B34, 7),
    (0x1B35, 0x1B43, 0),
    (0x1B44, 0x1B44, 9),
    (0x1B45, 0x1B6A, 0),
    (0x1B6B, 0x1B6B, 230),
    (0x1B6C, 0x1B6C, 220),
    (0x1B6D, 0x1B73, 230),
    (0x1B74, 0x1BA9, 0),
    (0x1BAA, 0x1BAB, 9),
    (0x1BAC, 0x1BE5, 0),
    (0x1BE6, 0x1BE6, 7),
    (0x1BE7, 0x1BF1, 0),
    (0x1BF2, 0x1BF3, 9),
    (0x1BF4, 0x1C36, 0),
    (0x1C37, 0x1C37, 7),
    (0x1C38, 0x1CCF, 0),
    (0x1CD0, 0x1CD2, 230),
    (0x1CD3, 0x1CD3, 0),
    (0x1CD4, 0x1CD4, 1),
    (0x1CD5, 0x1CD9, 220),
    (0x1CDA, 0x1CDB, 230),
    (0x1CDC, 0x1CDF, 220),
    (0x1CE0, 0x1CE0, 230),
    (0x1CE1, 0x1CE1, 0),
    (0x1CE2, 0x1CE8, 1),
    (0x1CE9, 0x1CEC, 0),
    (0x1CED, 0x1CED, 220),
    (0x1CEE, 0x1CF3, 0),
    (0x1CF4, 0x1CF4, 230),
    (0x1CF5, 0x1CF7, 0),
    (0x1CF8, 0x1CF9, 230),
    (0x1CFA, 0x1DBF, 0),
    (0x1DC0, 0x1DC1, 230),
    (0x1DC2, 0x1DC2, 220),
    (0x1DC3, 0x1DC9, 230),
    (0x1DCA, 0x1DCA, 220),
    (0x1DCB, 0x1DCC, 230),
    (0x1DCD, 0x1DCD, 234),
    (0x1DCE, 0x1DCE, 214),
    (0x1DCF, 0x1DCF, 220),
    (0x1DD0, 0x1DD0, 202),
    (0x1DD1, 0x1DF5, 230),
    (0x1DF6, 0x1DF6, 232),
    (0x1DF7, 0x1DF8, 228),
    (0x1DF9, 0x1DF9, 220),
    (0x1DFA, 0x1DFA, 218),
    (0x1DFB, 0x1DFB, 230),
    (0x1DFC, 0x1DFC, 233),
    (0x1DFD, 0x1DFD, 220),
    (0x1DFE, 0x1DFE, 230),
    (0x1DFF, 0x1DFF, 220),
    (0x1E00, 0x20CF, 0),
    (0x20D0, 0x20D1, 230),
    (0x20D2, 0x20D3, 1),
    (0x20D4, 0x20D7, 230),
    (0x20D8, 0x20DA, 1),
    (0x20DB, 0x20DC, 230),
    (0x20DD, 0x20E0, 0),
    (0x20E1, 0x20E1, 230),
    (0x20E2, 0x20E4, 0),
    (0x20E5, 0x20E6, 1),
    (0x20E7, 0x20E7, 230),
    (0x20E8, 0x20E8, 220),
    (0x20E9, 0x20E9, 230),
    (0x20EA, 0x20EB, 1),
    (0x20EC, 0x20EF, 220),
    (0x20F0, 0x20F0, 230),
    (0x20F1, 0x2CEE, 0),
    (0x2CEF, 0x2CF1, 230),
    (0x2CF2, 0x2D7E, 0),
    (0x2D7F, 0x2D7F, 9),
    (0x2D80, 0x2DDF, 0),
    (0x2DE0, 0x2DFF, 230),
    (0x2E00, 0x3029, 0),
    (0x302A, 0x302A, 218),
    (0x302B, 0x302B, 228),
    (0x302C, 0x302C, 232),
    (0x302D, 0x302D, 222),
    (0x302E, 0x302F, 224),
    (0x3030, 0x3098, 0),
    (0x3099, 0x309A, 8),
    (0x309B, 0xA66E, 0),
    (0xA66F, 0xA66F, 230),
    (0xA670, 0xA673, 0),
    (0xA674, 0xA67D, 230),
    (0xA67E, 0xA69D, 0),
    (0xA69E, 0xA69F, 230),
    (0xA6A0, 0xA6EF, 0),
    (0xA6F0, 0xA6F1, 230),
    (0xA6F2, 0xA805, 0),
    (0xA806, 0xA806, 9),
    (0xA807, 0xA82B, 0),
    (0xA82C, 0xA82C, 9),
    (0xA82D, 0xA8C3, 0),
    (0xA8C4, 0xA8C4, 9),
    (0xA8C5, 0xA8DF, 0),
    (0xA8E0, 0xA8F1, 230),
    (0xA8F2, 0xA92A, 0),
    (0xA92B, 0xA92D, 220),
    (0xA92E, 0xA952, 0),
    (0xA953, 0xA953, 9),
    (0xA954, 0xA9B2, 0),
    (0xA9B3, 0xA9B3, 7),
    (0xA9B4, 0xA9BF, 0),
    (0xA9C0, 0xA9C0, 9),
    (0xA9C1, 0xAAAF, 0),
    (0xAAB0, 0xAAB0, 230),
    (0xAAB1, 0xAAB1, 0),
    (0xAAB2, 0xAAB3, 230),
    (0xAAB4, 0xAAB4, 220),
    (0xAAB5, 0xAAB6, 0),
    (0xAAB7, 0xAAB8, 230),
    (0xAAB9, 0xAABD, 0),
    (0xAABE, 0xAABF, 230),
    (0xAAC0, 0xAAC0, 0),
    (0xAAC1, 0xAAC1, 230),
    (0xAAC2, 0xAAF5, 0),
    (0xAAF6, 0xAAF6, 9),
    (0xAAF7, 0xABEC, 0),
    (0xABED, 0xABED, 9),
    (0xABEE, 0xFB1D, 0),
    (0xFB1E, 0xFB1E, 26),
    (0xFB1F, 0xFE1F, 0),
    (0xFE20, 0xFE26, 230),
    (0xFE27, 0xFE2D, 220),
    (0xFE2E, 0xFE2F, 230),
    (0xFE30, 0x101FC, 0),
    (0x101FD, 0x101FD, 220),
    (0x101FE, 0x102DF, 0),
    (0x102E0, 0x102E0, 220),
    (0x102E1, 0x10375, 0),
    (0x10376, 0x1037A, 230),
    (0x1037B, 0x10A0C, 0),
    (0x10A0D, 0x10A0D, 220),
    (0x10A0E, 0x10A0E, 0),
    (0x10A0F, 0x10A0F, 230),
    (0x10A10, 0x10A37, 0),
    (0x10A38, 0x10A38, 230),
    (0x10A39, 0x10A39, 1),
    (0x10A3A, 0x10A3A, 220),
    (0x10A3B, 0x10A3E, 0),
    (0x10A3F, 0x10A3F, 9),
    (0x10A40, 0x10AE4, 0),
    (0x10AE5, 0x10AE5, 230),
    (0x10AE6, 0x10AE6, 220),
    (0x10AE7, 0x10D23, 0),
    (0x10D24, 0x10D27, 230),
    (0x10D28, 0x10EAA, 0),
    (0x10EAB, 0x10EAC, 230),
    (0x10EAD, 0x10F45, 0),
    (0x10F46, 0x10F47, 220),
    (0x10F48, 0x10F4A, 230),
    (0x10F4B, 0x10F4B, 220),
    (0x10F4C, 0x10F4C, 230),
    (0x10F4D, 0x10F50, 220),
    (0x10F51, 0x10F81, 0),
    (0x10F82, 0x10F82, 230),
    (0x10F83, 0x10F83, 220),
    (0x10F84, 0x10F84, 230),
    (0x10F85, 0x10F85, 220),
    (0x10F86, 0x11045, 0),
    (0x11046, 0x11046, 9),
    (0x11047, 0x1106F, 0),
    (0x11070, 0x11070, 9),
    (0x11071, 0x1107E, 0),
    (0x1107F, 0x1107F, 9),
    (0x11080, 0x110B8, 0),
    (0x110B9, 0x110B9, 9),
    (0x110BA, 0x110BA, 7),
    (0x110BB, 0x110FF, 0),
    (0x11100, 0x11102, 230),
    (0x11103, 0x11132, 0),
    (0x11133, 0x11134, 9),
    (0x11135, 0x11172, 0),
    (0x11173, 0x11173, 7),
    (0x11174, 0x111BF, 0),
    (0x111C0, 0x111C0, 9),
    (0x111C1, 0x111C9, 0),
    (0x111CA, 0x111CA, 7),
    (0x111CB, 0x11234, 0),
    (0x11235, 0x11235, 9),
    (0x11236, 0x11236, 7),
    (0x11237, 0x112E8, 0),
    (0x112E9, 0x112E9, 7),
    (0x112EA, 0x112EA, 9),
    (0x112EB, 0x1133A, 0),
    (0x1133B, 0x1133C, 7),
    (0x1133D, 0x1134C, 0),
    (0x1134D, 0x1134D, 9),
    (0x1134E, 0x11365, 0),
    (0x11366, 0x1136C, 230),
    (0x1136D, 0x1136F, 0),
    (0x11370, 0x11374, 230),
    (0x11375, 0x11441, 0),
    (0x11442, 0x11442, 9),
    (0x11443, 0x11445, 0),
    (0x11446, 0x11446, 7),
    (0x11447, 0x1145D, 0),
    (0x1145E, 0x1145E, 230),
    (0x1145F, 0x114C1, 0),
    (0x114C2, 0x114C2, 9),
    (0x114C3, 0x114C3, 7),
    (0x114C4, 0x115BE, 0),
    (0x115BF, 0x115BF, 9),
    (0x115C0, 0x115C0, 7),
    (0x115C1, 0x1163E, 0),
    (0x1163F, 0x1163F, 9),
    (0x11640, 0x116B5, 0),
    (0x116B6, 0x116B6, 9),
    (0x116B7, 0x116B7, 7),
    (0x116B8, 0x1172A, 0),
    (0x1172B, 0x1172B, 9),
    (0x1172C, 0x11838, 0),
    (0x11839, 0x11839, 9),
    (0x1183A, 0x1183A, 7),
    (0x1183B, 0x1193C, 0),
    (0x1193D, 0x1193E, 9),
    (0x1193F, 0x11942, 0),
    (0x11943, 0x11943, 7),
    (0x11944, 0x119DF, 0),
    (0x119E0, 0x119E0, 9),
    (0x119E1, 0x11A33, 0),
    (0x11A34, 0x11A34, 9),
    (0x11A35, 0x11A46, 0),
    (0x11A47, 0x11A47, 9),
    (0x11A48, 0x11A98, 0),
    (0x11A99, 0x11A99, 9),
    (0x11A9A, 0x11C3E, 0),
    (0x11C3F, 0x11C3F, 9),
    (0x11C40, 0x11D41, 0),
    (0x11D42, 0x11D42, 7),
    (0x11D43, 0x11D43, 0),
    (0x11D44, 0x11D45, 9),
    (0x11D46, 0x11D96, 0),
    (0x11D97, 0x11D97, 9),
    (0x11D98, 0x16AEF, 0),
    (0x16AF0, 0x16AF4, 1),
    (0x16AF5, 0x16B2F, 0),
    (0x16B30, 0x16B36, 230),
    (0x16B37, 0x16FEF, 0),
    (0x16FF0, 0x16FF1, 6),
    (0x16FF2, 0x1BC9D, 0),
    (0x1BC9E, 0x1BC9E, 1),
    (0x1BC9F, 0x1D164, 0),
    (0x1D165, 0x1D166, 216),
    (0x1D167, 0x1D169, 1),
    (0x1D16A, 0x1D16C, 0),
    (0x1D16D, 0x1D16D, 226),
    (0x1D16E, 0x1D172, 216),
    (0x1D173, 0x1D17A, 0),
    (0x1D17B, 0x1D182, 220),
    (0x1D183, 0x1D184, 0),
    (0x1D185, 0x1D189, 230),
    (0x1D18A, 0x1D18B, 220),
    (0x1D18C, 0x1D1A9, 0),
    (0x1D1AA, 0x1D1AD, 230),
    (0x1D1AE, 0x1D241, 0),
    (0x1D242, 0x1D244, 230),
    (0x1D245, 0x1DFFF, 0),
    (0x1E000, 0x1E006, 230),
    (0x1E007, 0x1E007, 0),
    (0x1E008, 0x1E018, 230),
    (0x1E019, 0x1E01A, 0),
    (0x1E01B, 0x1E021, 230),
    (0x1E022, 0x1E022, 0),
    (0x1E023, 0x1E024, 230),
    (0x1E025, 0x1E025, 0),
    (0x1E026, 0x1E02A, 230),
    (0x1E02B, 0x1E12F, 0),
    (0x1E130, 0x1E136, 230),
    (0x1E137, 0x1E2AD, 0),
    (0x1E2AE, 0x1E2AE, 230),
    (0x1E2AF, 0x1E2EB, 0),
    (0x1E2EC, 0x1E2EF, 230),
    (0x1E2F0, 0x1E8CF, 0),
    (0x1E8D0, 0x1E8D6, 220),
    (0x1E8D7, 0x1E943, 0),
    (0x1E944, 0x1E949, 230),
    (0x1E94A, 0x1E94A, 7),
    (0x1E94B, 0x10FFFF, 0),
];

static USE_CLASS_TABLE: &[(u32, u32, UseClass)] = &[
    (0x0, 0x2C, UseClass::O),
    (0x2D, 0x2D, UseClass::GB),
    (0x2E, 0x2F, UseClass::O),
    (0x30, 0x39, UseClass::N),
    (0x3A, 0x9F, UseClass::O),
    (0xA0, 0xA0, UseClass::GB),
    (0xA1, 0xD6, UseClass::O),
    (0xD7, 0xD7, UseClass::GB),
    (0xD8, 0x2FF, UseClass::O),
    (0x300, 0x36F, UseClass::VMAbv),
    (0x370, 0x482, UseClass::O),
    (0x483, 0x489, UseClass::VMAbv),
    (0x48A, 0x590, UseClass::O),
    (0x591, 0x5BD, UseClass::VMAbv),
    (0x5BE, 0x5BE, UseClass::O),
    (0x5BF, 0x5BF, UseClass::VMAbv),
    (0x5C0, 0x5C0, UseClass::O),
    (0x5C1, 0x5C2, UseClass::VMAbv),
    (0x5C3, 0x5C3, UseClass::O),
    (0x5C4, 0x5C5, UseClass::VMAbv),
    (0x5C6, 0x5C6, UseClass::O),
    (0x5C7, 0x5C7, UseClass::VMAbv),
    (0x5C8, 0x60F, UseClass::O),
    (0x610, 0x61A, UseClass::VMAbv),
    (0x61B, 0x64A, UseClass::O),
    (0x64B, 0x65F, UseClass::VMAbv),
    (0x660, 0x66F, UseClass::O),
    (0x670, 0x670, UseClass::VMAbv),
    (0x671, 0x6D5, UseClass::O),
    (0x6D6, 0x6DC, UseClass::VMAbv),
    (0x6DD, 0x6DE, UseClass::O),
    (0x6DF, 0x6E4, UseClass::VMAbv),
    (0x6E5, 0x6E6, UseClass::O),
    (0x6E7, 0x6E8, UseClass::VMAbv),
    (0x6E9, 0x6E9, UseClass::O),
    (0x6EA, 0x6ED, UseClass::VMAbv),
    (0x6EE, 0x710, UseClass::O),
    (0x711, 0x711, UseClass::VMAbv),
    (0x712, 0x72F, UseClass::O),
    (0x730, 0x74A, UseClass::VMAbv),
    (0x74B, 0x7A5, UseClass::O),
    (0x7A6, 0x7B0, UseClass::VMAbv),
    (0x7B1, 0x7EA, UseClass::O),
    (0x7EB, 0x7F3, UseClass::VMAbv),
    (0x7F4, 0x7FC, UseClass::O),
    (0x7FD, 0x7FD, UseClass::VMAbv),
    (0x7FE, 0x815, UseClass::O),
    (0x816, 0x819, UseClass::VMAbv),
    (0x81A, 0x81A, UseClass::O),
    (0x81B, 0x823, UseClass::VMAbv),
    (0x824, 0x824, UseClass::O),
    (0x825, 0x827, UseClass::VMAbv),
    (0x828, 0x828, UseClass::O),
    (0x829, 0x82D, UseClass::VMAbv),
    (0x82E, 0x858, UseClass::O),
    (0x859, 0x85B, UseClass::VMAbv),
    (0x85C, 0x897, UseClass::O),
    (0x898, 0x89F, UseClass::VMAbv),
    (0x8A0, 0x8C9, UseClass::O),
    (0x8CA, 0x8E1, UseClass::VMAbv),
    (0x8E2, 0x8E2, UseClass::O),
    (0x8E3, 0x902, UseClass::VMAbv),
    (0x903, 0x903, UseClass::VMPst),
    (0x904, 0x914, UseClass::IND),
    (0x915, 0x939, UseClass::B),
    (0x93A, 0x93A, UseClass::VAbv),
    (0x93B, 0x93B, UseClass::VPst),
    (0x93C, 0x93C, UseClass::N),
    (0x93D, 0x93D, UseClass::VAbv),
    (0x93E, 0x93E, UseClass::VPst),
    (0x93F, 0x93F, UseClass::VPre),
    (0x940, 0x940, UseClass::VPst),
    (0x941, 0x944, UseClass::VBlw),
    (0x945, 0x948, UseClass::VAbv),
    (0x949, 0x94C, UseClass::VPst),
    (0x94D, 0x94D, UseClass::H),
    (0x94E, 0x94E, UseClass::VPre),
    (0x94F, 0x94F, UseClass::VPst),
    (0x950, 0x950, UseClass::O),
    (0x951, 0x951, UseClass::CMAbv),
    (0x952, 0x952, UseClass::CMBlw),
    (0x953, 0x954, UseClass::VMAbv),
    (0x955, 0x955, UseClass::VAbv),
    (0x956, 0x957, UseClass::VBlw),
    (0x958, 0x95F, UseClass::B),
    (0x960, 0x961, UseClass::IND),
    (0x962, 0x963, UseClass::VBlw),
    (0x964, 0x965, UseClass::O),
    (0x966, 0x96F, UseClass::N),
    (0x970, 0x971, UseClass::O),
    (0x972, 0x977, UseClass::IND),
    (0x978, 0x97F, UseClass::B),
    (0x980, 0x980, UseClass::GB),
    (0x981, 0x981, UseClass::VMAbv),
    (0x982, 0x983, UseClass::VMPst),
    (0x984, 0x984, UseClass::O),
    (0x985, 0x98C, UseClass::IND),
    (0x98D, 0x98E, UseClass::O),
    (0x98F, 0x990, UseClass::IND),
    (0x991, 0x992, UseClass::O),
    (0x993, 0x994, UseClass::IND),
    (0x995, 0x9A8, UseClass::B),
    (0x9A9, 0x9A9, UseClass::O),
    (0x9AA, 0x9B0, UseClass::B),
    (0x9B1, 0x9B1, UseClass::O),
    (0x9B2, 0x9B2, UseClass::B),
    (0x9B3, 0x9B5, UseClass::O),
    (0x9B6, 0x9B9, UseClass::B),
    (0x9BA, 0x9BB, UseClass::O),
    (0x9BC, 0x9BC, UseClass::N),
    (0x9BD, 0x9BD, UseClass::VAbv),
    (0x9BE, 0x9BE, UseClass::VPst),
    (0x9BF, 0x9BF, UseClass::VPre),
    (0x9C0, 0x9C0, UseClass::VPst),
    (0x9C1, 0x9C4, UseClass::VBlw),
    (0x9C5, 0x9C6, UseClass::O),
    (0x9C7, 0x9C8, UseClass::VPre),
    (0x9C9, 0x9CA, UseClass::O),
    (0x9CB, 0x9CC, UseClass::VAbv),
    (0x9CD, 0x9CD, UseClass::H),
    (0x9CE, 0x9CE, UseClass::CS),
    (0x9CF, 0x9D6, UseClass::O),
    (0x9D7, 0x9D7, UseClass::VPst),
    (0x9D8, 0x9DB, UseClass::O),
    (0x9DC, 0x9DD, UseClass::B),
    (0x9DE, 0x9DE, UseClass::O),
    (0x9DF, 0x9DF, UseClass::B),
    (0x9E0, 0x9E1, UseClass::IND),
    (0x9E2, 0x9E3, UseClass::VBlw),
    (0x9E4, 0x9E5, UseClass::O),
    (0x9E6, 0x9EF, UseClass::N),
    (0x9F0, 0x9F1, UseClass::B),
    (0x9F2, 0x9FB, UseClass::O),
    (0x9FC, 0x9FC, UseClass::VMPst),
    (0x9FD, 0x9FD, UseClass::O),
    (0x9FE, 0x9FE, UseClass::VMAbv),
    (0x9FF, 0xA00, UseClass::O),
    (0xA01, 0xA02, UseClass::VMAbv),
    (0xA03, 0xA03, UseClass::VMPst),
    (0xA04, 0xA04, UseClass::O),
    (0xA05, 0xA0A, UseClass::IND),
    (0xA0B, 0xA0E, UseClass::O),
    (0xA0F, 0xA10, UseClass::IND),
    (0xA11, 0xA12, UseClass::O),
    (0xA13, 0xA14, UseClass::IND),
    (0xA15, 0xA28, UseClass::B),
    (0xA29, 0xA29, UseClass::O),
    (0xA2A, 0xA30, UseClass::B),
    (0xA31, 0xA31, UseClass::O),
    (0xA32, 0xA33, UseClass::B),
    (0xA34, 0xA34, UseClass::O),
    (0xA35, 0xA36, UseClass::B),
    (0xA37, 0xA37, UseClass::O),
    (0xA38, 0xA39, UseClass::B),
    (0xA3A, 0xA3B, UseClass::O),
    (0xA3C, 0xA3C, UseClass::N),
    (0xA3D, 0xA3D, UseClass::O),
    (0xA3E, 0xA3E, UseClass::VPst),
    (0xA3F, 0xA3F, UseClass::VPre),
    (0xA40, 0xA40, UseClass::VPst),
    (0xA41, 0xA42, UseClass::VBlw),
    (0xA43, 0xA46, UseClass::O),
    (0xA47, 0xA48, UseClass::VAbv),
    (0xA49, 0xA4A, UseClass::O),
    (0xA4B, 0xA4C, UseClass::VAbv),
    (0xA4D, 0xA4D, UseClass::H),
    (0xA4E, 0xA50, UseClass::O),
    (0xA51, 0xA51, UseClass::CMBlw),
    (0xA52, 0xA58, UseClass::O),
    (0xA59, 0xA5C, UseClass::B),
    (0xA5D, 0xA5D, UseClass::O),
    (0xA5E, 0xA5E, UseClass::B),
    (0xA5F, 0xA65, UseClass::O),
    (0xA66, 0xA6F, UseClass::N),
    (0xA70, 0xA70, UseClass::VMAbv),
    (0xA71, 0xA71, UseClass::SMAbv),
    (0xA72, 0xA73, UseClass::GB),
    (0xA74, 0xA74, UseClass::O),
    (0xA75, 0xA75, UseClass::MBlw),
    (0xA76, 0xA80, UseClass::O),
    (0xA81, 0xA82, UseClass::VMAbv),
    (0xA83, 0xA83, UseClass::VMPst),
    (0xA84, 0xA84, UseClass::O),
    (0xA85, 0xA8D, UseClass::IND),
    (0xA8E, 0xA8E, UseClass::O),
    (0xA8F, 0xA91, UseClass::IND),
    (0xA92, 0xA92, UseClass::O),
    (0xA93, 0xA94, UseClass::IND),
    (0xA95, 0xAA8, UseClass::B),
    (0xAA9, 0xAA9, UseClass::O),
    (0xAAA, 0xAB0, UseClass::B),
    (0xAB1, 0xAB1, UseClass::O),
    (0xAB2, 0xAB3, UseClass::B),
    (0xAB4, 0xAB4, UseClass::O),
    (0xAB5, 0xAB9, UseClass::B),
    (0xABA, 0xABB, UseClass::O),
    (0xABC, 0xABC, UseClass::N),
    (0xABD, 0xABD, UseClass::VAbv),
    (0xABE, 0xABE, UseClass::VPst),
    (0xABF, 0xABF, UseClass::VPre),
    (0xAC0, 0xAC0, UseClass::VPst),
    (0xAC1, 0xAC4, UseClass::VBlw),
    (0xAC5, 0xAC5, UseClass::VAbv),
    (0xAC6, 0xAC6, UseClass::O),
    (0xAC7, 0xAC9, UseClass::VAbv),
    (0xACA, 0xACA, UseClass::O),
    (0xACB, 0xACC, UseClass::VPst),
    (0xACD, 0xACD, UseClass::H),
    (0xACE, 0xADF, UseClass::O),
    (0xAE0, 0xAE1, UseClass::IND),
    (0xAE2, 0xAE3, UseClass::VBlw),
    (0xAE4, 0xAE5, UseClass::O),
    (0xAE6, 0xAEF, UseClass::N),
    (0xAF0, 0xAF8, UseClass::O),
    (0xAF9, 0xAF9, UseClass::B),
    (0xAFA, 0xAFA, UseClass::CMAbv),
    (0xAFB, 0xAFB, UseClass::SMAbv),
    (0xAFC, 0xAFC, UseClass::CMAbv),
    (0xAFD, 0xAFF, UseClass::N),
    (0xB00, 0xB00, UseClass::O),
    (0xB01, 0xB01, UseClass::VMAbv),
    (0xB02, 0xB03, UseClass::VMPst),
    (0xB04, 0xB04, UseClass::O),
    (0xB05, 0xB0C, UseClass::IND),
    (0xB0D, 0xB0E, UseClass::O),
    (0xB0F, 0xB10, UseClass::IND),
    (0xB11, 0xB12, UseClass::O),
    (0xB13, 0xB14, UseClass::IND),
    (0xB15, 0xB28, UseClass::B),
    (0xB29, 0xB29, UseClass::O),
    (0xB2A, 0xB30, UseClass::B),
    (0xB31, 0xB31, UseClass::O),
    (0xB32, 0xB33, UseClass::B),
    (0xB34, 0xB34, UseClass::O),
    (0xB35, 0xB39, UseClass::B),
    (0xB3A, 0xB3B, UseClass::O),
    (0xB3C, 0xB3C, UseClass::N),
    (0xB3D, 0xB3D, UseClass::VAbv),
    (0xB3E, 0xB3E, UseClass::VPst),
    (0xB3F, 0xB3F, UseClass::VAbv),
    (0xB40, 0xB40, UseClass::VPst),
    (0xB41, 0xB44, UseClass::VBlw),
    (0xB45, 0xB46, UseClass::O),
    (0xB47, 0xB47, UseClass::VPre),
    (0xB48, 0xB48, UseClass::VAbv),
    (0xB49, 0xB4A, UseClass::O),
    (0xB4B, 0xB4C, UseClass::VAbv),
    (0xB4D, 0xB4D, UseClass::H),
    (0xB4E, 0xB54, UseClass::O),
    (0xB55, 0xB57, UseClass::VAbv),
    (0xB58, 0xB5B, UseClass::O),
    (0xB5C, 0xB5D, UseClass::B),
    (0xB5E, 0xB5E, UseClass::O),
    (0xB5F, 0xB5F, UseClass::B),
    (0xB60, 0xB61, UseClass::IND),
    (0xB62, 0xB63, UseClass::VBlw),
    (0xB64, 0xB65, UseClass::O),
    (0xB66, 0xB6F, UseClass::N),
    (0xB70, 0xB70, UseClass::O),
    (0xB71, 0xB71, UseClass::B),
    (0xB72, 0xB81, UseClass::O),
    (0xB82, 0xB82, UseClass::VMAbv),
    (0xB83, 0xB84, UseClass::O),
    (0xB85, 0xB8A, UseClass::IND),
    (0xB8B, 0xB8D, UseClass::O),
    (0xB8E, 0xB90, UseClass::IND),
    (0xB91, 0xB91, UseClass::O),
    (0xB92, 0xB94, UseClass::IND),
    (0xB95, 0xB95, UseClass::B),
    (0xB96, 0xB98, UseClass::O),
    (0xB99, 0xB9A, UseClass::B),
    (0xB9B, 0xB9B, UseClass::O),
    (0xB9C, 0xB9C, UseClass::B),
    (0xB9D, 0xB9D, UseClass::O),
    (0xB9E, 0xB9F, UseClass::B),
    (0xBA0, 0xBA2, UseClass::O),
    (0xBA3, 0xBA4, UseClass::B),
    (0xBA5, 0xBA7, UseClass::O),
    (0xBA8, 0xBAA, UseClass::B),
    (0xBAB, 0xBAD, UseClass::O),
    (0xBAE, 0xBB9, UseClass::B),
    (0xBBA, 0xBBD, UseClass::O),
    (0xBBE, 0xBBF, UseClass::VPst),
    (0xBC0, 0xBC0, UseClass::VAbv),
    (0xBC1, 0xBC2, UseClass::VPst),
    (0xBC3, 0xBC5, UseClass::O),
    (0xBC6, 0xBC8, UseClass::VPre),
    (0xBC9, 0xBC9, UseClass::O),
    (0xBCA, 0xBCC, UseClass::VAbv),
    (0xBCD, 0xBCD, UseClass::H),
    (0xBCE, 0xBD6, UseClass::O),
    (0xBD7, 0xBD7, UseClass::VPst),
    (0xBD8, 0xBE5, UseClass::O),
    (0xBE6, 0xBEF, UseClass::N),
    (0xBF0, 0xBFF, UseClass::O),
    (0xC00, 0xC00, UseClass::VMAbv),
    (0xC01, 0xC03, UseClass::VMPst),
    (0xC04, 0xC04, UseClass::VMAbv),
    (0xC05, 0xC0C, UseClass::IND),
    (0xC0D, 0xC0D, UseClass::O),
    (0xC0E, 0xC10, UseClass::IND),
    (0xC11, 0xC11, UseClass::O),
    (0xC12, 0xC14, UseClass::IND),
    (0xC15, 0xC28, UseClass::B),
    (0xC29, 0xC29, UseClass::O),
    (0xC2A, 0xC39, UseClass::B),
    (0xC3A, 0xC3B, UseClass::O),
    (0xC3C, 0xC3C, UseClass::N),
    (0xC3D, 0xC40, UseClass::VAbv),
    (0xC41, 0xC44, UseClass::VPst),
    (0xC45, 0xC45, UseClass::O),
    (0xC46, 0xC48, UseClass::VAbv),
    (0xC49, 0xC49, UseClass::O),
    (0xC4A, 0xC4C, UseClass::VAbv),
    (0xC4D, 0xC4D, UseClass::H),
    (0xC4E, 0xC54, UseClass::O),
    (0xC55, 0xC55, UseClass::VAbv),
    (0xC56, 0xC56, UseClass::VBlw),
    (0xC57, 0xC57, UseClass::O),
    (0xC58, 0xC5A, UseClass::B),
    (0xC5B, 0xC5C, UseClass::O),
    (0xC5D, 0xC5D, UseClass::CS),
    (0xC5E, 0xC5F, UseClass::O),
    (0xC60, 0xC61, UseClass::IND),
    (0xC62, 0xC63, UseClass::VBlw),
    (0xC64, 0xC65, UseClass::O),
    (0xC66, 0xC6F, UseClass::N),
    (0xC70, 0xC7F, UseClass::O),
    (0xC80, 0xC80, UseClass::VMPst),
    (0xC81, 0xC81, UseClass::VMAbv),
    (0xC82, 0xC83, UseClass::VMPst),
    (0xC84, 0xC84, UseClass::O),
    (0xC85, 0xC8C, UseClass::IND),
    (0xC8D, 0xC8D, UseClass::O),
    (0xC8E, 0xC90, UseClass::IND),
    (0xC91, 0xC91, UseClass::O),
    (0xC92, 0xC94, UseClass::IND),
    (0xC95, 0xCA8, UseClass::B),
    (0xCA9, 0xCA9, UseClass::O),
    (0xCAA, 0xCB3, UseClass::B),
    (0xCB4, 0xCB4, UseClass::O),
    (0xCB5, 0xCB9, UseClass::B),
    (0xCBA, 0xCBB, UseClass::O),
    (0xCBC, 0xCBC, UseClass::N),
    (0xCBD, 0xCBD, UseClass::VAbv),
    (0xCBE, 0xCBE, UseClass::VPst),
    (0xCBF, 0xCC0, UseClass::VAbv),
    (0xCC1, 0xCC4, UseClass::VPst),
    (0xCC5, 0xCC5, UseClass::O),
    (0xCC6, 0xCC8, UseClass::VAbv),
    (0xCC9, 0xCC9, UseClass::O),
    (0xCCA, 0xCCC, UseClass::VAbv),
    (0xCCD, 0xCCD, UseClass::H),
    (0xCCE, 0xCD4, UseClass::O),
    (0xCD5, 0xCD6, UseClass::VPst),
    (0xCD7, 0xCDC, UseClass::O),
    (0xCDD, 0xCDD, UseClass::CS),
    (0xCDE, 0xCDE, UseClass::B),
    (0xCDF, 0xCDF, UseClass::O),
    (0xCE0, 0xCE1, UseClass::IND),
    (0xCE2, 0xCE3, UseClass::VBlw),
    (0xCE4, 0xCE5, UseClass::O),
    (0xCE6, 0xCEF, UseClass::N),
    (0xCF0, 0xCF0, UseClass::O),
    (0xCF1, 0xCF2, UseClass::SUB),
    (0xCF3, 0xCF3, UseClass::VMPst),
    (0xCF4, 0xCFF, UseClass::O),
    (0xD00, 0xD01, UseClass::VMAbv),
    (0xD02, 0xD04, UseClass::VMPst),
    (0xD05, 0xD0C, UseClass::IND),
    (0xD0D, 0xD0D, UseClass::O),
    (0xD0E, 0xD10, UseClass::IND),
    (0xD11, 0xD11, UseClass::O),
    (0xD12, 0xD14, UseClass::IND),
    (0xD15, 0xD3A, UseClass::B),
    (0xD3B, 0xD3C, UseClass::HN),
    (0xD3D, 0xD3D, UseClass::VAbv),
    (0xD3E, 0xD40, UseClass::VPst),
    (0xD41, 0xD44, UseClass::VBlw),
    (0xD45, 0xD45, UseClass::O),
    (0xD46, 0xD48, UseClass::VPre),
    (0xD49, 0xD49, UseClass::O),
    (0xD4A, 0xD4C, UseClass::VAbv),
    (0xD4D, 0xD4D, UseClass::H),
    (0xD4E, 0xD4E, UseClass::R),
    (0xD4F, 0xD53, UseClass::O),
    (0xD54, 0xD56, UseClass::CS),
    (0xD57, 0xD57, UseClass::VPst),
    (0xD58, 0xD5E, UseClass::O),
    (0xD5F, 0xD61, UseClass::IND),
    (0xD62, 0xD63, UseClass::VBlw),
    (0xD64, 0xD65, UseClass::O),
    (0xD66, 0xD6F, UseClass::N),
    (0xD70, 0xD79, UseClass::O),
    (0xD7A, 0xD7F, UseClass::CS),
    (0xD80, 0xD80, UseClass::O),
    (0xD81, 0xD81, UseClass::VMAbv),
    (0xD82, 0xD83, UseClass::VMPst),
    (0xD84, 0xD84, UseClass::O),
    (0xD85, 0xD96, UseClass::IND),
    (0xD97, 0xD99, UseClass::O),
    (0xD9A, 0xDB1, UseClass::B),
    (0xDB2, 0xDB2, UseClass::O),
    (0xDB3, 0xDBB, UseClass::B),
    (0xDBC, 0xDBC, UseClass::O),
    (0xDBD, 0xDBD, UseClass::B),
    (0xDBE, 0xDBF, UseClass::O),
    (0xDC0, 0xDC6, UseClass::B),
    (0xDC7, 0xDC9, UseClass::O),
    (0xDCA, 0xDCA, UseClass::H),
    (0xDCB, 0xDCE, UseClass::O),
    (0xDCF, 0xDD1, UseClass::VPst),
    (0xDD2, 0xDD3, UseClass::VAbv),
    (0xDD4, 0xDD4, UseClass::VBlw),
    (0xDD5, 0xDD5, UseClass::O),
    (0xDD6, 0xDD6, UseClass::VBlw),
    (0xDD7, 0xDD7, UseClass::O),
    (0xDD8, 0xDD8, UseClass::VPst),
    (0xDD9, 0xDD9, UseClass::VPre),
    (0xDDA, 0xDDA, UseClass::VAbv),
    (0xDDB, 0xDDB, UseClass::VPre),
    (0xDDC, 0xDDE, UseClass::VAbv),
    (0xDDF, 0xDDF, UseClass::VPst),
    (0xDE0, 0xDE5, UseClass::O),
    (0xDE6, 0xDEF, UseClass::N),
    (0xDF0, 0xDF1, UseClass::O),
    (0xDF2, 0xDF3, UseClass::VPst),
    (0xDF4, 0xE00, UseClass::O),
    (0xE01, 0xE2E, UseClass::B),
    (0xE2F, 0xE2F, UseClass::O),
    (0xE30, 0xE30, UseClass::VPst),
    (0xE31, 0xE31, UseClass::VAbv),
    (0xE32, 0xE33, UseClass::VPst),
    (0xE34, 0xE37, UseClass::VAbv),
    (0xE38, 0xE39, UseClass::VBlw),
    (0xE3A, 0xE3A, UseClass::HN),
    (0xE3B, 0xE3F, UseClass::O),
    (0xE40, 0xE44, UseClass::VAbv),
    (0xE45, 0xE45, UseClass::VPst),
    (0xE46, 0xE46, UseClass::O),
    (0xE47, 0xE47, UseClass::VAbv),
    (0xE48, 0xE4B, UseClass::N),
    (0xE4C, 0xE4D, UseClass::VMAbv),
    (0xE4E, 0xE4E, UseClass::HN),
    (0xE4F, 0xE4F, UseClass::O),
    (0xE50, 0xE59, UseClass::N),
    (0xE5A, 0xE80, UseClass::O),
    (0xE81, 0xE82, UseClass::B),
    (0xE83, 0xE83, UseClass::O),
    (0xE84, 0xE84, UseClass::B),
    (0xE85, 0xE85, UseClass::O),
    (0xE86, 0xE8A, UseClass::B),
    (0xE8B, 0xE8B, UseClass::O),
    (0xE8C, 0xEA3, UseClass::B),
    (0xEA4, 0xEA4, UseClass::O),
    (0xEA5, 0xEA5, UseClass::B),
    (0xEA6, 0xEA6, UseClass::O),
    (0xEA7, 0xEAE, UseClass::B),
    (0xEAF, 0xEAF, UseClass::O),
    (0xEB0, 0xEB0, UseClass::VPst),
    (0xEB1, 0xEB1, UseClass::VAbv),
    (0xEB2, 0xEB3, UseClass::VPst),
    (0xEB4, 0xEB7, UseClass::VAbv),
    (0xEB8, 0xEB9, UseClass::VBlw),
    (0xEBA, 0xEBA, UseClass::HN),
    (0xEBB, 0xEBB, UseClass::VAbv),
    (0xEBC, 0xEBD, UseClass::MBlw),
    (0xEBE, 0xEBF, UseClass::O),
    (0xEC0, 0xEC4, UseClass::VAbv),
    (0xEC5, 0xEC7, UseClass::O),
    (0xEC8, 0xECB, UseClass::N),
    (0xECC, 0xECD, UseClass::VMAbv),
    (0xECE, 0xECF, UseClass::O),
    (0xED0, 0xED9, UseClass::N),
    (0xEDA, 0xEDB, UseClass::O),
    (0xEDC, 0xEDF, UseClass::B),
    (0xEE0, 0xF17, UseClass::O),
    (0xF18, 0xF19, UseClass::VMAbv),
    (0xF1A, 0xF1F, UseClass::O),
    (0xF20, 0xF33, UseClass::N),
    (0xF34, 0xF34, UseClass::O),
    (0xF35, 0xF35, UseClass::VMAbv),
    (0xF36, 0xF36, UseClass::O),
    (0xF37, 0xF37, UseClass::VMAbv),
    (0xF38, 0xF38, UseClass::O),
    (0xF39, 0xF39, UseClass::N),
    (0xF3A, 0xF3D, UseClass::O),
    (0xF3E, 0xF3F, UseClass::VMAbv),
    (0xF40, 0xF47, UseClass::B),
    (0xF48, 0xF48, UseClass::O),
    (0xF49, 0xF6C, UseClass::B),
    (0xF6D, 0xF70, UseClass::O),
    (0xF71, 0xF71, UseClass::VBlw),
    (0xF72, 0xF73, UseClass::VAbv),
    (0xF74, 0xF75, UseClass::VBlw),
    (0xF76, 0xF7D, UseClass::VAbv),
    (0xF7E, 0xF7E, UseClass::VMAbv),
    (0xF7F, 0xF7F, UseClass::VMPst),
    (0xF80, 0xF81, UseClass::VAbv),
    (0xF82, 0xF83, UseClass::VMAbv),
    (0xF84, 0xF84, UseClass::HN),
    (0xF85, 0xF85, UseClass::VAbv),
    (0xF86, 0xF87, UseClass::VMAbv),
    (0xF88, 0xF8C, UseClass::B),
    (0xF8D, 0xF97, UseClass::H),
    (0xF98, 0xF98, UseClass::O),
    (0xF99, 0xFBC, UseClass::H),
    (0xFBD, 0xFC5, UseClass::O),
    (0xFC6, 0xFC6, UseClass::VMAbv),
    (0xFC7, 0xFFF, UseClass::O),
    (0x1000, 0x1020, UseClass::B),
    (0x1021, 0x102A, UseClass::IND),
    (0x102B, 0x102C, UseClass::VPst),
    (0x102D, 0x102E, UseClass::VAbv),
    (0x102F, 0x1030, UseClass::VBlw),
    (0x1031, 0x1031, UseClass::VPre),
    (0x1032, 0x1035, UseClass::VAbv),
    (0x1036, 0x1036, UseClass::VMAbv),
    (0x1037, 0x1037, UseClass::N),
    (0x1038, 0x1038, UseClass::VMPst),
    (0x1039, 0x103A, UseClass::HN),
    (0x103B, 0x103B, UseClass::MPst),
    (0x103C, 0x103E, UseClass::MBlw),
    (0x103F, 0x103F, UseClass::B),
    (0x1040, 0x1049, UseClass::N),
    (0x104A, 0x104A, UseClass::O),
    (0x104B, 0x104B, UseClass::GB),
    (0x104C, 0x104D, UseClass::O),
    (0x104E, 0x104E, UseClass::GB),
    (0x104F, 0x104F, UseClass::O),
    (0x1050, 0x1051, UseClass::B),
    (0x1052, 0x1055, UseClass::IND),
    (0x1056, 0x1057, UseClass::VPst),
    (0x1058, 0x1059, UseClass::VBlw),
    (0x105A, 0x105D, UseClass::B),
    (0x105E, 0x1060, UseClass::MBlw),
    (0x1061, 0x1061, UseClass::B),
    (0x1062, 0x1062, UseClass::VPst),
    (0x1063, 0x1064, UseClass::N),
    (0x1065, 0x1066, UseClass::B),
    (0x1067, 0x1068, UseClass::VPst),
    (0x1069, 0x106D, UseClass::N),
    (0x106E, 0x1070, UseClass::B),
    (0x1071, 0x1074, UseClass::VAbv),
    (0x1075, 0x1081, UseClass::B),
    (0x1082, 0x1082, UseClass::MBlw),
    (0x1083, 0x1083, UseClass::VPst),
    (0x1084, 0x1084, UseClass::VPre),
    (0x1085, 0x1086, UseClass::VAbv),
    (0x1087, 0x108D, UseClass::N),
    (0x108E, 0x108E, UseClass::B),
    (0x108F, 0x109B, UseClass::N),
    (0x109C, 0x109C, UseClass::VPst),
    (0x109D, 0x109D, UseClass::VAbv),
    (0x109E, 0x135C, UseClass::O),
    (0x135D, 0x135F, UseClass::VMAbv),
    (0x1360, 0x16FF, UseClass::O),
    (0x1700, 0x1702, UseClass::IND),
    (0x1703, 0x1711, UseClass::B),
    (0x1712, 0x1712, UseClass::VAbv),
    (0x1713, 0x1713, UseClass::VBlw),
    (0x1714, 0x1715, UseClass::HN),
    (0x1716, 0x171E, UseClass::O),
    (0x171F, 0x171F, UseClass::B),
    (0x1720, 0x1722, UseClass::IND),
    (0x1723, 0x1731, UseClass::B),
    (0x1732, 0x1732, UseClass::VAbv),
    (0x1733, 0x1733, UseClass::VBlw),
    (0x1734, 0x1734, UseClass::HN),
    (0x1735, 0x173F, UseClass::O),
    (0x1740, 0x1742, UseClass::IND),
    (0x1743, 0x1751, UseClass::B),
    (0x1752, 0x1752, UseClass::VAbv),
    (0x1753, 0x1753, UseClass::VBlw),
    (0x1754, 0x175F, UseClass::O),
    (0x1760, 0x1762, UseClass::IND),
    (0x1763, 0x176C, UseClass::B),
    (0x176D, 0x176D, UseClass::O),
    (0x176E, 0x1770, UseClass::B),
    (0x1771, 0x1771, UseClass::O),
    (0x1772, 0x1772, UseClass::VAbv),
    (0x1773, 0x1773, UseClass::VBlw),
    (0x1774, 0x177F, UseClass::O),
    (0x1780, 0x17A2, UseClass::B),
    (0x17A3, 0x17B3, UseClass::IND),
    (0x17B4, 0x17B5, UseClass::VMAbv),
    (0x17B6, 0x17B6, UseClass::VPst),
    (0x17B7, 0x17BA, UseClass::VAbv),
    (0x17BB, 0x17BD, UseClass::VBlw),
    (0x17BE, 0x17C0, UseClass::VAbv),
    (0x17C1, 0x17C3, UseClass::VPre),
    (0x17C4, 0x17C5, UseClass::VAbv),
    (0x17C6, 0x17C6, UseClass::VMAbv),
    (0x17C7, 0x17C7, UseClass::VMPst),
    (0x17C8, 0x17C8, UseClass::VPst),
    (0x17C9, 0x17CA, UseClass::R),
    (0x17CB, 0x17CB, UseClass::VMAbv),
    (0x17CC, 0x17CC, UseClass::FM),
    (0x17CD, 0x17D0, UseClass::VMAbv),
    (0x17D1, 0x17D2, UseClass::HN),
    (0x17D3, 0x17D3, UseClass::VMAbv),
    (0x17D4, 0x17DB, UseClass::O),
    (0x17DC, 0x17DC, UseClass::VAbv),
    (0x17DD, 0x17DD, UseClass::VMAbv),
    (0x17DE, 0x17DF, UseClass::O),
    (0x17E0, 0x17E9, UseClass::N),
    (0x17EA, 0x180A, UseClass::O),
    (0x180B, 0x180D, UseClass::VMAbv),
    (0x180E, 0x180E, UseClass::O),
    (0x180F, 0x180F, UseClass::VMAbv),
    (0x1810, 0x1884, UseClass::O),
    (0x1885, 0x1886, UseClass::VMAbv),
    (0x1887, 0x18A8, UseClass::O),
    (0x18A9, 0x18A9, UseClass::VMAbv),
    (0x18AA, 0x18FF, UseClass::O),
    (0x1900, 0x191E, UseClass::B),
    (0x191F, 0x191F, UseClass::O),
    (0x1920, 0x1921, UseClass::VAbv),
    (0x1922, 0x1922, UseClass::VBlw),
    (0x1923, 0x1924, UseClass::VPst),
    (0x1925, 0x1928, UseClass::VAbv),
    (0x1929, 0x192B, UseClass::H),
    (0x192C, 0x192F, UseClass::O),
    (0x1930, 0x1931, UseClass::FPst),
    (0x1932, 0x1932, UseClass::VMBlw),
    (0x1933, 0x1938, UseClass::FPst),
    (0x1939, 0x1939, UseClass::FBlw),
    (0x193A, 0x193A, UseClass::VAbv),
    (0x193B, 0x193B, UseClass::VMAbv),
    (0x193C, 0x1945, UseClass::O),
    (0x1946, 0x194F, UseClass::N),
    (0x1950, 0x1962, UseClass::B),
    (0x1963, 0x196D, UseClass::VAbv),
    (0x196E, 0x197F, UseClass::O),
    (0x1980, 0x19AB, UseClass::B),
    (0x19AC, 0x19AF, UseClass::O),
    (0x19B0, 0x19B4, UseClass::VPst),
    (0x19B5, 0x19B7, UseClass::VAbv),
    (0x19B8, 0x19B9, UseClass::VPst),
    (0x19BA, 0x19BA, UseClass::VAbv),
    (0x19BB, 0x19C0, UseClass::VPst),
    (0x19C1, 0x19C7, UseClass::FM),
    (0x19C8, 0x19C9, UseClass::N),
    (0x19CA, 0x19CF, UseClass::O),
    (0x19D0, 0x19DA, UseClass::N),
    (0x19DB, 0x19FF, UseClass::O),
    (0x1A00, 0x1A16, UseClass::B),
    (0x1A17, 0x1A17, UseClass::VAbv),
    (0x1A18, 0x1A18, UseClass::VBlw),
    (0x1A19, 0x1A19, UseClass::VPre),
    (0x1A1A, 0x1A1A, UseClass::VPst),
    (0x1A1B, 0x1A1B, UseClass::VAbv),
    (0x1A1C, 0x1A1F, UseClass::O),
    (0x1A20, 0x1A4C, UseClass::B),
    (0x1A4D, 0x1A52, UseClass::IND),
    (0x1A53, 0x1A54, UseClass::B),
    (0x1A55, 0x1A55, UseClass::MPre),
    (0x1A56, 0x1A56, UseClass::MBlw),
    (0x1A57, 0x1A57, UseClass::H),
    (0x1A58, 0x1A59, UseClass::FAbv),
    (0x1A5A, 0x1A5A, UseClass::VMAbv),
    (0x1A5B, 0x1A5E, UseClass::H),
    (0x1A5F, 0x1A5F, UseClass::O),
    (0x1A60, 0x1A60, UseClass::HN),
    (0x1A61, 0x1A61, UseClass::VPst),
    (0x1A62, 0x1A62, UseClass::VAbv),
    (0x1A63, 0x1A64, UseClass::VPst),
    (0x1A65, 0x1A68, UseClass::VAbv),
    (0x1A69, 0x1A6A, UseClass::VBlw),
    (0x1A6B, 0x1A6B, UseClass::VAbv),
    (0x1A6C, 0x1A6C, UseClass::VBlw),
    (0x1A6D, 0x1A6D, UseClass::VPst),
    (0x1A6E, 0x1A72, UseClass::VPre),
    (0x1A73, 0x1A73, UseClass::VAbv),
    (0x1A74, 0x1A74, UseClass::VMAbv),
    (0x1A75, 0x1A79, UseClass::N),
    (0x1A7A, 0x1A7A, UseClass::HN),
    (0x1A7B, 0x1A7C, UseClass::VMAbv),
    (0x1A7D, 0x1A7E, UseClass::O),
    (0x1A7F, 0x1A7F, UseClass::VMAbv),
    (0x1A80, 0x1A89, UseClass::N),
    (0x1A8A, 0x1A8F, UseClass::O),
    (0x1A90, 0x1A99, UseClass::N),
    (0x1A9A, 0x1AAF, UseClass::O),
    (0x1AB0, 0x1ACE, UseClass::VMAbv),
    (0x1ACF, 0x1AFF, UseClass::O),
    (0x1B00, 0x1B02, UseClass::VMAbv),
    (0x1B03, 0x1B03, UseClass::FAbv),
    (0x1B04, 0x1B04, UseClass::VMPst),
    (0x1B05, 0x1B12, UseClass::IND),
    (0x1B13, 0x1B33, UseClass::B),
    (0x1B34, 0x1B34, UseClass::N),
    (0x1B35, 0x1B35, UseClass::VPst),
    (0x1B36, 0x1B37, UseClass::VAbv),
    (0x1B38, 0x1B3B, UseClass::VBlw),
    (0x1B3C, 0x1B3D, UseClass::VAbv),
    (0x1B3E, 0x1B3F, UseClass::VPre),
    (0x1B40, 0x1B43, UseClass::VAbv),
    (0x1B44, 0x1B44, UseClass::H),
    (0x1B45, 0x1B4C, UseClass::B),
    (0x1B4D, 0x1B4F, UseClass::O),
    (0x1B50, 0x1B59, UseClass::N),
    (0x1B5A, 0x1B6A, UseClass::O),
    (0x1B6B, 0x1B73, UseClass::VMAbv),
    (0x1B74, 0x1B7F, UseClass::O),
    (0x1B80, 0x1B80, UseClass::VMAbv),
    (0x1B81, 0x1B81, UseClass::FAbv),
    (0x1B82, 0x1B82, UseClass::VMPst),
    (0x1B83, 0x1B89, UseClass::IND),
    (0x1B8A, 0x1BA0, UseClass::B),
    (0x1BA1, 0x1BA3, UseClass::H),
    (0x1BA4, 0x1BA4, UseClass::VAbv),
    (0x1BA5, 0x1BA5, UseClass::VBlw),
    (0x1BA6, 0x1BA6, UseClass::VPre),
    (0x1BA7, 0x1BA7, UseClass::VPst),
    (0x1BA8, 0x1BA9, UseClass::VAbv),
    (0x1BAA, 0x1BAB, UseClass::HN),
    (0x1BAC, 0x1BAD, UseClass::H),
    (0x1BAE, 0x1BAF, UseClass::B),
    (0x1BB0, 0x1BB9, UseClass::N),
    (0x1BBA, 0x1BBA, UseClass::VAbv),
    (0x1BBB, 0x1BBD, UseClass::B),
    (0x1BBE, 0x1BBF, UseClass::FM),
    (0x1BC0, 0x1BE3, UseClass::B),
    (0x1BE4, 0x1BE5, UseClass::IND),
    (0x1BE6, 0x1BE6, UseClass::N),
    (0x1BE7, 0x1BE7, UseClass::VPst),
    (0x1BE8, 0x1BE9, UseClass::VAbv),
    (0x1BEA, 0x1BEC, UseClass::VPst),
    (0x1BED, 0x1BED, UseClass::VAbv),
    (0x1BEE, 0x1BEE, UseClass::VPst),
    (0x1BEF, 0x1BEF, UseClass::VAbv),
    (0x1BF0, 0x1BF1, UseClass::FAbv),
    (0x1BF2, 0x1BF3, UseClass::VMAbv),
    (0x1BF4, 0x1BFF, UseClass::O),
    (0x1C00, 0x1C23, UseClass::B),
    (0x1C24, 0x1C25, UseClass::H),
    (0x1C26, 0x1C26, UseClass::VPst),
    (0x1C27, 0x1C28, UseClass::VPre),
    (0x1C29, 0x1C29, UseClass::VAbv),
    (0x1C2A, 0x1C2B, UseClass::VPst),
    (0x1C2C, 0x1C2C, UseClass::VBlw),
    (0x1C2D, 0x1C33, UseClass::FAbv),
    (0x1C34, 0x1C35, UseClass::VMPre),
    (0x1C36, 0x1C36, UseClass::VMAbv),
    (0x1C37, 0x1C37, UseClass::N),
    (0x1C38, 0x1C3F, UseClass::O),
    (0x1C40, 0x1C49, UseClass::N),
    (0x1C4A, 0x1C4C, UseClass::O),
    (0x1C4D, 0x1C4F, UseClass::B),
    (0x1C50, 0x1CCF, UseClass::O),
    (0x1CD0, 0x1CD2, UseClass::CMAbv),
    (0x1CD3, 0x1CD3, UseClass::O),
    (0x1CD4, 0x1CD4, UseClass::CMAbv),
    (0x1CD5, 0x1CD9, UseClass::CMBlw),
    (0x1CDA, 0x1CDB, UseClass::CMAbv),
    (0x1CDC, 0x1CDF, UseClass::CMBlw),
    (0x1CE0, 0x1CE1, UseClass::CMAbv),
    (0x1CE2, 0x1CE8, UseClass::VMAbv),
    (0x1CE9, 0x1CEC, UseClass::O),
    (0x1CED, 0x1CED, UseClass::VMAbv),
    (0x1CEE, 0x1CF1, UseClass::O),
    (0x1CF2, 0x1CF3, UseClass::CS),
    (0x1CF4, 0x1CF4, UseClass::CMAbv),
    (0x1CF5, 0x1CF6, UseClass::SUB),
    (0x1CF7, 0x1CF9, UseClass::CMAbv),
    (0x1CFA, 0x1CFA, UseClass::GB),
    (0x1CFB, 0x1DBF, UseClass::O),
    (0x1DC0, 0x1DFF, UseClass::VMAbv),
    (0x1E00, 0x200B, UseClass::O),
    (0x200C, 0x200C, UseClass::ZWNJ),
    (0x200D, 0x200D, UseClass::ZWJ),
    (0x200E, 0x200F, UseClass::O),
    (0x2010, 0x2014, UseClass::GB),
    (0x2015, 0x20CF, UseClass::O),
    (0x20D0, 0x20EF, UseClass::VMAbv),
    (0x20F0, 0x20F0, UseClass::CMAbv),
    (0x20F1, 0x25CB, UseClass::O),
    (0x25CC, 0x25CC, UseClass::GB),
    (0x25CD, 0x2CEE, UseClass::O),
    (0x2CEF, 0x2CF1, UseClass::VMAbv),
    (0x2CF2, 0x2D7E, UseClass::O),
    (0x2D7F, 0x2D7F, UseClass::VMAbv),
    (0x2D80, 0x2DDF, UseClass::O),
    (0x2DE0, 0x2DFF, UseClass::VMAbv),
    (0x2E00, 0x3029, UseClass::O),
    (0x302A, 0x302F, UseClass::VMAbv),
    (0x3030, 0x3098, UseClass::O),
    (0x3099, 0x309A, UseClass::VMAbv),
    (0x309B, 0xA66E, UseClass::O),
    (0xA66F, 0xA672, UseClass::VMAbv),
    (0xA673, 0xA673, UseClass::O),
    (0xA674, 0xA67D, UseClass::VMAbv),
    (0xA67E, 0xA69D, UseClass::O),
    (0xA69E, 0xA69F, UseClass::VMAbv),
    (0xA6A0, 0xA6EF, UseClass::O),
    (0xA6F0, 0xA6F1, UseClass::VMAbv),
    (0xA6F2, 0xA7FF, UseClass::O),
    (0xA800, 0xA801, UseClass::IND),
    (0xA802, 0xA802, UseClass::VAbv),
    (0xA803, 0xA805, UseClass::IND),
    (0xA806, 0xA806, UseClass::H),
    (0xA807, 0xA80A, UseClass::B),
    (0xA80B, 0xA80B, UseClass::VMAbv),
    (0xA80C, 0xA822, UseClass::B),
    (0xA823, 0xA824, UseClass::VPst),
    (0xA825, 0xA825, UseClass::VBlw),
    (0xA826, 0xA826, UseClass::VAbv),
    (0xA827, 0xA827, UseClass::VPst),
    (0xA828, 0xA82B, UseClass::O),
    (0xA82C, 0xA82C, UseClass::HN),
    (0xA82D, 0xA83F, UseClass::O),
    (0xA840, 0xA85D, UseClass::B),
    (0xA85E, 0xA861, UseClass::VAbv),
    (0xA862, 0xA865, UseClass::B),
    (0xA866, 0xA866, UseClass::VAbv),
    (0xA867, 0xA872, UseClass::B),
    (0xA873, 0xA873, UseClass::VMPst),
    (0xA874, 0xA87F, UseClass::O),
    (0xA880, 0xA881, UseClass::VMPst),
    (0xA882, 0xA891, UseClass::IND),
    (0xA892, 0xA8B3, UseClass::B),
    (0xA8B4, 0xA8B4, UseClass::MPst),
    (0xA8B5, 0xA8C3, UseClass::VPst),
    (0xA8C4, 0xA8C4, UseClass::H),
    (0xA8C5, 0xA8C5, UseClass::VMAbv),
    (0xA8C6, 0xA8CF, UseClass::O),
    (0xA8D0, 0xA8D9, UseClass::N),
    (0xA8DA, 0xA8DF, UseClass::O),
    (0xA8E0, 0xA8F1, UseClass::CMAbv),
    (0xA8F2, 0xA8F3, UseClass::VMPst),
    (0xA8F4, 0xA8FD, UseClass::O),
    (0xA8FE, 0xA8FE, UseClass::IND),
    (0xA8FF, 0xA8FF, UseClass::VAbv),
    (0xA900, 0xA909, UseClass::N),
    (0xA90A, 0xA921, UseClass::B),
    (0xA922, 0xA92A, UseClass::VAbv),
    (0xA92B, 0xA92D, UseClass::N),
    (0xA92E, 0xA92F, UseClass::O),
    (0xA930, 0xA946, UseClass::B),
    (0xA947, 0xA949, UseClass::VBlw),
    (0xA94A, 0xA94A, UseClass::VAbv),
    (0xA94B, 0xA94E, UseClass::VBlw),
    (0xA94F, 0xA951, UseClass::FAbv),
    (0xA952, 0xA952, UseClass::FPst),
    (0xA953, 0xA953, UseClass::HN),
    (0xA954, 0xA97F, UseClass::O),
    (0xA980, 0xA981, UseClass::VMAbv),
    (0xA982, 0xA982, UseClass::FAbv),
    (0xA983, 0xA983, UseClass::VMPst),
    (0xA984, 0xA988, UseClass::IND),
    (0xA989, 0xA98B, UseClass::B),
    (0xA98C, 0xA98E, UseClass::IND),
    (0xA98F, 0xA9B2, UseClass::B),
    (0xA9B3, 0xA9B3, UseClass::N),
    (0xA9B4, 0xA9B5, UseClass::VPst),
    (0xA9B6, 0xA9B7, UseClass::VAbv),
    (0xA9B8, 0xA9B9, UseClass::VBlw),
    (0xA9BA, 0xA9BB, UseClass::VPre),
    (0xA9BC, 0xA9BC, UseClass::VAbv),
    (0xA9BD, 0xA9BF, UseClass::MBlw),
    (0xA9C0, 0xA9C0, UseClass::H),
    (0xA9C1, 0xA9CF, UseClass::O),
    (0xA9D0, 0xA9D9, UseClass::N),
    (0xA9DA, 0xA9DF, UseClass::O),
    (0xA9E0, 0xA9E4, UseClass::B),
    (0xA9E5, 0xA9E5, UseClass::VAbv),
    (0xA9E6, 0xA9E6, UseClass::O),
    (0xA9E7, 0xA9EF, UseClass::B),
    (0xA9F0, 0xA9F9, UseClass::N),
    (0xA9FA, 0xA9FE, UseClass::B),
    (0xA9FF, 0xA9FF, UseClass::O),
    (0xAA00, 0xAA05, UseClass::IND),
    (0xAA06, 0xAA28, UseClass::B),
    (0xAA29, 0xAA2C, UseClass::VAbv),
    (0xAA2D, 0xAA2D, UseClass::VBlw),
    (0xAA2E, 0xAA2E, UseClass::VAbv),
    (0xAA2F, 0xAA30, UseClass::VPre),
    (0xAA31, 0xAA31, UseClass::VAbv),
    (0xAA32, 0xAA32, UseClass::VBlw),
    (0xAA33, 0xAA33, UseClass::MPst),
    (0xAA34, 0xAA34, UseClass::MPre),
    (0xAA35, 0xAA36, UseClass::MBlw),
    (0xAA37, 0xAA3F, UseClass::O),
    (0xAA40, 0xAA42, UseClass::FM),
    (0xAA43, 0xAA43, UseClass::FAbv),
    (0xAA44, 0xAA4B, UseClass::FM),
    (0xAA4C, 0xAA4C, UseClass::FAbv),
    (0xAA4D, 0xAA4D, UseClass::FPst),
    (0xAA4E, 0xAA4F, UseClass::O),
    (0xAA50, 0xAA59, UseClass::N),
    (0xAA5A, 0xAA5F, UseClass::O),
    (0xAA60, 0xAA6F, UseClass::B),
    (0xAA70, 0xAA70, UseClass::O),
    (0xAA71, 0xAA73, UseClass::B),
    (0xAA74, 0xAA76, UseClass::GB),
    (0xAA77, 0xAA79, UseClass::O),
    (0xAA7A, 0xAA7A, UseClass::B),
    (0xAA7B, 0xAA7D, UseClass::N),
    (0xAA7E, 0xAAAF, UseClass::B),
    (0xAAB0, 0xAAB0, UseClass::VAbv),
    (0xAAB1, 0xAAB1, UseClass::VPst),
    (0xAAB2, 0xAAB3, UseClass::VAbv),
    (0xAAB4, 0xAAB4, UseClass::VBlw),
    (0xAAB5, 0xAAB9, UseClass::VAbv),
    (0xAABA, 0xAABA, UseClass::VPst),
    (0xAABB, 0xAABC, UseClass::VAbv),
    (0xAABD, 0xAABD, UseClass::VPst),
    (0xAABE, 0xAABE, UseClass::VAbv),
    (0xAABF, 0xAABF, UseClass::N),
    (0xAAC0, 0xAAC0, UseClass::O),
    (0xAAC1, 0xAAC1, UseClass::N),
    (0xAAC2, 0xAADF, UseClass::O),
    (0xAAE0, 0xAAE1, UseClass::IND),
    (0xAAE2, 0xAAEA, UseClass::B),
    (0xAAEB, 0xAAEB, UseClass::VPre),
    (0xAAEC, 0xAAEC, UseClass::VBlw),
    (0xAAED, 0xAAED, UseClass::VAbv),
    (0xAAEE, 0xAAEE, UseClass::VPre),
    (0xAAEF, 0xAAEF, UseClass::VPst),
    (0xAAF0, 0xAAF4, UseClass::O),
    (0xAAF5, 0xAAF5, UseClass::VMPst),
    (0xAAF6, 0xAAF6, UseClass::HN),
    (0xAAF7, 0xABBF, UseClass::O),
    (0xABC0, 0xABCD, UseClass::B),
    (0xABCE, 0xABCF, UseClass::IND),
    (0xABD0, 0xABD0, UseClass::B),
    (0xABD1, 0xABD1, UseClass::IND),
    (0xABD2, 0xABDA, UseClass::B),
    (0xABDB, 0xABE2, UseClass::FM),
    (0xABE3, 0xABE4, UseClass::VPst),
    (0xABE5, 0xABE5, UseClass::VAbv),
    (0xABE6, 0xABE7, UseClass::VPst),
    (0xABE8, 0xABE8, UseClass::VBlw),
    (0xABE9, 0xABEA, UseClass::VPst),
    (0xABEB, 0xABEB, UseClass::O),
    (0xABEC, 0xABEC, UseClass::N),
    (0xABED, 0xABED, UseClass::HN),
    (0xABEE, 0xABEF, UseClass::O),
    (0xABF0, 0xABF9, UseClass::N),
    (0xABFA, 0xFB1D, UseClass::O),
    (0xFB1E, 0xFB1E, UseClass::VMAbv),
    (0xFB1F, 0xFDFF, UseClass::O),
    (0xFE00, 0xFE0F, UseClass::VMAbv),
    (0xFE10, 0xFE1F, UseClass::O),
    (0xFE20, 0xFE2F, UseClass::VMAbv),
    (0xFE30, 0x101FC, UseClass::O),
    (0x101FD, 0x101FD, UseClass::VMAbv),
    (0x101FE, 0x102DF, UseClass::O),
    (0x102E0, 0x102E0, UseClass::VMAbv),
    (0x102E1, 0x10375, UseClass::O),
    (0x10376, 0x1037A, UseClass::VMAbv),
    (0x1037B, 0x109FF, UseClass::O),
    (0x10A00, 0x10A00, UseClass::B),
    (0x10A01, 0x10A01, UseClass::VAbv),
    (0x10A02, 0x10A03, UseClass::VBlw),
    (0x10A04, 0x10A04, UseClass::O),
    (0x10A05, 0x10A06, UseClass::VAbv),
    (0x10A07, 0x10A0B, UseClass::O),
    (0x10A0C, 0x10A0D, UseClass::VBlw),
    (0x10A0E, 0x10A0E, UseClass::VMBlw),
    (0x10A0F, 0x10A0F, UseClass::VMPst),
    (0x10A10, 0x10A13, UseClass::B),
    (0x10A14, 0x10A14, UseClass::O),
    (0x10A15, 0x10A17, UseClass::B),
    (0x10A18, 0x10A18, UseClass::O),
    (0x10A19, 0x10A35, UseClass::B),
    (0x10A36, 0x10A37, UseClass::O),
    (0x10A38, 0x10A3A, UseClass::N),
    (0x10A3B, 0x10A3E, UseClass::O),
    (0x10A3F, 0x10A3F, UseClass::HN),
    (0x10A40, 0x10A48, UseClass::N),
    (0x10A49, 0x10AE4, UseClass::O),
    (0x10AE5, 0x10AE6, UseClass::VMAbv),
    (0x10AE7, 0x10D23, UseClass::O),
    (0x10D24, 0x10D27, UseClass::VMAbv),
    (0x10D28, 0x10EAA, UseClass::O),
    (0x10EAB, 0x10EAC, UseClass::VMAbv),
    (0x10EAD, 0x10F45, UseClass::O),
    (0x10F46, 0x10F50, UseClass::VMAbv),
    (0x10F51, 0x10F81, UseClass::O),
    (0x10F82, 0x10F85, UseClass::VMAbv),
    (0x10F86, 0x10FFF, UseClass::O),
    (0x11000, 0x11000, UseClass::VMPst),
    (0x11001, 0x11001, UseClass::VMAbv),
    (0x11002, 0x11002, UseClass::VMPst),
    (0x11003, 0x11004, UseClass::SUB),
    (0x11005, 0x11012, UseClass::IND),
    (0x11013, 0x11037, UseClass::B),
    (0x11038, 0x1103B, UseClass::VAbv),
    (0x1103C, 0x11041, UseClass::VBlw),
    (0x11042, 0x11045, UseClass::VAbv),
    (0x11046, 0x11046, UseClass::H),
    (0x11047, 0x11065, UseClass::O),
    (0x11066, 0x1106F, UseClass::N),
    (0x11070, 0x11070, UseClass::HN),
    (0x11071, 0x11072, UseClass::IND),
    (0x11073, 0x11074, UseClass::VAbv),
    (0x11075, 0x11075, UseClass::B),
    (0x11076, 0x1107E, UseClass::O),
    (0x1107F, 0x1107F, UseClass::N),
    (0x11080, 0x11081, UseClass::VMAbv),
    (0x11082, 0x11082, UseClass::VMPst),
    (0x11083, 0x1108C, UseClass::IND),
    (0x1108D, 0x110AF, UseClass::B),
    (0x110B0, 0x110B0, UseClass::VPst),
    (0x110B1, 0x110B1, UseClass::VPre),
    (0x110B2, 0x110B2, UseClass::VPst),
    (0x110B3, 0x110B4, UseClass::VBlw),
    (0x110B5, 0x110B6, UseClass::VAbv),
    (0x110B7, 0x110B8, UseClass::VPst),
    (0x110B9, 0x110B9, UseClass::H),
    (0x110BA, 0x110BA, UseClass::N),
    (0x110BB, 0x110C1, UseClass::O),
    (0x110C2, 0x110C2, UseClass::VBlw),
    (0x110C3, 0x110FF, UseClass::O),
    (0x11100, 0x11101, UseClass::VMAbv),
    (0x11102, 0x11102, UseClass::VMPst),
    (0x11103, 0x11106, UseClass::IND),
    (0x11107, 0x11126, UseClass::B),
    (0x11127, 0x11129, UseClass::VAbv),
    (0x1112A, 0x1112B, UseClass::VBlw),
    (0x1112C, 0x1112C, UseClass::VPre),
    (0x1112D, 0x11130, UseClass::VAbv),
    (0x11131, 0x11132, UseClass::VBlw),
    (0x11133, 0x11134, UseClass::HN),
    (0x11135, 0x11135, UseClass::O),
    (0x11136, 0x1113F, UseClass::N),
    (0x11140, 0x11143, UseClass::O),
    (0x11144, 0x11144, UseClass::B),
    (0x11145, 0x11146, UseClass::VPst),
    (0x11147, 0x11147, UseClass::B),
    (0x11148, 0x1114F, UseClass::O),
    (0x11150, 0x11154, UseClass::VAbv),
    (0x11155, 0x11172, UseClass::B),
    (0x11173, 0x11173, UseClass::N),
    (0x11174, 0x1117F, UseClass::O),
    (0x11180, 0x11181, UseClass::VMAbv),
    (0x11182, 0x11182, UseClass::VMPst),
    (0x11183, 0x11190, UseClass::IND),
    (0x11191, 0x111B2, UseClass::B),
    (0x111B3, 0x111B3, UseClass::VPst),
    (0x111B4, 0x111B4, UseClass::VPre),
    (0x111B5, 0x111B5, UseClass::VPst),
    (0x111B6, 0x111BB, UseClass::VBlw),
    (0x111BC, 0x111BF, UseClass::VAbv),
    (0x111C0, 0x111C0, UseClass::H),
    (0x111C1, 0x111C1, UseClass::VAbv),
    (0x111C2, 0x111C3, UseClass::CS),
    (0x111C4, 0x111C8, UseClass::O),
    (0x111C9, 0x111C9, UseClass::VMAbv),
    (0x111CA, 0x111CA, UseClass::N),
    (0x111CB, 0x111CB, UseClass::VAbv),
    (0x111CC, 0x111CC, UseClass::VBlw),
    (0x111CD, 0x111CD, UseClass::O),
    (0x111CE, 0x111CE, UseClass::VPre),
    (0x111CF, 0x111CF, UseClass::VMAbv),
    (0x111D0, 0x111D9, UseClass::N),
    (0x111DA, 0x111E0, UseClass::O),
    (0x111E1, 0x111F4, UseClass::N),
    (0x111F5, 0x111FF, UseClass::O),
    (0x11200, 0x11207, UseClass::IND),
    (0x11208, 0x11211, UseClass::B),
    (0x11212, 0x11212, UseClass::O),
    (0x11213, 0x1122B, UseClass::B),
    (0x1122C, 0x1122E, UseClass::VPst),
    (0x1122F, 0x1122F, UseClass::VBlw),
    (0x11230, 0x11233, UseClass::VAbv),
    (0x11234, 0x11234, UseClass::VMAbv),
    (0x11235, 0x11235, UseClass::H),
    (0x11236, 0x11236, UseClass::N),
    (0x11237, 0x11237, UseClass::SMAbv),
    (0x11238, 0x1123D, UseClass::O),
    (0x1123E, 0x1123E, UseClass::CMAbv),
    (0x1123F, 0x1123F, UseClass::B),
    (0x11240, 0x11240, UseClass::IND),
    (0x11241, 0x11241, UseClass::VBlw),
    (0x11242, 0x1127F, UseClass::O),
    (0x11280, 0x11283, UseClass::IND),
    (0x11284, 0x11286, UseClass::B),
    (0x11287, 0x11287, UseClass::O),
    (0x11288, 0x11288, UseClass::B),
    (0x11289, 0x11289, UseClass::O),
    (0x1128A, 0x1128D, UseClass::B),
    (0x1128E, 0x1128E, UseClass::O),
    (0x1128F, 0x1129D, UseClass::B),
    (0x1129E, 0x1129E, UseClass::O),
    (0x1129F, 0x112A8, UseClass::B),
    (0x112A9, 0x112AF, UseClass::O),
    (0x112B0, 0x112B9, UseClass::IND),
    (0x112BA, 0x112DE, UseClass::B),
    (0x112DF, 0x112DF, UseClass::VMAbv),
    (0x112E0, 0x112E0, UseClass::VPst),
    (0x112E1, 0x112E1, UseClass::VPre),
    (0x112E2, 0x112E2, UseClass::VPst),
    (0x112E3, 0x112E4, UseClass::VBlw),
    (0x112E5, 0x112E8, UseClass::VAbv),
    (0x112E9, 0x112E9, UseClass::N),
    (0x112EA, 0x112EA, UseClass::HN),
    (0x112EB, 0x112EF, UseClass::O),
    (0x112F0, 0x112F9, UseClass::N),
    (0x112FA, 0x112FF, UseClass::O),
    (0x11300, 0x11301, UseClass::VMAbv),
    (0x11302, 0x11303, UseClass::VMPst),
    (0x11304, 0x11304, UseClass::O),
    (0x11305, 0x1130C, UseClass::IND),
    (0x1130D, 0x1130E, UseClass::O),
    (0x1130F, 0x11310, UseClass::IND),
    (0x11311, 0x11312, UseClass::O),
    (0x11313, 0x11314, UseClass::IND),
    (0x11315, 0x11328, UseClass::B),
    (0x11329, 0x11329, UseClass::O),
    (0x1132A, 0x11330, UseClass::B),
    (0x11331, 0x11331, UseClass::O),
    (0x11332, 0x11333, UseClass::B),
    (0x11334, 0x11334, UseClass::O),
    (0x11335, 0x11339, UseClass::B),
    (0x1133A, 0x1133A, UseClass::O),
    (0x1133B, 0x1133C, UseClass::N),
    (0x1133D, 0x1133D, UseClass::VAbv),
    (0x1133E, 0x1133F, UseClass::VPst),
    (0x11340, 0x11340, UseClass::VAbv),
    (0x11341, 0x11344, UseClass::VPst),
    (0x11345, 0x11346, UseClass::O),
    (0x11347, 0x11348, UseClass::VPre),
    (0x11349, 0x1134A, UseClass::O),
    (0x1134B, 0x1134C, UseClass::VAbv),
    (0x1134D, 0x1134D, UseClass::H),
    (0x1134E, 0x11356, UseClass::O),
    (0x11357, 0x11357, UseClass::VPst),
    (0x11358, 0x1135D, UseClass::O),
    (0x1135E, 0x1135F, UseClass::VMPst),
    (0x11360, 0x11361, UseClass::IND),
    (0x11362, 0x11363, UseClass::VPst),
    (0x11364, 0x11365, UseClass::O),
    (0x11366, 0x1136C, UseClass::CMAbv),
    (0x1136D, 0x1136F, UseClass::O),
    (0x11370, 0x11374, UseClass::CMAbv),
    (0x11375, 0x1137F, UseClass::O),
    (0x11380, 0x11389, UseClass::IND),
    (0x1138A, 0x1138A, UseClass::O),
    (0x1138B, 0x1138B, UseClass::IND),
    (0x1138C, 0x1138D, UseClass::O),
    (0x1138E, 0x1138E, UseClass::IND),
    (0x1138F, 0x1138F, UseClass::O),
    (0x11390, 0x11391, UseClass::IND),
    (0x11392, 0x113B5, UseClass::B),
    (0x113B6, 0x113B6, UseClass::O),
    (0x113B7, 0x113B7, UseClass::VAbv),
    (0x113B8, 0x113B8, UseClass::VPst),
    (0x113B9, 0x113BA, UseClass::VAbv),
    (0x113BB, 0x113C0, UseClass::VBlw),
    (0x113C1, 0x113C1, UseClass::O),
    (0x113C2, 0x113C2, UseClass::VPre),
    (0x113C3, 0x113C4, UseClass::O),
    (0x113C5, 0x113C5, UseClass::VPre),
    (0x113C6, 0x113C6, UseClass::O),
    (0x113C7, 0x113C8, UseClass::VAbv),
    (0x113C9, 0x113C9, UseClass::VPst),
    (0x113CA, 0x113CA, UseClass::VMPst),
    (0x113CB, 0x113CB, UseClass::O),
    (0x113CC, 0x113CD, UseClass::VMPst),
    (0x113CE, 0x113D0, UseClass::HN),
    (0x113D1, 0x113D1, UseClass::R),
    (0x113D2, 0x113D2, UseClass::SMAbv),
    (0x113D3, 0x113E0, UseClass::O),
    (0x113E1, 0x113E1, UseClass::CMAbv),
    (0x113E2, 0x113E2, UseClass::CMBlw),
    (0x113E3, 0x113FF, UseClass::O),
    (0x11400, 0x1140D, UseClass::IND),
    (0x1140E, 0x11434, UseClass::B),
    (0x11435, 0x11435, UseClass::VPst),
    (0x11436, 0x11436, UseClass::VPre),
    (0x11437, 0x11437, UseClass::VPst),
    (0x11438, 0x1143D, UseClass::VBlw),
    (0x1143E, 0x1143F, UseClass::VAbv),
    (0x11440, 0x11441, UseClass::VPst),
    (0x11442, 0x11442, UseClass::H),
    (0x11443, 0x11444, UseClass::VMAbv),
    (0x11445, 0x11445, UseClass::VMPst),
    (0x11446, 0x11446, UseClass::N),
    (0x11447, 0x11447, UseClass::VAbv),
    (0x11448, 0x1144F, UseClass::O),
    (0x11450, 0x11459, UseClass::N),
    (0x1145A, 0x1145D, UseClass::O),
    (0x1145E, 0x1145E, UseClass::VMAbv),
    (0x1145F, 0x1145F, UseClass::VMPst),
    (0x11460, 0x11461, UseClass::SUB),
    (0x11462, 0x11480, UseClass::O),
    (0x11481, 0x1148E, UseClass::IND),
    (0x1148F, 0x114AF, UseClass::B),
    (0x114B0, 0x114B0, UseClass::VPst),
    (0x114B1, 0x114B1, UseClass::VPre),
    (0x114B2, 0x114B2, UseClass::VPst),
    (0x114B3, 0x114B8, UseClass::VBlw),
    (0x114B9, 0x114B9, UseClass::VPre),
    (0x114BA, 0x114BC, UseClass::VAbv),
    (0x114BD, 0x114BD, UseClass::VPst),
    (0x114BE, 0x114BE, UseClass::VAbv),
    (0x114BF, 0x114C0, UseClass::VMAbv),
    (0x114C1, 0x114C1, UseClass::VMPst),
    (0x114C2, 0x114C2, UseClass::H),
    (0x114C3, 0x114C3, UseClass::N),
    (0x114C4, 0x114C4, UseClass::VAbv),
    (0x114C5, 0x114CF, UseClass::O),
    (0x114D0, 0x114D9, UseClass::N),
    (0x114DA, 0x1157F, UseClass::O),
    (0x11580, 0x1158D, UseClass::IND),
    (0x1158E, 0x115AE, UseClass::B),
    (0x115AF, 0x115AF, UseClass::VPst),
    (0x115B0, 0x115B0, UseClass::VPre),
    (0x115B1, 0x115B1, UseClass::VPst),
    (0x115B2, 0x115B5, UseClass::VBlw),
    (0x115B6, 0x115B7, UseClass::O),
    (0x115B8, 0x115B8, UseClass::VPre),
    (0x115B9, 0x115BB, UseClass::VAbv),
    (0x115BC, 0x115BD, UseClass::VMAbv),
    (0x115BE, 0x115BE, UseClass::VMPst),
    (0x115BF, 0x115BF, UseClass::H),
    (0x115C0, 0x115C0, UseClass::N),
    (0x115C1, 0x115D7, UseClass::O),
    (0x115D8, 0x115DB, UseClass::IND),
    (0x115DC, 0x115DD, UseClass::VBlw),
    (0x115DE, 0x115FF, UseClass::O),
    (0x11600, 0x1160D, UseClass::IND),
    (0x1160E, 0x1162F, UseClass::B),
    (0x11630, 0x11632, UseClass::VPst),
    (0x11633, 0x11638, UseClass::VBlw),
    (0x11639, 0x1163A, UseClass::VAbv),
    (0x1163B, 0x1163C, UseClass::VPst),
    (0x1163D, 0x1163D, UseClass::VMAbv),
    (0x1163E, 0x1163E, UseClass::VMPst),
    (0x1163F, 0x1163F, UseClass::H),
    (0x11640, 0x11640, UseClass::VAbv),
    (0x11641, 0x1164F, UseClass::O),
    (0x11650, 0x11659, UseClass::N),
    (0x1165A, 0x1167F, UseClass::O),
    (0x11680, 0x11689, UseClass::IND),
    (0x1168A, 0x116AA, UseClass::B),
    (0x116AB, 0x116AB, UseClass::VMAbv),
    (0x116AC, 0x116AC, UseClass::VMPst),
    (0x116AD, 0x116AD, UseClass::VAbv),
    (0x116AE, 0x116AE, UseClass::VPre),
    (0x116AF, 0x116AF, UseClass::VPst),
    (0x116B0, 0x116B1, UseClass::VBlw),
    (0x116B2, 0x116B5, UseClass::VAbv),
    (0x116B6, 0x116B6, UseClass::H),
    (0x116B7, 0x116B7, UseClass::N),
    (0x116B8, 0x116B8, UseClass::B),
    (0x116B9, 0x116BF, UseClass::O),
    (0x116C0, 0x116C9, UseClass::N),
    (0x116CA, 0x116CF, UseClass::O),
    (0x116D0, 0x116E3, UseClass::N),
    (0x116E4, 0x116FF, UseClass::O),
    (0x11700, 0x1171A, UseClass::B),
    (0x1171B, 0x1171C, UseClass::O),
    (0x1171D, 0x1171E, UseClass::MBlw),
    (0x1171F, 0x1171F, UseClass::MAbv),
    (0x11720, 0x11721, UseClass::VPst),
    (0x11722, 0x11723, UseClass::VAbv),
    (0x11724, 0x11725, UseClass::VBlw),
    (0x11726, 0x11726, UseClass::VPre),
    (0x11727, 0x11727, UseClass::VAbv),
    (0x11728, 0x11728, UseClass::VBlw),
    (0x11729, 0x1172A, UseClass::VAbv),
    (0x1172B, 0x1172B, UseClass::HN),
    (0x1172C, 0x1172F, UseClass::O),
    (0x11730, 0x1173B, UseClass::N),
    (0x1173C, 0x1173F, UseClass::O),
    (0x11740, 0x11746, UseClass::B),
    (0x11747, 0x117FF, UseClass::O),
    (0x11800, 0x11809, UseClass::IND),
    (0x1180A, 0x1182B, UseClass::B),
    (0x1182C, 0x1182C, UseClass::VPst),
    (0x1182D, 0x1182D, UseClass::VPre),
    (0x1182E, 0x1182E, UseClass::VPst),
    (0x1182F, 0x11832, UseClass::VBlw),
    (0x11833, 0x11836, UseClass::VAbv),
    (0x11837, 0x11837, UseClass::VMAbv),
    (0x11838, 0x11838, UseClass::VMPst),
    (0x11839, 0x11839, UseClass::H),
    (0x1183A, 0x1183A, UseClass::N),
    (0x1183B, 0x118FF, UseClass::O),
    (0x11900, 0x11906, UseClass::IND),
    (0x11907, 0x11908, UseClass::O),
    (0x11909, 0x11909, UseClass::IND),
    (0x1190A, 0x1190B, UseClass::O),
    (0x1190C, 0x11913, UseClass::B),
    (0x11914, 0x11914, UseClass::O),
    (0x11915, 0x11916, UseClass::B),
    (0x11917, 0x11917, UseClass::O),
    (0x11918, 0x1192F, UseClass::B),
    (0x11930, 0x11934, UseClass::VPst),
    (0x11935, 0x11935, UseClass::VPre),
    (0x11936, 0x11936, UseClass::O),
    (0x11937, 0x11937, UseClass::VPre),
    (0x11938, 0x11938, UseClass::VAbv),
    (0x11939, 0x1193A, UseClass::O),
    (0x1193B, 0x1193C, UseClass::VMAbv),
    (0x1193D, 0x1193E, UseClass::HN),
    (0x1193F, 0x1193F, UseClass::CS),
    (0x11940, 0x11940, UseClass::MPst),
    (0x11941, 0x11941, UseClass::R),
    (0x11942, 0x11942, UseClass::MBlw),
    (0x11943, 0x11943, UseClass::N),
    (0x11944, 0x1194F, UseClass::O),
    (0x11950, 0x11959, UseClass::N),
    (0x1195A, 0x1199F, UseClass::O),
    (0x119A0, 0x119A7, UseClass::IND),
    (0x119A8, 0x119A9, UseClass::O),
    (0x119AA, 0x119AD, UseClass::IND),
    (0x119AE, 0x119D0, UseClass::B),
    (0x119D1, 0x119D1, UseClass::VPst),
    (0x119D2, 0x119D2, UseClass::VPre),
    (0x119D3, 0x119D3, UseClass::VPst),
    (0x119D4, 0x119D7, UseClass::VBlw),
    (0x119D8, 0x119D9, UseClass::O),
    (0x119DA, 0x119DB, UseClass::VAbv),
    (0x119DC, 0x119DD, UseClass::VPst),
    (0x119DE, 0x119DF, UseClass::VMPst),
    (0x119E0, 0x119E0, UseClass::H),
    (0x119E1, 0x119E1, UseClass::VAbv),
    (0x119E2, 0x119E3, UseClass::O),
    (0x119E4, 0x119E4, UseClass::VPre),
    (0x119E5, 0x119FF, UseClass::O),
    (0x11A00, 0x11A00, UseClass::B),
    (0x11A01, 0x11A01, UseClass::VAbv),
    (0x11A02, 0x11A03, UseClass::VBlw),
    (0x11A04, 0x11A09, UseClass::VAbv),
    (0x11A0A, 0x11A0A, UseClass::VBlw),
    (0x11A0B, 0x11A32, UseClass::B),
    (0x11A33, 0x11A33, UseClass::VMAbv),
    (0x11A34, 0x11A34, UseClass::HN),
    (0x11A35, 0x11A38, UseClass::VMAbv),
    (0x11A39, 0x11A39, UseClass::VMPst),
    (0x11A3A, 0x11A3A, UseClass::SUB),
    (0x11A3B, 0x11A3E, UseClass::MBlw),
    (0x11A3F, 0x11A3F, UseClass::GB),
    (0x11A40, 0x11A44, UseClass::O),
    (0x11A45, 0x11A45, UseClass::GB),
    (0x11A46, 0x11A46, UseClass::O),
    (0x11A47, 0x11A47, UseClass::HN),
    (0x11A48, 0x11A4F, UseClass::O),
    (0x11A50, 0x11A50, UseClass::B),
    (0x11A51, 0x11A51, UseClass::VAbv),
    (0x11A52, 0x11A53, UseClass::VBlw),
    (0x11A54, 0x11A56, UseClass::VAbv),
    (0x11A57, 0x11A58, UseClass::VPst),
    (0x11A59, 0x11A5B, UseClass::VBlw),
    (0x11A5C, 0x11A83, UseClass::B),
    (0x11A84, 0x11A85, UseClass::CS),
    (0x11A86, 0x11A86, UseClass::R),
    (0x11A87, 0x11A89, UseClass::CS),
    (0x11A8A, 0x11A95, UseClass::FBlw),
    (0x11A96, 0x11A96, UseClass::VMAbv),
    (0x11A97, 0x11A97, UseClass::VMPst),
    (0x11A98, 0x11A98, UseClass::SMAbv),
    (0x11A99, 0x11A99, UseClass::HN),
    (0x11A9A, 0x11A9C, UseClass::O),
    (0x11A9D, 0x11A9D, UseClass::VAbv),
    (0x11A9E, 0x11B5F, UseClass::O),
    (0x11B60, 0x11B60, UseClass::VAbv),
    (0x11B61, 0x11B61, UseClass::VPst),
    (0x11B62, 0x11B63, UseClass::VBlw),
    (0x11B64, 0x11B64, UseClass::VAbv),
    (0x11B65, 0x11B65, UseClass::VPst),
    (0x11B66, 0x11B66, UseClass::VAbv),
    (0x11B67, 0x11B67, UseClass::VPst),
    (0x11B68, 0x11BFF, UseClass::O),
    (0x11C00, 0x11C08, UseClass::IND),
    (0x11C09, 0x11C09, UseClass::O),
    (0x11C0A, 0x11C0D, UseClass::IND),
    (0x11C0E, 0x11C2E, UseClass::B),
    (0x11C2F, 0x11C2F, UseClass::VPst),
    (0x11C30, 0x11C31, UseClass::VAbv),
    (0x11C32, 0x11C36, UseClass::VBlw),
    (0x11C37, 0x11C37, UseClass::O),
    (0x11C38, 0x11C3B, UseClass::VAbv),
    (0x11C3C, 0x11C3D, UseClass::VMAbv),
    (0x11C3E, 0x11C3E, UseClass::VMPst),
    (0x11C3F, 0x11C3F, UseClass::H),
    (0x11C40, 0x11C40, UseClass::VAbv),
    (0x11C41, 0x11C4F, UseClass::O),
    (0x11C50, 0x11C6C, UseClass::N),
    (0x11C6D, 0x11C71, UseClass::O),
    (0x11C72, 0x11C8F, UseClass::B),
    (0x11C90, 0x11C91, UseClass::O),
    (0x11C92, 0x11CA7, UseClass::H),
    (0x11CA8, 0x11CA8, UseClass::O),
    (0x11CA9, 0x11CAF, UseClass::H),
    (0x11CB0, 0x11CB0, UseClass::VBlw),
    (0x11CB1, 0x11CB1, UseClass::VPre),
    (0x11CB2, 0x11CB2, UseClass::VBlw),
    (0x11CB3, 0x11CB3, UseClass::VAbv),
    (0x11CB4, 0x11CB4, UseClass::VPst),
    (0x11CB5, 0x11CB6, UseClass::VMAbv),
    (0x11CB7, 0x11CFF, UseClass::O),
    (0x11D00, 0x11D06, UseClass::IND),
    (0x11D07, 0x11D07, UseClass::O),
    (0x11D08, 0x11D09, UseClass::IND),
    (0x11D0A, 0x11D0A, UseClass::O),
    (0x11D0B, 0x11D0B, UseClass::IND),
    (0x11D0C, 0x11D30, UseClass::B),
    (0x11D31, 0x11D35, UseClass::VAbv),
    (0x11D36, 0x11D36, UseClass::VBlw),
    (0x11D37, 0x11D39, UseClass::O),
    (0x11D3A, 0x11D3A, UseClass::VAbv),
    (0x11D3B, 0x11D3B, UseClass::O),
    (0x11D3C, 0x11D3D, UseClass::VAbv),
    (0x11D3E, 0x11D3E, UseClass::O),
    (0x11D3F, 0x11D3F, UseClass::VAbv),
    (0x11D40, 0x11D40, UseClass::VMAbv),
    (0x11D41, 0x11D41, UseClass::VMPst),
    (0x11D42, 0x11D42, UseClass::N),
    (0x11D43, 0x11D43, UseClass::VAbv),
    (0x11D44, 0x11D45, UseClass::HN),
    (0x11D46, 0x11D46, UseClass::R),
    (0x11D47, 0x11D47, UseClass::MBlw),
    (0x11D48, 0x11D4F, UseClass::O),
    (0x11D50, 0x11D59, UseClass::N),
    (0x11D5A, 0x11D5F, UseClass::O),
    (0x11D60, 0x11D65, UseClass::IND),
    (0x11D66, 0x11D66, UseClass::O),
    (0x11D67, 0x11D68, UseClass::IND),
    (0x11D69, 0x11D69, UseClass::O),
    (0x11D6A, 0x11D6B, UseClass::IND),
    (0x11D6C, 0x11D89, UseClass::B),
    (0x11D8A, 0x11D8E, UseClass::VPst),
    (0x11D8F, 0x11D8F, UseClass::O),
    (0x11D90, 0x11D91, UseClass::VAbv),
    (0x11D92, 0x11D92, UseClass::O),
    (0x11D93, 0x11D94, UseClass::VPst),
    (0x11D95, 0x11D95, UseClass::VMAbv),
    (0x11D96, 0x11D96, UseClass::VMPst),
    (0x11D97, 0x11D97, UseClass::HN),
    (0x11D98, 0x11D9F, UseClass::O),
    (0x11DA0, 0x11DA9, UseClass::N),
    (0x11DAA, 0x11EDF, UseClass::O),
    (0x11EE0, 0x11EF1, UseClass::B),
    (0x11EF2, 0x11EF2, UseClass::GB),
    (0x11EF3, 0x11EF3, UseClass::VAbv),
    (0x11EF4, 0x11EF4, UseClass::VBlw),
    (0x11EF5, 0x11EF5, UseClass::VPre),
    (0x11EF6, 0x11EF6, UseClass::VPst),
    (0x11EF7, 0x11EFF, UseClass::O),
    (0x11F00, 0x11F01, UseClass::VMAbv),
    (0x11F02, 0x11F02, UseClass::R),
    (0x11F03, 0x11F03, UseClass::VMPst),
    (0x11F04, 0x11F10, UseClass::IND),
    (0x11F11, 0x11F11, UseClass::O),
    (0x11F12, 0x11F33, UseClass::B),
    (0x11F34, 0x11F35, UseClass::VPst),
    (0x11F36, 0x11F37, UseClass::VAbv),
    (0x11F38, 0x11F3A, UseClass::VBlw),
    (0x11F3B, 0x11F3D, UseClass::O),
    (0x11F3E, 0x11F3F, UseClass::VPre),
    (0x11F40, 0x11F40, UseClass::VAbv),
    (0x11F41, 0x11F42, UseClass::HN),
    (0x11F43, 0x11F4F, UseClass::O),
    (0x11F50, 0x11F5A, UseClass::N),
    (0x11F5B, 0x160FF, UseClass::O),
    (0x16100, 0x16100, UseClass::IND),
    (0x16101, 0x1611D, UseClass::B),
    (0x1611E, 0x16129, UseClass::VAbv),
    (0x1612A, 0x1612B, UseClass::MPre),
    (0x1612C, 0x1612C, UseClass::MPst),
    (0x1612D, 0x1612D, UseClass::VMAbv),
    (0x1612E, 0x1612E, UseClass::MBlw),
    (0x1612F, 0x1612F, UseClass::HN),
    (0x16130, 0x16139, UseClass::N),
    (0x1613A, 0x16AEF, UseClass::O),
    (0x16AF0, 0x16AF4, UseClass::VMAbv),
    (0x16AF5, 0x16B2F, UseClass::O),
    (0x16B30, 0x16B36, UseClass::VMAbv),
    (0x16B37, 0x16D3F, UseClass::O),
    (0x16D40, 0x16D42, UseClass::VMPst),
    (0x16D43, 0x16D62, UseClass::B),
    (0x16D63, 0x16D6A, UseClass::VPst),
    (0x16D6B, 0x16D6C, UseClass::HN),
    (0x16D6D, 0x16D6F, UseClass::O),
    (0x16D70, 0x16D79, UseClass::N),
    (0x16D7A, 0x16F4E, UseClass::O),
    (0x16F4F, 0x16F4F, UseClass::VMAbv),
    (0x16F50, 0x16F50, UseClass::O),
    (0x16F51, 0x16F87, UseClass::VMAbv),
    (0x16F88, 0x16F8E, UseClass::O),
    (0x16F8F, 0x16F92, UseClass::VMAbv),
    (0x16F93, 0x16FE3, UseClass::O),
    (0x16FE4, 0x16FE4, UseClass::VMAbv),
    (0x16FE5, 0x16FEF, UseClass::O),
    (0x16FF0, 0x16FF1, UseClass::VMAbv),
    (0x16FF2, 0x1BC9C, UseClass::O),
    (0x1BC9D, 0x1BC9E, UseClass::VMAbv),
    (0x1BC9F, 0x1CEFF, UseClass::O),
    (0x1CF00, 0x1CF2D, UseClass::VMAbv),
    (0x1CF2E, 0x1CF2F, UseClass::O),
    (0x1CF30, 0x1CF46, UseClass::VMAbv),
    (0x1CF47, 0x1D164, UseClass::O),
    (0x1D165, 0x1D169, UseClass::VMAbv),
    (0x1D16A, 0x1D16C, UseClass::O),
    (0x1D16D, 0x1D172, UseClass::VMAbv),
    (0x1D173, 0x1D17A, UseClass::O),
    (0x1D17B, 0x1D182, UseClass::VMAbv),
    (0x1D183, 0x1D184, UseClass::O),
    (0x1D185, 0x1D18B, UseClass::VMAbv),
    (0x1D18C, 0x1D1A9, UseClass::O),
    (0x1D1AA, 0x1D1AD, UseClass::VMAbv),
    (0x1D1AE, 0x1D241, UseClass::O),
    (0x1D242, 0x1D244, UseClass::VMAbv),
    (0x1D245, 0x1D9FF, UseClass::O),
    (0x1DA00, 0x1DA36, UseClass::VMAbv),
    (0x1DA37, 0x1DA3A, UseClass::O),
    (0x1DA3B, 0x1DA6C, UseClass::VMAbv),
    (0x1DA6D, 0x1DA74, UseClass::O),
    (0x1DA75, 0x1DA75, UseClass::VMAbv),
    (0x1DA76, 0x1DA83, UseClass::O),
    (0x1DA84, 0x1DA84, UseClass::VMAbv),
    (0x1DA85, 0x1DA9A, UseClass::O),
    (0x1DA9B, 0x1DA9F, UseClass::VMAbv),
    (0x1DAA0, 0x1DAA0, UseClass::O),
    (0x1DAA1, 0x1DAAF, UseClass::VMAbv),
    (0x1DAB0, 0x1DFFF, UseClass::O),
    (0x1E000, 0x1E006, UseClass::VMAbv),
    (0x1E007, 0x1E007, UseClass::O),
    (0x1E008, 0x1E018, UseClass::VMAbv),
    (0x1E019, 0x1E01A, UseClass::O),
    (0x1E01B, 0x1E021, UseClass::VMAbv),
    (0x1E022, 0x1E022, UseClass::O),
    (0x1E023, 0x1E024, UseClass::VMAbv),
    (0x1E025, 0x1E025, UseClass::O),
    (0x1E026, 0x1E02A, UseClass::VMAbv),
    (0x1E02B, 0x1E12F, UseClass::O),
    (0x1E130, 0x1E136, UseClass::VMAbv),
    (0x1E137, 0x1E2AD, UseClass::O),
    (0x1E2AE, 0x1E2AE, UseClass::VMAbv),
    (0x1E2AF, 0x1E2EB, UseClass::O),
    (0x1E2EC, 0x1E2EF, UseClass::VMAbv),
    (0x1E2F0, 0x1E8CF, UseClass::O),
    (0x1E8D0, 0x1E8D6, UseClass::VMAbv),
    (0x1E8D7, 0x1E943, UseClass::O),
    (0x1E944, 0x1E94A, UseClass::VMAbv),
    (0x1E94B, 0xE00FF, UseClass::O),
    (0xE0100, 0xE01EF, UseClass::VMAbv),
    (0xE01F0, 0x10FFFF, UseClass::O),
];

static MYANMAR_CLASS_TABLE: &[(u32, u32, MyanmarClass)] = &[
    (0x0, 0xFFF, MyanmarClass::O),
    (0x1000, 0x1003, MyanmarClass::C),
    (0x1004, 0x1004, MyanmarClass::R),
    (0x1005, 0x101A, MyanmarClass::C),
    (0x101B, 0x101B, MyanmarClass::R),
    (0x101C, 0x1020, MyanmarClass::C),
    (0x1021, 0x102A, MyanmarClass::IV),
    (0x102B, 0x102C, MyanmarClass::VPst),
    (0x102D, 0x102E, MyanmarClass::VAbv),
    (0x102F, 0x1030, MyanmarClass::VBlw),
    (0x1031, 0x1031, MyanmarClass::VPre),
    (0x1032, 0x1035, MyanmarClass::VAbv),
    (0x1036, 0x1038, MyanmarClass::A),
    (0x1039, 0x1039, MyanmarClass::H),
    (0x103A, 0x103A, MyanmarClass::As),
    (0x103B, 0x103B, MyanmarClass::MY),
    (0x103C, 0x103C, MyanmarClass::MR),
    (0x103D, 0x103D, MyanmarClass::MW),
    (0x103E, 0x103E, MyanmarClass::MH),
    (0x103F, 0x103F, MyanmarClass::C),
    (0x1040, 0x104F, MyanmarClass::O),
    (0x1050, 0x1051, MyanmarClass::C),
    (0x1052, 0x1055, MyanmarClass::IV),
    (0x1056, 0x1057, MyanmarClass::VPst),
    (0x1058, 0x1059, MyanmarClass::VBlw),
    (0x105A, 0x105A, MyanmarClass::R),
    (0x105B, 0x1061, MyanmarClass::C),
    (0x1062, 0x1062, MyanmarClass::VPst),
    (0x1063, 0x1064, MyanmarClass::A),
    (0x1065, 0x1066, MyanmarClass::C),
    (0x1067, 0x1068, MyanmarClass::VPst),
    (0x1069, 0x106D, MyanmarClass::A),
    (0x106E, 0x1070, MyanmarClass::C),
    (0x1071, 0x1074, MyanmarClass::VAbv),
    (0x1075, 0x1082, MyanmarClass::C),
    (0x1083, 0x1083, MyanmarClass::VPst),
    (0x1084, 0x1084, MyanmarClass::VPre),
    (0x1085, 0x1086, MyanmarClass::VAbv),
    (0x1087, 0x108D, MyanmarClass::PT),
    (0x108E, 0x108E, MyanmarClass::C),
    (0x108F, 0x108F, MyanmarClass::A),
    (0x1090, 0x1099, MyanmarClass::O),
    (0x109A, 0x109B, MyanmarClass::PT),
    (0x109C, 0x109C, MyanmarClass::VPst),
    (0x109D, 0x109D, MyanmarClass::VAbv),
    (0x109E, 0xA9DF, MyanmarClass::O),
    (0xA9E0, 0xA9E4, MyanmarClass::C),
    (0xA9E5, 0xA9E5, MyanmarClass::VAbv),
    (0xA9E6, 0xA9E6, MyanmarClass::O),
    (0xA9E7, 0xA9EF, MyanmarClass::C),
    (0xA9F0, 0xA9F9, MyanmarClass::O),
    (0xA9FA, 0xA9FE, MyanmarClass::C),
    (0xA9FF, 0xAA5F, MyanmarClass::O),
    (0xAA60, 0xAA6F, MyanmarClass::C),
    (0xAA70, 0xAA70, MyanmarClass::O),
    (0xAA71, 0xAA73, MyanmarClass::C),
    (0xAA74, 0xAA79, MyanmarClass::O),
    (0xAA7A, 0xAA7A, MyanmarClass::C),
    (0xAA7B, 0xAA7D, MyanmarClass::A),
    (0xAA7E, 0xAA7F, MyanmarClass::C),
    (0xAA80, 0x10FFFF, MyanmarClass::O),
];

static EXTENDED_PICTOGRAPHIC_TABLE: &[(u32, u32, bool)] = &[
    (0x0, 0xA8, false),
    (0xA9, 0xA9, true),
    (0xAA, 0xAD, false),
    (0xAE, 0xAE, true),
    (0xAF, 0x203B, false),
    (0x203C, 0x203C, true),
    (0x203D, 0x2048, false),
    (0x2049, 0x2049, true),
    (0x204A, 0x2121, false),
    (0x2122, 0x2122, true),
    (0x2123, 0x2138, false),
    (0x2139, 0x2139, true),
    (0x213A, 0x2193, false),
    (0x2194, 0x2199, true),
    (0x219A, 0x21A8, false),
    (0x21A9, 0x21AA, true),
    (0x21AB, 0x2319, false),
    (0x231A, 0x231B, true),
    (0x231C, 0x2327, false),
    (0x2328, 0x2328, true),
    (0x2329, 0x23CE, false),
    (0x23CF, 0x23CF, true),
    (0x23D0, 0x23E8, false),
    (0x23E9, 0x23F3, true),
    (0x23F4, 0x23F7, false),
    (0x23F8, 0x23FA, true),
    (0x23FB, 0x24C1, false),
    (0x24C2, 0x24C2, true),
    (0x24C3, 0x25A9, false),
    (0x25AA, 0x25AB, true),
    (0x25AC, 0x25B5, false),
    (0x25B6, 0x25B6, true),
    (0x25B7, 0x25BF, false),
    (0x25C0, 0x25C0, true),
    (0x25C1, 0x25FA, false),
    (0x25FB, 0x25FE, true),
    (0x25FF, 0x25FF, false),
    (0x2600, 0x2604, true),
    (0x2605, 0x260D, false),
    (0x260E, 0x260E, true),
    (0x260F, 0x2610, false),
    (0x2611, 0x2611, true),
    (0x2612, 0x2613, false),
    (0x2614, 0x2615, true),
    (0x2616, 0x2617, false),
    (0x2618, 0x2618, true),
    (0x2619, 0x261C, false),
    (0x261D, 0x261D, true),
    (0x261E, 0x261F, false),
    (0x2620, 0x2620, true),
    (0x2621, 0x2621, false),
    (0x2622, 0x2623, true),
    (0x2624, 0x2625, false),
    (0x2626, 0x2626, true),
    (0x2627, 0x2629, false),
    (0x262A, 0x262A, true),
    (0x262B, 0x262D, false),
    (0x262E, 0x262F, true),
    (0x2630, 0x2637, false),
    (0x2638, 0x263A, true),
    (0x263B, 0x263F, false),
    (0x2640, 0x2640, true),
    (0x2641, 0x2641, false),
    (0x2642, 0x2642, true),
    (0x2643, 0x2647, false),
    (0x2648, 0x2653, true),
    (0x2654, 0x265E, false),
    (0x265F, 0x2660, true),
    (0x2661, 0x2662, false),
    (0x2663, 0x2663, true),
    (0x2664, 0x2664, false),
    (0x2665, 0x2666, true),
    (0x2667, 0x2667, false),
    (0x2668, 0x2668, true),
    (0x2669, 0x267A, false),
    (0x267B, 0x267B, true),
    (0x267C, 0x267D, false),
    (0x267E, 0x267F, true),
    (0x2680, 0x2691, false),
    (0x2692, 0x2697, true),
    (0x2698, 0x2698, false),
    (0x2699, 0x2699, true),
    (0x269A, 0x269A, false),
    (0x269B, 0x269C, true),
    (0x269D, 0x269F, false),
    (0x26A0, 0x26A1, true),
    (0x26A2, 0x26A6, false),
    (0x26A7, 0x26A7, true),
    (0x26A8, 0x26A9, false),
    (0x26AA, 0x26AB, true),
    (0x26AC, 0x26AF, false),
    (0x26B0, 0x26B1, true),
    (0x26B2, 0x26BC, false),
    (0x26BD, 0x26BE, true),
    (0x26BF, 0x26C3, false),
    (0x26C4, 0x26C5, true),
    (0x26C6, 0x26C7, false),
    (0x26C8, 0x26C8, true),
    (0x26C9, 0x26CD, false),
    (0x26CE, 0x26CF, true),
    (0x26D0, 0x26D0, false),
    (0x26D1, 0x26D1, true),
    (0x26D2, 0x26D2, false),
    (0x26D3, 0x26D4, true),
    (0x26D5, 0x26E8, false),
    (0x26E9, 0x26EA, true),
    (0x26EB, 0x26EF, false),
    (0x26F0, 0x26F5, true),
    (0x26F6, 0x26F6, false),
    (0x26F7, 0x26FA, true),
    (0x26FB, 0x26FC, false),
    (0x26FD, 0x26FD, true),
    (0x26FE, 0x2701, false),
    (0x2702, 0x2702, true),
    (0x2703, 0x2704, false),
    (0x2705, 0x2705, true),
    (0x2706, 0x2707, false),
    (0x2708, 0x270D, true),
    (0x270E, 0x270E, false),
    (0x270F, 0x270F, true),
    (0x2710, 0x2711, false),
    (0x2712, 0x2712, true),
    (0x2713, 0x2713, false),
    (0x2714, 0x2714, true),
    (0x2715, 0x2715, false),
    (0x2716, 0x2716, true),
    (0x2717, 0x271C, false),
    (0x271D, 0x271D, true),
    (0x271E, 0x2720, false),
    (0x2721, 0x2721, true),
    (0x2722, 0x2727, false),
    (0x2728, 0x2728, true),
    (0x2729, 0x2732, false),
    (0x2733, 0x2734, true),
    (0x2735, 0x2743, false),
    (0x2744, 0x2744, true),
    (0x2745, 0x2746, false),
    (0x2747, 0x2747, true),
    (0x2748, 0x274B, false),
    (0x274C, 0x274C, true),
    (0x274D, 0x274D, false),
    (0x274E, 0x274E, true),
    (0x274F, 0x2752, false),
    (0x2753, 0x2755, true),
    (0x2756, 0x2756, false),
    (0x2757, 0x2757, true),
    (0x2758, 0x2762, false),
    (0x2763, 0x2764, true),
    (0x2765, 0x2794, false),
    (0x2795, 0x2797, true),
    (0x2798, 0x27A0, false),
    (0x27A1, 0x27A1, true),
    (0x27A2, 0x27AF, false),
    (0x27B0, 0x27B0, true),
    (0x27B1, 0x27BE, false),
    (0x27BF, 0x27BF, true),
    (0x27C0, 0x2933, false),
    (0x2934, 0x2935, true),
    (0x2936, 0x2B04, false),
    (0x2B05, 0x2B07, true),
    (0x2B08, 0x2B1A, false),
    (0x2B1B, 0x2B1C, true),
    (0x2B1D, 0x2B4F, false),
    (0x2B50, 0x2B50, true),
    (0x2B51, 0x2B54, false),
    (0x2B55, 0x2B55, true),
    (0x2B56, 0x302F, false),
    (0x3030, 0x3030, true),
    (0x3031, 0x303C, false),
    (0x303D, 0x303D, true),
    (0x303E, 0x3296, false),
    (0x3297, 0x3297, true),
    (0x3298, 0x3298, false),
    (0x3299, 0x3299, true),
    (0x329A, 0x1F003, false),
    (0x1F004, 0x1F004, true),
    (0x1F005, 0x1F02B, false),
    (0x1F02C, 0x1F02F, true),
    (0x1F030, 0x1F093, false),
    (0x1F094, 0x1F09F, true),
    (0x1F0A0, 0x1F0AE, false),
    (0x1F0AF, 0x1F0B0, true),
    (0x1F0B1, 0x1F0BF, false),
    (0x1F0C0, 0x1F0C0, true),
    (0x1F0C1, 0x1F0CE, false),
    (0x1F0CF, 0x1F0D0, true),
    (0x1F0D1, 0x1F0F5, false),
    (0x1F0F6, 0x1F0FF, true),
    (0x1F100, 0x1F16F, false),
    (0x1F170, 0x1F171, true),
    (0x1F172, 0x1F17D, false),
    (0x1F17E, 0x1F17F, true),
    (0x1F180, 0x1F18D, false),
    (0x1F18E, 0x1F18E, true),
    (0x1F18F, 0x1F190, false),
    (0x1F191, 0x1F19A, true),
    (0x1F19B, 0x1F1AD, false),
    (0x1F1AE, 0x1F1E5, true),
    (0x1F1E6, 0x1F200, false),
    (0x1F201, 0x1F20F, true),
    (0x1F210, 0x1F219, false),
    (0x1F21A, 0x1F21A, true),
    (0x1F21B, 0x1F22E, false),
    (0x1F22F, 0x1F22F, true),
    (0x1F230, 0x1F231, false),
    (0x1F232, 0x1F23A, true),
    (0x1F23B, 0x1F23B, false),
    (0x1F23C, 0x1F23F, true),
    (0x1F240, 0x1F248, false),
    (0x1F249, 0x1F25F, true),
    (0x1F260, 0x1F265, false),
    (0x1F266, 0x1F321, true),
    (0x1F322, 0x1F323, false),
    (0x1F324, 0x1F393, true),
    (0x1F394, 0x1F395, false),
    (0x1F396, 0x1F397, true),
    (0x1F398, 0x1F398, false),
    (0x1F399, 0x1F39B, true),
    (0x1F39C, 0x1F39D, false),
    (0x1F39E, 0x1F3F0, true),
    (0x1F3F1, 0x1F3F2, false),
    (0x1F3F3, 0x1F3F5, true),
    (0x1F3F6, 0x1F3F6, false),
    (0x1F3F7, 0x1F3FA, true),
    (0x1F3FB, 0x1F3FF, false),
    (0x1F400, 0x1F4FD, true),
    (0x1F4FE, 0x1F4FE, false),
    (0x1F4FF, 0x1F53D, true),
    (0x1F53E, 0x1F548, false),
    (0x1F549, 0x1F54E, true),
    (0x1F54F, 0x1F54F, false),
    (0x1F550, 0x1F567, true),
    (0x1F568, 0x1F56E, false),
    (0x1F56F, 0x1F570, true),
    (0x1F571, 0x1F572, false),
    (0x1F573, 0x1F57A, true),
    (0x1F57B, 0x1F586, false),
    (0x1F587, 0x1F587, true),
    (0x1F588, 0x1F589, false),
    (0x1F58A, 0x1F58D, true),
    (0x1F58E, 0x1F58F, false),
    (0x1F590, 0x1F590, true),
    (0x1F591, 0x1F594, false),
    (0x1F595, 0x1F596, true),
    (0x1F597, 0x1F5A3, false),
    (0x1F5A4, 0x1F5A5, true),
    (0x1F5A6, 0x1F5A7, false),
    (0x1F5A8, 0x1F5A8, true),
    (0x1F5A9, 0x1F5B0, false),
    (0x1F5B1, 0x1F5B2, true),
    (0x1F5B3, 0x1F5BB, false),
    (0x1F5BC, 0x1F5BC, true),
    (0x1F5BD, 0x1F5C1, false),
    (0x1F5C2, 0x1F5C4, true),
    (0x1F5C5, 0x1F5D0, false),
    (0x1F5D1, 0x1F5D3, true),
    (0x1F5D4, 0x1F5DB, false),
    (0x1F5DC, 0x1F5DE, true),
    (0x1F5DF, 0x1F5E0, false),
    (0x1F5E1, 0x1F5E1, true),
    (0x1F5E2, 0x1F5E2, false),
    (0x1F5E3, 0x1F5E3, true),
    (0x1F5E4, 0x1F5E7, false),
    (0x1F5E8, 0x1F5E8, true),
    (0x1F5E9, 0x1F5EE, false),
    (0x1F5EF, 0x1F5EF, true),
    (0x1F5F0, 0x1F5F2, false),
    (0x1F5F3, 0x1F5F3, true),
    (0x1F5F4, 0x1F5F9, false),
    (0x1F5FA, 0x1F64F, true),
    (0x1F650, 0x1F67F, false),
    (0x1F680, 0x1F6C5, true),
    (0x1F6C6, 0x1F6CA, false),
    (0x1F6CB, 0x1F6D2, true),
    (0x1F6D3, 0x1F6D4, false),
    (0x1F6D5, 0x1F6E5, true),
    (0x1F6E6, 0x1F6E8, false),
    (0x1F6E9, 0x1F6E9, true),
    (0x1F6EA, 0x1F6EA, false),
    (0x1F6EB, 0x1F6F0, true),
    (0x1F6F1, 0x1F6F2, false),
    (0x1F6F3, 0x1F6FF, true),
    (0x1F700, 0x1F7D9, false),
    (0x1F7DA, 0x1F7FF, true),
    (0x1F800, 0x1F80B, false),
    (0x1F80C, 0x1F80F, true),
    (0x1F810, 0x1F847, false),
    (0x1F848, 0x1F84F, true),
    (0x1F850, 0x1F859, false),
    (0x1F85A, 0x1F85F, true),
    (0x1F860, 0x1F887, false),
    (0x1F888, 0x1F88F, true),
    (0x1F890, 0x1F8AD, false),
    (0x1F8AE, 0x1F8AF, true),
    (0x1F8B0, 0x1F8BB, false),
    (0x1F8BC, 0x1F8BF, true),
    (0x1F8C0, 0x1F8C1, false),
    (0x1F8C2, 0x1F8CF, true),
    (0x1F8D0, 0x1F8D8, false),
    (0x1F8D9, 0x1F8FF, true),
    (0x1F900, 0x1F90B, false),
    (0x1F90C, 0x1F93A, true),
    (0x1F93B, 0x1F93B, false),
    (0x1F93C, 0x1F945, true),
    (0x1F946, 0x1F946, false),
    (0x1F947, 0x1F9FF, true),
    (0x1FA00, 0x1FA57, false),
    (0x1FA58, 0x1FA5F, true),
    (0x1FA60, 0x1FA6D, false),
    (0x1FA6E, 0x1FAFF, true),
    (0x1FB00, 0x1FBFF, false),
    (0x1FC00, 0x1FFFD, true),
    (0x1FFFE, 0x10FFFF, false),
];static USE_NEEDS_DECOMP_TABLE: &[(u32, u32, bool)] = &[
    (0x0, 0x17BD, false),
    (0x17BE, 0x17C0, true),
    (0x17C1, 0x17C3, false),
    (0x17C4, 0x17C5, true),
    (0x17C6, 0x10FFFF, false),
];pub(crate) const COMPOSE1_COUNT: usize = 85;
pub(crate) static COMPOSE0: &[(u32, u16, u16)] = &[
    (0x3C, 2, 0),
    (0x41, 15, 3),
    (0x52, 8, 19),
    (0x61, 15, 28),
    (0x72, 8, 44),
    (0xA8, 0, 53),
    (0xC2, 0, 54),
    (0xC4, 3, 55),
    (0xCA, 0, 59),
    (0xCF, 0, 60),
    (0xD4, 2, 61),
    (0xD8, 0, 64),
    (0xDC, 0, 65),
    (0xE2, 0, 66),
    (0xE4, 3, 67),
    (0xEA, 0, 71),
    (0xEF, 0, 72),
    (0xF4, 2, 73),
    (0xF8, 0, 76),
    (0xFC, 0, 77),
    (0x102, 1, 78),
    (0x112, 1, 80),
    (0x14C, 1, 82),
    (0x15A, 1, 84),
    (0x160, 1, 86),
    (0x168, 3, 88),
    (0x17F, 0, 92),
    (0x1A0, 1, 93),
    (0x1AF, 1, 95),
    (0x1B7, 0, 97),
    (0x1EA, 1, 98),
    (0x226, 3, 100),
    (0x22E, 1, 104),
    (0x292, 0, 106),
    (0x308, 0, 107),
    (0x391, 0, 108),
    (0x395, 0, 109),
    (0x397, 0, 110),
    (0x399, 0, 111),
    (0x39F, 0, 112),
    (0x3A1, 0, 113),
    (0x3A5, 0, 114),
    (0x3A9, 0, 115),
    (0x3AC, 0, 116),
    (0x3AE, 0, 117),
    (0x3B1, 0, 118),
    (0x3B5, 0, 119),
    (0x3B7, 0, 120),
    (0x3B9, 0, 121),
    (0x3BF, 0, 122),
    (0x3C1, 0, 123),
    (0x3C5, 0, 124),
    (0x3C9, 2, 125),
    (0x3CE, 0, 128),
    (0x3D2, 0, 129),
    (0x406, 0, 130),
    (0x410, 0, 131),
    (0x413, 0, 132),
    (0x415, 3, 133),
    (0x41A, 0, 137),
    (0x41E, 0, 138),
    (0x423, 0, 139),
    (0x427, 0, 140),
    (0x42B, 0, 141),
    (0x42D, 0, 142),
    (0x430, 0, 143),
    (0x433, 0, 144),
    (0x435, 3, 145),
    (0x43A, 0, 149),
    (0x43E, 0, 150),
    (0x443, 0, 151),
    (0x447, 0, 152),
    (0x44B, 0, 153),
    (0x44D, 0, 154),
    (0x456, 0, 155),
    (0x474, 1, 156),
    (0x4D8, 1, 158),
    (0x4E8, 1, 160),
    (0x5D0, 6, 162),
    (0x5D8, 4, 169),
    (0x5DE, 0, 174),
    (0x5E0, 1, 175),
    (0x5E3, 1, 177),
    (0x5E6, 4, 179),
    (0x5F2, 0, 184),
    (0x627, 0, 185),
    (0x648, 0, 186),
    (0x64A, 0, 187),
    (0x6C1, 0, 188),
    (0x6D2, 0, 189),
    (0x6D5, 0, 190),
    (0x915, 2, 191),
    (0x91C, 0, 194),
    (0x921, 1, 195),
    (0x928, 0, 197),
    (0x92B, 0, 198),
    (0x92F, 1, 199),
    (0x933, 0, 201),
    (0x9A1, 1, 202),
    (0x9AF, 0, 204),
    (0x9C7, 0, 205),
    (0xA16, 1, 206),
    (0xA1C, 0, 208),
    (0xA2B, 0, 209),
    (0xA32, 0, 210),
    (0xA38, 0, 211),
    (0xB21, 1, 212),
    (0xB47, 0, 214),
    (0xB92, 0, 215),
    (0xBC6, 1, 216),
    (0xC46, 0, 218),
    (0xCBF, 0, 219),
    (0xCC6, 0, 220),
    (0xCCA, 0, 221),
    (0xD46, 1, 222),
    (0xDD9, 0, 224),
    (0xDDC, 0, 225),
    (0xF40, 0, 226),
    (0xF42, 0, 227),
    (0xF4C, 0, 228),
    (0xF51, 0, 229),
    (0xF56, 0, 230),
    (0xF5B, 0, 231),
    (0xF71, 0, 232),
    (0xF90, 0, 233),
    (0xF92, 0, 234),
    (0xF9C, 0, 235),
    (0xFA1, 0, 236),
    (0xFA6, 0, 237),
    (0xFAB, 0, 238),
    (0xFB2, 1, 239),
    (0x1025, 0, 241),
    (0x1B05, 0, 242),
    (0x1B07, 0, 243),
    (0x1B09, 0, 244),
    (0x1B0B, 0, 245),
    (0x1B0D, 0, 246),
    (0x1B11, 0, 247),
    (0x1B3A, 0, 248),
    (0x1B3C, 0, 249),
    (0x1B3E, 1, 250),
    (0x1B42, 0, 252),
    (0x1E36, 1, 253),
    (0x1E5A, 1, 255),
    (0x1E62, 1, 257),
    (0x1EA0, 1, 259),
    (0x1EB8, 1, 261),
    (0x1ECC, 1, 263),
    (0x1F00, 17, 265),
    (0x1F18, 1, 283),
    (0x1F20, 17, 285),
    (0x1F38, 1, 303),
    (0x1F40, 1, 305),
    (0x1F48, 1, 307),
    (0x1F50, 1, 309),
    (0x1F59, 0, 311),
    (0x1F60, 16, 312),
    (0x1F74, 0, 329),
    (0x1F7C, 0, 330),
    (0x1FB6, 0, 331),
    (0x1FBF, 0, 332),
    (0x1FC6, 0, 333),
    (0x1FF6, 0, 334),
    (0x1FFE, 0, 335),
    (0x2190, 0, 336),
    (0x2192, 0, 337),
    (0x2194, 0, 338),
    (0x21D0, 0, 339),
    (0x21D2, 0, 340),
    (0x21D4, 0, 341),
    (0x2203, 0, 342),
    (0x2208, 0, 343),
    (0x220B, 0, 344),
    (0x2223, 0, 345),
    (0x2225, 0, 346),
    (0x223C, 0, 347),
    (0x2243, 0, 348),
    (0x2245, 0, 349),
    (0x2248, 0, 350),
    (0x224D, 0, 351),
    (0x2261, 0, 352),
    (0x2264, 1, 353),
    (0x2272, 1, 355),
    (0x2276, 1, 357),
    (0x227A, 3, 359),
    (0x2282, 1, 363),
    (0x2286, 1, 365),
    (0x2291, 1, 367),
    (0x22A2, 0, 369),
    (0x22A8, 1, 370),
    (0x22AB, 0, 372),
    (0x22B2, 3, 373),
    (0x2ADD, 0, 377),
    (0x3046, 0, 378),
    (0x304B, 0, 379),
    (0x304D, 0, 380),
    (0x304F, 0, 381),
    (0x3051, 0, 382),
    (0x3053, 0, 383),
    (0x3055, 0, 384),
    (0x3057, 0, 385),
    (0x3059, 0, 386),
    (0x305B, 0, 387),
    (0x305D, 0, 388),
    (0x305F, 0, 389),
    (0x3061, 0, 390),
    (0x3064, 0, 391),
    (0x3066, 0, 392),
    (0x3068, 0, 393),
    (0x306F, 0, 394),
    (0x3072, 0, 395),
    (0x3075, 0, 396),
    (0x3078, 0, 397),
    (0x307B, 0, 398),
    (0x309D, 0, 399),
    (0x30A6, 0, 400),
    (0x30AB, 0, 401),
    (0x30AD, 0, 402),
    (0x30AF, 0, 403),
    (0x30B1, 0, 404),
    (0x30B3, 0, 405),
    (0x30B5, 0, 406),
    (0x30B7, 0, 407),
    (0x30B9, 0, 408),
    (0x30BB, 0, 409),
    (0x30BD, 0, 410),
    (0x30BF, 0, 411),
    (0x30C1, 0, 412),
    (0x30C4, 0, 413),
    (0x30C6, 0, 414),
    (0x30C8, 0, 415),
    (0x30CF, 0, 416),
    (0x30D2, 0, 417),
    (0x30D5, 0, 418),
    (0x30D8, 0, 419),
    (0x30DB, 0, 420),
    (0x30EF, 3, 421),
    (0x30FD, 0, 425),
    (0xFB49, 0, 426),
    (0x11099, 0, 427),
    (0x1109B, 0, 428),
    (0x110A5, 0, 429),
    (0x11131, 1, 430),
    (0x11347, 0, 432),
    (0x114B9, 0, 433),
    (0x115B8, 1, 434),
    (0x11935, 0, 436),
    (0x1D157, 1, 437),
    (0x1D15F, 0, 439),
    (0x1D1B9, 3, 440),
];
pub(crate) static COMPOSE1: &[(u32, u16, u16)] = &[
    (0x300, 4, 0),
    (0x306, 6, 5),
    (0x30F, 0, 12),
    (0x311, 0, 13),
    (0x313, 1, 14),
    (0x31B, 0, 16),
    (0x323, 5, 17),
    (0x32D, 1, 23),
    (0x330, 1, 25),
    (0x338, 0, 27),
    (0x342, 0, 28),
    (0x345, 0, 29),
    (0x5B4, 0, 30),
    (0x5B7, 2, 31),
    (0x5BC, 0, 34),
    (0x5BF, 0, 35),
    (0x5C1, 1, 36),
    (0x653, 2, 38),
    (0x93C, 0, 41),
    (0x9BC, 0, 42),
    (0x9BE, 0, 43),
    (0x9D7, 0, 44),
    (0xA3C, 0, 45),
    (0xB3C, 0, 46),
    (0xB3E, 0, 47),
    (0xB56, 1, 48),
    (0xBBE, 0, 50),
    (0xBD7, 0, 51),
    (0xC56, 0, 52),
    (0xCC2, 0, 53),
    (0xCD5, 1, 54),
    (0xD3E, 0, 56),
    (0xD57, 0, 57),
    (0xDCA, 0, 58),
    (0xDCF, 0, 59),
    (0xDDF, 0, 60),
    (0xF72, 0, 61),
    (0xF74, 0, 62),
    (0xF80, 0, 63),
    (0xFB5, 0, 64),
    (0xFB7, 0, 65),
    (0x102E, 0, 66),
    (0x1B35, 0, 67),
    (0x3099, 1, 68),
    (0x110BA, 0, 70),
    (0x11127, 0, 71),
    (0x1133E, 0, 72),
    (0x11357, 0, 73),
    (0x114B0, 0, 74),
    (0x114BA, 0, 75),
    (0x114BD, 0, 76),
    (0x115AF, 0, 77),
    (0x11930, 0, 78),
    (0x1D165, 0, 79),
    (0x1D16E, 4, 80),
];
static COMPOSE_INDEX: &[u32] = &[
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8814,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8800,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8815,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,192,
    193,194,195,256,258,550,196,7842,197,0,461,512,514,0,0,0,
    7840,0,7680,0,0,260,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7682,0,0,0,0,0,
    0,0,0,0,0,7684,0,0,0,0,0,0,0,0,7686,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,262,264,0,0,0,266,
    0,0,0,0,268,0,0,0,0,0,0,0,0,0,199,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,7690,0,0,0,0,270,0,0,0,0,0,7692,
    0,0,0,7696,0,7698,0,0,7694,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,200,201,202,7868,274,276,278,203,7866,0,0,282,516,
    518,0,0,0,7864,0,0,0,552,280,7704,0,7706,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,7710,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,500,284,
    0,7712,286,288,0,0,0,0,486,0,0,0,0,0,0,0,
    0,0,290,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,292,0,0,0,7714,7718,0,0,0,542,0,0,
    0,0,0,7716,0,0,0,7720,0,0,7722,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,204,205,206,296,298,300,304,207,7880,
    0,0,463,520,522,0,0,0,7882,0,0,0,0,302,0,0,
    7724,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,308,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7728,0,0,0,0,0,0,0,0,0,488,0,0,0,
    0,0,7730,0,0,0,310,0,0,0,0,7732,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,313,0,0,0,0,0,0,0,0,
    0,317,0,0,0,0,0,7734,0,0,0,315,0,7740,0,0,
    7738,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,7742,0,0,0,
    0,7744,0,0,0,0,0,0,0,0,0,0,7746,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    504,323,0,209,0,0,7748,0,0,0,0,327,0,0,0,0,
    0,7750,0,0,0,325,0,7754,0,0,7752,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,210,211,212,213,332,334,558,214,7886,0,336,
    465,524,526,0,0,416,7884,0,0,0,0,490,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7764,0,0,0,0,
    7766,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    340,0,0,0,0,7768,0,0,0,0,344,528,530,0,0,0,
    7770,0,0,0,342,0,0,0,0,7774,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,346,348,0,0,0,7776,0,0,0,0,352,
    0,0,0,0,0,7778,0,0,536,350,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7786,
    0,0,0,0,356,0,0,0,0,0,7788,0,0,538,354,0,
    7792,0,0,7790,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,217,218,
    219,360,362,364,0,220,7910,366,368,467,532,534,0,0,431,7908,
    7794,0,0,0,370,7798,0,7796,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7804,0,0,0,0,0,0,0,0,0,
    0,0,0,0,7806,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,7808,7810,372,0,0,0,7814,7812,
    0,0,0,0,0,0,0,0,0,7816,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,7818,7820,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7922,221,374,7928,562,0,7822,376,7926,0,0,0,0,0,
    0,0,0,7924,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,377,7824,0,0,0,379,0,0,
    0,0,381,0,0,0,0,0,7826,0,0,0,0,0,0,0,
    0,7828,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,224,225,226,227,
    257,259,551,228,7843,229,0,462,513,515,0,0,0,7841,0,7681,
    0,0,261,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,7683,0,0,0,0,0,0,0,0,
    0,0,7685,0,0,0,0,0,0,0,0,7687,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,263,265,0,0,0,267,0,0,0,
    0,269,0,0,0,0,0,0,0,0,0,231,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7691,0,0,0,0,271,0,0,0,0,0,7693,0,0,0,
    7697,0,7699,0,0,7695,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    232,233,234,7869,275,277,279,235,7867,0,0,283,517,519,0,0,
    0,7865,0,0,0,553,281,7705,0,7707,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7711,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,501,285,0,7713,287,
    289,0,0,0,0,487,0,0,0,0,0,0,0,0,0,291,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,293,0,0,0,7715,7719,0,0,0,543,0,0,0,0,0,
    7717,0,0,0,7721,0,0,7723,0,7830,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,236,237,238,297,299,301,0,239,7881,0,0,464,
    521,523,0,0,0,7883,0,0,0,0,303,0,0,7725,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,309,0,0,0,0,
    0,0,0,0,496,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7729,
    0,0,0,0,0,0,0,0,0,489,0,0,0,0,0,7731,
    0,0,0,311,0,0,0,0,7733,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,314,0,0,0,0,0,0,0,0,0,318,0,
    0,0,0,0,7735,0,0,0,316,0,7741,0,0,7739,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7743,0,0,0,0,7745,0,
    0,0,0,0,0,0,0,0,0,7747,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,505,324,0,
    241,0,0,7749,0,0,0,0,328,0,0,0,0,0,7751,0,
    0,0,326,0,7755,0,0,7753,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,242,243,244,245,333,335,559,246,7887,0,337,466,525,527,
    0,0,417,7885,0,0,0,0,491,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,7765,0,0,0,0,7767,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,341,0,0,
    0,0,7769,0,0,0,0,345,529,531,0,0,0,7771,0,0,
    0,343,0,0,0,0,7775,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,347,349,0,0,0,7777,0,0,0,0,353,0,0,0,
    0,0,7779,0,0,537,351,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,7787,7831,0,0,
    0,357,0,0,0,0,0,7789,0,0,539,355,0,7793,0,0,
    7791,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,249,250,251,361,363,
    365,0,252,7911,367,369,468,533,535,0,0,432,7909,7795,0,0,
    0,371,7799,0,7797,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,7805,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7807,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,7809,7811,373,0,0,0,7815,7813,0,7832,0,
    0,0,0,0,0,0,7817,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    7819,7821,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7923,
    253,375,7929,563,0,7823,255,7927,7833,0,0,0,0,0,0,0,
    7925,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,378,7825,0,0,0,380,0,0,0,0,382,
    0,0,0,0,0,7827,0,0,0,0,0,0,0,0,7829,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8173,901,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8129,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,7846,7844,
    0,7850,0,0,0,0,7848,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,478,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,506,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,508,0,
    0,482,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,7688,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,7872,7870,0,7876,0,0,0,0,7874,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,7726,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7890,7888,0,7894,0,0,0,0,7892,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,7756,0,0,556,0,0,7758,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,554,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,510,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,475,471,0,0,469,0,0,0,0,0,0,
    473,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7847,7845,0,7851,0,0,
    0,0,7849,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,479,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,507,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,509,0,0,483,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7689,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,7873,7871,0,7877,0,0,0,0,7875,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7727,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,7891,7889,0,
    7895,0,0,0,0,7893,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,7757,0,0,557,0,0,7759,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,555,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,511,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,476,472,0,0,470,0,0,0,0,0,0,474,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7856,7854,0,7860,0,0,0,0,7858,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7857,7855,0,7861,0,
    0,0,0,7859,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    7700,7702,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,7701,7703,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7760,7762,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7761,
    7763,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7780,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7781,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,7782,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7783,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7800,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,7801,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7802,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,7803,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7835,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7900,7898,0,7904,0,0,0,0,7902,0,0,0,0,0,0,
    0,0,7906,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7901,7899,0,7905,0,0,0,0,7903,0,
    0,0,0,0,0,0,0,7907,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7914,7912,0,7918,0,
    0,0,0,7916,0,0,0,0,0,0,0,0,7920,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    7915,7913,0,7919,0,0,0,0,7917,0,0,0,0,0,0,0,
    0,7921,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    494,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,492,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,493,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,480,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,481,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,7708,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,7709,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,560,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,561,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,495,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,836,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8122,902,0,0,
    8121,8120,0,0,0,0,0,0,0,0,7944,7945,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8124,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8136,904,0,0,0,0,0,0,0,0,0,0,0,0,7960,
    7961,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8138,905,0,0,0,0,0,0,0,0,
    0,0,0,0,7976,7977,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8140,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8154,906,0,0,8153,
    8152,0,938,0,0,0,0,0,0,7992,7993,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8184,908,0,0,0,0,0,0,0,0,0,0,0,0,8008,8009,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8172,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8170,910,0,0,8169,8168,
    0,939,0,0,0,0,0,0,0,8025,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8186,
    911,0,0,0,0,0,0,0,0,0,0,0,0,8040,8041,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8188,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8116,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8132,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8048,940,
    0,0,8113,8112,0,0,0,0,0,0,0,0,7936,7937,0,0,
    0,0,0,0,0,0,0,0,0,0,8118,8115,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8050,941,0,0,0,0,0,0,0,0,0,0,0,
    0,7952,7953,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8052,942,0,0,0,0,0,0,
    0,0,0,0,0,0,7968,7969,0,0,0,0,0,0,0,0,
    0,0,0,0,8134,8131,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8054,943,0,
    0,8145,8144,0,970,0,0,0,0,0,0,7984,7985,0,0,0,
    0,0,0,0,0,0,0,0,0,8150,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,8056,972,0,0,0,0,0,0,0,0,0,0,0,0,
    8000,8001,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8164,8165,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8058,973,0,0,
    8161,8160,0,971,0,0,0,0,0,0,8016,8017,0,0,0,0,
    0,0,0,0,0,0,0,0,8166,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8060,974,0,0,0,0,0,0,0,0,0,0,0,0,8032,
    8033,0,0,0,0,0,0,0,0,0,0,0,0,8182,8179,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8146,912,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,8151,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8162,944,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,8167,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8180,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,979,0,0,0,0,0,980,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,1031,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,1232,0,1234,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,1027,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,1024,0,0,0,0,1238,0,
    1025,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,1217,0,1244,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,1246,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,1037,0,0,0,1250,1049,0,1252,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,1036,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,1254,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,1262,1038,0,1264,0,
    0,1266,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,1268,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,1272,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,1260,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    1233,0,1235,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,1107,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,1104,0,0,0,0,1239,0,1105,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1218,
    0,1245,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,1247,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,1117,0,0,0,1251,1081,0,1253,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,1116,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,1255,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,1263,1118,0,1265,0,0,1267,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1269,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,1273,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,1261,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,1111,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,1142,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,1143,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,1242,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,1243,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,1258,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,1259,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,64302,64303,0,64304,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,64305,64332,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,64306,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,64307,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    64308,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,64331,64309,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,64310,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,64312,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    64285,0,0,0,64313,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,64314,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,64315,64333,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,64316,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,64318,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,64320,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,64321,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,64323,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,64324,64334,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,64326,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,64327,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,64328,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    64329,0,64298,64299,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,64330,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,64287,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,1570,1571,1573,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,1572,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,1574,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,1730,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,1747,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,1728,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,2392,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,2393,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,2394,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,2395,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,2396,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,2397,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,2345,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,2398,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,2399,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,2353,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,2356,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,2524,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,2525,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,2527,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,2507,2508,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,2649,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,2650,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,2651,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,2654,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,2611,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,2614,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,2908,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,2909,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,2891,2888,2892,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,2964,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,3018,3020,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,3019,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,3144,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,3264,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,3274,3271,3272,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,3275,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,3402,3404,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,3403,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,3546,3548,3550,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,3549,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,3945,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    3907,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,3917,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,3922,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,3927,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,3932,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,3955,3957,3969,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,4025,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,3987,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,3997,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,4002,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,4007,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,4012,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,3958,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,3960,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,4134,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,6918,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,6920,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,6922,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,6924,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,6926,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,6930,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,6971,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    6973,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,6976,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,6977,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,6979,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,7736,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7737,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,7772,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,7773,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7784,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    7785,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7852,0,0,7862,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7853,0,0,7863,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7878,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    7879,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,7896,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7897,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,7938,7940,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7942,8064,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7939,7941,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,7943,8065,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8066,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8067,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8068,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8069,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8070,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8071,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,7946,7948,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7950,8072,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7947,7949,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7951,8073,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8074,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8075,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8076,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8077,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8078,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8079,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,7954,7956,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7955,7957,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,7962,7964,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,7963,7965,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7970,7972,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,7974,8080,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7971,7973,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7975,8081,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8082,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8083,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,8084,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,8085,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8086,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8087,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,7978,7980,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,7982,8088,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,7979,7981,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,7983,8089,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8090,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8091,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8092,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8093,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8094,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8095,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,7986,7988,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,7990,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,7987,7989,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,7991,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,7994,7996,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,7998,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    7995,7997,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,7999,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8002,8004,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8003,8005,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8010,
    8012,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8011,8013,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8018,8020,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8022,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8019,8021,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8023,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8027,8029,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8031,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8034,8036,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8038,8096,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8035,8037,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8039,8097,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8098,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8099,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8100,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8101,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8102,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8103,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8042,8044,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8046,8104,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8043,8045,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8047,8105,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,8106,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8107,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8108,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8109,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8110,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8111,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8114,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8130,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8178,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8119,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8141,8142,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8143,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8135,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8183,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8157,8158,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,8159,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8602,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8603,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8622,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8653,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8655,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8654,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8708,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8713,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8716,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8740,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8742,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,8769,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,8772,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8775,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8777,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8813,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8802,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8816,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8817,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8820,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8821,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8824,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8825,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8832,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8833,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,8928,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,8929,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,8836,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,8837,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,8840,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,8841,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,8930,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,8931,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    8876,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,8877,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,8878,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,8879,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,8938,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,8939,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,8940,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,8941,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,10972,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,12436,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,12364,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    12366,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,12368,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,12370,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,12372,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,12374,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,12376,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,12378,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,12380,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,12382,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,12384,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,12386,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,12389,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,12391,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,12393,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,12400,12401,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,12403,12404,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    12406,12407,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,12409,12410,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,12412,12413,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,12446,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,12532,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,12460,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,12462,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,12464,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,12466,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,12468,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,12470,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,12472,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,12474,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,12476,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,12478,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,12480,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    12482,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,12485,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,12487,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,12489,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,12496,12497,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,12499,12500,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,12502,12503,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,12505,12506,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,12508,12509,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,12535,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,12536,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,12537,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,12538,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,12542,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,64300,64301,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,69786,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,69788,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,69803,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,69934,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,69935,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,70475,70476,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,70844,
    70843,70846,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,71098,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,71099,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,71992,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,119134,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,119135,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,119136,119137,119138,119139,119140,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,119227,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,119228,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,119229,119231,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
    0,0,0,0,0,0,0,119230,119232,0,0,0,
];
pub(crate) fn compose_index(i: usize) -> u32 { COMPOSE_INDEX[i] }
pub(crate) static DECOMPOSE: &[u32] = &[
    0,2,65,768,2,65,769,2,65,770,2,65,771,2,65,776,
    2,65,778,2,67,807,2,69,768,2,69,769,2,69,770,2,
    69,776,2,73,768,2,73,769,2,73,770,2,73,776,2,78,
    771,2,79,768,2,79,769,2,79,770,2,79,771,2,79,776,
    2,85,768,2,85,769,2,85,770,2,85,776,2,89,769,2,
    97,768,2,97,769,2,97,770,2,97,771,2,97,776,2,97,
    778,2,99,807,2,101,768,2,101,769,2,101,770,2,101,776,
    2,105,768,2,105,769,2,105,770,2,105,776,2,110,771,2,
    111,768,2,111,769,2,111,770,2,111,771,2,111,776,2,117,
    768,2,117,769,2,117,770,2,117,776,2,121,769,2,121,776,
    2,65,772,2,97,772,2,65,774,2,97,774,2,65,808,2,
    97,808,2,67,769,2,99,769,2,67,770,2,99,770,2,67,
    775,2,99,775,2,67,780,2,99,780,2,68,780,2,100,780,
    2,69,772,2,101,772,2,69,774,2,101,774,2,69,775,2,
    101,775,2,69,808,2,101,808,2,69,780,2,101,780,2,71,
    770,2,103,770,2,71,774,2,103,774,2,71,775,2,103,775,
    2,71,807,2,103,807,2,72,770,2,104,770,2,73,771,2,
    105,771,2,73,772,2,105,772,2,73,774,2,105,774,2,73,
    808,2,105,808,2,73,775,2,74,770,2,106,770,2,75,807,
    2,107,807,2,76,769,2,108,769,2,76,807,2,108,807,2,
    76,780,2,108,780,2,78,769,2,110,769,2,78,807,2,110,
    807,2,78,780,2,110,780,2,79,772,2,111,772,2,79,774,
    2,111,774,2,79,779,2,111,779,2,82,769,2,114,769,2,
    82,807,2,114,807,2,82,780,2,114,780,2,83,769,2,115,
    769,2,83,770,2,115,770,2,83,807,2,115,807,2,83,780,
    2,115,780,2,84,807,2,116,807,2,84,780,2,116,780,2,
    85,771,2,117,771,2,85,772,2,117,772,2,85,774,2,117,
    774,2,85,778,2,117,778,2,85,779,2,117,779,2,85,808,
    2,117,808,2,87,770,2,119,770,2,89,770,2,121,770,2,
    89,776,2,90,769,2,122,769,2,90,775,2,122,775,2,90,
    780,2,122,780,2,79,795,2,111,795,2,85,795,2,117,795,
    2,65,780,2,97,780,2,73,780,2,105,780,2,79,780,2,
    111,780,2,85,780,2,117,780,3,85,776,772,3,117,776,772,
    3,85,776,769,3,117,776,769,3,85,776,780,3,117,776,780,
    3,85,776,768,3,117,776,768,3,65,776,772,3,97,776,772,
    3,65,775,772,3,97,775,772,2,198,772,2,230,772,2,71,
    780,2,103,780,2,75,780,2,107,780,2,79,808,2,111,808,
    3,79,808,772,3,111,808,772,2,439,780,2,658,780,2,106,
    780,2,71,769,2,103,769,2,78,768,2,110,768,3,65,778,
    769,3,97,778,769,2,198,769,2,230,769,2,216,769,2,248,
    769,2,65,783,2,97,783,2,65,785,2,97,785,2,69,783,
    2,101,783,2,69,785,2,101,785,2,73,783,2,105,783,2,
    73,785,2,105,785,2,79,783,2,111,783,2,79,785,2,111,
    785,2,82,783,2,114,783,2,82,785,2,114,785,2,85,783,
    2,117,783,2,85,785,2,117,785,2,83,806,2,115,806,2,
    84,806,2,116,806,2,72,780,2,104,780,2,65,775,2,97,
    775,2,69,807,2,101,807,3,79,776,772,3,111,776,772,3,
    79,771,772,3,111,771,772,2,79,775,2,111,775,3,79,775,
    772,3,111,775,772,2,89,772,2,121,772,1,768,1,769,1,
    787,2,776,769,1,697,1,59,2,168,769,2,913,769,1,183,
    2,917,769,2,919,769,2,921,769,2,927,769,2,933,769,2,
    937,769,3,953,776,769,2,921,776,2,933,776,2,945,769,2,
    949,769,2,951,769,2,953,769,3,965,776,769,2,953,776,2,
    965,776,2,959,769,2,965,769,2,969,769,2,978,769,2,978,
    776,2,1045,768,2,1045,776,2,1043,769,2,1030,776,2,1050,769,
    2,1048,768,2,1059,774,2,1048,774,2,1080,774,2,1077,768,2,
    1077,776,2,1075,769,2,1110,776,2,1082,769,2,1080,768,2,1091,
    774,2,1140,783,2,1141,783,2,1046,774,2,1078,774,2,1040,774,
    2,1072,774,2,1040,776,2,1072,776,2,1045,774,2,1077,774,2,
    1240,776,2,1241,776,2,1046,776,2,1078,776,2,1047,776,2,1079,
    776,2,1048,772,2,1080,772,2,1048,776,2,1080,776,2,1054,776,
    2,1086,776,2,1256,776,2,1257,776,2,1069,776,2,1101,776,2,
    1059,772,2,1091,772,2,1059,776,2,1091,776,2,1059,779,2,1091,
    779,2,1063,776,2,1095,776,2,1067,776,2,1099,776,2,1575,1619,
    2,1575,1620,2,1608,1620,2,1575,1621,2,1610,1620,2,1749,1620,2,
    1729,1620,2,1746,1620,2,2344,2364,2,2352,2364,2,2355,2364,2,2325,
    2364,2,2326,2364,2,2327,2364,2,2332,2364,2,2337,2364,2,2338,2364,
    2,2347,2364,2,2351,2364,2,2503,2494,2,2503,2519,2,2465,2492,2,
    2466,2492,2,2479,2492,2,2610,2620,2,2616,2620,2,2582,2620,2,2583,
    2620,2,2588,2620,2,2603,2620,2,2887,2902,2,2887,2878,2,2887,2903,
    2,2849,2876,2,2850,2876,2,2962,3031,2,3014,3006,2,3015,3006,2,
    3014,3031,2,3142,3158,2,3263,3285,2,3270,3285,2,3270,3286,2,3270,
    3266,3,3270,3266,3285,2,3398,3390,2,3399,3390,2,3398,3415,2,3545,
    3530,2,3545,3535,3,3545,3535,3530,2,3545,3551,2,3906,4023,2,3916,
    4023,2,3921,4023,2,3926,4023,2,3931,4023,2,3904,4021,2,3953,3954,
    2,3953,3956,2,4018,3968,2,4019,3968,2,3953,3968,2,3986,4023,2,
    3996,4023,2,4001,4023,2,4006,4023,2,4011,4023,2,3984,4021,2,4133,
    4142,2,6917,6965,2,6919,6965,2,6921,6965,2,6923,6965,2,6925,6965,
    2,6929,6965,2,6970,6965,2,6972,6965,2,6974,6965,2,6975,6965,2,
    6978,6965,2,65,805,2,97,805,2,66,775,2,98,775,2,66,
    803,2,98,803,2,66,817,2,98,817,3,67,807,769,3,99,
    807,769,2,68,775,2,100,775,2,68,803,2,100,803,2,68,
    817,2,100,817,2,68,807,2,100,807,2,68,813,2,100,813,
    3,69,772,768,3,101,772,768,3,69,772,769,3,101,772,769,
    2,69,813,2,101,813,2,69,816,2,101,816,3,69,807,774,
    3,101,807,774,2,70,775,2,102,775,2,71,772,2,103,772,
    2,72,775,2,104,775,2,72,803,2,104,803,2,72,776,2,
    104,776,2,72,807,2,104,807,2,72,814,2,104,814,2,73,
    816,2,105,816,3,73,776,769,3,105,776,769,2,75,769,2,
    107,769,2,75,803,2,107,803,2,75,817,2,107,817,2,76,
    803,2,108,803,3,76,803,772,3,108,803,772,2,76,817,2,
    108,817,2,76,813,2,108,813,2,77,769,2,109,769,2,77,
    775,2,109,775,2,77,803,2,109,803,2,78,775,2,110,775,
    2,78,803,2,110,803,2,78,817,2,110,817,2,78,813,2,
    110,813,3,79,771,769,3,111,771,769,3,79,771,776,3,111,
    771,776,3,79,772,768,3,111,772,768,3,79,772,769,3,111,
    772,769,2,80,769,2,112,769,2,80,775,2,112,775,2,82,
    775,2,114,775,2,82,803,2,114,803,3,82,803,772,3,114,
    803,772,2,82,817,2,114,817,2,83,775,2,115,775,2,83,
    803,2,115,803,3,83,769,775,3,115,769,775,3,83,780,775,
    3,115,780,775,3,83,803,775,3,115,803,775,2,84,775,2,
    116,775,2,84,803,2,116,803,2,84,817,2,116,817,2,84,
    813,2,116,813,2,85,804,2,117,804,2,85,816,2,117,816,
    2,85,813,2,117,813,3,85,771,769,3,117,771,769,3,85,
    772,776,3,117,772,776,2,86,771,2,118,771,2,86,803,2,
    118,803,2,87,768,2,119,768,2,87,769,2,119,769,2,87,
    776,2,119,776,2,87,775,2,119,775,2,87,803,2,119,803,
    2,88,775,2,120,775,2,88,776,2,120,776,2,89,775,2,
    121,775,2,90,770,2,122,770,2,90,803,2,122,803,2,90,
    817,2,122,817,2,104,817,2,116,776,2,119,778,2,121,778,
    2,383,775,2,65,803,2,97,803,2,65,777,2,97,777,3,
    65,770,769,3,97,770,769,3,65,770,768,3,97,770,768,3,
    65,770,777,3,97,770,777,3,65,770,771,3,97,770,771,3,
    65,803,770,3,97,803,770,3,65,774,769,3,97,774,769,3,
    65,774,768,3,97,774,768,3,65,774,777,3,97,774,777,3,
    65,774,771,3,97,774,771,3,65,803,774,3,97,803,774,2,
    69,803,2,101,803,2,69,777,2,101,777,2,69,771,2,101,
    771,3,69,770,769,3,101,770,769,3,69,770,768,3,101,770,
    768,3,69,770,777,3,101,770,777,3,69,770,771,3,101,770,
    771,3,69,803,770,3,101,803,770,2,73,777,2,105,777,2,
    73,803,2,105,803,2,79,803,2,111,803,2,79,777,2,111,
    777,3,79,770,769,3,111,770,769,3,79,770,768,3,111,770,
    768,3,79,770,777,3,111,770,777,3,79,770,771,3,111,770,
    771,3,79,803,770,3,111,803,770,3,79,795,769,3,111,795,
    769,3,79,795,768,3,111,795,768,3,79,795,777,3,111,795,
    777,3,79,795,771,3,111,795,771,3,79,795,803,3,111,795,
    803,2,85,803,2,117,803,2,85,777,2,117,777,3,85,795,
    769,3,117,795,769,3,85,795,768,3,117,795,768,3,85,795,
    777,3,117,795,777,3,85,795,771,3,117,795,771,3,85,795,
    803,3,117,795,803,2,89,768,2,121,768,2,89,803,2,121,
    803,2,89,777,2,121,777,2,89,771,2,121,771,2,945,787,
    2,945,788,3,945,787,768,3,945,788,768,3,945,787,769,3,
    945,788,769,3,945,787,834,3,945,788,834,2,913,787,2,913,
    788,3,913,787,768,3,913,788,768,3,913,787,769,3,913,788,
    769,3,913,787,834,3,913,788,834,2,949,787,2,949,788,3,
    949,787,768,3,949,788,768,3,949,787,769,3,949,788,769,2,
    917,787,2,917,788,3,917,787,768,3,917,788,768,3,917,787,
    769,3,917,788,769,2,951,787,2,951,788,3,951,787,768,3,
    951,788,768,3,951,787,769,3,951,788,769,3,951,787,834,3,
    951,788,834,2,919,787,2,919,788,3,919,787,768,3,919,788,
    768,3,919,787,769,3,919,788,769,3,919,787,834,3,919,788,
    834,2,953,787,2,953,788,3,953,787,768,3,953,788,768,3,
    953,787,769,3,953,788,769,3,953,787,834,3,953,788,834,2,
    921,787,2,921,788,3,921,787,768,3,921,788,768,3,921,787,
    769,3,921,788,769,3,921,787,834,3,921,788,834,2,959,787,
    2,959,788,3,959,787,768,3,959,788,768,3,959,787,769,3,
    959,788,769,2,927,787,2,927,788,3,927,787,768,3,927,788,
    768,3,927,787,769,3,927,788,769,2,965,787,2,965,788,3,
    965,787,768,3,965,788,768,3,965,787,769,3,965,788,769,3,
    965,787,834,3,965,788,834,2,933,788,3,933,788,768,3,933,
    788,769,3,933,788,834,2,969,787,2,969,788,3,969,787,768,
    3,969,788,768,3,969,787,769,3,969,788,769,3,969,787,834,
    3,969,788,834,2,937,787,2,937,788,3,937,787,768,3,937,
    788,768,3,937,787,769,3,937,788,769,3,937,787,834,3,937,
    788,834,2,945,768,2,945,769,2,949,768,2,949,769,2,951,
    768,2,951,769,2,953,768,2,953,769,2,959,768,2,959,769,
    2,965,768,2,965,769,2,969,768,2,969,769,3,945,787,837,
    3,945,788,837,4,945,787,768,837,4,945,788,768,837,4,945,
    787,769,837,4,945,788,769,837,4,945,787,834,837,4,945,788,
    834,837,3,913,787,837,3,913,788,837,4,913,787,768,837,4,
    913,788,768,837,4,913,787,769,837,4,913,788,769,837,4,913,
    787,834,837,4,913,788,834,837,3,951,787,837,3,951,788,837,
    4,951,787,768,837,4,951,788,768,837,4,951,787,769,837,4,
    951,788,769,837,4,951,787,834,837,4,951,788,834,837,3,919,
    787,837,3,919,788,837,4,919,787,768,837,4,919,788,768,837,
    4,919,787,769,837,4,919,788,769,837,4,919,787,834,837,4,
    919,788,834,837,3,969,787,837,3,969,788,837,4,969,787,768,
    837,4,969,788,768,837,4,969,787,769,837,4,969,788,769,837,
    4,969,787,834,837,4,969,788,834,837,3,937,787,837,3,937,
    788,837,4,937,787,768,837,4,937,788,768,837,4,937,787,769,
    837,4,937,788,769,837,4,937,787,834,837,4,937,788,834,837,
    2,945,774,2,945,772,3,945,768,837,2,945,837,3,945,769,
    837,2,945,834,3,945,834,837,2,913,774,2,913,772,2,913,
    768,2,913,769,2,913,837,1,953,2,168,834,3,951,768,837,
    2,951,837,3,951,769,837,2,951,834,3,951,834,837,2,917,
    768,2,917,769,2,919,768,2,919,769,2,919,837,2,8127,768,
    2,8127,769,2,8127,834,2,953,774,2,953,772,3,953,776,768,
    3,953,776,769,2,953,834,3,953,776,834,2,921,774,2,921,
    772,2,921,768,2,921,769,2,8190,768,2,8190,769,2,8190,834,
    2,965,774,2,965,772,3,965,776,768,3,965,776,769,2,961,
    787,2,961,788,2,965,834,3,965,776,834,2,933,774,2,933,
    772,2,933,768,2,933,769,2,929,788,2,168,768,2,168,769,
    1,96,3,969,768,837,2,969,837,3,969,769,837,2,969,834,
    3,969,834,837,2,927,768,2,927,769,2,937,768,2,937,769,
    2,937,837,1,180,1,8194,1,8195,1,937,1,75,2,65,778,
    2,8592,824,2,8594,824,2,8596,824,2,8656,824,2,8660,824,2,
    8658,824,2,8707,824,2,8712,824,2,8715,824,2,8739,824,2,8741,
    824,2,8764,824,2,8771,824,2,8773,824,2,8776,824,2,61,824,
    2,8801,824,2,8781,824,2,60,824,2,62,824,2,8804,824,2,
    8805,824,2,8818,824,2,8819,824,2,8822,824,2,8823,824,2,8826,
    824,2,8827,824,2,8834,824,2,8835,824,2,8838,824,2,8839,824,
    2,8866,824,2,8872,824,2,8873,824,2,8875,824,2,8828,824,2,
    8829,824,2,8849,824,2,8850,824,2,8882,824,2,8883,824,2,8884,
    824,2,8885,824,1,12296,1,12297,2,10973,824,2,12363,12441,2,12365,
    12441,2,12367,12441,2,12369,12441,2,12371,12441,2,12373,12441,2,12375,12441,
    2,12377,12441,2,12379,12441,2,12381,12441,2,12383,12441,2,12385,12441,2,
    12388,12441,2,12390,12441,2,12392,12441,2,12399,12441,2,12399,12442,2,12402,
    12441,2,12402,12442,2,12405,12441,2,12405,12442,2,12408,12441,2,12408,12442,
    2,12411,12441,2,12411,12442,2,12358,12441,2,12445,12441,2,12459,12441,2,
    12461,12441,2,12463,12441,2,12465,12441,2,12467,12441,2,12469,12441,2,12471,
    12441,2,12473,12441,2,12475,12441,2,12477,12441,2,12479,12441,2,12481,12441,
    2,12484,12441,2,12486,12441,2,12488,12441,2,12495,12441,2,12495,12442,2,
    12498,12441,2,12498,12442,2,12501,12441,2,12501,12442,2,12504,12441,2,12504,
    12442,2,12507,12441,2,12507,12442,2,12454,12441,2,12527,12441,2,12528,12441,
    2,12529,12441,2,12530,12441,2,12541,12441,1,35912,1,26356,1,36554,1,
    36040,1,28369,1,20018,1,21477,1,40860,1,40860,1,22865,1,37329,1,
    21895,1,22856,1,25078,1,30313,1,32645,1,34367,1,34746,1,35064,1,
    37007,1,27138,1,27931,1,28889,1,29662,1,33853,1,37226,1,39409,1,
    20098,1,21365,1,27396,1,29211,1,34349,1,40478,1,23888,1,28651,1,
    34253,1,35172,1,25289,1,33240,1,34847,1,24266,1,26391,1,28010,1,
    29436,1,37070,1,20358,1,20919,1,21214,1,25796,1,27347,1,29200,1,
    30439,1,32769,1,34310,1,34396,1,36335,1,38706,1,39791,1,40442,1,
    30860,1,31103,1,32160,1,33737,1,37636,1,40575,1,35542,1,22751,1,
    24324,1,31840,1,32894,1,29282,1,30922,1,36034,1,38647,1,22744,1,
    23650,1,27155,1,28122,1,28431,1,32047,1,32311,1,38475,1,21202,1,
    32907,1,20956,1,20940,1,31260,1,32190,1,33777,1,38517,1,35712,1,
    25295,1,27138,1,35582,1,20025,1,23527,1,24594,1,29575,1,30064,1,
    21271,1,30971,1,20415,1,24489,1,19981,1,27852,1,25976,1,32034,1,
    21443,1,22622,1,30465,1,33865,1,35498,1,27578,1,36784,1,27784,1,
    25342,1,33509,1,25504,1,30053,1,20142,1,20841,1,20937,1,26753,1,
    31975,1,33391,1,35538,1,37327,1,21237,1,21570,1,22899,1,24300,1,
    26053,1,28670,1,31018,1,38317,1,39530,1,40599,1,40654,1,21147,1,
    26310,1,27511,1,36706,1,24180,1,24976,1,25088,1,25754,1,28451,1,
    29001,1,29833,1,31178,1,32244,1,32879,1,36646,1,34030,1,36899,1,
    37706,1,21015,1,21155,1,21693,1,28872,1,35010,1,35498,1,24265,1,
    24565,1,25467,1,27566,1,31806,1,29557,1,20196,1,22265,1,23527,1,
    23994,1,24604,1,29618,1,29801,1,32666,1,32838,1,37428,1,38646,1,
    38728,1,38936,1,20363,1,31150,1,37300,1,38584,1,24801,1,20102,1,
    20698,1,23534,1,23615,1,26009,1,27138,1,29134,1,30274,1,34044,1,
    36988,1,40845,1,26248,1,38446,1,21129,1,26491,1,26611,1,27969,1,
    28316,1,29705,1,30041,1,30827,1,32016,1,39006,1,20845,1,25134,1,
    38520,1,20523,1,23833,1,28138,1,36650,1,24459,1,24900,1,26647,1,
    29575,1,38534,1,21033,1,21519,1,23653,1,26131,1,26446,1,26792,1,
    27877,1,29702,1,30178,1,32633,1,35023,1,35041,1,37324,1,38626,1,
    21311,1,28346,1,21533,1,29136,1,29848,1,34298,1,38563,1,40023,1,
    40607,1,26519,1,28107,1,33256,1,31435,1,31520,1,31890,1,29376,1,
    28825,1,35672,1,20160,1,33590,1,21050,1,20999,1,24230,1,25299,1,
    31958,1,23429,1,27934,1,26292,1,36667,1,34892,1,38477,1,35211,1,
    24275,1,20800,1,21952,1,22618,1,26228,1,20958,1,29482,1,30410,1,
    31036,1,31070,1,31077,1,31119,1,38742,1,31934,1,32701,1,34322,1,
    35576,1,36920,1,37117,1,39151,1,39164,1,39208,1,40372,1,37086,1,
    38583,1,20398,1,20711,1,20813,1,21193,1,21220,1,21329,1,21917,1,
    22022,1,22120,1,22592,1,22696,1,23652,1,23662,1,24724,1,24936,1,
    24974,1,25074,1,25935,1,26082,1,26257,1,26757,1,28023,1,28186,1,
    28450,1,29038,1,29227,1,29730,1,30865,1,31038,1,31049,1,31048,1,
    31056,1,31062,1,31069,1,31117,1,31118,1,31296,1,31361,1,31680,1,
    32244,1,32265,1,32321,1,32626,1,32773,1,33261,1,33401,1,33401,1,
    33879,1,35088,1,35222,1,35585,1,35641,1,36051,1,36104,1,36790,1,
    36920,1,38627,1,38911,1,38971,1,24693,1,148206,1,33304,1,20006,1,
    20917,1,20840,1,20352,1,20805,1,20864,1,21191,1,21242,1,21917,1,
    21845,1,21913,1,21986,1,22618,1,22707,1,22852,1,22868,1,23138,1,
    23336,1,24274,1,24281,1,24425,1,24493,1,24792,1,24910,1,24840,1,
    24974,1,24928,1,25074,1,25140,1,25540,1,25628,1,25682,1,25942,1,
    26228,1,26391,1,26395,1,26454,1,27513,1,27578,1,27969,1,28379,1,
    28363,1,28450,1,28702,1,29038,1,30631,1,29237,1,29359,1,29482,1,
    29809,1,29958,1,30011,1,30237,1,30239,1,30410,1,30427,1,30452,1,
    30538,1,30528,1,30924,1,31409,1,31680,1,31867,1,32091,1,32244,1,
    32574,1,32773,1,33618,1,33775,1,34681,1,35137,1,35206,1,35222,1,
    35519,1,35576,1,35531,1,35585,1,35582,1,35565,1,35641,1,35722,1,
    36104,1,36664,1,36978,1,37273,1,37494,1,38524,1,38627,1,38742,1,
    38875,1,38911,1,38923,1,38971,1,39698,1,40860,1,141386,1,141380,1,
    144341,1,15261,1,16408,1,16441,1,152137,1,154832,1,163539,1,40771,1,
    40846,2,1497,1460,2,1522,1463,2,1513,1473,2,1513,1474,3,1513,1468,
    1473,3,1513,1468,1474,2,1488,1463,2,1488,1464,2,1488,1468,2,1489,
    1468,2,1490,1468,2,1491,1468,2,1492,1468,2,1493,1468,2,1494,1468,
    2,1496,1468,2,1497,1468,2,1498,1468,2,1499,1468,2,1500,1468,2,
    1502,1468,2,1504,1468,2,1505,1468,2,1507,1468,2,1508,1468,2,1510,
    1468,2,1511,1468,2,1512,1468,2,1513,1468,2,1514,1468,2,1493,1465,
    2,1489,1471,2,1499,1471,2,1508,1471,2,69785,69818,2,69787,69818,2,
    69797,69818,2,69937,69927,2,69938,69927,2,70471,70462,2,70471,70487,2,70841,
    70842,2,70841,70832,2,70841,70845,2,71096,71087,2,71097,71087,2,71989,71984,
    2,119127,119141,2,119128,119141,3,119128,119141,119150,3,119128,119141,119151,3,119128,
    119141,119152,3,119128,119141,119153,3,119128,119141,119154,2,119225,119141,2,119226,119141,
    3,119225,119141,119150,3,119226,119141,119150,3,119225,119141,119151,3,119226,119141,119151,
    1,20029,1,20024,1,20033,1,131362,1,20320,1,20398,1,20411,1,20482,
    1,20602,1,20633,1,20711,1,20687,1,13470,1,132666,1,20813,1,20820,
    1,20836,1,20855,1,132380,1,13497,1,20839,1,20877,1,132427,1,20887,
    1,20900,1,20172,1,20908,1,20917,1,168415,1,20981,1,20995,1,13535,
    1,21051,1,21062,1,21106,1,21111,1,13589,1,21191,1,21193,1,21220,
    1,21242,1,21253,1,21254,1,21271,1,21321,1,21329,1,21338,1,21363,
    1,21373,1,21375,1,21375,1,21375,1,133676,1,28784,1,21450,1,21471,
    1,133987,1,21483,1,21489,1,21510,1,21662,1,21560,1,21576,1,21608,
    1,21666,1,21750,1,21776,1,21843,1,21859,1,21892,1,21892,1,21913,
    1,21931,1,21939,1,21954,1,22294,1,22022,1,22295,1,22097,1,22132,
    1,20999,1,22766,1,22478,1,22516,1,22541,1,22411,1,22578,1,22577,
    1,22700,1,136420,1,22770,1,22775,1,22790,1,22810,1,22818,1,22882,
    1,136872,1,136938,1,23020,1,23067,1,23079,1,23000,1,23142,1,14062,
    1,14076,1,23304,1,23358,1,23358,1,137672,1,23491,1,23512,1,23527,
    1,23539,1,138008,1,23551,1,23558,1,24403,1,23586,1,14209,1,23648,
    1,23662,1,23744,1,23693,1,138724,1,23875,1,138726,1,23918,1,23915,
    1,23932,1,24033,1,24034,1,14383,1,24061,1,24104,1,24125,1,24169,
    1,14434,1,139651,1,14460,1,24240,1,24243,1,24246,1,24266,1,172946,
    1,24318,1,140081,1,140081,1,33281,1,24354,1,24354,1,14535,1,144056,
    1,156122,1,24418,1,24427,1,14563,1,24474,1,24525,1,24535,1,24569,
    1,24705,1,14650,1,14620,1,24724,1,141012,1,24775,1,24904,1,24908,
    1,24910,1,24908,1,24954,1,24974,1,25010,1,24996,1,25007,1,25054,
    1,25074,1,25078,1,25104,1,25115,1,25181,1,25265,1,25300,1,25424,
    1,142092,1,25405,1,25340,1,25448,1,25475,1,25572,1,142321,1,25634,
    1,25541,1,25513,1,14894,1,25705,1,25726,1,25757,1,25719,1,14956,
    1,25935,1,25964,1,143370,1,26083,1,26360,1,26185,1,15129,1,26257,
    1,15112,1,15076,1,20882,1,20885,1,26368,1,26268,1,32941,1,17369,
    1,26391,1,26395,1,26401,1,26462,1,26451,1,144323,1,15177,1,26618,
    1,26501,1,26706,1,26757,1,144493,1,26766,1,26655,1,26900,1,15261,
    1,26946,1,27043,1,27114,1,27304,1,145059,1,27355,1,15384,1,27425,
    1,145575,1,27476,1,15438,1,27506,1,27551,1,27578,1,27579,1,146061,
    1,138507,1,146170,1,27726,1,146620,1,27839,1,27853,1,27751,1,27926,
    1,27966,1,28023,1,27969,1,28009,1,28024,1,28037,1,146718,1,27956,
    1,28207,1,28270,1,15667,1,28363,1,28359,1,147153,1,28153,1,28526,
    1,147294,1,147342,1,28614,1,28729,1,28702,1,28699,1,15766,1,28746,
    1,28797,1,28791,1,28845,1,132389,1,28997,1,148067,1,29084,1,148395,
    1,29224,1,29237,1,29264,1,149000,1,29312,1,29333,1,149301,1,149524,
    1,29562,1,29579,1,16044,1,29605,1,16056,1,16056,1,29767,1,29788,
    1,29809,1,29829,1,29898,1,16155,1,29988,1,150582,1,30014,1,150674,
    1,30064,1,139679,1,30224,1,151457,1,151480,1,151620,1,16380,1,16392,
    1,30452,1,151795,1,151794,1,151833,1,151859,1,30494,1,30495,1,30495,
    1,30538,1,16441,1,30603,1,16454,1,16534,1,152605,1,30798,1,30860,
    1,30924,1,16611,1,153126,1,31062,1,153242,1,153285,1,31119,1,31211,
    1,16687,1,31296,1,31306,1,31311,1,153980,1,154279,1,154279,1,31470,
    1,16898,1,154539,1,31686,1,31689,1,16935,1,154752,1,31954,1,17056,
    1,31976,1,31971,1,32000,1,155526,1,32099,1,17153,1,32199,1,32258,
    1,32325,1,17204,1,156200,1,156231,1,17241,1,156377,1,32634,1,156478,
    1,32661,1,32762,1,32773,1,156890,1,156963,1,32864,1,157096,1,32880,
    1,144223,1,17365,1,32946,1,33027,1,17419,1,33086,1,23221,1,157607,
    1,157621,1,144275,1,144284,1,33281,1,33284,1,36766,1,17515,1,33425,
    1,33419,1,33437,1,21171,1,33457,1,33459,1,33469,1,33510,1,158524,
    1,33509,1,33565,1,33635,1,33709,1,33571,1,33725,1,33767,1,33879,
    1,33619,1,33738,1,33740,1,33756,1,158774,1,159083,1,158933,1,17707,
    1,34033,1,34035,1,34070,1,160714,1,34148,1,159532,1,17757,1,17761,
    1,159665,1,159954,1,17771,1,34384,1,34396,1,34407,1,34409,1,34473,
    1,34440,1,34574,1,34530,1,34681,1,34600,1,34667,1,34694,1,17879,
    1,34785,1,34817,1,17913,1,34912,1,34915,1,161383,1,35031,1,35038,
    1,17973,1,35066,1,13499,1,161966,1,162150,1,18110,1,18119,1,35488,
    1,35565,1,35722,1,35925,1,162984,1,36011,1,36033,1,36123,1,36215,
    1,163631,1,133124,1,36299,1,36284,1,36336,1,133342,1,36564,1,36664,
    1,165330,1,165357,1,37012,1,37105,1,37137,1,165678,1,37147,1,37432,
    1,37591,1,37592,1,37500,1,37881,1,37909,1,166906,1,38283,1,18837,
    1,38327,1,167287,1,18918,1,38595,1,23986,1,38691,1,168261,1,168474,
    1,19054,1,19062,1,38880,1,168970,1,19122,1,169110,1,38923,1,38923,
    1,38953,1,169398,1,39138,1,19251,1,39209,1,39335,1,39362,1,39422,
    1,19406,1,170800,1,39698,1,40000,1,40189,1,19662,1,19693,1,40295,
    1,172238,1,19704,1,172293,1,172558,1,172689,1,40635,1,19798,1,40697,
    1,40702,1,40709,1,40719,1,40726,1,40763,1,173568,
];
static DECOMPOSE_LOOKUP: &[(u32, u32)] = &[
    (0xC0, 1),
    (0xC1, 4),
    (0xC2, 7),
    (0xC3, 10),
    (0xC4, 13),
    (0xC5, 16),
    (0xC7, 19),
    (0xC8, 22),
    (0xC9, 25),
    (0xCA, 28),
    (0xCB, 31),
    (0xCC, 34),
    (0xCD, 37),
    (0xCE, 40),
    (0xCF, 43),
    (0xD1, 46),
    (0xD2, 49),
    (0xD3, 52),
    (0xD4, 55),
    (0xD5, 58),
    (0xD6, 61),
    (0xD9, 64),
    (0xDA, 67),
    (0xDB, 70),
    (0xDC, 73),
    (0xDD, 76),
    (0xE0, 79),
    (0xE1, 82),
    (0xE2, 85),
    (0xE3, 88),
    (0xE4, 91),
    (0xE5, 94),
    (0xE7, 97),
    (0xE8, 100),
    (0xE9, 103),
    (0xEA, 106),
    (0xEB, 109),
    (0xEC, 112),
    (0xED, 115),
    (0xEE, 118),
    (0xEF, 121),
    (0xF1, 124),
    (0xF2, 127),
    (0xF3, 130),
    (0xF4, 133),
    (0xF5, 136),
    (0xF6, 139),
    (0xF9, 142),
    (0xFA, 145),
    (0xFB, 148),
    (0xFC, 151),
    (0xFD, 154),
    (0xFF, 157),
    (0x100, 160),
    (0x101, 163),
    (0x102, 166),
    (0x103, 169),
    (0x104, 172),
    (0x105, 175),
    (0x106, 178),
    (0x107, 181),
    (0x108, 184),
    (0x109, 187),
    (0x10A, 190),
    (0x10B, 193),
    (0x10C, 196),
    (0x10D, 199),
    (0x10E, 202),
    (0x10F, 205),
    (0x112, 208),
    (0x113, 211),
    (0x114, 214),
    (0x115, 217),
    (0x116, 220),
    (0x117, 223),
    (0x118, 226),
    (0x119, 229),
    (0x11A, 232),
    (0x11B, 235),
    (0x11C, 238),
    (0x11D, 241),
    (0x11E, 244),
    (0x11F, 247),
    (0x120, 250),
    (0x121, 253),
    (0x122, 256),
    (0x123, 259),
    (0x124, 262),
    (0x125, 265),
    (0x128, 268),
    (0x129, 271),
    (0x12A, 274),
    (0x12B, 277),
    (0x12C, 280),
    (0x12D, 283),
    (0x12E, 286),
    (0x12F, 289),
    (0x130, 292),
    (0x134, 295),
    (0x135, 298),
    (0x136, 301),
    (0x137, 304),
    (0x139, 307),
    (0x13A, 310),
    (0x13B, 313),
    (0x13C, 316),
    (0x13D, 319),
    (0x13E, 322),
    (0x143, 325),
    (0x144, 328),
    (0x145, 331),
    (0x146, 334),
    (0x147, 337),
    (0x148, 340),
    (0x14C, 343),
    (0x14D, 346),
    (0x14E, 349),
    (0x14F, 352),
    (0x150, 355),
    (0x151, 358),
    (0x154, 361),
    (0x155, 364),
    (0x156, 367),
    (0x157, 370),
    (0x158, 373),
    (0x159, 376),
    (0x15A, 379),
    (0x15B, 382),
    (0x15C, 385),
    (0x15D, 388),
    (0x15E, 391),
    (0x15F, 394),
    (0x160, 397),
    (0x161, 400),
    (0x162, 403),
    (0x163, 406),
    (0x164, 409),
    (0x165, 412),
    (0x168, 415),
    (0x169, 418),
    (0x16A, 421),
    (0x16B, 424),
    (0x16C, 427),
    (0x16D, 430),
    (0x16E, 433),
    (0x16F, 436),
    (0x170, 439),
    (0x171, 442),
    (0x172, 445),
    (0x173, 448),
    (0x174, 451),
    (0x175, 454),
    (0x176, 457),
    (0x177, 460),
    (0x178, 463),
    (0x179, 466),
    (0x17A, 469),
    (0x17B, 472),
    (0x17C, 475),
    (0x17D, 478),
    (0x17E, 481),
    (0x1A0, 484),
    (0x1A1, 487),
    (0x1AF, 490),
    (0x1B0, 493),
    (0x1CD, 496),
    (0x1CE, 499),
    (0x1CF, 502),
    (0x1D0, 505),
    (0x1D1, 508),
    (0x1D2, 511),
    (0x1D3, 514),
    (0x1D4, 517),
    (0x1D5, 520),
    (0x1D6, 524),
    (0x1D7, 528),
    (0x1D8, 532),
    (0x1D9, 536),
    (0x1DA, 540),
    (0x1DB, 544),
    (0x1DC, 548),
    (0x1DE, 552),
    (0x1DF, 556),
    (0x1E0, 560),
    (0x1E1, 564),
    (0x1E2, 568),
    (0x1E3, 571),
    (0x1E6, 574),
    (0x1E7, 577),
    (0x1E8, 580),
    (0x1E9, 583),
    (0x1EA, 586),
    (0x1EB, 589),
    (0x1EC, 592),
    (0x1ED, 596),
    (0x1EE, 600),
    (0x1EF, 603),
    (0x1F0, 606),
    (0x1F4, 609),
    (0x1F5, 612),
    (0x1F8, 615),
    (0x1F9, 618),
    (0x1FA, 621),
    (0x1FB, 625),
    (0x1FC, 629),
    (0x1FD, 632),
    (0x1FE, 635),
    (0x1FF, 638),
    (0x200, 641),
    (0x201, 644),
    (0x202, 647),
    (0x203, 650),
    (0x204, 653),
    (0x205, 656),
    (0x206, 659),
    (0x207, 662),
    (0x208, 665),
    (0x209, 668),
    (0x20A, 671),
    (0x20B, 674),
    (0x20C, 677),
    (0x20D, 680),
    (0x20E, 683),
    (0x20F, 686),
    (0x210, 689),
    (0x211, 692),
    (0x212, 695),
    (0x213, 698),
    (0x214, 701),
    (0x215, 704),
    (0x216, 707),
    (0x217, 710),
    (0x218, 713),
    (0x219, 716),
    (0x21A, 719),
    (0x21B, 722),
    (0x21E, 725),
    (0x21F, 728),
    (0x226, 731),
    (0x227, 734),
    (0x228, 737),
    (0x229, 740),
    (0x22A, 743),
    (0x22B, 747),
    (0x22C, 751),
    (0x22D, 755),
    (0x22E, 759),
    (0x22F, 762),
    (0x230, 765),
    (0x231, 769),
    (0x232, 773),
    (0x233, 776),
    (0x340, 779),
    (0x341, 781),
    (0x343, 783),
    (0x344, 785),
    (0x374, 788),
    (0x37E, 790),
    (0x385, 792),
    (0x386, 795),
    (0x387, 798),
    (0x388, 800),
    (0x389, 803),
    (0x38A, 806),
    (0x38C, 809),
    (0x38E, 812),
    (0x38F, 815),
    (0x390, 818),
    (0x3AA, 822),
    (0x3AB, 825),
    (0x3AC, 828),
    (0x3AD, 831),
    (0x3AE, 834),
    (0x3AF, 837),
    (0x3B0, 840),
    (0x3CA, 844),
    (0x3CB, 847),
    (0x3CC, 850),
    (0x3CD, 853),
    (0x3CE, 856),
    (0x3D3, 859),
    (0x3D4, 862),
    (0x400, 865),
    (0x401, 868),
    (0x403, 871),
    (0x407, 874),
    (0x40C, 877),
    (0x40D, 880),
    (0x40E, 883),
    (0x419, 886),
    (0x439, 889),
    (0x450, 892),
    (0x451, 895),
    (0x453, 898),
    (0x457, 901),
    (0x45C, 904),
    (0x45D, 907),
    (0x45E, 910),
    (0x476, 913),
    (0x477, 916),
    (0x4C1, 919),
    (0x4C2, 922),
    (0x4D0, 925),
    (0x4D1, 928),
    (0x4D2, 931),
    (0x4D3, 934),
    (0x4D6, 937),
    (0x4D7, 940),
    (0x4DA, 943),
    (0x4DB, 946),
    (0x4DC, 949),
    (0x4DD, 952),
    (0x4DE, 955),
    (0x4DF, 958),
    (0x4E2, 961),
    (0x4E3, 964),
    (0x4E4, 967),
    (0x4E5, 970),
    (0x4E6, 973),
    (0x4E7, 976),
    (0x4EA, 979),
    (0x4EB, 982),
    (0x4EC, 985),
    (0x4ED, 988),
    (0x4EE, 991),
    (0x4EF, 994),
    (0x4F0, 997),
    (0x4F1, 1000),
    (0x4F2, 1003),
    (0x4F3, 1006),
    (0x4F4, 1009),
    (0x4F5, 1012),
    (0x4F8, 1015),
    (0x4F9, 1018),
    (0x622, 1021),
    (0x623, 1024),
    (0x624, 1027),
    (0x625, 1030),
    (0x626, 1033),
    (0x6C0, 1036),
    (0x6C2, 1039),
    (0x6D3, 1042),
    (0x929, 1045),
    (0x931, 1048),
    (0x934, 1051),
    (0x958, 1054),
    (0x959, 1057),
    (0x95A, 1060),
    (0x95B, 1063),
    (0x95C, 1066),
    (0x95D, 1069),
    (0x95E, 1072),
    (0x95F, 1075),
    (0x9CB, 1078),
    (0x9CC, 1081),
    (0x9DC, 1084),
    (0x9DD, 1087),
    (0x9DF, 1090),
    (0xA33, 1093),
    (0xA36, 1096),
    (0xA59, 1099),
    (0xA5A, 1102),
    (0xA5B, 1105),
    (0xA5E, 1108),
    (0xB48, 1111),
    (0xB4B, 1114),
    (0xB4C, 1117),
    (0xB5C, 1120),
    (0xB5D, 1123),
    (0xB94, 1126),
    (0xBCA, 1129),
    (0xBCB, 1132),
    (0xBCC, 1135),
    (0xC48, 1138),
    (0xCC0, 1141),
    (0xCC7, 1144),
    (0xCC8, 1147),
    (0xCCA, 1150),
    (0xCCB, 1153),
    (0xD4A, 1157),
    (0xD4B, 1160),
    (0xD4C, 1163),
    (0xDDA, 1166),
    (0xDDC, 1169),
    (0xDDD, 1172),
    (0xDDE, 1176),
    (0xF43, 1179),
    (0xF4D, 1182),
    (0xF52, 1185),
    (0xF57, 1188),
    (0xF5C, 1191),
    (0xF69, 1194),
    (0xF73, 1197),
    (0xF75, 1200),
    (0xF76, 1203),
    (0xF78, 1206),
    (0xF81, 1209),
    (0xF93, 1212),
    (0xF9D, 1215),
    (0xFA2, 1218),
    (0xFA7, 1221),
    (0xFAC, 1224),
    (0xFB9, 1227),
    (0x1026, 1230),
    (0x1B06, 1233),
    (0x1B08, 1236),
    (0x1B0A, 1239),
    (0x1B0C, 1242),
    (0x1B0E, 1245),
    (0x1B12, 1248),
    (0x1B3B, 1251),
    (0x1B3D, 1254),
    (0x1B40, 1257),
    (0x1B41, 1260),
    (0x1B43, 1263),
    (0x1E00, 1266),
    (0x1E01, 1269),
    (0x1E02, 1272),
    (0x1E03, 1275),
    (0x1E04, 1278),
    (0x1E05, 1281),
    (0x1E06, 1284),
    (0x1E07, 1287),
    (0x1E08, 1290),
    (0x1E09, 1294),
    (0x1E0A, 1298),
    (0x1E0B, 1301),
    (0x1E0C, 1304),
    (0x1E0D, 1307),
    (0x1E0E, 1310),
    (0x1E0F, 1313),
    (0x1E10, 1316),
    (0x1E11, 1319),
    (0x1E12, 1322),
    (0x1E13, 1325),
    (0x1E14, 1328),
    (0x1E15, 1332),
    (0x1E16, 1336),
    (0x1E17, 1340),
    (0x1E18, 1344),
    (0x1E19, 1347),
    (0x1E1A, 1350),
    (0x1E1B, 1353),
    (0x1E1C, 1356),
    (0x1E1D, 1360),
    (0x1E1E, 1364),
    (0x1E1F, 1367),
    (0x1E20, 1370),
    (0x1E21, 1373),
    (0x1E22, 1376),
    (0x1E23, 1379),
    (0x1E24, 1382),
    (0x1E25, 1385),
    (0x1E26, 1388),
    (0x1E27, 1391),
    (0x1E28, 1394),
    (0x1E29, 1397),
    (0x1E2A, 1400),
    (0x1E2B, 1403),
    (0x1E2C, 1406),
    (0x1E2D, 1409),
    (0x1E2E, 1412),
    (0x1E2F, 1416),
    (0x1E30, 1420),
    (0x1E31, 1423),
    (0x1E32, 1426),
    (0x1E33, 1429),
    (0x1E34, 1432),
    (0x1E35, 1435),
    (0x1E36, 1438),
    (0x1E37, 1441),
    (0x1E38, 1444),
    (0x1E39, 1448),
    (0x1E3A, 1452),
    (0x1E3B, 1455),
    (0x1E3C, 1458),
    (0x1E3D, 1461),
    (0x1E3E, 1464),
    (0x1E3F, 1467),
    (0x1E40, 1470),
    (0x1E41, 1473),
    (0x1E42, 1476),
    (0x1E43, 1479),
    (0x1E44, 1482),
    (0x1E45, 1485),
    (0x1E46, 1488),
    (0x1E47, 1491),
    (0x1E48, 1494),
    (0x1E49, 1497),
    (0x1E4A, 1500),
    (0x1E4B, 1503),
    (0x1E4C, 1506),
    (0x1E4D, 1510),
    (0x1E4E, 1514),
    (0x1E4F, 1518),
    (0x1E50, 1522),
    (0x1E51, 1526),
    (0x1E52, 1530),
    (0x1E53, 1534),
    (0x1E54, 1538),
    (0x1E55, 1541),
    (0x1E56, 1544),
    (0x1E57, 1547),
    (0x1E58, 1550),
    (0x1E59, 1553),
    (0x1E5A, 1556),
    (0x1E5B, 1559),
    (0x1E5C, 1562),
    (0x1E5D, 1566),
    (0x1E5E, 1570),
    (0x1E5F, 1573),
    (0x1E60, 1576),
    (0x1E61, 1579),
    (0x1E62, 1582),
    (0x1E63, 1585),
    (0x1E64, 1588),
    (0x1E65, 1592),
    (0x1E66, 1596),
    (0x1E67, 1600),
    (0x1E68, 1604),
    (0x1E69, 1608),
    (0x1E6A, 1612),
    (0x1E6B, 1615),
    (0x1E6C, 1618),
    (0x1E6D, 1621),
    (0x1E6E, 1624),
    (0x1E6F, 1627),
    (0x1E70, 1630),
    (0x1E71, 1633),
    (0x1E72, 1636),
    (0x1E73, 1639),
    (0x1E74, 1642),
    (0x1E75, 1645),
    (0x1E76, 1648),
    (0x1E77, 1651),
    (0x1E78, 1654),
    (0x1E79, 1658),
    (0x1E7A, 1662),
    (0x1E7B, 1666),
    (0x1E7C, 1670),
    (0x1E7D, 1673),
    (0x1E7E, 1676),
    (0x1E7F, 1679),
    (0x1E80, 1682),
    (0x1E81, 1685),
    (0x1E82, 1688),
    (0x1E83, 1691),
    (0x1E84, 1694),
    (0x1E85, 1697),
    (0x1E86, 1700),
    (0x1E87, 1703),
    (0x1E88, 1706),
    (0x1E89, 1709),
    (0x1E8A, 1712),
    (0x1E8B, 1715),
    (0x1E8C, 1718),
    (0x1E8D, 1721),
    (0x1E8E, 1724),
    (0x1E8F, 1727),
    (0x1E90, 1730),
    (0x1E91, 1733),
    (0x1E92, 1736),
    (0x1E93, 1739),
    (0x1E94, 1742),
    (0x1E95, 1745),
    (0x1E96, 1748),
    (0x1E97, 1751),
    (0x1E98, 1754),
    (0x1E99, 1757),
    (0x1E9B, 1760),
    (0x1EA0, 1763),
    (0x1EA1, 1766),
    (0x1EA2, 1769),
    (0x1EA3, 1772),
    (0x1EA4, 1775),
    (0x1EA5, 1779),
    (0x1EA6, 1783),
    (0x1EA7, 1787),
    (0x1EA8, 1791),
    (0x1EA9, 1795),
    (0x1EAA, 1799),
    (0x1EAB, 1803),
    (0x1EAC, 1807),
    (0x1EAD, 1811),
    (0x1EAE, 1815),
    (0x1EAF, 1819),
    (0x1EB0, 1823),
    (0x1EB1, 1827),
    (0x1EB2, 1831),
    (0x1EB3, 1835),
    (0x1EB4, 1839),
    (0x1EB5, 1843),
    (0x1EB6, 1847),
    (0x1EB7, 1851),
    (0x1EB8, 1855),
    (0x1EB9, 1858),
    (0x1EBA, 1861),
    (0x1EBB, 1864),
    (0x1EBC, 1867),
    (0x1EBD, 1870),
    (0x1EBE, 1873),
    (0x1EBF, 1877),
    (0x1EC0, 1881),
    (0x1EC1, 1885),
    (0x1EC2, 1889),
    (0x1EC3, 1893),
    (0x1EC4, 1897),
    (0x1EC5, 1901),
    (0x1EC6, 1905),
    (0x1EC7, 1909),
    (0x1EC8, 1913),
    (0x1EC9, 1916),
    (0x1ECA, 1919),
    (0x1ECB, 1922),
    (0x1ECC, 1925),
    (0x1ECD, 1928),
    (0x1ECE, 1931),
    (0x1ECF, 1934),
    (0x1ED0, 1937),
    (0x1ED1, 1941),
    (0x1ED2, 1945),
    (0x1ED3, 1949),
    (0x1ED4, 1953),
    (0x1ED5, 1957),
    (0x1ED6, 1961),
    (0x1ED7, 1965),
    (0x1ED8, 1969),
    (0x1ED9, 1973),
    (0x1EDA, 1977),
    (0x1EDB, 1981),
    (0x1EDC, 1985),
    (0x1EDD, 1989),
    (0x1EDE, 1993),
    (0x1EDF, 1997),
    (0x1EE0, 2001),
    (0x1EE1, 2005),
    (0x1EE2, 2009),
    (0x1EE3, 2013),
    (0x1EE4, 2017),
    (0x1EE5, 2020),
    (0x1EE6, 2023),
    (0x1EE7, 2026),
    (0x1EE8, 2029),
    (0x1EE9, 2033),
    (0x1EEA, 2037),
    (0x1EEB, 2041),
    (0x1EEC, 2045),
    (0x1EED, 2049),
    (0x1EEE, 2053),
    (0x1EEF, 2057),
    (0x1EF0, 2061),
    (0x1EF1, 2065),
    (0x1EF2, 2069),
    (0x1EF3, 2072),
    (0x1EF4, 2075),
    (0x1EF5, 2078),
    (0x1EF6, 2081),
    (0x1EF7, 2084),
    (0x1EF8, 2087),
    (0x1EF9, 2090),
    (0x1F00, 2093),
    (0x1F01, 2096),
    (0x1F02, 2099),
    (0x1F03, 2103),
    (0x1F04, 2107),
    (0x1F05, 2111),
    (0x1F06, 2115),
    (0x1F07, 2119),
    (0x1F08, 2123),
    (0x1F09, 2126),
    (0x1F0A, 2129),
    (0x1F0B, 2133),
    (0x1F0C, 2137),
    (0x1F0D, 2141),
    (0x1F0E, 2145),
    (0x1F0F, 2149),
    (0x1F10, 2153),
    (0x1F11, 2156),
    (0x1F12, 2159),
    (0x1F13, 2163),
    (0x1F14, 2167),
    (0x1F15, 2171),
    (0x1F18, 2175),
    (0x1F19, 2178),
    (0x1F1A, 2181),
    (0x1F1B, 2185),
    (0x1F1C, 2189),
    (0x1F1D, 2193),
    (0x1F20, 2197),
    (0x1F21, 2200),
    (0x1F22, 2203),
    (0x1F23, 2207),
    (0x1F24, 2211),
    (0x1F25, 2215),
    (0x1F26, 2219),
    (0x1F27, 2223),
    (0x1F28, 2227),
    (0x1F29, 2230),
    (0x1F2A, 2233),
    (0x1F2B, 2237),
    (0x1F2C, 2241),
    (0x1F2D, 2245),
    (0x1F2E, 2249),
    (0x1F2F, 2253),
    (0x1F30, 2257),
    (0x1F31, 2260),
    (0x1F32, 2263),
    (0x1F33, 2267),
    (0x1F34, 2271),
    (0x1F35, 2275),
    (0x1F36, 2279),
    (0x1F37, 2283),
    (0x1F38, 2287),
    (0x1F39, 2290),
    (0x1F3A, 2293),
    (0x1F3B, 2297),
    (0x1F3C, 2301),
    (0x1F3D, 2305),
    (0x1F3E, 2309),
    (0x1F3F, 2313),
    (0x1F40, 2317),
    (0x1F41, 2320),
    (0x1F42, 2323),
    (0x1F43, 2327),
    (0x1F44, 2331),
    (0x1F45, 2335),
    (0x1F48, 2339),
    (0x1F49, 2342),
    (0x1F4A, 2345),
    (0x1F4B, 2349),
    (0x1F4C, 2353),
    (0x1F4D, 2357),
    (0x1F50, 2361),
    (0x1F51, 2364),
    (0x1F52, 2367),
    (0x1F53, 2371),
    (0x1F54, 2375),
    (0x1F55, 2379),
    (0x1F56, 2383),
    (0x1F57, 2387),
    (0x1F59, 2391),
    (0x1F5B, 2394),
    (0x1F5D, 2398),
    (0x1F5F, 2402),
    (0x1F60, 2406),
    (0x1F61, 2409),
    (0x1F62, 2412),
    (0x1F63, 2416),
    (0x1F64, 2420),
    (0x1F65, 2424),
    (0x1F66, 2428),
    (0x1F67, 2432),
    (0x1F68, 2436),
    (0x1F69, 2439),
    (0x1F6A, 2442),
    (0x1F6B, 2446),
    (0x1F6C, 2450),
    (0x1F6D, 2454),
    (0x1F6E, 2458),
    (0x1F6F, 2462),
    (0x1F70, 2466),
    (0x1F71, 2469),
    (0x1F72, 2472),
    (0x1F73, 2475),
    (0x1F74, 2478),
    (0x1F75, 2481),
    (0x1F76, 2484),
    (0x1F77, 2487),
    (0x1F78, 2490),
    (0x1F79, 2493),
    (0x1F7A, 2496),
    (0x1F7B, 2499),
    (0x1F7C, 2502),
    (0x1F7D, 2505),
    (0x1F80, 2508),
    (0x1F81, 2512),
    (0x1F82, 2516),
    (0x1F83, 2521),
    (0x1F84, 2526),
    (0x1F85, 2531),
    (0x1F86, 2536),
    (0x1F87, 2541),
    (0x1F88, 2546),
    (0x1F89, 2550),
    (0x1F8A, 2554),
    (0x1F8B, 2559),
    (0x1F8C, 2564),
    (0x1F8D, 2569),
    (0x1F8E, 2574),
    (0x1F8F, 2579),
    (0x1F90, 2584),
    (0x1F91, 2588),
    (0x1F92, 2592),
    (0x1F93, 2597),
    (0x1F94, 2602),
    (0x1F95, 2607),
    (0x1F96, 2612),
    (0x1F97, 2617),
    (0x1F98, 2622),
    (0x1F99, 2626),
    (0x1F9A, 2630),
    (0x1F9B, 2635),
    (0x1F9C, 2640),
    (0x1F9D, 2645),
    (0x1F9E, 2650),
    (0x1F9F, 2655),
    (0x1FA0, 2660),
    (0x1FA1, 2664),
    (0x1FA2, 2668),
    (0x1FA3, 2673),
    (0x1FA4, 2678),
    (0x1FA5, 2683),
    (0x1FA6, 2688),
    (0x1FA7, 2693),
    (0x1FA8, 2698),
    (0x1FA9, 2702),
    (0x1FAA, 2706),
    (0x1FAB, 2711),
    (0x1FAC, 2716),
    (0x1FAD, 2721),
    (0x1FAE, 2726),
    (0x1FAF, 2731),
    (0x1FB0, 2736),
    (0x1FB1, 2739),
    (0x1FB2, 2742),
    (0x1FB3, 2746),
    (0x1FB4, 2749),
    (0x1FB6, 2753),
    (0x1FB7, 2756),
    (0x1FB8, 2760),
    (0x1FB9, 2763),
    (0x1FBA, 2766),
    (0x1FBB, 2769),
    (0x1FBC, 2772),
    (0x1FBE, 2775),
    (0x1FC1, 2777),
    (0x1FC2, 2780),
    (0x1FC3, 2784),
    (0x1FC4, 2787),
    (0x1FC6, 2791),
    (0x1FC7, 2794),
    (0x1FC8, 2798),
    (0x1FC9, 2801),
    (0x1FCA, 2804),
    (0x1FCB, 2807),
    (0x1FCC, 2810),
    (0x1FCD, 2813),
    (0x1FCE, 2816),
    (0x1FCF, 2819),
    (0x1FD0, 2822),
    (0x1FD1, 2825),
    (0x1FD2, 2828),
    (0x1FD3, 2832),
    (0x1FD6, 2836),
    (0x1FD7, 2839),
    (0x1FD8, 2843),
    (0x1FD9, 2846),
    (0x1FDA, 2849),
    (0x1FDB, 2852),
    (0x1FDD, 2855),
    (0x1FDE, 2858),
    (0x1FDF, 2861),
    (0x1FE0, 2864),
    (0x1FE1, 2867),
    (0x1FE2, 2870),
    (0x1FE3, 2874),
    (0x1FE4, 2878),
    (0x1FE5, 2881),
    (0x1FE6, 2884),
    (0x1FE7, 2887),
    (0x1FE8, 2891),
    (0x1FE9, 2894),
    (0x1FEA, 2897),
    (0x1FEB, 2900),
    (0x1FEC, 2903),
    (0x1FED, 2906),
    (0x1FEE, 2909),
    (0x1FEF, 2912),
    (0x1FF2, 2914),
    (0x1FF3, 2918),
    (0x1FF4, 2921),
    (0x1FF6, 2925),
    (0x1FF7, 2928),
    (0x1FF8, 2932),
    (0x1FF9, 2935),
    (0x1FFA, 2938),
    (0x1FFB, 2941),
    (0x1FFC, 2944),
    (0x1FFD, 2947),
    (0x2000, 2949),
    (0x2001, 2951),
    (0x2126, 2953),
    (0x212A, 2955),
    (0x212B, 2957),
    (0x219A, 2960),
    (0x219B, 2963),
    (0x21AE, 2966),
    (0x21CD, 2969),
    (0x21CE, 2972),
    (0x21CF, 2975),
    (0x2204, 2978),
    (0x2209, 2981),
    (0x220C, 2984),
    (0x2224, 2987),
    (0x2226, 2990),
    (0x2241, 2993),
    (0x2244, 2996),
    (0x2247, 2999),
    (0x2249, 3002),
    (0x2260, 3005),
    (0x2262, 3008),
    (0x226D, 3011),
    (0x226E, 3014),
    (0x226F, 3017),
    (0x2270, 3020),
    (0x2271, 3023),
    (0x2274, 3026),
    (0x2275, 3029),
    (0x2278, 3032),
    (0x2279, 3035),
    (0x2280, 3038),
    (0x2281, 3041),
    (0x2284, 3044),
    (0x2285, 3047),
    (0x2288, 3050),
    (0x2289, 3053),
    (0x22AC, 3056),
    (0x22AD, 3059),
    (0x22AE, 3062),
    (0x22AF, 3065),
    (0x22E0, 3068),
    (0x22E1, 3071),
    (0x22E2, 3074),
    (0x22E3, 3077),
    (0x22EA, 3080),
    (0x22EB, 3083),
    (0x22EC, 3086),
    (0x22ED, 3089),
    (0x2329, 3092),
    (0x232A, 3094),
    (0x2ADC, 3096),
    (0x304C, 3099),
    (0x304E, 3102),
    (0x3050, 3105),
    (0x3052, 3108),
    (0x3054, 3111),
    (0x3056, 3114),
    (0x3058, 3117),
    (0x305A, 3120),
    (0x305C, 3123),
    (0x305E, 3126),
    (0x3060, 3129),
    (0x3062, 3132),
    (0x3065, 3135),
    (0x3067, 3138),
    (0x3069, 3141),
    (0x3070, 3144),
    (0x3071, 3147),
    (0x3073, 3150),
    (0x3074, 3153),
    (0x3076, 3156),
    (0x3077, 3159),
    (0x3079, 3162),
    (0x307A, 3165),
    (0x307C, 3168),
    (0x307D, 3171),
    (0x3094, 3174),
    (0x309E, 3177),
    (0x30AC, 3180),
    (0x30AE, 3183),
    (0x30B0, 3186),
    (0x30B2, 3189),
    (0x30B4, 3192),
    (0x30B6, 3195),
    (0x30B8, 3198),
    (0x30BA, 3201),
    (0x30BC, 3204),
    (0x30BE, 3207),
    (0x30C0, 3210),
    (0x30C2, 3213),
    (0x30C5, 3216),
    (0x30C7, 3219),
    (0x30C9, 3222),
    (0x30D0, 3225),
    (0x30D1, 3228),
    (0x30D3, 3231),
    (0x30D4, 3234),
    (0x30D6, 3237),
    (0x30D7, 3240),
    (0x30D9, 3243),
    (0x30DA, 3246),
    (0x30DC, 3249),
    (0x30DD, 3252),
    (0x30F4, 3255),
    (0x30F7, 3258),
    (0x30F8, 3261),
    (0x30F9, 3264),
    (0x30FA, 3267),
    (0x30FE, 3270),
    (0xF900, 3273),
    (0xF901, 3275),
    (0xF902, 3277),
    (0xF903, 3279),
    (0xF904, 3281),
    (0xF905, 3283),
    (0xF906, 3285),
    (0xF907, 3287),
    (0xF908, 3289),
    (0xF909, 3291),
    (0xF90A, 3293),
    (0xF90B, 3295),
    (0xF90C, 3297),
    (0xF90D, 3299),
    (0xF90E, 3301),
    (0xF90F, 3303),
    (0xF910, 3305),
    (0xF911, 3307),
    (0xF912, 3309),
    (0xF913, 3311),
    (0xF914, 3313),
    (0xF915, 3315),
    (0xF916, 3317),
    (0xF917, 3319),
    (0xF918, 3321),
    (0xF919, 3323),
    (0xF91A, 3325),
    (0xF91B, 3327),
    (0xF91C, 3329),
    (0xF91D, 3331),
    (0xF91E, 3333),
    (0xF91F, 3335),
    (0xF920, 3337),
    (0xF921, 3339),
    (0xF922, 3341),
    (0xF923, 3343),
    (0xF924, 3345),
    (0xF925, 3347),
    (0xF926, 3349),
    (0xF927, 3351),
    (0xF928, 3353),
    (0xF929, 3355),
    (0xF92A, 3357),
    (0xF92B, 3359),
    (0xF92C, 3361),
    (0xF92D, 3363),
    (0xF92E, 3365),
    (0xF92F, 3367),
    (0xF930, 3369),
    (0xF931, 3371),
    (0xF932, 3373),
    (0xF933, 3375),
    (0xF934, 3377),
    (0xF935, 3379),
    (0xF936, 3381),
    (0xF937, 3383),
    (0xF938, 3385),
    (0xF939, 3387),
    (0xF93A, 3389),
    (0xF93B, 3391),
    (0xF93C, 3393),
    (0xF93D, 3395),
    (0xF93E, 3397),
    (0xF93F, 3399),
    (0xF940, 3401),
    (0xF941, 3403),
    (0xF942, 3405),
    (0xF943, 3407),
    (0xF944, 3409),
    (0xF945, 3411),
    (0xF946, 3413),
    (0xF947, 3415),
    (0xF948, 3417),
    (0xF949, 3419),
    (0xF94A, 3421),
    (0xF94B, 3423),
    (0xF94C, 3425),
    (0xF94D, 3427),
    (0xF94E, 3429),
    (0xF94F, 3431),
    (0xF950, 3433),
    (0xF951, 3435),
    (0xF952, 3437),
    (0xF953, 3439),
    (0xF954, 3441),
    (0xF955, 3443),
    (0xF956, 3445),
    (0xF957, 3447),
    (0xF958, 3449),
    (0xF959, 3451),
    (0xF95A, 3453),
    (0xF95B, 3455),
    (0xF95C, 3457),
    (0xF95D, 3459),
    (0xF95E, 3461),
    (0xF95F, 3463),
    (0xF960, 3465),
    (0xF961, 3467),
    (0xF962, 3469),
    (0xF963, 3471),
    (0xF964, 3473),
    (0xF965, 3475),
    (0xF966, 3477),
    (0xF967, 3479),
    (0xF968, 3481),
    (0xF969, 3483),
    (0xF96A, 3485),
    (0xF96B, 3487),
    (0xF96C, 3489),
    (0xF96D, 3491),
    (0xF96E, 3493),
    (0xF96F, 3495),
    (0xF970, 3497),
    (0xF971, 3499),
    (0xF972, 3501),
    (0xF973, 3503),
    (0xF974, 3505),
    (0xF975, 3507),
    (0xF976, 3509),
    (0xF977, 3511),
    (0xF978, 3513),
    (0xF979, 3515),
    (0xF97A, 3517),
    (0xF97B, 3519),
    (0xF97C, 3521),
    (0xF97D, 3523),
    (0xF97E, 3525),
    (0xF97F, 3527),
    (0xF980, 3529),
    (0xF981, 3531),
    (0xF982, 3533),
    (0xF983, 3535),
    (0xF984, 3537),
    (0xF985, 3539),
    (0xF986, 3541),
    (0xF987, 3543),
    (0xF988, 3545),
    (0xF989, 3547),
    (0xF98A, 3549),
    (0xF98B, 3551),
    (0xF98C, 3553),
    (0xF98D, 3555),
    (0xF98E, 3557),
    (0xF98F, 3559),
    (0xF990, 3561),
    (0xF991, 3563),
    (0xF992, 3565),
    (0xF993, 3567),
    (0xF994, 3569),
    (0xF995, 3571),
    (0xF996, 3573),
    (0xF997, 3575),
    (0xF998, 3577),
    (0xF999, 3579),
    (0xF99A, 3581),
    (0xF99B, 3583),
    (0xF99C, 3585),
    (0xF99D, 3587),
    (0xF99E, 3589),
    (0xF99F, 3591),
    (0xF9A0, 3593),
    (0xF9A1, 3595),
    (0xF9A2, 3597),
    (0xF9A3, 3599),
    (0xF9A4, 3601),
    (0xF9A5, 3603),
    (0xF9A6, 3605),
    (0xF9A7, 3607),
    (0xF9A8, 3609),
    (0xF9A9, 3611),
    (0xF9AA, 3613),
    (0xF9AB, 3615),
    (0xF9AC, 3617),
    (0xF9AD, 3619),
    (0xF9AE, 3621),
    (0xF9AF, 3623),
    (0xF9B0, 3625),
    (0xF9B1, 3627),
    (0xF9B2, 3629),
    (0xF9B3, 3631),
    (0xF9B4, 3633),
    (0xF9B5, 3635),
    (0xF9B6, 3637),
    (0xF9B7, 3639),
    (0xF9B8, 3641),
    (0xF9B9, 3643),
    (0xF9BA, 3645),
    (0xF9BB, 3647),
    (0xF9BC, 3649),
    (0xF9BD, 3651),
    (0xF9BE, 3653),
    (0xF9BF, 3655),
    (0xF9C0, 3657),
    (0xF9C1, 3659),
    (0xF9C2, 3661),
    (0xF9C3, 3663),
    (0xF9C4, 3665),
    (0xF9C5, 3667),
    (0xF9C6, 3669),
    (0xF9C7, 3671),
    (0xF9C8, 3673),
    (0xF9C9, 3675),
    (0xF9CA, 3677),
    (0xF9CB, 3679),
    (0xF9CC, 3681),
    (0xF9CD, 3683),
    (0xF9CE, 3685),
    (0xF9CF, 3687),
    (0xF9D0, 3689),
    (0xF9D1, 3691),
    (0xF9D2, 3693),
    (0xF9D3, 3695),
    (0xF9D4, 3697),
    (0xF9D5, 3699),
    (0xF9D6, 3701),
    (0xF9D7, 3703),
    (0xF9D8, 3705),
    (0xF9D9, 3707),
    (0xF9DA, 3709),
    (0xF9DB, 3711),
    (0xF9DC, 3713),
    (0xF9DD, 3715),
    (0xF9DE, 3717),
    (0xF9DF, 3719),
    (0xF9E0, 3721),
    (0xF9E1, 3723),
    (0xF9E2, 3725),
    (0xF9E3, 3727),
    (0xF9E4, 3729),
    (0xF9E5, 3731),
    (0xF9E6, 3733),
    (0xF9E7, 3735),
    (0xF9E8, 3737),
    (0xF9E9, 3739),
    (0xF9EA, 3741),
    (0xF9EB, 3743),
    (0xF9EC, 3745),
    (0xF9ED, 3747),
    (0xF9EE, 3749),
    (0xF9EF, 3751),
    (0xF9F0, 3753),
    (0xF9F1, 3755),
    (0xF9F2, 3757),
    (0xF9F3, 3759),
    (0xF9F4, 3761),
    (0xF9F5, 3763),
    (0xF9F6, 3765),
    (0xF9F7, 3767),
    (0xF9F8, 3769),
    (0xF9F9, 3771),
    (0xF9FA, 3773),
    (0xF9FB, 3775),
    (0xF9FC, 3777),
    (0xF9FD, 3779),
    (0xF9FE, 3781),
    (0xF9FF, 3783),
    (0xFA00, 3785),
    (0xFA01, 3787),
    (0xFA02, 3789),
    (0xFA03, 3791),
    (0xFA04, 3793),
    (0xFA05, 3795),
    (0xFA06, 3797),
    (0xFA07, 3799),
    (0xFA08, 3801),
    (0xFA09, 3803),
    (0xFA0A, 3805),
    (0xFA0B, 3807),
    (0xFA0C, 3809),
    (0xFA0D, 3811),
    (0xFA10, 3813),
    (0xFA12, 3815),
    (0xFA15, 3817),
    (0xFA16, 3819),
    (0xFA17, 3821),
    (0xFA18, 3823),
    (0xFA19, 3825),
    (0xFA1A, 3827),
    (0xFA1B, 3829),
    (0xFA1C, 3831),
    (0xFA1D, 3833),
    (0xFA1E, 3835),
    (0xFA20, 3837),
    (0xFA22, 3839),
    (0xFA25, 3841),
    (0xFA26, 3843),
    (0xFA2A, 3845),
    (0xFA2B, 3847),
    (0xFA2C, 3849),
    (0xFA2D, 3851),
    (0xFA2E, 3853),
    (0xFA2F, 3855),
    (0xFA30, 3857),
    (0xFA31, 3859),
    (0xFA32, 3861),
    (0xFA33, 3863),
    (0xFA34, 3865),
    (0xFA35, 3867),
    (0xFA36, 3869),
    (0xFA37, 3871),
    (0xFA38, 3873),
    (0xFA39, 3875),
    (0xFA3A, 3877),
    (0xFA3B, 3879),
    (0xFA3C, 3881),
    (0xFA3D, 3883),
    (0xFA3E, 3885),
    (0xFA3F, 3887),
    (0xFA40, 3889),
    (0xFA41, 3891),
    (0xFA42, 3893),
    (0xFA43, 3895),
    (0xFA44, 3897),
    (0xFA45, 3899),
    (0xFA46, 3901),
    (0xFA47, 3903),
    (0xFA48, 3905),
    (0xFA49, 3907),
    (0xFA4A, 3909),
    (0xFA4B, 3911),
    (0xFA4C, 3913),
    (0xFA4D, 3915),
    (0xFA4E, 3917),
    (0xFA4F, 3919),
    (0xFA50, 3921),
    (0xFA51, 3923),
    (0xFA52, 3925),
    (0xFA53, 3927),
    (0xFA54, 3929),
    (0xFA55, 3931),
    (0xFA56, 3933),
    (0xFA57, 3935),
    (0xFA58, 3937),
    (0xFA59, 3939),
    (0xFA5A, 3941),
    (0xFA5B, 3943),
    (0xFA5C, 3945),
    (0xFA5D, 3947),
    (0xFA5E, 3949),
    (0xFA5F, 3951),
    (0xFA60, 3953),
    (0xFA61, 3955),
    (0xFA62, 3957),
    (0xFA63, 3959),
    (0xFA64, 3961),
    (0xFA65, 3963),
    (0xFA66, 3965),
    (0xFA67, 3967),
    (0xFA68, 3969),
    (0xFA69, 3971),
    (0xFA6A, 3973),
    (0xFA6B, 3975),
    (0xFA6C, 3977),
    (0xFA6D, 3979),
    (0xFA70, 3981),
    (0xFA71, 3983),
    (0xFA72, 3985),
    (0xFA73, 3987),
    (0xFA74, 3989),
    (0xFA75, 3991),
    (0xFA76, 3993),
    (0xFA77, 3995),
    (0xFA78, 3997),
    (0xFA79, 3999),
    (0xFA7A, 4001),
    (0xFA7B, 4003),
    (0xFA7C, 4005),
    (0xFA7D, 4007),
    (0xFA7E, 4009),
    (0xFA7F, 4011),
    (0xFA80, 4013),
    (0xFA81, 4015),
    (0xFA82, 4017),
    (0xFA83, 4019),
    (0xFA84, 4021),
    (0xFA85, 4023),
    (0xFA86, 4025),
    (0xFA87, 4027),
    (0xFA88, 4029),
    (0xFA89, 4031),
    (0xFA8A, 4033),
    (0xFA8B, 4035),
    (0xFA8C, 4037),
    (0xFA8D, 4039),
    (0xFA8E, 4041),
    (0xFA8F, 4043),
    (0xFA90, 4045),
    (0xFA91, 4047),
    (0xFA92, 4049),
    (0xFA93, 4051),
    (0xFA94, 4053),
    (0xFA95, 4055),
    (0xFA96, 4057),
    (0xFA97, 4059),
    (0xFA98, 4061),
    (0xFA99, 4063),
    (0xFA9A, 4065),
    (0xFA9B, 4067),
    (0xFA9C, 4069),
    (0xFA9D, 4071),
    (0xFA9E, 4073),
    (0xFA9F, 4075),
    (0xFAA0, 4077),
    (0xFAA1, 4079),
    (0xFAA2, 4081),
    (0xFAA3, 4083),
    (0xFAA4, 4085),
    (0xFAA5, 4087),
    (0xFAA6, 4089),
    (0xFAA7, 4091),
    (0xFAA8, 4093),
    (0xFAA9, 4095),
    (0xFAAA, 4097),
    (0xFAAB, 4099),
    (0xFAAC, 4101),
    (0xFAAD, 4103),
    (0xFAAE, 4105),
    (0xFAAF, 4107),
    (0xFAB0, 4109),
    (0xFAB1, 4111),
    (0xFAB2, 4113),
    (0xFAB3, 4115),
    (0xFAB4, 4117),
    (0xFAB5, 4119),
    (0xFAB6, 4121),
    (0xFAB7, 4123),
    (0xFAB8, 4125),
    (0xFAB9, 4127),
    (0xFABA, 4129),
    (0xFABB, 4131),
    (0xFABC, 4133),
    (0xFABD, 4135),
    (0xFABE, 4137),
    (0xFABF, 4139),
    (0xFAC0, 4141),
    (0xFAC1, 4143),
    (0xFAC2, 4145),
    (0xFAC3, 4147),
    (0xFAC4, 4149),
    (0xFAC5, 4151),
    (0xFAC6, 4153),
    (0xFAC7, 4155),
    (0xFAC8, 4157),
    (0xFAC9, 4159),
    (0xFACA, 4161),
    (0xFACB, 4163),
    (0xFACC, 4165),
    (0xFACD, 4167),
    (0xFACE, 4169),
    (0xFACF, 4171),
    (0xFAD0, 4173),
    (0xFAD1, 4175),
    (0xFAD2, 4177),
    (0xFAD3, 4179),
    (0xFAD4, 4181),
    (0xFAD5, 4183),
    (0xFAD6, 4185),
    (0xFAD7, 4187),
    (0xFAD8, 4189),
    (0xFAD9, 4191),
    (0xFB1D, 4193),
    (0xFB1F, 4196),
    (0xFB2A, 4199),
    (0xFB2B, 4202),
    (0xFB2C, 4205),
    (0xFB2D, 4209),
    (0xFB2E, 4213),
    (0xFB2F, 4216),
    (0xFB30, 4219),
    (0xFB31, 4222),
    (0xFB32, 4225),
    (0xFB33, 4228),
    (0xFB34, 4231),
    (0xFB35, 4234),
    (0xFB36, 4237),
    (0xFB38, 4240),
    (0xFB39, 4243),
    (0xFB3A, 4246),
    (0xFB3B, 4249),
    (0xFB3C, 4252),
    (0xFB3E, 4255),
    (0xFB40, 4258),
    (0xFB41, 4261),
    (0xFB43, 4264),
    (0xFB44, 4267),
    (0xFB46, 4270),
    (0xFB47, 4273),
    (0xFB48, 4276),
    (0xFB49, 4279),
    (0xFB4A, 4282),
    (0xFB4B, 4285),
    (0xFB4C, 4288),
    (0xFB4D, 4291),
    (0xFB4E, 4294),
    (0x1109A, 4297),
    (0x1109C, 4300),
    (0x110AB, 4303),
    (0x1112E, 4306),
    (0x1112F, 4309),
    (0x1134B, 4312),
    (0x1134C, 4315),
    (0x114BB, 4318),
    (0x114BC, 4321),
    (0x114BE, 4324),
    (0x115BA, 4327),
    (0x115BB, 4330),
    (0x11938, 4333),
    (0x1D15E, 4336),
    (0x1D15F, 4339),
    (0x1D160, 4342),
    (0x1D161, 4346),
    (0x1D162, 4350),
    (0x1D163, 4354),
    (0x1D164, 4358),
    (0x1D1BB, 4362),
    (0x1D1BC, 4365),
    (0x1D1BD, 4368),
    (0x1D1BE, 4372),
    (0x1D1BF, 4376),
    (0x1D1C0, 4380),
    (0x2F800, 4384),
    (0x2F801, 4386),
    (0x2F802, 4388),
    (0x2F803, 4390),
    (0x2F804, 4392),
    (0x2F805, 4394),
    (0x2F806, 4396),
    (0x2F807, 4398),
    (0x2F808, 4400),
    (0x2F809, 4402),
    (0x2F80A, 4404),
    (0x2F80B, 4406),
    (0x2F80C, 4408),
    (0x2F80D, 4410),
    (0x2F80E, 4412),
    (0x2F80F, 4414),
    (0x2F810, 4416),
    (0x2F811, 4418),
    (0x2F812, 4420),
    (0x2F813, 4422),
    (0x2F814, 4424),
    (0x2F815, 4426),
    (0x2F816, 4428),
    (0x2F817, 4430),
    (0x2F818, 4432),
    (0x2F819, 4434),
    (0x2F81A, 4436),
    (0x2F81B, 4438),
    (0x2F81C, 4440),
    (0x2F81D, 4442),
    (0x2F81E, 4444),
    (0x2F81F, 4446),
    (0x2F820, 4448),
    (0x2F821, 4450),
    (0x2F822, 4452),
    (0x2F823, 4454),
    (0x2F824, 4456),
    (0x2F825, 4458),
    (0x2F826, 4460),
    (0x2F827, 4462),
    (0x2F828, 4464),
    (0x2F829, 4466),
    (0x2F82A, 4468),
    (0x2F82B, 4470),
    (0x2F82C, 4472),
    (0x2F82D, 4474),
    (0x2F82E, 4476),
    (0x2F82F, 4478),
    (0x2F830, 4480),
    (0x2F831, 4482),
    (0x2F832, 4484),
    (0x2F833, 4486),
    (0x2F834, 4488),
    (0x2F835, 4490),
    (0x2F836, 4492),
    (0x2F837, 4494),
    (0x2F838, 4496),
    (0x2F839, 4498),
    (0x2F83A, 4500),
    (0x2F83B, 4502),
    (0x2F83C, 4504),
    (0x2F83D, 4506),
    (0x2F83E, 4508),
    (0x2F83F, 4510),
    (0x2F840, 4512),
    (0x2F841, 4514),
    (0x2F842, 4516),
    (0x2F843, 4518),
    (0x2F844, 4520),
    (0x2F845, 4522),
    (0x2F846, 4524),
    (0x2F847, 4526),
    (0x2F848, 4528),
    (0x2F849, 4530),
    (0x2F84A, 4532),
    (0x2F84B, 4534),
    (0x2F84C, 4536),
    (0x2F84D, 4538),
    (0x2F84E, 4540),
    (0x2F84F, 4542),
    (0x2F850, 4544),
    (0x2F851, 4546),
    (0x2F852, 4548),
    (0x2F853, 4550),
    (0x2F854, 4552),
    (0x2F855, 4554),
    (0x2F856, 4556),
    (0x2F857, 4558),
    (0x2F858, 4560),
    (0x2F859, 4562),
    (0x2F85A, 4564),
    (0x2F85B, 4566),
    (0x2F85C, 4568),
    (0x2F85D, 4570),
    (0x2F85E, 4572),
    (0x2F85F, 4574),
    (0x2F860, 4576),
    (0x2F861, 4578),
    (0x2F862, 4580),
    (0x2F863, 4582),
    (0x2F864, 4584),
    (0x2F865, 4586),
    (0x2F866, 4588),
    (0x2F867, 4590),
    (0x2F868, 4592),
    (0x2F869, 4594),
    (0x2F86A, 4596),
    (0x2F86B, 4598),
    (0x2F86C, 4600),
    (0x2F86D, 4602),
    (0x2F86E, 4604),
    (0x2F86F, 4606),
    (0x2F870, 4608),
    (0x2F871, 4610),
    (0x2F872, 4612),
    (0x2F873, 4614),
    (0x2F874, 4616),
    (0x2F875, 4618),
    (0x2F876, 4620),
    (0x2F877, 4622),
    (0x2F878, 4624),
    (0x2F879, 4626),
    (0x2F87A, 4628),
    (0x2F87B, 4630),
    (0x2F87C, 4632),
    (0x2F87D, 4634),
    (0x2F87E, 4636),
    (0x2F87F, 4638),
    (0x2F880, 4640),
    (0x2F881, 4642),
    (0x2F882, 4644),
    (0x2F883, 4646),
    (0x2F884, 4648),
    (0x2F885, 4650),
    (0x2F886, 4652),
    (0x2F887, 4654),
    (0x2F888, 4656),
    (0x2F889, 4658),
    (0x2F88A, 4660),
    (0x2F88B, 4662),
    (0x2F88C, 4664),
    (0x2F88D, 4666),
    (0x2F88E, 4668),
    (0x2F88F, 4670),
    (0x2F890, 4672),
    (0x2F891, 4674),
    (0x2F892, 4676),
    (0x2F893, 4678),
    (0x2F894, 4680),
    (0x2F895, 4682),
    (0x2F896, 4684),
    (0x2F897, 4686),
    (0x2F898, 4688),
    (0x2F899, 4690),
    (0x2F89A, 4692),
    (0x2F89B, 4694),
    (0x2F89C, 4696),
    (0x2F89D, 4698),
    (0x2F89E, 4700),
    (0x2F89F, 4702),
    (0x2F8A0, 4704),
    (0x2F8A1, 4706),
    (0x2F8A2, 4708),
    (0x2F8A3, 4710),
    (0x2F8A4, 4712),
    (0x2F8A5, 4714),
    (0x2F8A6, 4716),
    (0x2F8A7, 4718),
    (0x2F8A8, 4720),
    (0x2F8A9, 4722),
    (0x2F8AA, 4724),
    (0x2F8AB, 4726),
    (0x2F8AC, 4728),
    (0x2F8AD, 4730),
    (0x2F8AE, 4732),
    (0x2F8AF, 4734),
    (0x2F8B0, 4736),
    (0x2F8B1, 4738),
    (0x2F8B2, 4740),
    (0x2F8B3, 4742),
    (0x2F8B4, 4744),
    (0x2F8B5, 4746),
    (0x2F8B6, 4748),
    (0x2F8B7, 4750),
    (0x2F8B8, 4752),
    (0x2F8B9, 4754),
    (0x2F8BA, 4756),
    (0x2F8BB, 4758),
    (0x2F8BC, 4760),
    (0x2F8BD, 4762),
    (0x2F8BE, 4764),
    (0x2F8BF, 4766),
    (0x2F8C0, 4768),
    (0x2F8C1, 4770),
    (0x2F8C2, 4772),
    (0x2F8C3, 4774),
    (0x2F8C4, 4776),
    (0x2F8C5, 4778),
    (0x2F8C6, 4780),
    (0x2F8C7, 4782),
    (0x2F8C8, 4784),
    (0x2F8C9, 4786),
    (0x2F8CA, 4788),
    (0x2F8CB, 4790),
    (0x2F8CC, 4792),
    (0x2F8CD, 4794),
    (0x2F8CE, 4796),
    (0x2F8CF, 4798),
    (0x2F8D0, 4800),
    (0x2F8D1, 4802),
    (0x2F8D2, 4804),
    (0x2F8D3, 4806),
    (0x2F8D4, 4808),
    (0x2F8D5, 4810),
    (0x2F8D6, 4812),
    (0x2F8D7, 4814),
    (0x2F8D8, 4816),
    (0x2F8D9, 4818),
    (0x2F8DA, 4820),
    (0x2F8DB, 4822),
    (0x2F8DC, 4824),
    (0x2F8DD, 4826),
    (0x2F8DE, 4828),
    (0x2F8DF, 4830),
    (0x2F8E0, 4832),
    (0x2F8E1, 4834),
    (0x2F8E2, 4836),
    (0x2F8E3, 4838),
    (0x2F8E4, 4840),
    (0x2F8E5, 4842),
    (0x2F8E6, 4844),
    (0x2F8E7, 4846),
    (0x2F8E8, 4848),
    (0x2F8E9, 4850),
    (0x2F8EA, 4852),
    (0x2F8EB, 4854),
    (0x2F8EC, 4856),
    (0x2F8ED, 4858),
    (0x2F8EE, 4860),
    (0x2F8EF, 4862),
    (0x2F8F0, 4864),
    (0x2F8F1, 4866),
    (0x2F8F2, 4868),
    (0x2F8F3, 4870),
    (0x2F8F4, 4872),
    (0x2F8F5, 4874),
    (0x2F8F6, 4876),
    (0x2F8F7, 4878),
    (0x2F8F8, 4880),
    (0x2F8F9, 4882),
    (0x2F8FA, 4884),
    (0x2F8FB, 4886),
    (0x2F8FC, 4888),
    (0x2F8FD, 4890),
    (0x2F8FE, 4892),
    (0x2F8FF, 4894),
    (0x2F900, 4896),
    (0x2F901, 4898),
    (0x2F902, 4900),
    (0x2F903, 4902),
    (0x2F904, 4904),
    (0x2F905, 4906),
    (0x2F906, 4908),
    (0x2F907, 4910),
    (0x2F908, 4912),
    (0x2F909, 4914),
    (0x2F90A, 4916),
    (0x2F90B, 4918),
    (0x2F90C, 4920),
    (0x2F90D, 4922),
    (0x2F90E, 4924),
    (0x2F90F, 4926),
    (0x2F910, 4928),
    (0x2F911, 4930),
    (0x2F912, 4932),
    (0x2F913, 4934),
    (0x2F914, 4936),
    (0x2F915, 4938),
    (0x2F916, 4940),
    (0x2F917, 4942),
    (0x2F918, 4944),
    (0x2F919, 4946),
    (0x2F91A, 4948),
    (0x2F91B, 4950),
    (0x2F91C, 4952),
    (0x2F91D, 4954),
    (0x2F91E, 4956),
    (0x2F91F, 4958),
    (0x2F920, 4960),
    (0x2F921, 4962),
    (0x2F922, 4964),
    (0x2F923, 4966),
    (0x2F924, 4968),
    (0x2F925, 4970),
    (0x2F926, 4972),
    (0x2F927, 4974),
    (0x2F928, 4976),
    (0x2F929, 4978),
    (0x2F92A, 4980),
    (0x2F92B, 4982),
    (0x2F92C, 4984),
    (0x2F92D, 4986),
    (0x2F92E, 4988),
    (0x2F92F, 4990),
    (0x2F930, 4992),
    (0x2F931, 4994),
    (0x2F932, 4996),
    (0x2F933, 4998),
    (0x2F934, 5000),
    (0x2F935, 5002),
    (0x2F936, 5004),
    (0x2F937, 5006),
    (0x2F938, 5008),
    (0x2F939, 5010),
    (0x2F93A, 5012),
    (0x2F93B, 5014),
    (0x2F93C, 5016),
    (0x2F93D, 5018),
    (0x2F93E, 5020),
    (0x2F93F, 5022),
    (0x2F940, 5024),
    (0x2F941, 5026),
    (0x2F942, 5028),
    (0x2F943, 5030),
    (0x2F944, 5032),
    (0x2F945, 5034),
    (0x2F946, 5036),
    (0x2F947, 5038),
    (0x2F948, 5040),
    (0x2F949, 5042),
    (0x2F94A, 5044),
    (0x2F94B, 5046),
    (0x2F94C, 5048),
    (0x2F94D, 5050),
    (0x2F94E, 5052),
    (0x2F94F, 5054),
    (0x2F950, 5056),
    (0x2F951, 5058),
    (0x2F952, 5060),
    (0x2F953, 5062),
    (0x2F954, 5064),
    (0x2F955, 5066),
    (0x2F956, 5068),
    (0x2F957, 5070),
    (0x2F958, 5072),
    (0x2F959, 5074),
    (0x2F95A, 5076),
    (0x2F95B, 5078),
    (0x2F95C, 5080),
    (0x2F95D, 5082),
    (0x2F95E, 5084),
    (0x2F95F, 5086),
    (0x2F960, 5088),
    (0x2F961, 5090),
    (0x2F962, 5092),
    (0x2F963, 5094),
    (0x2F964, 5096),
    (0x2F965, 5098),
    (0x2F966, 5100),
    (0x2F967, 5102),
    (0x2F968, 5104),
    (0x2F969, 5106),
    (0x2F96A, 5108),
    (0x2F96B, 5110),
    (0x2F96C, 5112),
    (0x2F96D, 5114),
    (0x2F96E, 5116),
    (0x2F96F, 5118),
    (0x2F970, 5120),
    (0x2F971, 5122),
    (0x2F972, 5124),
    (0x2F973, 5126),
    (0x2F974, 5128),
    (0x2F975, 5130),
    (0x2F976, 5132),
    (0x2F977, 5134),
    (0x2F978, 5136),
    (0x2F979, 5138),
    (0x2F97A, 5140),
    (0x2F97B, 5142),
    (0x2F97C, 5144),
    (0x2F97D, 5146),
    (0x2F97E, 5148),
    (0x2F97F, 5150),
    (0x2F980, 5152),
    (0x2F981, 5154),
    (0x2F982, 5156),
    (0x2F983, 5158),
    (0x2F984, 5160),
    (0x2F985, 5162),
    (0x2F986, 5164),
    (0x2F987, 5166),
    (0x2F988, 5168),
    (0x2F989, 5170),
    (0x2F98A, 5172),
    (0x2F98B, 5174),
    (0x2F98C, 5176),
    (0x2F98D, 5178),
    (0x2F98E, 5180),
    (0x2F98F, 5182),
    (0x2F990, 5184),
    (0x2F991, 5186),
    (0x2F992, 5188),
    (0x2F993, 5190),
    (0x2F994, 5192),
    (0x2F995, 5194),
    (0x2F996, 5196),
    (0x2F997, 5198),
    (0x2F998, 5200),
    (0x2F999, 5202),
    (0x2F99A, 5204),
    (0x2F99B, 5206),
    (0x2F99C, 5208),
    (0x2F99D, 5210),
    (0x2F99E, 5212),
    (0x2F99F, 5214),
    (0x2F9A0, 5216),
    (0x2F9A1, 5218),
    (0x2F9A2, 5220),
    (0x2F9A3, 5222),
    (0x2F9A4, 5224),
    (0x2F9A5, 5226),
    (0x2F9A6, 5228),
    (0x2F9A7, 5230),
    (0x2F9A8, 5232),
    (0x2F9A9, 5234),
    (0x2F9AA, 5236),
    (0x2F9AB, 5238),
    (0x2F9AC, 5240),
    (0x2F9AD, 5242),
    (0x2F9AE, 5244),
    (0x2F9AF, 5246),
    (0x2F9B0, 5248),
    (0x2F9B1, 5250),
    (0x2F9B2, 5252),
    (0x2F9B3, 5254),
    (0x2F9B4, 5256),
    (0x2F9B5, 5258),
    (0x2F9B6, 5260),
    (0x2F9B7, 5262),
    (0x2F9B8, 5264),
    (0x2F9B9, 5266),
    (0x2F9BA, 5268),
    (0x2F9BB, 5270),
    (0x2F9BC, 5272),
    (0x2F9BD, 5274),
    (0x2F9BE, 5276),
    (0x2F9BF, 5278),
    (0x2F9C0, 5280),
    (0x2F9C1, 5282),
    (0x2F9C2, 5284),
    (0x2F9C3, 5286),
    (0x2F9C4, 5288),
    (0x2F9C5, 5290),
    (0x2F9C6, 5292),
    (0x2F9C7, 5294),
    (0x2F9C8, 5296),
    (0x2F9C9, 5298),
    (0x2F9CA, 5300),
    (0x2F9CB, 5302),
    (0x2F9CC, 5304),
    (0x2F9CD, 5306),
    (0x2F9CE, 5308),
    (0x2F9CF, 5310),
    (0x2F9D0, 5312),
    (0x2F9D1, 5314),
    (0x2F9D2, 5316),
    (0x2F9D3, 5318),
    (0x2F9D4, 5320),
    (0x2F9D5, 5322),
    (0x2F9D6, 5324),
    (0x2F9D7, 5326),
    (0x2F9D8, 5328),
    (0x2F9D9, 5330),
    (0x2F9DA, 5332),
    (0x2F9DB, 5334),
    (0x2F9DC, 5336),
    (0x2F9DD, 5338),
    (0x2F9DE, 5340),
    (0x2F9DF, 5342),
    (0x2F9E0, 5344),
    (0x2F9E1, 5346),
    (0x2F9E2, 5348),
    (0x2F9E3, 5350),
    (0x2F9E4, 5352),
    (0x2F9E5, 5354),
    (0x2F9E6, 5356),
    (0x2F9E7, 5358),
    (0x2F9E8, 5360),
    (0x2F9E9, 5362),
    (0x2F9EA, 5364),
    (0x2F9EB, 5366),
    (0x2F9EC, 5368),
    (0x2F9ED, 5370),
    (0x2F9EE, 5372),
    (0x2F9EF, 5374),
    (0x2F9F0, 5376),
    (0x2F9F1, 5378),
    (0x2F9F2, 5380),
    (0x2F9F3, 5382),
    (0x2F9F4, 5384),
    (0x2F9F5, 5386),
    (0x2F9F6, 5388),
    (0x2F9F7, 5390),
    (0x2F9F8, 5392),
    (0x2F9F9, 5394),
    (0x2F9FA, 5396),
    (0x2F9FB, 5398),
    (0x2F9FC, 5400),
    (0x2F9FD, 5402),
    (0x2F9FE, 5404),
    (0x2F9FF, 5406),
    (0x2FA00, 5408),
    (0x2FA01, 5410),
    (0x2FA02, 5412),
    (0x2FA03, 5414),
    (0x2FA04, 5416),
    (0x2FA05, 5418),
    (0x2FA06, 5420),
    (0x2FA07, 5422),
    (0x2FA08, 5424),
    (0x2FA09, 5426),
    (0x2FA0A, 5428),
    (0x2FA0B, 5430),
    (0x2FA0C, 5432),
    (0x2FA0D, 5434),
    (0x2FA0E, 5436),
    (0x2FA0F, 5438),
    (0x2FA10, 5440),
    (0x2FA11, 5442),
    (0x2FA12, 5444),
    (0x2FA13, 5446),
    (0x2FA14, 5448),
    (0x2FA15, 5450),
    (0x2FA16, 5452),
    (0x2FA17, 5454),
    (0x2FA18, 5456),
    (0x2FA19, 5458),
    (0x2FA1A, 5460),
    (0x2FA1B, 5462),
    (0x2FA1C, 5464),
    (0x2FA1D, 5466),
];
pub(crate) fn decompose_index(cp: usize) -> usize {
    match DECOMPOSE_LOOKUP.binary_search_by_key(&(cp as u32), |&(c, _)| c) {
        Ok(i) => DECOMPOSE_LOOKUP[i].1 as usize,
        Err(_) => 0,
    }
}
pub(crate) static DECOMPOSE_COMPAT: &[u32] = &[
    0,0,1,32,2,32,776,1,97,2,32,772,1,50,1,51,
    2,32,769,1,956,2,32,807,1,49,1,111,3,49,8260,52,
    3,49,8260,50,3,51,8260,52,2,73,74,2,105,106,2,76,
    183,2,108,183,2,700,110,1,115,3,68,90,780,3,68,122,
    780,3,100,122,780,2,76,74,2,76,106,2,108,106,2,78,
    74,2,78,106,2,110,106,2,68,90,2,68,122,2,100,122,
    1,104,1,614,1,106,1,114,1,633,1,635,1,641,1,119,
    1,121,2,32,774,2,32,775,2,32,778,2,32,808,2,32,
    771,2,32,779,1,611,1,108,1,115,1,120,1,661,2,32,
    837,2,32,769,3,32,776,769,1,946,1,952,1,933,2,933,
    769,2,933,776,1,966,1,960,1,954,1,961,1,962,1,920,
    1,949,1,931,2,1381,1410,2,1575,1652,2,1608,1652,2,1735,1652,
    2,1610,1652,2,3661,3634,2,3789,3762,2,3755,3737,2,3755,3745,1,
    3851,3,4018,3953,3968,3,4019,3953,3968,1,4316,1,65,1,198,1,
    66,1,68,1,69,1,398,1,71,1,72,1,73,1,74,1,
    75,1,76,1,77,1,78,1,79,1,546,1,80,1,82,1,
    84,1,85,1,87,1,97,1,592,1,593,1,7426,1,98,1,
    100,1,101,1,601,1,603,1,604,1,103,1,107,1,109,1,
    331,1,111,1,596,1,7446,1,7447,1,112,1,116,1,117,1,
    7453,1,623,1,118,1,7461,1,946,1,947,1,948,1,966,1,
    967,1,105,1,114,1,117,1,118,1,946,1,947,1,961,1,
    966,1,967,1,1085,1,594,1,99,1,597,1,240,1,604,1,
    102,1,607,1,609,1,613,1,616,1,617,1,618,1,7547,1,
    669,1,621,1,7557,1,671,1,625,1,624,1,626,1,627,1,
    628,1,629,1,632,1,642,1,643,1,427,1,649,1,650,1,
    7452,1,651,1,652,1,122,1,656,1,657,1,658,1,952,2,
    97,702,2,115,775,2,32,787,2,32,787,2,32,834,3,32,
    776,834,3,32,787,768,3,32,787,769,3,32,787,834,3,32,
    788,768,3,32,788,769,3,32,788,834,3,32,776,768,3,32,
    776,769,2,32,769,2,32,788,1,32,1,32,1,32,1,32,
    1,32,1,32,1,32,1,32,1,32,1,32,1,32,1,8208,
    2,32,819,1,46,2,46,46,3,46,46,46,1,32,2,8242,
    8242,3,8242,8242,8242,2,8245,8245,3,8245,8245,8245,2,33,33,2,
    32,773,2,63,63,2,63,33,2,33,63,4,8242,8242,8242,8242,
    1,32,1,48,1,105,1,52,1,53,1,54,1,55,1,56,
    1,57,1,43,1,8722,1,61,1,40,1,41,1,110,1,48,
    1,49,1,50,1,51,1,52,1,53,1,54,1,55,1,56,
    1,57,1,43,1,8722,1,61,1,40,1,41,1,97,1,101,
    1,111,1,120,1,601,1,104,1,107,1,108,1,109,1,110,
    1,112,1,115,1,116,2,82,115,3,97,47,99,3,97,47,
    115,1,67,2,176,67,3,99,47,111,3,99,47,117,1,400,
    2,176,70,1,103,1,72,1,72,1,72,1,104,1,295,1,
    73,1,73,1,76,1,108,1,78,2,78,111,1,80,1,81,
    1,82,1,82,1,82,2,83,77,3,84,69,76,2,84,77,
    1,90,1,90,1,66,1,67,1,101,1,69,1,70,1,77,
    1,111,1,1488,1,1489,1,1490,1,1491,1,105,3,70,65,88,
    1,960,1,947,1,915,1,928,1,8721,1,68,1,100,1,101,
    1,105,1,106,3,49,8260,55,3,49,8260,57,4,49,8260,49,
    48,3,49,8260,51,3,50,8260,51,3,49,8260,53,3,50,8260,
    53,3,51,8260,53,3,52,8260,53,3,49,8260,54,3,53,8260,
    54,3,49,8260,56,3,51,8260,56,3,53,8260,56,3,55,8260,
    56,2,49,8260,1,73,2,73,73,3,73,73,73,2,73,86,
    1,86,2,86,73,3,86,73,73,4,86,73,73,73,2,73,
    88,1,88,2,88,73,3,88,73,73,1,76,1,67,1,68,
    1,77,1,105,2,105,105,3,105,105,105,2,105,118,1,118,
    2,118,105,3,118,105,105,4,118,105,105,105,2,105,120,1,
    120,2,120,105,3,120,105,105,1,108,1,99,1,100,1,109,
    3,48,8260,51,2,8747,8747,3,8747,8747,8747,2,8750,8750,3,8750,
    8750,8750,1,49,1,50,1,51,1,52,1,53,1,54,1,55,
    1,56,1,57,2,49,48,2,49,49,2,49,50,2,49,51,
    2,49,52,2,49,53,2,49,54,2,49,55,2,49,56,2,
    49,57,2,50,48,3,40,49,41,3,40,50,41,3,40,51,
    41,3,40,52,41,3,40,53,41,3,40,54,41,3,40,55,
    41,3,40,56,41,3,40,57,41,4,40,49,48,41,4,40,
    49,49,41,4,40,49,50,41,4,40,49,51,41,4,40,49,
    52,41,4,40,49,53,41,4,40,49,54,41,4,40,49,55,
    41,4,40,49,56,41,4,40,49,57,41,4,40,50,48,41,
    2,49,46,2,50,46,2,51,46,2,52,46,2,53,46,2,
    54,46,2,55,46,2,56,46,2,57,46,3,49,48,46,3,
    49,49,46,3,49,50,46,3,49,51,46,3,49,52,46,3,
    49,53,46,3,49,54,46,3,49,55,46,3,49,56,46,3,
    49,57,46,3,50,48,46,3,40,97,41,3,40,98,41,3,
    40,99,41,3,40,100,41,3,40,101,41,3,40,102,41,3,
    40,103,41,3,40,104,41,3,40,105,41,3,40,106,41,3,
    40,107,41,3,40,108,41,3,40,109,41,3,40,110,41,3,
    40,111,41,3,40,112,41,3,40,113,41,3,40,114,41,3,
    40,115,41,3,40,116,41,3,40,117,41,3,40,118,41,3,
    40,119,41,3,40,120,41,3,40,121,41,3,40,122,41,1,
    65,1,66,1,67,1,68,1,69,1,70,1,71,1,72,1,
    73,1,74,1,75,1,76,1,77,1,78,1,79,1,80,1,
    81,1,82,1,83,1,84,1,85,1,86,1,87,1,88,1,
    89,1,90,1,97,1,98,1,99,1,100,1,101,1,102,1,
    103,1,104,1,105,1,106,1,107,1,108,1,109,1,110,1,
    111,1,112,1,113,1,114,1,115,1,116,1,117,1,118,1,
    119,1,120,1,121,1,122,1,48,4,8747,8747,8747,8747,3,58,
    58,61,2,61,61,3,61,61,61,1,106,1,86,1,11617,1,
    27597,1,40863,1,19968,1,20008,1,20022,1,20031,1,20057,1,20101,1,
    20108,1,20128,1,20154,1,20799,1,20837,1,20843,1,20866,1,20886,1,
    20907,1,20960,1,20981,1,20992,1,21147,1,21241,1,21269,1,21274,1,
    21304,1,21313,1,21340,1,21353,1,21378,1,21430,1,21448,1,21475,1,
    22231,1,22303,1,22763,1,22786,1,22794,1,22805,1,22823,1,22899,1,
    23376,1,23424,1,23544,1,23567,1,23586,1,23608,1,23662,1,23665,1,
    24027,1,24037,1,24049,1,24062,1,24178,1,24186,1,24191,1,24308,1,
    24318,1,24331,1,24339,1,24400,1,24417,1,24435,1,24515,1,25096,1,
    25142,1,25163,1,25903,1,25908,1,25991,1,26007,1,26020,1,26041,1,
    26080,1,26085,1,26352,1,26376,1,26408,1,27424,1,27490,1,27513,1,
    27571,1,27595,1,27604,1,27611,1,27663,1,27668,1,27700,1,28779,1,
    29226,1,29238,1,29243,1,29247,1,29255,1,29273,1,29275,1,29356,1,
    29572,1,29577,1,29916,1,29926,1,29976,1,29983,1,29992,1,30000,1,
    30091,1,30098,1,30326,1,30333,1,30382,1,30399,1,30446,1,30683,1,
    30690,1,30707,1,31034,1,31160,1,31166,1,31348,1,31435,1,31481,1,
    31859,1,31992,1,32566,1,32593,1,32650,1,32701,1,32769,1,32780,1,
    32786,1,32819,1,32895,1,32905,1,33251,1,33258,1,33267,1,33276,1,
    33292,1,33307,1,33311,1,33390,1,33394,1,33400,1,34381,1,34411,1,
    34880,1,34892,1,34915,1,35198,1,35211,1,35282,1,35328,1,35895,1,
    35910,1,35925,1,35960,1,35997,1,36196,1,36208,1,36275,1,36523,1,
    36554,1,36763,1,36784,1,36789,1,37009,1,37193,1,37318,1,37324,1,
    37329,1,38263,1,38272,1,38428,1,38582,1,38585,1,38632,1,38737,1,
    38750,1,38754,1,38761,1,38859,1,38893,1,38899,1,38913,1,39080,1,
    39131,1,39135,1,39318,1,39321,1,39340,1,39592,1,39640,1,39647,1,
    39717,1,39727,1,39730,1,39740,1,39770,1,40165,1,40565,1,40575,1,
    40613,1,40635,1,40643,1,40653,1,40657,1,40697,1,40701,1,40718,1,
    40723,1,40736,1,40763,1,40778,1,40786,1,40845,1,40860,1,40864,1,
    32,1,12306,1,21313,1,21316,1,21317,2,32,12441,2,32,12442,2,
    12424,12426,2,12467,12488,1,4352,1,4353,1,4522,1,4354,1,4524,1,
    4525,1,4355,1,4356,1,4357,1,4528,1,4529,1,4530,1,4531,1,
    4532,1,4533,1,4378,1,4358,1,4359,1,4360,1,4385,1,4361,1,
    4362,1,4363,1,4364,1,4365,1,4366,1,4367,1,4368,1,4369,1,
    4370,1,4449,1,4450,1,4451,1,4452,1,4453,1,4454,1,4455,1,
    4456,1,4457,1,4458,1,4459,1,4460,1,4461,1,4462,1,4463,1,
    4464,1,4465,1,4466,1,4467,1,4468,1,4469,1,4448,1,4372,1,
    4373,1,4551,1,4552,1,4556,1,4558,1,4563,1,4567,1,4569,1,
    4380,1,4573,1,4575,1,4381,1,4382,1,4384,1,4386,1,4387,1,
    4391,1,4393,1,4395,1,4396,1,4397,1,4398,1,4399,1,4402,1,
    4406,1,4416,1,4423,1,4428,1,4593,1,4594,1,4439,1,4440,1,
    4441,1,4484,1,4485,1,4488,1,4497,1,4498,1,4500,1,4510,1,
    4513,1,19968,1,20108,1,19977,1,22235,1,19978,1,20013,1,19979,1,
    30002,1,20057,1,19993,1,19969,1,22825,1,22320,1,20154,3,40,4352,
    41,3,40,4354,41,3,40,4355,41,3,40,4357,41,3,40,4358,
    41,3,40,4359,41,3,40,4361,41,3,40,4363,41,3,40,4364,
    41,3,40,4366,41,3,40,4367,41,3,40,4368,41,3,40,4369,
    41,3,40,4370,41,4,40,4352,4449,41,4,40,4354,4449,41,4,
    40,4355,4449,41,4,40,4357,4449,41,4,40,4358,4449,41,4,40,
    4359,4449,41,4,40,4361,4449,41,4,40,4363,4449,41,4,40,4364,
    4449,41,4,40,4366,4449,41,4,40,4367,4449,41,4,40,4368,4449,
    41,4,40,4369,4449,41,4,40,4370,4449,41,4,40,4364,4462,41,
    7,40,4363,4457,4364,4453,4523,41,6,40,4363,4457,4370,4462,41,3,
    40,19968,41,3,40,20108,41,3,40,19977,41,3,40,22235,41,3,
    40,20116,41,3,40,20845,41,3,40,19971,41,3,40,20843,41,3,
    40,20061,41,3,40,21313,41,3,40,26376,41,3,40,28779,41,3,
    40,27700,41,3,40,26408,41,3,40,37329,41,3,40,22303,41,3,
    40,26085,41,3,40,26666,41,3,40,26377,41,3,40,31038,41,3,
    40,21517,41,3,40,29305,41,3,40,36001,41,3,40,31069,41,3,
    40,21172,41,3,40,20195,41,3,40,21628,41,3,40,23398,41,3,
    40,30435,41,3,40,20225,41,3,40,36039,41,3,40,21332,41,3,
    40,31085,41,3,40,20241,41,3,40,33258,41,3,40,33267,41,1,
    21839,1,24188,1,25991,1,31631,3,80,84,69,2,50,49,2,50,
    50,2,50,51,2,50,52,2,50,53,2,50,54,2,50,55,
    2,50,56,2,50,57,2,51,48,2,51,49,2,51,50,2,
    51,51,2,51,52,2,51,53,1,4352,1,4354,1,4355,1,4357,
    1,4358,1,4359,1,4361,1,4363,1,4364,1,4366,1,4367,1,4368,
    1,4369,1,4370,2,4352,4449,2,4354,4449,2,4355,4449,2,4357,4449,
    2,4358,4449,2,4359,4449,2,4361,4449,2,4363,4449,2,4364,4449,2,
    4366,4449,2,4367,4449,2,4368,4449,2,4369,4449,2,4370,4449,5,4366,
    4449,4535,4352,4457,4,4364,4462,4363,4468,2,4363,4462,1,19968,1,20108,
    1,19977,1,22235,1,20116,1,20845,1,19971,1,20843,1,20061,1,21313,
    1,26376,1,28779,1,27700,1,26408,1,37329,1,22303,1,26085,1,26666,
    1,26377,1,31038,1,21517,1,29305,1,36001,1,31069,1,21172,1,31192,
    1,30007,1,22899,1,36969,1,20778,1,21360,1,27880,1,38917,1,20241,
    1,20889,1,27491,1,19978,1,20013,1,19979,1,24038,1,21491,1,21307,
    1,23447,1,23398,1,30435,1,20225,1,36039,1,21332,1,22812,2,51,
    54,2,51,55,2,51,56,2,51,57,2,52,48,2,52,49,
    2,52,50,2,52,51,2,52,52,2,52,53,2,52,54,2,
    52,55,2,52,56,2,52,57,2,53,48,2,49,26376,2,50,
    26376,2,51,26376,2,52,26376,2,53,26376,2,54,26376,2,55,26376,
    2,56,26376,2,57,26376,3,49,48,26376,3,49,49,26376,3,49,
    50,26376,2,72,103,3,101,114,103,2,101,86,3,76,84,68,
    1,12450,1,12452,1,12454,1,12456,1,12458,1,12459,1,12461,1,12463,
    1,12465,1,12467,1,12469,1,12471,1,12473,1,12475,1,12477,1,12479,
    1,12481,1,12484,1,12486,1,12488,1,12490,1,12491,1,12492,1,12493,
    1,12494,1,12495,1,12498,1,12501,1,12504,1,12507,1,12510,1,12511,
    1,12512,1,12513,1,12514,1,12516,1,12518,1,12520,1,12521,1,12522,
    1,12523,1,12524,1,12525,1,12527,1,12528,1,12529,1,12530,2,20196,
    21644,5,12450,12495,12442,12540,12488,4,12450,12523,12501,12449,5,12450,12531,12504,
    12442,12450,3,12450,12540,12523,5,12452,12491,12531,12463,12441,3,12452,12531,12481,
    3,12454,12457,12531,6,12456,12473,12463,12540,12488,12441,4,12456,12540,12459,12540,
    3,12458,12531,12473,3,12458,12540,12512,3,12459,12452,12522,4,12459,12521,12483,
    12488,4,12459,12525,12522,12540,4,12459,12441,12525,12531,4,12459,12441,12531,12510,
    4,12461,12441,12459,12441,4,12461,12441,12491,12540,4,12461,12517,12522,12540,6,
    12461,12441,12523,12479,12441,12540,2,12461,12525,6,12461,12525,12463,12441,12521,12512,
    6,12461,12525,12513,12540,12488,12523,5,12461,12525,12527,12483,12488,4,12463,12441,
    12521,12512,6,12463,12441,12521,12512,12488,12531,6,12463,12523,12475,12441,12452,12525,
    4,12463,12525,12540,12493,3,12465,12540,12473,3,12467,12523,12490,4,12467,12540,
    12507,12442,4,12469,12452,12463,12523,5,12469,12531,12481,12540,12512,5,12471,12522,
    12531,12463,12441,3,12475,12531,12481,3,12475,12531,12488,4,12479,12441,12540,12473,
    3,12486,12441,12471,3,12488,12441,12523,2,12488,12531,2,12490,12494,3,12494,
    12483,12488,3,12495,12452,12484,6,12495,12442,12540,12475,12531,12488,4,12495,12442,
    12540,12484,5,12495,12441,12540,12524,12523,6,12498,12442,12450,12473,12488,12523,4,
    12498,12442,12463,12523,3,12498,12442,12467,3,12498,12441,12523,6,12501,12449,12521,
    12483,12488,12441,4,12501,12451,12540,12488,6,12501,12441,12483,12471,12455,12523,3,
    12501,12521,12531,5,12504,12463,12479,12540,12523,3,12504,12442,12477,4,12504,12442,
    12491,12498,3,12504,12523,12484,4,12504,12442,12531,12473,5,12504,12442,12540,12471,
    12441,4,12504,12441,12540,12479,5,12507,12442,12452,12531,12488,4,12507,12441,12523,
    12488,2,12507,12531,5,12507,12442,12531,12488,12441,3,12507,12540,12523,3,12507,
    12540,12531,4,12510,12452,12463,12525,3,12510,12452,12523,3,12510,12483,12495,3,
    12510,12523,12463,5,12510,12531,12471,12519,12531,4,12511,12463,12525,12531,2,12511,
    12522,6,12511,12522,12495,12441,12540,12523,3,12513,12459,12441,5,12513,12459,12441,
    12488,12531,4,12513,12540,12488,12523,4,12516,12540,12488,12441,3,12516,12540,12523,
    3,12518,12450,12531,4,12522,12483,12488,12523,2,12522,12521,4,12523,12498,12442,
    12540,5,12523,12540,12501,12441,12523,2,12524,12512,6,12524,12531,12488,12465,12441,
    12531,3,12527,12483,12488,2,48,28857,2,49,28857,2,50,28857,2,51,
    28857,2,52,28857,2,53,28857,2,54,28857,2,55,28857,2,56,28857,
    2,57,28857,3,49,48,28857,3,49,49,28857,3,49,50,28857,3,
    49,51,28857,3,49,52,28857,3,49,53,28857,3,49,54,28857,3,
    49,55,28857,3,49,56,28857,3,49,57,28857,3,50,48,28857,3,
    50,49,28857,3,50,50,28857,3,50,51,28857,3,50,52,28857,3,
    104,80,97,2,100,97,2,65,85,3,98,97,114,2,111,86,
    2,112,99,2,100,109,3,100,109,50,3,100,109,51,2,73,
    85,2,24179,25104,2,26157,21644,2,22823,27491,2,26126,27835,4,26666,24335,
    20250,31038,2,112,65,2,110,65,2,956,65,2,109,65,2,107,
    65,2,75,66,2,77,66,2,71,66,3,99,97,108,4,107,
    99,97,108,2,112,70,2,110,70,2,956,70,2,956,103,2,
    109,103,2,107,103,2,72,122,3,107,72,122,3,77,72,122,
    3,71,72,122,3,84,72,122,2,956,108,2,109,108,2,100,
    108,2,107,108,2,102,109,2,110,109,2,956,109,2,109,109,
    2,99,109,2,107,109,3,109,109,50,3,99,109,50,2,109,
    50,3,107,109,50,3,109,109,51,3,99,109,51,2,109,51,
    3,107,109,51,3,109,8725,115,4,109,8725,115,50,2,80,97,
    3,107,80,97,3,77,80,97,3,71,80,97,3,114,97,100,
    5,114,97,100,8725,115,6,114,97,100,8725,115,50,2,112,115,
    2,110,115,2,956,115,2,109,115,2,112,86,2,110,86,2,
    956,86,2,109,86,2,107,86,2,77,86,2,112,87,2,110,
    87,2,956,87,2,109,87,2,107,87,2,77,87,2,107,937,
    2,77,937,4,97,46,109,46,2,66,113,2,99,99,2,99,
    100,4,67,8725,107,103,3,67,111,46,2,100,66,2,71,121,
    2,104,97,2,72,80,2,105,110,2,75,75,2,75,77,2,
    107,116,2,108,109,2,108,110,3,108,111,103,2,108,120,2,
    109,98,3,109,105,108,3,109,111,108,2,80,72,4,112,46,
    109,46,3,80,80,77,2,80,82,2,115,114,2,83,118,2,
    87,98,3,86,8725,109,3,65,8725,109,2,49,26085,2,50,26085,
    2,51,26085,2,52,26085,2,53,26085,2,54,26085,2,55,26085,2,
    56,26085,2,57,26085,3,49,48,26085,3,49,49,26085,3,49,50,
    26085,3,49,51,26085,3,49,52,26085,3,49,53,26085,3,49,54,
    26085,3,49,55,26085,3,49,56,26085,3,49,57,26085,3,50,48,
    26085,3,50,49,26085,3,50,50,26085,3,50,51,26085,3,50,52,
    26085,3,50,53,26085,3,50,54,26085,3,50,55,26085,3,50,56,
    26085,3,50,57,26085,3,51,48,26085,3,51,49,26085,3,103,97,
    108,1,1098,1,1100,1,42863,1,67,1,70,1,81,1,294,1,
    339,1,42791,1,43831,1,619,1,43858,1,653,2,102,102,2,102,
    105,2,102,108,3,102,102,105,3,102,102,108,2,115,116,2,
    115,116,2,1396,1398,2,1396,1381,2,1396,1387,2,1406,1398,2,1396,
    1389,1,1506,1,1488,1,1491,1,1492,1,1499,1,1500,1,1501,1,
    1512,1,1514,1,43,2,1488,1500,1,1649,1,1649,1,1659,1,1659,
    1,1659,1,1659,1,1662,1,1662,1,1662,1,1662,1,1664,1,1664,
    1,1664,1,1664,1,1658,1,1658,1,1658,1,1658,1,1663,1,1663,
    1,1663,1,1663,1,1657,1,1657,1,1657,1,1657,1,1700,1,1700,
    1,1700,1,1700,1,1702,1,1702,1,1702,1,1702,1,1668,1,1668,
    1,1668,1,1668,1,1667,1,1667,1,1667,1,1667,1,1670,1,1670,
    1,1670,1,1670,1,1671,1,1671,1,1671,1,1671,1,1677,1,1677,
    1,1676,1,1676,1,1678,1,1678,1,1672,1,1672,1,1688,1,1688,
    1,1681,1,1681,1,1705,1,1705,1,1705,1,1705,1,1711,1,1711,
    1,1711,1,1711,1,1715,1,1715,1,1715,1,1715,1,1713,1,1713,
    1,1713,1,1713,1,1722,1,1722,1,1723,1,1723,1,1723,1,1723,
    2,1749,1620,2,1749,1620,1,1729,1,1729,1,1729,1,1729,1,1726,
    1,1726,1,1726,1,1726,1,1746,1,1746,2,1746,1620,2,1746,1620,
    1,1709,1,1709,1,1709,1,1709,1,1735,1,1735,1,1734,1,1734,
    1,1736,1,1736,2,1735,1652,1,1739,1,1739,1,1733,1,1733,1,
    1737,1,1737,1,1744,1,1744,1,1744,1,1744,1,1609,1,1609,3,
    1610,1620,1575,3,1610,1620,1575,3,1610,1620,1749,3,1610,1620,1749,3,
    1610,1620,1608,3,1610,1620,1608,3,1610,1620,1735,3,1610,1620,1735,3,
    1610,1620,1734,3,1610,1620,1734,3,1610,1620,1736,3,1610,1620,1736,3,
    1610,1620,1744,3,1610,1620,1744,3,1610,1620,1744,3,1610,1620,1609,3,
    1610,1620,1609,3,1610,1620,1609,1,1740,1,1740,1,1740,1,1740,3,
    1610,1620,1580,3,1610,1620,1581,3,1610,1620,1605,3,1610,1620,1609,3,
    1610,1620,1610,2,1576,1580,2,1576,1581,2,1576,1582,2,1576,1605,2,
    1576,1609,2,1576,1610,2,1578,1580,2,1578,1581,2,1578,1582,2,1578,
    1605,2,1578,1609,2,1578,1610,2,1579,1580,2,1579,1605,2,1579,1609,
    2,1579,1610,2,1580,1581,2,1580,1605,2,1581,1580,2,1581,1605,2,
    1582,1580,2,1582,1581,2,1582,1605,2,1587,1580,2,1587,1581,2,1587,
    1582,2,1587,1605,2,1589,1581,2,1589,1605,2,1590,1580,2,1590,1581,
    2,1590,1582,2,1590,1605,2,1591,1581,2,1591,1605,2,1592,1605,2,
    1593,1580,2,1593,1605,2,1594,1580,2,1594,1605,2,1601,1580,2,1601,
    1581,2,1601,1582,2,1601,1605,2,1601,1609,2,1601,1610,2,1602,1581,
    2,1602,1605,2,1602,1609,2,1602,1610,2,1603,1575,2,1603,1580,2,
    1603,1581,2,1603,1582,2,1603,1604,2,1603,1605,2,1603,1609,2,1603,
    1610,2,1604,1580,2,1604,1581,2,1604,1582,2,1604,1605,2,1604,1609,
    2,1604,1610,2,1605,1580,2,1605,1581,2,1605,1582,2,1605,1605,2,
    1605,1609,2,1605,1610,2,1606,1580,2,1606,1581,2,1606,1582,2,1606,
    1605,2,1606,1609,2,1606,1610,2,1607,1580,2,1607,1605,2,1607,1609,
    2,1607,1610,2,1610,1580,2,1610,1581,2,1610,1582,2,1610,1605,2,
    1610,1609,2,1610,1610,2,1584,1648,2,1585,1648,2,1609,1648,3,32,
    1612,1617,3,32,1613,1617,3,32,1614,1617,3,32,1615,1617,3,32,
    1616,1617,3,32,1617,1648,3,1610,1620,1585,3,1610,1620,1586,3,1610,
    1620,1605,3,1610,1620,1606,3,1610,1620,1609,3,1610,1620,1610,2,1576,
    1585,2,1576,1586,2,1576,1605,2,1576,1606,2,1576,1609,2,1576,1610,
    2,1578,1585,2,1578,1586,2,1578,1605,2,1578,1606,2,1578,1609,2,
    1578,1610,2,1579,1585,2,1579,1586,2,1579,1605,2,1579,1606,2,1579,
    1609,2,1579,1610,2,1601,1609,2,1601,1610,2,1602,1609,2,1602,1610,
    2,1603,1575,2,1603,1604,2,1603,1605,2,1603,1609,2,1603,1610,2,
    1604,1605,2,1604,1609,2,1604,1610,2,1605,1575,2,1605,1605,2,1606,
    1585,2,1606,1586,2,1606,1605,2,1606,1606,2,1606,1609,2,1606,1610,
    2,1609,1648,2,1610,1585,2,1610,1586,2,1610,1605,2,1610,1606,2,
    1610,1609,2,1610,1610,3,1610,1620,1580,3,1610,1620,1581,3,1610,1620,
    1582,3,1610,1620,1605,3,1610,1620,1607,2,1576,1580,2,1576,1581,2,
    1576,1582,2,1576,1605,2,1576,1607,2,1578,1580,2,1578,1581,2,1578,
    1582,2,1578,1605,2,1578,1607,2,1579,1605,2,1580,1581,2,1580,1605,
    2,1581,1580,2,1581,1605,2,1582,1580,2,1582,1605,2,1587,1580,2,
    1587,1581,2,1587,1582,2,1587,1605,2,1589,1581,2,1589,1582,2,1589,
    1605,2,1590,1580,2,1590,1581,2,1590,1582,2,1590,1605,2,1591,1581,
    2,1592,1605,2,1593,1580,2,1593,1605,2,1594,1580,2,1594,1605,2,
    1601,1580,2,1601,1581,2,1601,1582,2,1601,1605,2,1602,1581,2,1602,
    1605,2,1603,1580,2,1603,1581,2,1603,1582,2,1603,1604,2,1603,1605,
    2,1604,1580,2,1604,1581,2,1604,1582,2,1604,1605,2,1604,1607,2,
    1605,1580,2,1605,1581,2,1605,1582,2,1605,1605,2,1606,1580,2,1606,
    1581,2,1606,1582,2,1606,1605,2,1606,1607,2,1607,1580,2,1607,1605,
    2,1607,1648,2,1610,1580,2,1610,1581,2,1610,1582,2,1610,1605,2,
    1610,1607,3,1610,1620,1605,3,1610,1620,1607,2,1576,1605,2,1576,1607,
    2,1578,1605,2,1578,1607,2,1579,1605,2,1579,1607,2,1587,1605,2,
    1587,1607,2,1588,1605,2,1588,1607,2,1603,1604,2,1603,1605,2,1604,
    1605,2,1606,1605,2,1606,1607,2,1610,1605,2,1610,1607,3,1600,1614,
    1617,3,1600,1615,1617,3,1600,1616,1617,2,1591,1609,2,1591,1610,2,
    1593,1609,2,1593,1610,2,1594,1609,2,1594,1610,2,1587,1609,2,1587,
    1610,2,1588,1609,2,1588,1610,2,1581,1609,2,1581,1610,2,1580,1609,
    2,1580,1610,2,1582,1609,2,1582,1610,2,1589,1609,2,1589,1610,2,
    1590,1609,2,1590,1610,2,1588,1580,2,1588,1581,2,1588,1582,2,1588,
    1605,2,1588,1585,2,1587,1585,2,1589,1585,2,1590,1585,2,1591,1609,
    2,1591,1610,2,1593,1609,2,1593,1610,2,1594,1609,2,1594,1610,2,
    1587,1609,2,1587,1610,2,1588,1609,2,1588,1610,2,1581,1609,2,1581,
    1610,2,1580,1609,2,1580,1610,2,1582,1609,2,1582,1610,2,1589,1609,
    2,1589,1610,2,1590,1609,2,1590,1610,2,1588,1580,2,1588,1581,2,
    1588,1582,2,1588,1605,2,1588,1585,2,1587,1585,2,1589,1585,2,1590,
    1585,2,1588,1580,2,1588,1581,2,1588,1582,2,1588,1605,2,1587,1607,
    2,1588,1607,2,1591,1605,2,1587,1580,2,1587,1581,2,1587,1582,2,
    1588,1580,2,1588,1581,2,1588,1582,2,1591,1605,2,1592,1605,2,1575,
    1611,2,1575,1611,3,1578,1580,1605,3,1578,1581,1580,3,1578,1581,1580,
    3,1578,1581,1605,3,1578,1582,1605,3,1578,1605,1580,3,1578,1605,1581,
    3,1578,1605,1582,3,1580,1605,1581,3,1580,1605,1581,3,1581,1605,1610,
    3,1581,1605,1609,3,1587,1581,1580,3,1587,1580,1581,3,1587,1580,1609,
    3,1587,1605,1581,3,1587,1605,1581,3,1587,1605,1580,3,1587,1605,1605,
    3,1587,1605,1605,3,1589,1581,1581,3,1589,1581,1581,3,1589,1605,1605,
    3,1588,1581,1605,3,1588,1581,1605,3,1588,1580,1610,3,1588,1605,1582,
    3,1588,1605,1582,3,1588,1605,1605,3,1588,1605,1605,3,1590,1581,1609,
    3,1590,1582,1605,3,1590,1582,1605,3,1591,1605,1581,3,1591,1605,1581,
    3,1591,1605,1605,3,1591,1605,1610,3,1593,1580,1605,3,1593,1605,1605,
    3,1593,1605,1605,3,1593,1605,1609,3,1594,1605,1605,3,1594,1605,1610,
    3,1594,1605,1609,3,1601,1582,1605,3,1601,1582,1605,3,1602,1605,1581,
    3,1602,1605,1605,3,1604,1581,1605,3,1604,1581,1610,3,1604,1581,1609,
    3,1604,1580,1580,3,1604,1580,1580,3,1604,1582,1605,3,1604,1582,1605,
    3,1604,1605,1581,3,1604,1605,1581,3,1605,1581,1580,3,1605,1581,1605,
    3,1605,1581,1610,3,1605,1580,1581,3,1605,1580,1605,3,1605,1582,1580,
    3,1605,1582,1605,3,1605,1580,1582,3,1607,1605,1580,3,1607,1605,1605,
    3,1606,1581,1605,3,1606,1581,1609,3,1606,1580,1605,3,1606,1580,1605,
    3,1606,1580,1609,3,1606,1605,1610,3,1606,1605,1609,3,1610,1605,1605,
    3,1610,1605,1605,3,1576,1582,1610,3,1578,1580,1610,3,1578,1580,1609,
    3,1578,1582,1610,3,1578,1582,1609,3,1578,1605,1610,3,1578,1605,1609,
    3,1580,1605,1610,3,1580,1581,1609,3,1580,1605,1609,3,1587,1582,1609,
    3,1589,1581,1610,3,1588,1581,1610,3,1590,1581,1610,3,1604,1580,1610,
    3,1604,1605,1610,3,1610,1581,1610,3,1610,1580,1610,3,1610,1605,1610,
    3,1605,1605,1610,3,1602,1605,1610,3,1606,1581,1610,3,1602,1605,1581,
    3,1604,1581,1605,3,1593,1605,1610,3,1603,1605,1610,3,1606,1580,1581,
    3,1605,1582,1610,3,1604,1580,1605,3,1603,1605,1605,3,1604,1580,1605,
    3,1606,1580,1581,3,1580,1581,1610,3,1581,1580,1610,3,1605,1580,1610,
    3,1601,1605,1610,3,1576,1581,1610,3,1603,1605,1605,3,1593,1580,1605,
    3,1589,1605,1605,3,1587,1582,1610,3,1606,1580,1610,3,1589,1604,1746,
    3,1602,1604,1746,4,1575,1604,1604,1607,4,1575,1603,1576,1585,4,1605,
    1581,1605,1583,4,1589,1604,1593,1605,4,1585,1587,1608,1604,4,1593,1604,
    1610,1607,4,1608,1587,1604,1605,3,1589,1604,1609,18,1589,1604,1609,32,
    1575,1604,1604,1607,32,1593,1604,1610,1607,32,1608,1587,1604,1605,8,1580,
    1604,32,1580,1604,1575,1604,1607,4,1585,1740,1575,1604,1,44,1,12289,
    1,12290,1,58,1,59,1,33,1,63,1,12310,1,12311,3,46,
    46,46,2,46,46,1,8212,1,8211,1,95,1,95,1,40,1,
    41,1,123,1,125,1,12308,1,12309,1,12304,1,12305,1,12298,1,
    12299,1,12296,1,12297,1,12300,1,12301,1,12302,1,12303,1,91,1,
    93,2,32,773,2,32,773,2,32,773,2,32,773,1,95,1,
    95,1,95,1,44,1,12289,1,46,1,59,1,58,1,63,1,
    33,1,8212,1,40,1,41,1,123,1,125,1,12308,1,12309,1,
    35,1,38,1,42,1,43,1,45,1,60,1,62,1,61,1,
    92,1,36,1,37,1,64,2,32,1611,2,1600,1611,2,32,1612,
    2,32,1613,2,32,1614,2,1600,1614,2,32,1615,2,1600,1615,2,
    32,1616,2,1600,1616,2,32,1617,2,1600,1617,2,32,1618,2,1600,
    1618,1,1569,2,1575,1619,2,1575,1619,2,1575,1620,2,1575,1620,2,
    1608,1620,2,1608,1620,2,1575,1621,2,1575,1621,2,1610,1620,2,1610,
    1620,2,1610,1620,2,1610,1620,1,1575,1,1575,1,1576,1,1576,1,
    1576,1,1576,1,1577,1,1577,1,1578,1,1578,1,1578,1,1578,1,
    1579,1,1579,1,1579,1,1579,1,1580,1,1580,1,1580,1,1580,1,
    1581,1,1581,1,1581,1,1581,1,1582,1,1582,1,1582,1,1582,1,
    1583,1,1583,1,1584,1,1584,1,1585,1,1585,1,1586,1,1586,1,
    1587,1,1587,1,1587,1,1587,1,1588,1,1588,1,1588,1,1588,1,
    1589,1,1589,1,1589,1,1589,1,1590,1,1590,1,1590,1,1590,1,
    1591,1,1591,1,1591,1,1591,1,1592,1,1592,1,1592,1,1592,1,
    1593,1,1593,1,1593,1,1593,1,1594,1,1594,1,1594,1,1594,1,
    1601,1,1601,1,1601,1,1601,1,1602,1,1602,1,1602,1,1602,1,
    1603,1,1603,1,1603,1,1603,1,1604,1,1604,1,1604,1,1604,1,
    1605,1,1605,1,1605,1,1605,1,1606,1,1606,1,1606,1,1606,1,
    1607,1,1607,1,1607,1,1607,1,1608,1,1608,1,1609,1,1609,1,
    1610,1,1610,1,1610,1,1610,3,1604,1575,1619,3,1604,1575,1619,3,
    1604,1575,1620,3,1604,1575,1620,3,1604,1575,1621,3,1604,1575,1621,2,
    1604,1575,2,1604,1575,1,33,1,34,1,35,1,36,1,37,1,
    38,1,39,1,40,1,41,1,42,1,43,1,44,1,45,1,
    46,1,47,1,48,1,49,1,50,1,51,1,52,1,53,1,
    54,1,55,1,56,1,57,1,58,1,59,1,60,1,61,1,
    62,1,63,1,64,1,65,1,66,1,67,1,68,1,69,1,
    70,1,71,1,72,1,73,1,74,1,75,1,76,1,77,1,
    78,1,79,1,80,1,81,1,82,1,83,1,84,1,85,1,
    86,1,87,1,88,1,89,1,90,1,91,1,92,1,93,1,
    94,1,95,1,96,1,97,1,98,1,99,1,100,1,101,1,
    102,1,103,1,104,1,105,1,106,1,107,1,108,1,109,1,
    110,1,111,1,112,1,113,1,114,1,115,1,116,1,117,1,
    118,1,119,1,120,1,121,1,122,1,123,1,124,1,125,1,
    126,1,10629,1,10630,1,12290,1,12300,1,12301,1,12289,1,12539,1,
    12530,1,12449,1,12451,1,12453,1,12455,1,12457,1,12515,1,12517,1,
    12519,1,12483,1,12540,1,12450,1,12452,1,12454,1,12456,1,12458,1,
    12459,1,12461,1,12463,1,12465,1,12467,1,12469,1,12471,1,12473,1,
    12475,1,12477,1,12479,1,12481,1,12484,1,12486,1,12488,1,12490,1,
    12491,1,12492,1,12493,1,12494,1,12495,1,12498,1,12501,1,12504,1,
    12507,1,12510,1,12511,1,12512,1,12513,1,12514,1,12516,1,12518,1,
    12520,1,12521,1,12522,1,12523,1,12524,1,12525,1,12527,1,12531,1,
    12441,1,12442,1,4448,1,4352,1,4353,1,4522,1,4354,1,4524,1,
    4525,1,4355,1,4356,1,4357,1,4528,1,4529,1,4530,1,4531,1,
    4532,1,4533,1,4378,1,4358,1,4359,1,4360,1,4385,1,4361,1,
    4362,1,4363,1,4364,1,4365,1,4366,1,4367,1,4368,1,4369,1,
    4370,1,4449,1,4450,1,4451,1,4452,1,4453,1,4454,1,4455,1,
    4456,1,4457,1,4458,1,4459,1,4460,1,4461,1,4462,1,4463,1,
    4464,1,4465,1,4466,1,4467,1,4468,1,4469,1,162,1,163,1,
    172,2,32,772,1,166,1,165,1,8361,1,9474,1,8592,1,8593,
    1,8594,1,8595,1,9632,1,9675,1,720,1,721,1,230,1,665,
    1,595,1,675,1,43878,1,677,1,676,1,598,1,599,1,7569,
    1,600,1,606,1,681,1,612,1,610,1,608,1,667,1,295,
    1,668,1,615,1,644,1,682,1,683,1,620,1,122628,1,42894,
    1,622,1,122629,1,654,1,122630,1,248,1,630,1,631,1,113,
    1,634,1,122632,1,637,1,638,1,640,1,680,1,678,1,43879,
    1,679,1,648,1,11377,1,655,1,673,1,674,1,664,1,448,
    1,449,1,450,1,122634,1,122654,1,65,1,66,1,67,1,68,
    1,69,1,70,1,71,1,72,1,73,1,74,1,75,1,76,
    1,77,1,78,1,79,1,80,1,81,1,82,1,83,1,84,
    1,85,1,86,1,87,1,88,1,89,1,90,1,97,1,98,
    1,99,1,100,1,101,1,102,1,103,1,104,1,105,1,106,
    1,107,1,108,1,109,1,110,1,111,1,112,1,113,1,114,
    1,115,1,116,1,117,1,118,1,119,1,120,1,121,1,122,
    1,65,1,66,1,67,1,68,1,69,1,70,1,71,1,72,
    1,73,1,74,1,75,1,76,1,77,1,78,1,79,1,80,
    1,81,1,82,1,83,1,84,1,85,1,86,1,87,1,88,
    1,89,1,90,1,97,1,98,1,99,1,100,1,101,1,102,
    1,103,1,105,1,106,1,107,1,108,1,109,1,110,1,111,
    1,112,1,113,1,114,1,115,1,116,1,117,1,118,1,119,
    1,120,1,121,1,122,1,65,1,66,1,67,1,68,1,69,
    1,70,1,71,1,72,1,73,1,74,1,75,1,76,1,77,
    1,78,1,79,1,80,1,81,1,82,1,83,1,84,1,85,
    1,86,1,87,1,88,1,89,1,90,1,97,1,98,1,99,
    1,100,1,101,1,102,1,103,1,104,1,105,1,106,1,107,
    1,108,1,109,1,110,1,111,1,112,1,113,1,114,1,115,
    1,116,1,117,1,118,1,119,1,120,1,121,1,122,1,65,
    1,67,1,68,1,71,1,74,1,75,1,78,1,79,1,80,
    1,81,1,83,1,84,1,85,1,86,1,87,1,88,1,89,
    1,90,1,97,1,98,1,99,1,100,1,102,1,104,1,105,
    1,106,1,107,1,108,1,109,1,110,1,112,1,113,1,114,
    1,115,1,116,1,117,1,118,1,119,1,120,1,121,1,122,
    1,65,1,66,1,67,1,68,1,69,1,70,1,71,1,72,
    1,73,1,74,1,75,1,76,1,77,1,78,1,79,1,80,
    1,81,1,82,1,83,1,84,1,85,1,86,1,87,1,88,
    1,89,1,90,1,97,1,98,1,99,1,100,1,101,1,102,
    1,103,1,104,1,105,1,106,1,107,1,108,1,109,1,110,
    1,111,1,112,1,113,1,114,1,115,1,116,1,117,1,118,
    1,119,1,120,1,121,1,122,1,65,1,66,1,68,1,69,
    1,70,1,71,1,74,1,75,1,76,1,77,1,78,1,79,
    1,80,1,81,1,83,1,84,1,85,1,86,1,87,1,88,
    1,89,1,97,1,98,1,99,1,100,1,101,1,102,1,103,
    1,104,1,105,1,106,1,107,1,108,1,109,1,110,1,111,
    1,112,1,113,1,114,1,115,1,116,1,117,1,118,1,119,
    1,120,1,121,1,122,1,65,1,66,1,68,1,69,1,70,
    1,71,1,73,1,74,1,75,1,76,1,77,1,79,1,83,
    1,84,1,85,1,86,1,87,1,88,1,89,1,97,1,98,
    1,99,1,100,1,101,1,102,1,103,1,104,1,105,1,106,
    1,107,1,108,1,109,1,110,1,111,1,112,1,113,1,114,
    1,115,1,116,1,117,1,118,1,119,1,120,1,121,1,122,
    1,65,1,66,1,67,1,68,1,69,1,70,1,71,1,72,
    1,73,1,74,1,75,1,76,1,77,1,78,1,79,1,80,
    1,81,1,82,1,83,1,84,1,85,1,86,1,87,1,88,
    1,89,1,90,1,97,1,98,1,99,1,100,1,101,1,102,
    1,103,1,104,1,105,1,106,1,107,1,108,1,109,1,110,
    1,111,1,112,1,113,1,114,1,115,1,116,1,117,1,118,
    1,119,1,120,1,121,1,122,1,65,1,66,1,67,1,68,
    1,69,1,70,1,71,1,72,1,73,1,74,1,75,1,76,
    1,77,1,78,1,79,1,80,1,81,1,82,1,83,1,84,
    1,85,1,86,1,87,1,88,1,89,1,90,1,97,1,98,
    1,99,1,100,1,101,1,102,1,103,1,104,1,105,1,106,
    1,107,1,108,1,109,1,110,1,111,1,112,1,113,1,114,
    1,115,1,116,1,117,1,118,1,119,1,120,1,121,1,122,
    1,65,1,66,1,67,1,68,1,69,1,70,1,71,1,72,
    1,73,1,74,1,75,1,76,1,77,1,78,1,79,1,80,
    1,81,1,82,1,83,1,84,1,85,1,86,1,87,1,88,
    1,89,1,90,1,97,1,98,1,99,1,100,1,101,1,102,
    1,103,1,104,1,105,1,106,1,107,1,108,1,109,1,110,
    1,111,1,112,1,113,1,114,1,115,1,116,1,117,1,118,
    1,119,1,120,1,121,1,122,1,65,1,66,1,67,1,68,
    1,69,1,70,1,71,1,72,1,73,1,74,1,75,1,76,
    1,77,1,78,1,79,1,80,1,81,1,82,1,83,1,84,
    1,85,1,86,1,87,1,88,1,89,1,90,1,97,1,98,
    1,99,1,100,1,101,1,102,1,103,1,104,1,105,1,106,
    1,107,1,108,1,109,1,110,1,111,1,112,1,113,1,114,
    1,115,1,116,1,117,1,118,1,119,1,120,1,121,1,122,
    1,65,1,66,1,67,1,68,1,69,1,70,1,71,1,72,
    1,73,1,74,1,75,1,76,1,77,1,78,1,79,1,80,
    1,81,1,82,1,83,1,84,1,85,1,86,1,87,1,88,
    1,89,1,90,1,97,1,98,1,99,1,100,1,101,1,102,
    1,103,1,104,1,105,1,106,1,107,1,108,1,109,1,110,
    1,111,1,112,1,113,1,114,1,115,1,116,1,117,1,118,
    1,119,1,120,1,121,1,122,1,65,1,66,1,67,1,68,
    1,69,1,70,1,71,1,72,1,73,1,74,1,75,1,76,
    1,77,1,78,1,79,1,80,1,81,1,82,1,83,1,84,
    1,85,1,86,1,87,1,88,1,89,1,90,1,97,1,98,
    1,99,1,100,1,101,1,102,1,103,1,104,1,105,1,106,
    1,107,1,108,1,109,1,110,1,111,1,112,1,113,1,114,
    1,115,1,116,1,117,1,118,1,119,1,120,1,121,1,122,
    1,305,1,567,1,913,1,914,1,915,1,916,1,917,1,918,
    1,919,1,920,1,921,1,922,1,923,1,924,1,925,1,926,
    1,927,1,928,1,929,1,920,1,931,1,932,1,933,1,934,
    1,935,1,936,1,937,1,8711,1,945,1,946,1,947,1,948,
    1,949,1,950,1,951,1,952,1,953,1,954,1,955,1,956,
    1,957,1,958,1,959,1,960,1,961,1,962,1,963,1,964,
    1,965,1,966,1,967,1,968,1,969,1,8706,1,949,1,952,
    1,954,1,966,1,961,1,960,1,913,1,914,1,915,1,916,
    1,917,1,918,1,919,1,920,1,921,1,922,1,923,1,924,
    1,925,1,926,1,927,1,928,1,929,1,920,1,931,1,932,
    1,933,1,934,1,935,1,936,1,937,1,8711,1,945,1,946,
    1,947,1,948,1,949,1,950,1,951,1,952,1,953,1,954,
    1,955,1,956,1,957,1,958,1,959,1,960,1,961,1,962,
    1,963,1,964,1,965,1,966,1,967,1,968,1,969,1,8706,
    1,949,1,952,1,954,1,966,1,961,1,960,1,913,1,914,
    1,915,1,916,1,917,1,918,1,919,1,920,1,921,1,922,
    1,923,1,924,1,925,1,926,1,927,1,928,1,929,1,920,
    1,931,1,932,1,933,1,934,1,935,1,936,1,937,1,8711,
    1,945,1,946,1,947,1,948,1,949,1,950,1,951,1,952,
    1,953,1,954,1,955,1,956,1,957,1,958,1,959,1,960,
    1,961,1,962,1,963,1,964,1,965,1,966,1,967,1,968,
    1,969,1,8706,1,949,1,952,1,954,1,966,1,961,1,960,
    1,913,1,914,1,915,1,916,1,917,1,918,1,919,1,920,
    1,921,1,922,1,923,1,924,1,925,1,926,1,927,1,928,
    1,929,1,920,1,931,1,932,1,933,1,934,1,935,1,936,
    1,937,1,8711,1,945,1,946,1,947,1,948,1,949,1,950,
    1,951,1,952,1,953,1,954,1,955,1,956,1,957,1,958,
    1,959,1,960,1,961,1,962,1,963,1,964,1,965,1,966,
    1,967,1,968,1,969,1,8706,1,949,1,952,1,954,1,966,
    1,961,1,960,1,913,1,914,1,915,1,916,1,917,1,918,
    1,919,1,920,1,921,1,922,1,923,1,924,1,925,1,926,
    1,927,1,928,1,929,1,920,1,931,1,932,1,933,1,934,
    1,935,1,936,1,937,1,8711,1,945,1,946,1,947,1,948,
    1,949,1,950,1,951,1,952,1,953,1,954,1,955,1,956,
    1,957,1,958,1,959,1,960,1,961,1,962,1,963,1,964,
    1,965,1,966,1,967,1,968,1,969,1,8706,1,949,1,952,
    1,954,1,966,1,961,1,960,1,988,1,989,1,48,1,49,
    1,50,1,51,1,52,1,53,1,54,1,55,1,56,1,57,
    1,48,1,49,1,50,1,51,1,52,1,53,1,54,1,55,
    1,56,1,57,1,48,1,49,1,50,1,51,1,52,1,53,
    1,54,1,55,1,56,1,57,1,48,1,49,1,50,1,51,
    1,52,1,53,1,54,1,55,1,56,1,57,1,48,1,49,
    1,50,1,51,1,52,1,53,1,54,1,55,1,56,1,57,
    1,1575,1,1576,1,1580,1,1583,1,1608,1,1586,1,1581,1,1591,
    1,1610,1,1603,1,1604,1,1605,1,1606,1,1587,1,1593,1,1601,
    1,1589,1,1602,1,1585,1,1588,1,1578,1,1579,1,1582,1,1584,
    1,1590,1,1592,1,1594,1,1646,1,1722,1,1697,1,1647,1,1576,
    1,1580,1,1607,1,1581,1,1610,1,1603,1,1604,1,1605,1,1606,
    1,1587,1,1593,1,1601,1,1589,1,1602,1,1588,1,1578,1,1579,
    1,1582,1,1590,1,1594,1,1580,1,1581,1,1610,1,1604,1,1606,
    1,1587,1,1593,1,1589,1,1602,1,1588,1,1582,1,1590,1,1594,
    1,1722,1,1647,1,1576,1,1580,1,1607,1,1581,1,1591,1,1610,
    1,1603,1,1605,1,1606,1,1587,1,1593,1,1601,1,1589,1,1602,
    1,1588,1,1578,1,1579,1,1582,1,1590,1,1592,1,1594,1,1646,
    1,1697,1,1575,1,1576,1,1580,1,1583,1,1607,1,1608,1,1586,
    1,1581,1,1591,1,1610,1,1604,1,1605,1,1606,1,1587,1,1593,
    1,1601,1,1589,1,1602,1,1585,1,1588,1,1578,1,1579,1,1582,
    1,1584,1,1590,1,1592,1,1594,1,1576,1,1580,1,1583,1,1608,
    1,1586,1,1581,1,1591,1,1610,1,1604,1,1605,1,1606,1,1587,
    1,1593,1,1601,1,1589,1,1602,1,1585,1,1588,1,1578,1,1579,
    1,1582,1,1584,1,1590,1,1592,1,1594,2,48,46,2,48,44,
    2,49,44,2,50,44,2,51,44,2,52,44,2,53,44,2,
    54,44,2,55,44,2,56,44,2,57,44,3,40,65,41,3,
    40,66,41,3,40,67,41,3,40,68,41,3,40,69,41,3,
    40,70,41,3,40,71,41,3,40,72,41,3,40,73,41,3,
    40,74,41,3,40,75,41,3,40,76,41,3,40,77,41,3,
    40,78,41,3,40,79,41,3,40,80,41,3,40,81,41,3,
    40,82,41,3,40,83,41,3,40,84,41,3,40,85,41,3,
    40,86,41,3,40,87,41,3,40,88,41,3,40,89,41,3,
    40,90,41,3,12308,83,12309,1,67,1,82,2,67,68,2,87,
    90,1,65,1,66,1,67,1,68,1,69,1,70,1,71,1,
    72,1,73,1,74,1,75,1,76,1,77,1,78,1,79,1,
    80,1,81,1,82,1,83,1,84,1,85,1,86,1,87,1,
    88,1,89,1,90,2,72,86,2,77,86,2,83,68,2,83,
    83,3,80,80,86,2,87,67,2,77,67,2,77,68,2,77,
    82,2,68,74,2,12411,12363,2,12467,12467,1,12469,1,25163,1,23383,
    1,21452,2,12486,12441,1,20108,1,22810,1,35299,1,22825,1,20132,1,
    26144,1,28961,1,26009,1,21069,1,24460,1,20877,1,26032,1,21021,1,
    32066,1,29983,1,36009,1,22768,1,21561,1,28436,1,25237,1,25429,1,
    19968,1,19977,1,36938,1,24038,1,20013,1,21491,1,25351,1,36208,1,
    25171,1,31105,1,31354,1,21512,1,28288,1,26377,1,26376,1,30003,1,
    21106,1,21942,1,37197,3,12308,26412,12309,3,12308,19977,12309,3,12308,20108,
    12309,3,12308,23433,12309,3,12308,28857,12309,3,12308,25171,12309,3,12308,30423,
    12309,3,12308,21213,12309,3,12308,25943,12309,1,24471,1,21487,1,48,1,
    49,1,50,1,51,1,52,1,53,1,54,1,55,1,56,1,
    57,
];
static DECOMPOSE_COMPAT_LOOKUP: &[(u32, u32)] = &[
    (0xA0, 2),
    (0xA8, 4),
    (0xAA, 7),
    (0xAF, 9),
    (0xB2, 12),
    (0xB3, 14),
    (0xB4, 16),
    (0xB5, 19),
    (0xB8, 21),
    (0xB9, 24),
    (0xBA, 26),
    (0xBC, 28),
    (0xBD, 32),
    (0xBE, 36),
    (0xC0, 1),
    (0xC1, 1),
    (0xC2, 1),
    (0xC3, 1),
    (0xC4, 1),
    (0xC5, 1),
    (0xC7, 1),
    (0xC8, 1),
    (0xC9, 1),
    (0xCA, 1),
    (0xCB, 1),
    (0xCC, 1),
    (0xCD, 1),
    (0xCE, 1),
    (0xCF, 1),
    (0xD1, 1),
    (0xD2, 1),
    (0xD3, 1),
    (0xD4, 1),
    (0xD5, 1),
    (0xD6, 1),
    (0xD9, 1),
    (0xDA, 1),
    (0xDB, 1),
    (0xDC, 1),
    (0xDD, 1),
    (0xE0, 1),
    (0xE1, 1),
    (0xE2, 1),
    (0xE3, 1),
    (0xE4, 1),
    (0xE5, 1),
    (0xE7, 1),
    (0xE8, 1),
    (0xE9, 1),
    (0xEA, 1),
    (0xEB, 1),
    (0xEC, 1),
    (0xED, 1),
    (0xEE, 1),
    (0xEF, 1),
    (0xF1, 1),
    (0xF2, 1),
    (0xF3, 1),
    (0xF4, 1),
    (0xF5, 1),
    (0xF6, 1),
    (0xF9, 1),
    (0xFA, 1),
    (0xFB, 1),
    (0xFC, 1),
    (0xFD, 1),
    (0xFF, 1),
    (0x100, 1),
    (0x101, 1),
    (0x102, 1),
    (0x103, 1),
    (0x104, 1),
    (0x105, 1),
    (0x106, 1),
    (0x107, 1),
    (0x108, 1),
    (0x109, 1),
    (0x10A, 1),
    (0x10B, 1),
    (0x10C, 1),
    (0x10D, 1),
    (0x10E, 1),
    (0x10F, 1),
    (0x112, 1),
    (0x113, 1),
    (0x114, 1),
    (0x115, 1),
    (0x116, 1),
    (0x117, 1),
    (0x118, 1),
    (0x119, 1),
    (0x11A, 1),
    (0x11B, 1),
    (0x11C, 1),
    (0x11D, 1),
    (0x11E, 1),
    (0x11F, 1),
    (0x120, 1),
    (0x121, 1),
    (0x122, 1),
    (0x123, 1),
    (0x124, 1),
    (0x125, 1),
    (0x128, 1),
    (0x129, 1),
    (0x12A, 1),
    (0x12B, 1),
    (0x12C, 1),
    (0x12D, 1),
    (0x12E, 1),
    (0x12F, 1),
    (0x130, 1),
    (0x132, 40),
    (0x133, 43),
    (0x134, 1),
    (0x135, 1),
    (0x136, 1),
    (0x137, 1),
    (0x139, 1),
    (0x13A, 1),
    (0x13B, 1),
    (0x13C, 1),
    (0x13D, 1),
    (0x13E, 1),
    (0x13F, 46),
    (0x140, 49),
    (0x143, 1),
    (0x144, 1),
    (0x145, 1),
    (0x146, 1),
    (0x147, 1),
    (0x148, 1),
    (0x149, 52),
    (0x14C, 1),
    (0x14D, 1),
    (0x14E, 1),
    (0x14F, 1),
    (0x150, 1),
    (0x151, 1),
    (0x154, 1),
    (0x155, 1),
    (0x156, 1),
    (0x157, 1),
    (0x158, 1),
    (0x159, 1),
    (0x15A, 1),
    (0x15B, 1),
    (0x15C, 1),
    (0x15D, 1),
    (0x15E, 1),
    (0x15F, 1),
    (0x160, 1),
    (0x161, 1),
    (0x162, 1),
    (0x163, 1),
    (0x164, 1),
    (0x165, 1),
    (0x168, 1),
    (0x169, 1),
    (0x16A, 1),
    (0x16B, 1),
    (0x16C, 1),
    (0x16D, 1),
    (0x16E, 1),
    (0x16F, 1),
    (0x170, 1),
    (0x171, 1),
    (0x172, 1),
    (0x173, 1),
    (0x174, 1),
    (0x175, 1),
    (0x176, 1),
    (0x177, 1),
    (0x178, 1),
    (0x179, 1),
    (0x17A, 1),
    (0x17B, 1),
    (0x17C, 1),
    (0x17D, 1),
    (0x17E, 1),
    (0x17F, 55),
    (0x1A0, 1),
    (0x1A1, 1),
    (0x1AF, 1),
    (0x1B0, 1),
    (0x1C4, 57),
    (0x1C5, 61),
    (0x1C6, 65),
    (0x1C7, 69),
    (0x1C8, 72),
    (0x1C9, 75),
    (0x1CA, 78),
    (0x1CB, 81),
    (0x1CC, 84),
    (0x1CD, 1),
    (0x1CE, 1),
    (0x1CF, 1),
    (0x1D0, 1),
    (0x1D1, 1),
    (0x1D2, 1),
    (0x1D3, 1),
    (0x1D4, 1),
    (0x1D5, 1),
    (0x1D6, 1),
    (0x1D7, 1),
    (0x1D8, 1),
    (0x1D9, 1),
    (0x1DA, 1),
    (0x1DB, 1),
    (0x1DC, 1),
    (0x1DE, 1),
    (0x1DF, 1),
    (0x1E0, 1),
    (0x1E1, 1),
    (0x1E2, 1),
    (0x1E3, 1),
    (0x1E6, 1),
    (0x1E7, 1),
    (0x1E8, 1),
    (0x1E9, 1),
    (0x1EA, 1),
    (0x1EB, 1),
    (0x1EC, 1),
    (0x1ED, 1),
    (0x1EE, 1),
    (0x1EF, 1),
    (0x1F0, 1),
    (0x1F1, 87),
    (0x1F2, 90),
    (0x1F3, 93),
    (0x1F4, 1),
    (0x1F5, 1),
    (0x1F8, 1),
    (0x1F9, 1),
    (0x1FA, 1),
    (0x1FB, 1),
    (0x1FC, 1),
    (0x1FD, 1),
    (0x1FE, 1),
    (0x1FF, 1),
    (0x200, 1),
    (0x201, 1),
    (0x202, 1),
    (0x203, 1),
    (0x204, 1),
    (0x205, 1),
    (0x206, 1),
    (0x207, 1),
    (0x208, 1),
    (0x209, 1),
    (0x20A, 1),
    (0x20B, 1),
    (0x20C, 1),
    (0x20D, 1),
    (0x20E, 1),
    (0x20F, 1),
    (0x210, 1),
    (0x211, 1),
    (0x212, 1),
    (0x213, 1),
    (0x214, 1),
    (0x215, 1),
    (0x216, 1),
    (0x217, 1),
    (0x218, 1),
    (0x219, 1),
    (0x21A, 1),
    (0x21B, 1),
    (0x21E, 1),
    (0x21F, 1),
    (0x226, 1),
    (0x227, 1),
    (0x228, 1),
    (0x229, 1),
    (0x22A, 1),
    (0x22B, 1),
    (0x22C, 1),
    (0x22D, 1),
    (0x22E, 1),
    (0x22F, 1),
    (0x230, 1),
    (0x231, 1),
    (0x232, 1),
    (0x233, 1),
    (0x2B0, 96),
    (0x2B1, 98),
    (0x2B2, 100),
    (0x2B3, 102),
    (0x2B4, 104),
    (0x2B5, 106),
    (0x2B6, 108),
    (0x2B7, 110),
    (0x2B8, 112),
    (0x2D8, 114),
    (0x2D9, 117),
    (0x2DA, 120),
    (0x2DB, 123),
    (0x2DC, 126),
    (0x2DD, 129),
    (0x2E0, 132),
    (0x2E1, 134),
    (0x2E2, 136),
    (0x2E3, 138),
    (0x2E4, 140),
    (0x340, 1),
    (0x341, 1),
    (0x343, 1),
    (0x344, 1),
    (0x374, 1),
    (0x37A, 142),
    (0x37E, 1),
    (0x384, 145),
    (0x385, 148),
    (0x386, 1),
    (0x387, 1),
    (0x388, 1),
    (0x389, 1),
    (0x38A, 1),
    (0x38C, 1),
    (0x38E, 1),
    (0x38F, 1),
    (0x390, 1),
    (0x3AA, 1),
    (0x3AB, 1),
    (0x3AC, 1),
    (0x3AD, 1),
    (0x3AE, 1),
    (0x3AF, 1),
    (0x3B0, 1),
    (0x3CA, 1),
    (0x3CB, 1),
    (0x3CC, 1),
    (0x3CD, 1),
    (0x3CE, 1),
    (0x3D0, 152),
    (0x3D1, 154),
    (0x3D2, 156),
    (0x3D3, 158),
    (0x3D4, 161),
    (0x3D5, 164),
    (0x3D6, 166),
    (0x3F0, 168),
    (0x3F1, 170),
    (0x3F2, 172),
    (0x3F4, 174),
    (0x3F5, 176),
    (0x3F9, 178),
    (0x400, 1),
    (0x401, 1),
    (0x403, 1),
    (0x407, 1),
    (0x40C, 1),
    (0x40D, 1),
    (0x40E, 1),
    (0x419, 1),
    (0x439, 1),
    (0x450, 1),
    (0x451, 1),
    (0x453, 1),
    (0x457, 1),
    (0x45C, 1),
    (0x45D, 1),
    (0x45E, 1),
    (0x476, 1),
    (0x477, 1),
    (0x4C1, 1),
    (0x4C2, 1),
    (0x4D0, 1),
    (0x4D1, 1),
    (0x4D2, 1),
    (0x4D3, 1),
    (0x4D6, 1),
    (0x4D7, 1),
    (0x4DA, 1),
    (0x4DB, 1),
    (0x4DC, 1),
    (0x4DD, 1),
    (0x4DE, 1),
    (0x4DF, 1),
    (0x4E2, 1),
    (0x4E3, 1),
    (0x4E4, 1),
    (0x4E5, 1),
    (0x4E6, 1),
    (0x4E7, 1),
    (0x4EA, 1),
    (0x4EB, 1),
    (0x4EC, 1),
    (0x4ED, 1),
    (0x4EE, 1),
    (0x4EF, 1),
    (0x4F0, 1),
    (0x4F1, 1),
    (0x4F2, 1),
    (0x4F3, 1),
    (0x4F4, 1),
    (0x4F5, 1),
    (0x4F8, 1),
    (0x4F9, 1),
    (0x587, 180),
    (0x622, 1),
    (0x623, 1),
    (0x624, 1),
    (0x625, 1),
    (0x626, 1),
    (0x675, 183),
    (0x676, 186),
    (0x677, 189),
    (0x678, 192),
    (0x6C0, 1),
    (0x6C2, 1),
    (0x6D3, 1),
    (0x929, 1),
    (0x931, 1),
    (0x934, 1),
    (0x958, 1),
    (0x959, 1),
    (0x95A, 1),
    (0x95B, 1),
    (0x95C, 1),
    (0x95D, 1),
    (0x95E, 1),
    (0x95F, 1),
    (0x9CB, 1),
    (0x9CC, 1),
    (0x9DC, 1),
    (0x9DD, 1),
    (0x9DF, 1),
    (0xA33, 1),
    (0xA36, 1),
    (0xA59, 1),
    (0xA5A, 1),
    (0xA5B, 1),
    (0xA5E, 1),
    (0xB48, 1),
    (0xB4B, 1),
    (0xB4C, 1),
    (0xB5C, 1),
    (0xB5D, 1),
    (0xB94, 1),
    (0xBCA, 1),
    (0xBCB, 1),
    (0xBCC, 1),
    (0xC48, 1),
    (0xCC0, 1),
    (0xCC7, 1),
    (0xCC8, 1),
    (0xCCA, 1),
    (0xCCB, 1),
    (0xD4A, 1),
    (0xD4B, 1),
    (0xD4C, 1),
    (0xDDA, 1),
    (0xDDC, 1),
    (0xDDD, 1),
    (0xDDE, 1),
    (0xE33, 195),
    (0xEB3, 198),
    (0xEDC, 201),
    (0xEDD, 204),
    (0xF0C, 207),
    (0xF43, 1),
    (0xF4D, 1),
    (0xF52, 1),
    (0xF57, 1),
    (0xF5C, 1),
    (0xF69, 1),
    (0xF73, 1),
    (0xF75, 1),
    (0xF76, 1),
    (0xF77, 209),
    (0xF78, 1),
    (0xF79, 213),
    (0xF81, 1),
    (0xF93, 1),
    (0xF9D, 1),
    (0xFA2, 1),
    (0xFA7, 1),
    (0xFAC, 1),
    (0xFB9, 1),
    (0x1026, 1),
    (0x10FC, 217),
    (0x1B06, 1),
    (0x1B08, 1),
    (0x1B0A, 1),
    (0x1B0C, 1),
    (0x1B0E, 1),
    (0x1B12, 1),
    (0x1B3B, 1),
    (0x1B3D, 1),
    (0x1B40, 1),
    (0x1B41, 1),
    (0x1B43, 1),
    (0x1D2C, 219),
    (0x1D2D, 221),
    (0x1D2E, 223),
    (0x1D30, 225),
    (0x1D31, 227),
    (0x1D32, 229),
    (0x1D33, 231),
    (0x1D34, 233),
    (0x1D35, 235),
    (0x1D36, 237),
    (0x1D37, 239),
    (0x1D38, 241),
    (0x1D39, 243),
    (0x1D3A, 245),
    (0x1D3C, 247),
    (0x1D3D, 249),
    (0x1D3E, 251),
    (0x1D3F, 253),
    (0x1D40, 255),
    (0x1D41, 257),
    (0x1D42, 259),
    (0x1D43, 261),
    (0x1D44, 263),
    (0x1D45, 265),
    (0x1D46, 267),
    (0x1D47, 269),
    (0x1D48, 271),
    (0x1D49, 273),
    (0x1D4A, 275),
    (0x1D4B, 277),
    (0x1D4C, 279),
    (0x1D4D, 281),
    (0x1D4F, 283),
    (0x1D50, 285),
    (0x1D51, 287),
    (0x1D52, 289),
    (0x1D53, 291),
    (0x1D54, 293),
    (0x1D55, 295),
    (0x1D56, 297),
    (0x1D57, 299),
    (0x1D58, 301),
    (0x1D59, 303),
    (0x1D5A, 305),
    (0x1D5B, 307),
    (0x1D5C, 309),
    (0x1D5D, 311),
    (0x1D5E, 313),
    (0x1D5F, 315),
    (0x1D60, 317),
    (0x1D61, 319),
    (0x1D62, 321),
    (0x1D63, 323),
    (0x1D64, 325),
    (0x1D65, 327),
    (0x1D66, 329),
    (0x1D67, 331),
    (0x1D68, 333),
    (0x1D69, 335),
    (0x1D6A, 337),
    (0x1D78, 339),
    (0x1D9B, 341),
    (0x1D9C, 343),
    (0x1D9D, 345),
    (0x1D9E, 347),
    (0x1D9F, 349),
    (0x1DA0, 351),
    (0x1DA1, 353),
    (0x1DA2, 355),
    (0x1DA3, 357),
    (0x1DA4, 359),
    (0x1DA5, 361),
    (0x1DA6, 363),
    (0x1DA7, 365),
    (0x1DA8, 367),
    (0x1DA9, 369),
    (0x1DAA, 371),
    (0x1DAB, 373),
    (0x1DAC, 375),
    (0x1DAD, 377),
    (0x1DAE, 379),
    (0x1DAF, 381),
    (0x1DB0, 383),
    (0x1DB1, 385),
    (0x1DB2, 387),
    (0x1DB3, 389),
    (0x1DB4, 391),
    (0x1DB5, 393),
    (0x1DB6, 395),
    (0x1DB7, 397),
    (0x1DB8, 399),
    (0x1DB9, 401),
    (0x1DBA, 403),
    (0x1DBB, 405),
    (0x1DBC, 407),
    (0x1DBD, 409),
    (0x1DBE, 411),
    (0x1DBF, 413),
    (0x1E00, 1),
    (0x1E01, 1),
    (0x1E02, 1),
    (0x1E03, 1),
    (0x1E04, 1),
    (0x1E05, 1),
    (0x1E06, 1),
    (0x1E07, 1),
    (0x1E08, 1),
    (0x1E09, 1),
    (0x1E0A, 1),
    (0x1E0B, 1),
    (0x1E0C, 1),
    (0x1E0D, 1),
    (0x1E0E, 1),
    (0x1E0F, 1),
    (0x1E10, 1),
    (0x1E11, 1),
    (0x1E12, 1),
    (0x1E13, 1),
    (0x1E14, 1),
    (0x1E15, 1),
    (0x1E16, 1),
    (0x1E17, 1),
    (0x1E18, 1),
    (0x1E19, 1),
    (0x1E1A, 1),
    (0x1E1B, 1),
    (0x1E1C, 1),
    (0x1E1D, 1),
    (0x1E1E, 1),
    (0x1E1F, 1),
    (0x1E20, 1),
    (0x1E21, 1),
    (0x1E22, 1),
    (0x1E23, 1),
    (0x1E24, 1),
    (0x1E25, 1),
    (0x1E26, 1),
    (0x1E27, 1),
    (0x1E28, 1),
    (0x1E29, 1),
    (0x1E2A, 1),
    (0x1E2B, 1),
    (0x1E2C, 1),
    (0x1E2D, 1),
    (0x1E2E, 1),
    (0x1E2F, 1),
    (0x1E30, 1),
    (0x1E31, 1),
    (0x1E32, 1),
    (0x1E33, 1),
    (0x1E34, 1),
    (0x1E35, 1),
    (0x1E36, 1),
    (0x1E37, 1),
    (0x1E38, 1),
    (0x1E39, 1),
    (0x1E3A, 1),
    (0x1E3B, 1),
    (0x1E3C, 1),
    (0x1E3D, 1),
    (0x1E3E, 1),
    (0x1E3F, 1),
    (0x1E40, 1),
    (0x1E41, 1),
    (0x1E42, 1),
    (0x1E43, 1),
    (0x1E44, 1),
    (0x1E45, 1),
    (0x1E46, 1),
    (0x1E47, 1),
    (0x1E48, 1),
    (0x1E49, 1),
    (0x1E4A, 1),
    (0x1E4B, 1),
    (0x1E4C, 1),
    (0x1E4D, 1),
    (0x1E4E, 1),
    (0x1E4F, 1),
    (0x1E50, 1),
    (0x1E51, 1),
    (0x1E52, 1),
    (0x1E53, 1),
    (0x1E54, 1),
    (0x1E55, 1),
    (0x1E56, 1),
    (0x1E57, 1),
    (0x1E58, 1),
    (0x1E59, 1),
    (0x1E5A, 1),
    (0x1E5B, 1),
    (0x1E5C, 1),
    (0x1E5D, 1),
    (0x1E5E, 1),
    (0x1E5F, 1),
    (0x1E60, 1),
    (0x1E61, 1),
    (0x1E62, 1),
    (0x1E63, 1),
    (0x1E64, 1),
    (0x1E65, 1),
    (0x1E66, 1),
    (0x1E67, 1),
    (0x1E68, 1),
    (0x1E69, 1),
    (0x1E6A, 1),
    (0x1E6B, 1),
    (0x1E6C, 1),
    (0x1E6D, 1),
    (0x1E6E, 1),
    (0x1E6F, 1),
    (0x1E70, 1),
    (0x1E71, 1),
    (0x1E72, 1),
    (0x1E73, 1),
    (0x1E74, 1),
    (0x1E75, 1),
    (0x1E76, 1),
    (0x1E77, 1),
    (0x1E78, 1),
    (0x1E79, 1),
    (0x1E7A, 1),
    (0x1E7B, 1),
    (0x1E7C, 1),
    (0x1E7D, 1),
    (0x1E7E, 1),
    (0x1E7F, 1),
    (0x1E80, 1),
    (0x1E81, 1),
    (0x1E82, 1),
    (0x1E83, 1),
    (0x1E84, 1),
    (0x1E85, 1),
    (0x1E86, 1),
    (0x1E87, 1),
    (0x1E88, 1),
    (0x1E89, 1),
    (0x1E8A, 1),
    (0x1E8B, 1),
    (0x1E8C, 1),
    (0x1E8D, 1),
    (0x1E8E, 1),
    (0x1E8F, 1),
    (0x1E90, 1),
    (0x1E91, 1),
    (0x1E92, 1),
    (0x1E93, 1),
    (0x1E94, 1),
    (0x1E95, 1),
    (0x1E96, 1),
    (0x1E97, 1),
    (0x1E98, 1),
    (0x1E99, 1),
    (0x1E9A, 415),
    (0x1E9B, 418),
    (0x1EA0, 1),
    (0x1EA1, 1),
    (0x1EA2, 1),
    (0x1EA3, 1),
    (0x1EA4, 1),
    (0x1EA5, 1),
    (0x1EA6, 1),
    (0x1EA7, 1),
    (0x1EA8, 1),
    (0x1EA9, 1),
    (0x1EAA, 1),
    (0x1EAB, 1),
    (0x1EAC, 1),
    (0x1EAD, 1),
    (0x1EAE, 1),
    (0x1EAF, 1),
    (0x1EB0, 1),
    (0x1EB1, 1),
    (0x1EB2, 1),
    (0x1EB3, 1),
    (0x1EB4, 1),
    (0x1EB5, 1),
    (0x1EB6, 1),
    (0x1EB7, 1),
    (0x1EB8, 1),
    (0x1EB9, 1),
    (0x1EBA, 1),
    (0x1EBB, 1),
    (0x1EBC, 1),
    (0x1EBD, 1),
    (0x1EBE, 1),
    (0x1EBF, 1),
    (0x1EC0, 1),
    (0x1EC1, 1),
    (0x1EC2, 1),
    (0x1EC3, 1),
    (0x1EC4, 1),
    (0x1EC5, 1),
    (0x1EC6, 1),
    (0x1EC7, 1),
    (0x1EC8, 1),
    (0x1EC9, 1),
    (0x1ECA, 1),
    (0x1ECB, 1),
    (0x1ECC, 1),
    (0x1ECD, 1),
    (0x1ECE, 1),
    (0x1ECF, 1),
    (0x1ED0, 1),
    (0x1ED1, 1),
    (0x1ED2, 1),
    (0x1ED3, 1),
    (0x1ED4, 1),
    (0x1ED5, 1),
    (0x1ED6, 1),
    (0x1ED7, 1),
    (0x1ED8, 1),
    (0x1ED9, 1),
    (0x1EDA, 1),
    (0x1EDB, 1),
    (0x1EDC, 1),
    (0x1EDD, 1),
    (0x1EDE, 1),
    (0x1EDF, 1),
    (0x1EE0, 1),
    (0x1EE1, 1),
    (0x1EE2, 1),
    (0x1EE3, 1),
    (0x1EE4, 1),
    (0x1EE5, 1),
    (0x1EE6, 1),
    (0x1EE7, 1),
    (0x1EE8, 1),
    (0x1EE9, 1),
    (0x1EEA, 1),
    (0x1EEB, 1),
    (0x1EEC, 1),
    (0x1EED, 1),
    (0x1EEE, 1),
    (0x1EEF, 1),
    (0x1EF0, 1),
    (0x1EF1, 1),
    (0x1EF2, 1),
    (0x1EF3, 1),
    (0x1EF4, 1),
    (0x1EF5, 1),
    (0x1EF6, 1),
    (0x1EF7, 1),
    (0x1EF8, 1),
    (0x1EF9, 1),
    (0x1F00, 1),
    (0x1F01, 1),
    (0x1F02, 1),
    (0x1F03, 1),
    (0x1F04, 1),
    (0x1F05, 1),
    (0x1F06, 1),
    (0x1F07, 1),
    (0x1F08, 1),
    (0x1F09, 1),
    (0x1F0A, 1),
    (0x1F0B, 1),
    (0x1F0C, 1),
    (0x1F0D, 1),
    (0x1F0E, 1),
    (0x1F0F, 1),
    (0x1F10, 1),
    (0x1F11, 1),
    (0x1F12, 1),
    (0x1F13, 1),
    (0x1F14, 1),
    (0x1F15, 1),
    (0x1F18, 1),
    (0x1F19, 1),
    (0x1F1A, 1),
    (0x1F1B, 1),
    (0x1F1C, 1),
    (0x1F1D, 1),
    (0x1F20, 1),
    (0x1F21, 1),
    (0x1F22, 1),
    (0x1F23, 1),
    (0x1F24, 1),
    (0x1F25, 1),
    (0x1F26, 1),
    (0x1F27, 1),
    (0x1F28, 1),
    (0x1F29, 1),
    (0x1F2A, 1),
    (0x1F2B, 1),
    (0x1F2C, 1),
    (0x1F2D, 1),
    (0x1F2E, 1),
    (0x1F2F, 1),
    (0x1F30, 1),
    (0x1F31, 1),
    (0x1F32, 1),
    (0x1F33, 1),
    (0x1F34, 1),
    (0x1F35, 1),
    (0x1F36, 1),
    (0x1F37, 1),
    (0x1F38, 1),
    (0x1F39, 1),
    (0x1F3A, 1),
    (0x1F3B, 1),
    (0x1F3C, 1),
    (0x1F3D, 1),
    (0x1F3E, 1),
    (0x1F3F, 1),
    (0x1F40, 1),
    (0x1F41, 1),
    (0x1F42, 1),
    (0x1F43, 1),
    (0x1F44, 1),
    (0x1F45, 1),
    (0x1F48, 1),
    (0x1F49, 1),
    (0x1F4A, 1),
    (0x1F4B, 1),
    (0x1F4C, 1),
    (0x1F4D, 1),
    (0x1F50, 1),
    (0x1F51, 1),
    (0x1F52, 1),
    (0x1F53, 1),
    (0x1F54, 1),
    (0x1F55, 1),
    (0x1F56, 1),
    (0x1F57, 1),
    (0x1F59, 1),
    (0x1F5B, 1),
    (0x1F5D, 1),
    (0x1F5F, 1),
    (0x1F60, 1),
    (0x1F61, 1),
    (0x1F62, 1),
    (0x1F63, 1),
    (0x1F64, 1),
    (0x1F65, 1),
    (0x1F66, 1),
    (0x1F67, 1),
    (0x1F68, 1),
    (0x1F69, 1),
    (0x1F6A, 1),
    (0x1F6B, 1),
    (0x1F6C, 1),
    (0x1F6D, 1),
    (0x1F6E, 1),
    (0x1F6F, 1),
    (0x1F70, 1),
    (0x1F71, 1),
    (0x1F72, 1),
    (0x1F73, 1),
    (0x1F74, 1),
    (0x1F75, 1),
    (0x1F76, 1),
    (0x1F77, 1),
    (0x1F78, 1),
    (0x1F79, 1),
    (0x1F7A, 1),
    (0x1F7B, 1),
    (0x1F7C, 1),
    (0x1F7D, 1),
    (0x1F80, 1),
    (0x1F81, 1),
    (0x1F82, 1),
    (0x1F83, 1),
    (0x1F84, 1),
    (0x1F85, 1),
    (0x1F86, 1),
    (0x1F87, 1),
    (0x1F88, 1),
    (0x1F89, 1),
    (0x1F8A, 1),
    (0x1F8B, 1),
    (0x1F8C, 1),
    (0x1F8D, 1),
    (0x1F8E, 1),
    (0x1F8F, 1),
    (0x1F90, 1),
    (0x1F91, 1),
    (0x1F92, 1),
    (0x1F93, 1),
    (0x1F94, 1),
    (0x1F95, 1),
    (0x1F96, 1),
    (0x1F97, 1),
    (0x1F98, 1),
    (0x1F99, 1),
    (0x1F9A, 1),
    (0x1F9B, 1),
    (0x1F9C, 1),
    (0x1F9D, 1),
    (0x1F9E, 1),
    (0x1F9F, 1),
    (0x1FA0, 1),
    (0x1FA1, 1),
    (0x1FA2, 1),
    (0x1FA3, 1),
    (0x1FA4, 1),
    (0x1FA5, 1),
    (0x1FA6, 1),
    (0x1FA7, 1),
    (0x1FA8, 1),
    (0x1FA9, 1),
    (0x1FAA, 1),
    (0x1FAB, 1),
    (0x1FAC, 1),
    (0x1FAD, 1),
    (0x1FAE, 1),
    (0x1FAF, 1),
    (0x1FB0, 1),
    (0x1FB1, 1),
    (0x1FB2, 1),
    (0x1FB3, 1),
    (0x1FB4, 1),
    (0x1FB6, 1),
    (0x1FB7, 1),
    (0x1FB8, 1),
    (0x1FB9, 1),
    (0x1FBA, 1),
    (0x1FBB, 1),
    (0x1FBC, 1),
    (0x1FBD, 421),
    (0x1FBE, 1),
    (0x1FBF, 424),
    (0x1FC0, 427),
    (0x1FC1, 430),
    (0x1FC2, 1),
    (0x1FC3, 1),
    (0x1FC4, 1),
    (0x1FC6, 1),
    (0x1FC7, 1),
    (0x1FC8, 1),
    (0x1FC9, 1),
    (0x1FCA, 1),
    (0x1FCB, 1),
    (0x1FCC, 1),
    (0x1FCD, 434),
    (0x1FCE, 438),
    (0x1FCF, 442),
    (0x1FD0, 1),
    (0x1FD1, 1),
    (0x1FD2, 1),
    (0x1FD3, 1),
    (0x1FD6, 1),
    (0x1FD7, 1),
    (0x1FD8, 1),
    (0x1FD9, 1),
    (0x1FDA, 1),
    (0x1FDB, 1),
    (0x1FDD, 446),
    (0x1FDE, 450),
    (0x1FDF, 454),
    (0x1FE0, 1),
    (0x1FE1, 1),
    (0x1FE2, 1),
    (0x1FE3, 1),
    (0x1FE4, 1),
    (0x1FE5, 1),
    (0x1FE6, 1),
    (0x1FE7, 1),
    (0x1FE8, 1),
    (0x1FE9, 1),
    (0x1FEA, 1),
    (0x1FEB, 1),
    (0x1FEC, 1),
    (0x1FED, 458),
    (0x1FEE, 462),
    (0x1FEF, 1),
    (0x1FF2, 1),
    (0x1FF3, 1),
    (0x1FF4, 1),
    (0x1FF6, 1),
    (0x1FF7, 1),
    (0x1FF8, 1),
    (0x1FF9, 1),
    (0x1FFA, 1),
    (0x1FFB, 1),
    (0x1FFC, 1),
    (0x1FFD, 466),
    (0x1FFE, 469),
    (0x2000, 472),
    (0x2001, 474),
    (0x2002, 476),
    (0x2003, 478),
    (0x2004, 480),
    (0x2005, 482),
    (0x2006, 484),
    (0x2007, 486),
    (0x2008, 488),
    (0x2009, 490),
    (0x200A, 492),
    (0x2011, 494),
    (0x2017, 496),
    (0x2024, 499),
    (0x2025, 501),
    (0x2026, 504),
    (0x202F, 508),
    (0x2033, 510),
    (0x2034, 513),
    (0x2036, 517),
    (0x2037, 520),
    (0x203C, 524),
    (0x203E, 527),
    (0x2047, 530),
    (0x2048, 533),
    (0x2049, 536),
    (0x2057, 539),
    (0x205F, 544),
    (0x2070, 546),
    (0x2071, 548),
    (0x2074, 550),
    (0x2075, 552),
    (0x2076, 554),
    (0x2077, 556),
    (0x2078, 558),
    (0x2079, 560),
    (0x207A, 562),
    (0x207B, 564),
    (0x207C, 566),
    (0x207D, 568),
    (0x207E, 570),
    (0x207F, 572),
    (0x2080, 574),
    (0x2081, 576),
    (0x2082, 578),
    (0x2083, 580),
    (0x2084, 582),
    (0x2085, 584),
    (0x2086, 586),
    (0x2087, 588),
    (0x2088, 590),
    (0x2089, 592),
    (0x208A, 594),
    (0x208B, 596),
    (0x208C, 598),
    (0x208D, 600),
    (0x208E, 602),
    (0x2090, 604),
    (0x2091, 606),
    (0x2092, 608),
    (0x2093, 610),
    (0x2094, 612),
    (0x2095, 614),
    (0x2096, 616),
    (0x2097, 618),
    (0x2098, 620),
    (0x2099, 622),
    (0x209A, 624),
    (0x209B, 626),
    (0x209C, 628),
    (0x20A8, 630),
    (0x2100, 633),
    (0x2101, 637),
    (0x2102, 641),
    (0x2103, 643),
    (0x2105, 646),
    (0x2106, 650),
    (0x2107, 654),
    (0x2109, 656),
    (0x210A, 659),
    (0x210B, 661),
    (0x210C, 663),
    (0x210D, 665),
    (0x210E, 667),
    (0x210F, 669),
    (0x2110, 671),
    (0x2111, 673),
    (0x2112, 675),
    (0x2113, 677),
    (0x2115, 679),
    (0x2116, 681),
    (0x2119, 684),
    (0x211A, 686),
    (0x211B, 688),
    (0x211C, 690),
    (0x211D, 692),
    (0x2120, 694),
    (0x2121, 697),
    (0x2122, 701),
    (0x2124, 704),
    (0x2126, 1),
    (0x2128, 706),
    (0x212A, 1),
    (0x212B, 1),
    (0x212C, 708),
    (0x212D, 710),
    (0x212F, 712),
    (0x2130, 714),
    (0x2131, 716),
    (0x2133, 718),
    (0x2134, 720),
    (0x2135, 722),
    (0x2136, 724),
    (0x2137, 726),
    (0x2138, 728),
    (0x2139, 730),
    (0x213B, 732),
    (0x213C, 736),
    (0x213D, 738),
    (0x213E, 740),
    (0x213F, 742),
    (0x2140, 744),
    (0x2145, 746),
    (0x2146, 748),
    (0x2147, 750),
    (0x2148, 752),
    (0x2149, 754),
    (0x2150, 756),
    (0x2151, 760),
    (0x2152, 764),
    (0x2153, 769),
    (0x2154, 773),
    (0x2155, 777),
    (0x2156, 781),
    (0x2157, 785),
    (0x2158, 789),
    (0x2159, 793),
    (0x215A, 797),
    (0x215B, 801),
    (0x215C, 805),
    (0x215D, 809),
    (0x215E, 813),
    (0x215F, 817),
    (0x2160, 820),
    (0x2161, 822),
    (0x2162, 825),
    (0x2163, 829),
    (0x2164, 832),
    (0x2165, 834),
    (0x2166, 837),
    (0x2167, 841),
    (0x2168, 846),
    (0x2169, 849),
    (0x216A, 851),
    (0x216B, 854),
    (0x216C, 858),
    (0x216D, 860),
    (0x216E, 862),
    (0x216F, 864),
    (0x2170, 866),
    (0x2171, 868),
    (0x2172, 871),
    (0x2173, 875),
    (0x2174, 878),
    (0x2175, 880),
    (0x2176, 883),
    (0x2177, 887),
    (0x2178, 892),
    (0x2179, 895),
    (0x217A, 897),
    (0x217B, 900),
    (0x217C, 904),
    (0x217D, 906),
    (0x217E, 908),
    (0x217F, 910),
    (0x2189, 912),
    (0x219A, 1),
    (0x219B, 1),
    (0x21AE, 1),
    (0x21CD, 1),
    (0x21CE, 1),
    (0x21CF, 1),
    (0x2204, 1),
    (0x2209, 1),
    (0x220C, 1),
    (0x2224, 1),
    (0x2226, 1),
    (0x222C, 916),
    (0x222D, 919),
    (0x222F, 923),
    (0x2230, 926),
    (0x2241, 1),
    (0x2244, 1),
    (0x2247, 1),
    (0x2249, 1),
    (0x2260, 1),
    (0x2262, 1),
    (0x226D, 1),
    (0x226E, 1),
    (0x226F, 1),
    (0x2270, 1),
    (0x2271, 1),
    (0x2274, 1),
    (0x2275, 1),
    (0x2278, 1),
    (0x2279, 1),
    (0x2280, 1),
    (0x2281, 1),
    (0x2284, 1),
    (0x2285, 1),
    (0x2288, 1),
    (0x2289, 1),
    (0x22AC, 1),
    (0x22AD, 1),
    (0x22AE, 1),
    (0x22AF, 1),
    (0x22E0, 1),
    (0x22E1, 1),
    (0x22E2, 1),
    (0x22E3, 1),
    (0x22EA, 1),
    (0x22EB, 1),
    (0x22EC, 1),
    (0x22ED, 1),
    (0x2329, 1),
    (0x232A, 1),
    (0x2460, 930),
    (0x2461, 932),
    (0x2462, 934),
    (0x2463, 936),
    (0x2464, 938),
    (0x2465, 940),
    (0x2466, 942),
    (0x2467, 944),
    (0x2468, 946),
    (0x2469, 948),
    (0x246A, 951),
    (0x246B, 954),
    (0x246C, 957),
    (0x246D, 960),
    (0x246E, 963),
    (0x246F, 966),
    (0x2470, 969),
    (0x2471, 972),
    (0x2472, 975),
    (0x2473, 978),
    (0x2474, 981),
    (0x2475, 985),
    (0x2476, 989),
    (0x2477, 993),
    (0x2478, 997),
    (0x2479, 1001),
    (0x247A, 1005),
    (0x247B, 1009),
    (0x247C, 1013),
    (0x247D, 1017),
    (0x247E, 1022),
    (0x247F, 1027),
    (0x2480, 1032),
    (0x2481, 1037),
    (0x2482, 1042),
    (0x2483, 1047),
    (0x2484, 1052),
    (0x2485, 1057),
    (0x2486, 1062),
    (0x2487, 1067),
    (0x2488, 1072),
    (0x2489, 1075),
    (0x248A, 1078),
    (0x248B, 1081),
    (0x248C, 1084),
    (0x248D, 1087),
    (0x248E, 1090),
    (0x248F, 1093),
    (0x2490, 1096),
    (0x2491, 1099),
    (0x2492, 1103),
    (0x2493, 1107),
    (0x2494, 1111),
    (0x2495, 1115),
    (0x2496, 1119),
    (0x2497, 1123),
    (0x2498, 1127),
    (0x2499, 1131),
    (0x249A, 1135),
    (0x249B, 1139),
    (0x249C, 1143),
    (0x249D, 1147),
    (0x249E, 1151),
    (0x249F, 1155),
    (0x24A0, 1159),
    (0x24A1, 1163),
    (0x24A2, 1167),
    (0x24A3, 1171),
    (0x24A4, 1175),
    (0x24A5, 1179),
    (0x24A6, 1183),
    (0x24A7, 1187),
    (0x24A8, 1191),
    (0x24A9, 1195),
    (0x24AA, 1199),
    (0x24AB, 1203),
    (0x24AC, 1207),
    (0x24AD, 1211),
    (0x24AE, 1215),
    (0x24AF, 1219),
    (0x24B0, 1223),
    (0x24B1, 1227),
    (0x24B2, 1231),
    (0x24B3, 1235),
    (0x24B4, 1239),
    (0x24B5, 1243),
    (0x24B6, 1247),
    (0x24B7, 1249),
    (0x24B8, 1251),
    (0x24B9, 1253),
    (0x24BA, 1255),
    (0x24BB, 1257),
    (0x24BC, 1259),
    (0x24BD, 1261),
    (0x24BE, 1263),
    (0x24BF, 1265),
    (0x24C0, 1267),
    (0x24C1, 1269),
    (0x24C2, 1271),
    (0x24C3, 1273),
    (0x24C4, 1275),
    (0x24C5, 1277),
    (0x24C6, 1279),
    (0x24C7, 1281),
    (0x24C8, 1283),
    (0x24C9, 1285),
    (0x24CA, 1287),
    (0x24CB, 1289),
    (0x24CC, 1291),
    (0x24CD, 1293),
    (0x24CE, 1295),
    (0x24CF, 1297),
    (0x24D0, 1299),
    (0x24D1, 1301),
    (0x24D2, 1303),
    (0x24D3, 1305),
    (0x24D4, 1307),
    (0x24D5, 1309),
    (0x24D6, 1311),
    (0x24D7, 1313),
    (0x24D8, 1315),
    (0x24D9, 1317),
    (0x24DA, 1319),
    (0x24DB, 1321),
    (0x24DC, 1323),
    (0x24DD, 1325),
    (0x24DE, 1327),
    (0x24DF, 1329),
    (0x24E0, 1331),
    (0x24E1, 1333),
    (0x24E2, 1335),
    (0x24E3, 1337),
    (0x24E4, 1339),
    (0x24E5, 1341),
    (0x24E6, 1343),
    (0x24E7, 1345),
    (0x24E8, 1347),
    (0x24E9, 1349),
    (0x24EA, 1351),
    (0x2A0C, 1353),
    (0x2A74, 1358),
    (0x2A75, 1362),
    (0x2A76, 1365),
    (0x2ADC, 1),
    (0x2C7C, 1369),
    (0x2C7D, 1371),
    (0x2D6F, 1373),
    (0x2E9F, 1375),
    (0x2EF3, 1377),
    (0x2F00, 1379),
    (0x2F01, 1381),
    (0x2F02, 1383),
    (0x2F03, 1385),
    (0x2F04, 1387),
    (0x2F05, 1389),
    (0x2F06, 1391),
    (0x2F07, 1393),
    (0x2F08, 1395),
    (0x2F09, 1397),
    (0x2F0A, 1399),
    (0x2F0B, 1401),
    (0x2F0C, 1403),
    (0x2F0D, 1405),
    (0x2F0E, 1407),
    (0x2F0F, 1409),
    (0x2F10, 1411),
    (0x2F11, 1413),
    (0x2F12, 1415),
    (0x2F13, 1417),
    (0x2F14, 1419),
    (0x2F15, 1421),
    (0x2F16, 1423),
    (0x2F17, 1425),
    (0x2F18, 1427),
    (0x2F19, 1429),
    (0x2F1A, 1431),
    (0x2F1B, 1433),
    (0x2F1C, 1435),
    (0x2F1D, 1437),
    (0x2F1E, 1439),
    (0x2F1F, 1441),
    (0x2F20, 1443),
    (0x2F21, 1445),
    (0x2F22, 1447),
    (0x2F23, 1449),
    (0x2F24, 1451),
    (0x2F25, 1453),
    (0x2F26, 1455),
    (0x2F27, 1457),
    (0x2F28, 1459),
    (0x2F29, 1461),
    (0x2F2A, 1463),
    (0x2F2B, 1465),
    (0x2F2C, 1467),
    (0x2F2D, 1469),
    (0x2F2E, 1471),
    (0x2F2F, 1473),
    (0x2F30, 1475),
    (0x2F31, 1477),
    (0x2F32, 1479),
    (0x2F33, 1481),
    (0x2F34, 1483),
    (0x2F35, 1485),
    (0x2F36, 1487),
    (0x2F37, 1489),
    (0x2F38, 1491),
    (0x2F39, 1493),
    (0x2F3A, 1495),
    (0x2F3B, 1497),
    (0x2F3C, 1499),
    (0x2F3D, 1501),
    (0x2F3E, 1503),
    (0x2F3F, 1505),
    (0x2F40, 1507),
    (0x2F41, 1509),
    (0x2F42, 1511),
    (0x2F43, 1513),
    (0x2F44, 1515),
    (0x2F45, 1517),
    (0x2F46, 1519),
    (0x2F47, 1521),
    (0x2F48, 1523),
    (0x2F49, 1525),
    (0x2F4A, 1527),
    (0x2F4B, 1529),
    (0x2F4C, 1531),
    (0x2F4D, 1533),
    (0x2F4E, 1535),
    (0x2F4F, 1537),
    (0x2F50, 1539),
    (0x2F51, 1541),
    (0x2F52, 1543),
    (0x2F53, 1545),
    (0x2F54, 1547),
    (0x2F55, 1549),
    (0x2F56, 1551),
    (0x2F57, 1553),
    (0x2F58, 1555),
    (0x2F59, 1557),
    (0x2F5A, 1559),
    (0x2F5B, 1561),
    (0x2F5C, 1563),
    (0x2F5D, 1565),
    (0x2F5E, 1567),
    (0x2F5F, 1569),
    (0x2F60, 1571),
    (0x2F61, 1573),
    (0x2F62, 1575),
    (0x2F63, 1577),
    (0x2F64, 1579),
    (0x2F65, 1581),
    (0x2F66, 1583),
    (0x2F67, 1585),
    (0x2F68, 1587),
    (0x2F69, 1589),
    (0x2F6A, 1591),
    (0x2F6B, 1593),
    (0x2F6C, 1595),
    (0x2F6D, 1597),
    (0x2F6E, 1599),
    (0x2F6F, 1601),
    (0x2F70, 1603),
    (0x2F71, 1605),
    (0x2F72, 1607),
    (0x2F73, 1609),
    (0x2F74, 1611),
    (0x2F75, 1613),
    (0x2F76, 1615),
    (0x2F77, 1617),
    (0x2F78, 1619),
    (0x2F79, 1621),
    (0x2F7A, 1623),
    (0x2F7B, 1625),
    (0x2F7C, 1627),
    (0x2F7D, 1629),
    (0x2F7E, 1631),
    (0x2F7F, 1633),
    (0x2F80, 1635),
    (0x2F81, 1637),
    (0x2F82, 1639),
    (0x2F83, 1641),
    (0x2F84, 1643),
    (0x2F85, 1645),
    (0x2F86, 1647),
    (0x2F87, 1649),
    (0x2F88, 1651),
    (0x2F89, 1653),
    (0x2F8A, 1655),
    (0x2F8B, 1657),
    (0x2F8C, 1659),
    (0x2F8D, 1661),
    (0x2F8E, 1663),
    (0x2F8F, 1665),
    (0x2F90, 1667),
    (0x2F91, 1669),
    (0x2F92, 1671),
    (0x2F93, 1673),
    (0x2F94, 1675),
    (0x2F95, 1677),
    (0x2F96, 1679),
    (0x2F97, 1681),
    (0x2F98, 1683),
    (0x2F99, 1685),
    (0x2F9A, 1687),
    (0x2F9B, 1689),
    (0x2F9C, 1691),
    (0x2F9D, 1693),
    (0x2F9E, 1695),
    (0x2F9F, 1697),
    (0x2FA0, 1699),
    (0x2FA1, 1701),
    (0x2FA2, 1703),
    (0x2FA3, 1705),
    (0x2FA4, 1707),
    (0x2FA5, 1709),
    (0x2FA6, 1711),
    (0x2FA7, 1713),
    (0x2FA8, 1715),
    (0x2FA9, 1717),
    (0x2FAA, 1719),
    (0x2FAB, 1721),
    (0x2FAC, 1723),
    (0x2FAD, 1725),
    (0x2FAE, 1727),
    (0x2FAF, 1729),
    (0x2FB0, 1731),
    (0x2FB1, 1733),
    (0x2FB2, 1735),
    (0x2FB3, 1737),
    (0x2FB4, 1739),
    (0x2FB5, 1741),
    (0x2FB6, 1743),
    (0x2FB7, 1745),
    (0x2FB8, 1747),
    (0x2FB9, 1749),
    (0x2FBA, 1751),
    (0x2FBB, 1753),
    (0x2FBC, 1755),
    (0x2FBD, 1757),
    (0x2FBE, 1759),
    (0x2FBF, 1761),
    (0x2FC0, 1763),
    (0x2FC1, 1765),
    (0x2FC2, 1767),
    (0x2FC3, 1769),
    (0x2FC4, 1771),
    (0x2FC5, 1773),
    (0x2FC6, 1775),
    (0x2FC7, 1777),
    (0x2FC8, 1779),
    (0x2FC9, 1781),
    (0x2FCA, 1783),
    (0x2FCB, 1785),
    (0x2FCC, 1787),
    (0x2FCD, 1789),
    (0x2FCE, 1791),
    (0x2FCF, 1793),
    (0x2FD0, 1795),
    (0x2FD1, 1797),
    (0x2FD2, 1799),
    (0x2FD3, 1801),
    (0x2FD4, 1803),
    (0x2FD5, 1805),
    (0x3000, 1807),
    (0x3036, 1809),
    (0x3038, 1811),
    (0x3039, 1813),
    (0x303A, 1815),
    (0x304C, 1),
    (0x304E, 1),
    (0x3050, 1),
    (0x3052, 1),
    (0x3054, 1),
    (0x3056, 1),
    (0x3058, 1),
    (0x305A, 1),
    (0x305C, 1),
    (0x305E, 1),
    (0x3060, 1),
    (0x3062, 1),
    (0x3065, 1),
    (0x3067, 1),
    (0x3069, 1),
    (0x3070, 1),
    (0x3071, 1),
    (0x3073, 1),
    (0x3074, 1),
    (0x3076, 1),
    (0x3077, 1),
    (0x3079, 1),
    (0x307A, 1),
    (0x307C, 1),
    (0x307D, 1),
    (0x3094, 1),
    (0x309B, 1817),
    (0x309C, 1820),
    (0x309E, 1),
    (0x309F, 1823),
    (0x30AC, 1),
    (0x30AE, 1),
    (0x30B0, 1),
    (0x30B2, 1),
    (0x30B4, 1),
    (0x30B6, 1),
    (0x30B8, 1),
    (0x30BA, 1),
    (0x30BC, 1),
    (0x30BE, 1),
    (0x30C0, 1),
    (0x30C2, 1),
    (0x30C5, 1),
    (0x30C7, 1),
    (0x30C9, 1),
    (0x30D0, 1),
    (0x30D1, 1),
    (0x30D3, 1),
    (0x30D4, 1),
    (0x30D6, 1),
    (0x30D7, 1),
    (0x30D9, 1),
    (0x30DA, 1),
    (0x30DC, 1),
    (0x30DD, 1),
    (0x30F4, 1),
    (0x30F7, 1),
    (0x30F8, 1),
    (0x30F9, 1),
    (0x30FA, 1),
    (0x30FE, 1),
    (0x30FF, 1826),
    (0x3131, 1829),
    (0x3132, 1831),
    (0x3133, 1833),
    (0x3134, 1835),
    (0x3135, 1837),
    (0x3136, 1839),
    (0x3137, 1841),
    (0x3138, 1843),
    (0x3139, 1845),
    (0x313A, 1847),
    (0x313B, 1849),
    (0x313C, 1851),
    (0x313D, 1853),
    (0x313E, 1855),
    (0x313F, 1857),
    (0x3140, 1859),
    (0x3141, 1861),
    (0x3142, 1863),
    (0x3143, 1865),
    (0x3144, 1867),
    (0x3145, 1869),
    (0x3146, 1871),
    (0x3147, 1873),
    (0x3148, 1875),
    (0x3149, 1877),
    (0x314A, 1879),
    (0x314B, 1881),
    (0x314C, 1883),
    (0x314D, 1885),
    (0x314E, 1887),
    (0x314F, 1889),
    (0x3150, 1891),
    (0x3151, 1893),
    (0x3152, 1895),
    (0x3153, 1897),
    (0x3154, 1899),
    (0x3155, 1901),
    (0x3156, 1903),
    (0x3157, 1905),
    (0x3158, 1907),
    (0x3159, 1909),
    (0x315A, 1911),
    (0x315B, 1913),
    (0x315C, 1915),
    (0x315D, 1917),
    (0x315E, 1919),
    (0x315F, 1921),
    (0x3160, 1923),
    (0x3161, 1925),
    (0x3162, 1927),
    (0x3163, 1929),
    (0x3164, 1931),
    (0x3165, 1933),
    (0x3166, 1935),
    (0x3167, 1937),
    (0x3168, 1939),
    (0x3169, 1941),
    (0x316A, 1943),
    (0x316B, 1945),
    (0x316C, 1947),
    (0x316D, 1949),
    (0x316E, 1951),
    (0x316F, 1953),
    (0x3170, 1955),
    (0x3171, 1957),
    (0x3172, 1959),
    (0x3173, 1961),
    (0x3174, 1963),
    (0x3175, 1965),
    (0x3176, 1967),
    (0x3177, 1969),
    (0x3178, 1971),
    (0x3179, 1973),
    (0x317A, 1975),
    (0x317B, 1977),
    (0x317C, 1979),
    (0x317D, 1981),
    (0x317E, 1983),
    (0x317F, 1985),
    (0x3180, 1987),
    (0x3181, 1989),
    (0x3182, 1991),
    (0x3183, 1993),
    (0x3184, 1995),
    (0x3185, 1997),
    (0x3186, 1999),
    (0x3187, 2001),
    (0x3188, 2003),
    (0x3189, 2005),
    (0x318A, 2007),
    (0x318B, 2009),
    (0x318C, 2011),
    (0x318D, 2013),
    (0x318E, 2015),
    (0x3192, 2017),
    (0x3193, 2019),
    (0x3194, 2021),
    (0x3195, 2023),
    (0x3196, 2025),
    (0x3197, 2027),
    (0x3198, 2029),
    (0x3199, 2031),
    (0x319A, 2033),
    (0x319B, 2035),
    (0x319C, 2037),
    (0x319D, 2039),
    (0x319E, 2041),
    (0x319F, 2043),
    (0x3200, 2045),
    (0x3201, 2049),
    (0x3202, 2053),
    (0x3203, 2057),
    (0x3204, 2061),
    (0x3205, 2065),
    (0x3206, 2069),
    (0x3207, 2073),
    (0x3208, 2077),
    (0x3209, 2081),
    (0x320A, 2085),
    (0x320B, 2089),
    (0x320C, 2093),
    (0x320D, 2097),
    (0x320E, 2101),
    (0x320F, 2106),
    (0x3210, 2111),
    (0x3211, 2116),
    (0x3212, 2121),
    (0x3213, 2126),
    (0x3214, 2131),
    (0x3215, 2136),
    (0x3216, 2141),
    (0x3217, 2146),
    (0x3218, 2151),
    (0x3219, 2156),
    (0x321A, 2161),
    (0x321B, 2166),
    (0x321C, 2171),
    (0x321D, 2176),
    (0x321E, 2184),
    (0x3220, 2191),
    (0x3221, 2195),
    (0x3222, 2199),
    (0x3223, 2203),
    (0x3224, 2207),
    (0x3225, 2211),
    (0x3226, 2215),
    (0x3227, 2219),
    (0x3228, 2223),
    (0x3229, 2227),
    (0x322A, 2231),
    (0x322B, 2235),
    (0x322C, 2239),
    (0x322D, 2243),
    (0x322E, 2247),
    (0x322F, 2251),
    (0x3230, 2255),
    (0x3231, 2259),
    (0x3232, 2263),
    (0x3233, 2267),
    (0x3234, 2271),
    (0x3235, 2275),
    (0x3236, 2279),
    (0x3237, 2283),
    (0x3238, 2287),
    (0x3239, 2291),
    (0x323A, 2295),
    (0x323B, 2299),
    (0x323C, 2303),
    (0x323D, 2307),
    (0x323E, 2311),
    (0x323F, 2315),
    (0x3240, 2319),
    (0x3241, 2323),
    (0x3242, 2327),
    (0x3243, 2331),
    (0x3244, 2335),
    (0x3245, 2337),
    (0x3246, 2339),
    (0x3247, 2341),
    (0x3250, 2343),
    (0x3251, 2347),
    (0x3252, 2350),
    (0x3253, 2353),
    (0x3254, 2356),
    (0x3255, 2359),
    (0x3256, 2362),
    (0x3257, 2365),
    (0x3258, 2368),
    (0x3259, 2371),
    (0x325A, 2374),
    (0x325B, 2377),
    (0x325C, 2380),
    (0x325D, 2383),
    (0x325E, 2386),
    (0x325F, 2389),
    (0x3260, 2392),
    (0x3261, 2394),
    (0x3262, 2396),
    (0x3263, 2398),
    (0x3264, 2400),
    (0x3265, 2402),
    (0x3266, 2404),
    (0x3267, 2406),
    (0x3268, 2408),
    (0x3269, 2410),
    (0x326A, 2412),
    (0x326B, 2414),
    (0x326C, 2416),
    (0x326D, 2418),
    (0x326E, 2420),
    (0x326F, 2423),
    (0x3270, 2426),
    (0x3271, 2429),
    (0x3272, 2432),
    (0x3273, 2435),
    (0x3274, 2438),
    (0x3275, 2441),
    (0x3276, 2444),
    (0x3277, 2447),
    (0x3278, 2450),
    (0x3279, 2453),
    (0x327A, 2456),
    (0x327B, 2459),
    (0x327C, 2462),
    (0x327D, 2468),
    (0x327E, 2473),
    (0x3280, 2476),
    (0x3281, 2478),
    (0x3282, 2480),
    (0x3283, 2482),
    (0x3284, 2484),
    (0x3285, 2486),
    (0x3286, 2488),
    (0x3287, 2490),
    (0x3288, 2492),
    (0x3289, 2494),
    (0x328A, 2496),
    (0x328B, 2498),
    (0x328C, 2500),
    (0x328D, 2502),
    (0x328E, 2504),
    (0x328F, 2506),
    (0x3290, 2508),
    (0x3291, 2510),
    (0x3292, 2512),
    (0x3293, 2514),
    (0x3294, 2516),
    (0x3295, 2518),
    (0x3296, 2520),
    (0x3297, 2522),
    (0x3298, 2524),
    (0x3299, 2526),
    (0x329A, 2528),
    (0x329B, 2530),
    (0x329C, 2532),
    (0x329D, 2534),
    (0x329E, 2536),
    (0x329F, 2538),
    (0x32A0, 2540),
    (0x32A1, 2542),
    (0x32A2, 2544),
    (0x32A3, 2546),
    (0x32A4, 2548),
    (0x32A5, 2550),
    (0x32A6, 2552),
    (0x32A7, 2554),
    (0x32A8, 2556),
    (0x32A9, 2558),
    (0x32AA, 2560),
    (0x32AB, 2562),
    (0x32AC, 2564),
    (0x32AD, 2566),
    (0x32AE, 2568),
    (0x32AF, 2570),
    (0x32B0, 2572),
    (0x32B1, 2574),
    (0x32B2, 2577),
    (0x32B3, 2580),
    (0x32B4, 2583),
    (0x32B5, 2586),
    (0x32B6, 2589),
    (0x32B7, 2592),
    (0x32B8, 2595),
    (0x32B9, 2598),
    (0x32BA, 2601),
    (0x32BB, 2604),
    (0x32BC, 2607),
    (0x32BD, 2610),
    (0x32BE, 2613),
    (0x32BF, 2616),
    (0x32C0, 2619),
    (0x32C1, 2622),
    (0x32C2, 2625),
    (0x32C3, 2628),
    (0x32C4, 2631),
    (0x32C5, 2634),
    (0x32C6, 2637),
    (0x32C7, 2640),
    (0x32C8, 2643),
    (0x32C9, 2646),
    (0x32CA, 2650),
    (0x32CB, 2654),
    (0x32CC, 2658),
    (0x32CD, 2661),
    (0x32CE, 2665),
    (0x32CF, 2668),
    (0x32D0, 2672),
    (0x32D1, 2674),
    (0x32D2, 2676),
    (0x32D3, 2678),
    (0x32D4, 2680),
    (0x32D5, 2682),
    (0x32D6, 2684),
    (0x32D7, 2686),
    (0x32D8, 2688),
    (0x32D9, 2690),
    (0x32DA, 2692),
    (0x32DB, 2694),
    (0x32DC, 2696),
    (0x32DD, 2698),
    (0x32DE, 2700),
    (0x32DF, 2702),
    (0x32E0, 2704),
    (0x32E1, 2706),
    (0x32E2, 2708),
    (0x32E3, 2710),
    (0x32E4, 2712),
    (0x32E5, 2714),
    (0x32E6, 2716),
    (0x32E7, 2718),
    (0x32E8, 2720),
    (0x32E9, 2722),
    (0x32EA, 2724),
    (0x32EB, 2726),
    (0x32EC, 2728),
    (0x32ED, 2730),
    (0x32EE, 2732),
    (0x32EF, 2734),
    (0x32F0, 2736),
    (0x32F1, 2738),
    (0x32F2, 2740),
    (0x32F3, 2742),
    (0x32F4, 2744),
    (0x32F5, 2746),
    (0x32F6, 2748),
    (0x32F7, 2750),
    (0x32F8, 2752),
    (0x32F9, 2754),
    (0x32FA, 2756),
    (0x32FB, 2758),
    (0x32FC, 2760),
    (0x32FD, 2762),
    (0x32FE, 2764),
    (0x32FF, 2766),
    (0x3300, 2769),
    (0x3301, 2775),
    (0x3302, 2780),
    (0x3303, 2786),
    (0x3304, 2790),
    (0x3305, 2796),
    (0x3306, 2800),
    (0x3307, 2804),
    (0x3308, 2811),
    (0x3309, 2816),
    (0x330A, 2820),
    (0x330B, 2824),
    (0x330C, 2828),
    (0x330D, 2833),
    (0x330E, 2838),
    (0x330F, 2843),
    (0x3310, 2848),
    (0x3311, 2853),
    (0x3312, 2858),
    (0x3313, 2863),
    (0x3314, 2870),
    (0x3315, 2873),
    (0x3316, 2880),
    (0x3317, 2887),
    (0x3318, 2893),
    (0x3319, 2898),
    (0x331A, 2905),
    (0x331B, 2912),
    (0x331C, 2917),
    (0x331D, 2921),
    (0x331E, 2925),
    (0x331F, 2930),
    (0x3320, 2935),
    (0x3321, 2941),
    (0x3322, 2947),
    (0x3323, 2951),
    (0x3324, 2955),
    (0x3325, 2960),
    (0x3326, 2964),
    (0x3327, 2968),
    (0x3328, 2971),
    (0x3329, 2974),
    (0x332A, 2978),
    (0x332B, 2982),
    (0x332C, 2989),
    (0x332D, 2994),
    (0x332E, 3000),
    (0x332F, 3007),
    (0x3330, 3012),
    (0x3331, 3016),
    (0x3332, 3020),
    (0x3333, 3027),
    (0x3334, 3032),
    (0x3335, 3039),
    (0x3336, 3043),
    (0x3337, 3049),
    (0x3338, 3053),
    (0x3339, 3058),
    (0x333A, 3062),
    (0x333B, 3067),
    (0x333C, 3073),
    (0x333D, 3078),
    (0x333E, 3084),
    (0x333F, 3089),
    (0x3340, 3092),
    (0x3341, 3098),
    (0x3342, 3102),
    (0x3343, 3106),
    (0x3344, 3111),
    (0x3345, 3115),
    (0x3346, 3119),
    (0x3347, 3123),
    (0x3348, 3129),
    (0x3349, 3134),
    (0x334A, 3137),
    (0x334B, 3144),
    (0x334C, 3148),
    (0x334D, 3154),
    (0x334E, 3159),
    (0x334F, 3164),
    (0x3350, 3168),
    (0x3351, 3172),
    (0x3352, 3177),
    (0x3353, 3180),
    (0x3354, 3185),
    (0x3355, 3191),
    (0x3356, 3194),
    (0x3357, 3201),
    (0x3358, 3205),
    (0x3359, 3208),
    (0x335A, 3211),
    (0x335B, 3214),
    (0x335C, 3217),
    (0x335D, 3220),
    (0x335E, 3223),
    (0x335F, 3226),
    (0x3360, 3229),
    (0x3361, 3232),
    (0x3362, 3235),
    (0x3363, 3239),
    (0x3364, 3243),
    (0x3365, 3247),
    (0x3366, 3251),
    (0x3367, 3255),
    (0x3368, 3259),
    (0x3369, 3263),
    (0x336A, 3267),
    (0x336B, 3271),
    (0x336C, 3275),
    (0x336D, 3279),
    (0x336E, 3283),
    (0x336F, 3287),
    (0x3370, 3291),
    (0x3371, 3295),
    (0x3372, 3299),
    (0x3373, 3302),
    (0x3374, 3305),
    (0x3375, 3309),
    (0x3376, 3312),
    (0x3377, 3315),
    (0x3378, 3318),
    (0x3379, 3322),
    (0x337A, 3326),
    (0x337B, 3329),
    (0x337C, 3332),
    (0x337D, 3335),
    (0x337E, 3338),
    (0x337F, 3341),
    (0x3380, 3346),
    (0x3381, 3349),
    (0x3382, 3352),
    (0x3383, 3355),
    (0x3384, 3358),
    (0x3385, 3361),
    (0x3386, 3364),
    (0x3387, 3367),
    (0x3388, 3370),
    (0x3389, 3374),
    (0x338A, 3379),
    (0x338B, 3382),
    (0x338C, 3385),
    (0x338D, 3388),
    (0x338E, 3391),
    (0x338F, 3394),
    (0x3390, 3397),
    (0x3391, 3400),
    (0x3392, 3404),
    (0x3393, 3408),
    (0x3394, 3412),
    (0x3395, 3416),
    (0x3396, 3419),
    (0x3397, 3422),
    (0x3398, 3425),
    (0x3399, 3428),
    (0x339A, 3431),
    (0x339B, 3434),
    (0x339C, 3437),
    (0x339D, 3440),
    (0x339E, 3443),
    (0x339F, 3446),
    (0x33A0, 3450),
    (0x33A1, 3454),
    (0x33A2, 3457),
    (0x33A3, 3461),
    (0x33A4, 3465),
    (0x33A5, 3469),
    (0x33A6, 3472),
    (0x33A7, 3476),
    (0x33A8, 3480),
    (0x33A9, 3485),
    (0x33AA, 3488),
    (0x33AB, 3492),
    (0x33AC, 3496),
    (0x33AD, 3500),
    (0x33AE, 3504),
    (0x33AF, 3510),
    (0x33B0, 3517),
    (0x33B1, 3520),
    (0x33B2, 3523),
    (0x33B3, 3526),
    (0x33B4, 3529),
    (0x33B5, 3532),
    (0x33B6, 3535),
    (0x33B7, 3538),
    (0x33B8, 3541),
    (0x33B9, 3544),
    (0x33BA, 3547),
    (0x33BB, 3550),
    (0x33BC, 3553),
    (0x33BD, 3556),
    (0x33BE, 3559),
    (0x33BF, 3562),
    (0x33C0, 3565),
    (0x33C1, 3568),
    (0x33C2, 3571),
    (0x33C3, 3576),
    (0x33C4, 3579),
    (0x33C5, 3582),
    (0x33C6, 3585),
    (0x33C7, 3590),
    (0x33C8, 3594),
    (0x33C9, 3597),
    (0x33CA, 3600),
    (0x33CB, 3603),
    (0x33CC, 3606),
    (0x33CD, 3609),
    (0x33CE, 3612),
    (0x33CF, 3615),
    (0x33D0, 3618),
    (0x33D1, 3621),
    (0x33D2, 3624),
    (0x33D3, 3628),
    (0x33D4, 3631),
    (0x33D5, 3634),
    (0x33D6, 3638),
    (0x33D7, 3642),
    (0x33D8, 3645),
    (0x33D9, 3650),
    (0x33DA, 3654),
    (0x33DB, 3657),
    (0x33DC, 3660),
    (0x33DD, 3663),
    (0x33DE, 3666),
    (0x33DF, 3670),
    (0x33E0, 3674),
    (0x33E1, 3677),
    (0x33E2, 3680),
    (0x33E3, 3683),
    (0x33E4, 3686),
    (0x33E5, 3689),
    (0x33E6, 3692),
    (0x33E7, 3695),
    (0x33E8, 3698),
    (0x33E9, 3701),
    (0x33EA, 3705),
    (0x33EB, 3709),
    (0x33EC, 3713),
    (0x33ED, 3717),
    (0x33EE, 3721),
    (0x33EF, 3725),
    (0x33F0, 3729),
    (0x33F1, 3733),
    (0x33F2, 3737),
    (0x33F3, 3741),
    (0x33F4, 3745),
    (0x33F5, 3749),
    (0x33F6, 3753),
    (0x33F7, 3757),
    (0x33F8, 3761),
    (0x33F9, 3765),
    (0x33FA, 3769),
    (0x33FB, 3773),
    (0x33FC, 3777),
    (0x33FD, 3781),
    (0x33FE, 3785),
    (0x33FF, 3789),
    (0xA69C, 3793),
    (0xA69D, 3795),
    (0xA770, 3797),
    (0xA7F2, 3799),
    (0xA7F3, 3801),
    (0xA7F4, 3803),
    (0xA7F8, 3805),
    (0xA7F9, 3807),
    (0xAB5C, 3809),
    (0xAB5D, 3811),
    (0xAB5E, 3813),
    (0xAB5F, 3815),
    (0xAB69, 3817),
    (0xF900, 1),
    (0xF901, 1),
    (0xF902, 1),
    (0xF903, 1),
    (0xF904, 1),
    (0xF905, 1),
    (0xF906, 1),
    (0xF907, 1),
    (0xF908, 1),
    (0xF909, 1),
    (0xF90A, 1),
    (0xF90B, 1),
    (0xF90C, 1),
    (0xF90D, 1),
    (0xF90E, 1),
    (0xF90F, 1),
    (0xF910, 1),
    (0xF911, 1),
    (0xF912, 1),
    (0xF913, 1),
    (0xF914, 1),
    (0xF915, 1),
    (0xF916, 1),
    (0xF917, 1),
    (0xF918, 1),
    (0xF919, 1),
    (0xF91A, 1),
    (0xF91B, 1),
    (0xF91C, 1),
    (0xF91D, 1),
    (0xF91E, 1),
    (0xF91F, 1),
    (0xF920, 1),
    (0xF921, 1),
    (0xF922, 1),
    (0xF923, 1),
    (0xF924, 1),
    (0xF925, 1),
    (0xF926, 1),
    (0xF927, 1),
    (0xF928, 1),
    (0xF929, 1),
    (0xF92A, 1),
    (0xF92B, 1),
    (0xF92C, 1),
    (0xF92D, 1),
    (0xF92E, 1),
    (0xF92F, 1),
    (0xF930, 1),
    (0xF931, 1),
    (0xF932, 1),
    (0xF933, 1),
    (0xF934, 1),
    (0xF935, 1),
    (0xF936, 1),
    (0xF937, 1),
    (0xF938, 1),
    (0xF939, 1),
    (0xF93A, 1),
    (0xF93B, 1),
    (0xF93C, 1),
    (0xF93D, 1),
    (0xF93E, 1),
    (0xF93F, 1),
    (0xF940, 1),
    (0xF941, 1),
    (0xF942, 1),
    (0xF943, 1),
    (0xF944, 1),
    (0xF945, 1),
    (0xF946, 1),
    (0xF947, 1),
    (0xF948, 1),
    (0xF949, 1),
    (0xF94A, 1),
    (0xF94B, 1),
    (0xF94C, 1),
    (0xF94D, 1),
    (0xF94E, 1),
    (0xF94F, 1),
    (0xF950, 1),
    (0xF951, 1),
    (0xF952, 1),
    (0xF953, 1),
    (0xF954, 1),
    (0xF955, 1),
    (0xF956, 1),
    (0xF957, 1),
    (0xF958, 1),
    (0xF959, 1),
    (0xF95A, 1),
    (0xF95B, 1),
    (0xF95C, 1),
    (0xF95D, 1),
    (0xF95E, 1),
    (0xF95F, 1),
    (0xF960, 1),
    (0xF961, 1),
    (0xF962, 1),
    (0xF963, 1),
    (0xF964, 1),
    (0xF965, 1),
    (0xF966, 1),
    (0xF967, 1),
    (0xF968, 1),
    (0xF969, 1),
    (0xF96A, 1),
    (0xF96B, 1),
    (0xF96C, 1),
    (0xF96D, 1),
    (0xF96E, 1),
    (0xF96F, 1),
    (0xF970, 1),
    (0xF971, 1),
    (0xF972, 1),
    (0xF973, 1),
    (0xF974, 1),
    (0xF975, 1),
    (0xF976, 1),
    (0xF977, 1),
    (0xF978, 1),
    (0xF979, 1),
    (0xF97A, 1),
    (0xF97B, 1),
    (0xF97C, 1),
    (0xF97D, 1),
    (0xF97E, 1),
    (0xF97F, 1),
    (0xF980, 1),
    (0xF981, 1),
    (0xF982, 1),
    (0xF983, 1),
    (0xF984, 1),
    (0xF985, 1),
    (0xF986, 1),
    (0xF987, 1),
    (0xF988, 1),
    (0xF989, 1),
    (0xF98A, 1),
    (0xF98B, 1),
    (0xF98C, 1),
    (0xF98D, 1),
    (0xF98E, 1),
    (0xF98F, 1),
    (0xF990, 1),
    (0xF991, 1),
    (0xF992, 1),
    (0xF993, 1),
    (0xF994, 1),
    (0xF995, 1),
    (0xF996, 1),
    (0xF997, 1),
    (0xF998, 1),
    (0xF999, 1),
    (0xF99A, 1),
    (0xF99B, 1),
    (0xF99C, 1),
    (0xF99D, 1),
    (0xF99E, 1),
    (0xF99F, 1),
    (0xF9A0, 1),
    (0xF9A1, 1),
    (0xF9A2, 1),
    (0xF9A3, 1),
    (0xF9A4, 1),
    (0xF9A5, 1),
    (0xF9A6, 1),
    (0xF9A7, 1),
    (0xF9A8, 1),
    (0xF9A9, 1),
    (0xF9AA, 1),
    (0xF9AB, 1),
    (0xF9AC, 1),
    (0xF9AD, 1),
    (0xF9AE, 1),
    (0xF9AF, 1),
    (0xF9B0, 1),
    (0xF9B1, 1),
    (0xF9B2, 1),
    (0xF9B3, 1),
    (0xF9B4, 1),
    (0xF9B5, 1),
    (0xF9B6, 1),
    (0xF9B7, 1),
    (0xF9B8, 1),
    (0xF9B9, 1),
    (0xF9BA, 1),
    (0xF9BB, 1),
    (0xF9BC, 1),
    (0xF9BD, 1),
    (0xF9BE, 1),
    (0xF9BF, 1),
    (0xF9C0, 1),
    (0xF9C1, 1),
    (0xF9C2, 1),
    (0xF9C3, 1),
    (0xF9C4, 1),
    (0xF9C5, 1),
    (0xF9C6, 1),
    (0xF9C7, 1),
    (0xF9C8, 1),
    (0xF9C9, 1),
    (0xF9CA, 1),
    (0xF9CB, 1),
    (0xF9CC, 1),
    (0xF9CD, 1),
    (0xF9CE, 1),
    (0xF9CF, 1),
    (0xF9D0, 1),
    (0xF9D1, 1),
    (0xF9D2, 1),
    (0xF9D3, 1),
    (0xF9D4, 1),
    (0xF9D5, 1),
    (0xF9D6, 1),
    (0xF9D7, 1),
    (0xF9D8, 1),
    (0xF9D9, 1),
    (0xF9DA, 1),
    (0xF9DB, 1),
    (0xF9DC, 1),
    (0xF9DD, 1),
    (0xF9DE, 1),
    (0xF9DF, 1),
    (0xF9E0, 1),
    (0xF9E1, 1),
    (0xF9E2, 1),
    (0xF9E3, 1),
    (0xF9E4, 1),
    (0xF9E5, 1),
    (0xF9E6, 1),
    (0xF9E7, 1),
    (0xF9E8, 1),
    (0xF9E9, 1),
    (0xF9EA, 1),
    (0xF9EB, 1),
    (0xF9EC, 1),
    (0xF9ED, 1),
    (0xF9EE, 1),
    (0xF9EF, 1),
    (0xF9F0, 1),
    (0xF9F1, 1),
    (0xF9F2, 1),
    (0xF9F3, 1),
    (0xF9F4, 1),
    (0xF9F5, 1),
    (0xF9F6, 1),
    (0xF9F7, 1),
    (0xF9F8, 1),
    (0xF9F9, 1),
    (0xF9FA, 1),
    (0xF9FB, 1),
    (0xF9FC, 1),
    (0xF9FD, 1),
    (0xF9FE, 1),
    (0xF9FF, 1),
    (0xFA00, 1),
    (0xFA01, 1),
    (0xFA02, 1),
    (0xFA03, 1),
    (0xFA04, 1),
    (0xFA05, 1),
    (0xFA06, 1),
    (0xFA07, 1),
    (0xFA08, 1),
    (0xFA09, 1),
    (0xFA0A, 1),
    (0xFA0B, 1),
    (0xFA0C, 1),
    (0xFA0D, 1),
    (0xFA10, 1),
    (0xFA12, 1),
    (0xFA15, 1),
    (0xFA16, 1),
    (0xFA17, 1),
    (0xFA18, 1),
    (0xFA19, 1),
    (0xFA1A, 1),
    (0xFA1B, 1),
    (0xFA1C, 1),
    (0xFA1D, 1),
    (0xFA1E, 1),
    (0xFA20, 1),
    (0xFA22, 1),
    (0xFA25, 1),
    (0xFA26, 1),
    (0xFA2A, 1),
    (0xFA2B, 1),
    (0xFA2C, 1),
    (0xFA2D, 1),
    (0xFA2E, 1),
    (0xFA2F, 1),
    (0xFA30, 1),
    (0xFA31, 1),
    (0xFA32, 1),
    (0xFA33, 1),
    (0xFA34, 1),
    (0xFA35, 1),
    (0xFA36, 1),
    (0xFA37, 1),
    (0xFA38, 1),
    (0xFA39, 1),
    (0xFA3A, 1),
    (0xFA3B, 1),
    (0xFA3C, 1),
    (0xFA3D, 1),
    (0xFA3E, 1),
    (0xFA3F, 1),
    (0xFA40, 1),
    (0xFA41, 1),
    (0xFA42, 1),
    (0xFA43, 1),
    (0xFA44, 1),
    (0xFA45, 1),
    (0xFA46, 1),
    (0xFA47, 1),
    (0xFA48, 1),
    (0xFA49, 1),
    (0xFA4A, 1),
    (0xFA4B, 1),
    (0xFA4C, 1),
    (0xFA4D, 1),
    (0xFA4E, 1),
    (0xFA4F, 1),
    (0xFA50, 1),
    (0xFA51, 1),
    (0xFA52, 1),
    (0xFA53, 1),
    (0xFA54, 1),
    (0xFA55, 1),
    (0xFA56, 1),
    (0xFA57, 1),
    (0xFA58, 1),
    (0xFA59, 1),
    (0xFA5A, 1),
    (0xFA5B, 1),
    (0xFA5C, 1),
    (0xFA5D, 1),
    (0xFA5E, 1),
    (0xFA5F, 1),
    (0xFA60, 1),
    (0xFA61, 1),
    (0xFA62, 1),
    (0xFA63, 1),
    (0xFA64, 1),
    (0xFA65, 1),
    (0xFA66, 1),
    (0xFA67, 1),
    (0xFA68, 1),
    (0xFA69, 1),
    (0xFA6A, 1),
    (0xFA6B, 1),
    (0xFA6C, 1),
    (0xFA6D, 1),
    (0xFA70, 1),
    (0xFA71, 1),
    (0xFA72, 1),
    (0xFA73, 1),
    (0xFA74, 1),
    (0xFA75, 1),
    (0xFA76, 1),
    (0xFA77, 1),
    (0xFA78, 1),
    (0xFA79, 1),
    (0xFA7A, 1),
    (0xFA7B, 1),
    (0xFA7C, 1),
    (0xFA7D, 1),
    (0xFA7E, 1),
    (0xFA7F, 1),
    (0xFA80, 1),
    (0xFA81, 1),
    (0xFA82, 1),
    (0xFA83, 1),
    (0xFA84, 1),
    (0xFA85, 1),
    (0xFA86, 1),
    (0xFA87, 1),
    (0xFA88, 1),
    (0xFA89, 1),
    (0xFA8A, 1),
    (0xFA8B, 1),
    (0xFA8C, 1),
    (0xFA8D, 1),
    (0xFA8E, 1),
    (0xFA8F, 1),
    (0xFA90, 1),
    (0xFA91, 1),
    (0xFA92, 1),
    (0xFA93, 1),
    (0xFA94, 1),
    (0xFA95, 1),
    (0xFA96, 1),
    (0xFA97, 1),
    (0xFA98, 1),
    (0xFA99, 1),
    (0xFA9A, 1),
    (0xFA9B, 1),
    (0xFA9C, 1),
    (0xFA9D, 1),
    (0xFA9E, 1),
    (0xFA9F, 1),
    (0xFAA0, 1),
    (0xFAA1, 1),
    (0xFAA2, 1),
    (0xFAA3, 1),
    (0xFAA4, 1),
    (0xFAA5, 1),
    (0xFAA6, 1),
    (0xFAA7, 1),
    (0xFAA8, 1),
    (0xFAA9, 1),
    (0xFAAA, 1),
    (0xFAAB, 1),
    (0xFAAC, 1),
    (0xFAAD, 1),
    (0xFAAE, 1),
    (0xFAAF, 1),
    (0xFAB0, 1),
    (0xFAB1, 1),
    (0xFAB2, 1),
    (0xFAB3, 1),
    (0xFAB4, 1),
    (0xFAB5, 1),
    (0xFAB6, 1),
    (0xFAB7, 1),
    (0xFAB8, 1),
    (0xFAB9, 1),
    (0xFABA, 1),
    (0xFABB, 1),
    (0xFABC, 1),
    (0xFABD, 1),
    (0xFABE, 1),
    (0xFABF, 1),
    (0xFAC0, 1),
    (0xFAC1, 1),
    (0xFAC2, 1),
    (0xFAC3, 1),
    (0xFAC4, 1),
    (0xFAC5, 1),
    (0xFAC6, 1),
    (0xFAC7, 1),
    (0xFAC8, 1),
    (0xFAC9, 1),
    (0xFACA, 1),
    (0xFACB, 1),
    (0xFACC, 1),
    (0xFACD, 1),
    (0xFACE, 1),
    (0xFACF, 1),
    (0xFAD0, 1),
    (0xFAD1, 1),
    (0xFAD2, 1),
    (0xFAD3, 1),
    (0xFAD4, 1),
    (0xFAD5, 1),
    (0xFAD6, 1),
    (0xFAD7, 1),
    (0xFAD8, 1),
    (0xFAD9, 1),
    (0xFB00, 3819),
    (0xFB01, 3822),
    (0xFB02, 3825),
    (0xFB03, 3828),
    (0xFB04, 3832),
    (0xFB05, 3836),
    (0xFB06, 3839),
    (0xFB13, 3842),
    (0xFB14, 3845),
    (0xFB15, 3848),
    (0xFB16, 3851),
    (0xFB17, 3854),
    (0xFB1D, 1),
    (0xFB1F, 1),
    (0xFB20, 3857),
    (0xFB21, 3859),
    (0xFB22, 3861),
    (0xFB23, 3863),
    (0xFB24, 3865),
    (0xFB25, 3867),
    (0xFB26, 3869),
    (0xFB27, 3871),
    (0xFB28, 3873),
    (0xFB29, 3875),
    (0xFB2A, 1),
    (0xFB2B, 1),
    (0xFB2C, 1),
    (0xFB2D, 1),
    (0xFB2E, 1),
    (0xFB2F, 1),
    (0xFB30, 1),
    (0xFB31, 1),
    (0xFB32, 1),
    (0xFB33, 1),
    (0xFB34, 1),
    (0xFB35, 1),
    (0xFB36, 1),
    (0xFB38, 1),
    (0xFB39, 1),
    (0xFB3A, 1),
    (0xFB3B, 1),
    (0xFB3C, 1),
    (0xFB3E, 1),
    (0xFB40, 1),
    (0xFB41, 1),
    (0xFB43, 1),
    (0xFB44, 1),
    (0xFB46, 1),
    (0xFB47, 1),
    (0xFB48, 1),
    (0xFB49, 1),
    (0xFB4A, 1),
    (0xFB4B, 1),
    (0xFB4C, 1),
    (0xFB4D, 1),
    (0xFB4E, 1),
    (0xFB4F, 3877),
    (0xFB50, 3880),
    (0xFB51, 3882),
    (0xFB52, 3884),
    (0xFB53, 3886),
    (0xFB54, 3888),
    (0xFB55, 3890),
    (0xFB56, 3892),
    (0xFB57, 3894),
    (0xFB58, 3896),
    (0xFB59, 3898),
    (0xFB5A, 3900),
    (0xFB5B, 3902),
    (0xFB5C, 3904),
    (0xFB5D, 3906),
    (0xFB5E, 3908),
    (0xFB5F, 3910),
    (0xFB60, 3912),
    (0xFB61, 3914),
    (0xFB62, 3916),
    (0xFB63, 3918),
    (0xFB64, 3920),
    (0xFB65, 3922),
    (0xFB66, 3924),
    (0xFB67, 3926),
    (0xFB68, 3928),
    (0xFB69, 3930),
    (0xFB6A, 3932),
    (0xFB6B, 3934),
    (0xFB6C, 3936),
    (0xFB6D, 3938),
    (0xFB6E, 3940),
    (0xFB6F, 3942),
    (0xFB70, 3944),
    (0xFB71, 3946),
    (0xFB72, 3948),
    (0xFB73, 3950),
    (0xFB74, 3952),
    (0xFB75, 3954),
    (0xFB76, 3956),
    (0xFB77, 3958),
    (0xFB78, 3960),
    (0xFB79, 3962),
    (0xFB7A, 3964),
    (0xFB7B, 3966),
    (0xFB7C, 3968),
    (0xFB7D, 3970),
    (0xFB7E, 3972),
    (0xFB7F, 3974),
    (0xFB80, 3976),
    (0xFB81, 3978),
    (0xFB82, 3980),
    (0xFB83, 3982),
    (0xFB84, 3984),
    (0xFB85, 3986),
    (0xFB86, 3988),
    (0xFB87, 3990),
    (0xFB88, 3992),
    (0xFB89, 3994),
    (0xFB8A, 3996),
    (0xFB8B, 3998),
    (0xFB8C, 4000),
    (0xFB8D, 4002),
    (0xFB8E, 4004),
    (0xFB8F, 4006),
    (0xFB90, 4008),
    (0xFB91, 4010),
    (0xFB92, 4012),
    (0xFB93, 4014),
    (0xFB94, 4016),
    (0xFB95, 4018),
    (0xFB96, 4020),
    (0xFB97, 4022),
    (0xFB98, 4024),
    (0xFB99, 4026),
    (0xFB9A, 4028),
    (0xFB9B, 4030),
    (0xFB9C, 4032),
    (0xFB9D, 4034),
    (0xFB9E, 4036),
    (0xFB9F, 4038),
    (0xFBA0, 4040),
    (0xFBA1, 4042),
    (0xFBA2, 4044),
    (0xFBA3, 4046),
    (0xFBA4, 4048),
    (0xFBA5, 4051),
    (0xFBA6, 4054),
    (0xFBA7, 4056),
    (0xFBA8, 4058),
    (0xFBA9, 4060),
    (0xFBAA, 4062),
    (0xFBAB, 4064),
    (0xFBAC, 4066),
    (0xFBAD, 4068),
    (0xFBAE, 4070),
    (0xFBAF, 4072),
    (0xFBB0, 4074),
    (0xFBB1, 4077),
    (0xFBD3, 4080),
    (0xFBD4, 4082),
    (0xFBD5, 4084),
    (0xFBD6, 4086),
    (0xFBD7, 4088),
    (0xFBD8, 4090),
    (0xFBD9, 4092),
    (0xFBDA, 4094),
    (0xFBDB, 4096),
    (0xFBDC, 4098),
    (0xFBDD, 4100),
    (0xFBDE, 4103),
    (0xFBDF, 4105),
    (0xFBE0, 4107),
    (0xFBE1, 4109),
    (0xFBE2, 4111),
    (0xFBE3, 4113),
    (0xFBE4, 4115),
    (0xFBE5, 4117),
    (0xFBE6, 4119),
    (0xFBE7, 4121),
    (0xFBE8, 4123),
    (0xFBE9, 4125),
    (0xFBEA, 4127),
    (0xFBEB, 4131),
    (0xFBEC, 4135),
    (0xFBED, 4139),
    (0xFBEE, 4143),
    (0xFBEF, 4147),
    (0xFBF0, 4151),
    (0xFBF1, 4155),
    (0xFBF2, 4159),
    (0xFBF3, 4163),
    (0xFBF4, 4167),
    (0xFBF5, 4171),
    (0xFBF6, 4175),
    (0xFBF7, 4179),
    (0xFBF8, 4183),
    (0xFBF9, 4187),
    (0xFBFA, 4191),
    (0xFBFB, 4195),
    (0xFBFC, 4199),
    (0xFBFD, 4201),
    (0xFBFE, 4203),
    (0xFBFF, 4205),
    (0xFC00, 4207),
    (0xFC01, 4211),
    (0xFC02, 4215),
    (0xFC03, 4219),
    (0xFC04, 4223),
    (0xFC05, 4227),
    (0xFC06, 4230),
    (0xFC07, 4233),
    (0xFC08, 4236),
    (0xFC09, 4239),
    (0xFC0A, 4242),
    (0xFC0B, 4245),
    (0xFC0C, 4248),
    (0xFC0D, 4251),
    (0xFC0E, 4254),
    (0xFC0F, 4257),
    (0xFC10, 4260),
    (0xFC11, 4263),
    (0xFC12, 4266),
    (0xFC13, 4269),
    (0xFC14, 4272),
    (0xFC15, 4275),
    (0xFC16, 4278),
    (0xFC17, 4281),
    (0xFC18, 4284),
    (0xFC19, 4287),
    (0xFC1A, 4290),
    (0xFC1B, 4293),
    (0xFC1C, 4296),
    (0xFC1D, 4299),
    (0xFC1E, 4302),
    (0xFC1F, 4305),
    (0xFC20, 4308),
    (0xFC21, 4311),
    (0xFC22, 4314),
    (0xFC23, 4317),
    (0xFC24, 4320),
    (0xFC25, 4323),
    (0xFC26, 4326),
    (0xFC27, 4329),
    (0xFC28, 4332),
    (0xFC29, 4335),
    (0xFC2A, 4338),
    (0xFC2B, 4341),
    (0xFC2C, 4344),
    (0xFC2D, 4347),
    (0xFC2E, 4350),
    (0xFC2F, 4353),
    (0xFC30, 4356),
    (0xFC31, 4359),
    (0xFC32, 4362),
    (0xFC33, 4365),
    (0xFC34, 4368),
    (0xFC35, 4371),
    (0xFC36, 4374),
    (0xFC37, 4377),
    (0xFC38, 4380),
    (0xFC39, 4383),
    (0xFC3A, 4386),
    (0xFC3B, 4389),
    (0xFC3C, 4392),
    (0xFC3D, 4395),
    (0xFC3E, 4398),
    (0xFC3F, 4401),
    (0xFC40, 4404),
    (0xFC41, 4407),
    (0xFC42, 4410),
    (0xFC43, 4413),
    (0xFC44, 4416),
    (0xFC45, 4419),
    (0xFC46, 4422),
    (0xFC47, 4425),
    (0xFC48, 4428),
    (0xFC49, 4431),
    (0xFC4A, 4434),
    (0xFC4B, 4437),
    (0xFC4C, 4440),
    (0xFC4D, 4443),
    (0xFC4E, 4446),
    (0xFC4F, 4449),
    (0xFC50, 4452),
    (0xFC51, 4455),
    (0xFC52, 4458),
    (0xFC53, 4461),
    (0xFC54, 4464),
    (0xFC55, 4467),
    (0xFC56, 4470),
    (0xFC57, 4473),
    (0xFC58, 4476),
    (0xFC59, 4479),
    (0xFC5A, 4482),
    (0xFC5B, 4485),
    (0xFC5C, 4488),
    (0xFC5D, 4491),
    (0xFC5E, 4494),
    (0xFC5F, 4498),
    (0xFC60, 4502),
    (0xFC61, 4506),
    (0xFC62, 4510),
    (0xFC63, 4514),
    (0xFC64, 4518),
    (0xFC65, 4522),
    (0xFC66, 4526),
    (0xFC67, 4530),
    (0xFC68, 4534),
    (0xFC69, 4538),
    (0xFC6A, 4542),
    (0xFC6B, 4545),
    (0xFC6C, 4548),
    (0xFC6D, 4551),
    (0xFC6E, 4554),
    (0xFC6F, 4557),
    (0xFC70, 4560),
    (0xFC71, 4563),
    (0xFC72, 4566),
    (0xFC73, 4569),
    (0xFC74, 4572),
    (0xFC75, 4575),
    (0xFC76, 4578),
    (0xFC77, 4581),
    (0xFC78, 4584),
    (0xFC79, 4587),
    (0xFC7A, 4590),
    (0xFC7B, 4593),
    (0xFC7C, 4596),
    (0xFC7D, 4599),
    (0xFC7E, 4602),
    (0xFC7F, 4605),
    (0xFC80, 4608),
    (0xFC81, 4611),
    (0xFC82, 4614),
    (0xFC83, 4617),
    (0xFC84, 4620),
    (0xFC85, 4623),
    (0xFC86, 4626),
    (0xFC87, 4629),
    (0xFC88, 4632),
    (0xFC89, 4635),
    (0xFC8A, 4638),
    (0xFC8B, 4641),
    (0xFC8C, 4644),
    (0xFC8D, 4647),
    (0xFC8E, 4650),
    (0xFC8F, 4653),
    (0xFC90, 4656),
    (0xFC91, 4659),
    (0xFC92, 4662),
    (0xFC93, 4665),
    (0xFC94, 4668),
    (0xFC95, 4671),
    (0xFC96, 4674),
    (0xFC97, 4677),
    (0xFC98, 4681),
    (0xFC99, 4685),
    (0xFC9A, 4689),
    (0xFC9B, 4693),
    (0xFC9C, 4697),
    (0xFC9D, 4700),
    (0xFC9E, 4703),
    (0xFC9F, 4706),
    (0xFCA0, 4709),
    (0xFCA1, 4712),
    (0xFCA2, 4715),
    (0xFCA3, 4718),
    (0xFCA4, 4721),
    (0xFCA5, 4724),
    (0xFCA6, 4727),
    (0xFCA7, 4730),
    (0xFCA8, 4733),
    (0xFCA9, 4736),
    (0xFCAA, 4739),
    (0xFCAB, 4742),
    (0xFCAC, 4745),
    (0xFCAD, 4748),
    (0xFCAE, 4751),
    (0xFCAF, 4754),
    (0xFCB0, 4757),
    (0xFCB1, 4760),
    (0xFCB2, 4763),
    (0xFCB3, 4766),
    (0xFCB4, 4769),
    (0xFCB5, 4772),
    (0xFCB6, 4775),
    (0xFCB7, 4778),
    (0xFCB8, 4781),
    (0xFCB9, 4784),
    (0xFCBA, 4787),
    (0xFCBB, 4790),
    (0xFCBC, 4793),
    (0xFCBD, 4796),
    (0xFCBE, 4799),
    (0xFCBF, 4802),
    (0xFCC0, 4805),
    (0xFCC1, 4808),
    (0xFCC2, 4811),
    (0xFCC3, 4814),
    (0xFCC4, 4817),
    (0xFCC5, 4820),
    (0xFCC6, 4823),
    (0xFCC7, 4826),
    (0xFCC8, 4829),
    (0xFCC9, 4832),
    (0xFCCA, 4835),
    (0xFCCB, 4838),
    (0xFCCC, 4841),
    (0xFCCD, 4844),
    (0xFCCE, 4847),
    (0xFCCF, 4850),
    (0xFCD0, 4853),
    (0xFCD1, 4856),
    (0xFCD2, 4859),
    (0xFCD3, 4862),
    (0xFCD4, 4865),
    (0xFCD5, 4868),
    (0xFCD6, 4871),
    (0xFCD7, 4874),
    (0xFCD8, 4877),
    (0xFCD9, 4880),
    (0xFCDA, 4883),
    (0xFCDB, 4886),
    (0xFCDC, 4889),
    (0xFCDD, 4892),
    (0xFCDE, 4895),
    (0xFCDF, 4898),
    (0xFCE0, 4902),
    (0xFCE1, 4906),
    (0xFCE2, 4909),
    (0xFCE3, 4912),
    (0xFCE4, 4915),
    (0xFCE5, 4918),
    (0xFCE6, 4921),
    (0xFCE7, 4924),
    (0xFCE8, 4927),
    (0xFCE9, 4930),
    (0xFCEA, 4933),
    (0xFCEB, 4936),
    (0xFCEC, 4939),
    (0xFCED, 4942),
    (0xFCEE, 4945),
    (0xFCEF, 4948),
    (0xFCF0, 4951),
    (0xFCF1, 4954),
    (0xFCF2, 4957),
    (0xFCF3, 4961),
    (0xFCF4, 4965),
    (0xFCF5, 4969),
    (0xFCF6, 4972),
    (0xFCF7, 4975),
    (0xFCF8, 4978),
    (0xFCF9, 4981),
    (0xFCFA, 4984),
    (0xFCFB, 4987),
    (0xFCFC, 4990),
    (0xFCFD, 4993),
    (0xFCFE, 4996),
    (0xFCFF, 4999),
    (0xFD00, 5002),
    (0xFD01, 5005),
    (0xFD02, 5008),
    (0xFD03, 5011),
    (0xFD04, 5014),
    (0xFD05, 5017),
    (0xFD06, 5020),
    (0xFD07, 5023),
    (0xFD08, 5026),
    (0xFD09, 5029),
    (0xFD0A, 5032),
    (0xFD0B, 5035),
    (0xFD0C, 5038),
    (0xFD0D, 5041),
    (0xFD0E, 5044),
    (0xFD0F, 5047),
    (0xFD10, 5050),
    (0xFD11, 5053),
    (0xFD12, 5056),
    (0xFD13, 5059),
    (0xFD14, 5062),
    (0xFD15, 5065),
    (0xFD16, 5068),
    (0xFD17, 5071),
    (0xFD18, 5074),
    (0xFD19, 5077),
    (0xFD1A, 5080),
    (0xFD1B, 5083),
    (0xFD1C, 5086),
    (0xFD1D, 5089),
    (0xFD1E, 5092),
    (0xFD1F, 5095),
    (0xFD20, 5098),
    (0xFD21, 5101),
    (0xFD22, 5104),
    (0xFD23, 5107),
    (0xFD24, 5110),
    (0xFD25, 5113),
    (0xFD26, 5116),
    (0xFD27, 5119),
    (0xFD28, 5122),
    (0xFD29, 5125),
    (0xFD2A, 5128),
    (0xFD2B, 5131),
    (0xFD2C, 5134),
    (0xFD2D, 5137),
    (0xFD2E, 5140),
    (0xFD2F, 5143),
    (0xFD30, 5146),
    (0xFD31, 5149),
    (0xFD32, 5152),
    (0xFD33, 5155),
    (0xFD34, 5158),
    (0xFD35, 5161),
    (0xFD36, 5164),
    (0xFD37, 5167),
    (0xFD38, 5170),
    (0xFD39, 5173),
    (0xFD3A, 5176),
    (0xFD3B, 5179),
    (0xFD3C, 5182),
    (0xFD3D, 5185),
    (0xFD50, 5188),
    (0xFD51, 5192),
    (0xFD52, 5196),
    (0xFD53, 5200),
    (0xFD54, 5204),
    (0xFD55, 5208),
    (0xFD56, 5212),
    (0xFD57, 5216),
    (0xFD58, 5220),
    (0xFD59, 5224),
    (0xFD5A, 5228),
    (0xFD5B, 5232),
    (0xFD5C, 5236),
    (0xFD5D, 5240),
    (0xFD5E, 5244),
    (0xFD5F, 5248),
    (0xFD60, 5252),
    (0xFD61, 5256),
    (0xFD62, 5260),
    (0xFD63, 5264),
    (0xFD64, 5268),
    (0xFD65, 5272),
    (0xFD66, 5276),
    (0xFD67, 5280),
    (0xFD68, 5284),
    (0xFD69, 5288),
    (0xFD6A, 5292),
    (0xFD6B, 5296),
    (0xFD6C, 5300),
    (0xFD6D, 5304),
    (0xFD6E, 5308),
    (0xFD6F, 5312),
    (0xFD70, 5316),
    (0xFD71, 5320),
    (0xFD72, 5324),
    (0xFD73, 5328),
    (0xFD74, 5332),
    (0xFD75, 5336),
    (0xFD76, 5340),
    (0xFD77, 5344),
    (0xFD78, 5348),
    (0xFD79, 5352),
    (0xFD7A, 5356),
    (0xFD7B, 5360),
    (0xFD7C, 5364),
    (0xFD7D, 5368),
    (0xFD7E, 5372),
    (0xFD7F, 5376),
    (0xFD80, 5380),
    (0xFD81, 5384),
    (0xFD82, 5388),
    (0xFD83, 5392),
    (0xFD84, 5396),
    (0xFD85, 5400),
    (0xFD86, 5404),
    (0xFD87, 5408),
    (0xFD88, 5412),
    (0xFD89, 5416),
    (0xFD8A, 5420),
    (0xFD8B, 5424),
    (0xFD8C, 5428),
    (0xFD8D, 5432),
    (0xFD8E, 5436),
    (0xFD8F, 5440),
    (0xFD92, 5444),
    (0xFD93, 5448),
    (0xFD94, 5452),
    (0xFD95, 5456),
    (0xFD96, 5460),
    (0xFD97, 5464),
    (0xFD98, 5468),
    (0xFD99, 5472),
    (0xFD9A, 5476),
    (0xFD9B, 5480),
    (0xFD9C, 5484),
    (0xFD9D, 5488),
    (0xFD9E, 5492),
    (0xFD9F, 5496),
    (0xFDA0, 5500),
    (0xFDA1, 5504),
    (0xFDA2, 5508),
    (0xFDA3, 5512),
    (0xFDA4, 5516),
    (0xFDA5, 5520),
    (0xFDA6, 5524),
    (0xFDA7, 5528),
    (0xFDA8, 5532),
    (0xFDA9, 5536),
    (0xFDAA, 5540),
    (0xFDAB, 5544),
    (0xFDAC, 5548),
    (0xFDAD, 5552),
    (0xFDAE, 5556),
    (0xFDAF, 5560),
    (0xFDB0, 5564),
    (0xFDB1, 5568),
    (0xFDB2, 5572),
    (0xFDB3, 5576),
    (0xFDB4, 5580),
    (0xFDB5, 5584),
    (0xFDB6, 5588),
    (0xFDB7, 5592),
    (0xFDB8, 5596),
    (0xFDB9, 5600),
    (0xFDBA, 5604),
    (0xFDBB, 5608),
    (0xFDBC, 5612),
    (0xFDBD, 5616),
    (0xFDBE, 5620),
    (0xFDBF, 5624),
    (0xFDC0, 5628),
    (0xFDC1, 5632),
    (0xFDC2, 5636),
    (0xFDC3, 5640),
    (0xFDC4, 5644),
    (0xFDC5, 5648),
    (0xFDC6, 5652),
    (0xFDC7, 5656),
    (0xFDF0, 5660),
    (0xFDF1, 5664),
    (0xFDF2, 5668),
    (0xFDF3, 5673),
    (0xFDF4, 5678),
    (0xFDF5, 5683),
    (0xFDF6, 5688),
    (0xFDF7, 5693),
    (0xFDF8, 5698),
    (0xFDF9, 5703),
    (0xFDFA, 5707),
    (0xFDFB, 5726),
    (0xFDFC, 5735),
    (0xFE10, 5740),
    (0xFE11, 5742),
    (0xFE12, 5744),
    (0xFE13, 5746),
    (0xFE14, 5748),
    (0xFE15, 5750),
    (0xFE16, 5752),
    (0xFE17, 5754),
    (0xFE18, 5756),
    (0xFE19, 5758),
    (0xFE30, 5762),
    (0xFE31, 5765),
    (0xFE32, 5767),
    (0xFE33, 5769),
    (0xFE34, 5771),
    (0xFE35, 5773),
    (0xFE36, 5775),
    (0xFE37, 5777),
    (0xFE38, 5779),
    (0xFE39, 5781),
    (0xFE3A, 5783),
    (0xFE3B, 5785),
    (0xFE3C, 5787),
    (0xFE3D, 5789),
    (0xFE3E, 5791),
    (0xFE3F, 5793),
    (0xFE40, 5795),
    (0xFE41, 5797),
    (0xFE42, 5799),
    (0xFE43, 5801),
    (0xFE44, 5803),
    (0xFE47, 5805),
    (0xFE48, 5807),
    (0xFE49, 5809),
    (0xFE4A, 5812),
    (0xFE4B, 5815),
    (0xFE4C, 5818),
    (0xFE4D, 5821),
    (0xFE4E, 5823),
    (0xFE4F, 5825),
    (0xFE50, 5827),
    (0xFE51, 5829),
    (0xFE52, 5831),
    (0xFE54, 5833),
    (0xFE55, 5835),
    (0xFE56, 5837),
    (0xFE57, 5839),
    (0xFE58, 5841),
    (0xFE59, 5843),
    (0xFE5A, 5845),
    (0xFE5B, 5847),
    (0xFE5C, 5849),
    (0xFE5D, 5851),
    (0xFE5E, 5853),
    (0xFE5F, 5855),
    (0xFE60, 5857),
    (0xFE61, 5859),
    (0xFE62, 5861),
    (0xFE63, 5863),
    (0xFE64, 5865),
    (0xFE65, 5867),
    (0xFE66, 5869),
    (0xFE68, 5871),
    (0xFE69, 5873),
    (0xFE6A, 5875),
    (0xFE6B, 5877),
    (0xFE70, 5879),
    (0xFE71, 5882),
    (0xFE72, 5885),
    (0xFE74, 5888),
    (0xFE76, 5891),
    (0xFE77, 5894),
    (0xFE78, 5897),
    (0xFE79, 5900),
    (0xFE7A, 5903),
    (0xFE7B, 5906),
    (0xFE7C, 5909),
    (0xFE7D, 5912),
    (0xFE7E, 5915),
    (0xFE7F, 5918),
    (0xFE80, 5921),
    (0xFE81, 5923),
    (0xFE82, 5926),
    (0xFE83, 5929),
    (0xFE84, 5932),
    (0xFE85, 5935),
    (0xFE86, 5938),
    (0xFE87, 5941),
    (0xFE88, 5944),
    (0xFE89, 5947),
    (0xFE8A, 5950),
    (0xFE8B, 5953),
    (0xFE8C, 5956),
    (0xFE8D, 5959),
    (0xFE8E, 5961),
    (0xFE8F, 5963),
    (0xFE90, 5965),
    (0xFE91, 5967),
    (0xFE92, 5969),
    (0xFE93, 5971),
    (0xFE94, 5973),
    (0xFE95, 5975),
    (0xFE96, 5977),
    (0xFE97, 5979),
    (0xFE98, 5981),
    (0xFE99, 5983),
    (0xFE9A, 5985),
    (0xFE9B, 5987),
    (0xFE9C, 5989),
    (0xFE9D, 5991),
    (0xFE9E, 5993),
    (0xFE9F, 5995),
    (0xFEA0, 5997),
    (0xFEA1, 5999),
    (0xFEA2, 6001),
    (0xFEA3, 6003),
    (0xFEA4, 6005),
    (0xFEA5, 6007),
    (0xFEA6, 6009),
    (0xFEA7, 6011),
    (0xFEA8, 6013),
    (0xFEA9, 6015),
    (0xFEAA, 6017),
    (0xFEAB, 6019),
    (0xFEAC, 6021),
    (0xFEAD, 6023),
    (0xFEAE, 6025),
    (0xFEAF, 6027),
    (0xFEB0, 6029),
    (0xFEB1, 6031),
    (0xFEB2, 6033),
    (0xFEB3, 6035),
    (0xFEB4, 6037),
    (0xFEB5, 6039),
    (0xFEB6, 6041),
    (0xFEB7, 6043),
    (0xFEB8, 6045),
    (0xFEB9, 6047),
    (0xFEBA, 6049),
    (0xFEBB, 6051),
    (0xFEBC, 6053),
    (0xFEBD, 6055),
    (0xFEBE, 6057),
    (0xFEBF, 6059),
    (0xFEC0, 6061),
    (0xFEC1, 6063),
    (0xFEC2, 6065),
    (0xFEC3, 6067),
    (0xFEC4, 6069),
    (0xFEC5, 6071),
    (0xFEC6, 6073),
    (0xFEC7, 6075),
    (0xFEC8, 6077),
    (0xFEC9, 6079),
    (0xFECA, 6081),
    (0xFECB, 6083),
    (0xFECC, 6085),
    (0xFECD, 6087),
    (0xFECE, 6089),
    (0xFECF, 6091),
    (0xFED0, 6093),
    (0xFED1, 6095),
    (0xFED2, 6097),
    (0xFED3, 6099),
    (0xFED4, 6101),
    (0xFED5, 6103),
    (0xFED6, 6105),
    (0xFED7, 6107),
    (0xFED8, 6109),
    (0xFED9, 6111),
    (0xFEDA, 6113),
    (0xFEDB, 6115),
    (0xFEDC, 6117),
    (0xFEDD, 6119),
    (0xFEDE, 6121),
    (0xFEDF, 6123),
    (0xFEE0, 6125),
    (0xFEE1, 6127),
    (0xFEE2, 6129),
    (0xFEE3, 6131),
    (0xFEE4, 6133),
    (0xFEE5, 6135),
    (0xFEE6, 6137),
    (0xFEE7, 6139),
    (0xFEE8, 6141),
    (0xFEE9, 6143),
    (0xFEEA, 6145),
    (0xFEEB, 6147),
    (0xFEEC, 6149),
    (0xFEED, 6151),
    (0xFEEE, 6153),
    (0xFEEF, 6155),
    (0xFEF0, 6157),
    (0xFEF1, 6159),
    (0xFEF2, 6161),
    (0xFEF3, 6163),
    (0xFEF4, 6165),
    (0xFEF5, 6167),
    (0xFEF6, 6171),
    (0xFEF7, 6175),
    (0xFEF8, 6179),
    (0xFEF9, 6183),
    (0xFEFA, 6187),
    (0xFEFB, 6191),
    (0xFEFC, 6194),
    (0xFF01, 6197),
    (0xFF02, 6199),
    (0xFF03, 6201),
    (0xFF04, 6203),
    (0xFF05, 6205),
    (0xFF06, 6207),
    (0xFF07, 6209),
    (0xFF08, 6211),
    (0xFF09, 6213),
    (0xFF0A, 6215),
    (0xFF0B, 6217),
    (0xFF0C, 6219),
    (0xFF0D, 6221),
    (0xFF0E, 6223),
    (0xFF0F, 6225),
    (0xFF10, 6227),
    (0xFF11, 6229),
    (0xFF12, 6231),
    (0xFF13, 6233),
    (0xFF14, 6235),
    (0xFF15, 6237),
    (0xFF16, 6239),
    (0xFF17, 6241),
    (0xFF18, 6243),
    (0xFF19, 6245),
    (0xFF1A, 6247),
    (0xFF1B, 6249),
    (0xFF1C, 6251),
    (0xFF1D, 6253),
    (0xFF1E, 6255),
    (0xFF1F, 6257),
    (0xFF20, 6259),
    (0xFF21, 6261),
    (0xFF22, 6263),
    (0xFF23, 6265),
    (0xFF24, 6267),
    (0xFF25, 6269),
    (0xFF26, 6271),
    (0xFF27, 6273),
    (0xFF28, 6275),
    (0xFF29, 6277),
    (0xFF2A, 6279),
    (0xFF2B, 6281),
    (0xFF2C, 6283),
    (0xFF2D, 6285),
    (0xFF2E, 6287),
    (0xFF2F, 6289),
    (0xFF30, 6291),
    (0xFF31, 6293),
    (0xFF32, 6295),
    (0xFF33, 6297),
    (0xFF34, 6299),
    (0xFF35, 6301),
    (0xFF36, 6303),
    (0xFF37, 6305),
    (0xFF38, 6307),
    (0xFF39, 6309),
    (0xFF3A, 6311),
    (0xFF3B, 6313),
    (0xFF3C, 6315),
    (0xFF3D, 6317),
    (0xFF3E, 6319),
    (0xFF3F, 6321),
    (0xFF40, 6323),
    (0xFF41, 6325),
    (0xFF42, 6327),
    (0xFF43, 6329),
    (0xFF44, 6331),
    (0xFF45, 6333),
    (0xFF46, 6335),
    (0xFF47, 6337),
    (0xFF48, 6339),
    (0xFF49, 6341),
    (0xFF4A, 6343),
    (0xFF4B, 6345),
    (0xFF4C, 6347),
    (0xFF4D, 6349),
    (0xFF4E, 6351),
    (0xFF4F, 6353),
    (0xFF50, 6355),
    (0xFF51, 6357),
    (0xFF52, 6359),
    (0xFF53, 6361),
    (0xFF54, 6363),
    (0xFF55, 6365),
    (0xFF56, 6367),
    (0xFF57, 6369),
    (0xFF58, 6371),
    (0xFF59, 6373),
    (0xFF5A, 6375),
    (0xFF5B, 6377),
    (0xFF5C, 6379),
    (0xFF5D, 6381),
    (0xFF5E, 6383),
    (0xFF5F, 6385),
    (0xFF60, 6387),
    (0xFF61, 6389),
    (0xFF62, 6391),
    (0xFF63, 6393),
    (0xFF64, 6395),
    (0xFF65, 6397),
    (0xFF66, 6399),
    (0xFF67, 6401),
    (0xFF68, 6403),
    (0xFF69, 6405),
    (0xFF6A, 6407),
    (0xFF6B, 6409),
    (0xFF6C, 6411),
    (0xFF6D, 6413),
    (0xFF6E, 6415),
    (0xFF6F, 6417),
    (0xFF70, 6419),
    (0xFF71, 6421),
    (0xFF72, 6423),
    (0xFF73, 6425),
    (0xFF74, 6427),
    (0xFF75, 6429),
    (0xFF76, 6431),
    (0xFF77, 6433),
    (0xFF78, 6435),
    (0xFF79, 6437),
    (0xFF7A, 6439),
    (0xFF7B, 6441),
    (0xFF7C, 6443),
    (0xFF7D, 6445),
    (0xFF7E, 6447),
    (0xFF7F, 6449),
    (0xFF80, 6451),
    (0xFF81, 6453),
    (0xFF82, 6455),
    (0xFF83, 6457),
    (0xFF84, 6459),
    (0xFF85, 6461),
    (0xFF86, 6463),
    (0xFF87, 6465),
    (0xFF88, 6467),
    (0xFF89, 6469),
    (0xFF8A, 6471),
    (0xFF8B, 6473),
    (0xFF8C, 6475),
    (0xFF8D, 6477),
    (0xFF8E, 6479),
    (0xFF8F, 6481),
    (0xFF90, 6483),
    (0xFF91, 6485),
    (0xFF92, 6487),
    (0xFF93, 6489),
    (0xFF94, 6491),
    (0xFF95, 6493),
    (0xFF96, 6495),
    (0xFF97, 6497),
    (0xFF98, 6499),
    (0xFF99, 6501),
    (0xFF9A, 6503),
    (0xFF9B, 6505),
    (0xFF9C, 6507),
    (0xFF9D, 6509),
    (0xFF9E, 6511),
    (0xFF9F, 6513),
    (0xFFA0, 6515),
    (0xFFA1, 6517),
    (0xFFA2, 6519),
    (0xFFA3, 6521),
    (0xFFA4, 6523),
    (0xFFA5, 6525),
    (0xFFA6, 6527),
    (0xFFA7, 6529),
    (0xFFA8, 6531),
    (0xFFA9, 6533),
    (0xFFAA, 6535),
    (0xFFAB, 6537),
    (0xFFAC, 6539),
    (0xFFAD, 6541),
    (0xFFAE, 6543),
    (0xFFAF, 6545),
    (0xFFB0, 6547),
    (0xFFB1, 6549),
    (0xFFB2, 6551),
    (0xFFB3, 6553),
    (0xFFB4, 6555),
    (0xFFB5, 6557),
    (0xFFB6, 6559),
    (0xFFB7, 6561),
    (0xFFB8, 6563),
    (0xFFB9, 6565),
    (0xFFBA, 6567),
    (0xFFBB, 6569),
    (0xFFBC, 6571),
    (0xFFBD, 6573),
    (0xFFBE, 6575),
    (0xFFC2, 6577),
    (0xFFC3, 6579),
    (0xFFC4, 6581),
    (0xFFC5, 6583),
    (0xFFC6, 6585),
    (0xFFC7, 6587),
    (0xFFCA, 6589),
    (0xFFCB, 6591),
    (0xFFCC, 6593),
    (0xFFCD, 6595),
    (0xFFCE, 6597),
    (0xFFCF, 6599),
    (0xFFD2, 6601),
    (0xFFD3, 6603),
    (0xFFD4, 6605),
    (0xFFD5, 6607),
    (0xFFD6, 6609),
    (0xFFD7, 6611),
    (0xFFDA, 6613),
    (0xFFDB, 6615),
    (0xFFDC, 6617),
    (0xFFE0, 6619),
    (0xFFE1, 6621),
    (0xFFE2, 6623),
    (0xFFE3, 6625),
    (0xFFE4, 6628),
    (0xFFE5, 6630),
    (0xFFE6, 6632),
    (0xFFE8, 6634),
    (0xFFE9, 6636),
    (0xFFEA, 6638),
    (0xFFEB, 6640),
    (0xFFEC, 6642),
    (0xFFED, 6644),
    (0xFFEE, 6646),
    (0x10781, 6648),
    (0x10782, 6650),
    (0x10783, 6652),
    (0x10784, 6654),
    (0x10785, 6656),
    (0x10787, 6658),
    (0x10788, 6660),
    (0x10789, 6662),
    (0x1078A, 6664),
    (0x1078B, 6666),
    (0x1078C, 6668),
    (0x1078D, 6670),
    (0x1078E, 6672),
    (0x1078F, 6674),
    (0x10790, 6676),
    (0x10791, 6678),
    (0x10792, 6680),
    (0x10793, 6682),
    (0x10794, 6684),
    (0x10795, 6686),
    (0x10796, 6688),
    (0x10797, 6690),
    (0x10798, 6692),
    (0x10799, 6694),
    (0x1079A, 6696),
    (0x1079B, 6698),
    (0x1079C, 6700),
    (0x1079D, 6702),
    (0x1079E, 6704),
    (0x1079F, 6706),
    (0x107A0, 6708),
    (0x107A1, 6710),
    (0x107A2, 6712),
    (0x107A3, 6714),
    (0x107A4, 6716),
    (0x107A5, 6718),
    (0x107A6, 6720),
    (0x107A7, 6722),
    (0x107A8, 6724),
    (0x107A9, 6726),
    (0x107AA, 6728),
    (0x107AB, 6730),
    (0x107AC, 6732),
    (0x107AD, 6734),
    (0x107AE, 6736),
    (0x107AF, 6738),
    (0x107B0, 6740),
    (0x107B2, 6742),
    (0x107B3, 6744),
    (0x107B4, 6746),
    (0x107B5, 6748),
    (0x107B6, 6750),
    (0x107B7, 6752),
    (0x107B8, 6754),
    (0x107B9, 6756),
    (0x107BA, 6758),
    (0x1109A, 1),
    (0x1109C, 1),
    (0x110AB, 1),
    (0x1112E, 1),
    (0x1112F, 1),
    (0x1134B, 1),
    (0x1134C, 1),
    (0x114BB, 1),
    (0x114BC, 1),
    (0x114BE, 1),
    (0x115BA, 1),
    (0x115BB, 1),
    (0x11938, 1),
    (0x1D15E, 1),
    (0x1D15F, 1),
    (0x1D160, 1),
    (0x1D161, 1),
    (0x1D162, 1),
    (0x1D163, 1),
    (0x1D164, 1),
    (0x1D1BB, 1),
    (0x1D1BC, 1),
    (0x1D1BD, 1),
    (0x1D1BE, 1),
    (0x1D1BF, 1),
    (0x1D1C0, 1),
    (0x1D400, 6760),
    (0x1D401, 6762),
    (0x1D402, 6764),
    (0x1D403, 6766),
    (0x1D404, 6768),
    (0x1D405, 6770),
    (0x1D406, 6772),
    (0x1D407, 6774),
    (0x1D408, 6776),
    (0x1D409, 6778),
    (0x1D40A, 6780),
    (0x1D40B, 6782),
    (0x1D40C, 6784),
    (0x1D40D, 6786),
    (0x1D40E, 6788),
    (0x1D40F, 6790),
    (0x1D410, 6792),
    (0x1D411, 6794),
    (0x1D412, 6796),
    (0x1D413, 6798),
    (0x1D414, 6800),
    (0x1D415, 6802),
    (0x1D416, 6804),
    (0x1D417, 6806),
    (0x1D418, 6808),
    (0x1D419, 6810),
    (0x1D41A, 6812),
    (0x1D41B, 6814),
    (0x1D41C, 6816),
    (0x1D41D, 6818),
    (0x1D41E, 6820),
    (0x1D41F, 6822),
    (0x1D420, 6824),
    (0x1D421, 6826),
    (0x1D422, 6828),
    (0x1D423, 6830),
    (0x1D424, 6832),
    (0x1D425, 6834),
    (0x1D426, 6836),
    (0x1D427, 6838),
    (0x1D428, 6840),
    (0x1D429, 6842),
    (0x1D42A, 6844),
    (0x1D42B, 6846),
    (0x1D42C, 6848),
    (0x1D42D, 6850),
    (0x1D42E, 6852),
    (0x1D42F, 6854),
    (0x1D430, 6856),
    (0x1D431, 6858),
    (0x1D432, 6860),
    (0x1D433, 6862),
    (0x1D434, 6864),
    (0x1D435, 6866),
    (0x1D436, 6868),
    (0x1D437, 6870),
    (0x1D438, 6872),
    (0x1D439, 6874),
    (0x1D43A, 6876),
    (0x1D43B, 6878),
    (0x1D43C, 6880),
    (0x1D43D, 6882),
    (0x1D43E, 6884),
    (0x1D43F, 6886),
    (0x1D440, 6888),
    (0x1D441, 6890),
    (0x1D442, 6892),
    (0x1D443, 6894),
    (0x1D444, 6896),
    (0x1D445, 6898),
    (0x1D446, 6900),
    (0x1D447, 6902),
    (0x1D448, 6904),
    (0x1D449, 6906),
    (0x1D44A, 6908),
    (0x1D44B, 6910),
    (0x1D44C, 6912),
    (0x1D44D, 6914),
    (0x1D44E, 6916),
    (0x1D44F, 6918),
    (0x1D450, 6920),
    (0x1D451, 6922),
    (0x1D452, 6924),
    (0x1D453, 6926),
    (0x1D454, 6928),
    (0x1D456, 6930),
    (0x1D457, 6932),
    (0x1D458, 6934),
    (0x1D459, 6936),
    (0x1D45A, 6938),
    (0x1D45B, 6940),
    (0x1D45C, 6942),
    (0x1D45D, 6944),
    (0x1D45E, 6946),
    (0x1D45F, 6948),
    (0x1D460, 6950),
    (0x1D461, 6952),
    (0x1D462, 6954),
    (0x1D463, 6956),
    (0x1D464, 6958),
    (0x1D465, 6960),
    (0x1D466, 6962),
    (0x1D467, 6964),
    (0x1D468, 6966),
    (0x1D469, 6968),
    (0x1D46A, 6970),
    (0x1D46B, 6972),
    (0x1D46C, 6974),
    (0x1D46D, 6976),
    (0x1D46E, 6978),
    (0x1D46F, 6980),
    (0x1D470, 6982),
    (0x1D471, 6984),
    (0x1D472, 6986),
    (0x1D473, 6988),
    (0x1D474, 6990),
    (0x1D475, 6992),
    (0x1D476, 6994),
    (0x1D477, 6996),
    (0x1D478, 6998),
    (0x1D479, 7000),
    (0x1D47A, 7002),
    (0x1D47B, 7004),
    (0x1D47C, 7006),
    (0x1D47D, 7008),
    (0x1D47E, 7010),
    (0x1D47F, 7012),
    (0x1D480, 7014),
    (0x1D481, 7016),
    (0x1D482, 7018),
    (0x1D483, 7020),
    (0x1D484, 7022),
    (0x1D485, 7024),
    (0x1D486, 7026),
    (0x1D487, 7028),
    (0x1D488, 7030),
    (0x1D489, 7032),
    (0x1D48A, 7034),
    (0x1D48B, 7036),
    (0x1D48C, 7038),
    (0x1D48D, 7040),
    (0x1D48E, 7042),
    (0x1D48F, 7044),
    (0x1D490, 7046),
    (0x1D491, 7048),
    (0x1D492, 7050),
    (0x1D493, 7052),
    (0x1D494, 7054),
    (0x1D495, 7056),
    (0x1D496, 7058),
    (0x1D497, 7060),
    (0x1D498, 7062),
    (0x1D499, 7064),
    (0x1D49A, 7066),
    (0x1D49B, 7068),
    (0x1D49C, 7070),
    (0x1D49E, 7072),
    (0x1D49F, 7074),
    (0x1D4A2, 7076),
    (0x1D4A5, 7078),
    (0x1D4A6, 7080),
    (0x1D4A9, 7082),
    (0x1D4AA, 7084),
    (0x1D4AB, 7086),
    (0x1D4AC, 7088),
    (0x1D4AE, 7090),
    (0x1D4AF, 7092),
    (0x1D4B0, 7094),
    (0x1D4B1, 7096),
    (0x1D4B2, 7098),
    (0x1D4B3, 7100),
    (0x1D4B4, 7102),
    (0x1D4B5, 7104),
    (0x1D4B6, 7106),
    (0x1D4B7, 7108),
    (0x1D4B8, 7110),
    (0x1D4B9, 7112),
    (0x1D4BB, 7114),
    (0x1D4BD, 7116),
    (0x1D4BE, 7118),
    (0x1D4BF, 7120),
    (0x1D4C0, 7122),
    (0x1D4C1, 7124),
    (0x1D4C2, 7126),
    (0x1D4C3, 7128),
    (0x1D4C5, 7130),
    (0x1D4C6, 7132),
    (0x1D4C7, 7134),
    (0x1D4C8, 7136),
    (0x1D4C9, 7138),
    (0x1D4CA, 7140),
    (0x1D4CB, 7142),
    (0x1D4CC, 7144),
    (0x1D4CD, 7146),
    (0x1D4CE, 7148),
    (0x1D4CF, 7150),
    (0x1D4D0, 7152),
    (0x1D4D1, 7154),
    (0x1D4D2, 7156),
    (0x1D4D3, 7158),
    (0x1D4D4, 7160),
    (0x1D4D5, 7162),
    (0x1D4D6, 7164),
    (0x1D4D7, 7166),
    (0x1D4D8, 7168),
    (0x1D4D9, 7170),
    (0x1D4DA, 7172),
    (0x1D4DB, 7174),
    (0x1D4DC, 7176),
    (0x1D4DD, 7178),
    (0x1D4DE, 7180),
    (0x1D4DF, 7182),
    (0x1D4E0, 7184),
    (0x1D4E1, 7186),
    (0x1D4E2, 7188),
    (0x1D4E3, 7190),
    (0x1D4E4, 7192),
    (0x1D4E5, 7194),
    (0x1D4E6, 7196),
    (0x1D4E7, 7198),
    (0x1D4E8, 7200),
    (0x1D4E9, 7202),
    (0x1D4EA, 7204),
    (0x1D4EB, 7206),
    (0x1D4EC, 7208),
    (0x1D4ED, 7210),
    (0x1D4EE, 7212),
    (0x1D4EF, 7214),
    (0x1D4F0, 7216),
    (0x1D4F1, 7218),
    (0x1D4F2, 7220),
    (0x1D4F3, 7222),
    (0x1D4F4, 7224),
    (0x1D4F5, 7226),
    (0x1D4F6, 7228),
    (0x1D4F7, 7230),
    (0x1D4F8, 7232),
    (0x1D4F9, 7234),
    (0x1D4FA, 7236),
    (0x1D4FB, 7238),
    (0x1D4FC, 7240),
    (0x1D4FD, 7242),
    (0x1D4FE, 7244),
    (0x1D4FF, 7246),
    (0x1D500, 7248),
    (0x1D501, 7250),
    (0x1D502, 7252),
    (0x1D503, 7254),
    (0x1D504, 7256),
    (0x1D505, 7258),
    (0x1D507, 7260),
    (0x1D508, 7262),
    (0x1D509, 7264),
    (0x1D50A, 7266),
    (0x1D50D, 7268),
    (0x1D50E, 7270),
    (0x1D50F, 7272),
    (0x1D510, 7274),
    (0x1D511, 7276),
    (0x1D512, 7278),
    (0x1D513, 7280),
    (0x1D514, 7282),
    (0x1D516, 7284),
    (0x1D517, 7286),
    (0x1D518, 7288),
    (0x1D519, 7290),
    (0x1D51A, 7292),
    (0x1D51B, 7294),
    (0x1D51C, 7296),
    (0x1D51E, 7298),
    (0x1D51F, 7300),
    (0x1D520, 7302),
    (0x1D521, 7304),
    (0x1D522, 7306),
    (0x1D523, 7308),
    (0x1D524, 7310),
    (0x1D525, 7312),
    (0x1D526, 7314),
    (0x1D527, 7316),
    (0x1D528, 7318),
    (0x1D529, 7320),
    (0x1D52A, 7322),
    (0x1D52B, 7324),
    (0x1D52C, 7326),
    (0x1D52D, 7328),
    (0x1D52E, 7330),
    (0x1D52F, 7332),
    (0x1D530, 7334),
    (0x1D531, 7336),
    (0x1D532, 7338),
    (0x1D533, 7340),
    (0x1D534, 7342),
    (0x1D535, 7344),
    (0x1D536, 7346),
    (0x1D537, 7348),
    (0x1D538, 7350),
    (0x1D539, 7352),
    (0x1D53B, 7354),
    (0x1D53C, 7356),
    (0x1D53D, 7358),
    (0x1D53E, 7360),
    (0x1D540, 7362),
    (0x1D541, 7364),
    (0x1D542, 7366),
    (0x1D543, 7368),
    (0x1D544, 7370),
    (0x1D546, 7372),
    (0x1D54A, 7374),
    (0x1D54B, 7376),
    (0x1D54C, 7378),
    (0x1D54D, 7380),
    (0x1D54E, 7382),
    (0x1D54F, 7384),
    (0x1D550, 7386),
    (0x1D552, 7388),
    (0x1D553, 7390),
    (0x1D554, 7392),
    (0x1D555, 7394),
    (0x1D556, 7396),
    (0x1D557, 7398),
    (0x1D558, 7400),
    (0x1D559, 7402),
    (0x1D55A, 7404),
    (0x1D55B, 7406),
    (0x1D55C, 7408),
    (0x1D55D, 7410),
    (0x1D55E, 7412),
    (0x1D55F, 7414),
    (0x1D560, 7416),
    (0x1D561, 7418),
    (0x1D562, 7420),
    (0x1D563, 7422),
    (0x1D564, 7424),
    (0x1D565, 7426),
    (0x1D566, 7428),
    (0x1D567, 7430),
    (0x1D568, 7432),
    (0x1D569, 7434),
    (0x1D56A, 7436),
    (0x1D56B, 7438),
    (0x1D56C, 7440),
    (0x1D56D, 7442),
    (0x1D56E, 7444),
    (0x1D56F, 7446),
    (0x1D570, 7448),
    (0x1D571, 7450),
    (0x1D572, 7452),
    (0x1D573, 7454),
    (0x1D574, 7456),
    (0x1D575, 7458),
    (0x1D576, 7460),
    (0x1D577, 7462),
    (0x1D578, 7464),
    (0x1D579, 7466),
    (0x1D57A, 7468),
    (0x1D57B, 7470),
    (0x1D57C, 7472),
    (0x1D57D, 7474),
    (0x1D57E, 7476),
    (0x1D57F, 7478),
    (0x1D580, 7480),
    (0x1D581, 7482),
    (0x1D582, 7484),
    (0x1D583, 7486),
    (0x1D584, 7488),
    (0x1D585, 7490),
    (0x1D586, 7492),
    (0x1D587, 7494),
    (0x1D588, 7496),
    (0x1D589, 7498),
    (0x1D58A, 7500),
    (0x1D58B, 7502),
    (0x1D58C, 7504),
    (0x1D58D, 7506),
    (0x1D58E, 7508),
    (0x1D58F, 7510),
    (0x1D590, 7512),
    (0x1D591, 7514),
    (0x1D592, 7516),
    (0x1D593, 7518),
    (0x1D594, 7520),
    (0x1D595, 7522),
    (0x1D596, 7524),
    (0x1D597, 7526),
    (0x1D598, 7528),
    (0x1D599, 7530),
    (0x1D59A, 7532),
    (0x1D59B, 7534),
    (0x1D59C, 7536),
    (0x1D59D, 7538),
    (0x1D59E, 7540),
    (0x1D59F, 7542),
    (0x1D5A0, 7544),
    (0x1D5A1, 7546),
    (0x1D5A2, 7548),
    (0x1D5A3, 7550),
    (0x1D5A4, 7552),
    (0x1D5A5, 7554),
    (0x1D5A6, 7556),
    (0x1D5A7, 7558),
    (0x1D5A8, 7560),
    (0x1D5A9, 7562),
    (0x1D5AA, 7564),
    (0x1D5AB, 7566),
    (0x1D5AC, 7568),
    (0x1D5AD, 7570),
    (0x1D5AE, 7572),
    (0x1D5AF, 7574),
    (0x1D5B0, 7576),
    (0x1D5B1, 7578),
    (0x1D5B2, 7580),
    (0x1D5B3, 7582),
    (0x1D5B4, 7584),
    (0x1D5B5, 7586),
    (0x1D5B6, 7588),
    (0x1D5B7, 7590),
    (0x1D5B8, 7592),
    (0x1D5B9, 7594),
    (0x1D5BA, 7596),
    (0x1D5BB, 7598),
    (0x1D5BC, 7600),
    (0x1D5BD, 7602),
    (0x1D5BE, 7604),
    (0x1D5BF, 7606),
    (0x1D5C0, 7608),
    (0x1D5C1, 7610),
    (0x1D5C2, 7612),
    (0x1D5C3, 7614),
    (0x1D5C4, 7616),
    (0x1D5C5, 7618),
    (0x1D5C6, 7620),
    (0x1D5C7, 7622),
    (0x1D5C8, 7624),
    (0x1D5C9, 7626),
    (0x1D5CA, 7628),
    (0x1D5CB, 7630),
    (0x1D5CC, 7632),
    (0x1D5CD, 7634),
    (0x1D5CE, 7636),
    (0x1D5CF, 7638),
    (0x1D5D0, 7640),
    (0x1D5D1, 7642),
    (0x1D5D2, 7644),
    (0x1D5D3, 7646),
    (0x1D5D4, 7648),
    (0x1D5D5, 7650),
    (0x1D5D6, 7652),
    (0x1D5D7, 7654),
    (0x1D5D8, 7656),
    (0x1D5D9, 7658),
    (0x1D5DA, 7660),
    (0x1D5DB, 7662),
    (0x1D5DC, 7664),
    (0x1D5DD, 7666),
    (0x1D5DE, 7668),
    (0x1D5DF, 7670),
    (0x1D5E0, 7672),
    (0x1D5E1, 7674),
    (0x1D5E2, 7676),
    (0x1D5E3, 7678),
    (0x1D5E4, 7680),
    (0x1D5E5, 7682),
    (0x1D5E6, 7684),
    (0x1D5E7, 7686),
    (0x1D5E8, 7688),
    (0x1D5E9, 7690),
    (0x1D5EA, 7692),
    (0x1D5EB, 7694),
    (0x1D5EC, 7696),
    (0x1D5ED, 7698),
    (0x1D5EE, 7700),
    (0x1D5EF, 7702),
    (0x1D5F0, 7704),
    (0x1D5F1, 7706),
    (0x1D5F2, 7708),
    (0x1D5F3, 7710),
    (0x1D5F4, 7712),
    (0x1D5F5, 7714),
    (0x1D5F6, 7716),
    (0x1D5F7, 7718),
    (0x1D5F8, 7720),
    (0x1D5F9, 7722),
    (0x1D5FA, 7724),
    (0x1D5FB, 7726),
    (0x1D5FC, 7728),
    (0x1D5FD, 7730),
    (0x1D5FE, 7732),
    (0x1D5FF, 7734),
    (0x1D600, 7736),
    (0x1D601, 7738),
    (0x1D602, 7740),
    (0x1D603, 7742),
    (0x1D604, 7744),
    (0x1D605, 7746),
    (0x1D606, 7748),
    (0x1D607, 7750),
    (0x1D608, 7752),
    (0x1D609, 7754),
    (0x1D60A, 7756),
    (0x1D60B, 7758),
    (0x1D60C, 7760),
    (0x1D60D, 7762),
    (0x1D60E, 7764),
    (0x1D60F, 7766),
    (0x1D610, 7768),
    (0x1D611, 7770),
    (0x1D612, 7772),
    (0x1D613, 7774),
    (0x1D614, 7776),
    (0x1D615, 7778),
    (0x1D616, 7780),
    (0x1D617, 7782),
    (0x1D618, 7784),
    (0x1D619, 7786),
    (0x1D61A, 7788),
    (0x1D61B, 7790),
    (0x1D61C, 7792),
    (0x1D61D, 7794),
    (0x1D61E, 7796),
    (0x1D61F, 7798),
    (0x1D620, 7800),
    (0x1D621, 7802),
    (0x1D622, 7804),
    (0x1D623, 7806),
    (0x1D624, 7808),
    (0x1D625, 7810),
    (0x1D626, 7812),
    (0x1D627, 7814),
    (0x1D628, 7816),
    (0x1D629, 7818),
    (0x1D62A, 7820),
    (0x1D62B, 7822),
    (0x1D62C, 7824),
    (0x1D62D, 7826),
    (0x1D62E, 7828),
    (0x1D62F, 7830),
    (0x1D630, 7832),
    (0x1D631, 7834),
    (0x1D632, 7836),
    (0x1D633, 7838),
    (0x1D634, 7840),
    (0x1D635, 7842),
    (0x1D636, 7844),
    (0x1D637, 7846),
    (0x1D638, 7848),
    (0x1D639, 7850),
    (0x1D63A, 7852),
    (0x1D63B, 7854),
    (0x1D63C, 7856),
    (0x1D63D, 7858),
    (0x1D63E, 7860),
    (0x1D63F, 7862),
    (0x1D640, 7864),
    (0x1D641, 7866),
    (0x1D642, 7868),
    (0x1D643, 7870),
    (0x1D644, 7872),
    (0x1D645, 7874),
    (0x1D646, 7876),
    (0x1D647, 7878),
    (0x1D648, 7880),
    (0x1D649, 7882),
    (0x1D64A, 7884),
    (0x1D64B, 7886),
    (0x1D64C, 7888),
    (0x1D64D, 7890),
    (0x1D64E, 7892),
    (0x1D64F, 7894),
    (0x1D650, 7896),
    (0x1D651, 7898),
    (0x1D652, 7900),
    (0x1D653, 7902),
    (0x1D654, 7904),
    (0x1D655, 7906),
    (0x1D656, 7908),
    (0x1D657, 7910),
    (0x1D658, 7912),
    (0x1D659, 7914),
    (0x1D65A, 7916),
    (0x1D65B, 7918),
    (0x1D65C, 7920),
    (0x1D65D, 7922),
    (0x1D65E, 7924),
    (0x1D65F, 7926),
    (0x1D660, 7928),
    (0x1D661, 7930),
    (0x1D662, 7932),
    (0x1D663, 7934),
    (0x1D664, 7936),
    (0x1D665, 7938),
    (0x1D666, 7940),
    (0x1D667, 7942),
    (0x1D668, 7944),
    (0x1D669, 7946),
    (0x1D66A, 7948),
    (0x1D66B, 7950),
    (0x1D66C, 7952),
    (0x1D66D, 7954),
    (0x1D66E, 7956),
    (0x1D66F, 7958),
    (0x1D670, 7960),
    (0x1D671, 7962),
    (0x1D672, 7964),
    (0x1D673, 7966),
    (0x1D674, 7968),
    (0x1D675, 7970),
    (0x1D676, 7972),
    (0x1D677, 7974),
    (0x1D678, 7976),
    (0x1D679, 7978),
    (0x1D67A, 7980),
    (0x1D67B, 7982),
    (0x1D67C, 7984),
    (0x1D67D, 7986),
    (0x1D67E, 7988),
    (0x1D67F, 7990),
    (0x1D680, 7992),
    (0x1D681, 7994),
    (0x1D682, 7996),
    (0x1D683, 7998),
    (0x1D684, 8000),
    (0x1D685, 8002),
    (0x1D686, 8004),
    (0x1D687, 8006),
    (0x1D688, 8008),
    (0x1D689, 8010),
    (0x1D68A, 8012),
    (0x1D68B, 8014),
    (0x1D68C, 8016),
    (0x1D68D, 8018),
    (0x1D68E, 8020),
    (0x1D68F, 8022),
    (0x1D690, 8024),
    (0x1D691, 8026),
    (0x1D692, 8028),
    (0x1D693, 8030),
    (0x1D694, 8032),
    (0x1D695, 8034),
    (0x1D696, 8036),
    (0x1D697, 8038),
    (0x1D698, 8040),
    (0x1D699, 8042),
    (0x1D69A, 8044),
    (0x1D69B, 8046),
    (0x1D69C, 8048),
    (0x1D69D, 8050),
    (0x1D69E, 8052),
    (0x1D69F, 8054),
    (0x1D6A0, 8056),
    (0x1D6A1, 8058),
    (0x1D6A2, 8060),
    (0x1D6A3, 8062),
    (0x1D6A4, 8064),
    (0x1D6A5, 8066),
    (0x1D6A8, 8068),
    (0x1D6A9, 8070),
    (0x1D6AA, 8072),
    (0x1D6AB, 8074),
    (0x1D6AC, 8076),
    (0x1D6AD, 8078),
    (0x1D6AE, 8080),
    (0x1D6AF, 8082),
    (0x1D6B0, 8084),
    (0x1D6B1, 8086),
    (0x1D6B2, 8088),
    (0x1D6B3, 8090),
    (0x1D6B4, 8092),
    (0x1D6B5, 8094),
    (0x1D6B6, 8096),
    (0x1D6B7, 8098),
    (0x1D6B8, 8100),
    (0x1D6B9, 8102),
    (0x1D6BA, 8104),
    (0x1D6BB, 8106),
    (0x1D6BC, 8108),
    (0x1D6BD, 8110),
    (0x1D6BE, 8112),
    (0x1D6BF, 8114),
    (0x1D6C0, 8116),
    (0x1D6C1, 8118),
    (0x1D6C2, 8120),
    (0x1D6C3, 8122),
    (0x1D6C4, 8124),
    (0x1D6C5, 8126),
    (0x1D6C6, 8128),
    (0x1D6C7, 8130),
    (0x1D6C8, 8132),
    (0x1D6C9, 8134),
    (0x1D6CA, 8136),
    (0x1D6CB, 8138),
    (0x1D6CC, 8140),
    (0x1D6CD, 8142),
    (0x1D6CE, 8144),
    (0x1D6CF, 8146),
    (0x1D6D0, 8148),
    (0x1D6D1, 8150),
    (0x1D6D2, 8152),
    (0x1D6D3, 8154),
    (0x1D6D4, 8156),
    (0x1D6D5, 8158),
    (0x1D6D6, 8160),
    (0x1D6D7, 8162),
    (0x1D6D8, 8164),
    (0x1D6D9, 8166),
    (0x1D6DA, 8168),
    (0x1D6DB, 8170),
    (0x1D6DC, 8172),
    (0x1D6DD, 8174),
    (0x1D6DE, 8176),
    (0x1D6DF, 8178),
    (0x1D6E0, 8180),
    (0x1D6E1, 8182),
    (0x1D6E2, 8184),
    (0x1D6E3, 8186),
    (0x1D6E4, 8188),
    (0x1D6E5, 8190),
    (0x1D6E6, 8192),
    (0x1D6E7, 8194),
    (0x1D6E8, 8196),
    (0x1D6E9, 8198),
    (0x1D6EA, 8200),
    (0x1D6EB, 8202),
    (0x1D6EC, 8204),
    (0x1D6ED, 8206),
    (0x1D6EE, 8208),
    (0x1D6EF, 8210),
    (0x1D6F0, 8212),
    (0x1D6F1, 8214),
    (0x1D6F2, 8216),
    (0x1D6F3, 8218),
    (0x1D6F4, 8220),
    (0x1D6F5, 8222),
    (0x1D6F6, 8224),
    (0x1D6F7, 8226),
    (0x1D6F8, 8228),
    (0x1D6F9, 8230),
    (0x1D6FA, 8232),
    (0x1D6FB, 8234),
    (0x1D6FC, 8236),
    (0x1D6FD, 8238),
    (0x1D6FE, 8240),
    (0x1D6FF, 8242),
    (0x1D700, 8244),
    (0x1D701, 8246),
    (0x1D702, 8248),
    (0x1D703, 8250),
    (0x1D704, 8252),
    (0x1D705, 8254),
    (0x1D706, 8256),
    (0x1D707, 8258),
    (0x1D708, 8260),
    (0x1D709, 8262),
    (0x1D70A, 8264),
    (0x1D70B, 8266),
    (0x1D70C, 8268),
    (0x1D70D, 8270),
    (0x1D70E, 8272),
    (0x1D70F, 8274),
    (0x1D710, 8276),
    (0x1D711, 8278),
    (0x1D712, 8280),
    (0x1D713, 8282),
    (0x1D714, 8284),
    (0x1D715, 8286),
    (0x1D716, 8288),
    (0x1D717, 8290),
    (0x1D718, 8292),
    (0x1D719, 8294),
    (0x1D71A, 8296),
    (0x1D71B, 8298),
    (0x1D71C, 8300),
    (0x1D71D, 8302),
    (0x1D71E, 8304),
    (0x1D71F, 8306),
    (0x1D720, 8308),
    (0x1D721, 8310),
    (0x1D722, 8312),
    (0x1D723, 8314),
    (0x1D724, 8316),
    (0x1D725, 8318),
    (0x1D726, 8320),
    (0x1D727, 8322),
    (0x1D728, 8324),
    (0x1D729, 8326),
    (0x1D72A, 8328),
    (0x1D72B, 8330),
    (0x1D72C, 8332),
    (0x1D72D, 8334),
    (0x1D72E, 8336),
    (0x1D72F, 8338),
    (0x1D730, 8340),
    (0x1D731, 8342),
    (0x1D732, 8344),
    (0x1D733, 8346),
    (0x1D734, 8348),
    (0x1D735, 8350),
    (0x1D736, 8352),
    (0x1D737, 8354),
    (0x1D738, 8356),
    (0x1D739, 8358),
    (0x1D73A, 8360),
    (0x1D73B, 8362),
    (0x1D73C, 8364),
    (0x1D73D, 8366),
    (0x1D73E, 8368),
    (0x1D73F, 8370),
    (0x1D740, 8372),
    (0x1D741, 8374),
    (0x1D742, 8376),
    (0x1D743, 8378),
    (0x1D744, 8380),
    (0x1D745, 8382),
    (0x1D746, 8384),
    (0x1D747, 8386),
    (0x1D748, 8388),
    (0x1D749, 8390),
    (0x1D74A, 8392),
    (0x1D74B, 8394),
    (0x1D74C, 8396),
    (0x1D74D, 8398),
    (0x1D74E, 8400),
    (0x1D74F, 8402),
    (0x1D750, 8404),
    (0x1D751, 8406),
    (0x1D752, 8408),
    (0x1D753, 8410),
    (0x1D754, 8412),
    (0x1D755, 8414),
    (0x1D756, 8416),
    (0x1D757, 8418),
    (0x1D758, 8420),
    (0x1D759, 8422),
    (0x1D75A, 8424),
    (0x1D75B, 8426),
    (0x1D75C, 8428),
    (0x1D75D, 8430),
    (0x1D75E, 8432),
    (0x1D75F, 8434),
    (0x1D760, 8436),
    (0x1D761, 8438),
    (0x1D762, 8440),
    (0x1D763, 8442),
    (0x1D764, 8444),
    (0x1D765, 8446),
    (0x1D766, 8448),
    (0x1D767, 8450),
    (0x1D768, 8452),
    (0x1D769, 8454),
    (0x1D76A, 8456),
    (0x1D76B, 8458),
    (0x1D76C, 8460),
    (0x1D76D, 8462),
    (0x1D76E, 8464),
    (0x1D76F, 8466),
    (0x1D770, 8468),
    (0x1D771, 8470),
    (0x1D772, 8472),
    (0x1D773, 8474),
    (0x1D774, 8476),
    (0x1D775, 8478),
    (0x1D776, 8480),
    (0x1D777, 8482),
    (0x1D778, 8484),
    (0x1D779, 8486),
    (0x1D77A, 8488),
    (0x1D77B, 8490),
    (0x1D77C, 8492),
    (0x1D77D, 8494),
    (0x1D77E, 8496),
    (0x1D77F, 8498),
    (0x1D780, 8500),
    (0x1D781, 8502),
    (0x1D782, 8504),
    (0x1D783, 8506),
    (0x1D784, 8508),
    (0x1D785, 8510),
    (0x1D786, 8512),
    (0x1D787, 8514),
    (0x1D788, 8516),
    (0x1D789, 8518),
    (0x1D78A, 8520),
    (0x1D78B, 8522),
    (0x1D78C, 8524),
    (0x1D78D, 8526),
    (0x1D78E, 8528),
    (0x1D78F, 8530),
    (0x1D790, 8532),
    (0x1D791, 8534),
    (0x1D792, 8536),
    (0x1D793, 8538),
    (0x1D794, 8540),
    (0x1D795, 8542),
    (0x1D796, 8544),
    (0x1D797, 8546),
    (0x1D798, 8548),
    (0x1D799, 8550),
    (0x1D79A, 8552),
    (0x1D79B, 8554),
    (0x1D79C, 8556),
    (0x1D79D, 8558),
    (0x1D79E, 8560),
    (0x1D79F, 8562),
    (0x1D7A0, 8564),
    (0x1D7A1, 8566),
    (0x1D7A2, 8568),
    (0x1D7A3, 8570),
    (0x1D7A4, 8572),
    (0x1D7A5, 8574),
    (0x1D7A6, 8576),
    (0x1D7A7, 8578),
    (0x1D7A8, 8580),
    (0x1D7A9, 8582),
    (0x1D7AA, 8584),
    (0x1D7AB, 8586),
    (0x1D7AC, 8588),
    (0x1D7AD, 8590),
    (0x1D7AE, 8592),
    (0x1D7AF, 8594),
    (0x1D7B0, 8596),
    (0x1D7B1, 8598),
    (0x1D7B2, 8600),
    (0x1D7B3, 8602),
    (0x1D7B4, 8604),
    (0x1D7B5, 8606),
    (0x1D7B6, 8608),
    (0x1D7B7, 8610),
    (0x1D7B8, 8612),
    (0x1D7B9, 8614),
    (0x1D7BA, 8616),
    (0x1D7BB, 8618),
    (0x1D7BC, 8620),
    (0x1D7BD, 8622),
    (0x1D7BE, 8624),
    (0x1D7BF, 8626),
    (0x1D7C0, 8628),
    (0x1D7C1, 8630),
    (0x1D7C2, 8632),
    (0x1D7C3, 8634),
    (0x1D7C4, 8636),
    (0x1D7C5, 8638),
    (0x1D7C6, 8640),
    (0x1D7C7, 8642),
    (0x1D7C8, 8644),
    (0x1D7C9, 8646),
    (0x1D7CA, 8648),
    (0x1D7CB, 8650),
    (0x1D7CE, 8652),
    (0x1D7CF, 8654),
    (0x1D7D0, 8656),
    (0x1D7D1, 8658),
    (0x1D7D2, 8660),
    (0x1D7D3, 8662),
    (0x1D7D4, 8664),
    (0x1D7D5, 8666),
    (0x1D7D6, 8668),
    (0x1D7D7, 8670),
    (0x1D7D8, 8672),
    (0x1D7D9, 8674),
    (0x1D7DA, 8676),
    (0x1D7DB, 8678),
    (0x1D7DC, 8680),
    (0x1D7DD, 8682),
    (0x1D7DE, 8684),
    (0x1D7DF, 8686),
    (0x1D7E0, 8688),
    (0x1D7E1, 8690),
    (0x1D7E2, 8692),
    (0x1D7E3, 8694),
    (0x1D7E4, 8696),
    (0x1D7E5, 8698),
    (0x1D7E6, 8700),
    (0x1D7E7, 8702),
    (0x1D7E8, 8704),
    (0x1D7E9, 8706),
    (0x1D7EA, 8708),
    (0x1D7EB, 8710),
    (0x1D7EC, 8712),
    (0x1D7ED, 8714),
    (0x1D7EE, 8716),
    (0x1D7EF, 8718),
    (0x1D7F0, 8720),
    (0x1D7F1, 8722),
    (0x1D7F2, 8724),
    (0x1D7F3, 8726),
    (0x1D7F4, 8728),
    (0x1D7F5, 8730),
    (0x1D7F6, 8732),
    (0x1D7F7, 8734),
    (0x1D7F8, 8736),
    (0x1D7F9, 8738),
    (0x1D7FA, 8740),
    (0x1D7FB, 8742),
    (0x1D7FC, 8744),
    (0x1D7FD, 8746),
    (0x1D7FE, 8748),
    (0x1D7FF, 8750),
    (0x1EE00, 8752),
    (0x1EE01, 8754),
    (0x1EE02, 8756),
    (0x1EE03, 8758),
    (0x1EE05, 8760),
    (0x1EE06, 8762),
    (0x1EE07, 8764),
    (0x1EE08, 8766),
    (0x1EE09, 8768),
    (0x1EE0A, 8770),
    (0x1EE0B, 8772),
    (0x1EE0C, 8774),
    (0x1EE0D, 8776),
    (0x1EE0E, 8778),
    (0x1EE0F, 8780),
    (0x1EE10, 8782),
    (0x1EE11, 8784),
    (0x1EE12, 8786),
    (0x1EE13, 8788),
    (0x1EE14, 8790),
    (0x1EE15, 8792),
    (0x1EE16, 8794),
    (0x1EE17, 8796),
    (0x1EE18, 8798),
    (0x1EE19, 8800),
    (0x1EE1A, 8802),
    (0x1EE1B, 8804),
    (0x1EE1C, 8806),
    (0x1EE1D, 8808),
    (0x1EE1E, 8810),
    (0x1EE1F, 8812),
    (0x1EE21, 8814),
    (0x1EE22, 8816),
    (0x1EE24, 8818),
    (0x1EE27, 8820),
    (0x1EE29, 8822),
    (0x1EE2A, 8824),
    (0x1EE2B, 8826),
    (0x1EE2C, 8828),
    (0x1EE2D, 8830),
    (0x1EE2E, 8832),
    (0x1EE2F, 8834),
    (0x1EE30, 8836),
    (0x1EE31, 8838),
    (0x1EE32, 8840),
    (0x1EE34, 8842),
    (0x1EE35, 8844),
    (0x1EE36, 8846),
    (0x1EE37, 8848),
    (0x1EE39, 8850),
    (0x1EE3B, 8852),
    (0x1EE42, 8854),
    (0x1EE47, 8856),
    (0x1EE49, 8858),
    (0x1EE4B, 8860),
    (0x1EE4D, 8862),
    (0x1EE4E, 8864),
    (0x1EE4F, 8866),
    (0x1EE51, 8868),
    (0x1EE52, 8870),
    (0x1EE54, 8872),
    (0x1EE57, 8874),
    (0x1EE59, 8876),
    (0x1EE5B, 8878),
    (0x1EE5D, 8880),
    (0x1EE5F, 8882),
    (0x1EE61, 8884),
    (0x1EE62, 8886),
    (0x1EE64, 8888),
    (0x1EE67, 8890),
    (0x1EE68, 8892),
    (0x1EE69, 8894),
    (0x1EE6A, 8896),
    (0x1EE6C, 8898),
    (0x1EE6D, 8900),
    (0x1EE6E, 8902),
    (0x1EE6F, 8904),
    (0x1EE70, 8906),
    (0x1EE71, 8908),
    (0x1EE72, 8910),
    (0x1EE74, 8912),
    (0x1EE75, 8914),
    (0x1EE76, 8916),
    (0x1EE77, 8918),
    (0x1EE79, 8920),
    (0x1EE7A, 8922),
    (0x1EE7B, 8924),
    (0x1EE7C, 8926),
    (0x1EE7E, 8928),
    (0x1EE80, 8930),
    (0x1EE81, 8932),
    (0x1EE82, 8934),
    (0x1EE83, 8936),
    (0x1EE84, 8938),
    (0x1EE85, 8940),
    (0x1EE86, 8942),
    (0x1EE87, 8944),
    (0x1EE88, 8946),
    (0x1EE89, 8948),
    (0x1EE8B, 8950),
    (0x1EE8C, 8952),
    (0x1EE8D, 8954),
    (0x1EE8E, 8956),
    (0x1EE8F, 8958),
    (0x1EE90, 8960),
    (0x1EE91, 8962),
    (0x1EE92, 8964),
    (0x1EE93, 8966),
    (0x1EE94, 8968),
    (0x1EE95, 8970),
    (0x1EE96, 8972),
    (0x1EE97, 8974),
    (0x1EE98, 8976),
    (0x1EE99, 8978),
    (0x1EE9A, 8980),
    (0x1EE9B, 8982),
    (0x1EEA1, 8984),
    (0x1EEA2, 8986),
    (0x1EEA3, 8988),
    (0x1EEA5, 8990),
    (0x1EEA6, 8992),
    (0x1EEA7, 8994),
    (0x1EEA8, 8996),
    (0x1EEA9, 8998),
    (0x1EEAB, 9000),
    (0x1EEAC, 9002),
    (0x1EEAD, 9004),
    (0x1EEAE, 9006),
    (0x1EEAF, 9008),
    (0x1EEB0, 9010),
    (0x1EEB1, 9012),
    (0x1EEB2, 9014),
    (0x1EEB3, 9016),
    (0x1EEB4, 9018),
    (0x1EEB5, 9020),
    (0x1EEB6, 9022),
    (0x1EEB7, 9024),
    (0x1EEB8, 9026),
    (0x1EEB9, 9028),
    (0x1EEBA, 9030),
    (0x1EEBB, 9032),
    (0x1F100, 9034),
    (0x1F101, 9037),
    (0x1F102, 9040),
    (0x1F103, 9043),
    (0x1F104, 9046),
    (0x1F105, 9049),
    (0x1F106, 9052),
    (0x1F107, 9055),
    (0x1F108, 9058),
    (0x1F109, 9061),
    (0x1F10A, 9064),
    (0x1F110, 9067),
    (0x1F111, 9071),
    (0x1F112, 9075),
    (0x1F113, 9079),
    (0x1F114, 9083),
    (0x1F115, 9087),
    (0x1F116, 9091),
    (0x1F117, 9095),
    (0x1F118, 9099),
    (0x1F119, 9103),
    (0x1F11A, 9107),
    (0x1F11B, 9111),
    (0x1F11C, 9115),
    (0x1F11D, 9119),
    (0x1F11E, 9123),
    (0x1F11F, 9127),
    (0x1F120, 9131),
    (0x1F121, 9135),
    (0x1F122, 9139),
    (0x1F123, 9143),
    (0x1F124, 9147),
    (0x1F125, 9151),
    (0x1F126, 9155),
    (0x1F127, 9159),
    (0x1F128, 9163),
    (0x1F129, 9167),
    (0x1F12A, 9171),
    (0x1F12B, 9175),
    (0x1F12C, 9177),
    (0x1F12D, 9179),
    (0x1F12E, 9182),
    (0x1F130, 9185),
    (0x1F131, 9187),
    (0x1F132, 9189),
    (0x1F133, 9191),
    (0x1F134, 9193),
    (0x1F135, 9195),
    (0x1F136, 9197),
    (0x1F137, 9199),
    (0x1F138, 9201),
    (0x1F139, 9203),
    (0x1F13A, 9205),
    (0x1F13B, 9207),
    (0x1F13C, 9209),
    (0x1F13D, 9211),
    (0x1F13E, 9213),
    (0x1F13F, 9215),
    (0x1F140, 9217),
    (0x1F141, 9219),
    (0x1F142, 9221),
    (0x1F143, 9223),
    (0x1F144, 9225),
    (0x1F145, 9227),
    (0x1F146, 9229),
    (0x1F147, 9231),
    (0x1F148, 9233),
    (0x1F149, 9235),
    (0x1F14A, 9237),
    (0x1F14B, 9240),
    (0x1F14C, 9243),
    (0x1F14D, 9246),
    (0x1F14E, 9249),
    (0x1F14F, 9253),
    (0x1F16A, 9256),
    (0x1F16B, 9259),
    (0x1F16C, 9262),
    (0x1F190, 9265),
    (0x1F200, 9268),
    (0x1F201, 9271),
    (0x1F202, 9274),
    (0x1F210, 9276),
    (0x1F211, 9278),
    (0x1F212, 9280),
    (0x1F213, 9282),
    (0x1F214, 9285),
    (0x1F215, 9287),
    (0x1F216, 9289),
    (0x1F217, 9291),
    (0x1F218, 9293),
    (0x1F219, 9295),
    (0x1F21A, 9297),
    (0x1F21B, 9299),
    (0x1F21C, 9301),
    (0x1F21D, 9303),
    (0x1F21E, 9305),
    (0x1F21F, 9307),
    (0x1F220, 9309),
    (0x1F221, 9311),
    (0x1F222, 9313),
    (0x1F223, 9315),
    (0x1F224, 9317),
    (0x1F225, 9319),
    (0x1F226, 9321),
    (0x1F227, 9323),
    (0x1F228, 9325),
    (0x1F229, 9327),
    (0x1F22A, 9329),
    (0x1F22B, 9331),
    (0x1F22C, 9333),
    (0x1F22D, 9335),
    (0x1F22E, 9337),
    (0x1F22F, 9339),
    (0x1F230, 9341),
    (0x1F231, 9343),
    (0x1F232, 9345),
    (0x1F233, 9347),
    (0x1F234, 9349),
    (0x1F235, 9351),
    (0x1F236, 9353),
    (0x1F237, 9355),
    (0x1F238, 9357),
    (0x1F239, 9359),
    (0x1F23A, 9361),
    (0x1F23B, 9363),
    (0x1F240, 9365),
    (0x1F241, 9369),
    (0x1F242, 9373),
    (0x1F243, 9377),
    (0x1F244, 9381),
    (0x1F245, 9385),
    (0x1F246, 9389),
    (0x1F247, 9393),
    (0x1F248, 9397),
    (0x1F250, 9401),
    (0x1F251, 9403),
    (0x1FBF0, 9405),
    (0x1FBF1, 9407),
    (0x1FBF2, 9409),
    (0x1FBF3, 9411),
    (0x1FBF4, 9413),
    (0x1FBF5, 9415),
    (0x1FBF6, 9417),
    (0x1FBF7, 9419),
    (0x1FBF8, 9421),
    (0x1FBF9, 9423),
    (0x2F800, 1),
    (0x2F801, 1),
    (0x2F802, 1),
    (0x2F803, 1),
    (0x2F804, 1),
    (0x2F805, 1),
    (0x2F806, 1),
    (0x2F807, 1),
    (0x2F808, 1),
    (0x2F809, 1),
    (0x2F80A, 1),
    (0x2F80B, 1),
    (0x2F80C, 1),
    (0x2F80D, 1),
    (0x2F80E, 1),
    (0x2F80F, 1),
    (0x2F810, 1),
    (0x2F811, 1),
    (0x2F812, 1),
    (0x2F813, 1),
    (0x2F814, 1),
    (0x2F815, 1),
    (0x2F816, 1),
    (0x2F817, 1),
    (0x2F818, 1),
    (0x2F819, 1),
    (0x2F81A, 1),
    (0x2F81B, 1),
    (0x2F81C, 1),
    (0x2F81D, 1),
    (0x2F81E, 1),
    (0x2F81F, 1),
    (0x2F820, 1),
    (0x2F821, 1),
    (0x2F822, 1),
    (0x2F823, 1),
    (0x2F824, 1),
    (0x2F825, 1),
    (0x2F826, 1),
    (0x2F827, 1),
    (0x2F828, 1),
    (0x2F829, 1),
    (0x2F82A, 1),
    (0x2F82B, 1),
    (0x2F82C, 1),
    (0x2F82D, 1),
    (0x2F82E, 1),
    (0x2F82F, 1),
    (0x2F830, 1),
    (0x2F831, 1),
    (0x2F832, 1),
    (0x2F833, 1),
    (0x2F834, 1),
    (0x2F835, 1),
    (0x2F836, 1),
    (0x2F837, 1),
    (0x2F838, 1),
    (0x2F839, 1),
    (0x2F83A, 1),
    (0x2F83B, 1),
    (0x2F83C, 1),
    (0x2F83D, 1),
    (0x2F83E, 1),
    (0x2F83F, 1),
    (0x2F840, 1),
    (0x2F841, 1),
    (0x2F842, 1),
    (0x2F843, 1),
    (0x2F844, 1),
    (0x2F845, 1),
    (0x2F846, 1),
    (0x2F847, 1),
    (0x2F848, 1),
    (0x2F849, 1),
    (0x2F84A, 1),
    (0x2F84B, 1),
    (0x2F84C, 1),
    (0x2F84D, 1),
    (0x2F84E, 1),
    (0x2F84F, 1),
    (0x2F850, 1),
    (0x2F851, 1),
    (0x2F852, 1),
    (0x2F853, 1),
    (0x2F854, 1),
    (0x2F855, 1),
    (0x2F856, 1),
    (0x2F857, 1),
    (0x2F858, 1),
    (0x2F859, 1),
    (0x2F85A, 1),
    (0x2F85B, 1),
    (0x2F85C, 1),
    (0x2F85D, 1),
    (0x2F85E, 1),
    (0x2F85F, 1),
    (0x2F860, 1),
    (0x2F861, 1),
    (0x2F862, 1),
    (0x2F863, 1),
    (0x2F864, 1),
    (0x2F865, 1),
    (0x2F866, 1),
    (0x2F867, 1),
    (0x2F868, 1),
    (0x2F869, 1),
    (0x2F86A, 1),
    (0x2F86B, 1),
    (0x2F86C, 1),
    (0x2F86D, 1),
    (0x2F86E, 1),
    (0x2F86F, 1),
    (0x2F870, 1),
    (0x2F871, 1),
    (0x2F872, 1),
    (0x2F873, 1),
    (0x2F874, 1),
    (0x2F875, 1),
    (0x2F876, 1),
    (0x2F877, 1),
    (0x2F878, 1),
    (0x2F879, 1),
    (0x2F87A, 1),
    (0x2F87B, 1),
    (0x2F87C, 1),
    (0x2F87D, 1),
    (0x2F87E, 1),
    (0x2F87F, 1),
    (0x2F880, 1),
    (0x2F881, 1),
    (0x2F882, 1),
    (0x2F883, 1),
    (0x2F884, 1),
    (0x2F885, 1),
    (0x2F886, 1),
    (0x2F887, 1),
    (0x2F888, 1),
    (0x2F889, 1),
    (0x2F88A, 1),
    (0x2F88B, 1),
    (0x2F88C, 1),
    (0x2F88D, 1),
    (0x2F88E, 1),
    (0x2F88F, 1),
    (0x2F890, 1),
    (0x2F891, 1),
    (0x2F892, 1),
    (0x2F893, 1),
    (0x2F894, 1),
    (0x2F895, 1),
    (0x2F896, 1),
    (0x2F897, 1),
    (0x2F898, 1),
    (0x2F899, 1),
    (0x2F89A, 1),
    (0x2F89B, 1),
    (0x2F89C, 1),
    (0x2F89D, 1),
    (0x2F89E, 1),
    (0x2F89F, 1),
    (0x2F8A0, 1),
    (0x2F8A1, 1),
    (0x2F8A2, 1),
    (0x2F8A3, 1),
    (0x2F8A4, 1),
    (0x2F8A5, 1),
    (0x2F8A6, 1),
    (0x2F8A7, 1),
    (0x2F8A8, 1),
    (0x2F8A9, 1),
    (0x2F8AA, 1),
    (0x2F8AB, 1),
    (0x2F8AC, 1),
    (0x2F8AD, 1),
    (0x2F8AE, 1),
    (0x2F8AF, 1),
    (0x2F8B0, 1),
    (0x2F8B1, 1),
    (0x2F8B2, 1),
    (0x2F8B3, 1),
    (0x2F8B4, 1),
    (0x2F8B5, 1),
    (0x2F8B6, 1),
    (0x2F8B7, 1),
    (0x2F8B8, 1),
    (0x2F8B9, 1),
    (0x2F8BA, 1),
    (0x2F8BB, 1),
    (0x2F8BC, 1),
    (0x2F8BD, 1),
    (0x2F8BE, 1),
    (0x2F8BF, 1),
    (0x2F8C0, 1),
    (0x2F8C1, 1),
    (0x2F8C2, 1),
    (0x2F8C3, 1),
    (0x2F8C4, 1),
    (0x2F8C5, 1),
    (0x2F8C6, 1),
    (0x2F8C7, 1),
    (0x2F8C8, 1),
    (0x2F8C9, 1),
    (0x2F8CA, 1),
    (0x2F8CB, 1),
    (0x2F8CC, 1),
    (0x2F8CD, 1),
    (0x2F8CE, 1),
    (0x2F8CF, 1),
    (0x2F8D0, 1),
    (0x2F8D1, 1),
    (0x2F8D2, 1),
    (0x2F8D3, 1),
    (0x2F8D4, 1),
    (0x2F8D5, 1),
    (0x2F8D6, 1),
    (0x2F8D7, 1),
    (0x2F8D8, 1),
    (0x2F8D9, 1),
    (0x2F8DA, 1),
    (0x2F8DB, 1),
    (0x2F8DC, 1),
    (0x2F8DD, 1),
    (0x2F8DE, 1),
    (0x2F8DF, 1),
    (0x2F8E0, 1),
    (0x2F8E1, 1),
    (0x2F8E2, 1),
    (0x2F8E3, 1),
    (0x2F8E4, 1),
    (0x2F8E5, 1),
    (0x2F8E6, 1),
    (0x2F8E7, 1),
    (0x2F8E8, 1),
    (0x2F8E9, 1),
    (0x2F8EA, 1),
    (0x2F8EB, 1),
    (0x2F8EC, 1),
    (0x2F8ED, 1),
    (0x2F8EE, 1),
    (0x2F8EF, 1),
    (0x2F8F0, 1),
    (0x2F8F1, 1),
    (0x2F8F2, 1),
    (0x2F8F3, 1),
    (0x2F8F4, 1),
    (0x2F8F5, 1),
    (0x2F8F6, 1),
    (0x2F8F7, 1),
    (0x2F8F8, 1),
    (0x2F8F9, 1),
    (0x2F8FA, 1),
    (0x2F8FB, 1),
    (0x2F8FC, 1),
    (0x2F8FD, 1),
    (0x2F8FE, 1),
    (0x2F8FF, 1),
    (0x2F900, 1),
    (0x2F901, 1),
    (0x2F902, 1),
    (0x2F903, 1),
    (0x2F904, 1),
    (0x2F905, 1),
    (0x2F906, 1),
    (0x2F907, 1),
    (0x2F908, 1),
    (0x2F909, 1),
    (0x2F90A, 1),
    (0x2F90B, 1),
    (0x2F90C, 1),
    (0x2F90D, 1),
    (0x2F90E, 1),
    (0x2F90F, 1),
    (0x2F910, 1),
    (0x2F911, 1),
    (0x2F912, 1),
    (0x2F913, 1),
    (0x2F914, 1),
    (0x2F915, 1),
    (0x2F916, 1),
    (0x2F917, 1),
    (0x2F918, 1),
    (0x2F919, 1),
    (0x2F91A, 1),
    (0x2F91B, 1),
    (0x2F91C, 1),
    (0x2F91D, 1),
    (0x2F91E, 1),
    (0x2F91F, 1),
    (0x2F920, 1),
    (0x2F921, 1),
    (0x2F922, 1),
    (0x2F923, 1),
    (0x2F924, 1),
    (0x2F925, 1),
    (0x2F926, 1),
    (0x2F927, 1),
    (0x2F928, 1),
    (0x2F929, 1),
    (0x2F92A, 1),
    (0x2F92B, 1),
    (0x2F92C, 1),
    (0x2F92D, 1),
    (0x2F92E, 1),
    (0x2F92F, 1),
    (0x2F930, 1),
    (0x2F931, 1),
    (0x2F932, 1),
    (0x2F933, 1),
    (0x2F934, 1),
    (0x2F935, 1),
    (0x2F936, 1),
    (0x2F937, 1),
    (0x2F938, 1),
    (0x2F939, 1),
    (0x2F93A, 1),
    (0x2F93B, 1),
    (0x2F93C, 1),
    (0x2F93D, 1),
    (0x2F93E, 1),
    (0x2F93F, 1),
    (0x2F940, 1),
    (0x2F941, 1),
    (0x2F942, 1),
    (0x2F943, 1),
    (0x2F944, 1),
    (0x2F945, 1),
    (0x2F946, 1),
    (0x2F947, 1),
    (0x2F948, 1),
    (0x2F949, 1),
    (0x2F94A, 1),
    (0x2F94B, 1),
    (0x2F94C, 1),
    (0x2F94D, 1),
    (0x2F94E, 1),
    (0x2F94F, 1),
    (0x2F950, 1),
    (0x2F951, 1),
    (0x2F952, 1),
    (0x2F953, 1),
    (0x2F954, 1),
    (0x2F955, 1),
    (0x2F956, 1),
    (0x2F957, 1),
    (0x2F958, 1),
    (0x2F959, 1),
    (0x2F95A, 1),
    (0x2F95B, 1),
    (0x2F95C, 1),
    (0x2F95D, 1),
    (0x2F95E, 1),
    (0x2F95F, 1),
    (0x2F960, 1),
    (0x2F961, 1),
    (0x2F962, 1),
    (0x2F963, 1),
    (0x2F964, 1),
    (0x2F965, 1),
    (0x2F966, 1),
    (0x2F967, 1),
    (0x2F968, 1),
    (0x2F969, 1),
    (0x2F96A, 1),
    (0x2F96B, 1),
    (0x2F96C, 1),
    (0x2F96D, 1),
    (0x2F96E, 1),
    (0x2F96F, 1),
    (0x2F970, 1),
    (0x2F971, 1),
    (0x2F972, 1),
    (0x2F973, 1),
    (0x2F974, 1),
    (0x2F975, 1),
    (0x2F976, 1),
    (0x2F977, 1),
    (0x2F978, 1),
    (0x2F979, 1),
    (0x2F97A, 1),
    (0x2F97B, 1),
    (0x2F97C, 1),
    (0x2F97D, 1),
    (0x2F97E, 1),
    (0x2F97F, 1),
    (0x2F980, 1),
    (0x2F981, 1),
    (0x2F982, 1),
    (0x2F983, 1),
    (0x2F984, 1),
    (0x2F985, 1),
    (0x2F986, 1),
    (0x2F987, 1),
    (0x2F988, 1),
    (0x2F989, 1),
    (0x2F98A, 1),
    (0x2F98B, 1),
    (0x2F98C, 1),
    (0x2F98D, 1),
    (0x2F98E, 1),
    (0x2F98F, 1),
    (0x2F990, 1),
    (0x2F991, 1),
    (0x2F992, 1),
    (0x2F993, 1),
    (0x2F994, 1),
    (0x2F995, 1),
    (0x2F996, 1),
    (0x2F997, 1),
    (0x2F998, 1),
    (0x2F999, 1),
    (0x2F99A, 1),
    (0x2F99B, 1),
    (0x2F99C, 1),
    (0x2F99D, 1),
    (0x2F99E, 1),
    (0x2F99F, 1),
    (0x2F9A0, 1),
    (0x2F9A1, 1),
    (0x2F9A2, 1),
    (0x2F9A3, 1),
    (0x2F9A4, 1),
    (0x2F9A5, 1),
    (0x2F9A6, 1),
    (0x2F9A7, 1),
    (0x2F9A8, 1),
    (0x2F9A9, 1),
    (0x2F9AA, 1),
    (0x2F9AB, 1),
    (0x2F9AC, 1),
    (0x2F9AD, 1),
    (0x2F9AE, 1),
    (0x2F9AF, 1),
    (0x2F9B0, 1),
    (0x2F9B1, 1),
    (0x2F9B2, 1),
    (0x2F9B3, 1),
    (0x2F9B4, 1),
    (0x2F9B5, 1),
    (0x2F9B6, 1),
    (0x2F9B7, 1),
    (0x2F9B8, 1),
    (0x2F9B9, 1),
    (0x2F9BA, 1),
    (0x2F9BB, 1),
    (0x2F9BC, 1),
    (0x2F9BD, 1),
    (0x2F9BE, 1),
    (0x2F9BF, 1),
    (0x2F9C0, 1),
    (0x2F9C1, 1),
    (0x2F9C2, 1),
    (0x2F9C3, 1),
    (0x2F9C4, 1),
    (0x2F9C5, 1),
    (0x2F9C6, 1),
    (0x2F9C7, 1),
    (0x2F9C8, 1),
    (0x2F9C9, 1),
    (0x2F9CA, 1),
    (0x2F9CB, 1),
    (0x2F9CC, 1),
    (0x2F9CD, 1),
    (0x2F9CE, 1),
    (0x2F9CF, 1),
    (0x2F9D0, 1),
    (0x2F9D1, 1),
    (0x2F9D2, 1),
    (0x2F9D3, 1),
    (0x2F9D4, 1),
    (0x2F9D5, 1),
    (0x2F9D6, 1),
    (0x2F9D7, 1),
    (0x2F9D8, 1),
    (0x2F9D9, 1),
    (0x2F9DA, 1),
    (0x2F9DB, 1),
    (0x2F9DC, 1),
    (0x2F9DD, 1),
    (0x2F9DE, 1),
    (0x2F9DF, 1),
    (0x2F9E0, 1),
    (0x2F9E1, 1),
    (0x2F9E2, 1),
    (0x2F9E3, 1),
    (0x2F9E4, 1),
    (0x2F9E5, 1),
    (0x2F9E6, 1),
    (0x2F9E7, 1),
    (0x2F9E8, 1),
    (0x2F9E9, 1),
    (0x2F9EA, 1),
    (0x2F9EB, 1),
    (0x2F9EC, 1),
    (0x2F9ED, 1),
    (0x2F9EE, 1),
    (0x2F9EF, 1),
    (0x2F9F0, 1),
    (0x2F9F1, 1),
    (0x2F9F2, 1),
    (0x2F9F3, 1),
    (0x2F9F4, 1),
    (0x2F9F5, 1),
    (0x2F9F6, 1),
    (0x2F9F7, 1),
    (0x2F9F8, 1),
    (0x2F9F9, 1),
    (0x2F9FA, 1),
    (0x2F9FB, 1),
    (0x2F9FC, 1),
    (0x2F9FD, 1),
    (0x2F9FE, 1),
    (0x2F9FF, 1),
    (0x2FA00, 1),
    (0x2FA01, 1),
    (0x2FA02, 1),
    (0x2FA03, 1),
    (0x2FA04, 1),
    (0x2FA05, 1),
    (0x2FA06, 1),
    (0x2FA07, 1),
    (0x2FA08, 1),
    (0x2FA09, 1),
    (0x2FA0A, 1),
    (0x2FA0B, 1),
    (0x2FA0C, 1),
    (0x2FA0D, 1),
    (0x2FA0E, 1),
    (0x2FA0F, 1),
    (0x2FA10, 1),
    (0x2FA11, 1),
    (0x2FA12, 1),
    (0x2FA13, 1),
    (0x2FA14, 1),
    (0x2FA15, 1),
    (0x2FA16, 1),
    (0x2FA17, 1),
    (0x2FA18, 1),
    (0x2FA19, 1),
    (0x2FA1A, 1),
    (0x2FA1B, 1),
    (0x2FA1C, 1),
    (0x2FA1D, 1),
];
pub(crate) fn decompose_compat_index(cp: usize) -> usize {
    match DECOMPOSE_COMPAT_LOOKUP.binary_search_by_key(&(cp as u32), |&(c, _)| c) {
        Ok(i) => DECOMPOSE_COMPAT_LOOKUP[i].1 as usize,
        Err(_) => 0,
    }
}