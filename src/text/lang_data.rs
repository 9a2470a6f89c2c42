// font_introspector was retired from https://github.com/dfrg/swash
// which is licensed under MIT license

//! Curated BCP-47 to OpenType language tag mappings.
//!
//! This table covers the languages most commonly seen in font
//! `name` and `STAT`/`fvar` tables and the OpenType "Language System
//! Tags" registry; it is a practical subset rather than an
//! exhaustive transliteration of the full BCP-47 registry.

use crate::Tag;

pub(crate) fn tag2(b: &[u8; 2]) -> u16 {
    ((b[0] as u16) << 8) | b[1] as u16
}

pub(crate) fn tag3(b: &[u8; 3]) -> u32 {
    ((b[0] as u32) << 16) | ((b[1] as u32) << 8) | b[2] as u32
}

pub(crate) static LANG_BY_TAG2: &[(u16, u16)] = &[
    (0x6162, 0),
    (0x6166, 1),
    (0x616D, 2),
    (0x6172, 3),
    (0x6173, 4),
    (0x617A, 5),
    (0x6261, 12),
    (0x6265, 6),
    (0x6267, 8),
    (0x626E, 7),
    (0x626F, 102),
    (0x6272, 10),
    (0x6273, 9),
    (0x6361, 13),
    (0x6365, 14),
    (0x636F, 17),
    (0x6373, 19),
    (0x6375, 18),
    (0x6379, 111),
    (0x6461, 20),
    (0x6465, 21),
    (0x6476, 22),
    (0x647A, 23),
    (0x656C, 24),
    (0x656E, 25),
    (0x656F, 74),
    (0x6573, 26),
    (0x6574, 27),
    (0x6575, 28),
    (0x6661, 29),
    (0x6666, 33),
    (0x6669, 30),
    (0x666F, 31),
    (0x6672, 32),
    (0x6761, 44),
    (0x676C, 34),
    (0x6775, 35),
    (0x6861, 36),
    (0x6865, 47),
    (0x6869, 37),
    (0x6872, 38),
    (0x6875, 39),
    (0x6879, 40),
    (0x6964, 42),
    (0x6967, 41),
    (0x6973, 45),
    (0x6974, 46),
    (0x6975, 43),
    (0x6A61, 48),
    (0x6A76, 49),
    (0x6B61, 51),
    (0x6B6B, 52),
    (0x6B6D, 53),
    (0x6B6E, 50),
    (0x6B6F, 55),
    (0x6B73, 56),
    (0x6B75, 57),
    (0x6B79, 54),
    (0x6C61, 59),
    (0x6C62, 61),
    (0x6C6F, 58),
    (0x6C74, 60),
    (0x6C76, 62),
    (0x6D67, 66),
    (0x6D69, 69),
    (0x6D6B, 65),
    (0x6D6C, 63),
    (0x6D6E, 68),
    (0x6D72, 64),
    (0x6D73, 67),
    (0x6D74, 70),
    (0x6D79, 11),
    (0x6E65, 71),
    (0x6E6C, 72),
    (0x6E6F, 73),
    (0x6F72, 75),
    (0x7061, 76),
    (0x706C, 79),
    (0x7073, 77),
    (0x7074, 80),
    (0x7175, 81),
    (0x726D, 82),
    (0x726F, 83),
    (0x7275, 85),
    (0x7277, 84),
    (0x7361, 86),
    (0x7364, 90),
    (0x7369, 91),
    (0x736B, 87),
    (0x736C, 88),
    (0x736F, 89),
    (0x7371, 92),
    (0x7372, 93),
    (0x7376, 94),
    (0x7377, 95),
    (0x7461, 97),
    (0x7465, 99),
    (0x7467, 103),
    (0x7468, 101),
    (0x7469, 100),
    (0x746B, 104),
    (0x7472, 105),
    (0x7474, 98),
    (0x7567, 108),
    (0x756B, 106),
    (0x7572, 107),
    (0x757A, 109),
    (0x7669, 110),
    (0x776F, 112),
    (0x7868, 113),
    (0x7969, 114),
    (0x796F, 115),
    (0x7A75, 117),
];

pub(crate) static LANG_BY_TAG3: &[(u32, u16)] = &[
    (0x636872, 15),
    (0x636F70, 16),
    (0x66696C, 78),
    (0x737972, 96),
];

pub(crate) static LANG_TAGS: &[Tag] = &[
    0x41424B20, // ABK
    0x41464B20, // AFK
    0x414D4820, // AMH
    0x41524120, // ARA
    0x41534D20, // ASM
    0x415A4520, // AZE
    0x42454C20, // BEL
    0x42454E20, // BEN
    0x42475220, // BGR
    0x424F5320, // BOS
    0x42524520, // BRE
    0x42524D20, // BRM
    0x42534820, // BSH
    0x43415420, // CAT
    0x43484520, // CHE
    0x43485220, // CHR
    0x434F5020, // COP
    0x434F5320, // COS
    0x43534C20, // CSL
    0x43535920, // CSY
    0x44414E20, // DAN
    0x44455520, // DEU
    0x44495620, // DIV
    0x445A4E20, // DZN
    0x454C4C20, // ELL
    0x454E4720, // ENG
    0x45535020, // ESP
    0x45544920, // ETI
    0x45555120, // EUQ
    0x46415220, // FAR
    0x46494E20, // FIN
    0x464F5320, // FOS
    0x46524120, // FRA
    0x46554C20, // FUL
    0x47414C20, // GAL
    0x47554A20, // GUJ
    0x48415520, // HAU
    0x48494E20, // HIN
    0x48525620, // HRV
    0x48554E20, // HUN
    0x48594520, // HYE
    0x49424F20, // IBO
    0x494E4420, // IND
    0x494E5520, // INU
    0x49524920, // IRI
    0x49534C20, // ISL
    0x49544120, // ITA
    0x49575220, // IWR
    0x4A414E20, // JAN
    0x4A415620, // JAV
    0x4B414E20, // KAN
    0x4B415420, // KAT
    0x4B415A20, // KAZ
    0x4B484D20, // KHM
    0x4B495220, // KIR
    0x4B4F5220, // KOR
    0x4B534820, // KSH
    0x4B555220, // KUR
    0x4C414F20, // LAO
    0x4C415420, // LAT
    0x4C544820, // LTH
    0x4C545A20, // LTZ
    0x4C564920, // LVI
    0x4D414C20, // MAL
    0x4D415220, // MAR
    0x4D4B4420, // MKD
    0x4D4C4720, // MLG
    0x4D4C5920, // MLY
    0x4D4E4720, // MNG
    0x4D524920, // MRI
    0x4D545320, // MTS
    0x4E455020, // NEP
    0x4E4C4420, // NLD
    0x4E4F5220, // NOR
    0x4E544F20, // NTO
    0x4F524920, // ORI
    0x50414E20, // PAN
    0x50415320, // PAS
    0x50494C20, // PIL
    0x504C4B20, // PLK
    0x50544720, // PTG
    0x51555A20, // QUZ
    0x524D5320, // RMS
    0x524F4D20, // ROM
    0x52554120, // RUA
    0x52555320, // RUS
    0x53414E20, // SAN
    0x534B5920, // SKY
    0x534C5620, // SLV
    0x534D4C20, // SML
    0x534E4420, // SND
    0x534E4820, // SNH
    0x53514920, // SQI
    0x53524220, // SRB
    0x53564520, // SVE
    0x53574B20, // SWK
    0x53595220, // SYR
    0x54414D20, // TAM
    0x54415420, // TAT
    0x54454C20, // TEL
    0x54475920, // TGY
    0x54484120, // THA
    0x54494220, // TIB
    0x544A4B20, // TJK
    0x544B4D20, // TKM
    0x54524B20, // TRK
    0x554B5220, // UKR
    0x55524420, // URD
    0x55594720, // UYG
    0x555A4220, // UZB
    0x56495420, // VIT
    0x57454C20, // WEL
    0x574C4620, // WLF
    0x58485320, // XHS
    0x59444420, // YDD
    0x594F5220, // YOR
    0x5A484820, // ZHH
    0x5A554C20, // ZUL
];

pub(crate) static LANG_ENTRIES: &[(&str, &str)] = &[
    ("Abkhazian", "ab"),
    ("Afrikaans", "af"),
    ("Amharic", "am"),
    ("Arabic", "ar"),
    ("Assamese", "as"),
    ("Azerbaijani", "az"),
    ("Belarusian", "be"),
    ("Bengali", "bn"),
    ("Bulgarian", "bg"),
    ("Bosnian", "bs"),
    ("Breton", "br"),
    ("Burmese", "my"),
    ("Bashkir", "ba"),
    ("Catalan", "ca"),
    ("Chechen", "ce"),
    ("Cherokee", "chr"),
    ("Coptic", "cop"),
    ("Corsican", "co"),
    ("Church Slavonic", "cu"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("German", "de"),
    ("Divehi", "dv"),
    ("Dzongkha", "dz"),
    ("Greek", "el"),
    ("English", "en"),
    ("Spanish", "es"),
    ("Estonian", "et"),
    ("Basque", "eu"),
    ("Persian", "fa"),
    ("Finnish", "fi"),
    ("Faroese", "fo"),
    ("French", "fr"),
    ("Fulah", "ff"),
    ("Galician", "gl"),
    ("Gujarati", "gu"),
    ("Hausa", "ha"),
    ("Hindi", "hi"),
    ("Croatian", "hr"),
    ("Hungarian", "hu"),
    ("Armenian", "hy"),
    ("Igbo", "ig"),
    ("Indonesian", "id"),
    ("Inuktitut", "iu"),
    ("Irish", "ga"),
    ("Icelandic", "is"),
    ("Italian", "it"),
    ("Hebrew", "he"),
    ("Japanese", "ja"),
    ("Javanese", "jv"),
    ("Kannada", "kn"),
    ("Georgian", "ka"),
    ("Kazakh", "kk"),
    ("Khmer", "km"),
    ("Kyrgyz", "ky"),
    ("Korean", "ko"),
    ("Kashmiri", "ks"),
    ("Kurdish", "ku"),
    ("Lao", "lo"),
    ("Latin", "la"),
    ("Lithuanian", "lt"),
    ("Luxembourgish", "lb"),
    ("Latvian", "lv"),
    ("Malayalam", "ml"),
    ("Marathi", "mr"),
    ("Macedonian", "mk"),
    ("Malagasy", "mg"),
    ("Malay", "ms"),
    ("Mongolian", "mn"),
    ("Maori", "mi"),
    ("Maltese", "mt"),
    ("Nepali", "ne"),
    ("Dutch", "nl"),
    ("Norwegian", "no"),
    ("Esperanto", "eo"),
    ("Oriya", "or"),
    ("Punjabi", "pa"),
    ("Pashto", "ps"),
    ("Filipino", "fil"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Quechua", "qu"),
    ("Romansh", "rm"),
    ("Romanian", "ro"),
    ("Kinyarwanda", "rw"),
    ("Russian", "ru"),
    ("Sanskrit", "sa"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Somali", "so"),
    ("Sindhi", "sd"),
    ("Sinhala", "si"),
    ("Albanian", "sq"),
    ("Serbian", "sr"),
    ("Swedish", "sv"),
    ("Swahili", "sw"),
    ("Syriac", "syr"),
    ("Tamil", "ta"),
    ("Tatar", "tt"),
    ("Telugu", "te"),
    ("Tigrinya", "ti"),
    ("Thai", "th"),
    ("Tibetan", "bo"),
    ("Tajik", "tg"),
    ("Turkmen", "tk"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Uyghur", "ug"),
    ("Uzbek", "uz"),
    ("Vietnamese", "vi"),
    ("Welsh", "cy"),
    ("Wolof", "wo"),
    ("Xhosa", "xh"),
    ("Yiddish", "yi"),
    ("Yoruba", "yo"),
    ("Chinese", "zh"),
    ("Zulu", "zu"),
];
