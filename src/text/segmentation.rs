// font_introspector was retired from https://github.com/dfrg/swash
// which is licensed under MIT license

//! Standalone grapheme and word boundary queries built on top of the
//! cluster parser and the UAX #29 boundary analyzer.

use super::analyze::analyze;
use super::cluster::{Boundary, CharCluster, Parser, Token};
use super::{Codepoint as _, Script};

fn char_from_codepoint(cp: u32) -> char {
    char::from_u32(cp).unwrap_or('\u{FFFD}')
}

/// Returns the indices into `codepoints` where each grapheme cluster
/// begins, always including `0` and `codepoints.len()`.
pub fn grapheme_boundaries(codepoints: &[u32]) -> Vec<usize> {
    if codepoints.is_empty() {
        return vec![0];
    }
    let mut boundaries = Vec::new();
    let mut cluster = CharCluster::new();
    let tokens = codepoints.iter().enumerate().map(|(i, &cp)| {
        let ch = char_from_codepoint(cp);
        Token {
            ch,
            offset: i as u32,
            len: 1,
            info: ch.properties().into(),
            data: 0,
        }
    });
    let mut parser = Parser::new(Script::Latin, tokens);
    while parser.next(&mut cluster) {
        if cluster.is_empty() {
            continue;
        }
        boundaries.push(cluster.range().to_range().start);
    }
    if boundaries.first() != Some(&0) {
        boundaries.insert(0, 0);
    }
    if boundaries.last() != Some(&codepoints.len()) {
        boundaries.push(codepoints.len());
    }
    boundaries
}

/// Returns the indices into `codepoints` where UAX #29 word
/// boundaries occur, always including `0` and `codepoints.len()`.
pub fn word_boundaries(codepoints: &[u32]) -> Vec<usize> {
    if codepoints.is_empty() {
        return vec![0];
    }
    let mut boundaries = vec![0];
    let chars = codepoints.iter().copied().map(char_from_codepoint);
    for (i, (_, boundary)) in analyze(chars).enumerate() {
        if i == 0 {
            continue;
        }
        if matches!(boundary, Boundary::Word | Boundary::Mandatory) {
            boundaries.push(i);
        }
    }
    if boundaries.last() != Some(&codepoints.len()) {
        boundaries.push(codepoints.len());
    }
    boundaries
}

/// Splits `text` into its grapheme clusters.
pub fn split_graphemes(text: &str) -> Vec<&str> {
    let mut clusters = Vec::new();
    let mut cluster = CharCluster::new();
    let tokens = text.char_indices().map(|(i, ch)| Token {
        ch,
        offset: i as u32,
        len: ch.len_utf8() as u8,
        info: ch.properties().into(),
        data: 0,
    });
    let mut parser = Parser::new(Script::Latin, tokens);
    while parser.next(&mut cluster) {
        if cluster.is_empty() {
            continue;
        }
        let range = cluster.range().to_range();
        clusters.push(&text[range]);
    }
    clusters
}

/// Returns the number of grapheme clusters in `text`.
pub fn count_graphemes(text: &str) -> usize {
    split_graphemes(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_boundaries_are_one_per_codepoint() {
        let codepoints: Vec<u32> = "Af".chars().map(|c| c as u32).collect();
        assert_eq!(grapheme_boundaries(&codepoints), vec![0, 1, 2]);
    }

    #[test]
    fn empty_input_yields_single_boundary() {
        assert_eq!(grapheme_boundaries(&[]), vec![0]);
        assert_eq!(word_boundaries(&[]), vec![0]);
    }

    #[test]
    fn combining_mark_stays_in_its_base_grapheme() {
        // U+0061 LATIN SMALL LETTER A, U+0301 COMBINING ACUTE ACCENT.
        let codepoints = [0x0061, 0x0301];
        assert_eq!(grapheme_boundaries(&codepoints), vec![0, 2]);
    }

    #[test]
    fn zwj_family_sequence_is_one_grapheme() {
        // "a" + family emoji (man, woman, girl, boy joined by ZWJ) + "b".
        let text = "a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}b";
        assert_eq!(count_graphemes(text), 3);
        let clusters = split_graphemes(text);
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0], "a");
        assert_eq!(clusters[2], "b");
    }

    #[test]
    fn word_boundaries_split_on_space() {
        let codepoints: Vec<u32> = "hi there".chars().map(|c| c as u32).collect();
        let bounds = word_boundaries(&codepoints);
        assert_eq!(bounds.first(), Some(&0));
        assert_eq!(bounds.last(), Some(&codepoints.len()));
        assert!(bounds.contains(&3));
    }

    #[test]
    fn split_and_count_agree() {
        let text = "hello";
        assert_eq!(split_graphemes(text).len(), count_graphemes(text));
    }
}
