/*!
Character properties and textual analysis.
*/

// Avoid errors for generated Unicode data.
#![allow(clippy::upper_case_acronyms)]

mod analyze;
mod compose;
mod lang;
mod lang_data;
mod segmentation;
mod unicode;
mod unicode_data;

pub mod cluster;

pub use analyze::{analyze, Analyze};
pub use lang::{Cjk, Language};
pub use segmentation::{count_graphemes, grapheme_boundaries, split_graphemes, word_boundaries};
pub use unicode::*;
