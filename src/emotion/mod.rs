//! Keyword-based emotion classification.
//!
//! Text is lowercased, split into word tokens and scored against a fixed
//! keyword table with a lenient two-way substring match. The best scoring
//! category wins and a heuristic confidence in `[0.3, 1.0]` is attached.

mod category;
mod classifier;
mod keywords;

pub use category::{Category, CategoryProfile};
pub use classifier::{classify, ClassificationResult};
pub use keywords::{KeywordTable, KEYWORDS};
