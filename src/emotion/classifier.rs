use serde::Serialize;

use super::{Category, KEYWORDS};

/// Tokens this short are filler: they neither match keywords nor count
/// toward the confidence denominator.
const MIN_CONTENT_WORD_LEN: usize = 3;

/// Multiplier applied to the keyword hit ratio
const CONFIDENCE_SCALE: f64 = 2.0;

/// Confidence when the text has no content words at all
const NO_WORDS_CONFIDENCE: f64 = 0.5;

/// Lowest confidence ever reported
const CONFIDENCE_FLOOR: f64 = 0.3;

/// Outcome of classifying one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub emotion: Category,
    /// Heuristic keyword-evidence score in `[0.3, 1.0]`, not a probability
    pub confidence: f64,
}

/// Classify the emotional tone of `text`.
///
/// Deterministic and side-effect free. Text without any keyword hit is
/// reported as neutral.
pub fn classify(text: &str) -> ClassificationResult {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = tokenize(&lowered)
        .filter(|token| token.len() >= MIN_CONTENT_WORD_LEN)
        .collect();

    let mut scores = [0u32; 5];
    for word in &words {
        for category in Category::ALL {
            if KEYWORDS
                .keywords(category)
                .iter()
                .any(|keyword| keyword_matches(word, keyword))
            {
                scores[category.index()] += 1;
            }
        }
    }

    let (emotion, max_score) = strongest(&scores);

    let confidence = if words.is_empty() {
        NO_WORDS_CONFIDENCE
    } else {
        (f64::from(max_score) / words.len() as f64 * CONFIDENCE_SCALE).min(1.0)
    };

    ClassificationResult {
        emotion,
        confidence: confidence.max(CONFIDENCE_FLOOR),
    }
}

/// Split on runs of non-word characters, dropping empty pieces
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

/// Two-way substring match, so stems and inflections both hit
fn keyword_matches(token: &str, keyword: &str) -> bool {
    token.contains(keyword) || keyword.contains(token)
}

/// First category in declaration order to reach the top score; neutral when
/// nothing scored.
fn strongest(scores: &[u32; 5]) -> (Category, u32) {
    let mut best = (Category::Neutral, 0);
    for category in Category::ALL {
        let score = scores[category.index()];
        if score > best.1 {
            best = (category, score);
        }
    }
    best
}
