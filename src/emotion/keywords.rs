use super::Category;

/// Lowercase keyword lists, one per category.
#[derive(Debug)]
pub struct KeywordTable {
    happy: &'static [&'static str],
    sad: &'static [&'static str],
    angry: &'static [&'static str],
    stressed: &'static [&'static str],
    neutral: &'static [&'static str],
}

impl KeywordTable {
    pub fn keywords(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Happy => self.happy,
            Category::Sad => self.sad,
            Category::Angry => self.angry,
            Category::Stressed => self.stressed,
            Category::Neutral => self.neutral,
        }
    }
}

/// Process-wide keyword table. `upset` is listed under both sad and angry.
pub static KEYWORDS: KeywordTable = KeywordTable {
    happy: &[
        "happy", "joy", "excited", "great", "wonderful", "amazing", "fantastic", "excellent",
        "good", "love", "blessed", "grateful", "thrilled", "delighted", "cheerful", "pleased",
        "glad", "content", "satisfied", "enjoy", "awesome",
    ],
    sad: &[
        "sad", "unhappy", "depressed", "lonely", "miserable", "down", "upset", "hurt",
        "disappointed", "gloomy", "blue", "heartbroken", "cry", "crying", "tears", "sorrow",
        "grief", "melancholy", "hopeless", "despair",
    ],
    angry: &[
        "angry", "mad", "furious", "annoyed", "irritated", "frustrated", "rage", "hate",
        "disgusted", "outraged", "livid", "enraged", "bitter", "hostile", "resentful",
        "aggravated", "pissed", "upset", "infuriated",
    ],
    stressed: &[
        "stressed", "anxious", "worried", "nervous", "overwhelmed", "pressure", "tension",
        "panic", "fear", "scared", "afraid", "concerned", "uneasy", "tense", "restless",
        "troubled", "exhausted", "tired", "drained", "burden",
    ],
    neutral: &[
        "okay", "fine", "alright", "normal", "usual", "average", "nothing", "regular", "same",
        "typical",
    ],
};
