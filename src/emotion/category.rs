use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of emotions the classifier can report.
///
/// Declaration order matters: it is the tie-break order used when two
/// categories reach the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Happy,
    Sad,
    Angry,
    Stressed,
    Neutral,
}

impl Category {
    /// Every category, in tie-break order
    pub const ALL: [Category; 5] = [
        Category::Happy,
        Category::Sad,
        Category::Angry,
        Category::Stressed,
        Category::Neutral,
    ];

    /// Name used on the wire and as the content store key
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Happy => "happy",
            Category::Sad => "sad",
            Category::Angry => "angry",
            Category::Stressed => "stressed",
            Category::Neutral => "neutral",
        }
    }

    /// Position in [`Category::ALL`]
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Happy => 0,
            Category::Sad => 1,
            Category::Angry => 2,
            Category::Stressed => 3,
            Category::Neutral => 4,
        }
    }

    /// Display metadata shown alongside a detection result
    pub fn profile(&self) -> CategoryProfile {
        let (label, emoji, color, description) = match self {
            Category::Happy => ("Happy", "😊", "#10B981", "Feeling joyful and positive"),
            Category::Sad => ("Sad", "😔", "#6366F1", "Feeling down or melancholic"),
            Category::Angry => ("Angry", "😠", "#EF4444", "Feeling frustrated or irritated"),
            Category::Stressed => ("Stressed", "😰", "#F59E0B", "Feeling anxious or overwhelmed"),
            Category::Neutral => ("Neutral", "😐", "#6B7280", "Feeling calm and balanced"),
        };

        CategoryProfile {
            name: *self,
            label,
            emoji,
            color,
            description,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation details for a category, served by `GET /emotions`
#[derive(Debug, Clone, Serialize)]
pub struct CategoryProfile {
    pub name: Category,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}
