//! Emotion taxonomy: the closed set of labels an entry may carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fifteen permitted emotion labels, in taxonomy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anxiety,
    Anger,
    Fear,
    Contentment,
    Excitement,
    Frustration,
    Loneliness,
    Hope,
    Overwhelmed,
    Peaceful,
    Confused,
    Grateful,
    Stressed,
}

impl Emotion {
    /// Every label, in the order presented to the model.
    pub const ALL: [Emotion; 15] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anxiety,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Contentment,
        Emotion::Excitement,
        Emotion::Frustration,
        Emotion::Loneliness,
        Emotion::Hope,
        Emotion::Overwhelmed,
        Emotion::Peaceful,
        Emotion::Confused,
        Emotion::Grateful,
        Emotion::Stressed,
    ];

    /// Substituted for any label outside the taxonomy.
    pub const FALLBACK: Emotion = Emotion::Confused;

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anxiety => "anxiety",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Contentment => "contentment",
            Emotion::Excitement => "excitement",
            Emotion::Frustration => "frustration",
            Emotion::Loneliness => "loneliness",
            Emotion::Hope => "hope",
            Emotion::Overwhelmed => "overwhelmed",
            Emotion::Peaceful => "peaceful",
            Emotion::Confused => "confused",
            Emotion::Grateful => "grateful",
            Emotion::Stressed => "stressed",
        }
    }

    /// Exact match against a lower-case label. `None` means unmatched.
    pub fn from_label(label: &str) -> Option<Emotion> {
        Emotion::ALL.into_iter().find(|e| e.as_str() == label)
    }

    /// Comma-separated label list for prompts.
    pub fn taxonomy_list() -> String {
        Emotion::ALL
            .iter()
            .map(Emotion::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
