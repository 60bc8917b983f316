use serde::Deserialize;
use std::fmt;

/// Difficulty tags the catalog recognises. The catalog's type union only
/// admits these three spellings, so deserialization is exact-match.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One new catalog entry, as declared in the patch file. Only ever formatted
/// into text; existing entries are never parsed back into this shape.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub color: String,
}

impl Entry {
    /// Renders the entry as one catalog block. Field order is fixed and the
    /// two feature flags are always emitted true, so the same entry always
    /// produces identical text.
    pub fn to_block(&self) -> String {
        format!(
            "  {{\n    id: '{}',\n    title: '{}',\n    description: '{}',\n    category: '{}',\n    difficulty: '{}',\n    isImplemented: true,\n    mobileOptimized: true,\n    color: '{}'\n  }},\n",
            self.id,
            self.title,
            self.description,
            self.category,
            self.difficulty,
            self.color
        )
    }
}
