use serde::{Deserialize, Serialize};

/// One analysed keyword with its estimated monthly volume and 0-100 difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub volume: u64,
    pub difficulty: u8,
}

impl KeywordRecord {
    pub fn new(keyword: impl Into<String>, volume: u64, difficulty: u8) -> Self {
        Self {
            keyword: keyword.into(),
            volume,
            difficulty,
        }
    }

    pub fn level(&self) -> DifficultyLevel {
        DifficultyLevel::from_score(self.difficulty)
    }

    pub fn band(&self) -> DifficultyBand {
        DifficultyBand::from_score(self.difficulty)
    }
}

/// Qualitative difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl DifficultyLevel {
    pub fn from_score(difficulty: u8) -> Self {
        match difficulty {
            0..=14 => Self::VeryEasy,
            15..=29 => Self::Easy,
            30..=49 => Self::Medium,
            50..=69 => Self::Hard,
            _ => Self::VeryHard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very hard",
        }
    }

    /// Label shown in the results table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Très facile",
            Self::Easy => "Facile",
            Self::Medium => "Possible",
            Self::Hard => "Difficile",
            Self::VeryHard => "Très difficile",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarser color band used to highlight the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyBand {
    Green,
    Yellow,
    Orange,
    Red,
}

impl DifficultyBand {
    pub fn from_score(difficulty: u8) -> Self {
        match difficulty {
            0..=29 => Self::Green,
            30..=49 => Self::Yellow,
            50..=69 => Self::Orange,
            _ => Self::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

/// Orders records by volume, highest first. Stable, so ties keep model order.
pub fn sort_by_volume_desc(records: &mut [KeywordRecord]) {
    records.sort_by(|a, b| b.volume.cmp(&a.volume));
}
