use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActCategory {
    Personal,
    Community,
    Environmental,
    Random,
    Family,
    Work,
}

impl ActCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActCategory::Personal => "personal",
            ActCategory::Community => "community",
            ActCategory::Environmental => "environmental",
            ActCategory::Random => "random",
            ActCategory::Family => "family",
            ActCategory::Work => "work",
        }
    }
}

impl fmt::Display for ActCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActCategory {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "personal" => Ok(ActCategory::Personal),
            "community" => Ok(ActCategory::Community),
            "environmental" => Ok(ActCategory::Environmental),
            "random" => Ok(ActCategory::Random),
            "family" => Ok(ActCategory::Family),
            "work" => Ok(ActCategory::Work),
            other => Err(format!("unsupported act category: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Small,
    Medium,
    Large,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Small => "small",
            ImpactLevel::Medium => "medium",
            ImpactLevel::Large => "large",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ImpactLevel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "small" => Ok(ImpactLevel::Small),
            "medium" => Ok(ImpactLevel::Medium),
            "large" => Ok(ImpactLevel::Large),
            other => Err(format!("unsupported impact level: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodAfter {
    Happy,
    Fulfilled,
    Proud,
    Peaceful,
    Energized,
}

impl MoodAfter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodAfter::Happy => "happy",
            MoodAfter::Fulfilled => "fulfilled",
            MoodAfter::Proud => "proud",
            MoodAfter::Peaceful => "peaceful",
            MoodAfter::Energized => "energized",
        }
    }
}

impl fmt::Display for MoodAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MoodAfter {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "happy" => Ok(MoodAfter::Happy),
            "fulfilled" => Ok(MoodAfter::Fulfilled),
            "proud" => Ok(MoodAfter::Proud),
            "peaceful" => Ok(MoodAfter::Peaceful),
            "energized" => Ok(MoodAfter::Energized),
            other => Err(format!("unsupported mood: {other}")),
        }
    }
}

/// A single logged act of kindness. `date` is the calendar day the act
/// belongs to and never changes once the record exists; edits through the
/// same id may touch every other field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KindnessAct {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub category: ActCategory,
    pub impact_level: ImpactLevel,
    pub mood_after: MoodAfter,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KindnessActInput {
    pub user_id: String,
    /// Calendar day, `YYYY-MM-DD`. Defaults to the local current day.
    #[serde(default)]
    pub date: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: ActCategory,
    pub impact_level: ImpactLevel,
    pub mood_after: MoodAfter,
}
