use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    Happy,
    Neutral,
    Sad,
    Anxious,
    Stressed,
    Excited,
    Peaceful,
}

impl EmotionalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Happy => "happy",
            EmotionalState::Neutral => "neutral",
            EmotionalState::Sad => "sad",
            EmotionalState::Anxious => "anxious",
            EmotionalState::Stressed => "stressed",
            EmotionalState::Excited => "excited",
            EmotionalState::Peaceful => "peaceful",
        }
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EmotionalState {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "happy" => Ok(EmotionalState::Happy),
            "neutral" => Ok(EmotionalState::Neutral),
            "sad" => Ok(EmotionalState::Sad),
            "anxious" => Ok(EmotionalState::Anxious),
            "stressed" => Ok(EmotionalState::Stressed),
            "excited" => Ok(EmotionalState::Excited),
            "peaceful" => Ok(EmotionalState::Peaceful),
            other => Err(format!("unsupported emotional state: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MentalWellbeing {
    Excellent,
    Good,
    Fair,
    Struggling,
    NeedSupport,
}

impl MentalWellbeing {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentalWellbeing::Excellent => "excellent",
            MentalWellbeing::Good => "good",
            MentalWellbeing::Fair => "fair",
            MentalWellbeing::Struggling => "struggling",
            MentalWellbeing::NeedSupport => "need_support",
        }
    }
}

impl fmt::Display for MentalWellbeing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MentalWellbeing {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "excellent" => Ok(MentalWellbeing::Excellent),
            "good" => Ok(MentalWellbeing::Good),
            "fair" => Ok(MentalWellbeing::Fair),
            "struggling" => Ok(MentalWellbeing::Struggling),
            "need_support" => Ok(MentalWellbeing::NeedSupport),
            other => Err(format!("unsupported wellbeing value: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    /// Local file URI for the profile picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_uri: Option<String>,
    pub emotional_state: EmotionalState,
    pub mental_wellbeing: MentalWellbeing,
    pub updated_at: String,
}
