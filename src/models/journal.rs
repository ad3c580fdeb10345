use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JournalMood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Calm,
    Excited,
    Grateful,
    Neutral,
}

impl JournalMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalMood::Happy => "happy",
            JournalMood::Sad => "sad",
            JournalMood::Angry => "angry",
            JournalMood::Anxious => "anxious",
            JournalMood::Calm => "calm",
            JournalMood::Excited => "excited",
            JournalMood::Grateful => "grateful",
            JournalMood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for JournalMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for JournalMood {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "happy" => Ok(JournalMood::Happy),
            "sad" => Ok(JournalMood::Sad),
            "angry" => Ok(JournalMood::Angry),
            "anxious" => Ok(JournalMood::Anxious),
            "calm" => Ok(JournalMood::Calm),
            "excited" => Ok(JournalMood::Excited),
            "grateful" => Ok(JournalMood::Grateful),
            "neutral" => Ok(JournalMood::Neutral),
            other => Err(format!("unsupported journal mood: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    /// Optional link back to the act this entry reflects on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kindness_act_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_before: Option<JournalMood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_after: Option<JournalMood>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryInput {
    pub user_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub kindness_act_id: Option<String>,
    #[serde(default)]
    pub mood_before: Option<JournalMood>,
    #[serde(default)]
    pub mood_after: Option<JournalMood>,
}
