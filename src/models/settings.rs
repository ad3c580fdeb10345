use serde::{Deserialize, Serialize};

/// Per-user reminder preferences. Times are local wall-clock `HH:MM` strings;
/// the quiet window may span midnight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub user_id: String,
    pub enabled: bool,
    pub frequency_hours: u32,
    pub preferred_time_1: String,
    pub preferred_time_2: String,
    pub quiet_hours_enabled: bool,
    pub quiet_start: String,
    pub quiet_end: String,
}

impl NotificationSettings {
    pub fn defaults_for(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            enabled: true,
            frequency_hours: 12,
            preferred_time_1: "09:00".to_string(),
            preferred_time_2: "21:00".to_string(),
            quiet_hours_enabled: true,
            quiet_start: "22:00".to_string(),
            quiet_end: "07:00".to_string(),
        }
    }
}
