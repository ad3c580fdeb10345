use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const CHALLENGE_NAME: &str = "KIND30";
pub const CHALLENGE_LENGTH_DAYS: u8 = 30;

/// Progress through the fixed 30-day KIND30 challenge.
///
/// `completed_days` is an ordered set so the sorted/deduplicated invariant
/// holds structurally. `current_day` is always the first day number not yet
/// completed, or 31 once all 30 are done.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    pub user_id: String,
    pub challenge_name: String,
    pub start_date: String,
    pub current_day: u8,
    pub completed_days: BTreeSet<u8>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    pub last_updated: String,
}

impl ChallengeProgress {
    pub fn fresh(user_id: impl Into<String>, now: impl Into<String>) -> Self {
        let now = now.into();
        Self {
            user_id: user_id.into(),
            challenge_name: CHALLENGE_NAME.to_string(),
            start_date: now.clone(),
            current_day: 1,
            completed_days: BTreeSet::new(),
            is_active: true,
            completed_at: None,
            last_updated: now,
        }
    }

    pub fn last_completed_day(&self) -> u8 {
        self.completed_days.iter().next_back().copied().unwrap_or(0)
    }

    /// First day in 1..=30 not yet completed, 31 when every day is done.
    pub fn first_incomplete_day(&self) -> u8 {
        (1..=CHALLENGE_LENGTH_DAYS)
            .find(|day| !self.completed_days.contains(day))
            .unwrap_or(CHALLENGE_LENGTH_DAYS + 1)
    }

    pub fn is_complete(&self) -> bool {
        self.completed_days.len() == usize::from(CHALLENGE_LENGTH_DAYS)
    }
}
