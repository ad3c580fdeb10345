pub mod act_service;
pub mod challenge_service;
pub mod journal_service;
pub mod profile_service;
pub mod reminder_service;
pub mod settings_service;
pub mod streak_service;
