pub mod act_repository;
pub mod challenge_repository;
pub mod journal_repository;
pub mod settings_repository;
pub mod streak_repository;
pub mod user_repository;
