pub mod act;
pub mod challenge;
pub mod journal;
pub mod settings;
pub mod streak;
pub mod user;
