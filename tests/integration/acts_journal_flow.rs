//! Act and journal CRUD, onboarding state transitions, and notification
//! settings persistence against a real on-disk database.

use chrono::Local;
use tempfile::{tempdir, TempDir};

use kind30_app::db::DbPool;
use kind30_app::error::AppError;
use kind30_app::models::act::{ActCategory, ImpactLevel, KindnessActInput, MoodAfter};
use kind30_app::models::journal::{JournalEntryInput, JournalMood};
use kind30_app::models::settings::NotificationSettings;
use kind30_app::models::user::{EmotionalState, MentalWellbeing, User, UserProfile};
use kind30_app::services::act_service::ActService;
use kind30_app::services::journal_service::JournalService;
use kind30_app::services::profile_service::ProfileService;
use kind30_app::services::settings_service::SettingsService;
use kind30_app::utils::dates;

fn setup() -> (DbPool, User, TempDir) {
    let temp_dir = tempdir().expect("failed to create temp directory");
    let db = DbPool::new(temp_dir.path().join("test.db")).expect("failed to open test database");

    let user = ProfileService::new(db.clone())
        .create_user("Ada", "ada@example.com")
        .expect("failed to onboard user");

    (db, user, temp_dir)
}

fn act_input(user_id: &str) -> KindnessActInput {
    KindnessActInput {
        user_id: user_id.to_string(),
        date: None,
        title: "Donated old books".to_string(),
        description: Some("Dropped them at the library".to_string()),
        category: ActCategory::Community,
        impact_level: ImpactLevel::Medium,
        mood_after: MoodAfter::Fulfilled,
    }
}

fn journal_input(user_id: &str) -> JournalEntryInput {
    JournalEntryInput {
        user_id: user_id.to_string(),
        title: "A good day".to_string(),
        content: "Felt lighter after the library run.".to_string(),
        kindness_act_id: None,
        mood_before: Some(JournalMood::Neutral),
        mood_after: Some(JournalMood::Grateful),
    }
}

#[test]
fn logged_acts_default_to_today_and_round_trip() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db);

    let act = acts.log_act(act_input(&user.id)).unwrap();

    assert_eq!(act.date, dates::format_day(Local::now().date_naive()));

    let stored = acts.get_act(&act.id).unwrap();
    assert_eq!(stored, act);

    assert_eq!(acts.todays_acts(&user.id).unwrap(), vec![stored]);
}

#[test]
fn act_titles_must_not_be_blank() {
    let (db, user, _tmp) = setup();

    let mut input = act_input(&user.id);
    input.title = "   ".to_string();

    let result = ActService::new(db).log_act(input);
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[test]
fn act_dates_must_be_calendar_days() {
    let (db, user, _tmp) = setup();

    let mut input = act_input(&user.id);
    input.date = Some("03/01/2024".to_string());

    let result = ActService::new(db).log_act(input);
    assert!(matches!(result, Err(AppError::InvalidDate { .. })));
}

#[test]
fn logging_for_an_unknown_user_is_rejected() {
    let (db, _user, _tmp) = setup();

    let result = ActService::new(db).log_act(act_input("nobody"));
    assert!(matches!(result, Err(AppError::NoUser)));
}

#[test]
fn editing_an_act_never_moves_its_day() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db);

    let act = acts.log_act(act_input(&user.id)).unwrap();

    let mut edit = act_input(&user.id);
    edit.title = "Donated old books and a lamp".to_string();
    edit.category = ActCategory::Personal;
    edit.date = Some("1999-12-31".to_string());

    let updated = acts.update_act(&act.id, edit).unwrap();

    assert_eq!(updated.title, "Donated old books and a lamp");
    assert_eq!(updated.category, ActCategory::Personal);
    assert_eq!(updated.date, act.date);
    assert_eq!(updated.created_at, act.created_at);
}

#[test]
fn journal_entries_round_trip_and_track_updates() {
    let (db, user, _tmp) = setup();
    let journal = JournalService::new(db);

    let entry = journal.create_entry(journal_input(&user.id)).unwrap();
    assert!(entry.updated_at.is_none());

    let mut edit = journal_input(&user.id);
    edit.content = "Second thoughts, still grateful.".to_string();
    let updated = journal.update_entry(&entry.id, edit).unwrap();

    assert!(updated.updated_at.is_some());
    assert_eq!(updated.created_at, entry.created_at);

    let listed = journal.list_entries(&user.id).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].content, "Second thoughts, still grateful.");
}

#[test]
fn journal_entries_can_link_to_an_act() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db.clone());
    let journal = JournalService::new(db);

    let act = acts.log_act(act_input(&user.id)).unwrap();

    let mut input = journal_input(&user.id);
    input.kindness_act_id = Some(act.id.clone());
    let entry = journal.create_entry(input).unwrap();

    let linked = journal.entries_for_act(&act.id).unwrap();
    assert_eq!(linked, vec![entry]);
}

#[test]
fn dangling_act_links_are_rejected() {
    let (db, user, _tmp) = setup();

    let mut input = journal_input(&user.id);
    input.kindness_act_id = Some("no-such-act".to_string());

    let result = JournalService::new(db).create_entry(input);
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[test]
fn deleted_entries_stay_deleted() {
    let (db, user, _tmp) = setup();
    let journal = JournalService::new(db);

    let entry = journal.create_entry(journal_input(&user.id)).unwrap();
    journal.delete_entry(&entry.id).unwrap();

    assert!(matches!(
        journal.get_entry(&entry.id),
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        journal.delete_entry(&entry.id),
        Err(AppError::NotFound)
    ));
}

#[test]
fn setup_completes_once_a_profile_is_saved() {
    let (db, user, _tmp) = setup();
    let profiles = ProfileService::new(db);

    assert!(!profiles.is_setup_complete().unwrap());

    let profile = UserProfile {
        user_id: user.id.clone(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        location_city: Some("London".to_string()),
        avatar_uri: None,
        emotional_state: EmotionalState::Peaceful,
        mental_wellbeing: MentalWellbeing::Good,
        updated_at: String::new(),
    };
    profiles.save_profile(profile).unwrap();

    assert!(profiles.is_setup_complete().unwrap());

    let stored = profiles.get_profile(&user.id).unwrap().unwrap();
    assert_eq!(stored.first_name, "Ada");
    assert!(!stored.updated_at.is_empty());
}

#[test]
fn settings_fall_back_to_defaults_until_saved() {
    let (db, user, _tmp) = setup();
    let settings = SettingsService::new(db);

    let defaults = settings.get_settings(&user.id).unwrap();
    assert_eq!(defaults, NotificationSettings::defaults_for(&user.id));

    let mut custom = defaults;
    custom.preferred_time_1 = "08:15".to_string();
    custom.quiet_hours_enabled = false;
    settings.update_settings(custom.clone()).unwrap();

    let stored = settings.get_settings(&user.id).unwrap();
    assert_eq!(stored, custom);
}
