//! Challenge lifecycle against a real on-disk database: opt-in, the
//! first-act-of-the-day trigger, persistence of the completed-day set, and
//! explicit resets.

use std::collections::BTreeSet;

use chrono::{Duration, Local};
use tempfile::{tempdir, TempDir};

use kind30_app::db::DbPool;
use kind30_app::error::AppError;
use kind30_app::models::act::{ActCategory, ImpactLevel, KindnessActInput, MoodAfter};
use kind30_app::models::challenge::CHALLENGE_NAME;
use kind30_app::models::user::User;
use kind30_app::services::act_service::ActService;
use kind30_app::services::challenge_service::ChallengeService;
use kind30_app::services::profile_service::ProfileService;
use kind30_app::utils::dates;

fn setup() -> (DbPool, User, TempDir) {
    let temp_dir = tempdir().expect("failed to create temp directory");
    let db = DbPool::new(temp_dir.path().join("test.db")).expect("failed to open test database");

    let user = ProfileService::new(db.clone())
        .create_user("Ada", "ada@example.com")
        .expect("failed to onboard user");

    (db, user, temp_dir)
}

fn act_input(user_id: &str, date: Option<String>) -> KindnessActInput {
    KindnessActInput {
        user_id: user_id.to_string(),
        date,
        title: "Paid a compliment".to_string(),
        description: None,
        category: ActCategory::Random,
        impact_level: ImpactLevel::Small,
        mood_after: MoodAfter::Proud,
    }
}

#[test]
fn starting_creates_a_fresh_active_challenge() {
    let (db, user, _tmp) = setup();
    let challenges = ChallengeService::new(db);

    let progress = challenges.start(&user.id).unwrap();

    assert_eq!(progress.challenge_name, CHALLENGE_NAME);
    assert_eq!(progress.current_day, 1);
    assert!(progress.completed_days.is_empty());
    assert!(progress.is_active);
    assert!(progress.completed_at.is_none());

    let stored = challenges.get_progress(&user.id).unwrap().unwrap();
    assert_eq!(stored, progress);
}

#[test]
fn starting_for_an_unknown_user_is_rejected() {
    let (db, _user, _tmp) = setup();

    let result = ChallengeService::new(db).start("nobody");

    assert!(matches!(result, Err(AppError::NoUser)));
}

#[test]
fn first_act_of_today_completes_day_one() {
    let (db, user, _tmp) = setup();
    let challenges = ChallengeService::new(db.clone());
    challenges.start(&user.id).unwrap();

    ActService::new(db).log_act(act_input(&user.id, None)).unwrap();

    let progress = challenges.get_progress(&user.id).unwrap().unwrap();
    assert_eq!(progress.completed_days, BTreeSet::from([1]));
    assert_eq!(progress.current_day, 2);
    assert!(progress.is_active);
}

#[test]
fn a_second_act_the_same_day_does_not_advance_again() {
    let (db, user, _tmp) = setup();
    let challenges = ChallengeService::new(db.clone());
    challenges.start(&user.id).unwrap();

    let acts = ActService::new(db);
    acts.log_act(act_input(&user.id, None)).unwrap();
    acts.log_act(act_input(&user.id, None)).unwrap();

    let progress = challenges.get_progress(&user.id).unwrap().unwrap();
    assert_eq!(progress.completed_days, BTreeSet::from([1]));
    assert_eq!(progress.current_day, 2);
}

#[test]
fn backfilled_acts_feed_the_streak_but_not_the_challenge() {
    let (db, user, _tmp) = setup();
    let challenges = ChallengeService::new(db.clone());
    challenges.start(&user.id).unwrap();

    let yesterday = dates::format_day(Local::now().date_naive() - Duration::days(1));
    ActService::new(db)
        .log_act(act_input(&user.id, Some(yesterday)))
        .unwrap();

    let progress = challenges.get_progress(&user.id).unwrap().unwrap();
    assert!(progress.completed_days.is_empty());
    assert_eq!(progress.current_day, 1);
}

#[test]
fn acting_without_an_opted_in_challenge_is_a_no_op() {
    let (db, user, _tmp) = setup();

    // No start() call; logging an act must not materialize progress.
    ActService::new(db.clone()).log_act(act_input(&user.id, None)).unwrap();

    let challenges = ChallengeService::new(db.clone());
    assert!(challenges.get_progress(&user.id).unwrap().is_none());

    let advanced = challenges
        .record_first_activity(&user.id, Local::now().date_naive())
        .unwrap();
    assert!(advanced.is_none());
}

#[test]
fn reset_discards_all_progress() {
    let (db, user, _tmp) = setup();
    let challenges = ChallengeService::new(db.clone());
    challenges.start(&user.id).unwrap();

    ActService::new(db).log_act(act_input(&user.id, None)).unwrap();

    let progress = challenges.reset(&user.id).unwrap();

    assert!(progress.completed_days.is_empty());
    assert_eq!(progress.current_day, 1);
    assert!(progress.is_active);

    let stored = challenges.get_progress(&user.id).unwrap().unwrap();
    assert_eq!(stored, progress);
}

#[test]
fn completed_day_set_survives_a_round_trip() {
    let (db, user, _tmp) = setup();
    let challenges = ChallengeService::new(db.clone());

    let mut progress = challenges.start(&user.id).unwrap();
    progress.completed_days = (1..=7).collect();
    progress.current_day = 8;

    kind30_app::db::repositories::challenge_repository::ChallengeRepository::upsert(
        &db.get_connection().unwrap(),
        &progress,
    )
    .unwrap();

    let stored = challenges.get_progress(&user.id).unwrap().unwrap();
    assert_eq!(stored.completed_days, (1..=7).collect::<BTreeSet<u8>>());
    assert_eq!(stored.current_day, 8);
}
