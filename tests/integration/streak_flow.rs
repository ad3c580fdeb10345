//! End-to-end streak behavior against a real on-disk database: onboarding
//! seeds the zero state, every saved act rebuilds the counters, and deleting
//! history rebuilds them again.

use chrono::{Duration, Local};
use tempfile::{tempdir, TempDir};

use kind30_app::db::DbPool;
use kind30_app::error::AppError;
use kind30_app::models::act::{ActCategory, ImpactLevel, KindnessActInput, MoodAfter};
use kind30_app::models::user::User;
use kind30_app::services::act_service::ActService;
use kind30_app::services::profile_service::ProfileService;
use kind30_app::services::streak_service::StreakService;
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
        title: "Helped a neighbour".to_string(),
        description: None,
        category: ActCategory::Community,
        impact_level: ImpactLevel::Small,
        mood_after: MoodAfter::Happy,
    }
}

fn days_ago(n: i64) -> String {
    dates::format_day(Local::now().date_naive() - Duration::days(n))
}

#[test]
fn onboarding_seeds_a_zero_streak() {
    let (db, user, _tmp) = setup();

    let streak = StreakService::new(db)
        .get_for_user(&user.id)
        .unwrap()
        .expect("streak record should exist right after onboarding");

    assert_eq!(streak.current_streak_days, 0);
    assert_eq!(streak.longest_streak_days, 0);
    assert_eq!(streak.total_days_active, 0);
}

#[test]
fn three_consecutive_days_yield_a_three_day_streak() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db.clone());

    for n in [2, 1, 0] {
        acts.log_act(act_input(&user.id, Some(days_ago(n)))).unwrap();
    }

    let streak = StreakService::new(db)
        .get_for_user(&user.id)
        .unwrap()
        .unwrap();

    assert_eq!(streak.current_streak_days, 3);
    assert_eq!(streak.longest_streak_days, 3);
    assert_eq!(streak.total_days_active, 3);
    assert_eq!(streak.last_activity_date, days_ago(0));
}

#[test]
fn a_missed_day_restarts_the_current_streak() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db.clone());

    acts.log_act(act_input(&user.id, Some(days_ago(4)))).unwrap();
    acts.log_act(act_input(&user.id, Some(days_ago(3)))).unwrap();
    acts.log_act(act_input(&user.id, Some(days_ago(0)))).unwrap();

    let streak = StreakService::new(db)
        .get_for_user(&user.id)
        .unwrap()
        .unwrap();

    assert_eq!(streak.current_streak_days, 1);
    assert_eq!(streak.longest_streak_days, 2);
    assert_eq!(streak.total_days_active, 3);
}

#[test]
fn several_acts_on_one_day_count_as_one_active_day() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db.clone());

    for _ in 0..3 {
        acts.log_act(act_input(&user.id, None)).unwrap();
    }

    let streak = StreakService::new(db)
        .get_for_user(&user.id)
        .unwrap()
        .unwrap();

    assert_eq!(streak.current_streak_days, 1);
    assert_eq!(streak.total_days_active, 1);
}

#[test]
fn deleting_an_act_rebuilds_the_streak() {
    let (db, user, _tmp) = setup();
    let acts = ActService::new(db.clone());

    acts.log_act(act_input(&user.id, Some(days_ago(1)))).unwrap();
    let todays = acts.log_act(act_input(&user.id, Some(days_ago(0)))).unwrap();

    acts.delete_act(&todays.id).unwrap();

    let streak = StreakService::new(db)
        .get_for_user(&user.id)
        .unwrap()
        .unwrap();

    // Yesterday alone still counts while today is open.
    assert_eq!(streak.current_streak_days, 1);
    assert_eq!(streak.total_days_active, 1);
    assert_eq!(streak.last_activity_date, days_ago(1));
}

#[test]
fn recalculation_for_an_unknown_user_is_rejected() {
    let (db, _user, _tmp) = setup();

    let result = StreakService::new(db).recalculate_for_user("nobody");

    assert!(matches!(result, Err(AppError::NoUser)));
}
