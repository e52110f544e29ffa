//! Repository-level properties against an in-memory SQLite database.

use macim_server::db::post_repo::{self, MatchPostUpdate};
use macim_server::db::reservation_repo::{self, BookOutcome, NewReservation};
use macim_server::db::user_repo::{self, NewUser};
use macim_server::db::{self, message_repo};
use macim_server::slots;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Single connection so every query sees the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    db::init_schema(&pool).await.expect("schema bootstrap");
    pool
}

async fn register(pool: &SqlitePool, email: &str) -> i64 {
    match user_repo::create_user(pool, email, "hash").await.expect("insert user") {
        NewUser::Created(id) => id,
        NewUser::EmailTaken => panic!("email unexpectedly taken"),
    }
}

#[actix_rt::test]
async fn duplicate_email_is_rejected() {
    let pool = test_pool().await;
    register(&pool, "a@x.com").await;
    assert!(matches!(
        user_repo::create_user(&pool, "a@x.com", "other").await.unwrap(),
        NewUser::EmailTaken
    ));
}

#[actix_rt::test]
async fn fresh_field_has_full_grid_and_no_taken_slots() {
    let pool = test_pool().await;
    let settings = reservation_repo::field_settings(&pool, "1").await.unwrap();
    assert_eq!(settings.price, 1200);
    assert_eq!(settings.open_hour, 12);
    assert_eq!(settings.close_hour, 24);

    let grid = slots::hour_slots(settings.open_hour, settings.close_hour);
    assert_eq!(grid.len() as i64, (settings.close_hour - 1).min(23) - settings.open_hour + 1);

    let taken = reservation_repo::taken_times(&pool, "1", "2025-06-01").await.unwrap();
    assert!(taken.is_empty());
}

#[actix_rt::test]
async fn second_booking_of_same_slot_conflicts_even_for_other_owner() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let b = register(&pool, "b@x.com").await;

    let slot = NewReservation {
        field_id: "1",
        field_name: "Arena",
        date: "2025-06-01",
        time: "18:00",
        price: 1200,
    };

    assert!(matches!(
        reservation_repo::book(&pool, a, &slot).await.unwrap(),
        BookOutcome::Booked(_)
    ));
    assert!(matches!(
        reservation_repo::book(&pool, b, &slot).await.unwrap(),
        BookOutcome::SlotTaken
    ));

    // The slot shows up as taken for that date only
    let taken = reservation_repo::taken_times(&pool, "1", "2025-06-01").await.unwrap();
    assert_eq!(taken, vec!["18:00".to_string()]);
    let other_day = reservation_repo::taken_times(&pool, "1", "2025-06-02").await.unwrap();
    assert!(other_day.is_empty());
}

#[actix_rt::test]
async fn taken_times_are_truncated_to_hh_mm() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let slot = NewReservation {
        field_id: "2",
        field_name: "Gol Park",
        date: "2025-06-01",
        time: "18:00:00",
        price: 900,
    };
    reservation_repo::book(&pool, a, &slot).await.unwrap();

    let taken = reservation_repo::taken_times(&pool, "2", "2025-06-01").await.unwrap();
    assert_eq!(taken, vec!["18:00".to_string()]);
}

#[actix_rt::test]
async fn cancellation_is_owner_scoped() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let b = register(&pool, "b@x.com").await;

    let slot = NewReservation {
        field_id: "1",
        field_name: "Arena",
        date: "2025-06-01",
        time: "20:00",
        price: 1200,
    };
    let id = match reservation_repo::book(&pool, a, &slot).await.unwrap() {
        BookOutcome::Booked(id) => id,
        BookOutcome::SlotTaken => panic!("slot unexpectedly taken"),
    };

    assert_eq!(reservation_repo::cancel(&pool, b, id).await.unwrap(), 0);
    assert_eq!(reservation_repo::list_mine(&pool, a).await.unwrap().len(), 1);

    assert_eq!(reservation_repo::cancel(&pool, a, id).await.unwrap(), 1);
    assert!(reservation_repo::list_mine(&pool, a).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn partial_post_update_keeps_omitted_fields() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let id = post_repo::create_player_post(&pool, a, "kaleci", "İstanbul", Some("akşam"))
        .await
        .unwrap();

    let changed = post_repo::update_player_post(&pool, a, id, None, Some("Ankara"), None)
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let mine = post_repo::list_my_player_posts(&pool, a).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].position, "kaleci");
    assert_eq!(mine[0].city, "Ankara");
    assert_eq!(mine[0].note.as_deref(), Some("akşam"));
}

#[actix_rt::test]
async fn non_owner_update_and_delete_touch_nothing() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let b = register(&pool, "b@x.com").await;

    let id = post_repo::create_match_post(&pool, a, "İstanbul", "Arena", "2025-06-01", "20:00", None)
        .await
        .unwrap();

    let upd = MatchPostUpdate {
        city: Some("Ankara".into()),
        ..MatchPostUpdate::default()
    };
    assert_eq!(post_repo::update_match_post(&pool, b, id, &upd).await.unwrap(), 0);
    assert_eq!(post_repo::delete_match_post(&pool, b, id).await.unwrap(), 0);

    let mine = post_repo::list_my_match_posts(&pool, a).await.unwrap();
    assert_eq!(mine[0].city, "İstanbul");
}

#[actix_rt::test]
async fn listings_are_newest_first_with_owner_name() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    user_repo::update_profile(
        &pool,
        a,
        &macim_server::db::user_repo::ProfileUpdate {
            name: Some("Ahmet".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    post_repo::create_player_post(&pool, a, "forvet", "İzmir", None).await.unwrap();
    post_repo::create_player_post(&pool, a, "kaleci", "İzmir", None).await.unwrap();

    let all = post_repo::list_player_posts(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].position, "kaleci");
    assert_eq!(all[0].name.as_deref(), Some("Ahmet"));
}

#[actix_rt::test]
async fn conversation_delete_removes_both_directions() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let b = register(&pool, "b@x.com").await;

    message_repo::send(&pool, a, b, "selam").await.unwrap();
    message_repo::send(&pool, b, a, "selam!").await.unwrap();
    message_repo::send(&pool, a, b, "maç var mı?").await.unwrap();

    assert_eq!(message_repo::thread(&pool, a, b).await.unwrap().len(), 3);

    let deleted = message_repo::delete_conversation(&pool, b, a).await.unwrap();
    assert_eq!(deleted, 3);
    assert!(message_repo::thread(&pool, a, b).await.unwrap().is_empty());
}

#[actix_rt::test]
async fn inbox_keeps_only_latest_message_per_counterpart() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;
    let b = register(&pool, "b@x.com").await;
    let c = register(&pool, "c@x.com").await;

    message_repo::send(&pool, a, b, "ilk").await.unwrap();
    message_repo::send(&pool, b, a, "son").await.unwrap();
    message_repo::send(&pool, a, c, "tek").await.unwrap();

    let inbox = message_repo::inbox(&pool, a).await.unwrap();
    assert_eq!(inbox.len(), 2);
    // Newest conversation first
    assert_eq!(inbox[0].other_user_id, c);
    assert_eq!(inbox[0].text, "tek");
    assert_eq!(inbox[1].other_user_id, b);
    assert_eq!(inbox[1].text, "son");
}

#[actix_rt::test]
async fn profile_update_coalesces_fields() {
    let pool = test_pool().await;
    let a = register(&pool, "a@x.com").await;

    user_repo::update_profile(
        &pool,
        a,
        &user_repo::ProfileUpdate {
            name: Some("Ahmet".into()),
            city: Some("İstanbul".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    user_repo::update_profile(
        &pool,
        a,
        &user_repo::ProfileUpdate {
            age: Some(27),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let profile = user_repo::get_profile(&pool, a).await.unwrap().expect("profile");
    assert_eq!(profile.name.as_deref(), Some("Ahmet"));
    assert_eq!(profile.city.as_deref(), Some("İstanbul"));
    assert_eq!(profile.age, Some(27));
}
