//! Integration tests for the translation-pair save hook.
//!
//! Exercises the seed-on-first-save behaviour against a real database:
//! - seeding copies every per-language field of the saved row
//! - seeding happens at most once and never overwrites
//! - deletes remove both language rows

use chrono::NaiveDate;
use murasaki_core::language::Language;
use murasaki_db::models::news_item::{CreateNewsItem, UpdateNewsItem};
use murasaki_db::models::tour_date::CreateTourDate;
use murasaki_db::repositories::{NewsItemRepo, TourDateRepo};
use sqlx::PgPool;

fn new_news_item(language: Language, title: &str) -> CreateNewsItem {
    CreateNewsItem {
        language,
        title: title.to_string(),
        body: Some("<p>Tour starts in March.</p>".to_string()),
        live: Some(true),
        image: Some("news/tour.jpg".to_string()),
    }
}

#[sqlx::test]
async fn seed_creates_the_missing_sibling(pool: PgPool) {
    let item = NewsItemRepo::create(&pool, &new_news_item(Language::En, "Tour announced"))
        .await
        .unwrap();

    assert!(!NewsItemRepo::has_translation(&pool, item.id, Language::Ja)
        .await
        .unwrap());

    let seeded = NewsItemRepo::seed_missing_translation(&pool, item.id, Language::En)
        .await
        .unwrap();
    assert!(seeded);

    let sibling = NewsItemRepo::get(&pool, item.id, Language::Ja)
        .await
        .unwrap()
        .expect("seeded row should exist");

    // Every per-language field mirrors the saved row.
    assert_eq!(sibling.title, item.title);
    assert_eq!(sibling.body, item.body);
    assert_eq!(sibling.live, item.live);
    assert_eq!(sibling.date, item.date);
    assert_eq!(sibling.image, item.image);
    assert_eq!(sibling.language_code, "ja");

    assert_eq!(
        NewsItemRepo::translation_count(&pool, item.id).await.unwrap(),
        2
    );
}

#[sqlx::test]
async fn seed_is_a_no_op_when_both_sides_exist(pool: PgPool) {
    let item = NewsItemRepo::create(&pool, &new_news_item(Language::En, "First post"))
        .await
        .unwrap();
    NewsItemRepo::seed_missing_translation(&pool, item.id, Language::En)
        .await
        .unwrap();

    // Localize the Japanese side.
    NewsItemRepo::update_translation(
        &pool,
        item.id,
        &UpdateNewsItem {
            language: Language::Ja,
            title: Some("最初の投稿".to_string()),
            body: None,
            live: None,
            image: None,
        },
    )
    .await
    .unwrap()
    .expect("japanese row exists");

    // A later English save must not touch the Japanese row.
    NewsItemRepo::update_translation(
        &pool,
        item.id,
        &UpdateNewsItem {
            language: Language::En,
            title: Some("First post (edited)".to_string()),
            body: None,
            live: None,
            image: None,
        },
    )
    .await
    .unwrap()
    .expect("english row exists");

    let seeded = NewsItemRepo::seed_missing_translation(&pool, item.id, Language::En)
        .await
        .unwrap();
    assert!(!seeded);

    let japanese = NewsItemRepo::get(&pool, item.id, Language::Ja)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(japanese.title, "最初の投稿");
}

#[sqlx::test]
async fn seed_works_from_either_language(pool: PgPool) {
    let item = NewsItemRepo::create(&pool, &new_news_item(Language::Ja, "ニュース"))
        .await
        .unwrap();

    let seeded = NewsItemRepo::seed_missing_translation(&pool, item.id, Language::Ja)
        .await
        .unwrap();
    assert!(seeded);

    let english = NewsItemRepo::get(&pool, item.id, Language::En)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(english.title, "ニュース");
    assert_eq!(english.language_code, "en");
}

#[sqlx::test]
async fn seed_copies_the_editor_set_tour_date(pool: PgPool) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let tour_date = TourDateRepo::create(
        &pool,
        &CreateTourDate {
            language: Language::En,
            title: "Spring tour".to_string(),
            venue: Some("Budokan".to_string()),
            description: None,
            date,
            live: Some(true),
        },
    )
    .await
    .unwrap();

    TourDateRepo::seed_missing_translation(&pool, tour_date.id, Language::En)
        .await
        .unwrap();

    let sibling = TourDateRepo::get(&pool, tour_date.id, Language::Ja)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sibling.date, date);
    assert_eq!(sibling.venue, "Budokan");
    assert_eq!(sibling.live, true);
}

#[sqlx::test]
async fn duplicate_translation_is_rejected(pool: PgPool) {
    let item = NewsItemRepo::create(&pool, &new_news_item(Language::En, "Only once"))
        .await
        .unwrap();

    let result =
        NewsItemRepo::create_translation(&pool, item.id, &new_news_item(Language::En, "Again"))
            .await;
    assert!(result.is_err(), "second en row must violate uq constraint");
}

#[sqlx::test]
async fn delete_removes_both_language_rows(pool: PgPool) {
    let item = NewsItemRepo::create(&pool, &new_news_item(Language::En, "Short lived"))
        .await
        .unwrap();
    NewsItemRepo::seed_missing_translation(&pool, item.id, Language::En)
        .await
        .unwrap();

    assert!(NewsItemRepo::delete(&pool, item.id).await.unwrap());
    assert_eq!(
        NewsItemRepo::translation_count(&pool, item.id).await.unwrap(),
        0
    );
    assert!(NewsItemRepo::get(&pool, item.id, Language::En)
        .await
        .unwrap()
        .is_none());

    // Deleting again reports nothing to delete.
    assert!(!NewsItemRepo::delete(&pool, item.id).await.unwrap());
}
