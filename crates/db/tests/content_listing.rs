//! Integration tests for live listings and the lazy page singletons.

use murasaki_core::language::Language;
use murasaki_core::page_type::PageType;
use murasaki_db::models::news_item::CreateNewsItem;
use murasaki_db::models::page::UpdatePage;
use murasaki_db::models::photo::CreatePhoto;
use murasaki_db::repositories::{NewsItemRepo, PageRepo, PhotoRepo};
use sqlx::PgPool;

fn news(language: Language, title: &str, live: bool) -> CreateNewsItem {
    CreateNewsItem {
        language,
        title: title.to_string(),
        body: None,
        live: Some(live),
        image: None,
    }
}

// ---------------------------------------------------------------------------
// Live listings
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn listing_is_per_language(pool: PgPool) {
    // An identity that is live in English only.
    let item = NewsItemRepo::create(&pool, &news(Language::En, "English only", true))
        .await
        .unwrap();

    let japanese = NewsItemRepo::list_live(&pool, Language::Ja, 10, 0)
        .await
        .unwrap();
    assert!(japanese.is_empty(), "no ja row yet, listing must be empty");

    // Once the Japanese row exists (seeded live=true), it appears.
    NewsItemRepo::seed_missing_translation(&pool, item.id, Language::En)
        .await
        .unwrap();
    let japanese = NewsItemRepo::list_live(&pool, Language::Ja, 10, 0)
        .await
        .unwrap();
    assert_eq!(japanese.len(), 1);
    assert_eq!(japanese[0].id, item.id);
}

#[sqlx::test]
async fn listing_excludes_non_live_rows(pool: PgPool) {
    NewsItemRepo::create(&pool, &news(Language::En, "Draft", false))
        .await
        .unwrap();
    NewsItemRepo::create(&pool, &news(Language::En, "Published", true))
        .await
        .unwrap();

    let live = NewsItemRepo::list_live(&pool, Language::En, 10, 0)
        .await
        .unwrap();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].title, "Published");
    assert_eq!(
        NewsItemRepo::count_live(&pool, Language::En).await.unwrap(),
        1
    );
}

#[sqlx::test]
async fn listing_is_newest_first_and_sliceable(pool: PgPool) {
    for n in 1..=5 {
        NewsItemRepo::create(&pool, &news(Language::En, &format!("Item {n}"), true))
            .await
            .unwrap();
    }

    let first_page = NewsItemRepo::list_live(&pool, Language::En, 2, 0)
        .await
        .unwrap();
    assert_eq!(first_page.len(), 2);
    assert!(first_page[0].date >= first_page[1].date);

    let last_page = NewsItemRepo::list_live(&pool, Language::En, 2, 4)
        .await
        .unwrap();
    assert_eq!(last_page.len(), 1);
}

#[sqlx::test]
async fn photos_default_to_live(pool: PgPool) {
    PhotoRepo::create(
        &pool,
        &CreatePhoto {
            language: Language::En,
            title: "Backstage".to_string(),
            description: None,
            image: "gallery/photos/backstage.jpg".to_string(),
            live: None,
        },
    )
    .await
    .unwrap();

    let live = PhotoRepo::list_live(&pool, Language::En, 16, 0).await.unwrap();
    assert_eq!(live.len(), 1);
}

// ---------------------------------------------------------------------------
// Page singletons
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn first_request_creates_both_language_rows(pool: PgPool) {
    let page = PageRepo::get_or_create(&pool, PageType::Band, Language::En)
        .await
        .unwrap();
    assert_eq!(page.title, "Band");
    assert_eq!(page.page_type, "band");
    assert_eq!(page.language_code, "en");

    assert!(PageRepo::has_translation(&pool, page.id, Language::Ja)
        .await
        .unwrap());
    assert_eq!(PageRepo::translation_count(&pool, page.id).await.unwrap(), 2);
}

#[sqlx::test]
async fn second_request_reuses_the_singleton(pool: PgPool) {
    let first = PageRepo::get_or_create(&pool, PageType::Home, Language::En)
        .await
        .unwrap();
    let second = PageRepo::get_or_create(&pool, PageType::Home, Language::Ja)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.language_code, "ja");
    assert_eq!(second.page_type, "home");
}

#[sqlx::test]
async fn page_edits_stay_per_language(pool: PgPool) {
    let page = PageRepo::get_or_create(&pool, PageType::Music, Language::En)
        .await
        .unwrap();

    PageRepo::update_translation(
        &pool,
        page.id,
        &UpdatePage {
            language: Language::Ja,
            title: Some("ミュージック".to_string()),
            intro: Some("<p>最新リリース</p>".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("ja row exists");

    let english = PageRepo::get(&pool, page.id, Language::En).await.unwrap().unwrap();
    let japanese = PageRepo::get(&pool, page.id, Language::Ja).await.unwrap().unwrap();
    assert_eq!(english.title, "Music");
    assert_eq!(japanese.title, "ミュージック");
    // The cross-language key is untouched by edits.
    assert_eq!(english.page_type, japanese.page_type);
}

#[sqlx::test]
async fn detail_read_falls_back_to_the_other_language(pool: PgPool) {
    let item = NewsItemRepo::create(&pool, &news(Language::En, "English only", true))
        .await
        .unwrap();

    let fallback = NewsItemRepo::get_with_fallback(&pool, item.id, Language::Ja)
        .await
        .unwrap()
        .expect("identity exists in some language");
    assert_eq!(fallback.language_code, "en");

    let missing = NewsItemRepo::get_with_fallback(&pool, item.id + 999, Language::Ja)
        .await
        .unwrap();
    assert!(missing.is_none());
}
