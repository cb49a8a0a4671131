//! Handlers for the singleton nav pages, news, and tour routes.
//!
//! Every handler resolves the request language from the path prefix,
//! fetches (or lazily creates) the section's page, builds the
//! switch-language payload, and returns the assembled view context for
//! template rendering to consume.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use murasaki_core::error::CoreError;
use murasaki_core::language::{switch_link, Language, SwitchLanguage};
use murasaki_core::page_type::PageType;
use murasaki_core::pagination::{
    clamp_page, page_offset, parse_page_param, Paginated, HOME_TEASER_COUNT, NEWS_PAGE_SIZE,
    TOUR_PAGE_SIZE,
};
use murasaki_core::types::DbId;
use murasaki_core::urls::{page_path, Routable};
use murasaki_db::models::music_release::MusicRelease;
use murasaki_db::models::news_item::NewsItem;
use murasaki_db::models::page::Page;
use murasaki_db::models::tour_date::TourDate;
use murasaki_db::repositories::{MusicReleaseRepo, NewsItemRepo, PageRepo, TourDateRepo};

use crate::error::{AppError, AppResult};
use crate::locale::parse_path_language;
use crate::query::PageParam;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// View contexts
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SectionContext {
    page: Page,
    switch_language: SwitchLanguage,
}

#[derive(Debug, Serialize)]
struct HomeContext {
    page: Page,
    switch_language: SwitchLanguage,
    news_items: Vec<NewsItem>,
    tour_dates: Vec<TourDate>,
}

#[derive(Debug, Serialize)]
struct MusicContext {
    page: Page,
    switch_language: SwitchLanguage,
    music_releases: Vec<MusicRelease>,
}

#[derive(Debug, Serialize)]
struct NewsListContext {
    page: Page,
    switch_language: SwitchLanguage,
    news_items: Paginated<NewsItem>,
}

#[derive(Debug, Serialize)]
struct NewsDetailContext {
    page: Page,
    switch_language: SwitchLanguage,
    news_item: NewsItem,
}

#[derive(Debug, Serialize)]
struct TourListContext {
    page: Page,
    switch_language: SwitchLanguage,
    tour_dates: Paginated<TourDate>,
}

#[derive(Debug, Serialize)]
struct TourDetailContext {
    page: Page,
    switch_language: SwitchLanguage,
    tour_date: TourDate,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch (or lazily create) a section's page and build its
/// switch-language control.
async fn page_with_switch(
    state: &AppState,
    page_type: PageType,
    language: Language,
) -> Result<(Page, SwitchLanguage), AppError> {
    let page = PageRepo::get_or_create(&state.pool, page_type, language).await?;
    let switch_language = switch_link(|l| page_path(page_type, l), language);
    Ok((page, switch_language))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /{lang}/ -- home page with the latest news and tour teasers.
pub async fn home(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, switch_language) = page_with_switch(&state, PageType::Home, language).await?;

    let news_items = NewsItemRepo::list_live(&state.pool, language, HOME_TEASER_COUNT, 0).await?;
    let tour_dates = TourDateRepo::list_live(&state.pool, language, HOME_TEASER_COUNT, 0).await?;

    Ok(Json(DataResponse {
        data: HomeContext {
            page,
            switch_language,
            news_items,
            tour_dates,
        },
    }))
}

/// GET /{lang}/band/
pub async fn band(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, switch_language) = page_with_switch(&state, PageType::Band, language).await?;
    Ok(Json(DataResponse {
        data: SectionContext {
            page,
            switch_language,
        },
    }))
}

/// GET /{lang}/music/ -- the music page plus its live releases.
pub async fn music(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, switch_language) = page_with_switch(&state, PageType::Music, language).await?;
    let music_releases = MusicReleaseRepo::list_live(&state.pool, language).await?;
    Ok(Json(DataResponse {
        data: MusicContext {
            page,
            switch_language,
            music_releases,
        },
    }))
}

/// GET /{lang}/shop/
pub async fn shop(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, switch_language) = page_with_switch(&state, PageType::Shop, language).await?;
    Ok(Json(DataResponse {
        data: SectionContext {
            page,
            switch_language,
        },
    }))
}

/// GET /{lang}/news/?page=N -- paginated live news, newest first.
pub async fn news(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(params): Query<PageParam>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, switch_language) = page_with_switch(&state, PageType::News, language).await?;

    let total = NewsItemRepo::count_live(&state.pool, language).await?;
    let page_num = clamp_page(parse_page_param(params.page.as_deref()), total, NEWS_PAGE_SIZE);
    let items = NewsItemRepo::list_live(
        &state.pool,
        language,
        NEWS_PAGE_SIZE,
        page_offset(page_num, NEWS_PAGE_SIZE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: NewsListContext {
            page,
            switch_language,
            news_items: Paginated::new(items, page_num, NEWS_PAGE_SIZE, total),
        },
    }))
}

/// GET /{lang}/news/{id}/
///
/// The switch-language control is bound to the news item itself, so the
/// reader lands on the same article in the other language.
pub async fn news_detail(
    State(state): State<AppState>,
    Path((lang, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, _) = page_with_switch(&state, PageType::News, language).await?;

    let news_item = NewsItemRepo::get_with_fallback(&state.pool, id, language)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "NewsItem",
            id,
        })?;

    let switch_language = switch_link(|l| news_item.url_for(l), language);

    Ok(Json(DataResponse {
        data: NewsDetailContext {
            page,
            switch_language,
            news_item,
        },
    }))
}

/// GET /{lang}/tour/?page=N -- paginated live tour dates, newest first.
pub async fn tour(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(params): Query<PageParam>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, switch_language) = page_with_switch(&state, PageType::Tour, language).await?;

    let total = TourDateRepo::count_live(&state.pool, language).await?;
    let page_num = clamp_page(parse_page_param(params.page.as_deref()), total, TOUR_PAGE_SIZE);
    let items = TourDateRepo::list_live(
        &state.pool,
        language,
        TOUR_PAGE_SIZE,
        page_offset(page_num, TOUR_PAGE_SIZE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: TourListContext {
            page,
            switch_language,
            tour_dates: Paginated::new(items, page_num, TOUR_PAGE_SIZE, total),
        },
    }))
}

/// GET /{lang}/tour/{id}/
pub async fn tour_detail(
    State(state): State<AppState>,
    Path((lang, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;
    let (page, _) = page_with_switch(&state, PageType::Tour, language).await?;

    let tour_date = TourDateRepo::get_with_fallback(&state.pool, id, language)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TourDate",
            id,
        })?;

    let switch_language = switch_link(|l| tour_date.url_for(l), language);

    Ok(Json(DataResponse {
        data: TourDetailContext {
            page,
            switch_language,
            tour_date,
        },
    }))
}
