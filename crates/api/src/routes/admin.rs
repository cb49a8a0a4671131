//! Back-office routes: CRUD per content kind, each save followed by the
//! translation seed hook.
//!
//! Every handler requires the shared admin bearer token. Listings return
//! per-language rows with a translation-count aggregate; the image-bearing
//! kinds also carry a rendered thumbnail tag (or `-`).
//!
//! Pages are deliberately limited to list and update: they are singletons,
//! created lazily by the public site and never added or removed here, and
//! their page type is read-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Serialize;

use murasaki_core::error::CoreError;
use murasaki_core::language::Language;
use murasaki_core::thumbnail::thumbnail_tag;
use murasaki_core::types::DbId;
use murasaki_core::validation::{
    validate_gallery_title, validate_image_path, validate_news_title, validate_page_title,
    validate_venue, validate_video_url,
};
use murasaki_db::models::music_release::{
    CreateMusicRelease, MusicReleaseAdminRow, UpdateMusicRelease,
};
use murasaki_db::models::news_item::{CreateNewsItem, NewsItemAdminRow, UpdateNewsItem};
use murasaki_db::models::page::UpdatePage;
use murasaki_db::models::photo::{CreatePhoto, PhotoAdminRow, UpdatePhoto};
use murasaki_db::models::tour_date::{CreateTourDate, UpdateTourDate};
use murasaki_db::models::video::{CreateVideo, UpdateVideo};
use murasaki_db::repositories::{
    MusicReleaseRepo, NewsItemRepo, PageRepo, PhotoRepo, TourDateRepo, VideoRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminToken;
use crate::query::AdminListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Mount all back-office routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages))
        .route("/pages/{id}", put(update_page))
        .route("/news", get(list_news).post(create_news))
        .route("/news/{id}", put(update_news).delete(delete_news))
        .route("/tour-dates", get(list_tour_dates).post(create_tour_date))
        .route(
            "/tour-dates/{id}",
            put(update_tour_date).delete(delete_tour_date),
        )
        .route("/photos", get(list_photos).post(create_photo))
        .route("/photos/{id}", put(update_photo).delete(delete_photo))
        .route("/videos", get(list_videos).post(create_video))
        .route("/videos/{id}", put(update_video).delete(delete_video))
        .route(
            "/music-releases",
            get(list_music_releases).post(create_music_release),
        )
        .route(
            "/music-releases/{id}",
            put(update_music_release).delete(delete_music_release),
        )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a failed per-language update to the right 404: the identity may be
/// entirely unknown, or known but missing the saved language's row.
fn missing_row_error(
    translation_count: i64,
    entity: &'static str,
    id: DbId,
    language: Language,
) -> AppError {
    if translation_count > 0 {
        AppError::Core(CoreError::MissingTranslation {
            entity,
            id,
            language: language.code(),
        })
    } else {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /admin/pages?language=
pub async fn list_pages(
    _admin: AdminToken,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = PageRepo::list_admin(&state.pool, params.language()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// PUT /admin/pages/{id}
///
/// Edits one language's title/intro. The page type is not editable.
pub async fn update_page(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_page_title(title)?;
    }

    let Some(page) = PageRepo::update_translation(&state.pool, id, &input).await? else {
        let count = PageRepo::translation_count(&state.pool, id).await?;
        return Err(missing_row_error(count, "Page", id, input.language));
    };

    let seeded = PageRepo::seed_missing_translation(&state.pool, id, input.language).await?;

    tracing::info!(
        page_id = id,
        language = %input.language,
        seeded,
        "Page updated"
    );

    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// News admin row plus the rendered thumbnail column.
#[derive(Debug, Serialize)]
pub struct NewsAdminEntry {
    #[serde(flatten)]
    pub row: NewsItemAdminRow,
    pub thumbnail: String,
}

/// GET /admin/news?language=
pub async fn list_news(
    _admin: AdminToken,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = NewsItemRepo::list_admin(&state.pool, params.language()).await?;
    let entries: Vec<NewsAdminEntry> = rows
        .into_iter()
        .map(|row| {
            let thumbnail = thumbnail_tag(
                &state.config.media_root,
                &state.config.media_url,
                row.image.as_deref(),
            );
            NewsAdminEntry { row, thumbnail }
        })
        .collect();
    Ok(Json(DataResponse { data: entries }))
}

/// POST /admin/news
pub async fn create_news(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(input): Json<CreateNewsItem>,
) -> AppResult<impl IntoResponse> {
    validate_news_title(&input.title)?;
    if let Some(ref image) = input.image {
        validate_image_path(image)?;
    }

    let item = NewsItemRepo::create(&state.pool, &input).await?;
    let seeded = NewsItemRepo::seed_missing_translation(&state.pool, item.id, input.language).await?;

    tracing::info!(
        news_item_id = item.id,
        language = %input.language,
        seeded,
        "News item created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /admin/news/{id}
pub async fn update_news(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNewsItem>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_news_title(title)?;
    }
    if let Some(ref image) = input.image {
        validate_image_path(image)?;
    }

    let Some(item) = NewsItemRepo::update_translation(&state.pool, id, &input).await? else {
        let count = NewsItemRepo::translation_count(&state.pool, id).await?;
        return Err(missing_row_error(count, "NewsItem", id, input.language));
    };

    let seeded = NewsItemRepo::seed_missing_translation(&state.pool, id, input.language).await?;

    tracing::info!(
        news_item_id = id,
        language = %input.language,
        seeded,
        "News item updated"
    );

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /admin/news/{id}
pub async fn delete_news(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !NewsItemRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "NewsItem",
            id,
        }));
    }

    tracing::info!(news_item_id = id, "News item deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Tour dates
// ---------------------------------------------------------------------------

/// GET /admin/tour-dates?language=
pub async fn list_tour_dates(
    _admin: AdminToken,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = TourDateRepo::list_admin(&state.pool, params.language()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /admin/tour-dates
pub async fn create_tour_date(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(input): Json<CreateTourDate>,
) -> AppResult<impl IntoResponse> {
    validate_news_title(&input.title)?;
    if let Some(ref venue) = input.venue {
        validate_venue(venue)?;
    }

    let tour_date = TourDateRepo::create(&state.pool, &input).await?;
    let seeded =
        TourDateRepo::seed_missing_translation(&state.pool, tour_date.id, input.language).await?;

    tracing::info!(
        tour_date_id = tour_date.id,
        language = %input.language,
        seeded,
        "Tour date created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tour_date })))
}

/// PUT /admin/tour-dates/{id}
pub async fn update_tour_date(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTourDate>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_news_title(title)?;
    }
    if let Some(ref venue) = input.venue {
        validate_venue(venue)?;
    }

    let Some(tour_date) = TourDateRepo::update_translation(&state.pool, id, &input).await? else {
        let count = TourDateRepo::translation_count(&state.pool, id).await?;
        return Err(missing_row_error(count, "TourDate", id, input.language));
    };

    let seeded = TourDateRepo::seed_missing_translation(&state.pool, id, input.language).await?;

    tracing::info!(
        tour_date_id = id,
        language = %input.language,
        seeded,
        "Tour date updated"
    );

    Ok(Json(DataResponse { data: tour_date }))
}

/// DELETE /admin/tour-dates/{id}
pub async fn delete_tour_date(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TourDateRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TourDate",
            id,
        }));
    }

    tracing::info!(tour_date_id = id, "Tour date deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

/// Photo admin row plus the rendered thumbnail column.
#[derive(Debug, Serialize)]
pub struct PhotoAdminEntry {
    #[serde(flatten)]
    pub row: PhotoAdminRow,
    pub thumbnail: String,
}

/// GET /admin/photos?language=
pub async fn list_photos(
    _admin: AdminToken,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = PhotoRepo::list_admin(&state.pool, params.language()).await?;
    let entries: Vec<PhotoAdminEntry> = rows
        .into_iter()
        .map(|row| {
            let thumbnail = thumbnail_tag(
                &state.config.media_root,
                &state.config.media_url,
                Some(&row.image),
            );
            PhotoAdminEntry { row, thumbnail }
        })
        .collect();
    Ok(Json(DataResponse { data: entries }))
}

/// POST /admin/photos
pub async fn create_photo(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(input): Json<CreatePhoto>,
) -> AppResult<impl IntoResponse> {
    validate_gallery_title(&input.title)?;
    validate_image_path(&input.image)?;

    let photo = PhotoRepo::create(&state.pool, &input).await?;
    let seeded = PhotoRepo::seed_missing_translation(&state.pool, photo.id, input.language).await?;

    tracing::info!(
        photo_id = photo.id,
        language = %input.language,
        seeded,
        "Photo created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// PUT /admin/photos/{id}
pub async fn update_photo(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhoto>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_gallery_title(title)?;
    }
    if let Some(ref image) = input.image {
        validate_image_path(image)?;
    }

    let Some(photo) = PhotoRepo::update_translation(&state.pool, id, &input).await? else {
        let count = PhotoRepo::translation_count(&state.pool, id).await?;
        return Err(missing_row_error(count, "Photo", id, input.language));
    };

    let seeded = PhotoRepo::seed_missing_translation(&state.pool, id, input.language).await?;

    tracing::info!(
        photo_id = id,
        language = %input.language,
        seeded,
        "Photo updated"
    );

    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /admin/photos/{id}
pub async fn delete_photo(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PhotoRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }));
    }

    tracing::info!(photo_id = id, "Photo deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

/// GET /admin/videos?language=
pub async fn list_videos(
    _admin: AdminToken,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = VideoRepo::list_admin(&state.pool, params.language()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /admin/videos
pub async fn create_video(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    validate_gallery_title(&input.title)?;
    validate_video_url(&input.video)?;

    let video = VideoRepo::create(&state.pool, &input).await?;
    let seeded = VideoRepo::seed_missing_translation(&state.pool, video.id, input.language).await?;

    tracing::info!(
        video_id = video.id,
        language = %input.language,
        seeded,
        "Video created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// PUT /admin/videos/{id}
pub async fn update_video(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVideo>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_gallery_title(title)?;
    }
    if let Some(ref video) = input.video {
        validate_video_url(video)?;
    }

    let Some(video) = VideoRepo::update_translation(&state.pool, id, &input).await? else {
        let count = VideoRepo::translation_count(&state.pool, id).await?;
        return Err(missing_row_error(count, "Video", id, input.language));
    };

    let seeded = VideoRepo::seed_missing_translation(&state.pool, id, input.language).await?;

    tracing::info!(
        video_id = id,
        language = %input.language,
        seeded,
        "Video updated"
    );

    Ok(Json(DataResponse { data: video }))
}

/// DELETE /admin/videos/{id}
pub async fn delete_video(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !VideoRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Video",
            id,
        }));
    }

    tracing::info!(video_id = id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Music releases
// ---------------------------------------------------------------------------

/// Music release admin row plus the rendered thumbnail column.
#[derive(Debug, Serialize)]
pub struct MusicReleaseAdminEntry {
    #[serde(flatten)]
    pub row: MusicReleaseAdminRow,
    pub thumbnail: String,
}

/// GET /admin/music-releases?language=
pub async fn list_music_releases(
    _admin: AdminToken,
    State(state): State<AppState>,
    Query(params): Query<AdminListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = MusicReleaseRepo::list_admin(&state.pool, params.language()).await?;
    let entries: Vec<MusicReleaseAdminEntry> = rows
        .into_iter()
        .map(|row| {
            let thumbnail = thumbnail_tag(
                &state.config.media_root,
                &state.config.media_url,
                row.image.as_deref(),
            );
            MusicReleaseAdminEntry { row, thumbnail }
        })
        .collect();
    Ok(Json(DataResponse { data: entries }))
}

/// POST /admin/music-releases
pub async fn create_music_release(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(input): Json<CreateMusicRelease>,
) -> AppResult<impl IntoResponse> {
    validate_page_title(&input.title)?;
    if let Some(ref image) = input.image {
        validate_image_path(image)?;
    }

    let release = MusicReleaseRepo::create(&state.pool, &input).await?;
    let seeded =
        MusicReleaseRepo::seed_missing_translation(&state.pool, release.id, input.language).await?;

    tracing::info!(
        music_release_id = release.id,
        language = %input.language,
        seeded,
        "Music release created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: release })))
}

/// PUT /admin/music-releases/{id}
pub async fn update_music_release(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMusicRelease>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_page_title(title)?;
    }
    if let Some(ref image) = input.image {
        validate_image_path(image)?;
    }

    let Some(release) = MusicReleaseRepo::update_translation(&state.pool, id, &input).await? else {
        let count = MusicReleaseRepo::translation_count(&state.pool, id).await?;
        return Err(missing_row_error(count, "MusicRelease", id, input.language));
    };

    let seeded = MusicReleaseRepo::seed_missing_translation(&state.pool, id, input.language).await?;

    tracing::info!(
        music_release_id = id,
        language = %input.language,
        seeded,
        "Music release updated"
    );

    Ok(Json(DataResponse { data: release }))
}

/// DELETE /admin/music-releases/{id}
pub async fn delete_music_release(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !MusicReleaseRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MusicRelease",
            id,
        }));
    }

    tracing::info!(music_release_id = id, "Music release deleted");
    Ok(StatusCode::NO_CONTENT)
}
