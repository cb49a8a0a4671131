//! Handlers for the photo and video gallery routes.
//!
//! Gallery listings have no backing singleton page; their switch-language
//! control is bound to the section path itself.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use murasaki_core::error::CoreError;
use murasaki_core::language::{switch_link, SwitchLanguage};
use murasaki_core::pagination::{
    clamp_page, page_offset, parse_page_param, Paginated, PHOTOS_PAGE_SIZE, VIDEOS_PAGE_SIZE,
};
use murasaki_core::types::DbId;
use murasaki_core::urls::{gallery_path, GallerySection, Routable};
use murasaki_db::models::photo::Photo;
use murasaki_db::models::video::Video;
use murasaki_db::repositories::{PhotoRepo, VideoRepo};

use crate::error::AppResult;
use crate::locale::parse_path_language;
use crate::query::PageParam;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct PhotoListContext {
    switch_language: SwitchLanguage,
    absolute_url: String,
    photos: Paginated<Photo>,
}

#[derive(Debug, Serialize)]
struct PhotoDetailContext {
    switch_language: SwitchLanguage,
    photo: Photo,
}

#[derive(Debug, Serialize)]
struct VideoListContext {
    switch_language: SwitchLanguage,
    absolute_url: String,
    videos: Paginated<Video>,
}

#[derive(Debug, Serialize)]
struct VideoDetailContext {
    switch_language: SwitchLanguage,
    video: Video,
}

/// GET /{lang}/gallery/photos/?page=N
pub async fn photos(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(params): Query<PageParam>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;

    let total = PhotoRepo::count_live(&state.pool, language).await?;
    let page_num = clamp_page(
        parse_page_param(params.page.as_deref()),
        total,
        PHOTOS_PAGE_SIZE,
    );
    let items = PhotoRepo::list_live(
        &state.pool,
        language,
        PHOTOS_PAGE_SIZE,
        page_offset(page_num, PHOTOS_PAGE_SIZE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: PhotoListContext {
            switch_language: switch_link(|l| gallery_path(GallerySection::Photos, l), language),
            absolute_url: gallery_path(GallerySection::Photos, language),
            photos: Paginated::new(items, page_num, PHOTOS_PAGE_SIZE, total),
        },
    }))
}

/// GET /{lang}/gallery/photos/{id}/
pub async fn photo_detail(
    State(state): State<AppState>,
    Path((lang, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;

    let photo = PhotoRepo::get_with_fallback(&state.pool, id, language)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Photo",
            id,
        })?;

    Ok(Json(DataResponse {
        data: PhotoDetailContext {
            switch_language: switch_link(|l| photo.url_for(l), language),
            photo,
        },
    }))
}

/// GET /{lang}/gallery/videos/?page=N
pub async fn videos(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(params): Query<PageParam>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;

    let total = VideoRepo::count_live(&state.pool, language).await?;
    let page_num = clamp_page(
        parse_page_param(params.page.as_deref()),
        total,
        VIDEOS_PAGE_SIZE,
    );
    let items = VideoRepo::list_live(
        &state.pool,
        language,
        VIDEOS_PAGE_SIZE,
        page_offset(page_num, VIDEOS_PAGE_SIZE),
    )
    .await?;

    Ok(Json(DataResponse {
        data: VideoListContext {
            switch_language: switch_link(|l| gallery_path(GallerySection::Videos, l), language),
            absolute_url: gallery_path(GallerySection::Videos, language),
            videos: Paginated::new(items, page_num, VIDEOS_PAGE_SIZE, total),
        },
    }))
}

/// GET /{lang}/gallery/videos/{id}/
pub async fn video_detail(
    State(state): State<AppState>,
    Path((lang, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let language = parse_path_language(&lang)?;

    let video = VideoRepo::get_with_fallback(&state.pool, id, language)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Video",
            id,
        })?;

    Ok(Json(DataResponse {
        data: VideoDetailContext {
            switch_language: switch_link(|l| video.url_for(l), language),
            video,
        },
    }))
}
