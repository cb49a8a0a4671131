//! Route modules and the public site route table.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod gallery;
pub mod health;
pub mod pages;

/// The public site tree, nested once per language prefix.
///
/// All paths end with a trailing slash; the application fallback redirects
/// the slashless forms.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/band/", get(pages::band))
        .route("/music/", get(pages::music))
        .route("/shop/", get(pages::shop))
        .route("/news/", get(pages::news))
        .route("/news/{id}/", get(pages::news_detail))
        .route("/tour/", get(pages::tour))
        .route("/tour/{id}/", get(pages::tour_detail))
        .route("/gallery/photos/", get(gallery::photos))
        .route("/gallery/photos/{id}/", get(gallery::photo_detail))
        .route("/gallery/videos/", get(gallery::videos))
        .route("/gallery/videos/{id}/", get(gallery::video_detail))
}
