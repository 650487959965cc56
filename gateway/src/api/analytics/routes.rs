//! Defines the HTTP routes for analytics data.

use super::handlers::{
    get_categories, get_newsletters_timeline, get_overview, get_perf, get_reach, get_series,
};
use axum::{Router, routing::get};

pub fn analytics_router() -> Router {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/perf", get(get_perf))
        .route("/series", get(get_series))
        .route("/reach", get(get_reach))
        .route("/categories", get(get_categories))
        .route("/newsletters-timeline", get(get_newsletters_timeline))
}
