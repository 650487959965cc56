//! Defines the HTTP routes for delivery scheduling.

use super::handlers::{
    create_schedule_entry, delete_schedule_entry, get_schedule_config, get_schedule_entries,
    update_schedule_config, update_schedule_entry,
};
use axum::{
    Router,
    routing::{get, put},
};

pub fn schedule_router() -> Router {
    Router::new()
        .route("/", get(get_schedule_config).post(update_schedule_config))
        .route(
            "/entries",
            get(get_schedule_entries).post(create_schedule_entry),
        )
        .route(
            "/entries/{id}",
            put(update_schedule_entry).delete(delete_schedule_entry),
        )
}
