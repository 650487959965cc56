//! Defines the HTTP routes for newsletter management.

use super::handlers::{
    create_newsletter, delete_newsletter, get_newsletter_by_id, get_newsletters,
    update_newsletter,
};
use axum::{Router, routing::get};

pub fn newsletter_router() -> Router {
    Router::new()
        .route("/", get(get_newsletters).post(create_newsletter))
        .route(
            "/{id}",
            get(get_newsletter_by_id)
                .put(update_newsletter)
                .delete(delete_newsletter),
        )
}
