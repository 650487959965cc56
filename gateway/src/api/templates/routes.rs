//! Defines the HTTP routes for template management.

use super::handlers::{
    create_template, delete_template, get_template_by_id, get_templates, update_template,
};
use axum::{Router, routing::get};

pub fn template_router() -> Router {
    Router::new()
        .route("/", get(get_templates).post(create_template))
        .route(
            "/{id}",
            get(get_template_by_id)
                .put(update_template)
                .delete(delete_template),
        )
}
