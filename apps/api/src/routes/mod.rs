pub mod health;
pub mod resumes;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/resumes",
            get(resumes::list_resumes).post(resumes::create_resume),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::get_resume)
                .put(resumes::update_resume)
                .delete(resumes::delete_resume),
        )
        .with_state(state)
}
