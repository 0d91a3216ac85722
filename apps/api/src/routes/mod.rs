pub mod diagnostics;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::polish::handlers as polish;
use crate::state::AppState;
use crate::wins::handlers as wins;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/diagnostics/upstream",
            get(diagnostics::handle_upstream_check),
        )
        // Wins CRUD
        .route(
            "/api/v1/wins",
            get(wins::handle_list_wins).post(wins::handle_create_win),
        )
        .route(
            "/api/v1/wins/:id",
            get(wins::handle_get_win)
                .patch(wins::handle_update_win)
                .delete(wins::handle_delete_win),
        )
        // Polish and export
        .route("/api/v1/wins/:id/polish", post(polish::handle_polish_win))
        .route("/api/v1/polish", post(polish::handle_polish))
        .route("/api/v1/wins/export", post(polish::handle_export_range))
        .route("/api/v1/export", post(polish::handle_export))
        .with_state(state)
}
