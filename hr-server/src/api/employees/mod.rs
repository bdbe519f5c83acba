//! Employee API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // Dashboards are registered before `/{id}`; static segments win either way
    let stats_routes = Router::new()
        .route("/stats/department", get(handler::department_stats))
        .route("/stats/general", get(handler::general_stats))
        .route("/stats/leaves", get(handler::leave_stats))
        .route("/stats/salary", get(handler::salary_stats));

    let crud_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        );

    stats_routes.merge(crud_routes)
}
