//! Leave API Module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leaves", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/apply", post(handler::apply))
        .route("/employee/{employee_id}", get(handler::list_for_employee))
        .route("/{id}/status", put(handler::update_status))
        .route("/balance/{employee_id}", get(handler::balance))
        .route("/top-takers", get(handler::top_takers))
        .route("/calendar", get(handler::calendar))
}
