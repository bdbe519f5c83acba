//! Payroll API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payroll", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calculate", post(handler::calculate))
        .route("/history", get(handler::history))
        .route("/employee/{employee_id}", get(handler::for_employee))
        .route("/trends", get(handler::trends))
        .route("/stats/monthly", get(handler::monthly_stats))
        .route("/stats/department", get(handler::department_stats))
        .route("/stats/yearly", get(handler::yearly_comparison))
}
