use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use shared::db::repositories::EmployeeRepository;
use shared::{DatabasePool, EmployeeStore};
use std::sync::Arc;
use tower::ServiceBuilder;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod service;

pub use error::ServiceError;
pub use models::ApiResponse;
pub use service::EmployeeService;

pub const API_PREFIX: &str = "/api/v1";

/// Largest request body accepted; bigger ones get a 400 envelope.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: EmployeeService::new(store),
        }
    }

    pub fn from_pool(db_pool: &DatabasePool) -> Self {
        Self::new(Arc::new(EmployeeRepository::new(db_pool.pool())))
    }
}

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        // Liveness only, never touches the database
        .route("/health", get(handlers::health::health_check))
        .route(
            "/employees",
            post(handlers::employees::create_employee)
                .get(handlers::employees::list_employees)
                .delete(handlers::employees::delete_all_employees),
        )
        // Empty id, answered with a 400 envelope
        .route(
            "/employees/",
            get(handlers::employees::missing_employee_id)
                .put(handlers::employees::missing_employee_id)
                .delete(handlers::employees::missing_employee_id),
        )
        .route(
            "/employees/:id",
            get(handlers::employees::get_employee)
                .put(handlers::employees::update_employee)
                .delete(handlers::employees::delete_employee),
        );

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(handlers::employees::unknown_route)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
