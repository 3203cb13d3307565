//! API handlers and routing for the bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod middleware;
pub mod openapi;
pub mod response;

use axum::{
    routing::get,
    Router,
};

use crate::{config::CorsConfig, AppState};

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state.clone());

    // Root paths for the frontend, /api/v1 for versioned clients
    let app = Router::new()
        .merge(routes.clone())
        .nest("/api/v1", routes)
        .merge(openapi::create_openapi_router())
        .fallback(middleware::not_found);

    with_middleware(app, &state.config.cors)
}

/// Wrap a router in panic recovery, request logging and CORS (outermost).
pub fn with_middleware(router: Router, cors: &CorsConfig) -> Router {
    router
        .layer(middleware::catch_panic_layer())
        .layer(axum::middleware::from_fn(middleware::log_request))
        .layer(middleware::cors_layer(cors))
}
