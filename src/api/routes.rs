// src/api/routes.rs
use actix_web::web;

use super::handlers;
use super::middleware::auth::TokenValidator;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Authentication routes
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(handlers::auth::register))
            .route("/login", web::post().to(handlers::auth::login))
            // Logout resolves the caller through the AuthContext extractor
            .route("/logout", web::post().to(handlers::auth::logout))
            .route("/status", web::get().to(handlers::auth::check_status)),
    );

    // Password generator (protected by token auth)
    cfg.service(
        web::scope("/generator")
            .wrap(TokenValidator)
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/advanced", web::post().to(handlers::generator::generate_advanced))
            .route("/analysis", web::post().to(handlers::generator::analyze_password)),
    );

    // User listing (protected by token auth)
    cfg.service(
        web::scope("/users")
            .wrap(TokenValidator)
            .route("", web::get().to(handlers::users::list_users)),
    );

    cfg.route("/health", web::get().to(handlers::system::health));
}
