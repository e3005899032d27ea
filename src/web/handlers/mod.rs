pub mod admin;
pub mod api;
pub mod auth;
pub mod downloads;
pub mod spa;

use actix_web::web;

/// Configure all routes EXCEPT static files and the client shell fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    api::configure(cfg);
    downloads::configure(cfg);
    admin::configure(cfg);
}
