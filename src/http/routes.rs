use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::auth::init_routes)
        .configure(http::profile::init_routes)
        .configure(http::players::init_routes)
        .configure(http::matches::init_routes)
        .configure(http::reservations::init_routes)
        .configure(http::messages::init_routes)
        .configure(http::health::init_routes);
}
