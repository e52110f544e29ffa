//! Simple liveness / readiness probe

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::SqlitePool;

#[get("/health")]
pub async fn health(db: web::Data<SqlitePool>) -> impl Responder {
    if sqlx::query("SELECT 1").execute(&**db).await.is_err() {
        return HttpResponse::ServiceUnavailable()
            .json(serde_json::json!({ "ok": false, "error": "db" }));
    }
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
