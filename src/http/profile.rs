//! Caller profile: read and partial update.

use actix_web::{get, http::StatusCode, put, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::user_repo::{self, ProfileUpdate};
use crate::http::auth::JwtAuth;
use crate::http::{fail, storage_fail};

#[derive(Deserialize)]
pub struct UpdateReq {
    pub name: Option<String>,
    pub position: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
    pub avatar: Option<String>, // base64 data url
}

//////////////////////////////////////////////////
// GET /me
//////////////////////////////////////////////////
#[get("/me")]
pub async fn me(auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match user_repo::get_profile(&db, auth.user_id).await {
        Ok(Some(user)) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "user": user }))
        }
        Ok(None) => fail(StatusCode::NOT_FOUND, "not_found"),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// PUT /me
//////////////////////////////////////////////////
#[put("/me")]
pub async fn update_me(
    auth: JwtAuth,
    info: web::Json<UpdateReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    // Blank strings mean "keep the stored value" here, unlike post updates.
    let keep_blank = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let upd = ProfileUpdate {
        name: keep_blank(&info.name),
        position: keep_blank(&info.position),
        city: keep_blank(&info.city),
        age: info.age,
        avatar: info.avatar.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_owned),
    };

    match user_repo::update_profile(&db, auth.user_id, &upd).await {
        Ok(changes) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "changes": changes }))
        }
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(me).service(update_me);
}
