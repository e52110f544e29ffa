//! "Looking for a match" listings.

use actix_web::{delete, get, http::StatusCode, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::post_repo::{self, MatchPostUpdate};
use crate::http::auth::JwtAuth;
use crate::http::{fail, non_empty, ok, required_if_present, storage_fail};

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct CreateReq {
    pub city: Option<String>,
    pub field: Option<String>,
    pub match_date: Option<String>,
    pub match_time: Option<String>,
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReq {
    pub city: Option<String>,
    pub field: Option<String>,
    pub match_date: Option<String>,
    pub match_time: Option<String>,
    pub note: Option<String>,
}

//////////////////////////////////////////////////
// POST /matches
//////////////////////////////////////////////////
#[post("/matches")]
pub async fn create(
    auth: JwtAuth,
    info: web::Json<CreateReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let (Some(city), Some(field), Some(match_date), Some(match_time)) = (
        non_empty(info.city.as_deref()),
        non_empty(info.field.as_deref()),
        non_empty(info.match_date.as_deref()),
        non_empty(info.match_time.as_deref()),
    ) else {
        return fail(StatusCode::BAD_REQUEST, "missing");
    };

    match post_repo::create_match_post(
        &db,
        auth.user_id,
        &city,
        &field,
        &match_date,
        &match_time,
        info.note.as_deref(),
    )
    .await
    {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /matches
//////////////////////////////////////////////////
#[get("/matches")]
pub async fn list(_auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match post_repo::list_match_posts(&db).await {
        Ok(matches) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "matches": matches }))
        }
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /my/match-posts
//////////////////////////////////////////////////
#[get("/my/match-posts")]
pub async fn list_mine(auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match post_repo::list_my_match_posts(&db, auth.user_id).await {
        Ok(matches) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "matches": matches }))
        }
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// PUT /my/match-posts/{id}
//////////////////////////////////////////////////
#[put("/my/match-posts/{id}")]
pub async fn update(
    auth: JwtAuth,
    path: web::Path<i64>,
    info: web::Json<UpdateReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let id = path.into_inner();
    if id <= 0 {
        return fail(StatusCode::BAD_REQUEST, "invalid_id");
    }

    // A provided-but-blank required field is a client error; absent keeps.
    let city = match required_if_present(info.city.as_deref(), "city_required") {
        Ok(v) => v,
        Err(code) => return fail(StatusCode::BAD_REQUEST, code),
    };
    let field = match required_if_present(info.field.as_deref(), "field_required") {
        Ok(v) => v,
        Err(code) => return fail(StatusCode::BAD_REQUEST, code),
    };
    let match_date = match required_if_present(info.match_date.as_deref(), "match_date_required") {
        Ok(v) => v,
        Err(code) => return fail(StatusCode::BAD_REQUEST, code),
    };
    let match_time = match required_if_present(info.match_time.as_deref(), "match_time_required") {
        Ok(v) => v,
        Err(code) => return fail(StatusCode::BAD_REQUEST, code),
    };

    let upd = MatchPostUpdate {
        city,
        field,
        match_date,
        match_time,
        note: info.note.clone(),
    };

    match post_repo::update_match_post(&db, auth.user_id, id, &upd).await {
        Ok(0) => fail(StatusCode::NOT_FOUND, "not_found"),
        Ok(_) => ok(),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// DELETE /my/match-posts/{id}
//////////////////////////////////////////////////
#[delete("/my/match-posts/{id}")]
pub async fn remove(auth: JwtAuth, path: web::Path<i64>, db: web::Data<SqlitePool>) -> impl Responder {
    let id = path.into_inner();
    if id <= 0 {
        return fail(StatusCode::BAD_REQUEST, "invalid_id");
    }

    match post_repo::delete_match_post(&db, auth.user_id, id).await {
        Ok(0) => fail(StatusCode::NOT_FOUND, "not_found"),
        Ok(_) => ok(),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create)
        .service(list)
        .service(list_mine)
        .service(update)
        .service(remove);
}
