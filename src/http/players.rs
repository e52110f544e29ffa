//! "Looking for a player" listings.

use actix_web::{delete, get, http::StatusCode, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::post_repo;
use crate::http::auth::JwtAuth;
use crate::http::{fail, non_empty, ok, required_if_present, storage_fail};

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct CreateReq {
    pub position: Option<String>,
    pub city: Option<String>,
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReq {
    pub position: Option<String>,
    pub city: Option<String>,
    pub note: Option<String>,
}

//////////////////////////////////////////////////
// POST /players
//////////////////////////////////////////////////
#[post("/players")]
pub async fn create(
    auth: JwtAuth,
    info: web::Json<CreateReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let (Some(position), Some(city)) = (
        non_empty(info.position.as_deref()),
        non_empty(info.city.as_deref()),
    ) else {
        return fail(StatusCode::BAD_REQUEST, "missing");
    };

    match post_repo::create_player_post(&db, auth.user_id, &position, &city, info.note.as_deref())
        .await
    {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /players
//////////////////////////////////////////////////
#[get("/players")]
pub async fn list(_auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match post_repo::list_player_posts(&db).await {
        Ok(posts) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "posts": posts })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /my/player-posts
//////////////////////////////////////////////////
#[get("/my/player-posts")]
pub async fn list_mine(auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match post_repo::list_my_player_posts(&db, auth.user_id).await {
        Ok(posts) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "posts": posts })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// PUT /my/player-posts/{id}
//////////////////////////////////////////////////
#[put("/my/player-posts/{id}")]
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

    let position = match required_if_present(info.position.as_deref(), "position_required") {
        Ok(v) => v,
        Err(code) => return fail(StatusCode::BAD_REQUEST, code),
    };
    let city = match required_if_present(info.city.as_deref(), "city_required") {
        Ok(v) => v,
        Err(code) => return fail(StatusCode::BAD_REQUEST, code),
    };

    match post_repo::update_player_post(
        &db,
        auth.user_id,
        id,
        position.as_deref(),
        city.as_deref(),
        info.note.as_deref(),
    )
    .await
    {
        Ok(0) => fail(StatusCode::NOT_FOUND, "not_found"),
        Ok(_) => ok(),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// DELETE /my/player-posts/{id}
//////////////////////////////////////////////////
#[delete("/my/player-posts/{id}")]
pub async fn remove(auth: JwtAuth, path: web::Path<i64>, db: web::Data<SqlitePool>) -> impl Responder {
    let id = path.into_inner();
    if id <= 0 {
        return fail(StatusCode::BAD_REQUEST, "invalid_id");
    }

    match post_repo::delete_player_post(&db, auth.user_id, id).await {
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
