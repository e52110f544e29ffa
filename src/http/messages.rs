//! Direct messages: inbox, thread, send, conversation delete.

use actix_web::{delete, get, http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::message_repo;
use crate::http::auth::JwtAuth;
use crate::http::{fail, storage_fail};

#[derive(Deserialize)]
pub struct SendReq {
    pub receiver_id: Option<i64>,
    pub text: Option<String>,
}

//////////////////////////////////////////////////
// GET /messages/inbox
//////////////////////////////////////////////////
#[get("/messages/inbox")]
pub async fn inbox(auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match message_repo::inbox(&db, auth.user_id).await {
        Ok(rows) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "inbox": rows })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /messages/chat/{other_user_id}
//////////////////////////////////////////////////
#[get("/messages/chat/{other_user_id}")]
pub async fn thread(auth: JwtAuth, path: web::Path<i64>, db: web::Data<SqlitePool>) -> impl Responder {
    let other = path.into_inner();
    if other <= 0 {
        return fail(StatusCode::BAD_REQUEST, "invalid_other_user");
    }

    match message_repo::thread(&db, auth.user_id, other).await {
        Ok(rows) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "messages": rows })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// POST /messages
//////////////////////////////////////////////////
#[post("/messages")]
pub async fn send(
    auth: JwtAuth,
    info: web::Json<SendReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let Some(receiver_id) = info.receiver_id.filter(|id| *id > 0) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };
    let Some(text) = info.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };

    match message_repo::send(&db, auth.user_id, receiver_id, text).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// DELETE /messages/conversation/{other_user_id}
//////////////////////////////////////////////////
#[delete("/messages/conversation/{other_user_id}")]
pub async fn delete_conversation(
    auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let other = path.into_inner();
    if other <= 0 {
        return fail(StatusCode::BAD_REQUEST, "invalid_other_user");
    }

    match message_repo::delete_conversation(&db, auth.user_id, other).await {
        Ok(deleted) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "deleted": deleted }))
        }
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(inbox)
        .service(thread)
        .service(send)
        .service(delete_conversation);
}
