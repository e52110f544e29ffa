//! Pitch bookings: availability grid, conflict-safe booking, cancellation,
//! plus the personal agenda entries shown on the profile screen.

use actix_web::{delete, get, http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::db::reservation_repo::{self, BookOutcome, NewReservation};
use crate::http::auth::JwtAuth;
use crate::http::{fail, non_empty, ok, storage_fail};
use crate::slots;

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct CreateReq {
    pub field_id: Option<String>,
    pub field_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub price: Option<i64>,
}

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub field_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct AgendaReq {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub note: Option<String>,
}

//////////////////////////////////////////////////
// POST /reservations
//////////////////////////////////////////////////
#[post("/reservations")]
pub async fn create(
    auth: JwtAuth,
    info: web::Json<CreateReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let (Some(field_id), Some(field_name), Some(date), Some(time)) = (
        non_empty(info.field_id.as_deref()),
        non_empty(info.field_name.as_deref()),
        non_empty(info.date.as_deref()),
        non_empty(info.time.as_deref()),
    ) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };
    let Some(price) = info.price.filter(|p| *p > 0) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };

    let new_res = NewReservation {
        field_id: &field_id,
        field_name: &field_name,
        date: &date,
        time: &time,
        price,
    };

    match reservation_repo::book(&db, auth.user_id, &new_res).await {
        Ok(BookOutcome::Booked(id)) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id }))
        }
        Ok(BookOutcome::SlotTaken) => fail(StatusCode::CONFLICT, "slot_taken"),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /reservations/availability?field_id=&date=
//////////////////////////////////////////////////
#[get("/reservations/availability")]
pub async fn availability(
    _auth: JwtAuth,
    web::Query(params): web::Query<AvailabilityParams>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let (Some(field_id), Some(date)) = (
        non_empty(params.field_id.as_deref()),
        non_empty(params.date.as_deref()),
    ) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };

    let settings = match reservation_repo::field_settings(&db, &field_id).await {
        Ok(s) => s,
        Err(e) => return storage_fail(e),
    };
    let taken = match reservation_repo::taken_times(&db, &field_id, &date).await {
        Ok(t) => t,
        Err(e) => return storage_fail(e),
    };

    HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "field_id": field_id,
        "date": date,
        "open_hour": settings.open_hour,
        "close_hour": settings.close_hour,
        "price": settings.price,
        "slots": slots::hour_slots(settings.open_hour, settings.close_hour),
        "taken": taken,
    }))
}

//////////////////////////////////////////////////
// GET /my/reservations
//////////////////////////////////////////////////
#[get("/my/reservations")]
pub async fn list_mine(auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match reservation_repo::list_mine(&db, auth.user_id).await {
        Ok(rows) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "reservations": rows }))
        }
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// DELETE /my/reservations/{id}
//////////////////////////////////////////////////
#[delete("/my/reservations/{id}")]
pub async fn cancel(auth: JwtAuth, path: web::Path<i64>, db: web::Data<SqlitePool>) -> impl Responder {
    let id = path.into_inner();
    if id <= 0 {
        return fail(StatusCode::BAD_REQUEST, "invalid_id");
    }

    match reservation_repo::cancel(&db, auth.user_id, id).await {
        Ok(0) => fail(StatusCode::NOT_FOUND, "not_found"),
        Ok(_) => ok(),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// POST /profile-reservations
//////////////////////////////////////////////////
#[post("/profile-reservations")]
pub async fn create_agenda(
    auth: JwtAuth,
    info: web::Json<AgendaReq>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let (Some(title), Some(date), Some(time)) = (
        non_empty(info.title.as_deref()),
        non_empty(info.date.as_deref()),
        non_empty(info.time.as_deref()),
    ) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };

    match reservation_repo::create_profile_reservation(
        &db,
        auth.user_id,
        &title,
        &date,
        &time,
        info.note.as_deref(),
    )
    .await
    {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id })),
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// GET /my/profile-reservations
//////////////////////////////////////////////////
#[get("/my/profile-reservations")]
pub async fn list_agenda(auth: JwtAuth, db: web::Data<SqlitePool>) -> impl Responder {
    match reservation_repo::list_profile_reservations(&db, auth.user_id).await {
        Ok(rows) => {
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "reservations": rows }))
        }
        Err(e) => storage_fail(e),
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create)
        .service(availability)
        .service(list_mine)
        .service(cancel)
        .service(create_agenda)
        .service(list_agenda);
}
