//! Password registration/login and bearer-token identity.

use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config::settings;
use crate::db::user_repo::{self, NewUser};
use crate::http::{fail, storage_fail};

//////////////////////////////////////////////////
// Data structs
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct CredentialsReq {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64, // user id
    email: String,
    exp: usize,
}

const MIN_PASSWORD_LEN: usize = 6;

//////////////////////////////////////////////////
// Token + hash helpers
//////////////////////////////////////////////////

fn sign_token(user_id: i64, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = (Utc::now() + Duration::days(settings().token_ttl_days)).timestamp().max(0) as usize;
    let claims = Claims {
        sub: user_id,
        email: email.to_owned(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings().jwt_secret.as_bytes()),
    )
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| anyhow::anyhow!("hashing password: {e}"))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

//////////////////////////////////////////////////
// ─────────────  JwtAuth extractor  ─────────────
//////////////////////////////////////////////////

pub mod extractor {
    use super::Claims;
    use actix_web::{
        dev::Payload, error::ErrorUnauthorized, FromRequest, HttpRequest, Result as ActixResult,
    };
    use futures_util::future::{ready, Ready};
    use jsonwebtoken::{decode, DecodingKey, Validation};

    use crate::config::settings;

    /// Extracts and validates a Bearer-JWT, exposing the caller's identity.
    #[derive(Debug, Clone)]
    pub struct JwtAuth {
        pub user_id: i64,
        pub email: String,
    }

    impl FromRequest for JwtAuth {
        type Error = actix_web::Error;
        type Future = Ready<ActixResult<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| {
                // Expect:  Authorization: Bearer <JWT>
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| ErrorUnauthorized("unauthorized"))?;

                let token = hdr
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| ErrorUnauthorized("unauthorized"))?;

                let data = decode::<Claims>(
                    token,
                    &DecodingKey::from_secret(settings().jwt_secret.as_bytes()),
                    &Validation::default(),
                )
                .map_err(|_| ErrorUnauthorized("invalid_token"))?;

                Ok(JwtAuth {
                    user_id: data.claims.sub,
                    email: data.claims.email,
                })
            })();

            ready(res)
        }
    }
}
pub use extractor::JwtAuth;

//////////////////////////////////////////////////
// POST /auth/register
//////////////////////////////////////////////////
#[post("/auth/register")]
pub async fn register(info: web::Json<CredentialsReq>, db: web::Data<SqlitePool>) -> impl Responder {
    let (Some(email), Some(password)) = (info.email.as_deref(), info.password.as_deref()) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };
    if password.len() < MIN_PASSWORD_LEN {
        return fail(StatusCode::BAD_REQUEST, "password_too_short");
    }
    let clean_email = email.trim().to_lowercase();
    if clean_email.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    }

    let password_hash = match hash_password(password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("password hashing failed: {e:#}");
            return fail(StatusCode::INTERNAL_SERVER_ERROR, "server_error");
        }
    };

    let user_id = match user_repo::create_user(&db, &clean_email, &password_hash).await {
        Ok(NewUser::Created(id)) => id,
        Ok(NewUser::EmailTaken) => return fail(StatusCode::BAD_REQUEST, "email_exists"),
        Err(e) => return storage_fail(e),
    };

    match sign_token(user_id, &clean_email) {
        Ok(token) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "token": token })),
        Err(e) => {
            log::error!("token signing failed: {e}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, "server_error")
        }
    }
}

//////////////////////////////////////////////////
// POST /auth/login
//////////////////////////////////////////////////
#[post("/auth/login")]
pub async fn login(info: web::Json<CredentialsReq>, db: web::Data<SqlitePool>) -> impl Responder {
    let (Some(email), Some(password)) = (info.email.as_deref(), info.password.as_deref()) else {
        return fail(StatusCode::BAD_REQUEST, "missing_fields");
    };
    let clean_email = email.trim().to_lowercase();

    let creds = match user_repo::find_credentials(&db, &clean_email).await {
        Ok(Some(c)) => c,
        Ok(None) => return fail(StatusCode::UNAUTHORIZED, "invalid_credentials"),
        Err(e) => return storage_fail(e),
    };

    if !verify_password(password, &creds.password_hash) {
        return fail(StatusCode::UNAUTHORIZED, "invalid_credentials");
    }

    match sign_token(creds.id, &creds.email) {
        Ok(token) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "token": token })),
        Err(e) => {
            log::error!("token signing failed: {e}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, "server_error")
        }
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash));
        assert!(!verify_password("secret2", &hash));
    }

    #[test]
    fn garbage_stored_hash_never_verifies() {
        assert!(!verify_password("secret1", "not-a-phc-string"));
    }
}
