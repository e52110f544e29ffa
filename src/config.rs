//! Runtime configuration for the MAÇIM server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// HS256 signing secret for bearer tokens.
    pub jwt_secret: String,
    /// Token lifetime (days).
    pub token_ttl_days: i64,
}

impl Settings {
    fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set; using insecure development secret");
            "macim_dev_secret".into()
        });

        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(7);

        Settings {
            jwt_secret,
            token_ttl_days,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
