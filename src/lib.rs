//! MAÇIM backend: listings, pitch reservations and chat over SQLite.

pub mod config;
pub mod db;
pub mod http;
pub mod slots;
