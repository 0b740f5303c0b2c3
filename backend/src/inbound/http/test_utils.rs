//! Shared helpers for HTTP adapter tests.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

/// Session middleware matching the `/api` scope's cookie contract
/// (cookie named `session`) but suitable for the test harness: a fresh
/// key per call and no `Secure` flag, since `actix_web::test` requests
/// travel over plain HTTP.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}
