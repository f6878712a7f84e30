//! One-shot status messages carried across a redirect
//!
//! Messages live in a signed cookie as a URL-encoded JSON array. A page that
//! renders them removes the cookie. Tampered cookies fail signature checks and
//! read as empty.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::SignedCookieJar;

pub const FLASH_COOKIE: &str = "_flash";

/// Pending messages kept per client. Older ones are dropped first so the
/// cookie stays well below the browser size limit.
pub const MAX_PENDING: usize = 5;

/// Queue a message for the next rendered page.
pub fn push(jar: SignedCookieJar, message: impl Into<String>) -> SignedCookieJar {
    let mut messages = peek(&jar);
    messages.push(message.into());
    if messages.len() > MAX_PENDING {
        messages.drain(..messages.len() - MAX_PENDING);
    }

    let cookie = Cookie::build((FLASH_COOKIE, encode(&messages)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Pending messages, oldest first. Clears them from the jar.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }
    let messages = peek(&jar);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}

/// Queue `message` and redirect to `to`.
pub fn redirect(
    jar: SignedCookieJar,
    message: impl Into<String>,
    to: &str,
) -> (SignedCookieJar, Redirect) {
    (push(jar, message), Redirect::to(to))
}

fn peek(jar: &SignedCookieJar) -> Vec<String> {
    jar.get(FLASH_COOKIE)
        .map(|cookie| decode(cookie.value()))
        .unwrap_or_default()
}

fn encode(messages: &[String]) -> String {
    let json = serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string());
    urlencoding::encode(&json).into_owned()
}

fn decode(value: &str) -> Vec<String> {
    urlencoding::decode(value)
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}
