//! Flash Message Cookies
//!
//! One-shot status messages carried across a redirect in a cookie: the
//! mutating handler sets it, the next rendered page pops it and clears the
//! cookie. No process-wide state - the message lives only in the cookie
//! between the two requests.

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;

use crate::cookie::{CookieConfig, SameSite, extract_cookie};

/// Cookie name used for flash messages.
pub const FLASH_COOKIE_NAME: &str = "flash";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "error" => Some(FlashLevel::Error),
            _ => None,
        }
    }
}

/// A single flash message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Encode for transport in a cookie value.
    ///
    /// Base64url keeps the payload free of characters that are unsafe in
    /// cookie values (`;`, whitespace, non-ASCII).
    pub fn to_cookie_value(&self) -> String {
        let payload = format!("{}\n{}", self.level.as_str(), self.message);
        URL_SAFE_NO_PAD.encode(payload.as_bytes())
    }

    /// Decode a cookie value. Tampered or truncated values yield `None`;
    /// a broken flash cookie is never worth an error page.
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        let payload = String::from_utf8(bytes).ok()?;
        let (level, message) = payload.split_once('\n')?;

        Some(Self {
            level: FlashLevel::parse(level)?,
            message: message.to_string(),
        })
    }
}

fn flash_cookie_config(secure: bool) -> CookieConfig {
    CookieConfig {
        name: FLASH_COOKIE_NAME.to_string(),
        secure,
        http_only: true,
        same_site: SameSite::Lax,
        path: "/".to_string(),
        max_age_secs: None,
    }
}

/// Build the Set-Cookie header value carrying a flash message.
pub fn set_cookie(flash: &Flash, secure: bool) -> String {
    flash_cookie_config(secure).build_set_cookie(&flash.to_cookie_value())
}

/// Build the Set-Cookie header value that clears the flash cookie.
pub fn clear_cookie() -> String {
    flash_cookie_config(false).build_delete_cookie()
}

/// Read the pending flash message from request headers, if any.
///
/// The caller is responsible for also sending [`clear_cookie`] on the
/// response so the message displays exactly once.
pub fn pop(headers: &HeaderMap) -> Option<Flash> {
    let value = extract_cookie(headers, FLASH_COOKIE_NAME)?;
    Flash::from_cookie_value(&value)
}

/// 303 redirect carrying a flash message for the next page view.
pub fn redirect_with_flash(location: &str, flash: Flash, secure: bool) -> Response {
    let cookie = HeaderValue::from_str(&set_cookie(&flash, secure))
        .unwrap_or_else(|_| HeaderValue::from_static(""));
    let location = HeaderValue::from_str(location).unwrap_or_else(|_| HeaderValue::from_static("/"));

    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location), (header::SET_COOKIE, cookie)],
    )
        .into_response()
}
