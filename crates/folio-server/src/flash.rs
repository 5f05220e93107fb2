//! One-shot messages carried across a redirect.
//!
//! The message is stored as a short token in a cookie. The next page render
//! reads it, shows the text once, and expires the cookie in the same
//! response.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

pub const FLASH_COOKIE: &str = "folio_flash";

/// Messages that can survive one redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    ContactSent,
}

impl Flash {
    pub fn token(&self) -> &'static str {
        match self {
            Self::ContactSent => "contact-sent",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "contact-sent" => Some(Self::ContactSent),
            _ => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ContactSent => "Thank you for your message! I'll get back to you soon.",
        }
    }

    /// `Set-Cookie` value that stores this flash.
    pub fn set_cookie(&self) -> HeaderValue {
        HeaderValue::from_static(match self {
            Self::ContactSent => "folio_flash=contact-sent; Path=/; HttpOnly; SameSite=Lax; Max-Age=300",
        })
    }

    /// `Set-Cookie` value that expires any stored flash.
    pub fn clear_cookie() -> HeaderValue {
        HeaderValue::from_static("folio_flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    /// Read a pending flash from request cookies.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| Self::from_token(value))
    }
}
