//! One-shot notices carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PostUpdated,
}

impl Notice {
    fn key(self) -> &'static str {
        match self {
            Self::PostUpdated => "post_updated",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "post_updated" => Some(Self::PostUpdated),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PostUpdated => "Post updated successfully",
        }
    }
}

pub fn set(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, notice.key()))
            .path("/")
            .http_only(true),
    )
}

/// Reads the pending notice, if any, and clears it so it is shown only once.
/// Only the posts index calls this; post updates always redirect there.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    match jar.get(FLASH_COOKIE).map(|c| Notice::from_key(c.value())) {
        Some(notice) => (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), notice),
        None => (jar, None),
    }
}
