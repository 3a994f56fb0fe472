use std::time::{Duration, Instant};

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use dashmap::DashMap;
use uuid::Uuid;

use crate::form::{FormSession, Phase};
use crate::i18n::Language;

pub const SESSION_COOKIE: &str = "feedback_session";

/// In-memory form state, one entry per browser session.
pub struct SessionStore {
    /// session id -> (form, last access)
    entries: DashMap<Uuid, (FormSession, Instant)>,
    default_language: Language,
}

impl SessionStore {
    pub fn new(default_language: Language) -> Self {
        Self {
            entries: DashMap::new(),
            default_language,
        }
    }

    /// Resolve the cookie value to a live session, creating one if needed.
    /// Returns the id and whether it was freshly created.
    pub fn resolve(&self, cookie: Option<&str>) -> (Uuid, bool) {
        if let Some(id) = cookie.and_then(|v| v.parse::<Uuid>().ok()) {
            if let Some(mut entry) = self.entries.get_mut(&id) {
                entry.1 = Instant::now();
                return (id, false);
            }
        }

        let id = Uuid::now_v7();
        self.entries
            .insert(id, (FormSession::new(self.default_language), Instant::now()));
        (id, true)
    }

    /// Resolve the session named by the request cookies. A new session also
    /// sets its cookie on the returned jar.
    pub fn resolve_jar(&self, jar: CookieJar, secure: bool) -> (CookieJar, Uuid) {
        let (id, created) = self.resolve(jar.get(SESSION_COOKIE).map(|c| c.value()));
        if !created {
            return (jar, id);
        }

        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(SameSite::Lax)
            .build();
        (jar.add(cookie), id)
    }

    /// Run `f` against the session under its entry lock. Never hold across an await.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut FormSession) -> R) -> Option<R> {
        let mut entry = self.entries.get_mut(&id)?;
        let (session, last_seen) = entry.value_mut();
        *last_seen = Instant::now();
        Some(f(session))
    }

    /// Snapshot of the session for rendering.
    pub fn get(&self, id: Uuid) -> Option<FormSession> {
        self.entries.get(&id).map(|entry| entry.0.clone())
    }

    pub fn phase(&self, id: Uuid) -> Option<Phase> {
        self.entries.get(&id).map(|entry| entry.0.phase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop sessions idle for longer than `max_age`.
    pub fn cleanup(&self, max_age: Duration) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries
            .retain(|_, (_, last_seen)| now.duration_since(*last_seen) < max_age);
        before.saturating_sub(self.entries.len())
    }
}
